use crate::core::constants::{BLOCK_500KM, BNG_BOUNDS, GRID_ALPHABET, SQUARE_100KM};
use crate::util::error::BngError;

/// A named 500km x 500km letter block contributing one first-letter prefix.
///
/// Blocks are searched in declaration order when resolving numeric offsets.
/// They never overlap, so an offset resolves to at most one letter pair,
/// and offsets in a gap between blocks have no encoding.
#[derive(Debug, Clone, Copy)]
pub(crate) struct LetterBlock {
    pub name: &'static str,
    pub prefix: u8,
    /// Lower-left corner of the block in metres.
    pub easting_origin: i64,
    pub northing_origin: i64,
}

/// The letter blocks covering the BNG extent, south-west first.
pub(crate) const LETTER_BLOCKS: [LetterBlock; 6] = [
    LetterBlock {
        name: "south-west",
        prefix: b'S',
        easting_origin: 0,
        northing_origin: 0,
    },
    LetterBlock {
        name: "south-east",
        prefix: b'T',
        easting_origin: 500_000,
        northing_origin: 0,
    },
    LetterBlock {
        name: "mid-west",
        prefix: b'N',
        easting_origin: 0,
        northing_origin: 500_000,
    },
    LetterBlock {
        name: "mid-east",
        prefix: b'O',
        easting_origin: 500_000,
        northing_origin: 500_000,
    },
    LetterBlock {
        name: "north-west",
        prefix: b'H',
        easting_origin: 0,
        northing_origin: 1_000_000,
    },
    LetterBlock {
        name: "north-east",
        prefix: b'J',
        easting_origin: 500_000,
        northing_origin: 1_000_000,
    },
];

/// True when the 100km square indices fall inside the BNG extent.
fn square_in_extent(e100: i64, n100: i64) -> bool {
    e100 >= 0
        && n100 >= 0
        && e100 * SQUARE_100KM < BNG_BOUNDS[2]
        && n100 * SQUARE_100KM < BNG_BOUNDS[3]
}

/// Alphabet index for a column/row within a 5x5 block, rows counted from
/// the south.
fn alphabet_index(col: i64, row_from_south: i64) -> usize {
    ((4 - row_from_south) * 5 + col) as usize
}

/// Letter pair for an in-extent 100km square, or `None` when the square
/// falls outside every block.
pub(crate) fn letters_for_square(e100: i64, n100: i64) -> Option<[u8; 2]> {
    let easting = e100 * SQUARE_100KM;
    let northing = n100 * SQUARE_100KM;
    let block = LETTER_BLOCKS.iter().find(|b| {
        easting >= b.easting_origin
            && easting < b.easting_origin + BLOCK_500KM
            && northing >= b.northing_origin
            && northing < b.northing_origin + BLOCK_500KM
    })?;
    let col = (easting - block.easting_origin) / SQUARE_100KM;
    let row = (northing - block.northing_origin) / SQUARE_100KM;
    Some([block.prefix, GRID_ALPHABET[alphabet_index(col, row)]])
}

/// Encodes a pair of 100km square indices as a two-letter prefix string.
pub fn offset_to_letters(e100: i64, n100: i64) -> Result<String, BngError> {
    if !square_in_extent(e100, n100) {
        return Err(BngError::Index(format!(
            "100km square ({}, {}) is outside the BNG extent",
            e100, n100
        )));
    }
    let letters = letters_for_square(e100, n100).ok_or_else(|| {
        BngError::Index(format!(
            "100km square ({}, {}) falls in a gap between letter blocks",
            e100, n100
        ))
    })?;
    Ok(String::from_utf8_lossy(&letters).into_owned())
}

/// Decodes a two-letter prefix to a pair of 100km square indices.
pub fn letters_to_offset(letters: &str) -> Result<(i64, i64), BngError> {
    let bytes = letters.as_bytes();
    if bytes.len() != 2 {
        return Err(BngError::Reference(format!(
            "'{}' is not a two-letter 100km square prefix",
            letters
        )));
    }
    decode_letter_pair([
        bytes[0].to_ascii_uppercase(),
        bytes[1].to_ascii_uppercase(),
    ])
}

/// Decodes an upper-cased letter pair against the block table.
pub(crate) fn decode_letter_pair(letters: [u8; 2]) -> Result<(i64, i64), BngError> {
    let block = LETTER_BLOCKS
        .iter()
        .find(|b| b.prefix == letters[0])
        .ok_or_else(|| {
            BngError::Reference(format!(
                "'{}' is not a valid BNG prefix letter",
                letters[0] as char
            ))
        })?;
    let pos = GRID_ALPHABET
        .iter()
        .position(|&c| c == letters[1])
        .ok_or_else(|| {
            BngError::Reference(format!(
                "'{}' is not in the BNG grid alphabet",
                letters[1] as char
            ))
        })?;
    let col = (pos % 5) as i64;
    let row_from_south = 4 - (pos / 5) as i64;
    let e100 = block.easting_origin / SQUARE_100KM + col;
    let n100 = block.northing_origin / SQUARE_100KM + row_from_south;
    if !square_in_extent(e100, n100) {
        return Err(BngError::Reference(format!(
            "100km square '{}{}' lies outside the BNG extent",
            letters[0] as char, letters[1] as char
        )));
    }
    Ok((e100, n100))
}
