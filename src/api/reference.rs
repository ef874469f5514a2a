use std::fmt;
use std::str::FromStr;

use serde::de::Error as _;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::core::constants::{QUADRANTS, SQUARE_100KM};
use crate::core::grid::origin_in_extent;
use crate::core::letters::{decode_letter_pair, letters_for_square};
use crate::core::resolution::Resolution;
use crate::util::error::BngError;

/// A British National Grid reference identifying one grid square.
///
/// Holds the square's resolution and the easting/northing of its
/// lower-left corner in metres; the reference string and any quadrant
/// suffix are derived on demand. Values are immutable, `Copy`, and compare
/// by `(resolution, easting, northing)`. A reference outside the BNG
/// extent can never be constructed.
///
/// # Example
/// ```
/// use osbng_rs::BngReference;
///
/// # fn main() -> Result<(), osbng_rs::BngError> {
/// let bng_ref: BngReference = "TL 63 SW".parse()?;
/// assert_eq!(bng_ref.resolution().label(), "500m");
/// assert_eq!(bng_ref.to_compact(), "TL63SW");
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct BngReference {
    resolution: Resolution,
    easting0: i64,
    northing0: i64,
}

impl BngReference {
    /// Parses a reference string in compact or spaced form.
    ///
    /// Whitespace is ignored and letters are case-insensitive. The grammar
    /// is two prefix letters, then 0-5 digits per axis in two equal-length
    /// groups, then an optional NE/SE/SW/NW quadrant suffix (not valid
    /// after five digit pairs).
    pub fn parse(bng_ref_string: &str) -> Result<Self, BngError> {
        let compact: Vec<u8> = bng_ref_string
            .bytes()
            .filter(|b| !b.is_ascii_whitespace())
            .map(|b| b.to_ascii_uppercase())
            .collect();

        if compact.len() < 2 {
            return Err(BngError::Reference(format!(
                "'{}' is too short to contain a two-letter 100km square prefix",
                bng_ref_string
            )));
        }
        let (e100, n100) = decode_letter_pair([compact[0], compact[1]])?;

        let mut rest = &compact[2..];
        let mut quadrant: Option<usize> = None;
        if rest.len() >= 2 {
            let tail = &rest[rest.len() - 2..];
            if let Some(q) = QUADRANTS.iter().position(|s| s.as_bytes() == tail) {
                quadrant = Some(q);
                rest = &rest[..rest.len() - 2];
            }
        }

        if !rest.iter().all(|b| b.is_ascii_digit()) {
            return Err(BngError::Reference(format!(
                "'{}' contains unexpected characters after the 100km square prefix",
                bng_ref_string
            )));
        }
        if rest.len() % 2 != 0 {
            return Err(BngError::Reference(format!(
                "'{}' has an odd digit count; easting and northing groups must be equal length",
                bng_ref_string
            )));
        }
        let pairs = rest.len() / 2;
        if pairs > 5 {
            return Err(BngError::Reference(format!(
                "'{}' has more than five digits per axis",
                bng_ref_string
            )));
        }

        let standard = Resolution::STANDARD[pairs];
        let resolution = match quadrant {
            Some(_) => standard.finer().ok_or_else(|| {
                BngError::Reference(format!(
                    "'{}' carries a quadrant suffix at 1m resolution",
                    bng_ref_string
                ))
            })?,
            None => standard,
        };

        let (east_digits, north_digits) = rest.split_at(pairs);
        let mut easting0 = e100 * SQUARE_100KM + digits_value(east_digits) * standard.metres();
        let mut northing0 = n100 * SQUARE_100KM + digits_value(north_digits) * standard.metres();
        if let Some(q) = quadrant {
            let half = standard.metres() / 2;
            if q & 1 == 1 {
                easting0 += half;
            }
            if q & 2 == 2 {
                northing0 += half;
            }
        }

        Self::from_origin(easting0, northing0, resolution)
    }

    /// Builds a reference from a lower-left origin in metres.
    ///
    /// The origin must be aligned to the resolution's grid and the square
    /// must lie inside the BNG extent.
    pub(crate) fn from_origin(
        easting0: i64,
        northing0: i64,
        resolution: Resolution,
    ) -> Result<Self, BngError> {
        let metres = resolution.metres();
        if easting0 % metres != 0 || northing0 % metres != 0 {
            return Err(BngError::Index(format!(
                "origin ({}, {}) is not aligned to the {} grid",
                easting0, northing0, resolution
            )));
        }
        if !origin_in_extent(easting0, northing0, metres) {
            return Err(BngError::Index(format!(
                "the {} square at ({}, {}) is outside the BNG extent",
                resolution, easting0, northing0
            )));
        }
        Ok(Self {
            resolution,
            easting0,
            northing0,
        })
    }

    /// Offsets by whole squares, returning `None` at the edge of the extent.
    pub(crate) fn offset(&self, dx: i64, dy: i64) -> Option<Self> {
        let metres = self.resolution.metres();
        let easting0 = self.easting0 + dx * metres;
        let northing0 = self.northing0 + dy * metres;
        origin_in_extent(easting0, northing0, metres).then_some(Self {
            resolution: self.resolution,
            easting0,
            northing0,
        })
    }

    /// The square's resolution.
    pub fn resolution(&self) -> Resolution {
        self.resolution
    }

    /// The square's size in metres.
    pub fn resolution_metres(&self) -> i64 {
        self.resolution.metres()
    }

    /// The easting/northing of the square's lower-left corner in metres.
    pub fn origin(&self) -> (i64, i64) {
        (self.easting0, self.northing0)
    }

    /// The quadrant suffix for quadtree resolutions, `None` otherwise.
    pub fn quadrant(&self) -> Option<&'static str> {
        if !self.resolution.is_quadtree() {
            return None;
        }
        let parent = self.resolution.parent_standard().metres();
        let east = (self.easting0 % parent != 0) as usize;
        let north = (self.northing0 % parent != 0) as usize;
        Some(QUADRANTS[(north << 1) | east])
    }

    /// The two-letter 100km square prefix.
    pub fn letters(&self) -> String {
        let letters = letters_for_square(self.easting0 / SQUARE_100KM, self.northing0 / SQUARE_100KM);
        debug_assert!(letters.is_some(), "in-extent square has no letters");
        String::from_utf8_lossy(&letters.unwrap_or(*b"??")).into_owned()
    }

    /// The east/north digit groups at this resolution.
    fn digit_groups(&self) -> (String, String) {
        let digits = self.resolution.digits();
        if digits == 0 {
            return (String::new(), String::new());
        }
        let unit = self.resolution.parent_standard().metres();
        let east = (self.easting0 % SQUARE_100KM) / unit;
        let north = (self.northing0 % SQUARE_100KM) / unit;
        (
            format!("{:0width$}", east, width = digits),
            format!("{:0width$}", north, width = digits),
        )
    }

    /// The compact reference string, e.g. `"TL63SW"`.
    pub fn to_compact(&self) -> String {
        let (east, north) = self.digit_groups();
        let mut out = self.letters();
        out.push_str(&east);
        out.push_str(&north);
        if let Some(q) = self.quadrant() {
            out.push_str(q);
        }
        out
    }

    /// The canonical spaced form, e.g. `"TL 63 SW"`.
    pub fn to_formatted(&self) -> String {
        let (east, north) = self.digit_groups();
        let mut parts = vec![self.letters()];
        if !east.is_empty() {
            parts.push(east);
            parts.push(north);
        }
        if let Some(q) = self.quadrant() {
            parts.push(q.to_string());
        }
        parts.join(" ")
    }
}

/// Validates a BNG reference string without constructing a reference.
///
/// # Example
/// ```
/// use osbng_rs::is_valid_bng;
///
/// assert!(is_valid_bng("TQ12"));
/// assert!(!is_valid_bng("TQ123"));
/// ```
pub fn is_valid_bng(bng_ref_string: &str) -> bool {
    BngReference::parse(bng_ref_string).is_ok()
}

impl fmt::Display for BngReference {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_formatted())
    }
}

impl FromStr for BngReference {
    type Err = BngError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl Serialize for BngReference {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.to_compact())
    }
}

impl<'de> Deserialize<'de> for BngReference {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        BngReference::parse(&s).map_err(D::Error::custom)
    }
}

fn digits_value(digits: &[u8]) -> i64 {
    digits
        .iter()
        .fold(0i64, |acc, b| acc * 10 + (b - b'0') as i64)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_100km() -> Result<(), BngError> {
        let bng_ref = BngReference::parse("SU")?;
        assert_eq!(bng_ref.resolution(), Resolution::Km100);
        assert_eq!(bng_ref.origin(), (400_000, 100_000));
        assert_eq!(bng_ref.quadrant(), None);
        assert_eq!(bng_ref.to_formatted(), "SU");
        Ok(())
    }

    #[test]
    fn test_parse_standard_resolutions() -> Result<(), BngError> {
        let cases = [
            ("SU36", Resolution::Km10, (430_000, 160_000)),
            ("SE1822", Resolution::Km1, (418_000, 422_000)),
            ("SU372155", Resolution::M100, (437_200, 115_500)),
            ("SU37211550", Resolution::M10, (437_210, 115_500)),
            ("SU3721315503", Resolution::M1, (437_213, 115_503)),
        ];
        for (s, resolution, origin) in cases {
            let bng_ref = BngReference::parse(s)?;
            assert_eq!(bng_ref.resolution(), resolution, "{}", s);
            assert_eq!(bng_ref.origin(), origin, "{}", s);
            assert_eq!(bng_ref.to_compact(), s);
        }
        Ok(())
    }

    #[test]
    fn test_parse_quadtree_resolutions() -> Result<(), BngError> {
        let sw = BngReference::parse("SUSW")?;
        assert_eq!(sw.resolution(), Resolution::Km50);
        assert_eq!(sw.origin(), (400_000, 100_000));
        assert_eq!(sw.quadrant(), Some("SW"));

        let ne = BngReference::parse("SU NE")?;
        assert_eq!(ne.origin(), (450_000, 150_000));

        let half_km = BngReference::parse("TL63SW")?;
        assert_eq!(half_km.resolution(), Resolution::M500);
        // TL is (500km, 200km); digits 6/3 give the 1km square, SW its quadrant.
        assert_eq!(half_km.origin(), (506_000, 203_000));
        assert_eq!(half_km.to_formatted(), "TL 63 SW");
        Ok(())
    }

    #[test]
    fn test_parse_is_whitespace_and_case_insensitive() -> Result<(), BngError> {
        let spaced = BngReference::parse("su 372 155")?;
        let compact = BngReference::parse("SU372155")?;
        assert_eq!(spaced, compact);
        assert_eq!(spaced.to_formatted(), "SU 372 155");
        Ok(())
    }

    #[test]
    fn test_round_trip_format_parse() -> Result<(), BngError> {
        for s in [
            "SV", "HP", "SUNE", "TQ38", "SU3 6NE", "SE1822", "TL63SW", "SU372155", "SU37211550",
            "SP51063370SE", "SU3721315503",
        ] {
            let bng_ref = BngReference::parse(s)?;
            assert_eq!(BngReference::parse(&bng_ref.to_formatted())?, bng_ref);
            assert_eq!(BngReference::parse(&bng_ref.to_compact())?, bng_ref);
        }
        Ok(())
    }

    #[test]
    fn test_parse_rejects_malformed_strings() {
        for s in [
            "",
            "S",
            "SU123",          // odd digit count
            "SU123456789012", // more than five pairs
            "SU12a34",
            "SU1234NN",         // not a quadrant
            "SU3721315503NE",   // quadrant below 1m
            "IB12",             // reserved letter
            "AA",               // gap between blocks
            "TN",               // beyond the extent
        ] {
            assert!(
                matches!(BngReference::parse(s), Err(BngError::Reference(_))),
                "expected reference error for '{}'",
                s
            );
        }
    }

    #[test]
    fn test_equality_and_hash_by_value() -> Result<(), BngError> {
        use std::collections::HashSet;

        let a = BngReference::parse("SE1822")?;
        let b = BngReference::parse("SE 18 22")?;
        assert_eq!(a, b);

        let mut set = HashSet::new();
        set.insert(a);
        set.insert(b);
        assert_eq!(set.len(), 1);
        Ok(())
    }

    #[test]
    fn test_serde_round_trip() -> Result<(), BngError> {
        let bng_ref = BngReference::parse("TL63SW")?;
        let json = serde_json::to_string(&bng_ref).unwrap();
        assert_eq!(json, "\"TL63SW\"");
        let back: BngReference = serde_json::from_str(&json).unwrap();
        assert_eq!(back, bng_ref);
        assert!(serde_json::from_str::<BngReference>("\"TN\"").is_err());
        Ok(())
    }
}
