/// BNG index system extent [min_x, min_y, max_x, max_y] in metres.
///
/// Eastings and northings are valid on the half-open ranges
/// `0 <= easting < 700000` and `0 <= northing < 1300000`.
pub const BNG_BOUNDS: [i64; 4] = [0, 0, 700_000, 1_300_000];

/// 100km grid square size in metres.
pub(crate) const SQUARE_100KM: i64 = 100_000;

/// 500km letter block size in metres.
pub(crate) const BLOCK_500KM: i64 = 500_000;

/// The 25-symbol grid alphabet, row-major from the north-west corner of a
/// 5x5 block. `I` is skipped.
pub(crate) const GRID_ALPHABET: &[u8; 25] = b"ABCDEFGHJKLMNOPQRSTUVWXYZ";

/// Quadrant suffixes indexed by (north_half << 1) | east_half.
pub(crate) const QUADRANTS: [&str; 4] = ["SW", "SE", "NW", "NE"];
