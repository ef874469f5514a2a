use crate::core::constants::BNG_BOUNDS;
use crate::core::resolution::Resolution;

/// Number of `(rows, cols)` the BNG extent spans at a resolution.
///
/// Rows run south to north, columns west to east. Every supported
/// resolution divides the extent exactly.
pub fn grid_shape(resolution: Resolution) -> (i64, i64) {
    (
        BNG_BOUNDS[3] / resolution.metres(),
        BNG_BOUNDS[2] / resolution.metres(),
    )
}

/// True when a square with the given lower-left origin and size lies fully
/// inside the BNG extent.
pub(crate) fn origin_in_extent(easting: i64, northing: i64, metres: i64) -> bool {
    easting >= BNG_BOUNDS[0]
        && northing >= BNG_BOUNDS[1]
        && easting + metres <= BNG_BOUNDS[2]
        && northing + metres <= BNG_BOUNDS[3]
}

/// Floors a coordinate onto the grid at the given square size.
///
/// Squares are half-open on both axes, so a coordinate exactly on a
/// boundary belongs to the square above/right of it.
pub(crate) fn snap_to_grid(value: f64, metres: i64) -> i64 {
    (value / metres as f64).floor() as i64 * metres
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_grid_shape() {
        assert_eq!(grid_shape(Resolution::Km100), (13, 7));
        assert_eq!(grid_shape(Resolution::Km50), (26, 14));
        assert_eq!(grid_shape(Resolution::Km1), (1300, 700));
        assert_eq!(grid_shape(Resolution::M1), (1_300_000, 700_000));
    }

    #[test]
    fn test_origin_in_extent() {
        assert!(origin_in_extent(0, 0, 100_000));
        assert!(origin_in_extent(600_000, 1_200_000, 100_000));
        assert!(!origin_in_extent(700_000, 0, 100_000));
        assert!(!origin_in_extent(0, 1_300_000, 1));
        assert!(!origin_in_extent(-1_000, 0, 1_000));
    }

    #[test]
    fn test_snap_to_grid() {
        assert_eq!(snap_to_grid(437289.0, 100), 437200);
        assert_eq!(snap_to_grid(437289.0, 100_000), 400_000);
        // Boundary coordinates snap to the square they open.
        assert_eq!(snap_to_grid(437200.0, 100), 437200);
        assert_eq!(snap_to_grid(437199.999, 100), 437100);
        assert_eq!(snap_to_grid(-0.5, 1_000), -1_000);
    }
}
