use std::collections::HashSet;

use geo_types::{Coord, LineString, Point, Polygon};

use crate::api::reference::BngReference;
use crate::core::constants::BNG_BOUNDS;
use crate::core::grid::{grid_shape, snap_to_grid};
use crate::core::resolution::Resolution;
use crate::util::coord::Coordinate;
use crate::util::error::BngError;

/// Anchor positions within a grid square.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CellPosition {
    LowerLeft,
    LowerRight,
    UpperLeft,
    UpperRight,
    Centre,
}

/// Indexes an easting/northing pair into the BNG at the given resolution.
///
/// Squares are half-open on both axes, so a coordinate exactly on a
/// boundary indexes into the square above/right of it.
///
/// # Example
/// ```
/// use osbng_rs::{xy_to_bng, Resolution};
///
/// # fn main() -> Result<(), osbng_rs::BngError> {
/// let bng_ref = xy_to_bng(&(437289.0, 115541.0), Resolution::M100)?;
/// assert_eq!(bng_ref.to_formatted(), "SU 372 155");
/// # Ok(())
/// # }
/// ```
pub fn xy_to_bng<C: Coordinate>(
    coord: &C,
    resolution: Resolution,
) -> Result<BngReference, BngError> {
    let (x, y) = (coord.x(), coord.y());
    let in_extent = x >= BNG_BOUNDS[0] as f64
        && x < BNG_BOUNDS[2] as f64
        && y >= BNG_BOUNDS[1] as f64
        && y < BNG_BOUNDS[3] as f64;
    if !in_extent {
        return Err(BngError::Index(format!(
            "easting {} and northing {} must satisfy 0 <= easting < 700000 and 0 <= northing < 1300000",
            x, y
        )));
    }
    BngReference::from_origin(
        snap_to_grid(x, resolution.metres()),
        snap_to_grid(y, resolution.metres()),
        resolution,
    )
}

/// Returns the coordinates of a grid square at the requested position.
pub fn bng_to_xy(bng_ref: &BngReference, position: CellPosition) -> Point<f64> {
    let (easting0, northing0) = bng_ref.origin();
    let (e, n) = (easting0 as f64, northing0 as f64);
    let metres = bng_ref.resolution_metres() as f64;
    match position {
        CellPosition::LowerLeft => Point::new(e, n),
        CellPosition::LowerRight => Point::new(e + metres, n),
        CellPosition::UpperLeft => Point::new(e, n + metres),
        CellPosition::UpperRight => Point::new(e + metres, n + metres),
        CellPosition::Centre => Point::new(e + metres / 2.0, n + metres / 2.0),
    }
}

/// Bounding box `(min_x, min_y, max_x, max_y)` of a grid square in metres.
pub fn bng_to_bbox(bng_ref: &BngReference) -> (f64, f64, f64, f64) {
    let (easting0, northing0) = bng_ref.origin();
    let metres = bng_ref.resolution_metres();
    (
        easting0 as f64,
        northing0 as f64,
        (easting0 + metres) as f64,
        (northing0 + metres) as f64,
    )
}

/// Grid square polygon for geometry consumers: a closed five-coordinate
/// exterior ring wound anticlockwise from the lower-left corner.
pub fn bng_to_grid_geom(bng_ref: &BngReference) -> Polygon<f64> {
    let (min_x, min_y, max_x, max_y) = bng_to_bbox(bng_ref);
    let coords = vec![
        Coord { x: min_x, y: min_y },
        Coord { x: max_x, y: min_y },
        Coord { x: max_x, y: max_y },
        Coord { x: min_x, y: max_y },
        Coord { x: min_x, y: min_y },
    ];
    Polygon::new(LineString::from(coords), vec![])
}

/// All grid squares intersecting a bounding box at the given resolution,
/// row-major from the south-west, clipped to the BNG extent.
///
/// The box is treated as half-open: squares only touching it along its
/// maximum edges are not returned.
pub fn bbox_to_bng(
    min_x: f64,
    min_y: f64,
    max_x: f64,
    max_y: f64,
    resolution: Resolution,
) -> Result<Vec<BngReference>, BngError> {
    if !(min_x <= max_x && min_y <= max_y) {
        return Err(BngError::Index(format!(
            "invalid bbox ({}, {}, {}, {}): min must not exceed max",
            min_x, min_y, max_x, max_y
        )));
    }
    let metres = resolution.metres();
    let e_start = snap_to_grid(min_x.max(BNG_BOUNDS[0] as f64), metres);
    let n_start = snap_to_grid(min_y.max(BNG_BOUNDS[1] as f64), metres);

    let mut refs = Vec::new();
    let mut northing = n_start;
    while (northing as f64) < max_y && northing + metres <= BNG_BOUNDS[3] {
        let mut easting = e_start;
        while (easting as f64) < max_x && easting + metres <= BNG_BOUNDS[2] {
            refs.push(BngReference::from_origin(easting, northing, resolution)?);
            easting += metres;
        }
        northing += metres;
    }
    Ok(refs)
}

/// Indexes a caller-supplied sampling of coordinates, deduplicating while
/// preserving first-seen order.
///
/// This is the ingestion half of the geometry boundary: an external
/// geometry engine samples its shape and hands the points over; any point
/// outside the extent fails the whole call.
pub fn points_to_bng<C: Coordinate>(
    points: impl IntoIterator<Item = C>,
    resolution: Resolution,
) -> Result<Vec<BngReference>, BngError> {
    let mut seen = HashSet::new();
    let mut refs = Vec::new();
    for point in points {
        let bng_ref = xy_to_bng(&point, resolution)?;
        if seen.insert(bng_ref) {
            refs.push(bng_ref);
        }
    }
    Ok(refs)
}

/// The grid square at `(row, col)`, counting from the south-west corner of
/// the extent.
///
/// Together with [`grid_shape`] this lets an external enumerator walk the
/// whole grid lazily without the crate owning any iteration state.
pub fn cell_at(row: i64, col: i64, resolution: Resolution) -> Result<BngReference, BngError> {
    let (rows, cols) = grid_shape(resolution);
    if row < 0 || col < 0 || row >= rows || col >= cols {
        return Err(BngError::Index(format!(
            "(row {}, col {}) is outside the {} x {} grid at {}",
            row, col, rows, cols, resolution
        )));
    }
    BngReference::from_origin(col * resolution.metres(), row * resolution.metres(), resolution)
}
