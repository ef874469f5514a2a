use crate::api::indexing::{bng_to_bbox, bng_to_xy, CellPosition};
use crate::api::reference::BngReference;
use crate::util::error::BngError;

/// The up-to-four squares sharing an edge with a reference, in
/// north, east, south, west order and truncated at the extent.
pub fn bng_neighbours(bng_ref: &BngReference) -> Vec<BngReference> {
    [(0, 1), (1, 0), (0, -1), (-1, 0)]
        .into_iter()
        .filter_map(|(dx, dy)| bng_ref.offset(dx, dy))
        .collect()
}

/// True when two same-resolution references share an edge, i.e. their
/// lattice Manhattan distance is exactly 1. Diagonally touching squares
/// are not neighbours, and a reference is not its own neighbour.
///
/// # Example
/// ```
/// use osbng_rs::{bng_is_neighbour, BngReference};
///
/// # fn main() -> Result<(), osbng_rs::BngError> {
/// let a: BngReference = "SE1822".parse()?;
/// let b: BngReference = "SE1922".parse()?;
/// assert!(bng_is_neighbour(&a, &b)?);
/// # Ok(())
/// # }
/// ```
pub fn bng_is_neighbour(a: &BngReference, b: &BngReference) -> Result<bool, BngError> {
    if a.resolution() != b.resolution() {
        return Err(BngError::Neighbour(format!(
            "references are at different resolutions ({} and {})",
            a.resolution(),
            b.resolution()
        )));
    }
    if a == b {
        return Ok(false);
    }
    let metres = a.resolution_metres();
    let (ae, an) = a.origin();
    let (be, bn) = b.origin();
    let dx = (ae - be).abs() / metres;
    let dy = (an - bn).abs() / metres;
    Ok(dx + dy == 1)
}

fn ring_or_disc(bng_ref: &BngReference, k: i64, is_disc: bool) -> Vec<BngReference> {
    let mut refs = Vec::new();
    for dy in -k..=k {
        for dx in -k..=k {
            if is_disc || dx.abs() == k || dy.abs() == k {
                if let Some(r) = bng_ref.offset(dx, dy) {
                    refs.push(r);
                }
            }
        }
    }
    refs
}

/// The hollow ring of squares at Chebyshev distance exactly `k`: 8k
/// squares when entirely inside the extent, fewer at the edge, never
/// wrapped. `k = 0` is the empty set.
pub fn bng_kring(bng_ref: &BngReference, k: u32) -> Vec<BngReference> {
    if k == 0 {
        return Vec::new();
    }
    ring_or_disc(bng_ref, k as i64, false)
}

/// The filled disc of squares at Chebyshev distance at most `k`: (2k+1)^2
/// squares when entirely inside the extent. `k = 0` is the reference
/// itself.
pub fn bng_kdisc(bng_ref: &BngReference, k: u32) -> Vec<BngReference> {
    ring_or_disc(bng_ref, k as i64, true)
}

/// Distance between two references in metres.
///
/// By default this is the Euclidean distance between square centroids.
/// With `edge_to_edge` it is the minimum gap between the two squares'
/// bounding boxes, each at its own resolution; 0 when they touch or
/// overlap. Mixed resolutions are accepted.
pub fn bng_distance(a: &BngReference, b: &BngReference, edge_to_edge: bool) -> f64 {
    if edge_to_edge {
        let (a_min_x, a_min_y, a_max_x, a_max_y) = bng_to_bbox(a);
        let (b_min_x, b_min_y, b_max_x, b_max_y) = bng_to_bbox(b);
        let dx = (b_min_x - a_max_x).max(a_min_x - b_max_x).max(0.0);
        let dy = (b_min_y - a_max_y).max(a_min_y - b_max_y).max(0.0);
        dx.hypot(dy)
    } else {
        let c1 = bng_to_xy(a, CellPosition::Centre);
        let c2 = bng_to_xy(b, CellPosition::Centre);
        (c1.x() - c2.x()).hypot(c1.y() - c2.y())
    }
}

/// All squares at the reference's own resolution whose squares lie within
/// distance `d` metres of it, measured edge to edge.
///
/// Candidates are drawn from the disc of radius `ceil(d / metres) + 1`
/// (one extra ring so squares exactly at distance `d` are never missed)
/// and filtered by exact distance.
pub fn bng_dwithin(bng_ref: &BngReference, d: f64) -> Vec<BngReference> {
    if !(d >= 0.0) {
        return Vec::new();
    }
    let k = (d / bng_ref.resolution_metres() as f64).ceil() as u32 + 1;
    bng_kdisc(bng_ref, k)
        .into_iter()
        .filter(|candidate| bng_distance(bng_ref, candidate, true) <= d)
        .collect()
}
