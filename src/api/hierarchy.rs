use crate::api::reference::BngReference;
use crate::core::resolution::Resolution;
use crate::util::error::BngError;

/// Returns the parent of a reference.
///
/// With `None` the parent is one ladder step up (e.g. 100m -> 500m); an
/// explicit resolution must be strictly coarser than the input's. The
/// parent is the square at the target resolution containing the input
/// square's lower-left corner.
///
/// # Example
/// ```
/// use osbng_rs::{bng_to_parent, BngReference, Resolution};
///
/// # fn main() -> Result<(), osbng_rs::BngError> {
/// let bng_ref: BngReference = "SU 372 155".parse()?;
/// assert_eq!(bng_to_parent(&bng_ref, None)?.to_formatted(), "SU 37 15 NW");
/// let coarse = bng_to_parent(&bng_ref, Some(Resolution::Km10))?;
/// assert_eq!(coarse.to_formatted(), "SU 3 1");
/// # Ok(())
/// # }
/// ```
pub fn bng_to_parent(
    bng_ref: &BngReference,
    resolution: Option<Resolution>,
) -> Result<BngReference, BngError> {
    let target = match resolution {
        Some(target) => {
            if target.metres() <= bng_ref.resolution_metres() {
                return Err(BngError::Hierarchy(format!(
                    "parent resolution {} is not coarser than {}",
                    target,
                    bng_ref.resolution()
                )));
            }
            target
        }
        None => bng_ref.resolution().coarser().ok_or_else(|| {
            BngError::Hierarchy("a 100km reference has no parent".to_string())
        })?,
    };

    let metres = target.metres();
    let (easting0, northing0) = bng_ref.origin();
    BngReference::from_origin(
        easting0 - easting0.rem_euclid(metres),
        northing0 - northing0.rem_euclid(metres),
        target,
    )
}

/// Returns the children of a reference, row-major from the south-west.
///
/// With `None` the children are one ladder step down: four quadrant
/// squares below a standard resolution, twenty-five squares below a
/// quadtree resolution. An explicit resolution must be strictly finer than
/// the input's; the result then holds every square of that resolution
/// whose origin lies within the input square.
pub fn bng_to_children(
    bng_ref: &BngReference,
    resolution: Option<Resolution>,
) -> Result<Vec<BngReference>, BngError> {
    let target = match resolution {
        Some(target) => {
            if target.metres() >= bng_ref.resolution_metres() {
                return Err(BngError::Hierarchy(format!(
                    "child resolution {} is not finer than {}",
                    target,
                    bng_ref.resolution()
                )));
            }
            target
        }
        None => bng_ref.resolution().finer().ok_or_else(|| {
            BngError::Hierarchy("a 1m reference has no children".to_string())
        })?,
    };

    let metres = bng_ref.resolution_metres();
    let step = target.metres();
    let (easting0, northing0) = bng_ref.origin();
    let per_axis = (metres / step) as usize;

    let mut children = Vec::with_capacity(per_axis * per_axis);
    let mut northing = northing0;
    while northing < northing0 + metres {
        let mut easting = easting0;
        while easting < easting0 + metres {
            children.push(BngReference::from_origin(easting, northing, target)?);
            easting += step;
        }
        northing += step;
    }
    Ok(children)
}
