//! # osbng-rs
//!
//! A Rust implementation of the Ordnance Survey British National Grid (BNG)
//! index system: parse and format grid references, index easting/northing
//! coordinates at eleven resolutions from 100km down to 1m (including the
//! 50km/5km/500m/50m/5m quadrant-subdivided levels), and navigate the grid
//! as a spatial index.
//!
//! There are three main entry points.
//!
//! ### 1. `BngReference` - parse, format and inspect references
//!
//! ```
//! use osbng_rs::BngReference;
//!
//! # fn main() -> Result<(), osbng_rs::BngError> {
//! let bng_ref: BngReference = "TL 63 SW".parse()?;
//! assert_eq!(bng_ref.resolution().label(), "500m");
//! assert_eq!(bng_ref.to_compact(), "TL63SW");
//! assert_eq!(bng_ref.quadrant(), Some("SW"));
//! # Ok(())
//! # }
//! ```
//!
//! ### 2. Indexing - between coordinates and references
//!
//! ```
//! use osbng_rs::{bng_to_bbox, xy_to_bng, Resolution};
//!
//! # fn main() -> Result<(), osbng_rs::BngError> {
//! let bng_ref = xy_to_bng(&(437289.0, 115541.0), Resolution::M100)?;
//! assert_eq!(bng_ref.to_formatted(), "SU 372 155");
//! assert_eq!(bng_to_bbox(&bng_ref), (437200.0, 115500.0, 437300.0, 115600.0));
//! # Ok(())
//! # }
//! ```
//!
//! ### 3. Hierarchy and traversal - the grid as a lattice
//!
//! ```
//! use osbng_rs::{bng_kdisc, bng_neighbours, bng_to_parent, BngReference, Resolution};
//!
//! # fn main() -> Result<(), osbng_rs::BngError> {
//! let bng_ref: BngReference = "SE1822".parse()?;
//! assert_eq!(bng_neighbours(&bng_ref).len(), 4);
//! assert_eq!(bng_kdisc(&bng_ref, 3).len(), 49);
//! assert_eq!(bng_to_parent(&bng_ref, Some(Resolution::Km10))?.to_formatted(), "SE 1 2");
//! # Ok(())
//! # }
//! ```

pub mod api;
pub mod core;
pub mod util;

pub use api::{
    bbox_to_bng, bng_distance, bng_dwithin, bng_is_neighbour, bng_kdisc, bng_kring,
    bng_neighbours, bng_to_bbox, bng_to_children, bng_to_grid_geom, bng_to_parent, bng_to_xy,
    cell_at, is_valid_bng, points_to_bng, xy_to_bng, BngReference, CellPosition,
};
pub use self::core::{grid_shape, letters_to_offset, offset_to_letters, Resolution, BNG_BOUNDS};
pub use util::{BngError, Coordinate};

pub use geo_types;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_end_to_end_workflow() -> Result<(), BngError> {
        // Index a point, climb the hierarchy, walk the lattice.
        let bng_ref = xy_to_bng(&(437289.0, 115541.0), Resolution::Km1)?;
        assert_eq!(bng_ref.to_formatted(), "SU 37 15");

        let parent = bng_to_parent(&bng_ref, Some(Resolution::Km10))?;
        assert_eq!(parent.to_formatted(), "SU 3 1");
        assert!(bng_to_children(&parent, Some(Resolution::Km1))?.contains(&bng_ref));

        let ring = bng_kring(&bng_ref, 1);
        assert_eq!(ring.len(), 8);
        for cell in &ring {
            assert_eq!(bng_distance(&bng_ref, cell, true), 0.0);
        }
        for neighbour in bng_neighbours(&bng_ref) {
            assert!(bng_is_neighbour(&bng_ref, &neighbour)?);
            assert!(ring.contains(&neighbour));
        }
        Ok(())
    }

    #[test]
    fn test_round_trip_parse_format_canonicalises() -> Result<(), BngError> {
        for (input, canonical) in [
            ("su372155", "SU 372 155"),
            ("TL 63 SW", "TL 63 SW"),
            ("SE 1822", "SE 18 22"),
            ("HP", "HP"),
            ("SUNE", "SU NE"),
        ] {
            let bng_ref: BngReference = input.parse()?;
            assert_eq!(bng_ref.to_formatted(), canonical);
            assert_eq!(bng_ref.to_formatted().parse::<BngReference>()?, bng_ref);
        }
        Ok(())
    }

    #[test]
    fn test_grid_enumeration_boundary() -> Result<(), BngError> {
        let (rows, cols) = grid_shape(Resolution::Km100);
        assert_eq!((rows, cols), (13, 7));

        // An external enumerator can rebuild the grid square by square.
        let mut count = 0;
        for row in 0..rows {
            for col in 0..cols {
                let bng_ref = cell_at(row, col, Resolution::Km100)?;
                assert_eq!(bng_ref.origin(), (col * 100_000, row * 100_000));
                count += 1;
            }
        }
        assert_eq!(count, rows * cols);
        Ok(())
    }

    #[test]
    fn test_geometry_boundary() -> Result<(), BngError> {
        let bng_ref: BngReference = "SE1822".parse()?;
        let polygon = bng_to_grid_geom(&bng_ref);
        assert_eq!(polygon.exterior().coords().count(), 5);

        // A coarse sampling of that polygon's extent indexes back to the square.
        let (min_x, min_y, max_x, max_y) = bng_to_bbox(&bng_ref);
        let sampled = points_to_bng(
            [(min_x, min_y), ((min_x + max_x) / 2.0, (min_y + max_y) / 2.0)],
            Resolution::Km1,
        )?;
        assert_eq!(sampled, vec![bng_ref]);
        Ok(())
    }
}
