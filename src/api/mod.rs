pub mod hierarchy;
pub mod indexing;
pub mod reference;
pub mod traversal;

pub use hierarchy::{bng_to_children, bng_to_parent};
pub use indexing::{
    bbox_to_bng, bng_to_bbox, bng_to_grid_geom, bng_to_xy, cell_at, points_to_bng, xy_to_bng,
    CellPosition,
};
pub use reference::{is_valid_bng, BngReference};
pub use traversal::{
    bng_distance, bng_dwithin, bng_is_neighbour, bng_kdisc, bng_kring, bng_neighbours,
};
