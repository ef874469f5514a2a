pub mod constants;
pub mod grid;
pub mod letters;
pub mod resolution;

pub use constants::BNG_BOUNDS;
pub use grid::grid_shape;
pub use letters::{letters_to_offset, offset_to_letters};
pub use resolution::Resolution;
