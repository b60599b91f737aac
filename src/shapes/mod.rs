//! Shape templates, their symmetry variants, and the catalog.

pub mod library;
pub mod symmetry;
pub mod template;

pub use library::ShapeLibrary;
pub use symmetry::{expand, flip_horizontal, rotate, VARIANT_COUNT};
pub use template::{points_for_size, Positions, ShapeTemplate, MAX_SHAPE_SIZE, MIN_SHAPE_SIZE};
