//! Shape templates.
//!
//! A template is a named set of relative coordinates. The first coordinate
//! is conventionally `(0, 0)`, but matching never relies on that: every
//! point of a shape may coincide with the piece just placed.

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use crate::core::Coord;

/// Smallest shape in the standard catalog.
pub const MIN_SHAPE_SIZE: usize = 3;

/// Largest shape in the standard catalog.
pub const MAX_SHAPE_SIZE: usize = 6;

/// Coordinate list of one shape. Inline up to the largest catalog size.
pub type Positions = SmallVec<[Coord; MAX_SHAPE_SIZE]>;

/// Points awarded for completing a shape of `size` cells.
///
/// 3 → 1, 4 → 3, 5 → 5, 6 → 10. Sizes outside the catalog range are worth
/// nothing.
#[must_use]
pub const fn points_for_size(size: usize) -> u32 {
    match size {
        3 => 1,
        4 => 3,
        5 => 5,
        6 => 10,
        _ => 0,
    }
}

/// Immutable scoring goal.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ShapeTemplate {
    /// Stable identifier, e.g. `"3-line"`.
    pub id: String,

    /// Display name.
    pub name: String,

    /// Relative coordinates, in definition order.
    pub positions: Positions,

    /// Points per completed occurrence.
    pub points: u32,
}

impl ShapeTemplate {
    /// Create a template whose point value follows its size.
    pub fn new(id: impl Into<String>, name: impl Into<String>, positions: &[(i32, i32)]) -> Self {
        let positions: Positions = positions.iter().copied().map(Coord::from).collect();
        let points = points_for_size(positions.len());
        Self {
            id: id.into(),
            name: name.into(),
            positions,
            points,
        }
    }

    /// Override the point value.
    #[must_use]
    pub fn with_points(mut self, points: u32) -> Self {
        self.points = points;
        self
    }

    /// Number of cells.
    #[must_use]
    pub fn size(&self) -> usize {
        self.positions.len()
    }

    /// Step vector if the shape is a straight, evenly spaced run.
    ///
    /// The step is `positions[1] - positions[0]`, and every point must equal
    /// `positions[0] + i * step`. `None` for shapes with fewer than two
    /// points or a zero step.
    #[must_use]
    pub fn linear_step(&self) -> Option<Coord> {
        let (&first, rest) = self.positions.split_first()?;
        let &second = rest.first()?;
        let step = second - first;
        if step == Coord::ORIGIN {
            return None;
        }

        self.positions
            .iter()
            .enumerate()
            .all(|(i, &p)| p == first + step * i as i32)
            .then_some(step)
    }
}

impl std::fmt::Display for ShapeTemplate {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} ({}, {}pt)", self.name, self.id, self.points)
    }
}
