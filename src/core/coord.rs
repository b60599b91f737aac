//! Board coordinates.
//!
//! A `Coord` is used both for absolute board cells and for the relative
//! offsets that make up a shape template, so it is signed. Column `x` runs
//! left to right (0..7), row `y` runs top to bottom (0..6).

use serde::{Deserialize, Serialize};
use std::ops::{Add, Mul, Neg, Sub};

/// Number of columns on the board.
pub const COLUMNS: usize = 7;

/// Number of rows on the board.
pub const ROWS: usize = 6;

/// Column/row pair. Row 0 is the top of the board, row 5 the bottom.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Coord {
    pub x: i32,
    pub y: i32,
}

impl Coord {
    /// Create a new coordinate.
    #[must_use]
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// The origin `(0, 0)`.
    pub const ORIGIN: Coord = Coord::new(0, 0);

    /// Check whether this coordinate lies on the 7×6 board.
    #[must_use]
    pub const fn in_bounds(self) -> bool {
        self.x >= 0 && self.x < COLUMNS as i32 && self.y >= 0 && self.y < ROWS as i32
    }

    /// Column index, if on the board.
    #[must_use]
    pub fn column(self) -> Option<usize> {
        self.in_bounds().then_some(self.x as usize)
    }

    /// Row index, if on the board.
    #[must_use]
    pub fn row(self) -> Option<usize> {
        self.in_bounds().then_some(self.y as usize)
    }
}

impl From<(i32, i32)> for Coord {
    fn from((x, y): (i32, i32)) -> Self {
        Self::new(x, y)
    }
}

impl Add for Coord {
    type Output = Coord;

    fn add(self, rhs: Coord) -> Coord {
        Coord::new(self.x + rhs.x, self.y + rhs.y)
    }
}

impl Sub for Coord {
    type Output = Coord;

    fn sub(self, rhs: Coord) -> Coord {
        Coord::new(self.x - rhs.x, self.y - rhs.y)
    }
}

impl Neg for Coord {
    type Output = Coord;

    fn neg(self) -> Coord {
        Coord::new(-self.x, -self.y)
    }
}

impl Mul<i32> for Coord {
    type Output = Coord;

    fn mul(self, k: i32) -> Coord {
        Coord::new(self.x * k, self.y * k)
    }
}

impl std::fmt::Display for Coord {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}
