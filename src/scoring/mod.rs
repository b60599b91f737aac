//! Pattern matching and point accumulation.
//!
//! `check_patterns` runs once per accepted placement and returns every shape
//! the placement completed; `total_points` folds those into a score delta.

pub mod matcher;
pub mod result;

pub use matcher::{check_patterns, match_exact, match_linear};
pub use result::{total_points, ScoreResult};
