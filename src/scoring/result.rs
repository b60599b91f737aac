//! Realized shape occurrences and point totals.

use serde::{Deserialize, Serialize};

use crate::shapes::{Positions, ShapeTemplate};

/// One completed occurrence of a template on the board.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScoreResult {
    /// The template that was completed.
    pub template: ShapeTemplate,

    /// Absolute board coordinates, in the order they were matched.
    pub positions: Positions,

    /// Points awarded for this occurrence.
    pub points: u32,
}

impl ScoreResult {
    /// Record an occurrence of `template` at `positions`.
    pub fn new(template: &ShapeTemplate, positions: Positions) -> Self {
        Self {
            template: template.clone(),
            positions,
            points: template.points,
        }
    }

    /// Coordinates in sorted order, for set comparisons.
    #[must_use]
    pub fn sorted_positions(&self) -> Positions {
        let mut sorted = self.positions.clone();
        sorted.sort_unstable();
        sorted
    }

    /// Same template id and the same set of cells.
    #[must_use]
    pub fn is_same_occurrence(&self, other: &ScoreResult) -> bool {
        self.template.id == other.template.id && self.sorted_positions() == other.sorted_positions()
    }
}

/// Sum of points over a move's results.
#[must_use]
pub fn total_points(results: &[ScoreResult]) -> u32 {
    results.iter().map(|r| r.points).sum()
}
