//! One-ply defensive heuristic for the computer opponent.
//!
//! For every open column the scanner drops the opponent's piece on a scratch
//! board and asks the matcher whether it completes a shape. Such columns
//! are threats; the computer blocks one of them at random, or plays any open
//! column at random when there is nothing to block.

use thiserror::Error;
use tracing::trace;

use crate::core::{Board, Columns, GameRng, PlayerId};
use crate::scoring::check_patterns;
use crate::shapes::ShapeTemplate;

/// Failure to pick a column.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ScannerError {
    /// Asked to move on a board with no open column.
    #[error("no legal columns: every column is full")]
    NoLegalColumns,
}

/// Threat-blocking column picker.
#[derive(Clone, Debug)]
pub struct ThreatScanner {
    templates: Vec<ShapeTemplate>,
    rng: GameRng,
}

impl ThreatScanner {
    /// Scanner that looks for completions of `templates`.
    pub fn new(templates: Vec<ShapeTemplate>, rng: GameRng) -> Self {
        Self { templates, rng }
    }

    /// Templates this scanner defends against.
    #[must_use]
    pub fn templates(&self) -> &[ShapeTemplate] {
        &self.templates
    }

    /// Open columns where `opponent`'s next piece would complete a shape.
    #[must_use]
    pub fn threat_columns(&self, board: &Board, opponent: PlayerId) -> Columns {
        board
            .legal_columns()
            .into_iter()
            .filter(|&column| self.completes_shape(board, column, opponent))
            .collect()
    }

    fn completes_shape(&self, board: &Board, column: usize, opponent: PlayerId) -> bool {
        let mut scratch = *board;
        let Some(landed) = scratch.drop_piece(column, opponent) else {
            return false;
        };
        let results = check_patterns(&scratch, landed, opponent, &self.templates);
        !results.is_empty()
    }

    /// Pick the column to play against `opponent`.
    ///
    /// Uniform among threat columns if there are any, otherwise uniform among
    /// all open columns.
    pub fn select_column(
        &mut self,
        board: &Board,
        opponent: PlayerId,
    ) -> Result<usize, ScannerError> {
        let open = board.legal_columns();
        if open.is_empty() {
            return Err(ScannerError::NoLegalColumns);
        }

        let threats = self.threat_columns(board, opponent);
        trace!(threats = ?threats.as_slice(), open = ?open.as_slice(), "scanned columns");

        let pool = if threats.is_empty() { &open } else { &threats };
        self.rng
            .choose(pool)
            .copied()
            .ok_or(ScannerError::NoLegalColumns)
    }
}
