//! The 7×6 drop board.
//!
//! Pieces are dropped into a column and settle at the lowest empty row. A
//! cell never returns to `Cell::Empty` once filled, so the board only ever
//! gains pieces until it is thrown away by a rematch.

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use super::coord::{Coord, COLUMNS, ROWS};
use super::player::PlayerId;

/// Contents of one board cell.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Cell {
    #[default]
    Empty,
    /// Piece of seat 0.
    First,
    /// Piece of seat 1.
    Second,
}

impl Cell {
    /// The piece colour of a seat.
    #[must_use]
    pub const fn of(player: PlayerId) -> Self {
        match player.0 {
            0 => Cell::First,
            _ => Cell::Second,
        }
    }

    /// The seat owning this cell, if any.
    #[must_use]
    pub const fn owner(self) -> Option<PlayerId> {
        match self {
            Cell::Empty => None,
            Cell::First => Some(PlayerId::FIRST),
            Cell::Second => Some(PlayerId::SECOND),
        }
    }

    #[must_use]
    pub const fn is_empty(self) -> bool {
        matches!(self, Cell::Empty)
    }

    fn symbol(self) -> char {
        match self {
            Cell::Empty => '.',
            Cell::First => 'A',
            Cell::Second => 'B',
        }
    }
}

/// Legal columns of a board, in ascending order.
pub type Columns = SmallVec<[usize; COLUMNS]>;

/// Fixed 6-row × 7-column grid, indexed `cells[row][column]`.
///
/// `Board` is `Copy`: lookahead code takes a scratch copy and drops pieces
/// on it without touching the real board.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Board {
    cells: [[Cell; COLUMNS]; ROWS],
}

impl Board {
    /// An empty board.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse a board from six rows of text, top row first.
    ///
    /// `.` is empty, `A` is seat 0 and `B` is seat 1. Returns `None` on a
    /// wrong row count, a wrong row width, or an unknown symbol. Floating
    /// pieces are accepted; this is a fixture helper, not a move validator.
    ///
    /// ```
    /// use shape_drop::core::{Board, Cell, Coord};
    ///
    /// let board = Board::from_rows(&[
    ///     ".......",
    ///     ".......",
    ///     ".......",
    ///     ".......",
    ///     ".......",
    ///     "AAB....",
    /// ]).unwrap();
    ///
    /// assert_eq!(board.get(Coord::new(2, 5)), Some(Cell::Second));
    /// assert_eq!(board.landing_row(0), Some(4));
    /// ```
    #[must_use]
    pub fn from_rows(rows: &[&str]) -> Option<Self> {
        if rows.len() != ROWS {
            return None;
        }

        let mut board = Self::new();
        for (y, line) in rows.iter().enumerate() {
            if line.chars().count() != COLUMNS {
                return None;
            }
            for (x, symbol) in line.chars().enumerate() {
                board.cells[y][x] = match symbol {
                    '.' => Cell::Empty,
                    'A' => Cell::First,
                    'B' => Cell::Second,
                    _ => return None,
                };
            }
        }
        Some(board)
    }

    /// Get the cell at a coordinate, or `None` off the board.
    #[must_use]
    pub fn get(&self, at: Coord) -> Option<Cell> {
        Some(self.cells[at.row()?][at.column()?])
    }

    /// Check whether `player` owns the cell at `at`. Off-board is never owned.
    #[must_use]
    pub fn is_owned_by(&self, at: Coord, player: PlayerId) -> bool {
        self.get(at) == Some(Cell::of(player))
    }

    /// Row a piece dropped into `column` would settle on.
    ///
    /// Scans bottom-up. `None` if the column is out of range or full.
    #[must_use]
    pub fn landing_row(&self, column: usize) -> Option<usize> {
        if column >= COLUMNS {
            return None;
        }
        (0..ROWS)
            .rev()
            .find(|&row| self.cells[row][column].is_empty())
    }

    /// Check whether a column accepts another piece.
    #[must_use]
    pub fn is_column_open(&self, column: usize) -> bool {
        column < COLUMNS && self.cells[0][column].is_empty()
    }

    /// Columns whose top cell is still empty.
    #[must_use]
    pub fn legal_columns(&self) -> Columns {
        (0..COLUMNS).filter(|&c| self.is_column_open(c)).collect()
    }

    /// Drop a piece for `player` into `column`.
    ///
    /// Returns the coordinate the piece settled on, or `None` (board
    /// untouched) if the column is out of range or full.
    pub fn drop_piece(&mut self, column: usize, player: PlayerId) -> Option<Coord> {
        let row = self.landing_row(column)?;
        self.cells[row][column] = Cell::of(player);
        Some(Coord::new(column as i32, row as i32))
    }

    /// Check whether every cell of the top row is occupied.
    #[must_use]
    pub fn is_top_row_full(&self) -> bool {
        self.cells[0].iter().all(|c| !c.is_empty())
    }

    /// Number of occupied cells.
    #[must_use]
    pub fn occupied_count(&self) -> usize {
        self.cells
            .iter()
            .flatten()
            .filter(|c| !c.is_empty())
            .count()
    }

    /// Rows top to bottom.
    #[must_use]
    pub fn rows(&self) -> &[[Cell; COLUMNS]; ROWS] {
        &self.cells
    }
}

impl std::fmt::Display for Board {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for (y, row) in self.cells.iter().enumerate() {
            if y > 0 {
                writeln!(f)?;
            }
            for cell in row {
                write!(f, "{}", cell.symbol())?;
            }
        }
        Ok(())
    }
}
