//! # shape-drop
//!
//! Rules core for a two-seat piece-drop game on a 7×6 board. Pieces fall to
//! the lowest empty row of a column; a player scores whenever the piece they
//! just dropped completes one of the round's shape templates, in any
//! rotation or reflection. The game ends when the top row fills up.
//!
//! ## Design Principles
//!
//! 1. **In-memory only**: The core performs no I/O. Transports, persistence
//!    and rendering consume `GameState` snapshots and call room operations.
//!
//! 2. **Deterministic**: All randomness (template draws, computer
//!    tie-breaks) flows through a seeded `GameRng`, so games replay exactly.
//!
//! 3. **Rule violations are not errors**: Illegal moves return `false` and
//!    leave the room untouched.
//!
//! ## Modules
//!
//! - `core`: Coordinates, board, seats, RNG, configuration
//! - `shapes`: Shape templates, symmetry variants, the catalog
//! - `scoring`: Pattern matching and point totals
//! - `room`: Room state machine and snapshots
//! - `cpu`: Threat-scanning computer opponent

pub mod core;
pub mod cpu;
pub mod room;
pub mod scoring;
pub mod shapes;

// Re-export commonly used types
pub use crate::core::{
    Board, Cell, ConfigError, Coord, GameRng, Player, PlayerId, PlayerKind, PlayerMap, RoomConfig,
    RoundDraw, COLUMNS, ROWS,
};

pub use crate::shapes::{expand, ShapeLibrary, ShapeTemplate};

pub use crate::scoring::{check_patterns, total_points, ScoreResult};

pub use crate::room::{GameResult, GameRoom, GameState, GameStatus, RoomBuilder, SharedRoom};

pub use crate::cpu::{ScannerError, ThreatScanner};
