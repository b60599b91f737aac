//! Core types: coordinates, board, seats, RNG, configuration.
//!
//! These are the leaves every other module builds on. Nothing here knows
//! about shapes or scoring.

pub mod board;
pub mod config;
pub mod coord;
pub mod player;
pub mod rng;

pub use board::{Board, Cell, Columns};
pub use config::{ConfigError, RoomConfig, RoundDraw};
pub use coord::{Coord, COLUMNS, ROWS};
pub use player::{Player, PlayerId, PlayerKind, PlayerMap, SEATS};
pub use rng::GameRng;
