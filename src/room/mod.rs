//! Rooms: one game's isolated state and the rules that drive it.
//!
//! - `GameRoom`: the state machine (lobby, moves, end of game, rematch)
//! - `GameState`: the snapshot value handed to collaborators
//! - `SharedRoom`: mutex-guarded handle for concurrent transports

pub mod machine;
pub mod shared;
pub mod state;

pub use machine::{GameRoom, RoomBuilder};
pub use shared::SharedRoom;
pub use state::{GameResult, GameState, GameStatus};
