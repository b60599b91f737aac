//! Serialized access to a room from concurrent callers.
//!
//! `GameRoom` has no internal locking. A transport serving several
//! connections wraps each room in a `SharedRoom`; every call runs under the
//! room's mutex, so one move is fully applied before the next is looked at.

use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use crate::core::PlayerId;

use super::machine::GameRoom;
use super::state::GameState;

/// Cloneable handle to one room.
#[derive(Clone, Debug)]
pub struct SharedRoom {
    inner: Arc<Mutex<GameRoom>>,
}

impl SharedRoom {
    pub fn new(room: GameRoom) -> Self {
        Self {
            inner: Arc::new(Mutex::new(room)),
        }
    }

    // Room operations never leave partial state behind, so a panic in
    // another holder does not invalidate the room.
    fn lock(&self) -> MutexGuard<'_, GameRoom> {
        self.inner.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Run `f` with exclusive access to the room.
    pub fn with<R>(&self, f: impl FnOnce(&mut GameRoom) -> R) -> R {
        f(&mut self.lock())
    }

    pub fn add_player(&self, player_id: impl Into<String>, name: impl Into<String>) -> bool {
        self.lock().add_player(player_id, name)
    }

    pub fn start_game(&self) -> bool {
        self.lock().start_game()
    }

    pub fn make_move(&self, seat: PlayerId, column: usize) -> bool {
        self.lock().make_move(seat, column)
    }

    pub fn make_cpu_move(&self) -> bool {
        self.lock().make_cpu_move()
    }

    pub fn rematch(&self) -> bool {
        self.lock().rematch()
    }

    #[must_use]
    pub fn state(&self) -> GameState {
        self.lock().state()
    }
}

impl From<GameRoom> for SharedRoom {
    fn from(room: GameRoom) -> Self {
        Self::new(room)
    }
}
