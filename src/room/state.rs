//! Room state and the snapshot handed to collaborators.
//!
//! ## GameState
//!
//! Everything a transport or renderer needs to show one room:
//! - Room id, seated players, CPU flag
//! - Board, per-seat scores, whose turn it is
//! - The round's active templates
//! - Status and, once finished, the result
//! - The last move and the shapes it completed
//!
//! `GameRoom::state()` returns this by value. The copy owns all its data, so
//! nothing a caller does to it can reach the room.

use serde::{Deserialize, Serialize};

use crate::core::{Board, Coord, Player, PlayerId, PlayerMap, SEATS};
use crate::scoring::ScoreResult;
use crate::shapes::ShapeTemplate;

/// Room lifecycle.
///
/// `Waiting → Ready → Playing → Finished`, plus `Finished → Playing` on a
/// rematch.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum GameStatus {
    /// Fewer than two players seated.
    #[default]
    Waiting,
    /// Both seats taken, game not started.
    Ready,
    /// Moves are being accepted.
    Playing,
    /// The top row filled up; see `GameState::winner`.
    Finished,
}

/// Result of a finished game.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum GameResult {
    /// Strictly higher score.
    Winner(PlayerId),
    /// Equal scores.
    Draw,
}

impl GameResult {
    /// Decide a finished game by strict score comparison.
    #[must_use]
    pub fn from_scores(scores: &PlayerMap<u32>) -> Self {
        let first = scores[PlayerId::FIRST];
        let second = scores[PlayerId::SECOND];
        match first.cmp(&second) {
            std::cmp::Ordering::Greater => GameResult::Winner(PlayerId::FIRST),
            std::cmp::Ordering::Less => GameResult::Winner(PlayerId::SECOND),
            std::cmp::Ordering::Equal => GameResult::Draw,
        }
    }

    /// Check if a seat won.
    #[must_use]
    pub fn is_winner(&self, player: PlayerId) -> bool {
        matches!(self, GameResult::Winner(p) if *p == player)
    }
}

/// Complete state of one room.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameState {
    pub room_id: String,

    /// Seated players, seat 0 first. At most two.
    pub players: Vec<Player>,

    pub board: Board,

    /// Running totals for the current round.
    pub scores: PlayerMap<u32>,

    /// Seat expected to move next.
    pub current_turn: PlayerId,

    /// Templates that score this round.
    pub templates: Vec<ShapeTemplate>,

    pub status: GameStatus,

    /// `None` until the game is finished.
    pub winner: Option<GameResult>,

    /// Cell filled by the last accepted move.
    pub last_move: Option<Coord>,

    /// Shapes completed by the last accepted move.
    pub last_score_results: Vec<ScoreResult>,

    pub is_cpu_game: bool,
}

impl GameState {
    /// Fresh room state with no players and an empty board.
    pub fn new(
        room_id: impl Into<String>,
        is_cpu_game: bool,
        templates: Vec<ShapeTemplate>,
    ) -> Self {
        Self {
            room_id: room_id.into(),
            players: Vec::with_capacity(SEATS),
            board: Board::new(),
            scores: PlayerMap::with_value(0),
            current_turn: PlayerId::FIRST,
            templates,
            status: GameStatus::Waiting,
            winner: None,
            last_move: None,
            last_score_results: Vec::new(),
            is_cpu_game,
        }
    }

    /// Check whether both seats are taken.
    #[must_use]
    pub fn is_full(&self) -> bool {
        self.players.len() >= SEATS
    }

    /// Player in a seat, if seated.
    #[must_use]
    pub fn player(&self, seat: PlayerId) -> Option<&Player> {
        self.players.get(seat.index())
    }

    /// Seat of the player with a caller-supplied id.
    #[must_use]
    pub fn seat_of(&self, player_id: &str) -> Option<PlayerId> {
        self.players
            .iter()
            .position(|p| p.id == player_id)
            .map(|i| PlayerId::new(i as u8))
    }

    /// Start a new round on the same seats.
    pub(crate) fn reset_round(&mut self, templates: Vec<ShapeTemplate>) {
        self.board = Board::new();
        self.scores = PlayerMap::with_value(0);
        self.current_turn = PlayerId::FIRST;
        self.templates = templates;
        self.winner = None;
        self.last_move = None;
        self.last_score_results.clear();
    }
}
