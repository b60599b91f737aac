//! Turn-based room state machine.
//!
//! A `GameRoom` exclusively owns one room's `GameState`. Every operation is
//! synchronous and all-or-nothing: it either applies completely and returns
//! `true`, or leaves the state untouched and returns `false`. Rule
//! violations are expected traffic from clients, so they are not errors.

use tracing::{debug, trace, warn};

use crate::core::{ConfigError, Coord, GameRng, Player, PlayerId, RoomConfig, COLUMNS};
use crate::cpu::ThreatScanner;
use crate::scoring::{check_patterns, total_points};
use crate::shapes::ShapeLibrary;

use super::state::{GameResult, GameState, GameStatus};

/// Builder for creating a `GameRoom`.
///
/// ```
/// use shape_drop::room::{GameStatus, RoomBuilder};
///
/// let mut room = RoomBuilder::new("K7Q2XZ").cpu_game(true).build(42).unwrap();
///
/// assert!(room.add_player("p-1", "Alice"));
/// assert_eq!(room.status(), GameStatus::Ready);
/// assert!(room.start_game());
/// ```
pub struct RoomBuilder {
    room_id: String,
    cpu_game: bool,
    config: RoomConfig,
    library: ShapeLibrary,
}

impl RoomBuilder {
    pub fn new(room_id: impl Into<String>) -> Self {
        Self {
            room_id: room_id.into(),
            cpu_game: false,
            config: RoomConfig::default(),
            library: ShapeLibrary::standard(),
        }
    }

    /// Seat the computer opponent when the first human joins.
    pub fn cpu_game(mut self, cpu_game: bool) -> Self {
        self.cpu_game = cpu_game;
        self
    }

    pub fn config(mut self, config: RoomConfig) -> Self {
        self.config = config;
        self
    }

    /// Catalog rounds are drawn from. Defaults to the standard shapes.
    pub fn library(mut self, library: ShapeLibrary) -> Self {
        self.library = library;
        self
    }

    /// Build the room with a seeded RNG.
    pub fn build(self, seed: u64) -> Result<GameRoom, ConfigError> {
        self.build_with_rng(GameRng::new(seed))
    }

    /// Build the room with a caller-supplied RNG.
    pub fn build_with_rng(self, rng: GameRng) -> Result<GameRoom, ConfigError> {
        self.config.validate()?;
        Ok(GameRoom::assemble(self.room_id, self.cpu_game, self.config, self.library, rng))
    }
}

/// One room's game.
#[derive(Clone, Debug)]
pub struct GameRoom {
    state: GameState,
    config: RoomConfig,
    library: ShapeLibrary,
    rng: GameRng,
    /// Present exactly when the room is a CPU game.
    scanner: Option<ThreatScanner>,
}

impl GameRoom {
    /// Create a room with the standard catalog and configuration.
    #[must_use]
    pub fn new(room_id: impl Into<String>, is_cpu_game: bool, seed: u64) -> Self {
        Self::assemble(
            room_id.into(),
            is_cpu_game,
            RoomConfig::default(),
            ShapeLibrary::standard(),
            GameRng::new(seed),
        )
    }

    fn assemble(
        room_id: String,
        is_cpu_game: bool,
        config: RoomConfig,
        library: ShapeLibrary,
        mut rng: GameRng,
    ) -> Self {
        let templates = library.select_round(&mut rng, &config.draw);
        let scanner = is_cpu_game.then(|| ThreatScanner::new(templates.clone(), rng.fork()));
        debug!(room = %room_id, cpu = is_cpu_game, "room created");

        Self {
            state: GameState::new(room_id, is_cpu_game, templates),
            config,
            library,
            rng,
            scanner,
        }
    }

    // === Lobby ===

    /// Seat a human player.
    ///
    /// Returns false if both seats are taken. In a CPU room the first human
    /// also seats the computer opponent, which readies the room.
    pub fn add_player(&mut self, player_id: impl Into<String>, name: impl Into<String>) -> bool {
        if self.state.is_full() {
            trace!(room = %self.state.room_id, "join rejected: room full");
            return false;
        }

        let player = Player::human(player_id, name);
        debug!(room = %self.state.room_id, player = %player.id, "player joined");
        self.state.players.push(player);

        if self.state.is_cpu_game && self.state.players.len() == 1 {
            let computer = Player::computer(self.config.cpu_name.clone());
            self.state.players.push(computer);
            self.state.status = GameStatus::Ready;
        } else if self.state.is_full() {
            self.state.status = GameStatus::Ready;
        }
        true
    }

    /// Begin play. Only legal from `Ready`.
    pub fn start_game(&mut self) -> bool {
        if self.state.status != GameStatus::Ready {
            trace!(room = %self.state.room_id, status = ?self.state.status, "start rejected");
            return false;
        }

        self.state.status = GameStatus::Playing;
        debug!(room = %self.state.room_id, "game started");
        true
    }

    // === Moves ===

    /// Drop `seat`'s piece into `column`.
    ///
    /// Rejected without any change when the game is not being played, it is
    /// not `seat`'s turn, the column is out of range, or the column is full.
    pub fn make_move(&mut self, seat: PlayerId, column: usize) -> bool {
        if self.state.status != GameStatus::Playing {
            trace!(
                room = %self.state.room_id,
                status = ?self.state.status,
                "move rejected: not playing"
            );
            return false;
        }
        if !seat.is_seat() || seat != self.state.current_turn {
            trace!(room = %self.state.room_id, seat = seat.0, "move rejected: wrong turn");
            return false;
        }
        if column >= COLUMNS {
            trace!(room = %self.state.room_id, column, "move rejected: no such column");
            return false;
        }
        let Some(landed) = self.state.board.drop_piece(column, seat) else {
            trace!(room = %self.state.room_id, column, "move rejected: column full");
            return false;
        };

        self.score_move(seat, landed);

        if self.state.board.is_top_row_full() {
            self.finish();
        } else {
            self.state.current_turn = seat.opponent();
        }
        true
    }

    fn score_move(&mut self, seat: PlayerId, landed: Coord) {
        let results = check_patterns(&self.state.board, landed, seat, &self.state.templates);
        let points = total_points(&results);

        self.state.scores[seat] += points;
        self.state.last_move = Some(landed);
        self.state.last_score_results = results;

        debug!(
            room = %self.state.room_id,
            seat = seat.0,
            column = landed.x,
            row = landed.y,
            points,
            "move accepted"
        );
    }

    fn finish(&mut self) {
        let result = GameResult::from_scores(&self.state.scores);
        self.state.status = GameStatus::Finished;
        self.state.winner = Some(result);
        debug!(room = %self.state.room_id, ?result, "game finished");
    }

    /// Let the computer take its turn.
    ///
    /// Returns false, with no change, unless this is a CPU room being played
    /// and seat 1 is to move. The chosen column goes through `make_move`.
    pub fn make_cpu_move(&mut self) -> bool {
        if !self.state.is_cpu_game
            || self.state.status != GameStatus::Playing
            || self.state.current_turn != PlayerId::SECOND
        {
            return false;
        }
        let Some(scanner) = self.scanner.as_mut() else {
            return false;
        };

        match scanner.select_column(&self.state.board, PlayerId::FIRST) {
            Ok(column) => self.make_move(PlayerId::SECOND, column),
            Err(err) => {
                warn!(room = %self.state.room_id, %err, "computer could not move");
                false
            }
        }
    }

    // === Rounds ===

    /// Start a new round with the same players. Only legal from `Finished`.
    ///
    /// Draws fresh templates and clears the board, scores, turn, and last
    /// move. Room id, players and the CPU flag are kept.
    pub fn rematch(&mut self) -> bool {
        if self.state.status != GameStatus::Finished {
            trace!(room = %self.state.room_id, status = ?self.state.status, "rematch rejected");
            return false;
        }

        let templates = self.library.select_round(&mut self.rng, &self.config.draw);
        if self.state.is_cpu_game {
            self.scanner = Some(ThreatScanner::new(templates.clone(), self.rng.fork()));
        }
        self.state.reset_round(templates);
        self.state.status = GameStatus::Playing;

        debug!(room = %self.state.room_id, "rematch started");
        true
    }

    // === Reads ===

    /// Snapshot of the room. Owned copy; changing it never affects the room.
    #[must_use]
    pub fn state(&self) -> GameState {
        self.state.clone()
    }

    #[must_use]
    pub fn room_id(&self) -> &str {
        &self.state.room_id
    }

    #[must_use]
    pub fn status(&self) -> GameStatus {
        self.state.status
    }

    #[must_use]
    pub fn current_turn(&self) -> PlayerId {
        self.state.current_turn
    }

    #[must_use]
    pub fn is_cpu_game(&self) -> bool {
        self.state.is_cpu_game
    }

    /// Seat of a seated player, by the id they joined with.
    #[must_use]
    pub fn seat_of(&self, player_id: &str) -> Option<PlayerId> {
        self.state.seat_of(player_id)
    }
}
