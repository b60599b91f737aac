//! Whole-room scenarios: lobby to finish, rematch, replay, computer games.

use shape_drop::core::{Cell, Coord, GameRng, PlayerId, PlayerKind, COLUMNS, ROWS};
use shape_drop::room::{GameResult, GameRoom, GameStatus, RoomBuilder};
use shape_drop::shapes::{ShapeLibrary, ShapeTemplate};

fn two_player_room(seed: u64) -> GameRoom {
    let mut room = GameRoom::new("ROOM42", false, seed);
    assert!(room.add_player("p1", "Alice"));
    assert!(room.add_player("p2", "Bob"));
    assert!(room.start_game());
    room
}

fn cpu_room(seed: u64) -> GameRoom {
    let mut room = GameRoom::new("CPU001", true, seed);
    assert!(room.add_player("p1", "Alice"));
    assert!(room.start_game());
    room
}

/// Fill the board column by column, alternating seats.
fn fill_board(room: &mut GameRoom) {
    for column in 0..COLUMNS {
        for _ in 0..ROWS {
            let seat = room.current_turn();
            assert!(room.make_move(seat, column));
        }
    }
}

/// Lowest open column.
fn first_open(room: &GameRoom) -> usize {
    room.state().board.legal_columns()[0]
}

#[test]
fn test_three_in_a_row_scenario() {
    let line = ShapeTemplate::new("3-line", "Line 3", &[(0, 0), (1, 0), (2, 0)]);
    let mut room = RoomBuilder::new("SCEN01")
        .library(ShapeLibrary::from_templates([line]))
        .build(99)
        .unwrap();
    assert!(room.add_player("p1", "Alice"));
    assert!(room.add_player("p2", "Bob"));
    assert!(room.start_game());

    // Seat 1 stacks on top of column 6 out of the way.
    assert!(room.make_move(PlayerId::FIRST, 0));
    assert!(room.make_move(PlayerId::SECOND, 6));
    assert!(room.make_move(PlayerId::FIRST, 1));
    assert!(room.make_move(PlayerId::SECOND, 6));
    assert!(room.make_move(PlayerId::FIRST, 2));

    let state = room.state();
    assert_eq!(state.last_score_results.len(), 1);
    let result = &state.last_score_results[0];
    assert_eq!(result.template.id, "3-line");
    assert_eq!(result.points, 1);

    let mut cells = result.positions.to_vec();
    cells.sort();
    let expected = [Coord::new(0, 5), Coord::new(1, 5), Coord::new(2, 5)];
    assert_eq!(cells, expected);
    assert_eq!(state.scores[PlayerId::FIRST], 1);
}

#[test]
fn test_drop_into_full_column_changes_nothing() {
    let mut room = two_player_room(7);
    for _ in 0..ROWS {
        let seat = room.current_turn();
        assert!(room.make_move(seat, 4));
    }

    let before = room.state();
    assert_eq!(before.board.landing_row(4), None);

    let seat = room.current_turn();
    assert!(!room.make_move(seat, 4));

    let after = room.state();
    assert_eq!(after.board, before.board);
    assert_eq!(after.scores, before.scores);
    assert_eq!(after.current_turn, before.current_turn);
}

#[test]
fn test_accepted_move_fills_exactly_one_cell() {
    let mut room = two_player_room(12);
    let mut rng = GameRng::new(12);

    while room.status() == GameStatus::Playing {
        let before = room.state();
        let legal = before.board.legal_columns();
        let column = *rng.choose(&legal).unwrap();
        let landing = before.board.landing_row(column).unwrap();
        let seat = before.current_turn;
        let other = seat.opponent();
        let occupied = before.board.occupied_count();

        assert!(room.make_move(seat, column));

        let after = room.state();
        assert_eq!(after.board.occupied_count(), occupied + 1);
        let landed = Coord::new(column as i32, landing as i32);
        assert_eq!(after.board.get(landed), Some(Cell::of(seat)));
        assert_eq!(after.last_move, Some(landed));
        assert!(after.scores[seat] >= before.scores[seat]);
        assert_eq!(after.scores[other], before.scores[other]);

        if after.status == GameStatus::Playing {
            assert_eq!(after.current_turn, other);
        } else {
            assert_eq!(after.current_turn, seat);
        }
    }
}

#[test]
fn test_game_ends_when_top_row_fills() {
    let mut room = two_player_room(21);
    fill_board(&mut room);

    let state = room.state();
    assert_eq!(state.status, GameStatus::Finished);
    assert!(state.board.is_top_row_full());
    assert_eq!(state.winner, Some(GameResult::from_scores(&state.scores)));

    let first = state.scores[PlayerId::FIRST];
    let second = state.scores[PlayerId::SECOND];
    match state.winner {
        Some(GameResult::Winner(seat)) if seat == PlayerId::FIRST => assert!(first > second),
        Some(GameResult::Winner(_)) => assert!(second > first),
        Some(GameResult::Draw) => assert_eq!(first, second),
        None => panic!("finished game without a result"),
    }

    for seat in PlayerId::all() {
        for column in 0..COLUMNS {
            assert!(!room.make_move(seat, column));
        }
    }
}

#[test]
fn test_game_lasts_forty_two_moves() {
    // Row 0 of a column fills only with its sixth piece, so the top row is
    // complete exactly when the whole board is.
    let mut room = two_player_room(3);
    let mut moves = 0;
    while room.status() == GameStatus::Playing {
        let column = first_open(&room);
        assert!(room.make_move(room.current_turn(), column));
        moves += 1;
    }
    assert_eq!(moves, COLUMNS * ROWS);
}

#[test]
fn test_rematch_resets_round() {
    let mut room = two_player_room(33);
    fill_board(&mut room);
    let finished = room.state();
    assert!(room.rematch());

    let state = room.state();
    assert_eq!(state.status, GameStatus::Playing);
    assert_eq!(state.board.occupied_count(), 0);
    assert_eq!(state.scores[PlayerId::FIRST], 0);
    assert_eq!(state.scores[PlayerId::SECOND], 0);
    assert_eq!(state.current_turn, PlayerId::FIRST);
    assert_eq!(state.winner, None);
    assert_eq!(state.last_move, None);
    assert!(state.last_score_results.is_empty());
    assert_eq!(state.templates.len(), 6);

    assert_eq!(state.room_id, finished.room_id);
    assert_eq!(state.players, finished.players);
    assert_eq!(state.is_cpu_game, finished.is_cpu_game);

    assert!(room.make_move(PlayerId::FIRST, 0));
}

#[test]
fn test_rematch_redraws_templates() {
    let mut room = two_player_room(8);
    let mut draws = vec![room.state().templates];

    for _ in 0..5 {
        fill_board(&mut room);
        assert!(room.rematch());
        draws.push(room.state().templates);
    }

    // Six rounds drawn from the same catalog are not all identical.
    assert!(draws.windows(2).any(|pair| pair[0] != pair[1]));
}

#[test]
fn test_same_seed_replays_identically() {
    let play = |seed: u64| {
        let mut room = cpu_room(seed);
        while room.status() == GameStatus::Playing {
            if room.current_turn() == PlayerId::FIRST {
                let column = first_open(&room);
                assert!(room.make_move(PlayerId::FIRST, column));
            } else {
                assert!(room.make_cpu_move());
            }
        }
        room.state()
    };

    assert_eq!(play(2024), play(2024));
}

#[test]
fn test_cpu_game_to_completion() {
    let mut room = cpu_room(77);
    let state = room.state();
    assert_eq!(state.players[1].kind, PlayerKind::Computer);

    let mut cpu_moves = 0;
    while room.status() == GameStatus::Playing {
        if room.current_turn() == PlayerId::FIRST {
            // The computer cannot move for the human.
            assert!(!room.make_cpu_move());
            let column = first_open(&room);
            assert!(room.make_move(PlayerId::FIRST, column));
        } else {
            // Nor can a human move in the computer's seat out of turn.
            assert!(!room.make_move(PlayerId::FIRST, first_open(&room)));
            assert!(room.make_cpu_move());
            cpu_moves += 1;
        }
    }

    assert_eq!(cpu_moves, COLUMNS * ROWS / 2);
    assert_eq!(room.status(), GameStatus::Finished);
    // The computer placed the last piece; its call is now a no-op.
    assert_eq!(room.current_turn(), PlayerId::SECOND);
    assert!(!room.make_cpu_move());

    assert!(room.rematch());
    assert_eq!(room.state().players, state.players);
    assert!(room.make_move(PlayerId::FIRST, 3));
    assert!(room.make_cpu_move());
}

#[test]
fn test_entropy_seeded_room_plays_out() {
    let mut room = RoomBuilder::new("ENTROPY")
        .cpu_game(true)
        .build_with_rng(GameRng::from_entropy())
        .unwrap();
    assert!(room.add_player("p1", "Alice"));
    assert!(room.start_game());
    assert_eq!(room.state().templates.len(), 6);

    while room.status() == GameStatus::Playing {
        if room.current_turn() == PlayerId::FIRST {
            let column = first_open(&room);
            assert!(room.make_move(PlayerId::FIRST, column));
        } else {
            assert!(room.make_cpu_move());
        }
    }
    assert!(room.state().board.is_top_row_full());
}
