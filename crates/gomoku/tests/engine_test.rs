//! Scenario tests for the gomoku engine.

use gomoku::{Cell, Coord, Engine, Phase, Player, RejectKind};

/// Plays moves in order, asserting each is accepted.
fn play(engine: &mut Engine, moves: &[(usize, usize)]) {
    for &(row, col) in moves {
        let outcome = engine.place_stone(row, col).expect("in bounds");
        assert!(
            outcome.accepted,
            "move ({row}, {col}) rejected: {:?}\n{}",
            outcome.reason,
            engine.board().render()
        );
    }
}

/// Interleaves Black and White cells into a play order, Black first.
fn interleave(black: &[(usize, usize)], white: &[(usize, usize)]) -> Vec<(usize, usize)> {
    let mut moves = Vec::with_capacity(black.len() + white.len());
    for (i, b) in black.iter().enumerate() {
        moves.push(*b);
        if let Some(w) = white.get(i) {
            moves.push(*w);
        }
    }
    moves
}

/// Splits a 5×5 pattern ('B'/'W' rows) into Black and White cells.
fn split_pattern(rows: [&str; 5]) -> (Vec<(usize, usize)>, Vec<(usize, usize)>) {
    let mut black = Vec::new();
    let mut white = Vec::new();
    for (r, line) in rows.iter().enumerate() {
        for (c, ch) in line.chars().enumerate() {
            match ch {
                'B' => black.push((r, c)),
                'W' => white.push((r, c)),
                _ => panic!("bad pattern char {ch}"),
            }
        }
    }
    (black, white)
}

#[test]
fn test_black_wins_horizontal_scenario() {
    let mut engine = Engine::new();
    play(
        &mut engine,
        &[(7, 7), (0, 0), (7, 8), (0, 1), (7, 9), (0, 2), (7, 10), (0, 3)],
    );

    let outcome = engine.place_stone(7, 11).unwrap();
    assert!(outcome.accepted);
    assert_eq!(outcome.reason, None);

    let Phase::Won { player, cells } = &outcome.phase else {
        panic!("expected a win, got {:?}", outcome.phase);
    };
    assert_eq!(*player, Player::Black);
    let mut sorted = cells.clone();
    sorted.sort();
    let expected: Vec<Coord> = (7..=11).map(|c| Coord::new(7, c)).collect();
    assert_eq!(sorted, expected);
    assert_eq!(outcome.winning_cells.as_ref(), Some(cells));
    assert_eq!(engine.score().black, 1);
    assert_eq!(engine.score().white, 0);
}

#[test]
fn test_occupied_cell_scenario() {
    let mut engine = Engine::new();
    play(&mut engine, &[(3, 3)]);
    let before = engine.current_state();

    let outcome = engine.place_stone(3, 3).unwrap();
    assert!(!outcome.accepted);
    assert_eq!(outcome.reason, Some(RejectKind::CellOccupied));
    assert_eq!(outcome.phase, Phase::InProgress);
    assert_eq!(engine.board().get(3, 3), Ok(Cell::Black));
    assert_eq!(engine.current_state(), before);
    assert_eq!(engine.current_player(), Player::White);
}

#[test]
fn test_five_by_five_draw_scenario() {
    let (black, white) = split_pattern(["BBWWB", "WWBBW", "BBWWB", "WWBBW", "BBWWB"]);
    assert_eq!((black.len(), white.len()), (13, 12));
    let moves = interleave(&black, &white);

    let mut engine = Engine::with_size(5).unwrap();
    let (last, rest) = moves.split_last().unwrap();
    play(&mut engine, rest);
    assert_eq!(engine.phase(), &Phase::InProgress);

    let outcome = engine.place_stone(last.0, last.1).unwrap();
    assert!(outcome.accepted);
    assert_eq!(outcome.phase, Phase::Drawn);
    assert_eq!(outcome.winning_cells, None);
    assert!(engine.board().is_full());
    assert_eq!(engine.score(), Default::default());
}

#[test]
fn test_full_board_win_beats_draw() {
    let (mut black, white) = split_pattern(["BBBBB", "WWBWW", "BBWBB", "WWBWW", "BWWWB"]);
    assert_eq!((black.len(), white.len()), (13, 12));
    // Finish on the middle of the top row.
    let pos = black.iter().position(|&c| c == (0, 2)).unwrap();
    let finisher = black.remove(pos);
    black.push(finisher);
    let moves = interleave(&black, &white);

    let mut engine = Engine::with_size(5).unwrap();
    play(&mut engine, &moves);
    assert!(engine.board().is_full());
    assert_eq!(engine.phase().winner(), Some(Player::Black));
    assert_eq!(engine.winning_cells().map(<[Coord]>::len), Some(5));
}

#[test]
fn test_each_direction_detected() {
    let lines: [[(usize, usize); 5]; 4] = [
        [(4, 2), (4, 3), (4, 4), (4, 5), (4, 6)],
        [(2, 9), (3, 9), (4, 9), (5, 9), (6, 9)],
        [(8, 8), (9, 9), (10, 10), (11, 11), (12, 12)],
        [(8, 6), (9, 5), (10, 4), (11, 3), (12, 2)],
    ];
    let filler = [(0, 0), (0, 2), (0, 4), (0, 6), (0, 8)];

    for line in lines {
        let mut engine = Engine::new();
        play(&mut engine, &interleave(&line[..4], &filler[..4]));
        assert_eq!(engine.phase(), &Phase::InProgress, "four must not win");
        play(&mut engine, &[line[4]]);

        let mut cells = engine.winning_cells().expect("five wins").to_vec();
        cells.sort();
        let mut expected: Vec<Coord> = line.iter().map(|&c| c.into()).collect();
        expected.sort();
        assert_eq!(cells, expected);
    }
}

#[test]
fn test_overline_reports_whole_run() {
    let mut engine = Engine::new();
    let black = [(7, 7), (7, 8), (7, 9), (7, 11), (7, 12), (7, 10)];
    let white = [(0, 0), (0, 2), (0, 4), (0, 6), (0, 8)];
    play(&mut engine, &interleave(&black, &white));

    let cells = engine.winning_cells().expect("overline wins");
    assert_eq!(cells.len(), 6);
    assert_eq!(cells[0], Coord::new(7, 10));
    assert!((7..=12).all(|c| cells.contains(&Coord::new(7, c))));
}

#[test]
fn test_white_can_win() {
    let mut engine = Engine::new();
    let black = [(0, 0), (0, 2), (0, 4), (0, 6), (0, 8), (14, 14)];
    let white = [(10, 0), (10, 1), (10, 2), (10, 3), (10, 4)];
    play(&mut engine, &interleave(&black, &white)[..10]);
    assert_eq!(engine.phase().winner(), Some(Player::White));
    assert_eq!(engine.score().white, 1);
}

#[test]
fn test_moves_after_win_rejected() {
    let mut engine = Engine::new();
    play(
        &mut engine,
        &[(7, 7), (0, 0), (7, 8), (0, 1), (7, 9), (0, 2), (7, 10), (0, 3), (7, 11)],
    );
    let before = engine.current_state();

    let outcome = engine.place_stone(14, 14).unwrap();
    assert!(!outcome.accepted);
    assert_eq!(outcome.reason, Some(RejectKind::GameOver));
    assert_eq!(engine.current_state(), before);
    assert_eq!(engine.score().black, 1);
}

#[test]
fn test_undo_restores_turn() {
    let mut engine = Engine::new();
    play(&mut engine, &[(7, 7), (8, 8)]);

    let outcome = engine.undo();
    assert!(outcome.accepted);
    assert_eq!(outcome.phase, Phase::InProgress);
    assert_eq!(engine.current_player(), Player::White);
    assert_eq!(engine.board().get(8, 8), Ok(Cell::Empty));
    assert_eq!(engine.history().len(), 1);
}

#[test]
fn test_undo_disabled_after_win_and_draw() {
    let mut engine = Engine::new();
    play(
        &mut engine,
        &[(7, 7), (0, 0), (7, 8), (0, 1), (7, 9), (0, 2), (7, 10), (0, 3), (7, 11)],
    );
    let before = engine.current_state();
    assert!(!engine.undo().accepted);
    assert_eq!(engine.current_state(), before);

    let (black, white) = split_pattern(["BBWWB", "WWBBW", "BBWWB", "WWBBW", "BBWWB"]);
    let mut engine = Engine::with_size(5).unwrap();
    play(&mut engine, &interleave(&black, &white));
    let outcome = engine.undo();
    assert!(!outcome.accepted);
    assert_eq!(outcome.phase, Phase::Drawn);
    assert_eq!(engine.history().len(), 25);
}

#[test]
fn test_new_game_keeps_score() {
    let mut engine = Engine::new();
    play(
        &mut engine,
        &[(7, 7), (0, 0), (7, 8), (0, 1), (7, 9), (0, 2), (7, 10), (0, 3), (7, 11)],
    );
    engine.new_game(None).unwrap();

    assert_eq!(engine.phase(), &Phase::InProgress);
    assert_eq!(engine.current_player(), Player::Black);
    assert!(engine.history().is_empty());
    assert_eq!(engine.board().occupied(), 0);
    assert_eq!(engine.score().black, 1);
    assert!(!engine.undo().accepted);
}
