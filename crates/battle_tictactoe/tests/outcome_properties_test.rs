//! Exhaustive properties over every 3x3 board.

use battle_tictactoe::{
    choose_computer_move, completing_square, detect_outcome, smart_move, Board, GameState, Mark,
    MediumPolicy, Outcome, Position, ScriptedRandom, Square, Turn, LINES,
};

/// Every assignment of {Empty, Human, Computer} to the nine squares.
fn all_boards() -> impl Iterator<Item = Board> {
    (0..3usize.pow(9)).map(|mut code| {
        let mut squares = [Square::Empty; 9];
        for square in squares.iter_mut() {
            *square = match code % 3 {
                0 => Square::Empty,
                1 => Square::Occupied(Mark::Human),
                _ => Square::Occupied(Mark::Computer),
            };
            code /= 3;
        }
        Board::from_squares(squares)
    })
}

/// Boards where the computer is to move in a game still in progress.
fn computer_to_move() -> impl Iterator<Item = GameState> {
    all_boards()
        .filter_map(|b| GameState::from_parts(b, Turn::ComputerTurn).ok())
        .filter(|s| !s.is_over())
}

#[test]
fn test_detect_outcome_is_pure_and_consistent() {
    for board in all_boards() {
        let first = detect_outcome(&board);
        assert_eq!(first, detect_outcome(&board));

        let first_completed = LINES.iter().find_map(|l| l.owner(&board).map(|m| (m, *l)));
        let expected = match first_completed {
            Some((Mark::Human, line)) => Outcome::HumanWin(line),
            Some((Mark::Computer, line)) => Outcome::ComputerWin(line),
            None if board.empty_positions().is_empty() => Outcome::Draw,
            None => Outcome::InProgress,
        };
        assert_eq!(first, expected, "{}", board.display());
    }
}

#[test]
fn test_winning_line_belongs_to_winner() {
    for board in all_boards() {
        if let Some(line) = detect_outcome(&board).winning_line() {
            let winner = detect_outcome(&board).winner().unwrap();
            for pos in line.positions() {
                assert_eq!(board.get(pos), Square::Occupied(winner));
            }
        }
    }
}

#[test]
fn test_reachable_states_never_have_two_winners() {
    for turn in [Turn::HumanTurn, Turn::ComputerTurn] {
        for state in all_boards().filter_map(|b| GameState::from_parts(b, turn).ok()) {
            let owners: Vec<_> = LINES
                .iter()
                .filter_map(|l| l.owner(state.board()))
                .collect();
            assert!(
                !(owners.contains(&Mark::Human) && owners.contains(&Mark::Computer)),
                "{}",
                state.board().display()
            );
        }
    }
}

#[test]
fn test_smart_mode_takes_any_available_win() {
    let policy = MediumPolicy::default();
    for state in computer_to_move() {
        if completing_square(state.board(), Mark::Computer).is_none() {
            continue;
        }
        let mut rng = ScriptedRandom::always_smart();
        let pos = choose_computer_move(state.board(), &policy, &mut rng).unwrap();
        let mut after = *state.board();
        after.set(pos, Square::Occupied(Mark::Computer));
        assert!(
            matches!(detect_outcome(&after), Outcome::ComputerWin(_)),
            "{}",
            state.board().display()
        );
    }
}

#[test]
fn test_smart_mode_blocks_single_threat() {
    let policy = MediumPolicy::default();
    for state in computer_to_move() {
        let board = state.board();
        let threats: Vec<Position> = LINES
            .iter()
            .filter_map(|l| l.completion(board, Mark::Human))
            .collect();
        if threats.len() != 1 || completing_square(board, Mark::Computer).is_some() {
            continue;
        }

        let mut rng = ScriptedRandom::always_smart();
        let pos = choose_computer_move(board, &policy, &mut rng).unwrap();
        assert_eq!(pos, threats[0], "{}", board.display());

        let mut after = *board;
        after.set(pos, Square::Occupied(Mark::Computer));
        assert_eq!(completing_square(&after, Mark::Human), None);
    }
}

#[test]
fn test_smart_move_always_targets_empty_square() {
    for board in all_boards() {
        if let Some(pos) = smart_move(&board) {
            assert!(board.is_empty(pos));
        }
    }
}

#[test]
fn test_random_mode_only_picks_empty_squares() {
    let policy = MediumPolicy::default();
    for state in computer_to_move() {
        let empty = state.board().empty_positions();
        for pick in 0..empty.len() {
            let mut rng = ScriptedRandom::new([false], [pick]);
            let pos = choose_computer_move(state.board(), &policy, &mut rng).unwrap();
            assert_eq!(pos, empty[pick]);
        }
    }
}
