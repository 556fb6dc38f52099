//! Seeded games played start to finish through the engine.

use battle_tictactoe::{
    apply_computer_move, apply_human_move, new_game, GameRng, GameState, MediumPolicy, Mark,
    MoveResult, RandomSource, Turn,
};

/// Plays one game with the human choosing uniformly at random.
fn play_out(seed: u64, policy: &MediumPolicy) -> (GameState, usize) {
    let mut computer_rng = GameRng::new(seed);
    let mut human_rng = GameRng::new(seed.wrapping_add(1));
    let mut state = new_game();
    let mut moves = 0;

    while !state.is_over() {
        let result = match state.turn() {
            Turn::HumanTurn => {
                let empty = state.board().empty_positions();
                let pick = empty[human_rng.pick_index(empty.len())];
                apply_human_move(&state, pick.to_index())
            }
            Turn::ComputerTurn => apply_computer_move(&state, policy, &mut computer_rng)
                .expect("computer move on an in-progress board"),
        };
        let MoveResult::Applied(next) = result else {
            panic!("Legal move was ignored: {result:?}");
        };

        let human = next.board().count(Mark::Human);
        let computer = next.board().count(Mark::Computer);
        assert!(human == computer || human == computer + 1);

        state = next;
        moves += 1;
        assert!(moves <= 9);
    }
    (state, moves)
}

#[test]
fn test_seeded_games_terminate() {
    let policy = MediumPolicy::default();
    for seed in 0..200 {
        let (state, moves) = play_out(seed, &policy);
        assert!(state.outcome().is_terminal());
        assert!((5..=9).contains(&moves), "seed {seed}: {moves} moves");
    }
}

#[test]
fn test_same_seed_replays_same_game() {
    let policy = MediumPolicy::default();
    for seed in [3, 17, 99] {
        assert_eq!(play_out(seed, &policy), play_out(seed, &policy));
    }
}

#[test]
fn test_smart_policy_loses_less_often_than_random_policy() {
    let smart = MediumPolicy::new(1.0).unwrap();
    let random = MediumPolicy::new(0.0).unwrap();

    let human_wins = |policy: &MediumPolicy| {
        (0..300)
            .filter(|seed| play_out(*seed, policy).0.outcome().winner() == Some(Mark::Human))
            .count()
    };

    assert!(human_wins(&smart) < human_wins(&random));
}
