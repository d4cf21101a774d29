//! Ayo engine integration tests.
//!
//! Full games driven through the public `valid_moves`/`sow` contract,
//! plus the documented sowing and capture scenarios.

use naija_games::ayo::{choose_move, AyoEngine, AyoState, AyoStrategy, TOTAL_SEEDS};
use naija_games::core::{GameRng, PlayerId, RuleEngine};

/// A fresh board sown from pit 2 starts 2 -> 1 -> 0 -> 6 -> 7 and
/// relays from pit 7, which ends the first leg holding 5 seeds.
#[test]
fn test_opening_sow_path() {
    let engine = AyoEngine::new();
    let state = AyoState::new(PlayerId::new(0));

    let outcome = engine.sow(&state, 2).unwrap();
    assert_eq!(outcome.paths[0], vec![2, 1, 0, 6, 7]);
    assert!(outcome.paths.len() > 1);
    let total = outcome.state.seeds_on_board()
        + outcome.state.scores.iter().map(|&s| s as u16).sum::<u16>();
    assert_eq!(total, TOTAL_SEEDS);
}

#[test]
fn test_seed_conservation_through_random_games() {
    let engine = AyoEngine::new();

    for seed in 0..20 {
        let mut rng = GameRng::new(seed);
        let mut state = AyoState::initialize(&mut rng);

        for _ in 0..500 {
            if engine.is_terminal(&state) {
                break;
            }
            let moves = engine.valid_moves(&state);
            let Some(&pit) = rng.choose(&moves) else { break };
            state = engine.sow(&state, pit).unwrap().state;

            let total = state.seeds_on_board()
                + state.scores.iter().map(|&s| s as u16).sum::<u16>();
            assert_eq!(total, TOTAL_SEEDS);
        }
    }
}

#[test]
fn test_random_games_terminate() {
    let engine = AyoEngine::new();

    for seed in 0..10 {
        let mut rng = GameRng::new(seed);
        let mut state = AyoState::initialize(&mut rng);
        let mut steps = 0;

        while !engine.is_terminal(&state) {
            let moves = engine.valid_moves(&state);
            let Some(&pit) = rng.choose(&moves) else { break };
            state = engine.sow(&state, pit).unwrap().state;
            steps += 1;
            assert!(steps < 2000, "game did not terminate (seed {seed})");
        }
        assert!(state.game_over);
    }
}

#[test]
fn test_alpha_beta_beats_random_most_of_the_time() {
    let engine = AyoEngine::new();
    let mut search_wins = 0;
    let games = 10;

    for seed in 0..games {
        let mut rng = GameRng::new(seed);
        let mut state = AyoState::new(PlayerId::new(seed as u8 % 2));

        for _ in 0..1000 {
            if engine.is_terminal(&state) {
                break;
            }
            let strategy = if state.current_player == PlayerId::new(0) {
                AyoStrategy::AlphaBeta
            } else {
                AyoStrategy::Random
            };
            let Some(pit) = choose_move(&engine, &state, strategy, &mut rng) else { break };
            state = engine.sow(&state, pit).unwrap().state;
        }

        if engine.winner(&state) == Some(PlayerId::new(0)) {
            search_wins += 1;
        }
    }

    assert!(search_wins > games / 2, "search won only {search_wins}/{games}");
}

/// Moves out of range are structural errors, not silent no-ops.
#[test]
fn test_out_of_range_pit_is_an_error() {
    let engine = AyoEngine::new();
    let state = AyoState::new(PlayerId::new(0));

    assert!(engine.sow(&state, 12).is_err());
}

/// Sowing the opponent's pit leaves the state untouched.
#[test]
fn test_opponent_pit_is_a_no_op() {
    let engine = AyoEngine::new();
    let state = AyoState::new(PlayerId::new(0));

    let outcome = engine.sow(&state, 7).unwrap();
    assert_eq!(outcome.state, state);
    assert!(outcome.paths.is_empty());
    assert!(outcome.captures.is_empty());
}

#[test]
fn test_winner_is_higher_score() {
    let engine = AyoEngine::new();
    let mut state = AyoState::new(PlayerId::new(0));
    state.scores = [30, 18];
    state.board = [0; 12];
    state.game_over = true;

    assert_eq!(engine.winner(&state), Some(PlayerId::new(0)));
}
