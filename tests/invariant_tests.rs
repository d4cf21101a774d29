//! Cross-engine invariants under generated input.
//!
//! Property tests for conservation laws, no-panic guarantees on
//! arbitrary move input, RNG resumability and serde round-trips.

use proptest::prelude::*;

use naija_games::ayo::{AyoEngine, AyoState, TOTAL_SEEDS};
use naija_games::core::{GameRng, GameRngState, RuleEngine};
use naija_games::ludo::{Color, LudoEngine, LudoMove, LudoState};
use naija_games::whot::{RuleVersion, WhotEngine, WhotMove, WhotState};
use smallvec::smallvec;

fn ayo_total(state: &AyoState) -> u16 {
    state.seeds_on_board() + state.scores.iter().map(|&s| s as u16).sum::<u16>()
}

proptest! {
    /// Every reachable Ayo state holds exactly 48 seeds across board
    /// and scores.
    #[test]
    fn prop_ayo_seed_conservation(seed in any::<u64>(), moves in prop::collection::vec(0usize..12, 0..120)) {
        let engine = AyoEngine::new();
        let mut rng = GameRng::new(seed);
        let mut state = AyoState::initialize(&mut rng);

        for pit in moves {
            let out = engine.sow(&state, pit).unwrap();
            state = out.state;
            prop_assert_eq!(ayo_total(&state), TOTAL_SEEDS);
        }
    }

    /// Arbitrary pit indices never panic: in range is Ok, out of range
    /// is a structural error.
    #[test]
    fn prop_ayo_no_panic_on_any_pit(seed in any::<u64>(), pit in any::<usize>()) {
        let engine = AyoEngine::new();
        let mut rng = GameRng::new(seed);
        let state = AyoState::initialize(&mut rng);

        let result = engine.sow(&state, pit);
        prop_assert_eq!(result.is_err(), pit >= 12);
    }

    /// Fabricated Ludo moves never panic and never corrupt positions.
    #[test]
    fn prop_ludo_no_panic_on_fabricated_moves(
        seed in any::<u64>(),
        seed_id in 0u8..8,
        from in -2i8..60,
        steps in 0u8..14,
        target in -2i8..60,
    ) {
        let engine = LudoEngine::new();
        let mut rng = GameRng::new(seed);
        let state = engine.roll_dice(
            &LudoState::new(Color::Red, Color::Blue, 2).unwrap(),
            &mut rng,
        );

        let mv = LudoMove {
            seed_id,
            from,
            dice: smallvec![0],
            steps,
            target,
            is_capture: false,
        };
        if let Ok(out) = engine.apply_move(&state, &mv) {
            for player in &out.state.players {
                for s in &player.seeds {
                    prop_assert!(s.position >= -1 && s.position <= 56);
                }
            }
        }
    }

    /// Arbitrary Whot card ids never panic; conservation holds when the
    /// move is accepted.
    #[test]
    fn prop_whot_card_conservation(seed in any::<u64>(), ids in prop::collection::vec(any::<u32>(), 0..40)) {
        let engine = WhotEngine::new();
        let mut rng = GameRng::new(seed);
        let mut state = WhotState::deal(&["Ada", "Bola"], RuleVersion::Rule1, &mut rng).unwrap();
        let deck_size = state.card_count();

        for id in ids {
            if let Ok(out) = engine.apply_move(&state, &WhotMove::Play(id), &mut rng) {
                state = out.state;
                prop_assert_eq!(state.card_count(), deck_size);
            }
        }
    }

    /// A restored RNG continues the exact stream it was captured from.
    #[test]
    fn prop_rng_state_restore(seed in any::<u64>(), warmup in 0usize..50) {
        let mut rng = GameRng::new(seed);
        for _ in 0..warmup {
            rng.roll_die();
        }

        let snapshot: GameRngState = rng.state();
        let mut restored = GameRng::from_state(&snapshot);

        for _ in 0..20 {
            prop_assert_eq!(rng.roll_die(), restored.roll_die());
        }
    }

    /// Game states survive a serde round-trip.
    #[test]
    fn prop_states_serde_round_trip(seed in any::<u64>()) {
        let mut rng = GameRng::new(seed);

        let ayo = AyoState::initialize(&mut rng);
        let json = serde_json::to_string(&ayo).unwrap();
        prop_assert_eq!(serde_json::from_str::<AyoState>(&json).unwrap(), ayo);

        let ludo = LudoState::new(Color::Green, Color::Yellow, 3).unwrap();
        let json = serde_json::to_string(&ludo).unwrap();
        prop_assert_eq!(serde_json::from_str::<LudoState>(&json).unwrap(), ludo);

        let whot = WhotState::deal(&["Ada", "Bola"], RuleVersion::Rule2, &mut rng).unwrap();
        let json = serde_json::to_string(&whot).unwrap();
        prop_assert_eq!(serde_json::from_str::<WhotState>(&json).unwrap(), whot);
    }
}

/// Every Ludo seed is always in exactly one of house, track or
/// finished, across a full game.
#[test]
fn test_ludo_seed_zone_invariant() {
    let engine = LudoEngine::new();
    let mut rng = GameRng::new(5);
    let mut state = LudoState::new(Color::Red, Color::Blue, 2).unwrap();

    for _ in 0..20_000 {
        if state.winner.is_some() {
            break;
        }
        for player in &state.players {
            assert_eq!(player.seeds.len(), 4);
            for seed in &player.seeds {
                assert!(seed.position >= -1 && seed.position <= 56);
            }
        }
        if state.waiting_for_roll {
            state = engine.roll_dice(&state, &mut rng);
            continue;
        }
        state = match naija_games::ludo::choose_move(&engine, &state, &mut rng) {
            Some(mv) => engine.apply_move(&state, &mv).unwrap().state,
            None => engine.pass_turn(&state),
        };
    }
    assert!(state.winner.is_some());
}

/// Turn alternation in Ayo: the mover only keeps the turn when the
/// opponent is starved.
#[test]
fn test_ayo_turn_alternation_invariant() {
    let engine = AyoEngine::new();
    let mut rng = GameRng::new(11);
    let mut state = AyoState::initialize(&mut rng);

    for _ in 0..300 {
        if engine.is_terminal(&state) {
            break;
        }
        let mover = state.current_player;
        let moves = engine.valid_moves(&state);
        let Some(&pit) = rng.choose(&moves) else { break };
        state = engine.sow(&state, pit).unwrap().state;

        if !state.game_over && state.current_player == mover {
            let starved = !state.has_move(mover.other());
            assert!(starved, "turn retained while the opponent could move");
        }
    }
}

/// The pending obligation always rests on the current player.
#[test]
fn test_whot_pending_player_invariant() {
    let engine = WhotEngine::new();

    for seed in 0..5u64 {
        let mut rng = GameRng::new(seed);
        let mut state = WhotState::deal(&["Ada", "Bola"], RuleVersion::Rule1, &mut rng).unwrap();

        for _ in 0..300 {
            if engine.is_terminal(&state) {
                break;
            }
            if let Some(pending) = state.pending {
                assert_eq!(pending.player(), state.current_player);
            }
            let moves = engine.valid_moves(&state);
            let Some(mv) = rng.choose(&moves).copied() else { break };
            state = engine.apply_move(&state, &mv, &mut rng).unwrap().state;
        }
    }
}
