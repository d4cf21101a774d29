//! Opponent strategies for Ayo.
//!
//! Four cheap heuristics plus a depth-4 minimax with alpha-beta pruning.
//! All strategies pick from `AyoEngine::valid_moves`, so they can never
//! produce an illegal pit.

use crate::core::{GameRng, PlayerId};

use super::engine::AyoEngine;
use super::state::AyoState;

/// Search depth for [`AyoStrategy::AlphaBeta`].
const SEARCH_DEPTH: u8 = 4;

/// Available opponent strategies, weakest first.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum AyoStrategy {
    /// Uniformly random legal pit.
    Random,
    /// Pit with the most seeds.
    Greedy,
    /// First pit whose sow lands on the opponent's side, else random.
    Capture,
    /// First pit whose sow stays on the mover's side, else greedy.
    Scatter,
    /// Depth-4 minimax with alpha-beta pruning.
    AlphaBeta,
}

/// Pick a pit for the current player, or `None` when no move exists.
///
/// Ties are broken by the first candidate in pit-index order; only
/// `Random` (and the fallbacks that delegate to it) consume randomness.
#[must_use]
pub fn choose_move(
    engine: &AyoEngine,
    state: &AyoState,
    strategy: AyoStrategy,
    rng: &mut GameRng,
) -> Option<usize> {
    let moves = engine.valid_moves(state);
    if moves.is_empty() {
        return None;
    }

    match strategy {
        AyoStrategy::Random => rng.choose(&moves).copied(),
        AyoStrategy::Greedy => greedy(engine, state),
        AyoStrategy::Capture => {
            let mover = state.current_player;
            moves
                .iter()
                .copied()
                .find(|&pit| AyoState::pit_owner(engine.landing_pit(state, pit)) != mover)
                .or_else(|| rng.choose(&moves).copied())
        }
        AyoStrategy::Scatter => {
            let mover = state.current_player;
            moves
                .iter()
                .copied()
                .find(|&pit| AyoState::pit_owner(engine.landing_pit(state, pit)) == mover)
                .or_else(|| greedy(engine, state))
        }
        AyoStrategy::AlphaBeta => alpha_move(engine, state),
    }
}

fn greedy(engine: &AyoEngine, state: &AyoState) -> Option<usize> {
    engine
        .valid_moves(state)
        .iter()
        .copied()
        .max_by_key(|&pit| (state.board[pit], std::cmp::Reverse(pit)))
}

/// Static evaluation from `me`'s perspective.
fn evaluate(state: &AyoState, me: PlayerId) -> i32 {
    let opp = me.other();
    let score_diff = state.score(me) as i32 - state.score(opp) as i32;
    let side_diff = state.seeds_on_side(me) as i32 - state.seeds_on_side(opp) as i32;
    10 * score_diff + side_diff
}

fn alpha_move(engine: &AyoEngine, state: &AyoState) -> Option<usize> {
    let me = state.current_player;
    let mut best: Option<(usize, i32)> = None;

    for pit in engine.valid_moves(state) {
        let Ok(out) = engine.sow(state, pit) else { continue };
        let value = minimax(engine, &out.state, me, SEARCH_DEPTH - 1, i32::MIN + 1, i32::MAX);
        // Strict comparison keeps the first best pit in index order.
        if best.map_or(true, |(_, b)| value > b) {
            best = Some((pit, value));
        }
    }

    best.map(|(pit, _)| pit)
}

fn minimax(
    engine: &AyoEngine,
    state: &AyoState,
    me: PlayerId,
    depth: u8,
    mut alpha: i32,
    mut beta: i32,
) -> i32 {
    if depth == 0 || state.game_over {
        return evaluate(state, me);
    }

    let moves = engine.valid_moves(state);
    if moves.is_empty() {
        return evaluate(state, me);
    }

    // The engine can leave the turn with the mover (starved opponent),
    // so max/min is decided by whose turn the node actually is.
    let maximizing = state.current_player == me;
    let mut best = if maximizing { i32::MIN } else { i32::MAX };

    for pit in moves {
        let Ok(out) = engine.sow(state, pit) else { continue };
        let value = minimax(engine, &out.state, me, depth - 1, alpha, beta);

        if maximizing {
            best = best.max(value);
            alpha = alpha.max(value);
        } else {
            best = best.min(value);
            beta = beta.min(value);
        }
        if beta <= alpha {
            break;
        }
    }

    best
}
