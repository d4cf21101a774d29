//! Computer move policy for Ludo.
//!
//! Captures first, then house exits, then a uniformly random move.

use crate::core::GameRng;

use super::engine::{LudoEngine, LudoMove};
use super::geometry::HOUSE;
use super::state::LudoState;

/// Pick a move for the current player, or `None` when stuck.
#[must_use]
pub fn choose_move(
    engine: &LudoEngine,
    state: &LudoState,
    rng: &mut GameRng,
) -> Option<LudoMove> {
    let moves = engine.valid_moves(state);
    if moves.is_empty() {
        return None;
    }

    if let Some(capture) = moves.iter().find(|m| m.is_capture) {
        return Some(capture.clone());
    }
    if let Some(exit) = moves.iter().find(|m| m.from == HOUSE) {
        return Some(exit.clone());
    }
    rng.choose(&moves).cloned()
}
