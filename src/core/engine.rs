//! The rule-engine seam shared by all three games.
//!
//! Presentation and network adapters drive every game through the same
//! contract: enumerate legal moves, apply one, check for a terminal
//! state. Outcomes bundle the next state with display-only side effects
//! (sowing paths, capture lists, draw events); callers must never
//! reinterpret those as authoritative game data.

use super::error::EngineResult;
use super::player::PlayerId;
use super::rng::GameRng;

/// Rules contract implemented by the Ayo, Ludo and Whot engines.
///
/// `apply` is pure with respect to `state`: the input is never mutated,
/// the outcome carries a fresh state. The RNG handle is only touched by
/// operations the rules define as random (Whot's market reshuffle); the
/// others ignore it, which keeps the signature uniform for generic
/// drivers.
pub trait RuleEngine {
    /// Full game state snapshot.
    type State;
    /// Move descriptor.
    type Move;
    /// Next state plus display-only side effects.
    type Outcome;

    /// Enumerate legal moves for the player to act in `state`.
    ///
    /// Empty means the player cannot act (blocked, waiting on a roll, or
    /// the game is over).
    fn legal_moves(&self, state: &Self::State) -> Vec<Self::Move>;

    /// Apply a move.
    ///
    /// Gameplay-illegal moves yield an outcome whose state equals the
    /// input; structurally invalid moves yield `Err`.
    fn apply(
        &self,
        state: &Self::State,
        mv: &Self::Move,
        rng: &mut GameRng,
    ) -> EngineResult<Self::Outcome>;

    /// Check whether the game has ended.
    fn is_terminal(&self, state: &Self::State) -> bool;

    /// The winner, if the game has ended with one.
    fn winner(&self, state: &Self::State) -> Option<PlayerId>;
}
