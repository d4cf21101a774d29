//! # naija-games
//!
//! Pure rule engines for three Nigerian board and card games: Ayo
//! (a mancala variant), Ludo, and Whot.
//!
//! ## Design Principles
//!
//! 1. **Pure State Transitions**: Every engine is a set of synchronous
//!    functions over immutable-in/immutable-out state snapshots. No
//!    internal concurrency, no I/O, no shared mutable resources.
//!
//! 2. **Shared Move Contract**: Callers use `legal_moves(state)` then
//!    `apply(state, move, rng)` and render the returned effects
//!    (capture lists, sowing paths, card events) without reinterpreting
//!    game rules. The AI layers drive the same contract.
//!
//! 3. **Seeded Randomness**: Every randomized decision (starting
//!    player, dice, shuffles, AI tie-breaks) draws from an injectable
//!    `GameRng` so tests and replays can fix a seed.
//!
//! ## Error Policy
//!
//! Gameplay-illegal moves (wrong pit, unmet dice, off-suit card) are
//! silent no-ops returning the state unchanged. Structurally invalid
//! input (unknown ids, out-of-range indices) is `Err(InvalidInput)`.
//! Engines never panic on input reachable through the public API.
//!
//! ## Modules
//!
//! - `core`: player ids, seeded RNG, errors, the `RuleEngine` trait
//! - `ayo`: sowing/relay/capture engine with minimax AI
//! - `ludo`: movement/capture/turn-sequencing engine
//! - `whot`: card legality, special effects, pending-action machine

pub mod core;
pub mod ayo;
pub mod ludo;
pub mod whot;

// Re-export commonly used types
pub use crate::core::{
    EngineResult, GameRng, GameRngState, InvalidInput, PlayerId, RuleEngine,
};

pub use crate::ayo::{AyoEngine, AyoOutcome, AyoState, AyoStrategy};
pub use crate::ludo::{Color, LudoEngine, LudoMove, LudoOutcome, LudoState};
pub use crate::whot::{
    RuleVersion, WhotEngine, WhotMove, WhotOutcome, WhotState,
};
