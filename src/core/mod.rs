//! Shared primitives for the three game engines.
//!
//! - `player`: type-safe player identifiers and turn-order helpers
//! - `rng`: deterministic, forkable, serializable RNG
//! - `error`: structural-input errors (`InvalidInput`)
//! - `engine`: the `RuleEngine` trait every game implements

pub mod engine;
pub mod error;
pub mod player;
pub mod rng;

pub use engine::RuleEngine;
pub use error::{EngineResult, InvalidInput};
pub use player::PlayerId;
pub use rng::{GameRng, GameRngState};
