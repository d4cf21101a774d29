//! Ayo (Mancala-variant) engine.
//!
//! - `state`: board, scores, turn flag
//! - `engine`: sowing, relay, capture, the eight-seed rule
//! - `ai`: heuristic strategies and depth-4 alpha-beta search

pub mod ai;
pub mod engine;
pub mod state;

pub use ai::{choose_move, AyoStrategy};
pub use engine::{AyoEngine, AyoOutcome, Capture};
pub use state::{AyoState, PITS_PER_SIDE, PIT_COUNT, STARTING_SEEDS, TOTAL_SEEDS};
