//! Ludo engine.
//!
//! - `geometry`: the shared ring coordinate system and shield tiles
//! - `state`: seeds, players, dice, turn flags
//! - `engine`: roll, legal-move generation (incl. combination moves),
//!   capture and bonus-turn resolution
//! - `ai`: the computer move policy

pub mod ai;
pub mod engine;
pub mod geometry;
pub mod state;

pub use ai::choose_move;
pub use engine::{CaptureEvent, LudoEngine, LudoMove, LudoOutcome};
pub use geometry::{BoardGeometry, Color, FINISH, HOME_STRETCH_START, HOUSE, TRACK_LEN};
pub use state::{LudoPlayer, LudoState, Seed, SEEDS_PER_PLAYER};
