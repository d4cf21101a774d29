//! Whot engine.
//!
//! - `cards`: suits, numbers, ranks, deck generation
//! - `state`: hands, market, pile, the pending-action machine
//! - `rules`: card legality under the two rule versions
//! - `engine`: effect application, forced draws, suit calling
//! - `ai`: 5-level heuristics

pub mod ai;
pub mod cards;
pub mod engine;
pub mod rules;
pub mod state;

pub use ai::{call_suit_choice, choose_move};
pub use cards::{build_deck, Card, CardId, RuleVersion, Suit, WHOT_NUMBER};
pub use engine::{WhotEngine, WhotEvent, WhotMove, WhotOutcome};
pub use rules::can_play;
pub use state::{AfterCall, PendingAction, WhotPlayer, WhotState};
