//! Whot game state and the pending-action machine.
//!
//! At most one pending action is active at a time and it fully
//! determines which moves are legal. The pending player is always the
//! current player: creating a `Defend`/`Draw` on an opponent also moves
//! the turn to them, and `return_turn_to` records where it goes once the
//! obligation resolves.

use im::Vector;
use serde::{Deserialize, Serialize};

use crate::core::{EngineResult, GameRng, InvalidInput, PlayerId};

use super::cards::{shuffled_deck, Card, CardId, RuleVersion};

/// Cards dealt to each player at game start.
pub const HAND_SIZE: usize = 5;

/// What happens after a called suit is named.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum AfterCall {
    /// The caller keeps the turn (the WHOT countered an active draw).
    Continue,
    /// The turn passes to the next player.
    Pass,
}

/// The active obligation, if any.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum PendingAction {
    /// The player plays again under a chain restriction.
    Continue { player: PlayerId },
    /// The player must counter the attack or absorb `count` draws.
    Defend {
        player: PlayerId,
        count: u8,
        return_turn_to: PlayerId,
    },
    /// The player must absorb `count` draws, one card per pick.
    Draw {
        player: PlayerId,
        count: u8,
        return_turn_to: PlayerId,
    },
    /// The player must name a suit for the WHOT just played.
    CallSuit { player: PlayerId, next: AfterCall },
}

impl PendingAction {
    /// The player the obligation rests on.
    #[must_use]
    pub fn player(&self) -> PlayerId {
        match *self {
            PendingAction::Continue { player }
            | PendingAction::Defend { player, .. }
            | PendingAction::Draw { player, .. }
            | PendingAction::CallSuit { player, .. } => player,
        }
    }
}

/// One player at the table.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct WhotPlayer {
    pub id: PlayerId,
    pub name: String,
    pub hand: Vec<Card>,
}

/// Full Whot game state.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct WhotState {
    pub players: Vec<WhotPlayer>,
    /// Face-down draw pile, top at the end.
    pub market: Vec<Card>,
    /// Face-up discard pile, top at the back.
    pub pile: Vector<Card>,
    pub current_player: PlayerId,
    /// Turn direction, `+1` or `-1`.
    pub direction: i8,
    pub rule_version: RuleVersion,
    /// Suit named for the WHOT on top of the pile, if any.
    pub called_suit: Option<super::cards::Suit>,
    /// Card most recently played.
    pub last_played: Option<Card>,
    pub pending: Option<PendingAction>,
    pub winner: Option<PlayerId>,
}

impl WhotState {
    /// Deal a fresh game: shuffle, deal `HAND_SIZE` each, flip the first
    /// pile card. Requires at least two named players.
    pub fn deal(names: &[&str], rule_version: RuleVersion, rng: &mut GameRng) -> EngineResult<Self> {
        if names.len() < 2 {
            return Err(InvalidInput::Malformed("a game needs at least two players"));
        }
        let deck_size = super::cards::build_deck(rule_version).len();
        if names.len() * HAND_SIZE + 1 > deck_size {
            return Err(InvalidInput::OutOfRange {
                what: "player count",
                value: names.len(),
                limit: (deck_size - 1) / HAND_SIZE,
            });
        }

        let mut market = shuffled_deck(rule_version, rng);
        let players = names
            .iter()
            .enumerate()
            .map(|(i, &name)| WhotPlayer {
                id: PlayerId::new(i as u8),
                name: name.to_string(),
                hand: market.split_off(market.len() - HAND_SIZE),
            })
            .collect();

        let mut pile = Vector::new();
        if let Some(first) = market.pop() {
            pile.push_back(first);
        }

        Ok(Self {
            players,
            market,
            pile,
            current_player: PlayerId::new(0),
            direction: 1,
            rule_version,
            called_suit: None,
            last_played: None,
            pending: None,
            winner: None,
        })
    }

    #[must_use]
    pub fn player(&self, id: PlayerId) -> &WhotPlayer {
        &self.players[id.index()]
    }

    #[must_use]
    pub fn current(&self) -> &WhotPlayer {
        self.player(self.current_player)
    }

    /// Player after `id` in turn order.
    #[must_use]
    pub fn player_after(&self, id: PlayerId) -> PlayerId {
        id.next_in(self.players.len(), self.direction)
    }

    /// Top of the discard pile.
    #[must_use]
    pub fn pile_top(&self) -> Option<&Card> {
        self.pile.last()
    }

    /// Find a card id anywhere in the game.
    #[must_use]
    pub fn contains_card(&self, id: CardId) -> bool {
        self.players.iter().any(|p| p.hand.iter().any(|c| c.id == id))
            || self.market.iter().any(|c| c.id == id)
            || self.pile.iter().any(|c| c.id == id)
    }

    /// Total cards across hands, market and pile.
    #[must_use]
    pub fn card_count(&self) -> usize {
        self.players.iter().map(|p| p.hand.len()).sum::<usize>()
            + self.market.len()
            + self.pile.len()
    }

    /// Hand rank sum for exhaustion scoring.
    #[must_use]
    pub fn hand_value(&self, id: PlayerId) -> u32 {
        self.player(id).hand.iter().map(|c| c.rank as u32).sum()
    }
}
