//! Whot effect application and forced-draw sequencing.
//!
//! `apply_move` handles one move at a time. Forced draws are absorbed
//! one `Pick` per call so a market reshuffle from the pile can happen
//! between individual draws. Gameplay-illegal moves return the state
//! unchanged; structurally invalid input is an error.

use serde::{Deserialize, Serialize};

use crate::core::{EngineResult, GameRng, InvalidInput, PlayerId, RuleEngine};

use super::cards::{Card, CardId, RuleVersion, Suit};
use super::rules::can_play;
use super::state::{AfterCall, PendingAction, WhotState};

/// A move a player can submit.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum WhotMove {
    /// Play a card from hand onto the pile.
    Play(CardId),
    /// Draw one card from the market.
    Pick,
    /// Name a suit for the WHOT just played.
    CallSuit(Suit),
}

/// Something that happened during a move, for the caller to render.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum WhotEvent {
    Played { player: PlayerId, card: Card },
    Drew { player: PlayerId, card: Card },
    /// The pile (all but its top card) was shuffled back into the market.
    MarketReshuffled { cards: usize },
    SuitCalled { player: PlayerId, suit: Suit },
    /// A counter-play cancelled the pending attack.
    AttackCancelled { player: PlayerId },
    GameWon { player: PlayerId },
    /// Market and pile ran dry; lowest hand value wins.
    ScoredOut { winner: PlayerId, scores: Vec<u32> },
}

/// Result of applying a move.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct WhotOutcome {
    pub state: WhotState,
    pub events: Vec<WhotEvent>,
}

impl WhotOutcome {
    fn unchanged(state: &WhotState) -> Self {
        Self { state: state.clone(), events: Vec::new() }
    }
}

/// The Whot rules engine. Stateless; rule selection lives in the state.
#[derive(Clone, Copy, Debug, Default)]
pub struct WhotEngine;

impl WhotEngine {
    #[must_use]
    pub fn new() -> Self {
        Self
    }

    /// Moves available to the current player.
    #[must_use]
    pub fn valid_moves(&self, state: &WhotState) -> Vec<WhotMove> {
        if state.winner.is_some() {
            return Vec::new();
        }
        if let Some(PendingAction::CallSuit { .. }) = state.pending {
            return Suit::CALLABLE.iter().map(|&s| WhotMove::CallSuit(s)).collect();
        }

        let mut moves: Vec<WhotMove> = state
            .current()
            .hand
            .iter()
            .filter(|card| can_play(state, card))
            .map(|card| WhotMove::Play(card.id))
            .collect();
        moves.push(WhotMove::Pick);
        moves
    }

    /// Apply one move for the current player.
    pub fn apply_move(
        &self,
        state: &WhotState,
        mv: &WhotMove,
        rng: &mut GameRng,
    ) -> EngineResult<WhotOutcome> {
        if state.winner.is_some() {
            return Ok(WhotOutcome::unchanged(state));
        }

        match *mv {
            WhotMove::Play(card_id) => self.play(state, card_id),
            WhotMove::Pick => self.pick(state, rng),
            WhotMove::CallSuit(suit) => self.call_suit(state, suit),
        }
    }

    fn play(&self, state: &WhotState, card_id: CardId) -> EngineResult<WhotOutcome> {
        if !state.contains_card(card_id) {
            return Err(InvalidInput::UnknownId { what: "card", id: card_id as u64 });
        }
        if matches!(state.pending, Some(PendingAction::CallSuit { .. })) {
            return Ok(WhotOutcome::unchanged(state));
        }

        let mover = state.current_player;
        let Some(pos) = state.current().hand.iter().position(|c| c.id == card_id) else {
            return Ok(WhotOutcome::unchanged(state));
        };
        let card = state.current().hand[pos];
        if !can_play(state, &card) {
            return Ok(WhotOutcome::unchanged(state));
        }

        let mut next = state.clone();
        let mut events = Vec::new();

        next.players[mover.index()].hand.remove(pos);
        next.pile.push_back(card);
        next.last_played = Some(card);
        if !card.is_whot() {
            next.called_suit = None;
        }
        events.push(WhotEvent::Played { player: mover, card });

        if next.players[mover.index()].hand.is_empty() {
            next.pending = None;
            next.winner = Some(mover);
            events.push(WhotEvent::GameWon { player: mover });
            return Ok(WhotOutcome { state: next, events });
        }

        // A play under Defend is always a counter: legality already
        // restricted it to the attacking number.
        if matches!(state.pending, Some(PendingAction::Defend { player, .. }) if player == mover) {
            next.pending = None;
            next.current_player = next.player_after(mover);
            events.push(WhotEvent::AttackCancelled { player: mover });
            return Ok(WhotOutcome { state: next, events });
        }

        self.apply_card_effect(&mut next, mover, &card, state.pending);
        Ok(WhotOutcome { state: next, events })
    }

    /// Effect table by card number, per rule version. Assumes the card
    /// is already on the pile and the mover still holds cards.
    fn apply_card_effect(
        &self,
        next: &mut WhotState,
        mover: PlayerId,
        card: &Card,
        old_pending: Option<PendingAction>,
    ) {
        let after = next.player_after(mover);

        match (next.rule_version, card.number) {
            (_, 1) | (RuleVersion::Rule1, 8) => {
                next.pending = Some(PendingAction::Continue { player: mover });
            }
            (RuleVersion::Rule1, 2) => {
                next.pending = Some(PendingAction::Defend {
                    player: after,
                    count: 2,
                    return_turn_to: next.player_after(after),
                });
                next.current_player = after;
            }
            (RuleVersion::Rule1, 5) => {
                next.pending = Some(PendingAction::Defend {
                    player: after,
                    count: 3,
                    return_turn_to: next.player_after(after),
                });
                next.current_player = after;
            }
            (RuleVersion::Rule2, 2) => {
                next.pending = Some(PendingAction::Draw {
                    player: after,
                    count: 2,
                    return_turn_to: mover,
                });
                next.current_player = after;
            }
            (_, 14) => {
                next.pending = Some(PendingAction::Draw {
                    player: after,
                    count: 1,
                    return_turn_to: mover,
                });
                next.current_player = after;
            }
            (RuleVersion::Rule1, 20) => {
                let countered_draw =
                    matches!(old_pending, Some(PendingAction::Draw { player, .. }) if player == mover);
                next.pending = Some(PendingAction::CallSuit {
                    player: mover,
                    next: if countered_draw { AfterCall::Continue } else { AfterCall::Pass },
                });
            }
            _ => {
                next.pending = None;
                next.current_player = after;
            }
        }
    }

    /// Draw exactly one card from the market, reshuffling the pile into
    /// the market first if the market is empty.
    fn pick(&self, state: &WhotState, rng: &mut GameRng) -> EngineResult<WhotOutcome> {
        if matches!(state.pending, Some(PendingAction::CallSuit { .. })) {
            return Ok(WhotOutcome::unchanged(state));
        }

        let mover = state.current_player;
        let mut next = state.clone();
        let mut events = Vec::new();

        if next.market.is_empty() {
            if next.pile.len() <= 1 {
                return Ok(self.score_out(&mut next, &mut events));
            }
            let top = next.pile.remove(next.pile.len() - 1);
            let mut recycled: Vec<Card> = next.pile.iter().copied().collect();
            rng.shuffle(&mut recycled);
            events.push(WhotEvent::MarketReshuffled { cards: recycled.len() });
            next.market = recycled;
            next.pile = im::Vector::unit(top);
        }

        let card = match next.market.pop() {
            Some(card) => card,
            None => return Err(InvalidInput::CorruptState("market empty after reshuffle")),
        };
        next.players[mover.index()].hand.push(card);
        events.push(WhotEvent::Drew { player: mover, card });

        match state.pending {
            Some(PendingAction::Defend { player, count, return_turn_to }) if player == mover => {
                self.absorb(&mut next, mover, count, return_turn_to);
            }
            Some(PendingAction::Draw { player, count, return_turn_to }) if player == mover => {
                self.absorb(&mut next, mover, count, return_turn_to);
            }
            _ => {
                // Voluntary pick ends the turn.
                next.pending = None;
                next.current_player = next.player_after(mover);
            }
        }

        Ok(WhotOutcome { state: next, events })
    }

    /// One forced draw absorbed; decrement or resolve the obligation.
    fn absorb(&self, next: &mut WhotState, mover: PlayerId, count: u8, return_turn_to: PlayerId) {
        if count > 1 {
            let remaining = count - 1;
            next.pending = Some(match next.pending {
                Some(PendingAction::Defend { .. }) => PendingAction::Defend {
                    player: mover,
                    count: remaining,
                    return_turn_to,
                },
                _ => PendingAction::Draw { player: mover, count: remaining, return_turn_to },
            });
            return;
        }

        next.current_player = return_turn_to;
        let chained = next.rule_version == RuleVersion::Rule2
            && matches!(next.pending, Some(PendingAction::Draw { .. }))
            && matches!(next.last_played, Some(c) if c.number == 2 || c.number == 14);
        next.pending =
            if chained { Some(PendingAction::Continue { player: return_turn_to }) } else { None };
    }

    fn call_suit(&self, state: &WhotState, suit: Suit) -> EngineResult<WhotOutcome> {
        if suit == Suit::Whot {
            return Err(InvalidInput::Malformed("the wild suit cannot be called"));
        }
        let Some(PendingAction::CallSuit { player, next: after }) = state.pending else {
            return Ok(WhotOutcome::unchanged(state));
        };
        if player != state.current_player {
            return Ok(WhotOutcome::unchanged(state));
        }

        let mut next = state.clone();
        next.called_suit = Some(suit);
        match after {
            AfterCall::Continue => {
                next.pending = Some(PendingAction::Continue { player });
            }
            AfterCall::Pass => {
                next.pending = None;
                next.current_player = next.player_after(player);
            }
        }

        let events = vec![WhotEvent::SuitCalled { player, suit }];
        Ok(WhotOutcome { state: next, events })
    }

    /// Market and pile are exhausted; lowest hand value takes the game.
    fn score_out(&self, next: &mut WhotState, events: &mut Vec<WhotEvent>) -> WhotOutcome {
        let scores: Vec<u32> =
            next.players.iter().map(|p| next.hand_value(p.id)).collect();
        let winner = scores
            .iter()
            .enumerate()
            .min_by_key(|&(i, score)| (*score, i))
            .map(|(i, _)| PlayerId::new(i as u8))
            .unwrap_or(PlayerId::new(0));

        next.pending = None;
        next.winner = Some(winner);
        events.push(WhotEvent::ScoredOut { winner, scores });
        WhotOutcome { state: next.clone(), events: events.clone() }
    }
}

impl RuleEngine for WhotEngine {
    type State = WhotState;
    type Move = WhotMove;
    type Outcome = WhotOutcome;

    fn legal_moves(&self, state: &WhotState) -> Vec<WhotMove> {
        self.valid_moves(state)
    }

    fn apply(
        &self,
        state: &WhotState,
        mv: &WhotMove,
        rng: &mut GameRng,
    ) -> EngineResult<WhotOutcome> {
        self.apply_move(state, mv, rng)
    }

    fn is_terminal(&self, state: &WhotState) -> bool {
        state.winner.is_some()
    }

    fn winner(&self, state: &WhotState) -> Option<PlayerId> {
        state.winner
    }
}
