//! Card legality for both rule versions.

use super::cards::{Card, RuleVersion};
use super::state::{PendingAction, WhotState};

/// Whether `card` matches the pile top by suit or number.
fn matches_top(card: &Card, top: &Card) -> bool {
    card.suit == top.suit || card.number == top.number
}

/// Whether the current player may play `card` from hand right now.
///
/// The pending action narrows legality: a `Defend` only accepts a
/// number match against the attack card, a rule-1 `Draw` only accepts
/// WHOT, a `Continue` after a WHOT follows the called suit.
#[must_use]
pub fn can_play(state: &WhotState, card: &Card) -> bool {
    let Some(top) = state.pile_top() else {
        return false;
    };

    match state.rule_version {
        RuleVersion::Rule1 => match state.pending {
            Some(PendingAction::Defend { player, .. }) if player == state.current_player => {
                card.number == top.number
            }
            Some(PendingAction::Draw { player, .. }) if player == state.current_player => {
                card.is_whot()
            }
            Some(PendingAction::CallSuit { .. }) => false,
            Some(PendingAction::Continue { player }) if player == state.current_player => {
                if top.is_whot() {
                    state.called_suit == Some(card.suit)
                } else {
                    matches_top(card, top)
                }
            }
            _ => {
                if card.is_whot() {
                    true
                } else if top.is_whot() {
                    state.called_suit == Some(card.suit) || card.is_whot()
                } else {
                    matches_top(card, top)
                }
            }
        },
        RuleVersion::Rule2 => match state.pending {
            Some(PendingAction::CallSuit { .. }) => false,
            Some(PendingAction::Draw { player, .. }) if player == state.current_player => false,
            _ => matches_top(card, top),
        },
    }
}
