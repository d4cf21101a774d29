//! Whot move heuristics, layered by difficulty level.
//!
//! Levels stack: each level keeps the filters below it and adds one
//! more preference. Level 1 is uniform random over playable cards.

use rustc_hash::FxHashMap;

use crate::core::GameRng;

use super::cards::{Card, RuleVersion, Suit};
use super::engine::{WhotEngine, WhotMove};
use super::state::{PendingAction, WhotState};

/// Card numbers with a special effect, per rule version.
fn is_special(rule: RuleVersion, number: u8) -> bool {
    match rule {
        RuleVersion::Rule1 => matches!(number, 1 | 2 | 5 | 8 | 14 | 20),
        RuleVersion::Rule2 => matches!(number, 1 | 2 | 14),
    }
}

/// Cards that force the opponent to draw or defend.
fn is_attack(rule: RuleVersion, card: &Card) -> bool {
    match rule {
        RuleVersion::Rule1 => matches!(card.number, 2 | 5 | 14 | 20),
        RuleVersion::Rule2 => matches!(card.number, 2 | 14),
    }
}

/// Pick a move for the current player at the given difficulty (1..=5),
/// or `None` when the game is over.
#[must_use]
pub fn choose_move(
    engine: &WhotEngine,
    state: &WhotState,
    level: u8,
    rng: &mut GameRng,
) -> Option<WhotMove> {
    let moves = engine.valid_moves(state);
    if moves.is_empty() {
        return None;
    }

    if matches!(state.pending, Some(PendingAction::CallSuit { .. })) {
        return Some(WhotMove::CallSuit(call_suit_choice(&state.current().hand, rng)));
    }

    let hand = &state.current().hand;
    let mut playable: Vec<Card> = moves
        .iter()
        .filter_map(|mv| match mv {
            WhotMove::Play(id) => hand.iter().find(|c| c.id == *id).copied(),
            _ => None,
        })
        .collect();
    if playable.is_empty() {
        return Some(WhotMove::Pick);
    }

    if level >= 2 {
        keep_if_any(&mut playable, |c| !c.is_whot());
    }
    if level >= 4 && opponent_is_short(state) {
        keep_if_any(&mut playable, |c| is_attack(state.rule_version, c));
    } else if level >= 3 {
        keep_if_any(&mut playable, |c| !is_special(state.rule_version, c.number));
    }
    if level >= 5 {
        let mut counts: FxHashMap<Suit, usize> = FxHashMap::default();
        for c in hand.iter().filter(|c| !c.is_whot()) {
            *counts.entry(c.suit).or_insert(0) += 1;
        }
        if let Some(&best) = counts.values().max() {
            keep_if_any(&mut playable, |c| counts.get(&c.suit) == Some(&best));
        }
    }

    rng.choose(&playable).map(|c| WhotMove::Play(c.id))
}

/// Narrow `cards` to those matching `keep`, unless that empties the set.
fn keep_if_any(cards: &mut Vec<Card>, keep: impl Fn(&Card) -> bool) {
    if cards.iter().any(&keep) {
        cards.retain(keep);
    }
}

fn opponent_is_short(state: &WhotState) -> bool {
    state
        .players
        .iter()
        .any(|p| p.id != state.current_player && p.hand.len() <= 2)
}

/// The most frequent non-WHOT suit in `hand`, random on ties or when
/// the hand holds only WHOT cards.
#[must_use]
pub fn call_suit_choice(hand: &[Card], rng: &mut GameRng) -> Suit {
    let mut counts: FxHashMap<Suit, usize> = FxHashMap::default();
    for card in hand.iter().filter(|c| !c.is_whot()) {
        *counts.entry(card.suit).or_insert(0) += 1;
    }

    let Some(&best) = counts.values().max() else {
        return Suit::CALLABLE[rng.gen_range_usize(0..Suit::CALLABLE.len())];
    };
    let tied: Vec<Suit> = Suit::CALLABLE
        .iter()
        .copied()
        .filter(|s| counts.get(s) == Some(&best))
        .collect();
    tied[rng.gen_range_usize(0..tied.len())]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::PlayerId;
    use crate::whot::cards::build_deck;
    use crate::whot::state::WhotPlayer;

    fn card(suit: Suit, number: u8) -> Card {
        build_deck(RuleVersion::Rule1)
            .into_iter()
            .find(|c| c.suit == suit && c.number == number)
            .unwrap()
    }

    fn fixture(hands: [&[Card]; 2], top: Card) -> WhotState {
        let dealt: Vec<u32> = hands
            .iter()
            .flat_map(|h| h.iter().map(|c| c.id))
            .chain(std::iter::once(top.id))
            .collect();
        WhotState {
            players: hands
                .iter()
                .enumerate()
                .map(|(i, hand)| WhotPlayer {
                    id: PlayerId::new(i as u8),
                    name: format!("P{i}"),
                    hand: hand.to_vec(),
                })
                .collect(),
            market: build_deck(RuleVersion::Rule1)
                .into_iter()
                .filter(|c| !dealt.contains(&c.id))
                .collect(),
            pile: im::Vector::unit(top),
            current_player: PlayerId::new(0),
            direction: 1,
            rule_version: RuleVersion::Rule1,
            called_suit: None,
            last_played: None,
            pending: None,
            winner: None,
        }
    }

    #[test]
    fn test_level2_prefers_direct_match_over_whot() {
        let engine = WhotEngine::new();
        let mut rng = GameRng::new(42);
        let wild = build_deck(RuleVersion::Rule1).into_iter().find(|c| c.is_whot()).unwrap();
        let direct = card(Suit::Circle, 3);
        let state = fixture([&[wild, direct], &[card(Suit::Square, 10)]], card(Suit::Circle, 5));

        for _ in 0..10 {
            assert_eq!(choose_move(&engine, &state, 2, &mut rng), Some(WhotMove::Play(direct.id)));
        }
    }

    #[test]
    fn test_level3_saves_specials() {
        let engine = WhotEngine::new();
        let mut rng = GameRng::new(42);
        let special = card(Suit::Circle, 2);
        let plain = card(Suit::Circle, 3);
        let state = fixture(
            [&[special, plain], &[card(Suit::Square, 10), card(Suit::Square, 11), card(Suit::Square, 13)]],
            card(Suit::Circle, 5),
        );

        for _ in 0..10 {
            assert_eq!(choose_move(&engine, &state, 3, &mut rng), Some(WhotMove::Play(plain.id)));
        }
    }

    #[test]
    fn test_level4_attacks_short_handed_opponent() {
        let engine = WhotEngine::new();
        let mut rng = GameRng::new(42);
        let attack = card(Suit::Circle, 2);
        let plain = card(Suit::Circle, 3);
        let state = fixture([&[attack, plain], &[card(Suit::Square, 10)]], card(Suit::Circle, 5));

        for _ in 0..10 {
            assert_eq!(choose_move(&engine, &state, 4, &mut rng), Some(WhotMove::Play(attack.id)));
        }
    }

    #[test]
    fn test_picks_when_nothing_playable() {
        let engine = WhotEngine::new();
        let mut rng = GameRng::new(42);
        let state = fixture(
            [&[card(Suit::Square, 10)], &[card(Suit::Triangle, 3)]],
            card(Suit::Circle, 5),
        );

        assert_eq!(choose_move(&engine, &state, 1, &mut rng), Some(WhotMove::Pick));
    }

    #[test]
    fn test_call_suit_choice_prefers_majority_suit() {
        let mut rng = GameRng::new(42);
        let hand = [card(Suit::Square, 10), card(Suit::Square, 11), card(Suit::Circle, 3)];

        assert_eq!(call_suit_choice(&hand, &mut rng), Suit::Square);
    }

    #[test]
    fn test_call_suit_choice_on_empty_hand_is_callable() {
        let mut rng = GameRng::new(42);
        let suit = call_suit_choice(&[], &mut rng);

        assert!(Suit::CALLABLE.contains(&suit));
    }
}
