//! Cards and deck generation.
//!
//! The deck uses the classic Nigerian Whot composition: each suit has a
//! fixed number set, star cards score double, and the wild WHOT card
//! carries number 20. Rule version 1 plays with five WHOT cards; rule
//! version 2 plays with none.

use serde::{Deserialize, Serialize};

use crate::core::GameRng;

/// The wild card's number.
pub const WHOT_NUMBER: u8 = 20;

/// Unique card identifier within one deck.
pub type CardId = u32;

/// Card suits. `Whot` is the wild suit.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Suit {
    Circle,
    Triangle,
    Cross,
    Square,
    Star,
    Whot,
}

impl Suit {
    /// The five callable suits, in deck order.
    pub const CALLABLE: [Suit; 5] = [
        Suit::Circle,
        Suit::Triangle,
        Suit::Cross,
        Suit::Square,
        Suit::Star,
    ];
}

/// Which ruleset a game plays under.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum RuleVersion {
    /// Defend/counter chains, Pick Three, WHOT wilds.
    Rule1,
    /// Unconditional draws, no WHOT cards.
    Rule2,
}

/// One card.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Card {
    pub id: CardId,
    pub suit: Suit,
    pub number: u8,
    /// Scoring value at market exhaustion: the number, doubled for
    /// stars, 20 for WHOT.
    pub rank: u16,
}

impl Card {
    fn new(id: CardId, suit: Suit, number: u8) -> Self {
        let rank = match suit {
            Suit::Star => 2 * number as u16,
            _ => number as u16,
        };
        Self { id, suit, number, rank }
    }

    /// Whether this is the wild WHOT card.
    #[must_use]
    pub fn is_whot(&self) -> bool {
        self.number == WHOT_NUMBER
    }
}

const CIRCLE_TRIANGLE_NUMBERS: [u8; 12] = [1, 2, 3, 4, 5, 7, 8, 10, 11, 12, 13, 14];
const CROSS_SQUARE_NUMBERS: [u8; 9] = [1, 2, 3, 5, 7, 10, 11, 13, 14];
const STAR_NUMBERS: [u8; 7] = [1, 2, 3, 4, 5, 7, 8];

/// Number of WHOT cards per rule version.
const WHOT_COUNT_RULE1: usize = 5;

/// Build an unshuffled deck for a rule version, ids sequential from 0.
#[must_use]
pub fn build_deck(rule_version: RuleVersion) -> Vec<Card> {
    let mut deck = Vec::with_capacity(54);
    let mut next_id: CardId = 0;
    let mut push = |deck: &mut Vec<Card>, suit: Suit, number: u8| {
        deck.push(Card::new(next_id, suit, number));
        next_id += 1;
    };

    for &number in &CIRCLE_TRIANGLE_NUMBERS {
        push(&mut deck, Suit::Circle, number);
    }
    for &number in &CIRCLE_TRIANGLE_NUMBERS {
        push(&mut deck, Suit::Triangle, number);
    }
    for &number in &CROSS_SQUARE_NUMBERS {
        push(&mut deck, Suit::Cross, number);
    }
    for &number in &CROSS_SQUARE_NUMBERS {
        push(&mut deck, Suit::Square, number);
    }
    for &number in &STAR_NUMBERS {
        push(&mut deck, Suit::Star, number);
    }
    if rule_version == RuleVersion::Rule1 {
        for _ in 0..WHOT_COUNT_RULE1 {
            push(&mut deck, Suit::Whot, WHOT_NUMBER);
        }
    }

    deck
}

/// Build and shuffle a deck.
#[must_use]
pub fn shuffled_deck(rule_version: RuleVersion, rng: &mut GameRng) -> Vec<Card> {
    let mut deck = build_deck(rule_version);
    rng.shuffle(&mut deck);
    deck
}
