//! Ayo board state.
//!
//! Twelve pits in two rows of six. Pits 0–5 belong to player 0, pits
//! 6–11 to player 1. The game starts with four seeds in every pit, so
//! seeds on the board plus both score piles always total 48.

use serde::{Deserialize, Serialize};

use crate::core::{GameRng, PlayerId};

/// Number of pits on the board.
pub const PIT_COUNT: usize = 12;

/// Pits per player side.
pub const PITS_PER_SIDE: usize = 6;

/// Seeds in every pit at game start.
pub const STARTING_SEEDS: u8 = 4;

/// Total seeds in the game.
pub const TOTAL_SEEDS: u16 = (PIT_COUNT as u16) * (STARTING_SEEDS as u16);

/// Full Ayo game state.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct AyoState {
    /// Seed count per pit.
    pub board: [u8; PIT_COUNT],
    /// Captured seeds per player.
    pub scores: [u8; 2],
    /// Player to move.
    pub current_player: PlayerId,
    /// Set when the board empties or the eight-seed rule fires.
    pub game_over: bool,
}

impl AyoState {
    /// Fresh board with a chosen starting player.
    #[must_use]
    pub fn new(starting_player: PlayerId) -> Self {
        Self {
            board: [STARTING_SEEDS; PIT_COUNT],
            scores: [0, 0],
            current_player: starting_player,
            game_over: false,
        }
    }

    /// Fresh board with a uniformly random starting player.
    #[must_use]
    pub fn initialize(rng: &mut GameRng) -> Self {
        let starter = PlayerId::new(rng.gen_range(0..2) as u8);
        Self::new(starter)
    }

    /// Which player owns a pit.
    #[must_use]
    pub fn pit_owner(pit: usize) -> PlayerId {
        if pit < PITS_PER_SIDE {
            PlayerId::new(0)
        } else {
            PlayerId::new(1)
        }
    }

    /// Range of pit indices on a player's side.
    #[must_use]
    pub fn side(player: PlayerId) -> std::ops::Range<usize> {
        let start = player.index() * PITS_PER_SIDE;
        start..start + PITS_PER_SIDE
    }

    /// Seeds currently on the board.
    #[must_use]
    pub fn seeds_on_board(&self) -> u16 {
        self.board.iter().map(|&s| s as u16).sum()
    }

    /// Seeds on one player's side.
    #[must_use]
    pub fn seeds_on_side(&self, player: PlayerId) -> u16 {
        Self::side(player).map(|pit| self.board[pit] as u16).sum()
    }

    /// A player's captured-seed count.
    #[must_use]
    pub fn score(&self, player: PlayerId) -> u8 {
        self.scores[player.index()]
    }

    /// Whether a player has at least one sowable pit.
    #[must_use]
    pub fn has_move(&self, player: PlayerId) -> bool {
        Self::side(player).any(|pit| self.board[pit] > 0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_board() {
        let state = AyoState::new(PlayerId::new(0));

        assert_eq!(state.board, [4; 12]);
        assert_eq!(state.scores, [0, 0]);
        assert_eq!(state.seeds_on_board(), TOTAL_SEEDS);
        assert!(!state.game_over);
    }

    #[test]
    fn test_pit_ownership() {
        for pit in 0..6 {
            assert_eq!(AyoState::pit_owner(pit), PlayerId::new(0));
        }
        for pit in 6..12 {
            assert_eq!(AyoState::pit_owner(pit), PlayerId::new(1));
        }
    }

    #[test]
    fn test_side_ranges() {
        assert_eq!(AyoState::side(PlayerId::new(0)), 0..6);
        assert_eq!(AyoState::side(PlayerId::new(1)), 6..12);
    }

    #[test]
    fn test_seeds_on_side() {
        let mut state = AyoState::new(PlayerId::new(0));
        state.board = [1, 0, 2, 0, 0, 0, 3, 0, 0, 0, 0, 1];

        assert_eq!(state.seeds_on_side(PlayerId::new(0)), 3);
        assert_eq!(state.seeds_on_side(PlayerId::new(1)), 4);
    }

    #[test]
    fn test_has_move() {
        let mut state = AyoState::new(PlayerId::new(0));
        state.board = [0, 0, 0, 0, 0, 0, 1, 0, 0, 0, 0, 0];

        assert!(!state.has_move(PlayerId::new(0)));
        assert!(state.has_move(PlayerId::new(1)));
    }

    #[test]
    fn test_initialize_random_starter() {
        let mut rng = GameRng::new(42);
        let starters: Vec<u8> = (0..32)
            .map(|_| AyoState::initialize(&mut rng).current_player.0)
            .collect();

        assert!(starters.iter().any(|&s| s == 0));
        assert!(starters.iter().any(|&s| s == 1));
    }
}
