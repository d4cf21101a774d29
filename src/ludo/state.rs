//! Ludo game state.
//!
//! Two players, four seeds each. A seed is in the house (`-1`), on the
//! track (`0..=55`) or finished (`56`). The level (1–5) gates the
//! ruleset: levels 1–2 roll one die and honor shield tiles, levels 3–5
//! roll two dice, ignore shields and grant the aggressive capture bonus.

use im::Vector;
use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use crate::core::{EngineResult, InvalidInput, PlayerId};

use super::geometry::{Color, FINISH, HOUSE};

/// Seeds per player.
pub const SEEDS_PER_PLAYER: usize = 4;

/// One seed on the board.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Seed {
    /// Index within the owning player, 0–3.
    pub id: u8,
    /// `-1` house, `0..=55` track, `56` finished.
    pub position: i8,
    /// Tile the seed last landed on. Differs from `position` after the
    /// aggressive capture bonus jumps the seed to the finish.
    pub landing_pos: i8,
    /// Delay before this seed's return animation, display-only.
    pub animation_delay_ms: u32,
}

impl Seed {
    #[must_use]
    pub fn in_house(id: u8) -> Self {
        Self {
            id,
            position: HOUSE,
            landing_pos: HOUSE,
            animation_delay_ms: 0,
        }
    }

    /// Whether the seed has reached the finish slot.
    #[must_use]
    pub fn is_finished(&self) -> bool {
        self.position == FINISH
    }
}

/// One player: identity, color and four seeds.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct LudoPlayer {
    pub id: PlayerId,
    pub color: Color,
    pub seeds: [Seed; SEEDS_PER_PLAYER],
}

impl LudoPlayer {
    fn new(id: PlayerId, color: Color) -> Self {
        Self {
            id,
            color,
            seeds: [
                Seed::in_house(0),
                Seed::in_house(1),
                Seed::in_house(2),
                Seed::in_house(3),
            ],
        }
    }

    /// Whether all four seeds are finished.
    #[must_use]
    pub fn has_won(&self) -> bool {
        self.seeds.iter().all(Seed::is_finished)
    }
}

/// Full Ludo game state.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct LudoState {
    pub players: [LudoPlayer; 2],
    pub current_player: PlayerId,
    /// Faces rolled this turn; empty while waiting for a roll.
    pub dice: SmallVec<[u8; 2]>,
    /// Parallel to `dice`.
    pub dice_used: SmallVec<[bool; 2]>,
    pub waiting_for_roll: bool,
    pub winner: Option<PlayerId>,
    /// Ruleset gate, 1–5.
    pub level: u8,
    /// Human-readable move history, append-only.
    pub log: Vector<String>,
}

impl LudoState {
    /// New game. Colors must differ and the level must be 1–5.
    pub fn new(color_a: Color, color_b: Color, level: u8) -> EngineResult<Self> {
        if color_a == color_b {
            return Err(InvalidInput::Malformed("both players share a color"));
        }
        if !(1..=5).contains(&level) {
            return Err(InvalidInput::OutOfRange {
                what: "level",
                value: level as usize,
                limit: 5,
            });
        }

        Ok(Self {
            players: [
                LudoPlayer::new(PlayerId::new(0), color_a),
                LudoPlayer::new(PlayerId::new(1), color_b),
            ],
            current_player: PlayerId::new(0),
            dice: SmallVec::new(),
            dice_used: SmallVec::new(),
            waiting_for_roll: true,
            winner: None,
            level,
            log: Vector::new(),
        })
    }

    /// Dice rolled per turn at this level.
    #[must_use]
    pub fn dice_per_turn(&self) -> usize {
        if self.level >= 3 {
            2
        } else {
            1
        }
    }

    /// Shields protect tiles only at levels 1–2.
    #[must_use]
    pub fn shields_active(&self) -> bool {
        self.level < 3
    }

    #[must_use]
    pub fn player(&self, id: PlayerId) -> &LudoPlayer {
        &self.players[id.index()]
    }

    #[must_use]
    pub fn current(&self) -> &LudoPlayer {
        self.player(self.current_player)
    }

    #[must_use]
    pub fn opponent(&self) -> &LudoPlayer {
        self.player(self.current_player.other())
    }

    /// Unused dice as `(index, face)` pairs.
    #[must_use]
    pub fn unused_dice(&self) -> SmallVec<[(usize, u8); 2]> {
        self.dice
            .iter()
            .enumerate()
            .filter(|&(i, _)| !self.dice_used[i])
            .map(|(i, &face)| (i, face))
            .collect()
    }
}
