//! Player identification.
//!
//! `PlayerId` is a 0-based newtype over `u8`. Ayo and Ludo are strictly
//! two-player; Whot supports any table size and walks turn order in
//! either direction.

use serde::{Deserialize, Serialize};

/// Player identifier, 0-based.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PlayerId(pub u8);

impl PlayerId {
    /// Create a new player ID.
    #[must_use]
    pub const fn new(id: u8) -> Self {
        Self(id)
    }

    /// Raw index for slice access.
    #[must_use]
    pub const fn index(self) -> usize {
        self.0 as usize
    }

    /// Iterate over all player IDs at a table of `player_count`.
    pub fn all(player_count: usize) -> impl Iterator<Item = PlayerId> {
        (0..player_count as u8).map(PlayerId)
    }

    /// The other player in a two-player game.
    #[must_use]
    pub const fn other(self) -> Self {
        Self(1 - self.0)
    }

    /// Next player in turn order.
    ///
    /// `direction` is `+1` or `-1` (Whot keeps a play direction even
    /// though no card in the current decks flips it).
    #[must_use]
    pub fn next_in(self, player_count: usize, direction: i8) -> Self {
        let count = player_count as i16;
        let next = (self.0 as i16 + direction as i16).rem_euclid(count);
        Self(next as u8)
    }
}

impl std::fmt::Display for PlayerId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Player {}", self.0)
    }
}
