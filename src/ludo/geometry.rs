//! Board geometry.
//!
//! Every color walks the same 52-cell ring, entering at its own offset,
//! then turns into a private 4-cell home stretch (track positions 52–55)
//! before the finish slot (56). Two seeds of different colors share a
//! tile exactly when their ring cells coincide, which is why captures
//! compare ring coordinates and never raw track positions.
//!
//! The geometry is an explicit value handed to the engine at
//! construction, so move legality is testable without any global lookup.

use serde::{Deserialize, Serialize};

/// Cells on the shared ring.
pub const TRACK_LEN: u8 = 52;

/// First track position inside the private home stretch.
pub const HOME_STRETCH_START: i8 = 52;

/// Track position of the finish slot.
pub const FINISH: i8 = 56;

/// Position of a seed still in its house.
pub const HOUSE: i8 = -1;

/// Seed colors. Each maps to a fixed ring entry offset.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Color {
    Red,
    Green,
    Yellow,
    Blue,
}

impl Color {
    /// Ring cell where this color's track position 0 sits.
    #[must_use]
    pub const fn ring_offset(self) -> u8 {
        match self {
            Color::Red => 0,
            Color::Green => 13,
            Color::Yellow => 26,
            Color::Blue => 39,
        }
    }
}

/// Coordinate system plus the shield-tile table.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct BoardGeometry {
    shields: [u8; 8],
}

impl Default for BoardGeometry {
    fn default() -> Self {
        Self::standard()
    }
}

impl BoardGeometry {
    /// The standard board: each color's entry cell and the cell eight
    /// past it are shielded.
    #[must_use]
    pub fn standard() -> Self {
        Self {
            shields: [0, 8, 13, 21, 26, 34, 39, 47],
        }
    }

    /// Ring cell for a color at a track position.
    ///
    /// `None` for the house, the home stretch and the finish slot: a
    /// seed there occupies no shared tile and can neither capture nor be
    /// captured.
    #[must_use]
    pub fn cell(&self, color: Color, position: i8) -> Option<u8> {
        if (0..HOME_STRETCH_START).contains(&position) {
            Some((color.ring_offset() + position as u8) % TRACK_LEN)
        } else {
            None
        }
    }

    /// Whether a ring cell is a shield tile.
    #[must_use]
    pub fn is_shield(&self, cell: u8) -> bool {
        self.shields.contains(&cell)
    }
}
