use core::fmt;
use serde::{Deserialize, Serialize};

/// Single cell value stored by the gameplay engine. Zero is the empty cell;
/// any other value is a power of two starting at 2.
#[derive(
    Copy, Clone, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(transparent)]
pub struct Tile(u32);

impl Tile {
    pub const EMPTY: Tile = Tile(0);
    pub const TWO: Tile = Tile(2);
    pub const FOUR: Tile = Tile(4);

    pub const fn new(value: u32) -> Self {
        Self(value)
    }

    pub const fn value(self) -> u32 {
        self.0
    }

    pub const fn is_empty(self) -> bool {
        self.0 == 0
    }

    pub const fn is_valid(self) -> bool {
        self.0 == 0 || (self.0 >= 2 && self.0.is_power_of_two())
    }

    /// The tile produced by merging this tile with an equal neighbor.
    pub const fn merged(self) -> Tile {
        Tile(self.0.saturating_mul(2))
    }
}

impl fmt::Display for Tile {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_empty() {
            write!(f, ".")
        } else {
            write!(f, "{}", self.0)
        }
    }
}
