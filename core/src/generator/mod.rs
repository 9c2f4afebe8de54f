use serde::{Deserialize, Serialize};

use crate::*;
pub use random::*;
pub use scripted::*;

mod random;
mod scripted;

/// Probability that a spawned tile is a 4 rather than a 2.
pub const FOUR_TILE_PROBABILITY: f64 = 0.2;

/// Placement chosen by a spawner: which empty cell to fill and with what.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Spawn {
    pub coords: Coord2,
    pub value: Tile,
}

/// Source of spawned tiles. Injected into the engine so hosts pick the
/// randomness and tests can replay a fixed sequence.
pub trait TileSpawner {
    /// Choose the next spawn among `empty` cells. The engine never calls
    /// this with an empty slice.
    fn next_spawn(&mut self, empty: &[Coord2]) -> Spawn;
}
