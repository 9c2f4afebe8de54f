use super::*;

/// Spawner following the standard game rules: a uniformly chosen empty cell
/// receives a 2, or a 4 one time in five.
#[derive(Clone, Debug)]
pub struct RandomTileSpawner {
    rng: rand::rngs::SmallRng,
}

impl RandomTileSpawner {
    pub fn new(seed: u64) -> Self {
        use rand::prelude::*;

        Self {
            rng: SmallRng::seed_from_u64(seed),
        }
    }
}

impl TileSpawner for RandomTileSpawner {
    fn next_spawn(&mut self, empty: &[Coord2]) -> Spawn {
        use rand::prelude::*;

        let coords = empty[self.rng.random_range(0..empty.len())];
        let value = if self.rng.random_bool(FOUR_TILE_PROBABILITY) {
            Tile::FOUR
        } else {
            Tile::TWO
        };
        Spawn { coords, value }
    }
}
