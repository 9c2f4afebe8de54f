use alloc::collections::VecDeque;

use super::*;

/// Replays a fixed sequence of spawns, for deterministic tests and replays.
#[derive(Clone, Debug, Default)]
pub struct ScriptedTileSpawner {
    queue: VecDeque<Spawn>,
}

impl ScriptedTileSpawner {
    pub fn new(spawns: impl IntoIterator<Item = Spawn>) -> Self {
        Self {
            queue: spawns.into_iter().collect(),
        }
    }

    pub fn push(&mut self, coords: Coord2, value: Tile) {
        self.queue.push_back(Spawn { coords, value });
    }

    pub fn remaining(&self) -> usize {
        self.queue.len()
    }
}

impl TileSpawner for ScriptedTileSpawner {
    fn next_spawn(&mut self, empty: &[Coord2]) -> Spawn {
        match self.queue.pop_front() {
            Some(spawn) if empty.contains(&spawn.coords) => spawn,
            Some(spawn) => {
                log::warn!(
                    "Scripted spawn cell {:?} is taken, using {:?}",
                    spawn.coords,
                    empty[0]
                );
                Spawn {
                    coords: empty[0],
                    value: spawn.value,
                }
            }
            None => {
                log::warn!("Scripted spawns exhausted, placing a 2 in the first empty cell");
                Spawn {
                    coords: empty[0],
                    value: Tile::TWO,
                }
            }
        }
    }
}
