#![no_std]

extern crate alloc;

use alloc::vec::Vec;
use core::fmt;
use core::ops::{Index, IndexMut};
use ndarray::Array2;
use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

pub use engine::*;
pub use error::*;
pub use generator::*;
pub use tile::*;
pub use types::*;

mod engine;
mod error;
mod generator;
mod tile;
mod types;

pub const DEFAULT_BOARD_SIZE: Coord = 4;
pub const DEFAULT_GOAL: u32 = 1024;

/// Inline capacity of per-line scratch buffers; larger boards spill.
const LINE_BUF: usize = 8;

#[derive(Copy, Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct GameConfig {
    pub size: Coord,
    pub goal: Tile,
}

impl GameConfig {
    pub const fn new_unchecked(size: Coord, goal: Tile) -> Self {
        Self { size, goal }
    }

    pub fn new(size: Coord, goal: u32) -> Self {
        let clamped = size.max(2);
        if clamped != size {
            log::warn!("Board size {} is too small to play, using {}", size, clamped);
        }
        Self::new_unchecked(clamped, normalize_goal(goal))
    }

    pub const fn total_cells(&self) -> CellCount {
        mult(self.size, self.size)
    }
}

impl Default for GameConfig {
    fn default() -> Self {
        Self::new(DEFAULT_BOARD_SIZE, DEFAULT_GOAL)
    }
}

fn normalize_goal(goal: u32) -> Tile {
    let normalized = goal.max(4).next_power_of_two();
    if normalized != goal {
        log::warn!(
            "Goal {} is not a power of two reachable by merging, using {}",
            goal,
            normalized
        );
    }
    Tile::new(normalized)
}

/// Square playing field. Invariant: every cell is empty or holds a power of
/// two no smaller than 2.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Board {
    cells: Array2<Tile>,
}

impl Board {
    pub fn new(size: Coord) -> Self {
        Self {
            cells: Array2::default((size.into(), size.into())),
        }
    }

    /// Builds a board from an existing grid, rejecting non-square shapes and
    /// cell values that break the invariant.
    pub fn from_cells(cells: Array2<Tile>) -> Result<Self> {
        let dim = cells.dim();
        if dim.0 != dim.1 || Coord::try_from(dim.0).is_err() {
            return Err(GameError::NonSquareBoard);
        }
        if cells.iter().any(|tile| !tile.is_valid()) {
            return Err(GameError::InvalidTileValue);
        }
        Ok(Self { cells })
    }

    pub fn size(&self) -> Coord {
        self.cells.dim().0.try_into().unwrap()
    }

    pub fn total_cells(&self) -> CellCount {
        mult(self.size(), self.size())
    }

    pub fn tile_count(&self) -> CellCount {
        self.cells
            .iter()
            .filter(|tile| !tile.is_empty())
            .count()
            .try_into()
            .unwrap()
    }

    pub fn tile_sum(&self) -> u64 {
        self.cells.iter().map(|tile| u64::from(tile.value())).sum()
    }

    pub fn empty_cells(&self) -> Vec<Coord2> {
        let size = self.size();
        let mut empty = Vec::new();
        for y in 0..size {
            for x in 0..size {
                if self[(x, y)].is_empty() {
                    empty.push((x, y));
                }
            }
        }
        empty
    }

    pub fn is_full(&self) -> bool {
        self.cells.iter().all(|tile| !tile.is_empty())
    }

    pub fn max_tile(&self) -> Tile {
        self.cells.iter().copied().max().unwrap_or(Tile::EMPTY)
    }

    pub fn contains(&self, tile: Tile) -> bool {
        self.cells.iter().any(|&cell| cell == tile)
    }

    /// True when some pair of horizontally or vertically adjacent cells holds
    /// equal non-empty values.
    pub fn has_mergeable_pair(&self) -> bool {
        let size = self.size();
        for y in 0..size {
            for x in 0..size {
                let tile = self[(x, y)];
                if tile.is_empty() {
                    continue;
                }
                if x + 1 < size && self[(x + 1, y)] == tile {
                    return true;
                }
                if y + 1 < size && self[(x, y + 1)] == tile {
                    return true;
                }
            }
        }
        false
    }

    /// Slides and merges every line toward `direction`. Pure board geometry:
    /// no randomness, no outcome bookkeeping. Returns whether any cell moved.
    pub fn shift(&mut self, direction: Direction) -> bool {
        let size = self.size();
        let mut changed = false;

        for line in 0..size {
            let mut tiles: SmallVec<[Tile; LINE_BUF]> = LineIter::new(direction, line, size)
                .map(|coords| self[coords])
                .collect();
            merge_line(&mut tiles);

            for (slot, coords) in LineIter::new(direction, line, size).enumerate() {
                let tile = tiles.get(slot).copied().unwrap_or(Tile::EMPTY);
                if self[coords] != tile {
                    self[coords] = tile;
                    changed = true;
                }
            }
        }

        changed
    }
}

/// Compacts zeros out of a travel-ordered line, then merges equal neighbors
/// in one leading-edge-to-tail scan. A cell produced by a merge never merges
/// again in the same pass. The result is the dense prefix; `shift` pads the
/// tail when writing back.
fn merge_line(tiles: &mut SmallVec<[Tile; LINE_BUF]>) {
    tiles.retain(|tile| !tile.is_empty());

    let mut i = 0;
    while i + 1 < tiles.len() {
        if tiles[i] == tiles[i + 1] {
            tiles[i] = tiles[i].merged();
            tiles.remove(i + 1);
        }
        i += 1;
    }
}

impl Index<Coord2> for Board {
    type Output = Tile;

    fn index(&self, coords: Coord2) -> &Self::Output {
        &self.cells[coords.to_nd_index()]
    }
}

impl IndexMut<Coord2> for Board {
    fn index_mut(&mut self, coords: Coord2) -> &mut Self::Output {
        &mut self.cells[coords.to_nd_index()]
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let size = self.size();
        for y in 0..size {
            for x in 0..size {
                if x > 0 {
                    write!(f, " ")?;
                }
                let tile = self[(x, y)];
                if tile.is_empty() {
                    write!(f, "{:>4}", ".")?;
                } else {
                    write!(f, "{:>4}", tile.value())?;
                }
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

/// Caller-visible result of a move request.
#[derive(Copy, Clone, Debug, PartialEq)]
pub enum MoveOutcome {
    NoChange,
    Moved,
    Won,
    Lost,
}

impl MoveOutcome {
    /// Whether this outcome could have caused an update to the game.
    pub const fn has_update(self) -> bool {
        use MoveOutcome::*;
        match self {
            NoChange => false,
            Moved => true,
            Won => true,
            Lost => true,
        }
    }
}
