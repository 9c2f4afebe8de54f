use core::num::Saturating;
use serde::{Deserialize, Serialize};

use crate::*;

/// Terminal classification of a game.
#[derive(Copy, Clone, Debug, PartialEq, Serialize, Deserialize)]
pub enum Outcome {
    InProgress,
    Won,
    Lost,
}

impl Outcome {
    pub const fn is_finished(self) -> bool {
        matches!(self, Self::Won | Self::Lost)
    }
}

impl Default for Outcome {
    fn default() -> Self {
        Self::InProgress
    }
}

/// The grid transition engine: owns the board, the goal, and the move
/// counter, and applies each swipe as one atomic state transition.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct GridEngine {
    config: GameConfig,
    board: Board,
    move_count: Saturating<u32>,
    outcome: Outcome,
}

impl GridEngine {
    /// Fresh game: empty board plus one spawned tile.
    pub fn new(config: GameConfig, spawner: &mut impl TileSpawner) -> Self {
        let mut engine = Self {
            config,
            board: Board::new(config.size),
            move_count: Saturating(0),
            outcome: Default::default(),
        };
        engine.spawn_tile(spawner);
        engine
    }

    /// Restores a game from a saved position, re-deriving the outcome.
    pub fn from_parts(config: GameConfig, board: Board, move_count: u32) -> Result<Self> {
        if board.size() != config.size {
            return Err(GameError::SizeMismatch);
        }

        let mut engine = Self {
            config,
            board,
            move_count: Saturating(move_count),
            outcome: Default::default(),
        };
        engine.evaluate_outcome();
        Ok(engine)
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn tile_at(&self, coords: Coord2) -> Tile {
        self.board[coords]
    }

    pub fn outcome(&self) -> Outcome {
        self.outcome
    }

    pub fn is_finished(&self) -> bool {
        self.outcome.is_finished()
    }

    pub fn move_count(&self) -> u32 {
        self.move_count.0
    }

    pub fn config(&self) -> GameConfig {
        self.config
    }

    pub fn goal(&self) -> Tile {
        self.config.goal
    }

    pub fn size(&self) -> Coord {
        self.config.size
    }

    pub fn max_tile(&self) -> Tile {
        self.board.max_tile()
    }

    /// Applies one swipe. A move that changes nothing (including any move on
    /// a finished game) is a no-op: no spawn, no count, no re-evaluation.
    pub fn apply_move(
        &mut self,
        direction: Direction,
        spawner: &mut impl TileSpawner,
    ) -> MoveOutcome {
        if self.outcome.is_finished() {
            return MoveOutcome::NoChange;
        }

        if !self.board.shift(direction) {
            return MoveOutcome::NoChange;
        }

        self.spawn_tile(spawner);
        self.move_count += 1;
        self.evaluate_outcome();

        match self.outcome {
            Outcome::Won => MoveOutcome::Won,
            Outcome::Lost => MoveOutcome::Lost,
            Outcome::InProgress => MoveOutcome::Moved,
        }
    }

    /// Reinitializes the whole state and spawns one tile. Always succeeds.
    pub fn reset(&mut self, spawner: &mut impl TileSpawner) {
        self.board = Board::new(self.config.size);
        self.move_count = Saturating(0);
        self.outcome = Default::default();
        self.spawn_tile(spawner);
    }

    /// Changing the board size is a full reset with the new dimension.
    pub fn resize(&mut self, size: Coord, spawner: &mut impl TileSpawner) {
        self.config = GameConfig::new(size, self.config.goal.value());
        self.reset(spawner);
    }

    /// Updates the goal without disturbing the board; checked at the next
    /// board-changing move.
    pub fn set_goal(&mut self, goal: u32) {
        self.config = GameConfig::new(self.config.size, goal);
    }

    fn spawn_tile(&mut self, spawner: &mut impl TileSpawner) {
        let empty = self.board.empty_cells();
        let Some(&first) = empty.first() else {
            log::warn!("No empty cell to spawn into, board left unchanged");
            return;
        };

        let spawn = spawner.next_spawn(&empty);
        let (x, y) = spawn.coords;
        let coords = if x < self.config.size
            && y < self.config.size
            && self.board[spawn.coords].is_empty()
        {
            spawn.coords
        } else {
            log::warn!(
                "Spawner chose occupied cell {:?}, using {:?}",
                spawn.coords,
                first
            );
            first
        };
        let value = if spawn.value.is_valid() && !spawn.value.is_empty() {
            spawn.value
        } else {
            log::warn!("Spawner produced invalid tile {:?}, using 2", spawn.value);
            Tile::TWO
        };
        self.board[coords] = value;
    }

    fn evaluate_outcome(&mut self) {
        if self.board.contains(self.config.goal) {
            self.outcome = Outcome::Won;
        } else if self.board.is_full() && !self.board.has_mergeable_pair() {
            self.outcome = Outcome::Lost;
        }
    }
}
