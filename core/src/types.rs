use serde::{Deserialize, Serialize};

/// Single coordinate axis used for board width, height, and positions.
pub type Coord = u8;

/// Count type used for tile counts and total-cell counts.
pub type CellCount = u16;

/// Two-dimensional coordinates `(x, y)`.
pub type Coord2 = (Coord, Coord);

pub trait ToNdIndex {
    type Output;
    fn to_nd_index(self) -> Self::Output;
}

impl ToNdIndex for Coord2 {
    type Output = [usize; 2];

    fn to_nd_index(self) -> Self::Output {
        [self.0.into(), self.1.into()]
    }
}

pub const fn mult(a: Coord, b: Coord) -> CellCount {
    let a = a as CellCount;
    let b = b as CellCount;
    a.saturating_mul(b)
}

/// A swipe direction. The closed set of move inputs accepted by the engine.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

impl Direction {
    pub const ALL: [Direction; 4] = [
        Direction::Up,
        Direction::Down,
        Direction::Left,
        Direction::Right,
    ];

    /// Lines for this direction run along rows; otherwise along columns.
    pub const fn is_horizontal(self) -> bool {
        matches!(self, Self::Left | Self::Right)
    }

    /// Tiles travel toward the high end of the line, so extraction order
    /// is reversed to keep the leading edge at index 0.
    pub const fn is_reversed(self) -> bool {
        matches!(self, Self::Right | Self::Down)
    }
}

/// Iterates the cells of one line in travel order: the first coordinate
/// yielded is the leading edge of the swipe.
#[derive(Copy, Clone, Debug)]
pub(crate) struct LineIter {
    direction: Direction,
    line: Coord,
    size: Coord,
    step: Coord,
}

impl LineIter {
    pub(crate) fn new(direction: Direction, line: Coord, size: Coord) -> Self {
        Self {
            direction,
            line,
            size,
            step: 0,
        }
    }
}

impl Iterator for LineIter {
    type Item = Coord2;

    fn next(&mut self) -> Option<Self::Item> {
        if self.step >= self.size {
            return None;
        }

        let along = if self.direction.is_reversed() {
            self.size - 1 - self.step
        } else {
            self.step
        };
        self.step += 1;

        Some(if self.direction.is_horizontal() {
            (along, self.line)
        } else {
            (self.line, along)
        })
    }
}
