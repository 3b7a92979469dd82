//! Clockwise direction cycle.
//!
//! The spiral only ever moves in four directions and only ever turns
//! clockwise: right → down → left → up → right.

use crate::{Position, DIRECTIONS};

/// A heading on the grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Direction {
    /// Increasing column
    #[default]
    Right,
    /// Increasing row
    Down,
    /// Decreasing column
    Left,
    /// Decreasing row
    Up,
}

impl Direction {
    /// The four headings in the order the spiral visits them.
    pub const CLOCKWISE: [Self; DIRECTIONS] = [Self::Right, Self::Down, Self::Left, Self::Up];

    /// The next heading after a clockwise quarter turn.
    pub const fn turn_clockwise(self) -> Self {
        match self {
            Self::Right => Self::Down,
            Self::Down => Self::Left,
            Self::Left => Self::Up,
            Self::Up => Self::Right,
        }
    }

    /// Row and column offset of one step.
    pub const fn delta(self) -> (isize, isize) {
        match self {
            Self::Right => (0, 1),
            Self::Down => (1, 0),
            Self::Left => (0, -1),
            Self::Up => (-1, 0),
        }
    }

    /// Take one step from `from`, or `None` if it would leave a
    /// `size × size` grid.
    pub fn step(self, from: Position, size: usize) -> Option<Position> {
        let (dr, dc) = self.delta();
        let next = Position::new(
            from.row.checked_add_signed(dr)?,
            from.col.checked_add_signed(dc)?,
        );
        next.is_within(size).then_some(next)
    }
}
