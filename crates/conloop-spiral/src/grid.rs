//! Square grid storage and cell addressing.
//!
//! Cells are addressed `[row][col]` with the origin in the top-left corner.
//! The grid stores its values row-major in a single buffer and hands them
//! out either as row slices or as the nested `Vec<Vec<u64>>` form.

use std::fmt;
use std::ops::Index;

use crate::Error;

/// A cell address in a square grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Position {
    /// Row, counted from the top
    pub row: usize,
    /// Column, counted from the left
    pub col: usize,
}

impl Position {
    /// Top-left corner, where every spiral starts.
    pub const ORIGIN: Self = Self { row: 0, col: 0 };

    /// Create a new position.
    pub const fn new(row: usize, col: usize) -> Self {
        Self { row, col }
    }

    /// Whether the position lies inside a `size × size` grid.
    #[inline]
    pub const fn is_within(&self, size: usize) -> bool {
        self.row < size && self.col < size
    }

    /// Offset of this cell in a row-major buffer of width `size`.
    #[inline]
    pub const fn index(&self, size: usize) -> usize {
        self.row * size + self.col
    }

    /// Manhattan distance between two positions.
    pub fn manhattan_distance(&self, other: &Self) -> usize {
        self.row.abs_diff(other.row) + self.col.abs_diff(other.col)
    }

    /// Whether `other` shares an edge with this cell.
    pub fn is_adjacent(&self, other: &Self) -> bool {
        self.manhattan_distance(other) == 1
    }

    /// Layer (concentric ring) this cell belongs to in a `size × size` grid,
    /// or `None` if the cell lies outside it.
    ///
    /// Layer 0 is the outer border.
    pub fn layer(&self, size: usize) -> Option<usize> {
        if !self.is_within(size) {
            return None;
        }
        let bottom = size - 1 - self.row;
        let right = size - 1 - self.col;
        Some(self.row.min(self.col).min(bottom).min(right))
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}][{}]", self.row, self.col)
    }
}

/// A square grid of integers.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(try_from = "RawGrid"))]
pub struct Grid {
    size: usize,
    cells: Vec<u64>,
}

/// Unchecked wire form of a [`Grid`].
#[cfg_attr(feature = "serde", derive(serde::Deserialize))]
pub struct RawGrid {
    /// Side length
    pub size: usize,
    /// Row-major values
    pub cells: Vec<u64>,
}

impl TryFrom<RawGrid> for Grid {
    type Error = Error;

    /// Accept the buffer only if it holds exactly `size²` values.
    fn try_from(raw: RawGrid) -> Result<Self, Error> {
        let RawGrid { size, cells } = raw;
        if size.checked_mul(size) != Some(cells.len()) {
            return Err(Error::CellCount {
                size,
                cells: cells.len(),
            });
        }
        Ok(Self { size, cells })
    }
}

impl Grid {
    /// Wrap a row-major buffer of exactly `size * size` values.
    pub(crate) fn from_cells(size: usize, cells: Vec<u64>) -> Self {
        debug_assert_eq!(cells.len(), size * size);
        Self { size, cells }
    }

    /// The 0×0 grid.
    pub const fn empty() -> Self {
        Self {
            size: 0,
            cells: Vec::new(),
        }
    }

    /// Side length.
    #[inline]
    pub const fn size(&self) -> usize {
        self.size
    }

    /// Whether the grid has no cells.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    /// Value at `[row][col]`, or `None` outside the grid.
    pub fn get(&self, row: usize, col: usize) -> Option<u64> {
        let position = Position::new(row, col);
        if !position.is_within(self.size) {
            return None;
        }
        self.cells.get(position.index(self.size)).copied()
    }

    /// Iterate over rows, top to bottom.
    pub fn rows(&self) -> impl Iterator<Item = &[u64]> + '_ {
        self.cells.chunks(self.size.max(1))
    }

    /// All values in row-major order.
    pub fn values(&self) -> &[u64] {
        &self.cells
    }

    /// Find the cell holding `value`.
    pub fn position_of(&self, value: u64) -> Option<Position> {
        let offset = self.cells.iter().position(|&v| v == value)?;
        Some(Position::new(offset / self.size, offset % self.size))
    }

    /// Convert into nested rows: outer = rows top-to-bottom, inner = columns
    /// left-to-right.
    pub fn into_rows(self) -> Vec<Vec<u64>> {
        self.rows().map(<[u64]>::to_vec).collect()
    }
}

impl Index<Position> for Grid {
    type Output = u64;

    fn index(&self, position: Position) -> &u64 {
        assert!(
            position.is_within(self.size),
            "position {} outside a {}x{} grid",
            position,
            self.size,
            self.size
        );
        &self.cells[position.index(self.size)]
    }
}

impl From<Grid> for Vec<Vec<u64>> {
    fn from(grid: Grid) -> Self {
        grid.into_rows()
    }
}

impl fmt::Display for Grid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let width = self
            .cells
            .iter()
            .max()
            .map_or(1, |max| max.to_string().len());

        for (r, row) in self.rows().enumerate() {
            if r > 0 {
                writeln!(f)?;
            }
            for (c, value) in row.iter().enumerate() {
                if c > 0 {
                    write!(f, " ")?;
                }
                write!(f, "{:>width$}", value, width = width)?;
            }
        }
        Ok(())
    }
}
