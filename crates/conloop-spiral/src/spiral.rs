//! Clockwise spiral enumeration of a square grid.
//!
//! Two equivalent views of the same order:
//!
//! - **Probing**: [`fill`] walks the grid, writing consecutive values and
//!   turning clockwise whenever the next cell is outside the grid or
//!   already written.
//! - **Layers**: [`spiral_to_position`] locates the n-th cell directly from
//!   the layer it falls in and its offset along that layer's four edges.
//!
//! # Layer Structure
//!
//! For an N×N grid, layer `l` is the border of the `(N - 2l) × (N - 2l)`
//! square whose top-left corner is `[l][l]`:
//!
//! - Side 1 (odd centre): 1 cell
//! - Side s > 1: 4(s - 1) cells
//!
//! Cells before layer l: 4l(N - l)
//!
//! Within a layer of side s the walk covers four edges of `s - 1` cells
//! each: top (rightwards), right (downwards), bottom (leftwards) and left
//! (upwards), starting at the layer's top-left corner.

use tracing::{debug, trace};

use crate::{Direction, Error, Grid, Position, Result};

/// Number of concentric layers in a `size × size` grid.
#[inline]
pub const fn layer_count(size: usize) -> usize {
    size / 2 + size % 2
}

/// Number of cells in a `size × size` grid, or `None` past `u64::MAX`.
#[inline]
pub const fn cell_count(size: usize) -> Option<u64> {
    (size as u64).checked_mul(size as u64)
}

/// Number of cells in `layer` of a `size × size` grid.
///
/// Layers past the centre hold no cells.
pub const fn cells_in_layer(layer: usize, size: usize) -> u64 {
    if layer >= layer_count(size) {
        return 0;
    }
    let side = (size - 2 * layer) as u64;
    if side == 1 {
        1
    } else {
        4 * (side - 1)
    }
}

/// Number of cells in the layers strictly outside `layer`.
///
/// Formula: 4l(N - l), capped at N² once `layer` passes the centre.
/// Saturates at `u64::MAX` for grids with more cells than that.
pub const fn cells_before_layer(layer: usize, size: usize) -> u64 {
    let n = size as u64;
    if layer >= layer_count(size) {
        return n.saturating_mul(n);
    }
    let l = layer as u64;
    l.saturating_mul(4).saturating_mul(n - l)
}

/// Number of cells in layers `0..=layer`.
#[inline]
pub const fn cells_through_layer(layer: usize, size: usize) -> u64 {
    cells_before_layer(layer.saturating_add(1), size)
}

/// Locate the cell at 0-based spiral `index`, i.e. the cell that [`fill`]
/// writes `index + 1` into.
pub fn spiral_to_position(index: u64, size: usize) -> Result<Position> {
    let total = cell_count(size).ok_or(Error::GridTooLarge { size })?;
    if index >= total {
        return Err(Error::IndexOutOfRange { index, size });
    }

    // Binary search for the layer
    let mut low = 0usize;
    let mut high = layer_count(size) - 1;
    while low < high {
        let mid = (low + high) / 2;
        if cells_through_layer(mid, size) <= index {
            low = mid + 1;
        } else {
            high = mid;
        }
    }

    let layer = low;
    let offset = index - cells_before_layer(layer, size);
    let edge = (size - 2 * layer - 1) as u64;
    let (l, e) = (layer as u64, edge);

    if edge == 0 {
        return Ok(Position::new(layer, layer));
    }

    let (row, col) = match offset / edge {
        // Top edge, heading right
        0 => (l, l + offset),
        // Right edge, heading down
        1 => (l + (offset - e), l + e),
        // Bottom edge, heading left
        2 => (l + e, l + e - (offset - 2 * e)),
        // Left edge, heading up
        _ => (l + e - (offset - 3 * e), l),
    };

    Ok(Position::new(row as usize, col as usize))
}

/// Spiral index of `position` in a `size × size` grid.
///
/// Inverse of [`spiral_to_position`].
pub fn position_to_spiral(position: Position, size: usize) -> Result<u64> {
    if cell_count(size).is_none() {
        return Err(Error::GridTooLarge { size });
    }
    let layer = position
        .layer(size)
        .ok_or(Error::OutOfBounds { position, size })?;
    let base = cells_before_layer(layer, size);
    let edge = size - 2 * layer - 1;
    let (row, col) = (position.row, position.col);
    let (first, last) = (layer, layer + edge);

    let offset = if row == first && col < last {
        col - first
    } else if col == last && row < last {
        edge + (row - first)
    } else if row == last {
        2 * edge + (last - col)
    } else {
        3 * edge + (last - row)
    };

    Ok(base + offset as u64)
}

/// Fill a `size × size` grid with `1..=size²` in clockwise spiral order.
///
/// A `size` of 0 yields the empty grid.
///
/// # Panics
///
/// Panics if `size²` overflows `usize`.
pub fn fill(size: usize) -> Grid {
    let total = size * size;
    let mut canvas: Vec<Option<u64>> = vec![None; total];
    let mut position = Position::ORIGIN;
    let mut direction = Direction::Right;

    for value in 1..=total as u64 {
        canvas[position.index(size)] = Some(value);
        if value == total as u64 {
            break;
        }

        // At most one turn is ever needed before an empty cell comes up.
        loop {
            match direction.step(position, size) {
                Some(next) if canvas[next.index(size)].is_none() => {
                    position = next;
                    break;
                }
                _ => {
                    direction = direction.turn_clockwise();
                    trace!(value, ?position, ?direction, "turned");
                }
            }
        }
    }

    let cells: Vec<u64> = canvas.into_iter().flatten().collect();
    debug!(size, cells = cells.len(), "filled spiral grid");
    Grid::from_cells(size, cells)
}

/// Iterator over the cells of a square grid in spiral order.
pub struct SpiralWalk {
    size: usize,
    current: u64,
    limit: u64,
}

impl SpiralWalk {
    /// Walk every cell of a `size × size` grid.
    ///
    /// Grids with more than `u64::MAX` cells yield nothing.
    pub fn new(size: usize) -> Self {
        Self {
            size,
            current: 0,
            limit: cell_count(size).unwrap_or(0),
        }
    }

    /// Walk only layers `start_layer..=end_layer`.
    ///
    /// Layers past the centre are empty, and a reversed range walks nothing.
    pub fn layers(size: usize, start_layer: usize, end_layer: usize) -> Self {
        if cell_count(size).is_none() {
            return Self { size, current: 0, limit: 0 };
        }
        Self {
            size,
            current: cells_before_layer(start_layer, size),
            limit: cells_through_layer(end_layer, size),
        }
    }

    /// Side length of the grid being walked.
    pub fn size(&self) -> usize {
        self.size
    }
}

impl Iterator for SpiralWalk {
    type Item = Position;

    fn next(&mut self) -> Option<Self::Item> {
        if self.current >= self.limit {
            return None;
        }

        let position = spiral_to_position(self.current, self.size).ok()?;
        self.current += 1;
        Some(position)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.limit.saturating_sub(self.current) as usize;
        (remaining, Some(remaining))
    }
}

impl ExactSizeIterator for SpiralWalk {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fill_one() {
        assert_eq!(fill(1).into_rows(), vec![vec![1]]);
    }

    #[test]
    fn fill_two() {
        assert_eq!(fill(2).into_rows(), vec![vec![1, 2], vec![4, 3]]);
    }

    #[test]
    fn fill_three() {
        assert_eq!(
            fill(3).into_rows(),
            vec![vec![1, 2, 3], vec![8, 9, 4], vec![7, 6, 5]]
        );
    }

    #[test]
    fn fill_five() {
        assert_eq!(
            fill(5).into_rows(),
            vec![
                vec![1, 2, 3, 4, 5],
                vec![16, 17, 18, 19, 6],
                vec![15, 24, 25, 20, 7],
                vec![14, 23, 22, 21, 8],
                vec![13, 12, 11, 10, 9],
            ]
        );
    }

    #[test]
    fn fill_zero_is_empty() {
        let grid = fill(0);
        assert!(grid.is_empty());
        assert_eq!(grid.size(), 0);
        assert!(grid.into_rows().is_empty());
    }

    #[test]
    fn layer_sizes() {
        assert_eq!(layer_count(0), 0);
        assert_eq!(layer_count(1), 1);
        assert_eq!(layer_count(4), 2);
        assert_eq!(layer_count(5), 3);

        assert_eq!(cells_in_layer(0, 5), 16);
        assert_eq!(cells_in_layer(1, 5), 8);
        assert_eq!(cells_in_layer(2, 5), 1);
        assert_eq!(cells_in_layer(3, 5), 0);
        assert_eq!(cells_in_layer(1, 4), 4);
        assert_eq!(cells_in_layer(2, 4), 0);
    }

    #[test]
    fn layer_totals() {
        // 4l(N - l)
        assert_eq!(cells_before_layer(0, 5), 0);
        assert_eq!(cells_before_layer(1, 5), 16);
        assert_eq!(cells_before_layer(2, 5), 24);
        assert_eq!(cells_through_layer(2, 5), 25);
        assert_eq!(cells_through_layer(10, 5), 25);
        assert_eq!(cells_through_layer(1, 4), 16);
    }

    #[test]
    fn layer_totals_add_up() {
        for size in 0..20 {
            let sum: u64 = (0..layer_count(size)).map(|l| cells_in_layer(l, size)).sum();
            assert_eq!(sum, (size * size) as u64, "size {}", size);
        }
    }

    #[test]
    fn layers_past_the_centre_are_empty() {
        assert_eq!(layer_count(usize::MAX), usize::MAX / 2 + 1);
        assert_eq!(cells_in_layer(usize::MAX, 5), 0);
        assert_eq!(cells_before_layer(usize::MAX, 5), 25);
        assert_eq!(cells_through_layer(usize::MAX, 5), 25);
    }

    #[test]
    fn walk_huge_layer_range() {
        let all: Vec<_> = SpiralWalk::layers(3, 0, usize::MAX).collect();
        assert_eq!(all, SpiralWalk::new(3).collect::<Vec<_>>());
        assert_eq!(SpiralWalk::layers(3, usize::MAX, usize::MAX).count(), 0);
    }

    #[test]
    fn walk_reversed_layer_range_is_empty() {
        let walk = SpiralWalk::layers(5, 2, 0);
        assert_eq!(walk.len(), 0);
        assert_eq!(walk.count(), 0);
    }

    #[test]
    #[cfg(target_pointer_width = "64")]
    fn grid_with_too_many_cells() {
        let size = 1usize << 33;
        assert_eq!(cell_count(size), None);
        assert_eq!(
            spiral_to_position(0, size),
            Err(Error::GridTooLarge { size })
        );
        assert_eq!(
            position_to_spiral(Position::ORIGIN, size),
            Err(Error::GridTooLarge { size })
        );
        assert_eq!(SpiralWalk::new(size).count(), 0);
        assert_eq!(SpiralWalk::layers(size, 0, 1).count(), 0);
    }

    #[test]
    fn cell_count_limits() {
        assert_eq!(cell_count(0), Some(0));
        assert_eq!(cell_count(4), Some(16));
        assert_eq!(cell_count(u32::MAX as usize), Some((u32::MAX as u64).pow(2)));
    }

    #[test]
    fn index_to_position_examples() {
        assert_eq!(spiral_to_position(0, 4), Ok(Position::new(0, 0)));
        assert_eq!(spiral_to_position(4, 4), Ok(Position::new(1, 3)));
        assert_eq!(spiral_to_position(11, 4), Ok(Position::new(1, 0)));
        assert_eq!(spiral_to_position(12, 4), Ok(Position::new(1, 1)));
        assert_eq!(spiral_to_position(15, 4), Ok(Position::new(2, 1)));
        assert_eq!(spiral_to_position(8, 3), Ok(Position::new(1, 1)));
    }

    #[test]
    fn index_out_of_range() {
        assert_eq!(
            spiral_to_position(9, 3),
            Err(Error::IndexOutOfRange { index: 9, size: 3 })
        );
        assert!(spiral_to_position(0, 0).is_err());
    }

    #[test]
    fn position_out_of_bounds() {
        let position = Position::new(3, 0);
        assert_eq!(
            position_to_spiral(position, 3),
            Err(Error::OutOfBounds { position, size: 3 })
        );
    }

    #[test]
    fn closed_form_matches_fill() {
        for size in 1..=12 {
            let grid = fill(size);
            for (index, position) in SpiralWalk::new(size).enumerate() {
                assert_eq!(grid[position], index as u64 + 1, "size {} at {}", size, position);
            }
        }
    }

    #[test]
    fn bijection_up_to_size_12() {
        for size in 1..=12 {
            for index in 0..(size * size) as u64 {
                let position = spiral_to_position(index, size).unwrap();
                assert_eq!(position_to_spiral(position, size), Ok(index));
            }
        }
    }

    #[test]
    fn walk_counts() {
        assert_eq!(SpiralWalk::new(7).count(), 49);
        assert_eq!(SpiralWalk::new(7).len(), 49);
        assert_eq!(SpiralWalk::new(0).count(), 0);
    }

    #[test]
    fn walk_single_layer() {
        let inner: Vec<_> = SpiralWalk::layers(4, 1, 1).collect();
        assert_eq!(
            inner,
            vec![
                Position::new(1, 1),
                Position::new(1, 2),
                Position::new(2, 2),
                Position::new(2, 1),
            ]
        );

        let centre: Vec<_> = SpiralWalk::layers(5, 2, 2).collect();
        assert_eq!(centre, vec![Position::new(2, 2)]);
    }

    #[test]
    fn large_grid_no_overflow() {
        let size = 1_000_000;
        let last = (size as u64) * (size as u64) - 1;
        let position = spiral_to_position(last, size).unwrap();
        assert_eq!(position, Position::new(500_000, 499_999));
        assert_eq!(position_to_spiral(position, size), Ok(last));
    }
}
