//! Conloop Spiral
//!
//! Fills an N×N grid with the integers `1..=N²` in clockwise spiral order.
//!
//! # Spiral Order
//!
//! The walk starts at the top-left cell `[0][0]` heading right. It keeps
//! going until the next step would leave the grid or land on a filled cell,
//! then turns clockwise (right → down → left → up) and continues:
//!
//! ```text
//!  1  2  3  4
//! 12 13 14  5
//! 11 16 15  6
//! 10  9  8  7
//! ```
//!
//! # Layers
//!
//! The same order can be described as concentric square layers. Layer 0 is
//! the outer border, layer 1 the border of what remains, and so on. Layer `l`
//! of an N×N grid has side `N - 2l` and holds `4(N - 2l - 1)` cells (1 for
//! the odd centre). This gives a closed-form mapping between a spiral index
//! and its cell, see [`spiral_to_position`] and [`position_to_spiral`].
//!
//! ```rust
//! use conloop_spiral::fill;
//!
//! let grid = fill(3);
//! assert_eq!(grid.into_rows(), vec![vec![1, 2, 3], vec![8, 9, 4], vec![7, 6, 5]]);
//! ```

mod direction;
mod error;
mod grid;
mod spiral;

pub use direction::Direction;
pub use error::{Error, Result};
pub use grid::{Grid, Position, RawGrid};
pub use spiral::{
    cell_count, cells_before_layer, cells_in_layer, cells_through_layer, fill, layer_count,
    position_to_spiral, spiral_to_position, SpiralWalk,
};

/// Number of directions in the clockwise cycle.
pub const DIRECTIONS: usize = 4;
