//! Error types for conloop-spiral.

use thiserror::Error;

use crate::Position;

/// Result type for conloop-spiral operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur when mapping between spiral indices and cells.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    /// The spiral index does not name a cell of the grid.
    #[error("spiral index {index} out of range for a {size}x{size} grid")]
    IndexOutOfRange { index: u64, size: usize },

    /// The grid has more cells than a `u64` spiral index can address.
    #[error("a {size}x{size} grid has more than u64::MAX cells")]
    GridTooLarge { size: usize },

    /// A grid's cell buffer does not hold exactly `size²` values.
    #[error("a {size}x{size} grid needs {size}² cells, got {cells}")]
    CellCount { size: usize, cells: usize },

    /// The position lies outside the grid.
    #[error("position {position} outside a {size}x{size} grid")]
    OutOfBounds { position: Position, size: usize },
}
