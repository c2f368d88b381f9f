//! Errors returned by grid construction and checked cell access.

/// Errors that can occur when building or addressing a [`Grid`](crate::Grid).
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum GridError {
    /// A grid needs at least one row and one column, and an explicit cell
    /// array has to match its dimensions.
    #[error("invalid grid dimensions {height}x{width}")]
    InvalidDimensions {
        /// Requested number of rows.
        height: usize,
        /// Requested number of columns.
        width: usize,
    },

    /// A checked access fell outside the grid.
    #[error("cell ({row}, {col}) is outside the {height}x{width} grid")]
    OutOfRange {
        /// Requested row.
        row: usize,
        /// Requested column.
        col: usize,
        /// Grid height.
        height: usize,
        /// Grid width.
        width: usize,
    },
}
