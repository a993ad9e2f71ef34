//! Engine error type.

use super::position::Position;

/// Contract violations reported by the engine.
///
/// A malformed selection is not an error: it is an expected outcome,
/// reported as `Evaluation::Malformed`.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum EngineError {
    /// A position outside `[0, rows) x [0, columns)`.
    #[error("position {position} is outside the {rows}x{columns} grid")]
    OutOfBounds {
        position: Position,
        rows: usize,
        columns: usize,
    },

    /// Target sampling needs at least two distinct cells.
    #[error("invalid grid dimensions {rows}x{columns}: need at least two cells")]
    InvalidDimensions { rows: usize, columns: usize },
}
