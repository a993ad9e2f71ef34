//! Grid positions and player selections.
//!
//! A `Position` is a plain `(row, col)` value: two positions are the same
//! cell exactly when their coordinates match. Target sampling and the
//! session's selection toggling both rely on that structural equality.

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

/// A cell coordinate, 0-based, row-major.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Position {
    pub row: usize,
    pub col: usize,
}

impl Position {
    /// Create a new position.
    #[must_use]
    pub const fn new(row: usize, col: usize) -> Self {
        Self { row, col }
    }
}

impl From<(usize, usize)> for Position {
    fn from((row, col): (usize, usize)) -> Self {
        Self::new(row, col)
    }
}

impl std::fmt::Display for Position {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}

/// Positions submitted for evaluation.
///
/// Well-formed selections hold exactly two entries, so they stay inline.
/// Other lengths are representable on purpose: the engine reports them
/// as malformed rather than rejecting them at the type level.
pub type Selection = SmallVec<[Position; 2]>;
