//! Engine configuration.
//!
//! Games configure the engine at construction:
//! - Grid dimensions
//! - Starting health (restored on every reset)
//! - Points awarded per correct match
//!
//! The cell value range is fixed and not configurable.

use serde::{Deserialize, Serialize};

use super::error::EngineError;

/// Value of a matched cell awaiting refill.
pub const EMPTY_CELL: u8 = 0;

/// Smallest value a live cell can hold.
pub const CELL_MIN: u8 = 1;

/// Largest value a live cell can hold.
pub const CELL_MAX: u8 = 5;

/// Complete engine configuration.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct EngineConfig {
    /// Number of grid rows.
    pub rows: usize,

    /// Number of grid columns.
    pub columns: usize,

    /// Health on construction and after reset.
    pub starting_health: i32,

    /// Score awarded per correct match.
    pub match_reward: u32,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            rows: 3,
            columns: 3,
            starting_health: 5,
            match_reward: 10,
        }
    }
}

impl EngineConfig {
    /// Create a configuration for a `rows x columns` grid with default rules.
    #[must_use]
    pub fn new(rows: usize, columns: usize) -> Self {
        Self {
            rows,
            columns,
            ..Self::default()
        }
    }

    /// Set the starting health.
    #[must_use]
    pub fn with_starting_health(mut self, health: i32) -> Self {
        self.starting_health = health;
        self
    }

    /// Set the reward per correct match.
    #[must_use]
    pub fn with_match_reward(mut self, reward: u32) -> Self {
        self.match_reward = reward;
        self
    }

    /// Total number of cells.
    #[must_use]
    pub fn cell_count(&self) -> usize {
        self.rows * self.columns
    }

    /// Check that the grid can hold two distinct positions.
    pub fn validate(&self) -> Result<(), EngineError> {
        if self.rows == 0 || self.columns == 0 || self.cell_count() < 2 {
            return Err(EngineError::InvalidDimensions {
                rows: self.rows,
                columns: self.columns,
            });
        }
        Ok(())
    }
}
