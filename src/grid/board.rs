//! Row-major cell storage with bounds-checked access.

use std::ops::Index;

use serde::{Deserialize, Serialize};
use tracing::trace;

use crate::core::{EngineError, Position, RandomSource, CELL_MAX, CELL_MIN, EMPTY_CELL};

/// Rectangular grid of cell values.
///
/// Backed by a flat `Vec<u8>`; `(row, col)` maps to `row * columns + col`.
/// Live cells hold `CELL_MIN..=CELL_MAX`, matched cells hold `EMPTY_CELL`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Grid {
    rows: usize,
    columns: usize,
    cells: Vec<u8>,
}

impl Grid {
    /// Create a grid with every cell empty.
    #[must_use]
    pub fn new(rows: usize, columns: usize) -> Self {
        Self {
            rows,
            columns,
            cells: vec![EMPTY_CELL; rows * columns],
        }
    }

    #[must_use]
    pub fn rows(&self) -> usize {
        self.rows
    }

    #[must_use]
    pub fn columns(&self) -> usize {
        self.columns
    }

    /// Total number of cells.
    #[must_use]
    pub fn len(&self) -> usize {
        self.cells.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    /// Check whether a position lies inside the grid.
    #[must_use]
    pub fn contains(&self, position: Position) -> bool {
        position.row < self.rows && position.col < self.columns
    }

    fn index_of(&self, position: Position) -> Result<usize, EngineError> {
        if !self.contains(position) {
            return Err(EngineError::OutOfBounds {
                position,
                rows: self.rows,
                columns: self.columns,
            });
        }
        Ok(position.row * self.columns + position.col)
    }

    /// Get the value at a position.
    pub fn get(&self, position: Position) -> Result<u8, EngineError> {
        self.index_of(position).map(|i| self.cells[i])
    }

    /// Set a value at a position.
    pub(crate) fn set(&mut self, position: Position, value: u8) -> Result<(), EngineError> {
        let i = self.index_of(position)?;
        self.cells[i] = value;
        Ok(())
    }

    /// Values of one row, or `None` if the row is out of range.
    #[must_use]
    pub fn row(&self, row: usize) -> Option<&[u8]> {
        if row >= self.rows {
            return None;
        }
        let start = row * self.columns;
        Some(&self.cells[start..start + self.columns])
    }

    /// Iterate over all positions in row-major order.
    pub fn positions(&self) -> impl Iterator<Item = Position> + '_ {
        (0..self.rows).flat_map(move |row| (0..self.columns).map(move |col| Position::new(row, col)))
    }

    /// Iterate over `(position, value)` pairs in row-major order.
    pub fn iter(&self) -> impl Iterator<Item = (Position, u8)> + '_ {
        self.positions().zip(self.cells.iter().copied())
    }

    /// Number of cells currently empty.
    #[must_use]
    pub fn empty_count(&self) -> usize {
        self.cells.iter().filter(|&&v| v == EMPTY_CELL).count()
    }

    /// Overwrite every cell with a fresh live value.
    pub(crate) fn fill<R: RandomSource>(&mut self, rng: &mut R) {
        for cell in &mut self.cells {
            *cell = sample_cell(rng);
        }
        trace!(rows = self.rows, columns = self.columns, "grid filled");
    }

    /// Replace only empty cells with fresh live values.
    ///
    /// Returns the number of cells refilled.
    pub(crate) fn refill<R: RandomSource>(&mut self, rng: &mut R) -> usize {
        let mut refilled = 0;
        for cell in self.cells.iter_mut().filter(|v| **v == EMPTY_CELL) {
            *cell = sample_cell(rng);
            refilled += 1;
        }
        trace!(refilled, "grid refilled");
        refilled
    }
}

impl Index<Position> for Grid {
    type Output = u8;

    /// Panics if `position` is outside the grid.
    fn index(&self, position: Position) -> &u8 {
        match self.index_of(position) {
            Ok(i) => &self.cells[i],
            Err(err) => panic!("{err}"),
        }
    }
}

impl std::fmt::Display for Grid {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for row in self.cells.chunks(self.columns.max(1)) {
            let line: Vec<String> = row.iter().map(u8::to_string).collect();
            writeln!(f, "{}", line.join(" "))?;
        }
        Ok(())
    }
}

/// Uniform draw from `CELL_MIN..=CELL_MAX`.
fn sample_cell<R: RandomSource>(rng: &mut R) -> u8 {
    let span = usize::from(CELL_MAX - CELL_MIN) + 1;
    // span <= 5, so the offset always fits
    CELL_MIN + rng.gen_index(span) as u8
}
