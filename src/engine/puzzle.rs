//! The puzzle engine: grid, target, health and score.

use smallvec::SmallVec;
use tracing::debug;

use crate::core::{EngineConfig, EngineError, GameRng, Position, RandomSource, EMPTY_CELL};
use crate::grid::Grid;

/// Outcome of evaluating a selection.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Evaluation {
    /// The selected values summed to the target. Both cells were cleared.
    Correct,
    /// The sum missed the target. One health was lost.
    Incorrect,
    /// The selection did not hold exactly two positions. Nothing changed.
    Malformed,
}

impl Evaluation {
    /// Whether this outcome counts as a match.
    #[must_use]
    pub fn is_correct(self) -> bool {
        matches!(self, Evaluation::Correct)
    }
}

/// Sum-matching puzzle engine.
///
/// Owns the grid and a random source. Every operation is synchronous and
/// runs to completion; callers serialize access.
///
/// ## Round sequencing
///
/// The engine never sequences rounds itself. After a `Correct` evaluation
/// the caller usually runs `refill_matrix` then `generate_target`; after an
/// `Incorrect` one it checks `is_exhausted`. Health is never clamped, so
/// calls past exhaustion keep decrementing it.
///
/// ```
/// use sum_match::{PuzzleEngine, ScriptedRng, Position};
///
/// // Fills [[2,3],[4,1]], then samples (0,0) and (1,0): target 6
/// let rng = ScriptedRng::new(vec![1, 2, 3, 0, 0, 0, 1, 0]);
/// let mut engine = PuzzleEngine::new(2, 2, rng).unwrap();
/// assert_eq!(engine.target_number(), 6);
///
/// let matched = engine
///     .evaluate_selection(Position::new(0, 0), Position::new(1, 0))
///     .unwrap();
/// assert!(matched);
/// assert_eq!(engine.score(), 10);
/// ```
#[derive(Clone, Debug)]
pub struct PuzzleEngine<R = GameRng> {
    config: EngineConfig,
    grid: Grid,
    rng: R,
    target: u32,
    target_cells: [Position; 2],
    health: i32,
    score: u32,
}

impl PuzzleEngine<GameRng> {
    /// Create an engine driven by a seeded `GameRng`.
    pub fn seeded(rows: usize, columns: usize, seed: u64) -> Result<Self, EngineError> {
        Self::new(rows, columns, GameRng::new(seed))
    }
}

impl<R: RandomSource> PuzzleEngine<R> {
    /// Create an engine with default rules for a `rows x columns` grid.
    ///
    /// The grid and the target are generated immediately.
    pub fn new(rows: usize, columns: usize, rng: R) -> Result<Self, EngineError> {
        Self::with_config(EngineConfig::new(rows, columns), rng)
    }

    /// Create an engine from a full configuration.
    pub fn with_config(config: EngineConfig, rng: R) -> Result<Self, EngineError> {
        config.validate()?;

        let mut engine = Self {
            grid: Grid::new(config.rows, config.columns),
            rng,
            target: 0,
            target_cells: [Position::new(0, 0); 2],
            health: config.starting_health,
            score: 0,
            config,
        };
        engine.generate_grid();
        engine.generate_target();

        debug!(
            rows = engine.config.rows,
            columns = engine.config.columns,
            target = engine.target,
            "puzzle engine created"
        );
        Ok(engine)
    }

    // === Accessors ===

    #[must_use]
    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    #[must_use]
    pub fn rows(&self) -> usize {
        self.config.rows
    }

    #[must_use]
    pub fn columns(&self) -> usize {
        self.config.columns
    }

    #[must_use]
    pub fn health(&self) -> i32 {
        self.health
    }

    #[must_use]
    pub fn score(&self) -> u32 {
        self.score
    }

    /// The sum a correct selection must reach.
    #[must_use]
    pub fn target_number(&self) -> u32 {
        self.target
    }

    /// The two positions sampled by the most recent `generate_target`.
    ///
    /// Their current values may no longer sum to the target if the grid
    /// has changed since.
    #[must_use]
    pub fn target_cells(&self) -> [Position; 2] {
        self.target_cells
    }

    /// Read-only view of the grid.
    #[must_use]
    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    /// Get the value at `(row, col)`.
    pub fn get_value(&self, row: usize, col: usize) -> Result<u8, EngineError> {
        self.grid.get(Position::new(row, col))
    }

    /// Health has run out. The engine does not act on this.
    #[must_use]
    pub fn is_exhausted(&self) -> bool {
        self.health <= 0
    }

    // === Operations ===

    /// Overwrite every cell with a fresh value in `1..=5`.
    pub fn generate_grid(&mut self) {
        self.grid.fill(&mut self.rng);
    }

    /// Sample two distinct positions and set the target to their sum.
    ///
    /// Positions are drawn uniformly over the whole grid, empty cells
    /// included. A redraw of an already chosen position is rejected;
    /// equal values at distinct positions are fine.
    pub fn generate_target(&mut self) {
        let mut cells: SmallVec<[Position; 2]> = SmallVec::new();
        while cells.len() < 2 {
            let position = Position::new(
                self.rng.gen_index(self.config.rows),
                self.rng.gen_index(self.config.columns),
            );
            if !cells.contains(&position) {
                cells.push(position);
            }
        }

        self.target_cells = [cells[0], cells[1]];
        self.target = cells
            .iter()
            .map(|&p| u32::from(self.grid[p]))
            .sum();

        debug!(
            target = self.target,
            first = %cells[0],
            second = %cells[1],
            "target generated"
        );
    }

    /// Evaluate a selection against the target.
    ///
    /// - Not exactly two positions: `Malformed`, no state change.
    /// - Sum equals target: both cells cleared, score raised, `Correct`.
    /// - Otherwise: health lowered by one, `Incorrect`.
    ///
    /// The same position may be passed twice; its value is counted twice.
    /// Out-of-bounds positions fail before any state changes.
    pub fn evaluate(&mut self, selection: &[Position]) -> Result<Evaluation, EngineError> {
        let [first, second] = match selection {
            [a, b] => [*a, *b],
            _ => {
                debug!(len = selection.len(), "malformed selection ignored");
                return Ok(Evaluation::Malformed);
            }
        };

        let sum = u32::from(self.grid.get(first)?) + u32::from(self.grid.get(second)?);

        if sum == self.target {
            self.grid.set(first, EMPTY_CELL)?;
            self.grid.set(second, EMPTY_CELL)?;
            self.score += self.config.match_reward;
            debug!(%first, %second, sum, score = self.score, "correct match");
            Ok(Evaluation::Correct)
        } else {
            self.health -= 1;
            debug!(%first, %second, sum, target = self.target, health = self.health, "incorrect match");
            Ok(Evaluation::Incorrect)
        }
    }

    /// Evaluate a two-position selection. Returns `true` on a match.
    pub fn evaluate_selection(&mut self, a: Position, b: Position) -> Result<bool, EngineError> {
        self.evaluate(&[a, b]).map(Evaluation::is_correct)
    }

    /// Replace every empty cell with a fresh value. Live cells are kept.
    ///
    /// Returns the number of cells refilled.
    pub fn refill_matrix(&mut self) -> usize {
        self.grid.refill(&mut self.rng)
    }

    /// Restore starting health and zero score, then regenerate grid and target.
    pub fn reset(&mut self) {
        self.health = self.config.starting_health;
        self.score = 0;
        self.generate_grid();
        self.generate_target();
        debug!(target = self.target, "puzzle engine reset");
    }
}
