//! Turn-by-turn driver around a `PuzzleEngine`.

use tracing::{debug, info};

use crate::core::{EngineError, GameRng, Position, RandomSource, Selection, EMPTY_CELL};
use crate::engine::{Evaluation, PuzzleEngine};

/// What a single cell toggle did.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SessionEvent {
    /// The toggle had no effect (game over, or the cell is empty).
    Ignored,
    /// The cell joined the selection.
    Selected,
    /// The cell left the selection.
    Deselected,
    /// The pair matched. The grid was refilled and a new target drawn.
    Matched { score: u32 },
    /// The pair missed and health remains.
    Missed { health: i32 },
    /// The pair missed and health ran out.
    GameOver { score: u32 },
}

/// A game in progress.
///
/// Collects cell toggles into a two-cell selection, evaluates it as soon
/// as it is complete, and applies the follow-up the engine leaves to its
/// caller: refill and retarget after a match, game over once health is
/// exhausted.
#[derive(Clone, Debug)]
pub struct GameSession<R = GameRng> {
    engine: PuzzleEngine<R>,
    selected: Selection,
    game_over: bool,
}

impl<R: RandomSource> GameSession<R> {
    /// Start a session on an existing engine.
    #[must_use]
    pub fn new(engine: PuzzleEngine<R>) -> Self {
        Self {
            engine,
            selected: Selection::new(),
            game_over: false,
        }
    }

    #[must_use]
    pub fn engine(&self) -> &PuzzleEngine<R> {
        &self.engine
    }

    /// Currently selected cells, in selection order.
    #[must_use]
    pub fn selected(&self) -> &[Position] {
        &self.selected
    }

    #[must_use]
    pub fn is_game_over(&self) -> bool {
        self.game_over
    }

    /// Whether a cell accepts toggles.
    pub fn is_enabled(&self, position: Position) -> Result<bool, EngineError> {
        let value = self.engine.grid().get(position)?;
        Ok(!self.game_over && value != EMPTY_CELL)
    }

    /// Toggle a cell in or out of the selection.
    ///
    /// Completing a pair evaluates it immediately and clears the selection.
    pub fn toggle(&mut self, position: Position) -> Result<SessionEvent, EngineError> {
        if !self.is_enabled(position)? {
            return Ok(SessionEvent::Ignored);
        }

        if let Some(i) = self.selected.iter().position(|&p| p == position) {
            self.selected.remove(i);
            return Ok(SessionEvent::Deselected);
        }

        self.selected.push(position);
        if self.selected.len() < 2 {
            return Ok(SessionEvent::Selected);
        }

        let selection = std::mem::take(&mut self.selected);
        match self.engine.evaluate(&selection)? {
            Evaluation::Correct => {
                self.engine.refill_matrix();
                self.engine.generate_target();
                Ok(SessionEvent::Matched {
                    score: self.engine.score(),
                })
            }
            Evaluation::Incorrect if self.engine.is_exhausted() => {
                self.game_over = true;
                info!(score = self.engine.score(), "game over");
                Ok(SessionEvent::GameOver {
                    score: self.engine.score(),
                })
            }
            Evaluation::Incorrect => Ok(SessionEvent::Missed {
                health: self.engine.health(),
            }),
            // A pushed pair is always two entries
            Evaluation::Malformed => Ok(SessionEvent::Ignored),
        }
    }

    /// Start over: reset the engine and clear the selection.
    pub fn new_game(&mut self) {
        self.engine.reset();
        self.selected.clear();
        self.game_over = false;
        debug!("new game started");
    }

    /// Give back the engine.
    #[must_use]
    pub fn into_engine(self) -> PuzzleEngine<R> {
        self.engine
    }
}
