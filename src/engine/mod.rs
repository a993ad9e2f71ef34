//! The puzzle engine.
//!
//! `PuzzleEngine` owns the grid, the target sum, health and score. It
//! evaluates selections and regenerates cells when told to; deciding
//! when to refill, retarget or end the game is left to the caller
//! (see `session` for a ready-made driver).

mod puzzle;

pub use puzzle::{Evaluation, PuzzleEngine};
