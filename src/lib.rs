//! # sum-match
//!
//! A deterministic sum-matching puzzle engine.
//!
//! The engine owns a grid of small integers and a target sum drawn from
//! two grid positions. Players submit pairs of positions; a pair whose
//! values add up to the target clears both cells and scores, anything
//! else costs health.
//!
//! ## Design Principles
//!
//! 1. **Injected randomness**: Every random draw goes through the
//!    `RandomSource` handed to the engine. No global generator.
//!
//! 2. **Caller-driven rounds**: The engine evaluates and regenerates on
//!    request. When to refill, retarget or stop is the caller's call.
//!
//! 3. **Synchronous, single-owner**: No I/O, no locking, no background work.
//!
//! ## Modules
//!
//! - `core`: Positions, RNG, configuration, errors
//! - `grid`: Bounds-checked cell storage
//! - `engine`: The puzzle engine
//! - `session`: Selection handling and round sequencing on top of the engine

pub mod core;
pub mod grid;
pub mod engine;
pub mod session;

// Re-export commonly used types
pub use crate::core::{
    Position, Selection,
    GameRng, GameRngState, RandomSource, ScriptedRng,
    EngineConfig, EngineError,
    CELL_MIN, CELL_MAX, EMPTY_CELL,
};

pub use crate::grid::Grid;

pub use crate::engine::{Evaluation, PuzzleEngine};

pub use crate::session::{GameSession, SessionEvent};
