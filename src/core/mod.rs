//! Core engine types: positions, RNG, configuration, errors.
//!
//! Everything here is independent of the grid and the rules built on it.

pub mod position;
pub mod rng;
pub mod config;
pub mod error;

pub use position::{Position, Selection};
pub use rng::{GameRng, GameRngState, RandomSource, ScriptedRng};
pub use config::{EngineConfig, CELL_MAX, CELL_MIN, EMPTY_CELL};
pub use error::EngineError;
