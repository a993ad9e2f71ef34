//! The cell grid the player matches against.
//!
//! The grid only stores values and enforces bounds. Which cells get
//! cleared or refilled is decided by the engine.

mod board;

pub use board::Grid;
