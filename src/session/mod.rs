//! Game session: selection handling and round sequencing.
//!
//! A headless version of the flow a UI drives:
//! - Toggle cells into a two-cell selection
//! - Evaluate the pair as soon as it is complete
//! - Refill and retarget after a match
//! - End the game when health runs out; `new_game` starts over

mod game;

pub use game::{GameSession, SessionEvent};
