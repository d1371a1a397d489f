//! Roll-and-resolve engine.
//!
//! ## Key Components
//!
//! - [`Roller`]: draws dice, pacing intermediate rolls through a [`Pause`]
//! - [`resolve_bets`]: all-or-nothing settlement of a table against the house
//! - [`PlayerRegistry`]: ordered, versioned set of seated players
//! - [`GameEngine`]: the facade tying these to the observer callbacks
//!
//! ## Concurrency
//!
//! Rolls block the calling thread for their whole animation. Players may be
//! seated or unseated from other threads meanwhile; a house roll that sees
//! the table change under it abandons the round instead of settling a table
//! it did not roll against.

mod game;
mod players;
mod resolver;
mod roller;

pub use game::{GameEngine, HouseRound};
pub use players::{PlayerRegistry, PlayerView};
pub use resolver::{resolve_bets, Outcome, Settlement, Settlements};
pub use roller::{NoPause, Pause, Roller, ThreadPause};
