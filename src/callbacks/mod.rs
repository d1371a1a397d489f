//! Observer callbacks fired by the engine.
//!
//! Display layers implement [`GameEngineCallback`] and subscribe through
//! [`GameEngine::add_game_engine_callback`]. The engine calls them
//! synchronously, in subscription order, at each point of a roll:
//!
//! - every intermediate (animation) roll of a player or of the house
//! - the final roll of a player
//! - the final house roll, once every bet has been resolved
//!
//! ## Example Usage
//!
//! ```
//! use std::sync::Arc;
//! use std::sync::atomic::{AtomicUsize, Ordering};
//!
//! use dice_wager::callbacks::GameEngineCallback;
//! use dice_wager::core::{DicePair, EngineConfig};
//! use dice_wager::engine::{GameEngine, NoPause};
//!
//! #[derive(Default)]
//! struct CountHouseRolls(AtomicUsize);
//!
//! impl GameEngineCallback for CountHouseRolls {
//!     fn house_result(&self, _result: &DicePair, _engine: &GameEngine) {
//!         self.0.fetch_add(1, Ordering::SeqCst);
//!     }
//! }
//!
//! let engine = GameEngine::with_pause(EngineConfig::new().with_seed(1), NoPause);
//! let counter = Arc::new(CountHouseRolls::default());
//! engine.add_game_engine_callback(counter.clone());
//!
//! engine.roll_house(0, 0, 1).unwrap();
//! assert_eq!(counter.0.load(Ordering::SeqCst), 1);
//! ```
//!
//! [`GameEngine::add_game_engine_callback`]: crate::engine::GameEngine::add_game_engine_callback

mod logging;
mod registry;

pub use logging::TracingCallback;
pub use registry::CallbackRegistry;

use crate::core::{DicePair, SharedPlayer};
use crate::engine::GameEngine;

/// Observer of engine activity.
///
/// Every method has an empty default so observers only implement the
/// notifications they care about. Callbacks run on the rolling thread with
/// no engine lock held, so they may query the engine.
pub trait GameEngineCallback: Send + Sync {
    /// An animation roll for `player`.
    fn intermediate_result(&self, _player: &SharedPlayer, _result: &DicePair, _engine: &GameEngine) {}

    /// An animation roll for the house.
    fn intermediate_house_result(&self, _result: &DicePair, _engine: &GameEngine) {}

    /// The final roll for `player`, already stored on the player.
    fn result(&self, _player: &SharedPlayer, _result: &DicePair, _engine: &GameEngine) {}

    /// The final house roll. All bets are resolved when this fires.
    fn house_result(&self, _result: &DicePair, _engine: &GameEngine) {}
}
