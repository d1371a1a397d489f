//! Core value types: dice, players, RNG, configuration, errors.
//!
//! These are the building blocks the engine composes. None of them know
//! about observers or rounds.

pub mod dice;
pub mod player;
pub mod rng;
pub mod config;
pub mod error;

pub use dice::{DicePair, NUM_FACES};
pub use player::{Player, PlayerId, SharedPlayer};
pub use rng::{DiceRng, DiceRngState};
pub use config::{EngineConfig, RollTiming};
pub use error::{EngineError, ResolutionError, Result};
