//! # dice-wager
//!
//! A turn-based dice wagering engine. A house and any number of players
//! each roll a pair of dice; players bet before the house rolls and win or
//! lose their bet depending on whose total is higher.
//!
//! ## Design Principles
//!
//! 1. **Animated rolls**: A roll emits a sequence of intermediate results at
//!    growing delays before settling on the final pair, so a display can
//!    animate it. The pacing goes through a [`Pause`] that tests replace.
//!
//! 2. **All-or-nothing resolution**: A house roll either settles every
//!    seated player or none of them.
//!
//! 3. **Shareable engine**: [`GameEngine`] takes `&self` everywhere and is
//!    `Send + Sync`, so the table can change while the dice are rolling.
//!
//! ## Modules
//!
//! - `core`: Dice pairs, players, RNG, configuration, errors
//! - `callbacks`: Observer trait, subscriber registry, tracing observer
//! - `engine`: Roller, resolver, player registry and the engine facade
//!
//! [`Pause`]: crate::engine::Pause

pub mod core;
pub mod callbacks;
pub mod engine;

// Re-export commonly used types
pub use crate::core::{
    DicePair, NUM_FACES,
    Player, PlayerId, SharedPlayer,
    DiceRng, DiceRngState,
    EngineConfig, RollTiming,
    EngineError, ResolutionError,
};

pub use crate::callbacks::{CallbackRegistry, GameEngineCallback, TracingCallback};

pub use crate::engine::{
    GameEngine, HouseRound,
    PlayerRegistry, PlayerView,
    Outcome, Settlement, Settlements, resolve_bets,
    Roller, Pause, ThreadPause, NoPause,
};
