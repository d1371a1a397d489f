//! Animated dice rolling.
//!
//! A roll pauses, draws an intermediate pair and reports it, with the pause
//! growing each step, until the delay reaches its final bound. Then one
//! last pair is drawn and returned without being reported.

use std::time::Duration;

use parking_lot::Mutex;
use tracing::{debug, trace};

use crate::core::{DicePair, DiceRng, EngineConfig, EngineError, Result, RollTiming};

/// How the roll loop waits between intermediate draws.
pub trait Pause: Send + Sync {
    /// Wait for `duration`. Returning early is allowed; the roll simply
    /// carries on with its next draw.
    fn pause(&self, duration: Duration);
}

/// Sleeps the rolling thread.
#[derive(Clone, Copy, Debug, Default)]
pub struct ThreadPause;

impl Pause for ThreadPause {
    fn pause(&self, duration: Duration) {
        if !duration.is_zero() {
            std::thread::sleep(duration);
        }
    }
}

/// Does not wait at all. Rolls keep their intermediate results but finish
/// immediately.
#[derive(Clone, Copy, Debug, Default)]
pub struct NoPause;

impl Pause for NoPause {
    fn pause(&self, _duration: Duration) {}
}

impl<F> Pause for F
where
    F: Fn(Duration) + Send + Sync,
{
    fn pause(&self, duration: Duration) {
        self(duration)
    }
}

/// Draws dice and drives the animation cadence.
pub struct Roller {
    config: EngineConfig,
    rng: Mutex<DiceRng>,
    pause: Box<dyn Pause>,
}

impl Roller {
    /// Create a roller for `config`, waiting with `pause`.
    pub fn new(config: EngineConfig, pause: impl Pause + 'static) -> Self {
        let rng = match config.seed {
            Some(seed) => DiceRng::new(seed),
            None => DiceRng::from_entropy(),
        };
        debug!(seed = rng.seed(), faces = config.faces(), "dice roller ready");
        Self {
            config,
            rng: Mutex::new(rng),
            pause: Box::new(pause),
        }
    }

    #[must_use]
    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    /// Seed of the underlying RNG.
    #[must_use]
    pub fn seed(&self) -> u64 {
        self.rng.lock().seed()
    }

    /// Draw one pair, no animation.
    pub fn draw(&self) -> DicePair {
        self.rng.lock().roll_pair(self.config.faces())
    }

    /// Run one animated roll.
    ///
    /// `on_intermediate` is called once per step, in increasing delay
    /// order. The returned final pair is never passed to it.
    pub fn roll(&self, timing: RollTiming, mut on_intermediate: impl FnMut(&DicePair)) -> Result<DicePair> {
        if timing.never_terminates() {
            return Err(EngineError::NonTerminatingRoll {
                initial_delay: timing.initial_delay,
                final_delay: timing.final_delay,
            });
        }

        let mut delay = timing.initial_delay;
        let mut steps = 0u64;
        while delay < timing.final_delay {
            self.pause.pause(self.config.delay_duration(delay));

            let pair = self.draw();
            trace!(delay, %pair, "intermediate roll");
            on_intermediate(&pair);

            steps += 1;
            delay = delay.saturating_add(timing.delay_increment);
        }

        let result = self.draw();
        debug!(steps, %result, "roll finished");
        Ok(result)
    }
}

impl std::fmt::Debug for Roller {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Roller")
            .field("config", &self.config)
            .finish_non_exhaustive()
    }
}
