//! Engine configuration.
//!
//! Tables configure the engine at startup with an `EngineConfig`:
//! - `faces`: how many faces each die has
//! - `delay_unit`: how long one roll-delay unit lasts in real time
//! - `seed`: fixed RNG seed for reproducible tables, or `None` for entropy

use std::time::Duration;

use serde::{Deserialize, Serialize};

use super::error::{EngineError, Result};
use super::NUM_FACES;

/// Delay progression for one animated roll, in delay units.
///
/// The roll pauses for `initial_delay`, then for each subsequent step the
/// delay grows by `delay_increment` until it reaches `final_delay`. A pause
/// longer than `u64::MAX` nanoseconds is cut to that length.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct RollTiming {
    pub initial_delay: u64,
    pub final_delay: u64,
    pub delay_increment: u64,
}

impl RollTiming {
    /// Create a new roll timing.
    #[must_use]
    pub const fn new(initial_delay: u64, final_delay: u64, delay_increment: u64) -> Self {
        Self {
            initial_delay,
            final_delay,
            delay_increment,
        }
    }

    /// A roll with no intermediate results.
    #[must_use]
    pub const fn instant() -> Self {
        Self::new(0, 0, 1)
    }

    /// Does this timing produce any intermediate results?
    #[must_use]
    pub const fn is_animated(&self) -> bool {
        self.initial_delay < self.final_delay
    }

    /// Would the delay loop never reach `final_delay`?
    #[must_use]
    pub const fn never_terminates(&self) -> bool {
        self.is_animated() && self.delay_increment == 0
    }
}

/// Complete engine configuration.
///
/// The face count is only reachable through the builder, so a config can
/// never hold zero faces:
///
/// ```compile_fail
/// use dice_wager::core::EngineConfig;
///
/// let config = EngineConfig { faces: 0, ..EngineConfig::default() };
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct EngineConfig {
    /// Faces per die (at least 1).
    faces: u8,

    /// Real time represented by one delay unit.
    pub delay_unit: Duration,

    /// RNG seed. `None` seeds from OS entropy.
    pub seed: Option<u64>,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            faces: NUM_FACES,
            delay_unit: Duration::from_millis(1),
            seed: None,
        }
    }
}

impl EngineConfig {
    /// Create the standard configuration: six-sided dice, millisecond delays.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the number of faces per die.
    #[must_use]
    pub fn with_faces(mut self, faces: u8) -> Self {
        assert!(faces > 0, "Dice must have at least 1 face");
        self.faces = faces;
        self
    }

    /// Set the number of faces per die, rejecting zero.
    pub fn try_with_faces(mut self, faces: u8) -> Result<Self> {
        if faces == 0 {
            return Err(EngineError::InvalidFaces(faces));
        }
        self.faces = faces;
        Ok(self)
    }

    /// Faces per die.
    #[must_use]
    pub const fn faces(&self) -> u8 {
        self.faces
    }

    /// Set the real time of one delay unit.
    #[must_use]
    pub fn with_delay_unit(mut self, unit: Duration) -> Self {
        self.delay_unit = unit;
        self
    }

    /// Use a fixed RNG seed.
    #[must_use]
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Real-time length of `delay` units, saturating at `u64::MAX` nanoseconds.
    #[must_use]
    pub fn delay_duration(&self, delay: u64) -> Duration {
        let nanos = self.delay_unit.as_nanos().saturating_mul(u128::from(delay));
        Duration::from_nanos(u64::try_from(nanos).unwrap_or(u64::MAX))
    }
}
