//! Roll cadence and dice distribution tests.

use std::sync::Arc;
use std::time::Duration;

use parking_lot::Mutex;
use proptest::prelude::*;

use dice_wager::core::{DiceRng, EngineConfig, RollTiming};
use dice_wager::engine::{NoPause, Roller};

/// Number of intermediate steps the delay loop should take.
fn expected_steps(timing: RollTiming) -> u64 {
    if timing.initial_delay >= timing.final_delay {
        0
    } else {
        (timing.final_delay - timing.initial_delay).div_ceil(timing.delay_increment)
    }
}

/// `(0, 300, 100)` pauses for 0, 100 and 200 units, with a draw after each.
#[test]
fn test_standard_cadence() {
    let pauses = Arc::new(Mutex::new(Vec::new()));
    let recorder = pauses.clone();
    let roller = Roller::new(EngineConfig::new().with_seed(1), move |d: Duration| recorder.lock().push(d));

    let mut intermediates = 0;
    roller.roll(RollTiming::new(0, 300, 100), |_| intermediates += 1).unwrap();

    assert_eq!(intermediates, 3);
    assert_eq!(
        *pauses.lock(),
        vec![Duration::ZERO, Duration::from_millis(100), Duration::from_millis(200)]
    );
}

/// Delay units scale with the configured unit length.
#[test]
fn test_delay_unit_scaling() {
    let pauses = Arc::new(Mutex::new(Vec::new()));
    let recorder = pauses.clone();
    let config = EngineConfig::new()
        .with_seed(1)
        .with_delay_unit(Duration::from_micros(10));
    let roller = Roller::new(config, move |d: Duration| recorder.lock().push(d));

    roller.roll(RollTiming::new(5, 6, 1), |_| {}).unwrap();

    assert_eq!(*pauses.lock(), vec![Duration::from_micros(50)]);
}

/// A six-sided pair covers every total from 2 to 12 given enough rolls.
#[test]
fn test_all_totals_reachable() {
    let roller = Roller::new(EngineConfig::new().with_seed(12), NoPause);
    let mut seen = [false; 13];
    for _ in 0..2_000 {
        seen[roller.draw().total() as usize] = true;
    }
    assert!(seen[2..=12].iter().all(|&s| s));
    assert!(!seen[0] && !seen[1]);
}

proptest! {
    /// Every face lies in `[1, N]` for any face count.
    #[test]
    fn prop_faces_in_range(seed in any::<u64>(), faces in 1u8..=u8::MAX) {
        let mut rng = DiceRng::new(seed);
        for _ in 0..32 {
            let pair = rng.roll_pair(faces);
            prop_assert!((1..=faces).contains(&pair.dice1()));
            prop_assert!((1..=faces).contains(&pair.dice2()));
            prop_assert_eq!(pair.faces(), faces);
        }
    }

    /// The loop takes exactly as many steps as the delay range allows.
    #[test]
    fn prop_step_count(initial in 0u64..500, span in 0u64..500, increment in 1u64..100) {
        let roller = Roller::new(EngineConfig::new().with_seed(initial), NoPause);
        let timing = RollTiming::new(initial, initial + span, increment);

        let mut steps = 0u64;
        roller.roll(timing, |_| steps += 1).unwrap();

        prop_assert_eq!(steps, expected_steps(timing));
    }

    /// A zero increment is only an error when there is something to animate.
    #[test]
    fn prop_zero_increment(initial in 0u64..100, final_delay in 0u64..100) {
        let roller = Roller::new(EngineConfig::new().with_seed(0), NoPause);
        let result = roller.roll(RollTiming::new(initial, final_delay, 0), |_| {});
        prop_assert_eq!(result.is_err(), initial < final_delay);
    }
}
