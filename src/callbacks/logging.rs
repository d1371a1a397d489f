//! Observer that reports engine activity through `tracing`.

use tracing::{debug, info};

use super::GameEngineCallback;
use crate::core::{DicePair, SharedPlayer};
use crate::engine::GameEngine;

/// Logs every roll. Intermediate rolls go to `debug`, final rolls and the
/// post-round standings go to `info`.
#[derive(Clone, Copy, Debug, Default)]
pub struct TracingCallback;

impl TracingCallback {
    pub fn new() -> Self {
        Self
    }
}

impl GameEngineCallback for TracingCallback {
    fn intermediate_result(&self, player: &SharedPlayer, result: &DicePair, _engine: &GameEngine) {
        debug!(player = %player.id(), dice1 = result.dice1(), dice2 = result.dice2(), total = result.total(), "rolling");
    }

    fn intermediate_house_result(&self, result: &DicePair, _engine: &GameEngine) {
        debug!(dice1 = result.dice1(), dice2 = result.dice2(), total = result.total(), "house rolling");
    }

    fn result(&self, player: &SharedPlayer, result: &DicePair, _engine: &GameEngine) {
        let name = player.read().name().to_owned();
        info!(player = %player.id(), %name, dice1 = result.dice1(), dice2 = result.dice2(), total = result.total(), "final result");
    }

    fn house_result(&self, result: &DicePair, engine: &GameEngine) {
        info!(dice1 = result.dice1(), dice2 = result.dice2(), total = result.total(), "house result");
        for player in engine.get_all_players().iter() {
            info!("{}", *player.read());
        }
    }
}
