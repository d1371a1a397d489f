//! The game engine facade.

use std::sync::Arc;

use parking_lot::RwLock;
use tracing::{debug, info, warn};

use super::players::{PlayerRegistry, PlayerView};
use super::resolver::{self, Settlements};
use super::roller::{Pause, Roller, ThreadPause};
use crate::callbacks::{CallbackRegistry, GameEngineCallback};
use crate::core::{DicePair, EngineConfig, ResolutionError, Result, RollTiming, SharedPlayer};

/// What happened to the bets on a house roll.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum HouseRound {
    /// Every player was settled and observers saw the house result.
    Resolved {
        house: DicePair,
        settlements: Settlements,
    },
    /// No bet was applied and the house-result notification was skipped.
    Abandoned {
        house: DicePair,
        reason: ResolutionError,
    },
}

impl HouseRound {
    /// The house roll, whether or not bets were resolved.
    #[must_use]
    pub fn house(&self) -> DicePair {
        match self {
            HouseRound::Resolved { house, .. } | HouseRound::Abandoned { house, .. } => *house,
        }
    }

    #[must_use]
    pub fn is_resolved(&self) -> bool {
        matches!(self, HouseRound::Resolved { .. })
    }

    /// Settlements of a resolved round, empty if abandoned.
    #[must_use]
    pub fn settlements(&self) -> &[resolver::Settlement] {
        match self {
            HouseRound::Resolved { settlements, .. } => settlements.as_slice(),
            HouseRound::Abandoned { .. } => &[],
        }
    }
}

#[derive(Clone, Copy)]
enum RollSubject<'a> {
    Player(&'a SharedPlayer),
    House,
}

/// Dice wagering engine.
///
/// Holds the players, the observers and the house result, and runs rolls.
/// All operations take `&self`; the engine can be shared across threads
/// behind an `Arc`, e.g. to seat players while the house is rolling.
///
/// ## Round Lifecycle
///
/// 1. `place_bet` for each player
/// 2. `roll_player` for each player
/// 3. `roll_house` resolves every bet against the house roll
/// 4. `clear_house_result` before the next round
///
/// ```
/// use dice_wager::core::{EngineConfig, Player, SharedPlayer};
/// use dice_wager::engine::{GameEngine, NoPause};
///
/// let engine = GameEngine::with_pause(EngineConfig::new().with_seed(7), NoPause);
/// let alice = SharedPlayer::new(Player::new("1", "Alice", 100));
/// engine.add_player(alice.clone());
///
/// assert!(engine.place_bet(&alice, 10));
/// engine.roll_player(&alice, 0, 300, 100).unwrap();
/// let round = engine.roll_house(0, 300, 100).unwrap();
///
/// assert!(round.is_resolved());
/// assert_eq!(engine.get_house_result(), Some(round.house()));
/// ```
pub struct GameEngine {
    roller: Roller,
    players: RwLock<PlayerRegistry>,
    callbacks: RwLock<CallbackRegistry>,
    house_result: RwLock<Option<DicePair>>,
}

impl Default for GameEngine {
    fn default() -> Self {
        Self::new(EngineConfig::default())
    }
}

impl GameEngine {
    /// Create an engine whose rolls sleep the calling thread.
    pub fn new(config: EngineConfig) -> Self {
        Self::with_pause(config, ThreadPause)
    }

    /// Create an engine with a custom pause strategy.
    pub fn with_pause(config: EngineConfig, pause: impl Pause + 'static) -> Self {
        Self {
            roller: Roller::new(config, pause),
            players: RwLock::new(PlayerRegistry::new()),
            callbacks: RwLock::new(CallbackRegistry::new()),
            house_result: RwLock::new(None),
        }
    }

    #[must_use]
    pub fn config(&self) -> &EngineConfig {
        self.roller.config()
    }

    /// Seed of the engine's dice RNG, for replaying a table.
    #[must_use]
    pub fn seed(&self) -> u64 {
        self.roller.seed()
    }

    // === Bets and rolls ===

    /// Stake `bet` for `player`. Returns whether the player accepted it.
    pub fn place_bet(&self, player: &SharedPlayer, bet: i64) -> bool {
        let accepted = player.write().place_bet(bet);
        debug!(player = %player.id(), bet, accepted, "place bet");
        accepted
    }

    /// Roll for `player` and store the result on the player.
    ///
    /// Observers see every intermediate roll, then the final one. No bets
    /// are resolved.
    pub fn roll_player(
        &self,
        player: &SharedPlayer,
        initial_delay: u64,
        final_delay: u64,
        delay_increment: u64,
    ) -> Result<DicePair> {
        let timing = RollTiming::new(initial_delay, final_delay, delay_increment);
        let result = self.roll(RollSubject::Player(player), timing)?;

        player.write().set_roll_result(result);
        self.notify(|callback| callback.result(player, &result, self));

        Ok(result)
    }

    /// Roll for the house and resolve every player's bet against it.
    ///
    /// If the players changed while the house was rolling, or a player has
    /// not rolled, the round is abandoned: no points change and observers
    /// do not get the house result. The house result is stored either way.
    pub fn roll_house(&self, initial_delay: u64, final_delay: u64, delay_increment: u64) -> Result<HouseRound> {
        let timing = RollTiming::new(initial_delay, final_delay, delay_increment);
        let table_version = self.players.read().version();

        let house = self.roll(RollSubject::House, timing)?;
        *self.house_result.write() = Some(house);

        match self.resolve(&house, table_version) {
            Ok(settlements) => {
                info!(%house, players = settlements.len(), "bets resolved");
                self.notify(|callback| callback.house_result(&house, self));
                Ok(HouseRound::Resolved { house, settlements })
            }
            Err(reason) => {
                warn!(%house, %reason, "bets were not resolved");
                Ok(HouseRound::Abandoned { house, reason })
            }
        }
    }

    fn roll(&self, subject: RollSubject<'_>, timing: RollTiming) -> Result<DicePair> {
        self.roller.roll(timing, |pair| match subject {
            RollSubject::Player(player) => {
                self.notify(|callback| callback.intermediate_result(player, pair, self));
            }
            RollSubject::House => {
                self.notify(|callback| callback.intermediate_house_result(pair, self));
            }
        })
    }

    /// Settle the table if it is still the one the house rolled against.
    ///
    /// Holds the registry lock and every player's write lock for the whole
    /// settlement.
    fn resolve(&self, house: &DicePair, table_version: u64) -> std::result::Result<Settlements, ResolutionError> {
        let registry = self.players.read();
        if registry.version() != table_version {
            return Err(ResolutionError::RegistryModified {
                expected: table_version,
                found: registry.version(),
            });
        }

        let mut guards: Vec<_> = registry.iter().map(SharedPlayer::write).collect();
        resolver::resolve_bets(guards.iter_mut().map(|guard| &mut **guard), house)
    }

    /// Call `f` on each observer in subscription order.
    ///
    /// Dispatches from a snapshot with no lock held, so observers may call
    /// back into the engine.
    fn notify(&self, f: impl Fn(&dyn GameEngineCallback)) {
        let callbacks = self.callbacks.read().snapshot();
        for callback in callbacks.iter() {
            f(&**callback);
        }
    }

    // === Players ===

    /// Seat a player. A player with the same id replaces the existing one.
    pub fn add_player(&self, player: SharedPlayer) {
        let id = player.id().clone();
        let appended = self.players.write().add(player);
        debug!(player = %id, appended, "add player");
    }

    /// Unseat a player. Returns whether the player was seated.
    pub fn remove_player(&self, player: &SharedPlayer) -> bool {
        let removed = self.players.write().remove(player.id());
        debug!(player = %player.id(), removed, "remove player");
        removed
    }

    /// Player at `index` in seating order.
    #[must_use]
    pub fn get_player(&self, index: usize) -> Option<SharedPlayer> {
        self.players.read().get(index).cloned()
    }

    /// Read-only snapshot of the seated players.
    #[must_use]
    pub fn get_all_players(&self) -> PlayerView {
        self.players.read().view()
    }

    #[must_use]
    pub fn player_count(&self) -> usize {
        self.players.read().len()
    }

    // === Observers ===

    /// Subscribe an observer. Subscribing the same `Arc` twice has no effect.
    pub fn add_game_engine_callback(&self, callback: Arc<dyn GameEngineCallback>) {
        let added = self.callbacks.write().add(callback);
        debug!(added, "add callback");
    }

    /// Unsubscribe an observer. Returns whether it was subscribed.
    pub fn remove_game_engine_callback(&self, callback: &Arc<dyn GameEngineCallback>) -> bool {
        let removed = self.callbacks.write().remove(callback);
        debug!(removed, "remove callback");
        removed
    }

    #[must_use]
    pub fn callback_count(&self) -> usize {
        self.callbacks.read().len()
    }

    // === House result ===

    #[must_use]
    pub fn get_house_result(&self) -> Option<DicePair> {
        *self.house_result.read()
    }

    pub fn clear_house_result(&self) {
        *self.house_result.write() = None;
    }
}

impl std::fmt::Debug for GameEngine {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("GameEngine")
            .field("roller", &self.roller)
            .field("players", &self.player_count())
            .field("callbacks", &self.callback_count())
            .field("house_result", &self.get_house_result())
            .finish()
    }
}
