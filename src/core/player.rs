//! Player identification and per-player wagering state.
//!
//! ## Player
//!
//! Plain value holder: identity, points, current bet and the last roll.
//! The engine mutates it when bets are placed, dice are rolled and rounds
//! are resolved.
//!
//! ## SharedPlayer
//!
//! Handle shared between the caller and the engine. Cloning a handle is
//! cheap and every clone refers to the same player.

use std::sync::Arc;

use parking_lot::{RwLock, RwLockReadGuard, RwLockWriteGuard};
use serde::{Deserialize, Serialize};

use super::DicePair;

/// Player identifier. Two players with the same id are the same player.
#[derive(Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct PlayerId(pub String);

impl PlayerId {
    /// Create a new player ID.
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Get the raw ID string.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for PlayerId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Player {}", self.0)
    }
}

/// A player seated at the table.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Player {
    id: PlayerId,
    name: String,
    points: i64,
    bet: i64,
    roll_result: Option<DicePair>,
}

impl Player {
    /// Create a player with a starting points balance and no bet.
    pub fn new(id: impl Into<String>, name: impl Into<String>, points: i64) -> Self {
        Self {
            id: PlayerId::new(id),
            name: name.into(),
            points,
            bet: 0,
            roll_result: None,
        }
    }

    #[must_use]
    pub fn id(&self) -> &PlayerId {
        &self.id
    }

    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    #[must_use]
    pub fn points(&self) -> i64 {
        self.points
    }

    pub fn set_points(&mut self, points: i64) {
        self.points = points;
    }

    #[must_use]
    pub fn bet(&self) -> i64 {
        self.bet
    }

    /// Stake `bet` on the next house roll.
    ///
    /// Accepted when `0 < bet <= points`. A rejected bet leaves the
    /// current bet untouched.
    pub fn place_bet(&mut self, bet: i64) -> bool {
        if bet > 0 && bet <= self.points {
            self.bet = bet;
            true
        } else {
            false
        }
    }

    /// Withdraw the current bet.
    pub fn reset_bet(&mut self) {
        self.bet = 0;
    }

    /// The last roll, if the player has rolled.
    #[must_use]
    pub fn roll_result(&self) -> Option<DicePair> {
        self.roll_result
    }

    pub fn set_roll_result(&mut self, roll: DicePair) {
        self.roll_result = Some(roll);
    }

    /// Forget the last roll (between rounds).
    pub fn clear_roll(&mut self) {
        self.roll_result = None;
    }
}

impl std::fmt::Display for Player {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} ({}): points={} bet={}", self.name, self.id.0, self.points, self.bet)?;
        match self.roll_result {
            Some(roll) => write!(f, " roll={}", roll),
            None => write!(f, " roll=none"),
        }
    }
}

/// Shared, lockable handle to a [`Player`].
///
/// The id is copied out of the player at construction so identity checks
/// never take the lock.
///
/// ```
/// use dice_wager::core::{Player, SharedPlayer};
///
/// let alice = SharedPlayer::new(Player::new("1", "Alice", 100));
/// let same = alice.clone();
///
/// same.write().set_points(50);
/// assert_eq!(alice.read().points(), 50);
/// assert_eq!(alice.id(), same.id());
/// ```
#[derive(Clone)]
pub struct SharedPlayer {
    id: PlayerId,
    inner: Arc<RwLock<Player>>,
}

impl SharedPlayer {
    /// Wrap a player in a shared handle.
    pub fn new(player: Player) -> Self {
        Self {
            id: player.id.clone(),
            inner: Arc::new(RwLock::new(player)),
        }
    }

    #[must_use]
    pub fn id(&self) -> &PlayerId {
        &self.id
    }

    /// Lock the player for reading.
    pub fn read(&self) -> RwLockReadGuard<'_, Player> {
        self.inner.read()
    }

    /// Lock the player for writing.
    pub fn write(&self) -> RwLockWriteGuard<'_, Player> {
        self.inner.write()
    }

    /// Copy of the player's current state.
    #[must_use]
    pub fn snapshot(&self) -> Player {
        self.inner.read().clone()
    }
}

impl std::fmt::Debug for SharedPlayer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SharedPlayer")
            .field("id", &self.id)
            .finish_non_exhaustive()
    }
}

impl From<Player> for SharedPlayer {
    fn from(player: Player) -> Self {
        Self::new(player)
    }
}
