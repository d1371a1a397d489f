//! Bet resolution.
//!
//! Each player's last roll is compared with the house roll:
//! a higher total wins the bet, a lower total loses it, equal totals push.
//!
//! Resolution is all-or-nothing. Every player is settled on paper first;
//! points only change once the whole table has settled cleanly.

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use crate::core::{DicePair, Player, PlayerId, ResolutionError};

/// Result of one player's roll against the house.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Outcome {
    /// Player total above the house total.
    Win,
    /// Player total below the house total.
    Loss,
    /// Equal totals.
    Push,
}

impl Outcome {
    /// Compare a player roll with the house roll.
    #[must_use]
    pub fn of(player_roll: &DicePair, house_roll: &DicePair) -> Self {
        match player_roll.total().cmp(&house_roll.total()) {
            std::cmp::Ordering::Greater => Outcome::Win,
            std::cmp::Ordering::Less => Outcome::Loss,
            std::cmp::Ordering::Equal => Outcome::Push,
        }
    }

    /// Points change for `bet` under this outcome.
    #[must_use]
    pub fn delta(self, bet: i64) -> i64 {
        match self {
            Outcome::Win => bet,
            Outcome::Loss => bet.saturating_neg(),
            Outcome::Push => 0,
        }
    }
}

/// One player's settled bet.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Settlement {
    pub player: PlayerId,
    pub outcome: Outcome,
    pub bet: i64,
    /// Signed change to the player's points.
    pub delta: i64,
}

impl Settlement {
    /// Settle `player` against `house_roll` without touching the player.
    pub fn compute(player: &Player, house_roll: &DicePair) -> Result<Self, ResolutionError> {
        let roll = player
            .roll_result()
            .ok_or_else(|| ResolutionError::MissingRoll(player.id().clone()))?;
        let outcome = Outcome::of(&roll, house_roll);
        Ok(Self {
            player: player.id().clone(),
            outcome,
            bet: player.bet(),
            delta: outcome.delta(player.bet()),
        })
    }

    /// Apply the points change.
    pub fn apply(&self, player: &mut Player) {
        player.set_points(player.points().saturating_add(self.delta));
    }
}

/// Settlements of one round, in registry order.
pub type Settlements = SmallVec<[Settlement; 8]>;

/// Resolve every player's bet against `house_roll`.
///
/// If any player cannot be settled, no player is changed.
pub fn resolve_bets<'a, I>(players: I, house_roll: &DicePair) -> Result<Settlements, ResolutionError>
where
    I: IntoIterator<Item = &'a mut Player>,
{
    let mut players: SmallVec<[&'a mut Player; 8]> = players.into_iter().collect();

    let settlements = players
        .iter()
        .map(|player| Settlement::compute(player, house_roll))
        .collect::<Result<Settlements, _>>()?;

    for (player, settlement) in players.iter_mut().zip(&settlements) {
        settlement.apply(player);
    }

    Ok(settlements)
}
