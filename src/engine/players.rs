//! Player registry.
//!
//! Ordered collection of the players seated at the table. Every mutation
//! bumps a version counter so a house roll can tell whether the table
//! changed while the dice were in the air.

use im::Vector;

use crate::core::{PlayerId, SharedPlayer};

/// Ordered, versioned player collection. At most one entry per `PlayerId`.
#[derive(Clone, Debug, Default)]
pub struct PlayerRegistry {
    players: Vector<SharedPlayer>,
    version: u64,
}

impl PlayerRegistry {
    /// Create a new empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a player.
    ///
    /// A player whose id is already registered replaces the old entry in
    /// place. Returns `true` if the player was appended, `false` if it
    /// replaced an existing entry.
    pub fn add(&mut self, player: SharedPlayer) -> bool {
        self.version += 1;
        match self.position(player.id()) {
            Some(index) => {
                self.players.set(index, player);
                false
            }
            None => {
                self.players.push_back(player);
                true
            }
        }
    }

    /// Remove the player with `id`. Returns whether it was registered.
    pub fn remove(&mut self, id: &PlayerId) -> bool {
        match self.position(id) {
            Some(index) => {
                self.players.remove(index);
                self.version += 1;
                true
            }
            None => false,
        }
    }

    /// Player at `index`, or `None` when out of range.
    #[must_use]
    pub fn get(&self, index: usize) -> Option<&SharedPlayer> {
        self.players.get(index)
    }

    #[must_use]
    pub fn position(&self, id: &PlayerId) -> Option<usize> {
        self.players.iter().position(|p| p.id() == id)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.players.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.players.is_empty()
    }

    /// Mutation counter. Changes whenever a player is added, replaced or
    /// removed.
    #[must_use]
    pub fn version(&self) -> u64 {
        self.version
    }

    pub fn iter(&self) -> impl Iterator<Item = &SharedPlayer> {
        self.players.iter()
    }

    /// Read-only snapshot of the current players. O(1).
    #[must_use]
    pub fn view(&self) -> PlayerView {
        PlayerView {
            players: self.players.clone(),
        }
    }
}

/// Read-only snapshot of the player registry.
///
/// Later registry changes do not show up in an existing view, and the view
/// offers no way to add or remove players. The handles inside still refer
/// to the live players.
#[derive(Clone, Debug, Default)]
pub struct PlayerView {
    players: Vector<SharedPlayer>,
}

impl PlayerView {
    #[must_use]
    pub fn len(&self) -> usize {
        self.players.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.players.is_empty()
    }

    #[must_use]
    pub fn get(&self, index: usize) -> Option<&SharedPlayer> {
        self.players.get(index)
    }

    pub fn iter(&self) -> impl Iterator<Item = &SharedPlayer> {
        self.players.iter()
    }

    /// Ids in registry order.
    #[must_use]
    pub fn ids(&self) -> Vec<PlayerId> {
        self.players.iter().map(|p| p.id().clone()).collect()
    }
}

impl<'a> IntoIterator for &'a PlayerView {
    type Item = &'a SharedPlayer;
    type IntoIter = im::vector::Iter<'a, SharedPlayer>;

    fn into_iter(self) -> Self::IntoIter {
        self.players.iter()
    }
}
