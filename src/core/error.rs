//! Engine error types.

use thiserror::Error;

use super::PlayerId;

/// Errors returned by engine operations.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum EngineError {
    #[error("roll from delay {initial_delay} to {final_delay} has a zero delay increment and would never finish")]
    NonTerminatingRoll { initial_delay: u64, final_delay: u64 },

    #[error("dice need at least 1 face, got {0}")]
    InvalidFaces(u8),
}

/// Why a house round could not be resolved.
///
/// A failed round applies no settlement at all.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum ResolutionError {
    #[error("players were modified while the house was rolling (registry version {expected} -> {found})")]
    RegistryModified { expected: u64, found: u64 },

    #[error("{0} has no roll result")]
    MissingRoll(PlayerId),
}

pub type Result<T> = std::result::Result<T, EngineError>;
