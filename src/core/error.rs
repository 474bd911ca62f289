//! Error types for duel operations.
//!
//! Rejections happen at the boundary, before any state is mutated, so a
//! caller that receives an error can keep using the match unchanged.

use thiserror::Error;

use super::character::CharacterId;
use crate::combat::{Phase, RollOrigin};

/// Errors raised by the combat core and the synchronization layer.
#[derive(Error, Debug)]
pub enum DuelError {
    /// A die value outside `1..=10` reached a boundary.
    #[error("invalid roll {value}: dice faces are {min}..={max}")]
    InvalidRoll { value: i64, min: u8, max: u8 },

    /// The submitting side may not roll in the current phase.
    #[error("{origin:?} roll not allowed during {phase}")]
    NotEligible { phase: Phase, origin: RollOrigin },

    /// The match is still waiting for its opponent to connect.
    #[error("match has not started yet")]
    MatchNotStarted,

    /// A character id is not present in the roster.
    #[error("unknown character: {0}")]
    UnknownCharacter(CharacterId),

    /// Character stats violate their bounds.
    #[error("invalid character: {0}")]
    InvalidCharacter(String),

    /// Configuration document could not be parsed.
    #[error("config parse error: {0}")]
    Config(#[from] serde_json::Error),

    /// Configuration values are out of bounds.
    #[error("invalid config: {0}")]
    InvalidConfig(String),

    /// An inbound wire message could not be decoded.
    #[error("malformed message: {0}")]
    Decode(String),

    /// The transport refused an outbound message.
    #[error("transport error: {0}")]
    Transport(String),

    /// No peer connection is open.
    #[error("peer disconnected")]
    Disconnected,
}

/// Result type alias for duel operations.
pub type DuelResult<T> = Result<T, DuelError>;
