//! # dice-duel
//!
//! A two-player dice combat engine: each round one fighter rolls to attack,
//! the other rolls to defend, and the difference decides between a hit, a
//! block and a counter-attack.
//!
//! ## Design Principles
//!
//! 1. **One owned state value**: everything about a match lives in
//!    `MatchState` and changes only through `submit_roll`.
//!
//! 2. **Deterministic**: the same dice in the same order always produce the
//!    same match, which is what lets two peers stay in sync by exchanging
//!    nothing but die values.
//!
//! 3. **Presentation is a sink**: the engine reports what happened through a
//!    `Notifier` and never waits on or hears back from the UI.
//!
//! ## Modules
//!
//! - `core`: Sides, dice, characters, configuration, errors
//! - `combat`: Phases, resolution, events and the match state machine
//! - `sync`: Wire messages, transport, sessions and the peer driver
//! - `view`: Serializable battle-screen snapshot
//! - `wasm`: Browser bindings (feature `wasm`)

pub mod core;
pub mod combat;
pub mod sync;
pub mod view;

#[cfg(feature = "wasm")]
pub mod wasm;

// Re-export commonly used types
pub use crate::core::{
    Side, SideMap,
    DieRoll, DiceRng, DiceRngState,
    Character, CharacterId, Roster, SkillKind, SpecialSkill,
    DuelConfig, Pacing, ResolutionRules,
    DuelError, DuelResult,
};

pub use crate::combat::{
    MatchStatus, Phase,
    resolve, Outcome, Resolution, Strike,
    CombatEvent, EventBuffer, FnNotifier, Notifier, NullNotifier,
    MatchMode, MatchState, Role, RollOrigin, RollRecord,
    describe_resolution, describe_roll,
};

pub use crate::sync::{ConnectionState, DuelPeer, Outbox, SessionId, Transport, WireMessage};

pub use crate::view::{FighterView, MatchView};
