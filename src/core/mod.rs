//! Core types: sides, dice, characters, configuration and errors.
//!
//! Nothing in here knows about phases or the wire protocol; the combat and
//! sync modules build on these.

pub mod side;
pub mod dice;
pub mod character;
pub mod config;
pub mod error;

pub use side::{Side, SideMap};
pub use dice::{DieRoll, DiceRng, DiceRngState};
pub use character::{Character, CharacterId, Roster, SkillKind, SpecialSkill};
pub use config::{DuelConfig, Pacing, ResolutionRules};
pub use error::{DuelError, DuelResult};
