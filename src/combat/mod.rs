//! The combat engine: phases, resolution, events and the match state machine.
//!
//! ## Flow
//!
//! 1. The attacker's die is submitted; the match moves to the defender's phase.
//! 2. The defender's die is submitted; `resolve` computes the outcome.
//! 3. Damage is applied and events are emitted through a `Notifier`.
//! 4. If someone dropped to zero the match is over, otherwise roles swap.

pub mod phase;
pub mod resolution;
pub mod event;
pub mod state;
pub mod log;

pub use phase::{MatchStatus, Phase};
pub use resolution::{resolve, Outcome, Resolution, Strike};
pub use event::{CombatEvent, EventBuffer, FnNotifier, Notifier, NullNotifier};
pub use state::{MatchMode, MatchState, Role, RollOrigin, RollRecord};
pub use log::{describe_resolution, describe_roll};
