//! Peer-to-peer synchronization.
//!
//! Each device runs its own `MatchState`. The only thing exchanged is the
//! die value of each roll (plus a restart signal); both ends feed the same
//! dice through the same deterministic rules and end up in the same state.
//!
//! ## Roles
//!
//! - Host: creates the session, shares an invite link, plays player one.
//! - Guest: joins from the invite link, plays player two.

pub mod message;
pub mod transport;
pub mod session;
pub mod peer;

pub use message::WireMessage;
pub use transport::{Outbox, Transport};
pub use session::{ConnectionState, SessionId, INVITE_PARAM};
pub use peer::DuelPeer;
