//! Peer-to-peer wire messages.
//!
//! Only die values cross the wire. Each peer recomputes everything else,
//! so the format is two JSON shapes:
//!
//! ```text
//! {"type":"roll","value":7}
//! {"type":"restart"}
//! ```

use serde::{Deserialize, Serialize};

use crate::core::{DieRoll, DuelError, DuelResult};

/// A message exchanged between the two peers of an online match.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum WireMessage {
    /// The sender rolled this die for the current phase.
    Roll { value: DieRoll },
    /// Reset the match.
    Restart,
}

impl WireMessage {
    #[must_use]
    pub const fn roll(value: DieRoll) -> Self {
        WireMessage::Roll { value }
    }

    /// Serialize to the JSON text sent over the data channel.
    pub fn encode(&self) -> DuelResult<String> {
        serde_json::to_string(self).map_err(|e| DuelError::Transport(e.to_string()))
    }

    /// Parse an inbound message. Out-of-range dice are rejected here.
    pub fn decode(text: &str) -> DuelResult<Self> {
        serde_json::from_str(text).map_err(|e| DuelError::Decode(e.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_encode_shapes() {
        let roll = WireMessage::roll(DieRoll::new(7).unwrap());
        assert_eq!(roll.encode().unwrap(), r#"{"type":"roll","value":7}"#);
        assert_eq!(WireMessage::Restart.encode().unwrap(), r#"{"type":"restart"}"#);
    }

    #[test]
    fn test_decode() {
        let msg = WireMessage::decode(r#"{"value":3,"type":"roll"}"#).unwrap();
        assert_eq!(msg, WireMessage::roll(DieRoll::new(3).unwrap()));
        assert_eq!(WireMessage::decode(r#"{"type":"restart"}"#).unwrap(), WireMessage::Restart);
    }

    #[test]
    fn test_decode_rejects_malformed() {
        for text in [
            r#"{"type":"roll","value":0}"#,
            r#"{"type":"roll","value":11}"#,
            r#"{"type":"roll"}"#,
            r#"{"type":"surrender"}"#,
            "roll 7",
        ] {
            assert!(
                matches!(WireMessage::decode(text), Err(DuelError::Decode(_))),
                "accepted {text}"
            );
        }
    }
}
