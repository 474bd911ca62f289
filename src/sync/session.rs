//! Session identifiers and invite links.
//!
//! The host publishes a session id through an invite link of the form
//! `<base>?gameid=<id>`; the guest opens that link and joins with the id
//! found in the query string.

use serde::{Deserialize, Serialize};

use crate::core::{DuelError, DuelResult};

/// Query parameter carrying the session id in invite links.
pub const INVITE_PARAM: &str = "gameid";

/// Identifier of an online match, as handed out by the signaling service.
///
/// Restricted to ASCII letters, digits, `-` and `_`, so it can be placed in
/// a URL without escaping.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct SessionId(String);

impl SessionId {
    pub fn new(id: impl Into<String>) -> DuelResult<Self> {
        let id = id.into();
        let valid = !id.is_empty()
            && id
                .chars()
                .all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_');
        if valid {
            Ok(Self(id))
        } else {
            Err(DuelError::Decode(format!("invalid session id {id:?}")))
        }
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// The link a guest opens to join this session.
    #[must_use]
    pub fn invite_link(&self, base: &str) -> String {
        let base = base.split('#').next().unwrap_or(base);
        let separator = if base.contains('?') { '&' } else { '?' };
        format!("{base}{separator}{INVITE_PARAM}={}", self.0)
    }

    /// Extract the session id from an invite link.
    ///
    /// Returns `Ok(None)` when the URL carries no `gameid` parameter (the
    /// page was opened directly, not through an invite).
    pub fn from_url(url: &str) -> DuelResult<Option<Self>> {
        let Some((_, query)) = url.split_once('?') else {
            return Ok(None);
        };
        let query = query.split('#').next().unwrap_or(query);

        query
            .split('&')
            .filter_map(|pair| pair.split_once('='))
            .find(|(key, _)| *key == INVITE_PARAM)
            .map(|(_, value)| Self::new(value))
            .transpose()
    }
}

impl TryFrom<String> for SessionId {
    type Error = DuelError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<SessionId> for String {
    fn from(id: SessionId) -> Self {
        id.0
    }
}

impl std::fmt::Display for SessionId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

/// Where the connection to the other peer stands.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ConnectionState {
    /// Local match; there is no peer.
    #[default]
    Offline,
    /// Host waiting for a guest, or guest still connecting.
    Waiting,
    Connected,
    /// The peer went away. The match is not resumed.
    Disconnected,
}

impl ConnectionState {
    #[must_use]
    pub const fn is_connected(self) -> bool {
        matches!(self, ConnectionState::Connected)
    }
}
