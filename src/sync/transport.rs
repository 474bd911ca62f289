//! Transport abstraction for the peer connection.
//!
//! The match only needs an ordered, best-effort pipe to one peer. Browser
//! builds back it with a data channel; tests and the wasm handle use
//! `Outbox`, which buffers messages until the embedder ships them.

use std::collections::VecDeque;

use super::message::WireMessage;
use crate::core::{DuelError, DuelResult};

/// An outbound connection to the other peer.
///
/// Delivery is FIFO and best effort. A message that fails to send is not
/// retried, so a lost roll leaves the two peers out of step for the rest of
/// the match.
pub trait Transport {
    /// Queue a message for the peer.
    fn send(&mut self, message: &WireMessage) -> DuelResult<()>;

    /// Whether a peer is currently reachable.
    fn is_connected(&self) -> bool;
}

impl<T: Transport + ?Sized> Transport for &mut T {
    fn send(&mut self, message: &WireMessage) -> DuelResult<()> {
        (**self).send(message)
    }

    fn is_connected(&self) -> bool {
        (**self).is_connected()
    }
}

/// In-memory transport: messages pile up until drained.
#[derive(Clone, Debug, Default)]
pub struct Outbox {
    queue: VecDeque<WireMessage>,
    connected: bool,
}

impl Outbox {
    /// An outbox with no peer yet.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// An outbox that already has a peer.
    #[must_use]
    pub fn connected() -> Self {
        Self {
            queue: VecDeque::new(),
            connected: true,
        }
    }

    pub fn set_connected(&mut self, connected: bool) {
        self.connected = connected;
    }

    pub fn len(&self) -> usize {
        self.queue.len()
    }

    pub fn is_empty(&self) -> bool {
        self.queue.is_empty()
    }

    /// Pop the oldest queued message.
    pub fn take(&mut self) -> Option<WireMessage> {
        self.queue.pop_front()
    }

    /// Remove and return every queued message, oldest first.
    pub fn drain(&mut self) -> Vec<WireMessage> {
        self.queue.drain(..).collect()
    }
}

impl Transport for Outbox {
    fn send(&mut self, message: &WireMessage) -> DuelResult<()> {
        if !self.connected {
            return Err(DuelError::Disconnected);
        }
        self.queue.push_back(*message);
        Ok(())
    }

    fn is_connected(&self) -> bool {
        self.connected
    }
}
