//! One participant's end of a duel.
//!
//! `DuelPeer` owns a `MatchState` and a transport. Local rolls are applied
//! and then sent to the other peer; rolls received from the peer are applied
//! as remote rolls and never sent back. Since resolution is deterministic,
//! two peers that apply the same dice in the same order stay in step.
//!
//! There is no acknowledgement or resync: a roll lost in transit leaves the
//! peers on different trajectories until someone restarts.

use tracing::{debug, info, warn};

use super::message::WireMessage;
use super::session::{ConnectionState, SessionId};
use super::transport::Transport;
use crate::combat::{
    describe_resolution, describe_roll, MatchMode, MatchState, Notifier, Resolution, Role,
    RollOrigin,
};
use crate::core::{DiceRng, DieRoll, DuelConfig, DuelError, DuelResult, Roster, Side};
use crate::view::MatchView;

/// A duel as seen from one device.
#[derive(Debug)]
pub struct DuelPeer<T: Transport> {
    state: MatchState,
    transport: T,
    connection: ConnectionState,
    session: Option<SessionId>,
}

impl<T: Transport> DuelPeer<T> {
    /// Both sides played on this device. The transport is never used.
    pub fn local(config: &DuelConfig, roster: &Roster, transport: T) -> DuelResult<Self> {
        let state = MatchState::from_config(config, roster, MatchMode::Local)?;
        info!(
            p1 = state.fighter(Side::P1).name(),
            p2 = state.fighter(Side::P2).name(),
            "local match started"
        );
        Ok(Self {
            state,
            transport,
            connection: ConnectionState::Offline,
            session: None,
        })
    }

    /// Create a session and wait for a guest. Plays player one.
    pub fn host(
        config: &DuelConfig,
        roster: &Roster,
        session: SessionId,
        transport: T,
    ) -> DuelResult<Self> {
        Self::online(config, roster, Role::Host, session, transport)
    }

    /// Join the host's session. Plays player two.
    pub fn join(
        config: &DuelConfig,
        roster: &Roster,
        session: SessionId,
        transport: T,
    ) -> DuelResult<Self> {
        Self::online(config, roster, Role::Guest, session, transport)
    }

    fn online(
        config: &DuelConfig,
        roster: &Roster,
        role: Role,
        session: SessionId,
        transport: T,
    ) -> DuelResult<Self> {
        let state = MatchState::from_config(config, roster, MatchMode::Online { role })?;
        info!(?role, %session, "online match created");
        Ok(Self {
            state,
            transport,
            connection: ConnectionState::Waiting,
            session: Some(session),
        })
    }

    // === Accessors ===

    pub fn state(&self) -> &MatchState {
        &self.state
    }

    pub fn role(&self) -> Option<Role> {
        self.state.mode().role()
    }

    pub fn session(&self) -> Option<&SessionId> {
        self.session.as_ref()
    }

    pub fn connection(&self) -> ConnectionState {
        self.connection
    }

    pub fn transport(&self) -> &T {
        &self.transport
    }

    pub fn transport_mut(&mut self) -> &mut T {
        &mut self.transport
    }

    /// Whether local play is open: always for a local match, once the peer
    /// is connected for an online one.
    #[must_use]
    pub fn is_started(&self) -> bool {
        match self.connection {
            ConnectionState::Offline | ConnectionState::Connected => true,
            ConnectionState::Waiting | ConnectionState::Disconnected => false,
        }
    }

    /// Whether the roll action should be enabled right now.
    #[must_use]
    pub fn can_roll(&self) -> bool {
        self.is_started() && self.state.can_roll(RollOrigin::Local)
    }

    /// Snapshot for the presentation layer.
    #[must_use]
    pub fn view(&self) -> MatchView {
        MatchView::new(&self.state, self.can_roll())
    }

    // === Connection ===

    /// The data channel to the other peer opened.
    pub fn on_peer_connected(&mut self) {
        if self.state.mode() == MatchMode::Local {
            return;
        }
        self.connection = ConnectionState::Connected;
        info!("Player 2 Connected!");
    }

    /// The data channel closed. The match is not resumed.
    pub fn on_peer_disconnected(&mut self) {
        if self.state.mode() == MatchMode::Local {
            return;
        }
        self.connection = ConnectionState::Disconnected;
        warn!(session = ?self.session, "peer disconnected");
    }

    // === Actions ===

    /// Roll a die for this device's side and apply it.
    ///
    /// The die is only drawn once the roll is known to be accepted, so a
    /// rejected attempt leaves `rng` untouched.
    pub fn roll(
        &mut self,
        rng: &mut DiceRng,
        notifier: &mut impl Notifier,
    ) -> DuelResult<Option<Resolution>> {
        self.ensure_started()?;
        if self.state.is_game_over() {
            debug!("match over, roll ignored");
            return Ok(None);
        }
        if !self.state.can_roll(RollOrigin::Local) {
            warn!(phase = ?self.state.phase(), "roll attempted out of turn");
            return Err(DuelError::NotEligible {
                phase: self.state.phase(),
                origin: RollOrigin::Local,
            });
        }
        let roll = rng.roll();
        self.submit_local_roll(roll, notifier)
    }

    /// Apply a die rolled on this device and forward it to the peer.
    ///
    /// Sending is fire-and-forget: a transport failure is logged and the
    /// local state keeps the roll.
    pub fn submit_local_roll(
        &mut self,
        roll: DieRoll,
        notifier: &mut impl Notifier,
    ) -> DuelResult<Option<Resolution>> {
        self.ensure_started()?;
        if self.state.is_game_over() {
            debug!(value = roll.value(), "match over, roll ignored");
            return Ok(None);
        }

        let side = self.state.phase().roller();
        let resolution = self.state.submit_roll(roll, RollOrigin::Local, notifier)?;
        debug!("{}", describe_roll(side, roll));
        if let Some(resolution) = &resolution {
            info!("{}", describe_resolution(resolution));
        }

        if self.role().is_some() {
            self.send(&WireMessage::roll(roll));
        }
        Ok(resolution)
    }

    /// Handle a message from the peer.
    ///
    /// Rolls are refused with `MatchNotStarted` until the peer connection is
    /// up and again after it drops, the same as local rolls. A restart is
    /// always honoured.
    pub fn on_message(
        &mut self,
        message: &WireMessage,
        notifier: &mut impl Notifier,
    ) -> DuelResult<Option<Resolution>> {
        match *message {
            WireMessage::Roll { value } => {
                self.ensure_started()?;
                let side = self.state.phase().roller();
                let resolution = self.state.submit_roll(value, RollOrigin::Remote, notifier)?;
                debug!("{}", describe_roll(side, value));
                if let Some(resolution) = &resolution {
                    info!("{}", describe_resolution(resolution));
                }
                Ok(resolution)
            }
            WireMessage::Restart => {
                info!("peer requested restart");
                self.reset();
                Ok(None)
            }
        }
    }

    /// Decode and handle raw message text from the peer.
    pub fn on_text(
        &mut self,
        text: &str,
        notifier: &mut impl Notifier,
    ) -> DuelResult<Option<Resolution>> {
        let message = WireMessage::decode(text).map_err(|err| {
            warn!(%err, "dropping malformed message");
            err
        })?;
        self.on_message(&message, notifier)
    }

    /// Start over on both ends.
    pub fn restart(&mut self) {
        if self.role().is_some() {
            self.send(&WireMessage::Restart);
        }
        self.reset();
    }

    fn reset(&mut self) {
        self.state = self.state.restarted();
        info!("match restarted");
    }

    fn ensure_started(&self) -> DuelResult<()> {
        if self.is_started() {
            Ok(())
        } else {
            Err(DuelError::MatchNotStarted)
        }
    }

    fn send(&mut self, message: &WireMessage) {
        if let Err(err) = self.transport.send(message) {
            warn!(%err, ?message, "send failed; peers may now disagree");
        }
    }
}
