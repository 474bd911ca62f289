//! The duel exposed to JavaScript via wasm-bindgen.
//!
//! The page drives a `DuelHandle`: it starts a match, forwards button
//! presses and peer messages, plays back the events each call returns, and
//! ships whatever `take_outgoing` hands it over the data channel.

use serde::Serialize;
use wasm_bindgen::prelude::*;

use crate::combat::{describe_resolution, describe_roll, CombatEvent, Resolution};
use crate::core::{DiceRng, DuelConfig, DuelError, Roster, Side};
use crate::sync::{DuelPeer, Outbox, SessionId, Transport, WireMessage};

/// What one roll (or received message) produced, for playback.
#[derive(Debug, Clone, Serialize)]
pub struct StepOutput {
    pub events: Vec<CombatEvent>,
    /// Combat log lines, in order.
    pub log: Vec<String>,
    pub resolution: Option<Resolution>,
}

/// `side` is the roller at the time the die was applied.
fn step_output(
    side: Side,
    events: Vec<CombatEvent>,
    resolution: Option<Resolution>,
) -> StepOutput {
    let mut log: Vec<String> = events
        .iter()
        .filter_map(|event| match event {
            CombatEvent::DiceRolled { value } => Some(describe_roll(side, *value)),
            _ => None,
        })
        .collect();
    if let Some(resolution) = &resolution {
        log.push(describe_resolution(resolution));
    }
    StepOutput {
        events,
        log,
        resolution,
    }
}

fn js_err(err: DuelError) -> String {
    err.to_string()
}

fn to_js<T: Serialize>(value: &T) -> JsValue {
    match serde_wasm_bindgen::to_value(value) {
        Ok(val) => val,
        Err(e) => {
            log::error!("serialization failed: {e:?}");
            JsValue::NULL
        }
    }
}

/// A match handle owned by the page.
#[wasm_bindgen]
pub struct DuelHandle {
    config: DuelConfig,
    roster: Roster,
    rng: DiceRng,
    peer: Option<DuelPeer<Outbox>>,
}

#[wasm_bindgen]
impl DuelHandle {
    /// Create a handle. `config_json` overrides the stock match; `seed`
    /// fixes the dice for replays.
    #[wasm_bindgen(constructor)]
    pub fn new(config_json: Option<String>, seed: Option<u64>) -> Result<DuelHandle, String> {
        let config = match config_json {
            Some(json) => DuelConfig::from_json(&json).map_err(js_err)?,
            None => DuelConfig::default(),
        };
        let rng = seed.map_or_else(DiceRng::from_entropy, DiceRng::new);
        log::info!("duel handle created, seed {}", rng.seed());
        Ok(Self {
            config,
            roster: Roster::builtin(),
            rng,
            peer: None,
        })
    }

    /// Presentation timings from the config.
    pub fn pacing(&self) -> JsValue {
        to_js(&self.config.pacing)
    }

    /// Both players on this device.
    pub fn start_local(&mut self) -> Result<(), String> {
        let peer = DuelPeer::local(&self.config, &self.roster, Outbox::new()).map_err(js_err)?;
        self.peer = Some(peer);
        Ok(())
    }

    /// Host a match under the id the signaling service assigned. Returns
    /// the invite link built on `base_url`.
    pub fn host(&mut self, session: &str, base_url: &str) -> Result<String, String> {
        let session = SessionId::new(session).map_err(js_err)?;
        let link = session.invite_link(base_url);
        let peer =
            DuelPeer::host(&self.config, &self.roster, session, Outbox::new()).map_err(js_err)?;
        self.peer = Some(peer);
        Ok(link)
    }

    /// Join from the current page URL. Returns the session id to connect
    /// to, or `None` when the URL carries no invite.
    pub fn join(&mut self, url: &str) -> Result<Option<String>, String> {
        let Some(session) = SessionId::from_url(url).map_err(js_err)? else {
            return Ok(None);
        };
        let id = session.to_string();
        let peer =
            DuelPeer::join(&self.config, &self.roster, session, Outbox::new()).map_err(js_err)?;
        self.peer = Some(peer);
        Ok(Some(id))
    }

    /// The data channel opened.
    pub fn peer_connected(&mut self) {
        if let Some(peer) = self.peer.as_mut() {
            peer.transport_mut().set_connected(true);
            peer.on_peer_connected();
        }
    }

    /// The data channel closed.
    pub fn peer_disconnected(&mut self) {
        if let Some(peer) = self.peer.as_mut() {
            peer.transport_mut().set_connected(false);
            peer.on_peer_disconnected();
        }
    }

    /// Roll for this device's side.
    pub fn roll(&mut self) -> Result<JsValue, String> {
        let peer = self.peer.as_mut().ok_or_else(|| js_err(DuelError::MatchNotStarted))?;
        let side = peer.state().phase().roller();
        let mut events = Vec::new();
        let resolution = peer.roll(&mut self.rng, &mut events).map_err(js_err)?;
        Ok(to_js(&step_output(side, events, resolution)))
    }

    /// A message arrived from the peer.
    pub fn receive(&mut self, message: JsValue) -> Result<JsValue, String> {
        let peer = self.peer.as_mut().ok_or_else(|| js_err(DuelError::MatchNotStarted))?;
        let message: WireMessage = serde_wasm_bindgen::from_value(message)
            .map_err(|e| js_err(DuelError::Decode(e.to_string())))?;
        let side = peer.state().phase().roller();
        let mut events = Vec::new();
        let resolution = peer.on_message(&message, &mut events).map_err(js_err)?;
        Ok(to_js(&step_output(side, events, resolution)))
    }

    /// Restart on both ends.
    pub fn restart(&mut self) {
        if let Some(peer) = self.peer.as_mut() {
            peer.restart();
        }
    }

    /// Whether the roll button should be enabled.
    pub fn can_roll(&self) -> bool {
        self.peer.as_ref().is_some_and(DuelPeer::can_roll)
    }

    /// The battle-screen view, or `null` before a match starts.
    pub fn view(&self) -> JsValue {
        match &self.peer {
            Some(peer) => to_js(&peer.view()),
            None => JsValue::NULL,
        }
    }

    /// Messages to send to the peer, oldest first.
    pub fn take_outgoing(&mut self) -> JsValue {
        let messages = match self.peer.as_mut() {
            Some(peer) => peer.transport_mut().drain(),
            None => Vec::new(),
        };
        to_js(&messages)
    }

    /// Whether a peer connection is open.
    pub fn is_connected(&self) -> bool {
        self.peer
            .as_ref()
            .is_some_and(|peer| peer.transport().is_connected())
    }
}
