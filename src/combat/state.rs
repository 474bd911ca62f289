//! The match state machine.
//!
//! `MatchState` is the single mutable value of a duel. Each peer owns its
//! own copy, and both copies stay identical because the only way to mutate
//! one is `submit_roll`, a deterministic function of the current state and
//! the die value.
//!
//! ## Eligibility
//!
//! Exactly one side rolls in each phase. In a local match the one process
//! drives both sides; online, the host drives player one and the guest
//! player two. A local roll is accepted only for a side this process drives,
//! and a remote roll only for a side the peer drives, so neither peer can
//! submit twice for the same phase.

use im::Vector;
use serde::{Deserialize, Serialize};
use tracing::{debug, info, warn};

use super::event::{CombatEvent, Notifier};
use super::phase::{MatchStatus, Phase};
use super::resolution::{resolve, Outcome, Resolution, Strike};
use crate::core::{
    Character, DieRoll, DuelConfig, DuelError, DuelResult, ResolutionRules, Roster, Side, SideMap,
};

/// Which player slot an online peer controls.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    /// Creates the session; plays player one.
    Host,
    /// Joins with the host's session id; plays player two.
    Guest,
}

impl Role {
    /// The slot this role plays.
    #[must_use]
    pub const fn side(self) -> Side {
        match self {
            Role::Host => Side::P1,
            Role::Guest => Side::P2,
        }
    }

    /// The role of the other peer.
    #[must_use]
    pub const fn peer(self) -> Self {
        match self {
            Role::Host => Role::Guest,
            Role::Guest => Role::Host,
        }
    }
}

/// How the match is played.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "mode", rename_all = "lowercase")]
pub enum MatchMode {
    /// Both sides on one device.
    #[default]
    Local,
    /// Two peers, one side each.
    Online { role: Role },
}

impl MatchMode {
    /// Whether this process drives `side`.
    #[must_use]
    pub const fn controls(self, side: Side) -> bool {
        match self {
            MatchMode::Local => true,
            MatchMode::Online { role } => matches!(
                (role, side),
                (Role::Host, Side::P1) | (Role::Guest, Side::P2)
            ),
        }
    }

    #[must_use]
    pub const fn role(self) -> Option<Role> {
        match self {
            MatchMode::Local => None,
            MatchMode::Online { role } => Some(role),
        }
    }
}

/// Where a submitted roll came from.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RollOrigin {
    /// Rolled by this process.
    Local,
    /// Received from the peer.
    Remote,
}

/// One applied roll, kept for replay and trajectory comparison.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct RollRecord {
    /// Position in the match (0-based).
    pub sequence: u32,
    pub phase: Phase,
    pub side: Side,
    pub value: DieRoll,
}

/// Complete state of one duel.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct MatchState {
    fighters: SideMap<Character>,
    rules: ResolutionRules,
    mode: MatchMode,
    phase: Phase,
    health: SideMap<i32>,
    /// Last die per side; meaningful within one exchange only.
    dice: SideMap<Option<DieRoll>>,
    game_over: bool,
    winner: Option<Side>,
    last_resolution: Option<Resolution>,
    history: Vector<RollRecord>,
}

impl MatchState {
    /// Start a match: both fighters at full health, player one to attack.
    #[must_use]
    pub fn new(fighters: SideMap<Character>, rules: ResolutionRules, mode: MatchMode) -> Self {
        let health = fighters.map(|_, f| f.max_health());
        Self {
            fighters,
            rules,
            mode,
            phase: Phase::P1AttackRoll,
            health,
            dice: SideMap::default(),
            game_over: false,
            winner: None,
            last_resolution: None,
            history: Vector::new(),
        }
    }

    /// Start a match from configuration, resolving fighters in `roster`.
    pub fn from_config(config: &DuelConfig, roster: &Roster, mode: MatchMode) -> DuelResult<Self> {
        config.validate()?;
        let fighters = config.fighters(roster)?;
        Ok(Self::new(fighters, config.rules, mode))
    }

    /// A fresh match with the same fighters, rules and mode.
    ///
    /// There is no partial reset: everything else is discarded.
    #[must_use]
    pub fn restarted(&self) -> Self {
        Self::new(self.fighters.clone(), self.rules, self.mode)
    }

    // === Accessors ===

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn mode(&self) -> MatchMode {
        self.mode
    }

    pub fn rules(&self) -> ResolutionRules {
        self.rules
    }

    pub fn fighter(&self, side: Side) -> &Character {
        &self.fighters[side]
    }

    pub fn health(&self, side: Side) -> i32 {
        self.health[side]
    }

    pub fn max_health(&self, side: Side) -> i32 {
        self.fighters[side].max_health()
    }

    pub fn dice(&self, side: Side) -> Option<DieRoll> {
        self.dice[side]
    }

    pub fn is_game_over(&self) -> bool {
        self.game_over
    }

    pub fn winner(&self) -> Option<Side> {
        self.winner
    }

    pub fn last_resolution(&self) -> Option<&Resolution> {
        self.last_resolution.as_ref()
    }

    /// Every roll applied so far, in order.
    pub fn history(&self) -> &Vector<RollRecord> {
        &self.history
    }

    /// The most recently applied die, if any.
    pub fn last_roll(&self) -> Option<DieRoll> {
        self.history.last().map(|r| r.value)
    }

    pub fn status(&self) -> MatchStatus {
        match self.winner {
            Some(winner) if self.game_over => MatchStatus::GameOver { winner },
            _ => MatchStatus::InProgress { phase: self.phase },
        }
    }

    // === Eligibility ===

    /// Whether a roll from `origin` would be accepted right now.
    #[must_use]
    pub fn can_roll(&self, origin: RollOrigin) -> bool {
        if self.game_over {
            return false;
        }
        let roller = self.phase.roller();
        match (origin, self.mode) {
            (RollOrigin::Local, mode) => mode.controls(roller),
            (RollOrigin::Remote, MatchMode::Local) => false,
            (RollOrigin::Remote, mode) => !mode.controls(roller),
        }
    }

    fn check_eligible(&self, origin: RollOrigin) -> DuelResult<()> {
        if self.can_roll(origin) {
            Ok(())
        } else {
            Err(DuelError::NotEligible {
                phase: self.phase,
                origin,
            })
        }
    }

    // === Transitions ===

    /// Apply a die for the current phase.
    ///
    /// - Attack phase: the die is recorded and the defender's phase begins.
    /// - Defend phase: the die is recorded and the exchange is resolved;
    ///   the resolution is returned.
    ///
    /// After the match is over this is a no-op returning `Ok(None)`.
    /// An ineligible roll is rejected without touching the state.
    pub fn submit_roll(
        &mut self,
        roll: DieRoll,
        origin: RollOrigin,
        notifier: &mut impl Notifier,
    ) -> DuelResult<Option<Resolution>> {
        if self.game_over {
            debug!(value = roll.value(), "match over, roll ignored");
            return Ok(None);
        }
        if let Err(err) = self.check_eligible(origin) {
            warn!(phase = ?self.phase, ?origin, value = roll.value(), "rejected roll");
            return Err(err);
        }

        let phase = self.phase;
        let side = phase.roller();
        self.dice[side] = Some(roll);
        self.history.push_back(RollRecord {
            sequence: self.history.len() as u32,
            phase,
            side,
            value: roll,
        });
        debug!(?phase, %side, value = roll.value(), ?origin, "roll applied");
        notifier.notify(CombatEvent::DiceRolled { value: roll });

        if phase.is_attack() {
            self.phase = phase.next();
            debug!(phase = ?self.phase, "phase advanced");
            return Ok(None);
        }

        let resolution = self.resolve_exchange(phase.attacker());
        self.apply_resolution(&resolution, notifier);
        Ok(Some(resolution))
    }

    fn resolve_exchange(&self, attacker: Side) -> Resolution {
        let defender = attacker.opponent();
        // Both dice are set: the attack phase always precedes the defend phase.
        let die = |side: Side| self.dice[side].unwrap_or(DieRoll::LOWEST);
        resolve(
            attacker,
            Strike::new(die(attacker), self.fighters[attacker].attack()),
            Strike::new(die(defender), self.fighters[defender].defense()),
            self.rules,
        )
    }

    fn apply_resolution(&mut self, resolution: &Resolution, notifier: &mut impl Notifier) {
        let attacker = resolution.attacker;
        let defender = resolution.defender();

        info!(
            %attacker,
            formula = %resolution.formula(),
            diff = resolution.diff,
            outcome = ?resolution.outcome,
            damage = resolution.damage,
            "exchange resolved"
        );

        match resolution.outcome {
            Outcome::Hit => {
                notifier.notify(CombatEvent::Attack { side: attacker });
                self.apply_damage(defender, resolution.damage, notifier);
            }
            Outcome::Blocked => {
                notifier.notify(CombatEvent::Block { side: defender });
                notifier.notify(CombatEvent::Damage { side: defender, amount: 0 });
            }
            Outcome::Counter => {
                notifier.notify(CombatEvent::Counter { side: defender });
                self.apply_damage(attacker, resolution.damage, notifier);
            }
        }
        self.last_resolution = Some(*resolution);

        if self.game_over {
            return;
        }
        self.phase = self.phase.next();
        debug!(phase = ?self.phase, "phase advanced");
    }

    fn apply_damage(&mut self, target: Side, amount: i32, notifier: &mut impl Notifier) {
        let remaining = (self.health[target] - amount).clamp(0, self.max_health(target));
        self.health[target] = remaining;
        notifier.notify(CombatEvent::Damage { side: target, amount });

        if remaining == 0 {
            let winner = target.opponent();
            self.game_over = true;
            self.winner = Some(winner);
            info!(%winner, "match over");
            notifier.notify(CombatEvent::GameOver { winner });
        }
    }
}
