//! View types for UI serialization.
//!
//! A `MatchView` is a read-only snapshot of everything the battle screen
//! draws: the turn banner, both fighter cards and whether the roll button
//! is live. It is rebuilt after every state change.

use serde::{Deserialize, Serialize};

use crate::combat::{MatchState, MatchStatus, Phase};
use crate::core::{DieRoll, Side, SpecialSkill};

/// Health below this share of the maximum is drawn as critical.
pub const LOW_HEALTH_PERCENT: f32 = 30.0;

/// One fighter card.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FighterView {
    pub side: Side,
    /// `"P1 <name>"`
    pub label: String,
    pub name: String,
    pub profession: String,
    pub portrait: String,
    pub health: i32,
    pub max_health: i32,
    /// Health bar width, `0.0..=100.0`.
    pub health_percent: f32,
    pub low_health: bool,
    pub attack: i32,
    pub defense: i32,
    pub magic: i32,
    pub skills: Vec<SpecialSkill>,
    /// This side rolls next.
    pub active_turn: bool,
    /// This side is the target of the attack being rolled.
    pub defending: bool,
    /// This side is rolling its defense.
    pub defense_glow: bool,
    /// The die this side rolled most recently.
    pub last_die: Option<DieRoll>,
}

/// The complete battle-screen view.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MatchView {
    /// `"P1 Attack"`, `"P2 Defend"`, ... or `"P1 Wins!"` once over.
    pub turn_indicator: String,
    pub status: MatchStatus,
    pub phase: Phase,
    pub roll_enabled: bool,
    pub p1: FighterView,
    pub p2: FighterView,
    /// The most recent die on either side, for the central dice display.
    pub last_roll: Option<DieRoll>,
}

impl MatchView {
    /// Build the view. `roll_enabled` says whether this device may roll now.
    #[must_use]
    pub fn new(state: &MatchState, roll_enabled: bool) -> Self {
        let turn_indicator = match state.status() {
            MatchStatus::GameOver { winner } => format!("{} Wins!", winner.label()),
            MatchStatus::InProgress { phase } => phase.to_string(),
        };

        Self {
            turn_indicator,
            status: state.status(),
            phase: state.phase(),
            roll_enabled: roll_enabled && !state.is_game_over(),
            p1: FighterView::new(state, Side::P1),
            p2: FighterView::new(state, Side::P2),
            last_roll: state.last_roll(),
        }
    }

    #[must_use]
    pub fn fighter(&self, side: Side) -> &FighterView {
        match side {
            Side::P1 => &self.p1,
            Side::P2 => &self.p2,
        }
    }
}

impl FighterView {
    fn new(state: &MatchState, side: Side) -> Self {
        let fighter = state.fighter(side);
        let health = state.health(side);
        let max_health = state.max_health(side);
        let health_percent = (health as f32 * 100.0 / max_health as f32).clamp(0.0, 100.0);

        let phase = state.phase();
        let live = !state.is_game_over();
        let rolling = live && phase.roller() == side;

        Self {
            side,
            label: format!("{} {}", side.label(), fighter.name()),
            name: fighter.name().to_string(),
            profession: fighter.profession().to_string(),
            portrait: fighter.portrait().to_string(),
            health,
            max_health,
            health_percent,
            low_health: health_percent < LOW_HEALTH_PERCENT,
            attack: fighter.attack(),
            defense: fighter.defense(),
            magic: fighter.magic(),
            skills: fighter.skills().to_vec(),
            active_turn: rolling,
            defending: live && phase.is_attack() && phase.roller() != side,
            defense_glow: rolling && phase.is_defend(),
            last_die: state.dice(side),
        }
    }
}
