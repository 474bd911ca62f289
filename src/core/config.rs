//! Match configuration.
//!
//! A `DuelConfig` picks the two fighters, the resolution rules and the
//! presentation pacing. It is plain serde data so a front end can ship it as
//! JSON; every field has a default, so partial documents are accepted:
//!
//! ```
//! use dice_duel::core::DuelConfig;
//!
//! let config = DuelConfig::from_json(r#"{ "rules": { "block_margin": 3 } }"#).unwrap();
//! assert_eq!(config.rules.block_margin, 3);
//! assert!(config.rules.counter_attacks);
//! ```

use serde::{Deserialize, Serialize};

use super::character::{Character, CharacterId, Roster};
use super::error::{DuelError, DuelResult};
use super::side::SideMap;

/// Thresholds applied when an attack/defend pair is resolved.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ResolutionRules {
    /// A shortfall of at most this much (`-margin <= diff <= 0`) is a block.
    pub block_margin: i32,
    /// Whether a larger shortfall turns into a counter-attack.
    ///
    /// When disabled every `diff <= 0` is a block.
    pub counter_attacks: bool,
}

impl ResolutionRules {
    /// The earlier no-counter ruleset.
    ///
    /// With zero attack/defense stats this reduces to
    /// `damage = max(0, attacker_die - defender_die)`.
    #[must_use]
    pub const fn classic() -> Self {
        Self {
            block_margin: 0,
            counter_attacks: false,
        }
    }
}

impl Default for ResolutionRules {
    fn default() -> Self {
        Self {
            block_margin: 2,
            counter_attacks: true,
        }
    }
}

/// Presentation timing in milliseconds.
///
/// The core applies rolls synchronously; these values only tell the
/// presentation layer how long to spend playing back each step.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Pacing {
    /// Dice tumble animation before the final face is shown.
    pub roll_animation_ms: u32,
    /// Frame interval of the tumbling dice.
    pub roll_tick_ms: u32,
    /// Delay between a roll and its phase advance or resolution reveal.
    pub reveal_delay_ms: u32,
    /// Delay between the attack animation and the damage landing.
    pub damage_delay_ms: u32,
}

impl Default for Pacing {
    fn default() -> Self {
        Self {
            roll_animation_ms: 1100,
            roll_tick_ms: 50,
            reveal_delay_ms: 1000,
            damage_delay_ms: 1000,
        }
    }
}

/// Complete match configuration.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DuelConfig {
    /// Fighter in the player-one (host) slot.
    pub p1: CharacterId,
    /// Fighter in the player-two (guest) slot.
    pub p2: CharacterId,
    pub rules: ResolutionRules,
    pub pacing: Pacing,
}

impl Default for DuelConfig {
    fn default() -> Self {
        Self {
            p1: CharacterId::new(Roster::HUANG_LINGHOU),
            p2: CharacterId::new(Roster::WEN_LIANG),
            rules: ResolutionRules::default(),
            pacing: Pacing::default(),
        }
    }
}

impl DuelConfig {
    /// Parse and validate a JSON config document.
    pub fn from_json(json: &str) -> DuelResult<Self> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Check value bounds.
    pub fn validate(&self) -> DuelResult<()> {
        if self.rules.block_margin < 0 {
            return Err(DuelError::InvalidConfig(format!(
                "block_margin must be non-negative, got {}",
                self.rules.block_margin
            )));
        }
        if self.pacing.roll_tick_ms == 0 {
            return Err(DuelError::InvalidConfig("roll_tick_ms must be positive".into()));
        }
        Ok(())
    }

    /// Look up both fighters in a roster.
    pub fn fighters(&self, roster: &Roster) -> DuelResult<SideMap<Character>> {
        let p1 = roster.require(&self.p1)?.clone();
        let p2 = roster.require(&self.p2)?.clone();
        Ok(SideMap::from_pair(p1, p2))
    }
}
