//! Turning an attack/defend roll pair into an outcome.
//!
//! ```text
//! diff = (attacker_die + attack) - (defender_die + defense)
//! diff > 0                 -> Hit:     diff damage to the defender
//! -margin <= diff <= 0     -> Blocked: no damage
//! diff < -margin           -> Counter: |diff| damage to the attacker
//! ```
//!
//! Resolution is a pure function; applying the damage is the state
//! machine's job.

use serde::{Deserialize, Serialize};

use crate::core::{DieRoll, ResolutionRules, Side};

/// How an exchange ended.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Outcome {
    Hit,
    Blocked,
    Counter,
}

/// One side's contribution to an exchange: its die and the stat added to it.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Strike {
    pub die: DieRoll,
    pub stat: i32,
}

impl Strike {
    #[must_use]
    pub const fn new(die: DieRoll, stat: i32) -> Self {
        Self { die, stat }
    }

    /// Die plus stat, saturating at `i32::MAX`.
    #[must_use]
    pub fn total(self) -> i32 {
        i32::from(self.die.value()).saturating_add(self.stat)
    }
}

/// The full record of a resolved exchange.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Resolution {
    pub attacker: Side,
    pub attack: Strike,
    pub defense: Strike,
    /// Attack total minus defense total.
    pub diff: i32,
    pub outcome: Outcome,
    /// Damage dealt; zero on a block.
    pub damage: i32,
}

impl Resolution {
    #[must_use]
    pub const fn defender(&self) -> Side {
        self.attacker.opponent()
    }

    /// The side taking damage, if any.
    #[must_use]
    pub const fn target(&self) -> Option<Side> {
        match self.outcome {
            Outcome::Hit => Some(self.defender()),
            Outcome::Blocked => None,
            Outcome::Counter => Some(self.attacker),
        }
    }

    /// `(die + attack) - (die + defense)`, as shown in the combat log.
    #[must_use]
    pub fn formula(&self) -> String {
        format!(
            "({} + {}) - ({} + {})",
            self.attack.die, self.attack.stat, self.defense.die, self.defense.stat
        )
    }
}

/// Resolve one exchange.
#[must_use]
pub fn resolve(
    attacker: Side,
    attack: Strike,
    defense: Strike,
    rules: ResolutionRules,
) -> Resolution {
    let diff = attack.total().saturating_sub(defense.total());

    let (outcome, damage) = if diff > 0 {
        (Outcome::Hit, diff)
    } else if !rules.counter_attacks || diff >= rules.block_margin.saturating_neg() {
        (Outcome::Blocked, 0)
    } else {
        (Outcome::Counter, diff.saturating_neg())
    };

    Resolution {
        attacker,
        attack,
        defense,
        diff,
        outcome,
        damage,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn strike(die: i64, stat: i32) -> Strike {
        Strike::new(DieRoll::new(die).unwrap(), stat)
    }

    #[test]
    fn test_hit() {
        let r = resolve(Side::P1, strike(7, 4), strike(3, 1), ResolutionRules::default());
        assert_eq!(r.diff, 7);
        assert_eq!(r.outcome, Outcome::Hit);
        assert_eq!(r.damage, 7);
        assert_eq!(r.target(), Some(Side::P2));
    }

    #[test]
    fn test_block_band_edges() {
        let rules = ResolutionRules::default();

        let r = resolve(Side::P1, strike(3, 4), strike(5, 4), rules);
        assert_eq!(r.diff, -2);
        assert_eq!(r.outcome, Outcome::Blocked);
        assert_eq!(r.damage, 0);
        assert_eq!(r.target(), None);

        let r = resolve(Side::P1, strike(5, 0), strike(5, 0), rules);
        assert_eq!(r.diff, 0);
        assert_eq!(r.outcome, Outcome::Blocked);

        let r = resolve(Side::P1, strike(2, 0), strike(5, 0), rules);
        assert_eq!(r.diff, -3);
        assert_eq!(r.outcome, Outcome::Counter);
        assert_eq!(r.damage, 3);
    }

    #[test]
    fn test_counter() {
        let r = resolve(Side::P2, strike(1, 1), strike(8, 5), ResolutionRules::default());
        assert_eq!(r.diff, -11);
        assert_eq!(r.outcome, Outcome::Counter);
        assert_eq!(r.damage, 11);
        assert_eq!(r.target(), Some(Side::P2));
        assert_eq!(r.defender(), Side::P1);
    }

    #[test]
    fn test_wider_margin() {
        let rules = ResolutionRules {
            block_margin: 5,
            counter_attacks: true,
        };
        let r = resolve(Side::P1, strike(1, 0), strike(6, 0), rules);
        assert_eq!(r.outcome, Outcome::Blocked);
    }

    #[test]
    fn test_classic_rules_never_counter() {
        let rules = ResolutionRules::classic();
        for a in 1..=10 {
            for d in 1..=10 {
                let r = resolve(Side::P1, strike(a, 0), strike(d, 0), rules);
                assert_ne!(r.outcome, Outcome::Counter);
                assert_eq!(r.damage, (a - d).max(0) as i32);
            }
        }
    }

    #[test]
    fn test_extreme_stats_keep_the_sign() {
        let rules = ResolutionRules::default();

        let r = resolve(Side::P1, strike(10, i32::MAX), strike(1, 0), rules);
        assert_eq!(r.outcome, Outcome::Hit);
        assert_eq!(r.diff, i32::MAX - 1);
        assert_eq!(r.damage, i32::MAX - 1);

        let r = resolve(Side::P1, strike(1, 0), strike(10, i32::MAX), rules);
        assert_eq!(r.outcome, Outcome::Counter);
        assert_eq!(r.diff, -i32::MAX);
        assert_eq!(r.damage, i32::MAX);
    }

    #[test]
    fn test_negative_margin_does_not_overflow() {
        let rules = ResolutionRules {
            block_margin: i32::MIN,
            counter_attacks: true,
        };
        let r = resolve(Side::P1, strike(1, 0), strike(10, 0), rules);
        assert_eq!(r.outcome, Outcome::Blocked);
    }

    #[test]
    fn test_formula() {
        let r = resolve(Side::P1, strike(7, 4), strike(3, 1), ResolutionRules::default());
        assert_eq!(r.formula(), "(7 + 4) - (3 + 1)");
    }
}
