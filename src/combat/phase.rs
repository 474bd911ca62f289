//! Turn phases.
//!
//! A round is four rolls: the attacker rolls, the defender rolls and the
//! pair resolves, then the roles swap. The cycle is fixed:
//!
//! ```text
//! P1AttackRoll -> P2DefendRoll -> (resolve)
//!   -> P2AttackRoll -> P1DefendRoll -> (resolve) -> P1AttackRoll
//! ```

use serde::{Deserialize, Serialize};

use crate::core::Side;

/// One step of the turn cycle.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Phase {
    #[default]
    P1AttackRoll,
    P2DefendRoll,
    P2AttackRoll,
    P1DefendRoll,
}

impl Phase {
    /// All phases in cycle order, starting from the initial one.
    pub const CYCLE: [Phase; 4] = [
        Phase::P1AttackRoll,
        Phase::P2DefendRoll,
        Phase::P2AttackRoll,
        Phase::P1DefendRoll,
    ];

    /// The side that rolls in this phase.
    #[must_use]
    pub const fn roller(self) -> Side {
        match self {
            Phase::P1AttackRoll | Phase::P1DefendRoll => Side::P1,
            Phase::P2DefendRoll | Phase::P2AttackRoll => Side::P2,
        }
    }

    /// The side attacking in the exchange this phase belongs to.
    #[must_use]
    pub const fn attacker(self) -> Side {
        match self {
            Phase::P1AttackRoll | Phase::P2DefendRoll => Side::P1,
            Phase::P2AttackRoll | Phase::P1DefendRoll => Side::P2,
        }
    }

    /// Whether this is the attacker's roll (no resolution follows yet).
    #[must_use]
    pub const fn is_attack(self) -> bool {
        matches!(self, Phase::P1AttackRoll | Phase::P2AttackRoll)
    }

    /// Whether this is the defender's roll (resolution follows).
    #[must_use]
    pub const fn is_defend(self) -> bool {
        !self.is_attack()
    }

    /// The phase that follows in the cycle.
    ///
    /// After a defend phase this is the next attacker's roll; the state
    /// machine only takes that step once resolution leaves both fighters
    /// standing.
    #[must_use]
    pub const fn next(self) -> Self {
        match self {
            Phase::P1AttackRoll => Phase::P2DefendRoll,
            Phase::P2DefendRoll => Phase::P2AttackRoll,
            Phase::P2AttackRoll => Phase::P1DefendRoll,
            Phase::P1DefendRoll => Phase::P1AttackRoll,
        }
    }

    /// Position within `CYCLE`.
    #[must_use]
    pub const fn cycle_index(self) -> usize {
        match self {
            Phase::P1AttackRoll => 0,
            Phase::P2DefendRoll => 1,
            Phase::P2AttackRoll => 2,
            Phase::P1DefendRoll => 3,
        }
    }
}

impl std::fmt::Display for Phase {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let action = if self.is_attack() { "Attack" } else { "Defend" };
        write!(f, "{} {}", self.roller().label(), action)
    }
}

/// Where the match stands.
///
/// `GameOver` is absorbing: no roll is accepted once it is reached.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum MatchStatus {
    InProgress { phase: Phase },
    GameOver { winner: Side },
}

impl MatchStatus {
    #[must_use]
    pub const fn is_over(self) -> bool {
        matches!(self, MatchStatus::GameOver { .. })
    }
}
