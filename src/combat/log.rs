//! Combat log lines.
//!
//! The text shown in the in-game log panel, one line per roll and one per
//! resolution.

use super::resolution::{Outcome, Resolution};
use crate::core::{DieRoll, Side};

/// `"Player 1 rolled 7!"`
#[must_use]
pub fn describe_roll(side: Side, roll: DieRoll) -> String {
    format!("{side} rolled {roll}!")
}

/// The formula, the difference and what came of it.
#[must_use]
pub fn describe_resolution(resolution: &Resolution) -> String {
    let head = format!("Result: {} = {}.", resolution.formula(), resolution.diff);
    match resolution.outcome {
        Outcome::Hit => format!("{head} Damage: {}", resolution.damage),
        Outcome::Blocked => format!("{head} Blocked!"),
        Outcome::Counter => format!("{head} COUNTER ATTACK! (-{} HP)", resolution.damage),
    }
}
