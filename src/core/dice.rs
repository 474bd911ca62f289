//! Ten-sided die values and the deterministic roller that produces them.
//!
//! `DieRoll` can only hold a value in `1..=10`, so a malformed roll can
//! never reach the state machine: locally rolled dice come from `DiceRng`,
//! and dice arriving over the wire are validated while deserializing.
//!
//! ```
//! use dice_duel::core::DiceRng;
//!
//! let mut a = DiceRng::new(42);
//! let mut b = DiceRng::new(42);
//! assert_eq!(a.roll(), b.roll());
//! ```

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use serde::{Deserialize, Serialize};

use super::error::{DuelError, DuelResult};

/// A validated face of a ten-sided die.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "i64", into = "u8")]
pub struct DieRoll(u8);

impl DieRoll {
    /// Lowest face.
    pub const MIN: u8 = 1;
    /// Highest face.
    pub const MAX: u8 = 10;
    /// The lowest face as a roll.
    pub const LOWEST: Self = Self(Self::MIN);

    /// Validate a raw value.
    pub fn new(value: i64) -> DuelResult<Self> {
        if (i64::from(Self::MIN)..=i64::from(Self::MAX)).contains(&value) {
            Ok(Self(value as u8))
        } else {
            Err(DuelError::InvalidRoll {
                value,
                min: Self::MIN,
                max: Self::MAX,
            })
        }
    }

    /// The face value.
    #[must_use]
    pub const fn value(self) -> u8 {
        self.0
    }
}

impl TryFrom<i64> for DieRoll {
    type Error = DuelError;

    fn try_from(value: i64) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<DieRoll> for u8 {
    fn from(roll: DieRoll) -> Self {
        roll.0
    }
}

impl std::fmt::Display for DieRoll {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Deterministic die roller.
///
/// Uses ChaCha8 so a seeded roller replays the same faces on every
/// platform, which keeps simulated matches and benchmarks reproducible.
#[derive(Clone, Debug)]
pub struct DiceRng {
    inner: ChaCha8Rng,
    seed: u64,
}

impl DiceRng {
    /// Create a roller with the given seed.
    #[must_use]
    pub fn new(seed: u64) -> Self {
        Self {
            inner: ChaCha8Rng::seed_from_u64(seed),
            seed,
        }
    }

    /// Create a roller seeded from OS (or browser) entropy.
    #[must_use]
    pub fn from_entropy() -> Self {
        let seed = rand::thread_rng().gen::<u64>();
        Self::new(seed)
    }

    /// Roll one die, uniformly in `1..=10`.
    pub fn roll(&mut self) -> DieRoll {
        DieRoll(self.inner.gen_range(DieRoll::MIN..=DieRoll::MAX))
    }

    /// The seed this roller started from.
    #[must_use]
    pub fn seed(&self) -> u64 {
        self.seed
    }

    /// Get the current state for checkpointing.
    #[must_use]
    pub fn state(&self) -> DiceRngState {
        DiceRngState {
            seed: self.seed,
            word_pos: self.inner.get_word_pos(),
        }
    }

    /// Restore from a saved state.
    #[must_use]
    pub fn from_state(state: &DiceRngState) -> Self {
        let mut inner = ChaCha8Rng::seed_from_u64(state.seed);
        inner.set_word_pos(state.word_pos);
        Self {
            inner,
            seed: state.seed,
        }
    }
}

/// Serializable roller state.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct DiceRngState {
    /// Original seed
    pub seed: u64,
    /// ChaCha8 word position (128-bit counter)
    pub word_pos: u128,
}
