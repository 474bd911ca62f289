//! Player slots and per-slot data storage.
//!
//! ## Side
//!
//! The two player slots of a duel. Player 1 is always the first attacker.
//!
//! ## SideMap
//!
//! Fixed two-entry storage indexed by `Side`, used for health, dice and
//! fighters so neither slot is ever special-cased by field name.

use serde::{Deserialize, Serialize};
use std::ops::{Index, IndexMut};

/// One of the two player slots.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Side {
    P1,
    P2,
}

impl Side {
    /// Both sides in seat order.
    pub const ALL: [Side; 2] = [Side::P1, Side::P2];

    /// The other slot.
    #[must_use]
    pub const fn opponent(self) -> Self {
        match self {
            Side::P1 => Side::P2,
            Side::P2 => Side::P1,
        }
    }

    /// Storage index (0 for P1, 1 for P2).
    #[must_use]
    pub const fn index(self) -> usize {
        match self {
            Side::P1 => 0,
            Side::P2 => 1,
        }
    }

    /// Short label used by turn indicators ("P1", "P2").
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Side::P1 => "P1",
            Side::P2 => "P2",
        }
    }
}

impl std::fmt::Display for Side {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Player {}", self.index() + 1)
    }
}

/// Per-side data storage with O(1) access.
///
/// ## Example
///
/// ```
/// use dice_duel::core::{Side, SideMap};
///
/// let mut health: SideMap<i32> = SideMap::new(|_| 100);
/// health[Side::P2] -= 7;
///
/// assert_eq!(health[Side::P1], 100);
/// assert_eq!(health[Side::P2], 93);
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SideMap<T> {
    data: [T; 2],
}

impl<T> SideMap<T> {
    /// Create a map with values from a factory function.
    pub fn new(mut factory: impl FnMut(Side) -> T) -> Self {
        Self {
            data: [factory(Side::P1), factory(Side::P2)],
        }
    }

    /// Create a map from explicit per-side values.
    pub fn from_pair(p1: T, p2: T) -> Self {
        Self { data: [p1, p2] }
    }

    /// Create a map with both entries set to the same value.
    pub fn with_value(value: T) -> Self
    where
        T: Clone,
    {
        Self::from_pair(value.clone(), value)
    }

    /// Get a reference to a side's data.
    #[must_use]
    pub fn get(&self, side: Side) -> &T {
        &self.data[side.index()]
    }

    /// Get a mutable reference to a side's data.
    pub fn get_mut(&mut self, side: Side) -> &mut T {
        &mut self.data[side.index()]
    }

    /// Iterate over (Side, &T) pairs in seat order.
    pub fn iter(&self) -> impl Iterator<Item = (Side, &T)> {
        Side::ALL.into_iter().zip(self.data.iter())
    }

    /// Build a new map by transforming each entry.
    pub fn map<U>(&self, mut f: impl FnMut(Side, &T) -> U) -> SideMap<U> {
        SideMap::new(|side| f(side, self.get(side)))
    }
}

impl<T: Default> Default for SideMap<T> {
    fn default() -> Self {
        Self::new(|_| T::default())
    }
}

impl<T> Index<Side> for SideMap<T> {
    type Output = T;

    fn index(&self, side: Side) -> &Self::Output {
        self.get(side)
    }
}

impl<T> IndexMut<Side> for SideMap<T> {
    fn index_mut(&mut self, side: Side) -> &mut Self::Output {
        self.get_mut(side)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_side_basics() {
        assert_eq!(Side::P1.opponent(), Side::P2);
        assert_eq!(Side::P2.opponent(), Side::P1);
        assert_eq!(Side::P1.index(), 0);
        assert_eq!(Side::P2.index(), 1);
        assert_eq!(format!("{}", Side::P2), "Player 2");
        assert_eq!(Side::P1.label(), "P1");
    }

    #[test]
    fn test_side_map_new() {
        let map: SideMap<usize> = SideMap::new(|s| s.index() * 10);
        assert_eq!(map[Side::P1], 0);
        assert_eq!(map[Side::P2], 10);
    }

    #[test]
    fn test_side_map_mutation() {
        let mut map = SideMap::with_value(0);
        map[Side::P1] = 3;
        *map.get_mut(Side::P2) += 4;

        assert_eq!(map, SideMap::from_pair(3, 4));
    }

    #[test]
    fn test_side_map_iter_and_map() {
        let map = SideMap::from_pair("a", "b");
        let pairs: Vec<_> = map.iter().collect();
        assert_eq!(pairs, vec![(Side::P1, &"a"), (Side::P2, &"b")]);

        let lens = map.map(|_, s| s.len());
        assert_eq!(lens, SideMap::from_pair(1, 1));
    }

    #[test]
    fn test_side_serialization() {
        assert_eq!(serde_json::to_string(&Side::P1).unwrap(), "\"p1\"");
        let map = SideMap::from_pair(100, 105);
        let json = serde_json::to_string(&map).unwrap();
        let back: SideMap<i32> = serde_json::from_str(&json).unwrap();
        assert_eq!(map, back);
    }
}
