//! Side identification and per-side data storage.
//!
//! ## SideId
//!
//! A match always has exactly two sides: the `Player` and the `Enemy`.
//! Because the set is closed, a side reference can never be out of range.
//!
//! ## SideMap
//!
//! Fixed two-entry storage indexed by `SideId`, used wherever the engine
//! keeps one value per side (zones, dead-slot flags, deck recipes).

use serde::{Deserialize, Serialize};
use std::ops::{Index, IndexMut};

/// One of the two combatants.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum SideId {
    /// The side that acts first each round.
    Player,
    /// The side that acts second each round.
    Enemy,
}

impl SideId {
    /// Both sides in turn order.
    pub const ALL: [SideId; 2] = [SideId::Player, SideId::Enemy];

    /// Storage index (Player = 0, Enemy = 1).
    #[must_use]
    pub const fn index(self) -> usize {
        match self {
            SideId::Player => 0,
            SideId::Enemy => 1,
        }
    }

    /// The other side.
    #[must_use]
    pub const fn opponent(self) -> SideId {
        match self {
            SideId::Player => SideId::Enemy,
            SideId::Enemy => SideId::Player,
        }
    }

    /// Sign applied to this side's unopposed attacks on the scale.
    ///
    /// Player attacks pull the scale negative, enemy attacks pull it positive.
    #[must_use]
    pub const fn scale_sign(self) -> i32 {
        match self {
            SideId::Player => -1,
            SideId::Enemy => 1,
        }
    }
}

impl std::fmt::Display for SideId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SideId::Player => write!(f, "Player"),
            SideId::Enemy => write!(f, "Enemy"),
        }
    }
}

/// Per-side data storage with O(1) access.
///
/// ## Example
///
/// ```
/// use scale_duel::core::{SideId, SideMap};
///
/// let mut kills: SideMap<u32> = SideMap::with_value(0);
/// kills[SideId::Enemy] += 2;
///
/// assert_eq!(kills[SideId::Player], 0);
/// assert_eq!(kills[SideId::Enemy], 2);
/// ```
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SideMap<T> {
    data: [T; 2],
}

impl<T> SideMap<T> {
    /// Create a map from explicit player and enemy values.
    pub fn from_pair(player: T, enemy: T) -> Self {
        Self {
            data: [player, enemy],
        }
    }

    /// Create a map with values from a factory function.
    pub fn new(mut factory: impl FnMut(SideId) -> T) -> Self {
        let player = factory(SideId::Player);
        let enemy = factory(SideId::Enemy);
        Self::from_pair(player, enemy)
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
    pub fn get(&self, side: SideId) -> &T {
        &self.data[side.index()]
    }

    /// Get a mutable reference to a side's data.
    pub fn get_mut(&mut self, side: SideId) -> &mut T {
        &mut self.data[side.index()]
    }

    /// Borrow both entries mutably at once, player first.
    pub fn both_mut(&mut self) -> (&mut T, &mut T) {
        let [player, enemy] = &mut self.data;
        (player, enemy)
    }

    /// Iterate over (SideId, &T) pairs in turn order.
    pub fn iter(&self) -> impl Iterator<Item = (SideId, &T)> {
        SideId::ALL.into_iter().zip(self.data.iter())
    }

    /// Iterate over (SideId, &mut T) pairs in turn order.
    pub fn iter_mut(&mut self) -> impl Iterator<Item = (SideId, &mut T)> {
        SideId::ALL.into_iter().zip(self.data.iter_mut())
    }

    /// Transform each entry, keeping the side association.
    pub fn map<U>(self, mut f: impl FnMut(SideId, T) -> U) -> SideMap<U> {
        let [player, enemy] = self.data;
        SideMap::from_pair(f(SideId::Player, player), f(SideId::Enemy, enemy))
    }
}

impl<T> Index<SideId> for SideMap<T> {
    type Output = T;

    fn index(&self, side: SideId) -> &Self::Output {
        self.get(side)
    }
}

impl<T> IndexMut<SideId> for SideMap<T> {
    fn index_mut(&mut self, side: SideId) -> &mut Self::Output {
        self.get_mut(side)
    }
}
