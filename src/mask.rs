/*
mask.rs

Copyright 2025 Hervé Quatremain

This file is part of Hexloop.

Hexloop is free software: you can redistribute it and/or modify it under the
terms of the GNU General Public License as published by the Free Software
Foundation, either version 3 of the License, or (at your option) any later
version.

Hexloop is distributed in the hope that it will be useful, but WITHOUT ANY
WARRANTY; without even the implied warranty of MERCHANTABILITY or FITNESS FOR
A PARTICULAR PURPOSE. See the GNU General Public License for more details.

You should have received a copy of the GNU General Public License along with
Hexloop. If not, see <https://www.gnu.org/licenses/>.

SPDX-License-Identifier: GPL-3.0-or-later
*/

//! Set of active connectors of a cell, stored as six bits.
//!
//! Bit `i` is the direction at position `i` in [`Direction::ALL`].
//! Rotation moves every connector one edge clockwise, which is a left shift with the north-west
//! bit wrapping around to north.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::direction::Direction;

/// All six bits set.
pub const FULL: u8 = 0b111111;

/// Connector set.
#[derive(Serialize, Deserialize, Debug, Copy, Clone, Default, PartialEq, Eq, Hash)]
#[serde(try_from = "u8", into = "u8")]
pub struct Mask(u8);

/// Error returned when building a mask from a value with a bit above the sixth one.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct InvalidMask(pub u8);

impl fmt::Display for InvalidMask {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "invalid connector mask {}: bits above the sixth one are set", self.0)
    }
}

impl std::error::Error for InvalidMask {}

impl Mask {
    /// Mask with no connectors.
    pub const EMPTY: Mask = Mask(0);

    /// Build a mask from its bits. Return [`None`] if a bit above the sixth one is set.
    pub fn from_bits(bits: u8) -> Option<Self> {
        if bits & !FULL == 0 {
            Some(Self(bits))
        } else {
            None
        }
    }

    /// Build a mask from its bits, ignoring the bits above the sixth one.
    pub fn from_bits_truncate(bits: u8) -> Self {
        Self(bits & FULL)
    }

    /// Raw value, in `0..=63`.
    pub fn bits(self) -> u8 {
        self.0
    }

    pub fn is_empty(self) -> bool {
        self.0 == 0
    }

    /// Whether the mask has all six connectors.
    pub fn is_full(self) -> bool {
        self.0 == FULL
    }

    /// Whether rotating the mask can change it. Only the empty and full masks cannot.
    pub fn is_rotatable(self) -> bool {
        !self.is_empty() && !self.is_full()
    }

    pub fn contains(self, direction: Direction) -> bool {
        self.0 & direction.bit() != 0
    }

    pub fn insert(&mut self, direction: Direction) {
        self.0 |= direction.bit();
    }

    pub fn remove(&mut self, direction: Direction) {
        self.0 &= !direction.bit();
    }

    /// Number of active connectors.
    pub fn count(self) -> u32 {
        self.0.count_ones()
    }

    /// Rotate every connector one step clockwise (north goes to north-east).
    pub fn rotate(&mut self) {
        self.0 = ((self.0 << 1) & FULL) | (self.0 >> 5);
    }

    /// Undo [`Mask::rotate`].
    pub fn rotate_back(&mut self) {
        self.0 = (self.0 >> 1) | ((self.0 & 1) << 5);
    }

    /// Return a copy rotated `steps` times clockwise.
    pub fn rotated(self, steps: usize) -> Self {
        let mut m: Mask = self;
        for _ in 0..steps % 6 {
            m.rotate();
        }
        m
    }

    /// Return a copy with every connector replaced by its left-right reflection.
    pub fn reflected(self) -> Self {
        let mut m: Mask = Mask::EMPTY;
        for d in self.iter() {
            m.insert(d.reflection());
        }
        m
    }

    /// Smallest number of clockwise rotations that turns this mask into `target`, or [`None`]
    /// if no rotation does.
    pub fn turns_to(self, target: Mask) -> Option<usize> {
        (0..6).find(|steps| self.rotated(*steps) == target)
    }

    /// Iterate over the active connectors, in rotation order.
    pub fn iter(self) -> impl Iterator<Item = Direction> {
        (0..6u8)
            .filter_map(Direction::from_repr)
            .filter(move |d| self.contains(*d))
    }
}

impl TryFrom<u8> for Mask {
    type Error = InvalidMask;

    fn try_from(bits: u8) -> Result<Self, Self::Error> {
        Mask::from_bits(bits).ok_or(InvalidMask(bits))
    }
}

impl From<Mask> for u8 {
    fn from(mask: Mask) -> Self {
        mask.0
    }
}

impl From<Direction> for Mask {
    fn from(direction: Direction) -> Self {
        Self(direction.bit())
    }
}

impl FromIterator<Direction> for Mask {
    fn from_iter<I: IntoIterator<Item = Direction>>(iter: I) -> Self {
        let mut m: Mask = Mask::EMPTY;
        for d in iter {
            m.insert(d);
        }
        m
    }
}

impl fmt::Display for Mask {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.pad(&format!("{:02x}", self.0))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rotation_has_order_six() {
        for bits in 0..=FULL {
            let m: Mask = Mask::from_bits_truncate(bits);
            assert_eq!(m.rotated(6), m);
            for k in 0..6 {
                assert_eq!(m.rotated(k).rotated(6 - k), m);
            }
        }
    }

    #[test]
    fn rotation_wraps_north_west_to_north() {
        let mut m: Mask = [Direction::N, Direction::NW].into_iter().collect();
        m.rotate();
        assert_eq!(m, [Direction::N, Direction::NE].into_iter().collect());
        m.rotate_back();
        assert_eq!(m, [Direction::N, Direction::NW].into_iter().collect());
    }

    #[test]
    fn reflection_is_an_involution() {
        for bits in 0..=FULL {
            let m: Mask = Mask::from_bits_truncate(bits);
            assert_eq!(m.reflected().reflected(), m);
            assert_eq!(m.reflected().count(), m.count());
        }
        assert_eq!(
            Mask::from(Direction::SE).reflected(),
            Mask::from(Direction::SW)
        );
    }

    #[test]
    fn bits_above_six_are_rejected() {
        assert_eq!(Mask::from_bits(64), None);
        assert_eq!(Mask::from_bits(63).map(Mask::bits), Some(63));
        assert_eq!(Mask::from_bits_truncate(0xff).bits(), FULL);
        assert_eq!(Mask::try_from(64u8), Err(InvalidMask(64)));
    }

    #[test]
    fn deserialization_checks_the_bits() {
        assert!(serde_json::from_str::<Mask>("64").is_err());
        assert!(serde_json::from_str::<Mask>("255").is_err());
        let m: Mask = serde_json::from_str("63").unwrap();
        assert_eq!(m.bits(), FULL);
        assert_eq!(serde_json::to_string(&m).unwrap(), "63");
    }

    #[test]
    fn only_empty_and_full_masks_ignore_rotation() {
        for bits in 0..=FULL {
            let m: Mask = Mask::from_bits_truncate(bits);
            assert_eq!(m.is_rotatable(), m.rotated(1) != m, "mask {m}");
        }
    }

    #[test]
    fn turns_to_finds_the_inverse() {
        let m: Mask = [Direction::N, Direction::SE].into_iter().collect();
        assert_eq!(m.rotated(2).turns_to(m), Some(4));
        assert_eq!(m.turns_to(m), Some(0));
        assert_eq!(m.turns_to(Mask::from(Direction::S)), None);
        assert!(!Mask::EMPTY.is_rotatable());
        assert!(!Mask::from_bits_truncate(FULL).is_rotatable());
        assert!(m.is_rotatable());
    }
}
