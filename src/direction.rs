/*
direction.rs

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

//! Edges of a hexagonal cell.
//!
//! The cells are flat-topped: the six edges are north, north-east, south-east, south,
//! south-west, and north-west.
//! The declaration order is also the rotation order and the bit order in a
//! [`crate::mask::Mask`].

use serde::{Deserialize, Serialize};
use std::fmt;
use strum_macros::FromRepr;

/// Edge of a hexagonal cell.
#[derive(Serialize, Deserialize, Debug, Copy, Clone, PartialEq, Eq, Hash, FromRepr)]
#[repr(u8)]
pub enum Direction {
    N,
    NE,
    SE,
    S,
    SW,
    NW,
}

impl Direction {
    /// All the directions, in rotation order.
    pub const ALL: [Direction; 6] = [
        Direction::N,
        Direction::NE,
        Direction::SE,
        Direction::S,
        Direction::SW,
        Direction::NW,
    ];

    /// Directions that a cell links and places connectors toward.
    /// The three other directions are only ever set from the neighbor's side, so that each edge
    /// is processed once.
    pub const FORWARD: [Direction; 3] = [Direction::S, Direction::NE, Direction::SE];

    /// Position of the direction in the rotation order (also its bit position in a mask).
    pub fn index(self) -> usize {
        self as usize
    }

    /// Single-bit value of the direction.
    pub fn bit(self) -> u8 {
        1 << (self as u8)
    }

    /// Direction on the other side of the shared edge.
    pub fn opposite(self) -> Self {
        match self {
            Direction::N => Direction::S,
            Direction::NE => Direction::SW,
            Direction::SE => Direction::NW,
            Direction::S => Direction::N,
            Direction::SW => Direction::NE,
            Direction::NW => Direction::SE,
        }
    }

    /// Left-right reflection: north and south are fixed.
    pub fn reflection(self) -> Self {
        match self {
            Direction::N => Direction::N,
            Direction::NE => Direction::NW,
            Direction::SE => Direction::SW,
            Direction::S => Direction::S,
            Direction::SW => Direction::SE,
            Direction::NW => Direction::NE,
        }
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let s: &str = match self {
            Direction::N => "N",
            Direction::NE => "NE",
            Direction::SE => "SE",
            Direction::S => "S",
            Direction::SW => "SW",
            Direction::NW => "NW",
        };
        f.pad(s)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn opposite_is_an_involution() {
        for d in Direction::ALL {
            assert_eq!(d.opposite().opposite(), d);
            assert_ne!(d.opposite(), d);
        }
    }

    #[test]
    fn reflection_fixes_the_vertical_axis() {
        assert_eq!(Direction::N.reflection(), Direction::N);
        assert_eq!(Direction::S.reflection(), Direction::S);
        assert_eq!(Direction::NE.reflection(), Direction::NW);
        assert_eq!(Direction::SW.reflection(), Direction::SE);
        for d in Direction::ALL {
            assert_eq!(d.reflection().reflection(), d);
        }
    }

    #[test]
    fn repr_matches_rotation_order() {
        for (i, d) in Direction::ALL.iter().enumerate() {
            assert_eq!(Direction::from_repr(i as u8), Some(*d));
            assert_eq!(d.bit(), 1 << i);
        }
        assert_eq!(Direction::from_repr(6), None);
    }
}
