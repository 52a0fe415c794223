/*
cell.rs

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

//! Puzzle cell.
//!
//! A cell does not own its neighbors. It stores, for each direction, the index of the adjacent
//! cell in the [`crate::grid::Grid`] cell list.

use serde::Serialize;

use crate::direction::Direction;
use crate::layout::{self, Point};
use crate::mask::Mask;

/// Cell of the board.
#[derive(Serialize, Debug, Clone)]
pub struct Cell {
    /// Column in the grid.
    pub col: usize,

    /// Row in the grid.
    pub row: usize,

    /// Center of the cell on the canvas.
    pub center: Point,

    /// Current connectors, as rotated by the player.
    pub(crate) mask: Mask,

    /// Connectors as placed when the puzzle was generated.
    pub(crate) original_mask: Mask,

    /// Index of the adjacent cell in each direction, [`None`] on the board edge.
    pub(crate) neighbors: [Option<usize>; 6],

    /// Connectivity group, [`None`] until the grid is grouped or when the cell has no connectors.
    pub(crate) group: Option<usize>,
}

impl Cell {
    /// Create an empty, unlinked cell.
    pub fn new(col: usize, row: usize) -> Self {
        Self {
            col,
            row,
            center: layout::center(col, row),
            mask: Mask::EMPTY,
            original_mask: Mask::EMPTY,
            neighbors: [None; 6],
            group: None,
        }
    }

    pub fn mask(&self) -> Mask {
        self.mask
    }

    /// Replace the connectors. The original connectors are left untouched.
    pub fn set_mask(&mut self, mask: Mask) {
        self.mask = mask;
    }

    pub fn original_mask(&self) -> Mask {
        self.original_mask
    }

    pub fn group(&self) -> Option<usize> {
        self.group
    }

    /// Index of the adjacent cell in the given direction.
    pub fn neighbor(&self, direction: Direction) -> Option<usize> {
        self.neighbors[direction.index()]
    }

    /// Number of active connectors. One connector is drawn as a stub, two or more as a curve.
    pub fn count(&self) -> u32 {
        self.mask.count()
    }

    /// Rotate the connectors one step clockwise. This is the player action.
    pub fn rotate(&mut self) {
        self.mask.rotate();
    }

    /// Mirror the connectors left to right.
    pub fn reflect(&mut self) {
        self.mask = self.mask.reflected();
    }

    /// Rotate the connectors `steps` times. Used when jumbling the board.
    pub fn scramble(&mut self, steps: usize) {
        self.mask = self.mask.rotated(steps);
    }

    /// Whether every connector of the cell is matched by the adjacent cell.
    ///
    /// `cells` is the cell list of the grid the cell belongs to.
    pub fn is_complete(&self, cells: &[Cell]) -> bool {
        for d in self.mask.iter() {
            match self.neighbor(d).and_then(|i| cells.get(i)) {
                Some(n) => {
                    if !n.mask.contains(d.opposite()) {
                        return false;
                    }
                }
                None => return false,
            }
        }
        true
    }

    /// Number of rotations that bring the cell back to its original connectors.
    pub fn turns_to_original(&self) -> Option<usize> {
        self.mask.turns_to(self.original_mask)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_cell_is_empty_and_unlinked() {
        let c: Cell = Cell::new(1, 2);
        assert!(c.mask().is_empty());
        assert_eq!(c.center, layout::center(1, 2));
        assert!(Direction::ALL.iter().all(|d| c.neighbor(*d).is_none()));
        assert_eq!(c.group(), None);
        // An empty cell is complete, even without neighbors.
        assert!(c.is_complete(&[]));
    }

    #[test]
    fn connector_toward_the_edge_is_incomplete() {
        let mut c: Cell = Cell::new(0, 0);
        c.set_mask(Mask::from(Direction::N));
        assert!(!c.is_complete(&[]));
    }

    #[test]
    fn scramble_then_turns_to_original() {
        let mut c: Cell = Cell::new(0, 0);
        c.mask = [Direction::N, Direction::S, Direction::SE].into_iter().collect();
        c.original_mask = c.mask;
        c.scramble(4);
        assert_eq!(c.turns_to_original(), Some(2));
        c.rotate();
        c.rotate();
        assert_eq!(c.mask(), c.original_mask());
        c.reflect();
        assert_eq!(
            c.mask(),
            [Direction::N, Direction::S, Direction::SW].into_iter().collect()
        );
    }
}
