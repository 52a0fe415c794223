/*
grid.rs

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

//! Board of hexagonal cells.
//!
//! A puzzle is built in four steps that must run in this order:
//!
//! 1. [`Grid::link`] connects every cell to its adjacent cells.
//! 2. [`Grid::place_connectors`] randomly places connectors on both sides of the edges, which
//!    produces a solved board. The connectors are saved as the original connectors of each cell.
//! 3. [`Grid::group_by_connectivity`] tags the clusters of connected cells.
//! 4. [`Grid::scramble`] rotates the cells randomly until the board is no longer solved.
//!
//! The player then calls [`Grid::rotate_cell_at`] until [`Grid::is_complete`] returns `true`.

use log::{Level, debug, info, log_enabled, warn};
use rand::Rng;
use serde::{Deserialize, Serialize};
use std::error::Error;
use std::fmt;

use crate::cell::Cell;
use crate::direction::Direction;
use crate::layout::{self, Point};
use crate::mask::Mask;

/// Probability of placing a connector on an edge.
/// Lower values produce many isolated pairs of stubs, higher values a crowded board.
pub const PLACE_CONNECTOR_CHANCE: f64 = 0.4;

/// Largest number of rotations applied to a cell in one scramble pass.
pub const MAX_SCRAMBLE_STEPS: usize = 4;

/// Number of scramble passes after which [`Grid::scramble`] gives up.
pub const MAX_SCRAMBLE_PASSES: usize = 10_000;

/// Type of errors.
#[derive(Debug, Clone, PartialEq)]
pub enum GridError {
    /// The grid has no columns or no rows.
    EmptyGrid,

    /// No cell at the given coordinates.
    CellNotFound { col: usize, row: usize },

    /// A grid operation that needs the adjacent cells ran before [`Grid::link`].
    NotLinked,

    /// The placement probability is not between 0 and 1.
    InvalidProbability(f64),

    /// Symmetric boards need a middle column.
    MirrorNeedsOddWidth { cols: usize },

    /// Every scramble pass produced a solved board.
    ScrambleExhausted { passes: usize },
}

impl fmt::Display for GridError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            GridError::EmptyGrid => write!(f, "the grid must have at least one column and one row"),
            GridError::CellNotFound { col, row } => write!(f, "no cell at column {col}, row {row}"),
            GridError::NotLinked => write!(f, "the grid cells are not linked"),
            GridError::InvalidProbability(p) => {
                write!(f, "placement probability {p} is not between 0 and 1")
            }
            GridError::MirrorNeedsOddWidth { cols } => {
                write!(f, "a symmetric board needs an odd number of columns (got {cols})")
            }
            GridError::ScrambleExhausted { passes } => {
                write!(f, "the board is still solved after {passes} scramble passes")
            }
        }
    }
}

impl Error for GridError {}

/// Result of a player rotation.
///
/// The rotation is already applied when this object is returned. A renderer can use it to animate
/// the cell from `before` to `after`.
#[derive(Serialize, Deserialize, Debug, Copy, Clone, PartialEq, Eq)]
pub struct Rotation {
    pub col: usize,
    pub row: usize,

    /// Connectors before the rotation.
    pub before: Mask,

    /// Connectors after the rotation.
    pub after: Mask,

    /// Whether the board is solved after the rotation.
    pub complete: bool,
}

/// Rotations applied by [`Grid::scramble`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ScrambleReport {
    /// Number of scramble passes over the whole grid.
    pub passes: usize,

    /// For each cell (in grid order), the net number of clockwise rotations, modulo 6.
    pub offsets: Vec<usize>,
}

impl ScrambleReport {
    fn new(num_cells: usize) -> Self {
        Self {
            passes: 0,
            offsets: vec![0; num_cells],
        }
    }

    /// Number of player rotations that cancel the scramble of the given cell.
    pub fn turns_to_undo(&self, index: usize) -> usize {
        self.offsets.get(index).map_or(0, |o| (6 - o) % 6)
    }
}

/// Board of cells.
#[derive(Serialize, Debug, Clone)]
pub struct Grid {
    cols: usize,
    rows: usize,

    /// Cells, row by row.
    cells: Vec<Cell>,

    /// Whether [`Grid::link`] ran.
    linked: bool,

    /// Number of groups found by the last [`Grid::group_by_connectivity`] call.
    num_groups: usize,
}

impl Grid {
    /// Create a grid of empty, unlinked cells.
    pub fn new(cols: usize, rows: usize) -> Result<Self, GridError> {
        if cols == 0 || rows == 0 {
            return Err(GridError::EmptyGrid);
        }
        let mut cells: Vec<Cell> = Vec::with_capacity(cols * rows);
        for row in 0..rows {
            for col in 0..cols {
                cells.push(Cell::new(col, row));
            }
        }
        debug!("New grid: {cols} columns, {rows} rows");
        Ok(Self {
            cols,
            rows,
            cells,
            linked: false,
            num_groups: 0,
        })
    }

    pub fn cols(&self) -> usize {
        self.cols
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    /// Cells, row by row.
    pub fn cells(&self) -> &[Cell] {
        &self.cells
    }

    /// Number of connectivity groups.
    pub fn group_count(&self) -> usize {
        self.num_groups
    }

    /// Position of the cell in [`Grid::cells`].
    pub fn index(&self, col: usize, row: usize) -> Result<usize, GridError> {
        if col < self.cols && row < self.rows {
            Ok(row * self.cols + col)
        } else {
            Err(GridError::CellNotFound { col, row })
        }
    }

    pub fn cell(&self, col: usize, row: usize) -> Result<&Cell, GridError> {
        let i: usize = self.index(col, row)?;
        Ok(&self.cells[i])
    }

    pub fn cell_mut(&mut self, col: usize, row: usize) -> Result<&mut Cell, GridError> {
        let i: usize = self.index(col, row)?;
        Ok(&mut self.cells[i])
    }

    /// Index of the cell centered on the given canvas point.
    fn index_at_center(&self, center: Point) -> Option<usize> {
        let (col, row) = layout::coordinates(center)?;
        self.index(col, row).ok()
    }

    /// Connect every cell to its adjacent cells, in both directions.
    ///
    /// The adjacent cells are found from their canvas position: for each cell, the method looks
    /// for the cells centered below it and on its right (north-east and south-east).
    ///
    /// # Errors
    ///
    /// The method returns an error if a cell center does not map back to the cell, which means
    /// that the grid is corrupted.
    pub fn link(&mut self) -> Result<(), GridError> {
        for i in 0..self.cells.len() {
            let (col, row, center) = (self.cells[i].col, self.cells[i].row, self.cells[i].center);
            if self.index_at_center(center) != Some(i) {
                return Err(GridError::CellNotFound { col, row });
            }

            for d in Direction::FORWARD {
                if let Some(j) = self.index_at_center(layout::neighbor_center(center, d)) {
                    self.cells[i].neighbors[d.index()] = Some(j);
                    self.cells[j].neighbors[d.opposite().index()] = Some(i);
                }
            }
        }
        self.linked = true;
        Ok(())
    }

    /// Randomly place connectors and save them as the original connectors of the cells.
    ///
    /// Each edge gets a connector on both of its sides with the given probability.
    /// When `mirror` is `true`, the right half of the board is replaced by the reflection of the
    /// left half, and the middle column is emptied.
    ///
    /// # Errors
    ///
    /// The method returns an error if the grid is not linked, if the probability is not between
    /// 0 and 1, or if a symmetric board is requested with an even number of columns.
    pub fn place_connectors<R: Rng + ?Sized>(
        &mut self,
        mirror: bool,
        probability: f64,
        rng: &mut R,
    ) -> Result<(), GridError> {
        if !self.linked {
            return Err(GridError::NotLinked);
        }
        if !(0.0..=1.0).contains(&probability) {
            return Err(GridError::InvalidProbability(probability));
        }
        if mirror && self.cols.is_multiple_of(2) {
            return Err(GridError::MirrorNeedsOddWidth { cols: self.cols });
        }

        for i in 0..self.cells.len() {
            self.place_random_connectors(i, probability, rng);
        }
        if mirror {
            self.mirror()?;
        }
        for c in &mut self.cells {
            c.original_mask = c.mask;
        }

        if log_enabled!(Level::Debug) {
            debug!("Connectors placed (probability = {probability}, mirror = {mirror}):");
            for line in self.to_string().lines() {
                debug!("{line}");
            }
        }
        Ok(())
    }

    /// Place connectors between the given cell and its neighbors below and on its right.
    ///
    /// The other three directions are set when the neighbor on that side is processed.
    fn place_random_connectors<R: Rng + ?Sized>(
        &mut self,
        index: usize,
        probability: f64,
        rng: &mut R,
    ) {
        for d in Direction::FORWARD {
            if let Some(j) = self.cells[index].neighbor(d)
                && rng.random_bool(probability)
            {
                self.cells[index].mask.insert(d);
                self.cells[j].mask.insert(d.opposite());
            }
        }
    }

    /// Copy the reflection of the left half of each row into its right half.
    fn mirror(&mut self) -> Result<(), GridError> {
        let half: usize = self.cols / 2;

        for row in 0..self.rows {
            for src_col in 0..half {
                let src: usize = self.index(src_col, row)?;
                let dst: usize = self.index(self.cols - 1 - src_col, row)?;
                self.cells[dst].mask = self.cells[src].mask.reflected();
            }

            // Empty the middle column, and remove the connectors that point to it so that the
            // board stays solved.
            let middle: usize = self.index(half, row)?;
            self.cells[middle].mask = Mask::EMPTY;
            if half > 0 {
                let left: usize = self.index(half - 1, row)?;
                self.cells[left].mask.remove(Direction::NE);
                self.cells[left].mask.remove(Direction::SE);
                let right: usize = self.index(half + 1, row)?;
                self.cells[right].mask.remove(Direction::NW);
                self.cells[right].mask.remove(Direction::SW);
            }
        }
        Ok(())
    }

    /// Tag every cluster of connected cells with a group number, and return the number of groups.
    ///
    /// From a cell, the fill follows every connector to the adjacent cell, whether or not that
    /// cell has the matching connector. Cells without connectors get no group.
    pub fn group_by_connectivity(&mut self) -> usize {
        for c in &mut self.cells {
            c.group = None;
        }

        let mut group: usize = 0;
        let mut stack: Vec<usize> = Vec::with_capacity(self.cells.len());
        for start in 0..self.cells.len() {
            if self.cells[start].mask.is_empty() || self.cells[start].group.is_some() {
                continue;
            }
            self.cells[start].group = Some(group);
            stack.push(start);

            while let Some(i) = stack.pop() {
                let cell: &Cell = &self.cells[i];
                let next: Vec<usize> = cell.mask.iter().filter_map(|d| cell.neighbor(d)).collect();
                for j in next {
                    let n: &mut Cell = &mut self.cells[j];
                    if !n.mask.is_empty() && n.group.is_none() {
                        n.group = Some(group);
                        stack.push(j);
                    }
                }
            }
            group += 1;
        }

        debug!("Connectivity groups: {group}");
        self.num_groups = group;
        group
    }

    /// Rotate every cell by a random number of steps until the board is not solved.
    ///
    /// The method does nothing if the board is already not solved, or if no cell can change by
    /// rotation (an empty board for example). In that last case the board stays solved.
    ///
    /// # Errors
    ///
    /// The method returns an error if the board is still solved after
    /// [`MAX_SCRAMBLE_PASSES`] passes.
    pub fn scramble<R: Rng + ?Sized>(&mut self, rng: &mut R) -> Result<ScrambleReport, GridError> {
        let mut report: ScrambleReport = ScrambleReport::new(self.cells.len());
        self.scramble_until_unsolved(rng, &mut report)?;
        Ok(report)
    }

    /// Jumble the board again: one unconditional pass, followed by [`Grid::scramble`] if the
    /// board is still solved.
    pub fn rescramble<R: Rng + ?Sized>(
        &mut self,
        rng: &mut R,
    ) -> Result<ScrambleReport, GridError> {
        let mut report: ScrambleReport = ScrambleReport::new(self.cells.len());
        self.scramble_pass(rng, &mut report);
        self.scramble_until_unsolved(rng, &mut report)?;
        Ok(report)
    }

    fn scramble_until_unsolved<R: Rng + ?Sized>(
        &mut self,
        rng: &mut R,
        report: &mut ScrambleReport,
    ) -> Result<(), GridError> {
        if !self.cells.iter().any(|c| c.mask.is_rotatable()) {
            if self.is_complete() {
                info!("No cell can be rotated: the board is already solved");
            }
            return Ok(());
        }

        while self.is_complete() {
            if report.passes >= MAX_SCRAMBLE_PASSES {
                warn!("Board still solved after {} scramble passes", report.passes);
                return Err(GridError::ScrambleExhausted {
                    passes: report.passes,
                });
            }
            self.scramble_pass(rng, report);
        }
        debug!("Board scrambled in {} pass(es)", report.passes);
        Ok(())
    }

    fn scramble_pass<R: Rng + ?Sized>(&mut self, rng: &mut R, report: &mut ScrambleReport) {
        for (i, c) in self.cells.iter_mut().enumerate() {
            let steps: usize = rng.random_range(0..=MAX_SCRAMBLE_STEPS);
            c.scramble(steps);
            report.offsets[i] = (report.offsets[i] + steps) % 6;
        }
        report.passes += 1;
    }

    /// Whether the puzzle is solved: every connector of every cell is matched.
    pub fn is_complete(&self) -> bool {
        self.cells.iter().all(|c| c.is_complete(&self.cells))
    }

    /// Rotate the cell under the given canvas position.
    ///
    /// Return [`None`] if the position is not on a cell.
    pub fn rotate_cell_at(&mut self, x: f64, y: f64) -> Option<Rotation> {
        let i: usize = self
            .cells
            .iter()
            .position(|c| layout::contains(c.center, x, y))?;
        Some(self.rotate_index(i))
    }

    /// Rotate the cell at the given grid coordinates.
    pub fn rotate_cell(&mut self, col: usize, row: usize) -> Result<Rotation, GridError> {
        let i: usize = self.index(col, row)?;
        Ok(self.rotate_index(i))
    }

    fn rotate_index(&mut self, i: usize) -> Rotation {
        let before: Mask = self.cells[i].mask;
        self.cells[i].rotate();
        let rotation: Rotation = Rotation {
            col: self.cells[i].col,
            row: self.cells[i].row,
            before,
            after: self.cells[i].mask,
            complete: self.is_complete(),
        };
        debug!(
            "Rotate cell {},{}: {} -> {} (complete = {})",
            rotation.col, rotation.row, rotation.before, rotation.after, rotation.complete
        );
        rotation
    }

    /// Put back the connectors that were placed when the puzzle was generated.
    pub fn reset_to_original(&mut self) {
        for c in &mut self.cells {
            c.mask = c.original_mask;
        }
    }

    /// Remove all the connectors. The original connectors are kept.
    pub fn reset_to_empty(&mut self) {
        for c in &mut self.cells {
            c.mask = Mask::EMPTY;
        }
    }
}

/// Print the connector masks in hexadecimal, with the odd columns on a separate line below the
/// even columns.
impl fmt::Display for Grid {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let mut s: String = String::new();
        for row in 0..self.rows {
            for parity in 0..2 {
                s.clear();
                for col in 0..self.cols {
                    if col % 2 == parity {
                        s.push_str(&format!("{:^4}", self.cells[row * self.cols + col].mask));
                    } else {
                        s.push_str("    ");
                    }
                }
                writeln!(f, "{}", s.trim_end())?;
            }
        }
        Ok(())
    }
}
