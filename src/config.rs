/*
config.rs

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

//! Puzzle parameters.

use serde::{Deserialize, Serialize};

use crate::grid::PLACE_CONNECTOR_CHANCE;
use crate::layout::{H, W};

/// Smallest number of cells that a viewport dimension gives before adjustment.
const MIN_VIEWPORT_CELLS: usize = 3;

/// Parameters used to build a puzzle.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(default)]
pub struct PuzzleConfig {
    /// Number of columns.
    pub cols: usize,

    /// Number of rows.
    pub rows: usize,

    /// Whether the board is left-right symmetric. Needs an odd number of columns.
    pub mirror: bool,

    /// Whether the renderer draws the cell outlines and coordinates.
    pub debug: bool,

    /// Probability of placing a connector on an edge.
    pub probability: f64,

    /// Seed for the random generator. A random seed is used when not set.
    pub seed: Option<u64>,
}

impl Default for PuzzleConfig {
    fn default() -> Self {
        Self {
            cols: 8,
            rows: 5,
            mirror: false,
            debug: false,
            probability: PLACE_CONNECTOR_CHANCE,
            seed: None,
        }
    }
}

impl PuzzleConfig {
    /// Create a configuration that fills a viewport of the given size, in pixels.
    ///
    /// One column is added and one row removed compared to what fits, so that the board
    /// overflows horizontally and leaves room for a title vertically.
    pub fn from_viewport(width: u32, height: u32) -> Self {
        let cols: usize = (width as usize / W as usize).max(MIN_VIEWPORT_CELLS) + 1;
        let rows: usize = (height as usize / H as usize).max(MIN_VIEWPORT_CELLS) - 1;
        Self {
            cols,
            rows,
            ..Self::default()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn viewport_sizes() {
        let small: PuzzleConfig = PuzzleConfig::from_viewport(100, 100);
        assert_eq!((small.cols, small.rows), (4, 2));

        let large: PuzzleConfig = PuzzleConfig::from_viewport(1920, 1080);
        assert_eq!((large.cols, large.rows), (13, 6));
        assert_eq!(large.probability, PLACE_CONNECTOR_CHANCE);
    }

    #[test]
    fn missing_fields_use_defaults() {
        let config: PuzzleConfig = serde_json::from_str(r#"{"cols": 9, "mirror": true}"#).unwrap();
        assert_eq!(config.cols, 9);
        assert_eq!(config.rows, 5);
        assert!(config.mirror);
        assert_eq!(config.seed, None);
    }
}
