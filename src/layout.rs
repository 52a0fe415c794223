/*
layout.rs

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

//! Position of the cells on the canvas.
//!
//! The board uses the "odd-q" layout: flat-topped hexagons in columns, with the odd columns
//! shifted down by half a cell.
//!
//! ```text
//!  __    __
//! /00\__/20\
//! \__/10\__/
//! /01\__/21\
//! \__/11\__/
//!    \__/
//! ```
//!
//! All positions are integers so that the neighbor centers computed during linking map back
//! exactly to a grid coordinate.

use serde::{Deserialize, Serialize};

use crate::direction::Direction;

/// Radius of the circumscribed circle of a cell.
pub const Q: i32 = 80;

/// Cell width.
pub const W: i32 = 2 * Q;
pub const W75: i32 = W * 3 / 4;
pub const W50: i32 = W / 2;
pub const W25: i32 = W / 4;

/// Cell height, `floor(sqrt(3) * Q)`.
pub const H: i32 = 138;
pub const H50: i32 = H / 2;

/// Radius of the inscribed circle of a cell (`Q * cos(30°)`). Used for hit-testing.
pub const INNER_RADIUS: f64 = Q as f64 * 0.866_025_403_784_438_6_f64;

/// Position on the canvas.
#[derive(Serialize, Deserialize, Debug, Copy, Clone, Default, PartialEq, Eq, Hash)]
pub struct Point {
    pub x: i32,
    pub y: i32,
}

impl Point {
    pub fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// Return the point moved by the given offset.
    pub fn offset(self, dx: i32, dy: i32) -> Self {
        Self {
            x: self.x + dx,
            y: self.y + dy,
        }
    }
}

/// Center of the cell at the given grid coordinates.
pub fn center(col: usize, row: usize) -> Point {
    let x: i32 = W + col as i32 * W75;
    let mut y: i32 = H + row as i32 * H;
    if col % 2 == 1 {
        y += H50;
    }
    Point { x, y }
}

/// Grid coordinates of the cell centered on the given point.
///
/// Return [`None`] if the point is not exactly the center of a cell.
pub fn coordinates(center: Point) -> Option<(usize, usize)> {
    let dx: i32 = center.x - W;
    if dx < 0 || dx % W75 != 0 {
        return None;
    }
    let col: i32 = dx / W75;
    let mut dy: i32 = center.y - H;
    if col % 2 == 1 {
        dy -= H50;
    }
    if dy < 0 || dy % H != 0 {
        return None;
    }
    Some((col as usize, (dy / H) as usize))
}

/// Center of the adjacent cell in the given direction. The cell might not exist.
pub fn neighbor_center(center: Point, direction: Direction) -> Point {
    match direction {
        Direction::N => center.offset(0, -H),
        Direction::NE => center.offset(W75, -H50),
        Direction::SE => center.offset(W75, H50),
        Direction::S => center.offset(0, H),
        Direction::SW => center.offset(-W75, H50),
        Direction::NW => center.offset(-W75, -H50),
    }
}

/// Vertexes of the cell hexagon, clockwise from the top-left corner.
pub fn outline(center: Point) -> [Point; 6] {
    [
        center.offset(-W25, -H50),
        center.offset(W25, -H50),
        center.offset(W50, 0),
        center.offset(W25, H50),
        center.offset(-W25, H50),
        center.offset(-W50, 0),
    ]
}

/// Whether the given canvas position is inside the inscribed circle of the cell.
pub fn contains(center: Point, x: f64, y: f64) -> bool {
    let dx: f64 = x - f64::from(center.x);
    let dy: f64 = y - f64::from(center.y);
    dx * dx + dy * dy <= INNER_RADIUS * INNER_RADIUS
}

/// Size of the canvas needed to draw a board with the given dimensions.
pub fn canvas_size(cols: usize, rows: usize) -> (i32, i32) {
    ((cols as i32 + 1) * W, (rows as i32 + 1) * H)
}
