/*
lib.rs

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

//! Generate and check hexagonal loop puzzles.
//!
//! A puzzle is a [`grid::Grid`] of hexagonal [`cell::Cell`] objects.
//! Each cell has up to six connectors, one per edge, stored as a [`mask::Mask`].
//! The puzzle is solved when every connector is matched by a connector on the other side of the
//! edge.
//! The player solves the puzzle by rotating cells, one step at a time.
//!
//! * [`layout`] maps the grid coordinates to positions on the canvas.
//! * [`grid`] builds the puzzle: linking, random placement (optionally symmetric), grouping,
//!   and scrambling.
//! * [`session`] manages the puzzle being played and the level counter.
//! * [`shape`] converts the cells into drawable geometry and SVG.

pub mod cell;
pub mod config;
pub mod direction;
pub mod grid;
pub mod layout;
pub mod mask;
pub mod session;
pub mod shape;
