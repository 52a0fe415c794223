/*
shape.rs

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

//! Convert cells into drawable geometry.
//!
//! The module only reads the cell connectors, center, and group.
//! A cell with one connector is drawn as a line from the center to the edge, ending with a knob
//! at the center.
//! A cell with several connectors is drawn as a path of quadratic curves joining the middle of
//! the connected edges, with the cell center as control point.
//! With three connectors or more the path is closed.

use log::{Level, debug, log_enabled};

use crate::cell::Cell;
use crate::direction::Direction;
use crate::grid::Grid;
use crate::layout::{self, H, Point, Q, W};

pub const BACKGROUND_COLOR: &str = "Black";
pub const COMPLETED_COLOR: &str = "White";
pub const OUTLINE_COLOR: &str = "DarkGrey";

/// Colors of the connectivity groups. Groups beyond the list reuse the colors.
pub const GROUP_COLORS: [&str; 7] = [
    "DarkGreen",
    "ForestGreen",
    "MediumSeaGreen",
    "DarkSeaGreen",
    "OliveDrab",
    "Olive",
    "DarkOliveGreen",
];

/// Radius of the knob drawn at the center of a single-connector cell.
pub const KNOB_RADIUS: i32 = Q * 10 / 33;

/// Width of the connector lines.
pub const STROKE_WIDTH: i32 = Q / 10;

/// Geometry of a cell.
#[derive(Debug, Clone, PartialEq)]
pub enum Shape {
    /// No connectors.
    Empty,

    /// One connector: a line from `from` to `to`, and a knob centered on `from`.
    Stub {
        from: (f64, f64),
        to: (f64, f64),
        knob_radius: f64,
    },

    /// Several connectors: quadratic curves from `start` through each point of `points`, all
    /// using `control` as control point.
    Curve {
        start: (f64, f64),
        control: (f64, f64),
        points: Vec<(f64, f64)>,
        closed: bool,
    },
}

impl Shape {
    /// SVG path data for the lines and curves of the shape. The knob of a stub is not included.
    pub fn svg_path(&self) -> Option<String> {
        match self {
            Shape::Empty => None,
            Shape::Stub { from, to, .. } => Some(format!(
                "M{},{} L{},{}",
                from.0, from.1, to.0, to.1
            )),
            Shape::Curve {
                start,
                control,
                points,
                closed,
            } => {
                let end = if *closed { Some(start) } else { None };
                let curves: String = points
                    .iter()
                    .chain(end)
                    .map(|p| format!(" Q{},{} {},{}", control.0, control.1, p.0, p.1))
                    .collect();
                Some(format!("M{},{}{curves}", start.0, start.1))
            }
        }
    }
}

/// Middle of the cell edge in the given direction.
pub fn edge_point(center: Point, direction: Direction) -> (f64, f64) {
    let (cx, cy) = (f64::from(center.x), f64::from(center.y));
    let dx: f64 = f64::from(W) * 3.0 / 8.0;
    let dy: f64 = f64::from(H) / 4.0;
    match direction {
        Direction::N => (cx, cy - f64::from(H) / 2.0),
        Direction::NE => (cx + dx, cy - dy),
        Direction::SE => (cx + dx, cy + dy),
        Direction::S => (cx, cy + f64::from(H) / 2.0),
        Direction::SW => (cx - dx, cy + dy),
        Direction::NW => (cx - dx, cy - dy),
    }
}

/// Build the geometry of a cell from its current connectors.
pub fn cell_shape(cell: &Cell) -> Shape {
    let center: Point = cell.center;
    let mut edges = cell.mask().iter().map(|d| edge_point(center, d));

    let Some(start) = edges.next() else {
        return Shape::Empty;
    };
    let points: Vec<(f64, f64)> = edges.collect();
    let c: (f64, f64) = (f64::from(center.x), f64::from(center.y));
    if points.is_empty() {
        return Shape::Stub {
            from: c,
            to: start,
            knob_radius: f64::from(KNOB_RADIUS),
        };
    }
    let closed: bool = points.len() >= 2;
    Shape::Curve {
        start,
        control: c,
        points,
        closed,
    }
}

/// Color of a cell: the group color, or [`COMPLETED_COLOR`] once the puzzle is solved.
pub fn cell_color(cell: &Cell, complete: bool) -> &'static str {
    if complete {
        return COMPLETED_COLOR;
    }
    match cell.group() {
        Some(g) => GROUP_COLORS[g % GROUP_COLORS.len()],
        None => COMPLETED_COLOR,
    }
}

/// SVG path data of the cell hexagon.
pub fn outline_path(center: Point) -> String {
    let vertexes: Vec<String> = layout::outline(center)
        .iter()
        .map(|p| format!("{} {}", p.x, p.y))
        .collect();
    format!("M{} Z", vertexes.join(" L"))
}

/// Render the whole board as an SVG document.
///
/// With `debug`, the cell outlines and coordinates are drawn too.
pub fn svg_document(grid: &Grid, debug: bool) -> String {
    let (width, height) = layout::canvas_size(grid.cols(), grid.rows());
    let complete: bool = grid.is_complete();

    let mut svg: String = format!(
        r#"<svg xmlns="http://www.w3.org/2000/svg" width="{width}" height="{height}" stroke-width="{STROKE_WIDTH}" fill="none" style="background-color: {BACKGROUND_COLOR}">"#
    );
    svg.push('\n');

    for cell in grid.cells() {
        if debug {
            svg.push_str(&format!(
                "  <path d=\"{}\" stroke-width=\"1\" stroke=\"{OUTLINE_COLOR}\"/>\n",
                outline_path(cell.center)
            ));
            svg.push_str(&format!(
                "  <text x=\"{}\" y=\"{}\" stroke-width=\"1\" stroke=\"{OUTLINE_COLOR}\">{},{}</text>\n",
                cell.center.x, cell.center.y, cell.col, cell.row
            ));
        }

        let shape: Shape = cell_shape(cell);
        let Some(d) = shape.svg_path() else {
            continue;
        };
        let color: &str = cell_color(cell, complete);
        svg.push_str(&format!("  <g stroke=\"{color}\">\n    <path d=\"{d}\"/>\n"));
        if let Shape::Stub {
            from, knob_radius, ..
        } = shape
        {
            svg.push_str(&format!(
                "    <circle cx=\"{}\" cy=\"{}\" r=\"{knob_radius}\" fill=\"{BACKGROUND_COLOR}\"/>\n",
                from.0, from.1
            ));
        }
        svg.push_str("  </g>\n");
    }
    svg.push_str("</svg>\n");

    if log_enabled!(Level::Debug) {
        debug!("SVG document: {} bytes, {width}x{height}", svg.len());
    }
    svg
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::mask::Mask;

    fn cell_with(directions: &[Direction]) -> Cell {
        let mut c: Cell = Cell::new(0, 0);
        c.set_mask(directions.iter().copied().collect::<Mask>());
        c
    }

    #[test]
    fn empty_cell_draws_nothing() {
        assert_eq!(cell_shape(&Cell::new(2, 2)), Shape::Empty);
        assert_eq!(Shape::Empty.svg_path(), None);
    }

    #[test]
    fn single_connector_is_a_stub() {
        let shape: Shape = cell_shape(&cell_with(&[Direction::S]));
        assert_eq!(
            shape,
            Shape::Stub {
                from: (160.0, 138.0),
                to: (160.0, 207.0),
                knob_radius: 24.0,
            }
        );
        assert_eq!(shape.svg_path().unwrap(), "M160,138 L160,207");
    }

    #[test]
    fn two_connectors_make_an_open_curve() {
        let shape: Shape = cell_shape(&cell_with(&[Direction::N, Direction::SE]));
        assert_eq!(
            shape.svg_path().unwrap(),
            "M160,69 Q160,138 220,172.5"
        );
    }

    #[test]
    fn three_connectors_make_a_closed_curve() {
        let shape: Shape = cell_shape(&cell_with(&[Direction::N, Direction::S, Direction::NW]));
        assert_eq!(
            shape.svg_path().unwrap(),
            "M160,69 Q160,138 160,207 Q160,138 100,103.5 Q160,138 160,69"
        );
    }

    #[test]
    fn outline_is_closed() {
        assert_eq!(
            outline_path(Point::new(160, 138)),
            "M120 69 L200 69 L240 138 L200 207 L120 207 L80 138 Z"
        );
    }

    #[test]
    fn colors_follow_groups() {
        let mut c: Cell = cell_with(&[Direction::N]);
        c.group = Some(8);
        assert_eq!(cell_color(&c, false), "ForestGreen");
        assert_eq!(cell_color(&c, true), COMPLETED_COLOR);
    }

    #[test]
    fn document_contains_every_drawn_cell() {
        let mut grid: Grid = Grid::new(2, 1).unwrap();
        grid.link().unwrap();
        grid.cell_mut(0, 0).unwrap().set_mask(Mask::from(Direction::SE));
        let svg: String = svg_document(&grid, true);
        assert!(svg.starts_with("<svg "));
        assert!(svg.trim_end().ends_with("</svg>"));
        assert_eq!(svg.matches("<circle").count(), 1);
        assert_eq!(svg.matches("<text").count(), 2);
    }

    #[test]
    fn document_markup() {
        let mut grid: Grid = Grid::new(2, 1).unwrap();
        grid.link().unwrap();
        grid.cell_mut(0, 0).unwrap().set_mask(Mask::from(Direction::SE));
        assert_eq!(
            svg_document(&grid, false),
            concat!(
                r#"<svg xmlns="http://www.w3.org/2000/svg" width="480" height="276" stroke-width="8" fill="none" style="background-color: Black">"#,
                "\n",
                r#"  <g stroke="White">"#,
                "\n",
                r#"    <path d="M160,138 L220,172.5"/>"#,
                "\n",
                r#"    <circle cx="160" cy="138" r="24" fill="Black"/>"#,
                "\n",
                "  </g>\n",
                "</svg>\n",
            )
        );
    }
}
