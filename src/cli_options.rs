/*
cli_options.rs

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

//! Process command-line options.
//!
//! By default, Hexloop generates a scrambled puzzle and prints it.
//! With `--play`, it reads player commands from the standard input.
//!
//! # Examples
//!
//! Generate a symmetric 9x5 puzzle and print it as an SVG document:
//!
//! ```text
//! $ hexloop -x 9 -y 5 --mirror --format svg > puzzle.svg
//! ```
//!
//! Print the puzzle and its solution as JSON:
//!
//! ```text
//! $ hexloop --seed 42 --format json
//! ```

use clap::{Parser, ValueEnum};
use log::debug;
use serde::Serialize;
use std::env;
use std::io::{self, BufRead, Write};

use hexloop::config::PuzzleConfig;
use hexloop::grid::Grid;
use hexloop::layout::Point;
use hexloop::session::{Command, Session, SessionEvent};
use hexloop::shape;

const PLAY_HELP: &str = "\
Commands:
  <x> <y>        click at the given canvas position
  r <col> <row>  rotate the cell at the given grid coordinates
  b              remove all the connectors
  j              jumble the board
  u              restore the solution
  n              new puzzle
  q              quit";

/// Output format of the generated puzzle.
#[derive(Debug, Copy, Clone, PartialEq, Eq, ValueEnum)]
enum Format {
    Text,
    Json,
    Svg,
}

/// Generate and play hexagonal loop puzzles.
#[derive(Parser)]
#[command(about, long_about = None, version)]
struct Args {
    /// Number of columns (computed from the viewport width by default)
    #[arg(short = 'x', long)]
    cols: Option<usize>,

    /// Number of rows (computed from the viewport height by default)
    #[arg(short = 'y', long)]
    rows: Option<usize>,

    /// Viewport width in pixels
    #[arg(long, default_value_t = 1280)]
    width: u32,

    /// Viewport height in pixels
    #[arg(long, default_value_t = 800)]
    height: u32,

    /// Generate a left-right symmetric puzzle (needs an odd number of columns)
    #[arg(short, long, default_value_t = false)]
    mirror: bool,

    /// Seed for the random generator
    #[arg(short, long)]
    seed: Option<u64>,

    /// Output format
    #[arg(value_enum, short, long, default_value_t = Format::Text)]
    format: Format,

    /// Play the puzzle from the standard input
    #[arg(short, long, default_value_t = false)]
    play: bool,

    /// Enable debug messages, and cell outlines in SVG output
    #[arg(short, long, default_value_t = false)]
    debug: bool,
}

/// JSON representation of a puzzle.
#[derive(Serialize)]
struct PuzzleOutput<'a> {
    title: String,
    config: &'a PuzzleConfig,
    complete: bool,
    grid: &'a Grid,
}

/// Parse the command-line options and run. Return the process exit code.
pub fn run() -> u8 {
    let args: Args = Args::parse();

    if args.debug {
        unsafe {
            env::set_var("RUST_LOG", "debug");
        }
    }
    env_logger::init();

    let mut config: PuzzleConfig = PuzzleConfig::from_viewport(args.width, args.height);
    if let Some(cols) = args.cols {
        config.cols = cols;
    }
    if let Some(rows) = args.rows {
        config.rows = rows;
    }
    config.mirror = args.mirror;
    config.debug = args.debug;
    config.seed = args.seed;
    debug!("Configuration: {config:?}");

    let mut session: Session = match Session::new(config) {
        Ok(s) => s,
        Err(e) => {
            eprintln!("Error: {e}");
            return 1;
        }
    };

    if args.play {
        return match play(&mut session) {
            Ok(()) => 0,
            Err(e) => {
                eprintln!("Error: {e}");
                1
            }
        };
    }

    match print_puzzle(&session, args.format) {
        Ok(()) => 0,
        Err(e) => {
            eprintln!("Error: {e}");
            1
        }
    }
}

/// Print the puzzle in the requested format.
fn print_puzzle(session: &Session, format: Format) -> Result<(), Box<dyn std::error::Error>> {
    let grid: &Grid = session.grid();
    match format {
        Format::Text => {
            println!("{}", session.title());
            print!("{grid}");
            println!("complete: {}", grid.is_complete());
        }
        Format::Json => {
            let output: PuzzleOutput = PuzzleOutput {
                title: session.title(),
                config: session.config(),
                complete: grid.is_complete(),
                grid,
            };
            println!("{}", serde_json::to_string_pretty(&output)?);
        }
        Format::Svg => {
            print!("{}", shape::svg_document(grid, session.config().debug));
        }
    }
    Ok(())
}

/// Read player commands from the standard input until `q` or the end of the input.
fn play(session: &mut Session) -> Result<(), Box<dyn std::error::Error>> {
    println!("{PLAY_HELP}\n");
    println!("{}", session.title());
    print!("{}", session.grid());

    let stdin = io::stdin();
    let mut line: String = String::new();
    loop {
        print!("> ");
        io::stdout().flush()?;
        line.clear();
        if stdin.lock().read_line(&mut line)? == 0 {
            break;
        }

        let words: Vec<&str> = line.split_whitespace().collect();
        let event: Option<SessionEvent> = match words.as_slice() {
            [] => continue,
            ["q"] => break,
            ["b"] => {
                session.command(Command::Blank)?;
                None
            }
            ["j"] => {
                session.command(Command::Jumble)?;
                None
            }
            ["u"] => {
                session.command(Command::Restore)?;
                None
            }
            ["n"] => {
                session.restart()?;
                None
            }
            ["r", col, row] => {
                let center: Point = session.grid().cell(col.parse()?, row.parse()?)?.center;
                session.click(f64::from(center.x), f64::from(center.y))?
            }
            [x, y] => session.click(x.parse()?, y.parse()?)?,
            _ => {
                println!("{PLAY_HELP}");
                continue;
            }
        };

        match event {
            Some(SessionEvent::Solved { level, .. }) => {
                println!("Solved! Click anywhere for level {level}.")
            }
            Some(SessionEvent::Restarted { .. }) => println!("{}", session.title()),
            Some(SessionEvent::Rotated(_)) | None => (),
        }
        print!("{}", session.grid());
    }
    Ok(())
}
