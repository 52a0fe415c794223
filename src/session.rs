/*
session.rs

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

//! Manage the puzzle being played.
//!
//! A [`Session`] owns the configuration, the random generator, and the current [`Grid`].
//! It counts the solved puzzles (the level) and builds a new puzzle when the player clicks on a
//! solved board.

use log::{debug, info};
use rand::SeedableRng;
use rand::rngs::StdRng;
use serde::{Deserialize, Serialize};

use crate::config::PuzzleConfig;
use crate::grid::{Grid, GridError, Rotation, ScrambleReport};

/// Utility commands, usually bound to keys.
#[derive(Serialize, Deserialize, Debug, Copy, Clone, PartialEq, Eq)]
pub enum Command {
    /// Remove all the connectors.
    Blank,

    /// Jumble the board again.
    Jumble,

    /// Put back the connectors of the solution.
    Restore,
}

/// What happened after a player click.
#[derive(Debug, Clone, PartialEq)]
pub enum SessionEvent {
    /// A cell was rotated, the board is not solved.
    Rotated(Rotation),

    /// A cell was rotated and the board is now solved.
    Solved { rotation: Rotation, level: usize },

    /// The board was already solved, a new puzzle replaced it.
    Restarted { level: usize },
}

/// Puzzle in progress.
#[derive(Debug)]
pub struct Session {
    config: PuzzleConfig,

    rng: StdRng,

    grid: Grid,

    /// Rotations applied by the last scramble.
    scramble: ScrambleReport,

    /// Level of the current puzzle, starting at 1. Incremented every time a puzzle is solved.
    level: usize,
}

impl Session {
    /// Create a session and its first puzzle.
    pub fn new(config: PuzzleConfig) -> Result<Self, GridError> {
        let mut rng: StdRng = match config.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_os_rng(),
        };
        let (grid, scramble) = Self::build(&config, &mut rng)?;
        Ok(Self {
            config,
            rng,
            grid,
            scramble,
            level: 1,
        })
    }

    /// Run the puzzle setup sequence: link, place, group, and scramble.
    fn build(config: &PuzzleConfig, rng: &mut StdRng) -> Result<(Grid, ScrambleReport), GridError> {
        let mut grid: Grid = Grid::new(config.cols, config.rows)?;
        grid.link()?;
        grid.place_connectors(config.mirror, config.probability, rng)?;
        grid.group_by_connectivity();
        let scramble: ScrambleReport = grid.scramble(rng)?;
        debug!(
            "Puzzle {}x{} built: {} group(s), {} scramble pass(es)",
            config.cols,
            config.rows,
            grid.group_count(),
            scramble.passes
        );
        Ok((grid, scramble))
    }

    pub fn config(&self) -> &PuzzleConfig {
        &self.config
    }

    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    pub fn level(&self) -> usize {
        self.level
    }

    /// Rotations applied by the last scramble, or jumble command.
    pub fn scramble_report(&self) -> &ScrambleReport {
        &self.scramble
    }

    /// Title of the puzzle, for the window or page.
    pub fn title(&self) -> String {
        format!("Loop 6 Level {}", self.level)
    }

    /// Replace the puzzle by a new one with the same configuration.
    pub fn restart(&mut self) -> Result<(), GridError> {
        let (grid, scramble) = Self::build(&self.config, &mut self.rng)?;
        self.grid = grid;
        self.scramble = scramble;
        Ok(())
    }

    /// Process a player click at the given canvas position.
    ///
    /// Return [`None`] when the click is not on a cell.
    pub fn click(&mut self, x: f64, y: f64) -> Result<Option<SessionEvent>, GridError> {
        if self.grid.is_complete() {
            self.restart()?;
            info!("New puzzle at level {}", self.level);
            return Ok(Some(SessionEvent::Restarted { level: self.level }));
        }

        match self.grid.rotate_cell_at(x, y) {
            None => Ok(None),
            Some(rotation) => {
                if rotation.complete {
                    self.level += 1;
                    info!("Puzzle solved, next level {}", self.level);
                    Ok(Some(SessionEvent::Solved {
                        rotation,
                        level: self.level,
                    }))
                } else {
                    Ok(Some(SessionEvent::Rotated(rotation)))
                }
            }
        }
    }

    /// Run a utility command.
    pub fn command(&mut self, command: Command) -> Result<(), GridError> {
        debug!("Command {command:?}");
        match command {
            Command::Blank => self.grid.reset_to_empty(),
            Command::Jumble => self.scramble = self.grid.rescramble(&mut self.rng)?,
            Command::Restore => self.grid.reset_to_original(),
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::layout::Point;

    fn config(seed: u64) -> PuzzleConfig {
        PuzzleConfig {
            cols: 5,
            rows: 4,
            probability: 1.0,
            seed: Some(seed),
            ..PuzzleConfig::default()
        }
    }

    #[test]
    fn new_session_is_scrambled() {
        let session: Session = Session::new(config(1)).unwrap();
        assert!(!session.grid().is_complete());
        assert_eq!(session.level(), 1);
        assert_eq!(session.title(), "Loop 6 Level 1");
        assert!(session.grid().group_count() >= 1);
        assert!(session.scramble_report().passes >= 1);
    }

    #[test]
    fn same_seed_same_puzzle() {
        let a: Session = Session::new(config(42)).unwrap();
        let b: Session = Session::new(config(42)).unwrap();
        assert_eq!(a.grid().to_string(), b.grid().to_string());
    }

    #[test]
    fn click_outside_the_board_does_nothing() {
        let mut session: Session = Session::new(config(3)).unwrap();
        assert_eq!(session.click(-500.0, -500.0).unwrap(), None);
    }

    #[test]
    fn solving_advances_the_level_and_next_click_restarts() {
        let mut session: Session = Session::new(config(4)).unwrap();
        let targets: Vec<(Point, usize)> = session
            .grid()
            .cells()
            .iter()
            .filter_map(|c| c.turns_to_original().map(|t| (c.center, t)))
            .collect();

        let mut last: Option<SessionEvent> = None;
        for (center, turns) in targets {
            for _ in 0..turns {
                last = session
                    .click(f64::from(center.x), f64::from(center.y))
                    .unwrap();
            }
        }
        assert!(session.grid().is_complete());
        match last {
            Some(SessionEvent::Solved { level, .. }) => assert_eq!(level, 2),
            other => panic!("unexpected event {other:?}"),
        }

        let event: Option<SessionEvent> = session.click(0.0, 0.0).unwrap();
        assert_eq!(event, Some(SessionEvent::Restarted { level: 2 }));
        assert!(!session.grid().is_complete());
    }

    #[test]
    fn commands() {
        let mut session: Session = Session::new(config(5)).unwrap();
        session.command(Command::Restore).unwrap();
        assert!(session.grid().is_complete());
        session.command(Command::Jumble).unwrap();
        assert!(!session.grid().is_complete());
        session.command(Command::Blank).unwrap();
        assert!(session.grid().cells().iter().all(|c| c.mask().is_empty()));
    }

    #[test]
    fn invalid_configuration_is_reported() {
        let even_mirror: PuzzleConfig = PuzzleConfig {
            cols: 6,
            mirror: true,
            ..config(6)
        };
        assert_eq!(
            Session::new(even_mirror).unwrap_err(),
            GridError::MirrorNeedsOddWidth { cols: 6 }
        );
    }
}
