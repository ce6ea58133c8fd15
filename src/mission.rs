//! Mission control: reads a mission description, lands every rover and
//! collects their final positions.
//!
//! # Input format
//!
//! ```text
//! <width> <height>
//! <x1> <y1> <heading1>
//! <commands1>
//! <x2> <y2> <heading2>
//! <commands2>
//! ...
//! ```
//!
//! A mission is all-or-nothing: the first invalid plateau or rover rejects
//! the whole mission before any rover moves.

use std::fmt;
use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};
use tracing::info;

use crate::config::MissionConfig;
use crate::error::{Result, RoverError};
use crate::grid::{Grid, Point};
use crate::navigation::Heading;
use crate::rover::Rover;

/// Landing instructions for one rover, as read from the mission input.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Deployment {
    pub position: Point,
    pub heading: Heading,
    /// Raw command string; validated when the rover is landed.
    pub commands: String,
}

impl Deployment {
    pub fn new(position: Point, heading: Heading, commands: impl Into<String>) -> Self {
        Self {
            position,
            heading,
            commands: commands.into(),
        }
    }
}

/// Final position and heading of one rover.
///
/// Displays as `x y H`, the mission output line format.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoverReport {
    pub x: i32,
    pub y: i32,
    pub heading: Heading,
}

impl RoverReport {
    pub fn position(&self) -> Point {
        Point::new(self.x, self.y)
    }
}

impl fmt::Display for RoverReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {} {}", self.x, self.y, self.heading)
    }
}

/// A validated plateau together with the rovers to land on it.
#[derive(Clone, Debug)]
pub struct Mission {
    grid: Grid,
    deployments: Vec<Deployment>,
    config: MissionConfig,
}

impl Mission {
    /// Builds a mission from already-parsed parts.
    ///
    /// Every deployment is landed once as a dry run, so an invalid rover is
    /// rejected here rather than when the mission runs.
    pub fn new(grid: Grid, deployments: Vec<Deployment>, config: MissionConfig) -> Result<Self> {
        let mission = Self {
            grid,
            deployments,
            config,
        };
        mission.land()?;
        Ok(mission)
    }

    /// Parses mission text with the default [`MissionConfig`].
    pub fn parse(input: &str) -> Result<Self> {
        Self::parse_with(input, MissionConfig::default())
    }

    /// Parses mission text.
    ///
    /// Trailing whitespace is stripped from every line and tokens beyond the
    /// required ones are ignored.
    ///
    /// # Errors
    ///
    /// [`RoverError::MalformedInput`] for structural problems (fewer than three
    /// lines, a rover without a command line, missing or non-numeric tokens),
    /// otherwise whatever [`Grid::new`], [`Heading`] parsing or
    /// [`Rover::with_config`] reports for the first offending entry.
    pub fn parse_with(input: &str, config: MissionConfig) -> Result<Self> {
        let lines: Vec<&str> = input.lines().map(str::trim_end).collect();
        if lines.len() < 3 {
            return Err(RoverError::malformed(
                lines.len() + 1,
                format!("input incomplete, expected at least 3 lines, found {}", lines.len()),
            ));
        }

        let size = Tokens::new(lines[0], 1);
        let grid = Grid::new(size.coord(0, "width")?, size.coord(1, "height")?)?;

        let mut deployments = Vec::with_capacity(lines.len() / 2);
        for i in (1..lines.len()).step_by(2) {
            let line_no = i + 1;
            let Some(commands) = lines.get(i + 1) else {
                return Err(RoverError::malformed(
                    line_no,
                    "input incomplete, rover has no command line",
                ));
            };
            let landing = Tokens::new(lines[i], line_no);
            let position = Point::new(landing.coord(0, "x")?, landing.coord(1, "y")?);
            let heading_code = landing.get(2, "heading")?;
            config.check_landing(&grid, position)?;
            let heading: Heading = heading_code.parse()?;

            // Land now so this rover's errors win over any later rover's.
            Rover::with_config(&grid, position, heading, commands, &config)?;
            deployments.push(Deployment::new(position, heading, *commands));
        }

        let mission = Self {
            grid,
            deployments,
            config,
        };
        info!(
            width = grid.width(),
            height = grid.height(),
            rovers = mission.deployments.len(),
            "mission parsed"
        );
        Ok(mission)
    }

    /// Reads and parses a mission file.
    pub fn from_path(path: impl AsRef<Path>, config: MissionConfig) -> Result<Self> {
        let path = path.as_ref();
        let input = fs::read_to_string(path).map_err(|source| RoverError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::parse_with(&input, config)
    }

    /// Lands every rover on the plateau, in input order.
    ///
    /// Fails on the first deployment that cannot be landed.
    pub fn land(&self) -> Result<Vec<Rover<'_>>> {
        self.deployments
            .iter()
            .map(|d| {
                Rover::with_config(&self.grid, d.position, d.heading, &d.commands, &self.config)
            })
            .collect()
    }

    /// Lands all rovers, drives each one through its commands and reports the
    /// final states in input order.
    ///
    /// Each run starts from freshly landed rovers, so running a mission twice
    /// gives the same reports.
    pub fn run(&self) -> Result<Vec<RoverReport>> {
        let mut rovers = self.land()?;
        let reports: Vec<RoverReport> = rovers
            .iter_mut()
            .map(|rover| {
                rover.apply_moves();
                rover.report()
            })
            .collect();
        info!(rovers = reports.len(), "mission complete");
        Ok(reports)
    }

    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    pub fn deployments(&self) -> &[Deployment] {
        &self.deployments
    }

    pub fn config(&self) -> &MissionConfig {
        &self.config
    }
}

/// Whitespace-separated tokens of one input line.
struct Tokens<'a> {
    line: &'a str,
    line_no: usize,
    tokens: Vec<&'a str>,
}

impl<'a> Tokens<'a> {
    fn new(line: &'a str, line_no: usize) -> Self {
        Self {
            line,
            line_no,
            tokens: line.split_whitespace().collect(),
        }
    }

    fn get(&self, idx: usize, what: &str) -> Result<&'a str> {
        self.tokens.get(idx).copied().ok_or_else(|| {
            RoverError::malformed(self.line_no, format!("missing {what} in '{}'", self.line))
        })
    }

    /// A non-negative integer made of ASCII digits only.
    fn coord(&self, idx: usize, what: &str) -> Result<i32> {
        let token = self.get(idx, what)?;
        let invalid = || {
            RoverError::malformed(
                self.line_no,
                format!("{what} '{token}' is not a non-negative integer in '{}'", self.line),
            )
        };
        if !token.bytes().all(|b| b.is_ascii_digit()) {
            return Err(invalid());
        }
        token.parse().map_err(|_| invalid())
    }
}
