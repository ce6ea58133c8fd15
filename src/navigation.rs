//! Headings, commands and the pure rover transition.

use std::fmt;
use std::str::FromStr;

use glam::IVec2;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::{Result, RoverError};
use crate::grid::{Grid, Point};

/// Compass direction a rover faces.
///
/// Variants are declared in clockwise order; the discriminant indexes the
/// lookup tables below.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Heading {
    #[serde(rename = "N")]
    North = 0,
    #[serde(rename = "E")]
    East = 1,
    #[serde(rename = "S")]
    South = 2,
    #[serde(rename = "W")]
    West = 3,
}

use Heading::{East, North, South, West};

/// `[left, right]` neighbour of each heading.
const TURNS: [[Heading; 2]; 4] = [
    [West, East],   // N
    [North, South], // E
    [East, West],   // S
    [South, North], // W
];

/// Unit step taken by a Move for each heading.
const STEPS: [IVec2; 4] = [IVec2::Y, IVec2::X, IVec2::NEG_Y, IVec2::NEG_X];

const CODES: [char; 4] = ['N', 'E', 'S', 'W'];

impl Heading {
    /// All headings in clockwise order, starting at North.
    pub const ALL: [Heading; 4] = [North, East, South, West];

    /// Heading after a 90 degree turn to the left.
    pub fn left(self) -> Self {
        TURNS[self as usize][0]
    }

    /// Heading after a 90 degree turn to the right.
    pub fn right(self) -> Self {
        TURNS[self as usize][1]
    }

    /// One-cell offset of a Move in this direction.
    pub fn step(self) -> IVec2 {
        STEPS[self as usize]
    }

    /// Single-letter code (`N`, `E`, `S` or `W`).
    pub fn code(self) -> char {
        CODES[self as usize]
    }

    /// Looks up a heading by its single-letter code.
    pub fn from_code(code: char) -> Option<Self> {
        CODES.iter().position(|&c| c == code).map(|i| Self::ALL[i])
    }
}

impl fmt::Display for Heading {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.code())
    }
}

impl FromStr for Heading {
    type Err = RoverError;

    fn from_str(s: &str) -> Result<Self> {
        let mut chars = s.chars();
        match (chars.next(), chars.next()) {
            (Some(c), None) => Self::from_code(c),
            _ => None,
        }
        .ok_or_else(|| RoverError::InvalidHeading(s.to_string()))
    }
}

impl TryFrom<char> for Heading {
    type Error = RoverError;

    fn try_from(code: char) -> Result<Self> {
        Self::from_code(code).ok_or_else(|| RoverError::InvalidHeading(code.to_string()))
    }
}

/// A single instruction from a rover's command string.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Command {
    /// Rotate 90 degrees counter-clockwise (`L`).
    #[serde(rename = "L")]
    TurnLeft,
    /// Rotate 90 degrees clockwise (`R`).
    #[serde(rename = "R")]
    TurnRight,
    /// Advance one cell in the current heading (`M`).
    #[serde(rename = "M")]
    Move,
}

impl Command {
    /// Single-letter code (`L`, `R` or `M`).
    pub fn code(self) -> char {
        match self {
            Command::TurnLeft => 'L',
            Command::TurnRight => 'R',
            Command::Move => 'M',
        }
    }

    /// Looks up a command by its single-letter code.
    pub fn from_code(code: char) -> Option<Self> {
        match code {
            'L' => Some(Command::TurnLeft),
            'R' => Some(Command::TurnRight),
            'M' => Some(Command::Move),
            _ => None,
        }
    }

    /// Parses a whole command string.
    ///
    /// The first character outside `L`, `R`, `M` rejects the entire string with
    /// [`RoverError::InvalidCommand`]. An empty string yields no commands.
    pub fn parse_sequence(commands: &str) -> Result<Vec<Self>> {
        commands
            .chars()
            .map(|symbol| {
                Self::from_code(symbol).ok_or_else(|| RoverError::InvalidCommand {
                    symbol,
                    commands: commands.to_string(),
                })
            })
            .collect()
    }
}

impl TryFrom<char> for Command {
    type Error = RoverError;

    fn try_from(symbol: char) -> Result<Self> {
        Self::from_code(symbol).ok_or_else(|| RoverError::InvalidCommand {
            symbol,
            commands: symbol.to_string(),
        })
    }
}

/// Parses exactly one command letter. Use [`Command::parse_sequence`] for a
/// whole command string; here any character after the first is rejected as
/// [`RoverError::InvalidCommand`] and an empty string as
/// [`RoverError::MalformedInput`].
impl FromStr for Command {
    type Err = RoverError;

    fn from_str(s: &str) -> Result<Self> {
        let mut chars = s.chars();
        match (chars.next(), chars.next()) {
            (Some(symbol), None) => Self::try_from(symbol),
            (Some(_), Some(symbol)) => Err(RoverError::InvalidCommand {
                symbol,
                commands: s.to_string(),
            }),
            (None, _) => Err(RoverError::malformed(1, "empty command")),
        }
    }
}

impl fmt::Display for Command {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.code())
    }
}

/// Position and heading of a rover at one instant.
///
/// Transitions on this type are pure: they return a new state and leave the
/// receiver untouched, so a command sequence can be replayed from any
/// snapshot.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoverState {
    /// Current cell.
    pub position: Point,
    /// Current facing.
    pub heading: Heading,
}

impl RoverState {
    pub fn new(position: Point, heading: Heading) -> Self {
        Self { position, heading }
    }

    /// Applies one command.
    ///
    /// Turns only change the heading. A Move that would leave `grid`, or
    /// overflow `i32`, is refused and the position stays where it is.
    pub fn step(self, grid: &Grid, command: Command) -> Self {
        match command {
            Command::TurnLeft => Self {
                heading: self.heading.left(),
                ..self
            },
            Command::TurnRight => Self {
                heading: self.heading.right(),
                ..self
            },
            Command::Move => {
                let step = self.heading.step();
                let candidate = self
                    .position
                    .x
                    .checked_add(step.x)
                    .zip(self.position.y.checked_add(step.y))
                    .map(|(x, y)| Point::new(x, y))
                    .filter(|&candidate| grid.contains(candidate));
                if let Some(position) = candidate {
                    Self { position, ..self }
                } else {
                    debug!(
                        x = self.position.x,
                        y = self.position.y,
                        heading = %self.heading,
                        "move refused at plateau edge"
                    );
                    self
                }
            }
        }
    }

    /// Folds a whole command sequence over this state.
    pub fn execute(self, grid: &Grid, commands: &[Command]) -> Self {
        commands
            .iter()
            .fold(self, |state, &command| state.step(grid, command))
    }
}
