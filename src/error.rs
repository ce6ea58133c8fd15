//! Error types for landing and driving rovers.
//!
//! Every failure is detected while the mission is being parsed or while a
//! rover is being landed. Executing commands never fails.

use std::path::PathBuf;

use crate::grid::Point;

/// Convenience alias used throughout the crate.
pub type Result<T> = std::result::Result<T, RoverError>;

/// Errors raised while building a plateau, landing a rover or reading a mission.
///
/// # Example
///
/// ```
/// use mars_rover::{Grid, RoverError};
///
/// let err = Grid::new(0, 5).unwrap_err();
/// assert!(matches!(err, RoverError::InvalidDimensions { .. }));
/// assert!(err.to_string().contains("not positive"));
/// ```
#[derive(Debug, thiserror::Error)]
#[non_exhaustive]
pub enum RoverError {
    /// Plateau width or height is below 1.
    #[error("plateau dimensions not positive numbers: {width} {height}")]
    InvalidDimensions {
        /// Requested width.
        width: i32,
        /// Requested height.
        height: i32,
    },

    /// The landing position lies outside the allowed range for the plateau.
    #[error("{}", describe_position(*position, *max))]
    InvalidPosition {
        /// Requested landing position.
        position: Point,
        /// Upper-right corner of the plateau.
        max: Point,
    },

    /// The heading code is not one of `N`, `E`, `S`, `W`.
    #[error("start direction not valid: {0}")]
    InvalidHeading(String),

    /// A command character is not one of `L`, `R`, `M`.
    #[error("move not valid: {symbol} in {commands}")]
    InvalidCommand {
        /// The offending character.
        symbol: char,
        /// The full command string it was found in.
        commands: String,
    },

    /// The mission text is structurally wrong.
    #[error("input format invalid, line {line}: {reason}")]
    MalformedInput {
        /// 1-based line number the problem was found on.
        line: usize,
        /// What is wrong with it.
        reason: String,
    },

    /// The mission file could not be read.
    #[error("cannot read input file {}: {source}", path.display())]
    Io {
        /// Path that was opened.
        path: PathBuf,
        /// Underlying I/O error.
        #[source]
        source: std::io::Error,
    },
}

impl RoverError {
    /// Creates a [`RoverError::MalformedInput`] for the given 1-based line.
    #[must_use]
    pub fn malformed(line: usize, reason: impl Into<String>) -> Self {
        Self::MalformedInput {
            line,
            reason: reason.into(),
        }
    }

    /// Returns `true` for errors caused by the content of the mission rather
    /// than by the filesystem.
    #[must_use]
    pub fn is_validation(&self) -> bool {
        !matches!(self, Self::Io { .. })
    }
}

fn describe_position(position: Point, max: Point) -> String {
    if position.cmpgt(max).any() {
        format!(
            "start position {} {} greater than plateau size {} {}",
            position.x, position.y, max.x, max.y
        )
    } else {
        format!(
            "start position not positive numbers: {} {}",
            position.x, position.y
        )
    }
}
