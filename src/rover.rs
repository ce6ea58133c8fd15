//! The rover state machine.
//!
//! A [`Rover`] is landed on a borrowed [`Grid`] with a start position, a
//! heading and a command string. All validation happens in the constructor;
//! [`Rover::apply_moves`] then walks the commands in order and cannot fail.

use tracing::debug;

use crate::config::MissionConfig;
use crate::error::Result;
use crate::grid::{Grid, Point};
use crate::mission::RoverReport;
use crate::navigation::{Command, Heading, RoverState};

/// A rover that has landed on a plateau.
#[derive(Clone, Debug)]
pub struct Rover<'g> {
    grid: &'g Grid,
    state: RoverState,
    commands: Vec<Command>,
}

impl<'g> Rover<'g> {
    /// Lands a rover using the default [`MissionConfig`].
    ///
    /// # Errors
    ///
    /// - [`RoverError::InvalidPosition`] when `position` is outside
    ///   `1..=width` by `1..=height`.
    /// - [`RoverError::InvalidCommand`] for the first character of `commands`
    ///   that is not `L`, `R` or `M`.
    ///
    /// Headings are validated when they are parsed (see
    /// [`Heading`]'s `FromStr`), which reports [`RoverError::InvalidHeading`].
    ///
    /// # Example
    ///
    /// ```
    /// use mars_rover::{Grid, Heading, Point, Rover};
    ///
    /// let grid = Grid::new(5, 5).unwrap();
    /// let mut rover = Rover::new(&grid, Point::new(1, 2), Heading::North, "LMLMLMLMM").unwrap();
    /// assert_eq!(rover.apply_moves(), Point::new(1, 3));
    /// assert_eq!(rover.heading(), Heading::North);
    /// ```
    pub fn new(grid: &'g Grid, position: Point, heading: Heading, commands: &str) -> Result<Self> {
        Self::with_config(grid, position, heading, commands, &MissionConfig::default())
    }

    /// Lands a rover, applying the landing rule from `config`.
    pub fn with_config(
        grid: &'g Grid,
        position: Point,
        heading: Heading,
        commands: &str,
        config: &MissionConfig,
    ) -> Result<Self> {
        config.check_landing(grid, position)?;
        let commands = Command::parse_sequence(commands)?;

        debug!(
            x = position.x,
            y = position.y,
            %heading,
            commands = commands.len(),
            "rover landed"
        );

        Ok(Self {
            grid,
            state: RoverState::new(position, heading),
            commands,
        })
    }

    /// Executes the command sequence and returns the final position.
    ///
    /// Commands run from the *current* state. Calling this a second time
    /// replays the same sequence on top of the first run rather than from
    /// the landing position; use [`RoverState::execute`] for a replay from a
    /// chosen snapshot.
    pub fn apply_moves(&mut self) -> Point {
        self.state = self.state.execute(self.grid, &self.commands);
        self.state.position
    }

    /// Overrides the current heading.
    ///
    /// This is an operator intervention between runs; it is never needed to
    /// execute a command sequence.
    pub fn set_heading(&mut self, heading: Heading) {
        self.state.heading = heading;
    }

    /// Current position and heading in mission output form.
    pub fn report(&self) -> RoverReport {
        RoverReport {
            x: self.state.position.x,
            y: self.state.position.y,
            heading: self.state.heading,
        }
    }

    pub fn grid(&self) -> &Grid {
        self.grid
    }

    pub fn position(&self) -> Point {
        self.state.position
    }

    pub fn heading(&self) -> Heading {
        self.state.heading
    }

    pub fn state(&self) -> RoverState {
        self.state
    }

    /// The command sequence the rover was landed with.
    pub fn commands(&self) -> &[Command] {
        &self.commands
    }
}
