//! # mars-rover
//!
//! Lands rovers on a rectangular plateau and drives them with command strings.
//!
//! A mission is a [`Grid`] plus one [`Deployment`] per rover. Each rover is
//! landed with a start position, a [`Heading`] and a string of `L`/`R`/`M`
//! [`Command`]s, then executes them in order. Moves that would leave the
//! plateau are refused and the rover stays where it is.
//!
//! ```
//! use mars_rover::Mission;
//!
//! let mission = Mission::parse("5 5\n1 2 N\nLMLMLMLMM\n3 3 E\nMMRMMRMRRM\n").unwrap();
//! let lines: Vec<String> = mission.run().unwrap().iter().map(ToString::to_string).collect();
//! assert_eq!(lines, ["1 3 N", "5 1 E"]);
//! ```

pub mod config;
pub mod error;
pub mod grid;
pub mod mission;
pub mod navigation;
pub mod rover;

pub use config::*;
pub use error::*;
pub use grid::*;
pub use mission::*;
pub use navigation::*;
pub use rover::*;
