//! The plateau rovers land on.

use glam::IVec2;
use serde::{Deserialize, Serialize};

use crate::error::{Result, RoverError};

/// A cell coordinate on the plateau. `(0, 0)` is the lower-left corner.
pub type Point = IVec2;

/// An immutable rectangle anchored at the origin.
///
/// `width` and `height` are the largest valid coordinates, not cell counts:
/// valid cells are `0..=width` by `0..=height`, so a `Grid::new(5, 5)` plateau
/// is actually 6 cells wide.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Grid {
    max: IVec2,
}

impl Grid {
    /// Creates a plateau whose upper-right corner is `(width, height)`.
    ///
    /// Fails with [`RoverError::InvalidDimensions`] when either value is below 1.
    pub fn new(width: i32, height: i32) -> Result<Self> {
        if width < 1 || height < 1 {
            return Err(RoverError::InvalidDimensions { width, height });
        }
        Ok(Self {
            max: IVec2::new(width, height),
        })
    }

    /// Largest valid x coordinate.
    pub fn width(&self) -> i32 {
        self.max.x
    }

    /// Largest valid y coordinate.
    pub fn height(&self) -> i32 {
        self.max.y
    }

    /// Upper-right corner of the plateau.
    pub fn max(&self) -> Point {
        self.max
    }

    /// Returns `true` when `point` lies on the plateau, edges included.
    pub fn contains(&self, point: Point) -> bool {
        point.cmpge(IVec2::ZERO).all() && point.cmple(self.max).all()
    }
}
