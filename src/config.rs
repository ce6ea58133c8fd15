//! Mission-wide settings.

use glam::IVec2;
use serde::{Deserialize, Serialize};

use crate::error::{Result, RoverError};
use crate::grid::{Grid, Point};

/// Configuration applied when rovers are landed.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MissionConfig {
    /// Allow rovers to land on the `x = 0` / `y = 0` edges.
    ///
    /// Off by default: a landing position must satisfy `1 <= x <= width` and
    /// `1 <= y <= height`, even though driving can later reach the 0 edges.
    pub edge_landing: bool,
}

impl MissionConfig {
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets [`edge_landing`](Self::edge_landing) (builder pattern).
    #[must_use]
    pub fn with_edge_landing(mut self, edge_landing: bool) -> Self {
        self.edge_landing = edge_landing;
        self
    }

    /// Lowest coordinate a rover may land on.
    pub fn landing_min(&self) -> Point {
        if self.edge_landing {
            IVec2::ZERO
        } else {
            IVec2::ONE
        }
    }

    /// Returns `true` when a rover may start at `position` on `grid`.
    pub fn can_land(&self, grid: &Grid, position: Point) -> bool {
        position.cmpge(self.landing_min()).all() && position.cmple(grid.max()).all()
    }

    /// Like [`can_land`](Self::can_land), failing with
    /// [`RoverError::InvalidPosition`].
    pub fn check_landing(&self, grid: &Grid, position: Point) -> Result<()> {
        if self.can_land(grid, position) {
            Ok(())
        } else {
            Err(RoverError::InvalidPosition {
                position,
                max: grid.max(),
            })
        }
    }
}
