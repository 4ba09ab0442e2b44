//! Grid coordinates shared by the targeting core and its hosts.

use alloc::collections::BTreeSet;
use core::fmt;

use crate::ship::Orientation;

/// A cell on an N×N board. `x` grows east, `y` grows south.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub struct Coord {
    pub x: usize,
    pub y: usize,
}

/// Set of resolved cells (hits or misses).
pub type CellSet = BTreeSet<Coord>;

impl Coord {
    /// Create a coordinate.
    pub const fn new(x: usize, y: usize) -> Self {
        Self { x, y }
    }

    /// True when the coordinate lies on a square board of side `size`.
    pub const fn in_bounds(self, size: usize) -> bool {
        self.x < size && self.y < size
    }

    /// Cell `k` steps along `orientation` from this one.
    pub const fn step(self, orientation: Orientation, k: usize) -> Self {
        match orientation {
            Orientation::Horizontal => Coord::new(self.x + k, self.y),
            Orientation::Vertical => Coord::new(self.x, self.y + k),
        }
    }
}

impl fmt::Display for Coord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}
