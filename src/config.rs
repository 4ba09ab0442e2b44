//! Engine configuration and the standard fleet.

use alloc::collections::BTreeMap;
use alloc::string::{String, ToString};
use core::time::Duration;

use crate::ship::ShipType;

/// Remaining-ships view: ship identifier to unsunk length. Supplied
/// fresh by the caller on every move request.
pub type Fleet = BTreeMap<String, usize>;

/// The standard five-ship fleet.
pub const DEFAULT_FLEET: [ShipType; 5] = [
    ShipType::new("Carrier", 5),
    ShipType::new("Battleship", 4),
    ShipType::new("Cruiser", 3),
    ShipType::new("Submarine", 3),
    ShipType::new("Destroyer", 2),
];

/// Default think-time budget for one heatmap search.
pub const DEFAULT_TIME_ALLOWED: Duration = Duration::from_secs(5);

/// Build the standard fleet as a remaining-ships mapping.
pub fn default_fleet() -> Fleet {
    DEFAULT_FLEET
        .iter()
        .map(|ship| (ship.name().to_string(), ship.length()))
        .collect()
}

/// Construction parameters for a targeting engine.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct EngineConfig {
    /// Board side length N.
    pub size: usize,
    /// Budget for one Seeking-mode heatmap search. Checked between
    /// per-length passes; enforced only with the `std` feature.
    pub time_allowed: Duration,
}

impl EngineConfig {
    /// Config with the default time budget.
    pub const fn new(size: usize) -> Self {
        Self {
            size,
            time_allowed: DEFAULT_TIME_ALLOWED,
        }
    }

    /// Override the time budget.
    pub const fn with_time_allowed(self, time_allowed: Duration) -> Self {
        Self {
            size: self.size,
            time_allowed,
        }
    }
}
