//! The targeting engine: hit follow-up queue plus heatmap search.

use alloc::collections::VecDeque;
use alloc::vec::Vec;
use core::time::Duration;

use crate::config::{default_fleet, EngineConfig, Fleet};
use crate::coord::{CellSet, Coord};
use crate::field::placement_counts;
use crate::heatmap::Heatmap;

#[cfg(feature = "std")]
use std::time::Instant;

/// Probabilistic targeting engine for a single opponent.
///
/// Shot history accumulates through [`TargetingEngine::register_shot`];
/// confirmed hits seed a FIFO exploration queue of orthogonal
/// neighbours (Hunting). With the queue empty the engine sums
/// placement-count heatmaps over the remaining ship lengths and fires
/// at the densest cell (Seeking).
///
/// One instance per opponent. The hosting game owns boards, placement
/// and win checks; the engine only ever sees coordinates, hit flags and
/// the remaining-ships view.
pub struct TargetingEngine {
    config: EngineConfig,
    hits: CellSet,
    misses: CellSet,
    ships: Fleet,
    queue: VecDeque<Coord>,
}

impl TargetingEngine {
    /// Engine with no shot history, starting from the standard fleet
    /// view.
    pub fn new(config: EngineConfig) -> Self {
        Self {
            config,
            hits: CellSet::new(),
            misses: CellSet::new(),
            ships: default_fleet(),
            queue: VecDeque::new(),
        }
    }

    /// Resume an engine from recorded shot history. Seeded hits are
    /// treated as resolved by the placement field but do not enqueue
    /// follow-up targets; persist the queue through [`EngineState`]
    /// when that matters.
    pub fn with_history<H, M>(config: EngineConfig, hits: H, misses: M) -> Self
    where
        H: IntoIterator<Item = Coord>,
        M: IntoIterator<Item = Coord>,
    {
        let mut engine = Self::new(config);
        engine.hits.extend(hits);
        engine.misses.extend(misses);
        engine
    }

    /// Board side length.
    pub fn size(&self) -> usize {
        self.config.size
    }

    /// Engine configuration.
    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    /// Cells confirmed to contain a ship segment.
    pub fn hits(&self) -> &CellSet {
        &self.hits
    }

    /// Cells confirmed empty.
    pub fn misses(&self) -> &CellSet {
        &self.misses
    }

    /// Pending follow-up targets, oldest first.
    pub fn queue(&self) -> impl Iterator<Item = Coord> + '_ {
        self.queue.iter().copied()
    }

    fn resolved(&self, coord: Coord) -> bool {
        self.hits.contains(&coord) || self.misses.contains(&coord)
    }

    /// Decide the next attack coordinate.
    ///
    /// Stores `ships` as the current remaining-ships view. Pops the
    /// follow-up queue when non-empty; otherwise searches the summed
    /// heatmap, falling back to the first unresolved cell when the
    /// heatmap pick is already resolved. Queue entries are consumed on
    /// pop and not re-checked against the shot sets.
    pub fn next_move(&mut self, ships: &Fleet) -> Coord {
        self.ships = ships.clone();
        if let Some(coord) = self.queue.pop_front() {
            log::debug!("hunting: following up queued target {}", coord);
            return coord;
        }
        let target = self.heatmap().argmax();
        if !self.resolved(target) {
            log::debug!("seeking: densest cell {}", target);
            return target;
        }
        // The heatmap can zero out entirely while unresolved cells
        // remain (the span vetoes over-exclude late game), and argmax
        // then lands on a resolved cell. Repeating that pick would
        // never change state, so sweep for a fresh cell instead.
        let fallback = self.first_unresolved().unwrap_or(target);
        log::debug!("seeking: heatmap exhausted, falling back to {}", fallback);
        fallback
    }

    fn first_unresolved(&self) -> Option<Coord> {
        for y in 0..self.config.size {
            for x in 0..self.config.size {
                let coord = Coord::new(x, y);
                if !self.resolved(coord) {
                    return Some(coord);
                }
            }
        }
        None
    }

    /// Summed placement-count heatmap over the stored remaining-ships
    /// view. Stops summing when the configured time budget runs out
    /// and falls back to the partial sum; budget enforcement needs
    /// `std`.
    pub fn heatmap(&self) -> Heatmap {
        let mut summed = Heatmap::new(self.config.size);
        #[cfg(feature = "std")]
        let deadline = Instant::now() + self.config.time_allowed;
        for &length in self.ships.values() {
            #[cfg(feature = "std")]
            if Instant::now() >= deadline {
                log::warn!("time budget exhausted after partial heatmap");
                break;
            }
            summed.merge(&placement_counts(
                self.config.size,
                length,
                &self.hits,
                &self.misses,
            ));
        }
        summed
    }

    /// Record the outcome of a shot previously returned by
    /// [`TargetingEngine::next_move`]. Coordinates are trusted; bounds
    /// are the caller's responsibility.
    pub fn register_shot(&mut self, coord: Coord, was_hit: bool) {
        if was_hit {
            self.add_hit(coord);
        } else {
            self.add_miss(coord);
        }
    }

    /// Record a hit and queue its in-bounds, unresolved orthogonal
    /// neighbours in fixed order: east, west, south, north.
    ///
    /// Not idempotent: registering the same hit again re-queues any
    /// neighbours that are still unresolved.
    pub fn add_hit(&mut self, coord: Coord) {
        self.hits.insert(coord);
        self.enqueue_neighbours(coord);
    }

    /// Record a miss.
    pub fn add_miss(&mut self, coord: Coord) {
        self.misses.insert(coord);
    }

    fn enqueue_neighbours(&mut self, coord: Coord) {
        let Coord { x, y } = coord;
        let east = Some(Coord::new(x + 1, y));
        let west = x.checked_sub(1).map(|x| Coord::new(x, y));
        let south = Some(Coord::new(x, y + 1));
        let north = y.checked_sub(1).map(|y| Coord::new(x, y));
        for neighbour in [east, west, south, north].into_iter().flatten() {
            if neighbour.in_bounds(self.config.size) && !self.resolved(neighbour) {
                self.queue.push_back(neighbour);
            }
        }
    }
}

/// Serializable engine snapshot for saving or syncing a session.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub struct EngineState {
    pub size: usize,
    pub hits: Vec<Coord>,
    pub misses: Vec<Coord>,
    pub queue: Vec<Coord>,
}

impl From<&TargetingEngine> for EngineState {
    fn from(engine: &TargetingEngine) -> Self {
        EngineState {
            size: engine.config.size,
            hits: engine.hits.iter().copied().collect(),
            misses: engine.misses.iter().copied().collect(),
            queue: engine.queue.iter().copied().collect(),
        }
    }
}

impl EngineState {
    /// Rebuild an engine from a snapshot, including its queue.
    pub fn restore(&self, time_allowed: Duration) -> TargetingEngine {
        let config = EngineConfig::new(self.size).with_time_allowed(time_allowed);
        let mut engine = TargetingEngine::with_history(
            config,
            self.hits.iter().copied(),
            self.misses.iter().copied(),
        );
        engine.queue = self.queue.iter().copied().collect();
        engine
    }
}
