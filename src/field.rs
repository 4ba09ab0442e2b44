//! Placement-count heatmaps for the opponent board.
//!
//! For a given ship length the field counts, per cell, how many
//! placements of that length fit the board without touching any
//! recorded shot. The summed field over all remaining lengths is the
//! Seeking-mode search surface.

use crate::coord::{CellSet, Coord};
use crate::heatmap::Heatmap;
use crate::ship::Orientation;

/// True when a `length` span from `origin` along `orientation` stays on
/// a board of side `size`.
fn fits(origin: Coord, length: usize, orientation: Orientation, size: usize) -> bool {
    match orientation {
        Orientation::Horizontal => origin.x + length <= size,
        Orientation::Vertical => origin.y + length <= size,
    }
}

/// True when no scanned cell of the span is in `shots`. Deliberately
/// scans `length + 1` offsets: a recorded shot on the cell just past
/// the span also vetoes the placement. Pinned by
/// `veto_extends_one_cell_past_span`.
fn span_clear(origin: Coord, length: usize, orientation: Orientation, shots: &CellSet) -> bool {
    for k in 0..=length {
        if shots.contains(&origin.step(orientation, k)) {
            return false;
        }
    }
    true
}

/// Count, for every cell of an N×N board, the placements of a ship of
/// `length` covering that cell which fit the board and clear both shot
/// sets. Cells already in `hits` or `misses` are skipped as placement
/// origins but still appear in the output.
///
/// A hit disqualifies a whole span rather than anchoring it: the field
/// models where an undiscovered ship could still lie, not a full
/// constraint solve over the known hits.
pub fn placement_counts(size: usize, length: usize, hits: &CellSet, misses: &CellSet) -> Heatmap {
    let mut field = Heatmap::new(size);
    for y in 0..size {
        for x in 0..size {
            let origin = Coord::new(x, y);
            if hits.contains(&origin) || misses.contains(&origin) {
                continue;
            }
            for orientation in [Orientation::Horizontal, Orientation::Vertical] {
                if !fits(origin, length, orientation, size) {
                    continue;
                }
                if !span_clear(origin, length, orientation, misses)
                    || !span_clear(origin, length, orientation, hits)
                {
                    continue;
                }
                for k in 0..length {
                    field.add(origin.step(orientation, k), 1);
                }
            }
        }
    }
    field
}
