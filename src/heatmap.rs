//! Per-cell placement counts over an N×N grid.

use alloc::vec;
use alloc::vec::Vec;
use core::fmt;

use crate::coord::Coord;

/// Placement counts for every cell of a square board, stored row-major
/// (`y * size + x`). Recomputed from scratch on every move decision.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Heatmap {
    size: usize,
    counts: Vec<u32>,
}

impl Heatmap {
    /// All-zero heatmap for a board of side `size`.
    pub fn new(size: usize) -> Self {
        Heatmap {
            size,
            counts: vec![0; size * size],
        }
    }

    /// Board side length.
    pub fn size(&self) -> usize {
        self.size
    }

    #[inline]
    fn index(&self, coord: Coord) -> usize {
        debug_assert!(coord.in_bounds(self.size));
        coord.y * self.size + coord.x
    }

    /// Count at `coord`.
    pub fn get(&self, coord: Coord) -> u32 {
        self.counts[self.index(coord)]
    }

    /// Add `weight` to the count at `coord`.
    pub fn add(&mut self, coord: Coord, weight: u32) {
        let idx = self.index(coord);
        self.counts[idx] += weight;
    }

    /// Element-wise sum with another heatmap of the same size.
    pub fn merge(&mut self, other: &Heatmap) {
        debug_assert_eq!(self.size, other.size);
        for (dst, src) in self.counts.iter_mut().zip(other.counts.iter()) {
            *dst += *src;
        }
    }

    /// Number of cells (always `size * size`).
    pub fn len(&self) -> usize {
        self.counts.len()
    }

    /// True when the board has no cells.
    pub fn is_empty(&self) -> bool {
        self.counts.is_empty()
    }

    /// Row-major iterator over `(coord, count)`.
    pub fn cells(&self) -> impl Iterator<Item = (Coord, u32)> + '_ {
        let size = self.size;
        self.counts
            .iter()
            .enumerate()
            .map(move |(idx, &count)| (Coord::new(idx % size, idx / size), count))
    }

    /// Coordinate of the first maximum count in row-major order. The
    /// stable tie-break keeps move selection deterministic.
    pub fn argmax(&self) -> Coord {
        let mut best = Coord::new(0, 0);
        let mut best_count = 0;
        for (coord, count) in self.cells() {
            if count > best_count {
                best = coord;
                best_count = count;
            }
        }
        best
    }
}

impl fmt::Display for Heatmap {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for y in 0..self.size {
            for x in 0..self.size {
                write!(f, "{:>4}", self.get(Coord::new(x, y)))?;
            }
            if y + 1 < self.size {
                writeln!(f)?;
            }
        }
        Ok(())
    }
}
