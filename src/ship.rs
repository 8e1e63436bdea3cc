//! Ship definitions: a fixed line of cells with per-cell damage tracking.

use serde::{Deserialize, Serialize};

use crate::common::Coord;

/// Orientation of a ship on the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Orientation {
    Horizontal,
    Vertical,
}

/// A ship anchored at its bow cell. Occupied cells are derived from the bow
/// and never change after construction; only the health counter is mutable.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Ship {
    bow: Coord,
    length: usize,
    orientation: Orientation,
    health: usize,
}

impl Ship {
    /// Create a ship of `length` cells extending from `bow`.
    ///
    /// # Panics
    ///
    /// Panics if `length` is zero; a ship occupies at least its bow cell.
    pub fn new(bow: Coord, length: usize, orientation: Orientation) -> Self {
        assert!(length >= 1, "ship length must be at least 1");
        Ship {
            bow,
            length,
            orientation,
            health: length,
        }
    }

    /// Occupied cells in bow-to-stern order. Horizontal ships walk columns,
    /// vertical ships walk rows.
    pub fn cells(&self) -> impl Iterator<Item = Coord> + '_ {
        (0..self.length).map(move |i| match self.orientation {
            Orientation::Horizontal => Coord::new(self.bow.row, self.bow.col + i),
            Orientation::Vertical => Coord::new(self.bow.row + i, self.bow.col),
        })
    }

    /// Whether `coord` is one of this ship's occupied cells.
    pub fn contains(&self, coord: Coord) -> bool {
        self.cells().any(|c| c == coord)
    }

    /// Register one distinct hit. The board guarantees each cell is only
    /// ever resolved once, so health never underflows in practice.
    pub(crate) fn register_hit(&mut self) {
        self.health = self.health.saturating_sub(1);
    }

    /// All segments hit.
    pub fn is_sunk(&self) -> bool {
        self.health == 0
    }

    pub fn bow(&self) -> Coord {
        self.bow
    }

    pub fn length(&self) -> usize {
        self.length
    }

    pub fn orientation(&self) -> Orientation {
        self.orientation
    }

    /// Intact cells remaining.
    pub fn health(&self) -> usize {
        self.health
    }
}
