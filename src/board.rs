//! Game board state: the placement / firing state machine.

use std::collections::HashSet;

use serde::{Deserialize, Serialize};

use crate::common::{BoardError, Coord, ShotOutcome};
use crate::ship::Ship;

/// Visible state of one grid cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum CellState {
    Empty,
    ShipPresent,
    Hit,
    Miss,
    /// Reserved as a placement-exclusion margin. Renders blank.
    Buffer,
}

/// One side's grid, fleet and shot bookkeeping.
///
/// A board is populated through [`Board::place_ship`], sealed with
/// [`Board::finish_placement`] and thereafter mutated only by
/// [`Board::fire_at`]. The `resolved` set is the single authority for both
/// placement collisions and duplicate shots: during placement it holds every
/// occupied and buffered cell, during play every cell already fired upon
/// (plus the contour of each sunk ship).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Board {
    size: usize,
    cells: Vec<CellState>,
    ships: Vec<Ship>,
    resolved: HashSet<Coord>,
    sunk_count: usize,
    concealed: bool,
}

impl Board {
    /// Create an empty `size`×`size` board with no ships placed.
    pub fn new(size: usize) -> Self {
        Board {
            size,
            cells: vec![CellState::Empty; size * size],
            ships: Vec::new(),
            resolved: HashSet::new(),
            sunk_count: 0,
            concealed: false,
        }
    }

    pub fn size(&self) -> usize {
        self.size
    }

    /// Whether ship cells are hidden from the opposing side's view.
    pub fn is_concealed(&self) -> bool {
        self.concealed
    }

    pub fn set_concealed(&mut self, concealed: bool) {
        self.concealed = concealed;
    }

    /// Ships placed so far, read-only.
    pub fn ships(&self) -> &[Ship] {
        &self.ships
    }

    pub fn sunk_count(&self) -> usize {
        self.sunk_count
    }

    /// Returns `true` when every ship of the fleet has been destroyed.
    pub fn is_defeated(&self) -> bool {
        self.sunk_count == self.ships.len()
    }

    pub fn in_bounds(&self, coord: Coord) -> bool {
        coord.row < self.size && coord.col < self.size
    }

    /// State of a single cell. Panics if `coord` is out of bounds.
    pub fn cell(&self, coord: Coord) -> CellState {
        self.cells[coord.row * self.size + coord.col]
    }

    fn set_cell(&mut self, coord: Coord, state: CellState) {
        self.cells[coord.row * self.size + coord.col] = state;
    }

    /// Place a ship, rejecting the whole placement atomically if any occupied
    /// cell is out of bounds or collides with an occupied or buffered cell.
    pub fn place_ship(&mut self, ship: Ship) -> Result<(), BoardError> {
        for cell in ship.cells() {
            if !self.in_bounds(cell) {
                return Err(BoardError::OutOfBounds);
            }
            if self.resolved.contains(&cell) {
                return Err(BoardError::Collision);
            }
        }
        for cell in ship.cells() {
            self.set_cell(cell, CellState::ShipPresent);
            self.resolved.insert(cell);
        }
        self.ships.push(ship);
        let idx = self.ships.len() - 1;
        self.mark_contour(idx);
        Ok(())
    }

    /// Reserve the 8-neighborhood of a ship's cells: every in-bounds
    /// neighbor not already resolved becomes a buffer cell.
    fn mark_contour(&mut self, ship_index: usize) {
        let cells: Vec<Coord> = self.ships[ship_index].cells().collect();
        for cell in cells {
            for dr in -1i64..=1 {
                for dc in -1i64..=1 {
                    let (nr, nc) = (cell.row as i64 + dr, cell.col as i64 + dc);
                    if nr < 0 || nc < 0 || nr >= self.size as i64 || nc >= self.size as i64 {
                        continue;
                    }
                    let near = Coord::new(nr as usize, nc as usize);
                    if self.resolved.insert(near) {
                        self.set_cell(near, CellState::Buffer);
                    }
                }
            }
        }
    }

    /// Seal the placement phase. Clears the placement bookkeeping so that
    /// every cell, ship cells included, is a legal first target, and erases
    /// the placement-phase buffer marks; from here on a `Buffer` cell only
    /// ever means the contour of a sunk ship. Must be called once the fleet
    /// is fully seated, before any [`Board::fire_at`].
    pub fn finish_placement(&mut self) {
        self.resolved.clear();
        for cell in self.cells.iter_mut() {
            if *cell == CellState::Buffer {
                *cell = CellState::Empty;
            }
        }
    }

    /// Resolve a shot at `coord`. Failures leave the board untouched; the
    /// caller is expected to retry with a new coordinate without consuming
    /// a turn.
    pub fn fire_at(&mut self, coord: Coord) -> Result<ShotOutcome, BoardError> {
        if !self.in_bounds(coord) {
            return Err(BoardError::OutOfBounds);
        }
        if !self.resolved.insert(coord) {
            return Err(BoardError::AlreadyTargeted);
        }

        for i in 0..self.ships.len() {
            if self.ships[i].contains(coord) {
                self.ships[i].register_hit();
                self.set_cell(coord, CellState::Hit);
                if self.ships[i].is_sunk() {
                    self.sunk_count += 1;
                    // Close off the surroundings of the destroyed ship:
                    // nothing can live adjacent to it, so those cells are
                    // resolved for the rest of the game.
                    self.mark_contour(i);
                    return Ok(ShotOutcome::HitAndSunk);
                }
                return Ok(ShotOutcome::Hit);
            }
        }

        self.set_cell(coord, CellState::Miss);
        Ok(ShotOutcome::Miss)
    }
}
