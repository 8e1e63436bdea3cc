//! Common types: coordinates, shot outcomes and board errors.

use serde::{Deserialize, Serialize};

/// A 0-indexed cell position on the grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Coord {
    pub row: usize,
    pub col: usize,
}

impl Coord {
    pub const fn new(row: usize, col: usize) -> Self {
        Self { row, col }
    }
}

impl core::fmt::Display for Coord {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        // 1-indexed, the way coordinates are shown to players
        write!(f, "{} {}", self.row + 1, self.col + 1)
    }
}

/// Result of a resolved shot.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ShotOutcome {
    /// Shot damaged a ship that still has intact cells.
    Hit,
    /// Shot destroyed the last intact cell of a ship.
    HitAndSunk,
    /// Shot landed on open water.
    Miss,
}

impl ShotOutcome {
    /// Whether the acting side keeps the turn after this outcome.
    pub fn retains_turn(self) -> bool {
        matches!(self, ShotOutcome::Hit | ShotOutcome::HitAndSunk)
    }
}

/// Errors returned by Board operations. All are recoverable by the caller.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BoardError {
    /// Coordinate lies outside the grid.
    OutOfBounds,
    /// Shot repeats a previously resolved cell.
    AlreadyTargeted,
    /// Placement overlaps an occupied or buffered cell.
    Collision,
}

impl core::fmt::Display for BoardError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            BoardError::OutOfBounds => write!(f, "Coordinate is outside the board"),
            BoardError::AlreadyTargeted => write!(f, "That cell was already targeted"),
            BoardError::Collision => {
                write!(f, "Placement overlaps an occupied or buffered cell")
            }
        }
    }
}

impl std::error::Error for BoardError {}
