//! Random fleet placement with a bounded retry budget.

use log::debug;
use rand::Rng;

use crate::board::Board;
use crate::common::Coord;
use crate::config::{BOARD_SIZE, FLEET_LENGTHS, PLACEMENT_ATTEMPT_LIMIT};
use crate::ship::{Orientation, Ship};

/// Produces fully-populated, legally-placed boards for one side from a fixed
/// ordered list of hull lengths.
#[derive(Debug, Clone)]
pub struct FleetLayoutGenerator {
    size: usize,
    lengths: Vec<usize>,
}

impl FleetLayoutGenerator {
    pub fn new(size: usize, lengths: &[usize]) -> Self {
        Self {
            size,
            lengths: lengths.to_vec(),
        }
    }

    /// Attempt to seat the whole fleet on one fresh board. The attempt
    /// counter spans the entire fleet; exhausting it abandons the board.
    fn try_board<R: Rng>(&self, rng: &mut R) -> Option<Board> {
        let mut board = Board::new(self.size);
        let mut attempts = 0u32;
        for &length in &self.lengths {
            loop {
                attempts += 1;
                if attempts > PLACEMENT_ATTEMPT_LIMIT {
                    return None;
                }
                let bow = Coord::new(
                    rng.random_range(0..self.size),
                    rng.random_range(0..self.size),
                );
                let orientation = if rng.random() {
                    Orientation::Horizontal
                } else {
                    Orientation::Vertical
                };
                if board.place_ship(Ship::new(bow, length, orientation)).is_ok() {
                    break;
                }
            }
        }
        board.finish_placement();
        Some(board)
    }

    /// Generate a board, restarting from scratch whenever the attempt budget
    /// for one board runs out. Terminates with probability 1 for any
    /// size/fleet combination that admits a legal layout.
    pub fn generate<R: Rng>(&self, rng: &mut R) -> Board {
        loop {
            match self.try_board(rng) {
                Some(board) => return board,
                None => debug!("placement attempt budget exhausted, restarting board"),
            }
        }
    }
}

impl Default for FleetLayoutGenerator {
    fn default() -> Self {
        Self::new(BOARD_SIZE, &FLEET_LENGTHS)
    }
}
