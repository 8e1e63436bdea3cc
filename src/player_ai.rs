use rand::rngs::SmallRng;
use rand::Rng;

use crate::common::Coord;
use crate::player::Player;

/// Automated player that targets a uniformly random cell. Repeats and other
/// illegal picks are rejected by the board and retried by the move loop.
pub struct RandomPlayer;

impl RandomPlayer {
    pub fn new() -> Self {
        Self
    }
}

impl Default for RandomPlayer {
    fn default() -> Self {
        Self::new()
    }
}

impl Player for RandomPlayer {
    fn choose_target(&mut self, rng: &mut SmallRng, size: usize) -> Coord {
        Coord::new(rng.random_range(0..size), rng.random_range(0..size))
    }
}
