use std::io::{self, Write};

use rand::rngs::SmallRng;

use crate::common::{Coord, ShotOutcome};
use crate::player::Player;

/// Interactive player reading targets from stdin as two 1-indexed integers
/// ("row col"). Re-prompts until the input parses.
pub struct CliPlayer;

impl CliPlayer {
    pub fn new() -> Self {
        Self
    }
}

impl Default for CliPlayer {
    fn default() -> Self {
        Self::new()
    }
}

/// Parse "row col" (1-indexed) into a 0-indexed coordinate. Bounds are the
/// board's concern, not the parser's.
fn parse_coord(input: &str) -> Option<Coord> {
    let mut parts = input.split_whitespace();
    let row: usize = parts.next()?.parse().ok()?;
    let col: usize = parts.next()?.parse().ok()?;
    if parts.next().is_some() || row == 0 || col == 0 {
        return None;
    }
    Some(Coord::new(row - 1, col - 1))
}

impl Player for CliPlayer {
    fn choose_target(&mut self, _rng: &mut SmallRng, _size: usize) -> Coord {
        loop {
            print!("Your move (row col): ");
            let _ = io::stdout().flush();
            let mut line = String::new();
            if io::stdin().read_line(&mut line).is_err() {
                println!("Could not read input");
                continue;
            }
            match parse_coord(line.trim()) {
                Some(coord) => return coord,
                None => println!("Enter two numbers, e.g. 1 3"),
            }
        }
    }

    fn handle_shot_outcome(&mut self, coord: Coord, outcome: ShotOutcome) {
        match outcome {
            ShotOutcome::Hit => println!("You hit a ship at {}!", coord),
            ShotOutcome::HitAndSunk => println!("You sank a ship at {}!", coord),
            ShotOutcome::Miss => println!("Miss at {}.", coord),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::parse_coord;
    use crate::common::Coord;

    #[test]
    fn parses_one_indexed_pairs() {
        assert_eq!(parse_coord("1 3"), Some(Coord::new(0, 2)));
        assert_eq!(parse_coord("  6   6 "), Some(Coord::new(5, 5)));
    }

    #[test]
    fn rejects_malformed_input() {
        assert_eq!(parse_coord(""), None);
        assert_eq!(parse_coord("3"), None);
        assert_eq!(parse_coord("a b"), None);
        assert_eq!(parse_coord("1 2 3"), None);
        // zero is not a valid 1-indexed coordinate
        assert_eq!(parse_coord("0 4"), None);
    }
}
