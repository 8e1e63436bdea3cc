//! Console game: setup, alternating turns, win/lose detection.

use log::debug;
use rand::rngs::SmallRng;

use crate::board::Board;
use crate::common::ShotOutcome;
use crate::layout::FleetLayoutGenerator;
use crate::player::Player;
use crate::player_ai::RandomPlayer;
use crate::player_cli::CliPlayer;
use crate::ui::render_board;

/// A human-vs-computer game over two independently generated boards.
pub struct Game {
    user_board: Board,
    computer_board: Board,
    user: CliPlayer,
    computer: RandomPlayer,
    rng: SmallRng,
}

impl Game {
    /// Generate both fleets and set up the players. The computer's board is
    /// concealed so the human never sees intact ship cells.
    pub fn new(size: usize, fleet_lengths: &[usize], mut rng: SmallRng) -> Self {
        let generator = FleetLayoutGenerator::new(size, fleet_lengths);
        let user_board = generator.generate(&mut rng);
        let mut computer_board = generator.generate(&mut rng);
        computer_board.set_concealed(true);
        Game {
            user_board,
            computer_board,
            user: CliPlayer::new(),
            computer: RandomPlayer::new(),
            rng,
        }
    }

    fn greet(size: usize) {
        println!("{}", "-".repeat(27));
        println!("  Sea battle begins. Ready?");
        println!("{}", "-".repeat(27));
        println!("  Input format: row col");
        println!("  two numbers from 1 to {}", size);
    }

    fn print_boards(&self) {
        println!("{}", "-".repeat(27));
        println!("Your board:");
        print!("{}", render_board(&self.user_board));
        println!("{}", "-".repeat(27));
        println!("Computer's board:");
        print!("{}", render_board(&self.computer_board));
        println!("{}", "-".repeat(27));
    }

    /// One side's move: ask for targets until a shot resolves. Rejected
    /// coordinates are surfaced to the acting side and re-asked without
    /// consuming the turn.
    fn take_turn<P: Player>(
        player: &mut P,
        rng: &mut SmallRng,
        enemy: &mut Board,
        announce: bool,
    ) -> ShotOutcome {
        loop {
            let target = player.choose_target(rng, enemy.size());
            if announce {
                println!("Computer's move: {}", target);
            }
            match enemy.fire_at(target) {
                Ok(outcome) => {
                    debug!("shot {} -> {:?}", target, outcome);
                    player.handle_shot_outcome(target, outcome);
                    if announce {
                        match outcome {
                            ShotOutcome::Hit => println!("The computer hit your ship!"),
                            ShotOutcome::HitAndSunk => println!("The computer sank your ship!"),
                            ShotOutcome::Miss => println!("The computer missed."),
                        }
                    }
                    return outcome;
                }
                Err(e) => {
                    debug!("shot {} rejected: {}", target, e);
                    if !announce {
                        println!("{}", e);
                    }
                }
            }
        }
    }

    /// Run the game to completion. The human moves first; a side keeps the
    /// turn after every hit.
    pub fn run(&mut self) {
        Self::greet(self.user_board.size());
        let mut users_turn = true;
        loop {
            self.print_boards();
            let outcome = if users_turn {
                Self::take_turn(&mut self.user, &mut self.rng, &mut self.computer_board, false)
            } else {
                Self::take_turn(&mut self.computer, &mut self.rng, &mut self.user_board, true)
            };

            if self.computer_board.is_defeated() {
                self.print_boards();
                println!("You won!");
                println!("{}", "-".repeat(27));
                break;
            }
            if self.user_board.is_defeated() {
                self.print_boards();
                println!("The computer won!");
                println!("{}", "-".repeat(27));
                break;
            }

            if !outcome.retains_turn() {
                users_turn = !users_turn;
            }
        }
    }
}
