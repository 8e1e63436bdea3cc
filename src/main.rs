use anyhow::{ensure, Context};
use clap::Parser;
use rand::rngs::SmallRng;
use rand::SeedableRng;
use seabattle::{init_logging, Game, BOARD_SIZE, FLEET_LENGTHS};

#[derive(Parser)]
#[command(author, version, about = "Console sea battle against the computer", long_about = None)]
struct Cli {
    /// Fix RNG seed for reproducible games (e.g., --seed 12345)
    #[arg(long)]
    seed: Option<u64>,
    /// Board side length
    #[arg(long, default_value_t = BOARD_SIZE)]
    size: usize,
    /// Comma-separated hull lengths to place, e.g. "3,2,2,1,1,1,1"
    #[arg(long)]
    fleet: Option<String>,
}

fn parse_fleet(spec: &str) -> anyhow::Result<Vec<usize>> {
    spec.split(',')
        .map(|part| {
            part.trim()
                .parse::<usize>()
                .with_context(|| format!("invalid hull length {:?}", part.trim()))
        })
        .collect()
}

fn main() -> anyhow::Result<()> {
    init_logging();
    let cli = Cli::parse();

    ensure!(cli.size >= 1, "board size must be at least 1");
    let fleet = match &cli.fleet {
        Some(spec) => parse_fleet(spec)?,
        None => FLEET_LENGTHS.to_vec(),
    };
    ensure!(!fleet.is_empty(), "fleet must contain at least one ship");
    for &len in &fleet {
        ensure!(len >= 1, "hull lengths must be at least 1");
        ensure!(
            len <= cli.size,
            "hull length {} does not fit on a {}x{} board",
            len,
            cli.size,
            cli.size
        );
    }

    let rng = if let Some(s) = cli.seed {
        println!("Using fixed seed: {} (game will be reproducible)", s);
        SmallRng::seed_from_u64(s)
    } else {
        let mut seed_rng = rand::rng();
        SmallRng::from_rng(&mut seed_rng)
    };

    let mut game = Game::new(cli.size, &fleet, rng);
    game.run();
    Ok(())
}
