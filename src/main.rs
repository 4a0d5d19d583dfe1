#[cfg(not(feature = "std"))]
fn main() {}

#[cfg(feature = "std")]
use clap::Parser;
#[cfg(feature = "std")]
use rand::rngs::SmallRng;
#[cfg(feature = "std")]
use rand::SeedableRng;
#[cfg(feature = "std")]
use seabattle::{
    init_logging, ui, CliPlayer, Match, Player, RandomPlayer, DEFAULT_BOARD_SIZE,
};

/// Command line sea battle against a random-firing computer.
#[derive(Parser)]
#[command(author, version, about, long_about = None)]
#[cfg(feature = "std")]
struct Cli {
    /// Board edge length.
    #[arg(long, default_value_t = DEFAULT_BOARD_SIZE)]
    size: usize,
    /// Fix RNG seed for reproducible games (e.g., --seed 12345).
    #[arg(long)]
    seed: Option<u64>,
    /// Skip the computer's cosmetic thinking pause.
    #[arg(long)]
    no_delay: bool,
}

#[cfg(feature = "std")]
fn main() -> anyhow::Result<()> {
    init_logging();
    let cli = Cli::parse();

    let mut rng = if let Some(s) = cli.seed {
        SmallRng::seed_from_u64(s)
    } else {
        let mut seed_rng = rand::rng();
        SmallRng::from_rng(&mut seed_rng)
    };

    let bot = if cli.no_delay {
        RandomPlayer::headless()
    } else {
        RandomPlayer::new()
    };
    let players: [Box<dyn Player>; 2] = [Box::new(CliPlayer::new()), Box::new(bot)];

    ui::greet();
    let mut game =
        Match::new(cli.size, players, &mut rng).map_err(|e| anyhow::anyhow!(e))?;
    game.run(&mut rng)?;
    Ok(())
}
