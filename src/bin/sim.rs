//! Headless bot-vs-bot simulation for sanity runs and quick statistics.

#[cfg(not(feature = "std"))]
fn main() {}

#[cfg(feature = "std")]
fn main() -> anyhow::Result<()> {
    use rand::rngs::SmallRng;
    use rand::SeedableRng;
    use seabattle::{random_board, Match, Player, RandomPlayer, DEFAULT_BOARD_SIZE};

    let args: Vec<String> = std::env::args().collect();
    if args.len() != 3 {
        eprintln!("Usage: {} <shot-seed> <layout-seed>", args[0]);
        std::process::exit(1);
    }
    let shot_seed: u64 = args[1].parse()?;
    let layout_seed: u64 = args[2].parse()?;

    let mut rng = SmallRng::seed_from_u64(shot_seed);
    let mut layout_rng = SmallRng::seed_from_u64(layout_seed);

    let boards = [
        random_board(&mut layout_rng, DEFAULT_BOARD_SIZE).map_err(|e| anyhow::anyhow!(e))?,
        random_board(&mut layout_rng, DEFAULT_BOARD_SIZE).map_err(|e| anyhow::anyhow!(e))?,
    ];
    let players: [Box<dyn Player>; 2] = [
        Box::new(RandomPlayer::headless()),
        Box::new(RandomPlayer::headless()),
    ];

    let mut game = Match::with_boards(boards, players);
    let mut moves = 0usize;
    let winner = loop {
        game.step(&mut rng)?;
        moves += 1;
        if let Some(w) = game.winner() {
            break w;
        }
    };

    println!(
        "winner=player{} moves={} sunk={}:{}",
        winner + 1,
        moves,
        game.board(0).sunk_count(),
        game.board(1).sunk_count()
    );
    Ok(())
}
