use clap::Parser;

use seabattle::prelude::*;

/// Run automated games and print one JSON line per game.
#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Seed of the first game; game `i` uses `seed + i`.
    seed: u64,
    /// Number of games to play.
    #[arg(default_value_t = 1)]
    games: u64,
    #[arg(long, help = "Keep chasing hits of ships that are already sunk")]
    no_prune: bool,
}

fn main() -> anyhow::Result<()> {
    seabattle::init_logging();
    let args = Args::parse();

    for i in 0..args.games {
        let config = EngineConfig {
            prune_sunk_hits: !args.no_prune,
            ..EngineConfig::seeded(args.seed.wrapping_add(i))
        };
        let report = simulate(config)?;
        println!("{}", serde_json::to_string(&report)?);
    }
    Ok(())
}
