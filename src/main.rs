use clap::{Args, Parser, Subcommand};
use rand::rngs::SmallRng;
use rand::SeedableRng;

use seabattle::prelude::*;
use seabattle::DEFAULT_MAX_PLACEMENT_ATTEMPTS;

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Play against the computer in this terminal.
    Play {
        #[command(flatten)]
        engine: EngineArgs,
    },
    /// Let the autopilot play a whole game and print a JSON summary.
    Sim {
        #[command(flatten)]
        engine: EngineArgs,
    },
}

#[derive(Args)]
struct EngineArgs {
    #[arg(long, help = "Fix RNG seed for reproducible games (e.g., --seed 12345)")]
    seed: Option<u64>,
    #[arg(long, default_value_t = DEFAULT_MAX_PLACEMENT_ATTEMPTS)]
    max_placement_attempts: u32,
    #[arg(long, help = "Keep chasing hits of ships that are already sunk")]
    no_prune: bool,
}

impl From<EngineArgs> for EngineConfig {
    fn from(args: EngineArgs) -> Self {
        EngineConfig {
            seed: args.seed,
            max_placement_attempts: args.max_placement_attempts,
            prune_sunk_hits: !args.no_prune,
        }
    }
}

fn main() -> anyhow::Result<()> {
    seabattle::init_logging();
    let cli = Cli::parse();

    match cli.command {
        Commands::Play { engine } => {
            let config = EngineConfig::from(engine);
            if let Some(s) = config.seed {
                println!("Using fixed seed: {} (game will be reproducible)", s);
            }
            let mut rng = match config.seed {
                Some(s) => SmallRng::seed_from_u64(s.wrapping_add(1)),
                None => SmallRng::from_rng(&mut rand::rng()),
            };
            let session = GameSession::new(config)?;
            let mut node = PlayerNode::new(Box::new(CliPlayer::new()), session);
            let winner = node.run(&mut rng)?;
            println!("\n═══════════════════ GAME OVER ═══════════════════\n");
            println!("Opponent fleet:");
            println!("{}", render_board(&node.session().own_view(Side::Opponent)));
            println!(
                "\nWinner: {:?} ({} shots fired)",
                winner,
                node.session().shots_fired(winner)
            );
        }
        Commands::Sim { engine } => {
            let report = simulate(EngineConfig::from(engine))?;
            println!("{}", serde_json::to_string(&report)?);
        }
    }
    Ok(())
}
