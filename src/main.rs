//! Terminal blackjack against a fixed-policy dealer.

use std::io;
use std::process::ExitCode;

use bjsim::{Game, GameOptions, ReplayPolicy};
use clap::{Parser, ValueEnum};

#[derive(Parser)]
#[command(name = "bjsim", about = "Single-player blackjack in the terminal")]
struct Cli {
    /// Seed for the shuffle generator; defaults to OS entropy
    #[arg(long)]
    seed: Option<u64>,

    /// Dealer draws on soft 17 instead of standing
    #[arg(long)]
    hit_soft_17: bool,

    /// Play-again behavior after a round
    #[arg(long, value_enum, default_value_t = ReplayArg::Once)]
    replay: ReplayArg,
}

#[derive(Clone, Copy, ValueEnum)]
enum ReplayArg {
    /// One extra round at most
    Once,
    /// Ask again after every round
    UntilDeclined,
}

impl From<ReplayArg> for ReplayPolicy {
    fn from(arg: ReplayArg) -> Self {
        match arg {
            ReplayArg::Once => Self::Once,
            ReplayArg::UntilDeclined => Self::UntilDeclined,
        }
    }
}

fn main() -> ExitCode {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let cli = Cli::parse();
    let options = GameOptions::default()
        .with_stand_on_soft_17(!cli.hit_soft_17)
        .with_replay(cli.replay.into());

    let mut game = match cli.seed {
        Some(seed) => {
            log::info!("using fixed seed {seed}");
            Game::new(options, seed)
        }
        None => Game::from_os_rng(options),
    };

    let stdin = io::stdin();
    let mut input = stdin.lock();
    let mut output = io::stdout().lock();

    match game.run(&mut input, &mut output) {
        Ok(rounds) => {
            log::info!("session finished after {rounds} round(s)");
            ExitCode::SUCCESS
        }
        Err(e) => {
            log::error!("session failed: {e}");
            ExitCode::FAILURE
        }
    }
}
