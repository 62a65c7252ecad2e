use std::io;

use clap::Parser;
use draughts::checkers::make_move::Notation;
use draughts::checkers::roster::InitialLayout;
use draughts::{Config, Engine};
use tracing_subscriber::EnvFilter;

/// Plays a checkers episode driven by text commands on stdin.
#[derive(Parser, Debug)]
#[command(version, about)]
struct Args {
    /// Start every episode from a randomized roster.
    #[arg(long)]
    random: bool,
    /// Probability of keeping each piece of a randomized roster.
    #[arg(long, default_value_t = 1.0)]
    keep_probability: f64,
    /// Seed for randomized rosters. Seeds from system entropy if absent.
    #[arg(long)]
    seed: Option<u64>,
    /// Format of applied moves.
    #[arg(long, value_enum, default_value_t = Notation::Algebraic)]
    notation: Notation,
    /// Do not print the version banner.
    #[arg(long)]
    quiet: bool,
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(io::stderr)
        .init();

    let args = Args::parse();
    if !args.quiet {
        draughts::print_engine_info();
        draughts::print_binary_info();
    }
    let config = Config {
        layout: InitialLayout::from_inputs(args.random, args.keep_probability)?,
        seed: args.seed,
        notation: args.notation,
    };
    tracing::debug!(?config, "starting");

    let mut input = io::stdin().lock();
    let mut output = io::stdout().lock();
    let mut engine = Engine::new(&mut input, &mut output, config)?;
    engine.run()
}
