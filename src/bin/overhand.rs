//! Overhand shuffle interpreter.
//!
//! Reads commands from stdin, one per line, and prints results to stdout.
//! Set `RUST_LOG=debug` to see engine activity on stderr.
//!
//! Options: --seed, --break-probability, --size

use clap::Parser;
use overhand::{DeckEngine, EngineConfig, Interpreter};

#[derive(Parser, Debug)]
#[command(name = "overhand", about = "Overhand shuffle engine driven by text commands")]
struct Args {
    /// Seed for random shuffles (drawn from OS entropy when omitted).
    #[arg(long)]
    seed: Option<u64>,

    /// Per-card chance of closing a block during a random shuffle.
    #[arg(long, default_value_t = overhand::core::DEFAULT_BREAK_PROBABILITY)]
    break_probability: f64,

    /// Size of the ordered deck to start with.
    #[arg(long, default_value_t = 0)]
    size: usize,
}

impl Args {
    fn config(&self) -> EngineConfig {
        let config = EngineConfig::default()
            .with_break_probability(self.break_probability)
            .with_initial_size(self.size);
        match self.seed {
            Some(seed) => config.with_seed(seed),
            None => config,
        }
    }
}

fn main() -> anyhow::Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let config = Args::parse().config();
    let engine = DeckEngine::from_config(&config).map_err(|e| {
        log::error!("invalid configuration: {}", e);
        e
    })?;
    log::info!(
        "starting with {} cards, break probability {}, seed {}",
        engine.len(),
        engine.break_probability(),
        engine.rng().seed()
    );

    let stdin = std::io::stdin();
    let stdout = std::io::stdout();
    Interpreter::new(engine).run(stdin.lock(), &mut stdout.lock())?;
    Ok(())
}
