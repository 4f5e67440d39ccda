use clap::Parser;
use eyre::{Context, Result};
use log::{debug, info};

mod cli;
mod config;

use cli::{Cli, Commands};
use config::Config;
use stepseq::euler::{longest_chain_under, sum_word_lengths};
use stepseq::{range, take};

fn setup_logging(cli: &Cli, config: &Config) {
    let level = if cli.verbose {
        "debug"
    } else {
        config.log_level.as_deref().unwrap_or("warn")
    };

    // RUST_LOG wins over both
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(level)).init();
}

fn run_application(command: &Commands, config: &Config) -> Result<String> {
    match command {
        Commands::Range {
            start,
            step,
            stop,
            count,
        } => {
            let start = start.unwrap_or(config.range.start);
            let step = step.unwrap_or(config.range.step);
            let stop = stop.unwrap_or(config.range.stop);
            let count = count.unwrap_or(config.range.count);
            info!("Taking {count} values from range({start}, {step}, {stop})");

            let values = take(count, range(start, step, stop));
            debug!("Range produced {} of {count} requested values", values.len());
            Ok(format!("{values:?}"))
        }
        Commands::Collatz { limit } => {
            let limit = limit.unwrap_or(config.collatz.limit);
            info!("Searching for the longest Collatz chain under {limit}");

            let start = longest_chain_under(limit).context("Collatz search failed")?;
            Ok(start.to_string())
        }
        Commands::Words { upto } => {
            let upto = upto.unwrap_or(config.words.upto);
            info!("Summing letters used spelling 1..={upto}");

            let total = sum_word_lengths(upto).context("Spelling failed")?;
            Ok(total.to_string())
        }
    }
}

fn main() -> Result<()> {
    // Parse CLI arguments
    let cli = Cli::parse();

    // Load configuration
    let loaded = Config::load(cli.config.as_ref()).context("Failed to load configuration")?;
    let config = &loaded.config;

    setup_logging(&cli, config);
    loaded.log();
    info!("Starting with config from: {:?}", cli.config);

    let output = run_application(&cli.command, config).context("Application failed")?;
    println!("{output}");

    Ok(())
}
