// Bank Ledger - CLI driver
// Reads a ledger document, builds the model, runs the three queries, prints the report

use anyhow::{Context, Result};
use bank_ledger::{
    load_ledger, AggregationEngine, Config, InputFormat, LedgerReport, OutputFormat,
    DEFAULT_TOP_MANAGERS,
};
use clap::Parser;
use std::path::PathBuf;
use tracing::info;
use tracing_subscriber::EnvFilter;

/// Report the top client, top managers and average active deposit of a bank ledger
#[derive(Parser, Debug)]
#[command(name = "bank-ledger", version)]
struct Args {
    /// Ledger document to read
    #[arg(env = "BANK_LEDGER_INPUT", default_value = bank_ledger::config::DEFAULT_INPUT)]
    input: PathBuf,

    /// How to read the input
    #[arg(long, value_enum, default_value_t = InputFormat::Auto)]
    format: InputFormat,

    /// How to print the report
    #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
    output: OutputFormat,

    /// Number of managers in the closed-actions ranking
    #[arg(long, env = "BANK_LEDGER_TOP", default_value_t = DEFAULT_TOP_MANAGERS)]
    top: usize,

    /// Log progress to stderr (same as RUST_LOG=info)
    #[arg(short, long)]
    verbose: bool,
}

impl Args {
    fn into_config(self) -> Config {
        Config {
            input: self.input,
            input_format: self.format,
            output_format: self.output,
            top_managers: self.top,
        }
    }
}

fn main() -> Result<()> {
    let args = Args::parse();
    init_tracing(args.verbose);

    let config = args.into_config();
    config.validate()?;

    run(&config)
}

fn init_tracing(verbose: bool) {
    let default_level = if verbose { "info" } else { "warn" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn run(config: &Config) -> Result<()> {
    let ledger = load_ledger(&config.input, config.input_format)?;

    let engine = AggregationEngine::with_limit(config.top_managers);
    let report = LedgerReport::generate(&engine, &ledger)
        .with_context(|| format!("Cannot report on {}", config.input.display()))?;

    info!("{}", report.summary());

    match config.output_format {
        OutputFormat::Text => print!("{}", report.render_text()),
        OutputFormat::Json => println!("{}", report.to_json()?),
    }

    Ok(())
}
