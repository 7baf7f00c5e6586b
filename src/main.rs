use std::io;

use anyhow::Result;
use clap::Parser;
use monte_carlo_pi::cli::Cli;
use monte_carlo_pi::prompt::Prompter;
use monte_carlo_pi::{estimate, report};
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    let cli = Cli::parse();

    let default_level = if cli.verbose { "debug" } else { "info" };
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level)),
        )
        .with_writer(io::stderr)
        .init();

    let stdin = io::stdin();
    let mut prompter = Prompter::new(stdin.lock(), io::stdout());
    let config = cli.resolve(&mut prompter)?;

    let estimate = estimate(&config)?;

    let mut stdout = io::stdout().lock();
    report::render(&mut stdout, &estimate)?;

    Ok(())
}
