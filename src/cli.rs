//! Command-line arguments

use std::io::{BufRead, Write};

use clap::Parser;

use crate::config::{EstimateConfig, ExecutorKind, MAX_FIELD_SIZE};
use crate::error::Result;
use crate::prompt::Prompter;

#[derive(Debug, Parser)]
#[command(name = "monte_carlo_pi")]
#[command(author, version, about = "Estimate pi by Monte Carlo sampling across parallel workers", long_about = None)]
pub struct Cli {
    /// Number of parallel workers (prompted for when omitted)
    #[arg(short, long)]
    pub workers: Option<usize>,

    /// Points sampled by each worker (prompted for when omitted)
    #[arg(short, long)]
    pub iterations: Option<u64>,

    /// Side length of the square field, in (0, 1]
    #[arg(short = 's', long, default_value_t = MAX_FIELD_SIZE)]
    pub field_size: f64,

    /// Execution back end
    #[arg(short, long, value_enum, default_value_t = ExecutorKind::Threads)]
    pub executor: ExecutorKind,

    /// Seed the worker generators from this value instead of OS entropy
    #[arg(long)]
    pub seed: Option<u64>,

    /// Enable debug logging
    #[arg(short, long)]
    pub verbose: bool,
}

impl Cli {
    /// Build the run configuration, asking for any count not given as a flag.
    pub fn resolve<R: BufRead, W: Write>(
        &self,
        prompter: &mut Prompter<R, W>,
    ) -> Result<EstimateConfig> {
        let workers = match self.workers {
            Some(workers) => workers,
            None => prompter.worker_count()?,
        };
        let iterations = match self.iterations {
            Some(iterations) => iterations,
            None => prompter.iterations_per_worker()?,
        };

        let mut config = EstimateConfig::new(workers, iterations)
            .with_field_size(self.field_size)
            .with_executor(self.executor);
        if let Some(seed) = self.seed {
            config = config.with_seed(seed);
        }

        config.validate()?;
        Ok(config)
    }
}
