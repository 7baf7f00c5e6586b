//! Run configuration

use std::fmt;

use clap::ValueEnum;
use thiserror::Error;

use crate::monte_carlo::SeedSource;

/// Largest field that still keeps the circle inside the unit sampling square.
pub const MAX_FIELD_SIZE: f64 = 1.0;

/// Upper bound on workers; each one is a thread or a blocking task.
pub const MAX_WORKERS: usize = 10_000;

/// Execution back end used to run the workers
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum ExecutorKind {
    /// One OS thread per worker, joined manually
    #[default]
    Threads,

    /// One tokio blocking task per worker, awaited as a batch
    Tasks,
}

impl fmt::Display for ExecutorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ExecutorKind::Threads => f.write_str("threads"),
            ExecutorKind::Tasks => f.write_str("tasks"),
        }
    }
}

/// Configuration errors
#[derive(Debug, Error, PartialEq)]
pub enum ConfigError {
    #[error("worker count must be at least 1")]
    NoWorkers,

    #[error("{0} workers exceeds the limit of {max}", max = MAX_WORKERS)]
    TooManyWorkers(usize),

    #[error("iterations per worker must be at least 1")]
    NoIterations,

    #[error("field size must be a finite value in (0, {max}], got {0}", max = MAX_FIELD_SIZE)]
    InvalidFieldSize(f64),

    #[error("{workers} workers x {iterations} iterations overflows the iteration counter")]
    TooManyIterations { workers: usize, iterations: u64 },
}

/// Everything a single estimation run needs
///
/// Worker count and iterations per worker are the only values a user has to
/// supply; everything else has a default.
#[derive(Debug, Clone, PartialEq)]
pub struct EstimateConfig {
    /// Number of independent workers
    pub workers: usize,

    /// Points sampled by each worker
    pub iterations_per_worker: u64,

    /// Side length of the square field
    pub field_size: f64,

    /// How the workers are executed
    pub executor: ExecutorKind,

    /// Seed strategy for the per-worker generators
    pub seeds: SeedSource,
}

impl EstimateConfig {
    /// Create a config with the default field, executor and seeding
    pub fn new(workers: usize, iterations_per_worker: u64) -> Self {
        Self {
            workers,
            iterations_per_worker,
            field_size: MAX_FIELD_SIZE,
            executor: ExecutorKind::default(),
            seeds: SeedSource::default(),
        }
    }

    pub fn with_field_size(mut self, field_size: f64) -> Self {
        self.field_size = field_size;
        self
    }

    pub fn with_executor(mut self, executor: ExecutorKind) -> Self {
        self.executor = executor;
        self
    }

    /// Seed worker generators from `base` instead of OS entropy
    pub fn with_seed(mut self, base: u64) -> Self {
        self.seeds = SeedSource::Fixed(base);
        self
    }

    /// Total number of points across all workers, if it fits in a `u64`
    pub fn total_iterations(&self) -> Option<u64> {
        (self.workers as u64).checked_mul(self.iterations_per_worker)
    }

    /// Validate the configuration
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.workers == 0 {
            return Err(ConfigError::NoWorkers);
        }

        if self.workers > MAX_WORKERS {
            return Err(ConfigError::TooManyWorkers(self.workers));
        }

        if self.iterations_per_worker == 0 {
            return Err(ConfigError::NoIterations);
        }

        if !self.field_size.is_finite()
            || self.field_size <= 0.0
            || self.field_size > MAX_FIELD_SIZE
        {
            return Err(ConfigError::InvalidFieldSize(self.field_size));
        }

        if self.total_iterations().is_none() {
            return Err(ConfigError::TooManyIterations {
                workers: self.workers,
                iterations: self.iterations_per_worker,
            });
        }

        Ok(())
    }
}
