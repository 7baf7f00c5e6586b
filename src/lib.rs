//! Monte Carlo estimation of π across parallel workers
//!
//! Each worker samples points in the unit square and counts the ones that
//! land inside the inscribed circle; the coordinator sums the counts and
//! turns the hit ratio into an estimate.
//!
//! ```no_run
//! use monte_carlo_pi::{estimate, EstimateConfig};
//!
//! let result = estimate(&EstimateConfig::new(8, 100_000))?;
//! println!("pi is roughly {}", result.aggregate.pi_estimate);
//! # Ok::<(), monte_carlo_pi::Error>(())
//! ```

pub mod cli;
pub mod config;
pub mod coordinator;
pub mod error;
pub mod monte_carlo;
pub mod prompt;
pub mod report;

pub use config::{ConfigError, EstimateConfig, ExecutorKind};
pub use coordinator::{aggregate, estimate, estimate_async, AggregateResult, Estimate};
pub use error::{Error, Result};
pub use monte_carlo::{SampleJob, SampleResult, SeedSource};
