//! Fan-out of sampling jobs across workers and fan-in of their results
//!
//! Each worker owns its generator and its counter; the only synchronization
//! is the join barrier before [`aggregate`] runs.

mod aggregator;
mod tasks;
mod threads;

#[cfg(test)]
mod tests;

use std::time::{Duration, Instant};

use rand::rngs::StdRng;
use tracing::info;

use crate::config::{ConfigError, EstimateConfig, ExecutorKind, MAX_WORKERS};
use crate::error::{Error, Result};
use crate::monte_carlo::{self, SampleJob, SampleResult, SeedSource};

pub use aggregator::{aggregate, AggregateResult};

/// Aggregate of a finished run plus how long it took
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Estimate {
    pub aggregate: AggregateResult,
    pub elapsed: Duration,
}

/// Run `job_count` samplers on OS threads and aggregate their hits.
///
/// Callers guarantee `job_count >= 1`, `iterations_per_job >= 1` and
/// `field_size > 0`; use [`estimate`] for a validated run. Worker counts
/// above [`MAX_WORKERS`] and totals that overflow `u64` are rejected.
pub fn run(job_count: usize, iterations_per_job: u64, field_size: f64) -> Result<AggregateResult> {
    if job_count > MAX_WORKERS {
        return Err(ConfigError::TooManyWorkers(job_count).into());
    }
    if (job_count as u64).checked_mul(iterations_per_job).is_none() {
        return Err(ConfigError::TooManyIterations {
            workers: job_count,
            iterations: iterations_per_job,
        }
        .into());
    }

    let job = SampleJob::new(iterations_per_job, field_size);
    let results = threads::run_workers(
        job,
        job_count,
        SeedSource::Entropy,
        monte_carlo::run::<StdRng>,
    )?;
    Ok(aggregate(results, job_count, iterations_per_job, field_size))
}

/// Validate `config` and run it with the configured executor, blocking
/// until every worker is done.
///
/// With [`ExecutorKind::Tasks`] this builds its own tokio runtime, so it must
/// not be called from inside one; use [`estimate_async`] there.
pub fn estimate(config: &EstimateConfig) -> Result<Estimate> {
    estimate_with(config, monte_carlo::run::<StdRng>)
}

/// Validate `config` and run it on the current tokio runtime's blocking pool.
///
/// The configured executor is ignored; this always uses tokio tasks.
pub async fn estimate_async(config: &EstimateConfig) -> Result<Estimate> {
    estimate_async_with(config, monte_carlo::run::<StdRng>).await
}

pub(crate) fn estimate_with<F>(config: &EstimateConfig, sampler: F) -> Result<Estimate>
where
    F: Fn(&SampleJob, &mut StdRng) -> SampleResult + Copy + Send + 'static,
{
    config.validate()?;

    match config.executor {
        ExecutorKind::Threads => {
            let started = Instant::now();
            log_start(config);
            let results =
                threads::run_workers(job_for(config), config.workers, config.seeds, sampler)?;
            Ok(finish(config, results, started))
        }
        ExecutorKind::Tasks => {
            let runtime = tokio::runtime::Builder::new_multi_thread()
                .enable_all()
                .build()
                .map_err(Error::Runtime)?;
            let outcome = runtime.block_on(estimate_async_with(config, sampler));
            if outcome.is_err() {
                // Dropping the runtime would wait for the surviving workers.
                runtime.shutdown_background();
            }
            outcome
        }
    }
}

pub(crate) async fn estimate_async_with<F>(config: &EstimateConfig, sampler: F) -> Result<Estimate>
where
    F: Fn(&SampleJob, &mut StdRng) -> SampleResult + Copy + Send + 'static,
{
    config.validate()?;

    let started = Instant::now();
    log_start(config);
    let results =
        tasks::run_workers(job_for(config), config.workers, config.seeds, sampler).await?;
    Ok(finish(config, results, started))
}

fn job_for(config: &EstimateConfig) -> SampleJob {
    SampleJob::new(config.iterations_per_worker, config.field_size)
}

fn log_start(config: &EstimateConfig) {
    info!(
        workers = config.workers,
        iterations_per_worker = config.iterations_per_worker,
        field_size = config.field_size,
        executor = %config.executor,
        "starting estimation"
    );
}

fn finish(
    config: &EstimateConfig,
    results: Vec<SampleResult>,
    started: Instant,
) -> Estimate {
    let aggregate = aggregate(
        results,
        config.workers,
        config.iterations_per_worker,
        config.field_size,
    );
    let elapsed = started.elapsed();

    info!(
        total_hits = aggregate.total_hits,
        pi_estimate = aggregate.pi_estimate,
        elapsed_ms = elapsed.as_millis() as u64,
        "estimation finished"
    );

    Estimate { aggregate, elapsed }
}
