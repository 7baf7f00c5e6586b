//! Tokio execution: one blocking task per worker

use rand::rngs::StdRng;
use tokio::task;
use tracing::{debug, error};

use crate::error::{Error, Result};
use crate::monte_carlo::{SampleJob, SampleResult, SeedSource};

/// Run `workers` copies of `job` through `sampler` on the blocking pool and
/// await them all.
///
/// The sampling loop is CPU-bound, so it goes through `spawn_blocking`
/// rather than occupying the async worker threads. A failed task returns
/// immediately; tasks still running are left to the runtime.
pub(crate) async fn run_workers<F>(
    job: SampleJob,
    workers: usize,
    seeds: SeedSource,
    sampler: F,
) -> Result<Vec<SampleResult>>
where
    F: Fn(&SampleJob, &mut StdRng) -> SampleResult + Copy + Send + 'static,
{
    let mut handles = Vec::new();

    for task_id in 0..workers {
        let handle = task::spawn_blocking(move || {
            let mut rng = seeds.rng_for(task_id);
            let result = sampler(&job, &mut rng);
            debug!(worker = task_id, hits = result.hits, "task finished");
            result
        });

        handles.push(handle);
    }

    let mut results = Vec::new();
    for (task_id, handle) in handles.into_iter().enumerate() {
        let result = handle.await.map_err(|err| {
            error!(worker = task_id, %err, "sampling task failed");
            Error::WorkerPanicked { worker: task_id }
        })?;
        results.push(result);
    }

    Ok(results)
}
