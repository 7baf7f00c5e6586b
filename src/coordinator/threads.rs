//! Thread-per-worker execution with a manual join barrier

use std::thread;

use rand::rngs::StdRng;
use tracing::{debug, error};

use crate::error::{Error, Result};
use crate::monte_carlo::{SampleJob, SampleResult, SeedSource};

/// Run `workers` copies of `job` through `sampler`, each on its own OS
/// thread, and join them all.
///
/// The first worker that cannot be spawned or that panics aborts the run.
pub(crate) fn run_workers<F>(
    job: SampleJob,
    workers: usize,
    seeds: SeedSource,
    sampler: F,
) -> Result<Vec<SampleResult>>
where
    F: Fn(&SampleJob, &mut StdRng) -> SampleResult + Copy + Send + 'static,
{
    let mut handles = Vec::new();

    for worker_id in 0..workers {
        let handle = thread::Builder::new()
            .name(format!("sampler-{worker_id}"))
            .spawn(move || {
                let mut rng = seeds.rng_for(worker_id);
                let result = sampler(&job, &mut rng);
                debug!(worker = worker_id, hits = result.hits, "worker finished");
                result
            })
            .map_err(|source| {
                error!(worker = worker_id, %source, "failed to spawn worker thread");
                Error::Spawn {
                    worker: worker_id,
                    source,
                }
            })?;

        handles.push(handle);
    }

    let mut results = Vec::new();
    for (worker_id, handle) in handles.into_iter().enumerate() {
        let result = handle.join().map_err(|_| {
            error!(worker = worker_id, "worker thread panicked");
            Error::WorkerPanicked { worker: worker_id }
        })?;
        results.push(result);
    }

    Ok(results)
}
