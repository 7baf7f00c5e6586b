//! Fan-in of per-worker hit counts

use crate::monte_carlo::SampleResult;

/// Combined outcome of every worker in a run
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct AggregateResult {
    /// Points sampled across all workers
    pub total_iterations: u64,

    /// Points that landed inside the circle
    pub total_hits: u64,

    /// `total_hits / total_iterations`
    pub ratio: f64,

    /// `ratio / (field_size / 2)²`
    pub pi_estimate: f64,
}

/// Sum worker results into the final estimate.
///
/// The result depends only on the multiset of hit counts, never on the
/// order in which workers finished. `field_size` must be positive; zero
/// yields a non-finite `pi_estimate`. A total beyond `u64::MAX` saturates.
pub fn aggregate<I>(
    results: I,
    job_count: usize,
    iterations_per_job: u64,
    field_size: f64,
) -> AggregateResult
where
    I: IntoIterator<Item = SampleResult>,
{
    let total_iterations = (job_count as u64).saturating_mul(iterations_per_job);
    let total_hits: u64 = results.into_iter().map(|r| r.hits).sum();
    debug_assert!(total_hits <= total_iterations);

    let ratio = total_hits as f64 / total_iterations as f64;
    let r = field_size / 2.0;
    let pi_estimate = ratio / (r * r);

    AggregateResult {
        total_iterations,
        total_hits,
        ratio,
        pi_estimate,
    }
}
