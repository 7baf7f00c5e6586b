//! Tests for the coordinator

use std::f64::consts::PI;

use rand::Rng;

use super::*;

const EPSILON: f64 = 1e-12;

fn hits(counts: &[u64]) -> Vec<SampleResult> {
    counts.iter().copied().map(SampleResult::from).collect()
}

fn failing_sampler(_: &SampleJob, _: &mut StdRng) -> SampleResult {
    panic!("sampler failed");
}

// ============================================================================
// Aggregation
// ============================================================================

#[test]
fn aggregate_sums_hits_and_iterations() {
    let result = aggregate(hits(&[3, 4, 5]), 3, 10, 1.0);

    assert_eq!(result.total_iterations, 30);
    assert_eq!(result.total_hits, 12);
    assert!((result.ratio - 0.4).abs() < EPSILON);
    assert!((result.pi_estimate - 1.6).abs() < EPSILON);
}

#[test]
fn aggregate_unit_field_is_four_times_ratio() {
    let result = aggregate(hits(&[785, 790]), 2, 1_000, 1.0);
    assert!((result.pi_estimate - 4.0 * result.ratio).abs() < EPSILON);
}

#[test]
fn aggregate_scales_by_field_radius() {
    let result = aggregate(hits(&[20]), 1, 100, 0.5);
    let r = 0.25;
    assert!((result.ratio - 0.2).abs() < EPSILON);
    assert!((result.pi_estimate - result.ratio / (r * r)).abs() < EPSILON);
}

#[test]
fn aggregate_ignores_result_order() {
    let forward = aggregate(hits(&[1, 7, 3, 9, 0]), 5, 10, 1.0);
    let reversed = aggregate(hits(&[0, 9, 3, 7, 1]), 5, 10, 1.0);
    let shuffled = aggregate(hits(&[9, 0, 1, 3, 7]), 5, 10, 1.0);

    assert_eq!(forward, reversed);
    assert_eq!(forward, shuffled);
}

#[test]
fn aggregate_single_iteration_does_not_divide_by_zero() {
    for count in [0, 1] {
        let result = aggregate(hits(&[count]), 1, 1, 1.0);
        assert_eq!(result.total_iterations, 1);
        assert!(result.ratio.is_finite());
        assert!(result.pi_estimate.is_finite());
    }
}

#[test]
fn aggregate_zero_field_size_is_not_finite() {
    // A zero field is a caller error; the estimate degenerates instead of
    // failing loudly.
    assert!(aggregate(hits(&[0]), 1, 10, 0.0).pi_estimate.is_nan());
    assert!(aggregate(hits(&[1]), 1, 10, 0.0).pi_estimate.is_infinite());
}

#[test]
fn aggregate_saturates_instead_of_overflowing() {
    let result = aggregate(hits(&[0]), usize::MAX, u64::MAX, 1.0);
    assert_eq!(result.total_iterations, u64::MAX);
    assert_eq!(result.total_hits, 0);
}

// ============================================================================
// Thread executor
// ============================================================================

#[test]
fn run_rejects_unbounded_worker_count() {
    let err = run(usize::MAX, 1, 1.0).unwrap_err();
    assert!(matches!(
        err,
        Error::Config(ConfigError::TooManyWorkers(usize::MAX))
    ));
}

#[test]
fn run_rejects_overflowing_total() {
    let err = run(2, u64::MAX, 1.0).unwrap_err();
    assert!(matches!(
        err,
        Error::Config(ConfigError::TooManyIterations { .. })
    ));
}

#[test]
fn estimate_rejects_unbounded_worker_count_before_spawning() {
    for executor in [ExecutorKind::Threads, ExecutorKind::Tasks] {
        let config = EstimateConfig::new(usize::MAX, 1).with_executor(executor);
        let err = estimate(&config).unwrap_err();
        assert!(matches!(
            err,
            Error::Config(ConfigError::TooManyWorkers(usize::MAX))
        ));
    }
}

#[test]
fn panicking_worker_thread_aborts_the_run() {
    let job = SampleJob::new(10, 1.0);
    let outcome = threads::run_workers(job, 3, SeedSource::Fixed(1), failing_sampler);
    assert!(matches!(outcome, Err(Error::WorkerPanicked { worker: 0 })));
}

#[test]
fn one_failing_worker_discards_the_others() {
    let seeds = SeedSource::Fixed(21);
    let doomed: u64 = seeds.rng_for(2).gen();
    let job = SampleJob::new(1_000, 1.0);

    let outcome = threads::run_workers(job, 4, seeds, move |job, rng| {
        if rng.clone().gen::<u64>() == doomed {
            panic!("worker 2 failed");
        }
        monte_carlo::run(job, rng)
    });

    assert!(matches!(outcome, Err(Error::WorkerPanicked { worker: 2 })));
}

#[test]
fn estimate_produces_no_aggregate_when_a_worker_panics() {
    let config = EstimateConfig::new(4, 100);
    let outcome = estimate_with(&config, failing_sampler);
    assert!(matches!(outcome, Err(Error::WorkerPanicked { .. })));
}

#[test]
fn run_respects_hit_bounds() {
    for (jobs, iterations) in [(1, 1), (2, 17), (4, 1_000), (16, 250)] {
        let result = run(jobs, iterations, 1.0).unwrap();
        assert_eq!(result.total_iterations, jobs as u64 * iterations);
        assert!(result.total_hits <= result.total_iterations);
        assert!((0.0..=1.0).contains(&result.ratio));
    }
}

#[test]
fn run_single_job_single_iteration() {
    let result = run(1, 1, 1.0).unwrap();
    assert!(result.total_hits == 0 || result.total_hits == 1);
    assert!(result.pi_estimate == 0.0 || result.pi_estimate == 4.0);
}

#[test]
fn estimate_is_close_to_pi() {
    // Soft check: the standard error at 800k samples is about 0.002, so a
    // 0.05 window only fails on a wildly unlucky run.
    let config = EstimateConfig::new(8, 100_000);
    let estimate = estimate(&config).unwrap();
    assert!(
        (estimate.aggregate.pi_estimate - PI).abs() < 0.05,
        "estimate {} too far from pi",
        estimate.aggregate.pi_estimate
    );
}

#[test]
fn estimate_with_fixed_seed_is_repeatable() {
    let config = EstimateConfig::new(4, 5_000).with_seed(12345);
    let first = estimate(&config).unwrap();
    let second = estimate(&config).unwrap();
    assert_eq!(first.aggregate, second.aggregate);
}

#[test]
fn estimate_rejects_invalid_config() {
    let err = estimate(&EstimateConfig::new(0, 10)).unwrap_err();
    assert!(matches!(err, Error::Config(ConfigError::NoWorkers)));

    let err = estimate(&EstimateConfig::new(2, 10).with_field_size(0.0)).unwrap_err();
    assert!(matches!(err, Error::Config(ConfigError::InvalidFieldSize(_))));
}

// ============================================================================
// Task executor
// ============================================================================

#[test]
fn estimate_with_tasks_builds_its_own_runtime() {
    let config = EstimateConfig::new(3, 2_000).with_executor(ExecutorKind::Tasks);
    let estimate = estimate(&config).unwrap();
    assert_eq!(estimate.aggregate.total_iterations, 6_000);
    assert!(estimate.aggregate.total_hits <= 6_000);
}

#[tokio::test]
async fn estimate_async_respects_hit_bounds() {
    let config = EstimateConfig::new(5, 3_000);
    let estimate = estimate_async(&config).await.unwrap();

    assert_eq!(estimate.aggregate.total_iterations, 15_000);
    assert!(estimate.aggregate.total_hits <= 15_000);
    let expected = estimate.aggregate.total_hits as f64 / 15_000.0;
    assert!((estimate.aggregate.ratio - expected).abs() < EPSILON);
}

#[tokio::test]
async fn executors_agree_on_fixed_seed() {
    let config = EstimateConfig::new(4, 4_000).with_seed(7);
    let from_tasks = estimate_async(&config).await.unwrap();

    let threaded = config.clone();
    let from_threads = tokio::task::spawn_blocking(move || estimate(&threaded))
        .await
        .unwrap()
        .unwrap();

    assert_eq!(from_tasks.aggregate, from_threads.aggregate);
}

#[test]
fn failed_task_run_returns_without_waiting_for_other_tasks() {
    let doomed: u64 = SeedSource::Fixed(33).rng_for(0).gen();
    let config = EstimateConfig::new(3, 10)
        .with_executor(ExecutorKind::Tasks)
        .with_seed(33);

    let started = Instant::now();
    let outcome = estimate_with(&config, move |job, rng| {
        if rng.clone().gen::<u64>() == doomed {
            panic!("first task failed");
        }
        std::thread::sleep(Duration::from_secs(5));
        monte_carlo::run(job, rng)
    });

    assert!(matches!(outcome, Err(Error::WorkerPanicked { worker: 0 })));
    assert!(
        started.elapsed() < Duration::from_secs(4),
        "error took {:?} to surface",
        started.elapsed()
    );
}

#[tokio::test]
async fn panicking_task_aborts_async_estimate() {
    let config = EstimateConfig::new(4, 100);
    let outcome = estimate_async_with(&config, failing_sampler).await;
    assert!(matches!(outcome, Err(Error::WorkerPanicked { worker: 0 })));
}

#[tokio::test]
async fn panicking_task_aborts_the_batch() {
    let job = SampleJob::new(10, 1.0);
    let outcome = tasks::run_workers(job, 2, SeedSource::Entropy, failing_sampler).await;
    assert!(matches!(outcome, Err(Error::WorkerPanicked { worker: 0 })));
}

#[tokio::test]
async fn estimate_async_rejects_invalid_config() {
    let err = estimate_async(&EstimateConfig::new(1, 0)).await.unwrap_err();
    assert!(matches!(err, Error::Config(ConfigError::NoIterations)));
}
