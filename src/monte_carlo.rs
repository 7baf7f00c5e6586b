//! The sampling kernel: one worker's share of the Monte Carlo run.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Work handed to a single sampler.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SampleJob {
    /// Number of points to draw. Must be positive.
    pub iteration_count: u64,

    /// Side length of the square field. Must be positive.
    pub field_size: f64,
}

impl SampleJob {
    pub fn new(iteration_count: u64, field_size: f64) -> Self {
        Self {
            iteration_count,
            field_size,
        }
    }
}

/// Number of points that landed inside the circle for one job.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Default)]
pub struct SampleResult {
    pub hits: u64,
}

impl From<u64> for SampleResult {
    fn from(hits: u64) -> Self {
        Self { hits }
    }
}

/// Where each worker's generator gets its seed from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SeedSource {
    /// Every worker seeds from the operating system's entropy source.
    #[default]
    Entropy,

    /// Worker `i` derives its seed from the base value and its index.
    Fixed(u64),
}

impl SeedSource {
    /// Build the generator owned exclusively by `worker`.
    pub fn rng_for(&self, worker: usize) -> StdRng {
        match *self {
            SeedSource::Entropy => StdRng::from_entropy(),
            SeedSource::Fixed(base) => {
                let seed = base.wrapping_add((worker as u64).wrapping_mul(67890));
                StdRng::seed_from_u64(seed)
            }
        }
    }
}

/// Draw `job.iteration_count` points and count the ones inside the circle.
///
/// Points come from the unit square `[0, 1)²`; the circle has radius
/// `field_size / 2` and is centred at `(field_size / 2, field_size / 2)`.
/// Callers guarantee `iteration_count > 0` and `0 < field_size <= 1`.
pub fn run<R: Rng + ?Sized>(job: &SampleJob, rng: &mut R) -> SampleResult {
    let r = job.field_size / 2.0;
    let r2 = r * r;
    let mut inside = 0;

    for _ in 0..job.iteration_count {
        let x: f64 = rng.gen();
        let y: f64 = rng.gen();

        let dx = x - r;
        let dy = y - r;
        if dx * dx + dy * dy <= r2 {
            inside += 1;
        }
    }

    SampleResult { hits: inside }
}
