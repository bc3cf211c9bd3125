#![forbid(unsafe_code)]
#![deny(warnings)]
#![warn(clippy::pedantic)]

use anyhow::{Context, Result as AnyResult};
use rand::rngs::StdRng;
use rand::SeedableRng;
use rand_distr::{Distribution, Normal};

/// Crash decision for one worker, sampled once at worker start.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct FailurePlan {
    pub will_fail: bool,
    pub at_us: i64,
}

impl FailurePlan {
    pub fn none() -> Self {
        Self {
            will_fail: false,
            at_us: 0,
        }
    }

    pub fn due(&self, now_us: i64) -> bool {
        self.will_fail && now_us > self.at_us
    }
}

/// Seam for crash scheduling so tests can substitute a deterministic source.
pub trait FailureSampler: Send + 'static {
    fn sample(
        &mut self,
        failure_threshold: f64,
        start_us: i64,
        deadline_us: i64,
    ) -> AnyResult<FailurePlan>;
}

/// Production sampler backed by an OS-entropy RNG, seedable for repro runs.
pub struct EntropyFailure {
    rng: StdRng,
}

impl EntropyFailure {
    pub fn from_entropy() -> Self {
        Self {
            rng: StdRng::from_entropy(),
        }
    }

    pub fn with_seed(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }
}

impl FailureSampler for EntropyFailure {
    fn sample(
        &mut self,
        failure_threshold: f64,
        start_us: i64,
        deadline_us: i64,
    ) -> AnyResult<FailurePlan> {
        // Threshold 0 is the CLI default and means crash injection is off.
        if failure_threshold <= 0.0 {
            return Ok(FailurePlan::none());
        }
        let decision = Normal::new(0.5, 0.2).context("build decision distribution")?;
        let will_fail = decision.sample(&mut self.rng) > failure_threshold;
        if !will_fail {
            return Ok(FailurePlan::none());
        }
        // Instant centered on the window midpoint, spread of half the window.
        // Samples outside the window mean "never fires" or "fires at once"
        // and are kept as-is.
        let midpoint = (start_us + deadline_us) as f64 / 2.0;
        let spread = (deadline_us - start_us) as f64 / 2.0;
        let instant = Normal::new(midpoint, spread).context("build instant distribution")?;
        Ok(FailurePlan {
            will_fail: true,
            at_us: instant.sample(&mut self.rng) as i64,
        })
    }
}
