#![forbid(unsafe_code)]
#![deny(warnings)]
#![warn(clippy::pedantic)]

use anyhow::{bail, Result as AnyResult};

pub const BYTES_PER_MEGABYTE: u64 = 1024 * 1024;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct WorkloadSpec {
    pub id: u32,
    pub target_load: f64,
    pub target_memory_bytes: u64,
    pub duration_ms: u64,
    pub failure_threshold: f64,
}

impl WorkloadSpec {
    pub fn new(
        id: u32,
        target_load: f64,
        target_memory_bytes: u64,
        duration_ms: u64,
        failure_threshold: f64,
    ) -> AnyResult<Self> {
        if !(0.0..=1.0).contains(&target_load) {
            bail!("target_load must be within 0.0..=1.0");
        }
        if duration_ms == 0 {
            bail!("duration_ms must be > 0");
        }
        if !(0.0..=1.0).contains(&failure_threshold) {
            bail!("failure_threshold must be within 0.0..=1.0");
        }
        Ok(Self {
            id,
            target_load,
            target_memory_bytes,
            duration_ms,
            failure_threshold,
        })
    }
}

#[derive(Clone, Copy, Debug)]
pub struct RunConfig {
    pub duration_ms: u64,
    pub workers: u32,
    pub target_load: f64,
    pub memory_mb: u64,
    pub failure_threshold: f64,
}

impl RunConfig {
    pub fn build_specs(&self) -> AnyResult<Vec<WorkloadSpec>> {
        if self.workers == 0 {
            bail!("workers must be > 0");
        }
        // one spec per worker, aggregate footprint split by integer division
        let total_bytes = self.memory_mb.saturating_mul(BYTES_PER_MEGABYTE);
        let share = total_bytes / u64::from(self.workers);
        (0..self.workers)
            .map(|id| {
                WorkloadSpec::new(
                    id,
                    self.target_load,
                    share,
                    self.duration_ms,
                    self.failure_threshold,
                )
            })
            .collect()
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum WorkerOutcome {
    Completed { allocated_bytes: u64 },
    Crashed { at_us: i64 },
}
