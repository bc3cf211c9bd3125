#![forbid(unsafe_code)]
#![deny(warnings)]
#![warn(clippy::pedantic)]

use anyhow::{bail, Context, Result as AnyResult};
use tokio::task::JoinSet;
use tracing::info;

use crate::domain::{RunConfig, WorkerOutcome, WorkloadSpec};
use crate::failure::FailureSampler;
use crate::validation::validate_config;
use crate::worker::run_worker;

pub struct RunController {
    specs: Vec<WorkloadSpec>,
}

#[derive(Clone, Copy, Debug)]
pub struct RunReport {
    pub workers: u32,
    pub allocated_bytes: u64,
}

impl RunController {
    pub fn from_config(cfg: &RunConfig) -> AnyResult<Self> {
        validate_config(cfg)?;
        Ok(Self {
            specs: cfg.build_specs()?,
        })
    }

    pub fn with_specs(specs: Vec<WorkloadSpec>) -> Self {
        Self { specs }
    }

    pub fn specs(&self) -> &[WorkloadSpec] {
        &self.specs
    }

    // Every worker gets its own blocking thread and its own sampler. The
    // first observed crash aborts the whole run without waiting for the rest.
    pub async fn run<S, F>(self, make_sampler: F) -> AnyResult<RunReport>
    where
        S: FailureSampler,
        F: Fn() -> S,
    {
        let mut join_set = JoinSet::new();
        for spec in self.specs {
            let mut sampler = make_sampler();
            join_set.spawn_blocking(move || run_worker(&spec, &mut sampler));
        }

        let mut workers = 0_u32;
        let mut allocated_bytes = 0_u64;
        while let Some(joined) = join_set.join_next().await {
            let outcome = joined.context("could not join worker thread")??;
            match outcome {
                WorkerOutcome::Completed {
                    allocated_bytes: bytes,
                } => {
                    workers += 1;
                    allocated_bytes += bytes;
                }
                WorkerOutcome::Crashed { at_us } => {
                    // One dead worker takes the whole run down with it.
                    bail!("worker crashed {at_us}us into the run");
                }
            }
        }

        info!(workers, allocated = allocated_bytes, "all workers finished");
        Ok(RunReport {
            workers,
            allocated_bytes,
        })
    }
}
