#![forbid(unsafe_code)]
#![deny(warnings)]
#![warn(clippy::pedantic)]

use std::thread;
use std::time::Duration;

use anyhow::Result as AnyResult;
use tracing::{error, info};

use crate::clock::Clock;
use crate::domain::{WorkerOutcome, WorkloadSpec};
use crate::failure::FailureSampler;
use crate::lib_cpu;
use crate::lib_mem::ChunkPacer;

// Runs one worker to its deadline or to its sampled crash instant. Blocking;
// meant for a dedicated thread. A cycle is busy work for `target_load` of the
// wall time and sleep for the rest, with the sleep recomputed every cycle
// from the measured busy cost.
pub fn run_worker<S: FailureSampler>(
    spec: &WorkloadSpec,
    sampler: &mut S,
) -> AnyResult<WorkerOutcome> {
    let clock = Clock::start();
    let start_us = clock.now_us();
    let duration_us = i64::try_from(spec.duration_ms)
        .unwrap_or(i64::MAX)
        .saturating_mul(1000);
    let deadline_us = start_us.saturating_add(duration_us);
    let plan = sampler.sample(spec.failure_threshold, start_us, deadline_us)?;
    let mut pacer = ChunkPacer::new(spec.target_memory_bytes);

    info!(
        worker = spec.id,
        bytes = spec.target_memory_bytes,
        "allocating bytes over duty cycles"
    );

    while clock.now_us() < deadline_us {
        let cycle_start_us = clock.now_us();
        if plan.due(cycle_start_us) {
            error!(worker = spec.id, at_us = cycle_start_us, "worker died");
            return Ok(WorkerOutcome::Crashed {
                at_us: cycle_start_us,
            });
        }
        if spec.target_load <= 0.0 {
            // Zero load degenerates to sleeping out the rest of the window.
            let left_us = (deadline_us - cycle_start_us).max(0);
            thread::sleep(Duration::from_micros(left_us as u64));
            continue;
        }
        lib_cpu::burn_unit();
        pacer.grab();
        let elapsed_us = (clock.now_us() - cycle_start_us).max(1);
        let stale_us = lib_cpu::sleep_share_us(elapsed_us, spec.target_load);
        if stale_us > 0 {
            thread::sleep(Duration::from_micros(stale_us));
        }
        pacer.repace(elapsed_us, deadline_us - clock.now_us());
    }

    info!(
        worker = spec.id,
        allocated = pacer.allocated_bytes(),
        "exiting"
    );
    Ok(WorkerOutcome::Completed {
        allocated_bytes: pacer.allocated_bytes(),
    })
}
