#![forbid(unsafe_code)]
#![deny(warnings)]
#![warn(clippy::pedantic)]

use std::time::{Duration, Instant};

use anyhow::Result as AnyResult;
use loadgen::domain::{WorkerOutcome, WorkloadSpec};
use loadgen::failure::{EntropyFailure, FailurePlan, FailureSampler};
use loadgen::worker::run_worker;

struct NeverCrash;

impl FailureSampler for NeverCrash {
    fn sample(&mut self, _threshold: f64, _start_us: i64, _deadline_us: i64) -> AnyResult<FailurePlan> {
        Ok(FailurePlan::none())
    }
}

struct CrashAtStart;

impl FailureSampler for CrashAtStart {
    fn sample(&mut self, _threshold: f64, _start_us: i64, _deadline_us: i64) -> AnyResult<FailurePlan> {
        Ok(FailurePlan {
            will_fail: true,
            at_us: -1,
        })
    }
}

#[test]
fn plan_due_semantics() {
    assert!(!FailurePlan::none().due(1_000_000));
    let plan = FailurePlan {
        will_fail: true,
        at_us: 10,
    };
    assert!(!plan.due(5));
    assert!(!plan.due(10));
    assert!(plan.due(11));
}

#[test]
fn threshold_zero_disables_injection() {
    let mut sampler = EntropyFailure::with_seed(7);
    let plan = sampler
        .sample(0.0, 0, 1_000_000)
        .expect("sample");
    assert!(!plan.will_fail);
}

#[test]
fn seeded_sampler_is_reproducible() {
    let mut a = EntropyFailure::with_seed(42);
    let mut b = EntropyFailure::with_seed(42);
    let plan_a = a.sample(0.5, 0, 1_000_000).expect("sample");
    let plan_b = b.sample(0.5, 0, 1_000_000).expect("sample");
    assert_eq!(plan_a, plan_b);
}

#[test]
fn worker_completes_when_never_crashing() {
    let spec = WorkloadSpec::new(0, 1.0, 64 * 1024, 100, 1.0).expect("spec");
    let outcome = run_worker(&spec, &mut NeverCrash).expect("worker");
    match outcome {
        WorkerOutcome::Completed { allocated_bytes } => {
            assert!(allocated_bytes <= 64 * 1024);
        }
        WorkerOutcome::Crashed { .. } => panic!("worker must not crash"),
    }
}

#[test]
fn worker_crashes_immediately_when_due_at_start() {
    let spec = WorkloadSpec::new(0, 0.5, 1024 * 1024, 2000, 0.5).expect("spec");
    let begun = Instant::now();
    let outcome = run_worker(&spec, &mut CrashAtStart).expect("worker");
    assert!(matches!(outcome, WorkerOutcome::Crashed { .. }));
    assert!(begun.elapsed() < Duration::from_millis(1000));
}
