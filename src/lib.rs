#![forbid(unsafe_code)]
#![deny(warnings)]
#![warn(clippy::pedantic)]

pub mod clock;
pub mod domain;
pub mod failure;
pub mod lib_cpu;
pub mod lib_mem;
pub mod runner;
pub mod validation;
pub mod worker;

pub use clock::Clock;
pub use domain::{RunConfig, WorkerOutcome, WorkloadSpec, BYTES_PER_MEGABYTE};
pub use failure::{EntropyFailure, FailurePlan, FailureSampler};
pub use lib_mem::ChunkPacer;
pub use runner::{RunController, RunReport};
pub use validation::validate_config;
pub use worker::run_worker;
