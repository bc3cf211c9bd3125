#![forbid(unsafe_code)]
#![deny(warnings)]
#![warn(clippy::pedantic)]

use crate::domain::RunConfig;
use anyhow::{bail, Result as AnyResult};

pub fn validate_config(cfg: &RunConfig) -> AnyResult<()> {
    if cfg.duration_ms == 0 {
        bail!("duration must be a positive number of milliseconds");
    }
    if cfg.workers == 0 {
        bail!("workers must be > 0");
    }
    if !(0.0..=1.0).contains(&cfg.target_load) {
        bail!("load must be within 0.0..=1.0");
    }
    if cfg.memory_mb == 0 {
        bail!("memory must be a positive number of megabytes");
    }
    if !(0.0..=1.0).contains(&cfg.failure_threshold) {
        bail!("failure threshold must be within 0.0..=1.0");
    }
    Ok(())
}
