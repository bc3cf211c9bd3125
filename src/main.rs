#![forbid(unsafe_code)]
#![deny(warnings)]
#![warn(clippy::pedantic)]

use clap::Parser;
use loadgen::{EntropyFailure, RunConfig, RunController};
use tracing::{error, info};

/// Synthetic CPU/memory load generator with optional crash injection.
#[derive(Parser, Debug)]
#[command(version, about)]
struct Args {
    /// Run duration in milliseconds
    duration_ms: u64,
    /// Number of workers, one OS thread each
    workers: u32,
    /// Fraction of wall time each worker spends computing (0.0 - 1.0)
    load: f64,
    /// Aggregate memory footprint in megabytes, split evenly across workers
    memory_mb: u64,
    /// Crash threshold (0.0 - 1.0); 0 disables crash injection
    #[arg(default_value_t = 0.0)]
    failure_threshold: f64,
}

fn init_tracing() {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();
}

#[tokio::main]
async fn main() {
    init_tracing();
    let args = match Args::try_parse() {
        Ok(args) => args,
        Err(err) => {
            let _ = err.print();
            std::process::exit(1);
        }
    };
    let cfg = RunConfig {
        duration_ms: args.duration_ms,
        workers: args.workers,
        target_load: args.load,
        memory_mb: args.memory_mb,
        failure_threshold: args.failure_threshold,
    };
    let controller = match RunController::from_config(&cfg) {
        Ok(controller) => controller,
        Err(err) => {
            error!(error = %format!("{err:#}"), "invalid arguments");
            std::process::exit(1);
        }
    };
    info!(
        workers = cfg.workers,
        duration_ms = cfg.duration_ms,
        load = cfg.target_load,
        memory_mb = cfg.memory_mb,
        "starting run"
    );
    match controller.run(EntropyFailure::from_entropy).await {
        Ok(report) => {
            info!(
                workers = report.workers,
                allocated = report.allocated_bytes,
                "run complete"
            );
        }
        Err(err) => {
            error!(error = %format!("{err:#}"), "run failed");
            std::process::exit(1);
        }
    }
}
