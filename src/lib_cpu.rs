#![forbid(unsafe_code)]
#![deny(warnings)]
#![warn(clippy::pedantic)]

use std::hint::black_box;

pub const WORK_LOOP_ITERATIONS: u32 = 100_000;

/// One fixed unit of busy work. The recurrence is meaningless; `black_box`
/// keeps the optimizer from eliding it. The result must never feed a
/// decision.
pub fn burn_unit() {
    let mut val = 1.5_f64;
    for work_iteration in 0..WORK_LOOP_ITERATIONS {
        val = ((4.2 + val) / val).sqrt();
        val += f64::from(work_iteration);
        val *= val;
    }
    black_box(val);
}

/// Sleep needed after a busy portion of `elapsed_us` so that busy time is
/// `target_load` of the whole cycle: elapsed * (1 - load) / load.
/// Load >= 1 never sleeps; load <= 0 is the all-sleep case handled by the
/// worker itself.
pub fn sleep_share_us(elapsed_us: i64, target_load: f64) -> u64 {
    if target_load <= 0.0 || target_load >= 1.0 {
        return 0;
    }
    let elapsed = elapsed_us.max(0) as f64;
    ((elapsed / target_load) * (1.0 - target_load)) as u64
}
