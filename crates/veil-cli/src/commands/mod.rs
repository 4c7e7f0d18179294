use std::thread;
use std::time::Duration;

use log::info;
use veil_core::Job;

use crate::CliResult;

pub mod capacity;
pub mod hide;
pub mod unveil;
pub mod unveil_raw;

const POLL_INTERVAL: Duration = Duration::from_millis(50);

/// Waits for `job` and logs its progress in steps of 10 percent.
fn await_job<T: Send + 'static>(job: Job<T>, label: &str) -> CliResult<T> {
    let mut last_step = 0;
    while !job.is_finished() {
        let step = job.progress() / 10;
        if step > last_step {
            last_step = step;
            info!("{label}: {}%", step * 10);
        }
        thread::sleep(POLL_INTERVAL);
    }

    Ok(job.join()?)
}
