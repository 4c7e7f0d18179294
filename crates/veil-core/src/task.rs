use std::thread::{self, JoinHandle};

use crate::progress::SharedProgress;
use crate::{Result, SteganoError};

/// A hide or unveil operation running on its own thread.
///
/// The work itself stays synchronous, a `Job` only moves it off the calling
/// thread and exposes its progress for polling.
///
/// ```rust
/// use veil_core::{embed::hide_message, extract::extract, task::Job, PixelBuffer};
///
/// let job = Job::spawn(|progress| {
///     let mut buffer = PixelBuffer::new(4, 4, vec![0; 48]);
///     hide_message(&mut buffer, "Hi", progress)?;
///     extract(&buffer, progress)
/// });
///
/// assert_eq!(job.join().unwrap().as_deref(), Some("Hi"));
/// ```
#[derive(Debug)]
pub struct Job<T> {
    progress: SharedProgress,
    handle: JoinHandle<Result<T>>,
}

impl<T: Send + 'static> Job<T> {
    pub fn spawn<F>(work: F) -> Self
    where
        F: FnOnce(&mut SharedProgress) -> Result<T> + Send + 'static,
    {
        let progress = SharedProgress::new();
        let mut worker_progress = progress.clone();
        let handle = thread::spawn(move || work(&mut worker_progress));

        Self { progress, handle }
    }

    /// the last percent value reported by the worker
    pub fn progress(&self) -> u8 {
        self.progress.get()
    }

    pub fn is_finished(&self) -> bool {
        self.handle.is_finished()
    }

    /// Blocks until the work is done
    pub fn join(self) -> Result<T> {
        self.handle
            .join()
            .map_err(|_| SteganoError::WorkerPanicked)?
    }
}
