//! Progress reporting for long running embed and extract calls.
//!
//! The embedder and the extractor call [`ProgressReporter::report`] once per
//! bit, so a reporter must be cheap. Wrap anything expensive, like a UI
//! update, into [`Throttled`].

use std::sync::atomic::{AtomicU8, Ordering};
use std::sync::Arc;

/// Receives the completion of an operation in percent.
///
/// While an operation runs the values are within `0..100` and never decrease.
/// After it finished, successful or not, a final `0` is reported.
pub trait ProgressReporter {
    fn report(&mut self, percent: u8);
}

/// Swallows all progress
#[derive(Debug, Default, Clone, Copy)]
pub struct NoProgress;

impl ProgressReporter for NoProgress {
    fn report(&mut self, _percent: u8) {}
}

impl<F: FnMut(u8)> ProgressReporter for F {
    fn report(&mut self, percent: u8) {
        self(percent)
    }
}

/// Forwards a value only if it differs from the last forwarded one
#[derive(Debug)]
pub struct Throttled<P> {
    inner: P,
    last: Option<u8>,
}

impl<P: ProgressReporter> Throttled<P> {
    pub fn new(inner: P) -> Self {
        Self { inner, last: None }
    }

    pub fn into_inner(self) -> P {
        self.inner
    }
}

impl<P: ProgressReporter> ProgressReporter for Throttled<P> {
    fn report(&mut self, percent: u8) {
        if self.last != Some(percent) {
            self.last = Some(percent);
            self.inner.report(percent);
        }
    }
}

/// A progress cell that can be written by a worker thread and read by anyone else.
///
/// Clones share the same value.
#[derive(Debug, Default, Clone)]
pub struct SharedProgress {
    percent: Arc<AtomicU8>,
}

impl SharedProgress {
    pub fn new() -> Self {
        Self::default()
    }

    /// the last reported value
    pub fn get(&self) -> u8 {
        self.percent.load(Ordering::Relaxed)
    }
}

impl ProgressReporter for SharedProgress {
    fn report(&mut self, percent: u8) {
        self.percent.store(percent, Ordering::Relaxed);
    }
}

/// Hands progress through to a reporter and resets it to 0 when dropped.
pub(crate) struct ProgressGuard<'p, P: ProgressReporter + ?Sized> {
    reporter: &'p mut P,
}

impl<'p, P: ProgressReporter + ?Sized> ProgressGuard<'p, P> {
    pub fn new(reporter: &'p mut P) -> Self {
        Self { reporter }
    }

    /// reports `done` out of `total` as percent, `done` is expected to stay below `total`
    #[inline(always)]
    pub fn step(&mut self, done: usize, total: usize) {
        self.reporter.report(percent(done, total));
    }
}

impl<P: ProgressReporter + ?Sized> Drop for ProgressGuard<'_, P> {
    fn drop(&mut self) {
        self.reporter.report(0);
    }
}

fn percent(done: usize, total: usize) -> u8 {
    if total == 0 {
        return 0;
    }
    (done * 100 / total) as u8
}
