//! Debounced delivery of search input: only the last value pushed within the delay fires.

use std::time::{Duration, Instant};

/// Default delay between the last keystroke and the search running.
pub const DEFAULT_DEBOUNCE: Duration = Duration::from_millis(300);

/// Holds at most one pending value and releases it once its deadline passes.
///
/// Pushing a new value replaces the pending one and restarts the delay.
/// Time is supplied by the caller.
#[derive(Debug, Clone)]
pub struct Debouncer<T> {
    delay: Duration,
    pending: Option<(Instant, T)>,
}

impl<T> Debouncer<T> {
    pub fn new(delay: Duration) -> Self {
        Self {
            delay,
            pending: None,
        }
    }

    pub fn delay(&self) -> Duration {
        self.delay
    }

    /// Queue `value`, discarding anything pending.
    pub fn push(&mut self, value: T, now: Instant) {
        if self.pending.is_some() {
            log::trace!("Debounce restarted");
        }
        self.pending = Some((now + self.delay, value));
    }

    /// Take the pending value if its deadline has passed.
    pub fn poll(&mut self, now: Instant) -> Option<T> {
        match &self.pending {
            Some((deadline, _)) if now >= *deadline => self.pending.take().map(|(_, v)| v),
            _ => None,
        }
    }

    /// When the pending value becomes ready, if any.
    pub fn deadline(&self) -> Option<Instant> {
        self.pending.as_ref().map(|(d, _)| *d)
    }

    pub fn is_pending(&self) -> bool {
        self.pending.is_some()
    }

    /// Drop the pending value without firing.
    pub fn cancel(&mut self) {
        self.pending = None;
    }
}

impl<T> Default for Debouncer<T> {
    fn default() -> Self {
        Self::new(DEFAULT_DEBOUNCE)
    }
}
