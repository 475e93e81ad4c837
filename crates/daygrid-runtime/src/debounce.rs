#![forbid(unsafe_code)]

//! Debounced re-layout scheduling.
//!
//! Parameter-only changes (zoom, geometry) can arrive far faster than a
//! layout pass is worth running. The debouncer coalesces them with
//! latest-wins semantics: a request opens (or supersedes) a single pending
//! deadline, and the pass fires once per quiescent period. The final state
//! is never dropped.
//!
//! The debouncer never sleeps and owns no clock: the caller passes `now`
//! into every method and drives it from its own loop, which keeps the
//! behavior deterministic and testable.
//!
//! # Invariants
//!
//! - At most one deadline is pending at a time.
//! - A request while a deadline is pending supersedes it (no duplicate
//!   passes for one burst).
//! - A request while a pass is executing sets the dirty flag; finishing
//!   the pass then schedules one follow-up deadline.

use std::time::{Duration, Instant};

/// Default debounce delay between a request and the pass it triggers.
pub const DEFAULT_RELAYOUT_DEBOUNCE: Duration = Duration::from_millis(500);

/// Coalesces re-layout requests into one deadline per quiescent period.
#[derive(Debug, Clone)]
pub struct RelayoutDebouncer {
    delay: Duration,
    deadline: Option<Instant>,
    dirty: bool,
}

impl RelayoutDebouncer {
    /// A debouncer with the given delay.
    #[must_use]
    pub const fn new(delay: Duration) -> Self {
        Self {
            delay,
            deadline: None,
            dirty: false,
        }
    }

    /// The configured delay.
    #[inline]
    #[must_use]
    pub const fn delay(&self) -> Duration {
        self.delay
    }

    /// True while a deadline is pending.
    #[inline]
    #[must_use]
    pub const fn is_pending(&self) -> bool {
        self.deadline.is_some()
    }

    /// Record a re-layout request at `now`.
    ///
    /// Opens a deadline at `now + delay`, superseding any pending one.
    pub fn request(&mut self, now: Instant) {
        let superseded = self.deadline.is_some();
        self.deadline = Some(now + self.delay);
        tracing::trace!(superseded, "relayout requested");
    }

    /// Record a request that arrived while a pass was executing.
    ///
    /// The in-flight pass is never preempted; [`finish_pass`] reschedules.
    ///
    /// [`finish_pass`]: Self::finish_pass
    pub fn mark_dirty(&mut self) {
        self.dirty = true;
    }

    /// Check whether the pending deadline has fired.
    ///
    /// Returns `true` at most once per deadline and clears it; the caller
    /// runs the pass and then calls [`finish_pass`](Self::finish_pass).
    pub fn poll(&mut self, now: Instant) -> bool {
        match self.deadline {
            Some(deadline) if now >= deadline => {
                self.deadline = None;
                true
            }
            _ => false,
        }
    }

    /// Mark the pass that a fired deadline triggered as complete.
    ///
    /// If a request arrived while the pass was executing, one follow-up
    /// deadline opens at `now + delay` and `true` is returned.
    pub fn finish_pass(&mut self, now: Instant) -> bool {
        if self.dirty {
            self.dirty = false;
            self.deadline = Some(now + self.delay);
            tracing::trace!("dirty pass finished, follow-up scheduled");
            return true;
        }
        false
    }
}

impl Default for RelayoutDebouncer {
    fn default() -> Self {
        Self::new(DEFAULT_RELAYOUT_DEBOUNCE)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const DELAY: Duration = Duration::from_millis(500);

    #[test]
    fn fires_once_after_the_delay() {
        let t0 = Instant::now();
        let mut debouncer = RelayoutDebouncer::new(DELAY);

        debouncer.request(t0);
        assert!(debouncer.is_pending());
        assert!(!debouncer.poll(t0 + Duration::from_millis(499)));
        assert!(debouncer.poll(t0 + DELAY));
        // Cleared after firing.
        assert!(!debouncer.is_pending());
        assert!(!debouncer.poll(t0 + Duration::from_secs(10)));
    }

    #[test]
    fn burst_of_requests_supersedes_to_one_deadline() {
        let t0 = Instant::now();
        let mut debouncer = RelayoutDebouncer::new(DELAY);

        debouncer.request(t0);
        debouncer.request(t0 + Duration::from_millis(100));
        debouncer.request(t0 + Duration::from_millis(200));

        // The first deadline no longer fires.
        assert!(!debouncer.poll(t0 + DELAY));
        // The last one does.
        assert!(debouncer.poll(t0 + Duration::from_millis(200) + DELAY));
        assert!(!debouncer.poll(t0 + Duration::from_secs(10)));
    }

    #[test]
    fn spaced_requests_each_fire() {
        let t0 = Instant::now();
        let mut debouncer = RelayoutDebouncer::new(DELAY);

        debouncer.request(t0);
        assert!(debouncer.poll(t0 + DELAY));

        let t1 = t0 + Duration::from_secs(5);
        debouncer.request(t1);
        assert!(debouncer.poll(t1 + DELAY));
    }

    #[test]
    fn dirty_pass_reschedules_on_finish() {
        let t0 = Instant::now();
        let mut debouncer = RelayoutDebouncer::new(DELAY);

        debouncer.request(t0);
        let fired = t0 + DELAY;
        assert!(debouncer.poll(fired));

        // A request arrives mid-pass.
        debouncer.mark_dirty();
        assert!(debouncer.finish_pass(fired));
        assert!(debouncer.is_pending());
        assert!(debouncer.poll(fired + DELAY));
        // Clean finish schedules nothing.
        assert!(!debouncer.finish_pass(fired + DELAY));
        assert!(!debouncer.is_pending());
    }
}
