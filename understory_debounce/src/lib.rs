// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Understory Debounce: a cancellable trailing-edge debounce timer.
//!
//! [`Debounce`] does not own a clock or spawn anything. The host feeds it
//! monotonic timestamps in milliseconds (the same convention as the click
//! state in `understory_event_state`) and asks it whether the quiet window
//! has elapsed.
//!
//! ## Semantics
//!
//! - [`Debounce::call`] arms the timer at `now + delay`. Calling again before
//!   the deadline pushes the deadline out and replaces the pending value.
//! - [`Debounce::poll`] yields the most recent value once `now >= deadline`,
//!   then disarms. Only the trailing edge fires; there is no leading call.
//! - [`Debounce::cancel`] drops a pending value without firing it.
//! - [`Debounce::flush`] fires a pending value immediately.
//!
//! ## Example
//!
//! ```
//! use understory_debounce::Debounce;
//!
//! let mut resize: Debounce<f64> = Debounce::new(100);
//!
//! // A burst of resize events.
//! resize.call(0, 800.0);
//! resize.call(40, 820.0);
//! resize.call(90, 840.0);
//!
//! // Nothing fires inside the quiet window after the last event.
//! assert_eq!(resize.poll(150), None);
//! // Once 100ms have passed without another call, the last value fires once.
//! assert_eq!(resize.poll(190), Some(840.0));
//! assert_eq!(resize.poll(500), None);
//! ```
//!
//! This crate is `no_std`.

#![no_std]

/// Trailing-edge debounce timer carrying the latest call's payload.
///
/// Timestamps are caller-supplied milliseconds and must be monotonic.
#[derive(Clone, Debug)]
pub struct Debounce<T = ()> {
    delay: u64,
    pending: Option<Pending<T>>,
}

#[derive(Clone, Debug)]
struct Pending<T> {
    deadline: u64,
    value: T,
}

impl<T> Debounce<T> {
    /// Create a disarmed timer with the given quiet window in milliseconds.
    pub const fn new(delay: u64) -> Self {
        Self {
            delay,
            pending: None,
        }
    }

    /// The quiet window in milliseconds.
    pub const fn delay(&self) -> u64 {
        self.delay
    }

    /// Record a call at `now`, (re)arming the timer and replacing any pending value.
    pub fn call(&mut self, now: u64, value: T) {
        let deadline = now.saturating_add(self.delay);
        if self.pending.is_some() {
            tracing::trace!(now, deadline, "debounce reset");
        } else {
            tracing::trace!(now, deadline, "debounce armed");
        }
        self.pending = Some(Pending { deadline, value });
    }

    /// Fire the pending value if its quiet window has elapsed at `now`.
    pub fn poll(&mut self, now: u64) -> Option<T> {
        match &self.pending {
            Some(p) if now >= p.deadline => self.pending.take().map(|p| p.value),
            _ => None,
        }
    }

    /// Fire the pending value immediately, regardless of the deadline.
    pub fn flush(&mut self) -> Option<T> {
        self.pending.take().map(|p| p.value)
    }

    /// Drop the pending value without firing it. Returns whether anything was pending.
    pub fn cancel(&mut self) -> bool {
        let was_pending = self.pending.take().is_some();
        if was_pending {
            tracing::trace!("debounce cancelled");
        }
        was_pending
    }

    /// Whether a call is waiting for its quiet window to elapse.
    pub fn is_pending(&self) -> bool {
        self.pending.is_some()
    }

    /// Timestamp at which the pending value becomes due, if armed.
    pub fn deadline(&self) -> Option<u64> {
        self.pending.as_ref().map(|p| p.deadline)
    }
}

impl<T> Default for Debounce<T> {
    /// A disarmed timer with a 100ms quiet window.
    fn default() -> Self {
        Self::new(100)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fires_once_after_quiet_window() {
        let mut d: Debounce = Debounce::new(100);
        d.call(1000, ());
        assert!(d.poll(1099).is_none());
        assert!(d.poll(1100).is_some());
        assert!(d.poll(1200).is_none());
        assert!(!d.is_pending());
    }

    #[test]
    fn burst_resets_deadline() {
        let mut d: Debounce<u32> = Debounce::new(100);
        d.call(0, 1);
        d.call(50, 2);
        d.call(120, 3);
        assert_eq!(d.deadline(), Some(220));
        // The original deadline has passed, but later calls pushed it out.
        assert_eq!(d.poll(100), None);
        assert_eq!(d.poll(219), None);
        assert_eq!(d.poll(220), Some(3));
    }

    #[test]
    fn no_leading_edge() {
        let mut d: Debounce = Debounce::new(100);
        d.call(0, ());
        assert!(d.poll(0).is_none());
    }

    #[test]
    fn cancel_drops_pending() {
        let mut d: Debounce<u8> = Debounce::new(100);
        d.call(0, 7);
        assert!(d.cancel());
        assert_eq!(d.poll(1000), None);
        assert!(!d.cancel());
        assert_eq!(d.deadline(), None);
    }

    #[test]
    fn flush_fires_early() {
        let mut d: Debounce<u8> = Debounce::new(100);
        d.call(0, 9);
        assert_eq!(d.flush(), Some(9));
        assert_eq!(d.flush(), None);
    }

    #[test]
    fn deadline_saturates() {
        let mut d: Debounce = Debounce::new(100);
        d.call(u64::MAX - 10, ());
        assert_eq!(d.deadline(), Some(u64::MAX));
        assert!(d.poll(u64::MAX).is_some());
    }

    #[test]
    fn default_delay_is_100ms() {
        let d: Debounce = Debounce::default();
        assert_eq!(d.delay(), 100);
    }
}
