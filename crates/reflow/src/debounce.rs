//! Resize-event coalescing.
//!
//! [`Debounce`] is a small clock-driven state machine: each pushed event
//! replaces the pending one and restarts the quiet period, and polling
//! yields the last event only once the quiet period has passed. The caller
//! supplies the current time, so the same type serves a timer-driven event
//! loop and deterministic tests.

use std::time::{Duration, Instant};

/// Quiet period after the last resize before a reflow runs.
pub const RESIZE_DEBOUNCE: Duration = Duration::from_millis(150);

/// Holds back events until they stop arriving.
///
/// # Examples
///
/// ```
/// use std::time::{Duration, Instant};
/// use termgrid_reflow::Debounce;
///
/// let start = Instant::now();
/// let mut resize = Debounce::new(Duration::from_millis(150));
///
/// resize.push((80, 24), start);
/// resize.push((100, 30), start + Duration::from_millis(50));
/// assert_eq!(resize.poll(start + Duration::from_millis(150)), None);
/// assert_eq!(resize.poll(start + Duration::from_millis(200)), Some((100, 30)));
/// assert_eq!(resize.poll(start + Duration::from_millis(400)), None);
/// ```
#[derive(Debug, Clone)]
pub struct Debounce<T> {
    interval: Duration,
    pending: Option<(T, Instant)>,
}

impl<T> Debounce<T> {
    /// Creates a debouncer with the given quiet period.
    #[must_use]
    pub const fn new(interval: Duration) -> Self {
        Self {
            interval,
            pending: None,
        }
    }

    /// Records an event, replacing any pending one and restarting the timer.
    pub fn push(&mut self, value: T, now: Instant) {
        self.pending = Some((value, now));
    }

    /// Returns the pending event if the quiet period has elapsed.
    pub fn poll(&mut self, now: Instant) -> Option<T> {
        let ready = self
            .pending
            .as_ref()
            .is_some_and(|(_, at)| now.saturating_duration_since(*at) >= self.interval);
        if ready {
            self.pending.take().map(|(value, _)| value)
        } else {
            None
        }
    }

    /// Returns when the pending event becomes ready, if there is one.
    #[must_use]
    pub fn deadline(&self) -> Option<Instant> {
        self.pending.as_ref().map(|(_, at)| *at + self.interval)
    }

    /// Returns `true` if an event is waiting.
    #[must_use]
    pub fn is_pending(&self) -> bool {
        self.pending.is_some()
    }

    /// Drops the pending event.
    pub fn cancel(&mut self) {
        self.pending = None;
    }
}

impl<T> Default for Debounce<T> {
    fn default() -> Self {
        Self::new(RESIZE_DEBOUNCE)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ms(n: u64) -> Duration {
        Duration::from_millis(n)
    }

    #[test]
    fn nothing_pending_yields_nothing() {
        let mut debounce: Debounce<u8> = Debounce::default();
        assert_eq!(debounce.poll(Instant::now()), None);
        assert!(!debounce.is_pending());
        assert_eq!(debounce.deadline(), None);
    }

    #[test]
    fn burst_collapses_to_last_value() {
        let start = Instant::now();
        let mut debounce = Debounce::default();
        for (i, offset) in [0, 40, 80, 120].into_iter().enumerate() {
            debounce.push(i, start + ms(offset));
        }

        assert_eq!(debounce.deadline(), Some(start + ms(270)));
        assert_eq!(debounce.poll(start + ms(269)), None);
        assert_eq!(debounce.poll(start + ms(270)), Some(3));
        assert!(!debounce.is_pending());
    }

    #[test]
    fn separate_bursts_fire_separately() {
        let start = Instant::now();
        let mut debounce = Debounce::new(ms(100));

        debounce.push("first", start);
        assert_eq!(debounce.poll(start + ms(100)), Some("first"));

        debounce.push("second", start + ms(500));
        assert_eq!(debounce.poll(start + ms(550)), None);
        assert_eq!(debounce.poll(start + ms(650)), Some("second"));
    }

    #[test]
    fn clock_going_backwards_is_not_ready() {
        let start = Instant::now() + ms(1_000);
        let mut debounce = Debounce::new(ms(100));
        debounce.push(1, start);
        assert_eq!(debounce.poll(start - ms(500)), None);
        assert!(debounce.is_pending());
    }

    #[test]
    fn cancel_drops_pending() {
        let start = Instant::now();
        let mut debounce = Debounce::new(ms(10));
        debounce.push(1, start);
        debounce.cancel();
        assert_eq!(debounce.poll(start + ms(20)), None);
    }
}
