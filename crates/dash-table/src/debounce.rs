//! Debounced input.

use std::time::{Duration, Instant};

/// A rapidly changing input and the value derived from it after a quiet
/// period.
///
/// `raw` follows every keystroke. `applied` only changes once no new input
/// arrived for `quiet`. Each new input restarts the wait; [`cancel`](Self::cancel)
/// drops a pending change and [`flush`](Self::flush) applies it immediately.
#[derive(Debug, Clone)]
pub struct Debounced<T> {
    raw: T,
    applied: T,
    quiet: Duration,
    /// When the most recent unapplied input arrived.
    pending_since: Option<Instant>,
}

impl<T: Clone + PartialEq> Debounced<T> {
    pub fn new(initial: T, quiet: Duration) -> Self {
        Self {
            raw: initial.clone(),
            applied: initial,
            quiet,
            pending_since: None,
        }
    }

    /// Latest input, including unapplied keystrokes.
    pub fn raw(&self) -> &T {
        &self.raw
    }

    /// Value consumers should act on.
    pub fn applied(&self) -> &T {
        &self.applied
    }

    #[inline]
    pub fn is_pending(&self) -> bool {
        self.pending_since.is_some()
    }

    /// Record an input at `now`, restarting the quiet period.
    pub fn input_at(&mut self, value: T, now: Instant) {
        self.raw = value;
        self.pending_since = if self.raw == self.applied {
            None
        } else {
            Some(now)
        };
    }

    /// Apply the pending input if the quiet period elapsed by `now`.
    ///
    /// Returns the newly applied value, or `None` when nothing changed.
    pub fn poll_at(&mut self, now: Instant) -> Option<&T> {
        let since = self.pending_since?;
        if now.saturating_duration_since(since) < self.quiet {
            return None;
        }
        self.commit()
    }

    /// Apply the pending input immediately.
    pub fn flush(&mut self) -> Option<&T> {
        self.pending_since?;
        self.commit()
    }

    /// Drop the pending input; `raw` reverts to the applied value.
    pub fn cancel(&mut self) {
        self.pending_since = None;
        self.raw = self.applied.clone();
    }

    /// Set both values at once without waiting.
    pub fn reset(&mut self, value: T) {
        self.raw = value.clone();
        self.applied = value;
        self.pending_since = None;
    }

    fn commit(&mut self) -> Option<&T> {
        self.pending_since = None;
        self.applied = self.raw.clone();
        Some(&self.applied)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const QUIET: Duration = Duration::from_millis(200);

    #[test]
    fn test_applies_after_quiet_period() {
        let start = Instant::now();
        let mut d = Debounced::new(String::new(), QUIET);

        d.input_at("a".into(), start);
        assert_eq!(d.raw(), "a");
        assert_eq!(d.applied(), "");
        assert!(d.poll_at(start + Duration::from_millis(100)).is_none());

        assert_eq!(
            d.poll_at(start + QUIET).map(String::as_str),
            Some("a")
        );
        assert_eq!(d.applied(), "a");
        assert!(!d.is_pending());
    }

    #[test]
    fn test_each_keystroke_restarts_wait() {
        let start = Instant::now();
        let mut d = Debounced::new(String::new(), QUIET);

        d.input_at("a".into(), start);
        d.input_at("al".into(), start + Duration::from_millis(150));
        // 200ms after the first keystroke, but only 50ms after the last.
        assert!(d.poll_at(start + QUIET).is_none());
        assert_eq!(d.applied(), "");

        let applied = d.poll_at(start + Duration::from_millis(350)).cloned();
        assert_eq!(applied.as_deref(), Some("al"));
    }

    #[test]
    fn test_typing_back_to_applied_value_clears_pending() {
        let start = Instant::now();
        let mut d = Debounced::new("x".to_string(), QUIET);
        d.input_at("xy".into(), start);
        d.input_at("x".into(), start);
        assert!(!d.is_pending());
    }

    #[test]
    fn test_cancel_and_flush() {
        let mut d = Debounced::new(String::new(), QUIET);
        d.input_at("abc".into(), Instant::now());
        d.cancel();
        assert!(!d.is_pending());
        assert_eq!(d.raw(), "");
        assert!(d.flush().is_none());

        d.input_at("abc".into(), Instant::now());
        assert_eq!(d.flush().map(String::as_str), Some("abc"));
        assert_eq!(d.applied(), "abc");
    }
}
