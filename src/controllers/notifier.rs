use std::time::{Duration, Instant};

/// How long a notification stays visible.
pub const NOTIFICATION_TTL: Duration = Duration::from_millis(3000);

/// A transient user-facing status message.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notification {
    pub message: String,
    pub expires_at: Instant,
}

/// Single-slot notification emitter.
///
/// At most one notification is live; a new one replaces the slot and the
/// visible window restarts from the latest call. Expiry is a deadline
/// checked against the caller's clock, so a superseded message can never be
/// cleared by a stale timer.
#[derive(Debug, Default)]
pub struct Notifier {
    current: Option<Notification>,
}

impl Notifier {
    pub fn new() -> Self {
        Self::default()
    }

    /// Show `message`, replacing any current notification. Visible for
    /// [`NOTIFICATION_TTL`] from `now`.
    pub fn notify(&mut self, message: impl Into<String>, now: Instant) {
        self.current = Some(Notification {
            message: message.into(),
            expires_at: now + NOTIFICATION_TTL,
        });
    }

    /// The live message, if any is unexpired at `now`.
    pub fn current(&self, now: Instant) -> Option<&str> {
        self.current
            .as_ref()
            .filter(|n| now < n.expires_at)
            .map(|n| n.message.as_str())
    }

    /// Drop the notification once its deadline has passed.
    pub fn tick(&mut self, now: Instant) {
        if let Some(n) = &self.current {
            if now >= n.expires_at {
                self.current = None;
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_notification_visible_until_expiry() {
        let t0 = Instant::now();
        let mut notifier = Notifier::new();
        notifier.notify("saved", t0);

        assert_eq!(notifier.current(t0), Some("saved"));
        assert_eq!(
            notifier.current(t0 + Duration::from_millis(2999)),
            Some("saved")
        );
        assert_eq!(notifier.current(t0 + Duration::from_millis(3001)), None);
    }

    #[test]
    fn test_expiry_boundary_is_exclusive() {
        let t0 = Instant::now();
        let mut notifier = Notifier::new();
        notifier.notify("msg", t0);
        assert_eq!(notifier.current(t0 + Duration::from_millis(3000)), None);
    }

    #[test]
    fn test_new_notification_resets_window() {
        let t0 = Instant::now();
        let mut notifier = Notifier::new();
        notifier.notify("first", t0);
        notifier.notify("second", t0 + Duration::from_millis(2000));

        // first's deadline (t0+3000) must not clear second
        let after_first_deadline = t0 + Duration::from_millis(3500);
        notifier.tick(after_first_deadline);
        assert_eq!(notifier.current(after_first_deadline), Some("second"));

        // second expires 3000ms after its own issue
        let after_second_deadline = t0 + Duration::from_millis(5001);
        notifier.tick(after_second_deadline);
        assert_eq!(notifier.current(after_second_deadline), None);
    }

    #[test]
    fn test_tick_clears_expired_slot() {
        let t0 = Instant::now();
        let mut notifier = Notifier::new();
        notifier.notify("msg", t0);

        notifier.tick(t0 + Duration::from_millis(100));
        assert_eq!(notifier.current(t0 + Duration::from_millis(100)), Some("msg"));

        notifier.tick(t0 + Duration::from_millis(3001));
        assert_eq!(notifier.current(t0 + Duration::from_millis(3001)), None);
    }

    #[test]
    fn test_no_notification_initially() {
        let notifier = Notifier::new();
        assert_eq!(notifier.current(Instant::now()), None);
    }
}
