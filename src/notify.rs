//! Edge-triggered award notification signal
//!
//! The notifier needs a "just awarded" pulse, not a persistent value.
//! This is a single-slot channel: raised when an achievement is granted,
//! cleared when the consumer takes it. A second award before
//! acknowledgment overwrites the slot, so there is no deferred-clear
//! timer to race against.

/// Single-slot, consume-to-acknowledge award signal. Not persisted.
#[derive(Debug, Clone, Default)]
pub struct AwardSignal {
    pending: Option<String>,
}

impl AwardSignal {
    pub fn new() -> Self {
        Self::default()
    }

    /// Raise the signal for a freshly awarded achievement. An
    /// unacknowledged earlier award is overwritten (latest wins).
    pub fn raise(&mut self, achievement_id: &str) {
        if let Some(stale) = &self.pending {
            log::debug!("award signal '{}' overwritten before acknowledgment", stale);
        }
        self.pending = Some(achievement_id.to_string());
    }

    /// Read the pending award without acknowledging it.
    pub fn peek(&self) -> Option<&str> {
        self.pending.as_deref()
    }

    /// Take and clear the pending award, acknowledging it.
    pub fn take(&mut self) -> Option<String> {
        self.pending.take()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_take_clears_the_slot() {
        let mut signal = AwardSignal::new();
        assert_eq!(signal.take(), None);

        signal.raise("GIT_COMMITTER");
        assert_eq!(signal.peek(), Some("GIT_COMMITTER"));
        assert_eq!(signal.take().as_deref(), Some("GIT_COMMITTER"));
        assert_eq!(signal.take(), None);
    }

    #[test]
    fn test_rapid_second_award_wins() {
        let mut signal = AwardSignal::new();
        signal.raise("FIRST");
        signal.raise("SECOND");
        assert_eq!(signal.take().as_deref(), Some("SECOND"));
        assert_eq!(signal.take(), None);
    }

    #[test]
    fn test_peek_does_not_acknowledge() {
        let mut signal = AwardSignal::new();
        signal.raise("NETLIFY_DEPLOYER");
        assert_eq!(signal.peek(), Some("NETLIFY_DEPLOYER"));
        assert_eq!(signal.peek(), Some("NETLIFY_DEPLOYER"));
        assert!(signal.take().is_some());
    }
}
