//! Two-key gestures such as `dd`.
//!
//! The first key is remembered together with a deadline. Nothing clears it in
//! the background: a stale entry is simply treated as absent the next time a
//! key is looked at.

use std::time::{Duration, Instant};

/// Default window for the second key of a gesture
pub const DEFAULT_PENDING_TIMEOUT: Duration = Duration::from_millis(300);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct Pending {
    key: char,
    deadline: Instant,
}

/// First half of a two-key gesture, if one is live
#[derive(Debug, Clone, Default)]
pub struct PendingKey {
    pending: Option<Pending>,
}

impl PendingKey {
    pub fn new() -> Self {
        Self { pending: None }
    }

    /// Remember `key` as the first half of a gesture until `now + timeout`
    pub fn arm(&mut self, key: char, now: Instant, timeout: Duration) {
        self.pending = Some(Pending {
            key,
            deadline: now + timeout,
        });
    }

    /// Consume the pending state. Returns true only if `key` was pending and
    /// its deadline has not passed.
    pub fn complete(&mut self, key: char, now: Instant) -> bool {
        match self.pending.take() {
            Some(p) => p.key == key && now < p.deadline,
            None => false,
        }
    }

    /// Drop any pending gesture
    pub fn cancel(&mut self) {
        self.pending = None;
    }

    /// The pending key, if its deadline has not passed
    pub fn active(&self, now: Instant) -> Option<char> {
        self.pending
            .filter(|p| now < p.deadline)
            .map(|p| p.key)
    }
}
