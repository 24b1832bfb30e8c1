//! Timeout helpers used across the crate.
//!
//! Timeouts are plain millisecond counts; `0` means "no bound" everywhere a
//! caller passes one to a wait.

use std::time::Duration;

use crate::utils::clock::Clock;

/// Timeout used for reads when a caller doesn't provide an explicit one.
pub const DEFAULT_READ_TIMEOUT_MS: u64 = 1000;

/// Convert milliseconds to Duration.
pub fn ms(ms: u64) -> Duration {
    Duration::from_millis(ms)
}

/// Convenience: default read timeout as Duration.
pub fn default_read_timeout() -> Duration {
    ms(DEFAULT_READ_TIMEOUT_MS)
}

/// Point in time after which a wait gives up, measured on a [`Clock`].
#[derive(Debug, Clone, Copy)]
pub struct Deadline {
    expires_at_ms: Option<u64>,
}

impl Deadline {
    /// Start a deadline `timeout_ms` from now. `0` never expires.
    pub fn after(clock: &dyn Clock, timeout_ms: u64) -> Self {
        let expires_at_ms = match timeout_ms {
            0 => None,
            t => Some(clock.now_ms().saturating_add(t)),
        };
        Self { expires_at_ms }
    }

    pub fn never() -> Self {
        Self {
            expires_at_ms: None,
        }
    }

    pub fn is_expired(&self, clock: &dyn Clock) -> bool {
        self.expires_at_ms
            .map(|at| clock.now_ms() >= at)
            .unwrap_or(false)
    }

    /// Milliseconds left, `None` when unbounded.
    pub fn remaining_ms(&self, clock: &dyn Clock) -> Option<u64> {
        self.expires_at_ms
            .map(|at| at.saturating_sub(clock.now_ms()))
    }
}
