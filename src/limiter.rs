// SPDX-FileCopyrightText: 2025 Hyperpolymath
// SPDX-License-Identifier: PMPL-1.0-or-later

//! Sliding window rate limiter for form submissions.
//!
//! Keeps the timestamps of accepted attempts in ascending order. Every check
//! first evicts the prefix that has fallen out of the window, then either
//! records the new attempt or rejects it. Rejected attempts are never
//! recorded, so hammering the button does not extend the lockout.

use crate::clock::{Clock, SystemClock};
use crate::config::RateLimitConfig;
use std::collections::VecDeque;
use std::time::Duration;
use tracing::debug;

/// Result of a rate limit check.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RateLimitResult {
    /// Attempt accepted and recorded
    Allowed {
        /// Attempts still available in the current window
        remaining: u32,
        /// Time until the oldest recorded attempt leaves the window
        reset_in: Duration,
    },
    /// Attempt rejected
    Limited {
        /// Time until an attempt would be accepted
        retry_after: Duration,
    },
}

impl RateLimitResult {
    pub fn is_allowed(&self) -> bool {
        matches!(self, RateLimitResult::Allowed { .. })
    }
}

/// Sliding window gate over accepted attempts.
///
/// Not synchronized: wrap it in a lock to share it.
#[derive(Debug)]
pub struct RateLimiter<C: Clock = SystemClock> {
    max_attempts: u32,
    window_ms: i64,
    attempts: VecDeque<i64>,
    clock: C,
}

impl RateLimiter<SystemClock> {
    /// Create a limiter on the system clock.
    pub fn new(max_attempts: u32, window_ms: u64) -> Self {
        Self::with_clock(max_attempts, window_ms, SystemClock)
    }

    /// Create a limiter from configuration.
    pub fn from_config(config: &RateLimitConfig) -> Self {
        Self::new(config.max_attempts, config.window_ms)
    }
}

impl<C: Clock> RateLimiter<C> {
    /// Create a limiter reading time from `clock`.
    pub fn with_clock(max_attempts: u32, window_ms: u64, clock: C) -> Self {
        Self {
            max_attempts,
            window_ms: i64::try_from(window_ms).unwrap_or(i64::MAX),
            attempts: VecDeque::new(),
            clock,
        }
    }

    /// Check the window and record the attempt if there is room.
    pub fn check_and_record(&mut self) -> RateLimitResult {
        let now = self.now();
        self.evict(now);

        if (self.attempts.len() as u64) < u64::from(self.max_attempts) {
            self.attempts.push_back(now);
            let remaining = self.max_attempts - self.attempts.len() as u32;
            let reset_in = self.until_expiry(self.attempts.front().copied(), now);
            debug!(remaining, ?reset_in, "Attempt allowed");
            RateLimitResult::Allowed {
                remaining,
                reset_in,
            }
        } else {
            let retry_after = self.until_expiry(self.attempts.front().copied(), now);
            debug!(
                recorded = self.attempts.len(),
                ?retry_after,
                "Attempt rate limited"
            );
            RateLimitResult::Limited { retry_after }
        }
    }

    /// Recorded attempt timestamps, oldest first.
    pub fn attempts(&self) -> impl Iterator<Item = i64> + '_ {
        self.attempts.iter().copied()
    }

    /// Forget every recorded attempt.
    pub fn reset(&mut self) {
        self.attempts.clear();
    }

    // Never earlier than the newest record, so the sequence stays sorted.
    fn now(&self) -> i64 {
        let now = self.clock.now_millis();
        match self.attempts.back() {
            Some(&newest) if newest > now => newest,
            _ => now,
        }
    }

    fn evict(&mut self, now: i64) {
        let cutoff = now.saturating_sub(self.window_ms);
        while matches!(self.attempts.front(), Some(&t) if t <= cutoff) {
            self.attempts.pop_front();
        }
    }

    fn until_expiry(&self, oldest: Option<i64>, now: i64) -> Duration {
        let expires = match oldest {
            Some(t) => t.saturating_add(self.window_ms),
            None => now.saturating_add(self.window_ms),
        };
        Duration::from_millis(u64::try_from(expires.saturating_sub(now)).unwrap_or(0))
    }
}
