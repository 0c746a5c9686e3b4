// SPDX-FileCopyrightText: 2025 Hyperpolymath
// SPDX-License-Identifier: PMPL-1.0-or-later

//! Submission flood patterns for abuse testing.

use std::time::Duration;

/// Flood pattern configuration.
#[derive(Debug, Clone)]
pub struct FloodConfig {
    /// Total submit clicks
    pub total_attempts: usize,
    /// Gap between clicks
    pub interval: Duration,
    /// Every n-th attempt carries invalid fields (0 = never)
    pub invalid_every: usize,
}

impl Default for FloodConfig {
    fn default() -> Self {
        Self {
            total_attempts: 20,
            interval: Duration::from_millis(100),
            invalid_every: 0,
        }
    }
}

/// Predefined flood patterns.
impl FloodConfig {
    /// Button mashing: many clicks in quick succession.
    pub fn button_mash() -> Self {
        Self {
            total_attempts: 50,
            interval: Duration::from_millis(20),
            ..Default::default()
        }
    }

    /// Scripted spam, one submission every ten seconds for ten minutes.
    pub fn steady_spam() -> Self {
        Self {
            total_attempts: 60,
            interval: Duration::from_secs(10),
            ..Default::default()
        }
    }

    /// Slow, legitimate pace: one submission a minute.
    pub fn patient_user() -> Self {
        Self {
            total_attempts: 10,
            interval: Duration::from_secs(61),
            ..Default::default()
        }
    }

    /// Probing with garbage mixed into otherwise valid submissions.
    pub fn probing() -> Self {
        Self {
            total_attempts: 30,
            interval: Duration::from_secs(1),
            invalid_every: 2,
        }
    }

    /// Wall-clock span covered by the pattern.
    pub fn span(&self) -> Duration {
        self.interval * self.total_attempts as u32
    }

    /// Upper bound on accepted submissions for a sliding window limiter.
    pub fn max_accepted(&self, max_attempts: u32, window: Duration) -> usize {
        let windows = (self.span().as_millis() / window.as_millis().max(1)) as usize + 1;
        (windows * max_attempts as usize).min(self.total_attempts)
    }
}
