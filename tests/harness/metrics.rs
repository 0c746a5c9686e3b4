// SPDX-FileCopyrightText: 2025 Hyperpolymath
// SPDX-License-Identifier: PMPL-1.0-or-later

//! Outcome tallies for flood simulations.

use contact_guard::SubmitError;
use std::collections::HashMap;
use std::fmt;

/// Possible outcomes for a submit attempt.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Outcome {
    Sent,
    RateLimited,
    Invalid,
    AlreadySubmitting,
    TransportFailed,
}

impl Outcome {
    pub fn of<T>(result: &Result<T, SubmitError>) -> Self {
        match result {
            Ok(_) => Outcome::Sent,
            Err(SubmitError::RateLimited { .. }) => Outcome::RateLimited,
            Err(SubmitError::Invalid(_)) => Outcome::Invalid,
            Err(SubmitError::AlreadySubmitting) => Outcome::AlreadySubmitting,
            Err(SubmitError::Transport(_)) => Outcome::TransportFailed,
        }
    }
}

/// Counts outcomes during a simulation.
#[derive(Debug, Default)]
pub struct FloodMetrics {
    outcomes: HashMap<Outcome, usize>,
    total: usize,
}

impl FloodMetrics {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn record(&mut self, outcome: Outcome) {
        *self.outcomes.entry(outcome).or_insert(0) += 1;
        self.total += 1;
    }

    pub fn count(&self, outcome: Outcome) -> usize {
        self.outcomes.get(&outcome).copied().unwrap_or(0)
    }

    pub fn total(&self) -> usize {
        self.total
    }

    /// Share of attempts that did not result in a sent message.
    pub fn block_rate(&self) -> f64 {
        if self.total == 0 {
            0.0
        } else {
            1.0 - self.count(Outcome::Sent) as f64 / self.total as f64
        }
    }
}

impl fmt::Display for FloodMetrics {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "=== Flood Report ===")?;
        writeln!(f, "Total attempts:     {}", self.total)?;
        writeln!(f, "Sent:               {}", self.count(Outcome::Sent))?;
        writeln!(f, "Rate limited:       {}", self.count(Outcome::RateLimited))?;
        writeln!(f, "Invalid:            {}", self.count(Outcome::Invalid))?;
        writeln!(f, "Already submitting: {}", self.count(Outcome::AlreadySubmitting))?;
        writeln!(f, "Transport failed:   {}", self.count(Outcome::TransportFailed))?;
        write!(f, "Block rate:         {:.1}%", self.block_rate() * 100.0)
    }
}
