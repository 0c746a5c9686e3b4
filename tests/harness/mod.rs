// SPDX-FileCopyrightText: 2025 Hyperpolymath
// SPDX-License-Identifier: PMPL-1.0-or-later

//! Test harness for contact form abuse simulation.
//!
//! Payload generators, submission flood patterns and outcome tallies used
//! to check that sanitization, validation and rate limiting hold up.

#![allow(dead_code)]

pub mod attacks;
pub mod generators;
pub mod metrics;

use contact_guard::notify::{Notice, Notifier};
use std::sync::{Arc, Mutex};

/// Notifier that keeps every notice for later inspection.
#[derive(Debug, Clone, Default)]
pub struct RecordingNotifier {
    notices: Arc<Mutex<Vec<Notice>>>,
}

impl RecordingNotifier {
    pub fn notices(&self) -> Vec<Notice> {
        self.notices.lock().unwrap().clone()
    }
}

impl Notifier for RecordingNotifier {
    fn notify(&self, notice: Notice) {
        self.notices.lock().unwrap().push(notice);
    }
}
