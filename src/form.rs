// SPDX-FileCopyrightText: 2025 Hyperpolymath
// SPDX-License-Identifier: PMPL-1.0-or-later

//! Contact form submission.
//!
//! `ContactForm` sits between the host UI's submit event and the (simulated)
//! delivery of the message:
//!
//! 1. Re-entrancy guard: one submission in flight at a time
//! 2. Rate limit check
//! 3. Sanitize every field
//! 4. Validate the sanitized fields
//! 5. Deliver, then notify the host of the outcome
//!
//! The caller's field values are taken by value and never written back; the
//! host resets its own state after a successful submission.

use crate::clock::{Clock, SystemClock};
use crate::config::Config;
use crate::limiter::{RateLimitResult, RateLimiter};
use crate::notify::{Notice, Notifier, TracingNotifier};
use crate::sanitizer::sanitize;
use crate::validator::{ContactValidator, Field, ValidationError};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::future::Future;
use std::sync::atomic::{AtomicBool, Ordering};
use std::time::Duration;
use thiserror::Error;
use tokio::sync::Mutex;
use tracing::{debug, info, warn};

/// Raw contact form values as typed by the user.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContactFields {
    pub name: String,
    pub email: String,
    #[serde(default)]
    pub phone: Option<String>,
    pub subject: String,
    pub message: String,
}

impl ContactFields {
    /// Update one field, as on a keystroke.
    pub fn set(&mut self, field: Field, value: impl Into<String>) {
        let value = value.into();
        match field {
            Field::Name => self.name = value,
            Field::Email => self.email = value,
            Field::Phone => self.phone = Some(value),
            Field::Subject => self.subject = value,
            Field::Message => self.message = value,
        }
    }

    /// Back to the freshly mounted, empty form.
    pub fn reset(&mut self) {
        *self = Self::default();
    }

    /// Copy with markup stripped from every field.
    pub fn sanitized(&self) -> Self {
        Self {
            name: sanitize(&self.name),
            email: sanitize(&self.email),
            phone: self.phone.as_deref().map(sanitize),
            subject: sanitize(&self.subject),
            message: sanitize(&self.message),
        }
    }
}

/// A message that passed every check.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Submission {
    pub fields: ContactFields,
    pub submitted_at: DateTime<Utc>,
}

/// Delivery failure.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[error("Delivery failed: {0}")]
pub struct TransportError(pub String);

/// Delivers accepted submissions.
pub trait Transport: Send + Sync {
    fn send(
        &self,
        submission: &Submission,
    ) -> impl Future<Output = Result<(), TransportError>> + Send;
}

/// Stand-in for a backend call: waits, then succeeds.
#[derive(Debug, Clone)]
pub struct SimulatedTransport {
    delay: Duration,
}

impl SimulatedTransport {
    pub fn new(delay: Duration) -> Self {
        Self { delay }
    }
}

impl Transport for SimulatedTransport {
    async fn send(&self, submission: &Submission) -> Result<(), TransportError> {
        tokio::time::sleep(self.delay).await;
        debug!(
            submitted_at = %submission.submitted_at,
            delay_ms = self.delay.as_millis() as u64,
            "Simulated delivery complete"
        );
        Ok(())
    }
}

/// Why a submission did not go through.
#[derive(Debug, Error)]
pub enum SubmitError {
    #[error("A submission is already in progress")]
    AlreadySubmitting,

    #[error("Too many attempts, retry in {}s", .retry_after.as_secs())]
    RateLimited { retry_after: Duration },

    #[error("Form has {} invalid field(s)", .0.len())]
    Invalid(Vec<ValidationError>),

    #[error(transparent)]
    Transport(#[from] TransportError),
}

/// Clears the in-flight flag when dropped, whatever the outcome.
struct InFlight<'a>(&'a AtomicBool);

impl<'a> InFlight<'a> {
    fn acquire(flag: &'a AtomicBool) -> Option<Self> {
        flag.compare_exchange(false, true, Ordering::AcqRel, Ordering::Acquire)
            .ok()
            .map(|_| Self(flag))
    }
}

impl Drop for InFlight<'_> {
    fn drop(&mut self) {
        self.0.store(false, Ordering::Release);
    }
}

/// Submission controller for one contact form instance.
pub struct ContactForm<T: Transport, C: Clock = SystemClock> {
    validator: ContactValidator,
    limiter: Mutex<RateLimiter<C>>,
    transport: T,
    notifier: Box<dyn Notifier>,
    submitting: AtomicBool,
}

impl ContactForm<SimulatedTransport> {
    /// Form with simulated delivery and log-only notices.
    pub fn from_config(config: &Config) -> Self {
        Self::new(
            ContactValidator::new(config.validation.clone()),
            RateLimiter::from_config(&config.rate_limit),
            SimulatedTransport::new(config.submission.simulated_delay()),
            Box::new(TracingNotifier),
        )
    }
}

impl<T: Transport, C: Clock> ContactForm<T, C> {
    pub fn new(
        validator: ContactValidator,
        limiter: RateLimiter<C>,
        transport: T,
        notifier: Box<dyn Notifier>,
    ) -> Self {
        Self {
            validator,
            limiter: Mutex::new(limiter),
            transport,
            notifier,
            submitting: AtomicBool::new(false),
        }
    }

    /// Replace the notifier, e.g. with the host's toast system.
    pub fn with_notifier(mut self, notifier: Box<dyn Notifier>) -> Self {
        self.notifier = notifier;
        self
    }

    /// Whether a submission is currently in flight.
    pub fn is_submitting(&self) -> bool {
        self.submitting.load(Ordering::Acquire)
    }

    /// Run the full submit pipeline on a copy of the form's values.
    pub async fn submit(&self, fields: ContactFields) -> Result<Submission, SubmitError> {
        let Some(_in_flight) = InFlight::acquire(&self.submitting) else {
            debug!("Submission already in flight, ignoring");
            return Err(SubmitError::AlreadySubmitting);
        };

        let verdict = self.limiter.lock().await.check_and_record();
        if let RateLimitResult::Limited { retry_after } = verdict {
            info!(
                retry_after_ms = retry_after.as_millis() as u64,
                "Submission rate limited"
            );
            self.notifier.notify(Notice::rate_limited());
            return Err(SubmitError::RateLimited { retry_after });
        }

        let clean = fields.sanitized();
        let errors = self.validator.validate(&clean);
        if !errors.is_empty() {
            info!(errors = errors.len(), "Submission rejected by validation");
            self.notifier.notify(Notice::invalid_form());
            return Err(SubmitError::Invalid(errors));
        }

        let submission = Submission {
            fields: clean,
            submitted_at: Utc::now(),
        };

        if let Err(err) = self.transport.send(&submission).await {
            warn!(error = %err, "Submission delivery failed");
            self.notifier.notify(Notice::send_failed());
            return Err(err.into());
        }

        info!("Contact message submitted");
        self.notifier.notify(Notice::sent());
        Ok(submission)
    }
}
