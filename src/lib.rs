// SPDX-FileCopyrightText: 2025 Hyperpolymath
// SPDX-License-Identifier: PMPL-1.0-or-later

//! Contact Guard
//!
//! Input hardening for the contact form of the chatbot marketing site:
//!
//! - Markup stripping for every user-supplied field
//! - Field rules (name, email, optional Brazilian phone, subject, message)
//! - Safe WhatsApp, mailto and tel links
//! - Sliding window rate limit on submissions
//! - Single in-flight submission guard with simulated delivery
//!
//! The host UI owns the form state and the toast system; this crate only
//! receives copies of the field values and reports back through
//! [`notify::Notifier`].

pub mod clock;
pub mod config;
pub mod form;
pub mod limiter;
pub mod link;
pub mod notify;
pub mod sanitizer;
pub mod telemetry;
pub mod validator;

pub use config::Config;
pub use form::{ContactFields, ContactForm, SubmitError};
pub use limiter::{RateLimitResult, RateLimiter};
pub use link::{create_safe_whatsapp_url, Channel, LinkError, OutboundLink};
pub use sanitizer::sanitize;
pub use validator::{
    validate_brazilian_phone, validate_contact_form, validate_email, validate_length, Field,
    ValidationError,
};
