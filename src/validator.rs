// SPDX-FileCopyrightText: 2025 Hyperpolymath
// SPDX-License-Identifier: PMPL-1.0-or-later

//! Contact form validation.
//!
//! Implements the field rules for the contact form:
//! - Name, subject and message length bounds (trimmed character count)
//! - Email format (conservative RFC 5322 subset, at most 254 chars)
//! - Optional Brazilian phone number (mobile or landline, with or without
//!   the `55` country code)
//!
//! All five fields are always checked; each contributes at most one error.

use crate::config::ValidationConfig;
use crate::form::ContactFields;
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::sync::OnceLock;
use thiserror::Error;
use tracing::debug;

const EMAIL_MAX_LEN: usize = 254;

static EMAIL_REGEX: OnceLock<Regex> = OnceLock::new();

fn email_regex() -> &'static Regex {
    EMAIL_REGEX.get_or_init(|| {
        Regex::new(
            r"^[a-zA-Z0-9.!#$%&'*+/=?^_`{|}~-]+@[a-zA-Z0-9](?:[a-zA-Z0-9-]{0,61}[a-zA-Z0-9])?(?:\.[a-zA-Z0-9](?:[a-zA-Z0-9-]{0,61}[a-zA-Z0-9])?)*$",
        )
        .expect("email pattern is a valid regex")
    })
}

/// Contact form field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Field {
    Name,
    Email,
    Phone,
    Subject,
    Message,
}

impl Field {
    /// All fields, in validation order.
    pub const ALL: [Field; 5] = [
        Field::Name,
        Field::Email,
        Field::Phone,
        Field::Subject,
        Field::Message,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Name => "name",
            Self::Email => "email",
            Self::Phone => "phone",
            Self::Subject => "subject",
            Self::Message => "message",
        }
    }

    /// Input length cap the UI applies to this field, if any.
    pub fn input_cap(&self, config: &ValidationConfig) -> Option<usize> {
        match self {
            Self::Name => Some(config.name_max),
            Self::Email => Some(EMAIL_MAX_LEN),
            Self::Phone => None,
            Self::Subject => Some(config.subject_max),
            Self::Message => Some(config.message_max),
        }
    }
}

impl std::fmt::Display for Field {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A failed field rule, ready to render inline next to the field.
#[derive(Debug, Error, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[error("{field}: {message}")]
pub struct ValidationError {
    pub field: Field,
    pub message: String,
}

impl ValidationError {
    fn new(field: Field, message: impl Into<String>) -> Self {
        Self {
            field,
            message: message.into(),
        }
    }
}

/// Check an email address. Anchored match, no partial acceptance.
pub fn validate_email(email: &str) -> bool {
    email.len() <= EMAIL_MAX_LEN && email_regex().is_match(email)
}

/// Check a Brazilian phone number after dropping every non-digit.
///
/// Accepted shapes, by digit count:
/// - 13: `55` + area + `9` + 8 digits (mobile)
/// - 12: `55` + area + 8 digits (landline)
/// - 11: area + `9` + 8 digits (mobile)
/// - 10: area + 8 digits (landline)
///
/// Area codes are not checked against the real numbering plan.
pub fn validate_brazilian_phone(phone: &str) -> bool {
    let digits = digits_only(phone);
    let bytes = digits.as_bytes();
    match bytes.len() {
        13 => digits.starts_with("55") && bytes[4] == b'9',
        12 => digits.starts_with("55"),
        11 => bytes[2] == b'9',
        10 => true,
        _ => false,
    }
}

/// Trimmed character count within `[min, max]`.
pub fn validate_length(input: &str, min: usize, max: usize) -> bool {
    let len = input.trim().chars().count();
    len >= min && len <= max
}

/// Keep ASCII digits only.
pub(crate) fn digits_only(input: &str) -> String {
    input.chars().filter(char::is_ascii_digit).collect()
}

/// Validate a contact form with the default bounds.
pub fn validate_contact_form(fields: &ContactFields) -> Vec<ValidationError> {
    ContactValidator::default().validate(fields)
}

/// Contact form validator.
#[derive(Debug, Clone, Default)]
pub struct ContactValidator {
    config: ValidationConfig,
}

impl ContactValidator {
    /// Create a new validator with the given configuration.
    pub fn new(config: ValidationConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &ValidationConfig {
        &self.config
    }

    /// Run every field rule, returning errors in field order.
    pub fn validate(&self, fields: &ContactFields) -> Vec<ValidationError> {
        let c = &self.config;
        let mut errors = Vec::new();

        if !validate_length(&fields.name, c.name_min, c.name_max) {
            errors.push(ValidationError::new(
                Field::Name,
                format!("Nome deve ter entre {} e {} caracteres", c.name_min, c.name_max),
            ));
        }

        if !validate_email(&fields.email) {
            errors.push(ValidationError::new(Field::Email, "Email inválido"));
        }

        if let Some(phone) = fields.phone.as_deref() {
            if !phone.trim().is_empty() && !validate_brazilian_phone(phone) {
                errors.push(ValidationError::new(
                    Field::Phone,
                    "Número de telefone inválido",
                ));
            }
        }

        if !validate_length(&fields.subject, c.subject_min, c.subject_max) {
            errors.push(ValidationError::new(
                Field::Subject,
                format!(
                    "Assunto deve ter entre {} e {} caracteres",
                    c.subject_min, c.subject_max
                ),
            ));
        }

        if !validate_length(&fields.message, c.message_min, c.message_max) {
            errors.push(ValidationError::new(
                Field::Message,
                format!(
                    "Mensagem deve ter entre {} e {} caracteres",
                    c.message_min, c.message_max
                ),
            ));
        }

        if !errors.is_empty() {
            let failed: Vec<&str> = errors.iter().map(|e| e.field.as_str()).collect();
            debug!(?failed, "Contact form invalid");
        }

        errors
    }
}

/// Per-field view of a validation pass, for inline rendering.
///
/// Built fresh from each submit attempt; entries are cleared one at a time
/// as the user edits the offending field.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FieldErrors {
    errors: Vec<ValidationError>,
}

impl FieldErrors {
    pub fn get(&self, field: Field) -> Option<&str> {
        self.errors
            .iter()
            .find(|e| e.field == field)
            .map(|e| e.message.as_str())
    }

    /// Drop the error for a field the user just edited.
    pub fn clear(&mut self, field: Field) {
        self.errors.retain(|e| e.field != field);
    }

    pub fn is_empty(&self) -> bool {
        self.errors.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &ValidationError> {
        self.errors.iter()
    }
}

impl From<Vec<ValidationError>> for FieldErrors {
    fn from(errors: Vec<ValidationError>) -> Self {
        Self { errors }
    }
}
