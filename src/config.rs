// SPDX-FileCopyrightText: 2025 Hyperpolymath
// SPDX-License-Identifier: PMPL-1.0-or-later

//! Configuration for the contact form guard.
//!
//! Every field has a default matching the live site, so an empty JSON
//! object (`{}`) is a complete configuration.

use serde::{Deserialize, Serialize};
use std::time::Duration;
use thiserror::Error;

/// Configuration loading errors.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to parse configuration: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("Invalid configuration: {0}")]
    Invalid(String),
}

/// Configuration for the contact form guard.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    /// Submission rate limiting
    #[serde(default)]
    pub rate_limit: RateLimitConfig,

    /// Field length bounds
    #[serde(default)]
    pub validation: ValidationConfig,

    /// Simulated submission
    #[serde(default)]
    pub submission: SubmissionConfig,

    /// Outbound contact channels
    #[serde(default)]
    pub messaging: MessagingConfig,
}

/// Sliding window rate limit for form submissions.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RateLimitConfig {
    /// Accepted attempts per window (default: 3)
    #[serde(default = "default_max_attempts")]
    pub max_attempts: u32,

    /// Window length in milliseconds (default: 60000)
    #[serde(default = "default_window_ms")]
    pub window_ms: u64,
}

/// Inclusive character-count bounds, measured on trimmed input.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ValidationConfig {
    #[serde(default = "default_name_min")]
    pub name_min: usize,
    #[serde(default = "default_name_max")]
    pub name_max: usize,
    #[serde(default = "default_subject_min")]
    pub subject_min: usize,
    #[serde(default = "default_subject_max")]
    pub subject_max: usize,
    #[serde(default = "default_message_min")]
    pub message_min: usize,
    #[serde(default = "default_message_max")]
    pub message_max: usize,
}

/// Simulated submission settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SubmissionConfig {
    /// Artificial delay standing in for a network call (default: 1000)
    #[serde(default = "default_simulated_delay_ms")]
    pub simulated_delay_ms: u64,
}

/// Contact channels offered next to the form.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MessagingConfig {
    /// Deep-link base for WhatsApp (default: https://wa.me/)
    #[serde(default = "default_whatsapp_base_url")]
    pub whatsapp_base_url: String,

    /// WhatsApp number, any formatting
    #[serde(default = "default_phone")]
    pub whatsapp_phone: String,

    /// Pre-filled text for the "talk to us" button
    #[serde(default = "default_whatsapp_greeting")]
    pub whatsapp_greeting: String,

    /// Address for the mailto link
    #[serde(default = "default_email")]
    pub email: String,

    /// Number for the tel link
    #[serde(default = "default_phone")]
    pub phone: String,
}

fn default_max_attempts() -> u32 {
    3
}

fn default_window_ms() -> u64 {
    60_000
}

fn default_name_min() -> usize {
    2
}

fn default_name_max() -> usize {
    100
}

fn default_subject_min() -> usize {
    5
}

fn default_subject_max() -> usize {
    200
}

fn default_message_min() -> usize {
    10
}

fn default_message_max() -> usize {
    2000
}

fn default_simulated_delay_ms() -> u64 {
    1000
}

fn default_whatsapp_base_url() -> String {
    "https://wa.me/".to_string()
}

fn default_phone() -> String {
    "+55 (11) 99999-9999".to_string()
}

fn default_whatsapp_greeting() -> String {
    "Olá! Gostaria de saber mais sobre os chatbots da AutomatizaÍ".to_string()
}

fn default_email() -> String {
    "daniel@automatizai.com.br".to_string()
}

impl Default for RateLimitConfig {
    fn default() -> Self {
        Self {
            max_attempts: default_max_attempts(),
            window_ms: default_window_ms(),
        }
    }
}

impl Default for ValidationConfig {
    fn default() -> Self {
        Self {
            name_min: default_name_min(),
            name_max: default_name_max(),
            subject_min: default_subject_min(),
            subject_max: default_subject_max(),
            message_min: default_message_min(),
            message_max: default_message_max(),
        }
    }
}

impl Default for SubmissionConfig {
    fn default() -> Self {
        Self {
            simulated_delay_ms: default_simulated_delay_ms(),
        }
    }
}

impl Default for MessagingConfig {
    fn default() -> Self {
        Self {
            whatsapp_base_url: default_whatsapp_base_url(),
            whatsapp_phone: default_phone(),
            whatsapp_greeting: default_whatsapp_greeting(),
            email: default_email(),
            phone: default_phone(),
        }
    }
}

impl Config {
    /// Parse and check a JSON configuration document.
    pub fn from_json_str(json: &str) -> Result<Self, ConfigError> {
        let config: Config = serde_json::from_str(json)?;
        config.check()?;
        Ok(config)
    }

    /// Reject settings the limiter and validator cannot honor.
    pub fn check(&self) -> Result<(), ConfigError> {
        if self.rate_limit.max_attempts == 0 {
            return Err(ConfigError::Invalid(
                "rate_limit.max_attempts must be at least 1".to_string(),
            ));
        }
        if self.rate_limit.window_ms == 0 {
            return Err(ConfigError::Invalid(
                "rate_limit.window_ms must be at least 1".to_string(),
            ));
        }

        let v = &self.validation;
        for (field, min, max) in [
            ("name", v.name_min, v.name_max),
            ("subject", v.subject_min, v.subject_max),
            ("message", v.message_min, v.message_max),
        ] {
            if min > max {
                return Err(ConfigError::Invalid(format!(
                    "validation.{field}_min ({min}) exceeds {field}_max ({max})"
                )));
            }
        }

        Ok(())
    }
}

impl RateLimitConfig {
    /// Get the rate window duration
    pub fn window_duration(&self) -> Duration {
        Duration::from_millis(self.window_ms)
    }
}

impl SubmissionConfig {
    /// Get the simulated submission delay
    pub fn simulated_delay(&self) -> Duration {
        Duration::from_millis(self.simulated_delay_ms)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_document_uses_defaults() {
        let config = Config::from_json_str("{}").unwrap();
        assert_eq!(config.rate_limit.max_attempts, 3);
        assert_eq!(config.rate_limit.window_duration(), Duration::from_secs(60));
        assert_eq!(config.validation.name_min, 2);
        assert_eq!(config.validation.message_max, 2000);
        assert_eq!(config.submission.simulated_delay(), Duration::from_secs(1));
        assert_eq!(config.messaging.whatsapp_base_url, "https://wa.me/");
    }

    #[test]
    fn test_partial_override() {
        let config =
            Config::from_json_str(r#"{"rate_limit": {"window_ms": 1000}}"#).unwrap();
        assert_eq!(config.rate_limit.window_ms, 1000);
        assert_eq!(config.rate_limit.max_attempts, 3);
    }

    #[test]
    fn test_zero_attempts_rejected() {
        let result = Config::from_json_str(r#"{"rate_limit": {"max_attempts": 0}}"#);
        assert!(matches!(result, Err(ConfigError::Invalid(_))));
    }

    #[test]
    fn test_inverted_bounds_rejected() {
        let result = Config::from_json_str(r#"{"validation": {"subject_min": 300}}"#);
        match result {
            Err(ConfigError::Invalid(msg)) => assert!(msg.contains("subject_min")),
            other => panic!("expected invalid bounds, got {other:?}"),
        }
    }

    #[test]
    fn test_malformed_json() {
        assert!(matches!(
            Config::from_json_str("{not json"),
            Err(ConfigError::Parse(_))
        ));
    }
}
