// SPDX-FileCopyrightText: 2025 Hyperpolymath
// SPDX-License-Identifier: PMPL-1.0-or-later

//! Outbound contact links.
//!
//! Builds WhatsApp deep-links, `mailto:` and `tel:` links from configured or
//! user-supplied values. Phone numbers are reduced to digits and checked,
//! message text is sanitized and percent-encoded, so the resulting URL
//! carries no raw user content.

use crate::config::MessagingConfig;
use crate::notify::{Notice, Notifier};
use crate::sanitizer::sanitize;
use crate::validator::{digits_only, validate_brazilian_phone, validate_email};
use serde::Serialize;
use thiserror::Error;
use tracing::{debug, warn};
use url::Url;

/// Default WhatsApp deep-link base.
pub const WHATSAPP_BASE_URL: &str = "https://wa.me/";

const BRAZIL_COUNTRY_CODE: &str = "55";

/// Link construction errors.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum LinkError {
    #[error("Invalid phone number format")]
    InvalidPhone,

    #[error("Invalid email address")]
    InvalidEmail,

    #[error("Invalid link base URL: {0}")]
    InvalidBaseUrl(#[from] url::ParseError),
}

/// A link the host must open in a new browsing context with no referrer
/// and no `window.opener`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct OutboundLink {
    pub url: String,
    pub target: &'static str,
    pub rel: &'static str,
}

/// The contact affordance a link belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Channel {
    WhatsApp,
    Email,
    Phone,
}

impl Channel {
    /// Name shown to the user.
    pub fn label(self) -> &'static str {
        match self {
            Channel::WhatsApp => "WhatsApp",
            Channel::Email => "e-mail",
            Channel::Phone => "telefone",
        }
    }
}

impl OutboundLink {
    fn new_window(url: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            target: "_blank",
            rel: "noopener noreferrer",
        }
    }
}

/// Build `https://wa.me/<digits>[?text=<encoded>]` for a Brazilian number.
pub fn create_safe_whatsapp_url(phone: &str, message: Option<&str>) -> Result<String, LinkError> {
    whatsapp_url(WHATSAPP_BASE_URL, phone, message)
}

/// Digits of a valid Brazilian number, with `55` prepended when missing.
fn with_country_code(phone: &str) -> Result<String, LinkError> {
    let digits = digits_only(phone);
    if !validate_brazilian_phone(&digits) {
        debug!(digit_count = digits.len(), "Rejected phone number");
        return Err(LinkError::InvalidPhone);
    }

    if digits.starts_with(BRAZIL_COUNTRY_CODE) {
        Ok(digits)
    } else {
        Ok(format!("{BRAZIL_COUNTRY_CODE}{digits}"))
    }
}

fn whatsapp_url(base: &str, phone: &str, message: Option<&str>) -> Result<String, LinkError> {
    let number = with_country_code(phone)?;

    // The number is appended as a path segment, so the base path must end in `/`.
    let mut base = Url::parse(base)?;
    if !base.path().ends_with('/') {
        let path = format!("{}/", base.path());
        base.set_path(&path);
    }
    let mut url = base.join(&number)?;

    let text = message
        .map(|m| urlencoding::encode(&sanitize(m)).into_owned())
        .unwrap_or_default();
    if !text.is_empty() {
        url.set_query(Some(&format!("text={text}")));
    }

    Ok(url.to_string())
}

/// Contact affordances shown next to the form.
#[derive(Debug, Clone, Default)]
pub struct ContactChannels {
    config: MessagingConfig,
}

impl ContactChannels {
    pub fn new(config: MessagingConfig) -> Self {
        Self { config }
    }

    /// WhatsApp chat with the configured number. The base URL gets a
    /// trailing `/` if it lacks one. `None` uses the configured
    /// greeting; `Some("")` opens the chat with no pre-filled text.
    pub fn whatsapp(&self, message: Option<&str>) -> Result<OutboundLink, LinkError> {
        let message = message.unwrap_or(self.config.whatsapp_greeting.as_str());
        whatsapp_url(
            &self.config.whatsapp_base_url,
            &self.config.whatsapp_phone,
            Some(message),
        )
        .map(OutboundLink::new_window)
    }

    /// `mailto:` link for the configured address.
    pub fn email(&self) -> Result<OutboundLink, LinkError> {
        let address = self.config.email.trim();
        if !validate_email(address) {
            return Err(LinkError::InvalidEmail);
        }
        Ok(OutboundLink::new_window(format!("mailto:{address}")))
    }

    /// `tel:` link for the configured number, always in `+55` form.
    pub fn phone_call(&self) -> Result<OutboundLink, LinkError> {
        let number = with_country_code(&self.config.phone)?;
        Ok(OutboundLink::new_window(format!("tel:+{number}")))
    }
}

/// Hand back the link to open, or show a generic error instead of navigating.
pub fn open_or_notify(
    channel: Channel,
    result: Result<OutboundLink, LinkError>,
    notifier: &dyn Notifier,
) -> Option<OutboundLink> {
    match result {
        Ok(link) => Some(link),
        Err(err) => {
            warn!(?channel, error = %err, "Outbound link refused");
            notifier.notify(Notice::link_failed(channel.label()));
            None
        }
    }
}
