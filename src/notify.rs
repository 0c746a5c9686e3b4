// SPDX-FileCopyrightText: 2025 Hyperpolymath
// SPDX-License-Identifier: PMPL-1.0-or-later

//! Toast notifications handed to the host UI.

use serde::{Deserialize, Serialize};
use tracing::{info, warn};

/// Notice severity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NoticeLevel {
    Success,
    Error,
}

/// A message for the host to display.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Notice {
    pub level: NoticeLevel,
    pub title: String,
    pub description: String,
}

impl Notice {
    pub fn success(title: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            level: NoticeLevel::Success,
            title: title.into(),
            description: description.into(),
        }
    }

    pub fn error(title: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            level: NoticeLevel::Error,
            title: title.into(),
            description: description.into(),
        }
    }

    pub(crate) fn sent() -> Self {
        Self::success(
            "Mensagem enviada com sucesso!",
            "Entraremos em contato em até 24 horas.",
        )
    }

    pub(crate) fn invalid_form() -> Self {
        Self::error(
            "Erro no formulário",
            "Por favor, corrija os campos destacados.",
        )
    }

    pub(crate) fn rate_limited() -> Self {
        Self::error(
            "Muitas tentativas",
            "Aguarde alguns instantes antes de tentar novamente.",
        )
    }

    pub(crate) fn send_failed() -> Self {
        Self::error("Erro ao enviar mensagem", "Tente novamente mais tarde.")
    }

    pub(crate) fn link_failed(channel: &str) -> Self {
        Self::error(
            "Erro",
            format!("Não foi possível abrir o {channel}. Tente novamente."),
        )
    }
}

/// Fire-and-forget display capability provided by the host.
pub trait Notifier: Send + Sync {
    fn notify(&self, notice: Notice);
}

/// Notifier that only logs. Useful when no UI is attached.
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingNotifier;

impl Notifier for TracingNotifier {
    fn notify(&self, notice: Notice) {
        match notice.level {
            NoticeLevel::Success => info!(title = %notice.title, "Notice"),
            NoticeLevel::Error => warn!(title = %notice.title, "Notice"),
        }
    }
}
