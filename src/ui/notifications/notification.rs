// SPDX-License-Identifier: MPL-2.0
//! Toast content: a translated message, its urgency and where it came from.

use crate::domain::error::FetchError;
use crate::ui::design_tokens::palette;
use iced::Color;
use std::time::Duration;

/// Handle to a toast held by the [`Manager`](super::Manager).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct NotificationId(pub(super) u64);

/// How urgent a toast is. Decides its accent color and lifetime.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
    Info,
    Warning,
    /// Stays until dismissed.
    Error,
}

impl Severity {
    #[must_use]
    pub fn color(self) -> Color {
        match self {
            Severity::Info => palette::INFO_500,
            Severity::Warning => palette::WARNING_500,
            Severity::Error => palette::ERROR_500,
        }
    }

    /// Text glyph shown at the start of the toast.
    #[must_use]
    pub fn glyph(self) -> &'static str {
        match self {
            Severity::Info => "\u{2139}",
            Severity::Warning | Severity::Error => "\u{26A0}",
        }
    }

    /// Time on screen before the toast goes away on its own.
    #[must_use]
    pub fn lifetime(self) -> Option<Duration> {
        match self {
            Severity::Info => Some(Duration::from_secs(3)),
            Severity::Warning => Some(Duration::from_secs(5)),
            Severity::Error => None,
        }
    }
}

/// What raised a toast. Lets the app retract a whole group at once, e.g.
/// search failures once a page finally arrives.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Source {
    /// A page fetch against the image service.
    Search,
    /// Something the user typed.
    Input,
    /// Configuration and client setup.
    Startup,
}

/// One toast. Resolved to text at render time so a locale change applies.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notification {
    severity: Severity,
    source: Source,
    message_key: String,
    message_args: Vec<(String, String)>,
}

impl Notification {
    pub fn new(severity: Severity, source: Source, message_key: impl Into<String>) -> Self {
        Self {
            severity,
            source,
            message_key: message_key.into(),
            message_args: Vec::new(),
        }
    }

    /// Error toast for a page fetch that failed.
    pub fn search_failed(error: &FetchError) -> Self {
        let notification = Self::new(Severity::Error, Source::Search, error.i18n_key());
        match error {
            FetchError::Status(code) => notification.with_arg("code", code.to_string()),
            FetchError::Network(detail) | FetchError::Payload(detail) => {
                notification.with_arg("detail", detail.clone())
            }
            FetchError::MissingApiKey => notification,
        }
    }

    /// Warning shown when the search bar is submitted blank.
    pub fn empty_query() -> Self {
        Self::new(Severity::Warning, Source::Input, "notification-empty-query")
    }

    pub fn startup(severity: Severity, message_key: impl Into<String>) -> Self {
        Self::new(severity, Source::Startup, message_key)
    }

    /// Adds a Fluent argument for the message.
    #[must_use]
    pub fn with_arg(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.message_args.push((key.into(), value.into()));
        self
    }

    #[must_use]
    pub fn severity(&self) -> Severity {
        self.severity
    }

    #[must_use]
    pub fn source(&self) -> Source {
        self.source
    }

    #[must_use]
    pub fn message_key(&self) -> &str {
        &self.message_key
    }

    #[must_use]
    pub fn message_args(&self) -> &[(String, String)] {
        &self.message_args
    }
}
