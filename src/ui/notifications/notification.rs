// SPDX-License-Identifier: MPL-2.0
//! Core notification data structures.
//!
//! This module defines the `Notification` construction parameters and the
//! `Severity` enum used throughout the notification system.

use super::lifetime::Lifetime;
use crate::ui::design_tokens::palette;
use iced::Color;
use serde::{Deserialize, Deserializer, Serialize};
use std::fmt;

/// Callback run once when a toast leaves the visible state.
pub type DismissCallback = Box<dyn FnOnce() + Send + 'static>;

/// Unique identifier for a notification.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct NotificationId(u64);

impl NotificationId {
    /// Creates a new unique notification ID.
    pub fn new() -> Self {
        use std::sync::atomic::{AtomicU64, Ordering};
        static COUNTER: AtomicU64 = AtomicU64::new(0);
        Self(COUNTER.fetch_add(1, Ordering::Relaxed))
    }
}

impl Default for NotificationId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for NotificationId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// Presentation category of a toast. Only affects its background color.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    #[default]
    Info,
    Warning,
    Error,
    Success,
}

impl Severity {
    /// Parses a severity name. Unrecognized names fall back to `Info`.
    #[must_use]
    pub fn from_name(name: &str) -> Self {
        match name.trim().to_ascii_lowercase().as_str() {
            "warning" => Severity::Warning,
            "error" => Severity::Error,
            "success" => Severity::Success,
            _ => Severity::Info,
        }
    }

    /// Returns the background color for this severity level.
    #[must_use]
    pub fn color(&self) -> Color {
        match self {
            Severity::Error => palette::ERROR_500,
            Severity::Warning => palette::WARNING_500,
            Severity::Success => palette::SUCCESS_500,
            Severity::Info => palette::INFO_500,
        }
    }

    #[must_use]
    pub fn name(&self) -> &'static str {
        match self {
            Severity::Info => "info",
            Severity::Warning => "warning",
            Severity::Error => "error",
            Severity::Success => "success",
        }
    }
}

impl From<&str> for Severity {
    fn from(name: &str) -> Self {
        Self::from_name(name)
    }
}

impl<'de> Deserialize<'de> for Severity {
    fn deserialize<D>(deserializer: D) -> std::result::Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let raw = String::deserialize(deserializer)?;
        Ok(Severity::from_name(&raw))
    }
}

/// Construction parameters for a toast.
///
/// `lifetime` and `on_dismiss` are fixed once the toast is shown; there is
/// no way to change them on a live toast.
pub struct Notification {
    message: String,
    severity: Severity,
    lifetime: Lifetime,
    on_dismiss: Option<DismissCallback>,
}

impl Notification {
    /// Creates an info notification with the default lifetime.
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            severity: Severity::default(),
            lifetime: Lifetime::default(),
            on_dismiss: None,
        }
    }

    pub fn info(message: impl Into<String>) -> Self {
        Self::new(message)
    }

    pub fn warning(message: impl Into<String>) -> Self {
        Self::new(message).severity(Severity::Warning)
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self::new(message).severity(Severity::Error)
    }

    pub fn success(message: impl Into<String>) -> Self {
        Self::new(message).severity(Severity::Success)
    }

    #[must_use]
    pub fn severity(mut self, severity: Severity) -> Self {
        self.severity = severity;
        self
    }

    #[must_use]
    pub fn lifetime(mut self, lifetime: Lifetime) -> Self {
        self.lifetime = lifetime;
        self
    }

    /// Sets the auto-dismiss delay. Zero or negative dismisses on show.
    #[must_use]
    pub fn duration_ms(self, millis: i64) -> Self {
        self.lifetime(Lifetime::from_millis(millis))
    }

    /// Registers the callback run when the toast is dismissed, whatever the cause.
    #[must_use]
    pub fn on_dismiss<F>(mut self, callback: F) -> Self
    where
        F: FnOnce() + Send + 'static,
    {
        self.on_dismiss = Some(Box::new(callback));
        self
    }

    #[must_use]
    pub fn message(&self) -> &str {
        &self.message
    }

    #[must_use]
    pub fn severity_level(&self) -> Severity {
        self.severity
    }

    #[must_use]
    pub fn lifetime_value(&self) -> Lifetime {
        self.lifetime
    }

    #[must_use]
    pub fn has_dismiss_callback(&self) -> bool {
        self.on_dismiss.is_some()
    }

    pub(super) fn into_parts(self) -> (String, Severity, Lifetime, Option<DismissCallback>) {
        (self.message, self.severity, self.lifetime, self.on_dismiss)
    }
}

impl fmt::Debug for Notification {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Notification")
            .field("message", &self.message)
            .field("severity", &self.severity)
            .field("lifetime", &self.lifetime)
            .field("on_dismiss", &self.on_dismiss.is_some())
            .finish()
    }
}
