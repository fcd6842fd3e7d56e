// SPDX-License-Identifier: MPL-2.0
//! Top-level messages and runtime flags for the demo application.

use crate::ui::notifications::{self, Severity};

/// Top-level messages consumed by `App::update`.
#[derive(Debug, Clone)]
pub enum Message {
    /// Show a sample toast of the given severity.
    Show(Severity),
    /// Forwarded toast message (dismiss button or countdown).
    Toast(notifications::Message),
    /// Tear down every toast without running dismiss callbacks.
    ClearAll,
}

/// Runtime flags passed from the CLI to the application.
#[derive(Debug, Clone, Default)]
pub struct Flags {
    /// Message of a toast shown at startup.
    pub message: Option<String>,
    /// Severity name of the startup toast. Unknown names mean info.
    pub severity: Option<String>,
    /// Lifetime of the startup toast in milliseconds.
    pub duration_ms: Option<i64>,
    /// Optional config directory override (`--config-dir`).
    pub config_dir: Option<String>,
    /// Log filter (`--log-level`), used when `RUST_LOG` is unset.
    pub log_level: Option<String>,
}
