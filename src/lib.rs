// SPDX-License-Identifier: MPL-2.0
//! `iced_toast` provides transient toast notifications for the Iced GUI
//! framework.
//!
//! A toast shows a message on a severity-colored card, dismisses itself
//! after a countdown, and can be closed early. The crate also ships a small
//! demo application that hosts a stack of toasts.

pub mod app;
pub mod error;
pub mod logging;
pub mod ui;

pub use ui::notifications::{Lifetime, Manager, Notification, Severity, Toast};
