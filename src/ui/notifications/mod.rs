// SPDX-License-Identifier: MPL-2.0
//! Toast notifications.
//!
//! A toast is a transient message overlay: it shows a message on a
//! severity-colored card, dismisses itself after its lifetime, and can be
//! closed early with its dismiss button. Its dismiss callback runs exactly
//! once, whichever trigger comes first.
//!
//! # Components
//!
//! - [`notification`] - `Notification` construction parameters and `Severity`
//! - [`lifetime`] - `Lifetime`, the auto-dismiss delay
//! - [`toast`] - `Toast`, the widget and its two-phase state machine
//! - [`manager`] - `Manager`, a host-side stack of toasts
//!
//! # Usage
//!
//! ```ignore
//! use iced_toast::ui::notifications::{Manager, Notification};
//!
//! let mut manager = Manager::new();
//!
//! // Returns the countdown task; hand it back to the runtime.
//! let task = manager
//!     .push(Notification::success("Saved successfully").duration_ms(1500))
//!     .map(Message::Toast);
//!
//! // In update:
//! Message::Toast(message) => manager.update(message).map(Message::Toast),
//!
//! // In view:
//! stack![content, manager.view().map(Message::Toast)]
//! ```

pub mod lifetime;
pub mod manager;
pub mod notification;
pub mod toast;

pub use lifetime::Lifetime;
pub use manager::Manager;
pub use notification::{DismissCallback, Notification, NotificationId, Severity};
pub use toast::{DismissCause, Message, Phase, Toast};
