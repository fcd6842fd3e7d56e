// SPDX-License-Identifier: MPL-2.0
//! Toast lifetime domain type.
//!
//! A lifetime is how long a toast stays on screen before it dismisses
//! itself. Zero means the toast is dismissed as soon as it is shown.

use crate::app::config::DEFAULT_TOAST_DURATION_MS;
use std::time::Duration;

/// Auto-dismiss delay in milliseconds.
///
/// Negative inputs are clamped to zero, so the value is always a valid
/// `Duration`.
///
/// # Example
///
/// ```
/// use iced_toast::ui::notifications::Lifetime;
///
/// assert_eq!(Lifetime::from_millis(250).as_millis(), 250);
/// assert!(Lifetime::from_millis(-5).is_immediate());
/// assert_eq!(Lifetime::default().as_millis(), 3000);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct Lifetime(u64);

impl Lifetime {
    /// Creates a lifetime, clamping negative values to zero.
    #[must_use]
    pub fn from_millis(millis: i64) -> Self {
        Self(u64::try_from(millis).unwrap_or(0))
    }

    #[must_use]
    pub fn as_millis(self) -> u64 {
        self.0
    }

    #[must_use]
    pub fn as_duration(self) -> Duration {
        Duration::from_millis(self.0)
    }

    /// Returns true if the toast should not survive being shown.
    #[must_use]
    pub fn is_immediate(self) -> bool {
        self.0 == 0
    }
}

impl Default for Lifetime {
    fn default() -> Self {
        Self(DEFAULT_TOAST_DURATION_MS)
    }
}

impl From<Duration> for Lifetime {
    fn from(duration: Duration) -> Self {
        Self(u64::try_from(duration.as_millis()).unwrap_or(u64::MAX))
    }
}
