// SPDX-License-Identifier: MPL-2.0
//! Centralized default values for all configuration constants.
//!
//! This module is the single source of truth for default values used
//! across the crate.

// ==========================================================================
// Toast Defaults
// ==========================================================================

/// Default auto-dismiss delay of a toast (in milliseconds).
pub const DEFAULT_TOAST_DURATION_MS: u64 = 3000;

/// Default number of toasts stacked on screen at once.
pub const DEFAULT_MAX_VISIBLE_TOASTS: usize = 3;

/// Minimum stack height.
pub const MIN_MAX_VISIBLE_TOASTS: usize = 1;

/// Maximum stack height.
pub const MAX_MAX_VISIBLE_TOASTS: usize = 10;

// ==========================================================================
// Window Defaults
// ==========================================================================

pub const WINDOW_DEFAULT_WIDTH: f32 = 800.0;
pub const WINDOW_DEFAULT_HEIGHT: f32 = 600.0;
pub const MIN_WINDOW_WIDTH: f32 = 480.0;
pub const MIN_WINDOW_HEIGHT: f32 = 360.0;

const _: () = {
    assert!(MIN_MAX_VISIBLE_TOASTS >= 1);
    assert!(DEFAULT_MAX_VISIBLE_TOASTS >= MIN_MAX_VISIBLE_TOASTS);
    assert!(DEFAULT_MAX_VISIBLE_TOASTS <= MAX_MAX_VISIBLE_TOASTS);
    assert!(WINDOW_DEFAULT_WIDTH >= MIN_WINDOW_WIDTH);
    assert!(WINDOW_DEFAULT_HEIGHT >= MIN_WINDOW_HEIGHT);
};
