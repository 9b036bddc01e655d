// SPDX-License-Identifier: MPL-2.0
//! Centralized default values for all configuration constants.
//!
//! This module serves as the single source of truth for default values
//! used across the application. Constants are organized by category.
//!
//! # Categories
//!
//! - **Notifications**: Toast lifetime, transition delays, history size
//! - **Upload**: File size limit, accepted extensions, progress cadence
//! - **Counter**: Character counter target

use crate::domain::ui::newtypes::toast_bounds;

// ==========================================================================
// Notification Defaults
// ==========================================================================

/// Default toast lifetime in milliseconds (`<= 0` means sticky).
pub const DEFAULT_TOAST_DURATION_MS: i64 = toast_bounds::DEFAULT_DISMISS_MS as i64;

/// Default enter transition delay in milliseconds.
pub const DEFAULT_ENTER_DELAY_MS: u64 = toast_bounds::DEFAULT_ENTER_MS;

/// Default exit transition delay in milliseconds.
pub const DEFAULT_EXIT_DELAY_MS: u64 = toast_bounds::DEFAULT_EXIT_MS;

/// Default number of lifecycle events kept for diagnostics.
pub const DEFAULT_HISTORY_CAPACITY: usize = 200;

/// Minimum number of lifecycle events kept for diagnostics.
pub const MIN_HISTORY_CAPACITY: usize = 10;

/// Maximum number of lifecycle events kept for diagnostics.
pub const MAX_HISTORY_CAPACITY: usize = 10_000;

// ==========================================================================
// Upload Defaults
// ==========================================================================

/// Largest accepted upload (10 MiB).
pub const DEFAULT_MAX_UPLOAD_BYTES: u64 = 10 * 1024 * 1024;

/// Extensions accepted by the uploader, dot-prefixed and lower-case.
pub const DEFAULT_ALLOWED_EXTENSIONS: [&str; 4] = [".pdf", ".doc", ".docx", ".txt"];

/// Interval between simulated upload progress steps, in milliseconds.
pub const DEFAULT_PROGRESS_INTERVAL_MS: u64 = 200;

/// Largest random progress step, in percent.
pub const MAX_PROGRESS_STEP_PERCENT: f64 = 30.0;

// ==========================================================================
// Counter Defaults
// ==========================================================================

/// Default target length for the character counter.
pub const DEFAULT_COUNTER_TARGET: usize = 400;

// ==========================================================================
// Compile-time Validation
// ==========================================================================

const _: () = {
    assert!(DEFAULT_TOAST_DURATION_MS > 0);
    assert!(DEFAULT_ENTER_DELAY_MS <= toast_bounds::MAX_TRANSITION_MS);
    assert!(DEFAULT_EXIT_DELAY_MS <= toast_bounds::MAX_TRANSITION_MS);

    assert!(MIN_HISTORY_CAPACITY > 0);
    assert!(MAX_HISTORY_CAPACITY >= MIN_HISTORY_CAPACITY);
    assert!(DEFAULT_HISTORY_CAPACITY >= MIN_HISTORY_CAPACITY);
    assert!(DEFAULT_HISTORY_CAPACITY <= MAX_HISTORY_CAPACITY);

    assert!(DEFAULT_MAX_UPLOAD_BYTES > 0);
    assert!(DEFAULT_PROGRESS_INTERVAL_MS > 0);
    assert!(DEFAULT_COUNTER_TARGET > 0);
};
