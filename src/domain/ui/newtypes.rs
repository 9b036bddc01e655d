// SPDX-License-Identifier: MPL-2.0
//! UI newtypes.
//!
//! This module provides type-safe wrappers for notification timing values,
//! ensuring they are always within valid ranges.

use std::time::Duration;

// =============================================================================
// Toast Timing Bounds
// =============================================================================

/// Toast timing bounds, in milliseconds.
pub mod toast_bounds {
    /// Default display time before a toast dismisses itself.
    pub const DEFAULT_DISMISS_MS: u64 = 3000;
    /// Default delay between mounting a toast and showing it fully.
    pub const DEFAULT_ENTER_MS: u64 = 10;
    /// Default delay between starting the exit transition and detaching.
    pub const DEFAULT_EXIT_MS: u64 = 300;
    /// Upper bound for either transition delay.
    pub const MAX_TRANSITION_MS: u64 = 2000;
}

// =============================================================================
// AutoDismiss
// =============================================================================

/// How long a toast stays on screen before dismissing itself.
///
/// A zero or negative millisecond count means the toast is sticky and only
/// leaves through an explicit removal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AutoDismiss {
    /// Dismiss once the duration has elapsed since the toast was shown.
    After(Duration),
    /// Stay until removed manually.
    Never,
}

impl AutoDismiss {
    /// Builds a policy from a signed millisecond count (`<= 0` is sticky).
    #[must_use]
    pub fn from_millis(millis: i64) -> Self {
        match u64::try_from(millis) {
            Ok(0) | Err(_) => Self::Never,
            Ok(ms) => Self::After(Duration::from_millis(ms)),
        }
    }

    /// Returns the display duration, or `None` for sticky toasts.
    #[must_use]
    pub fn duration(self) -> Option<Duration> {
        match self {
            Self::After(duration) => Some(duration),
            Self::Never => None,
        }
    }

    /// Returns the policy as signed milliseconds (`0` when sticky).
    #[must_use]
    pub fn as_millis(self) -> i64 {
        match self {
            Self::After(duration) => i64::try_from(duration.as_millis()).unwrap_or(i64::MAX),
            Self::Never => 0,
        }
    }

    /// Returns whether the toast never dismisses itself.
    #[must_use]
    pub fn is_sticky(self) -> bool {
        matches!(self, Self::Never)
    }
}

impl Default for AutoDismiss {
    fn default() -> Self {
        Self::After(Duration::from_millis(toast_bounds::DEFAULT_DISMISS_MS))
    }
}

impl From<Duration> for AutoDismiss {
    fn from(duration: Duration) -> Self {
        if duration.is_zero() {
            Self::Never
        } else {
            Self::After(duration)
        }
    }
}

// =============================================================================
// TransitionDelay
// =============================================================================

/// Cosmetic delay of an enter or exit transition, clamped to 0–2000 ms.
///
/// A zero delay makes the matching phase change happen synchronously.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct TransitionDelay(Duration);

impl TransitionDelay {
    /// Creates a delay from milliseconds, clamping to the valid range.
    #[must_use]
    pub fn from_millis(millis: u64) -> Self {
        Self(Duration::from_millis(
            millis.min(toast_bounds::MAX_TRANSITION_MS),
        ))
    }

    /// Default enter delay (10 ms).
    #[must_use]
    pub fn enter() -> Self {
        Self::from_millis(toast_bounds::DEFAULT_ENTER_MS)
    }

    /// Default exit delay (300 ms).
    #[must_use]
    pub fn exit() -> Self {
        Self::from_millis(toast_bounds::DEFAULT_EXIT_MS)
    }

    /// Zero delay.
    #[must_use]
    pub fn immediate() -> Self {
        Self(Duration::ZERO)
    }

    /// Returns the delay as a duration.
    #[must_use]
    pub fn as_duration(self) -> Duration {
        self.0
    }

    /// Returns whether the transition happens without waiting.
    #[must_use]
    pub fn is_immediate(self) -> bool {
        self.0.is_zero()
    }
}
