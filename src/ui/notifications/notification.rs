// SPDX-License-Identifier: MPL-2.0
//! Core notification data structures.
//!
//! This module defines the `Notification` request, the `Severity` enum and
//! the lifecycle `Phase` used throughout the notification system.

use crate::domain::ui::AutoDismiss;
use crate::ui::design_tokens::palette;
use iced::Color;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::time::Instant;

/// Identifier of a notification, unique among the live notifications of
/// one center. Ids are never reused by the center that issued them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct NotificationId(u64);

impl NotificationId {
    pub(crate) fn from_raw(raw: u64) -> Self {
        Self(raw)
    }

    /// Returns the raw counter value.
    #[must_use]
    pub fn get(self) -> u64 {
        self.0
    }
}

impl fmt::Display for NotificationId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "toast-{}", self.0)
    }
}

/// Severity level determines visual styling only.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    /// Positive confirmation.
    Success,
    /// Failure needing attention.
    Error,
    /// Caution.
    Warning,
    /// Neutral notice.
    #[default]
    Info,
}

impl Severity {
    /// All severities, in declaration order.
    pub const ALL: [Severity; 4] = [
        Severity::Success,
        Severity::Error,
        Severity::Warning,
        Severity::Info,
    ];

    /// Parses a severity name, falling back to [`Severity::Info`] for
    /// anything unrecognised.
    #[must_use]
    pub fn from_name(name: &str) -> Self {
        match name.trim().to_ascii_lowercase().as_str() {
            "success" => Severity::Success,
            "error" => Severity::Error,
            "warning" => Severity::Warning,
            _ => Severity::Info,
        }
    }

    /// Returns the lower-case name used in styling hooks.
    #[must_use]
    pub fn name(self) -> &'static str {
        match self {
            Severity::Success => "success",
            Severity::Error => "error",
            Severity::Warning => "warning",
            Severity::Info => "info",
        }
    }

    /// Returns the icon shown next to the message.
    #[must_use]
    pub fn icon(self) -> IconKind {
        match self {
            Severity::Success => IconKind::CheckCircle,
            Severity::Error => IconKind::AlertCircle,
            Severity::Warning => IconKind::AlertTriangle,
            Severity::Info => IconKind::Info,
        }
    }

    /// Returns the accent color for this severity level.
    #[must_use]
    pub fn color(self) -> Color {
        match self {
            Severity::Success => palette::SUCCESS_500,
            Severity::Error => palette::ERROR_500,
            Severity::Warning => palette::WARNING_500,
            Severity::Info => palette::INFO_500,
        }
    }

    /// Returns the background tint for this severity level.
    #[must_use]
    pub fn surface(self) -> Color {
        match self {
            Severity::Success => palette::SUCCESS_50,
            Severity::Error => palette::ERROR_50,
            Severity::Warning => palette::WARNING_50,
            Severity::Info => palette::INFO_50,
        }
    }

    /// Returns the text color for this severity level.
    #[must_use]
    pub fn text_color(self) -> Color {
        match self {
            Severity::Success => palette::SUCCESS_800,
            Severity::Error => palette::ERROR_800,
            Severity::Warning => palette::WARNING_800,
            Severity::Info => palette::INFO_800,
        }
    }
}

impl From<&str> for Severity {
    fn from(name: &str) -> Self {
        Self::from_name(name)
    }
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Icon concept attached to a severity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum IconKind {
    CheckCircle,
    AlertCircle,
    AlertTriangle,
    Info,
}

impl IconKind {
    /// Icon name in the `lucide` naming scheme.
    #[must_use]
    pub fn name(self) -> &'static str {
        match self {
            IconKind::CheckCircle => "check-circle",
            IconKind::AlertCircle => "alert-circle",
            IconKind::AlertTriangle => "alert-triangle",
            IconKind::Info => "info",
        }
    }

    /// Text glyph used when no icon font is available.
    #[must_use]
    pub fn glyph(self) -> &'static str {
        match self {
            IconKind::CheckCircle => "\u{2714}",
            IconKind::AlertCircle => "\u{2716}",
            IconKind::AlertTriangle => "\u{26A0}",
            IconKind::Info => "\u{2139}",
        }
    }
}

/// Lifecycle stage of a notification. Ordering follows the lifecycle, so
/// a phase only ever moves to a greater value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Phase {
    Created,
    Entering,
    Visible,
    Leaving,
    Removed,
}

impl Phase {
    /// Returns whether the notification is still tracked by its center.
    #[must_use]
    pub fn is_live(self) -> bool {
        self < Phase::Removed
    }

    /// Returns whether a dismissal has already started.
    #[must_use]
    pub fn is_dismissing(self) -> bool {
        self >= Phase::Leaving
    }
}

/// Screen corner the toast container is anchored to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Anchor {
    #[default]
    TopRight,
    TopLeft,
    BottomRight,
    BottomLeft,
}

impl Anchor {
    /// Parses an anchor name such as `top-right`.
    #[must_use]
    pub fn from_name(name: &str) -> Option<Self> {
        match name.trim().to_ascii_lowercase().as_str() {
            "top-right" => Some(Anchor::TopRight),
            "top-left" => Some(Anchor::TopLeft),
            "bottom-right" => Some(Anchor::BottomRight),
            "bottom-left" => Some(Anchor::BottomLeft),
            _ => None,
        }
    }

    /// Returns the kebab-case name.
    #[must_use]
    pub fn name(self) -> &'static str {
        match self {
            Anchor::TopRight => "top-right",
            Anchor::TopLeft => "top-left",
            Anchor::BottomRight => "bottom-right",
            Anchor::BottomLeft => "bottom-left",
        }
    }

    #[must_use]
    pub fn is_top(self) -> bool {
        matches!(self, Anchor::TopRight | Anchor::TopLeft)
    }

    #[must_use]
    pub fn is_right(self) -> bool {
        matches!(self, Anchor::TopRight | Anchor::BottomRight)
    }
}

/// A request to display a message.
///
/// The message is untrusted text; renderers must present it verbatim and
/// never interpret it as markup.
#[derive(Debug, Clone, PartialEq)]
pub struct Notification {
    severity: Severity,
    message: String,
    /// Overrides the center's default lifetime when set.
    auto_dismiss: Option<AutoDismiss>,
}

impl Notification {
    /// Creates a new notification with the given severity and message.
    pub fn new(severity: impl Into<Severity>, message: impl Into<String>) -> Self {
        Self {
            severity: severity.into(),
            message: message.into(),
            auto_dismiss: None,
        }
    }

    /// Creates a success notification.
    pub fn success(message: impl Into<String>) -> Self {
        Self::new(Severity::Success, message)
    }

    /// Creates an error notification.
    pub fn error(message: impl Into<String>) -> Self {
        Self::new(Severity::Error, message)
    }

    /// Creates a warning notification.
    pub fn warning(message: impl Into<String>) -> Self {
        Self::new(Severity::Warning, message)
    }

    /// Creates an info notification.
    pub fn info(message: impl Into<String>) -> Self {
        Self::new(Severity::Info, message)
    }

    /// Sets a custom lifetime, overriding the center's default.
    #[must_use]
    pub fn auto_dismiss(mut self, policy: impl Into<AutoDismiss>) -> Self {
        self.auto_dismiss = Some(policy.into());
        self
    }

    #[must_use]
    pub fn severity(&self) -> Severity {
        self.severity
    }

    #[must_use]
    pub fn message(&self) -> &str {
        &self.message
    }

    /// Returns the custom lifetime, if one was set.
    #[must_use]
    pub fn custom_auto_dismiss(&self) -> Option<AutoDismiss> {
        self.auto_dismiss
    }
}

/// A notification tracked by a center, with its current phase.
#[derive(Debug, Clone)]
pub struct LiveNotification {
    pub(crate) id: NotificationId,
    pub(crate) notification: Notification,
    pub(crate) lifetime: AutoDismiss,
    pub(crate) phase: Phase,
    pub(crate) shown_at: Instant,
}

impl LiveNotification {
    #[must_use]
    pub fn id(&self) -> NotificationId {
        self.id
    }

    #[must_use]
    pub fn severity(&self) -> Severity {
        self.notification.severity()
    }

    #[must_use]
    pub fn message(&self) -> &str {
        self.notification.message()
    }

    /// Effective lifetime after applying the center's default.
    #[must_use]
    pub fn lifetime(&self) -> AutoDismiss {
        self.lifetime
    }

    #[must_use]
    pub fn phase(&self) -> Phase {
        self.phase
    }

    /// When `show` was called for this notification.
    #[must_use]
    pub fn shown_at(&self) -> Instant {
        self.shown_at
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    #[test]
    fn severity_colors_are_distinct() {
        let success = Severity::Success.color();
        let info = Severity::Info.color();
        let warning = Severity::Warning.color();
        let error = Severity::Error.color();

        assert_ne!(success, info);
        assert_ne!(success, warning);
        assert_ne!(success, error);
        assert_ne!(info, warning);
        assert_ne!(info, error);
        assert_ne!(warning, error);
    }

    #[test]
    fn unknown_severity_names_fall_back_to_info() {
        assert_eq!(Severity::from_name("critical"), Severity::Info);
        assert_eq!(Severity::from_name(""), Severity::Info);
        assert_eq!(Severity::from("danger"), Severity::Info);
    }

    #[test]
    fn severity_names_round_trip() {
        for severity in Severity::ALL {
            assert_eq!(Severity::from_name(severity.name()), severity);
        }
        assert_eq!(Severity::from_name(" Warning "), Severity::Warning);
    }

    #[test]
    fn severity_icons_match_presentation_table() {
        assert_eq!(Severity::Success.icon().name(), "check-circle");
        assert_eq!(Severity::Error.icon().name(), "alert-circle");
        assert_eq!(Severity::Warning.icon().name(), "alert-triangle");
        assert_eq!(Severity::Info.icon().name(), "info");
    }

    #[test]
    fn phases_are_ordered_along_the_lifecycle() {
        assert!(Phase::Created < Phase::Entering);
        assert!(Phase::Entering < Phase::Visible);
        assert!(Phase::Visible < Phase::Leaving);
        assert!(Phase::Leaving < Phase::Removed);
        assert!(Phase::Leaving.is_live());
        assert!(!Phase::Removed.is_live());
        assert!(Phase::Leaving.is_dismissing());
        assert!(!Phase::Visible.is_dismissing());
    }

    #[test]
    fn notification_constructors_set_correct_severity() {
        assert_eq!(Notification::success("").severity(), Severity::Success);
        assert_eq!(Notification::info("").severity(), Severity::Info);
        assert_eq!(Notification::warning("").severity(), Severity::Warning);
        assert_eq!(Notification::error("").severity(), Severity::Error);
    }

    #[test]
    fn notification_builder_sets_custom_lifetime() {
        let notification = Notification::new("warning", "Disk almost full")
            .auto_dismiss(Duration::from_millis(5000));

        assert_eq!(notification.severity(), Severity::Warning);
        assert_eq!(notification.message(), "Disk almost full");
        assert_eq!(
            notification.custom_auto_dismiss(),
            Some(AutoDismiss::After(Duration::from_millis(5000)))
        );
    }

    #[test]
    fn anchor_names_parse() {
        assert_eq!(Anchor::from_name("bottom-left"), Some(Anchor::BottomLeft));
        assert_eq!(Anchor::from_name("middle"), None);
        assert_eq!(Anchor::default(), Anchor::TopRight);
        assert!(Anchor::TopRight.is_top() && Anchor::TopRight.is_right());
    }

    #[test]
    fn notification_id_display_is_prefixed() {
        assert_eq!(NotificationId::from_raw(7).to_string(), "toast-7");
    }
}
