// SPDX-License-Identifier: MPL-2.0
//! Lifecycle event types recorded by the notification center.
//!
//! Message text is never recorded, only its length, so an exported
//! history carries no user content.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::ui::notifications::{NotificationId, Phase, Severity};

/// Why a notification started leaving.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DismissCause {
    /// Its display lifetime ran out.
    Timeout,
    /// A caller removed it.
    Manual,
    /// It was swept by a clear-all.
    ClearAll,
}

/// The type and associated data for a lifecycle event.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum LifecycleEventKind {
    /// A notification was accepted by the center.
    Shown {
        severity: Severity,
        message_chars: usize,
        /// Effective lifetime in milliseconds, `0` when sticky.
        lifetime_ms: i64,
    },
    /// A notification entered a new phase.
    PhaseChanged { phase: Phase },
    /// A dismissal was started.
    DismissRequested { cause: DismissCause },
}

/// A lifecycle event with its wall-clock timestamp.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LifecycleEvent {
    pub notification: NotificationId,
    pub at: DateTime<Utc>,
    pub kind: LifecycleEventKind,
}

impl LifecycleEvent {
    /// Creates an event stamped with the current time.
    #[must_use]
    pub fn new(notification: NotificationId, kind: LifecycleEventKind) -> Self {
        Self {
            notification,
            at: Utc::now(),
            kind,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn shown_event_serializes_with_type_tag() {
        let event = LifecycleEvent::new(
            NotificationId::from_raw(3),
            LifecycleEventKind::Shown {
                severity: Severity::Warning,
                message_chars: 12,
                lifetime_ms: 3000,
            },
        );

        let json = serde_json::to_value(&event).expect("serialization should succeed");

        assert_eq!(json["notification"], 3);
        assert_eq!(json["kind"]["type"], "shown");
        assert_eq!(json["kind"]["severity"], "warning");
        assert_eq!(json["kind"]["lifetime_ms"], 3000);
    }

    #[test]
    fn phase_event_deserializes() {
        let json = r#"{
            "notification": 9,
            "at": "2026-01-02T03:04:05Z",
            "kind": { "type": "phase_changed", "phase": "leaving" }
        }"#;

        let event: LifecycleEvent =
            serde_json::from_str(json).expect("deserialization should succeed");

        assert_eq!(event.notification, NotificationId::from_raw(9));
        assert_eq!(
            event.kind,
            LifecycleEventKind::PhaseChanged {
                phase: Phase::Leaving
            }
        );
    }

    #[test]
    fn dismiss_cause_uses_snake_case() {
        let json = serde_json::to_string(&DismissCause::ClearAll).expect("serialize");
        assert_eq!(json, "\"clear_all\"");
    }
}
