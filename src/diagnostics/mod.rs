// SPDX-License-Identifier: MPL-2.0
//! Diagnostics module for recording notification lifecycle history.
//!
//! A [`DiagnosticsHandle`] attached to a notification center receives one
//! [`LifecycleEvent`] per show, phase change and dismissal request. Events
//! live in a memory-bounded [`CircularBuffer`] and can be exported as JSON.
//!
//! # Architecture
//!
//! - [`CircularBuffer`]: Generic ring buffer with configurable capacity
//! - [`LifecycleEvent`]: Timestamped event with a [`LifecycleEventKind`]
//! - [`DiagnosticsHandle`]: Cheap-to-clone shared recorder

mod buffer;
mod events;
mod export;

use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use crate::config::{MAX_HISTORY_CAPACITY, MIN_HISTORY_CAPACITY};
use crate::error::Result;
use crate::ui::notifications::NotificationId;

pub use buffer::CircularBuffer;
pub use events::{DismissCause, LifecycleEvent, LifecycleEventKind};
pub use export::{default_export_directory, generate_default_filename, write_atomic};

/// Shared recorder for lifecycle events.
///
/// This handle is cheap to clone; all clones write to the same buffer.
#[derive(Debug, Clone)]
pub struct DiagnosticsHandle {
    buffer: Arc<Mutex<CircularBuffer<LifecycleEvent>>>,
}

impl DiagnosticsHandle {
    /// Creates a recorder keeping the most recent `capacity` events,
    /// clamped to the supported range.
    #[must_use]
    pub fn new(capacity: usize) -> Self {
        let capacity = capacity.clamp(MIN_HISTORY_CAPACITY, MAX_HISTORY_CAPACITY);
        Self {
            buffer: Arc::new(Mutex::new(CircularBuffer::new(capacity))),
        }
    }

    /// Records an event for `notification`, stamped with the current time.
    pub fn record(&self, notification: NotificationId, kind: LifecycleEventKind) {
        self.lock().push(LifecycleEvent::new(notification, kind));
    }

    /// Returns a copy of all retained events, oldest first.
    #[must_use]
    pub fn events(&self) -> Vec<LifecycleEvent> {
        self.lock().iter().cloned().collect()
    }

    /// Returns the retained events for one notification.
    #[must_use]
    pub fn events_for(&self, notification: NotificationId) -> Vec<LifecycleEvent> {
        self.lock()
            .iter()
            .filter(|event| event.notification == notification)
            .cloned()
            .collect()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.lock().len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.lock().is_empty()
    }

    #[must_use]
    pub fn capacity(&self) -> usize {
        self.lock().capacity()
    }

    pub fn clear(&self) {
        self.lock().clear();
    }

    /// Serializes the retained history as pretty-printed JSON.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Export`](crate::error::Error::Export) if serialization fails.
    pub fn export_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(&self.events())?)
    }

    /// Writes the history to `path`.
    ///
    /// # Errors
    ///
    /// Returns an error if serialization or the write fails.
    pub fn export_to_file(&self, path: &Path) -> Result<()> {
        let json = self.export_json()?;
        write_atomic(path, &json)?;
        tracing::info!(path = %path.display(), events = self.len(), "exported notification history");
        Ok(())
    }

    /// Writes the history to a timestamped file in the default export
    /// directory and returns its path.
    ///
    /// # Errors
    ///
    /// Returns an error if serialization or the write fails.
    pub fn export_to_default_location(&self) -> Result<PathBuf> {
        let path = default_export_directory().join(generate_default_filename());
        self.export_to_file(&path)?;
        Ok(path)
    }

    fn lock(&self) -> MutexGuard<'_, CircularBuffer<LifecycleEvent>> {
        self.buffer.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

impl Default for DiagnosticsHandle {
    fn default() -> Self {
        Self::new(crate::config::DEFAULT_HISTORY_CAPACITY)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ui::notifications::Phase;
    use tempfile::tempdir;

    fn id(raw: u64) -> NotificationId {
        NotificationId::from_raw(raw)
    }

    #[test]
    fn capacity_is_clamped() {
        assert_eq!(DiagnosticsHandle::new(0).capacity(), MIN_HISTORY_CAPACITY);
        assert_eq!(
            DiagnosticsHandle::new(usize::MAX).capacity(),
            MAX_HISTORY_CAPACITY
        );
    }

    #[test]
    fn clones_share_history() {
        let handle = DiagnosticsHandle::default();
        let clone = handle.clone();

        clone.record(id(1), LifecycleEventKind::PhaseChanged { phase: Phase::Visible });

        assert_eq!(handle.len(), 1);
        assert_eq!(handle.events_for(id(1)).len(), 1);
        assert!(handle.events_for(id(2)).is_empty());
    }

    #[test]
    fn oldest_events_are_evicted() {
        let handle = DiagnosticsHandle::new(MIN_HISTORY_CAPACITY);
        for raw in 0..(MIN_HISTORY_CAPACITY as u64 + 5) {
            handle.record(id(raw), LifecycleEventKind::PhaseChanged { phase: Phase::Removed });
        }

        let events = handle.events();
        assert_eq!(events.len(), MIN_HISTORY_CAPACITY);
        assert_eq!(events[0].notification, id(5));
    }

    #[test]
    fn export_json_is_an_array() {
        let handle = DiagnosticsHandle::default();
        handle.record(
            id(4),
            LifecycleEventKind::DismissRequested {
                cause: DismissCause::Manual,
            },
        );

        let json = handle.export_json().expect("export should succeed");
        let value: serde_json::Value = serde_json::from_str(&json).expect("valid json");

        assert_eq!(value.as_array().map(Vec::len), Some(1));
        assert_eq!(value[0]["kind"]["cause"], "manual");
    }

    #[test]
    fn export_to_file_writes_history() {
        let dir = tempdir().expect("failed to create temp dir");
        let path = dir.path().join("history.json");
        let handle = DiagnosticsHandle::default();
        handle.record(id(1), LifecycleEventKind::PhaseChanged { phase: Phase::Entering });

        handle.export_to_file(&path).expect("export should succeed");

        let written = std::fs::read_to_string(&path).expect("file exists");
        assert!(written.contains("entering"));
    }
}
