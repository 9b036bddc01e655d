// SPDX-License-Identifier: MPL-2.0
//! Top-level messages and runtime flags for the application.

use crate::documents::{FileId, KindFilter, SortOrder};
use crate::ui::notifications::{self, Anchor, Severity};
use std::path::PathBuf;
use std::time::Instant;

/// Top-level messages consumed by `App::update`.
#[derive(Debug, Clone)]
pub enum Message {
    Notification(notifications::NotificationMessage),
    /// Periodic tick driving toast timers.
    Tick(Instant),
    /// Periodic tick advancing in-flight uploads.
    UploadTick(Instant),
    /// Show a sample toast of the given severity.
    ShowToast(Severity),
    ClearToasts,
    /// A file was dropped on the window.
    FileDropped(PathBuf),
    /// Queue a fixed set of sample files, some of which are rejected.
    AddSampleFiles,
    RemoveFile(FileId),
    DraftChanged(String),
    SearchChanged(String),
    KindSelected(KindFilter),
    SortSelected(SortOrder),
    ClearFilters,
    ExportHistory,
}

/// Runtime flags passed from the launcher.
#[derive(Debug, Clone, Default)]
pub struct Flags {
    /// Settings file to use instead of the platform default.
    pub config_path: Option<PathBuf>,
    /// Overrides the default toast lifetime; `<= 0` makes toasts sticky.
    pub duration_ms: Option<i64>,
    /// Overrides the corner toasts are stacked in.
    pub anchor: Option<Anchor>,
}
