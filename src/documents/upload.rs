// SPDX-License-Identifier: MPL-2.0
//! Document uploads with validation and simulated progress.
//!
//! Files are checked against the size limit and the extension list before
//! an upload starts. Progress advances in random steps on each `advance`
//! call; hosts call it every `progress_interval`. Outcomes are reported as
//! toasts through a [`Notify`].

use crate::config::{UploadConfig, MAX_PROGRESS_STEP_PERCENT};
use crate::ui::notifications::{Notification, Notify};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use std::fmt;
use std::time::Duration;
use thiserror::Error;

const BYTES_PER_MIB: f64 = 1024.0 * 1024.0;

/// A file picked or dropped by the user.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SelectedFile {
    pub name: String,
    pub size: u64,
}

impl SelectedFile {
    pub fn new(name: impl Into<String>, size: u64) -> Self {
        Self {
            name: name.into(),
            size,
        }
    }

    /// Dot-prefixed, lower-cased text after the last `.`; the whole name
    /// when there is no dot.
    #[must_use]
    pub fn extension(&self) -> String {
        let last = self.name.rsplit('.').next().unwrap_or_default();
        format!(".{}", last.to_lowercase())
    }
}

/// Unique identifier of an upload within one uploader.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct FileId(u64);

impl fmt::Display for FileId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "file-{}", self.0)
    }
}

/// Why a file was not accepted.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum UploadRejection {
    #[error("File is too large. Please choose a file of {limit_mb}MB or less.")]
    TooLarge { limit_mb: u64 },
    #[error("This file type is not supported.\nSupported formats: {supported}")]
    UnsupportedType { supported: String },
}

/// An upload in progress.
#[derive(Debug, Clone, PartialEq)]
pub struct Upload {
    id: FileId,
    file: SelectedFile,
    progress: f64,
}

impl Upload {
    #[must_use]
    pub fn id(&self) -> FileId {
        self.id
    }

    #[must_use]
    pub fn file(&self) -> &SelectedFile {
        &self.file
    }

    /// Rounded progress, 0 to 100.
    #[must_use]
    pub fn percent(&self) -> u8 {
        // Clamped to [0, 100] so the cast cannot truncate.
        self.progress.clamp(0.0, 100.0).round() as u8
    }

    /// Progress as a fraction for progress bars.
    #[must_use]
    pub fn fraction(&self) -> f32 {
        (self.progress.clamp(0.0, 100.0) / 100.0) as f32
    }
}

/// A finished upload.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UploadedFile {
    pub id: FileId,
    pub file: SelectedFile,
}

/// Validates files and tracks their simulated uploads.
#[derive(Debug)]
pub struct FileUploader<G: Rng = StdRng> {
    options: UploadConfig,
    rng: G,
    in_flight: Vec<Upload>,
    uploaded: Vec<UploadedFile>,
    next_id: u64,
}

impl FileUploader<StdRng> {
    /// Creates an uploader seeded from the operating system.
    #[must_use]
    pub fn new(options: UploadConfig) -> Self {
        Self::with_rng(options, StdRng::from_entropy())
    }
}

impl Default for FileUploader<StdRng> {
    fn default() -> Self {
        Self::new(UploadConfig::default())
    }
}

impl<G: Rng> FileUploader<G> {
    pub fn with_rng(options: UploadConfig, rng: G) -> Self {
        Self {
            options,
            rng,
            in_flight: Vec::new(),
            uploaded: Vec::new(),
            next_id: 0,
        }
    }

    #[must_use]
    pub fn options(&self) -> &UploadConfig {
        &self.options
    }

    #[must_use]
    pub fn progress_interval(&self) -> Duration {
        self.options.progress_interval()
    }

    /// Checks size first, then extension.
    ///
    /// # Errors
    ///
    /// Returns the reason the file cannot be uploaded.
    pub fn validate(&self, file: &SelectedFile) -> Result<(), UploadRejection> {
        if file.size > self.options.max_size_bytes {
            // Whole megabytes; the limit is far below f64's exact range.
            let limit_mb = (self.options.max_size_bytes as f64 / BYTES_PER_MIB).round() as u64;
            return Err(UploadRejection::TooLarge { limit_mb });
        }

        let extension = file.extension();
        if !self
            .options
            .allowed_extensions
            .iter()
            .any(|allowed| allowed.eq_ignore_ascii_case(&extension))
        {
            return Err(UploadRejection::UnsupportedType {
                supported: self.options.allowed_extensions.join(", "),
            });
        }

        Ok(())
    }

    /// Validates each file, posting an error toast for rejected ones, and
    /// starts uploads for the rest. Returns the ids of accepted files.
    pub fn handle_files<N: Notify + ?Sized>(
        &mut self,
        files: impl IntoIterator<Item = SelectedFile>,
        notify: &mut N,
    ) -> Vec<FileId> {
        let mut accepted = Vec::new();
        for file in files {
            match self.validate(&file) {
                Ok(()) => accepted.push(self.start(file)),
                Err(rejection) => {
                    tracing::debug!(name = %file.name, size = file.size, %rejection, "file rejected");
                    notify.post(Notification::error(rejection.to_string()));
                }
            }
        }
        accepted
    }

    /// Moves every in-flight upload forward by a random step. Completed
    /// uploads move to the uploaded list and post a success toast. Returns
    /// the ids completed by this call.
    pub fn advance<N: Notify + ?Sized>(&mut self, notify: &mut N) -> Vec<FileId> {
        for upload in &mut self.in_flight {
            let step = self.rng.gen::<f64>() * MAX_PROGRESS_STEP_PERCENT;
            upload.progress = (upload.progress + step).min(100.0);
        }

        let (done, pending): (Vec<Upload>, Vec<Upload>) = std::mem::take(&mut self.in_flight)
            .into_iter()
            .partition(|upload| upload.progress >= 100.0);
        self.in_flight = pending;

        done.into_iter()
            .map(|upload| {
                tracing::info!(id = %upload.id, name = %upload.file.name, "upload complete");
                notify.post(Notification::success(format!(
                    "{} uploaded",
                    upload.file.name
                )));
                let id = upload.id;
                self.uploaded.push(UploadedFile {
                    id,
                    file: upload.file,
                });
                id
            })
            .collect()
    }

    /// Drops an uploaded or in-flight file and posts an info toast.
    /// Unknown ids are ignored. Returns whether a file was removed.
    pub fn remove_file<N: Notify + ?Sized>(&mut self, id: FileId, notify: &mut N) -> bool {
        let before = self.in_flight.len() + self.uploaded.len();
        self.in_flight.retain(|upload| upload.id != id);
        self.uploaded.retain(|file| file.id != id);
        if self.in_flight.len() + self.uploaded.len() == before {
            return false;
        }

        tracing::debug!(%id, "file removed");
        notify.post(Notification::info("File removed"));
        true
    }

    pub fn in_flight(&self) -> &[Upload] {
        &self.in_flight
    }

    pub fn uploaded(&self) -> &[UploadedFile] {
        &self.uploaded
    }

    #[must_use]
    pub fn is_uploading(&self) -> bool {
        !self.in_flight.is_empty()
    }

    fn start(&mut self, file: SelectedFile) -> FileId {
        let id = FileId(self.next_id);
        self.next_id += 1;
        tracing::debug!(%id, name = %file.name, size = file.size, "upload started");
        self.in_flight.push(Upload {
            id,
            file,
            progress: 0.0,
        });
        id
    }
}

/// Formats a byte count with binary units: `0 Bytes`, `1.5 KB`, `10 MB`.
#[must_use]
pub fn format_file_size(bytes: u64) -> String {
    const UNITS: [&str; 4] = ["Bytes", "KB", "MB", "GB"];

    if bytes == 0 {
        return "0 Bytes".to_string();
    }

    let mut value = bytes as f64;
    let mut unit = 0;
    while value >= 1024.0 && unit < UNITS.len() - 1 {
        value /= 1024.0;
        unit += 1;
    }
    let rounded = (value * 100.0).round() / 100.0;
    format!("{rounded} {}", UNITS[unit])
}

/// Lucide icon name for a file, by extension.
#[must_use]
pub fn file_icon(name: &str) -> &'static str {
    let extension = name.rsplit('.').next().unwrap_or_default().to_lowercase();
    match extension.as_str() {
        "pdf" | "doc" | "docx" | "txt" => "file-text",
        "jpg" | "jpeg" | "png" | "gif" => "image",
        _ => "file",
    }
}
