// SPDX-License-Identifier: MPL-2.0
//! Writing lifecycle histories to disk.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use chrono::Local;

/// Generates a default filename for a history export.
///
/// Format: `docdesk_notifications_YYYYMMDD_HHMMSS.json`
#[must_use]
pub fn generate_default_filename() -> String {
    let now = Local::now();
    format!("docdesk_notifications_{}.json", now.format("%Y%m%d_%H%M%S"))
}

/// Writes content to a file atomically.
///
/// Uses a temporary file with `.tmp` extension, then renames to the final path.
///
/// # Errors
///
/// Returns an error if writing or renaming fails.
pub fn write_atomic(path: &Path, content: &str) -> io::Result<()> {
    let temp_path = path.with_extension("json.tmp");

    fs::write(&temp_path, content)?;

    if let Err(e) = fs::rename(&temp_path, path) {
        let _ = fs::remove_file(&temp_path);
        return Err(e);
    }

    Ok(())
}

/// Returns the default directory for saving exports: the user's Documents
/// folder if available, otherwise the current directory.
#[must_use]
pub fn default_export_directory() -> PathBuf {
    dirs::document_dir().unwrap_or_else(|| std::env::current_dir().unwrap_or_default())
}
