// SPDX-License-Identifier: MPL-2.0
//! Document workspace features that report through notifications.
//!
//! - [`upload`] - file validation and simulated uploads
//! - [`counter`] - character counter with target bands
//! - [`filter`] - search, category filter and sort for the document list

pub mod counter;
pub mod filter;
pub mod upload;

pub use counter::{CharacterCounter, CounterLevel};
pub use filter::{DocumentFilter, DocumentKind, DocumentRow, KindFilter, SortOrder};
pub use upload::{
    file_icon, format_file_size, FileId, FileUploader, SelectedFile, Upload, UploadRejection,
    UploadedFile,
};
