// SPDX-License-Identifier: MPL-2.0
//! `docdesk` is a small document workspace built with the Iced GUI framework.
//!
//! Its core is a toast notification center: severity-styled, transient
//! messages stacked in one corner, each running through an enter, visible
//! and exit phase on its own timers. Upload, character-count and document
//! filtering tools report their outcomes through it.

pub mod app;
pub mod config;
pub mod diagnostics;
pub mod documents;
pub mod domain;
pub mod error;
pub mod ui;
