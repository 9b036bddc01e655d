// SPDX-License-Identifier: MPL-2.0
//! Application root state.
//!
//! The `App` struct wires the document tools (uploader, character counter,
//! document filter) to a single notification center and translates
//! messages into state changes and toasts.

mod message;
mod subscription;
mod view;

pub use message::{Flags, Message};

use crate::config::{self, Config};
use crate::diagnostics::DiagnosticsHandle;
use crate::documents::{
    CharacterCounter, DocumentFilter, DocumentKind, DocumentRow, FileUploader, SelectedFile,
};
use crate::domain::ui::AutoDismiss;
use crate::ui::notifications::{Anchor, NotificationCenter, Severity, Timing};
use chrono::NaiveDate;
use iced::{window, Element, Subscription, Task, Theme};
use std::fmt;

pub const WINDOW_DEFAULT_HEIGHT: u32 = 720;
pub const WINDOW_DEFAULT_WIDTH: u32 = 960;
pub const MIN_WINDOW_HEIGHT: u32 = 480;
pub const MIN_WINDOW_WIDTH: u32 = 640;

/// Root Iced application state.
pub struct App {
    notifications: NotificationCenter,
    anchor: Anchor,
    diagnostics: DiagnosticsHandle,
    uploader: FileUploader,
    counter: CharacterCounter,
    /// Raw text of the draft field.
    draft: String,
    documents: DocumentFilter,
    /// Raw text of the search field; the filter keeps it lower-cased.
    search: String,
}

impl fmt::Debug for App {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("App")
            .field("notifications", &self.notifications)
            .field("uploading", &self.uploader.is_uploading())
            .field("draft_chars", &self.counter.count())
            .finish()
    }
}

/// Builds the window settings
pub fn window_settings() -> window::Settings {
    window::Settings {
        size: iced::Size::new(WINDOW_DEFAULT_WIDTH as f32, WINDOW_DEFAULT_HEIGHT as f32),
        min_size: Some(iced::Size::new(
            MIN_WINDOW_WIDTH as f32,
            MIN_WINDOW_HEIGHT as f32,
        )),
        ..window::Settings::default()
    }
}

/// Entry point used by `main.rs` to launch the Iced application loop.
pub fn run(flags: Flags) -> iced::Result {
    use std::cell::RefCell;

    // iced 0.14 requires `Fn` for boot; flags are consumed once.
    let boot_state = RefCell::new(Some(flags));
    let boot = move || {
        let flags = boot_state.borrow_mut().take().unwrap_or_default();
        App::new(flags)
    };

    iced::application(boot, App::update, App::view)
        .title(App::title)
        .theme(App::theme)
        .window(window_settings())
        .subscription(App::subscription)
        .run()
}

impl App {
    /// Builds the application state from the settings file and launcher
    /// overrides.
    fn new(flags: Flags) -> (Self, Task<Message>) {
        let (config, config_warning) = load_config(&flags);
        let mut app = Self::from_config(&config, &flags);

        if let Some(warning) = config_warning {
            app.notifications.warning(warning, None);
        }

        (app, Task::none())
    }

    fn from_config(config: &Config, flags: &Flags) -> Self {
        let mut timing = Timing::from(&config.notifications);
        if let Some(duration_ms) = flags.duration_ms {
            timing.default_lifetime = AutoDismiss::from_millis(duration_ms);
        }
        let anchor = flags.anchor.unwrap_or(config.notifications.anchor);

        let diagnostics = DiagnosticsHandle::new(config.notifications.history_capacity);
        let mut notifications = NotificationCenter::new();
        notifications.set_timing(timing);
        notifications.set_diagnostics(diagnostics.clone());

        tracing::info!(?timing, anchor = anchor.name(), "notification center ready");

        Self {
            notifications,
            anchor,
            diagnostics,
            uploader: FileUploader::new(config.upload.clone()),
            counter: CharacterCounter::new(&config.counter),
            draft: String::new(),
            documents: DocumentFilter::new(sample_documents()),
            search: String::new(),
        }
    }

    fn title(&self) -> String {
        match self.notifications.len() {
            0 => "DocDesk".to_string(),
            n => format!("DocDesk ({n})"),
        }
    }

    fn view(&self) -> Element<'_, Message> {
        view::view(view::ViewContext {
            toasts: self.notifications.renderer(),
            anchor: self.anchor,
            uploader: &self.uploader,
            counter: &self.counter,
            draft: &self.draft,
            documents: &self.documents,
            search: &self.search,
        })
    }

    fn theme(&self) -> Theme {
        Theme::Light
    }

    /// Sticky toasts that finished entering schedule nothing, so the tick
    /// stops until the next show or dismissal.
    fn needs_toast_tick(&self) -> bool {
        self.notifications.has_pending_timers()
    }

    fn subscription(&self) -> Subscription<Message> {
        Subscription::batch([
            subscription::create_event_subscription(),
            subscription::create_tick_subscription(self.needs_toast_tick()),
            subscription::create_upload_subscription(
                self.uploader.is_uploading(),
                self.uploader.progress_interval(),
            ),
        ])
    }

    fn update(&mut self, message: Message) -> Task<Message> {
        match message {
            Message::Notification(message) => self.notifications.handle_message(&message),
            Message::Tick(_) => {
                self.notifications.tick();
            }
            Message::UploadTick(_) => {
                self.uploader.advance(&mut self.notifications);
            }
            Message::ShowToast(severity) => {
                self.notifications.show(sample_message(severity), severity, None);
            }
            Message::ClearToasts => {
                self.notifications.clear_all();
            }
            Message::FileDropped(path) => {
                let name = path
                    .file_name()
                    .map(|name| name.to_string_lossy().into_owned())
                    .unwrap_or_else(|| path.display().to_string());
                match std::fs::metadata(&path) {
                    Ok(metadata) => {
                        self.uploader.handle_files(
                            [SelectedFile::new(name, metadata.len())],
                            &mut self.notifications,
                        );
                    }
                    Err(err) => {
                        tracing::warn!(path = %path.display(), error = %err, "dropped file unreadable");
                        self.notifications.error(format!("Could not read {name}"), None);
                    }
                }
            }
            Message::AddSampleFiles => {
                self.uploader
                    .handle_files(sample_files(), &mut self.notifications);
            }
            Message::RemoveFile(id) => {
                self.uploader.remove_file(id, &mut self.notifications);
            }
            Message::DraftChanged(text) => {
                self.counter.update(&text);
                self.draft = text;
            }
            Message::SearchChanged(query) => {
                self.documents.set_search(&query);
                self.search = query;
            }
            Message::KindSelected(kind) => self.documents.set_kind(kind),
            Message::SortSelected(sort) => self.documents.set_sort(sort),
            Message::ClearFilters => {
                self.documents.reset();
                self.search.clear();
            }
            Message::ExportHistory => match self.diagnostics.export_to_default_location() {
                Ok(path) => {
                    self.notifications
                        .success(format!("History exported to {}", path.display()), None);
                }
                Err(err) => {
                    tracing::error!(error = %err, "history export failed");
                    self.notifications.error(err.to_string(), None);
                }
            },
        }
        Task::none()
    }
}

/// Loads settings from the flag path or the platform default. Failures
/// fall back to defaults and return a warning to show.
fn load_config(flags: &Flags) -> (Config, Option<String>) {
    let result = match &flags.config_path {
        Some(path) => config::load_from_path(path),
        None => config::load(),
    };
    match result {
        Ok(config) => (config, None),
        Err(err) => {
            tracing::warn!(error = %err, "could not load settings, using defaults");
            (
                Config::default(),
                Some("Settings could not be loaded. Using defaults.".to_string()),
            )
        }
    }
}

fn sample_message(severity: Severity) -> &'static str {
    match severity {
        Severity::Success => "Document saved",
        Severity::Error => "Could not reach the server",
        Severity::Warning => "Your draft is over the target length",
        Severity::Info => "Autosave is on",
    }
}

fn sample_files() -> Vec<SelectedFile> {
    vec![
        SelectedFile::new("resume.pdf", 182 * 1024),
        SelectedFile::new("cover-letter.docx", 48 * 1024),
        SelectedFile::new("portfolio.zip", 3 * 1024 * 1024),
        SelectedFile::new("scan.pdf", 24 * 1024 * 1024),
    ]
}

fn sample_documents() -> Vec<DocumentRow> {
    [
        ("Backend engineer resume", DocumentKind::Resume, (2024, 3, 1)),
        ("Cover letter for Acme", DocumentKind::CoverLetter, (2024, 5, 10)),
        ("Frontend resume", DocumentKind::Resume, (2024, 1, 15)),
        ("Interview notes", DocumentKind::Other, (2023, 12, 24)),
        ("Cover letter for Globex", DocumentKind::CoverLetter, (2024, 2, 7)),
    ]
    .into_iter()
    .filter_map(|(title, kind, (year, month, day))| {
        NaiveDate::from_ymd_opt(year, month, day).map(|date| DocumentRow::new(title, kind, date))
    })
    .collect()
}
