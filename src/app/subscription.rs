// SPDX-License-Identifier: MPL-2.0
//! Event subscriptions for the application.

use super::Message;
use iced::{event, time, window, Subscription};
use std::time::Duration;

/// Tick period for toast timers while any is pending. Short enough to
/// land close to the 10 ms enter delay.
const TOAST_TICK_MS: u64 = 16;

/// Creates a periodic tick subscription for notification timers.
pub fn create_tick_subscription(has_pending_timers: bool) -> Subscription<Message> {
    if has_pending_timers {
        time::every(Duration::from_millis(TOAST_TICK_MS)).map(Message::Tick)
    } else {
        Subscription::none()
    }
}

/// Creates the upload progress subscription while uploads are in flight.
pub fn create_upload_subscription(is_uploading: bool, interval: Duration) -> Subscription<Message> {
    if is_uploading {
        time::every(interval).map(Message::UploadTick)
    } else {
        Subscription::none()
    }
}

/// Routes files dropped on the window to the uploader.
pub fn create_event_subscription() -> Subscription<Message> {
    event::listen_with(|event, _status, _window_id| match event {
        event::Event::Window(window::Event::FileDropped(path)) => Some(Message::FileDropped(path)),
        _ => None,
    })
}
