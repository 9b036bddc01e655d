// SPDX-License-Identifier: MPL-2.0
//! Toast notification system for user feedback.
//!
//! Notifications appear briefly in a corner of the window to report the
//! outcome of an action (upload finished, file rejected, ...) without
//! blocking interaction.
//!
//! # Components
//!
//! - [`notification`] - `Notification`, `Severity`, `Phase` and friends
//! - [`center`] - `NotificationCenter`, which owns the lifecycle and timers
//! - [`renderer`] - the `Renderer` seam and the in-memory `ToastStack`
//! - [`markup`] - HTML rendering of the container
//! - [`driver`] - tokio host for a center
//! - [`toast`] - iced widget rendering a `ToastStack`
//!
//! # Usage
//!
//! ```
//! use docdesk::ui::notifications::{NotificationCenter, Phase, Severity};
//!
//! let mut center = NotificationCenter::new();
//! let id = center.show("Upload complete", Severity::Success, None);
//! assert_eq!(center.phase(id), Phase::Entering);
//!
//! // Hosts call `tick` periodically (or at `next_deadline`).
//! center.tick();
//! ```

pub mod center;
pub mod clock;
pub mod driver;
pub mod markup;
pub mod notification;
pub mod renderer;
pub mod timers;
mod toast;

pub use center::{Message as NotificationMessage, NotificationCenter, Notify, Timing};
pub use clock::{Clock, ManualClock, SystemClock};
pub use driver::{channel, Driver, NotificationSender, TokioClock};
pub use markup::MarkupRenderer;
pub use notification::{
    Anchor, IconKind, LiveNotification, Notification, NotificationId, Phase, Severity,
};
pub use renderer::{Renderer, ToastStack, ToastView};
pub use timers::TimerQueue;
pub use toast::Toast;
