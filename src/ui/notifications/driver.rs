// SPDX-License-Identifier: MPL-2.0
//! Tokio host for a notification center.
//!
//! [`channel`] splits a center into a cloneable [`NotificationSender`] and a
//! [`Driver`]. The driver owns the center, applies commands as they arrive
//! and sleeps until the next timer deadline in between.

use super::center::{NotificationCenter, Notify};
use super::clock::Clock;
use super::notification::{Notification, NotificationId};
use super::renderer::Renderer;
use std::time::{Duration, Instant};
use tokio::sync::{mpsc, oneshot};

/// Clock backed by tokio's time source, so paused test time applies.
#[derive(Debug, Clone, Copy, Default)]
pub struct TokioClock;

impl Clock for TokioClock {
    fn now(&self) -> Instant {
        tokio::time::Instant::now().into_std()
    }
}

#[derive(Debug)]
enum Command {
    Post {
        notification: Notification,
        reply: Option<oneshot::Sender<NotificationId>>,
    },
    Remove(NotificationId),
    ClearAll,
}

/// Posts commands to a running [`Driver`].
#[derive(Debug, Clone)]
pub struct NotificationSender {
    tx: mpsc::UnboundedSender<Command>,
}

impl NotificationSender {
    /// Queues a notification. Returns `false` if the driver has stopped.
    pub fn send(&self, notification: Notification) -> bool {
        self.command(Command::Post {
            notification,
            reply: None,
        })
    }

    /// Queues a notification and waits for the id the center assigns.
    pub async fn post_and_wait(&self, notification: Notification) -> Option<NotificationId> {
        let (reply, rx) = oneshot::channel();
        if !self.command(Command::Post {
            notification,
            reply: Some(reply),
        }) {
            return None;
        }
        rx.await.ok()
    }

    pub fn remove(&self, id: NotificationId) -> bool {
        self.command(Command::Remove(id))
    }

    pub fn clear_all(&self) -> bool {
        self.command(Command::ClearAll)
    }

    fn command(&self, command: Command) -> bool {
        match self.tx.send(command) {
            Ok(()) => true,
            Err(err) => {
                tracing::debug!(command = ?err.0, "notification driver has stopped");
                false
            }
        }
    }
}

impl Notify for NotificationSender {
    /// Ids are assigned by the driver later, so none is returned here.
    fn post(&mut self, notification: Notification) -> Option<NotificationId> {
        self.send(notification);
        None
    }
}

/// Owns a center and runs its timers on the tokio clock.
#[derive(Debug)]
pub struct Driver<R: Renderer> {
    center: NotificationCenter<R, TokioClock>,
    rx: mpsc::UnboundedReceiver<Command>,
}

/// Splits `center` into a sender and the driver that serves it.
pub fn channel<R: Renderer>(
    center: NotificationCenter<R, TokioClock>,
) -> (NotificationSender, Driver<R>) {
    let (tx, rx) = mpsc::unbounded_channel();
    (NotificationSender { tx }, Driver { center, rx })
}

impl<R: Renderer> Driver<R> {
    #[must_use]
    pub fn center(&self) -> &NotificationCenter<R, TokioClock> {
        &self.center
    }

    /// Serves commands and timers.
    ///
    /// Returns the center once every sender is dropped and no timer is
    /// pending. Sticky notifications that are still live at that point are
    /// handed back with it.
    pub async fn run(mut self) -> NotificationCenter<R, TokioClock> {
        let mut open = true;
        loop {
            self.center.tick();

            let deadline = self.center.next_deadline();
            if !open && deadline.is_none() {
                break;
            }
            // A disabled select branch still builds its future.
            let wake_at = deadline.map_or_else(far_future, tokio::time::Instant::from_std);

            tokio::select! {
                command = self.rx.recv(), if open => match command {
                    Some(command) => self.apply(command),
                    None => {
                        tracing::debug!("all notification senders dropped");
                        open = false;
                    }
                },
                () = tokio::time::sleep_until(wake_at), if deadline.is_some() => {}
            }
        }
        self.center
    }

    fn apply(&mut self, command: Command) {
        match command {
            Command::Post {
                notification,
                reply,
            } => {
                let id = self.center.push(notification);
                if let Some(reply) = reply {
                    // The caller may have stopped waiting.
                    let _ = reply.send(id);
                }
            }
            Command::Remove(id) => {
                self.center.remove(id);
            }
            Command::ClearAll => {
                self.center.clear_all();
            }
        }
    }
}

fn far_future() -> tokio::time::Instant {
    tokio::time::Instant::now() + Duration::from_secs(60 * 60 * 24 * 365)
}
