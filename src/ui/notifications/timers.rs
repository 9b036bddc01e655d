// SPDX-License-Identifier: MPL-2.0
//! Deadline-ordered timer queue keyed by notification.
//!
//! Every phase change that waits on time is an entry here. Cancelling a
//! timer deletes its entry, so nothing is left behind for a notification
//! that was removed early.

use super::notification::NotificationId;
use std::collections::BTreeMap;
use std::time::Instant;

/// What a timer does when it fires.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TimerKind {
    /// Enter transition finished: `Entering -> Visible`.
    EnterElapsed,
    /// Display lifetime finished: start leaving.
    AutoDismiss,
    /// Exit transition finished: `Leaving -> Removed`.
    ExitElapsed,
}

/// Handle to a scheduled timer, used to cancel it.
///
/// Ordering is by deadline, then by scheduling order, so timers sharing a
/// deadline fire in the order they were scheduled.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct TimerHandle {
    due: Instant,
    seq: u64,
}

impl TimerHandle {
    #[must_use]
    pub fn due(self) -> Instant {
        self.due
    }
}

/// A timer whose deadline has passed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Fired {
    pub notification: NotificationId,
    pub kind: TimerKind,
    pub due: Instant,
}

#[derive(Debug, Default)]
pub struct TimerQueue {
    pending: BTreeMap<TimerHandle, (NotificationId, TimerKind)>,
    next_seq: u64,
}

impl TimerQueue {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Schedules a timer for `notification` at `due`.
    pub fn schedule(
        &mut self,
        due: Instant,
        notification: NotificationId,
        kind: TimerKind,
    ) -> TimerHandle {
        let handle = TimerHandle {
            due,
            seq: self.next_seq,
        };
        self.next_seq += 1;
        self.pending.insert(handle, (notification, kind));
        handle
    }

    /// Cancels a pending timer. Returns `false` if it already fired or was
    /// cancelled before.
    pub fn cancel(&mut self, handle: TimerHandle) -> bool {
        self.pending.remove(&handle).is_some()
    }

    /// Pops the earliest timer due at or before `now`.
    ///
    /// Callers loop on this so timers scheduled while handling an earlier
    /// one still fire within the same pass if they are already due.
    pub fn pop_due(&mut self, now: Instant) -> Option<Fired> {
        let (&handle, _) = self.pending.first_key_value()?;
        if handle.due > now {
            return None;
        }
        let (handle, (notification, kind)) = self.pending.pop_first()?;
        Some(Fired {
            notification,
            kind,
            due: handle.due,
        })
    }

    /// Earliest pending deadline.
    #[must_use]
    pub fn next_deadline(&self) -> Option<Instant> {
        self.pending.keys().next().map(|handle| handle.due)
    }

    /// Number of timers scheduled for one notification.
    #[must_use]
    pub fn count_for(&self, notification: NotificationId) -> usize {
        self.pending
            .values()
            .filter(|(owner, _)| *owner == notification)
            .count()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.pending.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.pending.is_empty()
    }
}
