// SPDX-License-Identifier: MPL-2.0
//! Notification lifecycle management.
//!
//! The `NotificationCenter` owns the live notifications of one container,
//! drives each through `Created -> Entering -> Visible -> Leaving -> Removed`
//! on its own timers, and mirrors every change into a [`Renderer`].

use super::clock::{Clock, SystemClock};
use super::notification::{LiveNotification, Notification, NotificationId, Phase, Severity};
use super::renderer::{Renderer, ToastStack, ToastView};
use super::timers::{Fired, TimerHandle, TimerKind, TimerQueue};
use crate::config::NotificationConfig;
use crate::diagnostics::{DiagnosticsHandle, DismissCause, LifecycleEventKind};
use crate::domain::ui::{AutoDismiss, TransitionDelay};
use std::fmt;
use std::time::Instant;

/// Messages for notification state changes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Message {
    /// Dismiss a specific notification by ID.
    Dismiss(NotificationId),
    /// Dismiss every live notification.
    ClearAll,
    /// Fire any timers that are due.
    Tick,
}

/// Anything collaborators can post notifications through.
pub trait Notify {
    /// Posts a notification. Returns its id when the receiver assigns one
    /// synchronously.
    fn post(&mut self, notification: Notification) -> Option<NotificationId>;
}

impl<N: Notify + ?Sized> Notify for &mut N {
    fn post(&mut self, notification: Notification) -> Option<NotificationId> {
        (**self).post(notification)
    }
}

/// Lifetime and transition delays applied by a center.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Timing {
    /// Lifetime used when a notification does not set its own.
    pub default_lifetime: AutoDismiss,
    pub enter: TransitionDelay,
    pub exit: TransitionDelay,
}

impl Timing {
    /// Timing with no transition delays, so phase changes driven by
    /// `remove` and enter completion happen synchronously.
    #[must_use]
    pub fn immediate() -> Self {
        Self {
            default_lifetime: AutoDismiss::default(),
            enter: TransitionDelay::immediate(),
            exit: TransitionDelay::immediate(),
        }
    }
}

impl Default for Timing {
    fn default() -> Self {
        Self {
            default_lifetime: AutoDismiss::default(),
            enter: TransitionDelay::enter(),
            exit: TransitionDelay::exit(),
        }
    }
}

impl From<&NotificationConfig> for Timing {
    fn from(config: &NotificationConfig) -> Self {
        Self {
            default_lifetime: config.default_lifetime(),
            enter: config.enter_delay(),
            exit: config.exit_delay(),
        }
    }
}

#[derive(Debug)]
struct Entry {
    live: LiveNotification,
    enter_timer: Option<TimerHandle>,
    dismiss_timer: Option<TimerHandle>,
    exit_timer: Option<TimerHandle>,
}

/// Owns one toast container and the lifecycle of every toast in it.
pub struct NotificationCenter<R: Renderer = ToastStack, C: Clock = SystemClock> {
    renderer: R,
    clock: C,
    timing: Timing,
    /// Live notifications in arrival order.
    entries: Vec<Entry>,
    timers: TimerQueue,
    next_id: u64,
    diagnostics: Option<DiagnosticsHandle>,
}

impl<R: Renderer, C: Clock> fmt::Debug for NotificationCenter<R, C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("NotificationCenter")
            .field("live", &self.entries.len())
            .field("pending_timers", &self.timers.len())
            .field("timing", &self.timing)
            .finish()
    }
}

impl NotificationCenter {
    /// Creates a center backed by an in-memory [`ToastStack`] and the
    /// system clock.
    #[must_use]
    pub fn new() -> Self {
        Self::with_parts(ToastStack::new(), SystemClock, Timing::default())
    }
}

impl Default for NotificationCenter {
    fn default() -> Self {
        Self::new()
    }
}

impl<R: Renderer, C: Clock> NotificationCenter<R, C> {
    /// Creates a center from an explicit renderer, clock and timing.
    pub fn with_parts(renderer: R, clock: C, timing: Timing) -> Self {
        Self {
            renderer,
            clock,
            timing,
            entries: Vec::new(),
            timers: TimerQueue::new(),
            next_id: 0,
            diagnostics: None,
        }
    }

    /// Sets the diagnostics handle that receives lifecycle events.
    pub fn set_diagnostics(&mut self, handle: DiagnosticsHandle) {
        self.diagnostics = Some(handle);
    }

    #[must_use]
    pub fn timing(&self) -> Timing {
        self.timing
    }

    /// Replaces the timing used for notifications shown from now on.
    pub fn set_timing(&mut self, timing: Timing) {
        self.timing = timing;
    }

    #[must_use]
    pub fn renderer(&self) -> &R {
        &self.renderer
    }

    #[must_use]
    pub fn clock(&self) -> &C {
        &self.clock
    }

    /// Shows a notification and returns its id.
    ///
    /// The toast is mounted in `Entering`, becomes `Visible` once the enter
    /// delay has passed, and starts leaving when its lifetime (counted from
    /// this call) runs out.
    pub fn push(&mut self, notification: Notification) -> NotificationId {
        let now = self.clock.now();
        let id = NotificationId::from_raw(self.next_id);
        self.next_id += 1;

        let severity = notification.severity();
        let lifetime = notification
            .custom_auto_dismiss()
            .unwrap_or(self.timing.default_lifetime);

        tracing::debug!(%id, %severity, ?lifetime, "showing notification");
        self.record(
            id,
            LifecycleEventKind::Shown {
                severity,
                message_chars: notification.message().chars().count(),
                lifetime_ms: lifetime.as_millis(),
            },
        );

        let view = ToastView {
            id,
            severity,
            message: notification.message().to_owned(),
            phase: Phase::Entering,
        };
        self.entries.push(Entry {
            live: LiveNotification {
                id,
                notification,
                lifetime,
                phase: Phase::Created,
                shown_at: now,
            },
            enter_timer: None,
            dismiss_timer: None,
            exit_timer: None,
        });
        self.renderer.mount(view);

        let idx = self.entries.len() - 1;
        self.entries[idx].live.phase = Phase::Entering;
        self.record(id, LifecycleEventKind::PhaseChanged { phase: Phase::Entering });

        match deadline(now, self.timing.enter) {
            Some(due) => {
                self.entries[idx].enter_timer =
                    Some(self.timers.schedule(due, id, TimerKind::EnterElapsed));
            }
            None => {
                self.transition(idx, Phase::Visible);
            }
        }

        // A lifetime past what `Instant` can represent never runs out.
        if let Some(due) = lifetime.duration().and_then(|d| now.checked_add(d)) {
            self.entries[idx].dismiss_timer =
                Some(self.timers.schedule(due, id, TimerKind::AutoDismiss));
        }

        id
    }

    /// Shows `message` with the given severity. Unrecognised severity names
    /// fall back to info; `None` uses the default lifetime.
    pub fn show(
        &mut self,
        message: impl Into<String>,
        severity: impl Into<Severity>,
        lifetime: Option<AutoDismiss>,
    ) -> NotificationId {
        let mut notification = Notification::new(severity, message);
        if let Some(lifetime) = lifetime {
            notification = notification.auto_dismiss(lifetime);
        }
        self.push(notification)
    }

    pub fn success(
        &mut self,
        message: impl Into<String>,
        lifetime: Option<AutoDismiss>,
    ) -> NotificationId {
        self.show(message, Severity::Success, lifetime)
    }

    pub fn error(
        &mut self,
        message: impl Into<String>,
        lifetime: Option<AutoDismiss>,
    ) -> NotificationId {
        self.show(message, Severity::Error, lifetime)
    }

    pub fn warning(
        &mut self,
        message: impl Into<String>,
        lifetime: Option<AutoDismiss>,
    ) -> NotificationId {
        self.show(message, Severity::Warning, lifetime)
    }

    pub fn info(
        &mut self,
        message: impl Into<String>,
        lifetime: Option<AutoDismiss>,
    ) -> NotificationId {
        self.show(message, Severity::Info, lifetime)
    }

    /// Starts dismissing a notification.
    ///
    /// Pending enter and auto-dismiss timers are cancelled. Unknown ids and
    /// notifications already leaving are left alone. Returns `true` if a
    /// dismissal was started.
    pub fn remove(&mut self, id: NotificationId) -> bool {
        let now = self.clock.now();
        self.dismiss(id, DismissCause::Manual, now)
    }

    /// Starts dismissing every live notification. Returns how many
    /// dismissals were started.
    pub fn clear_all(&mut self) -> usize {
        let now = self.clock.now();
        let ids: Vec<NotificationId> = self
            .entries
            .iter()
            .filter(|entry| !entry.live.phase.is_dismissing())
            .map(|entry| entry.live.id)
            .collect();

        let started = ids
            .into_iter()
            .filter(|&id| self.dismiss(id, DismissCause::ClearAll, now))
            .count();
        if started > 0 {
            tracing::debug!(count = started, "clearing all notifications");
        }
        started
    }

    /// Fires every timer due at the clock's current instant. Returns the
    /// number of timers fired.
    pub fn tick(&mut self) -> usize {
        let now = self.clock.now();
        let mut fired = 0;
        while let Some(timer) = self.timers.pop_due(now) {
            fired += 1;
            self.on_timer(timer);
        }
        fired
    }

    /// Handles a notification message.
    pub fn handle_message(&mut self, message: &Message) {
        match message {
            Message::Dismiss(id) => {
                self.remove(*id);
            }
            Message::ClearAll => {
                self.clear_all();
            }
            Message::Tick => {
                self.tick();
            }
        }
    }

    #[must_use]
    pub fn get(&self, id: NotificationId) -> Option<&LiveNotification> {
        self.position(id).map(|idx| &self.entries[idx].live)
    }

    /// Current phase; anything no longer tracked reports `Removed`.
    #[must_use]
    pub fn phase(&self, id: NotificationId) -> Phase {
        self.get(id).map_or(Phase::Removed, LiveNotification::phase)
    }

    /// Live notifications in arrival order.
    pub fn live(&self) -> impl Iterator<Item = &LiveNotification> {
        self.entries.iter().map(|entry| &entry.live)
    }

    /// Ids of live notifications in arrival order.
    #[must_use]
    pub fn ids(&self) -> Vec<NotificationId> {
        self.entries.iter().map(|entry| entry.live.id).collect()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    #[must_use]
    pub fn has_notifications(&self) -> bool {
        !self.entries.is_empty()
    }

    /// Returns whether `tick` has any timer left to fire. Sticky toasts
    /// that are fully shown keep none, so hosts can stop ticking.
    #[must_use]
    pub fn has_pending_timers(&self) -> bool {
        !self.timers.is_empty()
    }

    /// Earliest instant at which `tick` has work to do.
    #[must_use]
    pub fn next_deadline(&self) -> Option<Instant> {
        self.timers.next_deadline()
    }

    /// Number of scheduled timers across all notifications.
    #[must_use]
    pub fn pending_timers(&self) -> usize {
        self.timers.len()
    }

    /// Number of scheduled timers for one notification.
    #[must_use]
    pub fn pending_timers_for(&self, id: NotificationId) -> usize {
        self.timers.count_for(id)
    }

    fn position(&self, id: NotificationId) -> Option<usize> {
        self.entries.iter().position(|entry| entry.live.id == id)
    }

    fn record(&self, id: NotificationId, kind: LifecycleEventKind) {
        if let Some(handle) = &self.diagnostics {
            handle.record(id, kind);
        }
    }

    /// Moves the entry at `idx` forward to `phase`. Never moves backwards.
    fn transition(&mut self, idx: usize, phase: Phase) -> bool {
        let entry = &mut self.entries[idx];
        if phase <= entry.live.phase {
            return false;
        }
        entry.live.phase = phase;
        let id = entry.live.id;

        self.renderer.set_phase(id, phase);
        self.record(id, LifecycleEventKind::PhaseChanged { phase });
        tracing::trace!(%id, ?phase, "notification phase changed");
        true
    }

    /// Begins the exit transition. `from` is the instant the exit delay is
    /// measured from.
    fn dismiss(&mut self, id: NotificationId, cause: DismissCause, from: Instant) -> bool {
        let Some(idx) = self.position(id) else {
            tracing::trace!(%id, ?cause, "dismiss ignored: not tracked");
            return false;
        };
        let entry = &mut self.entries[idx];
        if entry.live.phase.is_dismissing() {
            return false;
        }

        for handle in [entry.enter_timer.take(), entry.dismiss_timer.take()]
            .into_iter()
            .flatten()
        {
            self.timers.cancel(handle);
        }

        tracing::debug!(%id, ?cause, "dismissing notification");
        self.record(id, LifecycleEventKind::DismissRequested { cause });
        self.transition(idx, Phase::Leaving);

        match deadline(from, self.timing.exit) {
            Some(due) => {
                self.entries[idx].exit_timer =
                    Some(self.timers.schedule(due, id, TimerKind::ExitElapsed));
            }
            None => self.finalize(idx),
        }
        true
    }

    /// Detaches the entry at `idx` from the container and the mapping.
    fn finalize(&mut self, idx: usize) {
        let mut entry = self.entries.remove(idx);
        for handle in [
            entry.enter_timer.take(),
            entry.dismiss_timer.take(),
            entry.exit_timer.take(),
        ]
        .into_iter()
        .flatten()
        {
            self.timers.cancel(handle);
        }

        let id = entry.live.id;
        entry.live.phase = Phase::Removed;
        self.renderer.unmount(id);
        self.record(id, LifecycleEventKind::PhaseChanged { phase: Phase::Removed });
        tracing::debug!(%id, "notification removed");
    }

    fn on_timer(&mut self, timer: Fired) {
        let Some(idx) = self.position(timer.notification) else {
            tracing::trace!(id = %timer.notification, kind = ?timer.kind, "stale timer ignored");
            return;
        };

        match timer.kind {
            TimerKind::EnterElapsed => {
                self.entries[idx].enter_timer = None;
                if self.entries[idx].live.phase == Phase::Entering {
                    self.transition(idx, Phase::Visible);
                }
            }
            TimerKind::AutoDismiss => {
                self.entries[idx].dismiss_timer = None;
                self.dismiss(timer.notification, DismissCause::Timeout, timer.due);
            }
            TimerKind::ExitElapsed => {
                self.entries[idx].exit_timer = None;
                self.finalize(idx);
            }
        }
    }
}

impl<R: Renderer, C: Clock> Notify for NotificationCenter<R, C> {
    fn post(&mut self, notification: Notification) -> Option<NotificationId> {
        Some(self.push(notification))
    }
}

/// Deadline of a transition starting at `from`, or `None` when it should
/// happen right away (zero delay, or a deadline `Instant` cannot hold).
fn deadline(from: Instant, delay: TransitionDelay) -> Option<Instant> {
    if delay.is_immediate() {
        return None;
    }
    from.checked_add(delay.as_duration())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ui::notifications::clock::ManualClock;
    use std::time::Duration;

    type TestCenter = NotificationCenter<ToastStack, ManualClock>;

    fn center() -> (TestCenter, ManualClock) {
        let clock = ManualClock::new();
        let center = NotificationCenter::with_parts(ToastStack::new(), clock.clone(), Timing::default());
        (center, clock)
    }

    /// Advances in 1 ms steps, ticking at each, like a fine-grained host.
    fn run_for(center: &mut TestCenter, clock: &ManualClock, millis: u64) {
        for _ in 0..millis {
            clock.advance_ms(1);
            center.tick();
        }
    }

    fn assert_in_sync(center: &TestCenter) {
        assert_eq!(center.ids(), center.renderer().ids());
        for live in center.live() {
            let view = center.renderer().get(live.id()).expect("mounted view");
            assert_eq!(view.phase, live.phase());
        }
    }

    /// Records every renderer call.
    #[derive(Debug, Default)]
    struct RecordingRenderer {
        calls: Vec<String>,
    }

    impl Renderer for RecordingRenderer {
        fn mount(&mut self, view: ToastView) {
            self.calls.push(format!("mount {}", view.id));
        }

        fn set_phase(&mut self, id: NotificationId, phase: Phase) {
            self.calls.push(format!("phase {id} {phase:?}"));
        }

        fn unmount(&mut self, id: NotificationId) {
            self.calls.push(format!("unmount {id}"));
        }
    }

    #[test]
    fn new_center_is_empty() {
        let center = NotificationCenter::new();
        assert!(center.is_empty());
        assert!(!center.has_notifications());
        assert_eq!(center.pending_timers(), 0);
        assert!(center.renderer().is_empty());
    }

    #[test]
    fn every_severity_tracks_one_notification_with_matching_style() {
        for severity in Severity::ALL {
            let (mut center, _clock) = center();
            let id = center.show("hello", severity, None);

            assert_eq!(center.len(), 1);
            assert_eq!(center.get(id).map(LiveNotification::severity), Some(severity));
            let view = center.renderer().get(id).expect("mounted");
            assert_eq!(view.severity, severity);
            assert_eq!(view.icon(), severity.icon());
        }
    }

    #[test]
    fn unrecognised_severity_falls_back_to_info() {
        let (mut center, _clock) = center();
        let id = center.show("Heads up", "critical", None);

        assert_eq!(center.get(id).map(LiveNotification::severity), Some(Severity::Info));
        assert_eq!(
            center.renderer().get(id).map(|view| view.severity),
            Some(Severity::Info)
        );
    }

    #[test]
    fn show_mounts_in_entering_then_becomes_visible() {
        let (mut center, clock) = center();
        let id = center.info("Saved draft", None);

        assert_eq!(center.phase(id), Phase::Entering);
        assert_in_sync(&center);

        clock.advance_ms(9);
        center.tick();
        assert_eq!(center.phase(id), Phase::Entering);

        clock.advance_ms(1);
        center.tick();
        assert_eq!(center.phase(id), Phase::Visible);
        assert_in_sync(&center);
    }

    #[test]
    fn defaults_give_info_and_three_second_lifetime() {
        let (mut center, clock) = center();
        let id = center.show("Bad file type", Severity::default(), None);

        let live = center.get(id).expect("tracked");
        assert_eq!(live.severity(), Severity::Info);
        assert_eq!(live.lifetime(), AutoDismiss::After(Duration::from_millis(3000)));

        run_for(&mut center, &clock, 2999);
        assert_eq!(center.phase(id), Phase::Visible);

        run_for(&mut center, &clock, 1);
        assert_eq!(center.phase(id), Phase::Leaving);
    }

    #[test]
    fn notification_stays_visible_until_its_lifetime() {
        let (mut center, clock) = center();
        let id = center.success("Upload complete", Some(AutoDismiss::from_millis(1000)));

        run_for(&mut center, &clock, 10);
        for _ in 10..999 {
            assert_eq!(center.phase(id), Phase::Visible);
            run_for(&mut center, &clock, 1);
        }
        assert_eq!(center.phase(id), Phase::Visible);

        run_for(&mut center, &clock, 1);
        assert_eq!(center.phase(id), Phase::Leaving);

        run_for(&mut center, &clock, 299);
        assert_eq!(center.phase(id), Phase::Leaving);
        assert!(center.renderer().contains(id));

        run_for(&mut center, &clock, 1);
        assert_eq!(center.phase(id), Phase::Removed);
        assert!(!center.renderer().contains(id));
    }

    #[test]
    fn short_lifetime_is_gone_after_lifetime_plus_exit() {
        let (mut center, clock) = center();
        let id = center.show("Upload complete", Severity::Success, Some(AutoDismiss::from_millis(100)));

        clock.advance_ms(100 + 300);
        center.tick();

        assert!(center.get(id).is_none());
        assert!(!center.renderer().contains(id));
        assert_eq!(center.pending_timers(), 0);
    }

    #[test]
    fn coarse_tick_still_walks_every_phase() {
        let diagnostics = DiagnosticsHandle::default();
        let (mut center, clock) = center();
        center.set_diagnostics(diagnostics.clone());
        let id = center.success("Done", Some(AutoDismiss::from_millis(50)));

        clock.advance_ms(5_000);
        assert_eq!(center.tick(), 3);

        let phases: Vec<Phase> = diagnostics
            .events_for(id)
            .into_iter()
            .filter_map(|event| match event.kind {
                LifecycleEventKind::PhaseChanged { phase } => Some(phase),
                _ => None,
            })
            .collect();
        assert_eq!(
            phases,
            vec![Phase::Entering, Phase::Visible, Phase::Leaving, Phase::Removed]
        );
    }

    #[test]
    fn remove_twice_is_a_no_op() {
        let (mut center, clock) = center();
        let id = center.info("Draft saved", None);

        assert!(center.remove(id));
        assert!(!center.remove(id));

        clock.advance_ms(300);
        center.tick();
        assert!(center.is_empty());
        assert!(!center.remove(id));
    }

    #[test]
    fn remove_unknown_id_is_a_no_op() {
        let (mut center, _clock) = center();
        center.info("Kept", None);

        assert!(!center.remove(NotificationId::from_raw(42)));
        assert_eq!(center.len(), 1);
    }

    #[test]
    fn remove_cancels_pending_auto_dismiss() {
        let clock = ManualClock::new();
        let mut center = NotificationCenter::with_parts(
            RecordingRenderer::default(),
            clock.clone(),
            Timing::default(),
        );
        let id = center.info("Processing", Some(AutoDismiss::from_millis(3000)));
        assert_eq!(center.pending_timers_for(id), 2);

        clock.advance_ms(10);
        center.tick();
        assert_eq!(center.phase(id), Phase::Visible);

        assert!(center.remove(id));
        assert_eq!(center.pending_timers_for(id), 1); // exit timer only

        clock.advance_ms(300);
        center.tick();
        assert_eq!(center.pending_timers(), 0);
        let calls_after_removal = center.renderer().calls.len();

        clock.advance_ms(3000);
        assert_eq!(center.tick(), 0);
        assert_eq!(center.renderer().calls.len(), calls_after_removal);
        assert_eq!(
            center.renderer().calls,
            vec![
                "mount toast-0".to_string(),
                "phase toast-0 Visible".to_string(),
                "phase toast-0 Leaving".to_string(),
                "unmount toast-0".to_string(),
            ]
        );
    }

    #[test]
    fn remove_during_entering_passes_through_leaving() {
        let (mut center, clock) = center();
        let id = center.warning("Low storage", None);

        assert!(center.remove(id));
        assert_eq!(center.phase(id), Phase::Leaving);
        assert_eq!(center.pending_timers_for(id), 1);

        clock.advance_ms(300);
        center.tick();
        assert_eq!(center.phase(id), Phase::Removed);
    }

    #[test]
    fn clear_all_empties_mapping_and_container() {
        for count in [0usize, 1, 5] {
            let (mut center, clock) = center();
            for i in 0..count {
                center.info(format!("message {i}"), None);
            }

            assert_eq!(center.clear_all(), count);
            clock.advance_ms(300);
            center.tick();

            assert!(center.is_empty());
            assert!(center.renderer().is_empty());
            assert_eq!(center.pending_timers(), 0);
        }
    }

    #[test]
    fn clear_all_skips_notifications_already_leaving() {
        let (mut center, _clock) = center();
        let first = center.info("first", None);
        center.info("second", None);
        center.remove(first);

        assert_eq!(center.clear_all(), 1);
    }

    #[test]
    fn shows_append_in_call_order() {
        let (mut center, clock) = center();
        let a = center.info("a", None);
        let b = center.error("b", None);
        let c = center.success("c", None);

        assert_eq!(center.ids(), vec![a, b, c]);
        assert_eq!(center.renderer().ids(), vec![a, b, c]);

        center.remove(b);
        clock.advance_ms(300);
        center.tick();
        assert_eq!(center.renderer().ids(), vec![a, c]);
        assert_in_sync(&center);
    }

    #[test]
    fn independent_lifetimes_do_not_interfere() {
        let (mut center, clock) = center();
        let long = center.info("long", Some(AutoDismiss::from_millis(2000)));
        let short = center.info("short", Some(AutoDismiss::from_millis(500)));

        run_for(&mut center, &clock, 800);
        assert_eq!(center.phase(short), Phase::Removed);
        assert_eq!(center.phase(long), Phase::Visible);

        run_for(&mut center, &clock, 1500);
        assert_eq!(center.phase(long), Phase::Removed);
    }

    #[test]
    fn sticky_notifications_wait_for_removal() {
        let (mut center, clock) = center();
        let id = center.error("Connection lost", Some(AutoDismiss::from_millis(0)));

        clock.advance_ms(60_000);
        center.tick();
        assert_eq!(center.phase(id), Phase::Visible);
        assert_eq!(center.pending_timers(), 0);

        center.remove(id);
        clock.advance_ms(300);
        center.tick();
        assert!(center.is_empty());
    }

    #[test]
    fn immediate_timing_removes_synchronously() {
        let clock = ManualClock::new();
        let mut center =
            NotificationCenter::with_parts(ToastStack::new(), clock, Timing::immediate());
        let id = center.info("Instant", None);

        assert_eq!(center.phase(id), Phase::Visible);
        assert!(center.remove(id));
        assert_eq!(center.phase(id), Phase::Removed);
        assert!(center.renderer().is_empty());
    }

    #[test]
    fn empty_message_is_accepted() {
        let (mut center, _clock) = center();
        let id = center.info("", None);
        assert_eq!(center.renderer().get(id).map(|view| view.message.as_str()), Some(""));
    }

    #[test]
    fn handle_message_routes_to_operations() {
        let (mut center, clock) = center();
        let id = center.info("test", None);

        center.handle_message(&Message::Dismiss(id));
        assert_eq!(center.phase(id), Phase::Leaving);

        clock.advance_ms(300);
        center.handle_message(&Message::Tick);
        assert!(center.is_empty());

        center.info("again", None);
        center.handle_message(&Message::ClearAll);
        assert!(center.live().all(|live| live.phase() == Phase::Leaving));
    }

    #[test]
    fn notify_posts_through_the_center() {
        fn report(notify: &mut impl Notify) -> Option<NotificationId> {
            notify.post(Notification::error("Validation failed"))
        }

        let (mut center, _clock) = center();
        let id = report(&mut center).expect("center assigns ids");
        assert_eq!(center.get(id).map(LiveNotification::severity), Some(Severity::Error));
    }

    #[test]
    fn next_deadline_points_at_enter_delay() {
        let (mut center, clock) = center();
        let start = clock.now();
        center.info("x", None);

        assert_eq!(center.next_deadline(), Some(start + Duration::from_millis(10)));
    }

    #[test]
    fn unrepresentable_lifetime_behaves_as_sticky() {
        let (mut center, clock) = center();
        let id = center.show("Stays put", Severity::Info, Some(AutoDismiss::from(Duration::MAX)));

        assert!(center.pending_timers_for(id) <= 1);
        run_for(&mut center, &clock, 10);
        assert_eq!(center.phase(id), Phase::Visible);
        assert!(!center.has_pending_timers());

        clock.advance_ms(60_000);
        center.tick();
        assert_eq!(center.phase(id), Phase::Visible);
        assert!(center.remove(id));
    }

    #[test]
    fn sticky_toast_leaves_no_timers_once_visible() {
        let (mut center, clock) = center();
        let id = center.info("Pinned", Some(AutoDismiss::Never));
        assert!(center.has_pending_timers());

        run_for(&mut center, &clock, 10);
        assert_eq!(center.phase(id), Phase::Visible);
        assert!(center.has_notifications());
        assert!(!center.has_pending_timers());
    }
}
