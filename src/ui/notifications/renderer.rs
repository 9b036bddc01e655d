// SPDX-License-Identifier: MPL-2.0
//! The seam between lifecycle logic and whatever draws the toasts.
//!
//! The center calls a [`Renderer`] to mount, restyle and unmount toast
//! views; it never touches a UI toolkit itself. [`ToastStack`] is the
//! in-memory container the iced overlay reads from.

use super::notification::{IconKind, NotificationId, Phase, Severity};

/// What a renderer needs to draw one toast.
#[derive(Debug, Clone, PartialEq)]
pub struct ToastView {
    pub id: NotificationId,
    pub severity: Severity,
    /// Plain text, never markup.
    pub message: String,
    pub phase: Phase,
}

impl ToastView {
    #[must_use]
    pub fn icon(&self) -> IconKind {
        self.severity.icon()
    }

    /// Returns whether the toast is mid-transition (entering or leaving).
    #[must_use]
    pub fn is_transitioning(&self) -> bool {
        matches!(self.phase, Phase::Entering | Phase::Leaving)
    }
}

/// Mounts and unmounts toast views inside a single container.
///
/// Calls always arrive in lifecycle order for a given id: one `mount`,
/// zero or more `set_phase`, then one `unmount`.
pub trait Renderer {
    /// Appends a view after all currently mounted ones.
    fn mount(&mut self, view: ToastView);

    /// Updates the phase styling of a mounted view.
    fn set_phase(&mut self, id: NotificationId, phase: Phase);

    /// Detaches a view from the container.
    fn unmount(&mut self, id: NotificationId);
}

impl<R: Renderer + ?Sized> Renderer for Box<R> {
    fn mount(&mut self, view: ToastView) {
        (**self).mount(view);
    }

    fn set_phase(&mut self, id: NotificationId, phase: Phase) {
        (**self).set_phase(id, phase);
    }

    fn unmount(&mut self, id: NotificationId) {
        (**self).unmount(id);
    }
}

/// Ordered in-memory toast container, oldest first.
#[derive(Debug, Clone, Default)]
pub struct ToastStack {
    views: Vec<ToastView>,
}

impl ToastStack {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Mounted views in arrival order.
    pub fn iter(&self) -> impl Iterator<Item = &ToastView> {
        self.views.iter()
    }

    #[must_use]
    pub fn get(&self, id: NotificationId) -> Option<&ToastView> {
        self.views.iter().find(|view| view.id == id)
    }

    #[must_use]
    pub fn contains(&self, id: NotificationId) -> bool {
        self.get(id).is_some()
    }

    /// Ids of mounted views in arrival order.
    #[must_use]
    pub fn ids(&self) -> Vec<NotificationId> {
        self.views.iter().map(|view| view.id).collect()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.views.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.views.is_empty()
    }
}

impl Renderer for ToastStack {
    fn mount(&mut self, view: ToastView) {
        self.views.push(view);
    }

    fn set_phase(&mut self, id: NotificationId, phase: Phase) {
        if let Some(view) = self.views.iter_mut().find(|view| view.id == id) {
            view.phase = phase;
        }
    }

    fn unmount(&mut self, id: NotificationId) {
        self.views.retain(|view| view.id != id);
    }
}
