// SPDX-License-Identifier: MPL-2.0
//! HTML rendering of the toast container.
//!
//! [`MarkupRenderer`] keeps its own [`ToastStack`] and renders it on demand
//! as an HTML fragment, for hosts that embed the toasts in a web view or
//! export them. Message text is always escaped.

use super::notification::{Anchor, NotificationId, Phase, Severity};
use super::renderer::{Renderer, ToastStack, ToastView};
use std::fmt::Write as _;

/// Container id used in the rendered fragment.
pub const CONTAINER_ID: &str = "toast-container";

#[derive(Debug, Clone, Default)]
pub struct MarkupRenderer {
    stack: ToastStack,
    anchor: Anchor,
}

impl MarkupRenderer {
    #[must_use]
    pub fn new(anchor: Anchor) -> Self {
        Self {
            stack: ToastStack::new(),
            anchor,
        }
    }

    #[must_use]
    pub fn anchor(&self) -> Anchor {
        self.anchor
    }

    /// The mounted views backing the markup.
    #[must_use]
    pub fn stack(&self) -> &ToastStack {
        &self.stack
    }

    /// Renders the whole container with every mounted toast, oldest first.
    #[must_use]
    pub fn render(&self) -> String {
        let mut html = format!(
            r#"<div id="{CONTAINER_ID}" class="fixed {} z-50 space-y-3">"#,
            anchor_classes(self.anchor)
        );
        for view in self.stack.iter() {
            html.push_str(&render_toast(view));
        }
        html.push_str("</div>");
        html
    }
}

impl Renderer for MarkupRenderer {
    fn mount(&mut self, view: ToastView) {
        self.stack.mount(view);
    }

    fn set_phase(&mut self, id: NotificationId, phase: Phase) {
        self.stack.set_phase(id, phase);
    }

    fn unmount(&mut self, id: NotificationId) {
        self.stack.unmount(id);
    }
}

/// Renders a single toast element.
#[must_use]
pub fn render_toast(view: &ToastView) -> String {
    let (surface, text, border) = severity_classes(view.severity);
    let mut html = String::new();
    // Writing into a String cannot fail.
    let _ = write!(
        html,
        concat!(
            r#"<div class="toast toast-{severity} {phase} flex items-start gap-3 p-4 rounded-lg shadow-lg {surface} {text} border-l-4 {border}" data-toast-id="{id}" role="status">"#,
            r#"<div class="flex-shrink-0"><i data-lucide="{icon}" class="w-5 h-5"></i></div>"#,
            r#"<div class="flex-1"><p class="font-semibold text-sm">{message}</p></div>"#,
            r#"<button class="flex-shrink-0 hover:opacity-70" data-dismiss="{id}" aria-label="Dismiss"><i data-lucide="x" class="w-4 h-4"></i></button>"#,
            "</div>"
        ),
        severity = view.severity.name(),
        phase = phase_class(view.phase),
        surface = surface,
        text = text,
        border = border,
        id = view.id,
        icon = view.icon().name(),
        message = escape_html(&view.message),
    );
    html
}

/// Escapes text for use in HTML element content and attribute values.
#[must_use]
pub fn escape_html(input: &str) -> String {
    let mut escaped = String::with_capacity(input.len());
    for c in input.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#39;"),
            _ => escaped.push(c),
        }
    }
    escaped
}

fn anchor_classes(anchor: Anchor) -> &'static str {
    match anchor {
        Anchor::TopRight => "top-4 right-4",
        Anchor::TopLeft => "top-4 left-4",
        Anchor::BottomRight => "bottom-4 right-4",
        Anchor::BottomLeft => "bottom-4 left-4",
    }
}

fn severity_classes(severity: Severity) -> (&'static str, &'static str, &'static str) {
    match severity {
        Severity::Success => ("bg-emerald-50", "text-emerald-800", "border-emerald-500"),
        Severity::Error => ("bg-red-50", "text-red-800", "border-red-500"),
        Severity::Warning => ("bg-amber-50", "text-amber-800", "border-amber-500"),
        Severity::Info => ("bg-blue-50", "text-blue-800", "border-blue-500"),
    }
}

fn phase_class(phase: Phase) -> &'static str {
    match phase {
        Phase::Created | Phase::Entering => "toast-enter",
        Phase::Visible => "toast-show",
        Phase::Leaving | Phase::Removed => "toast-hide",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ui::notifications::{ManualClock, NotificationCenter, Timing};

    fn view(message: &str, severity: Severity) -> ToastView {
        ToastView {
            id: NotificationId::from_raw(7),
            severity,
            message: message.to_string(),
            phase: Phase::Visible,
        }
    }

    #[test]
    fn escape_html_handles_special_characters() {
        assert_eq!(
            escape_html(r#"<b>"Tom" & 'Jerry'</b>"#),
            "&lt;b&gt;&quot;Tom&quot; &amp; &#39;Jerry&#39;&lt;/b&gt;"
        );
        assert_eq!(escape_html("plain"), "plain");
    }

    #[test]
    fn message_markup_is_never_interpreted() {
        let html = render_toast(&view("<script>alert(1)</script>", Severity::Error));
        assert!(!html.contains("<script>"));
        assert!(html.contains("&lt;script&gt;alert(1)&lt;/script&gt;"));
    }

    #[test]
    fn toast_carries_severity_styling_and_icon() {
        let html = render_toast(&view("Saved", Severity::Success));
        assert!(html.contains("toast-success"));
        assert!(html.contains("bg-emerald-50"));
        assert!(html.contains(r#"data-lucide="check-circle""#));
        assert!(html.contains(r#"data-toast-id="toast-7""#));
        assert!(html.contains("toast-show"));
    }

    #[test]
    fn container_position_follows_anchor() {
        let renderer = MarkupRenderer::new(Anchor::BottomLeft);
        let html = renderer.render();
        assert!(html.starts_with(r#"<div id="toast-container" class="fixed bottom-4 left-4"#));
        assert!(html.ends_with("</div>"));
    }

    #[test]
    fn center_drives_markup_in_arrival_order() {
        let clock = ManualClock::new();
        let mut center = NotificationCenter::with_parts(
            MarkupRenderer::default(),
            clock.clone(),
            Timing::default(),
        );
        center.info("first", None);
        center.error("second", None);

        let html = center.renderer().render();
        let first = html.find("first").expect("first rendered");
        let second = html.find("second").expect("second rendered");
        assert!(first < second);
        assert!(html.contains("toast-enter"));

        center.clear_all();
        clock.advance_ms(300);
        center.tick();
        assert!(!center.renderer().render().contains("data-toast-id"));
    }
}
