// SPDX-License-Identifier: MPL-2.0
//! Toast widget for rendering individual notifications.
//!
//! Toasts are small cards with a severity-colored accent, an icon, the
//! message as plain text and a dismiss button. Entering and leaving toasts
//! are drawn faded.

use super::center::Message;
use super::notification::{Anchor, Phase, Severity};
use super::renderer::{ToastStack, ToastView};
use crate::ui::design_tokens::{
    border, opacity, palette, radius, shadow, sizing, spacing, typography,
};
use iced::widget::{button, container, text, Column, Container, Row, Text};
use iced::{alignment, Color, Element, Length, Theme};

/// Toast widget configuration.
pub struct Toast;

impl Toast {
    /// Renders a single toast.
    pub fn view(toast: &ToastView) -> Element<'_, Message> {
        let severity = toast.severity;
        let alpha = phase_alpha(toast.phase);

        let icon_widget = Text::new(toast.icon().glyph())
            .size(sizing::ICON_MD)
            .style(move |_theme: &Theme| text::Style {
                color: Some(fade(severity.color(), alpha)),
            });

        let message_widget = Text::new(toast.message.as_str())
            .size(typography::BODY)
            .style(move |_theme: &Theme| text::Style {
                color: Some(fade(severity.text_color(), alpha)),
            });

        let dismiss_button = button(Text::new("\u{2715}").size(sizing::ICON_SM))
            .on_press(Message::Dismiss(toast.id))
            .padding(spacing::XXS)
            .style(move |theme: &Theme, status| dismiss_button_style(theme, status, severity));

        // Layout: [icon] [message] [dismiss]
        let content = Row::new()
            .spacing(spacing::SM)
            .align_y(alignment::Vertical::Center)
            .push(Container::new(icon_widget).padding(spacing::XXS))
            .push(
                Container::new(message_widget)
                    .width(Length::Fill)
                    .align_x(alignment::Horizontal::Left),
            )
            .push(dismiss_button);

        Container::new(content)
            .width(Length::Fixed(sizing::TOAST_WIDTH))
            .padding(spacing::SM)
            .style(move |_theme: &Theme| toast_container_style(severity, alpha))
            .into()
    }

    /// Renders every mounted toast, oldest first, in the corner given by
    /// `anchor`.
    pub fn view_overlay(stack: &ToastStack, anchor: Anchor) -> Element<'_, Message> {
        let toasts: Vec<Element<'_, Message>> = stack.iter().map(Self::view).collect();

        if toasts.is_empty() {
            // Return an empty container that takes no space
            return Container::new(text(""))
                .width(Length::Shrink)
                .height(Length::Shrink)
                .into();
        }

        let horizontal = if anchor.is_right() {
            alignment::Horizontal::Right
        } else {
            alignment::Horizontal::Left
        };
        let vertical = if anchor.is_top() {
            alignment::Vertical::Top
        } else {
            alignment::Vertical::Bottom
        };

        let toast_column = Column::with_children(toasts)
            .spacing(spacing::SM)
            .align_x(horizontal);

        Container::new(toast_column)
            .width(Length::Fill)
            .height(Length::Fill)
            .align_x(horizontal)
            .align_y(vertical)
            .padding(spacing::MD)
            .into()
    }
}

/// Opacity of a toast in a given phase.
fn phase_alpha(phase: Phase) -> f32 {
    match phase {
        Phase::Visible => opacity::OPAQUE,
        Phase::Created | Phase::Entering | Phase::Leaving => opacity::TRANSITION,
        Phase::Removed => opacity::TRANSPARENT,
    }
}

fn fade(color: Color, alpha: f32) -> Color {
    Color {
        a: color.a * alpha,
        ..color
    }
}

/// Style function for the toast container.
fn toast_container_style(severity: Severity, alpha: f32) -> container::Style {
    container::Style {
        background: Some(iced::Background::Color(fade(severity.surface(), alpha))),
        border: iced::Border {
            color: fade(severity.color(), alpha),
            width: border::WIDTH_ACCENT,
            radius: radius::MD.into(),
        },
        shadow: if alpha < opacity::OPAQUE {
            shadow::NONE
        } else {
            shadow::LG
        },
        text_color: Some(fade(severity.text_color(), alpha)),
        ..Default::default()
    }
}

/// Style function for the dismiss button.
fn dismiss_button_style(_theme: &Theme, status: button::Status, severity: Severity) -> button::Style {
    let text_color = severity.text_color();

    match status {
        button::Status::Active => button::Style {
            background: None,
            text_color,
            border: iced::Border::default(),
            shadow: shadow::NONE,
            snap: true,
        },
        button::Status::Hovered | button::Status::Pressed => {
            let overlay = if status == button::Status::Hovered {
                opacity::OVERLAY_SUBTLE
            } else {
                opacity::OVERLAY_MEDIUM
            };
            button::Style {
                background: Some(iced::Background::Color(Color {
                    a: overlay,
                    ..palette::GRAY_400
                })),
                text_color,
                border: iced::Border {
                    radius: radius::SM.into(),
                    ..Default::default()
                },
                shadow: shadow::NONE,
                snap: true,
            }
        }
        button::Status::Disabled => button::Style {
            background: None,
            text_color: fade(text_color, opacity::OVERLAY_MEDIUM),
            border: iced::Border::default(),
            shadow: shadow::NONE,
            snap: true,
        },
    }
}
