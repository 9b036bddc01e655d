// SPDX-License-Identifier: MPL-2.0
//! View rendering for the application.
//!
//! The page is a single scrollable column of document tools with the toast
//! overlay stacked on top.

use super::Message;
use crate::documents::{
    file_icon, format_file_size, CharacterCounter, CounterLevel, DocumentFilter, DocumentKind,
    FileUploader, KindFilter, SortOrder,
};
use crate::ui::design_tokens::{palette, radius, sizing, spacing, typography};
use crate::ui::notifications::{Anchor, Severity, Toast, ToastStack};
use iced::widget::{
    button, container, pick_list, progress_bar, scrollable, text, text_input, Column, Container,
    Row, Stack, Text,
};
use iced::{alignment, Color, Element, Length, Theme};

const KIND_FILTERS: [KindFilter; 4] = [
    KindFilter::All,
    KindFilter::Only(DocumentKind::Resume),
    KindFilter::Only(DocumentKind::CoverLetter),
    KindFilter::Only(DocumentKind::Other),
];

/// Context required to render the application view.
pub struct ViewContext<'a> {
    pub toasts: &'a ToastStack,
    pub anchor: Anchor,
    pub uploader: &'a FileUploader,
    pub counter: &'a CharacterCounter,
    pub draft: &'a str,
    pub documents: &'a DocumentFilter,
    pub search: &'a str,
}

/// Renders the page and the toast overlay.
pub fn view(ctx: ViewContext<'_>) -> Element<'_, Message> {
    let page = Column::new()
        .spacing(spacing::LG)
        .padding(spacing::LG)
        .max_width(sizing::CONTENT_MAX_WIDTH)
        .push(Text::new("DocDesk").size(typography::TITLE_MD))
        .push(view_toast_controls())
        .push(view_uploads(ctx.uploader))
        .push(view_counter(ctx.counter, ctx.draft))
        .push(view_documents(ctx.documents, ctx.search));

    let base = Container::new(scrollable(
        Container::new(page)
            .width(Length::Fill)
            .align_x(alignment::Horizontal::Center),
    ))
    .width(Length::Fill)
    .height(Length::Fill);

    Stack::new()
        .push(base)
        .push(Toast::view_overlay(ctx.toasts, ctx.anchor).map(Message::Notification))
        .into()
}

fn section<'a>(title: &'a str, body: impl Into<Element<'a, Message>>) -> Element<'a, Message> {
    Container::new(
        Column::new()
            .spacing(spacing::SM)
            .push(Text::new(title).size(typography::BODY))
            .push(body),
    )
    .width(Length::Fill)
    .padding(spacing::MD)
    .style(|_theme: &Theme| container::Style {
        background: Some(iced::Background::Color(palette::WHITE)),
        border: iced::Border {
            color: palette::GRAY_400,
            width: 1.0,
            radius: radius::MD.into(),
        },
        ..Default::default()
    })
    .into()
}

fn caption<'a>(content: String, color: Color) -> Text<'a> {
    Text::new(content)
        .size(typography::CAPTION)
        .style(move |_theme: &Theme| text::Style { color: Some(color) })
}

fn view_toast_controls<'a>() -> Element<'a, Message> {
    let mut row = Row::new().spacing(spacing::XS);
    for severity in Severity::ALL {
        row = row.push(
            button(Text::new(severity.name()).size(typography::BODY_SM))
                .on_press(Message::ShowToast(severity)),
        );
    }
    row = row
        .push(button(Text::new("Clear all").size(typography::BODY_SM)).on_press(Message::ClearToasts))
        .push(
            button(Text::new("Export history").size(typography::BODY_SM))
                .on_press(Message::ExportHistory),
        );

    section("Notifications", row)
}

fn view_uploads(uploader: &FileUploader) -> Element<'_, Message> {
    let allowed = uploader.options().allowed_extensions.join(", ");
    let mut body = Column::new()
        .spacing(spacing::XS)
        .push(caption(
            format!(
                "Drop files on the window ({allowed}, up to {})",
                format_file_size(uploader.options().max_size_bytes)
            ),
            palette::GRAY_600,
        ))
        .push(button(Text::new("Add sample files").size(typography::BODY_SM)).on_press(Message::AddSampleFiles));

    for upload in uploader.in_flight() {
        let file = upload.file();
        body = body.push(
            Column::new()
                .spacing(spacing::XXS)
                .push(file_line(
                    &file.name,
                    file.size,
                    format!("{}%", upload.percent()),
                    Message::RemoveFile(upload.id()),
                ))
                .push(progress_bar(0.0..=1.0, upload.fraction()).girth(sizing::PROGRESS_HEIGHT)),
        );
    }

    for uploaded in uploader.uploaded() {
        body = body.push(file_line(
            &uploaded.file.name,
            uploaded.file.size,
            "Uploaded".to_string(),
            Message::RemoveFile(uploaded.id),
        ));
    }

    section("Upload", body)
}

fn file_line<'a>(name: &'a str, size: u64, status: String, remove: Message) -> Element<'a, Message> {
    Row::new()
        .spacing(spacing::SM)
        .align_y(alignment::Vertical::Center)
        .push(caption(format!("[{}]", file_icon(name)), palette::PRIMARY_600))
        .push(
            Column::new()
                .width(Length::Fill)
                .push(Text::new(name).size(typography::BODY_SM))
                .push(caption(format_file_size(size), palette::GRAY_600)),
        )
        .push(caption(status, palette::GRAY_600))
        .push(button(Text::new("Remove").size(typography::CAPTION)).on_press(remove))
        .into()
}

fn counter_color(level: CounterLevel) -> Color {
    match level {
        CounterLevel::Exceeded => palette::ERROR_500,
        CounterLevel::OnTarget => palette::SUCCESS_500,
        level if level.is_warning() => palette::WARNING_500,
        _ => palette::GRAY_600,
    }
}

fn view_counter<'a>(counter: &'a CharacterCounter, draft: &'a str) -> Element<'a, Message> {
    let status = Row::new()
        .push(
            Container::new(caption(counter.display_text(), counter_color(counter.level())))
                .width(Length::Fill),
        )
        .push(caption(counter.target_label(), palette::GRAY_600));

    let mut body = Column::new()
        .spacing(spacing::XS)
        .push(text_input("Write your self-introduction...", draft).on_input(Message::DraftChanged))
        .push(status);

    if counter.shows_progress() {
        body = body.push(
            progress_bar(0.0..=100.0, counter.percentage() as f32).girth(sizing::PROGRESS_HEIGHT),
        );
    }

    section("Draft", body)
}

fn view_documents<'a>(documents: &'a DocumentFilter, search: &'a str) -> Element<'a, Message> {
    let mut controls = Row::new()
        .spacing(spacing::XS)
        .align_y(alignment::Vertical::Center)
        .push(
            text_input("Search by title", search)
                .on_input(Message::SearchChanged)
                .width(Length::Fill),
        )
        .push(pick_list(KIND_FILTERS, Some(documents.kind()), Message::KindSelected))
        .push(pick_list(SortOrder::ALL, Some(documents.sort()), Message::SortSelected));

    if documents.is_filtered() {
        controls = controls.push(
            button(Text::new("Clear").size(typography::BODY_SM)).on_press(Message::ClearFilters),
        );
    }

    let visible = documents.visible();
    let mut body = Column::new()
        .spacing(spacing::XS)
        .push(controls)
        .push(caption(format!("{} documents", visible.len()), palette::GRAY_600));

    if visible.is_empty() {
        body = body.push(caption("No documents found".to_string(), palette::GRAY_600));
    } else {
        for row in visible {
            body = body.push(
                Row::new()
                    .spacing(spacing::SM)
                    .push(Text::new(row.title.as_str()).size(typography::BODY_SM).width(Length::Fill))
                    .push(caption(row.kind.label().to_string(), palette::GRAY_600))
                    .push(caption(row.date.format("%Y-%m-%d").to_string(), palette::GRAY_600)),
            );
        }
    }

    section("Documents", body)
}
