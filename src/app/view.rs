// SPDX-License-Identifier: MPL-2.0
//! Demo window layout: severity buttons with the toast stack layered on top.

use super::{App, Message};
use crate::ui::design_tokens::{sizing, spacing, typography};
use crate::ui::notifications::Severity;
use iced::widget::{button, column, container, row, stack, text, Button};
use iced::{alignment, Element, Length};

const SEVERITIES: [Severity; 4] = [
    Severity::Info,
    Severity::Success,
    Severity::Warning,
    Severity::Error,
];

pub(super) fn view(app: &App) -> Element<'_, Message> {
    let buttons = SEVERITIES
        .into_iter()
        .fold(row![].spacing(spacing::XS), |row, severity| {
            row.push(severity_button(severity))
        });

    let counters = text(format!(
        "Shown: {}   Dismissed: {}   Queued: {}",
        app.shown_count(),
        app.dismissed_count(),
        app.notifications().queued_count()
    ))
    .size(typography::BODY);

    let clear = button(text("Clear all").size(typography::BODY))
        .on_press_maybe(
            app.notifications()
                .has_notifications()
                .then_some(Message::ClearAll),
        )
        .style(button::secondary);

    let content = container(
        column![
            text("Toast notifications").size(typography::TITLE_MD),
            buttons,
            counters,
            clear,
        ]
        .spacing(spacing::MD)
        .align_x(alignment::Horizontal::Center),
    )
    .center(Length::Fill)
    .padding(spacing::LG);

    stack![content, app.notifications().view().map(Message::Toast)].into()
}

fn severity_button(severity: Severity) -> Button<'static, Message> {
    let label = match severity {
        Severity::Info => "Info",
        Severity::Success => "Success",
        Severity::Warning => "Warning",
        Severity::Error => "Error",
    };

    let color = severity.color();
    button(text(label).size(typography::BODY))
        .height(Length::Fixed(sizing::BUTTON_HEIGHT))
        .padding([spacing::XS, spacing::MD])
        .on_press(Message::Show(severity))
        .style(move |theme, status| {
            let base = button::primary(theme, status);
            button::Style {
                background: Some(iced::Background::Color(color)),
                ..base
            }
        })
}
