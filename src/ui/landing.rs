// SPDX-License-Identifier: MPL-2.0
//! Landing screen shown on startup.

use crate::ui::design_tokens::{spacing, typography};
use crate::ui::styles::button as button_styles;
use iced::widget::{button, Column, Container, Text};
use iced::{alignment, Element, Length};

/// Messages emitted by the landing screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Message {
    /// Move on to the gallery.
    BrowseGallery,
}

pub fn view() -> Element<'static, Message> {
    let content = Column::new()
        .spacing(spacing::MD)
        .align_x(alignment::Horizontal::Center)
        .push(Text::new("PhotoDeck").size(typography::TITLE_LG))
        .push(
            Text::new("Browse your photos and swipe open their camera details.")
                .size(typography::BODY),
        )
        .push(
            button(Text::new("Browse Gallery"))
                .on_press(Message::BrowseGallery)
                .padding(spacing::SM)
                .style(button_styles::primary),
        );

    Container::new(content)
        .width(Length::Fill)
        .height(Length::Fill)
        .align_x(alignment::Horizontal::Center)
        .align_y(alignment::Vertical::Center)
        .into()
}
