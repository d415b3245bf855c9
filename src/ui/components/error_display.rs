// SPDX-License-Identifier: MPL-2.0
//! Reusable error display with consistent styling.
//!
//! Shows a title, an explanatory message, and an optional action button
//! (e.g. a dismiss action for the detail view's missing-photo state).

use crate::ui::design_tokens::{palette, radius, spacing, typography};
use crate::ui::styles::button as button_styles;
use iced::widget::{button, Column, Container, Text};
use iced::{alignment, Element, Length, Theme};

/// Configuration for the error display component.
#[derive(Debug, Clone)]
pub struct ErrorDisplay<Message> {
    title: Option<String>,
    message: Option<String>,
    action_label: Option<String>,
    action_message: Option<Message>,
}

impl<Message> Default for ErrorDisplay<Message> {
    fn default() -> Self {
        Self {
            title: None,
            message: None,
            action_label: None,
            action_message: None,
        }
    }
}

impl<Message: Clone + 'static> ErrorDisplay<Message> {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the title (main heading).
    #[must_use]
    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    /// Sets the message (user-friendly explanation).
    #[must_use]
    pub fn message(mut self, message: impl Into<String>) -> Self {
        self.message = Some(message.into());
        self
    }

    /// Sets the action button label and message.
    #[must_use]
    pub fn action(mut self, label: impl Into<String>, message: Message) -> Self {
        self.action_label = Some(label.into());
        self.action_message = Some(message);
        self
    }

    /// Renders the error display component.
    pub fn view(self) -> Element<'static, Message> {
        let mut content = Column::new()
            .spacing(spacing::SM)
            .align_x(alignment::Horizontal::Center)
            .width(Length::Fill);

        if let Some(title_text) = self.title {
            let title = Text::new(title_text)
                .size(typography::TITLE_SM)
                .style(|_theme: &Theme| iced::widget::text::Style {
                    color: Some(palette::ERROR_500),
                });
            content = content.push(title);
        }

        if let Some(message_text) = self.message {
            content = content.push(Text::new(message_text).size(typography::BODY));
        }

        if let (Some(label), Some(msg)) = (self.action_label, self.action_message) {
            let action = button(Text::new(label))
                .on_press(msg)
                .style(button_styles::primary);
            content = content.push(
                Container::new(action)
                    .padding(spacing::SM)
                    .align_x(alignment::Horizontal::Center),
            );
        }

        Container::new(content)
            .width(Length::Fill)
            .max_width(420.0)
            .padding(spacing::LG)
            .style(|theme: &Theme| {
                let extended = theme.extended_palette();
                iced::widget::container::Style {
                    background: Some(iced::Background::Color(extended.background.weak.color)),
                    border: iced::Border {
                        color: extended.background.strong.color,
                        width: 1.0,
                        radius: radius::MD.into(),
                    },
                    text_color: Some(theme.palette().text),
                    ..Default::default()
                }
            })
            .into()
    }
}

/// Centers an error display inside its parent.
pub fn centered_error_view<Message: Clone + 'static>(
    error_display: ErrorDisplay<Message>,
) -> Element<'static, Message> {
    Container::new(error_display.view())
        .width(Length::Fill)
        .height(Length::Fill)
        .align_x(alignment::Horizontal::Center)
        .align_y(alignment::Vertical::Center)
        .padding(spacing::LG)
        .into()
}
