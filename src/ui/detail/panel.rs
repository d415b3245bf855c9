// SPDX-License-Identifier: MPL-2.0
//! Rendering of the sliding metadata panel.
//!
//! The panel is laid out at its full fixed width and clipped to the slice
//! that the current offset leaves on screen, so partially dragged states
//! reveal its screen-facing edge (and the drag handle) first.

use super::Message;
use crate::gallery::Photo;
use crate::metadata::formatted_fields;
use crate::ui::design_tokens::{sizing, spacing, typography};
use crate::ui::styles::container as container_styles;
use iced::widget::{rule, Column, Container, Row, Scrollable, Text};
use iced::{alignment, Element, Length};

/// Renders the panel for the slice `visible_width` wide.
///
/// `show_fields` follows the settled visibility flag: formatted metadata is
/// produced only for a panel that has finished opening, never for a
/// half-visible one.
pub fn view(
    photo: &Photo,
    panel_width: f32,
    visible_width: f32,
    show_fields: bool,
) -> Element<'static, Message> {
    let mut content = Column::new()
        .spacing(spacing::XS)
        .padding(spacing::LG)
        .width(Length::Fill)
        .push(Text::new("Details").size(typography::TITLE_SM))
        .push(rule::horizontal(1));

    if show_fields {
        for field in formatted_fields(photo) {
            content = content.push(
                Text::new(format!("{}: {}", field.label, field.value)).size(typography::BODY),
            );
        }
    }

    let handle = Container::new(
        Container::new(iced::widget::Space::new())
            .width(Length::Fixed(sizing::DRAG_HANDLE_WIDTH))
            .height(Length::Fixed(sizing::DRAG_HANDLE_HEIGHT))
            .style(container_styles::drag_handle),
    )
    .width(Length::Fixed(sizing::DRAG_HANDLE_GUTTER))
    .height(Length::Fill)
    .align_x(alignment::Horizontal::Center)
    .align_y(alignment::Vertical::Center);

    let body = Row::new()
        .push(Scrollable::new(content).width(Length::Fill))
        .push(handle);

    let panel = Container::new(body)
        .width(Length::Fixed(panel_width))
        .height(Length::Fill)
        .style(container_styles::metadata_panel);

    // Clip to the visible slice; right alignment keeps the screen-facing
    // edge of the panel (and its drag handle) inside the slice.
    Container::new(panel)
        .width(Length::Fixed(visible_width))
        .height(Length::Fill)
        .align_x(alignment::Horizontal::Right)
        .clip(true)
        .into()
}
