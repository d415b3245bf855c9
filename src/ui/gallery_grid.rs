// SPDX-License-Identifier: MPL-2.0
//! Gallery screen: a thumbnail grid with an import action.
//!
//! Thumbnails are loaded lazily by Iced's image widget straight from the
//! photo's source path; the grid itself holds no pixel data.

use crate::gallery::PhotoLibrary;
use crate::ui::design_tokens::{sizing, spacing, typography};
use crate::ui::styles::button as button_styles;
use crate::ui::styles::container as container_styles;
use iced::widget::image::{Handle, Image};
use iced::widget::{button, Column, Container, Row, Scrollable, Text};
use iced::{alignment, Element, Length};

/// Messages emitted by the gallery screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Message {
    /// Open the native picker to add photos.
    AddPhotos,
    /// Open the photo at this library index full screen.
    PhotoOpened(usize),
}

pub fn view(library: &PhotoLibrary, columns: u32, importing: bool) -> Element<'_, Message> {
    let columns = columns.max(1) as usize;

    let mut add_button = button(Text::new("Add Photos")).style(button_styles::primary);
    if !importing {
        add_button = add_button.on_press(Message::AddPhotos);
    }

    let header = Row::new()
        .width(Length::Fill)
        .align_y(alignment::Vertical::Center)
        .padding(spacing::SM)
        .push(Text::new("Gallery").size(typography::TITLE_LG))
        .push(iced::widget::Space::new().width(Length::Fill))
        .push(add_button);

    let body: Element<'_, Message> = if library.is_empty() {
        empty_state()
    } else {
        grid(library, columns)
    };

    Column::new()
        .width(Length::Fill)
        .height(Length::Fill)
        .push(header)
        .push(body)
        .into()
}

fn empty_state() -> Element<'static, Message> {
    let content = Column::new()
        .spacing(spacing::XS)
        .align_x(alignment::Horizontal::Center)
        .push(Text::new("Your gallery is empty.").size(typography::BODY))
        .push(
            Text::new("Tap \"Add Photos\" to select images from your library.")
                .size(typography::CAPTION),
        );

    Container::new(content)
        .width(Length::Fill)
        .height(Length::Fill)
        .align_x(alignment::Horizontal::Center)
        .align_y(alignment::Vertical::Center)
        .padding(spacing::LG)
        .into()
}

fn grid(library: &PhotoLibrary, columns: usize) -> Element<'_, Message> {
    let mut rows = Column::new().spacing(spacing::XS).padding(spacing::XS);

    let photos: Vec<_> = library.iter().enumerate().collect();
    for chunk in photos.chunks(columns) {
        let mut row = Row::new().spacing(spacing::XS).width(Length::Fill);

        for (index, photo) in chunk {
            let thumbnail = Image::new(Handle::from_path(&photo.uri))
                .content_fit(iced::ContentFit::Cover)
                .width(Length::Fill)
                .height(Length::Fixed(sizing::THUMBNAIL));

            let cell = Container::new(thumbnail)
                .width(Length::Fill)
                .height(Length::Fixed(sizing::THUMBNAIL))
                .clip(true)
                .style(container_styles::thumbnail_cell);

            row = row.push(
                button(cell)
                    .on_press(Message::PhotoOpened(*index))
                    .padding(0.0)
                    .width(Length::FillPortion(1))
                    .style(button_styles::thumbnail),
            );
        }

        // Pad the last row so a partial chunk keeps cell widths uniform.
        for _ in chunk.len()..columns {
            row = row.push(
                Container::new(iced::widget::Space::new()).width(Length::FillPortion(1)),
            );
        }

        rows = rows.push(row);
    }

    Scrollable::new(rows)
        .width(Length::Fill)
        .height(Length::Fill)
        .into()
}
