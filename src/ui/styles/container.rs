// SPDX-License-Identifier: MPL-2.0
//! Container styles.

use crate::ui::design_tokens::{opacity, palette, radius};
use iced::widget::container;
use iced::{Background, Border, Color, Theme};

/// Solid black backdrop behind the full-screen photo.
pub fn photo_backdrop(_theme: &Theme) -> container::Style {
    container::Style {
        background: Some(Background::Color(palette::BLACK)),
        ..Default::default()
    }
}

/// Surface of the sliding metadata panel: dark, slightly translucent, with
/// rounded corners on the screen-facing edge.
pub fn metadata_panel(_theme: &Theme) -> container::Style {
    container::Style {
        background: Some(Background::Color(Color {
            a: opacity::PANEL_SURFACE,
            ..palette::GRAY_900
        })),
        border: Border {
            radius: iced::border::Radius {
                top_left: 0.0,
                top_right: radius::LG,
                bottom_right: radius::LG,
                bottom_left: 0.0,
            },
            ..Default::default()
        },
        text_color: Some(palette::WHITE),
        ..Default::default()
    }
}

/// The drag handle pill on the panel's screen-facing edge.
pub fn drag_handle(_theme: &Theme) -> container::Style {
    container::Style {
        background: Some(Background::Color(Color {
            a: opacity::OVERLAY_SUBTLE,
            ..palette::WHITE
        })),
        border: Border {
            radius: radius::SM.into(),
            ..Default::default()
        },
        ..Default::default()
    }
}

/// Rounded cell behind each gallery thumbnail.
pub fn thumbnail_cell(theme: &Theme) -> container::Style {
    container::Style {
        background: Some(Background::Color(
            theme.extended_palette().background.weak.color,
        )),
        border: Border {
            radius: radius::MD.into(),
            ..Default::default()
        },
        ..Default::default()
    }
}
