// SPDX-License-Identifier: MPL-2.0
//! Centralized design tokens: colors, opacity, spacing, and type scale.

use iced::Color;

pub mod palette {
    use super::Color;

    // Grayscale
    pub const BLACK: Color = Color::BLACK;
    pub const WHITE: Color = Color::WHITE;
    pub const GRAY_900: Color = Color::from_rgb(0.08, 0.08, 0.08);
    pub const GRAY_700: Color = Color::from_rgb(0.3, 0.3, 0.3);
    pub const GRAY_400: Color = Color::from_rgb(0.55, 0.55, 0.55);
    pub const GRAY_200: Color = Color::from_rgb(0.75, 0.75, 0.75);

    // Brand colors
    pub const PRIMARY_400: Color = Color::from_rgb(0.4, 0.7, 1.0);
    pub const PRIMARY_500: Color = Color::from_rgb(0.3, 0.6, 0.9);
    pub const PRIMARY_600: Color = Color::from_rgb(0.2, 0.5, 0.8);

    // Semantic colors
    pub const ERROR_500: Color = Color::from_rgb(0.898, 0.224, 0.208);
}

pub mod opacity {
    pub const OVERLAY_SUBTLE: f32 = 0.3;
    pub const OVERLAY_MEDIUM: f32 = 0.5;
    pub const OVERLAY_HOVER: f32 = 0.8;

    /// Background of the sliding metadata panel.
    pub const PANEL_SURFACE: f32 = 0.92;
}

/// Spacing scale on an 8px baseline grid.
pub mod spacing {
    pub const XXS: f32 = 4.0;
    pub const XS: f32 = 8.0;
    pub const SM: f32 = 12.0;
    pub const MD: f32 = 16.0;
    pub const LG: f32 = 24.0;
    pub const XL: f32 = 32.0;
}

pub mod typography {
    pub const CAPTION: f32 = 13.0;
    pub const BODY: f32 = 15.0;
    pub const TITLE_SM: f32 = 20.0;
    pub const TITLE_LG: f32 = 28.0;
}

pub mod radius {
    pub const SM: f32 = 4.0;
    pub const MD: f32 = 8.0;
    pub const LG: f32 = 15.0;
}

pub mod sizing {
    /// Height of a gallery thumbnail cell.
    pub const THUMBNAIL: f32 = 200.0;
    /// Width of the panel's drag handle gutter.
    pub const DRAG_HANDLE_GUTTER: f32 = 30.0;
    /// The drag handle pill itself.
    pub const DRAG_HANDLE_WIDTH: f32 = 6.0;
    pub const DRAG_HANDLE_HEIGHT: f32 = 60.0;
}
