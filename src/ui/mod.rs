// SPDX-License-Identifier: MPL-2.0
//! UI components and screens.

pub mod chrome;
pub mod components;
pub mod design_tokens;
pub mod detail;
pub mod gallery_grid;
pub mod landing;
pub mod styles;
