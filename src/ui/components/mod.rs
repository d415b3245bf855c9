// SPDX-License-Identifier: MPL-2.0
//! Reusable UI components shared between screens.

pub mod error_display;

pub use error_display::{centered_error_view, ErrorDisplay};
