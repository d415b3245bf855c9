// SPDX-License-Identifier: MPL-2.0
//! Top-level messages and runtime flags for the application.

use crate::gallery::Photo;
use crate::ui::{detail, gallery_grid, landing};
use iced::{window, Size};
use std::path::PathBuf;

/// Options resolved from the command line before the app starts.
#[derive(Debug, Clone, Default)]
pub struct Flags {
    /// Directory whose images populate the gallery at startup.
    pub directory: Option<PathBuf>,
}

/// Top-level messages consumed by `App::update`. The variants forward
/// screen-level messages while keeping a single update entrypoint.
#[derive(Debug, Clone)]
pub enum Message {
    Landing(landing::Message),
    Gallery(gallery_grid::Message),
    Detail(detail::Message),
    /// A batch of photos finished importing (picker or directory scan).
    PhotosImported(Vec<Photo>),
    WindowOpened { window: window::Id, size: Size },
    WindowResized(Size),
    /// Window close was requested (user clicked X or pressed Alt+F4).
    WindowCloseRequested(window::Id),
}
