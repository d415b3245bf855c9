// SPDX-License-Identifier: MPL-2.0
//! Top-level view dispatch.

use super::{App, Message, Screen};
use crate::ui::{gallery_grid, landing};
use iced::Element;

impl App {
    pub(super) fn view(&self) -> Element<'_, Message> {
        match self.screen {
            Screen::Landing => landing::view().map(Message::Landing),
            Screen::Gallery => self.gallery_view(),
            Screen::Detail => match &self.detail {
                Some(state) => state.view().map(Message::Detail),
                // Detail without state cannot normally happen; fall back to
                // the gallery rather than panicking.
                None => self.gallery_view(),
            },
        }
    }

    fn gallery_view(&self) -> Element<'_, Message> {
        gallery_grid::view(&self.library, self.thumbnails_per_row, self.importing)
            .map(Message::Gallery)
    }
}
