// SPDX-License-Identifier: MPL-2.0
//! Main update loop.

use super::{App, Message, Screen};
use crate::config;
use crate::gallery::import;
use crate::ui::{detail, gallery_grid, landing};
use iced::{window, Task};

impl App {
    pub(super) fn update(&mut self, message: Message) -> Task<Message> {
        match message {
            Message::Landing(landing::Message::BrowseGallery) => {
                self.screen = Screen::Gallery;
                Task::none()
            }
            Message::Gallery(gallery_grid::Message::AddPhotos) => {
                if self.importing {
                    return Task::none();
                }
                self.importing = true;
                Task::perform(import::pick_photos(), Message::PhotosImported)
            }
            Message::Gallery(gallery_grid::Message::PhotoOpened(index)) => self.open_detail(index),
            Message::Detail(message) => self.update_detail(message),
            Message::PhotosImported(photos) => {
                self.importing = false;
                self.library.extend(photos);
                Task::none()
            }
            Message::WindowOpened { window, size } => {
                self.window_id = Some(window);
                self.window_size = size;
                Task::none()
            }
            Message::WindowResized(size) => {
                self.window_size = size;
                Task::none()
            }
            Message::WindowCloseRequested(window) => {
                self.persist_config();
                let release = self.chrome.release(self.window_id);
                Task::batch([release, window::close(window)])
            }
        }
    }

    fn update_detail(&mut self, message: detail::Message) -> Task<Message> {
        let Some(state) = &mut self.detail else {
            return Task::none();
        };

        match state.handle_message(message) {
            detail::Effect::Dismiss => self.close_detail(),
            detail::Effect::None => Task::none(),
        }
    }

    /// Enters the detail screen for one photo. The viewport is read here,
    /// once; the panel geometry stays fixed until the view is dismissed.
    fn open_detail(&mut self, index: usize) -> Task<Message> {
        let Some(photo) = self.library.get(index) else {
            return Task::none();
        };

        self.detail = Some(detail::State::new(photo.clone(), self.window_size));
        self.screen = Screen::Detail;
        self.chrome.acquire(self.window_id)
    }

    /// Leaves the detail screen, restoring window chrome on every path.
    fn close_detail(&mut self) -> Task<Message> {
        self.detail = None;
        self.screen = Screen::Gallery;
        self.chrome.release(self.window_id)
    }

    fn persist_config(&self) {
        let config = config::Config {
            thumbnails_per_row: Some(self.thumbnails_per_row),
        };
        if let Err(error) = config::save(&config) {
            eprintln!("Failed to save config: {}", error);
        }
    }
}
