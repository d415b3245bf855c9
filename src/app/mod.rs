// SPDX-License-Identifier: MPL-2.0
//! Application root state and orchestration between screens.
//!
//! The `App` struct wires the landing, gallery, and detail screens together
//! and translates their messages into side effects: photo imports, config
//! persistence, and window-chrome changes. Policy decisions (default window
//! size, when fullscreen is entered and left) stay close to the main update
//! loop so user-facing behavior is easy to audit.

mod message;
mod screen;
mod subscription;
mod update;
mod view;

pub use message::{Flags, Message};
pub use screen::Screen;

use crate::config;
use crate::gallery::{import, PhotoLibrary};
use crate::ui::chrome::ChromeGuard;
use crate::ui::detail;
use iced::{window, Size, Task, Theme};

pub const WINDOW_DEFAULT_WIDTH: u32 = 800;
pub const WINDOW_DEFAULT_HEIGHT: u32 = 650;

/// Root Iced application state.
pub struct App {
    screen: Screen,
    library: PhotoLibrary,
    /// Present only while the detail screen is active.
    detail: Option<detail::State>,
    chrome: ChromeGuard,
    window_id: Option<window::Id>,
    window_size: Size,
    thumbnails_per_row: u32,
    /// Whether a picker/import task is in flight (disables the Add button).
    importing: bool,
}

impl Default for App {
    fn default() -> Self {
        Self {
            screen: Screen::Landing,
            library: PhotoLibrary::new(),
            detail: None,
            chrome: ChromeGuard::new(),
            window_id: None,
            window_size: Size::new(WINDOW_DEFAULT_WIDTH as f32, WINDOW_DEFAULT_HEIGHT as f32),
            thumbnails_per_row: config::DEFAULT_THUMBNAILS_PER_ROW,
            importing: false,
        }
    }
}

/// Builds the window settings.
pub fn window_settings() -> window::Settings {
    window::Settings {
        size: Size::new(WINDOW_DEFAULT_WIDTH as f32, WINDOW_DEFAULT_HEIGHT as f32),
        min_size: Some(Size::new(480.0, 480.0)),
        ..window::Settings::default()
    }
}

/// Entry point used by `main.rs` to launch the Iced application loop.
pub fn run(flags: Flags) -> iced::Result {
    use std::cell::RefCell;

    // Wrap flags in RefCell<Option<_>> to satisfy the Fn trait requirement
    // while only consuming flags once (iced 0.14 requires Fn, not FnOnce).
    let boot_state = RefCell::new(Some(flags));
    let boot = move || {
        let flags = boot_state
            .borrow_mut()
            .take()
            .expect("Boot function called more than once");
        App::new(flags)
    };

    iced::application(boot, App::update, App::view)
        .title(App::title)
        .theme(App::theme)
        .window(window_settings())
        .subscription(App::subscription)
        .run()
}

impl App {
    /// Initializes application state and optionally kicks off an import of
    /// the directory passed on the command line.
    fn new(flags: Flags) -> (Self, Task<Message>) {
        let config = config::load().unwrap_or_else(|error| {
            eprintln!("Failed to load config: {}", error);
            config::Config::default()
        });

        let mut app = App::default();
        app.thumbnails_per_row = config::clamp_thumbnails_per_row(
            config
                .thumbnails_per_row
                .unwrap_or(config::DEFAULT_THUMBNAILS_PER_ROW),
        );

        let task = match flags.directory {
            Some(directory) => {
                Task::perform(import::import_directory(directory), Message::PhotosImported)
            }
            None => Task::none(),
        };

        (app, task)
    }

    fn title(&self) -> String {
        "PhotoDeck".to_string()
    }

    fn theme(&self) -> Theme {
        Theme::Dark
    }

    fn subscription(&self) -> iced::Subscription<Message> {
        let animating = self
            .detail
            .as_ref()
            .is_some_and(detail::State::is_animating);

        iced::Subscription::batch([
            subscription::create_event_subscription(self.screen),
            subscription::create_tick_subscription(animating),
        ])
    }
}
