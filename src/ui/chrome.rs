// SPDX-License-Identifier: MPL-2.0
//! Scoped window-chrome control for the full-screen photo view.
//!
//! Entering the detail view puts the window into fullscreen (the desktop
//! counterpart of hiding a phone's status bar); leaving it restores the
//! windowed mode. The guard pairs every acquire with exactly one release and
//! tolerates redundant calls, so every exit path of the detail view can
//! release unconditionally.

use iced::window;
use iced::Task;

/// Tracks whether the window chrome is currently taken over.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ChromeGuard {
    hidden: bool,
}

impl ChromeGuard {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn is_hidden(&self) -> bool {
        self.hidden
    }

    /// Enters fullscreen. Idempotent: a second acquire does nothing.
    pub fn acquire<T>(&mut self, window: Option<window::Id>) -> Task<T>
    where
        T: Send + 'static,
    {
        if self.hidden {
            return Task::none();
        }
        let Some(id) = window else {
            return Task::none();
        };

        self.hidden = true;
        window::change_mode::<T>(id, window::Mode::Fullscreen)
    }

    /// Restores the windowed mode. Idempotent and safe on all exit paths.
    pub fn release<T>(&mut self, window: Option<window::Id>) -> Task<T>
    where
        T: Send + 'static,
    {
        if !self.hidden {
            return Task::none();
        }
        self.hidden = false;

        let Some(id) = window else {
            return Task::none();
        };
        window::change_mode::<T>(id, window::Mode::Windowed)
    }
}
