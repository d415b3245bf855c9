// SPDX-License-Identifier: MPL-2.0
//! Event subscriptions for the application.
//!
//! Raw pointer and keyboard events are routed to the detail screen only
//! while it is active; window lifecycle events are handled on every screen.

use super::{Message, Screen};
use crate::ui::detail;
use iced::{event, time, window, Subscription};
use std::time::Duration;

/// Creates the appropriate event subscription based on the current screen.
///
/// The detail screen receives all events the widget tree ignored, so the
/// panel gesture can track the pointer across the whole window. Other
/// screens only observe window lifecycle events.
pub fn create_event_subscription(screen: Screen) -> Subscription<Message> {
    match screen {
        Screen::Detail => event::listen_with(|event, status, window| match event {
            event::Event::Window(window::Event::Opened { size, .. }) => {
                Some(Message::WindowOpened { window, size })
            }
            event::Event::Window(window::Event::CloseRequested) => {
                Some(Message::WindowCloseRequested(window))
            }
            event::Event::Window(window::Event::Resized(size)) => {
                Some(Message::WindowResized(size))
            }
            _ => match status {
                event::Status::Ignored => Some(Message::Detail(detail::Message::RawEvent(event))),
                event::Status::Captured => None,
            },
        }),
        Screen::Landing | Screen::Gallery => {
            event::listen_with(|event, _status, window| match event {
                event::Event::Window(window::Event::Opened { size, .. }) => {
                    Some(Message::WindowOpened { window, size })
                }
                event::Event::Window(window::Event::CloseRequested) => {
                    Some(Message::WindowCloseRequested(window))
                }
                event::Event::Window(window::Event::Resized(size)) => {
                    Some(Message::WindowResized(size))
                }
                _ => None,
            })
        }
    }
}

/// Creates the ~60 Hz tick subscription that drives the panel's settle
/// animation. Inactive whenever no settle is in flight.
pub fn create_tick_subscription(animating: bool) -> Subscription<Message> {
    if animating {
        time::every(Duration::from_millis(16))
            .map(|instant| Message::Detail(detail::Message::Tick(instant)))
    } else {
        Subscription::none()
    }
}
