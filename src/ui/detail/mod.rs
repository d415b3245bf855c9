// SPDX-License-Identifier: MPL-2.0
//! Full-screen photo view with the sliding metadata panel.
//!
//! The component owns the panel gesture controller and its settle animation,
//! translates raw pointer events into controller calls, and reports a single
//! dismiss intent back to the application. Pointer handling is split into
//! timestamped `pointer_*` methods so gesture sequences can be driven
//! deterministically in tests.

pub mod gesture;
pub mod panel;
pub mod spring;

use crate::error::Error;
use crate::gallery::Photo;
use crate::ui::components::{centered_error_view, ErrorDisplay};
use crate::ui::design_tokens::{spacing, typography};
use crate::ui::styles::button as button_styles;
use crate::ui::styles::container as container_styles;
use gesture::PanelGesture;
use iced::widget::image::{Handle, Image};
use iced::widget::{button, Container, Stack, Text};
use iced::{alignment, event, keyboard, mouse, Element, Length, Point, Size};
use spring::Settle;
use std::time::{Duration, Instant};

/// Fallback frame delta for the first settle tick.
const FRAME_INTERVAL: Duration = Duration::from_millis(16);

/// Messages handled by the detail view.
#[derive(Debug, Clone)]
pub enum Message {
    /// Raw window/pointer event routed in by the application subscription.
    RawEvent(event::Event),
    /// Animation tick while a settle is in flight.
    Tick(Instant),
    /// The close button was pressed.
    DismissPressed,
}

/// Effects the application must react to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Effect {
    None,
    /// Leave the detail view (back navigation).
    Dismiss,
}

/// Release velocity estimation from successive pointer samples.
///
/// Keeps only the previous sample; the reported value is the instantaneous
/// horizontal velocity in px/ms over the last inter-sample gap, matching the
/// unit of the flick threshold.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct VelocityTracker {
    last_sample: Option<(Instant, f32)>,
    velocity: f32,
}

impl VelocityTracker {
    /// Starts tracking a new gesture from this sample.
    pub fn reset(&mut self, at: Instant, x: f32) {
        self.last_sample = Some((at, x));
        self.velocity = 0.0;
    }

    /// Records a pointer sample. Same-instant samples keep the previous
    /// estimate instead of dividing by zero.
    pub fn record(&mut self, at: Instant, x: f32) {
        if let Some((last_at, last_x)) = self.last_sample {
            let dt_ms = at.duration_since(last_at).as_secs_f32() * 1000.0;
            if dt_ms > f32::EPSILON {
                self.velocity = (x - last_x) / dt_ms;
            }
        }
        self.last_sample = Some((at, x));
    }

    /// Latest velocity estimate in px/ms.
    #[must_use]
    pub fn velocity(&self) -> f32 {
        self.velocity
    }
}

/// An active pointer press and its cumulative travel.
#[derive(Debug, Clone, PartialEq)]
struct Press {
    start: Point,
    claimed: bool,
    dx: f32,
    dy: f32,
}

/// State of the full-screen photo view.
#[derive(Debug, Clone)]
pub struct State {
    photo: Photo,
    panel: PanelGesture,
    settle: Option<Settle>,
    cursor_position: Option<Point>,
    press: Option<Press>,
    velocity: VelocityTracker,
    last_tick: Option<Instant>,
}

impl State {
    /// Creates the view for one photo. The panel width is derived from the
    /// viewport once, here, and stays fixed for the view's lifetime.
    #[must_use]
    pub fn new(photo: Photo, viewport: Size) -> Self {
        Self {
            photo,
            panel: PanelGesture::new(viewport.width),
            settle: None,
            cursor_position: None,
            press: None,
            velocity: VelocityTracker::default(),
            last_tick: None,
        }
    }

    #[must_use]
    pub fn photo(&self) -> &Photo {
        &self.photo
    }

    #[must_use]
    pub fn panel(&self) -> &PanelGesture {
        &self.panel
    }

    /// Whether a settle animation needs tick messages.
    #[must_use]
    pub fn is_animating(&self) -> bool {
        self.settle.is_some()
    }

    pub fn handle_message(&mut self, message: Message) -> Effect {
        match message {
            Message::RawEvent(event) => self.handle_raw_event(event),
            Message::Tick(now) => {
                self.step_settle(now);
                Effect::None
            }
            Message::DismissPressed => Effect::Dismiss,
        }
    }

    fn handle_raw_event(&mut self, event: event::Event) -> Effect {
        match event {
            event::Event::Mouse(mouse_event) => {
                match mouse_event {
                    mouse::Event::ButtonPressed(mouse::Button::Left) => {
                        if let Some(position) = self.cursor_position {
                            self.pointer_pressed(Instant::now(), position);
                        }
                    }
                    mouse::Event::CursorMoved { position } => {
                        self.pointer_moved(Instant::now(), position);
                    }
                    mouse::Event::ButtonReleased(mouse::Button::Left) => {
                        self.pointer_released();
                    }
                    _ => {}
                }
                Effect::None
            }
            event::Event::Keyboard(keyboard::Event::KeyPressed {
                key: keyboard::Key::Named(keyboard::key::Named::Escape),
                ..
            }) => Effect::Dismiss,
            _ => Effect::None,
        }
    }

    /// A primary-button press at `position`. The gesture is not claimed yet;
    /// that happens once the travel passes the swipe recognition guard.
    pub fn pointer_pressed(&mut self, at: Instant, position: Point) {
        self.press = Some(Press {
            start: position,
            claimed: false,
            dx: 0.0,
            dy: 0.0,
        });
        self.velocity.reset(at, position.x);
    }

    /// A pointer movement. Runs once per input frame and must stay cheap:
    /// no allocation happens on this path.
    pub fn pointer_moved(&mut self, at: Instant, position: Point) {
        self.cursor_position = Some(position);

        let Some(press) = &mut self.press else {
            return;
        };

        press.dx = position.x - press.start.x;
        press.dy = position.y - press.start.y;
        self.velocity.record(at, position.x);

        if !press.claimed && self.panel.claims(press.dx, press.dy) {
            // A new gesture supersedes an in-flight settle, resuming from
            // its mid-flight offset.
            self.settle = None;
            self.last_tick = None;
            self.panel.begin_drag();
            press.claimed = true;
        }

        if press.claimed {
            self.panel.update_drag(press.dx);
        }
    }

    /// The primary button was released; resolves the settle target.
    pub fn pointer_released(&mut self) {
        let Some(press) = self.press.take() else {
            return;
        };

        if press.claimed {
            let target = self.panel.end_drag(press.dx, self.velocity.velocity());
            self.settle = Some(Settle::new(target, self.panel.panel_width()));
            self.last_tick = None;
        }
    }

    /// Advances the settle animation; flips visibility on completion.
    fn step_settle(&mut self, now: Instant) {
        let Some(settle) = &mut self.settle else {
            return;
        };

        let dt = self
            .last_tick
            .map_or(FRAME_INTERVAL, |last| now.duration_since(last));
        self.last_tick = Some(now);

        let target = settle.target();
        let frame = settle.step(self.panel.current_offset(), dt);

        if frame.finished {
            self.panel.finish_settle(target);
            self.settle = None;
            self.last_tick = None;
        } else {
            self.panel.apply_settle_frame(frame.offset);
        }
    }

    pub fn view(&self) -> Element<'_, Message> {
        if !self.photo.has_source() {
            return centered_error_view(
                ErrorDisplay::new()
                    .title(Error::MissingPhotoData.to_string())
                    .message("This photo has no source file to display.")
                    .action("Back", Message::DismissPressed),
            );
        }

        let image = Image::new(Handle::from_path(&self.photo.uri))
            .content_fit(iced::ContentFit::Contain)
            .width(Length::Fill)
            .height(Length::Fill);

        let backdrop = Container::new(image)
            .width(Length::Fill)
            .height(Length::Fill)
            .style(container_styles::photo_backdrop);

        let mut stack = Stack::new()
            .width(Length::Fill)
            .height(Length::Fill)
            .push(backdrop);

        let visible_width = self.panel.panel_width() + self.panel.current_offset();
        if visible_width > 0.0 {
            stack = stack.push(panel::view(
                &self.photo,
                self.panel.panel_width(),
                visible_width,
                self.panel.is_open(),
            ));
        }

        let close = Container::new(
            button(Text::new("\u{2715}").size(typography::TITLE_SM))
                .on_press(Message::DismissPressed)
                .padding(spacing::XS)
                .style(button_styles::overlay),
        )
        .width(Length::Fill)
        .align_x(alignment::Horizontal::Right)
        .padding(spacing::LG);

        stack = stack.push(close);

        stack.into()
    }
}
