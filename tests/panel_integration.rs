// SPDX-License-Identifier: MPL-2.0
//! End-to-end tests of the detail view: pointer events in, settled panel
//! state out.

use iced::{event, mouse, Point, Size};
use photo_deck::gallery::Photo;
use photo_deck::metadata::{MetadataRecord, MetadataValue};
use photo_deck::ui::detail::gesture::PANEL_WIDTH_FRACTION;
use photo_deck::ui::detail::{Effect, Message, State};
use std::path::PathBuf;
use std::time::{Duration, Instant};

const VIEWPORT: Size = Size {
    width: 400.0,
    height: 700.0,
};
const PANEL_WIDTH: f32 = 400.0 * PANEL_WIDTH_FRACTION;

fn sample_photo() -> Photo {
    let mut exif_ns = MetadataRecord::new();
    exif_ns.insert("FNumber", MetadataValue::Number(2.8));
    exif_ns.insert("ExposureTime", MetadataValue::Number(0.005));

    let mut metadata = MetadataRecord::new();
    metadata.insert("Exif", MetadataValue::Record(exif_ns));

    Photo {
        id: "sample".into(),
        uri: PathBuf::from("/photos/sample.jpg"),
        metadata,
        width: Some(4000),
        height: Some(3000),
    }
}

fn base() -> Instant {
    Instant::now()
}

/// Feeds tick messages until the settle animation completes.
fn settle_fully(state: &mut State, from: Instant) {
    let mut now = from;
    for _ in 0..1000 {
        if !state.is_animating() {
            return;
        }
        now += Duration::from_millis(16);
        let effect = state.handle_message(Message::Tick(now));
        assert_eq!(effect, Effect::None);
    }
    panic!("settle did not finish within 1000 frames");
}

#[test]
fn slow_drag_past_midpoint_opens_the_panel() {
    let t0 = base();
    let mut state = State::new(sample_photo(), VIEWPORT);

    state.pointer_pressed(t0, Point::new(20.0, 300.0));
    // Travel well past the midpoint, slowly (about 0.08 px/ms).
    let mut x = 20.0;
    for step in 1..=10 {
        x = 20.0 + (PANEL_WIDTH * 0.6) * (step as f32 / 10.0);
        state.pointer_moved(t0 + Duration::from_millis(step * 220), Point::new(x, 300.0));
    }
    state.pointer_released();

    assert!(state.is_animating());
    assert!(!state.panel().is_open());

    settle_fully(&mut state, t0 + Duration::from_secs(10));
    assert!(state.panel().is_open());
    assert_eq!(state.panel().current_offset(), 0.0);
}

#[test]
fn slow_drag_short_of_midpoint_falls_back_closed() {
    let t0 = base();
    let mut state = State::new(sample_photo(), VIEWPORT);

    state.pointer_pressed(t0, Point::new(20.0, 300.0));
    state.pointer_moved(
        t0 + Duration::from_millis(600),
        Point::new(20.0 + PANEL_WIDTH * 0.4, 300.0),
    );
    state.pointer_released();

    settle_fully(&mut state, t0 + Duration::from_secs(10));
    assert!(!state.panel().is_open());
    assert_eq!(state.panel().current_offset(), -PANEL_WIDTH);
}

#[test]
fn rightward_flick_opens_regardless_of_position() {
    let t0 = base();
    let mut state = State::new(sample_photo(), VIEWPORT);

    state.pointer_pressed(t0, Point::new(20.0, 300.0));
    // 50 px in 100 ms = 0.5 px/ms, above the flick threshold.
    state.pointer_moved(t0 + Duration::from_millis(100), Point::new(70.0, 300.0));
    state.pointer_released();

    settle_fully(&mut state, t0 + Duration::from_secs(10));
    assert!(state.panel().is_open());
}

#[test]
fn leftward_flick_closes_an_open_panel() {
    let t0 = base();
    let mut state = State::new(sample_photo(), VIEWPORT);

    // Open first.
    state.pointer_pressed(t0, Point::new(20.0, 300.0));
    state.pointer_moved(t0 + Duration::from_millis(100), Point::new(70.0, 300.0));
    state.pointer_released();
    settle_fully(&mut state, t0 + Duration::from_secs(10));
    assert!(state.panel().is_open());

    // Now flick it shut.
    let t1 = t0 + Duration::from_secs(20);
    state.pointer_pressed(t1, Point::new(250.0, 300.0));
    state.pointer_moved(t1 + Duration::from_millis(100), Point::new(200.0, 300.0));
    state.pointer_released();

    settle_fully(&mut state, t1 + Duration::from_secs(10));
    assert!(!state.panel().is_open());
    assert_eq!(state.panel().current_offset(), -PANEL_WIDTH);
}

#[test]
fn raw_event_path_drives_the_same_gesture() {
    let mut state = State::new(sample_photo(), VIEWPORT);

    // Cursor must be known before a press can start a gesture.
    let events = [
        mouse::Event::CursorMoved {
            position: Point::new(20.0, 300.0),
        },
        mouse::Event::ButtonPressed(mouse::Button::Left),
        mouse::Event::CursorMoved {
            position: Point::new(20.0 + PANEL_WIDTH * 0.7, 300.0),
        },
        mouse::Event::ButtonReleased(mouse::Button::Left),
    ];

    for event in events {
        let effect = state.handle_message(Message::RawEvent(event::Event::Mouse(event)));
        assert_eq!(effect, Effect::None);
    }

    // Rightward travel past the midpoint settles open whether or not the
    // wall-clock sampling classified it as a flick.
    assert!(state.is_animating());
    settle_fully(&mut state, Instant::now());
    assert!(state.panel().is_open());
}

#[test]
fn abandoned_gesture_leaves_offset_in_place() {
    let t0 = base();
    let mut state = State::new(sample_photo(), VIEWPORT);

    state.pointer_pressed(t0, Point::new(20.0, 300.0));
    state.pointer_moved(
        t0 + Duration::from_millis(200),
        Point::new(20.0 + PANEL_WIDTH * 0.25, 300.0),
    );

    // No release arrives. Nothing animates and the offset stays put.
    assert!(!state.is_animating());
    assert_eq!(
        state.panel().current_offset(),
        -PANEL_WIDTH + PANEL_WIDTH * 0.25
    );
}

#[test]
fn missing_photo_source_renders_error_view() {
    let photo = Photo::from_path(PathBuf::new());
    assert!(!photo.has_source());

    let state = State::new(photo, VIEWPORT);
    // The error view renders without panicking and the panel stays closed.
    let _ = state.view();
    assert!(!state.panel().is_open());
}
