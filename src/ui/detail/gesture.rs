// SPDX-License-Identifier: MPL-2.0
//! Panel gesture controller.
//!
//! Owns the metadata panel's horizontal offset and turns a continuous drag
//! into either an open or a closed panel. The offset is a single scalar in
//! `[-panel_width, 0]`: `0` is fully open, `-panel_width` is parked off the
//! left screen edge. The vertical component of the gesture feeds the swipe
//! recognition guard and nothing else.

/// Panel width as a fraction of the viewport width, fixed at view creation.
pub const PANEL_WIDTH_FRACTION: f32 = 0.75;

/// Minimum horizontal travel before the controller claims a gesture.
pub const SWIPE_CLAIM_DISTANCE: f32 = 5.0;

/// Release velocity (px/ms) above which a flick overrides panel position.
pub const FLICK_VELOCITY: f32 = 0.3;

/// Terminal resting states of the panel.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PanelTarget {
    Open,
    Closed,
}

impl PanelTarget {
    /// The offset the panel rests at once settled on this target.
    #[must_use]
    pub fn rest_offset(self, panel_width: f32) -> f32 {
        match self {
            PanelTarget::Open => 0.0,
            PanelTarget::Closed => -panel_width,
        }
    }
}

/// Owned gesture state for the sliding metadata panel.
///
/// The controller is the only writer of the offset and of the settled
/// visibility flag. Visibility flips exclusively through
/// [`PanelGesture::finish_settle`], never mid-drag, so consumers that render
/// only while open can never observe a half-visible panel as open.
#[derive(Debug, Clone, PartialEq)]
pub struct PanelGesture {
    panel_width: f32,
    offset: f32,
    origin: f32,
    open: bool,
    dragging: bool,
}

impl PanelGesture {
    /// Creates the controller for a viewport width, starting closed.
    #[must_use]
    pub fn new(viewport_width: f32) -> Self {
        let panel_width = viewport_width * PANEL_WIDTH_FRACTION;
        Self {
            panel_width,
            offset: -panel_width,
            origin: -panel_width,
            open: false,
            dragging: false,
        }
    }

    /// The fixed panel width derived from the viewport at creation.
    #[must_use]
    pub fn panel_width(&self) -> f32 {
        self.panel_width
    }

    /// Current offset in `[-panel_width, 0]`.
    #[must_use]
    pub fn current_offset(&self) -> f32 {
        self.offset
    }

    /// Settled visibility. Unchanged during drags and settle animations.
    #[must_use]
    pub fn is_open(&self) -> bool {
        self.open
    }

    #[must_use]
    pub fn is_dragging(&self) -> bool {
        self.dragging
    }

    /// Swipe recognition guard: the gesture is claimed as a horizontal panel
    /// drag only once it is horizontal-dominant and has travelled far enough.
    #[must_use]
    pub fn claims(&self, dx: f32, dy: f32) -> bool {
        dx.abs() > dy.abs() && dx.abs() > SWIPE_CLAIM_DISTANCE
    }

    /// Starts a drag, capturing the current offset as the origin.
    ///
    /// Called with a settle animation in flight, this adopts the animation's
    /// mid-flight value so the drag resumes without a jump.
    pub fn begin_drag(&mut self) {
        self.origin = self.offset;
        self.dragging = true;
    }

    /// Applies the cumulative horizontal displacement since the drag began.
    ///
    /// Motion that would push the panel past its resting bound is ignored:
    /// a closed panel only responds to rightward travel, an open one only to
    /// leftward travel. The result is clamped to `[-panel_width, 0]`.
    pub fn update_drag(&mut self, dx: f32) {
        if !self.dragging {
            return;
        }

        let guarded = if !self.open && dx < 0.0 {
            0.0
        } else if self.open && dx > 0.0 {
            0.0
        } else {
            dx
        };

        self.offset = (self.origin + guarded).clamp(-self.panel_width, 0.0);
    }

    /// Ends the drag and resolves the settle target.
    ///
    /// A fast flick in the direction of travel wins outright; otherwise the
    /// panel settles to whichever side of its midpoint it was released on.
    /// `velocity_x` is in px/ms.
    pub fn end_drag(&mut self, dx: f32, velocity_x: f32) -> PanelTarget {
        self.dragging = false;

        if velocity_x > FLICK_VELOCITY && dx > 0.0 {
            PanelTarget::Open
        } else if velocity_x < -FLICK_VELOCITY && dx < 0.0 {
            PanelTarget::Closed
        } else if self.offset > -self.panel_width / 2.0 {
            PanelTarget::Open
        } else {
            PanelTarget::Closed
        }
    }

    /// Publishes one frame of an in-flight settle animation.
    pub fn apply_settle_frame(&mut self, offset: f32) {
        self.offset = offset.clamp(-self.panel_width, 0.0);
    }

    /// Snaps to the target's resting offset and flips visibility.
    ///
    /// This is the only place visibility changes, and it happens only once
    /// the animated offset has reached its rest position.
    pub fn finish_settle(&mut self, target: PanelTarget) {
        self.offset = target.rest_offset(self.panel_width);
        self.open = target == PanelTarget::Open;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::{assert_abs_diff_eq, F32_EPSILON};

    const VIEWPORT: f32 = 400.0;
    const WIDTH: f32 = VIEWPORT * PANEL_WIDTH_FRACTION;

    fn closed_gesture() -> PanelGesture {
        PanelGesture::new(VIEWPORT)
    }

    fn open_gesture() -> PanelGesture {
        let mut gesture = PanelGesture::new(VIEWPORT);
        gesture.finish_settle(PanelTarget::Open);
        gesture
    }

    #[test]
    fn starts_closed_at_negative_panel_width() {
        let gesture = closed_gesture();
        assert_abs_diff_eq!(gesture.current_offset(), -WIDTH, epsilon = F32_EPSILON);
        assert!(!gesture.is_open());
        assert_abs_diff_eq!(gesture.panel_width(), WIDTH, epsilon = F32_EPSILON);
    }

    #[test]
    fn claims_requires_horizontal_dominant_motion() {
        let gesture = closed_gesture();
        assert!(gesture.claims(10.0, 3.0));
        assert!(gesture.claims(-10.0, 3.0));
        assert!(!gesture.claims(10.0, 12.0));
        assert!(!gesture.claims(4.0, 1.0));
        assert!(!gesture.claims(5.0, 0.0));
    }

    #[test]
    fn drag_from_closed_stays_within_bounds() {
        let mut gesture = closed_gesture();
        gesture.begin_drag();

        for dx in [0.0, 10.0, 150.0, WIDTH, WIDTH + 500.0] {
            gesture.update_drag(dx);
            assert!(gesture.current_offset() <= 0.0);
            assert!(gesture.current_offset() >= -WIDTH);
        }
        assert_abs_diff_eq!(gesture.current_offset(), 0.0, epsilon = F32_EPSILON);
    }

    #[test]
    fn drag_offset_is_monotonic_in_dx() {
        let mut gesture = closed_gesture();
        gesture.begin_drag();

        let mut last = gesture.current_offset();
        for dx in [5.0, 20.0, 80.0, 200.0, 500.0] {
            gesture.update_drag(dx);
            assert!(gesture.current_offset() >= last);
            last = gesture.current_offset();
        }
    }

    #[test]
    fn closed_panel_ignores_leftward_motion() {
        let mut gesture = closed_gesture();
        gesture.begin_drag();
        gesture.update_drag(-120.0);
        assert_abs_diff_eq!(gesture.current_offset(), -WIDTH, epsilon = F32_EPSILON);
    }

    #[test]
    fn open_panel_ignores_rightward_motion() {
        let mut gesture = open_gesture();
        gesture.begin_drag();
        gesture.update_drag(120.0);
        assert_abs_diff_eq!(gesture.current_offset(), 0.0, epsilon = F32_EPSILON);
    }

    #[test]
    fn fast_rightward_flick_opens_regardless_of_position() {
        let mut gesture = closed_gesture();
        gesture.begin_drag();
        gesture.update_drag(50.0);
        assert_eq!(gesture.end_drag(50.0, 0.5), PanelTarget::Open);
    }

    #[test]
    fn fast_leftward_flick_closes() {
        let mut gesture = open_gesture();
        gesture.begin_drag();
        gesture.update_drag(-50.0);
        assert_eq!(gesture.end_drag(-50.0, -0.5), PanelTarget::Closed);
    }

    #[test]
    fn slow_release_past_midpoint_opens() {
        let mut gesture = closed_gesture();
        gesture.begin_drag();
        gesture.update_drag(WIDTH * 0.6);
        assert_eq!(gesture.end_drag(WIDTH * 0.6, 0.1), PanelTarget::Open);
    }

    #[test]
    fn slow_release_before_midpoint_closes() {
        let mut gesture = closed_gesture();
        gesture.begin_drag();
        gesture.update_drag(WIDTH * 0.4);
        assert_eq!(gesture.end_drag(WIDTH * 0.4, 0.1), PanelTarget::Closed);
    }

    #[test]
    fn flick_against_travel_direction_falls_back_to_position() {
        // Rightward velocity with net leftward travel is not a flick.
        let mut gesture = open_gesture();
        gesture.begin_drag();
        gesture.update_drag(-WIDTH * 0.6);
        assert_eq!(gesture.end_drag(-WIDTH * 0.6, 0.5), PanelTarget::Closed);
    }

    #[test]
    fn begin_drag_mid_settle_adopts_current_offset() {
        let mut gesture = closed_gesture();
        gesture.apply_settle_frame(-WIDTH * 0.3);

        gesture.begin_drag();
        gesture.update_drag(0.0);
        assert_abs_diff_eq!(
            gesture.current_offset(),
            -WIDTH * 0.3,
            epsilon = F32_EPSILON
        );
    }

    #[test]
    fn visibility_flips_only_on_finish_settle() {
        let mut gesture = closed_gesture();
        gesture.begin_drag();
        gesture.update_drag(WIDTH);
        assert!(!gesture.is_open());

        gesture.apply_settle_frame(-1.0);
        assert!(!gesture.is_open());

        gesture.finish_settle(PanelTarget::Open);
        assert!(gesture.is_open());
        assert_abs_diff_eq!(gesture.current_offset(), 0.0, epsilon = F32_EPSILON);
    }

    #[test]
    fn repeated_settle_to_same_target_is_a_no_op() {
        let mut gesture = open_gesture();
        let before_offset = gesture.current_offset();
        let before_open = gesture.is_open();

        gesture.finish_settle(PanelTarget::Open);
        assert_abs_diff_eq!(
            gesture.current_offset(),
            before_offset,
            epsilon = F32_EPSILON
        );
        assert_eq!(gesture.is_open(), before_open);
    }

    #[test]
    fn update_without_begin_is_ignored() {
        let mut gesture = closed_gesture();
        gesture.update_drag(200.0);
        assert_abs_diff_eq!(gesture.current_offset(), -WIDTH, epsilon = F32_EPSILON);
    }

    #[test]
    fn abandoned_drag_keeps_last_offset() {
        let mut gesture = closed_gesture();
        gesture.begin_drag();
        gesture.update_drag(WIDTH * 0.25);
        // No release: offset stays where the last move left it.
        assert_abs_diff_eq!(
            gesture.current_offset(),
            -WIDTH * 0.75,
            epsilon = F32_EPSILON
        );
    }
}
