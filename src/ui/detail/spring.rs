// SPDX-License-Identifier: MPL-2.0
//! Spring settle animation for the metadata panel.
//!
//! After a drag is released the panel glides to its resolved target with a
//! critically damped spring, stepped from the application's tick
//! subscription. The constants are tuned for a short, overshoot-free glide;
//! only the terminal behavior (reaching the rest offset, then reporting
//! completion exactly once) is contractual.

use super::gesture::PanelTarget;
use std::time::Duration;

/// Spring stiffness in 1/s^2.
const STIFFNESS: f32 = 170.0;
/// Damping coefficient in 1/s. With this stiffness the spring is critically
/// damped (damping ratio ~= 1.0).
const DAMPING: f32 = 26.0;

/// Displacement below which the spring is considered at rest, in px.
const REST_DISPLACEMENT: f32 = 0.5;
/// Speed below which the spring is considered at rest, in px/s.
const REST_SPEED: f32 = 15.0;

/// Largest time step integrated at once. Longer gaps between ticks are
/// clamped to keep the integration stable.
const MAX_STEP: Duration = Duration::from_millis(32);

/// One frame of an in-flight settle.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SettleFrame {
    pub offset: f32,
    pub finished: bool,
}

/// A settle animation toward one panel target.
#[derive(Debug, Clone, PartialEq)]
pub struct Settle {
    target: PanelTarget,
    rest_offset: f32,
    velocity: f32,
}

impl Settle {
    /// Starts a settle toward `target` for a panel of the given width.
    #[must_use]
    pub fn new(target: PanelTarget, panel_width: f32) -> Self {
        Self {
            target,
            rest_offset: target.rest_offset(panel_width),
            velocity: 0.0,
        }
    }

    #[must_use]
    pub fn target(&self) -> PanelTarget {
        self.target
    }

    /// Advances the spring by `dt` from the current offset.
    ///
    /// Once displacement and speed both drop under the rest thresholds the
    /// frame snaps to the rest offset and reports completion; the caller
    /// flips visibility at that point and drops the animation.
    pub fn step(&mut self, current_offset: f32, dt: Duration) -> SettleFrame {
        let dt = dt.min(MAX_STEP).as_secs_f32();

        let displacement = self.rest_offset - current_offset;
        let acceleration = STIFFNESS * displacement - DAMPING * self.velocity;

        self.velocity += acceleration * dt;
        let offset = current_offset + self.velocity * dt;

        let at_rest = (self.rest_offset - offset).abs() < REST_DISPLACEMENT
            && self.velocity.abs() < REST_SPEED;

        if at_rest {
            SettleFrame {
                offset: self.rest_offset,
                finished: true,
            }
        } else {
            SettleFrame {
                offset,
                finished: false,
            }
        }
    }
}
