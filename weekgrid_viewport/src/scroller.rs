// Copyright 2026 the Weekgrid Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use core::time::Duration;

use kurbo::{Point, Rect, Vec2};

/// Exponential velocity damping applied to flings, per second.
const FLING_FRICTION: f64 = 4.0;

/// Quadratic ease-in-out over `t` in `[0, 1]`.
///
/// Used by settle animations so the snap accelerates away from the release
/// point and decelerates into the day boundary.
pub(crate) fn ease_in_out(t: f64) -> f64 {
    let t = t.clamp(0.0, 1.0);
    if t < 0.5 { 2.0 * t * t } else { 1.0 - (-2.0 * t + 2.0).powi(2) / 2.0 }
}

/// Tick-driven origin animator: eased settle scrolls and decaying flings.
///
/// The scroller owns no viewport state; it only produces origin positions.
/// Each [`tick`](Self::tick) is a pure state advance with no blocking, so
/// the host's render loop can drive it at whatever cadence it likes.
#[derive(Clone, Debug, Default)]
pub(crate) enum Scroller {
    /// No animation in flight.
    #[default]
    Idle,
    /// Eased scroll from `from` to `to` over `duration`.
    Animating { from: Point, to: Point, elapsed: Duration, duration: Duration },
    /// Momentum decay from a release velocity, bounded by `limits`.
    Flinging { position: Point, velocity: Vec2, limits: Rect },
}

impl Scroller {
    /// Starts an eased scroll. A zero duration settles on the first tick.
    pub(crate) fn start_scroll(&mut self, from: Point, to: Point, duration: Duration) {
        *self = Self::Animating { from, to, elapsed: Duration::ZERO, duration };
    }

    /// Starts a fling from `position` with the given release velocity.
    ///
    /// `limits` bounds the animated origin; hitting an edge kills the
    /// velocity on that axis.
    pub(crate) fn fling(&mut self, position: Point, velocity: Vec2, limits: Rect) {
        *self = Self::Flinging { position, velocity, limits };
    }

    /// Stops any animation, freezing the origin at its current position.
    pub(crate) fn force_finish(&mut self) {
        *self = Self::Idle;
    }

    /// Advances the animation by `dt` and returns the new origin, or `None`
    /// once idle.
    pub(crate) fn tick(&mut self, dt: Duration) -> Option<Point> {
        match self {
            Self::Idle => None,
            Self::Animating { from, to, elapsed, duration } => {
                *elapsed = elapsed.saturating_add(dt);
                if elapsed >= duration {
                    let settled = *to;
                    *self = Self::Idle;
                    Some(settled)
                } else {
                    let t = ease_in_out(elapsed.as_secs_f64() / duration.as_secs_f64());
                    Some(from.lerp(*to, t))
                }
            }
            Self::Flinging { position, velocity, limits } => {
                let dt = dt.as_secs_f64();
                let decay = (-FLING_FRICTION * dt).exp();
                // Closed-form integral of the decaying velocity over the tick.
                let travelled = *velocity * ((1.0 - decay) / FLING_FRICTION);
                let mut next = *position + travelled;

                if next.x >= limits.x1 {
                    next.x = limits.x1;
                    velocity.x = 0.0;
                } else if next.x <= limits.x0 {
                    next.x = limits.x0;
                    velocity.x = 0.0;
                }
                if next.y >= limits.y1 {
                    next.y = limits.y1;
                    velocity.y = 0.0;
                } else if next.y <= limits.y0 {
                    next.y = limits.y0;
                    velocity.y = 0.0;
                }

                *velocity *= decay;
                *position = next;
                Some(next)
            }
        }
    }

    /// Current fling speed, zero for settle animations and when idle.
    pub(crate) fn fling_speed(&self) -> f64 {
        match self {
            Self::Flinging { velocity, .. } => velocity.hypot(),
            _ => 0.0,
        }
    }

    /// Returns `true` when no animation is in flight.
    pub(crate) fn is_finished(&self) -> bool {
        matches!(self, Self::Idle)
    }
}
