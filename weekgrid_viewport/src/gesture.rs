// Copyright 2026 the Weekgrid Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use kurbo::Vec2;

/// Locked scroll direction of the current drag or fling.
///
/// Horizontal motion keeps its sign so settling can snap toward the drag
/// direction: [`Left`](Self::Left) pans toward later days (content moving
/// left), [`Right`](Self::Right) toward earlier days. Scroll deltas follow
/// the usual gesture-distance convention: a positive `x` means the pointer
/// moved left.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Direction {
    /// Panning toward later days.
    Left,
    /// Panning toward earlier days.
    Right,
    /// Scrolling the time axis.
    Vertical,
}

impl Direction {
    /// Returns `true` for either horizontal direction.
    #[must_use]
    pub const fn is_horizontal(self) -> bool {
        matches!(self, Self::Left | Self::Right)
    }
}

/// Direction lock with touch-slop hysteresis.
///
/// The first scroll delta of a gesture locks the axis (whichever magnitude
/// dominates). Once locked horizontally, the direction only flips when the
/// counter-motion exceeds the slop again, so small jitter at the turning
/// point cannot make the snap target oscillate. A vertical lock never
/// flips for the rest of the gesture.
#[derive(Clone, Copy, Debug, Default)]
pub(crate) struct DirectionLock {
    current: Option<Direction>,
}

impl DirectionLock {
    /// Feeds one scroll delta and returns the (possibly updated) lock.
    pub(crate) fn update(&mut self, delta: Vec2, slop: f64) -> Direction {
        let horizontal_dominates = delta.x.abs() > delta.y.abs();
        let locked = match self.current {
            None => {
                if horizontal_dominates {
                    if delta.x > 0.0 { Direction::Left } else { Direction::Right }
                } else {
                    Direction::Vertical
                }
            }
            Some(Direction::Left) if horizontal_dominates && delta.x < -slop => Direction::Right,
            Some(Direction::Right) if horizontal_dominates && delta.x > slop => Direction::Left,
            Some(locked) => locked,
        };
        self.current = Some(locked);
        locked
    }

    pub(crate) fn current(&self) -> Option<Direction> {
        self.current
    }

    pub(crate) fn clear(&mut self) {
        self.current = None;
    }
}
