// Copyright 2026 the Weekgrid Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Weekgrid Viewport: the scroll/zoom engine of the calendar surface.
//!
//! This crate owns the continuous 2D view state of a multi-day calendar
//! grid and everything that moves it:
//!
//! - A pixel-space origin over the day axis (horizontal) and the time axis
//!   (vertical), clamped to optional day bounds and to the visible time
//!   window.
//! - The hour height (zoom level) with min/max limits and an *effective*
//!   minimum that stops zooming out once the whole time window fits on
//!   screen.
//! - A gesture state machine — idle, direction-locked dragging, flinging,
//!   settling, zooming — with touch-slop hysteresis on the direction lock,
//!   exponential fling decay, and an eased snap of the horizontal origin
//!   to whole-day boundaries.
//! - Pinch zoom that keeps the calendar time under the focus point fixed,
//!   including at the zoom limits.
//! - Conversions between pixel space and calendar space
//!   ([`Viewport::time_at_point`], [`Viewport::visible_day_columns`]).
//!
//! The crate is headless: hosts decode platform touch input themselves and
//! forward gesture-level calls, then drive animation with
//! [`Viewport::tick`] from their render loop. Painting is likewise a host
//! concern; the viewport only answers "where is day *d* / minute *m* on
//! screen" and the inverse.
//!
//! ## Minimal example
//!
//! ```rust
//! use kurbo::Vec2;
//! use weekgrid_time::Day;
//! use weekgrid_viewport::{ViewMetrics, Viewport};
//!
//! let metrics = ViewMetrics {
//!     width: 800.0,
//!     height: 600.0,
//!     header_height: 60.0,
//!     ruler_width: 50.0,
//!     column_gap: 10.0,
//! };
//! let mut view = Viewport::new(metrics, Day::Monday);
//!
//! // Drag one day to the left and release: the view settles on Tuesday.
//! view.begin_touch();
//! view.scroll_by(Vec2::new(view.day_stride(), 0.0));
//! view.end_touch();
//! while view.tick(std::time::Duration::from_millis(16)) {}
//! assert_eq!(view.first_visible_day(), Day::Tuesday);
//! ```

mod error;
mod gesture;
mod metrics;
mod scroller;
mod viewport;

pub use error::ConfigError;
pub use gesture::Direction;
pub use metrics::ViewMetrics;
pub use viewport::{FlingAxes, MotionState, Viewport};

#[cfg(test)]
mod tests {
    use core::time::Duration;

    use kurbo::{Point, Vec2};
    use weekgrid_time::Day;

    use super::{ConfigError, Direction, FlingAxes, MotionState, ViewMetrics, Viewport};

    const FRAME: Duration = Duration::from_millis(16);

    fn metrics() -> ViewMetrics {
        ViewMetrics {
            width: 800.0,
            height: 600.0,
            header_height: 60.0,
            ruler_width: 50.0,
            column_gap: 10.0,
        }
    }

    fn viewport() -> Viewport {
        Viewport::new(metrics(), Day::Monday)
    }

    fn run_to_rest(view: &mut Viewport) {
        let mut guard = 0;
        while view.tick(FRAME) {
            guard += 1;
            assert!(guard < 10_000, "animation failed to converge");
        }
    }

    #[test]
    fn direction_lock_hysteresis_follows_the_slop() {
        let mut view = viewport();
        view.set_touch_slop(10.0);
        view.begin_touch();

        view.scroll_by(Vec2::new(5.0, 1.0));
        assert_eq!(view.motion(), MotionState::Dragging(Direction::Left));

        // Counter-motion below the slop keeps the lock.
        view.scroll_by(Vec2::new(-5.0, 1.0));
        assert_eq!(view.motion(), MotionState::Dragging(Direction::Left));

        // Counter-motion beyond the slop flips it.
        view.scroll_by(Vec2::new(-20.0, 1.0));
        assert_eq!(view.motion(), MotionState::Dragging(Direction::Right));
    }

    #[test]
    fn vertical_scroll_clamps_to_the_time_window() {
        let mut view = viewport();
        view.begin_touch();

        // Scroll up past the top of the grid.
        view.scroll_by(Vec2::new(0.0, -10_000.0));
        assert_eq!(view.origin().y, 0.0);

        // Scroll down past the last hour.
        view.begin_touch();
        view.scroll_by(Vec2::new(1.0, 10_000.0));
        let content = view.hour_height() * 24.0;
        assert_eq!(view.origin().y, view.metrics().grid_height() - content);
    }

    #[test]
    fn release_settles_on_a_whole_day_boundary() {
        let mut view = viewport();
        let stride = view.day_stride();

        view.begin_touch();
        view.scroll_by(Vec2::new(stride * 1.4, 0.0));
        view.end_touch();
        assert_eq!(view.motion(), MotionState::Settling);
        run_to_rest(&mut view);

        assert_eq!(view.motion(), MotionState::Idle);
        let days = view.origin().x / stride;
        assert!((days - days.round()).abs() < 1e-9, "origin must land on a day boundary");
        // Dragging toward later days floors: 1.4 strides snap to 2.
        assert_eq!(view.first_visible_day(), Day::Wednesday);
    }

    #[test]
    fn fling_decays_then_snaps_to_a_day() {
        let mut view = viewport();
        let stride = view.day_stride();

        view.begin_touch();
        view.scroll_by(Vec2::new(stride * 0.2, 0.0));
        view.fling(Vec2::new(-2000.0, 0.0));
        assert_eq!(view.motion(), MotionState::Flinging(Direction::Left));
        run_to_rest(&mut view);

        assert_eq!(view.motion(), MotionState::Idle);
        let days = view.origin().x / stride;
        assert!((days - days.round()).abs() < 1e-9, "fling must settle on a day boundary");
    }

    #[test]
    fn slow_or_disabled_flings_settle_instead() {
        let mut view = viewport();
        let stride = view.day_stride();

        // Below the minimum fling velocity.
        view.begin_touch();
        view.scroll_by(Vec2::new(stride * 0.6, 0.0));
        view.fling(Vec2::new(-10.0, 0.0));
        assert_eq!(view.motion(), MotionState::Settling);
        run_to_rest(&mut view);
        assert_eq!(view.first_visible_day(), Day::Tuesday);

        // Horizontal fling disabled entirely.
        let mut view = viewport();
        view.set_fling_axes(FlingAxes::VERTICAL);
        view.begin_touch();
        view.scroll_by(Vec2::new(stride * 0.6, 0.0));
        view.fling(Vec2::new(-5000.0, 0.0));
        assert_eq!(view.motion(), MotionState::Settling);
    }

    #[test]
    fn new_gesture_abandons_a_running_settle() {
        let mut view = viewport();
        let stride = view.day_stride();

        view.begin_touch();
        view.scroll_by(Vec2::new(stride * 0.5, 0.0));
        view.end_touch();
        view.tick(FRAME);
        let mid_flight = view.origin().x;

        // Touching down mid-settle freezes the origin where it is.
        view.begin_touch();
        assert_eq!(view.motion(), MotionState::Idle);
        assert_eq!(view.origin().x, mid_flight);
    }

    #[test]
    fn day_bounds_clamp_horizontal_scrolling() {
        let mut view = viewport();
        view.set_day_bounds(Some(Day::Monday), Some(Day::Friday)).unwrap();

        view.begin_touch();
        // Try to scroll far past Friday.
        view.scroll_by(Vec2::new(100_000.0, 0.0));
        let last = view.last_visible_day();
        assert!(view.day_is_valid(last), "must not scroll past the bounded range");

        // And back before Monday.
        view.begin_touch();
        view.scroll_by(Vec2::new(-100_000.0, 0.0));
        assert_eq!(view.first_visible_day(), Day::Monday);
        assert_eq!(view.origin().x, 0.0);
    }

    #[test]
    fn bounded_day_span_narrows_the_visible_count() {
        let mut view = viewport();
        view.set_visible_days(7);
        view.set_day_bounds(Some(Day::Monday), Some(Day::Wednesday)).unwrap();
        assert_eq!(view.visible_day_count(), 3);
    }

    #[test]
    fn invalid_configuration_is_rejected_atomically() {
        let mut view = viewport();

        assert_eq!(view.set_time_range(10, 10), Err(ConfigError::TimeRange { min: 10, max: 10 }));
        assert_eq!(view.set_time_range(0, 25), Err(ConfigError::TimeRange { min: 0, max: 25 }));
        assert_eq!(view.time_range(), (0, 24), "failed set must leave the range untouched");

        assert_eq!(view.set_zoom_focus(Some(1.5)), Err(ConfigError::ZoomFocusPoint(1.5)));
        assert_eq!(view.zoom_focus(), None);

        assert_eq!(
            view.set_day_bounds(Some(Day::Friday), Some(Day::Monday)),
            Err(ConfigError::DayBounds { min: Day::Friday, max: Day::Monday })
        );
        assert_eq!(view.day_bounds(), (None, None));
    }

    #[test]
    fn zoom_cannot_shrink_below_the_fit_height() {
        let mut view = viewport();
        // 540px grid over 24h: the fit height is 22.5 px/h.
        view.pinch_begin(300.0);
        view.pinch_scale(0.01);
        let committed = view.pinch_end();
        assert_eq!(committed, view.metrics().grid_height() / 24.0);
    }

    #[test]
    fn zoom_keeps_the_time_under_the_focus_fixed() {
        let mut view = viewport();
        view.begin_touch();
        view.scroll_by(Vec2::new(0.0, 300.0));

        let focus = Point::new(400.0, 320.0);
        let before = view.time_at_point(focus).unwrap();

        view.pinch_begin(focus.y);
        view.pinch_scale(1.8);
        view.pinch_end();

        let after = view.time_at_point(focus).unwrap();
        let drift = (after.ordering_key() - before.ordering_key()).abs();
        assert!(drift <= 1, "time under the pinch focus drifted by {drift} minutes");

        // The same holds when the scale runs into the max limit.
        view.pinch_begin(focus.y);
        view.pinch_scale(100.0);
        view.pinch_end();
        let clamped = view.time_at_point(focus).unwrap();
        assert!((clamped.ordering_key() - after.ordering_key()).abs() <= 1);
    }

    #[test]
    fn configured_focus_point_overrides_the_pinch_centroid() {
        let mut view = viewport();
        view.set_zoom_focus(Some(0.0)).unwrap();
        view.begin_touch();
        view.scroll_by(Vec2::new(0.0, 200.0));
        let top_of_grid = Point::new(400.0, view.metrics().grid_top() + 1.0);
        let before = view.time_at_point(top_of_grid).unwrap();

        // Centroid far from the configured focus; the top edge must hold.
        view.pinch_begin(500.0);
        view.pinch_scale(1.6);
        view.pinch_end();

        let after = view.time_at_point(top_of_grid).unwrap();
        assert!((after.ordering_key() - before.ordering_key()).abs() <= 1);
    }

    #[test]
    fn time_at_point_skips_ruler_and_header() {
        let view = viewport();
        assert_eq!(view.time_at_point(Point::new(10.0, 300.0)), None, "ruler column");
        assert_eq!(view.time_at_point(Point::new(400.0, 30.0)), None, "header band");
        assert!(view.time_at_point(Point::new(400.0, 300.0)).is_some());
    }

    #[test]
    fn time_at_point_never_exceeds_the_time_window() {
        let mut view = viewport();
        view.set_time_range(0, 24).unwrap();
        // Scroll to the very bottom.
        view.begin_touch();
        view.scroll_by(Vec2::new(1.0, 100_000.0));

        let bottom = Point::new(400.0, view.metrics().height - 0.001);
        let point = view.time_at_point(bottom).expect("bottom edge maps to a time");
        assert!(point.hour() < 24, "hour must stay in range, got {}", point.hour());
    }

    #[test]
    fn time_at_point_respects_min_time() {
        let mut view = viewport();
        view.set_time_range(8, 18).unwrap();
        let top = Point::new(400.0, view.metrics().grid_top() + 1.0);
        let point = view.time_at_point(top).unwrap();
        assert_eq!(point.hour(), 8);
    }

    #[test]
    fn go_to_day_and_hour_position_the_origin() {
        let mut view = viewport();
        view.go_to_day(Day::Thursday);
        assert_eq!(view.first_visible_day(), Day::Thursday);
        assert_eq!(view.origin().x, -3.0 * view.day_stride());

        view.go_to_hour(9.0);
        assert_eq!(view.origin().y, -9.0 * view.hour_height());
        assert!((view.first_visible_hour() - 9.0).abs() < 1e-9);
    }

    #[test]
    fn visible_day_columns_walk_left_to_right() {
        let view = viewport();
        let columns: Vec<_> = view.visible_day_columns().collect();
        assert_eq!(columns.len(), 4, "three visible plus one partial column");
        assert_eq!(columns[0].0, Day::Monday);
        assert_eq!(columns[1].0, Day::Tuesday);
        let stride = view.day_stride();
        assert!((columns[1].1 - columns[0].1 - stride).abs() < 1e-9);
    }

    #[test]
    fn align_to_first_day_of_week_shifts_wide_views_only() {
        let mut wide = Viewport::new(metrics(), Day::Thursday);
        wide.set_visible_days(7);
        wide.align_to_first_day_of_week(Day::Monday);
        assert_eq!(wide.origin().x, 3.0 * wide.day_stride());

        // Narrow views ignore the alignment.
        let mut narrow = Viewport::new(metrics(), Day::Thursday);
        narrow.align_to_first_day_of_week(Day::Monday);
        assert_eq!(narrow.origin().x, 0.0);
    }
}
