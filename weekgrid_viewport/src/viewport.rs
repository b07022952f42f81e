// Copyright 2026 the Weekgrid Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use core::time::Duration;

use bitflags::bitflags;
use kurbo::{Point, Rect, Vec2};
use weekgrid_time::{Day, DayPoint, HOURS_PER_DAY, MINUTES_PER_HOUR};

use crate::error::ConfigError;
use crate::gesture::{Direction, DirectionLock};
use crate::metrics::ViewMetrics;
use crate::scroller::Scroller;

bitflags! {
    /// Axes on which fling gestures are honored.
    #[derive(Clone, Copy, Debug, PartialEq, Eq)]
    pub struct FlingAxes: u8 {
        /// Allow flings along the day axis.
        const HORIZONTAL = 1 << 0;
        /// Allow flings along the time axis.
        const VERTICAL = 1 << 1;
    }
}

impl Default for FlingAxes {
    fn default() -> Self {
        Self::all()
    }
}

/// Observable state of the viewport's motion machine.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum MotionState {
    /// Nothing in flight.
    Idle,
    /// A drag is active with the given locked direction.
    Dragging(Direction),
    /// Momentum decay after a release.
    Flinging(Direction),
    /// Animated snap of the horizontal origin to a day boundary.
    Settling,
    /// A pinch gesture is rescaling the hour height.
    Zooming,
}

/// The scroll/zoom engine of the calendar surface.
///
/// The viewport owns a continuous 2D origin — `x` in pixels along the day
/// axis (`0` puts the home day in the first column; more negative is later
/// in the week), `y` in pixels along the time axis (`0` puts the first
/// visible hour at the grid top; always `<= 0`) — plus the current hour
/// height (the zoom level). It converts between pixel space and calendar
/// space, runs the drag/fling/settle/zoom state machine, and clamps the
/// origin to the configured day bounds and the visible time range.
///
/// The host forwards decoded gestures (`begin_touch`, `scroll_by`, `fling`,
/// `end_touch`, the pinch methods) and drives animations by calling
/// [`tick`](Self::tick) once per frame. Every method is a plain state
/// advance; nothing blocks and nothing is queued.
#[derive(Clone, Debug)]
pub struct Viewport {
    metrics: ViewMetrics,
    visible_days: u32,
    origin: Point,
    hour_height: f64,
    min_hour_height: f64,
    max_hour_height: f64,
    min_time: u32,
    max_time: u32,
    today: Day,
    home_day: Day,
    min_day: Option<Day>,
    max_day: Option<Day>,
    x_scroll_speed: f64,
    touch_slop: f64,
    min_fling_velocity: f64,
    fling_axes: FlingAxes,
    zoom_focus: Option<f64>,
    scroll_duration: Duration,
    lock: DirectionLock,
    fling_direction: Option<Direction>,
    zoom_anchor: Option<f64>,
    scroller: Scroller,
}

impl Viewport {
    /// Creates a viewport over `metrics`, homed on `today`.
    #[must_use]
    pub fn new(metrics: ViewMetrics, today: Day) -> Self {
        let mut viewport = Self {
            metrics,
            visible_days: 3,
            origin: Point::ZERO,
            hour_height: 50.0,
            min_hour_height: 0.0,
            max_hour_height: 250.0,
            min_time: 0,
            max_time: HOURS_PER_DAY,
            today,
            home_day: today,
            min_day: None,
            max_day: None,
            x_scroll_speed: 1.0,
            touch_slop: 8.0,
            min_fling_velocity: 50.0,
            fling_axes: FlingAxes::default(),
            zoom_focus: None,
            scroll_duration: Duration::from_millis(250),
            lock: DirectionLock::default(),
            fling_direction: None,
            zoom_anchor: None,
            scroller: Scroller::default(),
        };
        viewport.reset_home_day();
        viewport
    }

    // --- Geometry ---------------------------------------------------------

    /// Returns the current view metrics.
    #[must_use]
    pub fn metrics(&self) -> &ViewMetrics {
        &self.metrics
    }

    /// Updates the view metrics (typically on resize) and re-clamps state.
    pub fn set_metrics(&mut self, metrics: ViewMetrics) {
        self.metrics = metrics;
        self.hour_height = self.clamp_hour_height(self.hour_height);
        self.clamp_origin();
    }

    /// Returns the configured number of simultaneously visible days.
    #[must_use]
    pub fn visible_days(&self) -> u32 {
        self.visible_days
    }

    /// Sets the number of simultaneously visible days and rehomes the view.
    pub fn set_visible_days(&mut self, days: u32) {
        self.visible_days = days.max(1);
        self.reset_home_day();
        self.origin = Point::ZERO;
        self.scroller.force_finish();
    }

    /// Number of day columns actually shown.
    ///
    /// When both day bounds are set and span fewer days than the configured
    /// count, the span wins.
    #[must_use]
    pub fn visible_day_count(&self) -> u32 {
        match (self.min_day, self.max_day) {
            (Some(min), Some(max)) => self.visible_days.min(Day::days_between(min, max) + 1),
            _ => self.visible_days,
        }
    }

    /// Width of one day column in pixels.
    #[must_use]
    pub fn day_width(&self) -> f64 {
        self.metrics.day_width(self.visible_day_count())
    }

    /// Distance between the left edges of adjacent day columns.
    #[must_use]
    pub fn day_stride(&self) -> f64 {
        self.metrics.day_stride(self.visible_day_count())
    }

    /// Hours in the visible time window.
    #[must_use]
    pub fn visible_hours(&self) -> u32 {
        self.max_time - self.min_time
    }

    // --- Origin and limits ------------------------------------------------

    /// Returns the continuous scroll origin.
    #[must_use]
    pub fn origin(&self) -> Point {
        self.origin
    }

    /// Returns the day the horizontal origin is anchored on.
    #[must_use]
    pub fn home_day(&self) -> Day {
        self.home_day
    }

    /// Returns the day this viewport was homed on at construction.
    #[must_use]
    pub fn today(&self) -> Day {
        self.today
    }

    /// Horizontal origin that puts `day` in the first column.
    #[must_use]
    pub fn x_origin_for_day(&self, day: Day) -> f64 {
        -f64::from(Day::days_between(self.home_day, day)) * self.day_stride()
    }

    fn x_limits(&self) -> (f64, f64) {
        let max_x = self.min_day.map_or(f64::INFINITY, |day| self.x_origin_for_day(day));
        let min_x = self.max_day.map_or(f64::NEG_INFINITY, |max_day| {
            let mut day = max_day.plus(1 - i64::from(self.visible_day_count()));
            if let Some(min_day) = self.min_day {
                while day < min_day {
                    day = day.next();
                }
            }
            self.x_origin_for_day(day)
        });
        (min_x, max_x)
    }

    fn y_limits(&self) -> (f64, f64) {
        let content = self.hour_height * f64::from(self.visible_hours());
        let min_y = (self.metrics.grid_height() - content).min(0.0);
        (min_y, 0.0)
    }

    fn origin_limits(&self) -> Rect {
        let (min_x, max_x) = self.x_limits();
        let (min_y, max_y) = self.y_limits();
        Rect::new(min_x, min_y, max_x, max_y)
    }

    fn clamp_origin(&mut self) {
        let limits = self.origin_limits();
        self.origin.x = clamp_scroll(self.origin.x, limits.x0, limits.x1);
        self.origin.y = clamp_scroll(self.origin.y, limits.y0, limits.y1);
    }

    /// Whole day columns scrolled past the left edge, gaps included.
    #[must_use]
    pub fn left_days_with_gaps(&self) -> i64 {
        let stride = self.day_stride();
        if stride <= 0.0 {
            return 0;
        }
        #[expect(clippy::cast_possible_truncation, reason = "day counts are small")]
        let days = -(self.origin.x / stride).ceil() as i64;
        days
    }

    /// X pixel of the left edge of the first (possibly clipped) day column.
    #[must_use]
    pub fn x_start_pixel(&self) -> f64 {
        self.origin.x
            + self.day_stride() * self.left_days_with_gaps() as f64
            + self.metrics.ruler_width
    }

    /// First day whose column is (at least half) visible.
    #[must_use]
    pub fn first_visible_day(&self) -> Day {
        let stride = self.day_stride();
        if stride <= 0.0 {
            return self.home_day;
        }
        #[expect(clippy::cast_possible_truncation, reason = "day counts are small")]
        let scrolled = (-self.origin.x / stride).round() as i64;
        self.home_day.plus(scrolled)
    }

    /// Last visible day.
    #[must_use]
    pub fn last_visible_day(&self) -> Day {
        self.first_visible_day().plus(i64::from(self.visible_day_count()) - 1)
    }

    /// Hours scrolled past the top of the grid (relative to the first
    /// visible hour of the window).
    #[must_use]
    pub fn first_visible_hour(&self) -> f64 {
        -self.origin.y / self.hour_height
    }

    /// Returns `true` if `day` lies within the configured day bounds.
    #[must_use]
    pub fn day_is_valid(&self, day: Day) -> bool {
        self.min_day.is_none_or(|min| day >= min) && self.max_day.is_none_or(|max| day <= max)
    }

    /// The visible day columns as `(day, left edge x)` pairs, left to right.
    ///
    /// One extra column past the right edge is included, mirroring what a
    /// painter needs while a column is partially scrolled in. Days outside
    /// the configured bounds are skipped.
    pub fn visible_day_columns(&self) -> impl Iterator<Item = (Day, f64)> + use<> {
        let left = self.left_days_with_gaps();
        let stride = self.day_stride();
        let start_pixel = self.x_start_pixel();
        let home = self.home_day;
        let (min_day, max_day) = (self.min_day, self.max_day);
        (0..=i64::from(self.visible_day_count())).filter_map(move |offset| {
            let day = home.plus(left + offset);
            let valid = min_day.is_none_or(|min| day >= min) && max_day.is_none_or(|max| day <= max);
            valid.then(|| (day, start_pixel + stride * offset as f64))
        })
    }

    // --- Zoom -------------------------------------------------------------

    /// Returns the current hour height in pixels (the zoom level).
    #[must_use]
    pub fn hour_height(&self) -> f64 {
        self.hour_height
    }

    /// Sets the hour height, clamped into the allowed range.
    pub fn set_hour_height(&mut self, hour_height: f64) {
        self.hour_height = self.clamp_hour_height(hour_height);
        self.clamp_origin();
    }

    /// Sets the allowed hour-height range.
    ///
    /// The bounds are normalized so that `min <= max`, and the current hour
    /// height is re-clamped into the new range.
    pub fn set_hour_height_bounds(&mut self, min: f64, max: f64) {
        let (min, max) = if min <= max { (min, max) } else { (max, min) };
        self.min_hour_height = min;
        self.max_hour_height = max;
        self.set_hour_height(self.hour_height);
    }

    /// The smallest hour height the view can actually reach.
    ///
    /// You cannot zoom out further than "the whole visible time window fits
    /// on screen", so the configured minimum is raised to
    /// `grid height / visible hours` when that is larger.
    #[must_use]
    pub fn effective_min_hour_height(&self) -> f64 {
        let fit = self.metrics.grid_height() / f64::from(self.visible_hours());
        self.min_hour_height.max(fit)
    }

    fn clamp_hour_height(&self, hour_height: f64) -> f64 {
        let min = self.effective_min_hour_height().min(self.max_hour_height);
        hour_height.clamp(min, self.max_hour_height)
    }

    /// Begins a pinch gesture.
    ///
    /// `focus_view_y` is the pinch centroid in view coordinates; when a
    /// zoom focus point is configured it is used instead, as a fraction of
    /// the grid height. Any drag or animation in flight is abandoned at the
    /// current origin.
    pub fn pinch_begin(&mut self, focus_view_y: f64) {
        self.scroller.force_finish();
        self.fling_direction = None;
        self.lock.clear();
        let anchor = match self.zoom_focus {
            Some(fraction) => self.metrics.grid_height() * fraction,
            None => focus_view_y - self.metrics.grid_top(),
        };
        self.zoom_anchor = Some(anchor);
    }

    /// Applies one incremental pinch scale factor.
    ///
    /// The hour height is rescaled (clamped into the allowed range) and the
    /// vertical origin is shifted so the calendar time under the anchor
    /// stays visually fixed. The shift uses the *applied* ratio, so the
    /// anchor holds even when the requested factor runs into a zoom limit.
    pub fn pinch_scale(&mut self, factor: f64) {
        let Some(anchor) = self.zoom_anchor else {
            return;
        };
        if factor <= 0.0 || !factor.is_finite() {
            return;
        }
        let old = self.hour_height;
        let new = self.clamp_hour_height(old * factor);
        if (new - old).abs() < f64::EPSILON {
            return;
        }
        self.hour_height = new;

        let ratio = new / old;
        let diff = anchor - self.origin.y;
        self.origin.y -= diff * ratio - diff;
        let (min_y, max_y) = self.y_limits();
        self.origin.y = clamp_scroll(self.origin.y, min_y, max_y);
    }

    /// Ends the pinch gesture and returns the committed hour height.
    pub fn pinch_end(&mut self) -> f64 {
        self.zoom_anchor = None;
        self.hour_height
    }

    // --- Gestures ---------------------------------------------------------

    /// Starts a new touch gesture.
    ///
    /// Any fling or settle in flight is abandoned and the state machine
    /// restarts from the current pixel origin; nothing is queued.
    pub fn begin_touch(&mut self) {
        self.scroller.force_finish();
        self.fling_direction = None;
        self.lock.clear();
    }

    /// Feeds one scroll distance of the active drag.
    ///
    /// `delta` follows the gesture-distance convention: positive `x` means
    /// the pointer moved left (panning toward later days), positive `y`
    /// means it moved up. The first delta locks the scroll direction; see
    /// [`Direction`] for the hysteresis rules.
    pub fn scroll_by(&mut self, delta: Vec2) {
        if self.zoom_anchor.is_some() {
            return;
        }
        match self.lock.update(delta, self.touch_slop) {
            Direction::Left | Direction::Right => {
                let (min_x, max_x) = self.x_limits();
                let x = self.origin.x - delta.x * self.x_scroll_speed;
                self.origin.x = clamp_scroll(x, min_x, max_x);
            }
            Direction::Vertical => {
                let (min_y, max_y) = self.y_limits();
                self.origin.y = clamp_scroll(self.origin.y - delta.y, min_y, max_y);
            }
        }
    }

    /// Releases the drag with a fling velocity, in pixels per second.
    ///
    /// The fling only starts if the locked direction's axis is enabled and
    /// the velocity along it exceeds the minimum fling velocity; otherwise
    /// the gesture settles as a plain release. Velocity follows the usual
    /// convention: positive `x` moves the content toward earlier days.
    pub fn fling(&mut self, velocity: Vec2) {
        if self.zoom_anchor.is_some() {
            return;
        }
        let Some(direction) = self.lock.current() else {
            return;
        };

        let (enabled, fling_velocity) = match direction {
            Direction::Left | Direction::Right => (
                self.fling_axes.contains(FlingAxes::HORIZONTAL),
                Vec2::new(velocity.x * self.x_scroll_speed, 0.0),
            ),
            Direction::Vertical => {
                (self.fling_axes.contains(FlingAxes::VERTICAL), Vec2::new(0.0, velocity.y))
            }
        };

        if !enabled || fling_velocity.hypot() < self.min_fling_velocity {
            self.end_touch();
            return;
        }

        self.fling_direction = Some(direction);
        self.lock.clear();
        self.scroller.fling(self.origin, fling_velocity, self.origin_limits());
    }

    /// Releases the drag without momentum.
    ///
    /// A horizontally locked drag settles to the nearest day boundary in
    /// the drag direction; a vertical drag simply stops.
    pub fn end_touch(&mut self) {
        if self.zoom_anchor.is_some() {
            return;
        }
        if self.fling_direction.is_none() && self.lock.current().is_some_and(Direction::is_horizontal)
        {
            self.settle_to_nearest_day();
        }
        self.lock.clear();
    }

    /// Advances animations by `dt`; returns `true` while more frames are
    /// needed.
    pub fn tick(&mut self, dt: Duration) -> bool {
        if self.scroller.is_finished() {
            if self.fling_direction.is_some() {
                self.settle_to_nearest_day();
            }
            return !self.scroller.is_finished();
        }

        // Momentum exhausted: snap to a day boundary instead of crawling.
        if self.fling_direction.is_some() && self.scroller.fling_speed() < self.min_fling_velocity {
            self.settle_to_nearest_day();
            return !self.scroller.is_finished();
        }

        if let Some(origin) = self.scroller.tick(dt) {
            self.origin = origin;
            self.clamp_origin();
        }
        !self.scroller.is_finished() || self.fling_direction.is_some()
    }

    /// Returns the current motion state.
    #[must_use]
    pub fn motion(&self) -> MotionState {
        if self.zoom_anchor.is_some() {
            return MotionState::Zooming;
        }
        if let Some(direction) = self.fling_direction {
            return MotionState::Flinging(direction);
        }
        if !self.scroller.is_finished() {
            return MotionState::Settling;
        }
        if let Some(direction) = self.lock.current() {
            return MotionState::Dragging(direction);
        }
        MotionState::Idle
    }

    fn settle_to_nearest_day(&mut self) {
        let stride = self.day_stride();
        if stride <= 0.0 {
            self.fling_direction = None;
            return;
        }

        let left_days = self.origin.x / stride;
        let snapped = if self.fling_direction.is_some() {
            left_days.round()
        } else {
            match self.lock.current() {
                Some(Direction::Left) => left_days.floor(),
                Some(Direction::Right) => left_days.ceil(),
                _ => left_days.round(),
            }
        };
        self.fling_direction = None;
        self.lock.clear();

        let (min_x, max_x) = self.x_limits();
        let target = clamp_scroll(snapped * stride, min_x, max_x);
        let distance = (self.origin.x - target).abs();
        if distance < 1e-6 {
            self.origin.x = target;
            self.scroller.force_finish();
            return;
        }

        // Duration proportional to the snap distance.
        let duration = self.scroll_duration.mul_f64(distance / self.day_width().max(1.0));
        self.scroller.start_scroll(self.origin, Point::new(target, self.origin.y), duration);
    }

    // --- Navigation -------------------------------------------------------

    /// Scrolls so `day` occupies the first column, within the day bounds.
    pub fn go_to_day(&mut self, day: Day) {
        self.scroller.force_finish();
        self.fling_direction = None;
        self.lock.clear();
        let (min_x, max_x) = self.x_limits();
        self.origin.x = clamp_scroll(self.x_origin_for_day(day), min_x, max_x);
    }

    /// Scrolls vertically so `hour` (fractional, in `min..max` window
    /// hours) sits at the grid top, clamped to the scrollable range.
    pub fn go_to_hour(&mut self, hour: f64) {
        let span = self.hour_height * f64::from(self.visible_hours());
        let offset = (self.hour_height * (hour - f64::from(self.min_time))).clamp(0.0, span);
        self.origin.y = -offset;
        let (min_y, max_y) = self.y_limits();
        self.origin.y = clamp_scroll(self.origin.y, min_y, max_y);
    }

    // --- Coordinate mapping -----------------------------------------------

    /// Maps a view-space pixel to the calendar point under it.
    ///
    /// Returns `None` when the point falls on the ruler column or in the
    /// header band. The produced time is clamped inside the visible time
    /// window, so an out-of-range hour can never be observed.
    #[must_use]
    pub fn time_at_point(&self, point: Point) -> Option<DayPoint> {
        if point.x <= self.metrics.ruler_width || point.y <= self.metrics.grid_top() {
            return None;
        }

        let day_width = self.day_width();
        let stride = self.day_stride();
        let left = self.left_days_with_gaps();
        let mut start_pixel = self.x_start_pixel();

        for offset in 0..=i64::from(self.visible_day_count()) {
            let start = start_pixel.max(self.metrics.ruler_width);
            if day_width + start_pixel - start > 0.0
                && point.x > start
                && point.x < start_pixel + day_width
            {
                let day = self.home_day.plus(left + offset);
                let pixels_from_zero = point.y - self.origin.y - self.metrics.grid_top();
                let raw_minutes =
                    (pixels_from_zero / self.hour_height * f64::from(MINUTES_PER_HOUR)).floor();
                let max_minute = f64::from(self.visible_hours() * MINUTES_PER_HOUR - 1);
                #[expect(clippy::cast_possible_truncation, reason = "clamped to the day range")]
                let minutes = raw_minutes.clamp(0.0, max_minute) as u32
                    + self.min_time * MINUTES_PER_HOUR;
                #[expect(clippy::cast_possible_truncation, reason = "hour/minute fit u8")]
                return Some(DayPoint::new(
                    day,
                    (minutes / MINUTES_PER_HOUR) as u8,
                    (minutes % MINUTES_PER_HOUR) as u8,
                ));
            }
            start_pixel += stride;
        }
        None
    }

    // --- Configuration ----------------------------------------------------

    /// Returns the visible time window as `(first hour, last hour)`.
    #[must_use]
    pub fn time_range(&self) -> (u32, u32) {
        (self.min_time, self.max_time)
    }

    /// Sets the visible time window in whole hours.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::TimeRange`] unless `min < max <= 24`.
    pub fn set_time_range(&mut self, min: u32, max: u32) -> Result<(), ConfigError> {
        if min >= max || max > HOURS_PER_DAY {
            return Err(ConfigError::TimeRange { min, max });
        }
        self.min_time = min;
        self.max_time = max;
        self.hour_height = self.clamp_hour_height(self.hour_height);
        self.clamp_origin();
        Ok(())
    }

    /// Returns the configured day bounds.
    #[must_use]
    pub fn day_bounds(&self) -> (Option<Day>, Option<Day>) {
        (self.min_day, self.max_day)
    }

    /// Sets the earliest and latest scrollable days.
    ///
    /// Either bound may be `None` for unlimited scrolling on that side.
    /// The view is rehomed and the horizontal origin reset.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::DayBounds`] when both bounds are set and
    /// `min` comes after `max`.
    pub fn set_day_bounds(&mut self, min: Option<Day>, max: Option<Day>) -> Result<(), ConfigError> {
        if let (Some(min), Some(max)) = (min, max)
            && min > max
        {
            return Err(ConfigError::DayBounds { min, max });
        }
        self.min_day = min;
        self.max_day = max;
        self.reset_home_day();
        self.origin.x = 0.0;
        self.scroller.force_finish();
        Ok(())
    }

    /// Returns the zoom focus point, if one is configured.
    #[must_use]
    pub fn zoom_focus(&self) -> Option<f64> {
        self.zoom_focus
    }

    /// Configures a fixed zoom focus point as a fraction of the grid
    /// height (`0` = top, `1` = bottom), or `None` to anchor pinches at
    /// their centroid.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::ZoomFocusPoint`] for fractions outside
    /// `0..=1`.
    pub fn set_zoom_focus(&mut self, fraction: Option<f64>) -> Result<(), ConfigError> {
        if let Some(f) = fraction
            && !(0.0..=1.0).contains(&f)
        {
            return Err(ConfigError::ZoomFocusPoint(f));
        }
        self.zoom_focus = fraction;
        Ok(())
    }

    /// Returns the enabled fling axes.
    #[must_use]
    pub fn fling_axes(&self) -> FlingAxes {
        self.fling_axes
    }

    /// Sets which axes honor fling gestures.
    pub fn set_fling_axes(&mut self, axes: FlingAxes) {
        self.fling_axes = axes;
    }

    /// Sets the horizontal scroll speed factor.
    pub fn set_x_scroll_speed(&mut self, factor: f64) {
        self.x_scroll_speed = factor;
    }

    /// Sets the touch-slop threshold used by the direction hysteresis.
    pub fn set_touch_slop(&mut self, slop: f64) {
        self.touch_slop = slop;
    }

    /// Sets the minimum velocity, in pixels per second, below which a
    /// release settles instead of flinging.
    pub fn set_min_fling_velocity(&mut self, velocity: f64) {
        self.min_fling_velocity = velocity;
    }

    /// Sets the base duration of the day-snap animation (scaled by the
    /// snap distance in day widths).
    pub fn set_scroll_duration(&mut self, duration: Duration) {
        self.scroll_duration = duration;
    }

    /// Shifts the home day so the week starts on `first_day_of_week`.
    ///
    /// Only meaningful when seven or more days are visible; narrower views
    /// keep today in the first column.
    pub fn align_to_first_day_of_week(&mut self, first_day_of_week: Day) {
        if self.visible_day_count() >= 7 && self.home_day != first_day_of_week {
            let difference = i64::from(self.home_day.number()) - i64::from(first_day_of_week.number());
            self.origin.x += self.day_stride() * difference as f64;
            self.clamp_origin();
        }
    }

    fn reset_home_day(&mut self) {
        let mut home = self.today;
        if let Some(min) = self.min_day
            && home < min
        {
            home = min;
        }
        if let Some(max) = self.max_day {
            if home > max {
                home = max;
            }
            let mut day = max.plus(1 - i64::from(self.visible_day_count()));
            if let Some(min) = self.min_day {
                while day < min {
                    day = day.next();
                }
            }
            if home > day {
                home = day;
            }
        }
        self.home_day = home;
    }
}

/// Clamp that tolerates an inverted range.
///
/// On the revolving day axis the two horizontal limits can cross; the
/// maximum wins then, pinning the origin rather than panicking.
fn clamp_scroll(value: f64, min: f64, max: f64) -> f64 {
    if value > max {
        max
    } else if value < min {
        min
    } else {
        value
    }
}
