// Copyright 2026 the Weekgrid Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use core::fmt;
use core::time::Duration;

use kurbo::{Point, Rect, Vec2};
use peniko::Color;
use tracing::{debug, warn};

use weekgrid_events::{Event, EventStore};
use weekgrid_layout::{LayoutParams, LayoutSnapshot, compute_layout};
use weekgrid_time::{Day, DayPoint, HOURS_PER_DAY, MINUTES_PER_HOUR};
use weekgrid_viewport::{ViewMetrics, Viewport};

use crate::error::LoadError;
use crate::listeners::{
    AddEventListener, DropListener, EmptyLongPressListener, EmptyTapListener, EventLoader,
    EventLongPressListener, EventTapListener, ZoomEndListener,
};

/// Fill used for the new-event placeholder.
const PLACEHOLDER_FILL: Color = Color::from_rgb8(0x3c, 0x93, 0xd9);

/// One event rectangle ready to paint, in view coordinates.
///
/// The placed list is rebuilt by [`WeekGrid::prepare_frame`] and doubles as
/// the hit-test index: taps and long-presses search it in reverse paint
/// order, so the rectangle painted last wins.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PlacedEvent {
    /// Index of the source event in [`WeekGrid::store`].
    pub source: usize,
    /// Screen rectangle, already culled against the grid region.
    pub rect: Rect,
    /// Fill to paint with.
    pub fill: Color,
    /// Whether this rectangle lives in the all-day band.
    pub all_day: bool,
    /// Whether this is the new-event placeholder.
    pub placeholder: bool,
}

/// One time label anchor of the ruler column.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct RulerTick {
    /// Hour of day for the label.
    pub hour: u32,
    /// Minute of hour for the label.
    pub minute: u32,
    /// Y position of the tick in view coordinates.
    pub y: f64,
}

/// The proposed new event, shown until tapped or replaced.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
struct Placeholder {
    start: DayPoint,
    end: DayPoint,
}

/// The composed calendar surface.
///
/// `WeekGrid` wires the event store, the layout engine, and the viewport
/// together behind the interface a host actually talks to: forward decoded
/// gestures in, call [`prepare_frame`](Self::prepare_frame) before
/// painting, and query [`placed_events`](Self::placed_events),
/// [`visible day columns`](Viewport::visible_day_columns), and
/// [`ruler_ticks`](Self::ruler_ticks) for the pixels. Data arrives through
/// an [`EventLoader`]; interactions leave through the per-role listener
/// traits.
pub struct WeekGrid {
    store: EventStore,
    layout: LayoutSnapshot,
    viewport: Viewport,
    layout_params: LayoutParams,
    overlapping_event_gap: f64,
    new_event_length_minutes: u32,
    new_event_resolution_minutes: u32,
    new_event_fill: Color,
    ruler_resolution_minutes: u32,
    auto_limit_time: bool,
    drop_enabled: bool,
    first_day_of_week: Day,
    show_first_day_of_week_first: bool,
    first_frame: bool,
    loaded_events: Vec<Event>,
    placeholder: Option<Placeholder>,
    placeholder_source: Option<usize>,
    fetched_period: Option<i32>,
    refresh_requested: bool,
    layout_dirty: bool,
    placed: Vec<PlacedEvent>,
    loader: Option<Box<dyn EventLoader>>,
    on_event_tap: Option<Box<dyn EventTapListener>>,
    on_event_long_press: Option<Box<dyn EventLongPressListener>>,
    on_empty_tap: Option<Box<dyn EmptyTapListener>>,
    on_empty_long_press: Option<Box<dyn EmptyLongPressListener>>,
    on_add_event: Option<Box<dyn AddEventListener>>,
    on_drop: Option<Box<dyn DropListener>>,
    on_zoom_end: Option<Box<dyn ZoomEndListener>>,
}

impl fmt::Debug for WeekGrid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("WeekGrid")
            .field("events", &self.store.events().len())
            .field("fetched_period", &self.fetched_period)
            .field("viewport", &self.viewport)
            .finish_non_exhaustive()
    }
}

impl WeekGrid {
    /// Creates a surface over `metrics`, homed on `today`.
    #[must_use]
    pub fn new(metrics: ViewMetrics, today: Day) -> Self {
        Self {
            store: EventStore::new(),
            layout: LayoutSnapshot::default(),
            viewport: Viewport::new(metrics, today),
            layout_params: LayoutParams::default(),
            overlapping_event_gap: 0.0,
            new_event_length_minutes: 60,
            new_event_resolution_minutes: 15,
            new_event_fill: PLACEHOLDER_FILL,
            ruler_resolution_minutes: 60,
            auto_limit_time: false,
            drop_enabled: false,
            first_day_of_week: Day::Monday,
            show_first_day_of_week_first: false,
            first_frame: true,
            loaded_events: Vec::new(),
            placeholder: None,
            placeholder_source: None,
            fetched_period: None,
            refresh_requested: false,
            layout_dirty: true,
            placed: Vec::new(),
            loader: None,
            on_event_tap: None,
            on_event_long_press: None,
            on_empty_tap: None,
            on_empty_long_press: None,
            on_add_event: None,
            on_drop: None,
            on_zoom_end: None,
        }
    }

    // --- Collaborators ----------------------------------------------------

    /// Sets the period loader.
    pub fn set_loader(&mut self, loader: Box<dyn EventLoader>) {
        self.loader = Some(loader);
    }

    /// Sets the event-tap listener.
    pub fn set_event_tap_listener(&mut self, listener: Box<dyn EventTapListener>) {
        self.on_event_tap = Some(listener);
    }

    /// Sets the event long-press listener.
    pub fn set_event_long_press_listener(&mut self, listener: Box<dyn EventLongPressListener>) {
        self.on_event_long_press = Some(listener);
    }

    /// Sets the empty-cell tap listener.
    pub fn set_empty_tap_listener(&mut self, listener: Box<dyn EmptyTapListener>) {
        self.on_empty_tap = Some(listener);
    }

    /// Sets the empty-cell long-press listener.
    pub fn set_empty_long_press_listener(&mut self, listener: Box<dyn EmptyLongPressListener>) {
        self.on_empty_long_press = Some(listener);
    }

    /// Sets the add-event listener. While one is set, tapping empty space
    /// proposes a placeholder event.
    pub fn set_add_event_listener(&mut self, listener: Box<dyn AddEventListener>) {
        self.on_add_event = Some(listener);
    }

    /// Sets the drop listener (see [`set_drop_enabled`](Self::set_drop_enabled)).
    pub fn set_drop_listener(&mut self, listener: Box<dyn DropListener>) {
        self.on_drop = Some(listener);
    }

    /// Sets the zoom-end listener.
    pub fn set_zoom_end_listener(&mut self, listener: Box<dyn ZoomEndListener>) {
        self.on_zoom_end = Some(listener);
    }

    // --- Configuration ----------------------------------------------------

    /// Read access to the viewport engine.
    #[must_use]
    pub fn viewport(&self) -> &Viewport {
        &self.viewport
    }

    /// Mutable access to the viewport engine for scroll/zoom configuration.
    pub fn viewport_mut(&mut self) -> &mut Viewport {
        &mut self.viewport
    }

    /// Read access to the event store.
    #[must_use]
    pub fn store(&self) -> &EventStore {
        &self.store
    }

    /// The current layout snapshot (one assignment per store fragment).
    #[must_use]
    pub fn layout(&self) -> &LayoutSnapshot {
        &self.layout
    }

    /// Sets the minimum overlap, in minutes, before events collide.
    pub fn set_min_overlap_minutes(&mut self, minutes: u32) {
        self.layout_params.min_overlap_minutes = minutes;
        self.layout_dirty = true;
    }

    /// Sets the pixel height of one all-day slot.
    pub fn set_all_day_slot_height(&mut self, height: f64) {
        self.layout_params.all_day_slot_height = height;
        self.layout_dirty = true;
    }

    /// Sets the horizontal gap, in pixels, shaved off overlapping events.
    pub fn set_overlapping_event_gap(&mut self, gap: f64) {
        self.overlapping_event_gap = gap;
    }

    /// Sets the default length of a proposed new event, in minutes.
    pub fn set_new_event_length(&mut self, minutes: u32) {
        self.new_event_length_minutes = minutes.max(1);
    }

    /// Sets the time resolution a tapped time is rounded to, in minutes.
    pub fn set_new_event_time_resolution(&mut self, minutes: u32) {
        self.new_event_resolution_minutes = minutes.max(1);
    }

    /// Sets the ruler label resolution, in minutes per tick.
    pub fn set_ruler_resolution(&mut self, minutes: u32) {
        self.ruler_resolution_minutes = minutes.max(1);
    }

    /// Enables narrowing the visible time window to the events on screen.
    pub fn set_auto_limit_time(&mut self, enabled: bool) {
        self.auto_limit_time = enabled;
    }

    /// Enables routing of [`drop_at`](Self::drop_at) to the drop listener.
    pub fn set_drop_enabled(&mut self, enabled: bool) {
        self.drop_enabled = enabled;
    }

    /// Sets the first day of the week, honored on the first frame when
    /// seven or more days are visible and
    /// [`set_show_first_day_of_week_first`](Self::set_show_first_day_of_week_first)
    /// is on.
    pub fn set_first_day_of_week(&mut self, day: Day) {
        self.first_day_of_week = day;
    }

    /// Controls whether a wide view starts aligned to the first day of the
    /// week rather than to today.
    pub fn set_show_first_day_of_week_first(&mut self, show: bool) {
        self.show_first_day_of_week_first = show;
    }

    // --- Loading ----------------------------------------------------------

    /// Requests a reload on the next frame, as after a dataset change.
    pub fn refresh(&mut self) {
        self.refresh_requested = true;
    }

    /// Reloads the current period immediately.
    ///
    /// # Errors
    ///
    /// Returns [`LoadError::NoLoader`] when no loader is configured; the
    /// surface stays interactive with its previously loaded events.
    pub fn refresh_now(&mut self) -> Result<(), LoadError> {
        if self.loader.is_none() {
            return Err(LoadError::NoLoader);
        }
        self.refresh_requested = true;
        self.ensure_loaded();
        if self.layout_dirty {
            self.rebuild();
        }
        Ok(())
    }

    fn ensure_loaded(&mut self) {
        let first_visible = self.viewport.first_visible_day();
        let Some(loader) = self.loader.as_mut() else {
            if self.fetched_period.is_none() || self.refresh_requested {
                warn!("a period load is due but no loader is configured");
            }
            return;
        };

        let period = loader.period_of(first_visible);
        if self.refresh_requested || self.fetched_period != Some(period) {
            let events = loader.load_events();
            debug!(period, count = events.len(), "loaded period events");
            self.loaded_events = events;
            self.fetched_period = Some(period);
            self.refresh_requested = false;
            self.placeholder = None;
            self.layout_dirty = true;
        }
    }

    /// Rebuilds the store and the layout snapshot from the loaded events
    /// plus the placeholder, replacing the previous snapshot atomically.
    fn rebuild(&mut self) {
        self.store.clear();
        let dropped = self.store.ingest(self.loaded_events.iter().cloned());
        if dropped > 0 {
            debug!(dropped, "dropped malformed events at ingestion");
        }

        self.placeholder_source = None;
        if let Some(placeholder) = self.placeholder {
            self.placeholder_source = Some(self.store.events().len());
            self.store.ingest([Event::timed("", "", placeholder.start, placeholder.end)
                .with_fill(self.new_event_fill)]);
        }

        self.layout = compute_layout(self.store.fragments(), &self.layout_params);
        self.layout_dirty = false;
    }

    // --- Frame pipeline ---------------------------------------------------

    /// Runs the per-frame pipeline: load if due, relayout if the event set
    /// changed, then place every visible fragment into pixel space.
    ///
    /// Call this after input and [`tick`](Self::tick) and before painting.
    pub fn prepare_frame(&mut self) {
        if self.first_frame {
            self.first_frame = false;
            if self.show_first_day_of_week_first {
                self.viewport.align_to_first_day_of_week(self.first_day_of_week);
            }
        }
        self.ensure_loaded();
        if self.layout_dirty {
            self.rebuild();
        }
        if self.auto_limit_time {
            self.apply_auto_time_limit();
        }
        self.place_events();
    }

    /// Advances viewport animations; returns `true` while more frames are
    /// needed.
    pub fn tick(&mut self, dt: Duration) -> bool {
        self.viewport.tick(dt)
    }

    // --- Gestures (forwarded to the viewport) -----------------------------

    /// Starts a touch gesture. See [`Viewport::begin_touch`].
    pub fn begin_touch(&mut self) {
        self.viewport.begin_touch();
    }

    /// Feeds one scroll distance of the active drag. See
    /// [`Viewport::scroll_by`].
    pub fn scroll_by(&mut self, delta: Vec2) {
        self.viewport.scroll_by(delta);
    }

    /// Releases the drag with a fling velocity. See [`Viewport::fling`].
    pub fn fling(&mut self, velocity: Vec2) {
        self.viewport.fling(velocity);
    }

    /// Releases the drag without momentum. See [`Viewport::end_touch`].
    pub fn end_touch(&mut self) {
        self.viewport.end_touch();
    }

    /// Begins a pinch gesture. See [`Viewport::pinch_begin`].
    pub fn pinch_begin(&mut self, focus_view_y: f64) {
        self.viewport.pinch_begin(focus_view_y);
    }

    /// Applies one incremental pinch scale factor. See
    /// [`Viewport::pinch_scale`].
    pub fn pinch_scale(&mut self, factor: f64) {
        self.viewport.pinch_scale(factor);
    }

    /// Scrolls back to the day the surface was homed on.
    pub fn go_to_today(&mut self) {
        let today = self.viewport.today();
        self.viewport.go_to_day(today);
    }

    /// The placed event rectangles of the last prepared frame.
    #[must_use]
    pub fn placed_events(&self) -> &[PlacedEvent] {
        &self.placed
    }

    /// The source event behind a placed rectangle.
    #[must_use]
    pub fn source_event(&self, placed: &PlacedEvent) -> &Event {
        &self.store.events()[placed.source]
    }

    fn place_events(&mut self) {
        let day_width = self.viewport.day_width();
        let metrics = *self.viewport.metrics();
        let grid_top = metrics.grid_top();
        let origin = self.viewport.origin();
        let hour_height = self.viewport.hour_height();
        let (min_time, _) = self.viewport.time_range();
        let band_top = (grid_top - self.layout_params.all_day_slot_height).max(0.0);

        let mut placed = Vec::new();
        for (day, start_pixel) in self.viewport.visible_day_columns() {
            for (index, fragment) in self.store.fragments().iter().enumerate() {
                if fragment.day() != day {
                    continue;
                }
                let Some(assignment) = self.layout.get(index) else {
                    continue;
                };

                let mut left = start_pixel + assignment.left * day_width;
                let mut right = left + assignment.width * day_width;
                if assignment.left > 0.0 {
                    left += self.overlapping_event_gap;
                }
                if assignment.left + assignment.width < 1.0 {
                    right -= self.overlapping_event_gap;
                }

                let (top, bottom, visible) = if fragment.all_day() {
                    let top = band_top + assignment.top;
                    let bottom = band_top + assignment.bottom;
                    (top, bottom, bottom > 0.0)
                } else {
                    let minutes_per_hour = f64::from(MINUTES_PER_HOUR);
                    let offset = f64::from(min_time) * minutes_per_hour;
                    let top = origin.y + grid_top + (assignment.top - offset) / minutes_per_hour * hour_height;
                    let bottom =
                        origin.y + grid_top + (assignment.bottom - offset) / minutes_per_hour * hour_height;
                    (top, bottom, bottom > grid_top)
                };

                if left < right
                    && left < metrics.width
                    && top < metrics.height
                    && right > metrics.ruler_width
                    && visible
                {
                    let event = self.store.source_of(fragment);
                    placed.push(PlacedEvent {
                        source: fragment.source(),
                        rect: Rect::new(left, top, right, bottom),
                        fill: event.fill,
                        all_day: fragment.all_day(),
                        placeholder: self.placeholder_source == Some(fragment.source()),
                    });
                }
            }
        }
        self.placed = placed;
    }

    /// The ruler label anchors of the current frame, top to bottom.
    #[must_use]
    pub fn ruler_ticks(&self) -> Vec<RulerTick> {
        let (min_time, max_time) = self.viewport.time_range();
        let total_minutes = (max_time - min_time) * MINUTES_PER_HOUR;
        let resolution = self.ruler_resolution_minutes;
        let metrics = self.viewport.metrics();
        let grid_top = metrics.grid_top();
        let origin_y = self.viewport.origin().y;
        let hour_height = self.viewport.hour_height();

        let mut ticks = Vec::new();
        let mut minutes = 0;
        while minutes < total_minutes {
            let y = grid_top
                + origin_y
                + f64::from(minutes) / f64::from(MINUTES_PER_HOUR) * hour_height;
            if y < metrics.height {
                let of_day = min_time * MINUTES_PER_HOUR + minutes;
                ticks.push(RulerTick {
                    hour: of_day / MINUTES_PER_HOUR,
                    minute: of_day % MINUTES_PER_HOUR,
                    y,
                });
            }
            minutes += resolution;
        }
        ticks
    }

    /// Narrows the visible time window to the hour span of the timed
    /// events on the visible days.
    fn apply_auto_time_limit(&mut self) {
        let first = self.viewport.first_visible_day();
        let count = self.viewport.visible_day_count();

        let mut earliest: Option<u32> = None;
        let mut latest: Option<u32> = None;
        for fragment in self.store.fragments() {
            if fragment.all_day() {
                continue;
            }
            let on_screen =
                (0..count).any(|offset| fragment.day() == first.plus(i64::from(offset)));
            if !on_screen {
                continue;
            }
            earliest =
                Some(earliest.map_or(fragment.start_minute(), |e| e.min(fragment.start_minute())));
            latest = Some(latest.map_or(fragment.end_minute(), |l| l.max(fragment.end_minute())));
        }

        if let (Some(earliest), Some(latest)) = (earliest, latest) {
            let min = earliest / MINUTES_PER_HOUR;
            let max = (latest / MINUTES_PER_HOUR + 1).min(HOURS_PER_DAY);
            if max > min {
                let _ = self.viewport.set_time_range(min, max);
            }
        }
    }

    // --- Pointer actions --------------------------------------------------

    /// Routes a tap at `point` (view coordinates).
    ///
    /// Hits are resolved against the last prepared frame in reverse paint
    /// order: placeholder and event rectangles first, then empty grid
    /// space, which reports the tapped calendar point and (while an
    /// add-event listener is set) proposes a new-event placeholder there.
    pub fn tap(&mut self, point: Point) {
        if let Some(hit) = self.placed.iter().rev().find(|p| p.rect.contains(point)).copied() {
            if hit.placeholder {
                if let (Some(listener), Some(placeholder)) =
                    (self.on_add_event.as_mut(), self.placeholder)
                {
                    listener.on_add_event(placeholder.start, placeholder.end);
                }
                return;
            }
            if let Some(listener) = self.on_event_tap.as_mut() {
                let event = &self.store.events()[hit.source];
                listener.on_event_tap(event, hit.rect);
            }
            return;
        }

        let Some(at) = self.viewport.time_at_point(point) else {
            return;
        };
        if let Some(listener) = self.on_empty_tap.as_mut() {
            listener.on_empty_tap(at);
        }
        if self.on_add_event.is_some() {
            self.propose_placeholder(at);
        }
    }

    /// Routes a long-press at `point` (view coordinates).
    pub fn long_press(&mut self, point: Point) {
        if let Some(hit) = self.placed.iter().rev().find(|p| p.rect.contains(point)).copied() {
            if !hit.placeholder
                && let Some(listener) = self.on_event_long_press.as_mut()
            {
                let event = &self.store.events()[hit.source];
                listener.on_event_long_press(event, hit.rect);
            }
            return;
        }

        if let Some(at) = self.viewport.time_at_point(point)
            && let Some(listener) = self.on_empty_long_press.as_mut()
        {
            listener.on_empty_long_press(at);
        }
    }

    /// Routes a completed drop at `point` when drops are enabled.
    pub fn drop_at(&mut self, point: Point) {
        if !self.drop_enabled {
            return;
        }
        if let Some(at) = self.viewport.time_at_point(point)
            && let Some(listener) = self.on_drop.as_mut()
        {
            listener.on_drop(at);
        }
    }

    /// Ends a pinch gesture and notifies the zoom-end listener.
    pub fn pinch_end(&mut self) {
        let hour_height = self.viewport.pinch_end();
        if let Some(listener) = self.on_zoom_end.as_mut() {
            listener.on_zoom_end(hour_height);
        }
    }

    /// Centers a proposed event on the tapped time, rounds it to the time
    /// resolution, and clamps it inside the visible day.
    fn propose_placeholder(&mut self, at: DayPoint) {
        let (min_time, max_time) = self.viewport.time_range();
        let length = i64::from(self.new_event_length_minutes);
        let resolution = i64::from(self.new_event_resolution_minutes);

        let mut start = at.sub_minutes(length / 2);
        // Centering may have crossed below the window or onto the previous
        // day; pin it to the window start of the tapped day.
        if start.day() != at.day() || u32::from(start.hour()) < min_time {
            #[expect(clippy::cast_possible_truncation, reason = "hours fit u8")]
            let min_hour = min_time as u8;
            start = DayPoint::new(at.day(), min_hour, 0);
        }

        let unrounded = i64::from(start.minute());
        let excess = unrounded % resolution;
        start = start.add_minutes(if excess < (resolution + 1) / 2 {
            -excess
        } else {
            resolution - excess
        });

        // One minute short of the window end keeps the event on this day.
        let window_end = i64::from(max_time) * i64::from(MINUTES_PER_HOUR);
        let available = window_end - i64::from(start.minute_of_day()) - 1;
        let end = start.add_minutes(available.min(length));
        if available < length {
            start = start.add_minutes(available - length);
        }

        self.placeholder = Some(Placeholder { start, end });
        self.layout_dirty = true;
    }
}
