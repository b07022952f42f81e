// Copyright 2026 the Weekgrid Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Outbound notification traits and the period loader contract.
//!
//! Each interaction the surface can report gets its own small trait, so a
//! host implements exactly the capabilities it cares about. The surface
//! holds an optional boxed instance per role and invokes it directly;
//! every call is fire-and-forget.

use kurbo::Rect;

use weekgrid_events::Event;
use weekgrid_time::{Day, DayPoint};

/// Receives taps on event rectangles.
pub trait EventTapListener {
    /// An event was tapped; `rect` is its current screen rectangle.
    fn on_event_tap(&mut self, event: &Event, rect: Rect);
}

/// Receives long-presses on event rectangles.
pub trait EventLongPressListener {
    /// An event was long-pressed; `rect` is its current screen rectangle.
    fn on_event_long_press(&mut self, event: &Event, rect: Rect);
}

/// Receives taps on empty grid cells.
pub trait EmptyTapListener {
    /// An empty spot was tapped at the given calendar point.
    fn on_empty_tap(&mut self, at: DayPoint);
}

/// Receives long-presses on empty grid cells.
pub trait EmptyLongPressListener {
    /// An empty spot was long-pressed at the given calendar point.
    fn on_empty_long_press(&mut self, at: DayPoint);
}

/// Receives taps on the new-event placeholder.
pub trait AddEventListener {
    /// The placeholder was tapped; `start..end` is the proposed range,
    /// already rounded to the configured time resolution.
    fn on_add_event(&mut self, start: DayPoint, end: DayPoint);
}

/// Receives completed drag-and-drop gestures.
pub trait DropListener {
    /// Something was dropped onto the grid at the given calendar point.
    fn on_drop(&mut self, at: DayPoint);
}

/// Receives the end of pinch-zoom gestures.
pub trait ZoomEndListener {
    /// A zoom gesture finished with the given committed hour height.
    fn on_zoom_end(&mut self, hour_height: f64);
}

/// Supplies events for the period the visible window is in.
///
/// The surface tracks a single fetched-period marker and calls
/// [`load_events`](Self::load_events) whenever the first visible day's
/// period differs from it, or when a refresh was requested. The call is
/// synchronous: hosts wanting asynchronous loading complete the fetch
/// before returning, or return cached data and request a refresh once the
/// real data arrives.
pub trait EventLoader {
    /// Period index `day` belongs to. The default puts every day in one
    /// period, which suits the revolving single-week axis; hosts with a
    /// date-backed axis map days to e.g. month indices here.
    fn period_of(&self, day: Day) -> i32 {
        let _ = day;
        0
    }

    /// Loads the events of the current period.
    fn load_events(&mut self) -> Vec<Event>;
}
