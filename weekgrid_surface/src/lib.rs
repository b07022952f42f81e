// Copyright 2026 the Weekgrid Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Weekgrid Surface: the composed multi-day calendar surface.
//!
//! This crate ties the Weekgrid stack together behind one type,
//! [`WeekGrid`]: the event store and layout engine from
//! [`weekgrid_events`] / [`weekgrid_layout`], and the scroll/zoom engine
//! from [`weekgrid_viewport`]. It stays headless — the host paints and
//! decodes platform input; the surface answers *what* to paint and *what*
//! an interaction meant.
//!
//! A host integration loop looks like this:
//!
//! 1. Forward decoded gestures: [`WeekGrid::begin_touch`],
//!    [`WeekGrid::scroll_by`], [`WeekGrid::fling`], [`WeekGrid::end_touch`],
//!    the pinch methods, and [`WeekGrid::tap`] / [`WeekGrid::long_press`] /
//!    [`WeekGrid::drop_at`].
//! 2. Each frame, call [`WeekGrid::tick`] with the frame delta, then
//!    [`WeekGrid::prepare_frame`].
//! 3. Paint from [`WeekGrid::placed_events`],
//!    [`Viewport::visible_day_columns`](weekgrid_viewport::Viewport::visible_day_columns),
//!    and [`WeekGrid::ruler_ticks`].
//!
//! Event data arrives through the [`EventLoader`] trait: the surface
//! tracks a single fetched-period marker and asks the loader for a fresh
//! batch when the visible window crosses a period boundary or a refresh is
//! requested. Interactions leave through one small listener trait per role
//! (tap, long-press, add-event, drop, zoom end), all fire-and-forget.
//!
//! ## Minimal example
//!
//! ```rust
//! use weekgrid_events::Event;
//! use weekgrid_surface::{EventLoader, WeekGrid};
//! use weekgrid_time::{Day, DayPoint};
//! use weekgrid_viewport::ViewMetrics;
//!
//! struct Week;
//!
//! impl EventLoader for Week {
//!     fn load_events(&mut self) -> Vec<Event> {
//!         vec![Event::timed(
//!             "standup",
//!             "Standup",
//!             DayPoint::new(Day::Monday, 9, 0),
//!             DayPoint::new(Day::Monday, 9, 30),
//!         )]
//!     }
//! }
//!
//! let metrics = ViewMetrics {
//!     width: 800.0,
//!     height: 600.0,
//!     header_height: 60.0,
//!     ruler_width: 50.0,
//!     column_gap: 10.0,
//! };
//! let mut grid = WeekGrid::new(metrics, Day::Monday);
//! grid.set_loader(Box::new(Week));
//!
//! grid.prepare_frame();
//! assert_eq!(grid.placed_events().len(), 1);
//! ```

mod error;
mod listeners;
mod surface;

pub use error::LoadError;
pub use listeners::{
    AddEventListener, DropListener, EmptyLongPressListener, EmptyTapListener, EventLoader,
    EventLongPressListener, EventTapListener, ZoomEndListener,
};
pub use surface::{PlacedEvent, RulerTick, WeekGrid};
