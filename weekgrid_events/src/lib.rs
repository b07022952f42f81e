// Copyright 2026 the Weekgrid Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Weekgrid Events: the event model and the per-period event store.
//!
//! This crate owns the data the layout engine runs on:
//!
//! - [`Event`]: a host-supplied calendar entry with an id, display text, a
//!   `[start, end)` range of [`DayPoint`]s, an all-day flag, and a
//!   [`peniko::Color`] fill the host paints with.
//! - [`Fragment`]: the portion of an event clipped to a single calendar
//!   day. Multi-day events are decomposed into one fragment per touched
//!   day at ingestion; every fragment keeps a back-reference to its source
//!   event so hit testing and click reporting always surface the original.
//! - [`EventStore`]: the set of events for the currently fetched period,
//!   plus the fragment list in the deterministic order every downstream
//!   pass relies on (start key ascending, ties broken by end key).
//!
//! Malformed events (`start >= end`) are dropped at ingestion rather than
//! surfaced as errors: garbled input from an upstream source should not
//! abort rendering.
//!
//! ## Minimal example
//!
//! ```rust
//! use weekgrid_events::{Event, EventStore};
//! use weekgrid_time::{Day, DayPoint};
//!
//! let mut store = EventStore::new();
//! store.ingest([Event::timed(
//!     "standup",
//!     "Standup",
//!     DayPoint::new(Day::Monday, 22, 0),
//!     DayPoint::new(Day::Tuesday, 2, 0),
//! )]);
//!
//! // The overnight event was split at midnight.
//! let fragments = store.fragments();
//! assert_eq!(fragments.len(), 2);
//! assert_eq!(fragments[0].day(), Day::Monday);
//! assert_eq!((fragments[0].start_minute(), fragments[0].end_minute()), (22 * 60, 1440));
//! assert_eq!((fragments[1].start_minute(), fragments[1].end_minute()), (0, 2 * 60));
//! ```
//!
//! This crate is `no_std` and uses `alloc`.

#![no_std]

extern crate alloc;

mod event;
mod fragment;
mod store;

pub use event::{Event, EventId};
pub use fragment::Fragment;
pub use store::EventStore;
