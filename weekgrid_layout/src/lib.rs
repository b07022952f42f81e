// Copyright 2026 the Weekgrid Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Weekgrid Layout: collision grouping and fractional column packing.
//!
//! Given the sorted fragment list of an [`EventStore`], this crate decides
//! where each fragment sits *within its day column*, so that colliding
//! events never visually overlap:
//!
//! 1. **Grouping** — fragments whose time ranges overlap (directly or
//!    transitively through a chain of overlaps) are gathered into collision
//!    groups. All-day and timed fragments never share a group; all-day
//!    fragments collide on the whole of their day.
//! 2. **Column packing** — within a group, fragments are packed first-fit
//!    into vertical columns; every column then receives an equal share of
//!    the day's width (`width = 1/columns`, `left = index/columns`).
//!
//! The equal-share rule is the *expand to max width* policy: a fragment is
//! never widened beyond its column even when a neighboring column has a gap
//! at that height. That is documented behavior, not a defect.
//!
//! A configurable minimum-overlap margin shrinks the collision window, so
//! back-to-back events that merely brush each other by a few minutes keep
//! their full width instead of being forced into separate columns.
//!
//! The output is an immutable [`LayoutSnapshot`]: one [`ColumnAssignment`]
//! per input fragment, positionally indexed. It is recomputed in full
//! whenever the event set changes; it is never patched incrementally, and
//! recomputation over an unchanged store yields identical assignments.
//!
//! ## Minimal example
//!
//! ```rust
//! use weekgrid_events::{Event, EventStore};
//! use weekgrid_layout::{LayoutParams, compute_layout};
//! use weekgrid_time::{Day, DayPoint};
//!
//! let mut store = EventStore::new();
//! store.ingest([
//!     Event::timed(
//!         "a",
//!         "A",
//!         DayPoint::new(Day::Monday, 10, 0),
//!         DayPoint::new(Day::Monday, 10, 30),
//!     ),
//!     Event::timed(
//!         "b",
//!         "B",
//!         DayPoint::new(Day::Monday, 10, 15),
//!         DayPoint::new(Day::Monday, 10, 45),
//!     ),
//! ]);
//!
//! let layout = compute_layout(store.fragments(), &LayoutParams::default());
//! let [a, b] = [&layout.assignments()[0], &layout.assignments()[1]];
//! assert_eq!((a.width, b.width), (0.5, 0.5));
//! assert_eq!((a.left, b.left), (0.0, 0.5));
//! ```
//!
//! This crate is `no_std` and uses `alloc`.

#![no_std]

extern crate alloc;

mod group;
mod pack;

use alloc::vec::Vec;

use weekgrid_events::Fragment;

pub use group::{CollisionGroup, collision_groups};

/// Tunables for one layout pass.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct LayoutParams {
    /// Minimum overlap, in minutes, before two fragments count as colliding.
    ///
    /// The margin shrinks the collision window on both sides: fragments
    /// whose ranges overlap by no more than this many minutes are still
    /// laid out at full width.
    pub min_overlap_minutes: u32,
    /// Height, in pixels, of one all-day slot in the header band.
    pub all_day_slot_height: f64,
}

impl Default for LayoutParams {
    fn default() -> Self {
        Self { min_overlap_minutes: 0, all_day_slot_height: 100.0 }
    }
}

/// Where one fragment sits within its day column.
///
/// Horizontal placement is fractional (`left + width <= 1`); the host
/// multiplies by the day width in pixels. Vertical placement is in minutes
/// since midnight for timed fragments, and `0..all_day_slot_height` (pixels)
/// for all-day fragments, which live in the fixed-height header band.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct ColumnAssignment {
    /// Left edge as a fraction of the day width, in `[0, 1)`.
    pub left: f64,
    /// Width as a fraction of the day width, in `(0, 1]`.
    pub width: f64,
    /// Top edge: minutes since midnight, or `0` for all-day fragments.
    pub top: f64,
    /// Bottom edge: minutes since midnight, or the all-day slot height.
    pub bottom: f64,
}

/// An immutable set of column assignments, parallel to the fragment list it
/// was computed from.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct LayoutSnapshot {
    assignments: Vec<ColumnAssignment>,
}

impl LayoutSnapshot {
    /// Returns the assignment for the fragment at `index`.
    #[must_use]
    pub fn get(&self, index: usize) -> Option<&ColumnAssignment> {
        self.assignments.get(index)
    }

    /// Returns all assignments, positionally parallel to the input fragments.
    #[must_use]
    pub fn assignments(&self) -> &[ColumnAssignment] {
        &self.assignments
    }

    /// Returns the number of assignments.
    #[must_use]
    pub fn len(&self) -> usize {
        self.assignments.len()
    }

    /// Returns `true` if the snapshot is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.assignments.is_empty()
    }
}

/// Runs the full two-phase layout over a sorted fragment list.
///
/// The pass never fails: malformed input was already filtered at ingestion,
/// and every fragment receives exactly one assignment. Determinism follows
/// from the store order of `fragments`.
#[must_use]
pub fn compute_layout(fragments: &[Fragment], params: &LayoutParams) -> LayoutSnapshot {
    let mut assignments = alloc::vec![ColumnAssignment::default(); fragments.len()];
    let margin = i64::from(params.min_overlap_minutes);

    for all_day in [false, true] {
        for group in collision_groups(fragments, margin, all_day) {
            pack::assign_columns(fragments, &group, margin, params, &mut assignments);
        }
    }

    LayoutSnapshot { assignments }
}

#[cfg(test)]
mod tests {
    use alloc::vec::Vec;

    use super::{LayoutParams, compute_layout};
    use weekgrid_events::{Event, EventStore};
    use weekgrid_time::{Day, DayPoint};

    fn timed(id: &str, day: Day, start: (u8, u8), end: (u8, u8)) -> Event {
        Event::timed(id, id, DayPoint::new(day, start.0, start.1), DayPoint::new(day, end.0, end.1))
    }

    fn store_of(events: impl IntoIterator<Item = Event>) -> EventStore {
        let mut store = EventStore::new();
        store.ingest(events);
        store
    }

    #[test]
    fn two_overlapping_events_share_the_day_evenly() {
        let store = store_of([
            timed("a", Day::Monday, (10, 0), (10, 30)),
            timed("b", Day::Monday, (10, 15), (10, 45)),
        ]);
        let layout = compute_layout(store.fragments(), &LayoutParams::default());

        let a = &layout.assignments()[0];
        let b = &layout.assignments()[1];
        assert_eq!((a.width, a.left), (0.5, 0.0));
        assert_eq!((b.width, b.left), (0.5, 0.5));
        assert_eq!((a.top, a.bottom), (600.0, 630.0));
    }

    #[test]
    fn three_way_overlap_gets_three_columns() {
        let store = store_of([
            timed("a", Day::Monday, (11, 50), (12, 20)),
            timed("b", Day::Monday, (12, 0), (12, 30)),
            timed("c", Day::Monday, (12, 5), (12, 10)),
        ]);
        let layout = compute_layout(store.fragments(), &LayoutParams::default());

        for assignment in layout.assignments() {
            assert!((assignment.width - 1.0 / 3.0).abs() < 1e-12);
        }
        let mut lefts: Vec<f64> = layout.assignments().iter().map(|a| a.left).collect();
        lefts.sort_by(f64::total_cmp);
        assert!((lefts[1] - 1.0 / 3.0).abs() < 1e-12);
        assert!((lefts[2] - 2.0 / 3.0).abs() < 1e-12);
    }

    #[test]
    fn transitive_chains_group_but_reuse_columns() {
        let store = store_of([
            timed("a", Day::Monday, (9, 0), (10, 0)),
            timed("b", Day::Monday, (9, 30), (10, 30)),
            timed("c", Day::Monday, (10, 15), (11, 0)),
        ]);
        let layout = compute_layout(store.fragments(), &LayoutParams::default());

        // One group of three, but a and c stack into the same column.
        let [a, b, c] =
            [&layout.assignments()[0], &layout.assignments()[1], &layout.assignments()[2]];
        assert_eq!((a.left, a.width), (0.0, 0.5));
        assert_eq!((b.left, b.width), (0.5, 0.5));
        assert_eq!((c.left, c.width), (0.0, 0.5));
    }

    #[test]
    fn assigned_rectangles_never_overlap_in_both_axes() {
        let store = store_of([
            timed("a", Day::Monday, (9, 0), (11, 0)),
            timed("b", Day::Monday, (9, 15), (10, 0)),
            timed("c", Day::Monday, (9, 30), (12, 0)),
            timed("d", Day::Monday, (10, 30), (11, 30)),
            timed("e", Day::Monday, (11, 45), (13, 0)),
        ]);
        let layout = compute_layout(store.fragments(), &LayoutParams::default());

        let rects = layout.assignments();
        for (i, a) in rects.iter().enumerate() {
            for b in rects.iter().skip(i + 1) {
                let x_overlap = a.left < b.left + b.width && a.left + a.width > b.left;
                let y_overlap = a.top < b.bottom && a.bottom > b.top;
                assert!(!(x_overlap && y_overlap), "assigned rectangles must not intersect");
            }
        }
    }

    #[test]
    fn margin_lets_brushing_events_keep_full_width() {
        let events = [
            timed("a", Day::Monday, (9, 0), (10, 0)),
            timed("b", Day::Monday, (9, 55), (11, 0)),
        ];

        // 5 minutes of overlap and a 5-minute tolerance: no collision.
        let store = store_of(events.clone());
        let tolerant = LayoutParams { min_overlap_minutes: 5, ..LayoutParams::default() };
        let layout = compute_layout(store.fragments(), &tolerant);
        assert_eq!(layout.assignments()[0].width, 1.0);
        assert_eq!(layout.assignments()[1].width, 1.0);

        // One more minute of overlap crosses the tolerance.
        let store = store_of([events[0].clone(), timed("b", Day::Monday, (9, 54), (11, 0))]);
        let layout = compute_layout(store.fragments(), &tolerant);
        assert_eq!(layout.assignments()[0].width, 0.5);
    }

    #[test]
    fn all_day_and_timed_fragments_never_share_a_group() {
        let start = DayPoint::new(Day::Monday, 0, 0);
        let end = DayPoint::new(Day::Monday, 23, 59);
        let store = store_of([
            Event::all_day("banner", "Banner", start, end),
            timed("meeting", Day::Monday, (10, 0), (11, 0)),
        ]);
        let layout = compute_layout(store.fragments(), &LayoutParams::default());

        // Both stay full width: the all-day banner lives in the header band.
        for assignment in layout.assignments() {
            assert_eq!(assignment.width, 1.0);
        }
    }

    #[test]
    fn all_day_events_on_one_day_split_the_band() {
        let start = DayPoint::new(Day::Monday, 8, 0);
        let end = DayPoint::new(Day::Monday, 9, 0);
        let late_start = DayPoint::new(Day::Monday, 20, 0);
        let late_end = DayPoint::new(Day::Monday, 21, 0);
        let params = LayoutParams::default();
        let store = store_of([
            Event::all_day("one", "One", start, end),
            // Disjoint times, but all-day fragments collide on the whole day.
            Event::all_day("two", "Two", late_start, late_end),
        ]);
        let layout = compute_layout(store.fragments(), &params);

        let a = &layout.assignments()[0];
        let b = &layout.assignments()[1];
        assert_eq!((a.width, b.width), (0.5, 0.5));
        assert_eq!((a.top, a.bottom), (0.0, params.all_day_slot_height));
        assert_eq!((b.top, b.bottom), (0.0, params.all_day_slot_height));
    }

    #[test]
    fn recomputation_is_idempotent() {
        let store = store_of([
            timed("a", Day::Monday, (9, 0), (11, 0)),
            timed("b", Day::Monday, (9, 15), (10, 0)),
            timed("c", Day::Tuesday, (9, 30), (12, 0)),
        ]);
        let params = LayoutParams::default();
        let first = compute_layout(store.fragments(), &params);
        let second = compute_layout(store.fragments(), &params);
        assert_eq!(first, second);
    }
}
