// Copyright 2026 the Weekgrid Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use alloc::vec::Vec;

use weekgrid_time::{Day, MINUTES_PER_DAY};

use crate::Event;

/// The portion of an event clipped to a single calendar day.
///
/// Fragments are the unit of collision detection and column layout. A
/// fragment's extent is expressed in minutes of its day, with
/// `start_minute < end_minute <= 1440`; the exclusive end of `1440` stands
/// for the following midnight, which a
/// [`DayPoint`](weekgrid_time::DayPoint) cannot carry directly.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Fragment {
    source: usize,
    day: Day,
    start_minute: u32,
    end_minute: u32,
    all_day: bool,
}

impl Fragment {
    pub(crate) fn new(
        source: usize,
        day: Day,
        start_minute: u32,
        end_minute: u32,
        all_day: bool,
    ) -> Self {
        debug_assert!(
            start_minute < end_minute && end_minute <= MINUTES_PER_DAY,
            "fragment extent must be a non-empty slice of one day"
        );
        Self { source, day, start_minute, end_minute, all_day }
    }

    /// Index of the source event in the owning store.
    ///
    /// This is the non-owning back-reference used to surface the original
    /// event for clicks and identity checks.
    #[must_use]
    pub const fn source(self) -> usize {
        self.source
    }

    /// The day this fragment lies on.
    #[must_use]
    pub const fn day(self) -> Day {
        self.day
    }

    /// Clipped start, in minutes since this day's midnight.
    #[must_use]
    pub const fn start_minute(self) -> u32 {
        self.start_minute
    }

    /// Clipped exclusive end, in minutes since this day's midnight (`<= 1440`).
    #[must_use]
    pub const fn end_minute(self) -> u32 {
        self.end_minute
    }

    /// Whether the source event is an all-day event.
    #[must_use]
    pub const fn all_day(self) -> bool {
        self.all_day
    }

    /// Week-wide ordering key of the clipped start.
    #[must_use]
    pub fn start_key(self) -> i64 {
        i64::from(self.day.index()) * i64::from(MINUTES_PER_DAY) + i64::from(self.start_minute)
    }

    /// Week-wide ordering key of the clipped (exclusive) end.
    #[must_use]
    pub fn end_key(self) -> i64 {
        i64::from(self.day.index()) * i64::from(MINUTES_PER_DAY) + i64::from(self.end_minute)
    }
}

/// Splits an accepted event into one fragment per day it touches.
///
/// Each fragment is clipped to `[00:00, 24:00)` of its day. A day on whose
/// midnight the event ends exactly contributes no fragment. The caller has
/// already established `start < end`.
pub(crate) fn split_event(event: &Event, source: usize, out: &mut Vec<Fragment>) {
    let start = event.start;
    let end = event.end;
    let spanned = Day::days_between(start.day(), end.day());

    if spanned == 0 {
        out.push(Fragment::new(
            source,
            start.day(),
            start.minute_of_day(),
            end.minute_of_day(),
            event.all_day,
        ));
        return;
    }

    // First day runs to midnight.
    out.push(Fragment::new(
        source,
        start.day(),
        start.minute_of_day(),
        MINUTES_PER_DAY,
        event.all_day,
    ));

    // Whole intermediate days.
    for offset in 1..spanned {
        out.push(Fragment::new(
            source,
            start.day().plus(i64::from(offset)),
            0,
            MINUTES_PER_DAY,
            event.all_day,
        ));
    }

    // Last day, unless the event ends exactly on its midnight.
    let tail = end.minute_of_day();
    if tail > 0 {
        out.push(Fragment::new(source, end.day(), 0, tail, event.all_day));
    }
}
