// Copyright 2026 the Weekgrid Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use core::cmp::Ordering;

use crate::{Day, MINUTES_PER_DAY, MINUTES_PER_HOUR};

/// A point on the calendar: a [`Day`] plus an hour/minute time of day.
///
/// Invariants: `hour < 24` and `minute < 60`, enforced by the constructors.
/// The end of a day is not representable as `24:00`; ranges that extend to
/// midnight are expressed with an exclusive end on the following day (or as
/// a minute-of-day extent of `1440` where only the extent matters).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct DayPoint {
    day: Day,
    hour: u8,
    minute: u8,
}

impl DayPoint {
    /// Creates a point at the given day and time of day.
    ///
    /// # Panics
    ///
    /// Panics if `hour >= 24` or `minute >= 60`.
    #[must_use]
    pub fn new(day: Day, hour: u8, minute: u8) -> Self {
        assert!(u32::from(hour) < crate::HOURS_PER_DAY, "hour out of range");
        assert!(u32::from(minute) < MINUTES_PER_HOUR, "minute out of range");
        Self { day, hour, minute }
    }

    /// Creates a point at midnight on the given day.
    #[must_use]
    pub const fn midnight(day: Day) -> Self {
        Self { day, hour: 0, minute: 0 }
    }

    /// Returns the day component.
    #[must_use]
    pub const fn day(self) -> Day {
        self.day
    }

    /// Returns the hour of day (`0..24`).
    #[must_use]
    pub const fn hour(self) -> u8 {
        self.hour
    }

    /// Returns the minute of hour (`0..60`).
    #[must_use]
    pub const fn minute(self) -> u8 {
        self.minute
    }

    /// Returns the same day with a different time of day.
    ///
    /// # Panics
    ///
    /// Panics if `hour >= 24` or `minute >= 60`.
    #[must_use]
    pub fn with_time(self, hour: u8, minute: u8) -> Self {
        Self::new(self.day, hour, minute)
    }

    /// Returns minutes passed since midnight (`0..1440`).
    #[must_use]
    pub const fn minute_of_day(self) -> u32 {
        self.hour as u32 * MINUTES_PER_HOUR + self.minute as u32
    }

    /// Returns this point shifted forward by `n` minutes.
    ///
    /// Hour and minute wrap and the day advances (cyclically) as needed;
    /// `n` may be negative.
    #[must_use]
    pub fn add_minutes(self, n: i64) -> Self {
        let day_len = i64::from(MINUTES_PER_DAY);
        let total = i64::from(self.minute_of_day()) + n;
        let day_shift = total.div_euclid(day_len);
        let minute_of_day = total.rem_euclid(day_len);
        #[expect(
            clippy::cast_possible_truncation,
            reason = "rem/div by 60 of a value in 0..1440 fits u8"
        )]
        let (hour, minute) = (
            (minute_of_day / i64::from(MINUTES_PER_HOUR)) as u8,
            (minute_of_day % i64::from(MINUTES_PER_HOUR)) as u8,
        );
        Self { day: self.day.plus(day_shift), hour, minute }
    }

    /// Returns this point shifted backward by `n` minutes.
    #[must_use]
    pub fn sub_minutes(self, n: i64) -> Self {
        self.add_minutes(-n)
    }

    /// Returns a single integer ordering this point within the week.
    ///
    /// The key is `day index × minutes-per-day + minute-of-day`, so it grows
    /// monotonically from Monday 00:00 through Sunday 23:59. Differences
    /// between keys are in minutes, which is what the collision margin in
    /// the layout engine is expressed in.
    #[must_use]
    pub fn ordering_key(self) -> i64 {
        i64::from(self.day.index()) * i64::from(MINUTES_PER_DAY) + i64::from(self.minute_of_day())
    }
}

impl PartialOrd for DayPoint {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for DayPoint {
    fn cmp(&self, other: &Self) -> Ordering {
        self.ordering_key().cmp(&other.ordering_key())
    }
}
