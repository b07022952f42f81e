// Copyright 2026 the Weekgrid Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Weekgrid Time: cyclic day axis and day/time point primitives.
//!
//! This crate provides the small value types the rest of the Weekgrid stack
//! is built on:
//!
//! - [`Day`]: a weekday on a revolving 7-day wheel. The calendar surface
//!   scrolls over weekdays rather than dates, so day arithmetic is cyclic:
//!   stepping forward from [`Day::Sunday`] lands on [`Day::Monday`].
//! - [`DayPoint`]: a day plus an hour/minute time of day, with minute
//!   arithmetic that rolls the day over correctly and a single numeric
//!   [ordering key](DayPoint::ordering_key) usable for total ordering
//!   across the week.
//!
//! ## Minimal example
//!
//! ```rust
//! use weekgrid_time::{Day, DayPoint};
//!
//! let late = DayPoint::new(Day::Sunday, 23, 30);
//! let rolled = late.add_minutes(45);
//! assert_eq!(rolled, DayPoint::new(Day::Monday, 0, 15));
//!
//! // Forward distance on the wheel is direction-sensitive.
//! assert_eq!(Day::days_between(Day::Friday, Day::Monday), 3);
//! assert_eq!(Day::days_between(Day::Monday, Day::Friday), 4);
//! ```
//!
//! This crate is `no_std`.

#![no_std]

mod day;
mod point;

pub use day::Day;
pub use point::DayPoint;

/// Minutes in one hour.
pub const MINUTES_PER_HOUR: u32 = 60;

/// Hours in one day.
pub const HOURS_PER_DAY: u32 = 24;

/// Minutes in one day.
pub const MINUTES_PER_DAY: u32 = MINUTES_PER_HOUR * HOURS_PER_DAY;

/// Days on the revolving week wheel.
pub const DAYS_PER_WEEK: u32 = 7;
