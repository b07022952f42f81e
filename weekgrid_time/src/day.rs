// Copyright 2026 the Weekgrid Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use crate::DAYS_PER_WEEK;

/// A weekday on the revolving 7-day wheel.
///
/// Numbering follows the ISO convention (`Monday == 1` through
/// `Sunday == 7`). The derived `Ord` orders days Monday-first within one
/// week; for distances that wrap around the wheel use
/// [`Day::days_between`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Day {
    /// ISO day 1.
    Monday,
    /// ISO day 2.
    Tuesday,
    /// ISO day 3.
    Wednesday,
    /// ISO day 4.
    Thursday,
    /// ISO day 5.
    Friday,
    /// ISO day 6.
    Saturday,
    /// ISO day 7.
    Sunday,
}

impl Day {
    /// All days in Monday-first order.
    pub const ALL: [Self; 7] = [
        Self::Monday,
        Self::Tuesday,
        Self::Wednesday,
        Self::Thursday,
        Self::Friday,
        Self::Saturday,
        Self::Sunday,
    ];

    /// Creates a day from its ISO number (`1..=7`).
    ///
    /// Returns `None` for numbers outside that range.
    #[must_use]
    pub const fn from_number(number: u32) -> Option<Self> {
        match number {
            1 => Some(Self::Monday),
            2 => Some(Self::Tuesday),
            3 => Some(Self::Wednesday),
            4 => Some(Self::Thursday),
            5 => Some(Self::Friday),
            6 => Some(Self::Saturday),
            7 => Some(Self::Sunday),
            _ => None,
        }
    }

    /// Returns the ISO number of this day (`1..=7`).
    #[must_use]
    pub const fn number(self) -> u32 {
        self as u32 + 1
    }

    /// Returns the zero-based index of this day (`Monday == 0`).
    #[must_use]
    pub const fn index(self) -> u32 {
        self as u32
    }

    /// Returns the day `n` steps forward on the wheel.
    ///
    /// `n` may be negative or exceed a full week; the result wraps.
    #[must_use]
    pub const fn plus(self, n: i64) -> Self {
        let wheel = DAYS_PER_WEEK as i64;
        let index = (self as i64 + n).rem_euclid(wheel);
        // rem_euclid keeps the index in 0..7.
        Self::ALL[index as usize]
    }

    /// Returns the day `n` steps backward on the wheel.
    #[must_use]
    pub const fn minus(self, n: i64) -> Self {
        self.plus(-n)
    }

    /// Returns the next day on the wheel (`Sunday` wraps to `Monday`).
    #[must_use]
    pub const fn next(self) -> Self {
        self.plus(1)
    }

    /// Returns the previous day on the wheel (`Monday` wraps to `Sunday`).
    #[must_use]
    pub const fn prev(self) -> Self {
        self.minus(1)
    }

    /// Returns the number of forward steps from `from` to `to` on the wheel.
    ///
    /// The count is always in `0..7`: `days_between(d, d) == 0`, and for
    /// distinct days the two directed distances sum to a full week.
    #[must_use]
    pub fn days_between(from: Self, to: Self) -> u32 {
        let mut steps = 0;
        let mut current = from;
        while current != to {
            steps += 1;
            current = current.next();
        }
        steps
    }
}

#[cfg(test)]
mod tests {
    use super::Day;

    #[test]
    fn numbers_round_trip() {
        for number in 1..=7 {
            let day = Day::from_number(number).unwrap();
            assert_eq!(day.number(), number);
        }
        assert_eq!(Day::from_number(0), None);
        assert_eq!(Day::from_number(8), None);
    }

    #[test]
    fn plus_wraps_in_both_directions() {
        assert_eq!(Day::Sunday.plus(1), Day::Monday);
        assert_eq!(Day::Monday.minus(1), Day::Sunday);
        assert_eq!(Day::Wednesday.plus(7), Day::Wednesday);
        assert_eq!(Day::Wednesday.plus(-16), Day::Monday);
        assert_eq!(Day::Friday.plus(10), Day::Monday);
    }

    #[test]
    fn days_between_is_cyclic_forward_distance() {
        for day in Day::ALL {
            assert_eq!(Day::days_between(day, day), 0);
        }
        assert_eq!(Day::days_between(Day::Monday, Day::Sunday), 6);
        assert_eq!(Day::days_between(Day::Sunday, Day::Monday), 1);
    }

    #[test]
    fn directed_distances_sum_to_a_week() {
        for a in Day::ALL {
            for b in Day::ALL {
                if a != b {
                    assert_eq!(
                        Day::days_between(a, b) + Day::days_between(b, a),
                        7,
                        "distances between distinct days must cover the wheel"
                    );
                }
            }
        }
    }
}
