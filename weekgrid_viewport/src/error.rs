// Copyright 2026 the Weekgrid Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use thiserror::Error;
use weekgrid_time::Day;

/// Rejected configuration values.
///
/// Raised synchronously by the validated setters; the viewport is never
/// left in a partially updated state when one of these is returned.
#[derive(Clone, Copy, Debug, Error, PartialEq)]
pub enum ConfigError {
    /// The visible time window must satisfy `0 <= min < max <= 24`.
    #[error("invalid visible time range {min}..{max} (need 0 <= min < max <= 24)")]
    TimeRange {
        /// Requested first visible hour.
        min: u32,
        /// Requested last visible hour (exclusive).
        max: u32,
    },
    /// The zoom focus point is a fraction of the grid height.
    #[error("zoom focus point {0} is outside 0..=1")]
    ZoomFocusPoint(f64),
    /// The minimum scrollable day must not come after the maximum.
    #[error("minimum day {min:?} is after maximum day {max:?}")]
    DayBounds {
        /// Requested earliest scrollable day.
        min: Day,
        /// Requested latest scrollable day.
        max: Day,
    },
}
