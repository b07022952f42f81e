// Copyright 2026 the Weekgrid Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

/// Pixel-space geometry of the hosting view.
///
/// The grid splits into three regions: the header band across the top (day
/// labels plus the all-day slots), the ruler column down the left (time
/// labels), and the day grid filling the rest. All values are in device
/// pixels; the host updates them on resize via
/// [`Viewport::set_metrics`](crate::Viewport::set_metrics).
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ViewMetrics {
    /// Total view width.
    pub width: f64,
    /// Total view height.
    pub height: f64,
    /// Height of the header band (day labels and all-day slots).
    pub header_height: f64,
    /// Width of the time-ruler column.
    pub ruler_width: f64,
    /// Gap between adjacent day columns.
    pub column_gap: f64,
}

impl ViewMetrics {
    /// Creates metrics for a view of `width × height` with no chrome.
    #[must_use]
    pub const fn new(width: f64, height: f64) -> Self {
        Self { width, height, header_height: 0.0, ruler_width: 0.0, column_gap: 0.0 }
    }

    /// Width of one day column when `visible_days` are shown at once.
    #[must_use]
    pub fn day_width(&self, visible_days: u32) -> f64 {
        let days = f64::from(visible_days.max(1));
        (self.width - self.ruler_width - self.column_gap * (days - 1.0)) / days
    }

    /// Horizontal distance between the left edges of adjacent day columns.
    #[must_use]
    pub fn day_stride(&self, visible_days: u32) -> f64 {
        self.day_width(visible_days) + self.column_gap
    }

    /// Y coordinate where the timed grid begins.
    #[must_use]
    pub const fn grid_top(&self) -> f64 {
        self.header_height
    }

    /// Height of the timed grid region.
    #[must_use]
    pub fn grid_height(&self) -> f64 {
        (self.height - self.header_height).max(0.0)
    }
}

#[cfg(test)]
mod tests {
    use super::ViewMetrics;

    #[test]
    fn day_width_accounts_for_ruler_and_gaps() {
        let metrics = ViewMetrics {
            width: 800.0,
            height: 600.0,
            header_height: 60.0,
            ruler_width: 50.0,
            column_gap: 10.0,
        };
        // (800 - 50 - 10*2) / 3
        assert_eq!(metrics.day_width(3), 730.0 / 3.0);
        assert_eq!(metrics.day_stride(3), 730.0 / 3.0 + 10.0);
        assert_eq!(metrics.grid_height(), 540.0);
    }

    #[test]
    fn day_width_never_divides_by_zero() {
        let metrics = ViewMetrics::new(800.0, 600.0);
        assert_eq!(metrics.day_width(0), 800.0);
    }
}
