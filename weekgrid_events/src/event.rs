// Copyright 2026 the Weekgrid Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use alloc::string::String;

use peniko::Color;
use weekgrid_time::DayPoint;

/// Fill used when the host does not pick one.
const DEFAULT_FILL: Color = Color::from_rgb8(0x9f, 0xc6, 0xe7);

/// Identity of an event, unique within one loaded period.
///
/// Ids are opaque strings chosen by the host (database keys, UUIDs, …);
/// the core only compares them.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct EventId(String);

impl EventId {
    /// Creates an id from any string-like value.
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Returns the id as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<&str> for EventId {
    fn from(id: &str) -> Self {
        Self::new(id)
    }
}

impl From<String> for EventId {
    fn from(id: String) -> Self {
        Self(id)
    }
}

/// A calendar entry supplied by the host's loader.
///
/// `end` is exclusive. Events with `start >= end` are rejected (silently
/// dropped) by [`EventStore::ingest`](crate::EventStore::ingest); the store
/// never holds one.
#[derive(Clone, Debug, PartialEq)]
pub struct Event {
    /// Host-chosen identity, surfaced back through click/long-press reports.
    pub id: EventId,
    /// Display name.
    pub name: String,
    /// Optional location line, shown after the name by typical hosts.
    pub location: Option<String>,
    /// Start of the event (inclusive).
    pub start: DayPoint,
    /// End of the event (exclusive).
    pub end: DayPoint,
    /// Whether this event occupies the all-day band instead of the timed grid.
    pub all_day: bool,
    /// Fill the host paints the event rectangle with. The core never
    /// interprets this value.
    pub fill: Color,
}

impl Event {
    /// Creates a timed event with the default fill and no location.
    pub fn timed(
        id: impl Into<EventId>,
        name: impl Into<String>,
        start: DayPoint,
        end: DayPoint,
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            location: None,
            start,
            end,
            all_day: false,
            fill: DEFAULT_FILL,
        }
    }

    /// Creates an all-day event covering the same `[start, end)` range.
    pub fn all_day(
        id: impl Into<EventId>,
        name: impl Into<String>,
        start: DayPoint,
        end: DayPoint,
    ) -> Self {
        Self { all_day: true, ..Self::timed(id, name, start, end) }
    }

    /// Sets the location line.
    #[must_use]
    pub fn with_location(mut self, location: impl Into<String>) -> Self {
        self.location = Some(location.into());
        self
    }

    /// Sets the fill color.
    #[must_use]
    pub fn with_fill(mut self, fill: Color) -> Self {
        self.fill = fill;
        self
    }

    /// Returns `true` if the `[start, end)` range is non-empty.
    #[must_use]
    pub fn is_well_formed(&self) -> bool {
        self.start.ordering_key() < self.end.ordering_key()
    }
}

#[cfg(test)]
mod tests {
    use super::Event;
    use weekgrid_time::{Day, DayPoint};

    #[test]
    fn well_formedness_requires_positive_extent() {
        let at = DayPoint::new(Day::Monday, 9, 0);
        let later = DayPoint::new(Day::Monday, 9, 30);

        assert!(Event::timed("a", "A", at, later).is_well_formed());
        assert!(!Event::timed("b", "B", at, at).is_well_formed());
        assert!(!Event::timed("c", "C", later, at).is_well_formed());
    }

    #[test]
    fn builders_carry_optional_fields() {
        let event = Event::all_day(
            "d",
            "D",
            DayPoint::new(Day::Friday, 0, 0),
            DayPoint::new(Day::Saturday, 0, 0),
        )
        .with_location("Room 5");

        assert!(event.all_day);
        assert_eq!(event.location.as_deref(), Some("Room 5"));
    }
}
