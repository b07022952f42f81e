// Copyright 2026 the Weekgrid Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use alloc::vec::Vec;

use hashbrown::HashMap;

use crate::fragment::split_event;
use crate::{Event, EventId, Fragment};

/// Holds the event set for the currently fetched period.
///
/// The store keeps the source events, the per-day fragments derived from
/// them, and an id lookup. Fragments are kept sorted by start key, ties
/// broken by end key; every downstream pass (grouping, packing, painting)
/// iterates them in this order, which is what makes layout deterministic.
///
/// The store is owned exclusively by the surface hosting it and is rebuilt
/// wholesale on period reloads ([`clear`](Self::clear) + [`ingest`](Self::ingest)).
#[derive(Clone, Debug, Default)]
pub struct EventStore {
    events: Vec<Event>,
    fragments: Vec<Fragment>,
    by_id: HashMap<EventId, usize>,
}

impl EventStore {
    /// Creates an empty store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Ingests a batch of events, returning how many were dropped.
    ///
    /// Events with `start >= end` are dropped silently; a malformed entry
    /// from an upstream source must not abort rendering. Accepted events
    /// are split into per-day fragments and the fragment order is restored
    /// afterwards. If two events share an id, the id lookup resolves to the
    /// most recently ingested one; both are stored and laid out.
    pub fn ingest<I>(&mut self, events: I) -> usize
    where
        I: IntoIterator<Item = Event>,
    {
        let mut dropped = 0;
        for event in events {
            if !event.is_well_formed() {
                dropped += 1;
                continue;
            }
            let source = self.events.len();
            split_event(&event, source, &mut self.fragments);
            self.by_id.insert(event.id.clone(), source);
            self.events.push(event);
        }
        // Stable: fragments with identical (start, end) keys keep ingestion order.
        self.fragments.sort_by_key(|f| (f.start_key(), f.end_key()));
        dropped
    }

    /// Empties events and fragments ahead of a fresh period load.
    pub fn clear(&mut self) {
        self.events.clear();
        self.fragments.clear();
        self.by_id.clear();
    }

    /// Returns all stored source events in ingestion order.
    #[must_use]
    pub fn events(&self) -> &[Event] {
        &self.events
    }

    /// Returns all fragments, sorted by start key then end key.
    #[must_use]
    pub fn fragments(&self) -> &[Fragment] {
        &self.fragments
    }

    /// Returns the source event of a fragment.
    #[must_use]
    pub fn source_of(&self, fragment: &Fragment) -> &Event {
        &self.events[fragment.source()]
    }

    /// Looks an event up by id.
    #[must_use]
    pub fn event(&self, id: &EventId) -> Option<&Event> {
        self.by_id.get(id).map(|&slot| &self.events[slot])
    }

    /// Returns all fragments derived from the event at `source`.
    pub fn fragments_of(&self, source: usize) -> impl Iterator<Item = &Fragment> {
        self.fragments.iter().filter(move |f| f.source() == source)
    }

    /// Returns `true` if the store holds no events.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }
}
