// Copyright 2026 the Weekgrid Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use alloc::vec::Vec;

use smallvec::SmallVec;
use weekgrid_events::Fragment;
use weekgrid_time::MINUTES_PER_DAY;

/// Indices of the fragments forming one collision group, in store order.
///
/// Group sizes are bounded by a single day's simultaneous events, so they
/// are kept inline while small.
pub type CollisionGroup = SmallVec<[usize; 8]>;

/// The week-wide `[start, end)` key range a fragment collides on.
///
/// Timed fragments collide on their clipped minutes; all-day fragments
/// collide on the whole of their day, so every all-day fragment of one day
/// lands in one group and shares the band.
pub(crate) fn collision_span(fragment: &Fragment) -> (i64, i64) {
    if fragment.all_day() {
        let base = i64::from(fragment.day().index()) * i64::from(MINUTES_PER_DAY);
        (base, base + i64::from(MINUTES_PER_DAY))
    } else {
        (fragment.start_key(), fragment.end_key())
    }
}

/// Collision test with the minimum-overlap margin applied.
///
/// The margin shrinks the collision window from both ends: ranges must
/// overlap by *more* than `margin` minutes to collide, so back-to-back
/// events with a tiny brush keep their full width.
pub(crate) fn collides(a: (i64, i64), b: (i64, i64), margin: i64) -> bool {
    a.0 + margin < b.1 && a.1 > b.0 + margin
}

/// Partitions one category of fragments into collision groups.
///
/// Fragments are visited in store order. Each joins the first existing
/// group containing any fragment it collides with, or opens a new group;
/// every fragment therefore belongs to exactly one group. Quadratic in the
/// worst case, which is fine at the scale of a day's events.
///
/// Only fragments whose [`Fragment::all_day`] flag equals `all_day` are
/// considered; the two categories never share a group.
#[must_use]
pub fn collision_groups(fragments: &[Fragment], margin: i64, all_day: bool) -> Vec<CollisionGroup> {
    let mut groups: Vec<CollisionGroup> = Vec::new();

    for (index, fragment) in fragments.iter().enumerate() {
        if fragment.all_day() != all_day {
            continue;
        }
        let span = collision_span(fragment);

        let home = groups.iter_mut().find(|group| {
            group.iter().any(|&member| collides(collision_span(&fragments[member]), span, margin))
        });
        match home {
            Some(group) => group.push(index),
            None => groups.push(CollisionGroup::from_slice(&[index])),
        }
    }

    groups
}

#[cfg(test)]
mod tests {
    use super::{collides, collision_groups};
    use weekgrid_events::{Event, EventStore};
    use weekgrid_time::{Day, DayPoint};

    fn timed(id: &str, day: Day, start: (u8, u8), end: (u8, u8)) -> Event {
        Event::timed(id, id, DayPoint::new(day, start.0, start.1), DayPoint::new(day, end.0, end.1))
    }

    #[test]
    fn collides_applies_the_margin_to_both_ends() {
        // 60-minute ranges overlapping by 10 minutes.
        let a = (0, 60);
        let b = (50, 110);
        assert!(collides(a, b, 0));
        assert!(collides(a, b, 9));
        assert!(!collides(a, b, 10));
        assert!(!collides(b, a, 10));
    }

    #[test]
    fn disjoint_days_never_group() {
        let mut store = EventStore::new();
        store.ingest([
            timed("mon", Day::Monday, (9, 0), (10, 0)),
            timed("tue", Day::Tuesday, (9, 0), (10, 0)),
        ]);
        let groups = collision_groups(store.fragments(), 0, false);
        assert_eq!(groups.len(), 2);
    }

    #[test]
    fn transitive_overlap_chains_into_one_group() {
        let mut store = EventStore::new();
        store.ingest([
            timed("a", Day::Monday, (9, 0), (10, 0)),
            timed("b", Day::Monday, (9, 30), (10, 30)),
            // Collides with b only; joins through the chain.
            timed("c", Day::Monday, (10, 15), (11, 0)),
        ]);
        let groups = collision_groups(store.fragments(), 0, false);
        assert_eq!(groups.len(), 1);
        assert_eq!(groups[0].as_slice(), [0, 1, 2]);
    }

    #[test]
    fn every_fragment_lands_in_exactly_one_group() {
        let mut store = EventStore::new();
        store.ingest([
            timed("a", Day::Monday, (9, 0), (12, 0)),
            timed("b", Day::Monday, (9, 30), (10, 0)),
            timed("c", Day::Monday, (11, 0), (13, 0)),
            timed("d", Day::Monday, (14, 0), (15, 0)),
        ]);
        let groups = collision_groups(store.fragments(), 0, false);

        let mut seen = [0_u32; 4];
        for group in &groups {
            for &member in group {
                seen[member] += 1;
            }
        }
        assert_eq!(seen, [1, 1, 1, 1], "one group per fragment");
    }
}
