// Copyright 2026 the Weekgrid Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use smallvec::SmallVec;
use weekgrid_events::Fragment;

use crate::group::{CollisionGroup, collides, collision_span};
use crate::{ColumnAssignment, LayoutParams};

type Column = SmallVec<[usize; 4]>;

/// Packs one collision group into columns and writes the assignments.
///
/// Members are visited in store order and placed first-fit: into the first
/// column whose most recently placed fragment does not collide, otherwise
/// into a new column. Every column then gets an equal share of the day
/// width regardless of how densely it is filled (the expand-to-max-width
/// policy).
pub(crate) fn assign_columns(
    fragments: &[Fragment],
    group: &CollisionGroup,
    margin: i64,
    params: &LayoutParams,
    assignments: &mut [ColumnAssignment],
) {
    let mut columns: SmallVec<[Column; 4]> = SmallVec::new();

    for &member in group {
        let span = collision_span(&fragments[member]);
        let slot = columns.iter_mut().find(|column| {
            column.last().is_none_or(|&last| !collides(span, collision_span(&fragments[last]), margin))
        });
        match slot {
            Some(column) => column.push(member),
            None => columns.push(Column::from_slice(&[member])),
        }
    }

    let count = columns.len();
    let width = 1.0 / count as f64;

    for (index, column) in columns.iter().enumerate() {
        let left = index as f64 / count as f64;
        for &member in column {
            let fragment = &fragments[member];
            let (top, bottom) = if fragment.all_day() {
                (0.0, params.all_day_slot_height)
            } else {
                (f64::from(fragment.start_minute()), f64::from(fragment.end_minute()))
            };
            assignments[member] = ColumnAssignment { left, width, top, bottom };
        }
    }
}

#[cfg(test)]
mod tests {
    use alloc::vec;

    use super::assign_columns;
    use crate::group::CollisionGroup;
    use crate::{ColumnAssignment, LayoutParams};
    use weekgrid_events::{Event, EventStore};
    use weekgrid_time::{Day, DayPoint};

    #[test]
    fn stacked_fragments_reuse_a_column() {
        let mut store = EventStore::new();
        store.ingest([
            Event::timed(
                "a",
                "A",
                DayPoint::new(Day::Monday, 9, 0),
                DayPoint::new(Day::Monday, 10, 0),
            ),
            Event::timed(
                "b",
                "B",
                DayPoint::new(Day::Monday, 9, 0),
                DayPoint::new(Day::Monday, 11, 0),
            ),
            Event::timed(
                "c",
                "C",
                DayPoint::new(Day::Monday, 10, 0),
                DayPoint::new(Day::Monday, 10, 30),
            ),
        ]);

        let group: CollisionGroup = CollisionGroup::from_slice(&[0, 1, 2]);
        let mut assignments = vec![ColumnAssignment::default(); 3];
        assign_columns(
            store.fragments(),
            &group,
            0,
            &LayoutParams::default(),
            &mut assignments,
        );

        // a and c stack in column 0; b takes column 1.
        assert_eq!((assignments[0].left, assignments[0].width), (0.0, 0.5));
        assert_eq!((assignments[1].left, assignments[1].width), (0.5, 0.5));
        assert_eq!((assignments[2].left, assignments[2].width), (0.0, 0.5));
    }
}
