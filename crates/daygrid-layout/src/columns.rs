#![forbid(unsafe_code)]

//! Greedy column assignment within a multi-event cluster.
//!
//! Events are admitted in sorted order (start ascending, end descending)
//! and scanned against the columns built so far: columns left to right,
//! each column's sub-slots newest first. A prior occupant still covering
//! the new start blocks the column when the remaining overlap exceeds the
//! stack allowance; within the allowance the new event stacks one
//! sub-slot deeper, and an occupant ending at or before the new start
//! lets it sit below at the same sub-slot. The best candidate is the one
//! with the smallest sub-index; an occupant whose clamped end touches or
//! passes the new start is decisive and ends the whole search.
//!
//! The `min_sub >= sub` update rule is asymmetric and is kept exactly as
//! found: changing it changes which column visually hosts tied events.

use daygrid_core::time::Millis;

use crate::cluster::Placed;

#[derive(Debug, Clone, Copy)]
struct Candidate {
    column: usize,
    sub_index: usize,
    stacking: bool,
}

/// Assign `column`, `sub_index`, and the shared `parallel` count for one
/// cluster of two or more events, in admission order.
pub(crate) fn assign_columns(cluster: &mut [Placed], stack_overlap: Millis) {
    debug_assert!(cluster.len() >= 2);

    // Column index -> sub-slots, oldest first; entries index into `cluster`.
    let mut columns: Vec<Vec<usize>> = Vec::new();

    for i in 0..cluster.len() {
        let start = cluster[i].interval.start;

        let mut best: Option<Candidate> = None;
        let mut min_sub = usize::MAX;
        'search: for (column, slots) in columns.iter().enumerate() {
            for sub in (0..slots.len()).rev() {
                let other = &cluster[slots[sub]];
                let covers_start = other.end_for_overlap >= start;
                let overlap = other.end_for_overlap - start;

                // Overlap beyond the allowance: no space anywhere in this
                // column, since earlier sub-slots start no later.
                if covers_start && overlap > stack_overlap {
                    break;
                }

                let (stacking, compatible) = if covers_start && overlap <= stack_overlap {
                    (true, true)
                } else if other.interval.end <= start {
                    (false, true)
                } else {
                    (false, false)
                };
                if !compatible {
                    continue;
                }

                if min_sub >= sub {
                    best = Some(Candidate {
                        column,
                        sub_index: sub,
                        stacking,
                    });
                    min_sub = sub;

                    // An occupant reaching the new start is an exact fit:
                    // nothing further left or right can beat it.
                    if other.interval.end >= start {
                        break 'search;
                    }
                }
            }
        }

        match best {
            None => {
                cluster[i].column = columns.len();
                cluster[i].sub_index = 0;
                columns.push(vec![i]);
            }
            Some(found) => {
                let sub_index = if found.stacking {
                    found.sub_index + 1
                } else {
                    found.sub_index
                };
                cluster[i].column = found.column;
                cluster[i].sub_index = sub_index;

                let slots = &mut columns[found.column];
                if slots.len() > sub_index {
                    slots[sub_index] = i;
                } else {
                    slots.push(i);
                }
            }
        }
    }

    let parallel = columns.len();
    for p in cluster.iter_mut() {
        p.parallel = parallel;
    }
}
