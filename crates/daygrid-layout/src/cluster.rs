#![forbid(unsafe_code)]

//! Overlap clustering.
//!
//! A cluster is a maximal run of sorted clamped intervals where each next
//! interval starts at or before the running maximum end seen so far. Two
//! events share a cluster exactly when a chain of pairwise overlaps
//! connects them; events in different clusters never influence each
//! other's columns.

use std::ops::Range;

use daygrid_core::time::Millis;

use crate::clamp::ClampedInterval;

/// Per-event working state for one layout pass.
#[derive(Debug, Clone)]
pub(crate) struct Placed {
    /// Index into the caller's event slice.
    pub event_index: usize,
    /// Clamped interval, offsets from day start.
    pub interval: ClampedInterval,
    /// Contracted end used only for overlap tests.
    pub end_for_overlap: Millis,
    /// Assigned column within the cluster.
    pub column: usize,
    /// Assigned stacking sub-index within the column.
    pub sub_index: usize,
    /// Cluster-wide column count.
    pub parallel: usize,
}

impl Placed {
    pub(crate) fn unassigned(
        event_index: usize,
        interval: ClampedInterval,
        end_for_overlap: Millis,
    ) -> Self {
        Self {
            event_index,
            interval,
            end_for_overlap,
            column: 0,
            sub_index: 0,
            parallel: 1,
        }
    }
}

/// Sort for clustering and admission: start ascending, end descending.
///
/// The descending end tie-break makes the longest interval of a shared
/// start establish the cluster's running end first, which the greedy
/// column scan assumes. The sort is stable, so remaining ties keep
/// submission order.
pub(crate) fn sort_for_admission(placed: &mut [Placed]) {
    placed.sort_by(|a, b| {
        a.interval
            .start
            .cmp(&b.interval.start)
            .then_with(|| b.interval.end.cmp(&a.interval.end))
    });
}

/// Partition sorted intervals into maximal overlap clusters.
///
/// Returns index ranges into the sorted slice. An interval starting exactly
/// at the running end joins the current cluster (inclusive comparison).
pub(crate) fn build_clusters(placed: &[Placed]) -> Vec<Range<usize>> {
    let mut clusters = Vec::new();
    if placed.is_empty() {
        return clusters;
    }

    let mut begin = 0usize;
    let mut current_end = placed[0].interval.end;
    for (i, p) in placed.iter().enumerate().skip(1) {
        if p.interval.start <= current_end {
            current_end = current_end.max(p.interval.end);
        } else {
            clusters.push(begin..i);
            begin = i;
            current_end = p.interval.end;
        }
    }
    clusters.push(begin..placed.len());
    clusters
}

#[cfg(test)]
mod tests {
    use super::*;

    fn placed(start_min: i64, end_min: i64) -> Placed {
        let interval = ClampedInterval {
            start: Millis::from_minutes(start_min),
            end: Millis::from_minutes(end_min),
        };
        Placed::unassigned(0, interval, interval.end)
    }

    fn cluster_sizes(items: &[Placed]) -> Vec<usize> {
        build_clusters(items).into_iter().map(|r| r.len()).collect()
    }

    #[test]
    fn disjoint_intervals_form_singletons() {
        let items = vec![placed(60, 120), placed(180, 240), placed(300, 330)];
        assert_eq!(cluster_sizes(&items), vec![1, 1, 1]);
    }

    #[test]
    fn chained_overlap_joins_one_cluster() {
        // A overlaps B, B overlaps C; A and C never touch directly.
        let items = vec![placed(60, 150), placed(120, 210), placed(200, 260)];
        assert_eq!(cluster_sizes(&items), vec![3]);
    }

    #[test]
    fn touching_interval_joins_the_cluster() {
        // Start exactly at the running end: inclusive join.
        let items = vec![placed(60, 120), placed(120, 180)];
        assert_eq!(cluster_sizes(&items), vec![2]);
    }

    #[test]
    fn running_end_is_the_maximum_seen() {
        // The first interval spans the second entirely; the third overlaps
        // only the first's tail but still joins.
        let items = vec![placed(60, 300), placed(90, 120), placed(200, 320), placed(330, 360)];
        assert_eq!(cluster_sizes(&items), vec![3, 1]);
    }

    #[test]
    fn admission_sort_orders_start_asc_end_desc() {
        let mut items = vec![placed(120, 150), placed(60, 90), placed(60, 180)];
        sort_for_admission(&mut items);
        let spans: Vec<(i64, i64)> = items
            .iter()
            .map(|p| (p.interval.start.as_i64() / 60_000, p.interval.end.as_i64() / 60_000))
            .collect();
        assert_eq!(spans, vec![(60, 180), (60, 90), (120, 150)]);
    }
}
