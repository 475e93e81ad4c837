#![forbid(unsafe_code)]

//! Day-calendar event layout engine.
//!
//! Given one day's set of time-interval events, [`layout`] computes a
//! deterministic visual arrangement for a time-proportional vertical axis:
//!
//! - [`timeline`] - time-to-pixel mapping over the slot grid
//! - [`clamp`] - minimum-visual-duration clamping
//! - [`cluster`] - maximal overlap clustering (internal)
//! - [`columns`] - greedy column/sub-slot assignment (internal)
//!
//! The pass is a pure function of `(events, config, geometry)`: records are
//! rebuilt from scratch every call and identical inputs yield identical
//! output. Cluster membership can change with any insertion, removal, or
//! resize, so nothing is patched incrementally.
//!
//! # Pipeline
//!
//! raw events -> clamped intervals -> clusters -> column assignment ->
//! pixel frames. Rendering, input, and scrolling are the caller's concern.

pub mod clamp;
mod cluster;
mod columns;
pub mod timeline;

use std::fmt;

use daygrid_core::config::{TimelineConfig, TimelineConfigError};
use daygrid_core::event::{Event, EventId, EventKind};
use daygrid_core::geometry::{ContainerGeometry, PxRect};
use daygrid_core::time::Timestamp;

pub use clamp::ClampedInterval;

use cluster::Placed;

/// Why a submission was refused. No partial layout is produced; the caller
/// keeps its previous records.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum LayoutError {
    /// The configuration itself is invalid.
    Config(TimelineConfigError),
    /// An event is flagged all-day; callers must pre-filter those.
    AllDayEvent {
        /// Offending event.
        id: EventId,
    },
    /// A placeholder-kind event was supplied from outside; only the
    /// coordinator may create one.
    ExternalPlaceholder {
        /// Offending event.
        id: EventId,
    },
    /// The raw interval lies wholly outside the day window.
    OutsideDay {
        /// Offending event.
        id: EventId,
    },
}

impl fmt::Display for LayoutError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Config(error) => write!(f, "invalid timeline configuration: {error}"),
            Self::AllDayEvent { id } => {
                write!(f, "all-day event {id} cannot be laid out on the timed grid")
            }
            Self::ExternalPlaceholder { id } => {
                write!(f, "placeholder event {id} cannot be supplied externally")
            }
            Self::OutsideDay { id } => {
                write!(f, "event {id} lies wholly outside the day window")
            }
        }
    }
}

impl std::error::Error for LayoutError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        if let Self::Config(error) = self {
            return Some(error);
        }
        None
    }
}

impl From<TimelineConfigError> for LayoutError {
    fn from(error: TimelineConfigError) -> Self {
        Self::Config(error)
    }
}

/// One event's computed arrangement for the current pass.
///
/// Records are created fresh on every pass and never mutated; match them to
/// your event store by `id`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LayoutRecord {
    /// Stable event identity.
    pub id: EventId,
    /// Persistent or placeholder.
    pub kind: EventKind,
    /// Clamped interval, offsets from day start.
    pub interval: ClampedInterval,
    /// Horizontal column within the cluster.
    pub column: usize,
    /// Stacking depth within the column.
    pub sub_index: usize,
    /// Columns reserved by the whole cluster; every member shares it so
    /// column widths stay stable as sub-columns fill up.
    pub parallel: usize,
    /// Pixel frame in container coordinates.
    pub frame: PxRect,
}

/// Lay out one day's events.
///
/// Validates the configuration and the event set, clamps, clusters, assigns
/// columns, and computes pixel frames. Records come back in admission order
/// (start ascending, end descending, stable).
///
/// # Errors
///
/// [`LayoutError::Config`] for an invalid configuration, and the event
/// errors listed on [`LayoutError`]; the whole submission is refused.
pub fn layout(
    events: &[Event],
    config: &TimelineConfig,
    geometry: &ContainerGeometry,
) -> Result<Vec<LayoutRecord>, LayoutError> {
    config.validate()?;
    check_events(events, config)?;

    let boundaries = timeline::slot_boundaries(config);
    let stack_overlap = config.stack_overlap_duration();

    let mut placed: Vec<Placed> = events
        .iter()
        .enumerate()
        .map(|(event_index, event)| {
            let interval = clamp::clamp_interval(event, config);
            let end_for_overlap = clamp::end_for_overlap(event, interval, config);
            Placed::unassigned(event_index, interval, end_for_overlap)
        })
        .collect();
    cluster::sort_for_admission(&mut placed);

    let clusters = cluster::build_clusters(&placed);
    let cluster_count = clusters.len();
    for range in clusters {
        // Singletons need no assignment: column 0 of 1, sub-index 0.
        if range.len() >= 2 {
            columns::assign_columns(&mut placed[range], stack_overlap);
        }
    }

    let records = placed
        .iter()
        .map(|p| record_for(&events[p.event_index], p, &boundaries, config, geometry))
        .collect();
    tracing::debug!(
        events = events.len(),
        clusters = cluster_count,
        "layout pass complete"
    );
    Ok(records)
}

/// Lay out the coordinator's add-event placeholder.
///
/// The placeholder is layout-transparent for column math: it is clamped
/// like any event but rendered on its own single-column, full-width path,
/// so the persistent events' clusters never see it.
///
/// # Errors
///
/// [`LayoutError::Config`] for an invalid configuration and
/// [`LayoutError::OutsideDay`] when the interval misses the day window.
pub fn placeholder_record(
    start: Timestamp,
    end: Timestamp,
    config: &TimelineConfig,
    geometry: &ContainerGeometry,
) -> Result<LayoutRecord, LayoutError> {
    config.validate()?;
    let event = Event::placeholder(start, end);
    if outside_day(&event, config) {
        return Err(LayoutError::OutsideDay { id: event.id });
    }

    let boundaries = timeline::slot_boundaries(config);
    let interval = clamp::clamp_interval(&event, config);
    let end_for_overlap = clamp::end_for_overlap(&event, interval, config);
    let placed = Placed::unassigned(0, interval, end_for_overlap);
    Ok(record_for(&event, &placed, &boundaries, config, geometry))
}

fn check_events(events: &[Event], config: &TimelineConfig) -> Result<(), LayoutError> {
    for event in events {
        if event.all_day {
            return Err(LayoutError::AllDayEvent { id: event.id });
        }
        if event.kind == EventKind::Placeholder {
            return Err(LayoutError::ExternalPlaceholder { id: event.id });
        }
        if outside_day(event, config) {
            return Err(LayoutError::OutsideDay { id: event.id });
        }
    }
    Ok(())
}

fn outside_day(event: &Event, config: &TimelineConfig) -> bool {
    event.end <= config.day_start || event.start >= config.day_end
}

fn record_for(
    event: &Event,
    placed: &Placed,
    boundaries: &[Timestamp],
    config: &TimelineConfig,
    geometry: &ContainerGeometry,
) -> LayoutRecord {
    LayoutRecord {
        id: event.id,
        kind: event.kind,
        interval: placed.interval,
        column: placed.column,
        sub_index: placed.sub_index,
        parallel: placed.parallel,
        frame: frame_for(event, placed, boundaries, config, geometry),
    }
}

/// Pixel frame for one placed event.
///
/// Vertical extents use the stepwise slot mapping, clamped so the frame is
/// at least `min_event_height` tall and never leaves the container; an
/// event whose raw end reaches the next day pins to the container bottom.
/// Horizontally the cluster's width splits evenly across `parallel`
/// columns, with stacked sub-slots inset by one spacing step each.
fn frame_for(
    event: &Event,
    placed: &Placed,
    boundaries: &[Timestamp],
    config: &TimelineConfig,
    geometry: &ContainerGeometry,
) -> PxRect {
    let top = geometry.top;
    let bottom = geometry.bottom();
    let min_height = config.min_event_height;
    let spacing = config.event_spacing;

    let event_top = timeline::pixel_y(boundaries, top, geometry.height, event.start)
        .min(bottom - min_height);
    let event_bottom = if event.end >= config.day_end {
        bottom
    } else {
        (timeline::pixel_y(boundaries, top, geometry.height, event.end) - spacing)
            .max(event_top + min_height)
    };

    let sub_width = geometry.width / placed.parallel as f32;
    let sub_left = geometry.left + sub_width * placed.column as f32 + spacing;

    PxRect::new(
        sub_left + placed.sub_index as f32 * spacing,
        event_top + spacing,
        sub_left + sub_width - spacing,
        event_bottom,
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use daygrid_core::time::Millis;

    fn config() -> TimelineConfig {
        let start = Timestamp::from_unix_millis(0);
        TimelineConfig::new(start, start + Millis::DAY)
    }

    fn geometry() -> ContainerGeometry {
        ContainerGeometry::new(0.0, 0.0, 200.0, 500.0)
    }

    fn timed(id: u64, start_min: i64, end_min: i64) -> Event {
        Event::new(
            EventId(id),
            Timestamp::from_unix_millis(start_min * 60_000),
            Timestamp::from_unix_millis(end_min * 60_000),
        )
    }

    #[test]
    fn empty_submission_yields_no_records() {
        let records = layout(&[], &config(), &geometry()).unwrap();
        assert!(records.is_empty());
    }

    #[test]
    fn all_day_event_is_refused() {
        let start = Timestamp::from_unix_millis(0);
        let event = Event::all_day(EventId(3), start, start + Millis::DAY);
        assert_eq!(
            layout(&[event], &config(), &geometry()),
            Err(LayoutError::AllDayEvent { id: EventId(3) })
        );
    }

    #[test]
    fn external_placeholder_is_refused() {
        let event = Event::placeholder(
            Timestamp::from_unix_millis(0),
            Timestamp::from_unix_millis(60_000),
        );
        assert_eq!(
            layout(&[event], &config(), &geometry()),
            Err(LayoutError::ExternalPlaceholder {
                id: EventId::PLACEHOLDER
            })
        );
    }

    #[test]
    fn wholly_outside_event_is_refused() {
        // Ends exactly at day start: outside by the exclusive comparison.
        assert_eq!(
            layout(&[timed(4, -60, 0)], &config(), &geometry()),
            Err(LayoutError::OutsideDay { id: EventId(4) })
        );
        assert_eq!(
            layout(&[timed(5, 24 * 60, 25 * 60)], &config(), &geometry()),
            Err(LayoutError::OutsideDay { id: EventId(5) })
        );
        // Touching the day from either side is accepted.
        assert!(layout(&[timed(6, -60, 1)], &config(), &geometry()).is_ok());
    }

    #[test]
    fn refusal_produces_no_partial_layout() {
        let events = [timed(1, 600, 660), Event::all_day(EventId(2), config().day_start, config().day_end)];
        assert!(layout(&events, &config(), &geometry()).is_err());
    }

    #[test]
    fn frame_spans_full_width_for_singleton() {
        let config = config().with_event_spacing(2.0);
        let records = layout(&[timed(1, 600, 660)], &config, &geometry()).unwrap();
        let frame = records[0].frame;
        assert_eq!(frame.left, 2.0);
        // Spacing insets the left edge only; the right edge is the column's.
        assert_eq!(frame.right, 200.0);
        // 25 hourly boundaries over 500 px: slot 10 tops at 200 px.
        assert_eq!(frame.top, 500.0 * 10.0 / 25.0 + 2.0);
    }

    #[test]
    fn frame_pins_to_bottom_when_end_reaches_next_day() {
        let records = layout(&[timed(1, 23 * 60, 24 * 60)], &config(), &geometry()).unwrap();
        assert_eq!(records[0].frame.bottom, 500.0);
    }

    #[test]
    fn placeholder_record_is_full_width() {
        let config = config();
        let record = placeholder_record(
            Timestamp::from_unix_millis(14 * 3_600_000),
            Timestamp::from_unix_millis(14 * 3_600_000 + 1_800_000),
            &config,
            &geometry(),
        )
        .unwrap();
        assert_eq!(record.kind, EventKind::Placeholder);
        assert_eq!(record.id, EventId::PLACEHOLDER);
        assert_eq!(record.parallel, 1);
        assert_eq!(record.column, 0);
        assert_eq!(record.frame.width(), 200.0);
    }

    #[test]
    fn placeholder_outside_day_is_refused() {
        let config = config();
        let error = placeholder_record(
            config.day_end,
            config.day_end + Millis::HOUR,
            &config,
            &geometry(),
        )
        .unwrap_err();
        assert_eq!(error, LayoutError::OutsideDay { id: EventId::PLACEHOLDER });
    }
}
