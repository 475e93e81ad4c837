#![forbid(unsafe_code)]

//! Minimum-visual-duration clamping.
//!
//! Events shorter than the minimum visual duration (derived from the
//! minimum pixel height at the current scale) are stretched, and every
//! interval is confined to the day window. Clamping runs before
//! clustering, so two short back-to-back events can be forced into
//! overlap and split into columns purely by their clamped extents.

use daygrid_core::config::TimelineConfig;
use daygrid_core::event::Event;
use daygrid_core::time::Millis;

/// An event interval clamped to the day window, as millisecond offsets
/// from `day_start`.
///
/// Invariants (given a valid configuration): `end - start >=
/// min_event_duration` and both offsets lie in `[0, day_len]`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ClampedInterval {
    /// Clamped start offset from day start.
    pub start: Millis,
    /// Clamped end offset from day start.
    pub end: Millis,
}

impl ClampedInterval {
    /// Clamped duration.
    #[inline]
    #[must_use]
    pub fn duration(&self) -> Millis {
        self.end - self.start
    }
}

/// Clamp an event to the day window with the minimum-duration rule.
///
/// `start` is confined to `[0, day_len - min_dur]` so the stretched
/// interval always fits; `end` is confined to `[start + min_dur, day_len]`.
#[must_use]
pub fn clamp_interval(event: &Event, config: &TimelineConfig) -> ClampedInterval {
    let day_len = config.day_len();
    let min_dur = config.min_event_duration();
    let start = (event.start - config.day_start).clamp_range(Millis::ZERO, day_len - min_dur);
    let end = (event.end - config.day_start).clamp_range(start + min_dur, day_len);
    ClampedInterval { start, end }
}

/// The contracted end used only for overlap testing.
///
/// The raw end offset is confined to `[start + min_dur - spacing, day_len]`:
/// lowering the floor by the spacing allowance lets near-adjacent events sit
/// in one column instead of stacking artificially.
#[must_use]
pub fn end_for_overlap(event: &Event, clamped: ClampedInterval, config: &TimelineConfig) -> Millis {
    let floor = clamped.start + config.min_event_duration() - config.spacing_duration();
    (event.end - config.day_start).clamp_range(floor, config.day_len())
}
