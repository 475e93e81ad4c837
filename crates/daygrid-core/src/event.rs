#![forbid(unsafe_code)]

//! Calendar events as seen by the layout engine.

use std::fmt;

use crate::time::{Millis, Timestamp};

/// Opaque, stable event identity.
///
/// Identity is preserved across layout passes so callers can diff the
/// resulting records against their own event store.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct EventId(pub u64);

impl EventId {
    /// Identity reserved for the coordinator-owned add-event placeholder.
    pub const PLACEHOLDER: Self = Self(u64::MAX);
}

impl fmt::Display for EventId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// Whether an event is real or the transient add-event placeholder.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum EventKind {
    /// A regular event supplied by the caller.
    #[default]
    Persistent,
    /// The single transient placeholder representing an in-progress
    /// add-event interaction. Only the coordinator may create one.
    Placeholder,
}

/// A time-interval event on the day timeline.
///
/// `end` is exclusive and must be after `start`. All-day events are flagged
/// rather than modeled structurally; the layout engine refuses them (the
/// caller owns the all-day lane).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Event {
    /// Stable identity across passes.
    pub id: EventId,
    /// Persistent or placeholder.
    pub kind: EventKind,
    /// Inclusive start instant.
    pub start: Timestamp,
    /// Exclusive end instant.
    pub end: Timestamp,
    /// Flagged all-day events must be filtered out by the caller.
    pub all_day: bool,
}

impl Event {
    /// A persistent timed event.
    #[must_use]
    pub const fn new(id: EventId, start: Timestamp, end: Timestamp) -> Self {
        Self {
            id,
            kind: EventKind::Persistent,
            start,
            end,
            all_day: false,
        }
    }

    /// A persistent event flagged as all-day (always rejected on submit).
    #[must_use]
    pub const fn all_day(id: EventId, start: Timestamp, end: Timestamp) -> Self {
        Self {
            id,
            kind: EventKind::Persistent,
            start,
            end,
            all_day: true,
        }
    }

    /// The coordinator-owned add-event placeholder.
    #[must_use]
    pub const fn placeholder(start: Timestamp, end: Timestamp) -> Self {
        Self {
            id: EventId::PLACEHOLDER,
            kind: EventKind::Placeholder,
            start,
            end,
            all_day: false,
        }
    }

    /// Raw (unclamped) duration.
    #[inline]
    #[must_use]
    pub fn duration(&self) -> Millis {
        self.end - self.start
    }
}
