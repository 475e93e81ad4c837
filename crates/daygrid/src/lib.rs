#![forbid(unsafe_code)]

//! Daygrid public facade crate.
//!
//! Re-exports the stable surface of the layout engine: core data types,
//! the pure [`layout`] pass, and the debounced [`LayoutCoordinator`].
//!
//! # Example
//!
//! ```
//! use daygrid::prelude::*;
//!
//! let start = Timestamp::from_unix_millis(0);
//! let config = TimelineConfig::new(start, start + Millis::DAY);
//! let geometry = ContainerGeometry::new(0.0, 0.0, 300.0, 600.0);
//!
//! let events = [Event::new(
//!     EventId(1),
//!     start + Millis::from_hours(10),
//!     start + Millis::from_hours(11),
//! )];
//! let records = layout(&events, &config, &geometry).unwrap();
//! assert_eq!(records[0].parallel, 1);
//! ```

// --- Core re-exports -------------------------------------------------------

pub use daygrid_core::config::{
    DEFAULT_HOUR_HEIGHT, DEFAULT_TIME_CYCLE, TimelineConfig, TimelineConfigError,
};
pub use daygrid_core::event::{Event, EventId, EventKind};
pub use daygrid_core::geometry::{ContainerGeometry, PxRect};
pub use daygrid_core::time::{Millis, Timestamp};

// --- Layout re-exports -----------------------------------------------------

pub use daygrid_layout::clamp::ClampedInterval;
pub use daygrid_layout::timeline::{pixel_y, slot_at_position, slot_boundaries, slot_index};
pub use daygrid_layout::{LayoutError, LayoutRecord, layout, placeholder_record};

// --- Runtime re-exports ----------------------------------------------------

pub use daygrid_runtime::{DEFAULT_RELAYOUT_DEBOUNCE, LayoutCoordinator, RelayoutDebouncer};

/// Common imports for day-to-day usage.
pub mod prelude {
    pub use crate::{
        ClampedInterval, ContainerGeometry, Event, EventId, EventKind, LayoutCoordinator,
        LayoutError, LayoutRecord, Millis, PxRect, RelayoutDebouncer, TimelineConfig,
        TimelineConfigError, Timestamp, layout,
    };
}
