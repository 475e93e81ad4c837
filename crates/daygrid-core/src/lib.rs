#![forbid(unsafe_code)]

//! Core primitives for the daygrid event layout engine.
//!
//! This crate holds the shared vocabulary the layout and runtime crates are
//! built from:
//!
//! - [`time`] - millisecond instants ([`Timestamp`]) and spans ([`Millis`])
//! - [`event`] - the event model ([`Event`], [`EventId`], [`EventKind`])
//! - [`config`] - the day-window configuration ([`TimelineConfig`])
//! - [`geometry`] - pixel-space boxes ([`ContainerGeometry`], [`PxRect`])
//!
//! Everything here is plain data: no I/O, no clocks, no rendering.

pub mod config;
pub mod event;
pub mod geometry;
pub mod time;

pub use config::{DEFAULT_HOUR_HEIGHT, DEFAULT_TIME_CYCLE, TimelineConfig, TimelineConfigError};
pub use event::{Event, EventId, EventKind};
pub use geometry::{ContainerGeometry, PxRect};
pub use time::{Millis, Timestamp};
