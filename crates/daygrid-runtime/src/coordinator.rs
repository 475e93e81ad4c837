#![forbid(unsafe_code)]

//! Layout coordination: owned state, validation, placeholder lifecycle,
//! and debounced re-layout.
//!
//! The coordinator runs on one logical task queue and never executes two
//! passes concurrently. Between passes it exclusively owns the event list
//! and the last records; callers receive the records as an immutable
//! snapshot. Rejected submissions leave the previous snapshot intact, so
//! the coordinator stays reusable after a caller contract violation.
//!
//! Structural changes (event set, placeholder) re-lay out synchronously.
//! Parameter-only changes (zoom, geometry) go through
//! [`request_relayout`](LayoutCoordinator::request_relayout) and the
//! debouncer; the caller drives [`tick`](LayoutCoordinator::tick) from its
//! loop and repaints when it reports a completed pass.

use std::time::Instant;

use daygrid_core::config::{TimelineConfig, TimelineConfigError};
use daygrid_core::event::Event;
use daygrid_core::geometry::ContainerGeometry;
use daygrid_core::time::Timestamp;
use daygrid_layout::{LayoutError, LayoutRecord, layout, placeholder_record, timeline};

use crate::debounce::RelayoutDebouncer;

/// Owns one day's layout state and schedules recomputation.
#[derive(Debug)]
pub struct LayoutCoordinator {
    config: TimelineConfig,
    geometry: ContainerGeometry,
    events: Vec<Event>,
    placeholder: Option<Event>,
    records: Vec<LayoutRecord>,
    debouncer: RelayoutDebouncer,
    pass_count: u64,
}

impl LayoutCoordinator {
    /// A coordinator for the given day window and container.
    ///
    /// # Errors
    ///
    /// Returns the validation error for an invalid configuration.
    pub fn new(
        config: TimelineConfig,
        geometry: ContainerGeometry,
    ) -> Result<Self, TimelineConfigError> {
        config.validate()?;
        Ok(Self {
            config,
            geometry,
            events: Vec::new(),
            placeholder: None,
            records: Vec::new(),
            debouncer: RelayoutDebouncer::default(),
            pass_count: 0,
        })
    }

    /// Use a non-default debouncer (shorter delays in tests, for example).
    #[must_use]
    pub fn with_debouncer(mut self, debouncer: RelayoutDebouncer) -> Self {
        self.debouncer = debouncer;
        self
    }

    /// The last computed records, in admission order (placeholder last).
    #[inline]
    #[must_use]
    pub fn records(&self) -> &[LayoutRecord] {
        &self.records
    }

    /// Number of executed layout passes.
    #[inline]
    #[must_use]
    pub const fn pass_count(&self) -> u64 {
        self.pass_count
    }

    /// Current configuration.
    #[inline]
    #[must_use]
    pub const fn config(&self) -> &TimelineConfig {
        &self.config
    }

    /// The active placeholder interval, if any.
    #[must_use]
    pub fn placeholder(&self) -> Option<(Timestamp, Timestamp)> {
        self.placeholder.as_ref().map(|p| (p.start, p.end))
    }

    /// Submit a new event set (and current config/geometry) for layout.
    ///
    /// Synchronous: validates, runs a full pass, and returns the fresh
    /// records. A placeholder that no longer intersects the new day window
    /// is dropped, mirroring a day change.
    ///
    /// # Errors
    ///
    /// Any [`LayoutError`]; the previous snapshot and state are retained.
    pub fn submit(
        &mut self,
        events: Vec<Event>,
        config: TimelineConfig,
        geometry: ContainerGeometry,
    ) -> Result<&[LayoutRecord], LayoutError> {
        let mut records = layout(&events, &config, &geometry)?;
        let placeholder = match self.placeholder {
            Some(p) => match placeholder_record(p.start, p.end, &config, &geometry) {
                Ok(record) => {
                    records.push(record);
                    Some(p)
                }
                Err(_) => {
                    tracing::debug!("placeholder no longer fits the day window, dropped");
                    None
                }
            },
            None => None,
        };

        self.events = events;
        self.config = config;
        self.geometry = geometry;
        self.placeholder = placeholder;
        self.records = records;
        self.pass_count += 1;
        tracing::debug!(records = self.records.len(), "submission laid out");
        Ok(&self.records)
    }

    /// Set (or replace) the single add-event placeholder and re-lay out.
    ///
    /// # Errors
    ///
    /// [`LayoutError::OutsideDay`] when the interval misses the day
    /// window; the previous placeholder survives.
    pub fn set_placeholder(
        &mut self,
        start: Timestamp,
        end: Timestamp,
    ) -> Result<&[LayoutRecord], LayoutError> {
        // Validates the interval before any state changes.
        placeholder_record(start, end, &self.config, &self.geometry)?;
        self.placeholder = Some(Event::placeholder(start, end));
        self.run_pass()?;
        Ok(&self.records)
    }

    /// Set the placeholder from a vertical pixel position, snapped to the
    /// enclosing time slot.
    ///
    /// Returns `false` without touching anything when the position maps to
    /// no slot (above the grid or in the sentinel slot).
    ///
    /// # Errors
    ///
    /// Same as [`set_placeholder`](Self::set_placeholder).
    pub fn set_placeholder_at_position(&mut self, y: f32) -> Result<bool, LayoutError> {
        let boundaries = timeline::slot_boundaries(&self.config);
        match timeline::slot_at_position(&boundaries, self.config.hour_height, y) {
            Some((start, end)) => {
                self.set_placeholder(start, end)?;
                Ok(true)
            }
            None => Ok(false),
        }
    }

    /// Remove the placeholder, if any, and re-lay out.
    ///
    /// # Errors
    ///
    /// Propagates pass errors (not reachable while the stored state is
    /// valid, which submission guarantees).
    pub fn clear_placeholder(&mut self) -> Result<&[LayoutRecord], LayoutError> {
        if self.placeholder.take().is_some() {
            self.run_pass()?;
        }
        Ok(&self.records)
    }

    /// Swap in a new configuration (zoom, spacing, day window) and request
    /// a debounced re-layout at `now`.
    ///
    /// # Errors
    ///
    /// Returns the validation error and keeps the old configuration.
    pub fn set_config(
        &mut self,
        config: TimelineConfig,
        now: Instant,
    ) -> Result<(), TimelineConfigError> {
        config.validate()?;
        self.config = config;
        self.request_relayout(now);
        Ok(())
    }

    /// Swap in new container geometry and request a debounced re-layout.
    pub fn set_geometry(&mut self, geometry: ContainerGeometry, now: Instant) {
        self.geometry = geometry;
        self.request_relayout(now);
    }

    /// Request a debounced re-layout for a parameter-only change.
    pub fn request_relayout(&mut self, now: Instant) {
        self.debouncer.request(now);
    }

    /// Drive the debouncer; runs the pending pass when its deadline fires.
    ///
    /// Returns `true` when a pass executed (the caller should repaint).
    ///
    /// # Errors
    ///
    /// Propagates pass errors; the previous snapshot is retained.
    pub fn tick(&mut self, now: Instant) -> Result<bool, LayoutError> {
        if !self.debouncer.poll(now) {
            return Ok(false);
        }
        self.run_pass()?;
        self.debouncer.finish_pass(now);
        Ok(true)
    }

    fn run_pass(&mut self) -> Result<(), LayoutError> {
        let mut records = layout(&self.events, &self.config, &self.geometry)?;
        if let Some(p) = &self.placeholder {
            records.push(placeholder_record(p.start, p.end, &self.config, &self.geometry)?);
        }
        self.records = records;
        self.pass_count += 1;
        tracing::debug!(
            records = self.records.len(),
            pass = self.pass_count,
            "layout pass complete"
        );
        Ok(())
    }
}
