#![forbid(unsafe_code)]

//! Timeline configuration.
//!
//! A [`TimelineConfig`] describes one day window plus the pixel-space knobs
//! the layout pass derives its time-domain tolerances from. Nothing derived
//! is stored: minimum visual duration, spacing allowance, and stack-overlap
//! allowance are recomputed from the current scale on every use, so a zoom
//! (hour-height) change is a plain configuration swap.

use std::fmt;

use crate::time::{Millis, Timestamp};

/// Default slot cycle: one hour.
pub const DEFAULT_TIME_CYCLE: Millis = Millis::HOUR;
/// Default vertical scale in pixels per hour.
pub const DEFAULT_HOUR_HEIGHT: f32 = 60.0;

/// Configuration for laying out one day's events.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TimelineConfig {
    /// Start of the day window (inclusive).
    pub day_start: Timestamp,
    /// End of the day window (exclusive), normally `day_start + 24h`.
    pub day_end: Timestamp,
    /// Length of one time slot; boundaries are generated at this cycle.
    pub time_cycle: Millis,
    /// Vertical scale: pixels per hour. Must be positive.
    pub hour_height: f32,
    /// Lower bound for `hour_height`; `0` disables the bound.
    pub hour_height_min: f32,
    /// Upper bound for `hour_height`; `0` disables the bound.
    pub hour_height_max: f32,
    /// Minimum visual event height in pixels.
    pub min_event_height: f32,
    /// Horizontal/vertical gap between event frames in pixels.
    pub event_spacing: f32,
    /// Pixel overlap two events may share before they are forced into
    /// separate columns instead of stacked sub-slots.
    pub stack_overlap: f32,
}

impl TimelineConfig {
    /// A configuration for the given day window with default knobs.
    #[must_use]
    pub const fn new(day_start: Timestamp, day_end: Timestamp) -> Self {
        Self {
            day_start,
            day_end,
            time_cycle: DEFAULT_TIME_CYCLE,
            hour_height: DEFAULT_HOUR_HEIGHT,
            hour_height_min: 0.0,
            hour_height_max: 0.0,
            min_event_height: 0.0,
            event_spacing: 0.0,
            stack_overlap: 0.0,
        }
    }

    /// Set the slot cycle length.
    #[must_use]
    pub const fn with_time_cycle(mut self, cycle: Millis) -> Self {
        self.time_cycle = cycle;
        self
    }

    /// Set the vertical scale, coerced into the configured bounds.
    #[must_use]
    pub fn with_hour_height(mut self, hour_height: f32) -> Self {
        self.hour_height = self.coerce_hour_height(hour_height);
        self
    }

    /// Set the hour-height bounds (`0` disables a bound) and re-coerce the
    /// current scale into them.
    #[must_use]
    pub fn with_hour_height_bounds(mut self, min: f32, max: f32) -> Self {
        self.hour_height_min = min;
        self.hour_height_max = max;
        self.hour_height = self.coerce_hour_height(self.hour_height);
        self
    }

    /// Set the minimum visual event height in pixels.
    #[must_use]
    pub const fn with_min_event_height(mut self, px: f32) -> Self {
        self.min_event_height = px;
        self
    }

    /// Set the inter-event spacing in pixels.
    #[must_use]
    pub const fn with_event_spacing(mut self, px: f32) -> Self {
        self.event_spacing = px;
        self
    }

    /// Set the stack-overlap allowance in pixels.
    #[must_use]
    pub const fn with_stack_overlap(mut self, px: f32) -> Self {
        self.stack_overlap = px;
        self
    }

    fn coerce_hour_height(&self, value: f32) -> f32 {
        let mut v = value;
        if self.hour_height_min > 0.0 && v < self.hour_height_min {
            v = self.hour_height_min;
        }
        if self.hour_height_max > 0.0 && v > self.hour_height_max {
            v = self.hour_height_max;
        }
        v
    }

    /// Validate the configuration.
    ///
    /// Rejected: a day window that is not forward, a non-positive slot
    /// cycle, a non-positive vertical scale, and non-finite or negative
    /// pixel metrics.
    pub fn validate(&self) -> Result<(), TimelineConfigError> {
        if self.day_end <= self.day_start {
            return Err(TimelineConfigError::DayEndNotAfterStart {
                day_start: self.day_start,
                day_end: self.day_end,
            });
        }
        if !self.time_cycle.is_positive() {
            return Err(TimelineConfigError::NonPositiveTimeCycle {
                time_cycle: self.time_cycle,
            });
        }
        if !(self.hour_height.is_finite() && self.hour_height > 0.0) {
            return Err(TimelineConfigError::NonPositiveHourHeight {
                hour_height: self.hour_height,
            });
        }
        for (metric, value) in [
            ("min_event_height", self.min_event_height),
            ("event_spacing", self.event_spacing),
            ("stack_overlap", self.stack_overlap),
        ] {
            if !(value.is_finite() && value >= 0.0) {
                return Err(TimelineConfigError::InvalidPixelMetric { metric, value });
            }
        }
        Ok(())
    }

    /// Length of the day window.
    #[inline]
    #[must_use]
    pub fn day_len(&self) -> Millis {
        self.day_end - self.day_start
    }

    /// Minimum visual duration derived from `min_event_height` at the
    /// current scale, capped at the day length.
    #[must_use]
    pub fn min_event_duration(&self) -> Millis {
        self.px_to_millis(self.min_event_height).min(self.day_len())
    }

    /// Inter-event spacing converted to a time span at the current scale.
    #[must_use]
    pub fn spacing_duration(&self) -> Millis {
        self.px_to_millis(self.event_spacing)
    }

    /// Stack-overlap allowance converted to a time span at the current scale.
    #[must_use]
    pub fn stack_overlap_duration(&self) -> Millis {
        self.px_to_millis(self.stack_overlap)
    }

    fn px_to_millis(&self, px: f32) -> Millis {
        Millis((px / self.hour_height * Millis::HOUR.as_i64() as f32) as i64)
    }
}

/// Configuration-time errors.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum TimelineConfigError {
    /// The day window is empty or reversed.
    DayEndNotAfterStart {
        /// Configured window start.
        day_start: Timestamp,
        /// Configured window end.
        day_end: Timestamp,
    },
    /// The slot cycle is zero or negative.
    NonPositiveTimeCycle {
        /// Configured cycle.
        time_cycle: Millis,
    },
    /// The vertical scale is zero, negative, or not finite.
    NonPositiveHourHeight {
        /// Configured scale.
        hour_height: f32,
    },
    /// A pixel metric is negative or not finite.
    InvalidPixelMetric {
        /// Which metric was rejected.
        metric: &'static str,
        /// Rejected value.
        value: f32,
    },
}

impl fmt::Display for TimelineConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::DayEndNotAfterStart { day_start, day_end } => {
                write!(f, "day end {day_end} must be after day start {day_start}")
            }
            Self::NonPositiveTimeCycle { time_cycle } => {
                write!(f, "time cycle must be positive (got {time_cycle})")
            }
            Self::NonPositiveHourHeight { hour_height } => {
                write!(f, "hour height must be positive (got {hour_height})")
            }
            Self::InvalidPixelMetric { metric, value } => {
                write!(f, "{metric} must be finite and non-negative (got {value})")
            }
        }
    }
}

impl std::error::Error for TimelineConfigError {}
