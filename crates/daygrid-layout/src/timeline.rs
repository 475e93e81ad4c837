#![forbid(unsafe_code)]

//! Time-to-pixel mapping over the day's slot grid.
//!
//! The vertical axis is divided into slots of `time_cycle` length. Mapping
//! an instant to a pixel offset is stepwise: an instant maps to the top
//! edge of the slot containing it, not to a smooth fraction within the
//! slot. That edge-of-slot behavior is relied on by the frame math and is
//! covered by tests; do not replace it with linear interpolation.

use daygrid_core::config::TimelineConfig;
use daygrid_core::time::Timestamp;

/// Slot boundaries for the configured day window.
///
/// Steps from `day_start` by `time_cycle` while strictly before `day_end`,
/// then appends one final boundary at or past `day_end`. With a valid
/// configuration the result always has at least two entries.
#[must_use]
pub fn slot_boundaries(config: &TimelineConfig) -> Vec<Timestamp> {
    let mut boundaries = Vec::new();
    let mut t = config.day_start;
    while t < config.day_end {
        boundaries.push(t);
        t = t + config.time_cycle;
    }
    boundaries.push(t);
    boundaries
}

/// Index of the slot containing `t`, or `None` before the first boundary.
///
/// An instant exactly on a boundary belongs to the slot that starts there;
/// instants at or past the final boundary report the last index.
#[must_use]
pub fn slot_index(boundaries: &[Timestamp], t: Timestamp) -> Option<usize> {
    if boundaries.is_empty() || t < boundaries[0] {
        return None;
    }
    match boundaries.binary_search(&t) {
        Ok(index) => Some(index),
        Err(insertion) => Some(insertion - 1),
    }
}

/// Vertical pixel offset for `t` within a container of `height` pixels
/// starting at `top`.
///
/// Instants before the first boundary map to `top`; otherwise the offset is
/// `top + height * slot_index / boundary_count` (stepwise, per slot edge).
#[must_use]
pub fn pixel_y(boundaries: &[Timestamp], top: f32, height: f32, t: Timestamp) -> f32 {
    match slot_index(boundaries, t) {
        None => top,
        Some(index) => top + height * index as f32 / boundaries.len() as f32,
    }
}

/// The slot interval enclosing a vertical position, for touch-to-add.
///
/// Each slot is `hour_height` pixels tall. Positions in or past the final
/// (sentinel) slot yield `None`, as do positions above the grid.
#[must_use]
pub fn slot_at_position(
    boundaries: &[Timestamp],
    hour_height: f32,
    y: f32,
) -> Option<(Timestamp, Timestamp)> {
    if hour_height <= 0.0 || y < 0.0 {
        return None;
    }
    let index = (y / hour_height) as usize;
    if index + 1 >= boundaries.len() {
        return None;
    }
    Some((boundaries[index], boundaries[index + 1]))
}

#[cfg(test)]
mod tests {
    use super::*;
    use daygrid_core::time::Millis;

    fn hour_day() -> TimelineConfig {
        let start = Timestamp::from_unix_millis(0);
        TimelineConfig::new(start, start + Millis::DAY)
    }

    #[test]
    fn hourly_day_has_25_boundaries() {
        let boundaries = slot_boundaries(&hour_day());
        assert_eq!(boundaries.len(), 25);
        assert_eq!(boundaries[0], Timestamp::from_unix_millis(0));
        assert_eq!(*boundaries.last().unwrap(), Timestamp::from_unix_millis(Millis::DAY.as_i64()));
    }

    #[test]
    fn final_boundary_passes_day_end_for_uneven_cycle() {
        let config = hour_day().with_time_cycle(Millis::from_hours(7));
        let boundaries = slot_boundaries(&config);
        // 0, 7, 14, 21, then 28h past the 24h end.
        assert_eq!(boundaries.len(), 5);
        assert!(*boundaries.last().unwrap() >= config.day_end);
    }

    #[test]
    fn slot_lookup_uses_edge_semantics() {
        let boundaries = slot_boundaries(&hour_day());
        let h = Millis::HOUR.as_i64();

        assert_eq!(slot_index(&boundaries, Timestamp::from_unix_millis(-1)), None);
        assert_eq!(slot_index(&boundaries, Timestamp::from_unix_millis(0)), Some(0));
        // Mid-slot instants map to the slot's own index, not a fraction.
        assert_eq!(slot_index(&boundaries, Timestamp::from_unix_millis(h / 2)), Some(0));
        assert_eq!(slot_index(&boundaries, Timestamp::from_unix_millis(h)), Some(1));
        assert_eq!(slot_index(&boundaries, Timestamp::from_unix_millis(25 * h)), Some(24));
    }

    #[test]
    fn pixel_mapping_is_stepwise() {
        let boundaries = slot_boundaries(&hour_day());
        let h = Millis::HOUR.as_i64();
        let height = 250.0;

        assert_eq!(pixel_y(&boundaries, 0.0, height, Timestamp::from_unix_millis(-5)), 0.0);
        assert_eq!(pixel_y(&boundaries, 0.0, height, Timestamp::from_unix_millis(0)), 0.0);
        // 10:00 and 10:30 land on the same edge.
        let ten = pixel_y(&boundaries, 0.0, height, Timestamp::from_unix_millis(10 * h));
        let ten_thirty = pixel_y(&boundaries, 0.0, height, Timestamp::from_unix_millis(10 * h + h / 2));
        assert_eq!(ten, height * 10.0 / 25.0);
        assert_eq!(ten, ten_thirty);
    }

    #[test]
    fn position_maps_to_enclosing_slot() {
        let boundaries = slot_boundaries(&hour_day());
        let (start, end) = slot_at_position(&boundaries, 60.0, 130.0).unwrap();
        assert_eq!(start, Timestamp::from_unix_millis(2 * Millis::HOUR.as_i64()));
        assert_eq!(end, Timestamp::from_unix_millis(3 * Millis::HOUR.as_i64()));

        assert_eq!(slot_at_position(&boundaries, 60.0, -1.0), None);
        // The sentinel boundary does not open a slot.
        assert_eq!(slot_at_position(&boundaries, 60.0, 24.0 * 60.0), None);
    }
}
