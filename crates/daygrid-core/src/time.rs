#![forbid(unsafe_code)]

//! Millisecond time primitives.
//!
//! The layout engine works on a single day window and does all of its
//! arithmetic in whole milliseconds: absolute instants as [`Timestamp`]
//! (milliseconds since the Unix epoch) and spans as [`Millis`]. Both are
//! plain `i64` newtypes so every comparison and clamp is exact and
//! deterministic.

use std::fmt;
use std::ops::{Add, AddAssign, Neg, Sub, SubAssign};

/// A signed span of time in whole milliseconds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct Millis(pub i64);

impl Millis {
    /// Zero-length span.
    pub const ZERO: Self = Self(0);
    /// One second.
    pub const SECOND: Self = Self(1_000);
    /// One minute.
    pub const MINUTE: Self = Self(60_000);
    /// One hour.
    pub const HOUR: Self = Self(3_600_000);
    /// One civil day (24 hours).
    pub const DAY: Self = Self(86_400_000);

    /// Span of `minutes` whole minutes.
    #[inline]
    #[must_use]
    pub const fn from_minutes(minutes: i64) -> Self {
        Self(minutes * 60_000)
    }

    /// Span of `hours` whole hours.
    #[inline]
    #[must_use]
    pub const fn from_hours(hours: i64) -> Self {
        Self(hours * 3_600_000)
    }

    /// Raw millisecond count.
    #[inline]
    #[must_use]
    pub const fn as_i64(self) -> i64 {
        self.0
    }

    /// True when the span is strictly positive.
    #[inline]
    #[must_use]
    pub const fn is_positive(self) -> bool {
        self.0 > 0
    }

    /// Clamp into `[lo, hi]`. When `lo > hi` the upper bound wins.
    #[inline]
    #[must_use]
    pub fn clamp_range(self, lo: Self, hi: Self) -> Self {
        Self(self.0.max(lo.0).min(hi.0))
    }
}

impl Add for Millis {
    type Output = Millis;
    #[inline]
    fn add(self, rhs: Millis) -> Millis {
        Millis(self.0 + rhs.0)
    }
}

impl AddAssign for Millis {
    #[inline]
    fn add_assign(&mut self, rhs: Millis) {
        self.0 += rhs.0;
    }
}

impl Sub for Millis {
    type Output = Millis;
    #[inline]
    fn sub(self, rhs: Millis) -> Millis {
        Millis(self.0 - rhs.0)
    }
}

impl SubAssign for Millis {
    #[inline]
    fn sub_assign(&mut self, rhs: Millis) {
        self.0 -= rhs.0;
    }
}

impl Neg for Millis {
    type Output = Millis;
    #[inline]
    fn neg(self) -> Millis {
        Millis(-self.0)
    }
}

impl fmt::Display for Millis {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}ms", self.0)
    }
}

/// An absolute instant as milliseconds since the Unix epoch.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct Timestamp(pub i64);

impl Timestamp {
    /// Construct from milliseconds since the Unix epoch.
    #[inline]
    #[must_use]
    pub const fn from_unix_millis(millis: i64) -> Self {
        Self(millis)
    }

    /// Milliseconds since the Unix epoch.
    #[inline]
    #[must_use]
    pub const fn unix_millis(self) -> i64 {
        self.0
    }
}

impl Add<Millis> for Timestamp {
    type Output = Timestamp;
    #[inline]
    fn add(self, rhs: Millis) -> Timestamp {
        Timestamp(self.0 + rhs.0)
    }
}

impl Sub<Millis> for Timestamp {
    type Output = Timestamp;
    #[inline]
    fn sub(self, rhs: Millis) -> Timestamp {
        Timestamp(self.0 - rhs.0)
    }
}

impl Sub for Timestamp {
    type Output = Millis;
    #[inline]
    fn sub(self, rhs: Timestamp) -> Millis {
        Millis(self.0 - rhs.0)
    }
}

impl fmt::Display for Timestamp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "@{}ms", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn span_arithmetic() {
        assert_eq!(Millis::from_hours(2) + Millis::from_minutes(30), Millis(9_000_000));
        assert_eq!(Millis::HOUR - Millis::MINUTE, Millis(3_540_000));
        assert_eq!(-Millis::SECOND, Millis(-1_000));
    }

    #[test]
    fn timestamp_difference_is_a_span() {
        let a = Timestamp::from_unix_millis(10_000);
        let b = Timestamp::from_unix_millis(4_000);
        assert_eq!(a - b, Millis(6_000));
        assert_eq!(b + Millis(6_000), a);
    }

    #[test]
    fn clamp_range_orders_bounds() {
        assert_eq!(Millis(5).clamp_range(Millis(0), Millis(10)), Millis(5));
        assert_eq!(Millis(-5).clamp_range(Millis(0), Millis(10)), Millis(0));
        assert_eq!(Millis(50).clamp_range(Millis(0), Millis(10)), Millis(10));
        // Inverted bounds: the upper bound wins.
        assert_eq!(Millis(5).clamp_range(Millis(20), Millis(10)), Millis(10));
    }
}
