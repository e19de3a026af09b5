//! Unit types for timing quantities.
//!
//! Keeps timer periods (wall-clock microseconds) apart from tick counts
//! (multiples of the timer period) so the two cannot be confused.

use core::ops::Mul;

use serde::Deserialize;

/// A duration in microseconds.
///
/// Used for the fixed hardware timer period.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Default, Deserialize)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[serde(transparent)]
pub struct Microseconds(pub u32);

impl Microseconds {
    /// Create a new Microseconds value.
    #[inline]
    pub const fn new(value: u32) -> Self {
        Self(value)
    }

    /// Get the raw value.
    #[inline]
    pub const fn value(self) -> u32 {
        self.0
    }

    /// Convert to whole milliseconds (truncating).
    #[inline]
    pub const fn as_millis(self) -> u32 {
        self.0 / 1000
    }
}

/// A count of timer ticks.
///
/// The scheduler's inter-step interval is expressed in ticks; with the
/// default 1 ms timer period one tick is one millisecond.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Default, Deserialize)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[serde(transparent)]
pub struct Ticks(pub u16);

impl Ticks {
    /// Create a new Ticks value.
    #[inline]
    pub const fn new(value: u16) -> Self {
        Self(value)
    }

    /// Get the raw value.
    #[inline]
    pub const fn value(self) -> u16 {
        self.0
    }

    /// Whether this is zero ticks.
    #[inline]
    pub const fn is_zero(self) -> bool {
        self.0 == 0
    }

    /// Wall-clock duration of this many ticks at the given timer period.
    #[inline]
    pub fn duration(self, period: Microseconds) -> Microseconds {
        Microseconds(period.0.saturating_mul(u32::from(self.0)))
    }
}

impl Mul<Microseconds> for Ticks {
    type Output = Microseconds;

    fn mul(self, rhs: Microseconds) -> Self::Output {
        self.duration(rhs)
    }
}
