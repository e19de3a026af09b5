//! Sequence position tracking.
//!
//! Index into the 8-entry excitation tables, wrapping in both directions.

use super::tables::TABLE_LEN;

/// Position within an excitation table, always in `0..=7`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Hash)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct SequencePosition(u8);

impl SequencePosition {
    /// Number of positions in a sequence.
    pub const LEN: u8 = TABLE_LEN as u8;

    /// Highest valid position.
    pub const LAST: Self = Self(Self::LEN - 1);

    /// Create a position, wrapping values outside `0..=7`.
    #[inline]
    pub const fn new(value: u8) -> Self {
        Self(value % Self::LEN)
    }

    /// Get the raw position.
    #[inline]
    pub const fn value(self) -> u8 {
        self.0
    }

    /// Get the position as a table index.
    #[inline]
    pub const fn index(self) -> usize {
        self.0 as usize
    }

    /// Position after one forward step.
    #[inline]
    pub const fn forward(self) -> Self {
        Self((self.0 + 1) % Self::LEN)
    }

    /// Position after one reverse step.
    #[inline]
    pub const fn reverse(self) -> Self {
        if self.0 == 0 {
            Self::LAST
        } else {
            Self(self.0 - 1)
        }
    }

    /// Move one step forward in place.
    #[inline]
    pub fn advance(&mut self) {
        *self = self.forward();
    }

    /// Move one step back in place.
    #[inline]
    pub fn retreat(&mut self) {
        *self = self.reverse();
    }
}

impl From<SequencePosition> for u8 {
    fn from(position: SequencePosition) -> Self {
        position.0
    }
}
