//! Step pattern generation.
//!
//! Maps a drive mode and sequence position to the on/off state of the four
//! coil lines. Everything here is pure and backed by immutable tables, so it
//! is safe to call from any interrupt context without synchronization.

mod position;
mod tables;

use core::fmt;

use serde::Deserialize;

pub use position::SequencePosition;
pub use tables::TABLE_LEN;

/// On/off state of the four coil-drive lines at one instant.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Hash)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct ExcitationPattern {
    /// Coil A, leg 1.
    pub a1: bool,
    /// Coil A, leg 2.
    pub a2: bool,
    /// Coil B, leg 1.
    pub b1: bool,
    /// Coil B, leg 2.
    pub b2: bool,
}

impl ExcitationPattern {
    /// All lines off.
    pub const RELEASED: Self = Self::new(false, false, false, false);

    /// Create a pattern from the four line states.
    #[inline]
    pub const fn new(a1: bool, a2: bool, b1: bool, b2: bool) -> Self {
        Self { a1, a2, b1, b2 }
    }

    /// Line states in write order (A1, A2, B1, B2).
    #[inline]
    pub const fn as_array(self) -> [bool; 4] {
        [self.a1, self.a2, self.b1, self.b2]
    }

    /// Number of energized lines.
    #[inline]
    pub fn energized_lines(self) -> usize {
        self.as_array().iter().filter(|on| **on).count()
    }

    /// Packed as a nibble, A1 in bit 3 down to B2 in bit 0.
    #[inline]
    pub const fn bits(self) -> u8 {
        (self.a1 as u8) << 3 | (self.a2 as u8) << 2 | (self.b1 as u8) << 1 | self.b2 as u8
    }
}

impl fmt::Display for ExcitationPattern {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for on in self.as_array() {
            f.write_str(if on { "1" } else { "0" })?;
        }
        Ok(())
    }
}

/// Stepping scheme.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Hash, Deserialize)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[serde(rename_all = "snake_case")]
#[repr(u8)]
pub enum DriveMode {
    /// One coil line energized at a time.
    #[default]
    Wave = 0,
    /// Two lines energized at a time, higher torque.
    FullStep = 1,
    /// Alternating one and two lines, twice the resolution.
    HalfStep = 2,
}

impl DriveMode {
    /// Every drive mode.
    pub const ALL: [DriveMode; 3] = [DriveMode::Wave, DriveMode::FullStep, DriveMode::HalfStep];

    /// Steps for one mechanical rotation given the wave-mode step count.
    ///
    /// Half-step visits twice as many positions per rotation.
    #[inline]
    pub const fn steps_for_one_rotation(self, steps_for_wave: u16) -> u32 {
        match self {
            DriveMode::Wave | DriveMode::FullStep => steps_for_wave as u32,
            DriveMode::HalfStep => steps_for_wave as u32 * 2,
        }
    }

    /// Human-readable name.
    pub const fn name(self) -> &'static str {
        match self {
            DriveMode::Wave => "wave",
            DriveMode::FullStep => "full step",
            DriveMode::HalfStep => "half step",
        }
    }

    #[inline]
    pub(crate) const fn as_bits(self) -> u8 {
        self as u8
    }

    /// Decode a stored discriminant.
    ///
    /// # Panics
    ///
    /// Panics on a value that is not a drive mode; only `as_bits` writes
    /// these, so any other value is a memory-corruption level defect.
    #[inline]
    pub(crate) fn from_bits(bits: u8) -> Self {
        match bits {
            0 => DriveMode::Wave,
            1 => DriveMode::FullStep,
            2 => DriveMode::HalfStep,
            _ => unreachable!("invalid drive mode discriminant {}", bits),
        }
    }

    fn table(self) -> &'static [ExcitationPattern; TABLE_LEN] {
        match self {
            DriveMode::Wave => &tables::WAVE,
            DriveMode::FullStep => &tables::FULL_STEP,
            DriveMode::HalfStep => &tables::HALF_STEP,
        }
    }
}

impl fmt::Display for DriveMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Excitation pattern for a drive mode at a sequence position.
#[inline]
pub fn pattern_for(mode: DriveMode, position: SequencePosition) -> ExcitationPattern {
    mode.table()[position.index()]
}

/// Steps for one mechanical rotation in `mode`, given the wave-mode count.
#[inline]
pub const fn steps_for_one_rotation(mode: DriveMode, steps_for_wave: u16) -> u32 {
    mode.steps_for_one_rotation(steps_for_wave)
}
