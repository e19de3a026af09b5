//! Motor module for bipolar-stepper.
//!
//! Provides the phase driver that writes excitation patterns to the four
//! coil lines of a bipolar stepper.

mod builder;
mod phase;

use core::fmt;

pub use builder::PhaseDriverBuilder;
pub use phase::PhaseDriver;

/// One of the four coil-drive lines.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum CoilLine {
    /// Coil A, leg 1.
    A1,
    /// Coil A, leg 2.
    A2,
    /// Coil B, leg 1.
    B1,
    /// Coil B, leg 2.
    B2,
}

impl CoilLine {
    /// All lines in write order.
    pub const ALL: [CoilLine; 4] = [CoilLine::A1, CoilLine::A2, CoilLine::B1, CoilLine::B2];

    /// Wiring label as printed on driver boards.
    pub const fn label(self) -> &'static str {
        match self {
            CoilLine::A1 => "1A",
            CoilLine::A2 => "2A",
            CoilLine::B1 => "1B",
            CoilLine::B2 => "2B",
        }
    }
}

impl fmt::Display for CoilLine {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}
