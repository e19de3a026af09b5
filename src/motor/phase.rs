//! Phase driver.
//!
//! Generic over four embedded-hal 1.0 output pins, one per coil line.

use embedded_hal::digital::{OutputPin, PinState};

use crate::error::MotorError;
use crate::pattern::ExcitationPattern;

use super::builder::PhaseDriverBuilder;
use super::CoilLine;

/// Writes excitation patterns to the four coil lines.
///
/// Generic over:
/// - `A1`, `A2`: coil A leg pins (must implement `OutputPin`)
/// - `B1`, `B2`: coil B leg pins (must implement `OutputPin`)
///
/// The driver owns its pins exclusively; nothing else may touch the coil
/// lines while it exists.
#[derive(Debug)]
pub struct PhaseDriver<A1, A2, B1, B2>
where
    A1: OutputPin,
    A2: OutputPin,
    B1: OutputPin,
    B2: OutputPin,
{
    /// Coil A, leg 1.
    a1: A1,

    /// Coil A, leg 2.
    a2: A2,

    /// Coil B, leg 1.
    b1: B1,

    /// Coil B, leg 2.
    b2: B2,

    /// Last pattern written (all four lines attempted).
    last_applied: Option<ExcitationPattern>,
}

impl<A1, A2, B1, B2> PhaseDriver<A1, A2, B1, B2>
where
    A1: OutputPin,
    A2: OutputPin,
    B1: OutputPin,
    B2: OutputPin,
{
    /// Create a driver from all four coil pins.
    ///
    /// No pin is written until the first [`apply`](Self::apply).
    pub fn new(a1: A1, a2: A2, b1: B1, b2: B2) -> Self {
        Self {
            a1,
            a2,
            b1,
            b2,
            last_applied: None,
        }
    }

    /// Start building a driver pin by pin.
    pub fn builder() -> PhaseDriverBuilder<A1, A2, B1, B2> {
        PhaseDriverBuilder::new()
    }

    /// Write a pattern to the four coil lines.
    ///
    /// All four lines are written even if one fails; the first failure is
    /// returned.
    pub fn apply(&mut self, pattern: ExcitationPattern) -> Result<(), MotorError> {
        let a1 = write_line(&mut self.a1, pattern.a1, CoilLine::A1);
        let a2 = write_line(&mut self.a2, pattern.a2, CoilLine::A2);
        let b1 = write_line(&mut self.b1, pattern.b1, CoilLine::B1);
        let b2 = write_line(&mut self.b2, pattern.b2, CoilLine::B2);

        self.last_applied = Some(pattern);

        a1.and(a2).and(b1).and(b2)
    }

    /// De-energize all four coil lines.
    pub fn release(&mut self) -> Result<(), MotorError> {
        self.apply(ExcitationPattern::RELEASED)
    }

    /// The last pattern written, if any.
    #[inline]
    pub fn last_applied(&self) -> Option<ExcitationPattern> {
        self.last_applied
    }

    /// Give the pins back.
    pub fn into_pins(self) -> (A1, A2, B1, B2) {
        (self.a1, self.a2, self.b1, self.b2)
    }
}

fn write_line<P: OutputPin>(pin: &mut P, high: bool, line: CoilLine) -> Result<(), MotorError> {
    pin.set_state(PinState::from(high))
        .map_err(|_| MotorError::PinError(line))
}
