//! Builder pattern for PhaseDriver.

use embedded_hal::digital::OutputPin;

use crate::error::{ConfigError, Error, Result};

use super::phase::PhaseDriver;
use super::CoilLine;

/// Builder for creating PhaseDriver instances.
///
/// This is the initialization entry point for the coil outputs: `build`
/// refuses to produce a driver unless all four lines have a pin.
#[derive(Debug)]
pub struct PhaseDriverBuilder<A1, A2, B1, B2>
where
    A1: OutputPin,
    A2: OutputPin,
    B1: OutputPin,
    B2: OutputPin,
{
    a1: Option<A1>,
    a2: Option<A2>,
    b1: Option<B1>,
    b2: Option<B2>,
    release_on_build: bool,
}

impl<A1, A2, B1, B2> Default for PhaseDriverBuilder<A1, A2, B1, B2>
where
    A1: OutputPin,
    A2: OutputPin,
    B1: OutputPin,
    B2: OutputPin,
{
    fn default() -> Self {
        Self::new()
    }
}

impl<A1, A2, B1, B2> PhaseDriverBuilder<A1, A2, B1, B2>
where
    A1: OutputPin,
    A2: OutputPin,
    B1: OutputPin,
    B2: OutputPin,
{
    /// Create a new builder.
    pub fn new() -> Self {
        Self {
            a1: None,
            a2: None,
            b1: None,
            b2: None,
            release_on_build: false,
        }
    }

    /// Set the coil A leg 1 pin.
    pub fn coil_a1(mut self, pin: A1) -> Self {
        self.a1 = Some(pin);
        self
    }

    /// Set the coil A leg 2 pin.
    pub fn coil_a2(mut self, pin: A2) -> Self {
        self.a2 = Some(pin);
        self
    }

    /// Set the coil B leg 1 pin.
    pub fn coil_b1(mut self, pin: B1) -> Self {
        self.b1 = Some(pin);
        self
    }

    /// Set the coil B leg 2 pin.
    pub fn coil_b2(mut self, pin: B2) -> Self {
        self.b2 = Some(pin);
        self
    }

    /// Drive all four lines low as part of `build`.
    ///
    /// Off by default so that building touches no hardware.
    pub fn release_on_build(mut self, release: bool) -> Self {
        self.release_on_build = release;
        self
    }

    /// Build the PhaseDriver.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::MissingCoilPin` naming the first line without a
    /// pin. The caller must treat this as fatal and not start the scheduler.
    /// With `release_on_build`, a failed initial write is returned as a
    /// motor error.
    pub fn build(self) -> Result<PhaseDriver<A1, A2, B1, B2>> {
        let a1 = self.a1.ok_or_else(|| missing(CoilLine::A1))?;
        let a2 = self.a2.ok_or_else(|| missing(CoilLine::A2))?;
        let b1 = self.b1.ok_or_else(|| missing(CoilLine::B1))?;
        let b2 = self.b2.ok_or_else(|| missing(CoilLine::B2))?;

        let mut driver = PhaseDriver::new(a1, a2, b1, b2);
        if self.release_on_build {
            driver.release()?;
        }

        debug!("phase driver initialized");
        Ok(driver)
    }
}

fn missing(line: CoilLine) -> Error {
    error!("no output pin for coil line {}", line);
    Error::Config(ConfigError::MissingCoilPin(line))
}
