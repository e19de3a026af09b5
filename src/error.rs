//! Error types for bipolar-stepper.
//!
//! Provides unified error handling across configuration and motor output.
//! Unrecognized command bytes are deliberately not represented here: they are
//! dropped by the interpreter without any diagnostic.

use core::fmt;

use crate::motor::CoilLine;

/// Result type alias using the library's Error type.
pub type Result<T> = core::result::Result<T, Error>;

/// Unified error type for all bipolar-stepper operations.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Error {
    /// Configuration parsing, validation or initialization error
    Config(ConfigError),
    /// Motor output error
    Motor(MotorError),
}

/// Configuration-related errors.
///
/// All of these are fatal: the firmware must not start the scheduler after
/// receiving one.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ConfigError {
    /// Failed to parse TOML configuration
    ParseError(heapless::String<128>),
    /// A coil output was not supplied before the phase driver was built
    MissingCoilPin(CoilLine),
    /// Timer period must be > 0 microseconds
    InvalidTimerPeriod(u32),
    /// Tick interval must be > 0 ticks
    InvalidTickInterval(u16),
    /// Speed step must be > 0 ticks
    InvalidSpeedStep(u16),
    /// Steps per rotation must be > 0
    InvalidStepsPerRotation(u16),
    /// File I/O error (std only)
    #[cfg(feature = "std")]
    IoError(heapless::String<128>),
}

/// Motor output errors.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum MotorError {
    /// Writing a coil line failed
    PinError(CoilLine),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::Config(e) => write!(f, "Configuration error: {}", e),
            Error::Motor(e) => write!(f, "Motor error: {}", e),
        }
    }
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::ParseError(msg) => write!(f, "Parse error: {}", msg),
            ConfigError::MissingCoilPin(line) => {
                write!(f, "No output pin supplied for coil line {}", line)
            }
            ConfigError::InvalidTimerPeriod(v) => {
                write!(f, "Invalid timer period: {} us. Must be > 0", v)
            }
            ConfigError::InvalidTickInterval(v) => {
                write!(f, "Invalid tick interval: {}. Must be > 0", v)
            }
            ConfigError::InvalidSpeedStep(v) => write!(f, "Invalid speed step: {}. Must be > 0", v),
            ConfigError::InvalidStepsPerRotation(v) => {
                write!(f, "Invalid steps per rotation: {}. Must be > 0", v)
            }
            #[cfg(feature = "std")]
            ConfigError::IoError(msg) => write!(f, "I/O error: {}", msg),
        }
    }
}

impl fmt::Display for MotorError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MotorError::PinError(line) => write!(f, "GPIO write failed on coil line {}", line),
        }
    }
}

// Conversion impls
impl From<ConfigError> for Error {
    fn from(e: ConfigError) -> Self {
        Error::Config(e)
    }
}

impl From<MotorError> for Error {
    fn from(e: MotorError) -> Self {
        Error::Motor(e)
    }
}

#[cfg(feature = "std")]
impl std::error::Error for Error {}

#[cfg(feature = "std")]
impl std::error::Error for ConfigError {}

#[cfg(feature = "std")]
impl std::error::Error for MotorError {}
