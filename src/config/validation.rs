//! Configuration validation.

use crate::error::{ConfigError, Error, Result};

use super::{DriveConfig, SystemConfig};

/// Validate a system configuration.
///
/// Checks:
/// - Timer period is non-zero
/// - Initial tick interval is non-zero (a zero interval would never step)
/// - Speed step is non-zero
/// - Steps per rotation is non-zero
pub fn validate_config(config: &SystemConfig) -> Result<()> {
    validate_drive(&config.drive)
}

/// Validate the drive section on its own.
pub fn validate_drive(config: &DriveConfig) -> Result<()> {
    if config.timer_period.0 == 0 {
        return Err(Error::Config(ConfigError::InvalidTimerPeriod(
            config.timer_period.0,
        )));
    }

    if config.initial_tick_interval.is_zero() {
        return Err(Error::Config(ConfigError::InvalidTickInterval(
            config.initial_tick_interval.0,
        )));
    }

    if config.speed_step.is_zero() {
        return Err(Error::Config(ConfigError::InvalidSpeedStep(
            config.speed_step.0,
        )));
    }

    if config.steps_per_rotation_wave == 0 {
        return Err(Error::Config(ConfigError::InvalidStepsPerRotation(
            config.steps_per_rotation_wave,
        )));
    }

    Ok(())
}
