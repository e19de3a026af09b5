//! Unit tests for configuration validation.

use bipolar_stepper::config::{validate_config, validate_drive, DriveConfig, SystemConfig};
use bipolar_stepper::error::{ConfigError, Error};
use bipolar_stepper::{parse_config, Microseconds, Ticks};

/// Test validation of the default configuration.
#[test]
fn test_default_config_passes_validation() {
    assert!(validate_config(&SystemConfig::default()).is_ok());
}

/// Test that every zero-valued constant is rejected with its own error.
#[test]
fn test_zero_values_rejected() {
    let cases = [
        (
            DriveConfig {
                timer_period: Microseconds(0),
                ..DriveConfig::default()
            },
            ConfigError::InvalidTimerPeriod(0),
        ),
        (
            DriveConfig {
                initial_tick_interval: Ticks(0),
                ..DriveConfig::default()
            },
            ConfigError::InvalidTickInterval(0),
        ),
        (
            DriveConfig {
                speed_step: Ticks(0),
                ..DriveConfig::default()
            },
            ConfigError::InvalidSpeedStep(0),
        ),
        (
            DriveConfig {
                steps_per_rotation_wave: 0,
                ..DriveConfig::default()
            },
            ConfigError::InvalidStepsPerRotation(0),
        ),
    ];

    for (drive, expected) in cases {
        assert_eq!(validate_drive(&drive), Err(Error::Config(expected)));
    }
}

/// Test that validation runs as part of parsing.
#[test]
fn test_parse_rejects_zero_tick_interval() {
    let result = parse_config("[drive]\ninitial_tick_interval = 0");
    assert_eq!(
        result,
        Err(Error::Config(ConfigError::InvalidTickInterval(0)))
    );
}

/// Test that a speed step larger than the initial interval is still valid.
#[test]
fn test_large_speed_step_is_valid() {
    let drive = DriveConfig {
        initial_tick_interval: Ticks(3),
        speed_step: Ticks(50),
        ..DriveConfig::default()
    };
    assert!(validate_drive(&drive).is_ok());
}
