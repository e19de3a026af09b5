//! Unit tests for TOML configuration parsing.

use bipolar_stepper::config::{load_config, parse_config, SystemConfig};
use bipolar_stepper::error::{ConfigError, Error};
use bipolar_stepper::{DriveMode, Microseconds, Ticks};

/// Test parsing a complete drive and pin configuration from TOML.
#[test]
fn test_parse_full_config() {
    let toml_str = r#"
[drive]
timer_period_us = 2000
initial_tick_interval = 50
speed_step = 10
steps_per_rotation_wave = 200
initial_drive_mode = "full_step"

[pins]
coil_a1 = 2
coil_a2 = 3
coil_b1 = 4
coil_b2 = 5
"#;

    let config = parse_config(toml_str).expect("Failed to parse TOML");

    assert_eq!(config.drive.timer_period, Microseconds(2000));
    assert_eq!(config.drive.initial_tick_interval, Ticks(50));
    assert_eq!(config.drive.speed_step, Ticks(10));
    assert_eq!(config.drive.steps_per_rotation_wave, 200);
    assert_eq!(config.drive.initial_drive_mode, DriveMode::FullStep);
    assert_eq!(config.pins.as_array(), [2, 3, 4, 5]);
}

/// Test that omitted keys keep the firmware defaults.
#[test]
fn test_partial_drive_section_keeps_defaults() {
    let toml_str = r#"
[drive]
initial_drive_mode = "half_step"
"#;

    let config = parse_config(toml_str).expect("Failed to parse TOML");

    assert_eq!(config.drive.initial_drive_mode, DriveMode::HalfStep);
    assert_eq!(config.drive.initial_tick_interval, Ticks(100));
    assert_eq!(config.drive.steps_per_rotation(DriveMode::HalfStep), 96);
    assert_eq!(config.pins.as_array(), [10, 11, 12, 13]);
}

/// Test that the derived step period follows the tick interval.
#[test]
fn test_initial_step_period() {
    let config: SystemConfig = toml::from_str(
        r#"
[drive]
timer_period_us = 500
initial_tick_interval = 8
"#,
    )
    .expect("Failed to parse TOML");

    assert_eq!(config.drive.initial_step_period(), Microseconds(4000));
}

/// Test that malformed TOML is reported as a parse error.
#[test]
fn test_malformed_toml() {
    let result = parse_config("[drive\nspeed_step = 5");
    assert!(matches!(
        result,
        Err(Error::Config(ConfigError::ParseError(_)))
    ));
}

/// Test that a wrongly typed value is reported as a parse error.
#[test]
fn test_wrong_value_type() {
    let result = parse_config("[drive]\nspeed_step = \"fast\"");
    assert!(matches!(
        result,
        Err(Error::Config(ConfigError::ParseError(_)))
    ));
}

/// Test loading configuration from a file on disk.
#[test]
fn test_load_config_from_file() {
    let path = std::env::temp_dir().join(format!(
        "bipolar-stepper-config-{}.toml",
        std::process::id()
    ));
    std::fs::write(&path, "[drive]\nspeed_step = 7\n").expect("Failed to write config");

    let result = load_config(&path);
    let _ = std::fs::remove_file(&path);

    let config = result.expect("Failed to load config");
    assert_eq!(config.drive.speed_step, Ticks(7));
}
