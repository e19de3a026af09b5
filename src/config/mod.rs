//! Configuration module for bipolar-stepper.
//!
//! Provides the timing and stepping constants of the drive, loadable from
//! TOML files (with `std` feature) or built in code.

mod drive;
mod system;
pub mod units;
#[cfg(feature = "std")]
mod loader;
mod validation;

pub use drive::{
    DriveConfig, DEFAULT_SPEED_STEP, DEFAULT_STEPS_PER_ROTATION_WAVE, DEFAULT_TICK_INTERVAL,
    DEFAULT_TIMER_PERIOD,
};
pub use system::{CoilPinout, SystemConfig};
pub use validation::{validate_config, validate_drive};

#[cfg(feature = "std")]
pub use loader::{load_config, parse_config};

// Re-export unit types at config level
pub use units::{Microseconds, Ticks};
