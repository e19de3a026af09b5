//! Drive configuration from TOML.

use serde::Deserialize;

use super::units::{Microseconds, Ticks};
use crate::pattern::DriveMode;

/// Default timer period: the scheduler is ticked every millisecond.
pub const DEFAULT_TIMER_PERIOD: Microseconds = Microseconds(1000);

/// Default inter-step interval at power-up.
pub const DEFAULT_TICK_INTERVAL: Ticks = Ticks(100);

/// Default change in tick interval per speed command.
pub const DEFAULT_SPEED_STEP: Ticks = Ticks(5);

/// Default wave-mode steps per mechanical rotation.
///
/// 7.5° step angle (SP2575M0206-A): 360 / 7.5 = 48.
pub const DEFAULT_STEPS_PER_ROTATION_WAVE: u16 = 48;

/// Timing and stepping constants for one motor.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct DriveConfig {
    /// Fixed hardware period between scheduler ticks.
    #[serde(rename = "timer_period_us")]
    pub timer_period: Microseconds,

    /// Ticks between steps at power-up.
    pub initial_tick_interval: Ticks,

    /// Amount the tick interval changes per speed command.
    pub speed_step: Ticks,

    /// Steps for one mechanical rotation in wave mode.
    pub steps_per_rotation_wave: u16,

    /// Drive mode at power-up.
    pub initial_drive_mode: DriveMode,
}

impl Default for DriveConfig {
    fn default() -> Self {
        Self {
            timer_period: DEFAULT_TIMER_PERIOD,
            initial_tick_interval: DEFAULT_TICK_INTERVAL,
            speed_step: DEFAULT_SPEED_STEP,
            steps_per_rotation_wave: DEFAULT_STEPS_PER_ROTATION_WAVE,
            initial_drive_mode: DriveMode::Wave,
        }
    }
}

impl DriveConfig {
    /// Wall-clock time between steps at the initial speed.
    pub fn initial_step_period(&self) -> Microseconds {
        self.initial_tick_interval * self.timer_period
    }

    /// Steps needed for one rotation in the given drive mode.
    pub fn steps_per_rotation(&self, mode: DriveMode) -> u32 {
        mode.steps_for_one_rotation(self.steps_per_rotation_wave)
    }
}
