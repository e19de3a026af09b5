//! Command interpreter - runs in the receive interrupt.

use crate::config::units::Ticks;
use crate::config::{DriveConfig, DEFAULT_SPEED_STEP, DEFAULT_STEPS_PER_ROTATION_WAVE};
use crate::motion::MotionState;

use super::Command;

/// Applies received command bytes to the shared motion state.
///
/// Holds only a shared reference and two constants, so it can be called
/// from an interrupt without any locking of its own.
#[derive(Debug, Clone, Copy)]
pub struct CommandInterpreter<'a> {
    state: &'a MotionState,
    speed_step: Ticks,
    steps_per_rotation_wave: u16,
}

impl<'a> CommandInterpreter<'a> {
    /// Create an interpreter with the default speed step and a 48-step motor.
    pub fn new(state: &'a MotionState) -> Self {
        Self {
            state,
            speed_step: DEFAULT_SPEED_STEP,
            steps_per_rotation_wave: DEFAULT_STEPS_PER_ROTATION_WAVE,
        }
    }

    /// Create an interpreter from configuration.
    pub fn from_config(state: &'a MotionState, config: &DriveConfig) -> Self {
        Self {
            state,
            speed_step: config.speed_step,
            steps_per_rotation_wave: config.steps_per_rotation_wave,
        }
    }

    /// Tick interval change per speed command.
    #[inline]
    pub fn speed_step(&self) -> Ticks {
        self.speed_step
    }

    /// Wave-mode steps per mechanical rotation.
    #[inline]
    pub fn steps_per_rotation_wave(&self) -> u16 {
        self.steps_per_rotation_wave
    }

    /// Handle one received byte.
    ///
    /// Returns the command that was applied, or `None` if the byte was not
    /// recognized (no state is changed in that case).
    pub fn handle(&self, byte: u8) -> Option<Command> {
        let command = Command::from_byte(byte)?;
        self.execute(command);
        Some(command)
    }

    /// Apply a decoded command.
    pub fn execute(&self, command: Command) {
        match command {
            Command::Stop => {
                self.state.stop();
                info!("Stop");
            }
            Command::Run(direction) => {
                self.state.start_continuous(direction);
                info!("Set direction: {}", direction);
            }
            Command::SingleRotation(direction) => {
                let steps = self
                    .state
                    .arm_single_rotation(direction, self.steps_per_rotation_wave);
                info!("Single rotation {}: {} steps", direction, steps);
            }
            Command::SelectDriveMode(mode) => {
                self.state.set_drive_mode(mode);
                info!("Drive mode: {}", mode);
            }
            Command::SlowDown => {
                let interval = self.state.slow_down(self.speed_step);
                info!(
                    "Decreasing speed - waiting {} ticks between steps",
                    interval.0
                );
            }
            Command::SpeedUp => {
                let interval = self.state.speed_up(self.speed_step);
                info!(
                    "Increasing speed - waiting {} ticks between steps",
                    interval.0
                );
            }
            Command::PrintUsage => {
                debug!("usage requested");
            }
        }
    }
}
