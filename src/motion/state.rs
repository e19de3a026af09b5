//! Motion state shared between the receive and timer interrupts.
//!
//! Every field is an independent atomic. The interpreter writes run flag,
//! direction, rotation mode, drive mode, remaining steps and tick interval;
//! the scheduler writes the tick counter and consumes remaining steps. A tick
//! may see any single field at its old or new value, which is harmless
//! because each field's effect stands on its own. The one grouped update,
//! arming a single rotation, runs inside a critical section.

use core::fmt;

use portable_atomic::{AtomicU16, AtomicU32, AtomicU8, Ordering};

use crate::config::units::Ticks;
use crate::config::{DriveConfig, DEFAULT_TICK_INTERVAL};
use crate::pattern::DriveMode;

/// Whether the scheduler should advance the motor.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[repr(u8)]
pub enum RunFlag {
    /// No steps are taken; the tick counter is frozen.
    Stopped = 0,
    /// Steps are taken every tick interval.
    Running = 1,
}

/// Direction of motor motion.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[repr(u8)]
pub enum Direction {
    /// Ascending sequence positions.
    Forward = 0,
    /// Descending sequence positions.
    Reverse = 1,
}

/// Whether motion is bounded by a step count.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[repr(u8)]
pub enum RotationMode {
    /// Unbounded motion until stopped.
    Continuous = 0,
    /// Motion until the remaining-step counter runs out.
    Single = 1,
}

impl RunFlag {
    fn from_bits(bits: u8) -> Self {
        match bits {
            0 => RunFlag::Stopped,
            1 => RunFlag::Running,
            _ => unreachable!("invalid run flag {}", bits),
        }
    }
}

impl Direction {
    /// Get the sign multiplier.
    #[inline]
    pub fn sign(self) -> i64 {
        match self {
            Direction::Forward => 1,
            Direction::Reverse => -1,
        }
    }

    fn from_bits(bits: u8) -> Self {
        match bits {
            0 => Direction::Forward,
            1 => Direction::Reverse,
            _ => unreachable!("invalid direction {}", bits),
        }
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Direction::Forward => f.write_str("forwards"),
            Direction::Reverse => f.write_str("reverse"),
        }
    }
}

impl RotationMode {
    fn from_bits(bits: u8) -> Self {
        match bits {
            0 => RotationMode::Continuous,
            1 => RotationMode::Single,
            _ => unreachable!("invalid rotation mode {}", bits),
        }
    }
}

/// Plain copy of every motion state field.
///
/// Fields are read one by one, so a snapshot taken while the interpreter is
/// writing may mix old and new values.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct MotionSnapshot {
    /// Run/stop flag.
    pub run: RunFlag,
    /// Current direction.
    pub direction: Direction,
    /// Continuous or single rotation.
    pub rotation: RotationMode,
    /// Active drive mode.
    pub drive_mode: DriveMode,
    /// Steps left in single-rotation mode.
    pub remaining_steps: u32,
    /// Ticks between steps.
    pub tick_interval: Ticks,
    /// Ticks until the next step.
    pub tick_counter: Ticks,
}

/// Motion state shared by the command interpreter and the scheduler.
///
/// Created once with [`MotionState::new`] (usable in a `static`) and never
/// reinitialized.
#[derive(Debug)]
pub struct MotionState {
    run: AtomicU8,
    direction: AtomicU8,
    rotation: AtomicU8,
    drive_mode: AtomicU8,
    remaining_steps: AtomicU32,
    tick_interval: AtomicU16,
    tick_counter: AtomicU16,
}

impl Default for MotionState {
    fn default() -> Self {
        Self::new(DEFAULT_TICK_INTERVAL)
    }
}

impl MotionState {
    /// Create the power-up state: stopped, forward, continuous, wave drive.
    ///
    /// A zero interval is raised to one tick.
    pub const fn new(initial_tick_interval: Ticks) -> Self {
        let interval = if initial_tick_interval.0 == 0 {
            1
        } else {
            initial_tick_interval.0
        };

        Self {
            run: AtomicU8::new(RunFlag::Stopped as u8),
            direction: AtomicU8::new(Direction::Forward as u8),
            rotation: AtomicU8::new(RotationMode::Continuous as u8),
            drive_mode: AtomicU8::new(DriveMode::Wave as u8),
            remaining_steps: AtomicU32::new(0),
            tick_interval: AtomicU16::new(interval),
            tick_counter: AtomicU16::new(interval),
        }
    }

    /// Create the power-up state from configuration.
    pub fn from_config(config: &DriveConfig) -> Self {
        let state = Self::new(config.initial_tick_interval);
        state.set_drive_mode(config.initial_drive_mode);
        state
    }

    /// Current run flag.
    #[inline]
    pub fn run_flag(&self) -> RunFlag {
        RunFlag::from_bits(self.run.load(Ordering::Acquire))
    }

    /// Whether the run flag is `Running`.
    #[inline]
    pub fn is_running(&self) -> bool {
        self.run_flag() == RunFlag::Running
    }

    /// Current direction.
    #[inline]
    pub fn direction(&self) -> Direction {
        Direction::from_bits(self.direction.load(Ordering::Acquire))
    }

    /// Current rotation mode.
    #[inline]
    pub fn rotation_mode(&self) -> RotationMode {
        RotationMode::from_bits(self.rotation.load(Ordering::Acquire))
    }

    /// Current drive mode.
    #[inline]
    pub fn drive_mode(&self) -> DriveMode {
        DriveMode::from_bits(self.drive_mode.load(Ordering::Acquire))
    }

    /// Steps left in single-rotation mode.
    #[inline]
    pub fn remaining_steps(&self) -> u32 {
        self.remaining_steps.load(Ordering::Acquire)
    }

    /// Ticks between steps.
    #[inline]
    pub fn tick_interval(&self) -> Ticks {
        Ticks(self.tick_interval.load(Ordering::Acquire))
    }

    /// Ticks until the next step.
    #[inline]
    pub fn tick_counter(&self) -> Ticks {
        Ticks(self.tick_counter.load(Ordering::Acquire))
    }

    /// Read every field.
    pub fn snapshot(&self) -> MotionSnapshot {
        MotionSnapshot {
            run: self.run_flag(),
            direction: self.direction(),
            rotation: self.rotation_mode(),
            drive_mode: self.drive_mode(),
            remaining_steps: self.remaining_steps(),
            tick_interval: self.tick_interval(),
            tick_counter: self.tick_counter(),
        }
    }

    /// Set the run flag.
    #[inline]
    pub fn set_run_flag(&self, run: RunFlag) {
        self.run.store(run as u8, Ordering::Release);
    }

    /// Set the direction.
    #[inline]
    pub fn set_direction(&self, direction: Direction) {
        self.direction.store(direction as u8, Ordering::Release);
    }

    /// Set the rotation mode.
    #[inline]
    pub fn set_rotation_mode(&self, rotation: RotationMode) {
        self.rotation.store(rotation as u8, Ordering::Release);
    }

    /// Select the drive mode. Run state and sequence position are untouched.
    #[inline]
    pub fn set_drive_mode(&self, mode: DriveMode) {
        self.drive_mode.store(mode.as_bits(), Ordering::Release);
    }

    /// Set the tick interval, raising zero to one tick.
    #[inline]
    pub fn set_tick_interval(&self, interval: Ticks) {
        self.tick_interval
            .store(interval.0.max(1), Ordering::Release);
    }

    /// Stop on the next tick boundary.
    pub fn stop(&self) {
        self.set_run_flag(RunFlag::Stopped);
    }

    /// Run continuously in `direction`.
    ///
    /// Three independent stores: a tick that lands between them only ever
    /// sees a self-consistent value for each field.
    pub fn start_continuous(&self, direction: Direction) {
        self.set_rotation_mode(RotationMode::Continuous);
        self.set_direction(direction);
        self.set_run_flag(RunFlag::Running);
    }

    /// Run for one mechanical rotation in `direction`.
    ///
    /// The step count is derived from the current drive mode. Rotation mode,
    /// remaining steps, direction and run flag are written inside a critical
    /// section so the timer interrupt never observes them half-updated.
    /// Returns the armed step count.
    pub fn arm_single_rotation(&self, direction: Direction, steps_for_wave: u16) -> u32 {
        critical_section::with(|_| {
            let steps = self.drive_mode().steps_for_one_rotation(steps_for_wave);
            self.set_rotation_mode(RotationMode::Single);
            self.remaining_steps.store(steps, Ordering::Release);
            self.set_direction(direction);
            self.set_run_flag(RunFlag::Running);
            steps
        })
    }

    /// Lengthen the tick interval by `step` (slower), saturating.
    ///
    /// Only the interpreter writes the interval, so load-then-store is safe.
    pub fn slow_down(&self, step: Ticks) -> Ticks {
        let interval = self.tick_interval().0.saturating_add(step.0);
        self.tick_interval.store(interval, Ordering::Release);
        Ticks(interval)
    }

    /// Shorten the tick interval by `step` (faster).
    ///
    /// The interval only shrinks while it is strictly greater than `step`,
    /// so it never reaches zero.
    pub fn speed_up(&self, step: Ticks) -> Ticks {
        let current = self.tick_interval().0;
        if current > step.0 {
            let interval = current - step.0;
            self.tick_interval.store(interval, Ordering::Release);
            Ticks(interval)
        } else {
            Ticks(current)
        }
    }

    /// Count one tick down. Returns `true` when a step is due, reloading
    /// the counter from the current interval.
    ///
    /// Scheduler only.
    pub(crate) fn count_down(&self) -> bool {
        let counter = self.tick_counter.load(Ordering::Acquire);
        if counter <= 1 {
            let reload = self.tick_interval.load(Ordering::Acquire).max(1);
            self.tick_counter.store(reload, Ordering::Release);
            true
        } else {
            self.tick_counter.store(counter - 1, Ordering::Release);
            false
        }
    }

    /// Consume one remaining step. Returns `false` when none are left.
    ///
    /// Compare-and-swap so a concurrent re-arm is never lost or underflowed.
    /// Scheduler only.
    pub(crate) fn take_remaining_step(&self) -> bool {
        self.remaining_steps
            .fetch_update(Ordering::AcqRel, Ordering::Acquire, |n| n.checked_sub(1))
            .is_ok()
    }
}
