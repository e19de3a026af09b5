//! Motion scheduler - the periodic timer callback.

use embedded_hal::digital::OutputPin;

use crate::config::units::Microseconds;
use crate::config::DEFAULT_TIMER_PERIOD;
use crate::error::Result;
use crate::motor::PhaseDriver;
use crate::pattern::{pattern_for, DriveMode, SequencePosition};

use super::state::{Direction, MotionState, RotationMode};
use super::timer::Reschedule;

/// What a single tick did.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum TickOutcome {
    /// Run flag is `Stopped`; nothing was read or written beyond the flag.
    Stopped,
    /// Counting down towards the next step.
    Waiting,
    /// One step was taken.
    Stepped {
        /// Direction of the step.
        direction: Direction,
        /// Sequence position after the step.
        position: SequencePosition,
    },
    /// Single-rotation mode with no steps left. The run flag stays set
    /// until a stop or a new start command arrives.
    Stalled,
}

/// Runtime state of the timer-driven stepping loop.
///
/// Owns the phase driver and the sequence position exclusively; reads the
/// shared [`MotionState`] on every tick.
#[derive(Debug)]
pub struct Scheduler<'a, A1, A2, B1, B2>
where
    A1: OutputPin,
    A2: OutputPin,
    B1: OutputPin,
    B2: OutputPin,
{
    /// Shared state written by the command interpreter.
    state: &'a MotionState,

    /// Coil outputs.
    driver: PhaseDriver<A1, A2, B1, B2>,

    /// Current index into the excitation table.
    position: SequencePosition,

    /// Net steps taken since start (forward positive).
    net_steps: i64,

    /// Fixed hardware period between ticks.
    period: Microseconds,
}

impl<'a, A1, A2, B1, B2> Scheduler<'a, A1, A2, B1, B2>
where
    A1: OutputPin,
    A2: OutputPin,
    B1: OutputPin,
    B2: OutputPin,
{
    /// Create a scheduler at sequence position 0 with the default 1 ms period.
    pub fn new(state: &'a MotionState, driver: PhaseDriver<A1, A2, B1, B2>) -> Self {
        Self {
            state,
            driver,
            position: SequencePosition::default(),
            net_steps: 0,
            period: DEFAULT_TIMER_PERIOD,
        }
    }

    /// Set the timer period reported back in [`Reschedule`].
    pub fn with_period(mut self, period: Microseconds) -> Self {
        self.period = period;
        self
    }

    /// Current sequence position.
    #[inline]
    pub fn position(&self) -> SequencePosition {
        self.position
    }

    /// Net steps taken since start (forward positive).
    #[inline]
    pub fn net_steps(&self) -> i64 {
        self.net_steps
    }

    /// Drive mode the next step will use.
    #[inline]
    pub fn drive_mode(&self) -> DriveMode {
        self.state.drive_mode()
    }

    /// Timer period.
    #[inline]
    pub fn period(&self) -> Microseconds {
        self.period
    }

    /// The phase driver.
    #[inline]
    pub fn driver(&self) -> &PhaseDriver<A1, A2, B1, B2> {
        &self.driver
    }

    /// Process one timer tick.
    ///
    /// # Errors
    ///
    /// Returns a motor error if a coil write failed during a step. The
    /// sequence position has already moved; the next step continues from it.
    pub fn tick(&mut self) -> Result<TickOutcome> {
        if !self.state.is_running() {
            return Ok(TickOutcome::Stopped);
        }

        if !self.state.count_down() {
            return Ok(TickOutcome::Waiting);
        }

        let step_due = match self.state.rotation_mode() {
            RotationMode::Continuous => true,
            RotationMode::Single => self.state.take_remaining_step(),
        };

        if !step_due {
            return Ok(TickOutcome::Stalled);
        }

        let direction = self.state.direction();
        let position = self.step(direction)?;
        Ok(TickOutcome::Stepped {
            direction,
            position,
        })
    }

    /// Move one position in `direction` and energize the coils for it.
    ///
    /// Returns the new sequence position.
    pub fn step(&mut self, direction: Direction) -> Result<SequencePosition> {
        match direction {
            Direction::Forward => self.position.advance(),
            Direction::Reverse => self.position.retreat(),
        }
        self.net_steps += direction.sign();

        let pattern = pattern_for(self.state.drive_mode(), self.position);
        trace!("step {} -> {}", self.position.value(), pattern.bits());
        self.driver.apply(pattern)?;

        Ok(self.position)
    }

    /// Timer interrupt entry point.
    ///
    /// Never fails: coil write errors are logged and the alarm is always
    /// re-armed for the next fixed period.
    pub fn on_timer(&mut self) -> Reschedule {
        if let Err(e) = self.tick() {
            warn!("step failed: {}", e);
        }
        Reschedule::from_previous_deadline(self.period)
    }

    /// De-energize the coils.
    pub fn release(&mut self) -> Result<()> {
        self.driver.release()?;
        Ok(())
    }

    /// Give back the phase driver.
    pub fn into_driver(self) -> PhaseDriver<A1, A2, B1, B2> {
        self.driver
    }
}
