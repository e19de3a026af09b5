//! Motion module for bipolar-stepper.
//!
//! Provides the shared motion state, the timer-driven scheduler that
//! consumes it, and the periodic timer contract.

mod scheduler;
mod state;
mod timer;

pub use scheduler::{Scheduler, TickOutcome};
pub use state::{Direction, MotionSnapshot, MotionState, RotationMode, RunFlag};
pub use timer::{Fired, PeriodicSchedule, Reschedule};
