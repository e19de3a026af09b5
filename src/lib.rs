//! # bipolar-stepper
//!
//! Interrupt-driven bipolar stepper sequencing with a single-byte command
//! protocol.
//!
//! ## Features
//!
//! - **Three drive modes**: wave, full-step and half-step excitation tables
//! - **embedded-hal 1.0**: Four `OutputPin`s drive the coil lines directly
//! - **no_std compatible**: Core library works without standard library
//! - **Interrupt safe**: Shared state is lock-free; the only critical section
//!   is the grouped write that arms a single rotation
//! - **Drift-free timing**: The scheduler re-arms from its previous deadline
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use bipolar_stepper::{CommandInterpreter, MotionState, PhaseDriver, Scheduler, Ticks};
//!
//! static STATE: MotionState = MotionState::new(Ticks(100));
//!
//! // Fatal if any coil pin is missing
//! let driver = PhaseDriver::builder()
//!     .coil_a1(pin_10)
//!     .coil_a2(pin_11)
//!     .coil_b1(pin_12)
//!     .coil_b2(pin_13)
//!     .build()?;
//!
//! let mut scheduler = Scheduler::new(&STATE, driver);
//! let interpreter = CommandInterpreter::new(&STATE);
//!
//! // Receive interrupt
//! interpreter.handle(byte);
//!
//! // 1 ms timer interrupt
//! let reschedule = scheduler.on_timer();
//! ```
//!
//! ## Feature Flags
//!
//! - `std` (default): Enables file I/O and TOML parsing
//! - `alloc`: Enables heap allocation for no_std with allocator
//! - `defmt`: Enables defmt logging for embedded targets
//! - `log`: Enables logging through the `log` facade
//! - `critical-section-atomics`: Atomics via critical sections on targets without CAS
//!
//! The crate takes critical sections through the `critical-section` crate but
//! never provides an implementation. The application supplies one: its HAL,
//! or `critical-section/std` on a host.

#![cfg_attr(not(feature = "std"), no_std)]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![deny(unsafe_code)]

#[cfg(feature = "alloc")]
extern crate alloc;

#[cfg(all(test, not(feature = "std")))]
extern crate std;

// Must come first so the logging macros are visible to every module below.
mod fmt;

// Core modules
pub mod command;
pub mod config;
pub mod error;
pub mod motion;
pub mod motor;
pub mod pattern;

// Re-exports for ergonomic API
pub use command::{Command, CommandInterpreter, USAGE};
pub use config::{validate_config, DriveConfig, SystemConfig};
pub use error::{Error, Result};
pub use motion::{
    Direction, MotionSnapshot, MotionState, PeriodicSchedule, Reschedule, RotationMode, RunFlag,
    Scheduler, TickOutcome,
};
pub use motor::{CoilLine, PhaseDriver, PhaseDriverBuilder};
pub use pattern::{pattern_for, steps_for_one_rotation, DriveMode, ExcitationPattern, SequencePosition};

// Configuration loading (std only)
#[cfg(feature = "std")]
pub use config::{load_config, parse_config};

// Unit types
pub use config::units::{Microseconds, Ticks};
