//! Periodic timer contract.
//!
//! The scheduler is driven by a self-rescheduling alarm. After each
//! callback the alarm is re-armed a fixed period after the deadline it was
//! scheduled for, not after the moment the callback finished, so lateness in
//! one callback never accumulates into drift.

use crate::config::units::Microseconds;

/// Instruction returned by a timer callback.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Reschedule {
    period: Microseconds,
}

impl Reschedule {
    /// Fire again `period` after the previous scheduled deadline.
    #[inline]
    pub const fn from_previous_deadline(period: Microseconds) -> Self {
        Self { period }
    }

    /// The re-arm period.
    #[inline]
    pub const fn period(self) -> Microseconds {
        self.period
    }

    /// Offset in the convention of alarm pools where a negative return value
    /// means "relative to the previous scheduled time".
    #[inline]
    pub fn alarm_offset_us(self) -> i64 {
        -i64::from(self.period.0)
    }
}

/// A callback invocation that was due.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Fired {
    /// The deadline the alarm was scheduled for.
    pub deadline_us: u64,
    /// How late the callback ran relative to its deadline.
    pub lateness_us: u64,
}

/// Drift-free deadline tracking for a software-emulated periodic alarm.
///
/// Hosts and tests use this to drive [`Scheduler::on_timer`] the way a
/// hardware alarm pool would.
///
/// [`Scheduler::on_timer`]: super::Scheduler::on_timer
#[derive(Debug, Clone)]
pub struct PeriodicSchedule {
    next_deadline_us: u64,
    fired: u64,
}

impl PeriodicSchedule {
    /// Arm the first deadline one `period` after `start_us`.
    pub fn new(start_us: u64, period: Microseconds) -> Self {
        Self {
            next_deadline_us: start_us.saturating_add(u64::from(period.0)),
            fired: 0,
        }
    }

    /// The next scheduled deadline.
    #[inline]
    pub fn next_deadline_us(&self) -> u64 {
        self.next_deadline_us
    }

    /// Number of callbacks run so far.
    #[inline]
    pub fn fired(&self) -> u64 {
        self.fired
    }

    /// Whether a callback is due at `now_us`.
    #[inline]
    pub fn is_due(&self, now_us: u64) -> bool {
        now_us >= self.next_deadline_us
    }

    /// Run `callback` if it is due at `now_us`, then re-arm from the
    /// deadline using the period it returns.
    ///
    /// If the host fell behind by several periods, each call runs one
    /// overdue callback; call repeatedly until it returns `None` to catch up.
    pub fn fire<F>(&mut self, now_us: u64, callback: F) -> Option<Fired>
    where
        F: FnOnce() -> Reschedule,
    {
        if !self.is_due(now_us) {
            return None;
        }

        let deadline_us = self.next_deadline_us;
        let reschedule = callback();
        // A zero period would fire forever within one instant.
        let period = u64::from(reschedule.period().0.max(1));
        self.next_deadline_us = deadline_us.saturating_add(period);
        self.fired += 1;

        Some(Fired {
            deadline_us,
            lateness_us: now_us - deadline_us,
        })
    }
}
