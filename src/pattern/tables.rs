//! Excitation tables for the three drive modes.
//!
//! Every table has eight entries so one wrap-around index serves all modes.
//! Wave and full-step only have four distinct states; they are listed twice.

use super::ExcitationPattern;

/// Length of every excitation table.
pub const TABLE_LEN: usize = 8;

const fn ep(a1: u8, a2: u8, b1: u8, b2: u8) -> ExcitationPattern {
    ExcitationPattern::new(a1 != 0, a2 != 0, b1 != 0, b2 != 0)
}

/// One coil line energized at a time.
pub(crate) static WAVE: [ExcitationPattern; TABLE_LEN] = [
    //  1a 2a 1b 2b
    ep(1, 0, 0, 0),
    ep(0, 1, 0, 0),
    ep(0, 0, 1, 0),
    ep(0, 0, 0, 1),
    ep(1, 0, 0, 0),
    ep(0, 1, 0, 0),
    ep(0, 0, 1, 0),
    ep(0, 0, 0, 1),
];

/// Two adjacent lines energized at a time.
pub(crate) static FULL_STEP: [ExcitationPattern; TABLE_LEN] = [
    //  1a 2a 1b 2b
    ep(1, 0, 0, 1),
    ep(1, 1, 0, 0),
    ep(0, 1, 1, 0),
    ep(0, 0, 1, 1),
    ep(1, 0, 0, 1),
    ep(1, 1, 0, 0),
    ep(0, 1, 1, 0),
    ep(0, 0, 1, 1),
];

/// Alternates between one and two energized lines.
pub(crate) static HALF_STEP: [ExcitationPattern; TABLE_LEN] = [
    //  1a 2a 1b 2b
    ep(1, 0, 0, 0),
    ep(1, 1, 0, 0),
    ep(0, 1, 0, 0),
    ep(0, 1, 1, 0),
    ep(0, 0, 1, 0),
    ep(0, 0, 1, 1),
    ep(0, 0, 0, 1),
    ep(1, 0, 0, 1),
];
