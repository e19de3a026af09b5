//! Single-byte command protocol.
//!
//! Each received byte is either one of the commands below or noise. Noise
//! is dropped silently: the transport may deliver partial or garbled input
//! and nothing in the protocol acknowledges errors.

mod interpreter;

use core::fmt;

pub use interpreter::CommandInterpreter;

use crate::motion::Direction;
use crate::pattern::DriveMode;

/// Usage text for the transport to print on start-up and on `p`.
pub const USAGE: &str = "Step motor application started\r\n\
0: Stop\r\n\
1: Drive forwards\r\n\
2: Drive reverse\r\n\
3: One rotation forwards\r\n\
4: One rotation reverse\r\n\
a: Select wave drive\r\n\
s: Select full step drive\r\n\
d: Select half step drive\r\n\
q: Decrease speed\r\n\
w: Increase speed\r\n\
p: Print usage\r\n";

/// A recognized command byte.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Command {
    /// `0`: stop on the next tick boundary.
    Stop,
    /// `1` / `2`: run continuously.
    Run(Direction),
    /// `3` / `4`: run for one mechanical rotation.
    SingleRotation(Direction),
    /// `a` / `s` / `d`: select wave, full-step or half-step drive.
    SelectDriveMode(DriveMode),
    /// `q`: lengthen the tick interval.
    SlowDown,
    /// `w`: shorten the tick interval.
    SpeedUp,
    /// `p`: ask the transport to print [`USAGE`].
    PrintUsage,
}

impl Command {
    /// Every command, in protocol order.
    pub const ALL: [Command; 11] = [
        Command::Stop,
        Command::Run(Direction::Forward),
        Command::Run(Direction::Reverse),
        Command::SingleRotation(Direction::Forward),
        Command::SingleRotation(Direction::Reverse),
        Command::SelectDriveMode(DriveMode::Wave),
        Command::SelectDriveMode(DriveMode::FullStep),
        Command::SelectDriveMode(DriveMode::HalfStep),
        Command::SlowDown,
        Command::SpeedUp,
        Command::PrintUsage,
    ];

    /// Decode a received byte. Returns `None` for anything unrecognized.
    pub const fn from_byte(byte: u8) -> Option<Self> {
        let command = match byte {
            b'0' => Command::Stop,
            b'1' => Command::Run(Direction::Forward),
            b'2' => Command::Run(Direction::Reverse),
            b'3' => Command::SingleRotation(Direction::Forward),
            b'4' => Command::SingleRotation(Direction::Reverse),
            b'a' => Command::SelectDriveMode(DriveMode::Wave),
            b's' => Command::SelectDriveMode(DriveMode::FullStep),
            b'd' => Command::SelectDriveMode(DriveMode::HalfStep),
            b'q' => Command::SlowDown,
            b'w' => Command::SpeedUp,
            b'p' => Command::PrintUsage,
            _ => return None,
        };
        Some(command)
    }

    /// The byte that encodes this command.
    pub const fn byte(self) -> u8 {
        match self {
            Command::Stop => b'0',
            Command::Run(Direction::Forward) => b'1',
            Command::Run(Direction::Reverse) => b'2',
            Command::SingleRotation(Direction::Forward) => b'3',
            Command::SingleRotation(Direction::Reverse) => b'4',
            Command::SelectDriveMode(DriveMode::Wave) => b'a',
            Command::SelectDriveMode(DriveMode::FullStep) => b's',
            Command::SelectDriveMode(DriveMode::HalfStep) => b'd',
            Command::SlowDown => b'q',
            Command::SpeedUp => b'w',
            Command::PrintUsage => b'p',
        }
    }
}

impl TryFrom<u8> for Command {
    type Error = u8;

    fn try_from(byte: u8) -> Result<Self, Self::Error> {
        Command::from_byte(byte).ok_or(byte)
    }
}

impl fmt::Display for Command {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Command::Stop => f.write_str("stop"),
            Command::Run(direction) => write!(f, "drive {}", direction),
            Command::SingleRotation(direction) => write!(f, "one rotation {}", direction),
            Command::SelectDriveMode(mode) => write!(f, "drive mode: {}", mode),
            Command::SlowDown => f.write_str("decrease speed"),
            Command::SpeedUp => f.write_str("increase speed"),
            Command::PrintUsage => f.write_str("print usage"),
        }
    }
}
