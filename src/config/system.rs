//! System configuration - root configuration structure.

use serde::Deserialize;

use super::drive::DriveConfig;

/// GPIO numbers wired to the four coil lines.
///
/// Informational for the firmware's pin setup; the library itself only
/// sees `OutputPin`s.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct CoilPinout {
    /// Coil A, leg 1.
    pub coil_a1: u8,
    /// Coil A, leg 2.
    pub coil_a2: u8,
    /// Coil B, leg 1.
    pub coil_b1: u8,
    /// Coil B, leg 2.
    pub coil_b2: u8,
}

impl Default for CoilPinout {
    fn default() -> Self {
        Self {
            coil_a1: 10,
            coil_a2: 11,
            coil_b1: 12,
            coil_b2: 13,
        }
    }
}

impl CoilPinout {
    /// Pin numbers in write order (A1, A2, B1, B2).
    pub fn as_array(&self) -> [u8; 4] {
        [self.coil_a1, self.coil_a2, self.coil_b1, self.coil_b2]
    }
}

/// Root configuration structure from TOML.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct SystemConfig {
    /// Timing and stepping constants.
    #[serde(default)]
    pub drive: DriveConfig,

    /// Coil GPIO assignment.
    #[serde(default)]
    pub pins: CoilPinout,
}
