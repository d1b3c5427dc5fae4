//! Firmware version types.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Four-part version number, shown as `a.b.c.d`.
///
/// Serialised by the daemon as a four element array.
#[derive(Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct VersionNumber(pub u32, pub u32, pub u32, pub u32);

impl VersionNumber {
    /// Create a version number.
    #[must_use]
    pub const fn new(major: u32, minor: u32, patch: u32, build: u32) -> Self {
        Self(major, minor, patch, build)
    }
}

impl fmt::Display for VersionNumber {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{}.{}.{}", self.0, self.1, self.2, self.3)
    }
}

impl fmt::Debug for VersionNumber {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(self, f)
    }
}

/// Firmware components reported by the device.
#[derive(Clone, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
pub struct FirmwareVersions {
    /// Main firmware
    pub firmware: VersionNumber,
    /// FPGA image count
    pub fpga_count: u32,
    /// DICE (USB audio) firmware
    pub dice: VersionNumber,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_version_display() {
        assert_eq!(VersionNumber::new(1, 4, 2, 107).to_string(), "1.4.2.107");
        assert_eq!(format!("{:?}", VersionNumber::new(0, 0, 0, 1)), "0.0.0.1");
    }

    #[test]
    fn test_version_ordering() {
        assert!(VersionNumber::new(1, 4, 2, 107) > VersionNumber::new(1, 4, 2, 99));
        assert!(VersionNumber::new(2, 0, 0, 0) > VersionNumber::new(1, 99, 99, 99));
    }

    #[test]
    fn test_version_json_is_array() {
        let json = serde_json::to_string(&VersionNumber::new(1, 2, 3, 4)).unwrap();
        assert_eq!(json, "[1,2,3,4]");
    }
}
