//! Hardware descriptor types.
//!
//! These mirror the daemon's view of a connected unit. Variant names are the
//! exact strings used on the wire. A hardware variant this UI doesn't know
//! decodes as [`DeviceType::Other`] so one new model can't take the rest of
//! the status document down with it.

use serde::{Deserialize, Serialize};

use crate::version::FirmwareVersions;

/// Hardware variant.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum DeviceType {
    /// Full-size GoXLR
    Full,
    /// GoXLR Mini (no scribbles, effects or sampler)
    Mini,
    /// Any variant not listed above, treated as full-size
    #[serde(other)]
    Other,
}

impl DeviceType {
    /// Display name for the variant.
    pub fn name(&self) -> &'static str {
        match self {
            DeviceType::Full => "GoXLR",
            DeviceType::Mini => "GoXLR Mini",
            DeviceType::Other => "GoXLR (unrecognised model)",
        }
    }

    /// Check if this is the reduced-feature variant.
    pub fn is_mini(&self) -> bool {
        matches!(self, DeviceType::Mini)
    }
}

/// Firmware-dependent features.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum GoXLRFeature {
    /// Lighting animations
    Animation,
    /// Sub-mix outputs
    SubMix,
    /// Voice of Disappearing
    VoD,
}

/// Hardware section of a device status.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct DeviceInfo {
    /// Serial number
    pub serial: String,
    /// Manufacture date as reported by the device
    pub manufacture_date: String,
    /// Hardware variant
    pub device_type: DeviceType,
    /// Firmware versions
    pub firmware: FirmwareVersions,
    /// Enabled firmware features
    #[serde(default)]
    pub features: Vec<GoXLRFeature>,
}

impl DeviceInfo {
    /// Check whether a firmware feature is enabled.
    pub fn has_feature(&self, feature: GoXLRFeature) -> bool {
        self.features.contains(&feature)
    }
}
