//! Daemon status document.
//!
//! The daemon publishes one `DaemonStatus` covering every connected unit.
//! Parsing goes through [`DaemonStatus::from_json`] / [`DaemonStatus::from_value`],
//! which is the validation boundary for the rest of the UI.
//!
//! The typed view only covers what the UI reads. Fields it doesn't model
//! (mixer config, paths, files) are ignored here and kept in raw form by the
//! store, which is what daemon patches are applied to.

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::device::{DeviceInfo, DeviceType};
use crate::error::StatusError;

/// Status of one connected device. This is the active-device descriptor.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct DeviceStatus {
    /// Serial number, unique per document
    pub serial: String,
    /// Hardware descriptor
    pub hardware: DeviceInfo,
}

impl DeviceStatus {
    /// Hardware variant of this device.
    pub fn device_type(&self) -> DeviceType {
        self.hardware.device_type
    }
}

/// Full status for all devices, in daemon order.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DaemonStatus {
    /// Connected devices
    #[serde(default)]
    pub devices: Vec<DeviceStatus>,
}

impl DaemonStatus {
    /// Parse and validate a status document.
    pub fn from_json(json: &str) -> Result<Self, StatusError> {
        let status: DaemonStatus = serde_json::from_str(json)?;
        status.validate()?;
        Ok(status)
    }

    /// Validate a status document already decoded into a JSON value.
    pub fn from_value(value: Value) -> Result<Self, StatusError> {
        let status: DaemonStatus = serde_json::from_value(value)?;
        status.validate()?;
        Ok(status)
    }

    /// JSON form of the typed view.
    pub fn to_value(&self) -> Result<Value, StatusError> {
        Ok(serde_json::to_value(self)?)
    }

    /// Look up a device by serial.
    pub fn device(&self, serial: &str) -> Option<&DeviceStatus> {
        self.devices.iter().find(|d| d.serial == serial)
    }

    /// Check if no devices are connected.
    pub fn is_empty(&self) -> bool {
        self.devices.is_empty()
    }

    /// Check document invariants (unique serials).
    pub fn validate(&self) -> Result<(), StatusError> {
        for (idx, device) in self.devices.iter().enumerate() {
            if self.devices[..idx].iter().any(|d| d.serial == device.serial) {
                return Err(StatusError::DuplicateSerial(device.serial.clone()));
            }
        }
        Ok(())
    }
}

#[cfg(test)]
pub(crate) mod fixtures {
    use super::*;
    use crate::device::GoXLRFeature;
    use crate::version::{FirmwareVersions, VersionNumber};

    pub fn device(serial: &str, device_type: DeviceType) -> DeviceStatus {
        device_with_features(serial, device_type, vec![])
    }

    pub fn device_with_features(
        serial: &str,
        device_type: DeviceType,
        features: Vec<GoXLRFeature>,
    ) -> DeviceStatus {
        DeviceStatus {
            serial: serial.to_string(),
            hardware: DeviceInfo {
                serial: serial.to_string(),
                manufacture_date: "2022-03-14".to_string(),
                device_type,
                firmware: FirmwareVersions {
                    firmware: VersionNumber::new(1, 4, 2, 107),
                    fpga_count: 21,
                    dice: VersionNumber::new(1, 0, 0, 0),
                },
                features,
            },
        }
    }

    pub fn status(devices: &[(&str, DeviceType)]) -> DaemonStatus {
        DaemonStatus {
            devices: devices.iter().map(|(s, t)| device(s, *t)).collect(),
        }
    }
}
