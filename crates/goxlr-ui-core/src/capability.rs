//! Device capability queries.
//!
//! Everything here is a pure projection of whatever device is active at call
//! time. Callers re-invoke on each render; results are never cached, so a
//! switch between a Mini and a full-size unit shows up on the next call.

use crate::device::{DeviceInfo, GoXLRFeature};
use crate::error::CapabilityError;
use crate::status::DeviceStatus;

/// Read access to the currently active device.
///
/// Implemented by the store and by anything a test wants to stand in for it.
pub trait ActiveDeviceSource {
    /// The active device, or `None` before one has been selected.
    fn active_device(&self) -> Option<DeviceStatus>;
}

impl ActiveDeviceSource for Option<DeviceStatus> {
    fn active_device(&self) -> Option<DeviceStatus> {
        self.clone()
    }
}

impl ActiveDeviceSource for DeviceStatus {
    fn active_device(&self) -> Option<DeviceStatus> {
        Some(self.clone())
    }
}

impl<T: ActiveDeviceSource + ?Sized> ActiveDeviceSource for &T {
    fn active_device(&self) -> Option<DeviceStatus> {
        (**self).active_device()
    }
}

/// Check whether the active device is a GoXLR Mini.
///
/// Fails with [`CapabilityError::NoActiveDevice`] if nothing is active yet.
pub fn is_device_mini<S>(source: &S) -> Result<bool, CapabilityError>
where
    S: ActiveDeviceSource + ?Sized,
{
    source
        .active_device()
        .map(|device| device.device_type().is_mini())
        .ok_or(CapabilityError::NoActiveDevice)
}

/// Like [`is_device_mini`], but returns `default` when no device is active.
pub fn is_device_mini_or<S>(source: &S, default: bool) -> bool
where
    S: ActiveDeviceSource + ?Sized,
{
    is_device_mini(source).unwrap_or(default)
}

/// What the UI may offer for a given device.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct DeviceCapabilities {
    /// Fader scribble strip displays
    pub scribbles: bool,
    /// Effects section and its encoders
    pub effects: bool,
    /// Sampler pads
    pub sampler: bool,
    /// Global and fader lighting
    pub lighting: bool,
    /// Sub-mix outputs
    pub submix: bool,
    /// Lighting animations
    pub animation: bool,
    /// Voice of Disappearing
    pub vod: bool,
    /// Microphone equaliser bands
    pub eq_bands: u8,
}

impl DeviceCapabilities {
    /// Project a hardware descriptor into its capabilities.
    pub fn for_device(info: &DeviceInfo) -> Self {
        let full = !info.device_type.is_mini();
        Self {
            scribbles: full,
            effects: full,
            sampler: full,
            lighting: true,
            submix: info.has_feature(GoXLRFeature::SubMix),
            animation: info.has_feature(GoXLRFeature::Animation),
            vod: info.has_feature(GoXLRFeature::VoD),
            eq_bands: if full { 10 } else { 6 },
        }
    }
}

/// Capabilities of the active device.
pub fn capabilities<S>(source: &S) -> Result<DeviceCapabilities, CapabilityError>
where
    S: ActiveDeviceSource + ?Sized,
{
    source
        .active_device()
        .map(|device| DeviceCapabilities::for_device(&device.hardware))
        .ok_or(CapabilityError::NoActiveDevice)
}

#[cfg(test)]
mod tests {
    use std::cell::RefCell;

    use super::*;
    use crate::device::DeviceType;
    use crate::status::fixtures::{device, device_with_features};

    /// Source whose answer can be swapped between calls.
    struct Swappable(RefCell<Option<DeviceStatus>>);

    impl ActiveDeviceSource for Swappable {
        fn active_device(&self) -> Option<DeviceStatus> {
            self.0.borrow().clone()
        }
    }

    #[test]
    fn test_mini_is_mini() {
        let active = device("S1", DeviceType::Mini);
        assert_eq!(is_device_mini(&active), Ok(true));
    }

    #[test]
    fn test_full_is_not_mini() {
        let active = device("S1", DeviceType::Full);
        assert_eq!(is_device_mini(&active), Ok(false));
    }

    #[test]
    fn test_no_active_device() {
        let none: Option<DeviceStatus> = None;
        assert_eq!(is_device_mini(&none), Err(CapabilityError::NoActiveDevice));
        assert_eq!(is_device_mini(&none), Err(CapabilityError::NoActiveDevice));
        assert!(!is_device_mini_or(&none, false));
        assert!(is_device_mini_or(&none, true));
    }

    #[test]
    fn test_repeated_calls_agree() {
        let active = Some(device("S1", DeviceType::Mini));
        assert_eq!(is_device_mini(&active), is_device_mini(&active));
    }

    #[test]
    fn test_reflects_device_switch() {
        let source = Swappable(RefCell::new(Some(device("M", DeviceType::Mini))));
        assert_eq!(is_device_mini(&source), Ok(true));

        *source.0.borrow_mut() = Some(device("F", DeviceType::Full));
        assert_eq!(is_device_mini(&source), Ok(false));

        *source.0.borrow_mut() = None;
        assert_eq!(is_device_mini(&source), Err(CapabilityError::NoActiveDevice));
    }

    #[test]
    fn test_works_through_trait_object() {
        let active = Some(device("S1", DeviceType::Mini));
        let source: &dyn ActiveDeviceSource = &active;
        assert_eq!(is_device_mini(source), Ok(true));
    }

    #[test]
    fn test_mini_capabilities() {
        let caps = DeviceCapabilities::for_device(&device("M", DeviceType::Mini).hardware);
        assert!(!caps.scribbles);
        assert!(!caps.effects);
        assert!(!caps.sampler);
        assert!(caps.lighting);
        assert!(!caps.submix);
        assert_eq!(caps.eq_bands, 6);
    }

    #[test]
    fn test_feature_capabilities() {
        let active = device_with_features(
            "F",
            DeviceType::Full,
            vec![GoXLRFeature::SubMix, GoXLRFeature::VoD],
        );
        let caps = capabilities(&active).unwrap();
        assert!(caps.scribbles && caps.effects && caps.sampler);
        assert!(caps.submix);
        assert!(caps.vod);
        assert!(!caps.animation);
        assert_eq!(caps.eq_bands, 10);
    }

    #[test]
    fn test_capabilities_without_device() {
        let none: Option<DeviceStatus> = None;
        assert_eq!(capabilities(&none), Err(CapabilityError::NoActiveDevice));
    }
}
