//! UI components for the GoXLR frontend.

pub mod device_selector;
pub mod pages;

pub use device_selector::DeviceSelector;
pub use pages::{
    EffectsPage, LightingPage, MicrophonePage, MixerPage, NotFoundPage, SamplerPage, SettingsPage,
    UnavailableOnMini,
};
