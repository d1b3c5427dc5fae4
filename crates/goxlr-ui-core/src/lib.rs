//! GoXLR UI Core Library
//!
//! Platform-agnostic pieces of the GoXLR web UI. Nothing in here touches the
//! DOM, so everything can be exercised on the host.
//!
//! # Modules
//!
//! - [`device`] - Hardware descriptor types: DeviceType, DeviceInfo, features
//! - [`status`] - Daemon status document and its parsing boundary
//! - [`store`] - Active-device store with explicit subscriptions
//! - [`capability`] - Mini detection and per-device capabilities
//! - [`icons`] - Static icon set and icon library
//! - [`routes`] - Routing table and path resolution
//! - [`bootstrap`] - Application instance and the startup sequence
//! - [`protocol`] - Daemon WebSocket messages and request tracking
//! - [`config`] - UI configuration
//! - [`error`] - Error types

#![deny(unsafe_code)]
#![warn(missing_docs)]

pub mod bootstrap;
pub mod capability;
pub mod config;
pub mod device;
pub mod error;
pub mod icons;
pub mod protocol;
pub mod routes;
pub mod status;
pub mod store;
pub mod version;

// Re-export commonly used types
pub use bootstrap::{
    bootstrap, Application, ComponentKind, ComponentNamespace, HostDocument, MountHandle,
};
pub use capability::{
    capabilities, is_device_mini, is_device_mini_or, ActiveDeviceSource, DeviceCapabilities,
};
pub use config::UiConfig;
pub use device::{DeviceInfo, DeviceType, GoXLRFeature};
pub use error::{CapabilityError, ConfigError, ProtocolError, StartupError, StatusError};
pub use icons::{Icon, IconLibrary, STATIC_ICONS};
pub use protocol::{DaemonRequest, DaemonResponse, DaemonSession, RequestTracker, SessionEvent};
pub use routes::{Page, Route, RouteTable};
pub use status::{DaemonStatus, DeviceStatus};
pub use store::{DeviceStore, StoreEvent, SubscriptionId};
pub use version::{FirmwareVersions, VersionNumber};
