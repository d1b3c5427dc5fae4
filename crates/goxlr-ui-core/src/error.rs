//! Error types for the GoXLR UI.

use thiserror::Error;

/// Fatal errors raised while constructing and mounting the application.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum StartupError {
    /// No element in the page matches the host selector.
    #[error("Host element '{0}' not found in document")]
    HostElementMissing(String),

    /// A component name was bound twice.
    #[error("Component '{0}' is already registered")]
    DuplicateComponent(String),

    /// A router was attached to an application that already has one.
    #[error("A router is already attached to this application")]
    RouterAlreadyAttached,

    /// Mount was attempted before a router was attached.
    #[error("No router attached, cannot mount")]
    RouterMissing,

    /// The application instance has already been mounted.
    #[error("Application is already mounted")]
    AlreadyMounted,

    /// The bootstrap entry point ran more than once in this page.
    #[error("Bootstrap has already run for this page")]
    AlreadyStarted,

    /// The host document failed to attach the application root.
    #[error("Mount failed: {0}")]
    Mount(String),
}

/// Errors from capability queries.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum CapabilityError {
    /// Queried before any device is active.
    #[error("No active device")]
    NoActiveDevice,
}

/// Errors while parsing or updating the daemon status document.
#[derive(Error, Debug)]
pub enum StatusError {
    /// The document did not match the expected shape.
    #[error("Status JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// A JSON patch could not be applied.
    #[error("Status patch error: {0}")]
    Patch(#[from] json_patch::PatchError),

    /// No device with this serial is known.
    #[error("Unknown device: {0}")]
    UnknownDevice(String),

    /// Two devices in one document share a serial.
    #[error("Duplicate device serial: {0}")]
    DuplicateSerial(String),
}

/// Errors on the daemon WebSocket.
#[derive(Error, Debug)]
pub enum ProtocolError {
    /// A frame could not be decoded.
    #[error("Could not decode daemon message: {0}")]
    Decode(#[source] serde_json::Error),

    /// A request could not be encoded.
    #[error("Could not encode daemon request: {0}")]
    Encode(#[source] serde_json::Error),

    /// The daemon answered a request with an error.
    #[error("Daemon error: {0}")]
    Daemon(String),

    /// A status or patch message could not be applied.
    #[error(transparent)]
    Status(#[from] StatusError),

    /// A response arrived for a request that is not pending.
    #[error("Response for unknown request id {0}")]
    UnexpectedId(u64),
}

/// Errors while reading UI configuration.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    /// The log level is not one of off, error, warn, info, debug, trace.
    #[error("Invalid log level: {0}")]
    InvalidLogLevel(String),

    /// A numeric setting did not parse.
    #[error("Invalid value for '{key}': {value}")]
    InvalidNumber {
        /// Query key
        key: String,
        /// Offending value
        value: String,
    },
}
