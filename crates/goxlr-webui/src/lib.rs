//! GoXLR Web UI - Leptos-based frontend.
//!
//! Browser interface for the GoXLR daemon:
//! - Device selection and hardware summary
//! - Hash-routed pages, trimmed for the Mini
//! - Live status over the daemon WebSocket

pub mod app;
pub mod bootstrap;
pub mod components;
pub mod icons;
pub mod router;
pub mod socket;
pub mod state;

use wasm_bindgen::prelude::*;

pub use app::App;
pub use bootstrap::{run, BrowserDocument};
pub use icons::FontAwesomeIcon;
pub use socket::{ConnectionState, DaemonSocket};
pub use state::{is_device_mini, provide_app_context, use_app_context, AppContext};

/// WASM entry point.
#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    run().map(|_| ()).map_err(|e| JsValue::from_str(&e.to_string()))
}
