//! Browser startup.
//!
//! Reads configuration from the page query string, sets up console logging
//! and the panic hook, then runs the core startup sequence against the real
//! DOM. Runs once per page; failures are fatal.

use std::cell::Cell;

use goxlr_ui_core::config::QUERY_KEYS;
use goxlr_ui_core::{Application, HostDocument, MountHandle, StartupError, UiConfig};
use leptos::*;
use log::{error, info, warn};
use wasm_bindgen::JsCast;
use web_sys::{Document, HtmlElement, UrlSearchParams};

use crate::app::App;

thread_local! {
    static STARTED: Cell<bool> = const { Cell::new(false) };
}

/// Host document backed by the browser DOM.
pub struct BrowserDocument {
    document: Document,
    config: UiConfig,
}

impl BrowserDocument {
    /// Wrap the page's document.
    pub fn new(document: Document, config: UiConfig) -> Self {
        Self { document, config }
    }
}

impl HostDocument for BrowserDocument {
    fn has_element(&self, selector: &str) -> bool {
        matches!(self.document.query_selector(selector), Ok(Some(_)))
    }

    fn mount_root(&mut self, selector: &str, app: &Application) -> Result<(), StartupError> {
        let host = self
            .document
            .query_selector(selector)
            .ok()
            .flatten()
            .ok_or_else(|| StartupError::HostElementMissing(selector.to_string()))?
            .dyn_into::<HtmlElement>()
            .map_err(|_| StartupError::Mount(format!("'{}' is not an HTML element", selector)))?;

        let app = app.clone();
        let config = self.config.clone();
        mount_to(host, move || view! { <App app=app config=config /> });
        Ok(())
    }
}

fn read_config() -> (UiConfig, Option<String>) {
    let search = window().location().search().unwrap_or_default();
    let params = match UrlSearchParams::new_with_str(&search) {
        Ok(params) => params,
        Err(_) => return (UiConfig::default(), None),
    };

    let pairs = QUERY_KEYS
        .iter()
        .filter_map(|key| params.get(key).map(|value| (*key, value)));

    match UiConfig::from_pairs(pairs) {
        Ok(config) => (config, None),
        Err(e) => (UiConfig::default(), Some(e.to_string())),
    }
}

/// Configure and mount the application. Call once per page.
pub fn run() -> Result<MountHandle, StartupError> {
    if STARTED.with(|started| started.replace(true)) {
        warn!("Bootstrap called twice, ignoring");
        return Err(StartupError::AlreadyStarted);
    }

    console_error_panic_hook::set_once();

    let (config, config_error) = read_config();
    if let Some(level) = config.log_level.to_level() {
        // Only fails if a logger is already installed
        let _ = console_log::init_with_level(level);
    }
    if let Some(e) = config_error {
        warn!("Ignoring page configuration: {}", e);
    }
    info!("Starting GoXLR Web UI v{}", env!("CARGO_PKG_VERSION"));

    let mut document = BrowserDocument::new(document(), config.clone());
    goxlr_ui_core::bootstrap(&mut document, &config).map_err(|e| {
        error!("Startup failed: {}", e);
        e
    })
}
