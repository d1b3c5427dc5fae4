//! Application state management.

use goxlr_ui_core::{
    ActiveDeviceSource, Application, CapabilityError, DeviceStatus, DeviceStore, IconLibrary,
    Route, RouteTable, StoreEvent,
};
use leptos::*;
use log::info;

use crate::socket::ConnectionState;

/// Application context providing global state.
///
/// Reads through [`ActiveDeviceSource`] are tracked, so a closure that
/// queries the active device re-runs when the store changes.
#[derive(Clone)]
pub struct AppContext {
    /// Daemon status and active device
    pub store: RwSignal<DeviceStore>,
    /// Daemon socket state
    pub connection: RwSignal<ConnectionState>,
    /// Current route
    pub route: RwSignal<Route>,

    /// Icons registered at bootstrap
    pub icons: IconLibrary,
    /// Routing table attached at bootstrap
    pub routes: RouteTable,
}

impl AppContext {
    /// Create application context from a bootstrapped application.
    pub fn new(app: &Application) -> Self {
        let routes = app.router().cloned().unwrap_or_default();
        let initial_route = routes.resolve("/");

        let mut store = DeviceStore::new();
        store.subscribe(|event| {
            if let StoreEvent::ActiveDeviceChanged { previous, current } = event {
                info!("Active device {:?} -> {:?}", previous, current);
            }
        });

        Self {
            store: create_rw_signal(store),
            connection: create_rw_signal(ConnectionState::Connecting),
            route: create_rw_signal(initial_route),
            icons: app.icons().clone(),
            routes,
        }
    }

    /// Make `serial` the active device. Unknown serials are logged and ignored.
    pub fn select_device(&self, serial: &str) {
        let result = self.store.try_update(|store| store.select(serial));
        if let Some(Err(e)) = result {
            log::warn!("Cannot select device: {}", e);
        }
    }

    /// Snapshot of all devices (tracked).
    pub fn devices(&self) -> Vec<DeviceStatus> {
        self.store.with(|store| store.devices().to_vec())
    }
}

impl ActiveDeviceSource for AppContext {
    fn active_device(&self) -> Option<DeviceStatus> {
        self.store.with(|store| store.active().cloned())
    }
}

/// Provide application context to component tree.
pub fn provide_app_context(app: &Application) -> AppContext {
    let ctx = AppContext::new(app);
    provide_context(ctx.clone());
    ctx
}

/// Use application context from component tree.
pub fn use_app_context() -> AppContext {
    expect_context::<AppContext>()
}

/// Check whether the active device is a Mini.
///
/// Evaluated on every call so it follows device switches.
pub fn is_device_mini() -> Result<bool, CapabilityError> {
    goxlr_ui_core::is_device_mini(&use_app_context())
}
