//! Main application component.

use goxlr_ui_core::{ActiveDeviceSource, Application, UiConfig};
use leptos::*;
use log::error;

use crate::components::DeviceSelector;
use crate::icons::FontAwesomeIcon;
use crate::router::{HashRouter, Nav, RouteView};
use crate::socket::DaemonSocket;
use crate::state::{is_device_mini, provide_app_context, AppContext};

/// Root application component.
#[component]
pub fn App(
    /// Bootstrapped application (icons, components, routes)
    app: Application,
    /// Runtime configuration
    config: UiConfig,
) -> impl IntoView {
    // Provide application context
    let ctx = provide_app_context(&app);

    let location = window().location();
    let url = config.socket_url(
        &location.protocol().unwrap_or_default(),
        &location.host().unwrap_or_default(),
    );
    let socket = DaemonSocket::new(url, config.reconnect_delay_ms, ctx.clone());
    if let Err(e) = socket.connect() {
        error!("Could not open daemon socket: {:?}", e);
    }

    view! {
        <HashRouter>
            <main class="goxlr-app">
                <Header />
                <div class="main-content">
                    <Nav />
                    <RouteView />
                </div>
                <StatusBar ctx=ctx.clone() />
            </main>
        </HashRouter>
    }
}

/// Application header with device selection.
#[component]
fn Header() -> impl IntoView {
    let badge = move || match is_device_mini() {
        Ok(true) => "Mini",
        Ok(false) => "Full",
        Err(_) => "",
    };

    view! {
        <header class="app-header">
            <h1 class="app-title">"GoXLR Utility"</h1>
            <DeviceSelector />
            <span class="device-badge">{badge}</span>
        </header>
    }
}

/// Status bar at bottom of application.
#[component]
fn StatusBar(ctx: AppContext) -> impl IntoView {
    let connection = ctx.connection;
    let status_text = move || connection.get().label();

    let firmware = move || {
        ctx.active_device()
            .map(|d| format!("Firmware {}", d.hardware.firmware.firmware))
            .unwrap_or_default()
    };

    view! {
        <footer class="status-bar">
            <span class="status">
                <FontAwesomeIcon icon="clock" />
                " "
                {status_text}
            </span>
            <span class="firmware">{firmware}</span>
            <span class="version">{concat!("GoXLR Web UI v", env!("CARGO_PKG_VERSION"))}</span>
        </footer>
    }
}
