//! Device Selector Component.
//!
//! Dropdown for choosing the active device when several are connected.

use goxlr_ui_core::DeviceStatus;
use leptos::*;

use crate::icons::FontAwesomeIcon;
use crate::state::use_app_context;

fn device_label(device: &DeviceStatus) -> String {
    format!("{} ({})", device.device_type().name(), device.serial)
}

/// Device selector component.
#[component]
pub fn DeviceSelector() -> impl IntoView {
    let ctx = use_app_context();
    let select_ctx = ctx.clone();

    let on_change = move |ev: web_sys::Event| {
        let serial = event_target_value(&ev);
        select_ctx.select_device(&serial);
    };

    let options = move || {
        let active = ctx.store.with(|s| s.active_serial().map(String::from));
        ctx.devices()
            .into_iter()
            .map(|device| {
                let selected = active.as_deref() == Some(device.serial.as_str());
                view! {
                    <option value=device.serial.clone() selected=selected>
                        {device_label(&device)}
                    </option>
                }
            })
            .collect_view()
    };

    let empty = {
        let ctx = use_app_context();
        move || ctx.store.with(|s| s.devices().is_empty())
    };

    view! {
        <div class="device-selector">
            <select on:change=on_change disabled=empty>
                {options}
            </select>
            <FontAwesomeIcon icon="angle-down" class="select-arrow" />
        </div>
    }
}
