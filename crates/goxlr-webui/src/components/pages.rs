//! Page Components.
//!
//! One component per route. Sections that depend on the hardware variant or
//! firmware features re-query the active device on every render.

use goxlr_ui_core::{capabilities, ActiveDeviceSource, DeviceCapabilities};
use leptos::*;

use crate::icons::FontAwesomeIcon;
use crate::state::use_app_context;

const FADERS: [&str; 4] = ["A", "B", "C", "D"];

const EFFECT_PRESETS: usize = 6;

const EFFECTS: [&str; 6] = ["Reverb", "Echo", "Pitch", "Gender", "Megaphone", "Robot"];

const SAMPLER_BANKS: [&str; 3] = ["A", "B", "C"];

const SAMPLER_BUTTONS: [&str; 4] = ["Top Left", "Top Right", "Bottom Left", "Bottom Right"];

/// Calls `render` with the active device's capabilities, or shows a
/// placeholder while no device is active.
#[component]
fn WithDevice<F, V>(render: F) -> impl IntoView
where
    F: Fn(DeviceCapabilities) -> V + 'static,
    V: IntoView,
{
    let ctx = use_app_context();
    move || match capabilities(&ctx) {
        Ok(caps) => render(caps).into_view(),
        Err(_) => view! {
            <div class="no-device">
                <p>"No GoXLR connected."</p>
                <p>"Waiting for the daemon to report a device..."</p>
            </div>
        }
        .into_view(),
    }
}

/// Faders and mute buttons.
#[component]
pub fn MixerPage() -> impl IntoView {
    view! {
        <section class="page mixer-page">
            <h2>"Mixer"</h2>
            <WithDevice render=|caps: DeviceCapabilities| {
                FADERS
                    .iter()
                    .map(|fader| {
                        view! {
                            <div class="fader-strip">
                                <span class="fader-name">"Fader " {*fader}</span>
                                {caps.scribbles.then(|| view! { <div class="scribble">"Scribble"</div> })}
                                <button class="mute-button">
                                    <FontAwesomeIcon icon="volume-xmark" />
                                </button>
                            </div>
                        }
                    })
                    .collect_view()
            } />
        </section>
    }
}

/// Microphone setup: gate, compressor and equaliser.
#[component]
pub fn MicrophonePage() -> impl IntoView {
    view! {
        <section class="page microphone-page">
            <h2>"Microphone"</h2>
            <WithDevice render=|caps: DeviceCapabilities| {
                view! {
                    <div class="mic-section">"Noise Gate"</div>
                    <div class="mic-section">"Compressor"</div>
                    <div class="mic-section">
                        {format!("Equaliser ({} bands)", caps.eq_bands)}
                    </div>
                }
            } />
        </section>
    }
}

/// Effect presets and effect types.
#[component]
pub fn EffectsPage() -> impl IntoView {
    view! {
        <section class="page effects-page">
            <h2>"Effects"</h2>
            <div class="effect-presets">
                {(1..=EFFECT_PRESETS)
                    .map(|n| view! { <button class="preset">{format!("Preset {}", n)}</button> })
                    .collect_view()}
            </div>
            <div class="effect-types">
                {EFFECTS.iter().map(|e| view! { <div class="effect">{*e}</div> }).collect_view()}
            </div>
        </section>
    }
}

/// Sampler banks and pads.
#[component]
pub fn SamplerPage() -> impl IntoView {
    view! {
        <section class="page sampler-page">
            <h2>"Sampler"</h2>
            {SAMPLER_BANKS
                .iter()
                .map(|bank| {
                    view! {
                        <div class="sampler-bank">
                            <h3>"Bank " {*bank}</h3>
                            {SAMPLER_BUTTONS
                                .iter()
                                .map(|b| view! { <button class="sample-pad">{*b}</button> })
                                .collect_view()}
                        </div>
                    }
                })
                .collect_view()}
        </section>
    }
}

/// Global, fader and button lighting.
#[component]
pub fn LightingPage() -> impl IntoView {
    view! {
        <section class="page lighting-page">
            <h2><FontAwesomeIcon icon="palette" /> " Lighting"</h2>
            <WithDevice render=|caps: DeviceCapabilities| {
                view! {
                    <div class="lighting-section">"Global"</div>
                    <div class="lighting-section">"Faders"</div>
                    <div class="lighting-section">"Buttons"</div>
                    {caps.animation.then(|| view! { <div class="lighting-section">"Animation"</div> })}
                }
            } />
        </section>
    }
}

/// Hardware summary and daemon settings.
#[component]
pub fn SettingsPage() -> impl IntoView {
    let ctx = use_app_context();

    let details = move || {
        ctx.active_device().map(|device| {
            let caps = DeviceCapabilities::for_device(&device.hardware);
            let features = if device.hardware.features.is_empty() {
                "None".to_string()
            } else {
                device
                    .hardware
                    .features
                    .iter()
                    .map(|f| format!("{:?}", f))
                    .collect::<Vec<_>>()
                    .join(", ")
            };

            view! {
                <dl class="device-details">
                    <dt>"Model"</dt><dd>{device.device_type().name()}</dd>
                    <dt>"Serial"</dt><dd>{device.serial.clone()}</dd>
                    <dt>"Manufactured"</dt><dd>{device.hardware.manufacture_date.clone()}</dd>
                    <dt>"Firmware"</dt><dd>{device.hardware.firmware.firmware.to_string()}</dd>
                    <dt>"DICE"</dt><dd>{device.hardware.firmware.dice.to_string()}</dd>
                    <dt>"Features"</dt><dd>{features}</dd>
                    <dt>"Sub-mix"</dt><dd>{if caps.submix { "Available" } else { "Unavailable" }}</dd>
                </dl>
            }
        })
    };

    view! {
        <section class="page settings-page">
            <h2><FontAwesomeIcon icon="gear" /> " Settings"</h2>
            {details}
        </section>
    }
}

/// Shown for unknown routes.
#[component]
pub fn NotFoundPage() -> impl IntoView {
    view! {
        <section class="page not-found">
            <h2>"Page not found"</h2>
            <a href="#/">"Back to the mixer"</a>
        </section>
    }
}

/// Shown when a full-size-only route is opened while a Mini is active.
#[component]
pub fn UnavailableOnMini(
    /// Page name
    name: &'static str,
) -> impl IntoView {
    view! {
        <section class="page unavailable">
            <h2>{name}</h2>
            <p>"The GoXLR Mini does not have this feature."</p>
        </section>
    }
}
