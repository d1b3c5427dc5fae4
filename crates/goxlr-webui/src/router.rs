//! Hash-based router.
//!
//! The route signal in [`AppContext`] follows `window.location.hash`. Pages
//! that only exist on the full-size unit drop out of the navigation while a
//! Mini is active.

use goxlr_ui_core::{is_device_mini_or, Page, RouteTable};
use leptos::*;
use log::debug;

use crate::components::pages::{
    EffectsPage, LightingPage, MicrophonePage, MixerPage, NotFoundPage, SamplerPage, SettingsPage,
    UnavailableOnMini,
};
use crate::icons::FontAwesomeIcon;
use crate::state::{use_app_context, AppContext};

fn current_hash() -> String {
    window().location().hash().unwrap_or_default()
}

fn sync_route(ctx: &AppContext) {
    let hash = current_hash();
    let route = ctx.routes.resolve(&hash);
    debug!("Route '{}' -> {:?}", hash, route.page);
    ctx.route.set(route);
}

/// Keeps the route signal in step with the location hash.
#[component]
pub fn HashRouter(children: Children) -> impl IntoView {
    let ctx = use_app_context();
    sync_route(&ctx);

    let listener_ctx = ctx.clone();
    let _listener = window_event_listener(ev::hashchange, move |_| sync_route(&listener_ctx));

    children()
}

/// Navigation links for the routes the active device supports.
#[component]
pub fn Nav() -> impl IntoView {
    let ctx = use_app_context();

    let links = move || {
        let mini = is_device_mini_or(&ctx, false);
        let current = ctx.route.get().page;
        ctx.routes
            .visible_routes(mini)
            .map(|route| {
                let icon = match route.page {
                    Page::Lighting => "palette",
                    Page::Settings => "gear",
                    Page::Sampler => "clock",
                    _ => "hand-pointer",
                };
                view! {
                    <a
                        class="nav-link"
                        class:active=route.page == current
                        href=RouteTable::href(route)
                    >
                        <FontAwesomeIcon icon=icon />
                        " "
                        {route.name}
                    </a>
                }
            })
            .collect_view()
    };

    view! { <nav class="app-nav">{links}</nav> }
}

/// Renders the page for the current route.
#[component]
pub fn RouteView() -> impl IntoView {
    let ctx = use_app_context();

    move || {
        let route = ctx.route.get();
        if route.full_only && is_device_mini_or(&ctx, false) {
            return view! { <UnavailableOnMini name=route.name /> }.into_view();
        }

        match route.page {
            Page::Mixer => view! { <MixerPage /> }.into_view(),
            Page::Microphone => view! { <MicrophonePage /> }.into_view(),
            Page::Effects => view! { <EffectsPage /> }.into_view(),
            Page::Sampler => view! { <SamplerPage /> }.into_view(),
            Page::Lighting => view! { <LightingPage /> }.into_view(),
            Page::Settings => view! { <SettingsPage /> }.into_view(),
            Page::NotFound => view! { <NotFoundPage /> }.into_view(),
        }
    }
}
