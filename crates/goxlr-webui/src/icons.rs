//! Icon component.
//!
//! Bound as `font-awesome-icon` at bootstrap. Renders the solid web-font
//! glyph for icons in the application's library.

use leptos::*;
use log::warn;

use crate::state::use_app_context;

/// Font Awesome icon component.
#[component]
pub fn FontAwesomeIcon(
    /// Icon name, e.g. "gear" or "angle-down"
    icon: &'static str,
    /// Extra CSS classes
    #[prop(optional)]
    class: &'static str,
) -> impl IntoView {
    let ctx = use_app_context();

    match ctx.icons.lookup(icon) {
        Some(found) => {
            let classes = format!("{} {}", found.css_class(), class);
            view! { <i class=classes.trim_end().to_string() aria-hidden="true"></i> }.into_view()
        }
        None => {
            warn!("Icon '{}' is not registered", icon);
            ().into_view()
        }
    }
}
