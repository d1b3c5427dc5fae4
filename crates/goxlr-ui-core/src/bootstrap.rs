//! Application instance and the startup sequence.
//!
//! The order is fixed: create the application, register the static icons,
//! bind the icon component, attach the router, mount onto the host element.
//! Every failure is a [`StartupError`] and is fatal to page load.

use std::collections::BTreeMap;

use log::{debug, info};

use crate::config::UiConfig;
use crate::error::StartupError;
use crate::icons::{Icon, IconLibrary, STATIC_ICONS};
use crate::routes::RouteTable;

/// Name the icon-rendering component is bound under.
pub const ICON_COMPONENT_NAME: &str = "font-awesome-icon";

/// Reusable components that can be bound into an application.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ComponentKind {
    /// Renders an [`Icon`] from the application's icon library
    FontAwesomeIcon,
}

/// Component names bound into an application.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ComponentNamespace {
    bound: BTreeMap<String, ComponentKind>,
}

impl ComponentNamespace {
    /// Create an empty namespace.
    pub fn new() -> Self {
        Self::default()
    }

    /// Bind `kind` under `name`. Names are unique.
    pub fn bind(&mut self, name: &str, kind: ComponentKind) -> Result<(), StartupError> {
        if self.bound.contains_key(name) {
            return Err(StartupError::DuplicateComponent(name.to_string()));
        }
        self.bound.insert(name.to_string(), kind);
        Ok(())
    }

    /// Component bound under `name`.
    pub fn get(&self, name: &str) -> Option<ComponentKind> {
        self.bound.get(name).copied()
    }

    /// Bound names, sorted.
    pub fn names(&self) -> impl Iterator<Item = &str> + '_ {
        self.bound.keys().map(String::as_str)
    }

    /// Number of bound components.
    pub fn len(&self) -> usize {
        self.bound.len()
    }

    /// Check if nothing is bound.
    pub fn is_empty(&self) -> bool {
        self.bound.is_empty()
    }
}

/// The page that hosts the application.
///
/// The browser implementation wraps the DOM document; tests use an in-memory
/// stand-in.
pub trait HostDocument {
    /// Check whether an element matches `selector`.
    fn has_element(&self, selector: &str) -> bool;

    /// Render the application root under the element matching `selector`.
    fn mount_root(&mut self, selector: &str, app: &Application) -> Result<(), StartupError>;
}

/// Proof that an application was mounted.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct MountHandle {
    /// Selector of the host element
    pub selector: String,
}

/// A UI application instance.
#[derive(Clone, Debug, Default)]
pub struct Application {
    icons: IconLibrary,
    components: ComponentNamespace,
    router: Option<RouteTable>,
    mounted: Option<String>,
}

impl Application {
    /// Create an empty, unmounted application.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add icons to the application's icon library.
    pub fn register_icons(&mut self, icons: &[Icon]) -> &mut Self {
        self.icons.add(icons);
        self
    }

    /// Bind a component under `name`.
    pub fn component(
        &mut self,
        name: &str,
        kind: ComponentKind,
    ) -> Result<&mut Self, StartupError> {
        self.components.bind(name, kind)?;
        Ok(self)
    }

    /// Attach the routing table. Only one router may be attached.
    pub fn use_router(&mut self, router: RouteTable) -> Result<&mut Self, StartupError> {
        if self.router.is_some() {
            return Err(StartupError::RouterAlreadyAttached);
        }
        self.router = Some(router);
        Ok(self)
    }

    /// Mount onto the element matching `selector` in `document`.
    pub fn mount<D>(
        &mut self,
        document: &mut D,
        selector: &str,
    ) -> Result<MountHandle, StartupError>
    where
        D: HostDocument + ?Sized,
    {
        if self.mounted.is_some() {
            return Err(StartupError::AlreadyMounted);
        }
        if self.router.is_none() {
            return Err(StartupError::RouterMissing);
        }
        if !document.has_element(selector) {
            return Err(StartupError::HostElementMissing(selector.to_string()));
        }

        document.mount_root(selector, self)?;
        self.mounted = Some(selector.to_string());
        info!("Application mounted on {}", selector);

        Ok(MountHandle {
            selector: selector.to_string(),
        })
    }

    /// Registered icons.
    pub fn icons(&self) -> &IconLibrary {
        &self.icons
    }

    /// Bound components.
    pub fn components(&self) -> &ComponentNamespace {
        &self.components
    }

    /// Component bound under `name`.
    pub fn component_kind(&self, name: &str) -> Option<ComponentKind> {
        self.components.get(name)
    }

    /// Attached routing table.
    pub fn router(&self) -> Option<&RouteTable> {
        self.router.as_ref()
    }

    /// Check if the application has been mounted.
    pub fn is_mounted(&self) -> bool {
        self.mounted.is_some()
    }
}

/// Run the full startup sequence against `document`.
pub fn bootstrap<D>(document: &mut D, config: &UiConfig) -> Result<MountHandle, StartupError>
where
    D: HostDocument + ?Sized,
{
    let mut app = Application::new();

    app.register_icons(&STATIC_ICONS);
    debug!("Registered {} icons", app.icons().len());

    app.component(ICON_COMPONENT_NAME, ComponentKind::FontAwesomeIcon)?
        .use_router(RouteTable::standard())?;

    app.mount(document, &config.host_selector)
}
