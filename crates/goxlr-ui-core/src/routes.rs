//! Routing table.

/// Top-level pages of the UI.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Page {
    /// Faders and channel volumes
    Mixer,
    /// Microphone setup
    Microphone,
    /// Effects (full-size only)
    Effects,
    /// Sampler (full-size only)
    Sampler,
    /// Lighting
    Lighting,
    /// Daemon and device settings
    Settings,
    /// Fallback for unknown paths
    NotFound,
}

/// One entry of the routing table.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Route {
    /// Normalised path, always starting with `/`
    pub path: &'static str,
    /// Navigation label
    pub name: &'static str,
    /// Page rendered for this path
    pub page: Page,
    /// Hidden on the Mini
    pub full_only: bool,
}

const NOT_FOUND: Route = Route {
    path: "",
    name: "Not Found",
    page: Page::NotFound,
    full_only: false,
};

const STANDARD_ROUTES: &[Route] = &[
    Route {
        path: "/",
        name: "Mixer",
        page: Page::Mixer,
        full_only: false,
    },
    Route {
        path: "/microphone",
        name: "Microphone",
        page: Page::Microphone,
        full_only: false,
    },
    Route {
        path: "/effects",
        name: "Effects",
        page: Page::Effects,
        full_only: true,
    },
    Route {
        path: "/sampler",
        name: "Sampler",
        page: Page::Sampler,
        full_only: true,
    },
    Route {
        path: "/lighting",
        name: "Lighting",
        page: Page::Lighting,
        full_only: false,
    },
    Route {
        path: "/settings",
        name: "Settings",
        page: Page::Settings,
        full_only: false,
    },
];

/// Ordered set of routes.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RouteTable {
    routes: Vec<Route>,
}

impl RouteTable {
    /// Build a table from explicit routes.
    pub fn new(routes: Vec<Route>) -> Self {
        Self { routes }
    }

    /// The application's routing configuration.
    pub fn standard() -> Self {
        Self::new(STANDARD_ROUTES.to_vec())
    }

    /// All routes, in navigation order.
    pub fn routes(&self) -> &[Route] {
        &self.routes
    }

    /// Routes shown in the navigation for the given hardware variant.
    pub fn visible_routes(&self, mini: bool) -> impl Iterator<Item = &Route> + '_ {
        self.routes.iter().filter(move |r| !(mini && r.full_only))
    }

    /// Resolve a location (path or `#/path` hash) to a route.
    ///
    /// Unknown paths resolve to a `NotFound` route.
    pub fn resolve(&self, location: &str) -> Route {
        let path = normalise(location);
        self.routes
            .iter()
            .find(|r| r.path == path)
            .copied()
            .unwrap_or(NOT_FOUND)
    }

    /// Hash form of a route path, for links.
    pub fn href(route: &Route) -> String {
        format!("#{}", route.path)
    }
}

impl Default for RouteTable {
    fn default() -> Self {
        Self::standard()
    }
}

fn normalise(location: &str) -> String {
    let path = location.strip_prefix('#').unwrap_or(location);
    let path = path.split(['?', '#']).next().unwrap_or("");
    let path = path.trim_end_matches('/');
    if path.starts_with('/') {
        path.to_string()
    } else {
        format!("/{}", path)
    }
}
