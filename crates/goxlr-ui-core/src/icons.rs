//! Icon set and icon library.

use std::collections::BTreeSet;

/// Solid-style Font Awesome symbols used by the UI.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Icon {
    /// Dropdown chevron
    AngleDown,
    /// Interaction / button-press
    HandPointer,
    /// Hold timers
    Clock,
    /// Lighting
    Palette,
    /// Settings
    Gear,
    /// Muted channel
    VolumeXmark,
}

/// Icons registered by the bootstrapper.
pub const STATIC_ICONS: [Icon; 6] = [
    Icon::AngleDown,
    Icon::HandPointer,
    Icon::Clock,
    Icon::Palette,
    Icon::Gear,
    Icon::VolumeXmark,
];

impl Icon {
    /// Font Awesome icon name.
    pub fn name(&self) -> &'static str {
        match self {
            Icon::AngleDown => "angle-down",
            Icon::HandPointer => "hand-pointer",
            Icon::Clock => "clock",
            Icon::Palette => "palette",
            Icon::Gear => "gear",
            Icon::VolumeXmark => "volume-xmark",
        }
    }

    /// CSS classes for the solid web-font rendering.
    pub fn css_class(&self) -> String {
        format!("fa-solid fa-{}", self.name())
    }

    /// Find an icon by name. Accepts `fa-` prefixed names and the legacy
    /// `volume-mute` alias.
    pub fn from_name(name: &str) -> Option<Icon> {
        let name = name.strip_prefix("fa-").unwrap_or(name);
        match name {
            "volume-mute" | "volume-muted" => Some(Icon::VolumeXmark),
            "cog" => Some(Icon::Gear),
            _ => STATIC_ICONS.iter().copied().find(|icon| icon.name() == name),
        }
    }
}

/// Set of icons available to icon-rendering components.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct IconLibrary {
    icons: BTreeSet<Icon>,
}

impl IconLibrary {
    /// Create an empty library.
    pub fn new() -> Self {
        Self::default()
    }

    /// Register icons. Adding an icon twice is a no-op.
    pub fn add(&mut self, icons: &[Icon]) {
        self.icons.extend(icons.iter().copied());
    }

    /// Check if an icon is registered.
    pub fn contains(&self, icon: Icon) -> bool {
        self.icons.contains(&icon)
    }

    /// Resolve a name to a registered icon.
    pub fn lookup(&self, name: &str) -> Option<Icon> {
        Icon::from_name(name).filter(|icon| self.contains(*icon))
    }

    /// Number of registered icons.
    pub fn len(&self) -> usize {
        self.icons.len()
    }

    /// Check if no icons are registered.
    pub fn is_empty(&self) -> bool {
        self.icons.is_empty()
    }
}
