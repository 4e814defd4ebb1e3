//! Route table of the presentation shell.
//!
//! Routes live in the URL fragment (`#/pos`) so they work the same from the
//! dev server and from a `file://` document.

use serde::Serialize;

/// Where the empty path goes.
pub const DEFAULT_ROUTE: &str = "/dashboard";

pub const NOT_FOUND_TITLE: &str = "Page Not Found";
pub const NOT_FOUND_MESSAGE: &str = "This feature is coming soon.";

/// Route-level screens, each loaded on first visit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum Screen {
    Dashboard,
    PointOfSale,
    ProductCatalog,
    InventoryAlerts,
}

impl Screen {
    pub const ALL: [Screen; 4] = [
        Screen::Dashboard,
        Screen::PointOfSale,
        Screen::ProductCatalog,
        Screen::InventoryAlerts,
    ];

    /// Path segment(s) without the leading slash.
    pub fn path(self) -> &'static str {
        match self {
            Self::Dashboard => "dashboard",
            Self::PointOfSale => "pos",
            Self::ProductCatalog => "inventory",
            Self::InventoryAlerts => "inventory/alerts",
        }
    }

    /// Script that registers the screen, relative to the document.
    pub fn module(self) -> &'static str {
        match self {
            Self::Dashboard => "screens/dashboard.js",
            Self::PointOfSale => "screens/pos.js",
            Self::ProductCatalog => "screens/inventory.js",
            Self::InventoryAlerts => "screens/inventory-alerts.js",
        }
    }

    pub fn title(self) -> &'static str {
        match self {
            Self::Dashboard => "Dashboard",
            Self::PointOfSale => "Point of Sale",
            Self::ProductCatalog => "Product Catalog",
            Self::InventoryAlerts => "Inventory Alerts",
        }
    }
}

/// Result of resolving a path against the table.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RouteMatch {
    Redirect(&'static str),
    Screen(Screen),
    NotFound,
}

#[derive(Debug, Clone)]
pub struct RouteTable {
    screens: Vec<Screen>,
}

impl Default for RouteTable {
    fn default() -> Self {
        Self {
            screens: Screen::ALL.to_vec(),
        }
    }
}

impl RouteTable {
    pub fn screens(&self) -> &[Screen] {
        &self.screens
    }

    /// Resolve a path or fragment (`/pos`, `#/pos`, `pos/`, `#/pos?tab=1`).
    /// Unknown paths are `NotFound`, never an error.
    pub fn resolve(&self, path: &str) -> RouteMatch {
        let path = normalize(path);
        if path.is_empty() {
            return RouteMatch::Redirect(DEFAULT_ROUTE);
        }
        self.screens
            .iter()
            .copied()
            .find(|screen| screen.path() == path)
            .map_or(RouteMatch::NotFound, RouteMatch::Screen)
    }

    /// Every path that resolves to something, in normalized form: the empty
    /// path plus each screen's path.
    pub fn known_paths(&self) -> impl Iterator<Item = &'static str> + '_ {
        std::iter::once("").chain(self.screens.iter().map(|s| s.path()))
    }

    /// `{ "<path>": { "redirect": ... } | { "module": ..., "title": ... } }`,
    /// one entry per [`known_paths`](Self::known_paths) as [`resolve`](Self::resolve)
    /// decides it. Paths absent from the map are not found.
    pub fn to_json(&self) -> serde_json::Value {
        let map = self
            .known_paths()
            .filter_map(|path| {
                let view = match self.resolve(path) {
                    RouteMatch::Redirect(target) => serde_json::json!({ "redirect": target }),
                    RouteMatch::Screen(s) => {
                        serde_json::json!({ "module": s.module(), "title": s.title() })
                    }
                    RouteMatch::NotFound => return None,
                };
                Some((path.to_string(), view))
            })
            .collect();
        serde_json::Value::Object(map)
    }
}

/// Same normalization `shell.js` applies to `location.hash`.
fn normalize(path: &str) -> &str {
    let path = path.strip_prefix('#').unwrap_or(path);
    let path = path.split(['?', '#']).next().unwrap_or_default();
    path.trim_matches('/')
}
