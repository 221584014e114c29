//! The static route table.
//!
//! # Responsibilities
//! - Hold the complete (path, template_id) mapping
//! - Exact-match lookup for a request path
//! - Expose iteration for router construction and tests
//!
//! # Design Decisions
//! - Immutable after construction (thread-safe without locks)
//! - Exact string match only; no prefixes, no parameters
//! - Template identifiers mirror the template file layout on disk

use std::collections::HashMap;

/// A single static mapping from a URL path to a template identifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Route {
    /// Request path, matched exactly (e.g. `/sales-drilldown`).
    pub path: &'static str,

    /// Identifier of the template resource rendered for this path.
    pub template_id: &'static str,
}

/// Every page served by the dashboard, in navigation order.
///
/// Dashboard pages first, then the chart tutorials, then the component
/// tutorials. Tutorial templates live under `templates/tutorials/`.
pub const ROUTES: &[Route] = &[
    // Dashboard pages
    Route { path: "/", template_id: "index.html" },
    Route { path: "/sales-drilldown", template_id: "sales-drilldown.html" },
    Route { path: "/geographic-drilldown", template_id: "geographic-drilldown.html" },
    Route { path: "/time-drilldown", template_id: "time-drilldown.html" },
    Route { path: "/user-behavior-drilldown", template_id: "user-behavior-drilldown.html" },
    Route { path: "/customer-analytics", template_id: "customer-analytics.html" },
    Route { path: "/marketing-performance", template_id: "marketing-performance.html" },
    Route { path: "/inventory-management", template_id: "inventory-management.html" },
    Route { path: "/financial-overview", template_id: "financial-overview.html" },
    Route { path: "/product-analytics", template_id: "product-analytics.html" },
    Route { path: "/product-hierarchy-drilldown", template_id: "product-hierarchy-drilldown.html" },
    // Chart tutorial pages
    Route { path: "/bar-column-charts", template_id: "tutorials/bar-column-charts.html" },
    Route { path: "/line-area-charts", template_id: "tutorials/line-area-charts.html" },
    Route { path: "/pie-donut-charts", template_id: "tutorials/pie-donut-charts.html" },
    Route { path: "/scatter-bubble-charts", template_id: "tutorials/scatter-bubble-charts.html" },
    Route { path: "/heatmap-treemap-charts", template_id: "tutorials/heatmap-treemap-charts.html" },
    Route { path: "/radar-polar-charts", template_id: "tutorials/radar-polar-charts.html" },
    // Component tutorial pages
    Route { path: "/layout-components", template_id: "tutorials/layout-components.html" },
    Route { path: "/navigation-elements", template_id: "tutorials/navigation-elements.html" },
    Route { path: "/forms-inputs", template_id: "tutorials/forms-inputs.html" },
    Route { path: "/cards-modals", template_id: "tutorials/cards-modals.html" },
    Route { path: "/tables-data-display", template_id: "tutorials/tables-data-display.html" },
    Route { path: "/responsive-design", template_id: "tutorials/responsive-design.html" },
];

/// Immutable lookup over [`ROUTES`].
///
/// Built once at startup; concurrent reads are safe because nothing mutates
/// the table after construction.
#[derive(Debug)]
pub struct RouteTable {
    by_path: HashMap<&'static str, Route>,
}

impl RouteTable {
    /// Build the lookup table from the const route list.
    ///
    /// Panics in debug builds if two routes share a path; release behavior
    /// is covered by the uniqueness unit test.
    pub fn new() -> Self {
        let mut by_path = HashMap::with_capacity(ROUTES.len());
        for route in ROUTES {
            let previous = by_path.insert(route.path, *route);
            debug_assert!(previous.is_none(), "duplicate route path {}", route.path);
        }
        Self { by_path }
    }

    /// Resolve a request path to its route, if registered.
    pub fn lookup(&self, path: &str) -> Option<&Route> {
        self.by_path.get(path)
    }

    /// Iterate all registered routes.
    pub fn iter(&self) -> impl Iterator<Item = &Route> {
        ROUTES.iter()
    }

    /// Number of registered routes.
    pub fn len(&self) -> usize {
        self.by_path.len()
    }

    pub fn is_empty(&self) -> bool {
        self.by_path.is_empty()
    }
}

impl Default for RouteTable {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_route_count() {
        assert_eq!(ROUTES.len(), 23);
        assert_eq!(RouteTable::new().len(), 23);
    }

    #[test]
    fn test_paths_are_unique() {
        let paths: HashSet<_> = ROUTES.iter().map(|r| r.path).collect();
        assert_eq!(paths.len(), ROUTES.len());
    }

    #[test]
    fn test_lookup_registered_path() {
        let table = RouteTable::new();
        let route = table.lookup("/sales-drilldown").expect("route registered");
        assert_eq!(route.template_id, "sales-drilldown.html");

        let root = table.lookup("/").expect("root registered");
        assert_eq!(root.template_id, "index.html");
    }

    #[test]
    fn test_lookup_is_exact_match() {
        let table = RouteTable::new();
        assert!(table.lookup("/sales-drilldown/").is_none());
        assert!(table.lookup("/sales").is_none());
        assert!(table.lookup("/nonexistent").is_none());
    }

    #[test]
    fn test_tutorial_templates_are_namespaced() {
        let table = RouteTable::new();
        let route = table.lookup("/bar-column-charts").expect("route registered");
        assert!(route.template_id.starts_with("tutorials/"));
    }
}
