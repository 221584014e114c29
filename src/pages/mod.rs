//! Page rendering subsystem.
//!
//! # Data Flow
//! ```text
//! template_id (from the route table)
//!     → render() dispatch
//!     → askama template (compiled from templates/)
//!     → HTML string
//! ```
//!
//! # Design Decisions
//! - One template type per page; templates carry no context data
//! - Rendering takes no request state, so output is deterministic
//! - Unknown template_id is a typed error, not a panic; the HTTP layer
//!   maps any PageError to a 500

pub mod dashboard;
pub mod tutorials;

use askama::Template;
use thiserror::Error;

/// Rendering failure surfaced to the HTTP layer as a 500.
#[derive(Debug, Error)]
pub enum PageError {
    /// The route table referenced a template this dispatch does not know.
    #[error("unknown template id: {0}")]
    UnknownTemplate(String),

    /// The template engine failed while rendering.
    #[error("template render failed: {0}")]
    Render(#[from] askama::Error),
}

/// Render the page registered under `template_id`.
///
/// The identifiers mirror the template file layout: dashboard pages at the
/// top level, tutorial pages under `tutorials/`.
pub fn render(template_id: &str) -> Result<String, PageError> {
    use dashboard::*;
    use tutorials::*;

    let html = match template_id {
        "index.html" => IndexPage.render()?,
        "sales-drilldown.html" => SalesDrilldownPage.render()?,
        "geographic-drilldown.html" => GeographicDrilldownPage.render()?,
        "time-drilldown.html" => TimeDrilldownPage.render()?,
        "user-behavior-drilldown.html" => UserBehaviorDrilldownPage.render()?,
        "customer-analytics.html" => CustomerAnalyticsPage.render()?,
        "marketing-performance.html" => MarketingPerformancePage.render()?,
        "inventory-management.html" => InventoryManagementPage.render()?,
        "financial-overview.html" => FinancialOverviewPage.render()?,
        "product-analytics.html" => ProductAnalyticsPage.render()?,
        "product-hierarchy-drilldown.html" => ProductHierarchyDrilldownPage.render()?,
        "tutorials/bar-column-charts.html" => BarColumnChartsPage.render()?,
        "tutorials/line-area-charts.html" => LineAreaChartsPage.render()?,
        "tutorials/pie-donut-charts.html" => PieDonutChartsPage.render()?,
        "tutorials/scatter-bubble-charts.html" => ScatterBubbleChartsPage.render()?,
        "tutorials/heatmap-treemap-charts.html" => HeatmapTreemapChartsPage.render()?,
        "tutorials/radar-polar-charts.html" => RadarPolarChartsPage.render()?,
        "tutorials/layout-components.html" => LayoutComponentsPage.render()?,
        "tutorials/navigation-elements.html" => NavigationElementsPage.render()?,
        "tutorials/forms-inputs.html" => FormsInputsPage.render()?,
        "tutorials/cards-modals.html" => CardsModalsPage.render()?,
        "tutorials/tables-data-display.html" => TablesDataDisplayPage.render()?,
        "tutorials/responsive-design.html" => ResponsiveDesignPage.render()?,
        other => return Err(PageError::UnknownTemplate(other.to_string())),
    };
    Ok(html)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::routing::ROUTES;

    #[test]
    fn test_every_registered_template_renders() {
        for route in ROUTES {
            let html = render(route.template_id)
                .unwrap_or_else(|e| panic!("{} failed to render: {e}", route.template_id));
            assert!(!html.is_empty(), "{} rendered empty", route.template_id);
            assert!(
                html.contains("<html"),
                "{} is not an HTML document",
                route.template_id
            );
        }
    }

    #[test]
    fn test_rendering_is_deterministic() {
        let first = render("index.html").unwrap();
        let second = render("index.html").unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn test_unknown_template_id() {
        let err = render("nonexistent.html").unwrap_err();
        assert!(matches!(err, PageError::UnknownTemplate(_)));
    }
}
