//! Dashboard page templates.
//!
//! Each page is a unit struct; the templates take no context data and are
//! rendered as-is from `templates/`.

use askama::Template;

/// Dashboard home: high-level KPIs and links into every drilldown.
#[derive(Template)]
#[template(path = "index.html")]
pub struct IndexPage;

#[derive(Template)]
#[template(path = "sales-drilldown.html")]
pub struct SalesDrilldownPage;

#[derive(Template)]
#[template(path = "geographic-drilldown.html")]
pub struct GeographicDrilldownPage;

#[derive(Template)]
#[template(path = "time-drilldown.html")]
pub struct TimeDrilldownPage;

#[derive(Template)]
#[template(path = "user-behavior-drilldown.html")]
pub struct UserBehaviorDrilldownPage;

#[derive(Template)]
#[template(path = "customer-analytics.html")]
pub struct CustomerAnalyticsPage;

#[derive(Template)]
#[template(path = "marketing-performance.html")]
pub struct MarketingPerformancePage;

#[derive(Template)]
#[template(path = "inventory-management.html")]
pub struct InventoryManagementPage;

#[derive(Template)]
#[template(path = "financial-overview.html")]
pub struct FinancialOverviewPage;

#[derive(Template)]
#[template(path = "product-analytics.html")]
pub struct ProductAnalyticsPage;

#[derive(Template)]
#[template(path = "product-hierarchy-drilldown.html")]
pub struct ProductHierarchyDrilldownPage;
