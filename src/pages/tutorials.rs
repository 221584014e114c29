//! Tutorial page templates: chart walkthroughs and component galleries.
//!
//! Template files live under `templates/tutorials/`.

use askama::Template;

// Chart tutorials

#[derive(Template)]
#[template(path = "tutorials/bar-column-charts.html")]
pub struct BarColumnChartsPage;

#[derive(Template)]
#[template(path = "tutorials/line-area-charts.html")]
pub struct LineAreaChartsPage;

#[derive(Template)]
#[template(path = "tutorials/pie-donut-charts.html")]
pub struct PieDonutChartsPage;

#[derive(Template)]
#[template(path = "tutorials/scatter-bubble-charts.html")]
pub struct ScatterBubbleChartsPage;

#[derive(Template)]
#[template(path = "tutorials/heatmap-treemap-charts.html")]
pub struct HeatmapTreemapChartsPage;

#[derive(Template)]
#[template(path = "tutorials/radar-polar-charts.html")]
pub struct RadarPolarChartsPage;

// Component tutorials

#[derive(Template)]
#[template(path = "tutorials/layout-components.html")]
pub struct LayoutComponentsPage;

#[derive(Template)]
#[template(path = "tutorials/navigation-elements.html")]
pub struct NavigationElementsPage;

#[derive(Template)]
#[template(path = "tutorials/forms-inputs.html")]
pub struct FormsInputsPage;

#[derive(Template)]
#[template(path = "tutorials/cards-modals.html")]
pub struct CardsModalsPage;

#[derive(Template)]
#[template(path = "tutorials/tables-data-display.html")]
pub struct TablesDataDisplayPage;

#[derive(Template)]
#[template(path = "tutorials/responsive-design.html")]
pub struct ResponsiveDesignPage;
