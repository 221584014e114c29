//! HTTP server setup and dispatch.
//!
//! # Responsibilities
//! - Build the axum Router from the route table
//! - Wire up middleware (tracing, timeout, request ID)
//! - Serve on a bound listener with graceful shutdown
//! - Map render failures to 500 responses
//!
//! # Design Decisions
//! - One axum route per table entry; each handler captures its template_id
//! - Unmatched paths fall through to axum's built-in 404, no custom fallback
//! - Handlers hold no state: every request is an independent render

use std::time::{Duration, Instant};

use axum::{
    http::StatusCode,
    response::{Html, IntoResponse, Response},
    routing::get,
    Router,
};
use tokio::net::TcpListener;
use tokio::sync::broadcast;
use tower_http::{timeout::TimeoutLayer, trace::TraceLayer};

use crate::config::ServerConfig;
use crate::http::request::request_id_layers;
use crate::observability::metrics;
use crate::routing::RouteTable;

/// HTTP server for the dashboard.
pub struct HttpServer {
    router: Router,
    config: ServerConfig,
}

impl HttpServer {
    /// Create a new HTTP server with the given configuration.
    pub fn new(config: ServerConfig) -> Self {
        let table = RouteTable::new();
        let router = Self::build_router(&config, &table);
        Self { router, config }
    }

    /// Build the axum router: one GET route per table entry, plus the
    /// middleware stack.
    fn build_router(config: &ServerConfig, table: &RouteTable) -> Router {
        let mut router = Router::new();
        for route in table.iter() {
            let path = route.path;
            let template_id = route.template_id;
            router = router.route(path, get(move || page_handler(path, template_id)));
        }

        let (set_request_id, propagate_request_id) = request_id_layers();
        router
            .layer(TimeoutLayer::new(Duration::from_secs(
                config.listener.request_timeout_secs,
            )))
            .layer(propagate_request_id)
            .layer(TraceLayer::new_for_http())
            .layer(set_request_id)
    }

    /// Run the server, accepting connections on the given listener.
    ///
    /// Stops on SIGINT/SIGTERM or when the shutdown channel fires.
    pub async fn run(
        self,
        listener: TcpListener,
        mut shutdown: broadcast::Receiver<()>,
    ) -> Result<(), std::io::Error> {
        let addr = listener.local_addr()?;
        tracing::info!(
            address = %addr,
            routes = crate::routing::ROUTES.len(),
            "HTTP server starting"
        );

        axum::serve(listener, self.router)
            .with_graceful_shutdown(async move {
                tokio::select! {
                    () = crate::lifecycle::signals::terminate() => {}
                    _ = shutdown.recv() => {
                        tracing::info!("Shutdown requested");
                    }
                }
            })
            .await?;

        tracing::info!("HTTP server stopped");
        Ok(())
    }

    /// Get a reference to the config.
    pub fn config(&self) -> &ServerConfig {
        &self.config
    }
}

/// Render one page. The path and template_id come from the route table at
/// router construction; no per-request data is involved.
async fn page_handler(path: &'static str, template_id: &'static str) -> Response {
    let start = Instant::now();
    match crate::pages::render(template_id) {
        Ok(html) => {
            metrics::record_page_request(path, StatusCode::OK.as_u16(), start);
            Html(html).into_response()
        }
        Err(e) => {
            tracing::error!(path, template_id, error = %e, "Page render failed");
            metrics::record_page_request(
                path,
                StatusCode::INTERNAL_SERVER_ERROR.as_u16(),
                start,
            );
            (StatusCode::INTERNAL_SERVER_ERROR, "Template rendering failed").into_response()
        }
    }
}
