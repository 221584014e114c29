//! Server-rendered analytics dashboard.
//!
//! A static-page router: each URL path maps to exactly one HTML template,
//! rendered with no parameters and no per-request state.

// Core subsystems
pub mod config;
pub mod http;
pub mod pages;
pub mod routing;

// Cross-cutting concerns
pub mod lifecycle;
pub mod observability;

pub use config::ServerConfig;
pub use http::HttpServer;
pub use lifecycle::Shutdown;
pub use routing::{Route, RouteTable, ROUTES};
