//! HTTP protocol handling subsystem.
//!
//! # Data Flow
//! ```text
//! TCP connection
//!     → server.rs (axum setup, one route per table entry)
//!     → request.rs (request ID injection)
//!     → pages::render (template lookup)
//!     → HTML response to client
//! ```

pub mod request;
pub mod server;

pub use request::request_id_layers;
pub use server::HttpServer;
