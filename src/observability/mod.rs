//! Observability subsystem.
//!
//! # Data Flow
//! ```text
//! All subsystems produce:
//!     → logging.rs (structured log events, tracing)
//!     → metrics.rs (counters, histograms)
//!
//! Consumers:
//!     → Log aggregation (stdout)
//!     → Metrics endpoint (Prometheus scrape, optional)
//! ```
//!
//! # Design Decisions
//! - Structured logging via tracing; filter controlled by RUST_LOG
//! - Request ID flows through trace spans via the request-id middleware
//! - Metric recording is a no-op unless the exporter is installed

pub mod logging;
pub mod metrics;
