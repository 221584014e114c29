//! Routing subsystem.
//!
//! # Data Flow
//! ```text
//! Startup:
//!     ROUTES (const path → template_id pairs)
//!     → RouteTable::new() (uniqueness check, freeze)
//!     → http::server registers one axum route per entry
//!
//! Per request:
//!     axum matches the exact path
//!     → handler renders the entry's template_id
//!     → unmatched paths never reach a handler (framework 404)
//! ```
//!
//! # Design Decisions
//! - Routes are compile-time constants, immutable at runtime
//! - Exact-match paths only: no wildcards, no parameters
//! - Deterministic: same path always resolves to the same template
//! - Concurrent reads need no locking (table is read-only after build)

pub mod table;

pub use table::{Route, RouteTable, ROUTES};
