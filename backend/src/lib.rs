//! User registry backend library modules.
//!
//! A small CRUD HTTP API over a single `users` table, arranged as a
//! hexagonal crate: `domain` holds transport-agnostic types and the storage
//! port, `inbound` the Actix Web adapter, and `outbound` the Diesel-backed
//! persistence adapter.

pub mod config;
pub mod doc;
pub mod domain;
pub mod inbound;
pub mod middleware;
pub mod outbound;
pub mod server;

/// Public OpenAPI surface used by Swagger UI and tooling.
pub use doc::ApiDoc;
/// Request-scoped trace identifier.
pub use domain::TraceId;
/// Middleware attaching a trace identifier to every request.
pub use middleware::trace::Trace;
