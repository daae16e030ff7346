//! Application settings loaded via OrthoConfig.

use ortho_config::OrthoConfig;
use serde::Deserialize;

/// Runtime settings for the user registry server.
///
/// Values come from the environment (prefix `USER_API_`), configuration
/// files, or CLI flags, merged by OrthoConfig. Without a `database_url` the
/// server falls back to the in-memory store, which is intended for local
/// development only.
#[derive(Debug, Clone, Deserialize, OrthoConfig)]
#[ortho_config(prefix = "USER_API")]
pub struct AppSettings {
    /// PostgreSQL connection URL; omit to run against the in-memory store.
    pub database_url: Option<String>,
    /// Socket address to bind the HTTP server to.
    #[ortho_config(default = String::from("0.0.0.0:8080"))]
    pub bind_addr: String,
    /// Maximum number of pooled database connections.
    #[ortho_config(default = 10)]
    pub pool_max_size: u32,
}
