//! HTTP server configuration object.

use crate::outbound::persistence::DbPool;

/// Builder-style configuration for creating the HTTP server.
pub struct ServerConfig {
    pub(crate) bind_addr: String,
    pub(crate) db_pool: Option<DbPool>,
}

impl ServerConfig {
    /// Construct a server configuration for the given bind address.
    #[must_use]
    pub fn new(bind_addr: impl Into<String>) -> Self {
        Self {
            bind_addr: bind_addr.into(),
            db_pool: None,
        }
    }

    /// Attach a database connection pool for the persistence adapter.
    ///
    /// When absent, the server falls back to the in-memory store (local
    /// development and tests only).
    #[must_use]
    pub fn with_db_pool(mut self, pool: DbPool) -> Self {
        self.db_pool = Some(pool);
        self
    }

    /// Return the address the server will bind to.
    #[must_use]
    pub fn bind_addr(&self) -> &str {
        &self.bind_addr
    }
}
