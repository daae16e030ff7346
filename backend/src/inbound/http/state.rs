//! Shared HTTP adapter state.
//!
//! HTTP handlers accept this state via `actix_web::web::Data` so they only
//! depend on the domain port and remain testable without I/O.

use std::sync::Arc;

use crate::domain::ports::{InMemoryUserStore, UserStore};

/// Dependency bundle for HTTP handlers.
#[derive(Clone)]
pub struct HttpState {
    /// Storage port backing every user endpoint.
    pub users: Arc<dyn UserStore>,
}

impl HttpState {
    /// Construct state around the given store.
    pub fn new(users: Arc<dyn UserStore>) -> Self {
        Self { users }
    }

    /// State backed by the in-memory store, for tests and pool-less runs.
    #[must_use]
    pub fn in_memory() -> Self {
        Self::new(Arc::new(InMemoryUserStore::new()))
    }
}
