//! Port abstraction for user persistence adapters and their errors.
//!
//! Production backs this port with the Diesel adapter in
//! `outbound::persistence`; tests and pool-less startup use
//! [`InMemoryUserStore`].

use async_trait::async_trait;
use tokio::sync::RwLock;

use crate::domain::{User, UserDraft};

/// Persistence errors raised by user store adapters.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum UserStoreError {
    /// Store connection could not be established.
    #[error("user store connection failed: {message}")]
    Connection {
        /// Adapter-supplied description of the failure.
        message: String,
    },

    /// Query or mutation failed during execution.
    #[error("user store query failed: {message}")]
    Query {
        /// Adapter-supplied description of the failure.
        message: String,
    },

    /// A write violated a uniqueness constraint on `name` or `email`.
    #[error("unique constraint violated: {constraint}")]
    Duplicate {
        /// Name of the violated constraint.
        constraint: String,
    },
}

impl UserStoreError {
    /// Create a connection error with the given message.
    pub fn connection(message: impl Into<String>) -> Self {
        Self::Connection {
            message: message.into(),
        }
    }

    /// Create a query error with the given message.
    pub fn query(message: impl Into<String>) -> Self {
        Self::Query {
            message: message.into(),
        }
    }

    /// Create a duplicate-key error naming the violated constraint.
    pub fn duplicate(constraint: impl Into<String>) -> Self {
        Self::Duplicate {
            constraint: constraint.into(),
        }
    }
}

/// Storage port for the `users` table.
///
/// The collection-returning mutations (`insert`, `remove`) exist because the
/// API contract answers those requests with the full user collection; doing
/// the write and the follow-up read in one port call lets adapters run both
/// inside a single transaction.
#[async_trait]
pub trait UserStore: Send + Sync {
    /// Return every user in storage order.
    async fn list(&self) -> Result<Vec<User>, UserStoreError>;

    /// Insert a new user and return the full updated collection.
    async fn insert(&self, draft: &UserDraft) -> Result<Vec<User>, UserStoreError>;

    /// Fetch a user by identifier.
    async fn find(&self, id: i32) -> Result<Option<User>, UserStoreError>;

    /// Overwrite all mutable fields of an existing user.
    ///
    /// Returns `None` when no row with `id` exists.
    async fn replace(&self, id: i32, draft: &UserDraft) -> Result<Option<User>, UserStoreError>;

    /// Delete a user and return the remaining collection.
    ///
    /// Returns `None` when no row with `id` exists; deletion is not
    /// idempotent at the API level.
    async fn remove(&self, id: i32) -> Result<Option<Vec<User>>, UserStoreError>;
}

/// Constraint names mirroring the PostgreSQL schema, so the in-memory store
/// reports duplicates the same way the Diesel adapter does.
const NAME_CONSTRAINT: &str = "users_name_key";
const EMAIL_CONSTRAINT: &str = "users_email_key";

#[derive(Debug, Default)]
struct InMemoryState {
    next_id: i32,
    rows: Vec<User>,
}

/// Deterministic in-memory [`UserStore`] used by tests and local runs
/// without a database.
///
/// Enforces the same `name`/`email` uniqueness rules as the SQL schema and
/// assigns ids in insertion order starting from 1.
#[derive(Debug, Default)]
pub struct InMemoryUserStore {
    state: RwLock<InMemoryState>,
}

impl InMemoryUserStore {
    /// Create an empty store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    fn check_unique(rows: &[User], draft: &UserDraft, skip_id: Option<i32>) -> Result<(), UserStoreError> {
        for row in rows {
            if Some(row.id) == skip_id {
                continue;
            }
            if row.name == draft.name {
                return Err(UserStoreError::duplicate(NAME_CONSTRAINT));
            }
            if row.email == draft.email {
                return Err(UserStoreError::duplicate(EMAIL_CONSTRAINT));
            }
        }
        Ok(())
    }
}

#[async_trait]
impl UserStore for InMemoryUserStore {
    async fn list(&self) -> Result<Vec<User>, UserStoreError> {
        Ok(self.state.read().await.rows.clone())
    }

    async fn insert(&self, draft: &UserDraft) -> Result<Vec<User>, UserStoreError> {
        let mut state = self.state.write().await;
        Self::check_unique(&state.rows, draft, None)?;
        state.next_id += 1;
        let id = state.next_id;
        state.rows.push(draft.clone().into_user(id));
        Ok(state.rows.clone())
    }

    async fn find(&self, id: i32) -> Result<Option<User>, UserStoreError> {
        let state = self.state.read().await;
        Ok(state.rows.iter().find(|row| row.id == id).cloned())
    }

    async fn replace(&self, id: i32, draft: &UserDraft) -> Result<Option<User>, UserStoreError> {
        let mut state = self.state.write().await;
        // Existence comes first: replacing a missing row is "not found" even
        // when the payload collides with another row's unique values.
        if !state.rows.iter().any(|row| row.id == id) {
            return Ok(None);
        }
        Self::check_unique(&state.rows, draft, Some(id))?;
        let Some(row) = state.rows.iter_mut().find(|row| row.id == id) else {
            return Ok(None);
        };
        row.name = draft.name.clone();
        row.email = draft.email.clone();
        row.age = draft.age;
        Ok(Some(row.clone()))
    }

    async fn remove(&self, id: i32) -> Result<Option<Vec<User>>, UserStoreError> {
        let mut state = self.state.write().await;
        let before = state.rows.len();
        state.rows.retain(|row| row.id != id);
        if state.rows.len() == before {
            return Ok(None);
        }
        Ok(Some(state.rows.clone()))
    }
}
