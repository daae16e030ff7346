//! PostgreSQL persistence adapter using Diesel ORM.
//!
//! Concrete implementation of the domain's `UserStore` port backed by
//! PostgreSQL via Diesel with async support through `diesel-async` and
//! `bb8` connection pooling.
//!
//! Principles:
//!
//! - **Thin adapter**: the store only translates between Diesel rows and
//!   domain types; no business logic lives here.
//! - **Internal models**: row structs (`models.rs`) and the table schema
//!   (`schema.rs`) are implementation details, never exposed to the domain.
//! - **Strongly typed errors**: every database failure is mapped to
//!   `UserStoreError`.

mod diesel_user_store;
mod models;
mod pool;
mod schema;

pub use diesel_user_store::DieselUserStore;
pub use pool::{DbPool, PoolConfig, PoolError};
