//! PostgreSQL-backed `UserStore` implementation using Diesel ORM.
//!
//! This adapter implements the domain's `UserStore` port. Uniqueness of
//! `name` and `email` is enforced entirely by the database constraints; the
//! adapter never pre-checks, it only translates the resulting
//! unique-violation into [`UserStoreError::Duplicate`].

use async_trait::async_trait;
use diesel::prelude::*;
use diesel_async::scoped_futures::ScopedFutureExt;
use diesel_async::{AsyncConnection, RunQueryDsl};
use tracing::debug;

use crate::domain::ports::{UserStore, UserStoreError};
use crate::domain::{User, UserDraft};

use super::models::{NewUserRow, UserReplacement, UserRow};
use super::pool::{DbPool, PoolError};
use super::schema::users;

/// Constraint name reported when the database omits one from a unique
/// violation.
const UNKNOWN_CONSTRAINT: &str = "users_unique";

/// Diesel-backed implementation of the `UserStore` port.
///
/// The collection-returning mutations (`insert`, `remove`) run the write and
/// the follow-up list inside one transaction, so each request's storage
/// operations commit atomically.
#[derive(Clone)]
pub struct DieselUserStore {
    pool: DbPool,
}

impl DieselUserStore {
    /// Create a new store with the given connection pool.
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }
}

/// Map pool errors to domain user store errors.
fn map_pool_error(error: PoolError) -> UserStoreError {
    match error {
        PoolError::Checkout { message } | PoolError::Build { message } => {
            UserStoreError::connection(message)
        }
    }
}

/// Map Diesel errors to domain user store errors.
fn map_diesel_error(error: diesel::result::Error) -> UserStoreError {
    use diesel::result::{DatabaseErrorKind, Error as DieselError};

    match &error {
        DieselError::DatabaseError(kind, info) => {
            debug!(?kind, message = info.message(), "diesel operation failed");
        }
        _ => debug!(
            error_type = %std::any::type_name_of_val(&error),
            "diesel operation failed"
        ),
    }

    match error {
        DieselError::NotFound => UserStoreError::query("record not found"),
        DieselError::QueryBuilderError(_) => UserStoreError::query("database query error"),
        DieselError::DatabaseError(kind, info) => match kind {
            DatabaseErrorKind::UniqueViolation => UserStoreError::duplicate(
                info.constraint_name().unwrap_or(UNKNOWN_CONSTRAINT).to_owned(),
            ),
            DatabaseErrorKind::ClosedConnection => {
                UserStoreError::connection("database connection error")
            }
            _ => UserStoreError::query("database error"),
        },
        _ => UserStoreError::query("database error"),
    }
}

fn rows_to_users(rows: Vec<UserRow>) -> Vec<User> {
    rows.into_iter().map(User::from).collect()
}

#[async_trait]
impl UserStore for DieselUserStore {
    async fn list(&self) -> Result<Vec<User>, UserStoreError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;

        let rows: Vec<UserRow> = users::table
            .order(users::id.asc())
            .select(UserRow::as_select())
            .load(&mut conn)
            .await
            .map_err(map_diesel_error)?;

        Ok(rows_to_users(rows))
    }

    async fn insert(&self, draft: &UserDraft) -> Result<Vec<User>, UserStoreError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;

        let new_row = NewUserRow {
            name: &draft.name,
            email: &draft.email,
            age: draft.age,
        };

        let rows = conn
            .transaction::<Vec<UserRow>, diesel::result::Error, _>(|conn| {
                async move {
                    diesel::insert_into(users::table)
                        .values(&new_row)
                        .execute(conn)
                        .await?;

                    users::table
                        .order(users::id.asc())
                        .select(UserRow::as_select())
                        .load(conn)
                        .await
                }
                .scope_boxed()
            })
            .await
            .map_err(map_diesel_error)?;

        Ok(rows_to_users(rows))
    }

    async fn find(&self, id: i32) -> Result<Option<User>, UserStoreError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;

        let row: Option<UserRow> = users::table
            .find(id)
            .select(UserRow::as_select())
            .first(&mut conn)
            .await
            .optional()
            .map_err(map_diesel_error)?;

        Ok(row.map(User::from))
    }

    async fn replace(&self, id: i32, draft: &UserDraft) -> Result<Option<User>, UserStoreError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;

        let replacement = UserReplacement {
            name: &draft.name,
            email: &draft.email,
            age: draft.age,
        };

        // A single UPDATE .. RETURNING keeps the existence check and the
        // write atomic; zero rows means the id does not exist.
        let row: Option<UserRow> = diesel::update(users::table.find(id))
            .set(&replacement)
            .returning(UserRow::as_returning())
            .get_result(&mut conn)
            .await
            .optional()
            .map_err(map_diesel_error)?;

        Ok(row.map(User::from))
    }

    async fn remove(&self, id: i32) -> Result<Option<Vec<User>>, UserStoreError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;

        let rows = conn
            .transaction::<Option<Vec<UserRow>>, diesel::result::Error, _>(|conn| {
                async move {
                    let deleted = diesel::delete(users::table.find(id)).execute(conn).await?;
                    if deleted == 0 {
                        return Ok(None);
                    }

                    users::table
                        .order(users::id.asc())
                        .select(UserRow::as_select())
                        .load(conn)
                        .await
                        .map(Some)
                }
                .scope_boxed()
            })
            .await
            .map_err(map_diesel_error)?;

        Ok(rows.map(rows_to_users))
    }
}
