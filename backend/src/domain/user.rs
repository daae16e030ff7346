//! User entity and mutation payload.

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// A registered user.
///
/// `name` and `email` are unique across all users; the storage layer
/// enforces this, never the handlers. `id` is assigned by storage on insert.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct User {
    /// Storage-assigned primary key.
    #[schema(example = 1)]
    pub id: i32,
    /// Unique display name.
    #[schema(example = "Alice")]
    pub name: String,
    /// Unique email address.
    #[schema(example = "a@x.com")]
    pub email: String,
    /// Age in years.
    #[schema(example = 30)]
    pub age: i32,
}

/// Validated payload for creating or replacing a user.
///
/// `PATCH` performs full replacement, so create and replace share this type.
/// All three fields are required; presence is checked by the inbound adapter
/// before a draft is ever constructed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UserDraft {
    /// Unique display name.
    pub name: String,
    /// Unique email address.
    pub email: String,
    /// Age in years.
    pub age: i32,
}

impl UserDraft {
    /// Materialise the draft into a [`User`] with a storage-assigned id.
    #[must_use]
    pub fn into_user(self, id: i32) -> User {
        User {
            id,
            name: self.name,
            email: self.email,
            age: self.age,
        }
    }
}
