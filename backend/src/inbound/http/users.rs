//! User CRUD HTTP handlers.
//!
//! ```text
//! GET    /api/users/      list the collection
//! POST   /api/users/      create, answer with the full collection (201)
//! GET    /api/users/{id}  fetch one user
//! PATCH  /api/users/{id}  full replacement of name/email/age
//! DELETE /api/users/{id}  delete, answer with the remaining collection
//! ```
//!
//! POST and DELETE answering with the whole collection (rather than the
//! affected row) is part of the published contract and is kept as-is.

use actix_web::{HttpResponse, delete, get, patch, post, web};
use serde::{Deserialize, Serialize};
use serde_json::json;
use utoipa::ToSchema;

use crate::domain::ports::UserStoreError;
use crate::domain::{Error, User, UserDraft};
use crate::inbound::http::ApiResult;
use crate::inbound::http::state::HttpState;
use crate::inbound::http::validation::require_field;

/// Request payload shared by `POST` and `PATCH`.
///
/// All three fields are required; `PATCH` overwrites every field rather than
/// merging. Example JSON: `{"name":"Alice","email":"a@x.com","age":30}`
#[derive(Debug, Deserialize, Serialize, ToSchema)]
pub struct UserPayload {
    /// Unique display name.
    pub name: Option<String>,
    /// Unique email address.
    pub email: Option<String>,
    /// Age in years.
    pub age: Option<i32>,
}

/// Response body for a single user; the field set is fixed across every
/// endpoint that returns users.
#[derive(Debug, Serialize, ToSchema)]
pub struct UserResponse {
    /// Storage-assigned primary key.
    pub id: i32,
    /// Unique display name.
    pub name: String,
    /// Unique email address.
    pub email: String,
    /// Age in years.
    pub age: i32,
}

impl From<User> for UserResponse {
    fn from(value: User) -> Self {
        Self {
            id: value.id,
            name: value.name,
            email: value.email,
            age: value.age,
        }
    }
}

fn to_collection(users: Vec<User>) -> Vec<UserResponse> {
    users.into_iter().map(UserResponse::from).collect()
}

fn parse_payload(payload: UserPayload) -> Result<UserDraft, Error> {
    Ok(UserDraft {
        name: require_field(payload.name, "name")?,
        email: require_field(payload.email, "email")?,
        age: require_field(payload.age, "age")?,
    })
}

fn user_not_found() -> Error {
    Error::not_found("User not found")
}

/// Map store failures to the domain error envelope.
fn map_store_error(error: UserStoreError) -> Error {
    match error {
        UserStoreError::Duplicate { constraint } => {
            Error::conflict("user name or email already exists")
                .with_details(json!({ "constraint": constraint }))
        }
        UserStoreError::Connection { message } => Error::service_unavailable(message),
        UserStoreError::Query { message } => Error::internal(message),
    }
}

/// List every user.
#[utoipa::path(
    get,
    path = "/api/users/",
    responses(
        (status = 200, description = "All users", body = [UserResponse]),
        (status = 500, description = "Internal server error", body = Error)
    ),
    tags = ["users"],
    operation_id = "listUsers"
)]
#[get("/users/")]
pub async fn list_users(state: web::Data<HttpState>) -> ApiResult<web::Json<Vec<UserResponse>>> {
    let users = state.users.list().await.map_err(map_store_error)?;
    Ok(web::Json(to_collection(users)))
}

/// Create a user and return the full updated collection.
#[utoipa::path(
    post,
    path = "/api/users/",
    request_body = UserPayload,
    responses(
        (status = 201, description = "All users, including the new one", body = [UserResponse]),
        (status = 400, description = "Missing required field", body = Error),
        (status = 409, description = "Duplicate name or email", body = Error),
        (status = 500, description = "Internal server error", body = Error)
    ),
    tags = ["users"],
    operation_id = "createUser"
)]
#[post("/users/")]
pub async fn create_user(
    state: web::Data<HttpState>,
    payload: web::Json<UserPayload>,
) -> ApiResult<HttpResponse> {
    let draft = parse_payload(payload.into_inner())?;
    let users = state.users.insert(&draft).await.map_err(map_store_error)?;
    Ok(HttpResponse::Created().json(to_collection(users)))
}

/// Fetch one user by id.
#[utoipa::path(
    get,
    path = "/api/users/{id}",
    params(("id" = i32, Path, description = "User id")),
    responses(
        (status = 200, description = "The user", body = UserResponse),
        (status = 404, description = "Unknown user id", body = Error),
        (status = 500, description = "Internal server error", body = Error)
    ),
    tags = ["users"],
    operation_id = "getUser"
)]
#[get("/users/{id}")]
pub async fn get_user(
    state: web::Data<HttpState>,
    id: web::Path<i32>,
) -> ApiResult<web::Json<UserResponse>> {
    let user = state
        .users
        .find(id.into_inner())
        .await
        .map_err(map_store_error)?
        .ok_or_else(user_not_found)?;
    Ok(web::Json(UserResponse::from(user)))
}

/// Replace a user's name, email, and age.
///
/// Despite the verb, this is a full replacement: all three fields are
/// required and overwritten, matching the published contract.
#[utoipa::path(
    patch,
    path = "/api/users/{id}",
    params(("id" = i32, Path, description = "User id")),
    request_body = UserPayload,
    responses(
        (status = 200, description = "The updated user", body = UserResponse),
        (status = 400, description = "Missing required field", body = Error),
        (status = 404, description = "Unknown user id", body = Error),
        (status = 409, description = "Duplicate name or email", body = Error),
        (status = 500, description = "Internal server error", body = Error)
    ),
    tags = ["users"],
    operation_id = "replaceUser"
)]
#[patch("/users/{id}")]
pub async fn replace_user(
    state: web::Data<HttpState>,
    id: web::Path<i32>,
    payload: web::Json<UserPayload>,
) -> ApiResult<web::Json<UserResponse>> {
    let draft = parse_payload(payload.into_inner())?;
    let user = state
        .users
        .replace(id.into_inner(), &draft)
        .await
        .map_err(map_store_error)?
        .ok_or_else(user_not_found)?;
    Ok(web::Json(UserResponse::from(user)))
}

/// Delete a user and return the remaining collection.
///
/// Deleting an already-deleted id yields 404, not success.
#[utoipa::path(
    delete,
    path = "/api/users/{id}",
    params(("id" = i32, Path, description = "User id")),
    responses(
        (status = 200, description = "The remaining users", body = [UserResponse]),
        (status = 404, description = "Unknown user id", body = Error),
        (status = 500, description = "Internal server error", body = Error)
    ),
    tags = ["users"],
    operation_id = "deleteUser"
)]
#[delete("/users/{id}")]
pub async fn delete_user(
    state: web::Data<HttpState>,
    id: web::Path<i32>,
) -> ApiResult<web::Json<Vec<UserResponse>>> {
    let users = state
        .users
        .remove(id.into_inner())
        .await
        .map_err(map_store_error)?
        .ok_or_else(user_not_found)?;
    Ok(web::Json(to_collection(users)))
}
