//! HTTP inbound adapter exposing the REST endpoints.

pub mod error;
pub mod health;
pub mod home;
pub mod state;
pub mod users;
pub mod validation;

pub use error::ApiResult;
