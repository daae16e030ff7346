//! Domain primitives and the storage port.
//!
//! Purpose: define strongly typed domain entities used by the HTTP and
//! persistence layers. Types here are transport agnostic; inbound adapters
//! map [`Error`] to HTTP responses and outbound adapters map their failures
//! to [`ports::UserStoreError`].

pub mod error;
pub mod ports;
pub mod trace_id;
pub mod user;

pub use self::error::{Error, ErrorCode, ErrorValidationError};
pub use self::trace_id::TraceId;
pub use self::user::{User, UserDraft};

/// Response header carrying the request trace identifier.
pub const TRACE_ID_HEADER: &str = "x-trace-id";
