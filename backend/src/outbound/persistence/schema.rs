//! Diesel table definition for the `users` table.
//!
//! Schema migrations are out of scope for this service; the table is
//! expected to exist with this exact shape:
//!
//! ```sql
//! CREATE TABLE users (
//!     id    SERIAL PRIMARY KEY,
//!     name  VARCHAR NOT NULL UNIQUE,
//!     email VARCHAR NOT NULL UNIQUE,
//!     age   INTEGER NOT NULL
//! );
//! ```
//!
//! The default constraint names (`users_name_key`, `users_email_key`) are
//! what the duplicate-key mapping reports to clients.

diesel::table! {
    /// Registered users.
    users (id) {
        /// Primary key, assigned by the database on insert.
        id -> Int4,
        /// Unique display name.
        name -> Varchar,
        /// Unique email address.
        email -> Varchar,
        /// Age in years.
        age -> Int4,
    }
}
