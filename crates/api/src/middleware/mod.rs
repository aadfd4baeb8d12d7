//! Request middleware.
//!
//! - [`auth::require_token`] -- Rejects requests whose `Authorization` header
//!   does not match the configured token.

pub mod auth;
