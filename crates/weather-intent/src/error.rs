//! Error types for weather-intent operations.
//!
//! These are hard failures outside the query lifecycle; recoverable
//! resolution states live on the query itself as
//! [`StatusCode`](crate::status::StatusCode).

use thiserror::Error;

#[derive(Error, Debug)]
pub enum IntentError {
    #[error("unknown locale: {0}")]
    UnknownLocale(String),

    #[error("invalid timezone: {0}")]
    InvalidTimezone(String),
}

pub type Result<T> = std::result::Result<T, IntentError>;
