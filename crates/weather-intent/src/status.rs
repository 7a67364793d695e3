//! Recoverable status markers carried on a resolved query.

use serde::Serialize;

/// Result marker attached to a [`WeatherQuery`](crate::request::WeatherQuery).
///
/// A non-[`Ok`](StatusCode::Ok) code marks the query as unusable for fetch
/// and report purposes. Resolution itself keeps running after a code is set,
/// so the caller always receives a fully assembled query and gates further
/// processing on [`is_error`](StatusCode::is_error).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum StatusCode {
    #[default]
    Ok,
    /// A date expression was recognized but is semantically invalid
    /// (day-of-month out of range for its month).
    DateError,
    /// A recognized vocabulary shape this resolver does not support
    /// (a named day mapping to an absolute calendar date).
    NotImplemented,
}

impl StatusCode {
    /// Whether the query carrying this code must not be used for
    /// fetching or reporting.
    #[must_use]
    pub fn is_error(self) -> bool {
        !matches!(self, StatusCode::Ok)
    }

    /// Human-readable description for the caller's answer surface.
    #[must_use]
    pub fn message(self) -> &'static str {
        match self {
            StatusCode::Ok => "everything seems to be fine",
            StatusCode::DateError => "the requested date does not exist",
            StatusCode::NotImplemented => "this type of request is not implemented yet",
        }
    }
}
