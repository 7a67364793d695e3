//! # weather-intent
//!
//! Deterministic resolution of voice-assistant weather queries.
//!
//! An upstream assistant hands over up to six raw slot tokens (day, time,
//! location, item, condition, temperature). This crate turns them into a
//! normalized [`WeatherQuery`] against a locale [`Vocabulary`]: a concrete
//! calendar date, a time of day or interval, and a disambiguated "what is
//! being asked" value, with recoverable error states recorded on the query
//! instead of aborting the pipeline.
//!
//! Resolution is a pure function of (tokens, reference date, vocabulary).
//! The caller passes "today" in explicitly, so identical inputs always
//! yield identical output.
//!
//! ## Modules
//!
//! - [`resolve`] — token set + reference date + vocabulary → [`WeatherQuery`]
//! - [`vocabulary`] — locale lookup tables, case-folded once at build time
//! - [`locale`] — built-in English and German vocabularies
//! - [`request`] — the query data model
//! - [`status`] — recoverable status codes
//! - [`error`] — hard error types

pub mod error;
pub mod locale;
pub mod request;
pub mod resolve;
pub mod status;
pub mod vocabulary;

pub use error::IntentError;
pub use request::{DateShape, ForecastKind, Grain, Location, Requested, WeatherQuery};
pub use resolve::{build_query, RequestTokens};
pub use status::StatusCode;
pub use vocabulary::{
    ConditionKind, NamedDayValue, NamedTimeValue, TemperatureKind, Vocabulary,
};
