//! The normalized weather query produced by the resolution pipeline.

use chrono::{NaiveDate, NaiveTime};
use serde::Serialize;

use crate::status::StatusCode;
use crate::vocabulary::{ConditionKind, TemperatureKind};

/// Which resolver branch applies and what shape [`Requested`] takes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ForecastKind {
    /// Full report for the resolved date/time, nothing specific requested.
    Full,
    /// Asks about a weather condition category ("will it rain?").
    Condition,
    /// Asks about an item ("do I need an umbrella?").
    Item,
    /// Asks about a temperature condition ("how warm will it be?").
    Temperature,
}

/// Whether the query targets a single instant/day or a time span.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum DateShape {
    #[default]
    Fixed,
    Interval,
}

/// Precision of the resolved time component.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Grain {
    #[default]
    Day,
    Hour,
}

/// Kind-dependent payload answering "what is being asked about".
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Requested {
    Condition(ConditionKind),
    /// Opaque item identifier, case-folded; the report layer interprets it.
    Item(String),
    Temperature(TemperatureKind),
}

/// Opaque location reference, passed through verbatim for the forecast
/// provider to interpret.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct Location {
    name: String,
}

impl Location {
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }

    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }
}

/// One normalized weather query.
///
/// Constructed once per incoming request with [`WeatherQuery::new`], mutated
/// in place through the resolver stages, then handed off read-only to the
/// forecast-fetch and report collaborators. Never reused across requests.
///
/// Invariants after resolution: `date` is always set (default = the
/// reference date); an [`Interval`](DateShape::Interval) shape carries both
/// `start_time` and `end_time`; [`Hour`](Grain::Hour) grain carries
/// `start_time`; `requested` is populated only when `forecast_kind` is not
/// [`Full`](ForecastKind::Full).
#[derive(Debug, Clone, Serialize)]
pub struct WeatherQuery {
    pub forecast_kind: ForecastKind,
    pub date_shape: DateShape,
    pub grain: Grain,
    /// The resolved calendar date.
    pub date: NaiveDate,
    pub start_time: Option<NaiveTime>,
    pub end_time: Option<NaiveTime>,
    /// Display rendering of the day token, for the report layer.
    pub date_label: Option<String>,
    /// Display rendering of the time token, for the report layer.
    pub time_label: Option<String>,
    pub requested: Option<Requested>,
    pub location: Option<Location>,
    pub status: StatusCode,
}

impl WeatherQuery {
    /// Default query before resolution: a fixed-shape, day-grain request
    /// for `today` with status Ok.
    #[must_use]
    pub fn new(forecast_kind: ForecastKind, today: NaiveDate) -> Self {
        Self {
            forecast_kind,
            date_shape: DateShape::Fixed,
            grain: Grain::Day,
            date: today,
            start_time: None,
            end_time: None,
            date_label: None,
            time_label: None,
            requested: None,
            location: None,
            status: StatusCode::Ok,
        }
    }
}
