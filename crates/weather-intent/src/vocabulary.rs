//! Locale vocabulary tables used by the resolution pipeline.
//!
//! A [`Vocabulary`] is built once at startup by a locale module and treated
//! as an immutable snapshot afterwards, so it can be shared freely across
//! concurrent resolutions. All lookup keys are case-folded at construction
//! time; the original casing is kept separately and surfaces in display
//! labels.

use std::collections::HashMap;

use chrono::{NaiveDate, NaiveTime};
use serde::Serialize;

/// Case-fold a token for table lookup.
pub(crate) fn fold(token: &str) -> String {
    token.trim().to_lowercase()
}

/// Value of a named-day entry: an offset in days from the reference date
/// ("tomorrow" = 1) or an absolute calendar date.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NamedDayValue {
    Offset(i64),
    Date(NaiveDate),
}

/// Value of a named-time entry: a single time of day ("noon") or an
/// interval ("morning").
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NamedTimeValue {
    Point(NaiveTime),
    Interval(NaiveTime, NaiveTime),
}

/// Weather condition categories a query can ask about.
///
/// [`Unknown`](ConditionKind::Unknown) is a sentinel, not an error: the
/// query was recognized as a condition request, but the specific condition
/// word was not in the vocabulary.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ConditionKind {
    Rain,
    Snow,
    Thunderstorm,
    Clouds,
    Sun,
    Wind,
    Mist,
    Unknown,
}

/// Temperature conditions a query can ask about.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum TemperatureKind {
    Warm,
    Cold,
}

/// Renders a user-supplied date expression (a weekday name or a
/// "<day>. <month>" composite) for the report layer.
pub type DateLabelFormatter = fn(&str) -> String;

/// Renders an hour and optional minute for the report layer.
pub type TimeLabelFormatter = fn(u32, Option<u32>) -> String;

/// One locale's lookup tables and label formatters.
#[derive(Debug, Clone)]
pub struct Vocabulary {
    named_days: HashMap<String, (String, NamedDayValue)>,
    weekday_names: Vec<String>,
    weekday_lookup: HashMap<String, usize>,
    month_names: Vec<String>,
    month_lookup: HashMap<String, u32>,
    named_times: HashMap<String, (String, NamedTimeValue)>,
    // folded alias -> (display alias, folded named-time key)
    time_synonyms: HashMap<String, (String, String)>,
    requested_condition: HashMap<String, ConditionKind>,
    requested_temperature: HashMap<String, TemperatureKind>,
    format_date: DateLabelFormatter,
    format_time: TimeLabelFormatter,
}

impl Vocabulary {
    /// Build a vocabulary from raw locale tables.
    ///
    /// `weekday_names` is Monday-first, index-aligned to
    /// `chrono::Weekday::num_days_from_monday`; `month_names` is
    /// January-first. Every key is folded here, once.
    #[allow(clippy::too_many_arguments)]
    #[must_use]
    pub fn new(
        weekday_names: [&str; 7],
        month_names: [&str; 12],
        named_days: &[(&str, NamedDayValue)],
        named_times: &[(&str, NamedTimeValue)],
        named_time_synonyms: &[(&str, &str)],
        requested_condition: &[(&str, ConditionKind)],
        requested_temperature: &[(&str, TemperatureKind)],
        format_date: DateLabelFormatter,
        format_time: TimeLabelFormatter,
    ) -> Self {
        Self {
            named_days: named_days
                .iter()
                .map(|(name, value)| (fold(name), ((*name).to_string(), *value)))
                .collect(),
            weekday_lookup: weekday_names
                .iter()
                .enumerate()
                .map(|(index, name)| (fold(name), index))
                .collect(),
            weekday_names: weekday_names.iter().map(|name| (*name).to_string()).collect(),
            month_lookup: month_names
                .iter()
                .enumerate()
                .map(|(index, name)| (fold(name), index as u32 + 1))
                .collect(),
            month_names: month_names.iter().map(|name| (*name).to_string()).collect(),
            named_times: named_times
                .iter()
                .map(|(name, value)| (fold(name), ((*name).to_string(), *value)))
                .collect(),
            time_synonyms: named_time_synonyms
                .iter()
                .map(|(alias, canonical)| (fold(alias), ((*alias).to_string(), fold(canonical))))
                .collect(),
            requested_condition: requested_condition
                .iter()
                .map(|(word, kind)| (fold(word), *kind))
                .collect(),
            requested_temperature: requested_temperature
                .iter()
                .map(|(word, kind)| (fold(word), *kind))
                .collect(),
            format_date,
            format_time,
        }
    }

    /// Named-day entry for `token`, with the key's display form.
    #[must_use]
    pub fn named_day(&self, token: &str) -> Option<(&str, NamedDayValue)> {
        self.named_days
            .get(&fold(token))
            .map(|(name, value)| (name.as_str(), *value))
    }

    /// Calendar weekday index (Monday = 0) and display name for `token`.
    #[must_use]
    pub fn weekday(&self, token: &str) -> Option<(usize, &str)> {
        let index = *self.weekday_lookup.get(&fold(token))?;
        Some((index, self.weekday_names[index].as_str()))
    }

    /// Month number (January = 1) and display name for `token`.
    #[must_use]
    pub fn month(&self, token: &str) -> Option<(u32, &str)> {
        let number = *self.month_lookup.get(&fold(token))?;
        Some((number, self.month_names[(number - 1) as usize].as_str()))
    }

    /// Named-time entry for `token`, trying the direct table first and the
    /// synonym table second. The returned name is the form that matched, in
    /// its display casing, so a synonym labels the query with the alias.
    #[must_use]
    pub fn named_time(&self, token: &str) -> Option<(&str, NamedTimeValue)> {
        let folded = fold(token);
        if let Some((name, value)) = self.named_times.get(&folded) {
            return Some((name.as_str(), *value));
        }
        let (alias, canonical) = self.time_synonyms.get(&folded)?;
        let (_, value) = self.named_times.get(canonical)?;
        Some((alias.as_str(), *value))
    }

    #[must_use]
    pub fn condition(&self, token: &str) -> Option<ConditionKind> {
        self.requested_condition.get(&fold(token)).copied()
    }

    #[must_use]
    pub fn temperature(&self, token: &str) -> Option<TemperatureKind> {
        self.requested_temperature.get(&fold(token)).copied()
    }

    /// Render a user-supplied date expression for the report layer.
    #[must_use]
    pub fn format_date_label(&self, raw: &str) -> String {
        (self.format_date)(raw)
    }

    /// Render an hour (and optional minute) for the report layer.
    #[must_use]
    pub fn format_time_label(&self, hour: u32, minute: Option<u32>) -> String {
        (self.format_time)(hour, minute)
    }
}
