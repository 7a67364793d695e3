//! Resolution of tokenized voice-assistant input into a [`WeatherQuery`].
//!
//! The upstream assistant has already cut the utterance into fixed slots
//! (day, time, location, item, condition, temperature). This module turns
//! those raw tokens plus a locale [`Vocabulary`] into a concrete calendar
//! date, a time of day or interval, and a normalized "what is being asked"
//! value. Nothing here reads a clock; the reference "today" is a
//! parameter, so identical inputs always produce identical output.
//!
//! Resolvers never abort: input that is recognized but invalid records an
//! error status on the query and resolution keeps going (fail-soft). The
//! caller receives a fully assembled query either way and gates fetch and
//! report work on [`StatusCode::is_error`]. Tokens that simply match
//! nothing fall back to defaults silently.

use chrono::{Datelike, Duration, NaiveDate, NaiveTime, Timelike};
use tracing::debug;

use crate::request::{DateShape, ForecastKind, Grain, Location, Requested, WeatherQuery};
use crate::status::StatusCode;
use crate::vocabulary::{fold, ConditionKind, NamedDayValue, NamedTimeValue, Vocabulary};

/// Raw slot values handed over by the argument surface. Every field is
/// optional; an empty set resolves to a full-day query for today.
#[derive(Debug, Clone, Default)]
pub struct RequestTokens {
    pub day: Option<String>,
    pub time: Option<String>,
    pub location: Option<String>,
    pub item: Option<String>,
    pub condition: Option<String>,
    pub temperature: Option<String>,
}

/// Build one [`WeatherQuery`] from the raw tokens.
///
/// The forecast kind is selected once, up front: a day or condition token
/// selects [`ForecastKind::Condition`], else an item token selects
/// [`ForecastKind::Item`], else a temperature token selects
/// [`ForecastKind::Temperature`], else the query asks for the full report.
/// A day token alone therefore yields a condition query; its requested
/// value degrades to [`ConditionKind::Unknown`] when no condition word was
/// supplied.
///
/// # Examples
///
/// ```
/// use chrono::NaiveDate;
/// use weather_intent::{build_query, locale, ForecastKind, Grain, RequestTokens};
///
/// let vocabulary = locale::english();
/// let tokens = RequestTokens {
///     day: Some("tomorrow".into()),
///     time: Some("18".into()),
///     ..RequestTokens::default()
/// };
/// let today = NaiveDate::from_ymd_opt(2026, 2, 18).unwrap();
///
/// let query = build_query(&tokens, today, &vocabulary);
/// assert_eq!(query.date, NaiveDate::from_ymd_opt(2026, 2, 19).unwrap());
/// assert_eq!(query.grain, Grain::Hour);
/// assert_eq!(query.forecast_kind, ForecastKind::Condition);
/// ```
#[must_use]
pub fn build_query(
    tokens: &RequestTokens,
    today: NaiveDate,
    vocabulary: &Vocabulary,
) -> WeatherQuery {
    let kind = select_forecast_kind(tokens);
    let mut query = WeatherQuery::new(kind, today);

    if let Some(day) = &tokens.day {
        resolve_day(&mut query, day, today, vocabulary);
        // Times only make sense relative to a spoken day; without a day
        // token the query stays at day grain for today.
        if let Some(time) = &tokens.time {
            resolve_time(&mut query, time, vocabulary);
        }
    } else {
        debug!("no day token, defaulting to today");
    }

    resolve_requested(&mut query, tokens, vocabulary);

    if let Some(location) = &tokens.location {
        query.location = Some(Location::new(location.clone()));
    }

    query
}

/// Documented precedence: condition-or-day, item, temperature, full.
fn select_forecast_kind(tokens: &RequestTokens) -> ForecastKind {
    if tokens.day.is_some() || tokens.condition.is_some() {
        ForecastKind::Condition
    } else if tokens.item.is_some() {
        ForecastKind::Item
    } else if tokens.temperature.is_some() {
        ForecastKind::Temperature
    } else {
        ForecastKind::Full
    }
}

// ── Day resolution ──────────────────────────────────────────────────────────

/// Resolve the day token, first match wins: named day, weekday name, then
/// composite "<day-number> <month-name>". A token matching none of the
/// three forms leaves the default date untouched and records no error.
fn resolve_day(query: &mut WeatherQuery, token: &str, today: NaiveDate, vocabulary: &Vocabulary) {
    if let Some((name, value)) = vocabulary.named_day(token) {
        match value {
            NamedDayValue::Offset(days) => {
                debug!("named day detected: {} (offset {})", token, days);
                query.date = today + Duration::days(days);
                query.date_label = Some(name.to_string());
            }
            NamedDayValue::Date(_) => {
                // Absolute-date named days are not supported by this tier.
                debug!("named day {} maps to an absolute date", token);
                query.status = StatusCode::NotImplemented;
            }
        }
        return;
    }

    if let Some((index, name)) = vocabulary.weekday(token) {
        // First date in [today, today+6] falling on that weekday.
        for offset in 0..7 {
            let date = today + Duration::days(offset);
            if date.weekday().num_days_from_monday() as usize == index {
                debug!("weekday detected: {} -> {}", token, date);
                query.date = date;
                query.date_label = Some(vocabulary.format_date_label(name));
                break;
            }
        }
        return;
    }

    if let Some((day_part, month_part)) = split_two(token) {
        if let Some((month, month_name)) = vocabulary.month(month_part) {
            // The label is rendered from the raw parts before the day
            // number is validated; a DateError query may still carry it.
            query.date_label =
                Some(vocabulary.format_date_label(&format!("{day_part}. {month_name}")));
            match parse_day_of_month(day_part, today.year(), month) {
                Some(date) => {
                    debug!("composite date detected: {} -> {}", token, date);
                    // Always the current year; a date already passed this
                    // year stays in the past (year rollover is not applied).
                    query.date = date;
                }
                None => {
                    debug!("day of month out of range: {}", token);
                    query.status = StatusCode::DateError;
                }
            }
        }
        return;
    }

    debug!("day token not recognized, keeping default date: {}", token);
}

// ── Time resolution ─────────────────────────────────────────────────────────

/// Resolve the time token; only invoked when a day token was present. The
/// grain is raised to hours up front and drops back to day grain when the
/// token matches nothing: an unrecognized or malformed time is "no time
/// given", not an error.
fn resolve_time(query: &mut WeatherQuery, token: &str, vocabulary: &Vocabulary) {
    query.grain = Grain::Hour;

    if let Some((name, value)) = vocabulary.named_time(token) {
        match value {
            NamedTimeValue::Point(time) => {
                debug!("named time detected: {} -> {}", token, time);
                query.start_time = Some(time);
                query.time_label = Some(name.to_string());
            }
            NamedTimeValue::Interval(start, end) => {
                debug!("named time interval detected: {} -> {}..{}", token, start, end);
                query.date_shape = DateShape::Interval;
                query.start_time = Some(start);
                query.end_time = Some(end);
                query.time_label = Some(name.to_string());
            }
        }
        return;
    }

    if let Some((hour_part, minute_part)) = split_two(token) {
        if let Some(time) = parse_hour_minute(hour_part, minute_part) {
            debug!("hour and minute detected: {}", token);
            query.start_time = Some(time);
            query.time_label =
                Some(vocabulary.format_time_label(time.hour(), Some(time.minute())));
            return;
        }
    } else if let Some(time) = parse_bare_hour(token) {
        debug!("bare hour detected: {}", token);
        query.start_time = Some(time);
        query.time_label = Some(vocabulary.format_time_label(time.hour(), None));
        return;
    }

    debug!("time token not recognized, keeping day grain: {}", token);
    query.grain = Grain::Day;
}

// ── Requested attribute ─────────────────────────────────────────────────────

/// Fill in the kind-specific "requested" payload. Exactly one branch
/// applies; a full report leaves the payload unset.
fn resolve_requested(query: &mut WeatherQuery, tokens: &RequestTokens, vocabulary: &Vocabulary) {
    match query.forecast_kind {
        ForecastKind::Condition => {
            // A condition request with an unknown or absent condition word
            // is still a valid query; the sentinel lets the report say so.
            let kind = tokens
                .condition
                .as_deref()
                .and_then(|token| vocabulary.condition(token))
                .unwrap_or(ConditionKind::Unknown);
            debug!("condition requested: {:?}", kind);
            query.requested = Some(Requested::Condition(kind));
        }
        ForecastKind::Item => {
            if let Some(item) = &tokens.item {
                // Items are opaque identifiers for the report layer;
                // casing is normalized by folding.
                debug!("item requested: {}", item);
                query.requested = Some(Requested::Item(fold(item)));
            }
        }
        ForecastKind::Temperature => {
            let kind = tokens
                .temperature
                .as_deref()
                .and_then(|token| vocabulary.temperature(token));
            debug!("temperature condition requested: {:?}", kind);
            // An unknown temperature word leaves the payload unset.
            query.requested = kind.map(Requested::Temperature);
        }
        ForecastKind::Full => {}
    }
}

// ── Parsing helpers ─────────────────────────────────────────────────────────

/// Split a token into exactly two whitespace-separated parts.
fn split_two(token: &str) -> Option<(&str, &str)> {
    let mut parts = token.split_whitespace();
    match (parts.next(), parts.next(), parts.next()) {
        (Some(first), Some(second), None) => Some((first, second)),
        _ => None,
    }
}

/// Construct a date in `year` from a "<day> <month>" token pair. A
/// non-numeric or out-of-range day yields `None`.
fn parse_day_of_month(day: &str, year: i32, month: u32) -> Option<NaiveDate> {
    let day: u32 = day.parse().ok()?;
    NaiveDate::from_ymd_opt(year, month, day)
}

/// Parse a 24-hour "<HH> <MM>" token pair.
fn parse_hour_minute(hour: &str, minute: &str) -> Option<NaiveTime> {
    let hour: u32 = hour.parse().ok()?;
    let minute: u32 = minute.parse().ok()?;
    NaiveTime::from_hms_opt(hour, minute, 0)
}

/// Parse a pure-digit token as a bare hour (minutes are not expressible
/// alone; a lone integer always means hours).
fn parse_bare_hour(token: &str) -> Option<NaiveTime> {
    let token = token.trim();
    if token.is_empty() || !token.chars().all(|c| c.is_ascii_digit()) {
        return None;
    }
    let hour: u32 = token.parse().ok()?;
    NaiveTime::from_hms_opt(hour, 0, 0)
}

// ── Tests ───────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use crate::locale;
    use crate::vocabulary::TemperatureKind;
    use proptest::prelude::*;

    /// Wednesday, February 18, 2026.
    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2026, 2, 18).unwrap()
    }

    fn date(year: i32, month: u32, day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(year, month, day).unwrap()
    }

    fn time(hour: u32, minute: u32) -> NaiveTime {
        NaiveTime::from_hms_opt(hour, minute, 0).unwrap()
    }

    fn tokens(day: Option<&str>, time: Option<&str>) -> RequestTokens {
        RequestTokens {
            day: day.map(str::to_string),
            time: time.map(str::to_string),
            ..RequestTokens::default()
        }
    }

    // ── Request builder ─────────────────────────────────────────────────

    #[test]
    fn test_empty_tokens_yield_full_day_default() {
        let query = build_query(&RequestTokens::default(), today(), &locale::english());
        assert_eq!(query.forecast_kind, ForecastKind::Full);
        assert_eq!(query.date_shape, DateShape::Fixed);
        assert_eq!(query.grain, Grain::Day);
        assert_eq!(query.date, today());
        assert_eq!(query.status, StatusCode::Ok);
        assert!(query.start_time.is_none());
        assert!(query.end_time.is_none());
        assert!(query.date_label.is_none());
        assert!(query.time_label.is_none());
        assert!(query.requested.is_none());
        assert!(query.location.is_none());
    }

    #[test]
    fn test_day_token_alone_selects_condition_kind() {
        let query = build_query(&tokens(Some("tomorrow"), None), today(), &locale::english());
        assert_eq!(query.forecast_kind, ForecastKind::Condition);
        assert_eq!(
            query.requested,
            Some(Requested::Condition(ConditionKind::Unknown))
        );
        assert_eq!(query.status, StatusCode::Ok);
    }

    #[test]
    fn test_condition_token_beats_item_and_temperature() {
        let request = RequestTokens {
            condition: Some("rain".into()),
            item: Some("umbrella".into()),
            temperature: Some("cold".into()),
            ..RequestTokens::default()
        };
        let query = build_query(&request, today(), &locale::english());
        assert_eq!(query.forecast_kind, ForecastKind::Condition);
        assert_eq!(
            query.requested,
            Some(Requested::Condition(ConditionKind::Rain))
        );
    }

    #[test]
    fn test_item_token_beats_temperature() {
        let request = RequestTokens {
            item: Some("Umbrella".into()),
            temperature: Some("cold".into()),
            ..RequestTokens::default()
        };
        let query = build_query(&request, today(), &locale::english());
        assert_eq!(query.forecast_kind, ForecastKind::Item);
        assert_eq!(query.requested, Some(Requested::Item("umbrella".into())));
    }

    #[test]
    fn test_temperature_token_selects_temperature_kind() {
        let request = RequestTokens {
            temperature: Some("cold".into()),
            ..RequestTokens::default()
        };
        let query = build_query(&request, today(), &locale::english());
        assert_eq!(query.forecast_kind, ForecastKind::Temperature);
        assert_eq!(
            query.requested,
            Some(Requested::Temperature(TemperatureKind::Cold))
        );
    }

    #[test]
    fn test_unknown_temperature_word_leaves_requested_unset() {
        let request = RequestTokens {
            temperature: Some("tepid".into()),
            ..RequestTokens::default()
        };
        let query = build_query(&request, today(), &locale::english());
        assert_eq!(query.forecast_kind, ForecastKind::Temperature);
        assert!(query.requested.is_none());
        assert_eq!(query.status, StatusCode::Ok);
    }

    #[test]
    fn test_unknown_condition_word_yields_unknown_sentinel() {
        let request = RequestTokens {
            condition: Some("frogs".into()),
            ..RequestTokens::default()
        };
        let query = build_query(&request, today(), &locale::english());
        assert_eq!(
            query.requested,
            Some(Requested::Condition(ConditionKind::Unknown))
        );
        assert_eq!(query.status, StatusCode::Ok);
    }

    #[test]
    fn test_location_is_attached_verbatim() {
        let request = RequestTokens {
            location: Some("Berlin Mitte".into()),
            ..RequestTokens::default()
        };
        let query = build_query(&request, today(), &locale::english());
        assert_eq!(query.location.unwrap().name(), "Berlin Mitte");
    }

    #[test]
    fn test_day_error_does_not_stop_time_resolution() {
        // Fail-soft: the day stage records DateError, the time stage still
        // runs and fills in its fields.
        let query = build_query(
            &tokens(Some("30 february"), Some("18")),
            today(),
            &locale::english(),
        );
        assert_eq!(query.status, StatusCode::DateError);
        assert_eq!(query.start_time, Some(time(18, 0)));
        assert_eq!(query.grain, Grain::Hour);
    }

    // ── Day resolver ────────────────────────────────────────────────────

    #[test]
    fn test_named_day_offset() {
        let query = build_query(&tokens(Some("tomorrow"), None), today(), &locale::english());
        assert_eq!(query.date, date(2026, 2, 19));
        assert_eq!(query.date_label.as_deref(), Some("tomorrow"));
        assert_eq!(query.status, StatusCode::Ok);
    }

    #[test]
    fn test_named_day_is_case_insensitive() {
        let query = build_query(&tokens(Some("ToMoRrOw"), None), today(), &locale::english());
        assert_eq!(query.date, date(2026, 2, 19));
    }

    #[test]
    fn test_named_day_absolute_date_is_not_implemented() {
        let vocabulary = Vocabulary::new(
            ["Monday", "Tuesday", "Wednesday", "Thursday", "Friday", "Saturday", "Sunday"],
            [
                "January", "February", "March", "April", "May", "June", "July", "August",
                "September", "October", "November", "December",
            ],
            &[("christmas", NamedDayValue::Date(date(2026, 12, 24)))],
            &[],
            &[],
            &[],
            &[],
            |raw| raw.to_string(),
            |hour, _| hour.to_string(),
        );
        let query = build_query(&tokens(Some("christmas"), None), today(), &vocabulary);
        assert_eq!(query.status, StatusCode::NotImplemented);
        // The date stays at the default and no label is attached.
        assert_eq!(query.date, today());
        assert!(query.date_label.is_none());
    }

    #[test]
    fn test_weekday_resolves_within_the_coming_week() {
        // Anchor is Wednesday -> Friday is two days out.
        let query = build_query(&tokens(Some("friday"), None), today(), &locale::english());
        assert_eq!(query.date, date(2026, 2, 20));
        assert_eq!(query.date_label.as_deref(), Some("on Friday"));
    }

    #[test]
    fn test_weekday_matching_today_resolves_to_today() {
        let query = build_query(&tokens(Some("wednesday"), None), today(), &locale::english());
        assert_eq!(query.date, today());
    }

    #[test]
    fn test_weekday_before_anchor_lands_next_week() {
        // Monday is behind a Wednesday anchor, so it resolves six days out.
        let query = build_query(&tokens(Some("monday"), None), today(), &locale::english());
        assert_eq!(query.date, date(2026, 2, 23));
    }

    #[test]
    fn test_composite_date() {
        let query = build_query(&tokens(Some("12 march"), None), today(), &locale::english());
        assert_eq!(query.date, date(2026, 3, 12));
        assert_eq!(query.date_label.as_deref(), Some("on 12. March"));
        assert_eq!(query.status, StatusCode::Ok);
    }

    #[test]
    fn test_composite_date_out_of_range_day() {
        let query = build_query(&tokens(Some("30 february"), None), today(), &locale::english());
        assert_eq!(query.status, StatusCode::DateError);
        assert_eq!(query.date, today());
        // The label was rendered before validation; original behavior.
        assert_eq!(query.date_label.as_deref(), Some("on 30. February"));
    }

    #[test]
    fn test_composite_date_non_numeric_day() {
        let query = build_query(&tokens(Some("first march"), None), today(), &locale::english());
        assert_eq!(query.status, StatusCode::DateError);
        assert_eq!(query.date, today());
    }

    #[test]
    fn test_composite_date_unknown_month_is_silent() {
        let query = build_query(&tokens(Some("12 pluto"), None), today(), &locale::english());
        assert_eq!(query.status, StatusCode::Ok);
        assert_eq!(query.date, today());
        assert!(query.date_label.is_none());
    }

    #[test]
    fn test_composite_date_already_passed_stays_in_current_year() {
        // Year rollover is not applied; mid-February anchor, January date.
        let query = build_query(&tokens(Some("5 january"), None), today(), &locale::english());
        assert_eq!(query.date, date(2026, 1, 5));
    }

    #[test]
    fn test_unknown_day_token_is_silent() {
        let query = build_query(&tokens(Some("someday"), None), today(), &locale::english());
        assert_eq!(query.date, today());
        assert!(query.date_label.is_none());
        assert_eq!(query.status, StatusCode::Ok);
    }

    #[test]
    fn test_three_part_day_token_is_silent() {
        let query = build_query(
            &tokens(Some("12 march please"), None),
            today(),
            &locale::english(),
        );
        assert_eq!(query.date, today());
        assert_eq!(query.status, StatusCode::Ok);
    }

    // ── Time resolver ───────────────────────────────────────────────────

    #[test]
    fn test_named_time_point() {
        let query = build_query(
            &tokens(Some("tomorrow"), Some("noon")),
            today(),
            &locale::english(),
        );
        assert_eq!(query.grain, Grain::Hour);
        assert_eq!(query.date_shape, DateShape::Fixed);
        assert_eq!(query.start_time, Some(time(12, 0)));
        assert!(query.end_time.is_none());
        assert_eq!(query.time_label.as_deref(), Some("noon"));
    }

    #[test]
    fn test_named_time_interval() {
        let query = build_query(
            &tokens(Some("tomorrow"), Some("morning")),
            today(),
            &locale::english(),
        );
        assert_eq!(query.date_shape, DateShape::Interval);
        assert_eq!(query.grain, Grain::Hour);
        assert_eq!(query.start_time, Some(time(6, 0)));
        assert_eq!(query.end_time, Some(time(12, 0)));
        assert_eq!(query.time_label.as_deref(), Some("morning"));
    }

    #[test]
    fn test_time_synonym_resolves_and_labels_as_alias() {
        let query = build_query(
            &tokens(Some("tomorrow"), Some("midday")),
            today(),
            &locale::english(),
        );
        assert_eq!(query.start_time, Some(time(12, 0)));
        assert_eq!(query.time_label.as_deref(), Some("midday"));
    }

    #[test]
    fn test_every_english_interval_has_ordered_bounds() {
        for token in ["morning", "afternoon", "evening", "night"] {
            let query = build_query(
                &tokens(Some("tomorrow"), Some(token)),
                today(),
                &locale::english(),
            );
            assert_eq!(query.date_shape, DateShape::Interval, "token {token}");
            assert_eq!(query.grain, Grain::Hour, "token {token}");
            let (start, end) = (query.start_time.unwrap(), query.end_time.unwrap());
            assert!(start <= end, "token {token}: {start} > {end}");
        }
    }

    #[test]
    fn test_every_german_interval_has_ordered_bounds() {
        // Direct keys and synonym aliases resolve to the same intervals.
        let names = [
            "vormittag", "mittag", "nachmittag", "abend", "nacht",
            "vormittags", "mittags", "nachmittags", "abends", "nachts",
        ];
        for token in names {
            let query = build_query(
                &tokens(Some("morgen"), Some(token)),
                today(),
                &locale::german(),
            );
            assert_eq!(query.date_shape, DateShape::Interval, "token {token}");
            assert_eq!(query.grain, Grain::Hour, "token {token}");
            let (start, end) = (query.start_time.unwrap(), query.end_time.unwrap());
            assert!(start <= end, "token {token}: {start} > {end}");
        }
    }

    #[test]
    fn test_hour_and_minute_token() {
        let query = build_query(
            &tokens(Some("tomorrow"), Some("17 30")),
            today(),
            &locale::english(),
        );
        assert_eq!(query.grain, Grain::Hour);
        assert_eq!(query.start_time, Some(time(17, 30)));
        assert_eq!(query.time_label.as_deref(), Some("17:30"));
    }

    #[test]
    fn test_bare_hour_token() {
        let query = build_query(
            &tokens(Some("tomorrow"), Some("18")),
            today(),
            &locale::english(),
        );
        assert_eq!(query.grain, Grain::Hour);
        assert_eq!(query.date_shape, DateShape::Fixed);
        assert_eq!(query.start_time, Some(time(18, 0)));
        assert_eq!(query.time_label.as_deref(), Some("18 o'clock"));
    }

    #[test]
    fn test_out_of_range_hour_falls_back_to_day_grain() {
        let query = build_query(
            &tokens(Some("tomorrow"), Some("99")),
            today(),
            &locale::english(),
        );
        assert_eq!(query.grain, Grain::Day);
        assert!(query.start_time.is_none());
        assert_eq!(query.status, StatusCode::Ok);
    }

    #[test]
    fn test_out_of_range_minute_falls_back_to_day_grain() {
        let query = build_query(
            &tokens(Some("tomorrow"), Some("12 75")),
            today(),
            &locale::english(),
        );
        assert_eq!(query.grain, Grain::Day);
        assert!(query.start_time.is_none());
        assert_eq!(query.status, StatusCode::Ok);
    }

    #[test]
    fn test_unknown_time_token_falls_back_to_day_grain() {
        let query = build_query(
            &tokens(Some("tomorrow"), Some("soonish")),
            today(),
            &locale::english(),
        );
        assert_eq!(query.grain, Grain::Day);
        assert!(query.start_time.is_none());
        assert!(query.time_label.is_none());
    }

    #[test]
    fn test_time_without_day_token_is_ignored() {
        let query = build_query(&tokens(None, Some("18")), today(), &locale::english());
        assert_eq!(query.grain, Grain::Day);
        assert!(query.start_time.is_none());
        assert_eq!(query.date, today());
    }

    // ── Properties ──────────────────────────────────────────────────────

    proptest! {
        #[test]
        fn prop_bare_hours_resolve_to_whole_hours(hour in 0u32..24) {
            let query = build_query(
                &tokens(Some("tomorrow"), Some(&hour.to_string())),
                today(),
                &locale::english(),
            );
            prop_assert_eq!(query.grain, Grain::Hour);
            prop_assert_eq!(query.date_shape, DateShape::Fixed);
            prop_assert_eq!(query.start_time, NaiveTime::from_hms_opt(hour, 0, 0));
        }

        #[test]
        fn prop_weekdays_resolve_within_the_next_seven_days(
            anchor_offset in 0i64..730,
            weekday_index in 0usize..7,
        ) {
            let names = [
                "monday", "tuesday", "wednesday", "thursday", "friday", "saturday", "sunday",
            ];
            let anchor = date(2025, 1, 1) + Duration::days(anchor_offset);
            let query = build_query(
                &tokens(Some(names[weekday_index]), None),
                anchor,
                &locale::english(),
            );
            let delta = (query.date - anchor).num_days();
            prop_assert!((0..7).contains(&delta), "resolved {} days out", delta);
            prop_assert_eq!(
                query.date.weekday().num_days_from_monday() as usize,
                weekday_index
            );
        }
    }
}
