//! English vocabulary tables.

use chrono::NaiveTime;

use crate::vocabulary::{
    ConditionKind, NamedDayValue, NamedTimeValue, TemperatureKind, Vocabulary,
};

fn t(hour: u32, minute: u32) -> NaiveTime {
    NaiveTime::from_hms_opt(hour, minute, 0).expect("literal time")
}

/// Build the English vocabulary.
#[must_use]
pub fn english() -> Vocabulary {
    Vocabulary::new(
        [
            "Monday", "Tuesday", "Wednesday", "Thursday", "Friday", "Saturday", "Sunday",
        ],
        [
            "January", "February", "March", "April", "May", "June", "July", "August",
            "September", "October", "November", "December",
        ],
        &[
            ("today", NamedDayValue::Offset(0)),
            ("tomorrow", NamedDayValue::Offset(1)),
            ("the day after tomorrow", NamedDayValue::Offset(2)),
            ("yesterday", NamedDayValue::Offset(-1)),
        ],
        &[
            ("morning", NamedTimeValue::Interval(t(6, 0), t(12, 0))),
            ("noon", NamedTimeValue::Point(t(12, 0))),
            ("afternoon", NamedTimeValue::Interval(t(12, 0), t(18, 0))),
            ("evening", NamedTimeValue::Interval(t(18, 0), t(22, 0))),
            ("night", NamedTimeValue::Interval(t(22, 0), t(23, 59))),
            ("midnight", NamedTimeValue::Point(t(0, 0))),
        ],
        &[
            ("midday", "noon"),
            ("lunchtime", "noon"),
            ("tonight", "night"),
            ("this morning", "morning"),
            ("this evening", "evening"),
        ],
        &[
            ("rain", ConditionKind::Rain),
            ("rainy", ConditionKind::Rain),
            ("raining", ConditionKind::Rain),
            ("snow", ConditionKind::Snow),
            ("snowing", ConditionKind::Snow),
            ("thunderstorm", ConditionKind::Thunderstorm),
            ("thunder", ConditionKind::Thunderstorm),
            ("clouds", ConditionKind::Clouds),
            ("cloudy", ConditionKind::Clouds),
            ("sun", ConditionKind::Sun),
            ("sunny", ConditionKind::Sun),
            ("clear", ConditionKind::Sun),
            ("wind", ConditionKind::Wind),
            ("windy", ConditionKind::Wind),
            ("fog", ConditionKind::Mist),
            ("foggy", ConditionKind::Mist),
            ("mist", ConditionKind::Mist),
        ],
        &[
            ("warm", TemperatureKind::Warm),
            ("hot", TemperatureKind::Warm),
            ("cold", TemperatureKind::Cold),
            ("chilly", TemperatureKind::Cold),
            ("freezing", TemperatureKind::Cold),
        ],
        format_date_label,
        format_time_label,
    )
}

/// "on Friday", "on 12. March".
fn format_date_label(raw: &str) -> String {
    format!("on {raw}")
}

/// "18 o'clock" for bare hours, "17:30" otherwise.
fn format_time_label(hour: u32, minute: Option<u32>) -> String {
    match minute {
        Some(minute) => format!("{hour}:{minute:02}"),
        None => format!("{hour} o'clock"),
    }
}
