//! German vocabulary tables.

use chrono::NaiveTime;

use crate::vocabulary::{
    ConditionKind, NamedDayValue, NamedTimeValue, TemperatureKind, Vocabulary,
};

fn t(hour: u32, minute: u32) -> NaiveTime {
    NaiveTime::from_hms_opt(hour, minute, 0).expect("literal time")
}

/// Build the German vocabulary.
#[must_use]
pub fn german() -> Vocabulary {
    Vocabulary::new(
        [
            "Montag", "Dienstag", "Mittwoch", "Donnerstag", "Freitag", "Samstag", "Sonntag",
        ],
        [
            "Januar", "Februar", "März", "April", "Mai", "Juni", "Juli", "August",
            "September", "Oktober", "November", "Dezember",
        ],
        &[
            ("heute", NamedDayValue::Offset(0)),
            ("morgen", NamedDayValue::Offset(1)),
            ("übermorgen", NamedDayValue::Offset(2)),
            ("gestern", NamedDayValue::Offset(-1)),
        ],
        &[
            // "Morgen" the time of day; distinct table from "morgen" the day.
            ("Morgen", NamedTimeValue::Interval(t(6, 0), t(10, 0))),
            ("Vormittag", NamedTimeValue::Interval(t(10, 0), t(12, 0))),
            ("Mittag", NamedTimeValue::Interval(t(12, 0), t(14, 0))),
            ("Nachmittag", NamedTimeValue::Interval(t(14, 0), t(18, 0))),
            ("Abend", NamedTimeValue::Interval(t(18, 0), t(22, 0))),
            ("Nacht", NamedTimeValue::Interval(t(22, 0), t(23, 59))),
            ("Mitternacht", NamedTimeValue::Point(t(0, 0))),
        ],
        &[
            ("früh", "Morgen"),
            ("morgens", "Morgen"),
            ("vormittags", "Vormittag"),
            ("mittags", "Mittag"),
            ("nachmittags", "Nachmittag"),
            ("abends", "Abend"),
            ("nachts", "Nacht"),
        ],
        &[
            ("regen", ConditionKind::Rain),
            ("regnen", ConditionKind::Rain),
            ("schnee", ConditionKind::Snow),
            ("schneien", ConditionKind::Snow),
            ("gewitter", ConditionKind::Thunderstorm),
            ("wolken", ConditionKind::Clouds),
            ("bewölkt", ConditionKind::Clouds),
            ("sonne", ConditionKind::Sun),
            ("sonnig", ConditionKind::Sun),
            ("klar", ConditionKind::Sun),
            ("wind", ConditionKind::Wind),
            ("windig", ConditionKind::Wind),
            ("nebel", ConditionKind::Mist),
            ("neblig", ConditionKind::Mist),
        ],
        &[
            ("warm", TemperatureKind::Warm),
            ("heiß", TemperatureKind::Warm),
            ("kalt", TemperatureKind::Cold),
            ("kühl", TemperatureKind::Cold),
        ],
        format_date_label,
        format_time_label,
    )
}

/// "am Freitag", "am 12. März".
fn format_date_label(raw: &str) -> String {
    format!("am {raw}")
}

/// "18 Uhr" for bare hours, "17 Uhr 30" otherwise.
fn format_time_label(hour: u32, minute: Option<u32>) -> String {
    match minute {
        Some(minute) => format!("{hour} Uhr {minute}"),
        None => format!("{hour} Uhr"),
    }
}
