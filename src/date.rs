use chrono::{Datelike, Duration, NaiveDate, Weekday};

/// Resolves the CLI date query against `today`.
///
/// No query means today; an unrecognized token yields `None` and is
/// reported at the CLI boundary.
pub fn resolve(query: Option<&str>, today: NaiveDate) -> Option<NaiveDate> {
    let Some(query) = query else {
        return Some(today);
    };
    match query {
        "morgen" | "tomorrow" => Some(today + Duration::days(1)),
        "übermorgen" => Some(today + Duration::days(2)),
        other => weekday_token(other).map(|target| next_occurrence(today, target)),
    }
}

/// Weekday tokens are case-sensitive and cover Monday through Friday only;
/// the mensa is closed on weekends.
fn weekday_token(query: &str) -> Option<Weekday> {
    match query {
        "montag" | "monday" | "mo" => Some(Weekday::Mon),
        "dienstag" | "tuesday" | "di" | "tu" => Some(Weekday::Tue),
        "mittwoch" | "wednesday" | "mi" | "we" => Some(Weekday::Wed),
        "donnerstag" | "thursday" | "do" | "th" => Some(Weekday::Thu),
        "freitag" | "friday" | "fr" => Some(Weekday::Fri),
        _ => None,
    }
}

/// Next occurrence of `target` strictly after `today`: querying the current
/// weekday points a full week ahead, never at today itself.
fn next_occurrence(today: NaiveDate, target: Weekday) -> NaiveDate {
    let ahead =
        (target.num_days_from_monday() + 7 - today.weekday().num_days_from_monday()) % 7;
    let ahead = if ahead == 0 { 7 } else { ahead };
    today + Duration::days(ahead.into())
}
