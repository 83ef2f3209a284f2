// Date utility functions

use chrono::{Datelike, Duration, NaiveDate};

/// Monday on or before the given date.
pub fn week_start_of(date: NaiveDate) -> NaiveDate {
    date - Duration::days(date.weekday().num_days_from_monday() as i64)
}

/// Navigation-bar label for the week starting at `week_start`, e.g.
/// `"March 02 - March 08, 2026"`.
pub fn week_range_label(week_start: NaiveDate) -> String {
    let end = week_start + Duration::days(6);
    format!("{} - {}", week_start.format("%B %d"), end.format("%B %d, %Y"))
}
