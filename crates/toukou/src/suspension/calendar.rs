//! Calendar arithmetic and Japanese date formatting.
//!
//! Everything here works on [`NaiveDate`]. The suspension rules count whole
//! calendar days, so carrying a time of day (or a time zone) would only
//! invite off-by-one errors around midnight and DST transitions.

use chrono::{Datelike, NaiveDate};

/// Weekday kanji indexed by [`chrono::Weekday::num_days_from_sunday`].
const WEEKDAY_KANJI: [&str; 7] = ["日", "月", "火", "水", "木", "金", "土"];

/// Whole days from `from` to `to`; negative when `to` is earlier.
pub fn day_difference(to: NaiveDate, from: NaiveDate) -> i64 {
    (to - from).num_days()
}

/// Renders a date the way Japanese school notices do, e.g. `1月16日(火)`.
pub fn format_jp(date: NaiveDate) -> String {
    let weekday = WEEKDAY_KANJI[date.weekday().num_days_from_sunday() as usize];
    format!("{}月{}日({})", date.month(), date.day(), weekday)
}
