use chrono::{DateTime, Datelike, NaiveTime, Utc};

/// Truncates an instant to midnight UTC of the same UTC calendar day.
///
/// Payment dates are stored at UTC midnight so that date-only comparisons
/// ("is this due today") do not depend on the originating timezone.
pub fn start_of_utc_day(instant: DateTime<Utc>) -> DateTime<Utc> {
    instant.date_naive().and_time(NaiveTime::MIN).and_utc()
}

/// Returns true when both instants fall in the same UTC calendar month.
pub fn is_same_utc_month(a: DateTime<Utc>, b: DateTime<Utc>) -> bool {
    a.year() == b.year() && a.month() == b.month()
}
