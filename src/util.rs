use crate::model::{DayOffset, WINDOW_DAYS};
use chrono::{DateTime, Datelike, Local, NaiveDate, TimeZone};

/// Calendar day of `timestamp` in the local time zone.
pub fn local_day<Tz: TimeZone>(timestamp: &DateTime<Tz>) -> NaiveDate {
    timestamp.with_timezone(&Local).date_naive()
}

/// Whole days between the commit's day and today.
///
/// Commits dated after today count as today. Anything older than
/// `WINDOW_DAYS` is out of the window; `WINDOW_DAYS` itself is still in.
pub fn day_age(commit_day: NaiveDate, today: NaiveDate) -> DayOffset {
    let days = today.signed_duration_since(commit_day).num_days().max(0);
    if days > WINDOW_DAYS as i64 {
        DayOffset::OutOfWindow
    } else {
        DayOffset::InWindow(days as u32)
    }
}

/// Shift applied to every day age so week/weekday reshaping lines up with
/// the real weekday of `today`.
pub fn alignment_offset(today: NaiveDate) -> u32 {
    let weekday = today.weekday().num_days_from_monday();
    if weekday == 6 {
        7
    } else {
        6 - weekday
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Duration;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn same_day_is_age_zero() {
        let today = date(2024, 3, 14);
        assert_eq!(day_age(today, today), DayOffset::InWindow(0));
    }

    #[test]
    fn window_boundary_is_inclusive() {
        let today = date(2024, 3, 14);
        let edge = today - Duration::days(WINDOW_DAYS as i64);
        assert_eq!(day_age(edge, today), DayOffset::InWindow(WINDOW_DAYS));
        assert_eq!(day_age(edge - Duration::days(1), today), DayOffset::OutOfWindow);
    }

    #[test]
    fn future_commits_count_as_today() {
        let today = date(2024, 3, 14);
        assert_eq!(day_age(date(2024, 3, 20), today), DayOffset::InWindow(0));
    }

    #[test]
    fn age_crosses_leap_day() {
        assert_eq!(day_age(date(2024, 2, 28), date(2024, 3, 1)), DayOffset::InWindow(2));
    }

    #[test]
    fn alignment_for_every_weekday() {
        // 2024-03-11 is a Monday.
        let monday = date(2024, 3, 11);
        let expected = [6, 5, 4, 3, 2, 1, 7];
        for (i, want) in expected.into_iter().enumerate() {
            let day = monday + Duration::days(i as i64);
            assert_eq!(alignment_offset(day), want, "weekday {}", day.weekday());
        }
    }

    #[test]
    fn local_day_uses_local_calendar() {
        let noon = Local
            .from_local_datetime(&date(2024, 3, 14).and_hms_opt(12, 0, 0).unwrap())
            .single()
            .unwrap();
        assert_eq!(local_day(&noon.fixed_offset()), date(2024, 3, 14));
    }
}
