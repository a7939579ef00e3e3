//! Calendar arithmetic for sprint timeboxes.

use chrono::{Datelike, NaiveDate, Weekday};

/// Counts the days of the closed interval `[start, end]` that are neither
/// Saturday nor Sunday. An inverted interval has no working days.
pub fn working_days(start: NaiveDate, end: NaiveDate) -> u32 {
    if start > end {
        return 0;
    }
    let (days, weekends) = start
        .iter_days()
        .take_while(|day| *day <= end)
        .fold((0, 0), |(days, weekends), day| {
            (days + 1, weekends + u32::from(is_weekend(day)))
        });
    days - weekends
}

/// Saturday or Sunday.
pub fn is_weekend(day: NaiveDate) -> bool {
    matches!(day.weekday(), Weekday::Sat | Weekday::Sun)
}

/// Absolute number of calendar days between two dates, end exclusive.
pub fn days_between(start: NaiveDate, end: NaiveDate) -> i64 {
    end.signed_duration_since(start).num_days().abs()
}

/// Whole weeks between two dates, rounded half up.
pub fn weeks(start: NaiveDate, end: NaiveDate) -> i64 {
    (days_between(start, end) as f64 / 7.0).round() as i64
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fixtures::date;

    #[test]
    fn test_inverted_range_has_no_working_days() {
        assert_eq!(working_days(date(2024, 1, 10), date(2024, 1, 9)), 0);
        assert_eq!(working_days(date(2024, 3, 1), date(2023, 3, 1)), 0);
    }

    #[test]
    fn test_single_day() {
        // 2024-01-01 is a Monday
        for offset in 0..5 {
            let day = date(2024, 1, 1 + offset);
            assert_eq!(working_days(day, day), 1, "{day}");
        }
        assert_eq!(working_days(date(2024, 1, 6), date(2024, 1, 6)), 0);
        assert_eq!(working_days(date(2024, 1, 7), date(2024, 1, 7)), 0);
    }

    #[test]
    fn test_is_weekend() {
        assert!(!is_weekend(date(2024, 1, 5)));
        assert!(is_weekend(date(2024, 1, 6)));
        assert!(is_weekend(date(2024, 1, 7)));
        assert!(!is_weekend(date(2024, 1, 8)));
    }

    #[test]
    fn test_any_full_week_has_five_working_days() {
        for offset in 0..7 {
            let start = date(2024, 1, 1 + offset);
            let end = date(2024, 1, 7 + offset);
            assert_eq!(working_days(start, end), 5, "{start} - {end}");
        }
    }

    #[test]
    fn test_two_week_sprint() {
        assert_eq!(working_days(date(2024, 1, 1), date(2024, 1, 12)), 10);
        assert_eq!(working_days(date(2024, 2, 26), date(2024, 3, 8)), 10);
    }

    #[test]
    fn test_weeks() {
        assert_eq!(weeks(date(2024, 1, 1), date(2024, 1, 7)), 1);
        assert_eq!(weeks(date(2024, 1, 1), date(2024, 1, 1)), 0);
        assert_eq!(weeks(date(2024, 1, 1), date(2024, 1, 4)), 0);
        assert_eq!(weeks(date(2024, 1, 1), date(2024, 1, 5)), 1);
        assert_eq!(weeks(date(2024, 1, 1), date(2024, 1, 12)), 2);
    }

    #[test]
    fn test_weeks_is_symmetric() {
        assert_eq!(days_between(date(2024, 1, 14), date(2024, 1, 1)), 13);
        assert_eq!(weeks(date(2024, 1, 14), date(2024, 1, 1)), 2);
    }
}
