use chrono::{Datelike, NaiveDate, Utc};

/// Civil-calendar duration between two dates as whole (years, months).
///
/// A missing end date means the role is ongoing and today is used.
/// Naive year/month subtraction with two borrow corrections: one month
/// when the end day-of-month precedes the start day-of-month (that
/// month is not yet complete), one year when the month count goes
/// negative. Truncates to whole months; months is always in 0..=11.
pub fn calendar_duration(start: NaiveDate, end: Option<NaiveDate>) -> (i32, i32) {
    let end = end.unwrap_or_else(|| Utc::now().date_naive());

    let mut years = end.year() - start.year();
    let mut months = end.month() as i32 - start.month() as i32;

    if end.day() < start.day() {
        months -= 1;
    }

    if months < 0 {
        years -= 1;
        months += 12;
    }

    (years, months)
}

/// Human-readable rendering of a (years, months) duration
pub fn format_duration(years: i32, months: i32) -> String {
    let mut parts = Vec::new();
    if years > 0 {
        parts.push(format!("{} year{}", years, if years > 1 { "s" } else { "" }));
    }
    if months > 0 {
        parts.push(format!(
            "{} month{}",
            months,
            if months > 1 { "s" } else { "" }
        ));
    }

    if parts.is_empty() {
        "Less than a month".to_string()
    } else {
        parts.join(", ")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_day_of_month_borrow() {
        // End day (10th) precedes start day (15th): February not complete
        let (years, months) = calendar_duration(date(2020, 1, 15), Some(date(2021, 2, 10)));
        assert_eq!((years, months), (1, 0));
    }

    #[test]
    fn test_month_borrow_into_year() {
        let (years, months) = calendar_duration(date(2020, 11, 1), Some(date(2021, 2, 1)));
        assert_eq!((years, months), (0, 3));

        let (years, months) = calendar_duration(date(2020, 6, 20), Some(date(2022, 3, 5)));
        assert_eq!((years, months), (1, 8));
    }

    #[test]
    fn test_exact_years() {
        let (years, months) = calendar_duration(date(2018, 4, 1), Some(date(2021, 4, 1)));
        assert_eq!((years, months), (3, 0));
    }

    #[test]
    fn test_zero_duration() {
        let (years, months) = calendar_duration(date(2021, 5, 3), Some(date(2021, 5, 3)));
        assert_eq!((years, months), (0, 0));
    }

    #[test]
    fn test_ongoing_role_uses_today() {
        let start = Utc::now().date_naive();
        let (years, months) = calendar_duration(start, None);
        assert_eq!((years, months), (0, 0));
    }

    #[test]
    fn test_months_always_in_range() {
        let start = date(2015, 1, 1);
        let mut current = start;
        for _ in 0..100 {
            current = current.succ_opt().unwrap();
            let (years, months) = calendar_duration(start, Some(current));
            assert!((0..=11).contains(&months), "months out of range: {}", months);
            assert!(years >= 0);
        }
    }

    #[test]
    fn test_format_duration() {
        assert_eq!(format_duration(0, 0), "Less than a month");
        assert_eq!(format_duration(1, 0), "1 year");
        assert_eq!(format_duration(2, 1), "2 years, 1 month");
        assert_eq!(format_duration(0, 11), "11 months");
    }
}
