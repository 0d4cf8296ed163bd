//! Date helpers for tenure calculations and display.

use chrono::{Datelike, Months, NaiveDate};

/// Display format for dates in reports.
const DATE_FORMAT: &str = "%m/%d/%Y";

/// Returns the number of whole years between `hire_date` and `as_of`.
///
/// A year only counts once its anniversary day has been reached. Hire
/// dates after `as_of` produce a negative count.
///
/// # Examples
///
/// ```
/// use employee_directory::util::years_of_service;
/// use chrono::NaiveDate;
///
/// let hired = NaiveDate::from_ymd_opt(2020, 1, 15).unwrap();
/// let day_before = NaiveDate::from_ymd_opt(2025, 1, 14).unwrap();
/// let anniversary = NaiveDate::from_ymd_opt(2025, 1, 15).unwrap();
/// assert_eq!(years_of_service(hired, day_before), 4);
/// assert_eq!(years_of_service(hired, anniversary), 5);
/// ```
pub fn years_of_service(hire_date: NaiveDate, as_of: NaiveDate) -> i32 {
    let mut years = as_of.year() - hire_date.year();
    let before_anniversary = (as_of.month(), as_of.day()) < (hire_date.month(), hire_date.day());
    let after_anniversary = (as_of.month(), as_of.day()) > (hire_date.month(), hire_date.day());

    if years > 0 && before_anniversary {
        years -= 1;
    } else if years < 0 && after_anniversary {
        years += 1;
    }
    years
}

/// Returns true once an employee has completed at least one year of service.
pub fn is_eligible_for_bonus(hire_date: NaiveDate, as_of: NaiveDate) -> bool {
    years_of_service(hire_date, as_of) >= 1
}

/// Returns the first anniversary of `hire_date`.
///
/// A February 29 hire date is moved to February 28 in non-leap years.
pub fn next_review_date(hire_date: Option<NaiveDate>) -> Option<NaiveDate> {
    hire_date?.checked_add_months(Months::new(12))
}

/// Formats a date as `MM/DD/YYYY`, or `N/A` when there is no date.
pub fn format_date(date: Option<NaiveDate>) -> String {
    match date {
        Some(date) => date.format(DATE_FORMAT).to_string(),
        None => "N/A".to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_years_of_service_same_day_is_zero() {
        assert_eq!(years_of_service(date(2024, 5, 1), date(2024, 5, 1)), 0);
    }

    #[test]
    fn test_years_of_service_counts_only_completed_years() {
        let hired = date(2018, 3, 20);
        assert_eq!(years_of_service(hired, date(2025, 3, 19)), 6);
        assert_eq!(years_of_service(hired, date(2025, 3, 20)), 7);
        assert_eq!(years_of_service(hired, date(2025, 12, 31)), 7);
    }

    #[test]
    fn test_years_of_service_leap_day_hire() {
        let hired = date(2020, 2, 29);
        assert_eq!(years_of_service(hired, date(2021, 2, 28)), 0);
        assert_eq!(years_of_service(hired, date(2021, 3, 1)), 1);
    }

    #[test]
    fn test_years_of_service_future_hire_is_negative() {
        assert_eq!(years_of_service(date(2030, 6, 1), date(2026, 6, 1)), -4);
        assert_eq!(years_of_service(date(2030, 6, 1), date(2026, 7, 1)), -3);
        assert_eq!(years_of_service(date(2026, 6, 2), date(2026, 6, 1)), 0);
    }

    #[test]
    fn test_is_eligible_for_bonus_after_one_year() {
        let hired = date(2023, 1, 1);
        assert!(!is_eligible_for_bonus(hired, date(2023, 12, 31)));
        assert!(is_eligible_for_bonus(hired, date(2024, 1, 1)));
    }

    #[test]
    fn test_next_review_date_is_first_anniversary() {
        assert_eq!(
            next_review_date(Some(date(2021, 9, 10))),
            Some(date(2022, 9, 10))
        );
        assert_eq!(
            next_review_date(Some(date(2024, 2, 29))),
            Some(date(2025, 2, 28))
        );
        assert_eq!(next_review_date(None), None);
    }

    #[test]
    fn test_format_date() {
        assert_eq!(format_date(Some(date(2020, 1, 15))), "01/15/2020");
        assert_eq!(format_date(None), "N/A");
    }
}
