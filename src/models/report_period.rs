//! Report period model.
//!
//! This module contains the [`ReportPeriod`] type describing the inclusive
//! date range a period report covers.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// An inclusive date range for period reporting.
///
/// Construction does not enforce ordering; date-range validation
/// ([`crate::analysis::validate_date_range`]) is the gate that guarantees
/// `start_date <= end_date` before aggregation runs.
///
/// # Example
///
/// ```
/// use attendance_engine::models::ReportPeriod;
/// use chrono::NaiveDate;
///
/// let period = ReportPeriod {
///     start_date: NaiveDate::from_ymd_opt(2025, 1, 1).unwrap(),
///     end_date: NaiveDate::from_ymd_opt(2025, 1, 3).unwrap(),
/// };
///
/// assert_eq!(period.num_days(), 3);
/// assert!(period.contains_date(NaiveDate::from_ymd_opt(2025, 1, 2).unwrap()));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReportPeriod {
    /// The start date of the period (inclusive).
    pub start_date: NaiveDate,
    /// The end date of the period (inclusive).
    pub end_date: NaiveDate,
}

impl ReportPeriod {
    /// Creates a period covering `start_date..=end_date`.
    pub fn new(start_date: NaiveDate, end_date: NaiveDate) -> Self {
        Self {
            start_date,
            end_date,
        }
    }

    /// Checks if a given date falls within this period, inclusive of both
    /// endpoints.
    pub fn contains_date(&self, date: NaiveDate) -> bool {
        date >= self.start_date && date <= self.end_date
    }

    /// Returns the number of calendar days in the period, inclusive.
    ///
    /// Zero when the end date precedes the start date (an unvalidated
    /// period).
    pub fn num_days(&self) -> i64 {
        ((self.end_date - self.start_date).num_days() + 1).max(0)
    }

    /// Iterates every calendar date in the period in ascending order.
    ///
    /// # Example
    ///
    /// ```
    /// use attendance_engine::models::ReportPeriod;
    /// use chrono::NaiveDate;
    ///
    /// let period = ReportPeriod::new(
    ///     NaiveDate::from_ymd_opt(2025, 1, 1).unwrap(),
    ///     NaiveDate::from_ymd_opt(2025, 1, 3).unwrap(),
    /// );
    /// let dates: Vec<_> = period.dates().collect();
    /// assert_eq!(dates.len(), 3);
    /// assert_eq!(dates[0], NaiveDate::from_ymd_opt(2025, 1, 1).unwrap());
    /// assert_eq!(dates[2], NaiveDate::from_ymd_opt(2025, 1, 3).unwrap());
    /// ```
    pub fn dates(self) -> impl Iterator<Item = NaiveDate> {
        let end = self.end_date;
        self.start_date.iter_days().take_while(move |d| *d <= end)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn make_date(s: &str) -> NaiveDate {
        NaiveDate::parse_from_str(s, "%Y-%m-%d").unwrap()
    }

    #[test]
    fn test_contains_date_within_period() {
        let period = ReportPeriod::new(make_date("2025-01-01"), make_date("2025-01-10"));
        assert!(period.contains_date(make_date("2025-01-05")));
    }

    #[test]
    fn test_contains_date_on_endpoints() {
        let period = ReportPeriod::new(make_date("2025-01-01"), make_date("2025-01-10"));
        assert!(period.contains_date(period.start_date));
        assert!(period.contains_date(period.end_date));
    }

    #[test]
    fn test_contains_date_outside_period() {
        let period = ReportPeriod::new(make_date("2025-01-01"), make_date("2025-01-10"));
        assert!(!period.contains_date(make_date("2024-12-31")));
        assert!(!period.contains_date(make_date("2025-01-11")));
    }

    #[test]
    fn test_num_days_single_day() {
        let period = ReportPeriod::new(make_date("2025-01-01"), make_date("2025-01-01"));
        assert_eq!(period.num_days(), 1);
    }

    #[test]
    fn test_num_days_crosses_month_boundary() {
        let period = ReportPeriod::new(make_date("2025-01-30"), make_date("2025-02-02"));
        assert_eq!(period.num_days(), 4);
    }

    #[test]
    fn test_num_days_inverted_period_is_zero() {
        let period = ReportPeriod::new(make_date("2025-01-10"), make_date("2025-01-01"));
        assert_eq!(period.num_days(), 0);
    }

    #[test]
    fn test_dates_ascending_inclusive() {
        let period = ReportPeriod::new(make_date("2025-01-30"), make_date("2025-02-02"));
        let dates: Vec<_> = period.dates().collect();
        assert_eq!(
            dates,
            vec![
                make_date("2025-01-30"),
                make_date("2025-01-31"),
                make_date("2025-02-01"),
                make_date("2025-02-02"),
            ]
        );
    }

    #[test]
    fn test_dates_empty_for_inverted_period() {
        let period = ReportPeriod::new(make_date("2025-01-10"), make_date("2025-01-01"));
        assert_eq!(period.dates().count(), 0);
    }

    #[test]
    fn test_serialize_round_trip() {
        let period = ReportPeriod::new(make_date("2025-01-01"), make_date("2025-01-03"));
        let json = serde_json::to_string(&period).unwrap();
        assert!(json.contains("\"start_date\":\"2025-01-01\""));
        let back: ReportPeriod = serde_json::from_str(&json).unwrap();
        assert_eq!(period, back);
    }
}
