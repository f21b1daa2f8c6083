use crate::error::CoreError;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt;

/// An inclusive calendar period used as the key of a metrics query.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct DateRange {
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
}

impl DateRange {
    /// Builds a range, rejecting one whose start falls after its end.
    pub fn new(start_date: NaiveDate, end_date: NaiveDate) -> Result<Self, CoreError> {
        if start_date > end_date {
            return Err(CoreError::InvalidInput(
                "date range".to_string(),
                format!("start date {} is after end date {}", start_date, end_date),
            ));
        }
        Ok(Self { start_date, end_date })
    }

    /// Number of calendar days covered, both ends included.
    pub fn num_days(&self) -> i64 {
        (self.end_date - self.start_date).num_days() + 1
    }

    pub fn contains(&self, date: NaiveDate) -> bool {
        self.start_date <= date && date <= self.end_date
    }
}

impl fmt::Display for DateRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} .. {}", self.start_date, self.end_date)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_range_rejects_inverted_dates() {
        let err = DateRange::new(date(2025, 2, 1), date(2025, 1, 1)).unwrap_err();
        assert!(matches!(err, CoreError::InvalidInput(_, _)));
    }

    #[test]
    fn test_single_day_range() {
        let range = DateRange::new(date(2025, 3, 15), date(2025, 3, 15)).unwrap();
        assert_eq!(range.num_days(), 1);
        assert!(range.contains(date(2025, 3, 15)));
        assert!(!range.contains(date(2025, 3, 16)));
    }

    #[test]
    fn test_month_range_day_count() {
        let range = DateRange::new(date(2024, 2, 1), date(2024, 2, 29)).unwrap();
        assert_eq!(range.num_days(), 29);
        assert_eq!(range.to_string(), "2024-02-01 .. 2024-02-29");
    }
}
