//! Core types and identifiers

use crate::error::{PricebookError, Result};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Unique identifier for securities
pub type SecurityId = u64;

/// Unique identifier for deposit accounts
pub type DepositId = u64;

/// Unique identifier for individual temporal records
pub type RecordId = uuid::Uuid;

/// Closed date range used by bracket queries
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DateRange {
    pub start: NaiveDate,
    pub end: NaiveDate,
}

impl DateRange {
    /// Create a new range; `start` must not be after `end`
    pub fn new(start: NaiveDate, end: NaiveDate) -> Result<Self> {
        if start > end {
            return Err(PricebookError::InvalidRange { start, end });
        }
        Ok(Self { start, end })
    }

    /// Whether the date falls inside the range (inclusive on both ends)
    pub fn contains(&self, date: NaiveDate) -> bool {
        date >= self.start && date <= self.end
    }

    /// Number of days spanned (inclusive of both endpoints)
    pub fn days(&self) -> i64 {
        (self.end - self.start).num_days() + 1
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn d(y: i32, m: u32, day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, day).unwrap()
    }

    #[test]
    fn test_range_creation() {
        let range = DateRange::new(d(2024, 1, 1), d(2024, 12, 31)).unwrap();
        assert_eq!(range.days(), 366);
        assert!(range.contains(d(2024, 6, 15)));
        assert!(range.contains(d(2024, 1, 1)));
        assert!(range.contains(d(2024, 12, 31)));
        assert!(!range.contains(d(2025, 1, 1)));
    }

    #[test]
    fn test_inverted_range_rejected() {
        let result = DateRange::new(d(2024, 2, 1), d(2024, 1, 1));
        assert!(matches!(result, Err(PricebookError::InvalidRange { .. })));
    }

    #[test]
    fn test_single_day_range() {
        let range = DateRange::new(d(2024, 3, 1), d(2024, 3, 1)).unwrap();
        assert_eq!(range.days(), 1);
        assert!(range.contains(d(2024, 3, 1)));
    }
}
