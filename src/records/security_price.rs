//! Security market price observations

use crate::index::TemporalRecord;
use crate::types::{RecordId, SecurityId};
use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A market price observed for a security on a date.
///
/// The price is a positive decimal in the owning security's currency.
/// At most one live price may exist per (security, date).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SecurityPrice {
    /// Unique record identifier
    pub id: RecordId,
    /// Security this price belongs to
    pub security: SecurityId,
    /// Observation date
    pub date: NaiveDate,
    /// Price in the security's currency
    pub price: Decimal,
}

impl SecurityPrice {
    /// Create a new price observation
    pub fn new(security: SecurityId, date: NaiveDate, price: Decimal) -> Self {
        Self {
            id: Uuid::new_v4(),
            security,
            date,
            price,
        }
    }
}

impl TemporalRecord for SecurityPrice {
    type Key = SecurityId;

    fn group_key(&self) -> SecurityId {
        self.security
    }

    fn effective_date(&self) -> Option<NaiveDate> {
        Some(self.date)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn test_price_creation() {
        let date = NaiveDate::from_ymd_opt(2024, 1, 15).unwrap();
        let price = SecurityPrice::new(1, date, dec!(104.25));

        assert_eq!(price.security, 1);
        assert_eq!(price.price, dec!(104.25));
        assert_eq!(price.effective_date(), Some(date));
        assert_eq!(price.group_key(), 1);
    }

    #[test]
    fn test_distinct_ids() {
        let date = NaiveDate::from_ymd_opt(2024, 1, 15).unwrap();
        let a = SecurityPrice::new(1, date, dec!(100));
        let b = SecurityPrice::new(1, date, dec!(100));
        assert_ne!(a.id, b.id);
    }
}
