//! Period-based deposit interest rates

use crate::index::TemporalRecord;
use crate::types::{DepositId, RecordId};
use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// An interest rate valid for a half-open period ending at `end_date`.
///
/// An absent `end_date` marks the open-ended "current" period and is
/// treated as a distinct key value sorting after every explicit end.
/// Consecutive periods for one deposit do not overlap; at most one live
/// record may exist per (deposit, end_date).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DepositRate {
    /// Unique record identifier
    pub id: RecordId,
    /// Deposit account this rate belongs to
    pub deposit: DepositId,
    /// Base interest rate for the period
    pub rate: Decimal,
    /// Optional bonus rate on top of the base rate
    pub bonus: Option<Decimal>,
    /// Last date the period covers; `None` = open-ended
    pub end_date: Option<NaiveDate>,
}

impl DepositRate {
    /// Create an open-ended rate period
    pub fn new(deposit: DepositId, rate: Decimal) -> Self {
        Self {
            id: Uuid::new_v4(),
            deposit,
            rate,
            bonus: None,
            end_date: None,
        }
    }

    /// Close the period at `end_date`
    pub fn until(mut self, end_date: NaiveDate) -> Self {
        self.end_date = Some(end_date);
        self
    }

    /// Attach a bonus rate
    pub fn with_bonus(mut self, bonus: Decimal) -> Self {
        self.bonus = Some(bonus);
        self
    }

    /// Base rate plus any bonus
    pub fn effective_rate(&self) -> Decimal {
        self.rate + self.bonus.unwrap_or(Decimal::ZERO)
    }

    /// Whether this is the open-ended "current" period
    pub fn is_open(&self) -> bool {
        self.end_date.is_none()
    }
}

impl TemporalRecord for DepositRate {
    type Key = DepositId;

    fn group_key(&self) -> DepositId {
        self.deposit
    }

    fn effective_date(&self) -> Option<NaiveDate> {
        self.end_date
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn test_open_period() {
        let rate = DepositRate::new(7, dec!(0.025));
        assert!(rate.is_open());
        assert_eq!(rate.effective_date(), None);
        assert_eq!(rate.effective_rate(), dec!(0.025));
    }

    #[test]
    fn test_closed_period_with_bonus() {
        let end = NaiveDate::from_ymd_opt(2024, 3, 31).unwrap();
        let rate = DepositRate::new(7, dec!(0.02))
            .until(end)
            .with_bonus(dec!(0.005));

        assert!(!rate.is_open());
        assert_eq!(rate.effective_date(), Some(end));
        assert_eq!(rate.effective_rate(), dec!(0.025));
    }
}
