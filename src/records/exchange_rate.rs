//! Exchange rate observations against the reporting currency

use crate::currency::Currency;
use crate::index::TemporalRecord;
use crate::types::RecordId;
use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::fmt;
use uuid::Uuid;

/// An exchange rate observed on a date.
///
/// `ratio` is the number of `to_currency` units per one `from_currency`
/// unit. By convention `from_currency` is always the current reporting
/// currency, so records are grouped by `to_currency`; at most one live
/// record may exist per (to_currency, date).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExchangeRate {
    /// Unique record identifier
    pub id: RecordId,
    /// Observation date
    pub date: NaiveDate,
    /// Reporting currency the ratio is quoted from
    pub from_currency: Currency,
    /// Currency the ratio is quoted to
    pub to_currency: Currency,
    /// Units of `to_currency` per one `from_currency` unit
    pub ratio: Decimal,
}

impl ExchangeRate {
    /// Create a new rate observation
    pub fn new(
        from_currency: Currency,
        to_currency: Currency,
        date: NaiveDate,
        ratio: Decimal,
    ) -> Self {
        Self {
            id: Uuid::new_v4(),
            date,
            from_currency,
            to_currency,
            ratio,
        }
    }
}

impl TemporalRecord for ExchangeRate {
    type Key = Currency;

    fn group_key(&self) -> Currency {
        self.to_currency
    }

    fn effective_date(&self) -> Option<NaiveDate> {
        Some(self.date)
    }
}

impl fmt::Display for ExchangeRate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}/{} {} @ {}",
            self.from_currency, self.to_currency, self.ratio, self.date
        )
    }
}
