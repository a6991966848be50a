//! # pricebook
//!
//! An in-memory temporal valuation engine for multi-currency portfolio
//! records.
//!
//! pricebook answers "what was the price/rate in effect at date D" and
//! "what was the value at the start and end of a date range" over three
//! record domains — security prices, period-based deposit interest rates,
//! and currency exchange rates — and converts amounts between currencies
//! through a single reporting currency.
//!
//! ## Example
//!
//! ```
//! use pricebook::prelude::*;
//! use chrono::NaiveDate;
//! use rust_decimal::Decimal;
//!
//! let date = NaiveDate::from_ymd_opt(2024, 1, 1).unwrap();
//!
//! // Price lookups forward-fill from the latest observation
//! let mut prices = PriceHistory::new();
//! prices.insert(SecurityPrice::new(1, date, Decimal::new(10450, 2)));
//! let later = NaiveDate::from_ymd_opt(2024, 3, 1).unwrap();
//! assert_eq!(prices.price_as_of(1, later), Decimal::new(10450, 2));
//!
//! // Conversions pivot through the reporting currency
//! let mut converter = CurrencyConverter::new(Currency::GBP);
//! converter.add_rate(Currency::USD, date, Decimal::new(130, 2));
//! let gbp = converter.convert(Decimal::from(100), Currency::USD, Currency::GBP, later);
//! assert_eq!(gbp.round_dp(2), Decimal::new(7692, 2));
//! ```

pub mod currency;
pub mod entity;
pub mod error;
pub mod fx;
pub mod history;
pub mod index;
pub mod records;
pub mod types;
pub mod validation;

pub mod prelude {
    //! Commonly used types and traits
    pub use crate::currency::Currency;
    pub use crate::entity::{Deposit, Security};
    pub use crate::error::{PricebookError, Result};
    pub use crate::fx::{CurrencyConverter, DirtyTracker, RateReader};
    pub use crate::history::{DepositRateSchedule, ExchangeRateHistory, PriceHistory};
    pub use crate::index::{GroupedTemporalIndex, TemporalRecord};
    pub use crate::records::{DepositRate, ExchangeRate, SecurityPrice};
    pub use crate::types::{DateRange, DepositId, RecordId, SecurityId};
}
