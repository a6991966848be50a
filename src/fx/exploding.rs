//! Exploding rate reader - testing stub
//!
//! Panics on any FX usage. Use it in tests for single-currency code paths
//! that must never trigger a conversion.

use crate::currency::Currency;
use crate::fx::reader::RateReader;
use chrono::NaiveDate;
use rust_decimal::Decimal;

/// Rate reader that panics on any cross-currency use.
///
/// # Example
/// ```should_panic
/// use pricebook::currency::Currency;
/// use pricebook::fx::{ExplodingRateReader, RateReader};
/// use chrono::NaiveDate;
/// use rust_decimal::Decimal;
///
/// let reader = ExplodingRateReader::new();
/// let date = NaiveDate::from_ymd_opt(2024, 1, 1).unwrap();
///
/// // This will panic!
/// reader.convert(Decimal::from(100), Currency::EUR, Currency::USD, date);
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct ExplodingRateReader {
    /// Custom panic message
    message: Option<&'static str>,
}

impl ExplodingRateReader {
    /// Create a reader with the default message
    pub fn new() -> Self {
        Self { message: None }
    }

    /// Create a reader with a custom panic message
    pub fn with_message(message: &'static str) -> Self {
        Self {
            message: Some(message),
        }
    }

    fn panic_message(&self) -> &'static str {
        self.message
            .unwrap_or("FX rate access not allowed! This code path should be single-currency.")
    }
}

impl RateReader for ExplodingRateReader {
    fn rate_to(&self, currency: Currency, date: NaiveDate) -> Option<Decimal> {
        panic!(
            "{}\n\nAttempted rate lookup: {} at {}",
            self.panic_message(),
            currency,
            date
        );
    }

    fn convert(&self, amount: Decimal, from: Currency, to: Currency, date: NaiveDate) -> Decimal {
        // Same-currency conversion carries no FX dependency
        if from == to {
            return amount;
        }

        panic!(
            "{}\n\nAttempted conversion: {} -> {} at {}",
            self.panic_message(),
            from,
            to,
            date
        );
    }
}
