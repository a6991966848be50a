//! The rate-reader seam between the exchange-rate index and valuation code

use crate::currency::Currency;
use chrono::NaiveDate;
use rust_decimal::Decimal;

/// Read-only currency conversion interface.
///
/// Conversions are total: an unresolved rate degrades to an identity leg
/// rather than failing, so valuation code never has to handle conversion
/// errors on the query path.
pub trait RateReader {
    /// Ratio of `currency` units per one reporting-currency unit in
    /// effect at `date`, or `None` when no rate is known
    fn rate_to(&self, currency: Currency, date: NaiveDate) -> Option<Decimal>;

    /// Convert an amount between two currencies as of `date`
    fn convert(&self, amount: Decimal, from: Currency, to: Currency, date: NaiveDate) -> Decimal;

    /// Convert several amounts into one currency at once
    fn convert_many(
        &self,
        amounts: &[(Decimal, Currency)],
        to: Currency,
        date: NaiveDate,
    ) -> Vec<Decimal> {
        amounts
            .iter()
            .map(|(amount, from)| self.convert(*amount, *from, to, date))
            .collect()
    }

    /// Value a set of positions in a single currency
    fn total_in(&self, positions: &[(Decimal, Currency)], currency: Currency, date: NaiveDate) -> Decimal {
        self.convert_many(positions, currency, date).iter().sum()
    }
}
