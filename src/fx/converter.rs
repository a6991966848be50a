//! Currency conversion pivot and reporting-currency rebase

use crate::currency::Currency;
use crate::error::{PricebookError, Result};
use crate::fx::reader::RateReader;
use crate::history::ExchangeRateHistory;
use crate::records::ExchangeRate;
use crate::types::RecordId;
use chrono::NaiveDate;
use rust_decimal::Decimal;

/// Receives the ids of records mutated by a rebase.
///
/// Change tracking itself lives in the surrounding editing framework;
/// the converter only reports what it mutated.
pub trait DirtyTracker {
    /// Flag one mutated record
    fn mark_dirty(&mut self, record: RecordId);
}

impl DirtyTracker for Vec<RecordId> {
    fn mark_dirty(&mut self, record: RecordId) {
        self.push(record);
    }
}

/// Converts amounts between currencies through a single reporting
/// currency.
///
/// Every stored [`ExchangeRate`] is quoted from the reporting currency,
/// so any conversion is at most two legs: rebase the amount into the
/// reporting currency, then out to the target. The reporting currency is
/// explicit converter state, changed only through
/// [`rebase_reporting`](Self::rebase_reporting).
///
/// # Example
/// ```
/// use pricebook::currency::Currency;
/// use pricebook::fx::CurrencyConverter;
/// use chrono::NaiveDate;
/// use rust_decimal::Decimal;
///
/// let mut converter = CurrencyConverter::new(Currency::GBP);
/// let date = NaiveDate::from_ymd_opt(2024, 1, 1).unwrap();
/// converter.add_rate(Currency::USD, date, Decimal::new(130, 2));
///
/// let query = NaiveDate::from_ymd_opt(2024, 3, 1).unwrap();
/// let gbp = converter.convert(Decimal::from(100), Currency::USD, Currency::GBP, query);
/// assert_eq!(gbp.round_dp(2), Decimal::new(7692, 2));
/// ```
#[derive(Debug, Clone)]
pub struct CurrencyConverter {
    rates: ExchangeRateHistory,
    reporting: Currency,
}

impl CurrencyConverter {
    /// Create a converter with no stored rates
    pub fn new(reporting: Currency) -> Self {
        Self {
            rates: ExchangeRateHistory::new(),
            reporting,
        }
    }

    /// Create a converter over an existing rate history
    pub fn with_rates(reporting: Currency, rates: ExchangeRateHistory) -> Self {
        Self { rates, reporting }
    }

    /// The currency all stored rates are quoted from
    pub fn reporting(&self) -> Currency {
        self.reporting
    }

    /// The underlying exchange-rate history
    pub fn rates(&self) -> &ExchangeRateHistory {
        &self.rates
    }

    /// Record a rate observation quoted from the reporting currency
    pub fn add_rate(&mut self, to: Currency, date: NaiveDate, ratio: Decimal) -> RecordId {
        let record = ExchangeRate::new(self.reporting, to, date, ratio);
        let id = record.id;
        self.rates.insert(record);
        id
    }

    /// Insert a pre-built rate record
    pub fn insert(&mut self, record: ExchangeRate) {
        self.rates.insert(record);
    }

    /// Ratio of `currency` units per one reporting unit as of `date`
    pub fn rate_to(&self, currency: Currency, date: NaiveDate) -> Option<Decimal> {
        self.rates.ratio_as_of(currency, date)
    }

    /// Convert an amount between two currencies as of `date`.
    ///
    /// At most two legs through the reporting currency. A leg whose rate
    /// is unknown or zero is left unconverted with a warning; the query
    /// itself never fails.
    pub fn convert(
        &self,
        amount: Decimal,
        from: Currency,
        to: Currency,
        date: NaiveDate,
    ) -> Decimal {
        if from == to {
            return amount;
        }

        let mut value = amount;
        if from != self.reporting {
            // Stored ratios are reporting -> X, so the inbound leg divides
            match self.rates.ratio_as_of(from, date) {
                Some(ratio) if ratio != Decimal::ZERO => value /= ratio,
                _ => log::warn!(
                    "no usable {}/{} rate at-or-before {}; leaving leg unconverted",
                    self.reporting,
                    from,
                    date
                ),
            }
        }
        if to != self.reporting {
            match self.rates.ratio_as_of(to, date) {
                Some(ratio) if ratio != Decimal::ZERO => value *= ratio,
                _ => log::warn!(
                    "no usable {}/{} rate at-or-before {}; leaving leg unconverted",
                    self.reporting,
                    to,
                    date
                ),
            }
        }
        value
    }

    /// Re-express every stored rate against a new reporting currency.
    ///
    /// Two phases: all replacement records are computed first, so a
    /// record date with no resolvable rate for `new` aborts the rebase
    /// with nothing changed. On success the history is rebuilt wholesale,
    /// the reporting currency flips, and every mutated record id is
    /// reported through `tracker`.
    pub fn rebase_reporting(
        &mut self,
        new: Currency,
        tracker: &mut dyn DirtyTracker,
    ) -> Result<()> {
        if new == self.reporting {
            return Ok(());
        }

        let old = self.reporting;
        let mut rebased = Vec::with_capacity(self.rates.len());
        for record in self.rates.iter() {
            let mut next = record.clone();
            next.from_currency = new;
            if record.to_currency == new {
                // The record now carries the old reporting currency
                if record.ratio == Decimal::ZERO {
                    return Err(PricebookError::RebaseAborted {
                        currency: new,
                        date: record.date,
                    });
                }
                next.to_currency = old;
                next.ratio = Decimal::ONE / record.ratio;
            } else {
                let pivot = self
                    .rates
                    .ratio_as_of(new, record.date)
                    .filter(|ratio| *ratio != Decimal::ZERO)
                    .ok_or(PricebookError::RebaseAborted {
                        currency: new,
                        date: record.date,
                    })?;
                next.ratio = record.ratio / pivot;
            }
            rebased.push(next);
        }

        log::debug!(
            "rebasing reporting currency {} -> {} across {} records",
            old,
            new,
            rebased.len()
        );
        let dirty: Vec<RecordId> = rebased.iter().map(|r| r.id).collect();
        self.rates.rebuild(rebased);
        self.reporting = new;
        for id in dirty {
            tracker.mark_dirty(id);
        }
        Ok(())
    }
}

impl RateReader for CurrencyConverter {
    fn rate_to(&self, currency: Currency, date: NaiveDate) -> Option<Decimal> {
        self.rate_to(currency, date)
    }

    fn convert(&self, amount: Decimal, from: Currency, to: Currency, date: NaiveDate) -> Decimal {
        self.convert(amount, from, to, date)
    }
}
