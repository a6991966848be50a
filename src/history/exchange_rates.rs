//! Exchange rate history with snapshot and bracket queries

use crate::currency::Currency;
use crate::index::GroupedTemporalIndex;
use crate::records::ExchangeRate;
use crate::types::DateRange;
use chrono::NaiveDate;
use rust_decimal::Decimal;

/// All exchange-rate observations, indexed per quoted (`to`) currency.
///
/// Snapshot lookups return `None` when no rate is known; brackets default
/// to a ratio of one.
#[derive(Debug, Clone, Default)]
pub struct ExchangeRateHistory {
    index: GroupedTemporalIndex<Currency, ExchangeRate>,
}

impl ExchangeRateHistory {
    /// Create an empty history
    pub fn new() -> Self {
        Self {
            index: GroupedTemporalIndex::new(),
        }
    }

    /// Build a history from a bulk record load
    pub fn from_records(records: Vec<ExchangeRate>) -> Self {
        let mut history = Self::new();
        history.index.load(records);
        history
    }

    /// Insert a single observation, keeping the index ordered
    pub fn insert(&mut self, record: ExchangeRate) {
        self.index.insert(record);
    }

    /// Replace all records wholesale; not queryable mid-rebuild
    pub fn rebuild(&mut self, records: Vec<ExchangeRate>) {
        self.index.reset();
        self.index.load(records);
    }

    /// Ratio in effect at `date` for the quoted currency, or `None` when
    /// no rate is known at-or-before it
    pub fn ratio_as_of(&self, currency: Currency, date: NaiveDate) -> Option<Decimal> {
        self.index.snapshot_at(&currency, date).map(|r| r.ratio)
    }

    /// The full record in effect at `date`, if any
    pub fn rate_as_of(&self, currency: Currency, date: NaiveDate) -> Option<&ExchangeRate> {
        self.index.snapshot_at(&currency, date)
    }

    /// Ratios in effect at the start and end of `range`, defaulting to one
    pub fn bracket(&self, currency: Currency, range: &DateRange) -> (Decimal, Decimal) {
        let (first, latest) = self.index.bracket(&currency, range);
        (
            first.map(|r| r.ratio).unwrap_or(Decimal::ONE),
            latest.map(|r| r.ratio).unwrap_or(Decimal::ONE),
        )
    }

    /// True iff no other live record shares this record's (currency, date)
    pub fn valid_count(&self, record: &ExchangeRate) -> bool {
        self.index.valid_count(record)
    }

    /// Iterate over every observation
    pub fn iter(&self) -> impl Iterator<Item = &ExchangeRate> {
        self.index.iter()
    }

    /// Number of observations held
    pub fn len(&self) -> usize {
        self.index.len()
    }

    /// Whether the history holds no observations
    pub fn is_empty(&self) -> bool {
        self.index.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    fn d(y: i32, m: u32, day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, day).unwrap()
    }

    #[test]
    fn test_no_rate_known_is_absent() {
        let history = ExchangeRateHistory::new();
        assert_eq!(history.ratio_as_of(Currency::USD, d(2024, 1, 1)), None);
    }

    #[test]
    fn test_rate_holds_until_superseded() {
        let history = ExchangeRateHistory::from_records(vec![
            ExchangeRate::new(Currency::GBP, Currency::USD, d(2024, 1, 1), dec!(1.30)),
            ExchangeRate::new(Currency::GBP, Currency::USD, d(2024, 6, 1), dec!(1.25)),
        ]);

        assert_eq!(history.ratio_as_of(Currency::USD, d(2023, 12, 1)), None);
        assert_eq!(
            history.ratio_as_of(Currency::USD, d(2024, 3, 1)),
            Some(dec!(1.30))
        );
        assert_eq!(
            history.ratio_as_of(Currency::USD, d(2024, 6, 1)),
            Some(dec!(1.25))
        );
    }

    #[test]
    fn test_currencies_are_independent_groups() {
        let history = ExchangeRateHistory::from_records(vec![
            ExchangeRate::new(Currency::GBP, Currency::USD, d(2024, 1, 1), dec!(1.30)),
            ExchangeRate::new(Currency::GBP, Currency::EUR, d(2024, 1, 1), dec!(1.15)),
        ]);

        assert_eq!(
            history.ratio_as_of(Currency::EUR, d(2024, 2, 1)),
            Some(dec!(1.15))
        );
        assert_eq!(history.ratio_as_of(Currency::JPY, d(2024, 2, 1)), None);
    }

    #[test]
    fn test_bracket_defaults_to_unit_ratio() {
        let history = ExchangeRateHistory::from_records(vec![ExchangeRate::new(
            Currency::GBP,
            Currency::USD,
            d(2024, 3, 1),
            dec!(1.28),
        )]);

        let range = DateRange::new(d(2024, 1, 1), d(2024, 6, 1)).unwrap();
        let (first, latest) = history.bracket(Currency::USD, &range);
        assert_eq!(first, Decimal::ONE);
        assert_eq!(latest, dec!(1.28));
    }
}
