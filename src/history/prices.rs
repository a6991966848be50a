//! Security price history with snapshot and bracket queries

use crate::index::GroupedTemporalIndex;
use crate::records::SecurityPrice;
use crate::types::{DateRange, SecurityId};
use chrono::NaiveDate;
use rust_decimal::Decimal;

/// All price observations for all securities, indexed per security.
///
/// An unresolved lookup defaults to one whole currency unit: a security
/// with no observed price values at par.
#[derive(Debug, Clone, Default)]
pub struct PriceHistory {
    index: GroupedTemporalIndex<SecurityId, SecurityPrice>,
}

impl PriceHistory {
    /// Create an empty history
    pub fn new() -> Self {
        Self {
            index: GroupedTemporalIndex::new(),
        }
    }

    /// Build a history from a bulk record load
    pub fn from_records(records: Vec<SecurityPrice>) -> Self {
        let mut history = Self::new();
        history.index.load(records);
        history
    }

    /// Insert a single observation, keeping the index ordered
    pub fn insert(&mut self, record: SecurityPrice) {
        self.index.insert(record);
    }

    /// Replace all records wholesale; not queryable mid-rebuild
    pub fn rebuild(&mut self, records: Vec<SecurityPrice>) {
        self.index.reset();
        self.index.load(records);
    }

    /// Price in effect at `date`: the most recent observation at-or-before
    /// it, or one whole currency unit when none exists
    pub fn price_as_of(&self, security: SecurityId, date: NaiveDate) -> Decimal {
        self.index
            .snapshot_at(&security, date)
            .map(|r| r.price)
            .unwrap_or(Decimal::ONE)
    }

    /// Prices in effect at the start and end of `range`, for
    /// period-over-period reporting
    pub fn bracket(&self, security: SecurityId, range: &DateRange) -> (Decimal, Decimal) {
        let (first, latest) = self.index.bracket(&security, range);
        (
            first.map(|r| r.price).unwrap_or(Decimal::ONE),
            latest.map(|r| r.price).unwrap_or(Decimal::ONE),
        )
    }

    /// True iff no other live record shares this record's (security, date)
    pub fn valid_count(&self, record: &SecurityPrice) -> bool {
        self.index.valid_count(record)
    }

    /// Iterate over every observation
    pub fn iter(&self) -> impl Iterator<Item = &SecurityPrice> {
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
