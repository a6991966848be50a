//! Deposit rate schedule with interval queries

use crate::index::GroupedTemporalIndex;
use crate::records::DepositRate;
use crate::types::DepositId;
use chrono::NaiveDate;
use rust_decimal::Decimal;

/// All rate periods for all deposit accounts, indexed per deposit.
///
/// Unlike price lookups, a date beyond every explicit period end with no
/// open-ended period resolves to no rate at all.
#[derive(Debug, Clone, Default)]
pub struct DepositRateSchedule {
    index: GroupedTemporalIndex<DepositId, DepositRate>,
}

impl DepositRateSchedule {
    /// Create an empty schedule
    pub fn new() -> Self {
        Self {
            index: GroupedTemporalIndex::new(),
        }
    }

    /// Build a schedule from a bulk record load
    pub fn from_records(records: Vec<DepositRate>) -> Self {
        let mut schedule = Self::new();
        schedule.index.load(records);
        schedule
    }

    /// Insert a single period, keeping the index ordered
    pub fn insert(&mut self, record: DepositRate) {
        self.index.insert(record);
    }

    /// Replace all records wholesale; not queryable mid-rebuild
    pub fn rebuild(&mut self, records: Vec<DepositRate>) {
        self.index.reset();
        self.index.load(records);
    }

    /// The period covering `date`: the earliest period whose end is open
    /// or at-or-after it
    pub fn rate_covering(&self, deposit: DepositId, date: NaiveDate) -> Option<&DepositRate> {
        self.index.covering_at(&deposit, date)
    }

    /// Effective rate (base plus bonus) covering `date`, if any period does
    pub fn effective_rate_covering(&self, deposit: DepositId, date: NaiveDate) -> Option<Decimal> {
        self.rate_covering(deposit, date)
            .map(DepositRate::effective_rate)
    }

    /// True iff no other live record shares this record's (deposit, end)
    pub fn valid_count(&self, record: &DepositRate) -> bool {
        self.index.valid_count(record)
    }

    /// Iterate over every period
    pub fn iter(&self) -> impl Iterator<Item = &DepositRate> {
        self.index.iter()
    }

    /// Number of periods held
    pub fn len(&self) -> usize {
        self.index.len()
    }

    /// Whether the schedule holds no periods
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
    fn test_closed_then_open_periods() {
        let schedule = DepositRateSchedule::from_records(vec![
            DepositRate::new(7, dec!(0.02)).until(d(2024, 3, 31)),
            DepositRate::new(7, dec!(0.025)),
        ]);

        // Inside the closed period
        assert_eq!(
            schedule.rate_covering(7, d(2024, 2, 15)).unwrap().rate,
            dec!(0.02)
        );
        // The end date itself still belongs to the closing period
        assert_eq!(
            schedule.rate_covering(7, d(2024, 3, 31)).unwrap().rate,
            dec!(0.02)
        );
        // Past the explicit end, the open period takes over
        assert_eq!(
            schedule.rate_covering(7, d(2024, 12, 1)).unwrap().rate,
            dec!(0.025)
        );
    }

    #[test]
    fn test_every_date_covered_by_exactly_one_period() {
        let schedule = DepositRateSchedule::from_records(vec![
            DepositRate::new(7, dec!(0.01)).until(d(2024, 1, 31)),
            DepositRate::new(7, dec!(0.02)).until(d(2024, 6, 30)),
            DepositRate::new(7, dec!(0.03)),
        ]);

        let expectations = [
            (d(2023, 6, 1), dec!(0.01)),
            (d(2024, 1, 31), dec!(0.01)),
            (d(2024, 2, 1), dec!(0.02)),
            (d(2024, 6, 30), dec!(0.02)),
            (d(2024, 7, 1), dec!(0.03)),
            (d(2030, 1, 1), dec!(0.03)),
        ];
        for (date, expected) in expectations {
            assert_eq!(
                schedule.rate_covering(7, date).unwrap().rate,
                expected,
                "wrong period for {}",
                date
            );
        }
    }

    #[test]
    fn test_no_open_period_past_every_end() {
        let schedule = DepositRateSchedule::from_records(vec![
            DepositRate::new(7, dec!(0.02)).until(d(2024, 3, 31)),
        ]);

        assert!(schedule.rate_covering(7, d(2024, 4, 1)).is_none());
    }

    #[test]
    fn test_effective_rate_includes_bonus() {
        let schedule = DepositRateSchedule::from_records(vec![
            DepositRate::new(7, dec!(0.02)).with_bonus(dec!(0.005)),
        ]);

        assert_eq!(
            schedule.effective_rate_covering(7, d(2024, 1, 1)),
            Some(dec!(0.025))
        );
        assert_eq!(schedule.effective_rate_covering(8, d(2024, 1, 1)), None);
    }
}
