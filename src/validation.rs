//! Record validation pass
//!
//! Validation is a separate read-only pass over the histories: the index
//! tolerates bad records mechanically, and problems surface here as
//! field-level findings rather than errors thrown from lookups.

use crate::currency::Currency;
use crate::entity::{Deposit, Security};
use crate::fx::CurrencyConverter;
use crate::history::{DepositRateSchedule, ExchangeRateHistory, PriceHistory};
use crate::types::RecordId;
use hashbrown::HashSet;
use rust_decimal::Decimal;
use std::fmt;

/// Field of the offending record a finding is attached to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RecordField {
    Date,
    EndDate,
    Price,
    Rate,
    Bonus,
    Ratio,
    Security,
    Deposit,
    Currency,
}

/// A single field-level validation finding
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationFinding {
    /// Record the finding is attached to
    pub record: RecordId,
    /// Offending field
    pub field: RecordField,
    /// Human-readable description
    pub message: String,
}

impl ValidationFinding {
    fn new(record: RecordId, field: RecordField, message: impl Into<String>) -> Self {
        Self {
            record,
            field,
            message: message.into(),
        }
    }
}

impl fmt::Display for ValidationFinding {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:?}: {}", self.field, self.message)
    }
}

/// Validate all price observations against the known securities
pub fn validate_prices(history: &PriceHistory, securities: &[Security]) -> Vec<ValidationFinding> {
    let known: HashSet<_> = securities.iter().map(|s| s.id).collect();
    let mut findings = Vec::new();

    for record in history.iter() {
        if !history.valid_count(record) {
            findings.push(ValidationFinding::new(
                record.id,
                RecordField::Date,
                format!(
                    "duplicate price for security {} on {}",
                    record.security, record.date
                ),
            ));
        }
        if record.price <= Decimal::ZERO {
            findings.push(ValidationFinding::new(
                record.id,
                RecordField::Price,
                format!("price must be positive, got {}", record.price),
            ));
        }
        if !known.contains(&record.security) {
            findings.push(ValidationFinding::new(
                record.id,
                RecordField::Security,
                format!("unknown security {}", record.security),
            ));
        }
    }
    findings
}

/// Validate all rate periods against the known deposit accounts
pub fn validate_deposit_rates(
    schedule: &DepositRateSchedule,
    deposits: &[Deposit],
) -> Vec<ValidationFinding> {
    let known: HashSet<_> = deposits.iter().map(|d| d.id).collect();
    let mut findings = Vec::new();

    for record in schedule.iter() {
        if !schedule.valid_count(record) {
            let end = record
                .end_date
                .map(|d| d.to_string())
                .unwrap_or_else(|| "open".to_string());
            findings.push(ValidationFinding::new(
                record.id,
                RecordField::EndDate,
                format!(
                    "duplicate rate period for deposit {} ending {}",
                    record.deposit, end
                ),
            ));
        }
        if record.rate < Decimal::ZERO {
            findings.push(ValidationFinding::new(
                record.id,
                RecordField::Rate,
                format!("rate must not be negative, got {}", record.rate),
            ));
        }
        if let Some(bonus) = record.bonus {
            if bonus < Decimal::ZERO {
                findings.push(ValidationFinding::new(
                    record.id,
                    RecordField::Bonus,
                    format!("bonus must not be negative, got {}", bonus),
                ));
            }
        }
        if !known.contains(&record.deposit) {
            findings.push(ValidationFinding::new(
                record.id,
                RecordField::Deposit,
                format!("unknown deposit {}", record.deposit),
            ));
        }
    }
    findings
}

/// Validate all exchange-rate records against the converter's reporting
/// currency
pub fn validate_exchange_rates(converter: &CurrencyConverter) -> Vec<ValidationFinding> {
    validate_exchange_rate_history(converter.rates(), converter.reporting())
}

/// Validate an exchange-rate history against a reporting currency
pub fn validate_exchange_rate_history(
    history: &ExchangeRateHistory,
    reporting: Currency,
) -> Vec<ValidationFinding> {
    let mut findings = Vec::new();

    for record in history.iter() {
        if !history.valid_count(record) {
            findings.push(ValidationFinding::new(
                record.id,
                RecordField::Date,
                format!(
                    "duplicate {} rate on {}",
                    record.to_currency, record.date
                ),
            ));
        }
        if record.ratio <= Decimal::ZERO {
            findings.push(ValidationFinding::new(
                record.id,
                RecordField::Ratio,
                format!("ratio must be positive, got {}", record.ratio),
            ));
        }
        if record.from_currency != reporting {
            findings.push(ValidationFinding::new(
                record.id,
                RecordField::Currency,
                format!(
                    "rate quoted from {} but the reporting currency is {}",
                    record.from_currency, reporting
                ),
            ));
        }
        if record.from_currency == record.to_currency {
            findings.push(ValidationFinding::new(
                record.id,
                RecordField::Currency,
                format!("self-referential {} rate", record.to_currency),
            ));
        }
    }
    findings
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::records::{DepositRate, ExchangeRate, SecurityPrice};
    use chrono::NaiveDate;
    use rust_decimal_macros::dec;

    fn d(y: i32, m: u32, day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, day).unwrap()
    }

    #[test]
    fn test_clean_records_produce_no_findings() {
        let securities = vec![Security::new(1, "VWRL", Currency::GBP)];
        let history = PriceHistory::from_records(vec![
            SecurityPrice::new(1, d(2024, 1, 1), dec!(100)),
            SecurityPrice::new(1, d(2024, 2, 1), dec!(101)),
        ]);

        assert!(validate_prices(&history, &securities).is_empty());
    }

    #[test]
    fn test_duplicate_price_flagged_on_both_records() {
        let securities = vec![Security::new(1, "VWRL", Currency::GBP)];
        let history = PriceHistory::from_records(vec![
            SecurityPrice::new(1, d(2024, 1, 1), dec!(100)),
            SecurityPrice::new(1, d(2024, 1, 1), dec!(101)),
        ]);

        let findings = validate_prices(&history, &securities);
        assert_eq!(findings.len(), 2);
        assert!(findings.iter().all(|f| f.field == RecordField::Date));
    }

    #[test]
    fn test_non_positive_price_flagged() {
        let securities = vec![Security::new(1, "VWRL", Currency::GBP)];
        let history = PriceHistory::from_records(vec![SecurityPrice::new(
            1,
            d(2024, 1, 1),
            dec!(0),
        )]);

        let findings = validate_prices(&history, &securities);
        assert_eq!(findings.len(), 1);
        assert_eq!(findings[0].field, RecordField::Price);
    }

    #[test]
    fn test_unknown_security_flagged() {
        let history = PriceHistory::from_records(vec![SecurityPrice::new(
            99,
            d(2024, 1, 1),
            dec!(100),
        )]);

        let findings = validate_prices(&history, &[]);
        assert_eq!(findings.len(), 1);
        assert_eq!(findings[0].field, RecordField::Security);
    }

    #[test]
    fn test_duplicate_open_periods_flagged() {
        let deposits = vec![Deposit::new(7, "Saver", Currency::GBP)];
        let schedule = DepositRateSchedule::from_records(vec![
            DepositRate::new(7, dec!(0.02)),
            DepositRate::new(7, dec!(0.03)),
        ]);

        let findings = validate_deposit_rates(&schedule, &deposits);
        assert_eq!(findings.len(), 2);
        assert!(findings.iter().all(|f| f.field == RecordField::EndDate));
    }

    #[test]
    fn test_negative_rate_and_bonus_flagged() {
        let deposits = vec![Deposit::new(7, "Saver", Currency::GBP)];
        let schedule = DepositRateSchedule::from_records(vec![DepositRate::new(7, dec!(-0.01))
            .with_bonus(dec!(-0.005))
            .until(d(2024, 6, 30))]);

        let findings = validate_deposit_rates(&schedule, &deposits);
        let fields: Vec<_> = findings.iter().map(|f| f.field).collect();
        assert!(fields.contains(&RecordField::Rate));
        assert!(fields.contains(&RecordField::Bonus));
    }

    #[test]
    fn test_reporting_mismatch_flagged() {
        let mut converter = CurrencyConverter::new(Currency::GBP);
        converter.insert(ExchangeRate::new(
            Currency::EUR,
            Currency::USD,
            d(2024, 1, 1),
            dec!(1.08),
        ));

        let findings = validate_exchange_rates(&converter);
        assert_eq!(findings.len(), 1);
        assert_eq!(findings[0].field, RecordField::Currency);
    }

    #[test]
    fn test_self_referential_rate_flagged() {
        let mut converter = CurrencyConverter::new(Currency::GBP);
        converter.insert(ExchangeRate::new(
            Currency::GBP,
            Currency::GBP,
            d(2024, 1, 1),
            dec!(1),
        ));

        let findings = validate_exchange_rates(&converter);
        assert_eq!(findings.len(), 1);
        assert_eq!(findings[0].field, RecordField::Currency);
    }
}
