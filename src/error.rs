//! Error types for pricebook

use crate::currency::Currency;
use chrono::NaiveDate;
use thiserror::Error;

/// Main error type for pricebook
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum PricebookError {
    #[error("Unknown currency: {0}")]
    UnknownCurrency(String),

    #[error("Invalid date range: start {start} is after end {end}")]
    InvalidRange { start: NaiveDate, end: NaiveDate },

    #[error("Cannot rebase: no {currency} rate resolvable on {date}")]
    RebaseAborted { currency: Currency, date: NaiveDate },
}

/// Result type alias for pricebook operations
pub type Result<T> = std::result::Result<T, PricebookError>;
