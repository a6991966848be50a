//! Currency identities (ISO 4217 codes)

use crate::error::{PricebookError, Result};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Currency enumeration (ISO 4217 codes)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Currency {
    /// US Dollar
    USD,
    /// Euro
    EUR,
    /// British Pound Sterling
    GBP,
    /// Japanese Yen
    JPY,
    /// Swiss Franc
    CHF,
    /// Australian Dollar
    AUD,
    /// Canadian Dollar
    CAD,
    /// New Zealand Dollar
    NZD,
    /// Chinese Yuan
    CNY,
    /// Hong Kong Dollar
    HKD,
    /// Singapore Dollar
    SGD,
    /// Indian Rupee
    INR,
}

impl Currency {
    /// Get ISO 4217 code
    pub fn code(&self) -> &'static str {
        match self {
            Currency::USD => "USD",
            Currency::EUR => "EUR",
            Currency::GBP => "GBP",
            Currency::JPY => "JPY",
            Currency::CHF => "CHF",
            Currency::AUD => "AUD",
            Currency::CAD => "CAD",
            Currency::NZD => "NZD",
            Currency::CNY => "CNY",
            Currency::HKD => "HKD",
            Currency::SGD => "SGD",
            Currency::INR => "INR",
        }
    }

    /// Get currency symbol
    pub fn symbol(&self) -> &'static str {
        match self {
            Currency::USD => "$",
            Currency::EUR => "€",
            Currency::GBP => "£",
            Currency::JPY => "¥",
            Currency::CHF => "CHF",
            Currency::AUD => "A$",
            Currency::CAD => "C$",
            Currency::NZD => "NZ$",
            Currency::CNY => "¥",
            Currency::HKD => "HK$",
            Currency::SGD => "S$",
            Currency::INR => "₹",
        }
    }

    /// Parse from ISO code
    pub fn from_code(code: &str) -> Result<Self> {
        match code.to_uppercase().as_str() {
            "USD" => Ok(Currency::USD),
            "EUR" => Ok(Currency::EUR),
            "GBP" => Ok(Currency::GBP),
            "JPY" => Ok(Currency::JPY),
            "CHF" => Ok(Currency::CHF),
            "AUD" => Ok(Currency::AUD),
            "CAD" => Ok(Currency::CAD),
            "NZD" => Ok(Currency::NZD),
            "CNY" => Ok(Currency::CNY),
            "HKD" => Ok(Currency::HKD),
            "SGD" => Ok(Currency::SGD),
            "INR" => Ok(Currency::INR),
            _ => Err(PricebookError::UnknownCurrency(code.to_string())),
        }
    }

    /// Get all supported currencies
    pub fn all() -> Vec<Currency> {
        vec![
            Currency::USD,
            Currency::EUR,
            Currency::GBP,
            Currency::JPY,
            Currency::CHF,
            Currency::AUD,
            Currency::CAD,
            Currency::NZD,
            Currency::CNY,
            Currency::HKD,
            Currency::SGD,
            Currency::INR,
        ]
    }
}

impl fmt::Display for Currency {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.code())
    }
}
