//! Entity representations (securities and deposit accounts)

use crate::currency::Currency;
use crate::types::{DepositId, SecurityId};
use serde::{Deserialize, Serialize};
use std::fmt;

/// A tradeable security whose prices are tracked over time
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Security {
    /// Unique security identifier
    pub id: SecurityId,
    /// Trading symbol
    pub symbol: String,
    /// Security name
    pub name: Option<String>,
    /// Currency all prices for this security are quoted in
    pub currency: Currency,
}

impl Security {
    /// Create a new security
    pub fn new(id: SecurityId, symbol: impl Into<String>, currency: Currency) -> Self {
        Self {
            id,
            symbol: symbol.into(),
            name: None,
            currency,
        }
    }

    /// Create a new security with a name
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }
}

impl fmt::Display for Security {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Security({}, {})", self.symbol, self.currency)
    }
}

/// An interest-bearing deposit account with period-based rates
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Deposit {
    /// Unique deposit identifier
    pub id: DepositId,
    /// Account name
    pub name: String,
    /// Currency the deposit is held in
    pub currency: Currency,
}

impl Deposit {
    /// Create a new deposit account
    pub fn new(id: DepositId, name: impl Into<String>, currency: Currency) -> Self {
        Self {
            id,
            name: name.into(),
            currency,
        }
    }
}

impl fmt::Display for Deposit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Deposit({}, {})", self.name, self.currency)
    }
}
