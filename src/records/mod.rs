//! Temporal record types
//!
//! Three parallel record domains feed the valuation engine:
//!
//! - **security_price**: market price observations per security
//! - **deposit_rate**: period-based interest rates per deposit account
//! - **exchange_rate**: reporting-currency exchange rate observations

pub mod deposit_rate;
pub mod exchange_rate;
pub mod security_price;

pub use deposit_rate::DepositRate;
pub use exchange_rate::ExchangeRate;
pub use security_price::SecurityPrice;
