//! Record collections owning their temporal indexes
//!
//! Each collection exclusively owns a [`GroupedTemporalIndex`] over one
//! record domain and applies that domain's default when a query resolves
//! nothing: one whole currency unit for prices, an absent value for
//! exchange rates, no rate for deposit periods.
//!
//! [`GroupedTemporalIndex`]: crate::index::GroupedTemporalIndex

pub mod deposit_rates;
pub mod exchange_rates;
pub mod prices;

pub use deposit_rates::DepositRateSchedule;
pub use exchange_rates::ExchangeRateHistory;
pub use prices::PriceHistory;
