//! Currency conversion built on the exchange-rate index
//!
//! # Components
//!
//! - **reader**: the `RateReader` trait seam consumed by valuation code
//! - **converter**: `CurrencyConverter`, the conversion pivot owning the
//!   reporting currency and the exchange-rate history, including the
//!   reporting-currency rebase
//! - **exploding**: testing stub that panics on any FX usage

pub mod converter;
pub mod exploding;
pub mod reader;

pub use converter::{CurrencyConverter, DirtyTracker};
pub use exploding::ExplodingRateReader;
pub use reader::RateReader;
