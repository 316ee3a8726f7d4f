//! # desk_core: Foundation Types for the Optiondesk Pricing Core
//!
//! ## Layer 1 (Foundation) Role
//!
//! desk_core serves as the bottom layer of the workspace, providing:
//! - Historical market data types: `Candle`, `HistoricalSeries` (`series`)
//! - Summary statistics over a price history (`series`)
//! - Error types: `PricingError` (`types`)
//!
//! ## Zero Dependency Principle
//!
//! Layer 1 has no dependencies on other desk_* crates, with minimal external
//! dependencies:
//! - chrono: Date arithmetic for series timestamps
//! - thiserror: Structured error types
//! - serde: Serialisation support (optional)
//!
//! ## Usage Examples
//!
//! ```rust
//! use chrono::NaiveDate;
//! use desk_core::{Candle, HistoricalSeries};
//!
//! let candles = vec![
//!     Candle::new(NaiveDate::from_ymd_opt(2024, 1, 2).unwrap(), 100.0, 102.0, 99.0, 101.0),
//!     Candle::new(NaiveDate::from_ymd_opt(2024, 1, 3).unwrap(), 101.0, 103.0, 100.0, 102.5),
//! ];
//! let series = HistoricalSeries::new(candles);
//!
//! assert_eq!(series.latest_close(), Some(102.5));
//! assert_eq!(series.flatten().len(), 8);
//! ```
//!
//! ## Feature Flags
//!
//! - `serde`: Enable serialisation for `Candle` and `HistoricalSeries`

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![deny(rustdoc::private_intra_doc_links)]

pub mod series;
pub mod types;

pub use series::{Candle, HistoricalSeries, PriceChange};
pub use types::PricingError;
