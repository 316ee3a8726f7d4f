//! Historical price series types and summary statistics.
//!
//! This module provides:
//! - [`Candle`]: A single dated OHLC observation
//! - [`HistoricalSeries`]: An ordered, read-only sequence of candles
//! - [`PriceChange`]: Absolute and percentage change between two closes
//!
//! The series is supplied by an external market-data layer and consumed
//! here as plain numeric input. The core never fetches data itself.

use chrono::NaiveDate;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Number of trading observations in a nominal year, used for the
/// year-over-year change and the trailing 52-week high/low windows.
pub const TRADING_DAYS_PER_YEAR: usize = 252;

/// A single dated price observation.
///
/// # Examples
/// ```
/// use chrono::NaiveDate;
/// use desk_core::Candle;
///
/// let candle = Candle::new(
///     NaiveDate::from_ymd_opt(2024, 4, 4).unwrap(),
///     100.0, 102.5, 99.5, 101.0,
/// );
/// assert_eq!(candle.close, 101.0);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Candle {
    /// Observation date.
    pub date: NaiveDate,
    /// Opening price.
    pub open: f64,
    /// Highest traded price.
    pub high: f64,
    /// Lowest traded price.
    pub low: f64,
    /// Closing price.
    pub close: f64,
}

impl Candle {
    /// Creates a new candle.
    #[inline]
    pub fn new(date: NaiveDate, open: f64, high: f64, low: f64, close: f64) -> Self {
        Self {
            date,
            open,
            high,
            low,
            close,
        }
    }
}

/// Absolute and percentage change between two closing prices.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct PriceChange {
    /// Latest close minus the reference close.
    pub absolute: f64,
    /// Change relative to the reference close, in percent.
    pub percent: f64,
}

/// An ordered, time-indexed sequence of price observations for one instrument.
///
/// The series is read-only to the pricing core: constructed once from
/// externally supplied data and queried for summary statistics or the
/// flattened observation pool consumed by the path simulator.
///
/// Candles are expected in ascending date order; all statistics treat the
/// last element as the most recent observation.
#[derive(Debug, Clone, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct HistoricalSeries {
    candles: Vec<Candle>,
}

impl HistoricalSeries {
    /// Creates a series from candles in ascending date order.
    pub fn new(candles: Vec<Candle>) -> Self {
        Self { candles }
    }

    /// Returns the number of observations.
    #[inline]
    pub fn len(&self) -> usize {
        self.candles.len()
    }

    /// Returns `true` when the series holds no observations.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.candles.is_empty()
    }

    /// Returns the underlying candles, oldest first.
    #[inline]
    pub fn candles(&self) -> &[Candle] {
        &self.candles
    }

    /// Returns the closing prices, oldest first.
    pub fn closes(&self) -> Vec<f64> {
        self.candles.iter().map(|c| c.close).collect()
    }

    /// Returns the most recent closing price, or `None` for an empty series.
    #[inline]
    pub fn latest_close(&self) -> Option<f64> {
        self.candles.last().map(|c| c.close)
    }

    /// Change between the latest close and the close one trading year earlier.
    ///
    /// Uses the observation [`TRADING_DAYS_PER_YEAR`] positions before the
    /// end as the reference, falling back to the first observation for
    /// shorter series. Returns `None` for an empty series or a zero
    /// reference close.
    pub fn price_difference(&self) -> Option<PriceChange> {
        let latest = self.latest_close()?;
        let reference = if self.candles.len() > TRADING_DAYS_PER_YEAR {
            self.candles[self.candles.len() - TRADING_DAYS_PER_YEAR].close
        } else {
            self.candles.first()?.close
        };
        if reference == 0.0 {
            return None;
        }
        let absolute = latest - reference;
        Some(PriceChange {
            absolute,
            percent: absolute / reference * 100.0,
        })
    }

    /// Highest high over the trailing trading year, or `None` when empty.
    pub fn high_52_week(&self) -> Option<f64> {
        self.candles
            .iter()
            .rev()
            .take(TRADING_DAYS_PER_YEAR)
            .map(|c| c.high)
            .fold(None, |acc, h| Some(acc.map_or(h, |m: f64| m.max(h))))
    }

    /// Lowest low over the trailing trading year, or `None` when empty.
    pub fn low_52_week(&self) -> Option<f64> {
        self.candles
            .iter()
            .rev()
            .take(TRADING_DAYS_PER_YEAR)
            .map(|c| c.low)
            .fold(None, |acc, l| Some(acc.map_or(l, |m: f64| m.min(l))))
    }

    /// Flattens every observation into a single pool of values.
    ///
    /// Emits `open, high, low, close` per candle, oldest candle first.
    /// This is the empirical pool the bootstrap path simulator samples
    /// from with replacement.
    pub fn flatten(&self) -> Vec<f64> {
        let mut pool = Vec::with_capacity(self.candles.len() * 4);
        for c in &self.candles {
            pool.push(c.open);
            pool.push(c.high);
            pool.push(c.low);
            pool.push(c.close);
        }
        pool
    }
}
