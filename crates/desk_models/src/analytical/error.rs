//! Error types for analytical pricing operations.

use desk_core::PricingError;
use thiserror::Error;

/// Analytical pricing errors.
///
/// Every variant is a domain error: a contract parameter violates the
/// strict-positivity constraint the Black-Scholes formula requires
/// (the log and the `σ·√T` division are undefined at zero). Inputs are
/// rejected at construction, never clamped or defaulted.
///
/// # Examples
/// ```
/// use desk_models::analytical::AnalyticalError;
///
/// let err = AnalyticalError::InvalidVolatility { volatility: -0.2 };
/// assert!(format!("{}", err).contains("volatility"));
/// ```
#[derive(Debug, Clone, Error, PartialEq)]
pub enum AnalyticalError {
    /// Invalid time to maturity (non-positive).
    #[error("Invalid time to maturity: T = {time_to_maturity}")]
    InvalidMaturity {
        /// The invalid maturity value, in years
        time_to_maturity: f64,
    },

    /// Invalid strike price (non-positive).
    #[error("Invalid strike price: K = {strike}")]
    InvalidStrike {
        /// The invalid strike value
        strike: f64,
    },

    /// Invalid spot price (non-positive).
    #[error("Invalid spot price: S = {spot}")]
    InvalidSpot {
        /// The invalid spot price value
        spot: f64,
    },

    /// Invalid volatility (non-positive).
    #[error("Invalid volatility: σ = {volatility}")]
    InvalidVolatility {
        /// The invalid volatility value
        volatility: f64,
    },
}

impl From<AnalyticalError> for PricingError {
    fn from(err: AnalyticalError) -> Self {
        PricingError::InvalidInput(err.to_string())
    }
}
