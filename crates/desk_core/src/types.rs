//! Error types for structured error handling.
//!
//! This module provides `PricingError`, the cross-layer error category
//! that the model and simulation layers convert their specific errors into.

use thiserror::Error;

/// Categorised pricing errors.
///
/// Provides structured error handling for pricing operations with
/// descriptive context for each failure mode. Layer-specific errors
/// (`AnalyticalError`, `SurfaceError`, `SimulationError`) convert into
/// this type via `From` so callers can hold a single error category.
///
/// # Variants
/// - `InvalidInput`: A pricing input violates its domain constraint
/// - `InvalidShape`: A grid range is empty or contains unusable values
/// - `InvalidState`: An accessor was called before the producing operation ran
///
/// # Examples
/// ```
/// use desk_core::PricingError;
///
/// let err = PricingError::InvalidInput("Negative spot price".to_string());
/// assert_eq!(format!("{}", err), "Invalid input: Negative spot price");
/// ```
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum PricingError {
    /// Invalid input data or parameters.
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// Grid range is empty or malformed.
    #[error("Invalid shape: {0}")]
    InvalidShape(String),

    /// Operation called in the wrong lifecycle state.
    #[error("Invalid state: {0}")]
    InvalidState(String),
}
