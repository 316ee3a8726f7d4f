//! Dense call/put price surfaces over a (volatility × spot) grid.
//!
//! Each grid cell re-prices the base contract with that cell's spot and
//! volatility substituted, producing the two matrices rendered as heatmaps
//! by the (external) presentation layer.

use rayon::prelude::*;

use desk_core::PricingError;
use thiserror::Error;

use crate::analytical::BlackScholes;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Input-shape errors for surface generation.
///
/// A range must contain at least one point, and every value on it must be
/// strictly positive so each cell yields a valid contract.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum SurfaceError {
    /// A grid axis was supplied with no points.
    #[error("Empty {axis} range")]
    EmptyRange {
        /// Name of the offending axis ("spot" or "volatility")
        axis: &'static str,
    },

    /// An input contains a value outside the pricing domain.
    #[error("Non-positive {axis} value: {value}")]
    NonPositiveValue {
        /// Name of the offending input ("spot", "volatility" or "strike")
        axis: &'static str,
        /// The offending value
        value: f64,
    },
}

impl From<SurfaceError> for PricingError {
    fn from(err: SurfaceError) -> Self {
        PricingError::InvalidShape(err.to_string())
    }
}

/// Call and put price matrices over a (volatility × spot) grid.
///
/// Row index = volatility, column index = spot; the axis vectors are stored
/// explicitly alongside the matrices. Shape is
/// `(vols.len(), spots.len())` and the ordering is part of the contract —
/// downstream heatmap rendering depends on it.
///
/// # Examples
/// ```
/// use desk_models::analytical::BlackScholes;
/// use desk_models::surface::PriceSurface;
///
/// let base = BlackScholes::new(1.0, 45.0, 40.0, 0.2, 0.05).unwrap();
/// let surface = PriceSurface::generate(
///     &base,
///     &[35.0, 40.0, 45.0],
///     &[0.1, 0.2],
///     45.0,
/// ).unwrap();
///
/// assert_eq!(surface.shape(), (2, 3));
/// ```
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct PriceSurface {
    /// Spot price axis (columns).
    spots: Vec<f64>,
    /// Volatility axis (rows).
    vols: Vec<f64>,
    /// Call prices: `call[vol_idx][spot_idx]`.
    call: Vec<Vec<f64>>,
    /// Put prices: `put[vol_idx][spot_idx]`.
    put: Vec<Vec<f64>>,
}

impl PriceSurface {
    /// Generates the surface by re-pricing the base contract per cell.
    ///
    /// Each cell `[i, j]` prices a contract with `time_to_maturity` and
    /// `interest_rate` copied from `base`, `strike` as given,
    /// `current_price = spot_range[j]` and `volatility = vol_range[i]`.
    /// Rows are independent and evaluated in parallel.
    ///
    /// # Arguments
    /// * `base` - Contract supplying maturity and rate
    /// * `spot_range` - Spot axis values (strictly positive, at least one)
    /// * `vol_range` - Volatility axis values (strictly positive, at least one)
    /// * `strike` - Strike applied to every cell
    ///
    /// # Errors
    /// - `SurfaceError::EmptyRange` for an empty axis
    /// - `SurfaceError::NonPositiveValue` for a value outside the pricing
    ///   domain, including the strike
    pub fn generate(
        base: &BlackScholes,
        spot_range: &[f64],
        vol_range: &[f64],
        strike: f64,
    ) -> Result<Self, SurfaceError> {
        validate_range("spot", spot_range)?;
        validate_range("volatility", vol_range)?;
        validate_range("strike", std::slice::from_ref(&strike))?;

        tracing::debug!(
            rows = vol_range.len(),
            cols = spot_range.len(),
            strike,
            "generating price surface"
        );

        let time_to_maturity = base.time_to_maturity();
        let interest_rate = base.interest_rate();

        let cells: Vec<Vec<(f64, f64)>> = vol_range
            .par_iter()
            .map(|&vol| {
                spot_range
                    .iter()
                    .map(|&spot| {
                        // Cannot fail: spot/vol/strike are validated above and
                        // the base contract guarantees a positive maturity.
                        BlackScholes::new(time_to_maturity, strike, spot, vol, interest_rate)
                            .expect("surface inputs validated as positive")
                            .calculate_prices()
                    })
                    .collect()
            })
            .collect();

        let call = cells
            .iter()
            .map(|row| row.iter().map(|&(c, _)| c).collect())
            .collect();
        let put = cells
            .iter()
            .map(|row| row.iter().map(|&(_, p)| p).collect())
            .collect();

        Ok(Self {
            spots: spot_range.to_vec(),
            vols: vol_range.to_vec(),
            call,
            put,
        })
    }

    /// Returns the spot price axis (column labels).
    #[inline]
    pub fn spots(&self) -> &[f64] {
        &self.spots
    }

    /// Returns the volatility axis (row labels).
    #[inline]
    pub fn vols(&self) -> &[f64] {
        &self.vols
    }

    /// Returns the matrix shape as `(rows, cols)` = `(vols, spots)`.
    #[inline]
    pub fn shape(&self) -> (usize, usize) {
        (self.vols.len(), self.spots.len())
    }

    /// Returns the call price matrix, `call[vol_idx][spot_idx]`.
    #[inline]
    pub fn call_prices(&self) -> &[Vec<f64>] {
        &self.call
    }

    /// Returns the put price matrix, `put[vol_idx][spot_idx]`.
    #[inline]
    pub fn put_prices(&self) -> &[Vec<f64>] {
        &self.put
    }
}

fn validate_range(axis: &'static str, range: &[f64]) -> Result<(), SurfaceError> {
    if range.is_empty() {
        return Err(SurfaceError::EmptyRange { axis });
    }
    for &value in range {
        if value <= 0.0 {
            return Err(SurfaceError::NonPositiveValue { axis, value });
        }
    }
    Ok(())
}
