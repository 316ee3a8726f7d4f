//! Black-Scholes pricing model for European options.
//!
//! This module provides the Black-Scholes model for pricing European
//! call and put options with analytical Greeks calculations.
//!
//! ## Mathematical Formulas
//!
//! **Call Price**: C = S·N(d₁) - K·e^(-rT)·N(d₂)
//! **Put Price**: P = K·e^(-rT)·N(-d₂) - S·N(-d₁)
//!
//! Where:
//! - d₁ = (ln(S/K) + (r + σ²/2)T) / (σ√T)
//! - d₂ = d₁ - σ√T

use super::distributions::{norm_cdf, norm_pdf};
use super::error::AnalyticalError;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// The full set of first/second-order sensitivities of a call/put pair.
///
/// Produced together from one contract evaluation. `gamma` and `vega`
/// are shared between the call and the put by construction of the
/// formula; the remaining Greeks are sign-differentiated per leg.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Greeks {
    /// Call delta: ∂C/∂S = N(d₁), in [0, 1].
    pub call_delta: f64,
    /// Put delta: ∂P/∂S = N(d₁) - 1, in [-1, 0].
    pub put_delta: f64,
    /// Gamma: ∂²V/∂S² = φ(d₁) / (S·σ·√T), shared by call and put.
    pub gamma: f64,
    /// Vega: ∂V/∂σ = S·φ(d₁)·√T, shared by call and put.
    pub vega: f64,
    /// Call theta: time decay of the call value.
    pub call_theta: f64,
    /// Put theta: time decay of the put value.
    pub put_theta: f64,
    /// Call rho: ∂C/∂r = K·T·e^(-rT)·N(d₂).
    pub call_rho: f64,
    /// Put rho: ∂P/∂r = -K·T·e^(-rT)·N(-d₂).
    pub put_rho: f64,
}

/// Black-Scholes model for European option pricing.
///
/// Constructed from the five scalar contract parameters and immutable
/// thereafter; every evaluation is a pure function of those inputs.
/// Re-create an instance to price a different contract.
///
/// # Examples
/// ```
/// use desk_models::analytical::BlackScholes;
///
/// let bs = BlackScholes::new(1.0, 100.0, 100.0, 0.2, 0.05).unwrap();
/// let (call, put) = bs.calculate_prices();
///
/// // Put-call parity: C - P = S - K*exp(-rT)
/// let parity = call - put - (100.0 - 100.0 * (-0.05_f64).exp());
/// assert!(parity.abs() < 1e-10);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct BlackScholes {
    /// Time to option expiration in years (T)
    time_to_maturity: f64,
    /// Strike price (K)
    strike: f64,
    /// Current price of the underlying asset (S)
    current_price: f64,
    /// Annualised volatility (σ)
    volatility: f64,
    /// Annualised risk-free interest rate (r)
    interest_rate: f64,
}

impl BlackScholes {
    /// Creates a new Black-Scholes model.
    ///
    /// # Arguments
    /// * `time_to_maturity` - Time to expiration in years (must be positive)
    /// * `strike` - Strike price (must be positive)
    /// * `current_price` - Current spot price (must be positive)
    /// * `volatility` - Annualised volatility (must be positive)
    /// * `interest_rate` - Annualised risk-free rate (any real value)
    ///
    /// # Errors
    /// - `AnalyticalError::InvalidMaturity` if `time_to_maturity <= 0`
    /// - `AnalyticalError::InvalidStrike` if `strike <= 0`
    /// - `AnalyticalError::InvalidSpot` if `current_price <= 0`
    /// - `AnalyticalError::InvalidVolatility` if `volatility <= 0`
    ///
    /// # Examples
    /// ```
    /// use desk_models::analytical::BlackScholes;
    ///
    /// let bs = BlackScholes::new(1.0, 45.0, 40.0, 0.2, 0.05).unwrap();
    ///
    /// // Zero volatility makes the formula undefined
    /// assert!(BlackScholes::new(1.0, 45.0, 40.0, 0.0, 0.05).is_err());
    /// ```
    pub fn new(
        time_to_maturity: f64,
        strike: f64,
        current_price: f64,
        volatility: f64,
        interest_rate: f64,
    ) -> Result<Self, AnalyticalError> {
        if time_to_maturity <= 0.0 {
            return Err(AnalyticalError::InvalidMaturity { time_to_maturity });
        }
        if strike <= 0.0 {
            return Err(AnalyticalError::InvalidStrike { strike });
        }
        if current_price <= 0.0 {
            return Err(AnalyticalError::InvalidSpot {
                spot: current_price,
            });
        }
        if volatility <= 0.0 {
            return Err(AnalyticalError::InvalidVolatility { volatility });
        }

        Ok(Self {
            time_to_maturity,
            strike,
            current_price,
            volatility,
            interest_rate,
        })
    }

    /// Returns the time to maturity in years.
    #[inline]
    pub fn time_to_maturity(&self) -> f64 {
        self.time_to_maturity
    }

    /// Returns the strike price.
    #[inline]
    pub fn strike(&self) -> f64 {
        self.strike
    }

    /// Returns the current spot price.
    #[inline]
    pub fn current_price(&self) -> f64 {
        self.current_price
    }

    /// Returns the volatility.
    #[inline]
    pub fn volatility(&self) -> f64 {
        self.volatility
    }

    /// Returns the risk-free interest rate.
    #[inline]
    pub fn interest_rate(&self) -> f64 {
        self.interest_rate
    }

    /// Computes the d₁ and d₂ intermediates of the Black-Scholes formula.
    ///
    /// - d₁ = (ln(S/K) + (r + σ²/2)T) / (σ√T)
    /// - d₂ = d₁ - σ√T
    ///
    /// Well-defined for every successfully constructed instance since all
    /// inputs entering the log and the division are strictly positive.
    #[inline]
    pub fn d1_d2(&self) -> (f64, f64) {
        let sqrt_t = self.time_to_maturity.sqrt();
        let vol_sqrt_t = self.volatility * sqrt_t;

        let log_moneyness = (self.current_price / self.strike).ln();
        let drift =
            (self.interest_rate + 0.5 * self.volatility * self.volatility) * self.time_to_maturity;

        let d1 = (log_moneyness + drift) / vol_sqrt_t;
        (d1, d1 - vol_sqrt_t)
    }

    /// Computes the European call and put prices.
    ///
    /// - C = S·N(d₁) - K·e^(-rT)·N(d₂)
    /// - P = K·e^(-rT)·N(-d₂) - S·N(-d₁)
    ///
    /// # Returns
    /// The pair `(call_price, put_price)`.
    ///
    /// # Examples
    /// ```
    /// use desk_models::analytical::BlackScholes;
    ///
    /// let bs = BlackScholes::new(1.0, 100.0, 100.0, 0.2, 0.05).unwrap();
    /// let (call, put) = bs.calculate_prices();
    /// assert!(call > 0.0 && put > 0.0);
    /// ```
    pub fn calculate_prices(&self) -> (f64, f64) {
        let (d1, d2) = self.d1_d2();
        let discount = (-self.interest_rate * self.time_to_maturity).exp();

        let call = self.current_price * norm_cdf(d1) - self.strike * discount * norm_cdf(d2);
        let put = self.strike * discount * norm_cdf(-d2) - self.current_price * norm_cdf(-d1);

        (call, put)
    }

    /// Computes all eight sensitivities from the same d₁, d₂ intermediates.
    ///
    /// # Returns
    /// A [`Greeks`] value covering both the call and the put leg.
    ///
    /// # Examples
    /// ```
    /// use desk_models::analytical::BlackScholes;
    ///
    /// let greeks = BlackScholes::new(1.0, 100.0, 100.0, 0.2, 0.05)
    ///     .unwrap()
    ///     .calculate_greeks();
    ///
    /// assert!(greeks.call_delta >= 0.0 && greeks.call_delta <= 1.0);
    /// assert!(greeks.put_delta >= -1.0 && greeks.put_delta <= 0.0);
    /// ```
    pub fn calculate_greeks(&self) -> Greeks {
        let (d1, d2) = self.d1_d2();

        let t = self.time_to_maturity;
        let s = self.current_price;
        let k = self.strike;
        let sigma = self.volatility;
        let r = self.interest_rate;

        let sqrt_t = t.sqrt();
        let pdf_d1 = norm_pdf(d1);
        let discounted_strike = k * (-r * t).exp();

        let call_delta = norm_cdf(d1);
        let put_delta = call_delta - 1.0;

        let gamma = pdf_d1 / (s * sigma * sqrt_t);
        let vega = s * pdf_d1 * sqrt_t;

        // Common time-decay term: -S·φ(d₁)·σ / (2√T)
        let decay = -s * pdf_d1 * sigma / (2.0 * sqrt_t);
        let call_theta = decay - r * discounted_strike * norm_cdf(d2);
        let put_theta = decay + r * discounted_strike * norm_cdf(-d2);

        let call_rho = discounted_strike * t * norm_cdf(d2);
        let put_rho = -discounted_strike * t * norm_cdf(-d2);

        Greeks {
            call_delta,
            put_delta,
            gamma,
            vega,
            call_theta,
            put_theta,
            call_rho,
            put_rho,
        }
    }
}
