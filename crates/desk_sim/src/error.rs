//! Error types for simulation operations.

use desk_core::PricingError;
use thiserror::Error;

/// Simulation errors.
///
/// Covers the two failure categories of the path simulator: invalid
/// construction inputs and accessors called in the wrong lifecycle state.
/// The simulator is one-way (uninitialised → simulated); re-running or
/// reading results out of order is rejected rather than silently handled.
///
/// # Examples
/// ```
/// use desk_sim::SimulationError;
///
/// let err = SimulationError::NotSimulated;
/// assert!(format!("{}", err).contains("simulate()"));
/// ```
#[derive(Debug, Clone, Error, PartialEq)]
pub enum SimulationError {
    /// A result accessor was called before `simulate()`.
    #[error("Simulation has not been run yet; call simulate() first")]
    NotSimulated,

    /// `simulate()` was called on an already-simulated instance.
    #[error("Simulation already completed; create a fresh instance to re-simulate")]
    AlreadySimulated,

    /// The historical series holds no observations to sample from.
    #[error("Historical series is empty")]
    EmptySeries,

    /// The forward period must cover at least one step.
    #[error("Invalid forward period: {forward_period}, must be at least 1")]
    InvalidForwardPeriod {
        /// The invalid number of forward steps
        forward_period: usize,
    },

    /// At least one simulation is required.
    #[error("Invalid simulation count: {num_simulations}, must be at least 1")]
    InvalidSimulationCount {
        /// The invalid number of simulations
        num_simulations: usize,
    },

    /// Percentile outside the [0, 100] range.
    #[error("Invalid percentile: {percentile}, must be within [0, 100]")]
    InvalidPercentile {
        /// The invalid percentile value
        percentile: f64,
    },
}

impl From<SimulationError> for PricingError {
    fn from(err: SimulationError) -> Self {
        match err {
            SimulationError::NotSimulated | SimulationError::AlreadySimulated => {
                PricingError::InvalidState(err.to_string())
            }
            SimulationError::EmptySeries
            | SimulationError::InvalidForwardPeriod { .. }
            | SimulationError::InvalidSimulationCount { .. }
            | SimulationError::InvalidPercentile { .. } => {
                PricingError::InvalidInput(err.to_string())
            }
        }
    }
}
