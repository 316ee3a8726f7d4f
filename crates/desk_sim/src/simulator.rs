//! Bootstrap path simulator over a historical observation pool.
//!
//! The simulator draws `num_simulations` independent forward paths of
//! `forward_period` steps each, sampling uniformly with replacement from
//! the flattened pool of all historical observations. Rows are disjoint
//! write targets, so path generation runs in parallel with one derived
//! RNG stream per row.

use rayon::prelude::*;

use desk_core::HistoricalSeries;

use crate::error::SimulationError;
use crate::rng::SimRng;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// The matrix produced by one completed simulation run.
///
/// `num_simulations` rows by `forward_period` columns; row `i` holds the
/// i-th simulated forward path. Immutable once produced.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct SimulationResult {
    values: Vec<Vec<f64>>,
    forward_period: usize,
}

impl SimulationResult {
    pub(crate) fn new(values: Vec<Vec<f64>>, forward_period: usize) -> Self {
        Self {
            values,
            forward_period,
        }
    }

    /// Returns the matrix shape as `(num_simulations, forward_period)`.
    #[inline]
    pub fn shape(&self) -> (usize, usize) {
        (self.values.len(), self.forward_period)
    }

    /// Returns the simulated paths, one row per simulation.
    #[inline]
    pub fn paths(&self) -> &[Vec<f64>] {
        &self.values
    }

    /// Mean across the simulation axis, one value per forward step.
    pub fn mean_by_step(&self) -> Vec<f64> {
        let n = self.values.len() as f64;
        (0..self.forward_period)
            .map(|j| self.values.iter().map(|row| row[j]).sum::<f64>() / n)
            .collect()
    }

    /// Linearly interpolated percentile across the simulation axis,
    /// one value per forward step.
    ///
    /// Matches the conventional statistical definition: with `n` sorted
    /// samples the rank is `(n - 1) · p / 100`, interpolating between the
    /// two adjacent order statistics. `p = 0` yields the per-step minimum,
    /// `p = 100` the maximum, `p = 50` the median.
    pub fn percentile_by_step(&self, percentile: f64) -> Vec<f64> {
        let q = percentile / 100.0;
        (0..self.forward_period)
            .map(|j| {
                let mut column: Vec<f64> = self.values.iter().map(|row| row[j]).collect();
                column.sort_by(|a, b| a.partial_cmp(b).expect("simulated values are finite"));

                let rank = (column.len() - 1) as f64 * q;
                let lo = rank.floor() as usize;
                let frac = rank - lo as f64;
                if lo + 1 < column.len() {
                    column[lo] + frac * (column[lo + 1] - column[lo])
                } else {
                    column[lo]
                }
            })
            .collect()
    }
}

/// Bootstrap-resampling forward path simulator.
///
/// One-way state machine: **uninitialised → simulated**. A fresh instance
/// is required to re-simulate with different parameters; result accessors
/// fail with [`SimulationError::NotSimulated`] before [`simulate`] has
/// completed.
///
/// [`simulate`]: PathSimulator::simulate
///
/// # Examples
///
/// ```rust
/// use chrono::NaiveDate;
/// use desk_core::{Candle, HistoricalSeries};
/// use desk_sim::PathSimulator;
///
/// let candles = (0..10)
///     .map(|i| {
///         let date = NaiveDate::from_ymd_opt(2024, 1, 1).unwrap() + chrono::Days::new(i);
///         Candle::new(date, 100.0, 101.0, 99.0, 100.5)
///     })
///     .collect();
/// let series = HistoricalSeries::new(candles);
///
/// let mut sim = PathSimulator::new(&series, 30, 50).unwrap().with_seed(42);
/// sim.simulate().unwrap();
///
/// assert_eq!(sim.get_simulation_results().unwrap().shape(), (50, 30));
/// assert_eq!(sim.get_mean_outcome().unwrap().len(), 30);
/// ```
#[derive(Debug)]
pub struct PathSimulator {
    /// Flattened pool of historical observations sampled with replacement.
    pool: Vec<f64>,
    forward_period: usize,
    num_simulations: usize,
    seed: u64,
    results: Option<SimulationResult>,
}

impl PathSimulator {
    /// Creates a simulator over the given historical series.
    ///
    /// The series is flattened into a single observation pool up-front;
    /// the simulator holds no reference back to the series. The RNG seed
    /// defaults to system entropy; use [`with_seed`](Self::with_seed) for
    /// a reproducible run.
    ///
    /// # Arguments
    /// * `series` - Historical observations (must be non-empty)
    /// * `forward_period` - Steps per simulated path (at least 1)
    /// * `num_simulations` - Number of independent paths (at least 1)
    ///
    /// # Errors
    /// - `SimulationError::EmptySeries` for an empty series
    /// - `SimulationError::InvalidForwardPeriod` for a zero forward period
    /// - `SimulationError::InvalidSimulationCount` for a zero simulation count
    pub fn new(
        series: &HistoricalSeries,
        forward_period: usize,
        num_simulations: usize,
    ) -> Result<Self, SimulationError> {
        if series.is_empty() {
            return Err(SimulationError::EmptySeries);
        }
        if forward_period == 0 {
            return Err(SimulationError::InvalidForwardPeriod { forward_period });
        }
        if num_simulations == 0 {
            return Err(SimulationError::InvalidSimulationCount { num_simulations });
        }

        Ok(Self {
            pool: series.flatten(),
            forward_period,
            num_simulations,
            seed: SimRng::from_entropy().seed(),
            results: None,
        })
    }

    /// Sets an explicit RNG seed for a reproducible run.
    #[must_use]
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }

    /// Returns the seed the run is (or was) performed with.
    #[inline]
    pub fn seed(&self) -> u64 {
        self.seed
    }

    /// Runs the simulation, transitioning the instance to its final state.
    ///
    /// Each row samples `forward_period` values with replacement from the
    /// observation pool, using an RNG stream derived from the master seed
    /// per row; rows are generated in parallel.
    ///
    /// # Errors
    /// - `SimulationError::AlreadySimulated` if called a second time
    pub fn simulate(&mut self) -> Result<(), SimulationError> {
        if self.results.is_some() {
            return Err(SimulationError::AlreadySimulated);
        }

        tracing::debug!(
            num_simulations = self.num_simulations,
            forward_period = self.forward_period,
            pool_size = self.pool.len(),
            seed = self.seed,
            "running bootstrap simulation"
        );

        let pool = &self.pool;
        let forward_period = self.forward_period;
        let seed = self.seed;

        let rows: Vec<Vec<f64>> = (0..self.num_simulations as u64)
            .into_par_iter()
            .map(|row| {
                let mut rng = SimRng::from_seed(SimRng::stream_seed(seed, row));
                (0..forward_period)
                    .map(|_| pool[rng.gen_index(pool.len())])
                    .collect()
            })
            .collect();

        self.results = Some(SimulationResult::new(rows, forward_period));
        Ok(())
    }

    /// Returns the completed result matrix.
    ///
    /// # Errors
    /// - `SimulationError::NotSimulated` before [`simulate`](Self::simulate)
    pub fn get_simulation_results(&self) -> Result<&SimulationResult, SimulationError> {
        self.results.as_ref().ok_or(SimulationError::NotSimulated)
    }

    /// Mean outcome per forward step, reduced across the simulation axis.
    ///
    /// # Errors
    /// - `SimulationError::NotSimulated` before [`simulate`](Self::simulate)
    pub fn get_mean_outcome(&self) -> Result<Vec<f64>, SimulationError> {
        Ok(self.get_simulation_results()?.mean_by_step())
    }

    /// Percentile outcome per forward step, reduced across the simulation
    /// axis. See [`get_median_outcome`](Self::get_median_outcome) for the
    /// 50th-percentile shorthand.
    ///
    /// # Errors
    /// - `SimulationError::NotSimulated` before [`simulate`](Self::simulate)
    /// - `SimulationError::InvalidPercentile` when `percentile` is outside `[0, 100]`
    pub fn get_percentile_outcome(&self, percentile: f64) -> Result<Vec<f64>, SimulationError> {
        // NaN fails the range check as well
        if !(0.0..=100.0).contains(&percentile) {
            return Err(SimulationError::InvalidPercentile { percentile });
        }
        Ok(self.get_simulation_results()?.percentile_by_step(percentile))
    }

    /// Median outcome per forward step (the 50th percentile).
    ///
    /// # Errors
    /// - `SimulationError::NotSimulated` before [`simulate`](Self::simulate)
    pub fn get_median_outcome(&self) -> Result<Vec<f64>, SimulationError> {
        self.get_percentile_outcome(50.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use chrono::NaiveDate;
    use desk_core::Candle;

    fn series_from_closes(closes: &[f64]) -> HistoricalSeries {
        let candles = closes
            .iter()
            .enumerate()
            .map(|(i, &close)| {
                let date =
                    NaiveDate::from_ymd_opt(2024, 1, 1).unwrap() + chrono::Days::new(i as u64);
                Candle::new(date, close, close, close, close)
            })
            .collect();
        HistoricalSeries::new(candles)
    }

    // ==========================================================
    // Construction validation
    // ==========================================================

    #[test]
    fn test_empty_series_rejected() {
        let empty = HistoricalSeries::new(vec![]);
        assert_eq!(
            PathSimulator::new(&empty, 30, 50).unwrap_err(),
            SimulationError::EmptySeries
        );
    }

    #[test]
    fn test_zero_forward_period_rejected() {
        let series = series_from_closes(&[100.0]);
        assert_eq!(
            PathSimulator::new(&series, 0, 50).unwrap_err(),
            SimulationError::InvalidForwardPeriod { forward_period: 0 }
        );
    }

    #[test]
    fn test_zero_simulation_count_rejected() {
        let series = series_from_closes(&[100.0]);
        assert_eq!(
            PathSimulator::new(&series, 30, 0).unwrap_err(),
            SimulationError::InvalidSimulationCount { num_simulations: 0 }
        );
    }

    // ==========================================================
    // State machine
    // ==========================================================

    #[test]
    fn test_accessors_fail_before_simulate() {
        let series = series_from_closes(&[100.0, 101.0]);
        let sim = PathSimulator::new(&series, 30, 50).unwrap();

        assert_eq!(
            sim.get_simulation_results().unwrap_err(),
            SimulationError::NotSimulated
        );
        assert_eq!(
            sim.get_mean_outcome().unwrap_err(),
            SimulationError::NotSimulated
        );
        assert_eq!(
            sim.get_percentile_outcome(50.0).unwrap_err(),
            SimulationError::NotSimulated
        );
    }

    #[test]
    fn test_simulate_is_one_way() {
        let series = series_from_closes(&[100.0, 101.0]);
        let mut sim = PathSimulator::new(&series, 5, 3).unwrap().with_seed(1);
        sim.simulate().unwrap();
        assert_eq!(sim.simulate().unwrap_err(), SimulationError::AlreadySimulated);
    }

    #[test]
    fn test_accessors_succeed_after_simulate() {
        let series = series_from_closes(&[100.0, 101.0, 102.0]);
        let mut sim = PathSimulator::new(&series, 30, 50).unwrap().with_seed(42);
        sim.simulate().unwrap();

        assert_eq!(sim.get_simulation_results().unwrap().shape(), (50, 30));
        assert_eq!(sim.get_mean_outcome().unwrap().len(), 30);
        assert_eq!(sim.get_median_outcome().unwrap().len(), 30);
    }

    // ==========================================================
    // Sampling behaviour
    // ==========================================================

    #[test]
    fn test_sampled_values_come_from_pool() {
        let closes = [10.0, 20.0, 30.0];
        let series = series_from_closes(&closes);
        let mut sim = PathSimulator::new(&series, 25, 40).unwrap().with_seed(7);
        sim.simulate().unwrap();

        let pool = series.flatten();
        for row in sim.get_simulation_results().unwrap().paths() {
            assert_eq!(row.len(), 25);
            for value in row {
                assert!(pool.contains(value), "sampled {} not in pool", value);
            }
        }
    }

    #[test]
    fn test_constant_pool_yields_constant_statistics() {
        let series = series_from_closes(&[42.0, 42.0, 42.0]);
        let mut sim = PathSimulator::new(&series, 10, 20).unwrap().with_seed(3);
        sim.simulate().unwrap();

        for value in sim.get_mean_outcome().unwrap() {
            assert_relative_eq!(value, 42.0, epsilon = 1e-12);
        }
        for value in sim.get_percentile_outcome(90.0).unwrap() {
            assert_relative_eq!(value, 42.0, epsilon = 1e-12);
        }
    }

    #[test]
    fn test_seeded_run_is_reproducible() {
        let series = series_from_closes(&[100.0, 105.0, 95.0, 110.0]);

        let mut a = PathSimulator::new(&series, 20, 30).unwrap().with_seed(99);
        let mut b = PathSimulator::new(&series, 20, 30).unwrap().with_seed(99);
        a.simulate().unwrap();
        b.simulate().unwrap();

        assert_eq!(
            a.get_simulation_results().unwrap(),
            b.get_simulation_results().unwrap()
        );
    }

    #[test]
    fn test_different_seeds_produce_different_paths() {
        let series = series_from_closes(&[100.0, 105.0, 95.0, 110.0]);

        let mut a = PathSimulator::new(&series, 20, 30).unwrap().with_seed(1);
        let mut b = PathSimulator::new(&series, 20, 30).unwrap().with_seed(2);
        a.simulate().unwrap();
        b.simulate().unwrap();

        assert_ne!(
            a.get_simulation_results().unwrap(),
            b.get_simulation_results().unwrap()
        );
    }

    // ==========================================================
    // Percentile semantics
    // ==========================================================

    #[test]
    fn test_percentile_interpolation() {
        // Hand-built 4x1 matrix: column [1, 2, 3, 4]
        let result = SimulationResult::new(vec![vec![1.0], vec![2.0], vec![3.0], vec![4.0]], 1);

        assert_relative_eq!(result.percentile_by_step(0.0)[0], 1.0, epsilon = 1e-12);
        assert_relative_eq!(result.percentile_by_step(100.0)[0], 4.0, epsilon = 1e-12);
        // Median of 4 samples interpolates between the middle pair
        assert_relative_eq!(result.percentile_by_step(50.0)[0], 2.5, epsilon = 1e-12);
        // rank = 3 * 0.25 = 0.75 -> 1 + 0.75 * (2 - 1)
        assert_relative_eq!(result.percentile_by_step(25.0)[0], 1.75, epsilon = 1e-12);
    }

    #[test]
    fn test_mean_by_step() {
        let result = SimulationResult::new(vec![vec![1.0, 10.0], vec![3.0, 30.0]], 2);
        let mean = result.mean_by_step();
        assert_relative_eq!(mean[0], 2.0, epsilon = 1e-12);
        assert_relative_eq!(mean[1], 20.0, epsilon = 1e-12);
    }

    #[test]
    fn test_out_of_range_percentile_rejected() {
        let series = series_from_closes(&[100.0]);
        let mut sim = PathSimulator::new(&series, 5, 5).unwrap().with_seed(1);
        sim.simulate().unwrap();

        for p in [-0.1, 100.1] {
            assert_eq!(
                sim.get_percentile_outcome(p).unwrap_err(),
                SimulationError::InvalidPercentile { percentile: p }
            );
        }
        // NaN compares unequal to everything, so match on the variant
        assert!(matches!(
            sim.get_percentile_outcome(f64::NAN).unwrap_err(),
            SimulationError::InvalidPercentile { .. }
        ));
    }
}
