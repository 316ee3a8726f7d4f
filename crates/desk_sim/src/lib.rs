//! # desk_sim: Bootstrap Monte Carlo Path Simulation
//!
//! Exploratory forward-path projection from a historical price series.
//!
//! This crate provides:
//! - A seeded, reproducible RNG wrapper (`rng`)
//! - The bootstrap path simulator and its result matrix (`simulator`)
//!
//! ## Method and Limitation
//!
//! Each forward path samples, with replacement, from the flattened pool of
//! all historical observations — a plain bootstrap with one uniform draw
//! per step. No block structure is used, so autocorrelation in the series
//! is not preserved. The output approximates a distribution of outcomes
//! for an exploratory projection view; it is not a statistical forecast.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![deny(rustdoc::private_intra_doc_links)]

pub mod error;
pub mod rng;
pub mod simulator;

pub use error::SimulationError;
pub use rng::SimRng;
pub use simulator::{PathSimulator, SimulationResult};
