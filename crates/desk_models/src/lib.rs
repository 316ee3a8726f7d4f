//! # desk_models: Analytical Pricing Layer
//!
//! Closed-form European option valuation and derived artefacts.
//!
//! This crate provides:
//! - The Black-Scholes model with analytical Greeks (`analytical`)
//! - Standard normal distribution functions (`analytical::distributions`)
//! - Dense call/put price surfaces over a (volatility × spot) grid (`surface`)
//!
//! ## Design Principles
//!
//! - **Pure functions of explicit inputs**: every evaluation is recomputed
//!   from the contract parameters, with no hidden process-wide state
//! - **Validate at construction**: domain constraints are rejected before
//!   any formula runs, never silently clamped
//! - **Double precision throughout**: prices and Greeks are `f64`

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![deny(rustdoc::private_intra_doc_links)]

pub mod analytical;
pub mod surface;

pub use analytical::{AnalyticalError, BlackScholes, Greeks};
pub use surface::{PriceSurface, SurfaceError};
