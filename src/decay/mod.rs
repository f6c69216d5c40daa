//! Bateman decay-chain evaluation for a metastable parent and its ground-state daughter
//!
//! The parent decays with rate λm; a fixed fraction of those decays
//! ([`BRANCHING_FRACTION`]) feeds the daughter by isomeric transition. The
//! daughter itself decays with rate λg.
//!
//! # Key Quantities
//!
//! | Quantity | Definition |
//! |----------|------------|
//! | λm | ln(2) / T½(parent) |
//! | λg | ln(2) / T½(daughter) |
//! | λ_IT | 0.914 · λm |
//! | A_m(t) | A_m0 · e^(−λm·t) |
//! | A_g(t) | A_g0 · e^(−λg·t) + λ_IT/(λg − λ_IT) · λg/λm · A_m0 · (e^(−λ_IT·t) − e^(−λg·t)) |
//! | % m, % g | share of A_m + A_g |
//! | DF m | A_m / A_m0 |
//! | DF g | A_g / (A_m0 + A_g0) |
//!
//! # Usage
//!
//! ```rust,ignore
//! use hgquant::prelude::*;
//!
//! let reference = parse_timestamp("2025-01-01 00:00", TimestampPrecision::Full)?;
//! let params = DecayParameters::new(100.0, 0.0, 23.8, 64.14, reference);
//! let obs = params.observe("2025-01-01 23:48", parse_timestamp("2025-01-01 23:48", TimestampPrecision::Full)?);
//!
//! let series = compute_series(&params, &[obs])?;
//! println!("A_m = {:.3}", series.results[0].parent_activity);
//! ```

mod calc;
mod constants;
mod error;
mod series;
mod types;

#[cfg(test)]
mod tests;

pub use calc::{daughter_activity, decay_factor, parent_activity, percent_of};
pub use constants::{
    derive_constants, DecayConstants, BRANCHING_FRACTION, DEGENERACY_TOLERANCE, DISPLAY_DECIMALS,
};
pub use error::DecayError;
pub use series::compute_series;
pub use types::{ActivityResult, DecayParameters, DecaySeries, Observation};
