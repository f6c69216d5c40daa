//! Decay-constant derivation
//!
//! Converts the two half-lives into the three rate constants used by the
//! Bateman solution. Values are kept at full precision; rounding only happens
//! when the constants are rendered for a report.

use serde::{Deserialize, Serialize};
use std::f64::consts::LN_2;

use super::error::DecayError;

/// Fraction of parent decays that proceed by isomeric transition to the daughter
pub const BRANCHING_FRACTION: f64 = 0.914;

/// Relative tolerance under which λg and λ_IT are considered equal
pub const DEGENERACY_TOLERANCE: f64 = 1e-10;

/// Number of decimals used when a decay constant is rendered as text
pub const DISPLAY_DECIMALS: usize = 8;

/// Rate constants (h⁻¹) of the two-isotope chain
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DecayConstants {
    /// λm = ln(2) / T½(parent)
    pub lambda_parent: f64,
    /// λg = ln(2) / T½(daughter)
    pub lambda_daughter: f64,
    /// λ_IT = BRANCHING_FRACTION · λm
    pub lambda_isomeric: f64,
}

impl DecayConstants {
    /// The three constants as `(symbol, value)` pairs in report order
    pub fn named(&self) -> [(&'static str, f64); 3] {
        [
            ("λm", self.lambda_parent),
            ("λ_ITm", self.lambda_isomeric),
            ("λg", self.lambda_daughter),
        ]
    }

    /// Render a constant with [`DISPLAY_DECIMALS`] decimals
    pub fn format_value(value: f64) -> String {
        format!("{:.*}", DISPLAY_DECIMALS, value)
    }
}

/// Derive the chain's decay constants from the parent and daughter half-lives (hours)
///
/// # Errors
///
/// - [`DecayError::InvalidParameter`] when either half-life is not a finite, positive number
/// - [`DecayError::DegenerateChain`] when λg and λ_IT agree within [`DEGENERACY_TOLERANCE`]
pub fn derive_constants(
    half_life_parent: f64,
    half_life_daughter: f64,
) -> Result<DecayConstants, DecayError> {
    if !(half_life_parent.is_finite() && half_life_parent > 0.0) {
        return Err(DecayError::invalid("half_life_parent", half_life_parent));
    }
    if !(half_life_daughter.is_finite() && half_life_daughter > 0.0) {
        return Err(DecayError::invalid("half_life_daughter", half_life_daughter));
    }

    let lambda_parent = LN_2 / half_life_parent;
    let lambda_daughter = LN_2 / half_life_daughter;
    let lambda_isomeric = BRANCHING_FRACTION * lambda_parent;

    let scale = lambda_daughter.abs().max(lambda_isomeric.abs());
    if (lambda_daughter - lambda_isomeric).abs() <= DEGENERACY_TOLERANCE * scale {
        return Err(DecayError::DegenerateChain {
            lambda_daughter,
            lambda_isomeric,
        });
    }

    Ok(DecayConstants {
        lambda_parent,
        lambda_daughter,
        lambda_isomeric,
    })
}
