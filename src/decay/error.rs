//! Decay-model error types

use thiserror::Error;

/// Errors that can occur while deriving constants or assembling a decay series
#[derive(Error, Debug, Clone, PartialEq)]
pub enum DecayError {
    /// Non-positive half-life, negative or non-finite activity
    #[error("Invalid parameter: {param} = {value}")]
    InvalidParameter { param: String, value: String },

    /// The daughter decay constant coincides with the isomeric-transition constant,
    /// which makes the closed-form daughter solution singular
    #[error(
        "Degenerate decay chain: λg = {lambda_daughter:.8} h⁻¹ equals λ_IT = {lambda_isomeric:.8} h⁻¹"
    )]
    DegenerateChain {
        lambda_daughter: f64,
        lambda_isomeric: f64,
    },

    /// An activity overflowed, typically for a timepoint far before the reference
    #[error("Activity at '{label}' ({elapsed_hours:.3} h) is not finite")]
    NonFiniteActivity { label: String, elapsed_hours: f64 },
}

impl DecayError {
    pub(crate) fn invalid(param: &str, value: f64) -> Self {
        DecayError::InvalidParameter {
            param: param.to_string(),
            value: value.to_string(),
        }
    }
}
