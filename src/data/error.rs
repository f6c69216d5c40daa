//! Error types for timepoint input
//!
//! [`TimestampError`] covers everything that can go wrong between user-entered
//! text and a parsed instant. The decay engine never sees these: it only accepts
//! already-parsed timestamps.

use thiserror::Error;

/// Errors arising while reading or parsing timestamps
#[derive(Error, Debug, Clone, PartialEq)]
pub enum TimestampError {
    /// The text matched none of the accepted layouts
    #[error("Invalid timestamp '{input}': expected YYYY-MM-DD or YYYY-MM-DD HH:MM[:SS]")]
    Invalid {
        /// The literal that failed to parse
        input: String,
    },

    /// A required timestamp was blank
    #[error("Empty timestamp")]
    Empty,

    /// A timepoint file could not be read
    #[error("Could not read timepoints from {path}: {message}")]
    Read { path: String, message: String },
}
