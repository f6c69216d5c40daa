//! Timestamp input: parsing, precision policy and time-base normalization

pub mod error;
pub mod parser;
pub mod timestamp;

pub use error::TimestampError;
pub use parser::{parse_observations, read_timepoints, split_timepoints};
pub use timestamp::{elapsed_hours, parse_timestamp, TimestampPrecision, DISPLAY_FORMAT};
