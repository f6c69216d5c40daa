//! Bateman decay-chain calculator for a metastable parent isotope decaying by
//! isomeric transition into its ground-state daughter (e.g. Hg-197m → Hg-197g).
//!
//! The crate is split into a pure computational core and the collaborators
//! around it:
//!
//! - [`decay`]: decay constants, activity evaluation and series assembly
//! - [`data`]: timestamp parsing and elapsed-time computation
//! - [`units`]: activity units and per-volume conversion
//! - [`report`]: text tables, spreadsheet model and exporters
//! - [`config`]: persisted user settings

pub mod config;
pub mod data;
pub mod decay;
pub mod error;
pub mod report;
pub mod units;

pub use crate::config::Settings;
pub use crate::data::{parse_observations, parse_timestamp, TimestampPrecision};
pub use crate::decay::{compute_series, ActivityResult, DecayParameters, DecaySeries, Observation};
pub use crate::units::{convert_activity, ActivityUnit};
pub use error::HgQuantError;

pub mod prelude {
    pub mod data {
        pub use crate::data::{
            elapsed_hours, parse_observations, parse_timestamp, read_timepoints,
            split_timepoints, TimestampError, TimestampPrecision,
        };
    }
    pub mod decay {
        pub use crate::decay::{
            compute_series, daughter_activity, derive_constants, parent_activity,
            ActivityResult, DecayConstants, DecayError, DecayParameters, DecaySeries,
            Observation, BRANCHING_FRACTION,
        };
    }
    pub mod report {
        pub use crate::report::{
            build_workbook, export_csv, export_json, format_report, format_table,
            IsotopeLabels, ReportContext, Workbook,
        };
    }

    pub use self::data::*;
    pub use self::decay::*;
    pub use crate::config::Settings;
    pub use crate::units::{convert_activity, ActivityUnit, ConversionError};
    pub use crate::HgQuantError;
}
