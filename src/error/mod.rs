use thiserror::Error;

use crate::config::ConfigError;
use crate::data::TimestampError;
use crate::decay::DecayError;
use crate::report::ExportError;
use crate::units::ConversionError;

#[derive(Error, Debug)]
pub enum HgQuantError {
    #[error(transparent)]
    Decay(#[from] DecayError),
    #[error(transparent)]
    Timestamp(#[from] TimestampError),
    #[error(transparent)]
    Conversion(#[from] ConversionError),
    #[error(transparent)]
    Export(#[from] ExportError),
    #[error(transparent)]
    Config(#[from] ConfigError),
}
