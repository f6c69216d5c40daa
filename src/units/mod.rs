//! Activity units and conversion between the per-volume variants
//!
//! The decay engine is unit-agnostic; units only label inputs and outputs.
//! [`convert_activity`] covers the concentration units used when reading
//! activity per millilitre off an imaging phantom or sample.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Errors from unit handling
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ConversionError {
    /// No factor is defined between the two units
    #[error("Unsupported conversion: {from} → {to}")]
    Unsupported { from: ActivityUnit, to: ActivityUnit },

    /// The text does not name a known unit
    #[error("Unknown activity unit '{0}'")]
    UnknownUnit(String),
}

/// Activity unit selectable by the user
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum ActivityUnit {
    #[default]
    KBq,
    MBq,
    MicroCi,
    KBqPerMl,
    MBqPerMl,
    MicroCiPerMl,
}

impl ActivityUnit {
    /// All units in menu order
    pub const ALL: [ActivityUnit; 6] = [
        ActivityUnit::KBq,
        ActivityUnit::MBq,
        ActivityUnit::MicroCi,
        ActivityUnit::KBqPerMl,
        ActivityUnit::MBqPerMl,
        ActivityUnit::MicroCiPerMl,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            ActivityUnit::KBq => "KBq",
            ActivityUnit::MBq => "MBq",
            ActivityUnit::MicroCi => "µCi",
            ActivityUnit::KBqPerMl => "KBq/mL",
            ActivityUnit::MBqPerMl => "MBq/mL",
            ActivityUnit::MicroCiPerMl => "µCi/mL",
        }
    }

    /// Whether the unit is a concentration (per millilitre)
    pub fn is_per_volume(&self) -> bool {
        matches!(
            self,
            ActivityUnit::KBqPerMl | ActivityUnit::MBqPerMl | ActivityUnit::MicroCiPerMl
        )
    }
}

impl fmt::Display for ActivityUnit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

impl FromStr for ActivityUnit {
    type Err = ConversionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = s.trim().replace("uCi", "µCi").replace("μCi", "µCi");
        ActivityUnit::ALL
            .iter()
            .copied()
            .find(|u| u.label().eq_ignore_ascii_case(&normalized))
            .ok_or_else(|| ConversionError::UnknownUnit(s.to_string()))
    }
}

impl TryFrom<String> for ActivityUnit {
    type Error = ConversionError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<ActivityUnit> for String {
    fn from(unit: ActivityUnit) -> Self {
        unit.label().to_string()
    }
}

/// Multiplicative factor taking a value in `from` to `to`, if one is defined
fn factor(from: ActivityUnit, to: ActivityUnit) -> Option<f64> {
    use ActivityUnit::*;
    match (from, to) {
        (KBqPerMl, MBqPerMl) => Some(0.001),
        (KBqPerMl, MicroCiPerMl) => Some(0.02703),
        (MBqPerMl, KBqPerMl) => Some(1000.0),
        (MBqPerMl, MicroCiPerMl) => Some(27.03),
        (MicroCiPerMl, KBqPerMl) => Some(37.04),
        (MicroCiPerMl, MBqPerMl) => Some(0.03704),
        _ => None,
    }
}

/// Convert an activity value between units
///
/// Identity when `from == to`. Otherwise only the per-volume pairs in the
/// factor table are supported.
///
/// # Errors
///
/// [`ConversionError::Unsupported`] for any pair without a factor.
pub fn convert_activity(
    value: f64,
    from: ActivityUnit,
    to: ActivityUnit,
) -> Result<f64, ConversionError> {
    if from == to {
        return Ok(value);
    }
    factor(from, to)
        .map(|f| value * f)
        .ok_or(ConversionError::Unsupported { from, to })
}
