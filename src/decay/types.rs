//! Decay types: inputs, per-timepoint results and the assembled series
//!
//! This module defines the public data model of the decay engine:
//! - [`DecayParameters`]: initial activities, half-lives and reference timestamp
//! - [`Observation`]: one requested timepoint
//! - [`ActivityResult`]: activities and derived quantities at one timepoint
//! - [`DecaySeries`]: the immutable outcome of a compute call

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

use super::error::DecayError;
use super::DecayConstants;
use crate::data::elapsed_hours;

// ============================================================================
// Inputs
// ============================================================================

/// Inputs of a decay computation
///
/// Activities are in a caller-chosen unit, half-lives in hours.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DecayParameters {
    /// Parent (metastable) activity measured at `reference`
    pub initial_parent: f64,
    /// Daughter (ground-state) activity measured at `reference`
    pub initial_daughter: f64,
    /// Parent half-life (h)
    pub half_life_parent: f64,
    /// Daughter half-life (h)
    pub half_life_daughter: f64,
    /// Instant at which the initial activities were measured
    pub reference: NaiveDateTime,
}

impl DecayParameters {
    pub fn new(
        initial_parent: f64,
        initial_daughter: f64,
        half_life_parent: f64,
        half_life_daughter: f64,
        reference: NaiveDateTime,
    ) -> Self {
        Self {
            initial_parent,
            initial_daughter,
            half_life_parent,
            half_life_daughter,
            reference,
        }
    }

    /// Set the initial activities (parent, daughter)
    pub fn with_initial_activities(mut self, parent: f64, daughter: f64) -> Self {
        self.initial_parent = parent;
        self.initial_daughter = daughter;
        self
    }

    /// Set the half-lives in hours (parent, daughter)
    pub fn with_half_lives(mut self, parent: f64, daughter: f64) -> Self {
        self.half_life_parent = parent;
        self.half_life_daughter = daughter;
        self
    }

    /// Set the reference timestamp
    pub fn with_reference(mut self, reference: NaiveDateTime) -> Self {
        self.reference = reference;
        self
    }

    /// Check that activities are finite and non-negative
    ///
    /// Half-lives are checked by [`super::derive_constants`].
    pub fn validate(&self) -> Result<(), DecayError> {
        for (param, value) in [
            ("initial_parent", self.initial_parent),
            ("initial_daughter", self.initial_daughter),
        ] {
            if !(value.is_finite() && value >= 0.0) {
                return Err(DecayError::invalid(param, value));
            }
        }
        Ok(())
    }

    /// Combined activity at the reference
    pub fn initial_total(&self) -> f64 {
        self.initial_parent + self.initial_daughter
    }

    /// Build an [`Observation`] relative to this parameter set's reference
    pub fn observe(&self, raw_label: impl Into<String>, timestamp: NaiveDateTime) -> Observation {
        Observation::new(raw_label, timestamp, self.reference)
    }
}

/// A requested timepoint
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Observation {
    /// Timepoint text as entered, kept for display and export
    pub raw_label: String,
    /// Parsed instant
    pub timestamp: NaiveDateTime,
    /// Hours since the reference it was built against; negative before it.
    /// [`super::compute_series`] re-derives this from the parameters' reference.
    pub elapsed_hours: f64,
}

impl Observation {
    pub fn new(
        raw_label: impl Into<String>,
        timestamp: NaiveDateTime,
        reference: NaiveDateTime,
    ) -> Self {
        Self {
            raw_label: raw_label.into(),
            timestamp,
            elapsed_hours: elapsed_hours(reference, timestamp),
        }
    }
}

// ============================================================================
// Results
// ============================================================================

/// Activities and derived quantities at one timepoint
///
/// Quantities whose denominator is exactly zero are `None` rather than NaN or ∞.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ActivityResult {
    pub raw_label: String,
    pub timestamp: NaiveDateTime,
    pub elapsed_hours: f64,
    pub parent_activity: f64,
    pub daughter_activity: f64,
    /// Percent of combined activity held by the parent
    pub parent_percent: Option<f64>,
    /// Percent of combined activity held by the daughter
    pub daughter_percent: Option<f64>,
    /// parent_activity / initial_parent
    pub decay_factor_parent: Option<f64>,
    /// daughter_activity / (initial_parent + initial_daughter)
    pub decay_factor_daughter: Option<f64>,
}

impl ActivityResult {
    /// Parent plus daughter activity
    pub fn total_activity(&self) -> f64 {
        self.parent_activity + self.daughter_activity
    }

    /// Whether every activity and every defined derived quantity is finite
    pub fn is_finite(&self) -> bool {
        let defined = [
            self.parent_percent,
            self.daughter_percent,
            self.decay_factor_parent,
            self.decay_factor_daughter,
        ];
        self.elapsed_hours.is_finite()
            && self.parent_activity.is_finite()
            && self.daughter_activity.is_finite()
            && self.total_activity().is_finite()
            && defined.iter().flatten().all(|v| v.is_finite())
    }
}

/// Outcome of a decay computation
///
/// Owns copies of its inputs so it can be handed to presentation and export
/// without reference to any other state. A new computation yields a new series.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DecaySeries {
    pub parameters: DecayParameters,
    pub constants: DecayConstants,
    /// One result per observation, in input order
    pub results: Vec<ActivityResult>,
    /// Non-fatal findings, such as negative activities from backward extrapolation
    pub warnings: Vec<String>,
}

impl DecaySeries {
    pub fn len(&self) -> usize {
        self.results.len()
    }

    pub fn is_empty(&self) -> bool {
        self.results.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, ActivityResult> {
        self.results.iter()
    }

    /// `(elapsed_hours, parent, daughter)` points for an activity chart
    pub fn activity_series(&self) -> Vec<(f64, f64, f64)> {
        self.results
            .iter()
            .map(|r| (r.elapsed_hours, r.parent_activity, r.daughter_activity))
            .collect()
    }

    /// `(elapsed_hours, parent %, daughter %)` points for a percentage chart
    pub fn percent_series(&self) -> Vec<(f64, Option<f64>, Option<f64>)> {
        self.results
            .iter()
            .map(|r| (r.elapsed_hours, r.parent_percent, r.daughter_percent))
            .collect()
    }
}

impl<'a> IntoIterator for &'a DecaySeries {
    type Item = &'a ActivityResult;
    type IntoIter = std::slice::Iter<'a, ActivityResult>;

    fn into_iter(self) -> Self::IntoIter {
        self.results.iter()
    }
}
