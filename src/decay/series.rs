//! Series assembly
//!
//! Validates the parameters once, then evaluates every observation in the order
//! it was given. Either the whole series is returned or nothing is.

use tracing::{debug, warn};

use super::calc::{daughter_activity, decay_factor, parent_activity, percent_of};
use super::constants::derive_constants;
use super::error::DecayError;
use super::types::{ActivityResult, DecayParameters, DecaySeries, Observation};
use crate::data::elapsed_hours;

/// Compute activities, percentages and decay factors for each observation
///
/// The output is paired 1:1 with `observations` and keeps their order, which need
/// not be chronological. Elapsed time is always measured from `parameters.reference`,
/// whatever reference the observations were built against.
///
/// # Errors
///
/// - [`DecayError::InvalidParameter`] for negative/non-finite activities or non-positive half-lives
/// - [`DecayError::DegenerateChain`] when the daughter and isomeric-transition constants coincide
/// - [`DecayError::NonFiniteActivity`] when a timepoint lies so far from the reference that
///   an activity overflows
pub fn compute_series(
    parameters: &DecayParameters,
    observations: &[Observation],
) -> Result<DecaySeries, DecayError> {
    parameters.validate()?;
    let constants = derive_constants(parameters.half_life_parent, parameters.half_life_daughter)?;

    debug!(
        n_observations = observations.len(),
        lambda_parent = constants.lambda_parent,
        lambda_daughter = constants.lambda_daughter,
        lambda_isomeric = constants.lambda_isomeric,
        "computing decay series"
    );

    let initial_total = parameters.initial_total();
    let mut warnings = Vec::new();

    let results = observations
        .iter()
        .map(|obs| {
            let t = elapsed_hours(parameters.reference, obs.timestamp);
            let parent = parent_activity(parameters.initial_parent, constants.lambda_parent, t);
            let daughter = daughter_activity(
                parameters.initial_parent,
                parameters.initial_daughter,
                constants.lambda_isomeric,
                constants.lambda_parent,
                constants.lambda_daughter,
                t,
            );
            let total = parent + daughter;

            let result = ActivityResult {
                raw_label: obs.raw_label.clone(),
                timestamp: obs.timestamp,
                elapsed_hours: t,
                parent_activity: parent,
                daughter_activity: daughter,
                parent_percent: percent_of(parent, total),
                daughter_percent: percent_of(daughter, total),
                decay_factor_parent: decay_factor(parent, parameters.initial_parent),
                decay_factor_daughter: decay_factor(daughter, initial_total),
            };
            if !result.is_finite() {
                return Err(DecayError::NonFiniteActivity {
                    label: result.raw_label,
                    elapsed_hours: t,
                });
            }

            if daughter < 0.0 {
                let msg = format!(
                    "Negative daughter activity ({daughter:.6}) at '{}' ({t:.3} h): \
                     timepoint precedes the reference by more than the daughter inventory supports",
                    obs.raw_label
                );
                warn!("{msg}");
                warnings.push(msg);
            }
            if total == 0.0 {
                warnings.push(format!(
                    "Combined activity is zero at '{}'; percentages are undefined",
                    obs.raw_label
                ));
            }

            Ok(result)
        })
        .collect::<Result<Vec<_>, DecayError>>()?;

    Ok(DecaySeries {
        parameters: parameters.clone(),
        constants,
        results,
        warnings,
    })
}
