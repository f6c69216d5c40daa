//! Pure calculation functions for the two-isotope Bateman chain
//!
//! All functions take already-validated inputs and return calculated values.
//! Time is in hours, rate constants in h⁻¹, activities in any consistent unit.

/// Parent (metastable) activity at `t` hours after the reference
///
/// `A_m(t) = A_m0 · exp(−λm · t)`. Negative `t` extrapolates backward, giving
/// activities above `A_m0`.
#[inline]
pub fn parent_activity(initial_parent: f64, lambda_parent: f64, t: f64) -> f64 {
    initial_parent * (-lambda_parent * t).exp()
}

/// Daughter (ground-state) activity at `t` hours after the reference
///
/// ```text
/// A_g(t) = A_g0 · exp(−λg·t)
///        + (λ_IT / (λg − λ_IT)) · (λg / λm) · A_m0 · (exp(−λ_IT·t) − exp(−λg·t))
/// ```
///
/// The first term is the decay of the daughter inventory present at the reference,
/// the second the buildup fed by isomeric transition net of the daughter's own decay.
/// The caller must guarantee `λg != λ_IT` (see [`super::derive_constants`]).
#[inline]
pub fn daughter_activity(
    initial_parent: f64,
    initial_daughter: f64,
    lambda_isomeric: f64,
    lambda_parent: f64,
    lambda_daughter: f64,
    t: f64,
) -> f64 {
    let inventory = initial_daughter * (-lambda_daughter * t).exp();
    let buildup = (lambda_isomeric / (lambda_daughter - lambda_isomeric))
        * (lambda_daughter / lambda_parent)
        * initial_parent
        * ((-lambda_isomeric * t).exp() - (-lambda_daughter * t).exp());
    inventory + buildup
}

/// Share of `part` in `total`, in percent
///
/// `None` when `total` is exactly zero.
#[inline]
pub fn percent_of(part: f64, total: f64) -> Option<f64> {
    if total == 0.0 {
        None
    } else {
        Some(part / total * 100.0)
    }
}

/// Ratio of an activity to a reference activity
///
/// `None` when the reference is exactly zero.
#[inline]
pub fn decay_factor(activity: f64, reference: f64) -> Option<f64> {
    if reference == 0.0 {
        None
    } else {
        Some(activity / reference)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use std::f64::consts::LN_2;

    const LM: f64 = LN_2 / 23.8;
    const LG: f64 = LN_2 / 64.14;
    const LIT: f64 = 0.914 * LN_2 / 23.8;

    #[test]
    fn parent_at_reference_is_initial() {
        assert_eq!(parent_activity(100.0, LM, 0.0), 100.0);
    }

    #[test]
    fn parent_halves_after_one_half_life() {
        assert_relative_eq!(parent_activity(100.0, LM, 23.8), 50.0, epsilon = 1e-10);
        assert_relative_eq!(parent_activity(100.0, LM, 47.6), 25.0, epsilon = 1e-10);
    }

    #[test]
    fn parent_extrapolates_backward() {
        assert_relative_eq!(parent_activity(100.0, LM, -23.8), 200.0, epsilon = 1e-10);
    }

    #[test]
    fn parent_is_finite_after_many_half_lives() {
        let a = parent_activity(100.0, LM, 23.8 * 50.0);
        assert!(a.is_finite() && a > 0.0);
    }

    #[test]
    fn daughter_without_parent_is_plain_decay() {
        assert_relative_eq!(
            daughter_activity(0.0, 80.0, LIT, LM, LG, 64.14),
            40.0,
            epsilon = 1e-10
        );
    }

    #[test]
    fn daughter_builds_up_from_parent() {
        assert_eq!(daughter_activity(100.0, 0.0, LIT, LM, LG, 0.0), 0.0);
        let g = daughter_activity(100.0, 0.0, LIT, LM, LG, 23.8);
        assert_relative_eq!(g, 15.148100782972207, epsilon = 1e-9);
    }

    #[test]
    fn daughter_buildup_is_negative_before_reference() {
        // Backward extrapolation with no daughter inventory is unphysical but not clamped
        assert!(daughter_activity(100.0, 0.0, LIT, LM, LG, -5.0) < 0.0);
    }

    #[test]
    fn zero_denominators_are_undefined() {
        assert_eq!(percent_of(1.0, 0.0), None);
        assert_eq!(decay_factor(1.0, 0.0), None);
        assert_eq!(percent_of(25.0, 100.0), Some(25.0));
        assert_eq!(decay_factor(50.0, 100.0), Some(0.5));
    }
}
