//! Litz empirical spin-drift formula (spec.md §4.4).

use ballistics_core::BallisticsError;

use crate::stability::{calculate_stability_factor, estimate_bullet_length, get_bullet_diameter, parse_twist_rate};

/// `calculateSpinDrift(SG, TOF, rightHand)`.
///
/// Positive for right-hand twist (drift to the right); negated for
/// left-hand twist.
pub fn calculate_spin_drift(stability_factor: f64, time_of_flight_s: f64, right_hand: bool) -> f64 {
    let drift_in = 1.25 * (stability_factor + 1.2) * time_of_flight_s.powf(1.83);
    if right_hand {
        drift_in
    } else {
        -drift_in
    }
}

/// Caller-supplied parameters for [`calculate_spin_drift_complete`].
#[derive(Debug, Clone)]
pub struct SpinDriftParams {
    pub weight_grains: f64,
    pub caliber: String,
    /// Bullet length, inches. Estimated from weight+diameter when absent.
    pub length_in: Option<f64>,
    pub twist_rate: String,
    pub time_of_flight_s: f64,
    pub right_hand: bool,
}

/// Full spin-drift result, including the inputs consumed along the way.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "with-serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SpinDriftResult {
    pub spin_drift_in: f64,
    pub stability_factor: f64,
    pub bullet_length_in: f64,
    pub twist_inches: f64,
    pub is_stable: bool,
    pub is_ideally_stable: bool,
}

/// `calculateSpinDriftComplete`: resolve caliber + twist, estimate length if
/// not supplied, compute SG, then the spin drift.
pub fn calculate_spin_drift_complete(params: &SpinDriftParams) -> Result<SpinDriftResult, BallisticsError> {
    let diameter_in = get_bullet_diameter(&params.caliber)?;
    let twist_inches = parse_twist_rate(&params.twist_rate)?;
    let length_in = params
        .length_in
        .unwrap_or_else(|| estimate_bullet_length(params.weight_grains, diameter_in));

    let stability_factor =
        calculate_stability_factor(params.weight_grains, diameter_in, length_in, twist_inches);
    let spin_drift_in = calculate_spin_drift(stability_factor, params.time_of_flight_s, params.right_hand);

    Ok(SpinDriftResult {
        spin_drift_in,
        stability_factor,
        bullet_length_in: length_in,
        twist_inches,
        is_stable: stability_factor > 1.0,
        is_ideally_stable: stability_factor >= 1.5,
    })
}
