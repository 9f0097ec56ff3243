//! Wind-drift dope table generation (spec.md §6 `generateWindTable`).

use ballistics_core::atmosphere::AtmosphericConditions;
use ballistics_core::error::BallisticsResult;
use ballistics_core::units::{inches_to_correction, AngularUnit};
use ballistics_core::wind::wind_drift_inches;

use crate::solver::calculate_trajectory;
use crate::types::{AmmoConfig, RifleConfig, ShotParameters, WindTableEntry};

/// Default wind speeds used when the caller passes an empty slice.
pub const DEFAULT_WIND_SPEEDS_MPH: &[f64] = &[0.0, 5.0, 10.0, 15.0, 20.0];

/// A no-wind, level, zero-azimuth shot at `distance_yd`, fired once to
/// obtain the time of flight that every wind-speed row is derived from.
fn reference_shot(distance_yd: f64, wind_direction_deg: f64) -> ShotParameters {
    ShotParameters {
        distance_yd,
        angle_deg: 0.0,
        wind_speed_mph: 0.0,
        wind_direction_deg,
        latitude_deg: None,
        azimuth_deg: None,
    }
}

/// Build a windage dope table for a rifle/ammo/atmosphere combination
/// across a range of wind speeds, at a fixed `wind_direction_deg`. Runs the
/// zero search and main integration once (at zero wind) and derives each
/// row's windage analytically, since wind drift doesn't feed back into the
/// point-mass trajectory in this model (spec.md §4.5.5).
pub fn generate_wind_table(
    rifle: &RifleConfig,
    ammo: &AmmoConfig,
    distance_yd: f64,
    atmosphere: &AtmosphericConditions,
    wind_speeds_mph: &[f64],
    wind_direction_deg: f64,
) -> BallisticsResult<Vec<WindTableEntry>> {
    let wind_speeds_mph = if wind_speeds_mph.is_empty() { DEFAULT_WIND_SPEEDS_MPH } else { wind_speeds_mph };

    let shot = reference_shot(distance_yd, wind_direction_deg);
    let points = calculate_trajectory(rifle, ammo, &shot, atmosphere)?;
    let time_of_flight_s = points.last().map_or(0.0, |p| p.time_s);

    Ok(wind_speeds_mph
        .iter()
        .map(|&wind_speed_mph| {
            let windage_in = wind_drift_inches(time_of_flight_s, wind_speed_mph, wind_direction_deg);
            WindTableEntry {
                wind_speed_mph,
                windage_in,
                windage_correction_mil: inches_to_correction(windage_in, distance_yd, AngularUnit::Mil),
                windage_correction_moa: inches_to_correction(windage_in, distance_yd, AngularUnit::Moa),
            }
        })
        .collect())
}
