//! Full-shot composition: zero-angle search, main trajectory, wind drift,
//! spin drift, Coriolis, and unit conversion (spec.md §4.5.6).

use ballistics_core::atmosphere::{calculate_atmospheric_conditions, AtmosphericConditions, STANDARD_DENSITY_LB_FT3};
use ballistics_core::coriolis::calculate_coriolis_complete;
use ballistics_core::error::{BallisticsError, BallisticsResult};
use ballistics_core::units::{inches_to_correction, AngularUnit};
use ballistics_core::wind::wind_drift_inches;
use ballistics_effects::{calculate_spin_drift_complete, SpinDriftParams};
use ballistics_models::get_drag_coefficient;

use crate::rk4::State;
use crate::trajectory::{elevation_correction, integrate_main_trajectory, windage_correction, RawPoint};
use crate::types::{AmmoConfig, BallisticSolution, RifleConfig, ShotParameters, TrajectoryPoint};
use crate::zero::{find_zero_angle, ZeroAngleResult};

/// Standard gravitational acceleration, ft/s².
pub const GRAVITY_FPS2: f64 = 32.174;

/// Residual beyond which a zero-angle search is reported as non-convergent,
/// inches (spec.md §7).
const ZERO_GRACE_IN: f64 = 1.0;

fn validate(ammo: &AmmoConfig, shot: &ShotParameters) -> BallisticsResult<()> {
    if !(ammo.ballistic_coefficient > 0.0) || !ammo.ballistic_coefficient.is_finite() {
        return Err(BallisticsError::InvalidInput(format!(
            "ballistic coefficient must be positive, got {}",
            ammo.ballistic_coefficient
        )));
    }
    if !(ammo.muzzle_velocity_fps > 0.0) || !ammo.muzzle_velocity_fps.is_finite() {
        return Err(BallisticsError::InvalidInput(format!(
            "muzzle velocity must be positive, got {}",
            ammo.muzzle_velocity_fps
        )));
    }
    if !(shot.distance_yd > 0.0) || !shot.distance_yd.is_finite() {
        return Err(BallisticsError::InvalidInput(format!(
            "target distance must be positive, got {}",
            shot.distance_yd
        )));
    }
    Ok(())
}

/// Shared groundwork for [`calculate_trajectory`] and
/// [`calculate_ballistic_solution`]: resolve the atmosphere, find the zero
/// angle, and integrate the main trajectory.
fn solve_core(
    rifle: &RifleConfig,
    ammo: &AmmoConfig,
    shot: &ShotParameters,
    atmosphere: &AtmosphericConditions,
) -> BallisticsResult<(ZeroAngleResult, Vec<RawPoint>, State)> {
    validate(ammo, shot)?;

    let resolved = calculate_atmospheric_conditions(*atmosphere);
    let bc_eff = ammo.ballistic_coefficient * (STANDARD_DENSITY_LB_FT3 / resolved.air_density_lb_ft3);
    let drag_fn = |v: f64| get_drag_coefficient(v, ammo.drag_model, resolved.speed_of_sound_fps);

    let sight_height_ft = rifle.sight_height_in / 12.0;
    let zero_distance_ft = rifle.zero_distance_yd * 3.0;

    let zero = find_zero_angle(
        ammo.muzzle_velocity_fps,
        sight_height_ft,
        zero_distance_ft,
        bc_eff,
        GRAVITY_FPS2,
        &drag_fn,
    );
    if zero.residual_in.abs() > ZERO_GRACE_IN {
        tracing::warn!(residual_in = zero.residual_in, iterations = zero.iterations, "zero-angle search did not converge");
        return Err(BallisticsError::NotConverged(format!(
            "zero-angle residual {:.3} in after {} iterations exceeds the {ZERO_GRACE_IN} in grace band",
            zero.residual_in, zero.iterations
        )));
    }

    let gravity_eff_fps2 = GRAVITY_FPS2 * shot.angle_deg.to_radians().cos();

    let (raw_points, final_state) = integrate_main_trajectory(
        ammo.muzzle_velocity_fps,
        zero.angle_rad,
        sight_height_ft,
        shot.distance_yd,
        gravity_eff_fps2,
        bc_eff,
        &drag_fn,
    )?;

    Ok((zero, raw_points, final_state))
}

fn build_trajectory_points(ammo: &AmmoConfig, shot: &ShotParameters, raw_points: &[RawPoint], total_windage_in: f64) -> Vec<TrajectoryPoint> {
    raw_points
        .iter()
        .map(|p| {
            let windage_in = if shot.distance_yd > 0.0 { total_windage_in * (p.distance_yd / shot.distance_yd) } else { 0.0 };
            let (elevation_mil, windage_mil) = if p.distance_yd > 0.0 {
                (
                    elevation_correction(p.drop_in, p.distance_yd, AngularUnit::Mil),
                    windage_correction(windage_in, p.distance_yd, AngularUnit::Mil),
                )
            } else {
                (0.0, 0.0)
            };
            TrajectoryPoint {
                distance_yd: p.distance_yd,
                time_s: p.time_s,
                velocity_fps: p.velocity_fps,
                energy_ftlb: (ammo.bullet_weight_gr / 7000.0) * p.velocity_fps.powi(2) / (2.0 * GRAVITY_FPS2),
                drop_in: p.drop_in,
                windage_in,
                elevation_mil,
                windage_mil,
            }
        })
        .collect()
}

/// Integrate and sample a full trajectory, with wind drift composed onto
/// each point (spec.md §6 `calculateTrajectory`).
pub fn calculate_trajectory(
    rifle: &RifleConfig,
    ammo: &AmmoConfig,
    shot: &ShotParameters,
    atmosphere: &AtmosphericConditions,
) -> BallisticsResult<Vec<TrajectoryPoint>> {
    let (_zero, raw_points, final_state) = solve_core(rifle, ammo, shot, atmosphere)?;
    let total_windage_in = wind_drift_inches(final_state.t, shot.wind_speed_mph, shot.wind_direction_deg);
    Ok(build_trajectory_points(ammo, shot, &raw_points, total_windage_in))
}

/// Compute the full ballistic solution for a rifle/ammo/shot/atmosphere
/// combination (spec.md §6 `calculateBallisticSolution`).
///
/// `include_trajectory` controls whether the sampled trajectory points are
/// attached to the result (spec.md §3: an optional, potentially large field).
pub fn calculate_ballistic_solution(
    rifle: &RifleConfig,
    ammo: &AmmoConfig,
    shot: &ShotParameters,
    atmosphere: &AtmosphericConditions,
    include_trajectory: bool,
) -> BallisticsResult<BallisticSolution> {
    let (zero, raw_points, final_state) = solve_core(rifle, ammo, shot, atmosphere)?;

    let time_of_flight_s = final_state.t;
    let velocity_fps = final_state.vel.norm();
    let terminal_drop_in = final_state.pos.y * 12.0;

    let total_windage_in = wind_drift_inches(time_of_flight_s, shot.wind_speed_mph, shot.wind_direction_deg);

    let spin_drift = match &rifle.caliber {
        Some(caliber) => {
            let params = SpinDriftParams {
                weight_grains: ammo.bullet_weight_gr,
                caliber: caliber.clone(),
                length_in: None,
                twist_rate: rifle.twist_rate.clone(),
                time_of_flight_s,
                right_hand: rifle.is_right_hand_twist,
            };
            match calculate_spin_drift_complete(&params) {
                Ok(result) => Some(result),
                Err(err) => {
                    tracing::debug!(%err, caliber, "spin drift unavailable, caliber did not resolve");
                    None
                }
            }
        }
        None => None,
    };

    let mean_velocity_fps = (ammo.muzzle_velocity_fps + velocity_fps) / 2.0;
    let coriolis = shot.latitude_deg.map(|lat| {
        calculate_coriolis_complete(lat, shot.azimuth_deg, time_of_flight_s, mean_velocity_fps, shot.distance_yd)
    });

    let energy_ftlb = (ammo.bullet_weight_gr / 7000.0) * velocity_fps.powi(2) / (2.0 * GRAVITY_FPS2);

    let (max_ordinate_in, max_ordinate_distance_yd) = raw_points
        .iter()
        .fold((f64::MIN, 0.0), |(best, best_d), p| if p.drop_in > best { (p.drop_in, p.distance_yd) } else { (best, best_d) });

    let elevation_correction_mil = elevation_correction(terminal_drop_in, shot.distance_yd, AngularUnit::Mil);
    let elevation_correction_moa = elevation_correction(terminal_drop_in, shot.distance_yd, AngularUnit::Moa);
    let windage_correction_mil = windage_correction(total_windage_in, shot.distance_yd, AngularUnit::Mil);
    let windage_correction_moa = windage_correction(total_windage_in, shot.distance_yd, AngularUnit::Moa);

    let trajectory = include_trajectory.then(|| build_trajectory_points(ammo, shot, &raw_points, total_windage_in));

    Ok(BallisticSolution {
        rifle: rifle.clone(),
        ammo: *ammo,
        shot: *shot,
        atmosphere: *atmosphere,

        zero_angle_rad: zero.angle_rad,

        time_of_flight_s,
        velocity_fps,
        energy_ftlb,

        drop_in: terminal_drop_in,
        elevation_correction_mil,
        elevation_correction_moa,

        windage_in: total_windage_in,
        windage_correction_mil,
        windage_correction_moa,

        max_ordinate_in,
        max_ordinate_distance_yd,

        stability_factor: spin_drift.as_ref().map(|r| r.stability_factor),
        spin_drift_in: spin_drift.as_ref().map(|r| r.spin_drift_in),
        spin_drift_mil: spin_drift
            .as_ref()
            .map(|r| inches_to_correction(r.spin_drift_in, shot.distance_yd, AngularUnit::Mil)),

        coriolis_horizontal_in: coriolis.as_ref().map(|c| c.horizontal_in),
        coriolis_horizontal_mil: coriolis.as_ref().map(|c| c.horizontal_mil),
        coriolis_vertical_in: coriolis.as_ref().and_then(|c| c.vertical_in),
        coriolis_vertical_mil: coriolis.as_ref().and_then(|c| c.vertical_mil),

        trajectory,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use ballistics_core::atmosphere::AtmosphericConditions;
    use ballistics_models::ModelKind;

    fn reference_rifle() -> RifleConfig {
        RifleConfig {
            sight_height_in: 1.5,
            zero_distance_yd: 100.0,
            twist_rate: "1:10".to_string(),
            barrel_length_in: 24.0,
            is_right_hand_twist: true,
            caliber: Some(".308 Winchester".to_string()),
        }
    }

    fn reference_ammo() -> AmmoConfig {
        AmmoConfig {
            bullet_weight_gr: 168.0,
            ballistic_coefficient: 0.462,
            drag_model: ModelKind::G1,
            muzzle_velocity_fps: 2650.0,
        }
    }

    fn reference_shot(distance_yd: f64) -> ShotParameters {
        ShotParameters {
            distance_yd,
            angle_deg: 0.0,
            wind_speed_mph: 0.0,
            wind_direction_deg: 90.0,
            latitude_deg: None,
            azimuth_deg: None,
        }
    }

    #[test]
    fn zero_distance_trajectory_passes_near_line_of_sight() {
        let solution = calculate_ballistic_solution(
            &reference_rifle(),
            &reference_ammo(),
            &reference_shot(100.0),
            &AtmosphericConditions::default(),
            false,
        )
        .unwrap();
        assert!(solution.drop_in.abs() < 1.0, "drop at zero distance: {}", solution.drop_in);
    }

    #[test]
    fn bullet_drops_at_long_range() {
        let solution = calculate_ballistic_solution(
            &reference_rifle(),
            &reference_ammo(),
            &reference_shot(600.0),
            &AtmosphericConditions::default(),
            false,
        )
        .unwrap();
        assert!(solution.drop_in < -20.0, "drop at 600 yd: {}", solution.drop_in);
        assert!(solution.elevation_correction_mil > 0.0);
    }

    #[test]
    fn crosswind_produces_positive_windage_from_the_right() {
        let mut shot = reference_shot(500.0);
        shot.wind_speed_mph = 10.0;
        shot.wind_direction_deg = 90.0;
        let solution = calculate_ballistic_solution(
            &reference_rifle(),
            &reference_ammo(),
            &shot,
            &AtmosphericConditions::default(),
            false,
        )
        .unwrap();
        assert!(solution.windage_in > 0.0, "windage: {}", solution.windage_in);
    }

    #[test]
    fn spin_drift_present_when_caliber_resolves() {
        let solution = calculate_ballistic_solution(
            &reference_rifle(),
            &reference_ammo(),
            &reference_shot(600.0),
            &AtmosphericConditions::default(),
            false,
        )
        .unwrap();
        assert!(solution.spin_drift_in.unwrap() > 0.0);
        assert!(solution.stability_factor.unwrap() > 1.0);
    }

    #[test]
    fn spin_drift_absent_without_caliber() {
        let mut rifle = reference_rifle();
        rifle.caliber = None;
        let solution = calculate_ballistic_solution(
            &rifle,
            &reference_ammo(),
            &reference_shot(600.0),
            &AtmosphericConditions::default(),
            false,
        )
        .unwrap();
        assert!(solution.spin_drift_in.is_none());
        assert!(solution.stability_factor.is_none());
    }

    #[test]
    fn coriolis_absent_without_latitude() {
        let solution = calculate_ballistic_solution(
            &reference_rifle(),
            &reference_ammo(),
            &reference_shot(600.0),
            &AtmosphericConditions::default(),
            false,
        )
        .unwrap();
        assert!(solution.coriolis_horizontal_in.is_none());
    }

    #[test]
    fn coriolis_vertical_present_only_with_azimuth() {
        let mut shot = reference_shot(600.0);
        shot.latitude_deg = Some(45.0);
        let solution = calculate_ballistic_solution(
            &reference_rifle(),
            &reference_ammo(),
            &shot,
            &AtmosphericConditions::default(),
            false,
        )
        .unwrap();
        assert!(solution.coriolis_horizontal_in.is_some());
        assert!(solution.coriolis_vertical_in.is_none());

        shot.azimuth_deg = Some(90.0);
        let solution = calculate_ballistic_solution(&reference_rifle(), &reference_ammo(), &shot, &AtmosphericConditions::default(), false)
            .unwrap();
        assert!(solution.coriolis_vertical_in.is_some());
    }

    #[test]
    fn invalid_ballistic_coefficient_is_rejected() {
        let mut ammo = reference_ammo();
        ammo.ballistic_coefficient = 0.0;
        let result = calculate_ballistic_solution(
            &reference_rifle(),
            &ammo,
            &reference_shot(500.0),
            &AtmosphericConditions::default(),
            false,
        );
        assert!(matches!(result, Err(BallisticsError::InvalidInput(_))));
    }

    #[test]
    fn trajectory_is_attached_only_when_requested() {
        let without = calculate_ballistic_solution(
            &reference_rifle(),
            &reference_ammo(),
            &reference_shot(500.0),
            &AtmosphericConditions::default(),
            false,
        )
        .unwrap();
        assert!(without.trajectory.is_none());

        let with = calculate_ballistic_solution(
            &reference_rifle(),
            &reference_ammo(),
            &reference_shot(500.0),
            &AtmosphericConditions::default(),
            true,
        )
        .unwrap();
        let points = with.trajectory.unwrap();
        assert_eq!(points.first().unwrap().distance_yd, 0.0);
        assert_eq!(points.last().unwrap().distance_yd, 500.0);
    }

    #[test]
    fn calculate_trajectory_matches_the_solution_s_attached_points() {
        let points = calculate_trajectory(&reference_rifle(), &reference_ammo(), &reference_shot(500.0), &AtmosphericConditions::default())
            .unwrap();
        let solution = calculate_ballistic_solution(
            &reference_rifle(),
            &reference_ammo(),
            &reference_shot(500.0),
            &AtmosphericConditions::default(),
            true,
        )
        .unwrap();
        assert_eq!(points.len(), solution.trajectory.unwrap().len());
        assert_eq!(points.last().unwrap().drop_in, solution.drop_in);
    }

    #[test]
    fn max_ordinate_is_positive_for_a_zeroed_arc() {
        let solution = calculate_ballistic_solution(
            &reference_rifle(),
            &reference_ammo(),
            &reference_shot(300.0),
            &AtmosphericConditions::default(),
            false,
        )
        .unwrap();
        assert!(solution.max_ordinate_in > 0.0, "max ordinate {}", solution.max_ordinate_in);
        assert!(solution.max_ordinate_distance_yd > 0.0 && solution.max_ordinate_distance_yd < 300.0);
    }
}
