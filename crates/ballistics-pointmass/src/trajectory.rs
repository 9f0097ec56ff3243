//! Main-trajectory integration and full-shot composition (spec.md §4.5.4,
//! §4.5.6).

use ballistics_core::error::{BallisticsError, BallisticsResult};
use ballistics_core::units::{inches_to_correction, AngularUnit};

use crate::rk4::{rk4_step, DragFn, State};

/// Sampling interval for recorded trajectory points, yards.
const SAMPLE_INTERVAL_YD: f64 = 25.0;
/// Feet per yard.
const FEET_PER_YARD: f64 = 3.0;
/// Integration step, seconds.
const TRAJECTORY_DT: f64 = 0.001;
/// Safety cap on RK4 steps for the main trajectory.
const MAX_STEPS: usize = 500_000;

/// One physical sample before wind drift / auxiliary corrections are
/// composed onto it.
#[derive(Debug, Clone, Copy)]
pub struct RawPoint {
    pub distance_yd: f64,
    pub time_s: f64,
    pub velocity_fps: f64,
    pub drop_in: f64,
}

/// Integrate the shot from the muzzle to `distance_yd`, sampling every
/// [`SAMPLE_INTERVAL_YD`] and appending one final point at exactly the
/// target distance (its drop is whatever the overshooting step produced;
/// spec.md §4.5.4 does not interpolate it back onto the target).
pub fn integrate_main_trajectory(
    muzzle_velocity_fps: f64,
    zero_angle_rad: f64,
    sight_height_ft: f64,
    distance_yd: f64,
    gravity_eff_fps2: f64,
    bc_eff: f64,
    drag_fn: &DragFn<'_>,
) -> BallisticsResult<(Vec<RawPoint>, State)> {
    let distance_ft = distance_yd * FEET_PER_YARD;

    let mut state = State::new(
        0.0,
        0.0,
        -sight_height_ft,
        muzzle_velocity_fps * zero_angle_rad.cos(),
        muzzle_velocity_fps * zero_angle_rad.sin(),
    );

    let mut points = vec![RawPoint {
        distance_yd: 0.0,
        time_s: 0.0,
        velocity_fps: state.vel.norm(),
        drop_in: state.pos.y * 12.0,
    }];

    let mut next_sample_idx: u32 = 1;
    let mut steps = 0usize;

    while state.pos.x < distance_ft {
        if steps >= MAX_STEPS {
            tracing::warn!(distance_yd, steps, "trajectory integration exceeded step cap");
            return Err(BallisticsError::IntegrationDiverged(format!(
                "exceeded {MAX_STEPS} integration steps before reaching {distance_yd} yd"
            )));
        }

        let next = rk4_step(state, TRAJECTORY_DT, gravity_eff_fps2, bc_eff, drag_fn);
        if !next.is_finite() {
            tracing::warn!(distance_yd, "trajectory integration produced a non-finite state");
            return Err(BallisticsError::IntegrationDiverged(
                "non-finite position or velocity during integration".to_string(),
            ));
        }
        if next.vel.norm() < 1.0 && next.pos.x < distance_ft {
            tracing::warn!(distance_yd, x_ft = next.pos.x, "bullet stalled before reaching target distance");
            return Err(BallisticsError::IntegrationDiverged(
                "velocity fell below 1 fps before reaching the target distance".to_string(),
            ));
        }

        state = next;
        steps += 1;

        while (f64::from(next_sample_idx) * SAMPLE_INTERVAL_YD * FEET_PER_YARD) <= state.pos.x
            && f64::from(next_sample_idx) * SAMPLE_INTERVAL_YD < distance_yd
        {
            points.push(RawPoint {
                distance_yd: f64::from(next_sample_idx) * SAMPLE_INTERVAL_YD,
                time_s: state.t,
                velocity_fps: state.vel.norm(),
                drop_in: state.pos.y * 12.0,
            });
            next_sample_idx += 1;
        }
    }

    points.push(RawPoint {
        distance_yd,
        time_s: state.t,
        velocity_fps: state.vel.norm(),
        drop_in: state.pos.y * 12.0,
    });

    tracing::debug!(distance_yd, tof = state.t, v_final = state.vel.norm(), "trajectory integration complete");

    Ok((points, state))
}

/// Angular windage correction for a linear offset, following the same
/// `inches_to_correction` treatment as elevation (spec.md §4.5.6 step 6).
pub fn windage_correction(windage_in: f64, distance_yd: f64, unit: AngularUnit) -> f64 {
    inches_to_correction(windage_in, distance_yd, unit)
}

/// Angular elevation correction: drop below the line of sight yields a
/// positive "dial up" correction.
pub fn elevation_correction(drop_in: f64, distance_yd: f64, unit: AngularUnit) -> f64 {
    inches_to_correction(-drop_in, distance_yd, unit)
}
