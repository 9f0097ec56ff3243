//! Zero-angle search (spec.md §4.5.3): an atan-update iteration, not a
//! bisection — each pass nudges the barrel angle by the angular error
//! observed at the zero distance.

use crate::rk4::{rk4_step, DragFn, State};

/// Iteration cap; both a safety bound and the threshold past which a
/// residual error outside the grace band is reported as non-convergence.
const MAX_ITERATIONS: u32 = 50;
/// Tolerance at which the search stops early, inches.
const TOLERANCE_IN: f64 = 0.01;
/// Integration step used while searching for the zero, seconds.
const ZERO_SEARCH_DT: f64 = 0.001;
/// Safety cap on RK4 steps per zero-angle trial.
const MAX_STEPS: usize = 200_000;
/// Sentinel error returned when a trial integration diverges or stalls,
/// large enough that it never satisfies [`TOLERANCE_IN`] and simply pushes
/// the next iteration's angle further without crashing the search.
const DIVERGED_SENTINEL_IN: f64 = 1.0e6;

/// Result of [`find_zero_angle`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ZeroAngleResult {
    pub angle_rad: f64,
    pub residual_in: f64,
    pub iterations: u32,
}

/// Vertical miss, inches, at `zero_distance_ft` for a trial launch angle
/// fired over level ground (gravity unreduced). Sentinel on divergence.
fn trial_error_in(
    angle_rad: f64,
    muzzle_velocity_fps: f64,
    sight_height_ft: f64,
    zero_distance_ft: f64,
    bc_eff: f64,
    gravity_fps2: f64,
    drag_fn: &DragFn<'_>,
) -> f64 {
    let mut state = State::new(
        0.0,
        0.0,
        -sight_height_ft,
        muzzle_velocity_fps * angle_rad.cos(),
        muzzle_velocity_fps * angle_rad.sin(),
    );

    let mut steps = 0usize;
    while state.pos.x < zero_distance_ft {
        if steps >= MAX_STEPS {
            return DIVERGED_SENTINEL_IN;
        }
        let next = rk4_step(state, ZERO_SEARCH_DT, gravity_fps2, bc_eff, drag_fn);
        if !next.is_finite() {
            return DIVERGED_SENTINEL_IN;
        }
        if next.vel.norm() < 1.0 && next.pos.x < zero_distance_ft {
            return DIVERGED_SENTINEL_IN;
        }
        state = next;
        steps += 1;
    }
    state.pos.y * 12.0
}

/// Search for the barrel angle that puts the bullet on the line of sight at
/// `zero_distance_ft`. Best-effort: always returns an angle, even if the
/// search never reached tolerance — callers decide whether the residual is
/// acceptable (spec.md §7 `NotConverged`).
pub fn find_zero_angle(
    muzzle_velocity_fps: f64,
    sight_height_ft: f64,
    zero_distance_ft: f64,
    bc_eff: f64,
    gravity_fps2: f64,
    drag_fn: &DragFn<'_>,
) -> ZeroAngleResult {
    let mut angle_rad = (sight_height_ft / zero_distance_ft).atan() + 0.01;
    let mut residual_in = trial_error_in(
        angle_rad,
        muzzle_velocity_fps,
        sight_height_ft,
        zero_distance_ft,
        bc_eff,
        gravity_fps2,
        drag_fn,
    );

    for iteration in 1..=MAX_ITERATIONS {
        if residual_in.abs() < TOLERANCE_IN {
            return ZeroAngleResult { angle_rad, residual_in, iterations: iteration };
        }
        angle_rad -= 0.5 * (residual_in / (zero_distance_ft * 12.0)).atan();
        residual_in = trial_error_in(
            angle_rad,
            muzzle_velocity_fps,
            sight_height_ft,
            zero_distance_ft,
            bc_eff,
            gravity_fps2,
            drag_fn,
        );
    }

    ZeroAngleResult { angle_rad, residual_in, iterations: MAX_ITERATIONS }
}
