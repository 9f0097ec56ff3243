//! Aerodynamic jump: the instantaneous vertical angular nudge a crosswind
//! imparts to a spin-stabilized bullet at the muzzle (spec.md §4.4).

use ballistics_core::units::{inches_to_correction, mil_to_moa, AngularUnit};

/// Empirical aero-jump gain.
const AERO_JUMP_K: f64 = 0.015;

/// Parameters for [`calculate_aero_jump_angle`] / [`calculate_aero_jump`].
#[derive(Debug, Clone, Copy)]
pub struct AeroJumpParams {
    pub muzzle_velocity_fps: f64,
    pub crosswind_fps: f64,
    pub stability_factor: f64,
    pub right_hand: bool,
}

/// `calculateAeroJumpAngle`: instantaneous vertical jump, milliradians.
/// Sign is reversed for left-hand twist.
pub fn calculate_aero_jump_angle(params: &AeroJumpParams) -> f64 {
    let theta_rad =
        AERO_JUMP_K * params.crosswind_fps / (params.muzzle_velocity_fps * params.stability_factor);
    let mrad = theta_rad * 1000.0;
    if params.right_hand {
        mrad
    } else {
        -mrad
    }
}

/// Qualitative direction of the vertical offset an aero-jump angle produces.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "with-serde", derive(serde::Serialize, serde::Deserialize))]
pub enum JumpDirection {
    Up,
    Down,
    None,
}

/// Full aero-jump result at a given target distance.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "with-serde", derive(serde::Serialize, serde::Deserialize))]
pub struct AeroJumpResult {
    pub jump_angle_mrad: f64,
    pub jump_angle_moa: f64,
    pub vertical_offset_in: f64,
    pub direction: JumpDirection,
    pub description: String,
}

/// `calculateAeroJump(params, distanceYd)`.
pub fn calculate_aero_jump(params: &AeroJumpParams, distance_yd: f64) -> AeroJumpResult {
    let jump_angle_mrad = calculate_aero_jump_angle(params);
    let jump_angle_moa = mil_to_moa(jump_angle_mrad);

    let distance_inches = distance_yd * 36.0;
    let vertical_offset_in = (jump_angle_mrad / 1000.0).tan() * distance_inches;

    let direction = if vertical_offset_in.abs() < 1e-9 {
        JumpDirection::None
    } else if vertical_offset_in > 0.0 {
        JumpDirection::Up
    } else {
        JumpDirection::Down
    };

    let description = match direction {
        JumpDirection::Up => format!("{vertical_offset_in:.2} in high at {distance_yd:.0} yd (aero jump)"),
        JumpDirection::Down => format!("{:.2} in low at {distance_yd:.0} yd (aero jump)", vertical_offset_in.abs()),
        JumpDirection::None => "negligible aero jump".to_string(),
    };

    AeroJumpResult {
        jump_angle_mrad,
        jump_angle_moa,
        vertical_offset_in,
        direction,
        description,
    }
}

/// Convenience: jump angle expressed as a sight correction in the caller's
/// preferred unit, using [`inches_to_correction`] on the vertical offset.
pub fn aero_jump_correction(params: &AeroJumpParams, distance_yd: f64, unit: AngularUnit) -> f64 {
    let result = calculate_aero_jump(params, distance_yd);
    inches_to_correction(result.vertical_offset_in, distance_yd, unit)
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn base_params() -> AeroJumpParams {
        AeroJumpParams {
            muzzle_velocity_fps: 2650.0,
            crosswind_fps: 10.0,
            stability_factor: 1.5,
            right_hand: true,
        }
    }

    #[test]
    fn right_hand_positive_left_hand_negative() {
        let rh = calculate_aero_jump_angle(&base_params());
        let mut lh_params = base_params();
        lh_params.right_hand = false;
        let lh = calculate_aero_jump_angle(&lh_params);
        assert_relative_eq!(rh, -lh, epsilon = 1e-12);
        assert!(rh > 0.0);
    }

    #[test]
    fn no_crosswind_means_no_jump() {
        let mut params = base_params();
        params.crosswind_fps = 0.0;
        let result = calculate_aero_jump(&params, 500.0);
        assert_eq!(result.direction, JumpDirection::None);
        assert_relative_eq!(result.vertical_offset_in, 0.0, epsilon = 1e-9);
    }

    #[test]
    fn offset_scales_with_distance() {
        let params = base_params();
        let near = calculate_aero_jump(&params, 100.0);
        let far = calculate_aero_jump(&params, 500.0);
        assert!(far.vertical_offset_in.abs() > near.vertical_offset_in.abs());
    }
}
