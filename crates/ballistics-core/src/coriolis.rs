//! Horizontal and vertical (Eötvös) Coriolis deflection (spec.md §4.4).

use crate::units::{inches_to_correction, AngularUnit};

/// Earth's angular rotation rate, rad/s.
pub const EARTH_OMEGA: f64 = 7.2921e-5;

/// Clamp latitude to the physically valid range.
#[inline]
fn clamp_latitude_deg(latitude_deg: f64) -> f64 {
    latitude_deg.clamp(-90.0, 90.0)
}

/// Normalize an azimuth into `[0, 360)`.
#[inline]
fn normalize_azimuth_deg(azimuth_deg: f64) -> f64 {
    let a = azimuth_deg % 360.0;
    if a < 0.0 {
        a + 360.0
    } else {
        a
    }
}

/// Horizontal Coriolis deflection, inches. Positive is to the right in the
/// northern hemisphere; sign follows the sign of latitude.
pub fn calculate_horizontal_coriolis(latitude_deg: f64, tof_s: f64, mean_velocity_fps: f64) -> f64 {
    let lat = clamp_latitude_deg(latitude_deg).to_radians();
    let drift_ft = 2.0 * EARTH_OMEGA * mean_velocity_fps * tof_s * lat.sin();
    drift_ft * 12.0
}

/// Vertical (Eötvös) Coriolis deflection, inches. Positive is additional
/// drop (firing east).
pub fn calculate_vertical_coriolis(
    latitude_deg: f64,
    azimuth_deg: f64,
    tof_s: f64,
    mean_velocity_fps: f64,
) -> f64 {
    let lat = clamp_latitude_deg(latitude_deg).to_radians();
    let az = normalize_azimuth_deg(azimuth_deg).to_radians();
    let drift_ft = 2.0 * EARTH_OMEGA * mean_velocity_fps * tof_s * lat.cos() * az.sin();
    drift_ft * 12.0
}

/// Full Coriolis result: horizontal always available; vertical only when an
/// azimuth of fire was supplied.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "with-serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CoriolisResult {
    pub horizontal_in: f64,
    pub horizontal_mil: f64,
    pub vertical_in: Option<f64>,
    pub vertical_mil: Option<f64>,
}

/// Compute the full Coriolis result for a shot.
///
/// `azimuth_deg` is `None` when the caller did not supply a firing azimuth,
/// in which case the vertical component is [`NotApplicable`](crate::error::BallisticsError) —
/// represented here as `None`, not an error (spec.md §7 kind 4).
pub fn calculate_coriolis_complete(
    latitude_deg: f64,
    azimuth_deg: Option<f64>,
    tof_s: f64,
    mean_velocity_fps: f64,
    distance_yd: f64,
) -> CoriolisResult {
    let horizontal_in = calculate_horizontal_coriolis(latitude_deg, tof_s, mean_velocity_fps);
    let horizontal_mil = inches_to_correction(horizontal_in, distance_yd, AngularUnit::Mil);

    let (vertical_in, vertical_mil) = match azimuth_deg {
        Some(az) => {
            let v_in = calculate_vertical_coriolis(latitude_deg, az, tof_s, mean_velocity_fps);
            let v_mil = inches_to_correction(v_in, distance_yd, AngularUnit::Mil);
            (Some(v_in), Some(v_mil))
        }
        None => (None, None),
    };

    CoriolisResult {
        horizontal_in,
        horizontal_mil,
        vertical_in,
        vertical_mil,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn horizontal_symmetry_in_latitude() {
        let a = calculate_horizontal_coriolis(45.0, 1.65, 2000.0);
        let b = calculate_horizontal_coriolis(-45.0, 1.65, 2000.0);
        assert_relative_eq!(a, -b, epsilon = 1e-9);
    }

    #[test]
    fn vertical_azimuth_symmetry_and_period() {
        let v90 = calculate_vertical_coriolis(45.0, 90.0, 1.65, 2000.0);
        let v270 = calculate_vertical_coriolis(45.0, 270.0, 1.65, 2000.0);
        assert_relative_eq!(v90, -v270, epsilon = 1e-9);

        let v450 = calculate_vertical_coriolis(45.0, 450.0, 1.65, 2000.0);
        assert_relative_eq!(v90, v450, epsilon = 1e-9);
    }

    #[test]
    fn scenario_s7() {
        // spec.md §8 S7: lat=45, az=90, TOF=1.65s, MV=2650, V_target=1500 => mean 2075
        let mean_v = (2650.0 + 1500.0) / 2.0;
        let h = calculate_horizontal_coriolis(45.0, 1.65, mean_v);
        assert!(h > 2.0 && h < 10.0, "horizontal deflection {h} out of expected range");

        let v90 = calculate_vertical_coriolis(45.0, 90.0, 1.65, mean_v);
        let v270 = calculate_vertical_coriolis(45.0, 270.0, 1.65, mean_v);
        assert!(v90 > 0.0);
        assert!(v270 < 0.0);

        // horizontal magnitude is independent of azimuth
        let h_az0 = calculate_horizontal_coriolis(45.0, 1.65, mean_v);
        assert_relative_eq!(h, h_az0, epsilon = 1e-12);
    }

    #[test]
    fn latitude_and_azimuth_are_clamped_and_normalized() {
        assert_relative_eq!(
            calculate_horizontal_coriolis(120.0, 1.0, 2000.0),
            calculate_horizontal_coriolis(90.0, 1.0, 2000.0),
            epsilon = 1e-12
        );
        assert_relative_eq!(
            calculate_vertical_coriolis(45.0, -270.0, 1.0, 2000.0),
            calculate_vertical_coriolis(45.0, 90.0, 1.0, 2000.0),
            epsilon = 1e-9
        );
    }
}
