//! Pure unit-conversion functions and the inches↔angular-correction layer.
//!
//! Every function here is total: given a finite input it returns a finite
//! output, with no failure mode. Round-trip law (spec.md §4.1):
//! `correction_to_inches(inches_to_correction(x, d, u), d, u) ≈ x`.

/// 1 yard in meters.
pub const YARDS_TO_METERS: f64 = 0.9144;
/// 1 foot in meters.
pub const FEET_TO_METERS: f64 = 0.3048;
/// 1 inch in centimeters.
pub const INCHES_TO_CM: f64 = 2.54;
/// 1 fps in m/s.
pub const FPS_TO_MPS: f64 = 0.3048;
/// 1 MIL in MOA.
pub const MIL_TO_MOA: f64 = 3.4377467707849396;
/// 1 grain in grams.
pub const GRAIN_TO_GRAMS: f64 = 0.06479891;
/// 1 inHg in millibars.
pub const INHG_TO_MBAR: f64 = 33.8639;

/// Inches per yard, used by the angular-correction conversion.
const INCHES_PER_YARD: f64 = 36.0;

#[inline]
pub fn yards_to_meters(yd: f64) -> f64 {
    yd * YARDS_TO_METERS
}

#[inline]
pub fn meters_to_yards(m: f64) -> f64 {
    m / YARDS_TO_METERS
}

#[inline]
pub fn feet_to_meters(ft: f64) -> f64 {
    ft * FEET_TO_METERS
}

#[inline]
pub fn meters_to_feet(m: f64) -> f64 {
    m / FEET_TO_METERS
}

#[inline]
pub fn fps_to_mps(fps: f64) -> f64 {
    fps * FPS_TO_MPS
}

#[inline]
pub fn mps_to_fps(mps: f64) -> f64 {
    mps / FPS_TO_MPS
}

#[inline]
pub fn fahrenheit_to_celsius(f: f64) -> f64 {
    (f - 32.0) * 5.0 / 9.0
}

#[inline]
pub fn celsius_to_fahrenheit(c: f64) -> f64 {
    c * 9.0 / 5.0 + 32.0
}

#[inline]
pub fn inhg_to_mbar(inhg: f64) -> f64 {
    inhg * INHG_TO_MBAR
}

#[inline]
pub fn mbar_to_inhg(mbar: f64) -> f64 {
    mbar / INHG_TO_MBAR
}

#[inline]
pub fn grains_to_grams(gr: f64) -> f64 {
    gr * GRAIN_TO_GRAMS
}

#[inline]
pub fn grams_to_grains(g: f64) -> f64 {
    g / GRAIN_TO_GRAMS
}

#[inline]
pub fn mil_to_moa(mil: f64) -> f64 {
    mil * MIL_TO_MOA
}

#[inline]
pub fn moa_to_mil(moa: f64) -> f64 {
    moa / MIL_TO_MOA
}

/// Angular unit used for sight corrections.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "with-serde", derive(serde::Serialize, serde::Deserialize))]
pub enum AngularUnit {
    /// Milliradian, 1/1000 of the angle subtended.
    Mil,
    /// Minute of angle, 1/60 of a degree.
    Moa,
}

/// Convert a linear displacement at a given distance into an angular
/// sight correction. See spec.md §4.1.
pub fn inches_to_correction(inches: f64, distance_yards: f64, unit: AngularUnit) -> f64 {
    let distance_inches = distance_yards * INCHES_PER_YARD;
    let angle_rad = (inches / distance_inches).atan();
    match unit {
        AngularUnit::Mil => angle_rad * 1000.0,
        AngularUnit::Moa => angle_rad.to_degrees() * 60.0,
    }
}

/// Exact inverse of [`inches_to_correction`].
pub fn correction_to_inches(correction: f64, distance_yards: f64, unit: AngularUnit) -> f64 {
    let distance_inches = distance_yards * INCHES_PER_YARD;
    let angle_rad = match unit {
        AngularUnit::Mil => correction / 1000.0,
        AngularUnit::Moa => (correction / 60.0).to_radians(),
    };
    angle_rad.tan() * distance_inches
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn round_trip_mil() {
        for &x in &[-300.0, -12.5, -1e-6, 0.0, 1e-6, 5.5, 300.0] {
            let d = 250.0;
            let c = inches_to_correction(x, d, AngularUnit::Mil);
            let back = correction_to_inches(c, d, AngularUnit::Mil);
            assert_relative_eq!(back, x, epsilon = 1e-9 * x.abs() + 1e-12);
        }
    }

    #[test]
    fn round_trip_moa() {
        for &x in &[-300.0, -12.5, -1e-6, 0.0, 1e-6, 5.5, 300.0] {
            let d = 600.0;
            let c = inches_to_correction(x, d, AngularUnit::Moa);
            let back = correction_to_inches(c, d, AngularUnit::Moa);
            assert_relative_eq!(back, x, epsilon = 1e-9 * x.abs() + 1e-12);
        }
    }

    #[test]
    fn scenario_s6() {
        // spec.md §8 S6
        assert_relative_eq!(
            inches_to_correction(1.0, 100.0, AngularUnit::Mil),
            0.2778,
            epsilon = 1e-3
        );
        assert_relative_eq!(
            inches_to_correction(1.0, 100.0, AngularUnit::Moa),
            0.955,
            epsilon = 1e-3
        );
    }

    #[test]
    fn mil_moa_constant_matches_conversion() {
        assert_relative_eq!(mil_to_moa(1.0), MIL_TO_MOA, epsilon = 1e-12);
        assert_relative_eq!(moa_to_mil(mil_to_moa(2.0)), 2.0, epsilon = 1e-9);
    }
}
