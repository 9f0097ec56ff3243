//! Pressure/density altitude, speed of sound, and air density.
//!
//! Dry-air, US-customary formulas (spec.md §4.2). Humidity is accepted on
//! [`AtmosphericConditions`] for forward compatibility but is not used by
//! [`air_density`] — see DESIGN.md Open Question 3.

/// Standard sea-level temperature (°F).
pub const STANDARD_TEMPERATURE_F: f64 = 59.0;
/// Standard sea-level station pressure (inHg).
pub const STANDARD_PRESSURE_INHG: f64 = 29.92;
/// Standard sea-level air density (lb/ft³), for BC air-density adjustment.
pub const STANDARD_DENSITY_LB_FT3: f64 = 0.0765;

/// Raw atmospheric inputs supplied by the caller.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "with-serde", derive(serde::Serialize, serde::Deserialize))]
pub struct AtmosphericConditions {
    /// Station temperature, °F.
    pub temperature_f: f64,
    /// Station pressure, inHg.
    pub pressure_inhg: f64,
    /// Station altitude above sea level, ft.
    pub altitude_ft: f64,
    /// Relative humidity, 0–100%. Accepted but unused by [`air_density`]
    /// (dry-air ideal-gas law only).
    pub humidity_pct: Option<f64>,
}

impl Default for AtmosphericConditions {
    fn default() -> Self {
        Self {
            temperature_f: STANDARD_TEMPERATURE_F,
            pressure_inhg: STANDARD_PRESSURE_INHG,
            altitude_ft: 0.0,
            humidity_pct: None,
        }
    }
}

/// Derived atmosphere used internally by the solver.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "with-serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ResolvedAtmosphere {
    pub pressure_altitude_ft: f64,
    pub density_altitude_ft: f64,
    pub speed_of_sound_fps: f64,
    pub air_density_lb_ft3: f64,
}

/// `pressureAltitude(P, alt) = alt + (29.92 − P) · 1000`.
#[inline]
pub fn pressure_altitude(pressure_inhg: f64, altitude_ft: f64) -> f64 {
    altitude_ft + (STANDARD_PRESSURE_INHG - pressure_inhg) * 1000.0
}

/// `densityAltitude = pressureAltitude + 120 · (T − (59 − 0.00356·pressureAltitude))`.
#[inline]
pub fn density_altitude(temperature_f: f64, pressure_inhg: f64, altitude_ft: f64) -> f64 {
    let pa = pressure_altitude(pressure_inhg, altitude_ft);
    pa + 120.0 * (temperature_f - (59.0 - 0.00356 * pa))
}

/// `speedOfSound(T) = 49.02 · sqrt(T + 459.67)` fps.
#[inline]
pub fn speed_of_sound(temperature_f: f64) -> f64 {
    49.02 * (temperature_f + 459.67).sqrt()
}

/// `airDensity(T, P) = (P · 0.491154 · 144) / (53.352 · (T + 459.67))` lb/ft³.
#[inline]
pub fn air_density(temperature_f: f64, pressure_inhg: f64) -> f64 {
    (pressure_inhg * 0.491154 * 144.0) / (53.352 * (temperature_f + 459.67))
}

/// Resolve raw station conditions into the derived quantities the solver needs.
pub fn calculate_atmospheric_conditions(cond: AtmosphericConditions) -> ResolvedAtmosphere {
    ResolvedAtmosphere {
        pressure_altitude_ft: pressure_altitude(cond.pressure_inhg, cond.altitude_ft),
        density_altitude_ft: density_altitude(cond.temperature_f, cond.pressure_inhg, cond.altitude_ft),
        speed_of_sound_fps: speed_of_sound(cond.temperature_f),
        air_density_lb_ft3: air_density(cond.temperature_f, cond.pressure_inhg),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn pressure_altitude_identity_at_standard_pressure() {
        assert_relative_eq!(pressure_altitude(29.92, 1500.0), 1500.0, epsilon = 1e-9);
    }

    #[test]
    fn density_altitude_near_isa_at_standard_conditions() {
        let da = density_altitude(59.0, 29.92, 0.0);
        assert!(da.abs() < 50.0, "density altitude {da} should be within 50 ft of ISA");
    }

    #[test]
    fn standard_atmosphere_reference_values() {
        assert_relative_eq!(air_density(59.0, 29.92), 0.0765, epsilon = 2e-4);
        assert_relative_eq!(speed_of_sound(59.0), 1116.0, epsilon = 1.0);
    }

    #[test]
    fn calculate_atmospheric_conditions_composes_all_fields() {
        let resolved = calculate_atmospheric_conditions(AtmosphericConditions::default());
        assert_relative_eq!(resolved.pressure_altitude_ft, 0.0, epsilon = 1e-9);
        assert!(resolved.air_density_lb_ft3 > 0.0);
        assert!(resolved.speed_of_sound_fps > 0.0);
    }
}
