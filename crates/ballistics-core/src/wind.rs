//! Wind-vector decomposition and the simplified linear wind-drift model.
//!
//! Direction convention (spec.md §6, shooter-centric meteorological):
//! 0° = headwind, 90° = wind from the shooter's right (crosswind pushes the
//! bullet left), 180° = tailwind, 270° = wind from the shooter's left.

/// 1 mph in fps.
const MPH_TO_FPS: f64 = 1.467;

/// A wind vector as reported by the caller: speed (mph) and meteorological
/// direction (degrees) per the convention above.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "with-serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Wind {
    /// Wind speed, mph.
    pub speed_mph: f64,
    /// Meteorological wind direction, degrees, per the convention above.
    pub direction_deg: f64,
}

impl Wind {
    /// Build a wind vector from speed and meteorological direction.
    pub fn new(speed_mph: f64, direction_deg: f64) -> Self {
        Self { speed_mph, direction_deg }
    }

    /// Crosswind component, fps. Positive pushes the bullet to the left
    /// (wind arriving from the shooter's right, direction_deg == 90).
    pub fn crosswind_fps(&self) -> f64 {
        self.speed_mph * self.direction_deg.to_radians().sin() * MPH_TO_FPS
    }

    /// Head/tail component, fps. Positive is a headwind (direction_deg == 0).
    pub fn headwind_fps(&self) -> f64 {
        self.speed_mph * self.direction_deg.to_radians().cos() * MPH_TO_FPS
    }
}

/// Simplified wind drift (spec.md §4.5.5): the crosswind component held
/// constant over the whole time of flight, i.e. `crosswind · TOF`. This
/// neglects the classical "lag time" reduction of crosswind effect near the
/// muzzle — a known, documented approximation (DESIGN.md Open Question 2),
/// not a bug.
pub fn wind_drift_inches(time_of_flight_s: f64, wind_speed_mph: f64, wind_direction_deg: f64) -> f64 {
    let crosswind_fps = Wind::new(wind_speed_mph, wind_direction_deg).crosswind_fps();
    crosswind_fps * time_of_flight_s * 12.0
}
