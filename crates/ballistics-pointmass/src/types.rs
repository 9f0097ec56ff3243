//! Value types exchanged across the solver's public boundary (spec.md §3).

use ballistics_core::atmosphere::AtmosphericConditions;
use ballistics_models::ModelKind;

/// Fixed properties of the rifle being fired.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "with-serde", derive(serde::Serialize, serde::Deserialize))]
pub struct RifleConfig {
    /// Distance at which the rifle is zeroed, yards.
    pub zero_distance_yd: f64,
    /// Height of the optic's centerline above the bore centerline, inches.
    pub sight_height_in: f64,
    /// Barrel twist rate as `"1:N"`, e.g. `"1:10"`.
    pub twist_rate: String,
    pub barrel_length_in: f64,
    /// Cartridge name used to resolve a bullet diameter for stability and
    /// spin-drift calculations (e.g. `".308 Winchester"`). `None` skips
    /// those auxiliary corrections entirely.
    pub caliber: Option<String>,
    /// `true` for right-hand (clockwise) twist, `false` for left-hand.
    pub is_right_hand_twist: bool,
}

impl Default for RifleConfig {
    fn default() -> Self {
        Self {
            zero_distance_yd: 100.0,
            sight_height_in: 1.5,
            twist_rate: "1:10".to_string(),
            barrel_length_in: 24.0,
            caliber: None,
            is_right_hand_twist: true,
        }
    }
}

/// Fixed properties of the loaded ammunition.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "with-serde", derive(serde::Serialize, serde::Deserialize))]
pub struct AmmoConfig {
    pub bullet_weight_gr: f64,
    pub ballistic_coefficient: f64,
    pub drag_model: ModelKind,
    pub muzzle_velocity_fps: f64,
}

/// Per-shot conditions that vary independently of rifle and ammunition.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "with-serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ShotParameters {
    /// Target distance, yards.
    pub distance_yd: f64,
    /// Shot angle relative to horizontal, degrees. Positive is uphill.
    pub angle_deg: f64,
    pub wind_speed_mph: f64,
    pub wind_direction_deg: f64,
    /// Firing-position latitude, degrees. `None` disables Coriolis entirely.
    pub latitude_deg: Option<f64>,
    /// Compass azimuth of fire, degrees (0 = north, 90 = east). `None`
    /// leaves the vertical Coriolis component unresolved.
    pub azimuth_deg: Option<f64>,
}

/// One sampled point along a solved trajectory (spec.md §3, §4.5.4).
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "with-serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TrajectoryPoint {
    pub distance_yd: f64,
    pub time_s: f64,
    pub velocity_fps: f64,
    pub energy_ftlb: f64,
    /// Vertical displacement from the line of sight, inches. Positive is
    /// above the line of sight.
    pub drop_in: f64,
    /// Horizontal wind drift, inches. Positive is to the left.
    pub windage_in: f64,
    /// Angular elevation correction at this point's distance, MIL.
    pub elevation_mil: f64,
    /// Angular windage correction at this point's distance, MIL.
    pub windage_mil: f64,
}

/// The full solved firing solution (spec.md §3, §4.5.6).
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "with-serde", derive(serde::Serialize, serde::Deserialize))]
pub struct BallisticSolution {
    pub rifle: RifleConfig,
    pub ammo: AmmoConfig,
    pub shot: ShotParameters,
    pub atmosphere: AtmosphericConditions,

    /// The zero-angle found for this rifle/ammo/atmosphere combination, radians.
    pub zero_angle_rad: f64,

    pub time_of_flight_s: f64,
    pub velocity_fps: f64,
    pub energy_ftlb: f64,

    pub drop_in: f64,
    pub elevation_correction_mil: f64,
    pub elevation_correction_moa: f64,

    pub windage_in: f64,
    pub windage_correction_mil: f64,
    pub windage_correction_moa: f64,

    /// Highest point the trajectory reaches above the line of sight, inches,
    /// and the distance (yards) at which it occurs.
    pub max_ordinate_in: f64,
    pub max_ordinate_distance_yd: f64,

    /// Present only when `rifle.caliber` resolved to a known bullet diameter.
    pub stability_factor: Option<f64>,
    pub spin_drift_in: Option<f64>,
    pub spin_drift_mil: Option<f64>,

    /// Present only when `shot.latitude_deg` was supplied.
    pub coriolis_horizontal_in: Option<f64>,
    pub coriolis_horizontal_mil: Option<f64>,
    /// Present only when both `latitude_deg` and `azimuth_deg` were supplied.
    pub coriolis_vertical_in: Option<f64>,
    pub coriolis_vertical_mil: Option<f64>,

    /// Present only when the caller requested a full trajectory dump.
    pub trajectory: Option<Vec<TrajectoryPoint>>,
}

/// One row of a wind-drift dope table (spec.md §6 `generateWindTable`).
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "with-serde", derive(serde::Serialize, serde::Deserialize))]
pub struct WindTableEntry {
    pub wind_speed_mph: f64,
    pub windage_in: f64,
    pub windage_correction_mil: f64,
    pub windage_correction_moa: f64,
}
