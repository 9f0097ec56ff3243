//! Core ballistics math utilities shared across the workspace.
//!
//! Includes:
//! - Units & conversions (metric/imperial, and inches↔MIL/MOA correction)
//! - Standard atmosphere calculations
//! - Wind representation and the simplified wind-drift model
//! - Coriolis effect (horizontal and vertical/Eötvös)
//! - The shared [`BallisticsError`] boundary type
//!
//! Every function in this crate is pure and total; none of it touches the
//! filesystem, the network, or any shared mutable state (spec.md §5).

#![cfg_attr(not(test), warn(missing_docs))]

pub mod atmosphere;
pub mod coriolis;
pub mod error;
pub mod units;
pub mod wind;

pub use atmosphere::{
    air_density, calculate_atmospheric_conditions, density_altitude, pressure_altitude,
    speed_of_sound, AtmosphericConditions, ResolvedAtmosphere, STANDARD_DENSITY_LB_FT3,
    STANDARD_PRESSURE_INHG, STANDARD_TEMPERATURE_F,
};
pub use coriolis::{
    calculate_coriolis_complete, calculate_horizontal_coriolis, calculate_vertical_coriolis,
    CoriolisResult, EARTH_OMEGA,
};
pub use error::{BallisticsError, BallisticsResult};
pub use units::{correction_to_inches, inches_to_correction, AngularUnit};
pub use wind::{wind_drift_inches, Wind};
