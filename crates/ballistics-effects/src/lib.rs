//! Twist/stability, spin drift, and aerodynamic jump (spec.md §4.4).
//!
//! All functions here are grouped under spec.md's `Stability`, `SpinDrift`,
//! and `AeroJump` components. Failures are explicit `Result`s — caliber
//! lookup and twist-rate parsing are the only fallible primitives in this
//! crate; the physics formulas built on top of their output never fail.

#![cfg_attr(not(test), warn(missing_docs))]

mod aero_jump;
mod spin_drift;
mod stability;

pub use aero_jump::{
    aero_jump_correction, calculate_aero_jump, calculate_aero_jump_angle, AeroJumpParams,
    AeroJumpResult, JumpDirection,
};
pub use spin_drift::{calculate_spin_drift, calculate_spin_drift_complete, SpinDriftParams, SpinDriftResult};
pub use stability::{calculate_stability_factor, estimate_bullet_length, get_bullet_diameter, parse_twist_rate};
