//! Shared error type for the workspace's public boundary.
//!
//! Internal numerical primitives never return this type — they return
//! sentinel values (0.0, an unchanged state, a best-effort angle) and the
//! nearest composing function decides whether that sentinel is reportable.
//! See spec.md §7 / §9 and SPEC_FULL.md §3.1.

use thiserror::Error;

/// The three caller-visible failure kinds of the ballistics core.
///
/// A fourth kind from the design, `NotApplicable`, is deliberately not a
/// variant here: an auxiliary effect that cannot be computed (no resolvable
/// caliber, no azimuth for vertical Coriolis, ...) degrades to `None` on the
/// relevant `BallisticSolution` field rather than failing the call.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum BallisticsError {
    /// An input violates a stated domain constraint (BC ≤ 0, MV ≤ 0,
    /// distance ≤ 0, malformed twist rate, unresolved caliber when
    /// caliber-dependent output was requested).
    #[error("invalid input: {0}")]
    InvalidInput(String),

    /// The zero-angle iteration ran to its maximum count without reaching
    /// tolerance and the final residual exceeds the 1-inch grace band.
    #[error("zero-angle solve did not converge: {0}")]
    NotConverged(String),

    /// NaN/Inf appeared in the integrator state, or the step safety cap was
    /// hit before the trajectory reached the target distance.
    #[error("trajectory integration diverged: {0}")]
    IntegrationDiverged(String),
}

/// Convenience alias used throughout the workspace's public functions.
pub type BallisticsResult<T> = Result<T, BallisticsError>;
