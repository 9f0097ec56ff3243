//! G1/G7 drag tables, interpolation, regime classification, and subsonic
//! BC adjustment (spec.md §4.3).
//!
//! The tables are immutable, read-only after compilation, and safely
//! shareable across threads (spec.md §5) — there is no initialization step.

#![cfg_attr(not(test), warn(missing_docs))]

mod drag;
mod tables;

pub use drag::{
    analyze_drag, classify_regime, get_drag_change_rate, get_drag_coefficient,
    get_drag_from_table, get_effective_bc, get_max_drag_mach, get_subsonic_bc_adjustment,
    DragAnalysis, ModelKind, Regime, DEFAULT_SPEED_OF_SOUND_FPS,
};
pub use tables::{G1_TABLE, G7_TABLE};
