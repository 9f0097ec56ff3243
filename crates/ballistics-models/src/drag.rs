//! G1/G7 drag interpolation, regime classification, and BC adjustment
//! (spec.md §4.3).

use crate::tables::{G1_TABLE, G7_TABLE};

/// Default speed of sound (fps) used when the caller does not supply one.
pub const DEFAULT_SPEED_OF_SOUND_FPS: f64 = 1116.0;
/// Reference Mach used by [`get_subsonic_bc_adjustment`].
const REFERENCE_MACH: f64 = 2.0;
/// Mach step used by [`get_drag_change_rate`]'s centered finite difference.
const DELTA_MACH: f64 = 0.01;
/// `|dCd/dMach|` above this value is flagged as transonic instability.
const INSTABILITY_THRESHOLD: f64 = 0.05;

/// Supported drag-function families.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "with-serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ModelKind {
    /// Flat-base reference projectile.
    G1,
    /// Long boat-tail reference projectile.
    G7,
}

impl ModelKind {
    fn table(self) -> &'static [(f64, f64)] {
        match self {
            ModelKind::G1 => G1_TABLE,
            ModelKind::G7 => G7_TABLE,
        }
    }
}

/// Velocity regime classified by Mach number.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "with-serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Regime {
    Subsonic,
    Transonic,
    Supersonic,
}

/// `mach < 0.8` subsonic, `[0.8, 1.2]` transonic, `> 1.2` supersonic.
pub fn classify_regime(mach: f64) -> Regime {
    if mach < 0.8 {
        Regime::Subsonic
    } else if mach <= 1.2 {
        Regime::Transonic
    } else {
        Regime::Supersonic
    }
}

/// Linear interpolation over a Mach-sorted `(mach, cd)` table. Clamps to
/// the table's endpoints outside its domain.
pub fn get_drag_from_table(mach: f64, table: &[(f64, f64)]) -> f64 {
    let first = table[0];
    let last = table[table.len() - 1];
    if mach <= first.0 {
        return first.1;
    }
    if mach >= last.0 {
        return last.1;
    }
    for window in table.windows(2) {
        let (m0, cd0) = window[0];
        let (m1, cd1) = window[1];
        if mach >= m0 && mach <= m1 {
            let t = (mach - m0) / (m1 - m0);
            return cd0 + t * (cd1 - cd0);
        }
    }
    last.1
}

/// `getDragCoefficient`: drag coefficient of a model at a given velocity.
pub fn get_drag_coefficient(velocity_fps: f64, model: ModelKind, speed_of_sound_fps: f64) -> f64 {
    let mach = velocity_fps / speed_of_sound_fps;
    get_drag_from_table(mach, model.table())
}

/// `getSubsonicBCAdjustment`: `Cd(2.0) / Cd(mach)`, 1.0 if `Cd(mach) <= 0`
/// (never happens on the valid tables above, kept for defensiveness against
/// a pathological caller-supplied table).
pub fn get_subsonic_bc_adjustment(mach: f64, model: ModelKind) -> f64 {
    let cd_mach = get_drag_from_table(mach, model.table());
    if cd_mach <= 0.0 {
        return 1.0;
    }
    let cd_ref = get_drag_from_table(REFERENCE_MACH, model.table());
    cd_ref / cd_mach
}

/// `getEffectiveBC`: published BC adjusted for the current subsonic regime.
pub fn get_effective_bc(published_bc: f64, velocity_fps: f64, model: ModelKind, speed_of_sound_fps: f64) -> f64 {
    let mach = velocity_fps / speed_of_sound_fps;
    published_bc * get_subsonic_bc_adjustment(mach, model)
}

/// `getDragChangeRate`: centered finite difference of Cd w.r.t. Mach,
/// `Δmach = 0.01`, expressed per unit velocity (fps) by converting through
/// the local speed of sound.
pub fn get_drag_change_rate(velocity_fps: f64, model: ModelKind, speed_of_sound_fps: f64) -> f64 {
    let mach = velocity_fps / speed_of_sound_fps;
    let delta = DELTA_MACH;
    let cd_plus = get_drag_from_table(mach + delta, model.table());
    let cd_minus = get_drag_from_table((mach - delta).max(0.0), model.table());
    (cd_plus - cd_minus) / (2.0 * delta)
}

/// `getMaxDragMach`: the Mach at which Cd peaks for a model.
pub fn get_max_drag_mach(model: ModelKind) -> f64 {
    model
        .table()
        .iter()
        .cloned()
        .fold((0.0, f64::MIN), |best, (m, cd)| if cd > best.1 { (m, cd) } else { best })
        .0
}

/// Full drag analysis for a velocity, per spec.md §6 `analyzeDrag`.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "with-serde", derive(serde::Serialize, serde::Deserialize))]
pub struct DragAnalysis {
    pub mach: f64,
    pub regime: Regime,
    pub cd: f64,
    pub cd_change_rate: f64,
    pub bc_adjustment: f64,
    pub is_unstable: bool,
}

/// `analyzeDrag(velocityFps, model, c=1116)`.
pub fn analyze_drag(velocity_fps: f64, model: ModelKind, speed_of_sound_fps: f64) -> DragAnalysis {
    let mach = velocity_fps / speed_of_sound_fps;
    let cd = get_drag_from_table(mach, model.table());
    let cd_change_rate = get_drag_change_rate(velocity_fps, model, speed_of_sound_fps);
    DragAnalysis {
        mach,
        regime: classify_regime(mach),
        cd,
        cd_change_rate,
        bc_adjustment: get_subsonic_bc_adjustment(mach, model),
        is_unstable: cd_change_rate.abs() > INSTABILITY_THRESHOLD,
    }
}
