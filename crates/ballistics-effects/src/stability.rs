//! Twist-rate parsing, caliber→diameter lookup, bullet-length estimate, and
//! the Miller gyroscopic stability factor (spec.md §4.4).

use ballistics_core::BallisticsError;

/// Lead-core jacketed-bullet density, g/cm³, used by [`estimate_bullet_length`].
const BULLET_DENSITY_G_CM3: f64 = 10.5;
/// Ogive factor approximating modern boat-tail bullet shapes.
const OGIVE_FACTOR: f64 = 1.35;

/// Parse a twist-rate string of the form `"1:N"` (accepts decimals, e.g.
/// `"1:10.5"`). Returns `N`, in inches per turn.
pub fn parse_twist_rate(twist: &str) -> Result<f64, BallisticsError> {
    let trimmed = twist.trim();
    let rest = trimmed
        .strip_prefix("1:")
        .ok_or_else(|| BallisticsError::InvalidInput(format!("malformed twist rate: {twist:?}")))?;
    let n: f64 = rest
        .trim()
        .parse()
        .map_err(|_| BallisticsError::InvalidInput(format!("malformed twist rate: {twist:?}")))?;
    if n <= 0.0 || !n.is_finite() {
        return Err(BallisticsError::InvalidInput(format!(
            "twist rate must be a positive number of inches per turn, got {n}"
        )));
    }
    Ok(n)
}

/// Common rifle-cartridge name → bullet diameter (inches), case-insensitive.
static CALIBER_TABLE: &[(&str, f64)] = &[
    (".224 valkyrie", 0.224),
    (".22-250 remington", 0.224),
    (".223 remington", 0.224),
    ("5.56 nato", 0.224),
    (".243 winchester", 0.243),
    (".260 remington", 0.264),
    ("6.5 creedmoor", 0.264),
    ("6.5-284 norma", 0.264),
    ("6.5 prc", 0.264),
    (".270 winchester", 0.277),
    (".28 nosler", 0.284),
    (".280 remington", 0.284),
    ("7mm remington magnum", 0.284),
    ("7mm prc", 0.284),
    (".308 winchester", 0.308),
    ("7.62 nato", 0.308),
    (".30-06 springfield", 0.308),
    (".300 winchester magnum", 0.308),
    (".300 prc", 0.308),
    (".300 norma magnum", 0.308),
    (".300 wsm", 0.308),
    (".338 lapua magnum", 0.338),
    (".338 norma magnum", 0.338),
    (".375 cheytac", 0.375),
    (".408 cheytac", 0.408),
    (".416 barrett", 0.416),
    (".50 bmg", 0.510),
];

/// Resolve a caliber name to a bullet diameter, inches.
///
/// Tries an exact case-insensitive table lookup first, then falls back to
/// extracting a 2- or 3-digit caliber suffix from the string (e.g. `.30` →
/// `0.30`, `.308` → `0.308`), per spec.md §9's "re-architected" fallback.
pub fn get_bullet_diameter(caliber: &str) -> Result<f64, BallisticsError> {
    let needle = caliber.trim().to_lowercase();
    if let Some(&(_, dia)) = CALIBER_TABLE.iter().find(|(name, _)| *name == needle) {
        return Ok(dia);
    }

    if let Some(dia) = extract_caliber_digits(&needle) {
        return Ok(dia);
    }

    Err(BallisticsError::InvalidInput(format!(
        "could not resolve a bullet diameter for caliber {caliber:?}"
    )))
}

/// Extract the first run of 2 or 3 consecutive digits and read it as
/// `0.<digits>` (e.g. `"308"` → `0.308`, `"30"` → `0.30`).
fn extract_caliber_digits(s: &str) -> Option<f64> {
    let bytes = s.as_bytes();
    let mut i = 0;
    while i < bytes.len() {
        if bytes[i].is_ascii_digit() {
            let start = i;
            while i < bytes.len() && bytes[i].is_ascii_digit() {
                i += 1;
            }
            let run = &s[start..i];
            if run.len() == 2 || run.len() == 3 {
                if let Ok(value) = format!("0.{run}").parse::<f64>() {
                    if value > 0.05 && value < 1.0 {
                        return Some(value);
                    }
                }
            }
        } else {
            i += 1;
        }
    }
    None
}

/// Estimate bullet length (inches) from weight and diameter, modeling the
/// bullet as a homogeneous lead-core cylinder scaled by an ogive factor.
pub fn estimate_bullet_length(weight_grains: f64, diameter_inches: f64) -> f64 {
    let mass_g = ballistics_core::units::grains_to_grams(weight_grains);
    let diameter_cm = diameter_inches * ballistics_core::units::INCHES_TO_CM;
    let volume_cm3 = mass_g / BULLET_DENSITY_G_CM3;
    let radius_cm = diameter_cm / 2.0;
    let cylinder_length_cm = volume_cm3 / (std::f64::consts::PI * radius_cm * radius_cm);
    let length_cm = cylinder_length_cm * OGIVE_FACTOR;
    length_cm / ballistics_core::units::INCHES_TO_CM
}

/// Miller gyroscopic stability factor.
///
/// `SG > 1.0` is marginally stable; `SG >= 1.5` is "ideally" stable.
pub fn calculate_stability_factor(weight_grains: f64, diameter_in: f64, length_in: f64, twist_in: f64) -> f64 {
    let t = twist_in / diameter_in; // calibers per turn
    let l = length_in / diameter_in; // calibers
    30.0 * weight_grains / (t * t * diameter_in.powi(3) * l * (1.0 + l * l))
}
