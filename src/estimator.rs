//! Yield Estimation and Band Classification
//!
//! Deterministic placeholder model: per-crop base tonnage scaled by
//! season-specific temperature and rainfall response curves. The
//! coefficients are domain placeholders, not agronomically calibrated;
//! what matters is that the function is total on its clamped input
//! domain and returns identical output for identical input.

use crate::catalog::CropCatalog;
use crate::error::AdvisorError;
use crate::types::{Season, YieldBand};

/// Supported input domain; values outside are clamped, never rejected.
pub const TEMPERATURE_RANGE_C: (f64, f64) = (10.0, 45.0);
pub const RAINFALL_RANGE_MM: (f64, f64) = (0.0, 300.0);

/// Floor for a response factor so the estimate never collapses to zero
/// at the domain edges.
const MIN_RESPONSE: f64 = 0.05;

/// Temperature dominates rainfall in the combined response.
const TEMPERATURE_WEIGHT: f64 = 0.6;
const RAINFALL_WEIGHT: f64 = 0.4;

/// Fallback base tonnage for catalogued crops absent from BASE_YIELDS.
const DEFAULT_BASE_YIELD: f64 = 1.5;

// ============================================================================
// BASE YIELD TABLE (tons/acre under ideal conditions)
// ============================================================================

static BASE_YIELDS: &[(&str, f64)] = &[
    ("Rice", 3.0),
    ("Wheat", 2.4),
    ("Maize", 3.2),
    ("Cotton", 1.4),
    ("Soybean", 1.8),
    ("Sugarcane", 38.0),
    ("Groundnut", 1.6),
    ("Mustard", 1.2),
    ("Gram", 1.3),
    ("Barley", 2.1),
    ("Bajra", 1.5),
    ("Jowar", 1.4),
    ("Moong", 1.0),
    ("Watermelon", 22.0),
    ("Cucumber", 14.0),
    ("Jute", 1.9),
    ("Tobacco", 1.1),
];

fn base_yield(crop: &str) -> f64 {
    BASE_YIELDS
        .iter()
        .find(|(name, _)| *name == crop)
        .map(|(_, base)| *base)
        .unwrap_or(DEFAULT_BASE_YIELD)
}

// ============================================================================
// SEASON RESPONSE CURVES
// ============================================================================

/// (optimum, span) for the quadratic falloff on each input axis.
/// Kharif crops want warm and wet, Rabi crops cool and moderate,
/// Zaid crops hot and relatively dry.
fn season_optima(season: Season) -> ((f64, f64), (f64, f64)) {
    match season {
        Season::Kharif => ((30.0, 15.0), (200.0, 200.0)),
        Season::Rabi => ((18.0, 12.0), (80.0, 150.0)),
        Season::Zaid => ((35.0, 12.0), (60.0, 150.0)),
        Season::CashCrop => ((27.0, 15.0), (150.0, 200.0)),
    }
}

/// Quadratic response in [MIN_RESPONSE, 1], peaking at the optimum.
fn response(value: f64, optimum: f64, span: f64) -> f64 {
    let deviation = (value - optimum) / span;
    (1.0 - deviation * deviation).max(MIN_RESPONSE)
}

fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

// ============================================================================
// PUBLIC API
// ============================================================================

/// Estimate yield in tons/acre for a catalogued crop.
///
/// Total and deterministic: out-of-range inputs are clamped to
/// [10, 45] °C and [0, 300] mm. Fails only for a crop name absent from
/// the catalogue.
pub fn estimate_yield(
    catalog: &CropCatalog,
    crop: &str,
    temperature_c: f64,
    rainfall_mm: f64,
) -> Result<f64, AdvisorError> {
    let profile = catalog.crop_profile(crop)?;

    let t = temperature_c.clamp(TEMPERATURE_RANGE_C.0, TEMPERATURE_RANGE_C.1);
    let r = rainfall_mm.clamp(RAINFALL_RANGE_MM.0, RAINFALL_RANGE_MM.1);

    let ((t_opt, t_span), (r_opt, r_span)) = season_optima(profile.season);
    let combined = TEMPERATURE_WEIGHT * response(t, t_opt, t_span)
        + RAINFALL_WEIGHT * response(r, r_opt, r_span);

    Ok(round2(base_yield(crop) * combined))
}

/// Classify an estimate against the crop's thresholds.
///
/// Never fails: unknown crops and crops without a threshold entry both
/// classify as `Unavailable`. Equality at a cutoff counts as the higher
/// band.
pub fn classify_yield(catalog: &CropCatalog, crop: &str, estimate: f64) -> YieldBand {
    let thresholds = match catalog.crop_profile(crop) {
        Ok(profile) => profile.thresholds,
        Err(_) => None,
    };

    match thresholds {
        Some(t) if estimate >= t.good => YieldBand::Good,
        Some(t) if estimate >= t.average => YieldBand::Average,
        Some(_) => YieldBand::Poor,
        None => YieldBand::Unavailable,
    }
}
