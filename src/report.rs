//! Advisory Report
//!
//! One serializable record per interaction: the crop's catalogue
//! metadata, the numeric estimate, and the band. The presentation layer
//! makes a single call and renders (or ships as JSON) the result.

use serde::Serialize;

use crate::catalog::CropCatalog;
use crate::error::AdvisorError;
use crate::estimator::{classify_yield, estimate_yield};
use crate::types::YieldBand;

/// Complete yield advisory for one (crop, temperature, rainfall) query
#[derive(Debug, Clone, Serialize)]
pub struct YieldReport {
    /// Catalogue key of the crop
    pub crop: &'static str,

    /// Display name of the crop's sowing season
    pub season: &'static str,

    /// Free-text description of where the crop is commonly grown
    pub regions: &'static str,

    /// Inputs after the caller's selection (pre-clamping)
    pub temperature_c: f64,
    pub rainfall_mm: f64,

    /// Estimated yield in tons/acre
    pub estimate_tons_per_acre: f64,

    /// Qualitative band for the estimate
    pub band: YieldBand,

    /// Band display text for direct rendering
    pub band_text: &'static str,
}

impl YieldReport {
    /// Assemble the full advisory for a catalogued crop.
    ///
    /// Fails only with `UnknownCrop`; missing thresholds surface as
    /// `YieldBand::Unavailable` in a successful report.
    pub fn build(
        catalog: &CropCatalog,
        crop: &str,
        temperature_c: f64,
        rainfall_mm: f64,
    ) -> Result<Self, AdvisorError> {
        let profile = catalog.crop_profile(crop)?;
        let estimate = estimate_yield(catalog, crop, temperature_c, rainfall_mm)?;
        let band = classify_yield(catalog, crop, estimate);

        Ok(YieldReport {
            crop: profile.name,
            season: profile.season.display_name(),
            regions: profile.regions,
            temperature_c,
            rainfall_mm,
            estimate_tons_per_acre: estimate,
            band,
            band_text: band.display_text(),
        })
    }

    /// Serialize for callers that ship the advisory over a JSON boundary.
    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string(self)
    }
}
