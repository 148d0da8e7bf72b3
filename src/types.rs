//! Shared data types for the crop advisor core.
//!
//! Data sources:
//! - Crop profiles and region/season index: embedded tables in catalog/tables.rs
//! - Yield thresholds: per-crop (good, average) cutoffs in tons/acre

use serde::Serialize;

/// Indian cropping season.
///
/// Fixed four-value enumeration used both as a crop profile attribute and
/// as the lookup key of the region/season index.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum Season {
    /// Monsoon season (June-October): warm, rain-fed
    Kharif,
    /// Winter season (November-April): cool, irrigated
    Rabi,
    /// Short summer season (March-June) between Rabi and Kharif
    Zaid,
    /// Grown for sale rather than subsistence; not tied to one sowing window
    CashCrop,
}

impl Season {
    /// Parse a season name as used in the selection UI.
    ///
    /// Tolerant of the "Cash Crop"/"Cash Crops" spelling split that exists
    /// in the upstream data; everything else is an exact match.
    pub fn from_name(name: &str) -> Option<Self> {
        match name.trim() {
            "Kharif" => Some(Season::Kharif),
            "Rabi" => Some(Season::Rabi),
            "Zaid" => Some(Season::Zaid),
            "Cash Crop" | "Cash Crops" => Some(Season::CashCrop),
            _ => None,
        }
    }

    /// Friendly name for display
    pub fn display_name(&self) -> &'static str {
        match self {
            Season::Kharif => "Kharif",
            Season::Rabi => "Rabi",
            Season::Zaid => "Zaid",
            Season::CashCrop => "Cash Crop",
        }
    }

    /// All seasons in conventional display order
    pub fn all() -> &'static [Season] {
        &[Season::Kharif, Season::Rabi, Season::Zaid, Season::CashCrop]
    }
}

/// Qualitative yield band derived from a numeric estimate and the crop's
/// configured thresholds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum YieldBand {
    /// Estimate at or above the crop's `good` cutoff
    Good,
    /// Estimate at or above `average` but below `good`
    Average,
    /// Estimate below the `average` cutoff
    Poor,
    /// Crop has no threshold entry; a valid display state, not an error
    Unavailable,
}

impl YieldBand {
    pub fn display_text(&self) -> &'static str {
        match self {
            YieldBand::Good => "Good",
            YieldBand::Average => "Average",
            YieldBand::Poor => "Poor",
            YieldBand::Unavailable => "Unavailable",
        }
    }

    pub fn description(&self) -> &'static str {
        match self {
            YieldBand::Good => "Estimated yield is at the high end for this crop",
            YieldBand::Average => "Estimated yield is typical for this crop",
            YieldBand::Poor => "Estimated yield is below the typical range",
            YieldBand::Unavailable => "Yield category not available for this crop",
        }
    }
}

/// Yield band cutoffs in tons/acre.
///
/// Invariant: `good > average >= 0`, enforced at catalogue construction.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct YieldThresholds {
    pub good: f64,
    pub average: f64,
}

/// Static crop profile record.
///
/// Defined once in the embedded catalogue tables and never mutated.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct CropProfile {
    /// Unique catalogue key, case-sensitive
    pub name: &'static str,

    /// Season the crop is conventionally sown in
    pub season: Season,

    /// Free-text description of where the crop is commonly grown
    pub regions: &'static str,

    /// Band cutoffs; `None` means the band classifier reports Unavailable
    pub thresholds: Option<YieldThresholds>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_season_parsing_tolerates_plural_cash_crops() {
        assert_eq!(Season::from_name("Cash Crop"), Some(Season::CashCrop));
        assert_eq!(Season::from_name("Cash Crops"), Some(Season::CashCrop));
        assert_eq!(Season::from_name("Kharif"), Some(Season::Kharif));
        assert_eq!(Season::from_name("kharif"), None);
        assert_eq!(Season::from_name("Monsoon"), None);
    }

    #[test]
    fn test_season_display_order() {
        let names: Vec<&str> = Season::all().iter().map(|s| s.display_name()).collect();
        assert_eq!(names, vec!["Kharif", "Rabi", "Zaid", "Cash Crop"]);
    }
}
