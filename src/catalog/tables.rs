//! Embedded Crop Reference Tables
//!
//! The canonical catalogue of crop profiles and the region/season crop
//! index, compiled into the binary. This is the single source of truth:
//! the upstream data existed as several near-identical copies, and any
//! disagreement between them is resolved here once.
//!
//! Threshold units are tons/acre, matching the estimator output.

use crate::types::{CropProfile, Season, YieldThresholds};

const fn thresholds(good: f64, average: f64) -> Option<YieldThresholds> {
    Some(YieldThresholds { good, average })
}

// ============================================================================
// CROP PROFILES
// Declaration order is the display order of crop selection controls.
// ============================================================================

pub static CROP_PROFILES: &[CropProfile] = &[
    CropProfile {
        name: "Rice",
        season: Season::Kharif,
        regions: "West Bengal, Punjab, Uttar Pradesh, Tamil Nadu",
        thresholds: thresholds(2.5, 1.5),
    },
    CropProfile {
        name: "Wheat",
        season: Season::Rabi,
        regions: "Punjab, Haryana, Uttar Pradesh, Madhya Pradesh",
        thresholds: thresholds(2.0, 1.2),
    },
    CropProfile {
        name: "Maize",
        season: Season::Kharif,
        regions: "Karnataka, Madhya Pradesh, Bihar",
        thresholds: thresholds(2.8, 1.6),
    },
    CropProfile {
        name: "Cotton",
        season: Season::Kharif,
        regions: "Maharashtra, Gujarat, Telangana",
        thresholds: thresholds(1.2, 0.7),
    },
    CropProfile {
        name: "Soybean",
        season: Season::Kharif,
        regions: "Madhya Pradesh, Maharashtra, Rajasthan",
        thresholds: thresholds(1.5, 0.9),
    },
    CropProfile {
        name: "Sugarcane",
        season: Season::CashCrop,
        regions: "Uttar Pradesh, Maharashtra, Karnataka",
        thresholds: thresholds(32.0, 24.0),
    },
    CropProfile {
        name: "Groundnut",
        season: Season::Kharif,
        regions: "Gujarat, Andhra Pradesh, Tamil Nadu",
        thresholds: thresholds(1.4, 0.8),
    },
    CropProfile {
        name: "Mustard",
        season: Season::Rabi,
        regions: "Rajasthan, Haryana, Madhya Pradesh",
        thresholds: thresholds(1.0, 0.6),
    },
    CropProfile {
        name: "Gram",
        season: Season::Rabi,
        regions: "Madhya Pradesh, Maharashtra, Rajasthan",
        thresholds: thresholds(1.1, 0.7),
    },
    CropProfile {
        name: "Barley",
        season: Season::Rabi,
        regions: "Rajasthan, Uttar Pradesh, Haryana",
        thresholds: thresholds(1.8, 1.1),
    },
    CropProfile {
        name: "Bajra",
        season: Season::Kharif,
        regions: "Rajasthan, Gujarat, Haryana",
        thresholds: thresholds(1.3, 0.8),
    },
    CropProfile {
        name: "Jowar",
        season: Season::Kharif,
        regions: "Maharashtra, Karnataka, Madhya Pradesh",
        thresholds: thresholds(1.2, 0.7),
    },
    CropProfile {
        name: "Moong",
        season: Season::Zaid,
        regions: "Rajasthan, Maharashtra, Bihar",
        thresholds: thresholds(0.8, 0.5),
    },
    CropProfile {
        name: "Watermelon",
        season: Season::Zaid,
        regions: "Uttar Pradesh, Karnataka, Punjab",
        thresholds: thresholds(18.0, 12.0),
    },
    CropProfile {
        // No published band cutoffs; classifier reports Unavailable
        name: "Cucumber",
        season: Season::Zaid,
        regions: "Uttar Pradesh, Haryana, Punjab",
        thresholds: None,
    },
    CropProfile {
        name: "Jute",
        season: Season::CashCrop,
        regions: "West Bengal, Bihar, Assam",
        thresholds: thresholds(1.6, 1.0),
    },
    CropProfile {
        // No published band cutoffs; classifier reports Unavailable
        name: "Tobacco",
        season: Season::CashCrop,
        regions: "Gujarat, Andhra Pradesh, Karnataka",
        thresholds: None,
    },
];

// ============================================================================
// REGION / SEASON CROP INDEX
// Crops conventionally grown per state and season, in display order.
// An empty list is a valid "no data" state for that pair.
// ============================================================================

/// Per-region crop lists keyed by season
#[derive(Debug, Clone, Copy)]
pub struct RegionSeasons {
    pub region: &'static str,
    pub kharif: &'static [&'static str],
    pub rabi: &'static [&'static str],
    pub zaid: &'static [&'static str],
    pub cash: &'static [&'static str],
}

impl RegionSeasons {
    /// Crop list for one season
    pub fn crops(&self, season: Season) -> &'static [&'static str] {
        match season {
            Season::Kharif => self.kharif,
            Season::Rabi => self.rabi,
            Season::Zaid => self.zaid,
            Season::CashCrop => self.cash,
        }
    }
}

pub static REGION_SEASON_CROPS: &[RegionSeasons] = &[
    RegionSeasons {
        region: "Maharashtra",
        kharif: &["Rice", "Cotton", "Soybean"],
        rabi: &["Wheat", "Gram", "Jowar"],
        zaid: &["Moong"],
        cash: &["Sugarcane", "Cotton"],
    },
    RegionSeasons {
        region: "Punjab",
        kharif: &["Rice", "Maize"],
        rabi: &["Wheat", "Barley", "Mustard"],
        zaid: &["Watermelon", "Cucumber"],
        cash: &["Sugarcane"],
    },
    RegionSeasons {
        region: "Uttar Pradesh",
        kharif: &["Rice", "Bajra"],
        rabi: &["Wheat", "Barley", "Gram"],
        zaid: &["Watermelon", "Cucumber"],
        cash: &["Sugarcane"],
    },
    RegionSeasons {
        region: "West Bengal",
        kharif: &["Rice"],
        rabi: &["Mustard"],
        zaid: &[],
        cash: &["Jute"],
    },
    RegionSeasons {
        region: "Gujarat",
        kharif: &["Cotton", "Groundnut", "Bajra"],
        rabi: &["Wheat", "Gram"],
        zaid: &[],
        cash: &["Cotton", "Tobacco"],
    },
    RegionSeasons {
        // "Millets" has no profile entry; tolerated gap, warned at load
        region: "Rajasthan",
        kharif: &["Bajra", "Millets", "Soybean"],
        rabi: &["Mustard", "Gram", "Barley"],
        zaid: &["Moong", "Watermelon"],
        cash: &[],
    },
    RegionSeasons {
        region: "Karnataka",
        kharif: &["Maize", "Jowar", "Groundnut"],
        rabi: &["Jowar", "Gram"],
        zaid: &["Watermelon"],
        cash: &["Sugarcane", "Tobacco"],
    },
    RegionSeasons {
        region: "Tamil Nadu",
        kharif: &["Rice", "Groundnut"],
        rabi: &["Rice"],
        zaid: &[],
        cash: &["Sugarcane"],
    },
    RegionSeasons {
        region: "Madhya Pradesh",
        kharif: &["Soybean", "Maize"],
        rabi: &["Wheat", "Gram", "Mustard"],
        zaid: &["Moong"],
        cash: &[],
    },
    RegionSeasons {
        region: "Bihar",
        kharif: &["Rice", "Maize"],
        rabi: &["Wheat", "Barley"],
        zaid: &["Moong", "Cucumber"],
        cash: &["Jute"],
    },
];
