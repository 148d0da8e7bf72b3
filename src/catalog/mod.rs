//! Crop Catalogue and Region/Season Index
//!
//! Builds lookup maps over the embedded reference tables once at startup
//! and exposes the read-only queries the presentation layer drives its
//! selection controls and info panels with. The catalogue is never
//! mutated after `load()`, so a shared reference is safe across threads.

pub mod tables;

use anyhow::{bail, ensure, Result};
use rustc_hash::FxHashMap;
use tracing::{info, warn};

use crate::error::AdvisorError;
use crate::types::{CropProfile, Season};
use tables::{RegionSeasons, CROP_PROFILES, REGION_SEASON_CROPS};

/// Immutable catalogue of crop profiles plus the region/season crop index
pub struct CropCatalog {
    /// Crop name → profile, exact case-sensitive keys
    profiles: FxHashMap<&'static str, &'static CropProfile>,

    /// Region name → per-season crop lists
    regions: FxHashMap<&'static str, &'static RegionSeasons>,

    /// Crop names in declaration order
    crop_names: Vec<&'static str>,

    /// Region names in declaration order
    region_names: Vec<&'static str>,
}

impl CropCatalog {
    /// Build the catalogue from the embedded tables.
    ///
    /// Hard errors: duplicate crop or region keys, and threshold pairs
    /// violating `good > average >= 0`. A crop named in the region/season
    /// index without a profile entry is a tolerated gap and only warned
    /// about; `crop_profile` reports `UnknownCrop` for it at query time.
    pub fn load() -> Result<Self> {
        let mut profiles = FxHashMap::default();
        let mut crop_names = Vec::with_capacity(CROP_PROFILES.len());

        for profile in CROP_PROFILES {
            if let Some(t) = profile.thresholds {
                ensure!(
                    t.good > t.average && t.average >= 0.0,
                    "crop {:?} has unordered thresholds: good={} average={}",
                    profile.name,
                    t.good,
                    t.average,
                );
            }
            if profiles.insert(profile.name, profile).is_some() {
                bail!("duplicate crop profile key: {:?}", profile.name);
            }
            crop_names.push(profile.name);
        }

        let mut regions = FxHashMap::default();
        let mut region_names = Vec::with_capacity(REGION_SEASON_CROPS.len());
        let mut index_gaps = 0usize;

        for entry in REGION_SEASON_CROPS {
            if regions.insert(entry.region, entry).is_some() {
                bail!("duplicate region index key: {:?}", entry.region);
            }
            region_names.push(entry.region);

            for season in Season::all() {
                for crop in entry.crops(*season) {
                    if !profiles.contains_key(crop) {
                        warn!(
                            region = entry.region,
                            season = season.display_name(),
                            crop,
                            "index names a crop with no profile entry"
                        );
                        index_gaps += 1;
                    }
                }
            }
        }

        info!(
            crops = crop_names.len(),
            regions = region_names.len(),
            index_gaps,
            "crop catalogue loaded"
        );

        Ok(CropCatalog {
            profiles,
            regions,
            crop_names,
            region_names,
        })
    }

    /// Look up a crop profile by its exact catalogue key.
    pub fn crop_profile(&self, name: &str) -> Result<&'static CropProfile, AdvisorError> {
        self.profiles
            .get(name)
            .copied()
            .ok_or_else(|| AdvisorError::UnknownCrop { name: name.to_string() })
    }

    /// All crop names in declaration order, for selection controls.
    pub fn crop_names(&self) -> &[&'static str] {
        &self.crop_names
    }

    /// All region names in declaration order.
    pub fn region_names(&self) -> &[&'static str] {
        &self.region_names
    }

    /// Crops conventionally grown in a region during a season.
    ///
    /// Empty for unknown regions and for region/season pairs with no
    /// listed crops; "no data" is a displayable state, not a failure.
    pub fn crops_for_region_season(&self, region: &str, season: Season) -> &'static [&'static str] {
        self.regions
            .get(region)
            .map(|entry| entry.crops(season))
            .unwrap_or(&[])
    }

    /// Season-wise crop lists for one region, over all four seasons in
    /// display order. Backs the "season-wise crops in your state" panel.
    pub fn season_breakdown(&self, region: &str) -> Vec<(Season, &'static [&'static str])> {
        Season::all()
            .iter()
            .map(|&season| (season, self.crops_for_region_season(region, season)))
            .collect()
    }
}
