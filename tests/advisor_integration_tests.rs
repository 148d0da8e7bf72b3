//! Advisor Integration Tests
//!
//! Exercises the full path a presentation layer drives: region/season
//! selection, crop lookup, yield estimate, band classification, and the
//! serialized report.

use approx::assert_relative_eq;
use crop_advisor_rust::{
    classify_yield, estimate_yield, AdvisorError, CropCatalog, Season, YieldBand, YieldReport,
};

// Scenario constants: (region, season, expected crop list in declared order)
const REGION_SCENARIOS: &[(&str, &str, &[&str])] = &[
    ("Maharashtra", "Kharif", &["Rice", "Cotton", "Soybean"]),
    ("Punjab", "Rabi", &["Wheat", "Barley", "Mustard"]),
    ("West Bengal", "Cash Crops", &["Jute"]),
];

fn catalog() -> CropCatalog {
    let _ = tracing_subscriber::fmt().with_test_writer().try_init();
    CropCatalog::load().expect("embedded catalogue must load")
}

#[test]
fn region_season_scenarios_match_declared_lists() {
    let catalog = catalog();
    for (region, season_name, expected) in REGION_SCENARIOS {
        let season = Season::from_name(season_name).expect("scenario season must parse");
        let crops = catalog.crops_for_region_season(region, season);
        assert_eq!(&crops, expected, "{region}/{season_name}");
    }
}

#[test]
fn every_listed_region_has_a_full_season_breakdown() {
    let catalog = catalog();
    for region in catalog.region_names() {
        let breakdown = catalog.season_breakdown(region);
        assert_eq!(breakdown.len(), 4, "{region}");
    }
}

#[test]
fn estimates_are_deterministic_across_the_catalogue() {
    let catalog = catalog();
    for crop in catalog.crop_names() {
        let first = estimate_yield(&catalog, crop, 25.0, 100.0).unwrap();
        let second = estimate_yield(&catalog, crop, 25.0, 100.0).unwrap();
        assert_eq!(first, second, "{crop}");
        assert!(first.is_finite() && first >= 0.0, "{crop}");
    }
}

#[test]
fn threshold_boundaries_classify_per_band_rule() {
    let catalog = catalog();
    for crop in catalog.crop_names() {
        let profile = catalog.crop_profile(crop).unwrap();
        let Some(t) = profile.thresholds else {
            assert_eq!(classify_yield(&catalog, crop, 1.0), YieldBand::Unavailable);
            continue;
        };
        assert_eq!(classify_yield(&catalog, crop, t.good), YieldBand::Good);
        assert_eq!(classify_yield(&catalog, crop, t.average), YieldBand::Average);
        assert_eq!(
            classify_yield(&catalog, crop, t.average - 0.01),
            YieldBand::Poor
        );
        assert_eq!(
            classify_yield(&catalog, crop, t.good - 0.01),
            YieldBand::Average
        );
    }
}

#[test]
fn wheat_report_round_trips_to_json() {
    let catalog = catalog();
    let report = YieldReport::build(&catalog, "Wheat", 25.0, 100.0).unwrap();

    assert_relative_eq!(report.estimate_tons_per_acre, 1.89, epsilon = 0.005);
    assert_eq!(report.band, YieldBand::Average);

    let json: serde_json::Value = serde_json::to_value(&report).unwrap();
    assert_eq!(json["crop"], "Wheat");
    assert_eq!(json["season"], "Rabi");
    assert_eq!(json["band"], "Average");
    assert!(json["estimate_tons_per_acre"].is_f64());
}

#[test]
fn unknown_crop_surfaces_typed_error() {
    let catalog = catalog();
    let err = estimate_yield(&catalog, "Dragonfruit", 25.0, 100.0).unwrap_err();
    assert_eq!(
        err,
        AdvisorError::UnknownCrop { name: "Dragonfruit".to_string() }
    );
    assert!(err.to_string().contains("Dragonfruit"));
}

#[test]
fn clamped_extremes_stay_in_band_domain() {
    // Far outside [10,45] x [0,300]: still a finite estimate and a valid band.
    let catalog = catalog();
    for (t, r) in [(-10.0, -50.0), (60.0, 1000.0), (10.0, 0.0), (45.0, 300.0)] {
        let estimate = estimate_yield(&catalog, "Soybean", t, r).unwrap();
        assert!(estimate.is_finite() && estimate >= 0.0);
        let band = classify_yield(&catalog, "Soybean", estimate);
        assert_ne!(band, YieldBand::Unavailable);
    }
}
