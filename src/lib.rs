//! Crop Advisor Core
//!
//! Stateless advisory core for a crop-yield informational tool:
//! - `catalog/`: immutable crop profiles and the region/season crop index,
//!   built once from embedded tables
//! - `estimator`: deterministic yield estimate and threshold band classifier
//! - `report`: composite per-interaction record for the presentation layer
//!
//! The core holds no mutable state and performs no I/O; a `CropCatalog`
//! reference can be shared across any number of concurrent callers.

pub mod catalog;
pub mod error;
pub mod estimator;
pub mod report;
pub mod types;

// Re-export commonly used types
pub use catalog::CropCatalog;
pub use error::AdvisorError;
pub use estimator::{classify_yield, estimate_yield};
pub use report::YieldReport;
pub use types::{CropProfile, Season, YieldBand, YieldThresholds};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn catalogue_loads() {
        assert!(CropCatalog::load().is_ok());
    }
}
