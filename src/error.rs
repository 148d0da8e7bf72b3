//! Error taxonomy for the advisor core.
//!
//! Everything here is a deterministic input-validation failure. A
//! region/season pair with no listed crops is an empty result, and a crop
//! without thresholds classifies as `YieldBand::Unavailable`; neither is
//! an error.

use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum AdvisorError {
    /// Crop name does not exactly match a catalogue key
    #[error("unknown crop: {name:?} is not in the catalogue")]
    UnknownCrop { name: String },
}
