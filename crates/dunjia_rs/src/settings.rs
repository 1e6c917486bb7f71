//! User-facing settings.
//!
//! Settings only toggle optional corrections and presentation; they never
//! change the chart arithmetic. JSON uses camelCase keys and every field is
//! optional.

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use dunjia_time::DEFAULT_TIMEZONE_OFFSET_HOURS;

use crate::error::DunjiaError;

/// How a score is shown to the user.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ScorePrecision {
    /// Whole-number score.
    High,
    /// Open/closed wording.
    #[default]
    Low,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Settings {
    pub use_true_solar_time: bool,
    /// Apply the fixed magnetic declination to the heading.
    pub use_magnetic_north: bool,
    pub score_precision: ScorePrecision,
    pub timezone_offset_hours: i32,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            use_true_solar_time: true,
            use_magnetic_north: false,
            score_precision: ScorePrecision::Low,
            timezone_offset_hours: DEFAULT_TIMEZONE_OFFSET_HOURS,
        }
    }
}

impl Settings {
    pub fn from_json_str(json: &str) -> Result<Self, DunjiaError> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn from_file(path: &Path) -> Result<Self, DunjiaError> {
        let contents = fs::read_to_string(path)?;
        Self::from_json_str(&contents)
    }
}
