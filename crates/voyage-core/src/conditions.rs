//! Weather condition ratings for route points.

use crate::models::TimeSample;
use serde::{Deserialize, Serialize};

/// Rating of the sea state at one forecast sample.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ConditionSeverity {
    /// Workable wind and waves
    Good,
    /// Elevated wind or waves, monitor
    Moderate,
    /// Gale-force wind or heavy seas
    Severe,
}

/// Wind/wave thresholds for the severity rating.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ConditionThresholds {
    pub severe_wind_ms: f64,
    pub severe_wave_m: f64,
    pub moderate_wind_ms: f64,
    pub moderate_wave_m: f64,
}

impl Default for ConditionThresholds {
    fn default() -> Self {
        Self {
            severe_wind_ms: 17.2, // Beaufort 8 gale threshold
            severe_wave_m: 3.5,
            moderate_wind_ms: 12.0,
            moderate_wave_m: 2.5,
        }
    }
}

/// Rate a forecast sample. Absent fields count as calm.
pub fn classify_sample(sample: &TimeSample, thresholds: &ConditionThresholds) -> ConditionSeverity {
    let wind = sample.wind_speed_ms.unwrap_or(0.0);
    let wave = sample.waves.and_then(|w| w.hs_m).unwrap_or(0.0);

    if wind > thresholds.severe_wind_ms || wave > thresholds.severe_wave_m {
        ConditionSeverity::Severe
    } else if wind > thresholds.moderate_wind_ms || wave > thresholds.moderate_wave_m {
        ConditionSeverity::Moderate
    } else {
        ConditionSeverity::Good
    }
}
