//! Core data models for the voyage estimator.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// One waypoint on the sailing route, with its attached forecast series.
///
/// Points are ordered; the order defines the direction of travel. A point's
/// segment runs from the point itself to its successor on the route.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RoutePoint {
    pub segment_id: u32,
    pub lat: f64,
    pub lon: f64,
    #[serde(default)]
    pub forecast: Option<Forecast>,
}

/// Ordered forecast series attached to a route point.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Forecast {
    pub times: Vec<TimeSample>,
}

/// A single forecast time step.
///
/// Every weather field is optional on the wire. Consumers default magnitudes
/// to zero and keep directions/periods as unknown when absent.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct TimeSample {
    #[serde(default)]
    pub t_iso: String,
    #[serde(default)]
    pub wind_speed_ms: Option<f64>,
    /// Wind direction in degrees [0, 360). 0 is a valid direction (north),
    /// distinct from absent.
    #[serde(default)]
    pub wind_deg: Option<f64>,
    #[serde(default)]
    pub waves: Option<WaveObs>,
    /// Set by the deterministic demo generator; live feeds leave it false.
    #[serde(default)]
    pub mock: bool,
}

impl TimeSample {
    /// Parse `t_iso` as an RFC 3339 timestamp.
    ///
    /// Empty or unparsable values resolve to `None`, never an error.
    pub fn timestamp(&self) -> Option<DateTime<Utc>> {
        DateTime::parse_from_rfc3339(&self.t_iso)
            .ok()
            .map(|dt| dt.with_timezone(&Utc))
    }
}

/// Sea-state observation embedded in a time sample.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
pub struct WaveObs {
    /// Significant wave height in meters
    #[serde(default, rename = "Hs_m")]
    pub hs_m: Option<f64>,
    /// Peak wave period in seconds
    #[serde(default, rename = "Tp_s")]
    pub tp_s: Option<f64>,
}

/// Per-segment speed override from the route-optimization service.
///
/// `speed_kn` is explicitly optional: a missing or non-positive value falls
/// back to the default baseline speed. Zero knots is not a legal override.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct SpeedProfileEntry {
    pub segment_id: u32,
    #[serde(default)]
    pub speed_kn: Option<f64>,
}

/// Computed estimate for one route segment, rounded for presentation.
///
/// The final point on a route always carries `dist_nm = 0` and zero hours.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SegmentResult {
    pub segment_id: u32,
    pub dist_nm: f64,
    #[serde(rename = "Hs")]
    pub hs_m: f64,
    #[serde(rename = "Tp")]
    pub tp_s: Option<f64>,
    pub est_kn: f64,
    pub act_kn: f64,
    pub est_hours: f64,
    pub act_hours: f64,
    #[serde(rename = "waveSpeed_ms")]
    pub wave_speed_ms: Option<f64>,
}

/// Route-level rollup: ordered segment rows plus duration totals in days.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RouteSummary {
    pub rows: Vec<SegmentResult>,
    #[serde(rename = "totalEstDays")]
    pub total_est_days: f64,
    #[serde(rename = "totalActDays")]
    pub total_act_days: f64,
}

/// On-demand inspection payload for a single route point.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SegmentDetail {
    pub segment_id: u32,
    pub dist_nm: f64,
    #[serde(rename = "Hs")]
    pub hs_m: f64,
    #[serde(rename = "Tp")]
    pub tp_s: Option<f64>,
    pub est_kn: f64,
    pub act_kn: f64,
    #[serde(rename = "waveSpeed_ms")]
    pub wave_speed_ms: Option<f64>,
    #[serde(rename = "waveSpeed_kn")]
    pub wave_speed_kn: Option<f64>,
}

// ========== ROUTE OPTIMIZATION SERVICE ==========

/// Request sent to the external route-optimization service.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RouteOptimizationRequest {
    pub route: Vec<RouteLeg>,
    pub vessel: VesselSpec,
    /// Opaque optimizer configuration, passed through untouched
    #[serde(default)]
    pub constraints: serde_json::Value,
}

/// Route geometry as the optimization service expects it.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RouteLeg {
    pub segment_id: u32,
    pub lat: f64,
    pub lon: f64,
    pub dist_nm: f64,
}

/// Vessel identity and baseline speed for optimization requests.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct VesselSpec {
    pub name: String,
    pub base_speed_kn: f64,
}

/// Optimization result. The estimator consumes only `speed_profile`; the
/// fuel figures are display-only and passed through to the caller.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RouteOptimizationResponse {
    pub speed_profile: Vec<SpeedProfileEntry>,
    pub total_fuel: f64,
    pub naive_fuel: f64,
    pub savings_pct: f64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_route_point_wire_format() {
        let raw = r#"{
            "segment_id": 1,
            "lat": 12.9,
            "lon": 74.8,
            "forecast": {
                "times": [
                    {
                        "t_iso": "2025-08-21T12:00:00Z",
                        "wind_speed_ms": 8.4,
                        "wind_deg": 200,
                        "waves": { "Hs_m": 1.2, "Tp_s": 6.5 }
                    }
                ]
            }
        }"#;

        let point: RoutePoint = serde_json::from_str(raw).expect("valid route point");
        assert_eq!(point.segment_id, 1);
        let sample = &point.forecast.as_ref().unwrap().times[0];
        assert_eq!(sample.wind_deg, Some(200.0));
        assert_eq!(sample.waves.unwrap().hs_m, Some(1.2));
        assert_eq!(sample.waves.unwrap().tp_s, Some(6.5));
        assert!(!sample.mock);
    }

    #[test]
    fn test_sparse_sample_defaults() {
        let sample: TimeSample =
            serde_json::from_str(r#"{ "t_iso": "2025-08-21T12:00:00Z" }"#).unwrap();
        assert_eq!(sample.wind_speed_ms, None);
        assert_eq!(sample.wind_deg, None);
        assert!(sample.waves.is_none());

        let point: RoutePoint =
            serde_json::from_str(r#"{ "segment_id": 7, "lat": 0.0, "lon": 0.0 }"#).unwrap();
        assert!(point.forecast.is_none());
    }

    #[test]
    fn test_timestamp_parsing() {
        let sample = TimeSample {
            t_iso: "2025-08-21T12:00:00Z".to_string(),
            ..TimeSample::default()
        };
        let ts = sample.timestamp().expect("parsable timestamp");
        assert_eq!(ts.timestamp(), 1_755_777_600);

        let bad = TimeSample {
            t_iso: "not-a-time".to_string(),
            ..TimeSample::default()
        };
        assert!(bad.timestamp().is_none());
    }

    #[test]
    fn test_speed_profile_entry_optional_speed() {
        let entry: SpeedProfileEntry = serde_json::from_str(r#"{ "segment_id": 3 }"#).unwrap();
        assert_eq!(entry.speed_kn, None);

        let entry: SpeedProfileEntry =
            serde_json::from_str(r#"{ "segment_id": 3, "speed_kn": 10.5 }"#).unwrap();
        assert_eq!(entry.speed_kn, Some(10.5));
    }

    #[test]
    fn test_summary_serializes_dashboard_keys() {
        let summary = RouteSummary {
            rows: vec![SegmentResult {
                segment_id: 1,
                dist_nm: 26.3,
                hs_m: 1.2,
                tp_s: Some(6.5),
                est_kn: 12.0,
                act_kn: 11.25,
                est_hours: 2.19,
                act_hours: 2.34,
                wave_speed_ms: Some(10.15),
            }],
            total_est_days: 0.34,
            total_act_days: 0.37,
        };

        let value = serde_json::to_value(&summary).unwrap();
        assert!(value.get("totalEstDays").is_some());
        assert!(value.get("totalActDays").is_some());
        let row = &value["rows"][0];
        assert!(row.get("Hs").is_some());
        assert!(row.get("Tp").is_some());
        assert!(row.get("waveSpeed_ms").is_some());
    }

    #[test]
    fn test_optimization_response_wire_format() {
        let raw = r#"{
            "speed_profile": [ { "segment_id": 1, "speed_kn": 11.0 } ],
            "total_fuel": 42.5,
            "naive_fuel": 48.0,
            "savings_pct": 11.5
        }"#;
        let response: RouteOptimizationResponse = serde_json::from_str(raw).unwrap();
        assert_eq!(response.speed_profile.len(), 1);
        assert_eq!(response.speed_profile[0].speed_kn, Some(11.0));
    }
}
