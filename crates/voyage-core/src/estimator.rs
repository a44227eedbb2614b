//! Per-segment speed/duration estimation and route aggregation.
//!
//! Everything here is a pure function of its inputs: the same route, speed
//! profile, time index, and config always produce the same output. Missing
//! data never fails, it defaults (see the field policies on the models).

use crate::geodesy::{distance_nm, initial_bearing_deg};
use crate::models::{
    RoutePoint, RouteSummary, SegmentDetail, SegmentResult, SpeedProfileEntry, TimeSample,
};
use crate::waves::{relative_wave_angle_deg, speed_delta, wave_phase_speed_ms, KNOTS_PER_MS};
use serde::{Deserialize, Serialize};

/// Tunable constants for the estimator.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EstimatorConfig {
    /// Baseline vessel speed when no profile override applies (knots)
    pub default_speed_kn: f64,
    /// Symmetric clamp on the fractional wave speed adjustment
    pub wave_delta_limit: f64,
    /// Floor on the wave-adjusted speed (knots)
    pub min_actual_speed_kn: f64,
    /// Floor on speed denominators when converting distance to hours
    pub min_speed_divisor_kn: f64,
}

impl Default for EstimatorConfig {
    fn default() -> Self {
        Self {
            default_speed_kn: 12.0,
            wave_delta_limit: 0.4,
            min_actual_speed_kn: 1.0,
            min_speed_divisor_kn: 0.1,
        }
    }
}

/// Unrounded per-segment figures. Presentation rounding happens at the edge;
/// aggregation always reads these.
#[derive(Debug, Clone, Copy)]
struct Estimate {
    dist_nm: f64,
    hs_m: f64,
    tp_s: Option<f64>,
    est_kn: f64,
    act_kn: f64,
    est_hours: f64,
    act_hours: f64,
    wave_speed_ms: Option<f64>,
}

fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

/// Resolve the baseline speed for a segment from the optional profile.
///
/// An entry must be present with a positive `speed_kn` to override the
/// default; zero knots counts as no override.
fn baseline_speed_kn(
    segment_id: u32,
    profile: &[SpeedProfileEntry],
    config: &EstimatorConfig,
) -> f64 {
    profile
        .iter()
        .find(|entry| entry.segment_id == segment_id)
        .and_then(|entry| entry.speed_kn)
        .filter(|speed| *speed > 0.0)
        .unwrap_or(config.default_speed_kn)
}

/// The forecast sample at `time_index`, or None when the index runs past the
/// series (or the point carries no forecast at all).
fn selected_sample(point: &RoutePoint, time_index: usize) -> Option<&TimeSample> {
    point
        .forecast
        .as_ref()
        .and_then(|forecast| forecast.times.get(time_index))
}

fn estimate(
    point: &RoutePoint,
    next: Option<&RoutePoint>,
    profile: &[SpeedProfileEntry],
    time_index: usize,
    config: &EstimatorConfig,
) -> Estimate {
    let dist_nm = next
        .map(|n| distance_nm(point.lat, point.lon, n.lat, n.lon))
        .unwrap_or(0.0);
    let est_kn = baseline_speed_kn(point.segment_id, profile, config);

    let sample = selected_sample(point, time_index);
    let hs_m = sample
        .and_then(|s| s.waves)
        .and_then(|w| w.hs_m)
        .unwrap_or(0.0);
    // A zero peak period is as unusable as a missing one.
    let tp_s = sample
        .and_then(|s| s.waves)
        .and_then(|w| w.tp_s)
        .filter(|tp| *tp > 0.0);
    let wind_deg = sample.and_then(|s| s.wind_deg);

    let travel_bearing = next
        .map(|n| initial_bearing_deg(point.lat, point.lon, n.lat, n.lon))
        .unwrap_or(0.0);
    // Unknown wind direction falls back to the travel bearing (rel = 0).
    let wave_direction = wind_deg.unwrap_or(travel_bearing);
    let rel = relative_wave_angle_deg(wave_direction, travel_bearing);
    let delta = speed_delta(hs_m, rel, config.wave_delta_limit);

    let act_kn = (est_kn * (1.0 + delta)).max(config.min_actual_speed_kn);
    let est_hours = dist_nm / est_kn.max(config.min_speed_divisor_kn);
    let act_hours = dist_nm / act_kn.max(config.min_speed_divisor_kn);
    let wave_speed_ms = tp_s.map(wave_phase_speed_ms);

    Estimate {
        dist_nm,
        hs_m,
        tp_s,
        est_kn,
        act_kn,
        est_hours,
        act_hours,
        wave_speed_ms,
    }
}

fn to_result(segment_id: u32, estimate: &Estimate) -> SegmentResult {
    SegmentResult {
        segment_id,
        dist_nm: round2(estimate.dist_nm),
        hs_m: round2(estimate.hs_m),
        tp_s: estimate.tp_s.map(round2),
        est_kn: round2(estimate.est_kn),
        act_kn: round2(estimate.act_kn),
        est_hours: round2(estimate.est_hours),
        act_hours: round2(estimate.act_hours),
        wave_speed_ms: estimate.wave_speed_ms.map(round2),
    }
}

/// Estimate a single route segment from `point` toward its optional
/// successor. A missing successor (the terminal point) yields zero distance
/// and zero hours.
pub fn estimate_segment(
    point: &RoutePoint,
    next: Option<&RoutePoint>,
    profile: &[SpeedProfileEntry],
    time_index: usize,
    config: &EstimatorConfig,
) -> SegmentResult {
    to_result(point.segment_id, &estimate(point, next, profile, time_index, config))
}

/// Fold the whole route into per-segment rows and duration totals.
///
/// An empty route yields the empty summary. The duration totals accumulate
/// unrounded hours so presentation rounding cannot compound across segments.
pub fn plan_route(
    route: &[RoutePoint],
    profile: &[SpeedProfileEntry],
    time_index: usize,
    config: &EstimatorConfig,
) -> RouteSummary {
    let mut rows = Vec::with_capacity(route.len());
    let mut total_est_hours = 0.0;
    let mut total_act_hours = 0.0;

    for (i, point) in route.iter().enumerate() {
        let estimate = estimate(point, route.get(i + 1), profile, time_index, config);
        total_est_hours += estimate.est_hours;
        total_act_hours += estimate.act_hours;
        rows.push(to_result(point.segment_id, &estimate));
    }

    RouteSummary {
        rows,
        total_est_days: round2(total_est_hours / 24.0),
        total_act_days: round2(total_act_hours / 24.0),
    }
}

/// Detail lookup for one selected route point, for on-demand inspection.
///
/// Returns `None` when `segment_id` is not on the route.
pub fn segment_detail(
    route: &[RoutePoint],
    profile: &[SpeedProfileEntry],
    time_index: usize,
    segment_id: u32,
    config: &EstimatorConfig,
) -> Option<SegmentDetail> {
    let idx = route.iter().position(|p| p.segment_id == segment_id)?;
    let estimate = estimate(&route[idx], route.get(idx + 1), profile, time_index, config);

    Some(SegmentDetail {
        segment_id,
        dist_nm: round2(estimate.dist_nm),
        hs_m: round2(estimate.hs_m),
        tp_s: estimate.tp_s.map(round2),
        est_kn: round2(estimate.est_kn),
        act_kn: round2(estimate.act_kn),
        wave_speed_ms: estimate.wave_speed_ms.map(round2),
        wave_speed_kn: estimate
            .wave_speed_ms
            .map(|speed| round2(speed * KNOTS_PER_MS)),
    })
}
