//! The built-in Mumbai -> Kochi demo route.

use chrono::{DateTime, Utc};
use voyage_core::RoutePoint;

use super::weather::mock_forecast;

/// Demo waypoints along the Konkan coast.
const DEMO_WAYPOINTS: [(u32, f64, f64); 4] = [
    (1, 12.9, 74.8),
    (2, 13.1, 75.2),
    (3, 13.4, 75.6),
    (4, 14.0, 76.0),
];

/// Build the demo route with a generated forecast per waypoint.
///
/// The same `start` always produces the same route, forecasts included.
pub fn demo_route(start: DateTime<Utc>) -> Vec<RoutePoint> {
    DEMO_WAYPOINTS
        .iter()
        .map(|&(segment_id, lat, lon)| RoutePoint {
            segment_id,
            lat,
            lon,
            forecast: Some(mock_forecast(lat, lon, start)),
        })
        .collect()
}
