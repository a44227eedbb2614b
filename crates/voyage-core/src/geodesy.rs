//! Spherical geodesy for route distance and bearing calculations.

/// Mean Earth radius in meters, used by the haversine formula.
pub const EARTH_RADIUS_M: f64 = 6_371_000.0;

/// Meters per international nautical mile.
pub const METERS_PER_NM: f64 = 1852.0;

/// Calculate distance between two points in meters using the Haversine formula.
///
/// This is the standard formula for calculating great-circle distance
/// between two points on a sphere given their latitudes and longitudes.
///
/// # Arguments
/// * `lat1`, `lon1` - First point coordinates in decimal degrees
/// * `lat2`, `lon2` - Second point coordinates in decimal degrees
///
/// # Returns
/// Distance in meters
pub fn haversine_distance_m(lat1: f64, lon1: f64, lat2: f64, lon2: f64) -> f64 {
    let phi1 = lat1.to_radians();
    let phi2 = lat2.to_radians();
    let dphi = (lat2 - lat1).to_radians();
    let dlambda = (lon2 - lon1).to_radians();
    let a = (dphi / 2.0).sin().powi(2) + phi1.cos() * phi2.cos() * (dlambda / 2.0).sin().powi(2);
    2.0 * EARTH_RADIUS_M * a.sqrt().atan2((1.0 - a).sqrt())
}

/// Great-circle distance between two points in nautical miles.
///
/// Coordinates outside physical lat/lon bounds are accepted and produce
/// mathematically defined (if not meaningful) output.
pub fn distance_nm(lat1: f64, lon1: f64, lat2: f64, lon2: f64) -> f64 {
    haversine_distance_m(lat1, lon1, lat2, lon2) / METERS_PER_NM
}

/// Initial great-circle bearing from point 1 toward point 2.
///
/// Returns degrees in [0, 360), 0 = north. For coincident points the
/// result is 0.
pub fn initial_bearing_deg(lat1: f64, lon1: f64, lat2: f64, lon2: f64) -> f64 {
    let phi1 = lat1.to_radians();
    let phi2 = lat2.to_radians();
    let dlambda = (lon2 - lon1).to_radians();

    let y = dlambda.sin() * phi2.cos();
    let x = phi1.cos() * phi2.sin() - phi1.sin() * phi2.cos() * dlambda.cos();

    y.atan2(x).to_degrees().rem_euclid(360.0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_haversine_known_distance() {
        // 1 degree of latitude is ~111km, or ~60nm
        let dist_m = haversine_distance_m(0.0, 0.0, 1.0, 0.0);
        assert!((dist_m - 111_194.0).abs() < 100.0);

        let dist_nm = distance_nm(0.0, 0.0, 1.0, 0.0);
        assert!((dist_nm - 60.04).abs() < 0.06);
    }

    #[test]
    fn test_distance_same_point() {
        let dist = distance_nm(12.9, 74.8, 12.9, 74.8);
        assert!(dist < 1e-9);
    }

    #[test]
    fn test_distance_symmetric() {
        let pairs = [
            ((12.9, 74.8), (13.1, 75.2)),
            ((0.0, 0.0), (-45.0, 170.0)),
            ((60.0, -30.0), (59.0, -31.5)),
        ];
        for ((lat1, lon1), (lat2, lon2)) in pairs {
            let forward = distance_nm(lat1, lon1, lat2, lon2);
            let backward = distance_nm(lat2, lon2, lat1, lon1);
            assert!(
                (forward - backward).abs() < 1e-9,
                "expected symmetric distance, got {forward} vs {backward}"
            );
        }
    }

    #[test]
    fn test_bearing_in_range() {
        let pairs = [
            ((12.9, 74.8), (13.1, 75.2)),
            ((13.1, 75.2), (12.9, 74.8)),
            ((0.0, 0.0), (0.0, -1.0)),
            ((10.0, 10.0), (-10.0, 10.0)),
        ];
        for ((lat1, lon1), (lat2, lon2)) in pairs {
            let bearing = initial_bearing_deg(lat1, lon1, lat2, lon2);
            assert!(
                (0.0..360.0).contains(&bearing),
                "bearing {bearing} out of [0, 360)"
            );
        }
    }

    #[test]
    fn test_bearing_cardinal_directions() {
        assert!((initial_bearing_deg(0.0, 0.0, 1.0, 0.0) - 0.0).abs() < 1e-9);
        assert!((initial_bearing_deg(0.0, 0.0, 0.0, 1.0) - 90.0).abs() < 1e-9);
        assert!((initial_bearing_deg(1.0, 0.0, 0.0, 0.0) - 180.0).abs() < 1e-9);
        assert!((initial_bearing_deg(0.0, 1.0, 0.0, 0.0) - 270.0).abs() < 1e-9);
    }

    #[test]
    fn test_demo_leg_distance() {
        // First leg of the Mumbai->Kochi demo route
        let dist = distance_nm(12.9, 74.8, 13.1, 75.2);
        assert!(
            (dist - 26.3).abs() < 0.5,
            "expected ~26.3nm for the first demo leg, got {dist}"
        );
    }
}
