//! Deterministic mock forecast generation.
//!
//! Mirrors what a live forecast feed would deliver: 10 days of hourly samples
//! with weather fronts rolling through every few days, a diurnal wind cycle,
//! and wave height/period coupled to the wind. Every sample seeds its own RNG
//! from the timestamp, location, and index, so a given (position, start time)
//! always yields the identical series.

use chrono::{DateTime, Duration, Timelike, Utc};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use voyage_core::{Forecast, TimeSample, WaveObs};

/// 10 days of hourly samples.
const FORECAST_HOURS: i64 = 240;

fn round1(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}

/// Generate the mock forecast series for one position.
pub fn mock_forecast(lat: f64, lon: f64, start: DateTime<Utc>) -> Forecast {
    let mut times = Vec::with_capacity(FORECAST_HOURS as usize);

    for i in 0..FORECAST_HOURS {
        let sample_time = start + Duration::hours(i);

        let time_seed = sample_time.timestamp().rem_euclid(10_000);
        let location_seed = (((lat + lon) * 1000.0) as i64).rem_euclid(1000);
        let mut rng = StdRng::seed_from_u64((time_seed + location_seed + i) as u64);

        let hour_of_day = sample_time.hour() as f64;
        let day = i / 24;

        // Weather fronts every 3 days; wind peaks around noon and midnight.
        let base_wind = 8.0 + 3.0 * (day % 3) as f64;
        let wind_variation = 2.0 * (1.0 + 0.5 * (hour_of_day - 12.0).abs() / 12.0);
        let wind_speed =
            (base_wind + rng.random_range(-wind_variation..wind_variation)).clamp(2.0, 25.0);

        // Shifting fronts drag the wind direction around over the period.
        let base_direction = 200.0 + 30.0 * (day % 5) as f64;
        let direction_variation = 40.0 + 20.0 * rng.random::<f64>();
        let wind_deg = (base_direction + direction_variation).rem_euclid(360.0);

        // Wave height tracks the wind; period grows with the height.
        let wave_base = (wind_speed * 0.15).min(4.0);
        let hs_m = (wave_base + rng.random_range(-0.3..0.8)).clamp(0.5, 6.0);
        let tp_s = (4.0 + hs_m * 0.8 + rng.random_range(-1.0..2.0)).clamp(3.0, 12.0);

        times.push(TimeSample {
            t_iso: sample_time.format("%Y-%m-%dT%H:%M:%SZ").to_string(),
            wind_speed_ms: Some(round1(wind_speed)),
            wind_deg: Some(round1(wind_deg)),
            waves: Some(WaveObs {
                hs_m: Some(round1(hs_m)),
                tp_s: Some(round1(tp_s)),
            }),
            mock: true,
        });
    }

    Forecast { times }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn fixed_start() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2025, 8, 21, 12, 0, 0).unwrap()
    }

    #[test]
    fn test_forecast_is_deterministic() {
        let first = mock_forecast(12.9, 74.8, fixed_start());
        let second = mock_forecast(12.9, 74.8, fixed_start());
        assert_eq!(
            serde_json::to_string(&first).unwrap(),
            serde_json::to_string(&second).unwrap()
        );
    }

    #[test]
    fn test_forecast_covers_ten_days_hourly() {
        let forecast = mock_forecast(12.9, 74.8, fixed_start());
        assert_eq!(forecast.times.len(), 240);
        assert_eq!(forecast.times[0].t_iso, "2025-08-21T12:00:00Z");
        assert_eq!(forecast.times[24].t_iso, "2025-08-22T12:00:00Z");
    }

    #[test]
    fn test_samples_stay_in_physical_bounds() {
        let forecast = mock_forecast(14.0, 76.0, fixed_start());
        for sample in &forecast.times {
            let wind = sample.wind_speed_ms.unwrap();
            let wind_deg = sample.wind_deg.unwrap();
            let waves = sample.waves.unwrap();
            let hs = waves.hs_m.unwrap();
            let tp = waves.tp_s.unwrap();

            assert!((2.0..=25.0).contains(&wind), "wind {wind}");
            assert!((0.0..360.0).contains(&wind_deg), "wind_deg {wind_deg}");
            assert!((0.5..=6.0).contains(&hs), "Hs {hs}");
            assert!((3.0..=12.0).contains(&tp), "Tp {tp}");
            assert!(sample.mock);
        }
    }

    #[test]
    fn test_positions_get_distinct_weather() {
        let here = mock_forecast(12.9, 74.8, fixed_start());
        let there = mock_forecast(14.0, 76.0, fixed_start());
        assert_ne!(
            serde_json::to_string(&here).unwrap(),
            serde_json::to_string(&there).unwrap()
        );
    }
}
