//! Input file loading for the CLI binaries.

use anyhow::{Context, Result};
use std::fs;
use std::path::Path;
use voyage_core::{RoutePoint, SpeedProfileEntry};

/// Load a route JSON file: an array of route points with embedded forecasts.
pub fn load_route(path: &Path) -> Result<Vec<RoutePoint>> {
    let raw = fs::read_to_string(path)
        .with_context(|| format!("reading route file {}", path.display()))?;
    serde_json::from_str(&raw).with_context(|| format!("parsing route file {}", path.display()))
}

/// Load a speed profile JSON file, as returned by the optimization service.
///
/// No path means no profile: every segment sails the default baseline.
pub fn load_profile(path: Option<&Path>) -> Result<Vec<SpeedProfileEntry>> {
    let Some(path) = path else {
        return Ok(Vec::new());
    };
    let raw = fs::read_to_string(path)
        .with_context(|| format!("reading speed profile {}", path.display()))?;
    serde_json::from_str(&raw)
        .with_context(|| format!("parsing speed profile {}", path.display()))
}
