//! Print the per-segment speed and duration table for a route.
//!
//! Reads a route JSON file (an array of route points with embedded
//! forecasts) or generates the built-in demo voyage, then runs the
//! estimator at the selected forecast time index.

use anyhow::{bail, Result};
use clap::Parser;
use std::path::PathBuf;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};
use voyage_cli::demo::demo_route;
use voyage_cli::input::{load_profile, load_route};
use voyage_core::{plan_route, EstimatorConfig};

/// Estimate segment speeds and route duration for a maritime route
#[derive(Parser, Debug)]
#[command(author, version, about)]
struct Args {
    /// Route JSON file (array of route points with forecasts)
    #[arg(long, conflicts_with = "demo")]
    route: Option<PathBuf>,

    /// Use the built-in demo voyage instead of a route file
    #[arg(long)]
    demo: bool,

    /// Speed profile JSON from the route-optimization service
    #[arg(long)]
    speed_profile: Option<PathBuf>,

    /// Forecast time index shared by all segments
    #[arg(long, default_value_t = 0)]
    time_index: usize,

    /// Default baseline speed in knots
    #[arg(long, default_value_t = 12.0)]
    baseline_kn: f64,

    /// Emit the raw route summary as JSON instead of a table
    #[arg(long)]
    json: bool,
}

fn main() -> Result<()> {
    tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer())
        .with(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("plan_voyage=debug".parse()?),
        )
        .init();

    let args = Args::parse();

    let route = if args.demo {
        demo_route(chrono::Utc::now())
    } else if let Some(path) = args.route.as_deref() {
        load_route(path)?
    } else {
        bail!("either --route <FILE> or --demo is required");
    };
    let profile = load_profile(args.speed_profile.as_deref())?;

    let config = EstimatorConfig {
        default_speed_kn: args.baseline_kn,
        ..EstimatorConfig::default()
    };

    tracing::debug!(
        "planning {} points at time index {}",
        route.len(),
        args.time_index
    );
    let summary = plan_route(&route, &profile, args.time_index, &config);

    if args.json {
        println!("{}", serde_json::to_string_pretty(&summary)?);
        return Ok(());
    }

    println!(
        "{:>4} {:>9} {:>7} {:>7} {:>8} {:>8} {:>8} {:>8}",
        "Seg", "Dist(nm)", "Hs(m)", "Tp(s)", "Est(kn)", "Act(kn)", "Est(h)", "Act(h)"
    );
    for row in &summary.rows {
        let tp = row
            .tp_s
            .map(|tp| format!("{tp:.2}"))
            .unwrap_or_else(|| "-".to_string());
        println!(
            "{:>4} {:>9.2} {:>7.2} {:>7} {:>8.2} {:>8.2} {:>8.2} {:>8.2}",
            row.segment_id,
            row.dist_nm,
            row.hs_m,
            tp,
            row.est_kn,
            row.act_kn,
            row.est_hours,
            row.act_hours
        );
    }
    println!();
    println!("Estimated route duration: {} days", summary.total_est_days);
    println!("Actual (wave-adjusted):   {} days", summary.total_act_days);

    Ok(())
}
