//! Inspect a single route point: the on-click overlay of the dashboard,
//! on the command line.

use anyhow::{bail, Result};
use clap::Parser;
use std::path::PathBuf;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};
use voyage_cli::demo::demo_route;
use voyage_cli::input::{load_profile, load_route};
use voyage_core::{segment_detail, EstimatorConfig};

/// Show speed and wave detail for one segment of a route
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

    /// Segment to inspect
    #[arg(long)]
    segment_id: u32,

    /// Emit JSON instead of the text overlay
    #[arg(long)]
    json: bool,
}

fn format_opt(value: Option<f64>, unit: &str) -> String {
    value
        .map(|v| format!("{v:.2} {unit}"))
        .unwrap_or_else(|| "-".to_string())
}

fn main() -> Result<()> {
    tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer())
        .with(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("inspect_segment=debug".parse()?),
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
        "inspecting segment {} at time index {}",
        args.segment_id,
        args.time_index
    );
    let Some(detail) = segment_detail(&route, &profile, args.time_index, args.segment_id, &config)
    else {
        bail!("segment {} is not on the route", args.segment_id);
    };

    if args.json {
        println!("{}", serde_json::to_string_pretty(&detail)?);
        return Ok(());
    }

    println!("Segment {}", detail.segment_id);
    println!("  Distance:   {:.2} nm", detail.dist_nm);
    println!("  Hs:         {:.2} m", detail.hs_m);
    println!("  Tp:         {}", format_opt(detail.tp_s, "s"));
    println!(
        "  Wave speed: {} ({})",
        format_opt(detail.wave_speed_ms, "m/s"),
        format_opt(detail.wave_speed_kn, "kn")
    );
    println!("  Estimated:  {:.2} kn", detail.est_kn);
    println!("  Actual:     {:.2} kn", detail.act_kn);

    Ok(())
}
