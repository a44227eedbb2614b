//! Emit the deterministic demo route as JSON.
//!
//! This is the payload the forecast collaborator would otherwise supply:
//! route points with 10-day hourly forecasts attached.

use anyhow::Result;
use chrono::{DateTime, Utc};
use clap::Parser;
use voyage_cli::demo::demo_route;

/// Print the built-in demo route (forecasts included) as JSON
#[derive(Parser, Debug)]
#[command(author, version, about)]
struct Args {
    /// Forecast start time (RFC 3339); defaults to now
    #[arg(long)]
    start: Option<DateTime<Utc>>,

    /// Pretty-print the JSON
    #[arg(long)]
    pretty: bool,
}

fn main() -> Result<()> {
    let args = Args::parse();
    let route = demo_route(args.start.unwrap_or_else(Utc::now));

    let payload = if args.pretty {
        serde_json::to_string_pretty(&route)?
    } else {
        serde_json::to_string(&route)?
    };
    println!("{payload}");

    Ok(())
}
