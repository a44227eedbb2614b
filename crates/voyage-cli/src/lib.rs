//! Voyage CLI - Command line tools for the voyage weather engine.
//!
//! Binaries:
//! - plan_voyage: per-segment speed/duration table for a route
//! - inspect_segment: detail overlay for a single route point
//! - export_demo_route: deterministic demo route payload

pub mod demo;
pub mod input;
