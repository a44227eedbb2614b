//! Deterministic demo voyage used when no live forecast feed is wired up.

mod route;
mod weather;

pub use route::demo_route;
pub use weather::mock_forecast;
