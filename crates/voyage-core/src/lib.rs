pub mod conditions;
pub mod estimator;
pub mod geodesy;
pub mod models;
pub mod waves;

pub use conditions::{classify_sample, ConditionSeverity, ConditionThresholds};
pub use estimator::{estimate_segment, plan_route, segment_detail, EstimatorConfig};
pub use geodesy::{distance_nm, initial_bearing_deg};
pub use models::{
    Forecast, RouteLeg, RouteOptimizationRequest, RouteOptimizationResponse, RoutePoint,
    RouteSummary, SegmentDetail, SegmentResult, SpeedProfileEntry, TimeSample, VesselSpec, WaveObs,
};
pub use waves::wave_phase_speed_ms;
