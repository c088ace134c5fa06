// src/presentation/http/middleware/rate_limit.rs
use ::governor::middleware::NoOpMiddleware;
use axum::body::Body;
use tower_governor::{
    GovernorLayer, governor::GovernorConfigBuilder, key_extractor::SmartIpKeyExtractor,
};

pub const REQUESTS_PER_SECOND: u64 = 10;
pub const BURST_SIZE: u32 = 20;

/// Per-client-IP limiter. Returns `None` when the quota cannot be configured.
pub fn rate_limit_layer(
    per_second: u64,
    burst_size: u32,
) -> Option<GovernorLayer<SmartIpKeyExtractor, NoOpMiddleware, Body>> {
    let mut builder = GovernorConfigBuilder::default();
    builder.per_second(per_second);
    builder.burst_size(burst_size);
    let config = builder.key_extractor(SmartIpKeyExtractor).finish()?;

    Some(GovernorLayer::new(config))
}
