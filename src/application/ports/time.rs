// src/application/ports/time.rs
use chrono::{DateTime, Utc};

/// Source of creation timestamps. Implementations return UTC instants already
/// truncated to milliseconds, matching what the API serializes.
pub trait Clock: Send + Sync {
    fn now(&self) -> DateTime<Utc>;
}
