// tests/support/mocks/time.rs
use articles_api::application::ports::time::Clock;
use chrono::{DateTime, Duration, Utc};
use once_cell::sync::Lazy;
use std::sync::atomic::{AtomicI64, Ordering};

/// テスト用の固定タイムスタンプ
static FIXED_NOW: Lazy<DateTime<Utc>> = Lazy::new(|| {
    DateTime::parse_from_rfc3339("2025-07-10T15:02:57.123Z")
        .expect("invalid RFC3339 in tests/support/mocks/time.rs")
        .with_timezone(&Utc)
});

/// 決定論的なタイムスタンプを返す
pub fn fixed_now() -> DateTime<Utc> {
    *FIXED_NOW
}

/// 呼び出しごとに 1 分ずつ進む時計。作成順と `created_at` の順序が一致する。
#[derive(Default)]
pub struct SteppingClock {
    ticks: AtomicI64,
}

impl SteppingClock {
    /// `n` 回目 (0 始まり) の呼び出しで返される時刻
    pub fn at(n: i64) -> DateTime<Utc> {
        fixed_now() + Duration::minutes(n)
    }
}

impl Clock for SteppingClock {
    fn now(&self) -> DateTime<Utc> {
        let n = self.ticks.fetch_add(1, Ordering::SeqCst);
        Self::at(n)
    }
}
