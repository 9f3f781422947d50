use admin_console::bootstrap::{build_app_state_with, AppState};
use admin_console::config::Config;
use admin_console::domain::ports::TimeService;
use async_trait::async_trait;
use std::sync::Arc;
use std::time::Duration;
use time::macros::datetime;
use time::OffsetDateTime;

/// Clock pinned at 2024-01-20 12:00 UTC, the day after the last demo user signed up.
pub const FIXED_NOW: OffsetDateTime = datetime!(2024-01-20 12:00 UTC);

/// Test clock: `now` never moves and `sleep` returns immediately.
#[derive(Clone)]
pub struct FixedTimeService {
    now: OffsetDateTime,
}

impl FixedTimeService {
    pub fn new(now: OffsetDateTime) -> Self {
        Self { now }
    }
}

impl Default for FixedTimeService {
    fn default() -> Self {
        Self::new(FIXED_NOW)
    }
}

#[async_trait]
impl TimeService for FixedTimeService {
    async fn sleep(&self, _duration: Duration) {}

    fn now(&self) -> OffsetDateTime {
        self.now
    }
}

/// Seeded state on the fixed clock with default config.
pub fn setup_state() -> AppState {
    setup_state_with(Config::default())
}

pub fn setup_state_with(config: Config) -> AppState {
    build_app_state_with(&config, Arc::new(FixedTimeService::default()))
}
