use crate::domain::entities::{AuditLog, Role, User};
use crate::domain::ports::time_service::TimeService;
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::RwLock;

mod audit;
mod roles;
pub mod seed;
mod users;

#[derive(Default)]
pub(crate) struct Tables {
    pub(crate) users: Vec<User>,
    pub(crate) roles: Vec<Role>,
    pub(crate) audit_logs: Vec<AuditLog>,
}

/// In-memory store standing in for the console's backend.
///
/// Every call first sleeps for the configured latency through the injected
/// [`TimeService`], so callers see the same async timing a remote store would have.
#[derive(Clone)]
pub struct Database {
    pub(crate) tables: Arc<RwLock<Tables>>,
    time: Arc<dyn TimeService>,
    latency: Duration,
}

impl Database {
    pub fn new(time: Arc<dyn TimeService>, latency: Duration) -> Self {
        Self {
            tables: Arc::new(RwLock::new(Tables::default())),
            time,
            latency,
        }
    }

    /// Store preloaded with the system roles, demo users and demo audit trail.
    pub fn seeded(time: Arc<dyn TimeService>, latency: Duration) -> Self {
        let tables = Tables {
            users: seed::demo_users(),
            roles: seed::default_roles(),
            audit_logs: seed::demo_audit_logs(),
        };
        tracing::info!(
            users = tables.users.len(),
            roles = tables.roles.len(),
            audit_logs = tables.audit_logs.len(),
            "In-memory store seeded"
        );
        Self {
            tables: Arc::new(RwLock::new(tables)),
            time,
            latency,
        }
    }

    pub(crate) async fn simulate_latency(&self) {
        if !self.latency.is_zero() {
            self.time.sleep(self.latency).await;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::ports::UserRepository;
    use async_trait::async_trait;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use time::OffsetDateTime;

    #[derive(Default)]
    struct CountingClock {
        sleeps: AtomicUsize,
    }

    #[async_trait]
    impl TimeService for CountingClock {
        async fn sleep(&self, _duration: Duration) {
            self.sleeps.fetch_add(1, Ordering::SeqCst);
        }

        fn now(&self) -> OffsetDateTime {
            OffsetDateTime::UNIX_EPOCH
        }
    }

    #[tokio::test]
    async fn test_latency_goes_through_time_service() {
        let clock = Arc::new(CountingClock::default());
        let db = Database::seeded(clock.clone(), Duration::from_millis(800));

        db.list_users().await.unwrap();
        db.get_user_by_id("1").await.unwrap();
        assert_eq!(clock.sleeps.load(Ordering::SeqCst), 2);
    }

    #[test]
    fn test_zero_latency_skips_sleep() {
        let clock = Arc::new(CountingClock::default());
        let db = Database::new(clock.clone(), Duration::ZERO);

        let users = tokio_test::block_on(db.list_users()).unwrap();
        assert!(users.is_empty());
        assert_eq!(clock.sleeps.load(Ordering::SeqCst), 0);
    }
}
