use crate::application::auth_context::AuthContext;
use crate::domain::entities::{AuditLog, Role, User, UserStatus};
use crate::domain::errors::DomainResult;
use crate::domain::permissions::catalog::REPORTS;
use crate::domain::permissions::ModuleAction;
use crate::domain::ports::{AuditRepository, RoleRepository, TimeService, UserRepository};
use serde::Serialize;
use std::sync::Arc;
use time::{Duration, Month, OffsetDateTime};

/// Months covered by the activity chart.
pub const REPORT_MONTHS: usize = 5;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UserStats {
    pub total: usize,
    pub active: usize,
    pub inactive: usize,
    pub pending: usize,
    pub suspended: usize,
    pub new_this_month: usize,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RoleStats {
    pub total: usize,
    pub system: usize,
    pub custom: usize,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ActivityStats {
    pub today: usize,
    pub this_week: usize,
    pub this_month: usize,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct StatusSlice {
    pub name: String,
    pub value: usize,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RoleSlice {
    pub name: String,
    pub count: usize,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MonthlyActivity {
    pub month: String,
    /// Users created up to the end of the month.
    pub users: usize,
    /// Audit entries recorded during the month.
    pub activity: usize,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ReportsData {
    pub user_stats: UserStats,
    pub role_stats: RoleStats,
    pub activity_stats: ActivityStats,
    pub status_distribution: Vec<StatusSlice>,
    pub role_distribution: Vec<RoleSlice>,
    pub monthly_activity: Vec<MonthlyActivity>,
}

fn same_month(a: OffsetDateTime, b: OffsetDateTime) -> bool {
    a.year() == b.year() && a.month() == b.month()
}

fn count_status(users: &[User], status: UserStatus) -> usize {
    users.iter().filter(|u| u.status == status).count()
}

pub fn user_stats(users: &[User], now: OffsetDateTime) -> UserStats {
    UserStats {
        total: users.len(),
        active: count_status(users, UserStatus::Active),
        inactive: count_status(users, UserStatus::Inactive),
        pending: count_status(users, UserStatus::Pending),
        suspended: count_status(users, UserStatus::Suspended),
        new_this_month: users
            .iter()
            .filter(|u| same_month(u.meta.created_at, now))
            .count(),
    }
}

pub fn role_stats(roles: &[Role]) -> RoleStats {
    let system = roles.iter().filter(|r| r.is_system_role).count();
    RoleStats {
        total: roles.len(),
        system,
        custom: roles.len() - system,
    }
}

/// Today is the calendar date of `now`; this week is the trailing seven days.
pub fn activity_stats(logs: &[AuditLog], now: OffsetDateTime) -> ActivityStats {
    let week_start = now - Duration::days(7);
    ActivityStats {
        today: logs.iter().filter(|l| l.timestamp.date() == now.date()).count(),
        this_week: logs
            .iter()
            .filter(|l| l.timestamp >= week_start && l.timestamp <= now)
            .count(),
        this_month: logs.iter().filter(|l| same_month(l.timestamp, now)).count(),
    }
}

/// Every status in display order, zero counts included.
pub fn status_distribution(users: &[User]) -> Vec<StatusSlice> {
    UserStatus::ALL
        .iter()
        .map(|status| StatusSlice {
            name: status.label().to_string(),
            value: count_status(users, *status),
        })
        .collect()
}

/// One slice per role in listing order; users pointing at a missing role are not counted.
pub fn role_distribution(roles: &[Role], users: &[User]) -> Vec<RoleSlice> {
    roles
        .iter()
        .map(|role| RoleSlice {
            name: role.name.clone(),
            count: users.iter().filter(|u| u.role_id == role.id).count(),
        })
        .collect()
}

/// The last `months` calendar months ending with the month of `now`, oldest first.
pub fn monthly_activity(
    users: &[User],
    logs: &[AuditLog],
    now: OffsetDateTime,
    months: usize,
) -> Vec<MonthlyActivity> {
    let mut periods: Vec<(i32, Month)> = Vec::with_capacity(months);
    let (mut year, mut month) = (now.year(), now.month());
    for _ in 0..months {
        periods.push((year, month));
        if month == Month::January {
            year -= 1;
        }
        month = month.previous();
    }
    periods.reverse();

    periods
        .into_iter()
        .map(|(year, month)| {
            let in_month = |ts: OffsetDateTime| ts.year() == year && ts.month() == month;
            let up_to = |ts: OffsetDateTime| (ts.year(), ts.month() as u8) <= (year, month as u8);
            let label = month.to_string();
            MonthlyActivity {
                month: label.chars().take(3).collect(),
                users: users.iter().filter(|u| up_to(u.meta.created_at)).count(),
                activity: logs.iter().filter(|l| in_month(l.timestamp)).count(),
            }
        })
        .collect()
}

#[derive(Clone)]
pub struct ReportService {
    users: Arc<dyn UserRepository>,
    roles: Arc<dyn RoleRepository>,
    audit: Arc<dyn AuditRepository>,
    time: Arc<dyn TimeService>,
}

impl ReportService {
    pub fn new(
        users: Arc<dyn UserRepository>,
        roles: Arc<dyn RoleRepository>,
        audit: Arc<dyn AuditRepository>,
        time: Arc<dyn TimeService>,
    ) -> Self {
        Self {
            users,
            roles,
            audit,
            time,
        }
    }

    pub async fn reports_data(&self, ctx: &AuthContext) -> DomainResult<ReportsData> {
        ctx.require(REPORTS, ModuleAction::View)?;

        let users = self.users.list_users().await?;
        let roles = self.roles.list_roles().await?;
        let logs = self.audit.list_audit_logs().await?;
        let now = self.time.now();

        tracing::debug!(
            users = users.len(),
            roles = roles.len(),
            audit_logs = logs.len(),
            "Computing reports"
        );

        Ok(ReportsData {
            user_stats: user_stats(&users, now),
            role_stats: role_stats(&roles),
            activity_stats: activity_stats(&logs, now),
            status_distribution: status_distribution(&users),
            role_distribution: role_distribution(&roles, &users),
            monthly_activity: monthly_activity(&users, &logs, now, REPORT_MONTHS),
        })
    }

    /// Pretty-printed JSON of the current report.
    pub async fn export_json(&self, ctx: &AuthContext) -> DomainResult<String> {
        let data = self.reports_data(ctx).await?;
        let json = serde_json::to_string_pretty(&data)?;
        tracing::info!(bytes = json.len(), "Report exported");
        Ok(json)
    }
}
