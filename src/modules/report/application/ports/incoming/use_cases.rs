use async_trait::async_trait;
use chrono::{DateTime, Utc};
use serde::Serialize;
use uuid::Uuid;

use crate::modules::appointment::application::ports::outgoing::AppointmentResult;
use crate::modules::auth::application::domain::entities::UserId;
use crate::modules::symptom_log::application::ports::outgoing::SymptomLogResult;
use crate::modules::timeline::application::ports::outgoing::TimelineEntryResult;

//
// ──────────────────────────────────────────────────────────
// Command
// ──────────────────────────────────────────────────────────
//

#[derive(Debug, Clone)]
pub struct BuildReportCommand {
    owner: UserId,
    start_date: DateTime<Utc>,
    end_date: DateTime<Utc>,
}

#[derive(Debug, thiserror::Error)]
pub enum BuildReportCommandError {
    #[error("Report period end must not precede its start")]
    InvalidPeriod,
}

impl BuildReportCommand {
    pub fn new(
        owner: UserId,
        start_date: DateTime<Utc>,
        end_date: DateTime<Utc>,
    ) -> Result<Self, BuildReportCommandError> {
        if end_date < start_date {
            return Err(BuildReportCommandError::InvalidPeriod);
        }

        Ok(Self {
            owner,
            start_date,
            end_date,
        })
    }

    pub fn owner(&self) -> UserId {
        self.owner
    }

    pub fn start_date(&self) -> DateTime<Utc> {
        self.start_date
    }

    pub fn end_date(&self) -> DateTime<Utc> {
        self.end_date
    }
}

//
// ──────────────────────────────────────────────────────────
// Result DTO
// ──────────────────────────────────────────────────────────
//

#[derive(Debug, Clone, Serialize)]
pub struct ReportUser {
    pub id: Uuid,
    pub name: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct ReportPeriod {
    pub start_date: DateTime<Utc>,
    pub end_date: DateTime<Utc>,
}

/// Denormalized snapshot handed to the (external) document renderer: recent
/// logs in the window, recent history, and what is coming up next.
#[derive(Debug, Clone, Serialize)]
pub struct HealthReport {
    pub user: ReportUser,
    pub period: ReportPeriod,
    pub symptom_logs: Vec<SymptomLogResult>,
    pub medical_timeline: Vec<TimelineEntryResult>,
    pub upcoming_appointments: Vec<AppointmentResult>,
}

#[derive(Debug, Clone, thiserror::Error)]
pub enum GenerateReportError {
    #[error("User not found")]
    UserNotFound,

    #[error("Query failed: {0}")]
    QueryFailed(String),
}

#[async_trait]
pub trait GenerateReportUseCase: Send + Sync {
    async fn execute(&self, command: BuildReportCommand)
        -> Result<HealthReport, GenerateReportError>;
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Duration;

    #[test]
    fn command_rejects_inverted_period() {
        let now = Utc::now();
        let result =
            BuildReportCommand::new(UserId::from(Uuid::new_v4()), now, now - Duration::days(1));

        assert!(matches!(result, Err(BuildReportCommandError::InvalidPeriod)));
    }

    #[test]
    fn command_accepts_single_instant_period() {
        let now = Utc::now();
        let result = BuildReportCommand::new(UserId::from(Uuid::new_v4()), now, now);

        assert!(result.is_ok());
    }
}
