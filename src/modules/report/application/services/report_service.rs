use async_trait::async_trait;
use chrono::Utc;
use std::sync::Arc;

use crate::modules::appointment::application::ports::outgoing::AppointmentRepository;
use crate::modules::auth::application::ports::outgoing::UserQuery;
use crate::modules::report::application::ports::incoming::use_cases::{
    BuildReportCommand, GenerateReportError, GenerateReportUseCase, HealthReport, ReportPeriod,
    ReportUser,
};
use crate::modules::symptom_log::application::ports::outgoing::SymptomLogRepository;
use crate::modules::timeline::application::ports::outgoing::TimelineRepository;

const MAX_REPORT_LOGS: usize = 10;
const MAX_REPORT_TIMELINE_ENTRIES: usize = 5;
const MAX_REPORT_APPOINTMENTS: usize = 3;

/// Gathers the pieces of a report snapshot from the per-entity stores. Each
/// source is already owner-scoped; the gathers run concurrently.
pub struct ReportService {
    symptom_logs: Arc<dyn SymptomLogRepository>,
    timeline: Arc<dyn TimelineRepository>,
    appointments: Arc<dyn AppointmentRepository>,
    user_query: Arc<dyn UserQuery>,
}

impl ReportService {
    pub fn new(
        symptom_logs: Arc<dyn SymptomLogRepository>,
        timeline: Arc<dyn TimelineRepository>,
        appointments: Arc<dyn AppointmentRepository>,
        user_query: Arc<dyn UserQuery>,
    ) -> Self {
        Self {
            symptom_logs,
            timeline,
            appointments,
            user_query,
        }
    }
}

#[async_trait]
impl GenerateReportUseCase for ReportService {
    async fn execute(
        &self,
        command: BuildReportCommand,
    ) -> Result<HealthReport, GenerateReportError> {
        let owner = command.owner();

        let (user, mut logs, mut timeline, mut upcoming) = futures::try_join!(
            async {
                self.user_query
                    .find_by_id(owner.value())
                    .await
                    .map_err(|e| GenerateReportError::QueryFailed(e.to_string()))
            },
            async {
                self.symptom_logs
                    .find_by_date_range(owner, command.start_date(), command.end_date())
                    .await
                    .map_err(|e| GenerateReportError::QueryFailed(e.to_string()))
            },
            async {
                self.timeline
                    .list_entries(owner)
                    .await
                    .map_err(|e| GenerateReportError::QueryFailed(e.to_string()))
            },
            async {
                self.appointments
                    .find_upcoming(owner, Utc::now())
                    .await
                    .map_err(|e| GenerateReportError::QueryFailed(e.to_string()))
            },
        )?;

        let user = user.ok_or(GenerateReportError::UserNotFound)?;

        logs.truncate(MAX_REPORT_LOGS);
        timeline.truncate(MAX_REPORT_TIMELINE_ENTRIES);
        upcoming.truncate(MAX_REPORT_APPOINTMENTS);

        Ok(HealthReport {
            user: ReportUser {
                id: user.id,
                name: user.display_name().to_string(),
            },
            period: ReportPeriod {
                start_date: command.start_date(),
                end_date: command.end_date(),
            },
            symptom_logs: logs,
            medical_timeline: timeline,
            upcoming_appointments: upcoming,
        })
    }
}
