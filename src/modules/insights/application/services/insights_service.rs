use async_trait::async_trait;
use chrono::{Duration, Utc};

use crate::modules::auth::application::domain::entities::UserId;
use crate::modules::insights::application::domain::summary::{SummaryPeriod, SymptomSummary};
use crate::modules::insights::application::ports::incoming::use_cases::{
    GetInsightsError, GetInsightsUseCase,
};
use crate::modules::symptom_log::application::ports::outgoing::SymptomLogRepository;

/// Window length for the dashboard summary.
const WINDOW_DAYS: i64 = 30;

#[derive(Debug, Clone)]
pub struct InsightsService<R>
where
    R: SymptomLogRepository + Send + Sync,
{
    symptom_logs: R,
}

impl<R> InsightsService<R>
where
    R: SymptomLogRepository + Send + Sync,
{
    pub fn new(symptom_logs: R) -> Self {
        Self { symptom_logs }
    }
}

#[async_trait]
impl<R> GetInsightsUseCase for InsightsService<R>
where
    R: SymptomLogRepository + Send + Sync,
{
    async fn execute(&self, owner: UserId) -> Result<SymptomSummary, GetInsightsError> {
        let end_date = Utc::now();
        let start_date = end_date - Duration::days(WINDOW_DAYS);

        let logs = self
            .symptom_logs
            .find_by_date_range(owner, start_date, end_date)
            .await
            .map_err(|e| GetInsightsError::QueryFailed(e.to_string()))?;

        let period = SummaryPeriod {
            start_date,
            end_date,
        };

        Ok(SymptomSummary::from_logs(period, &logs))
    }
}
