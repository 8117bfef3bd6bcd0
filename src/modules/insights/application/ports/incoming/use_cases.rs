use async_trait::async_trait;

use crate::modules::auth::application::domain::entities::UserId;
use crate::modules::insights::application::domain::summary::SymptomSummary;

#[derive(Debug, Clone, thiserror::Error)]
pub enum GetInsightsError {
    #[error("Query failed: {0}")]
    QueryFailed(String),
}

/// Summarize the default window (the 30 days ending now) for one user.
#[async_trait]
pub trait GetInsightsUseCase: Send + Sync {
    async fn execute(&self, owner: UserId) -> Result<SymptomSummary, GetInsightsError>;
}
