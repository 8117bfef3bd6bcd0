use async_trait::async_trait;
use chrono::{DateTime, Utc};
use serde::Serialize;
use uuid::Uuid;

use crate::modules::auth::application::domain::entities::UserId;

#[derive(Debug, Clone)]
pub struct CreateHealthTaskData {
    pub owner: UserId,
    pub title: String,
    pub description: Option<String>,
    pub due_date: Option<DateTime<Utc>>,
    pub snoozed_until: Option<DateTime<Utc>>,
    pub priority: String,
    pub category: Option<String>,
}

#[derive(Debug, Clone, Default)]
pub struct UpdateHealthTaskData {
    pub title: Option<String>,
    pub description: Option<String>,
    pub due_date: Option<DateTime<Utc>>,
    pub completed: Option<bool>,
    pub snoozed_until: Option<DateTime<Utc>>,
    pub priority: Option<String>,
    pub category: Option<String>,
}

impl UpdateHealthTaskData {
    /// An update with no fields set is a no-op.
    pub fn is_empty(&self) -> bool {
        self.title.is_none()
            && self.description.is_none()
            && self.due_date.is_none()
            && self.completed.is_none()
            && self.snoozed_until.is_none()
            && self.priority.is_none()
            && self.category.is_none()
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct HealthTaskResult {
    pub id: Uuid,
    pub owner: UserId,
    pub title: String,
    pub description: Option<String>,
    pub due_date: Option<DateTime<Utc>>,
    pub completed: bool,
    pub snoozed_until: Option<DateTime<Utc>>,
    pub priority: String,
    pub category: Option<String>,
}

#[derive(Debug, Clone, thiserror::Error)]
pub enum HealthTaskRepositoryError {
    #[error("Health task not found")]
    TaskNotFound,

    #[error("Database error: {0}")]
    DatabaseError(String),
}

#[async_trait]
pub trait HealthTaskRepository: Send + Sync {
    async fn create_task(
        &self,
        data: CreateHealthTaskData,
    ) -> Result<HealthTaskResult, HealthTaskRepositoryError>;

    /// Ordered by due date, earliest first.
    async fn list_tasks(
        &self,
        owner: UserId,
    ) -> Result<Vec<HealthTaskResult>, HealthTaskRepositoryError>;

    async fn update_task(
        &self,
        id: Uuid,
        owner: UserId,
        updates: UpdateHealthTaskData,
    ) -> Result<HealthTaskResult, HealthTaskRepositoryError>;

    async fn delete_task(&self, id: Uuid, owner: UserId)
        -> Result<bool, HealthTaskRepositoryError>;
}
