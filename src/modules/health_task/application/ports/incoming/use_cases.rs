use async_trait::async_trait;
use chrono::{DateTime, Utc};
use std::sync::Arc;
use uuid::Uuid;

use crate::modules::auth::application::domain::entities::UserId;
use crate::modules::health_task::application::ports::outgoing::{
    HealthTaskResult, UpdateHealthTaskData,
};

pub const PRIORITIES: [&str; 3] = ["low", "medium", "high"];

pub const DEFAULT_PRIORITY: &str = "medium";

const MAX_TITLE_LEN: usize = 200;

#[derive(Debug, thiserror::Error)]
pub enum HealthTaskCommandError {
    #[error("Title cannot be empty")]
    EmptyTitle,

    #[error("Title must not exceed 200 characters")]
    TitleTooLong,

    #[error("Unknown priority: {0}")]
    UnknownPriority(String),
}

fn validate_title(title: &str) -> Result<(), HealthTaskCommandError> {
    if title.is_empty() {
        return Err(HealthTaskCommandError::EmptyTitle);
    }
    if title.len() > MAX_TITLE_LEN {
        return Err(HealthTaskCommandError::TitleTooLong);
    }
    Ok(())
}

fn validate_priority(priority: &str) -> Result<(), HealthTaskCommandError> {
    if !PRIORITIES.contains(&priority) {
        return Err(HealthTaskCommandError::UnknownPriority(priority.to_string()));
    }
    Ok(())
}

//
// ──────────────────────────────────────────────────────────
// Commands
// ──────────────────────────────────────────────────────────
//

#[derive(Debug, Clone)]
pub struct AddHealthTaskCommand {
    owner: UserId,
    title: String,
    description: Option<String>,
    due_date: Option<DateTime<Utc>>,
    snoozed_until: Option<DateTime<Utc>>,
    priority: String,
    category: Option<String>,
}

impl AddHealthTaskCommand {
    pub fn new(
        owner: UserId,
        title: String,
        description: Option<String>,
        due_date: Option<DateTime<Utc>>,
        snoozed_until: Option<DateTime<Utc>>,
        priority: Option<String>,
        category: Option<String>,
    ) -> Result<Self, HealthTaskCommandError> {
        let title = title.trim().to_string();
        validate_title(&title)?;

        let priority = priority.unwrap_or_else(|| DEFAULT_PRIORITY.to_string());
        validate_priority(&priority)?;

        Ok(Self {
            owner,
            title,
            description,
            due_date,
            snoozed_until,
            priority,
            category,
        })
    }

    pub fn owner(&self) -> UserId {
        self.owner
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn description(&self) -> Option<&String> {
        self.description.as_ref()
    }

    pub fn due_date(&self) -> Option<DateTime<Utc>> {
        self.due_date
    }

    pub fn snoozed_until(&self) -> Option<DateTime<Utc>> {
        self.snoozed_until
    }

    pub fn priority(&self) -> &str {
        &self.priority
    }

    pub fn category(&self) -> Option<&String> {
        self.category.as_ref()
    }
}

#[derive(Debug, Clone)]
pub struct AmendHealthTaskCommand {
    id: Uuid,
    owner: UserId,
    changes: UpdateHealthTaskData,
}

impl AmendHealthTaskCommand {
    pub fn new(
        id: Uuid,
        owner: UserId,
        changes: UpdateHealthTaskData,
    ) -> Result<Self, HealthTaskCommandError> {
        if let Some(ref title) = changes.title {
            validate_title(title.trim())?;
        }
        if let Some(ref priority) = changes.priority {
            validate_priority(priority)?;
        }

        Ok(Self { id, owner, changes })
    }

    pub fn id(&self) -> Uuid {
        self.id
    }

    pub fn owner(&self) -> UserId {
        self.owner
    }

    pub fn into_changes(self) -> UpdateHealthTaskData {
        self.changes
    }
}

//
// ──────────────────────────────────────────────────────────
// Use case errors and ports
// ──────────────────────────────────────────────────────────
//

#[derive(Debug, Clone, thiserror::Error)]
pub enum AddHealthTaskError {
    #[error("Repository error: {0}")]
    RepositoryError(String),
}

#[derive(Debug, Clone, thiserror::Error)]
pub enum ListHealthTasksError {
    #[error("Query failed: {0}")]
    QueryFailed(String),
}

#[derive(Debug, Clone, thiserror::Error)]
pub enum UpdateHealthTaskError {
    #[error("Health task not found")]
    TaskNotFound,

    #[error("Repository error: {0}")]
    RepositoryError(String),
}

#[derive(Debug, Clone, thiserror::Error)]
pub enum DeleteHealthTaskError {
    #[error("Health task not found")]
    TaskNotFound,

    #[error("Repository error: {0}")]
    RepositoryError(String),
}

#[async_trait]
pub trait AddHealthTaskUseCase: Send + Sync {
    async fn execute(
        &self,
        command: AddHealthTaskCommand,
    ) -> Result<HealthTaskResult, AddHealthTaskError>;
}

#[async_trait]
pub trait ListHealthTasksUseCase: Send + Sync {
    async fn execute(&self, owner: UserId) -> Result<Vec<HealthTaskResult>, ListHealthTasksError>;
}

#[async_trait]
pub trait UpdateHealthTaskUseCase: Send + Sync {
    async fn execute(
        &self,
        command: AmendHealthTaskCommand,
    ) -> Result<HealthTaskResult, UpdateHealthTaskError>;
}

#[async_trait]
pub trait DeleteHealthTaskUseCase: Send + Sync {
    async fn execute(&self, id: Uuid, owner: UserId) -> Result<(), DeleteHealthTaskError>;
}

#[derive(Clone)]
pub struct HealthTaskUseCases {
    pub add: Arc<dyn AddHealthTaskUseCase>,
    pub list: Arc<dyn ListHealthTasksUseCase>,
    pub update: Arc<dyn UpdateHealthTaskUseCase>,
    pub delete: Arc<dyn DeleteHealthTaskUseCase>,
}
