use async_trait::async_trait;
use chrono::{DateTime, Utc};
use std::sync::Arc;
use uuid::Uuid;

use crate::modules::auth::application::domain::entities::UserId;
use crate::modules::timeline::application::ports::outgoing::{
    TimelineEntryResult, UpdateTimelineEntryData,
};

/// Kinds of events the timeline records.
pub const ENTRY_TYPES: [&str; 6] = ["surgery", "diagnosis", "visit", "scan", "test", "treatment"];

const MAX_TITLE_LEN: usize = 200;

#[derive(Debug, thiserror::Error)]
pub enum TimelineCommandError {
    #[error("Title cannot be empty")]
    EmptyTitle,

    #[error("Title must not exceed 200 characters")]
    TitleTooLong,

    #[error("Unknown entry type: {0}")]
    UnknownEntryType(String),
}

fn validate_title(title: &str) -> Result<(), TimelineCommandError> {
    if title.is_empty() {
        return Err(TimelineCommandError::EmptyTitle);
    }
    if title.len() > MAX_TITLE_LEN {
        return Err(TimelineCommandError::TitleTooLong);
    }
    Ok(())
}

fn validate_entry_type(entry_type: &str) -> Result<(), TimelineCommandError> {
    if !ENTRY_TYPES.contains(&entry_type) {
        return Err(TimelineCommandError::UnknownEntryType(
            entry_type.to_string(),
        ));
    }
    Ok(())
}

//
// ──────────────────────────────────────────────────────────
// Commands
// ──────────────────────────────────────────────────────────
//

#[derive(Debug, Clone)]
pub struct RecordTimelineEntryCommand {
    owner: UserId,
    title: String,
    description: Option<String>,
    entry_type: String,
    date: DateTime<Utc>,
    doctor_name: Option<String>,
    location: Option<String>,
    attachments: Option<Vec<String>>,
}

impl RecordTimelineEntryCommand {
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        owner: UserId,
        title: String,
        description: Option<String>,
        entry_type: String,
        date: DateTime<Utc>,
        doctor_name: Option<String>,
        location: Option<String>,
        attachments: Option<Vec<String>>,
    ) -> Result<Self, TimelineCommandError> {
        let title = title.trim().to_string();
        validate_title(&title)?;
        validate_entry_type(&entry_type)?;

        Ok(Self {
            owner,
            title,
            description,
            entry_type,
            date,
            doctor_name,
            location,
            attachments,
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

    pub fn entry_type(&self) -> &str {
        &self.entry_type
    }

    pub fn date(&self) -> DateTime<Utc> {
        self.date
    }

    pub fn doctor_name(&self) -> Option<&String> {
        self.doctor_name.as_ref()
    }

    pub fn location(&self) -> Option<&String> {
        self.location.as_ref()
    }

    pub fn attachments(&self) -> Option<&Vec<String>> {
        self.attachments.as_ref()
    }
}

#[derive(Debug, Clone)]
pub struct AmendTimelineEntryCommand {
    id: Uuid,
    owner: UserId,
    changes: UpdateTimelineEntryData,
}

impl AmendTimelineEntryCommand {
    pub fn new(
        id: Uuid,
        owner: UserId,
        changes: UpdateTimelineEntryData,
    ) -> Result<Self, TimelineCommandError> {
        if let Some(ref title) = changes.title {
            validate_title(title.trim())?;
        }
        if let Some(ref entry_type) = changes.entry_type {
            validate_entry_type(entry_type)?;
        }

        Ok(Self { id, owner, changes })
    }

    pub fn id(&self) -> Uuid {
        self.id
    }

    pub fn owner(&self) -> UserId {
        self.owner
    }

    pub fn into_changes(self) -> UpdateTimelineEntryData {
        self.changes
    }
}

//
// ──────────────────────────────────────────────────────────
// Use case errors and ports
// ──────────────────────────────────────────────────────────
//

#[derive(Debug, Clone, thiserror::Error)]
pub enum RecordTimelineEntryError {
    #[error("Repository error: {0}")]
    RepositoryError(String),
}

#[derive(Debug, Clone, thiserror::Error)]
pub enum GetTimelineError {
    #[error("Query failed: {0}")]
    QueryFailed(String),
}

#[derive(Debug, Clone, thiserror::Error)]
pub enum UpdateTimelineEntryError {
    #[error("Timeline entry not found")]
    EntryNotFound,

    #[error("Repository error: {0}")]
    RepositoryError(String),
}

#[derive(Debug, Clone, thiserror::Error)]
pub enum DeleteTimelineEntryError {
    #[error("Timeline entry not found")]
    EntryNotFound,

    #[error("Repository error: {0}")]
    RepositoryError(String),
}

#[async_trait]
pub trait RecordTimelineEntryUseCase: Send + Sync {
    async fn execute(
        &self,
        command: RecordTimelineEntryCommand,
    ) -> Result<TimelineEntryResult, RecordTimelineEntryError>;
}

#[async_trait]
pub trait GetTimelineUseCase: Send + Sync {
    async fn execute(&self, owner: UserId) -> Result<Vec<TimelineEntryResult>, GetTimelineError>;
}

#[async_trait]
pub trait UpdateTimelineEntryUseCase: Send + Sync {
    async fn execute(
        &self,
        command: AmendTimelineEntryCommand,
    ) -> Result<TimelineEntryResult, UpdateTimelineEntryError>;
}

#[async_trait]
pub trait DeleteTimelineEntryUseCase: Send + Sync {
    async fn execute(&self, id: Uuid, owner: UserId) -> Result<(), DeleteTimelineEntryError>;
}

#[derive(Clone)]
pub struct TimelineUseCases {
    pub record: Arc<dyn RecordTimelineEntryUseCase>,
    pub list: Arc<dyn GetTimelineUseCase>,
    pub update: Arc<dyn UpdateTimelineEntryUseCase>,
    pub delete: Arc<dyn DeleteTimelineEntryUseCase>,
}
