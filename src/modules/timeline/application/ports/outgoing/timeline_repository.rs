use async_trait::async_trait;
use chrono::{DateTime, Utc};
use serde::Serialize;
use uuid::Uuid;

use crate::modules::auth::application::domain::entities::UserId;

#[derive(Debug, Clone)]
pub struct CreateTimelineEntryData {
    pub owner: UserId,
    pub title: String,
    pub description: Option<String>,
    pub entry_type: String,
    pub date: DateTime<Utc>,
    pub doctor_name: Option<String>,
    pub location: Option<String>,
    pub attachments: Option<Vec<String>>,
}

#[derive(Debug, Clone, Default)]
pub struct UpdateTimelineEntryData {
    pub title: Option<String>,
    pub description: Option<String>,
    pub entry_type: Option<String>,
    pub date: Option<DateTime<Utc>>,
    pub doctor_name: Option<String>,
    pub location: Option<String>,
    pub attachments: Option<Vec<String>>,
}

impl UpdateTimelineEntryData {
    /// An update with no fields set is a no-op.
    pub fn is_empty(&self) -> bool {
        self.title.is_none()
            && self.description.is_none()
            && self.entry_type.is_none()
            && self.date.is_none()
            && self.doctor_name.is_none()
            && self.location.is_none()
            && self.attachments.is_none()
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct TimelineEntryResult {
    pub id: Uuid,
    pub owner: UserId,
    pub title: String,
    pub description: Option<String>,
    pub entry_type: String,
    pub date: DateTime<Utc>,
    pub doctor_name: Option<String>,
    pub location: Option<String>,
    pub attachments: Option<Vec<String>>,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone, thiserror::Error)]
pub enum TimelineRepositoryError {
    #[error("Timeline entry not found")]
    EntryNotFound,

    #[error("Database error: {0}")]
    DatabaseError(String),
}

#[async_trait]
pub trait TimelineRepository: Send + Sync {
    async fn create_entry(
        &self,
        data: CreateTimelineEntryData,
    ) -> Result<TimelineEntryResult, TimelineRepositoryError>;

    /// Full history for the owner, newest event first.
    async fn list_entries(
        &self,
        owner: UserId,
    ) -> Result<Vec<TimelineEntryResult>, TimelineRepositoryError>;

    async fn update_entry(
        &self,
        id: Uuid,
        owner: UserId,
        updates: UpdateTimelineEntryData,
    ) -> Result<TimelineEntryResult, TimelineRepositoryError>;

    async fn delete_entry(&self, id: Uuid, owner: UserId)
        -> Result<bool, TimelineRepositoryError>;
}
