use async_trait::async_trait;
use uuid::Uuid;

use crate::modules::auth::application::domain::entities::UserId;
use crate::modules::timeline::application::ports::{
    incoming::use_cases::{
        AmendTimelineEntryCommand, DeleteTimelineEntryError, DeleteTimelineEntryUseCase,
        GetTimelineError, GetTimelineUseCase, RecordTimelineEntryCommand, RecordTimelineEntryError,
        RecordTimelineEntryUseCase, UpdateTimelineEntryError, UpdateTimelineEntryUseCase,
    },
    outgoing::{
        CreateTimelineEntryData, TimelineEntryResult, TimelineRepository, TimelineRepositoryError,
    },
};

#[derive(Debug, Clone)]
pub struct TimelineService<R>
where
    R: TimelineRepository + Send + Sync,
{
    repository: R,
}

impl<R> TimelineService<R>
where
    R: TimelineRepository + Send + Sync,
{
    pub fn new(repository: R) -> Self {
        Self { repository }
    }
}

#[async_trait]
impl<R> RecordTimelineEntryUseCase for TimelineService<R>
where
    R: TimelineRepository + Send + Sync,
{
    async fn execute(
        &self,
        command: RecordTimelineEntryCommand,
    ) -> Result<TimelineEntryResult, RecordTimelineEntryError> {
        self.repository
            .create_entry(CreateTimelineEntryData {
                owner: command.owner(),
                title: command.title().to_string(),
                description: command.description().cloned(),
                entry_type: command.entry_type().to_string(),
                date: command.date(),
                doctor_name: command.doctor_name().cloned(),
                location: command.location().cloned(),
                attachments: command.attachments().cloned(),
            })
            .await
            .map_err(|e| RecordTimelineEntryError::RepositoryError(e.to_string()))
    }
}

#[async_trait]
impl<R> GetTimelineUseCase for TimelineService<R>
where
    R: TimelineRepository + Send + Sync,
{
    async fn execute(&self, owner: UserId) -> Result<Vec<TimelineEntryResult>, GetTimelineError> {
        self.repository
            .list_entries(owner)
            .await
            .map_err(|e| GetTimelineError::QueryFailed(e.to_string()))
    }
}

#[async_trait]
impl<R> UpdateTimelineEntryUseCase for TimelineService<R>
where
    R: TimelineRepository + Send + Sync,
{
    async fn execute(
        &self,
        command: AmendTimelineEntryCommand,
    ) -> Result<TimelineEntryResult, UpdateTimelineEntryError> {
        let id = command.id();
        let owner = command.owner();

        self.repository
            .update_entry(id, owner, command.into_changes())
            .await
            .map_err(|e| match e {
                TimelineRepositoryError::EntryNotFound => UpdateTimelineEntryError::EntryNotFound,
                other => UpdateTimelineEntryError::RepositoryError(other.to_string()),
            })
    }
}

#[async_trait]
impl<R> DeleteTimelineEntryUseCase for TimelineService<R>
where
    R: TimelineRepository + Send + Sync,
{
    async fn execute(&self, id: Uuid, owner: UserId) -> Result<(), DeleteTimelineEntryError> {
        let deleted = self
            .repository
            .delete_entry(id, owner)
            .await
            .map_err(|e| DeleteTimelineEntryError::RepositoryError(e.to_string()))?;

        if !deleted {
            return Err(DeleteTimelineEntryError::EntryNotFound);
        }

        Ok(())
    }
}
