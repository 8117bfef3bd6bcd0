use async_trait::async_trait;
use uuid::Uuid;

use crate::modules::auth::application::domain::entities::UserId;
use crate::modules::symptom_log::application::ports::{
    incoming::use_cases::{
        AmendSymptomLogCommand, CreateSymptomLogError, CreateSymptomLogUseCase,
        DeleteSymptomLogError, DeleteSymptomLogUseCase, ListSymptomLogsError,
        ListSymptomLogsUseCase, LogSymptomsCommand, UpdateSymptomLogError, UpdateSymptomLogUseCase,
    },
    outgoing::{
        CreateSymptomLogData, SymptomLogRepository, SymptomLogRepositoryError, SymptomLogResult,
        UpdateSymptomLogData,
    },
};

/// Default page size for the log listing, matching the tracker screen.
const DEFAULT_LIST_LIMIT: u64 = 50;

#[derive(Debug, Clone)]
pub struct SymptomLogService<R>
where
    R: SymptomLogRepository + Send + Sync,
{
    repository: R,
}

impl<R> SymptomLogService<R>
where
    R: SymptomLogRepository + Send + Sync,
{
    pub fn new(repository: R) -> Self {
        Self { repository }
    }
}

#[async_trait]
impl<R> CreateSymptomLogUseCase for SymptomLogService<R>
where
    R: SymptomLogRepository + Send + Sync,
{
    async fn execute(
        &self,
        command: LogSymptomsCommand,
    ) -> Result<SymptomLogResult, CreateSymptomLogError> {
        let owner = command.owner();
        let draft = command.into_draft();

        self.repository
            .create_log(CreateSymptomLogData {
                owner,
                date: draft.date,
                pain_level: draft.pain_level,
                fatigue_level: draft.fatigue_level,
                energy_level: draft.energy_level,
                mood: draft.mood,
                additional_symptoms: draft.additional_symptoms,
                medications: draft.medications,
                notes: draft.notes,
                voice_note_url: draft.voice_note_url,
            })
            .await
            .map_err(|e| CreateSymptomLogError::RepositoryError(e.to_string()))
    }
}

#[async_trait]
impl<R> ListSymptomLogsUseCase for SymptomLogService<R>
where
    R: SymptomLogRepository + Send + Sync,
{
    async fn execute(
        &self,
        owner: UserId,
        limit: Option<u64>,
    ) -> Result<Vec<SymptomLogResult>, ListSymptomLogsError> {
        self.repository
            .list_logs(owner, limit.unwrap_or(DEFAULT_LIST_LIMIT))
            .await
            .map_err(|e| ListSymptomLogsError::QueryFailed(e.to_string()))
    }
}

#[async_trait]
impl<R> UpdateSymptomLogUseCase for SymptomLogService<R>
where
    R: SymptomLogRepository + Send + Sync,
{
    async fn execute(
        &self,
        command: AmendSymptomLogCommand,
    ) -> Result<SymptomLogResult, UpdateSymptomLogError> {
        let id = command.id();
        let owner = command.owner();
        let draft = command.into_draft();

        self.repository
            .update_log(
                id,
                owner,
                UpdateSymptomLogData {
                    date: draft.date,
                    pain_level: draft.pain_level,
                    fatigue_level: draft.fatigue_level,
                    energy_level: draft.energy_level,
                    mood: draft.mood,
                    additional_symptoms: draft.additional_symptoms,
                    medications: draft.medications,
                    notes: draft.notes,
                    voice_note_url: draft.voice_note_url,
                },
            )
            .await
            .map_err(|e| match e {
                SymptomLogRepositoryError::LogNotFound => UpdateSymptomLogError::LogNotFound,
                other => UpdateSymptomLogError::RepositoryError(other.to_string()),
            })
    }
}

#[async_trait]
impl<R> DeleteSymptomLogUseCase for SymptomLogService<R>
where
    R: SymptomLogRepository + Send + Sync,
{
    async fn execute(&self, id: Uuid, owner: UserId) -> Result<(), DeleteSymptomLogError> {
        let deleted = self
            .repository
            .delete_log(id, owner)
            .await
            .map_err(|e| DeleteSymptomLogError::RepositoryError(e.to_string()))?;

        if !deleted {
            return Err(DeleteSymptomLogError::LogNotFound);
        }

        Ok(())
    }
}
