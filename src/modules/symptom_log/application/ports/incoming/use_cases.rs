use async_trait::async_trait;
use chrono::{DateTime, Utc};
use std::sync::Arc;
use uuid::Uuid;

use crate::modules::auth::application::domain::entities::UserId;
use crate::modules::symptom_log::application::ports::outgoing::{MedicationEntry, SymptomLogResult};

pub const MOODS: [&str; 5] = ["terrible", "bad", "okay", "good", "great"];

//
// ──────────────────────────────────────────────────────────
// Draft payload shared by create and amend
// ──────────────────────────────────────────────────────────
//

/// Client-supplied fields of a log entry. Everything is optional; the range
/// and mood constraints apply only to fields that are present.
#[derive(Debug, Clone, Default)]
pub struct SymptomLogDraft {
    pub date: Option<DateTime<Utc>>,
    pub pain_level: Option<i32>,
    pub fatigue_level: Option<i32>,
    pub energy_level: Option<i32>,
    pub mood: Option<String>,
    pub additional_symptoms: Option<Vec<String>>,
    pub medications: Option<Vec<MedicationEntry>>,
    pub notes: Option<String>,
    pub voice_note_url: Option<String>,
}

#[derive(Debug, thiserror::Error)]
pub enum SymptomLogCommandError {
    #[error("Pain level must be between 0 and 10")]
    PainLevelOutOfRange,

    #[error("Fatigue level must be between 0 and 10")]
    FatigueLevelOutOfRange,

    #[error("Energy level must be between 1 and 5")]
    EnergyLevelOutOfRange,

    #[error("Unknown mood: {0}")]
    UnknownMood(String),
}

fn validate_draft(draft: &SymptomLogDraft) -> Result<(), SymptomLogCommandError> {
    if let Some(pain) = draft.pain_level {
        if !(0..=10).contains(&pain) {
            return Err(SymptomLogCommandError::PainLevelOutOfRange);
        }
    }

    if let Some(fatigue) = draft.fatigue_level {
        if !(0..=10).contains(&fatigue) {
            return Err(SymptomLogCommandError::FatigueLevelOutOfRange);
        }
    }

    if let Some(energy) = draft.energy_level {
        if !(1..=5).contains(&energy) {
            return Err(SymptomLogCommandError::EnergyLevelOutOfRange);
        }
    }

    if let Some(ref mood) = draft.mood {
        if !MOODS.contains(&mood.as_str()) {
            return Err(SymptomLogCommandError::UnknownMood(mood.clone()));
        }
    }

    Ok(())
}

//
// ──────────────────────────────────────────────────────────
// Commands
// ──────────────────────────────────────────────────────────
//

#[derive(Debug, Clone)]
pub struct LogSymptomsCommand {
    owner: UserId,
    draft: SymptomLogDraft,
}

impl LogSymptomsCommand {
    pub fn new(owner: UserId, draft: SymptomLogDraft) -> Result<Self, SymptomLogCommandError> {
        validate_draft(&draft)?;
        Ok(Self { owner, draft })
    }

    pub fn owner(&self) -> UserId {
        self.owner
    }

    pub fn into_draft(self) -> SymptomLogDraft {
        self.draft
    }
}

#[derive(Debug, Clone)]
pub struct AmendSymptomLogCommand {
    id: Uuid,
    owner: UserId,
    draft: SymptomLogDraft,
}

impl AmendSymptomLogCommand {
    pub fn new(
        id: Uuid,
        owner: UserId,
        draft: SymptomLogDraft,
    ) -> Result<Self, SymptomLogCommandError> {
        validate_draft(&draft)?;
        Ok(Self { id, owner, draft })
    }

    pub fn id(&self) -> Uuid {
        self.id
    }

    pub fn owner(&self) -> UserId {
        self.owner
    }

    pub fn into_draft(self) -> SymptomLogDraft {
        self.draft
    }
}

//
// ──────────────────────────────────────────────────────────
// Use case errors
// ──────────────────────────────────────────────────────────
//

#[derive(Debug, Clone, thiserror::Error)]
pub enum CreateSymptomLogError {
    #[error("Repository error: {0}")]
    RepositoryError(String),
}

#[derive(Debug, Clone, thiserror::Error)]
pub enum ListSymptomLogsError {
    #[error("Query failed: {0}")]
    QueryFailed(String),
}

#[derive(Debug, Clone, thiserror::Error)]
pub enum UpdateSymptomLogError {
    #[error("Symptom log not found")]
    LogNotFound,

    #[error("Repository error: {0}")]
    RepositoryError(String),
}

#[derive(Debug, Clone, thiserror::Error)]
pub enum DeleteSymptomLogError {
    #[error("Symptom log not found")]
    LogNotFound,

    #[error("Repository error: {0}")]
    RepositoryError(String),
}

//
// ──────────────────────────────────────────────────────────
// Incoming ports
// ──────────────────────────────────────────────────────────
//

#[async_trait]
pub trait CreateSymptomLogUseCase: Send + Sync {
    async fn execute(
        &self,
        command: LogSymptomsCommand,
    ) -> Result<SymptomLogResult, CreateSymptomLogError>;
}

#[async_trait]
pub trait ListSymptomLogsUseCase: Send + Sync {
    async fn execute(
        &self,
        owner: UserId,
        limit: Option<u64>,
    ) -> Result<Vec<SymptomLogResult>, ListSymptomLogsError>;
}

#[async_trait]
pub trait UpdateSymptomLogUseCase: Send + Sync {
    async fn execute(
        &self,
        command: AmendSymptomLogCommand,
    ) -> Result<SymptomLogResult, UpdateSymptomLogError>;
}

#[async_trait]
pub trait DeleteSymptomLogUseCase: Send + Sync {
    async fn execute(&self, id: Uuid, owner: UserId) -> Result<(), DeleteSymptomLogError>;
}

/// All symptom-log entry points, bundled for app wiring.
#[derive(Clone)]
pub struct SymptomLogUseCases {
    pub create: Arc<dyn CreateSymptomLogUseCase>,
    pub list: Arc<dyn ListSymptomLogsUseCase>,
    pub update: Arc<dyn UpdateSymptomLogUseCase>,
    pub delete: Arc<dyn DeleteSymptomLogUseCase>,
}
