use async_trait::async_trait;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::modules::auth::application::domain::entities::UserId;

/// One medication taken as part of a daily log.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MedicationEntry {
    pub name: String,
    pub dosage: String,
    pub time: String,
}

/// Insertable shape: the owner comes from the authorization gate, the id and
/// (when omitted) the date are generated by the store.
#[derive(Debug, Clone)]
pub struct CreateSymptomLogData {
    pub owner: UserId,
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

/// Partial update: `Some` sets the field, `None` leaves it unchanged.
#[derive(Debug, Clone, Default)]
pub struct UpdateSymptomLogData {
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

impl UpdateSymptomLogData {
    /// An update with no fields set is a no-op.
    pub fn is_empty(&self) -> bool {
        self.date.is_none()
            && self.pain_level.is_none()
            && self.fatigue_level.is_none()
            && self.energy_level.is_none()
            && self.mood.is_none()
            && self.additional_symptoms.is_none()
            && self.medications.is_none()
            && self.notes.is_none()
            && self.voice_note_url.is_none()
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct SymptomLogResult {
    pub id: Uuid,
    pub owner: UserId,
    pub date: DateTime<Utc>,
    pub pain_level: Option<i32>,
    pub fatigue_level: Option<i32>,
    pub energy_level: Option<i32>,
    pub mood: Option<String>,
    pub additional_symptoms: Option<Vec<String>>,
    pub medications: Option<Vec<MedicationEntry>>,
    pub notes: Option<String>,
    pub voice_note_url: Option<String>,
}

#[derive(Debug, Clone, thiserror::Error)]
pub enum SymptomLogRepositoryError {
    #[error("Symptom log not found")]
    LogNotFound,

    #[error("Database error: {0}")]
    DatabaseError(String),
}

/// Owner-scoped store for symptom logs. No method can reach a row whose
/// `user_id` differs from the given owner.
#[async_trait]
pub trait SymptomLogRepository: Send + Sync {
    async fn create_log(
        &self,
        data: CreateSymptomLogData,
    ) -> Result<SymptomLogResult, SymptomLogRepositoryError>;

    /// Most recent first, capped at `limit`.
    async fn list_logs(
        &self,
        owner: UserId,
        limit: u64,
    ) -> Result<Vec<SymptomLogResult>, SymptomLogRepositoryError>;

    /// Logs with `start <= date <= end`, most recent first.
    async fn find_by_date_range(
        &self,
        owner: UserId,
        start: DateTime<Utc>,
        end: DateTime<Utc>,
    ) -> Result<Vec<SymptomLogResult>, SymptomLogRepositoryError>;

    /// Fails with `LogNotFound` when the id does not exist for this owner,
    /// whether it is missing or belongs to someone else.
    async fn update_log(
        &self,
        id: Uuid,
        owner: UserId,
        updates: UpdateSymptomLogData,
    ) -> Result<SymptomLogResult, SymptomLogRepositoryError>;

    /// Returns whether a row was removed.
    async fn delete_log(&self, id: Uuid, owner: UserId)
        -> Result<bool, SymptomLogRepositoryError>;
}
