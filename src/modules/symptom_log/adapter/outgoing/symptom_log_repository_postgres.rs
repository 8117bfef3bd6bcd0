use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter, QueryOrder,
    QuerySelect, Set,
};
use std::sync::Arc;
use uuid::Uuid;

use crate::modules::auth::application::domain::entities::UserId;
use crate::modules::symptom_log::application::ports::outgoing::{
    CreateSymptomLogData, MedicationEntry, SymptomLogRepository, SymptomLogRepositoryError,
    SymptomLogResult, UpdateSymptomLogData,
};

use super::sea_orm_entity::{
    ActiveModel as LogActiveModel, Column, Entity as SymptomLogs, Model as LogModel,
};

#[derive(Debug, Clone)]
pub struct SymptomLogRepositoryPostgres {
    db: Arc<DatabaseConnection>,
}

impl SymptomLogRepositoryPostgres {
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }
}

fn encode_symptoms(
    symptoms: Option<Vec<String>>,
) -> Result<Option<sea_orm::JsonValue>, SymptomLogRepositoryError> {
    symptoms
        .map(|s| serde_json::to_value(s))
        .transpose()
        .map_err(|e| SymptomLogRepositoryError::DatabaseError(e.to_string()))
}

fn encode_medications(
    medications: Option<Vec<MedicationEntry>>,
) -> Result<Option<sea_orm::JsonValue>, SymptomLogRepositoryError> {
    medications
        .map(|m| serde_json::to_value(m))
        .transpose()
        .map_err(|e| SymptomLogRepositoryError::DatabaseError(e.to_string()))
}

#[async_trait]
impl SymptomLogRepository for SymptomLogRepositoryPostgres {
    async fn create_log(
        &self,
        data: CreateSymptomLogData,
    ) -> Result<SymptomLogResult, SymptomLogRepositoryError> {
        let active = LogActiveModel {
            id: Set(Uuid::new_v4()),
            user_id: Set(data.owner.into()),
            date: Set(data.date.unwrap_or_else(Utc::now).into()),
            pain_level: Set(data.pain_level),
            fatigue_level: Set(data.fatigue_level),
            energy_level: Set(data.energy_level),
            mood: Set(data.mood),
            additional_symptoms: Set(encode_symptoms(data.additional_symptoms)?),
            medications: Set(encode_medications(data.medications)?),
            notes: Set(data.notes),
            voice_note_url: Set(data.voice_note_url),
        };

        let inserted: LogModel = active
            .insert(&*self.db)
            .await
            .map_err(|e| SymptomLogRepositoryError::DatabaseError(e.to_string()))?;

        Ok(inserted.to_repository_result())
    }

    async fn list_logs(
        &self,
        owner: UserId,
        limit: u64,
    ) -> Result<Vec<SymptomLogResult>, SymptomLogRepositoryError> {
        let models = SymptomLogs::find()
            .filter(Column::UserId.eq(owner.value()))
            .order_by_desc(Column::Date)
            .limit(limit)
            .all(&*self.db)
            .await
            .map_err(|e| SymptomLogRepositoryError::DatabaseError(e.to_string()))?;

        Ok(models.iter().map(LogModel::to_repository_result).collect())
    }

    async fn find_by_date_range(
        &self,
        owner: UserId,
        start: DateTime<Utc>,
        end: DateTime<Utc>,
    ) -> Result<Vec<SymptomLogResult>, SymptomLogRepositoryError> {
        let models = SymptomLogs::find()
            .filter(Column::UserId.eq(owner.value()))
            .filter(Column::Date.gte(start))
            .filter(Column::Date.lte(end))
            .order_by_desc(Column::Date)
            .all(&*self.db)
            .await
            .map_err(|e| SymptomLogRepositoryError::DatabaseError(e.to_string()))?;

        Ok(models.iter().map(LogModel::to_repository_result).collect())
    }

    async fn update_log(
        &self,
        id: Uuid,
        owner: UserId,
        updates: UpdateSymptomLogData,
    ) -> Result<SymptomLogResult, SymptomLogRepositoryError> {
        // Scoping the lookup by owner makes a foreign id indistinguishable
        // from a missing one.
        let found = SymptomLogs::find_by_id(id)
            .filter(Column::UserId.eq(owner.value()))
            .one(&*self.db)
            .await
            .map_err(|e| SymptomLogRepositoryError::DatabaseError(e.to_string()))?
            .ok_or(SymptomLogRepositoryError::LogNotFound)?;

        if updates.is_empty() {
            return Ok(found.to_repository_result());
        }

        let mut active: LogActiveModel = found.into();

        if let Some(date) = updates.date {
            active.date = Set(date.into());
        }
        if let Some(pain_level) = updates.pain_level {
            active.pain_level = Set(Some(pain_level));
        }
        if let Some(fatigue_level) = updates.fatigue_level {
            active.fatigue_level = Set(Some(fatigue_level));
        }
        if let Some(energy_level) = updates.energy_level {
            active.energy_level = Set(Some(energy_level));
        }
        if let Some(mood) = updates.mood {
            active.mood = Set(Some(mood));
        }
        if let Some(symptoms) = updates.additional_symptoms {
            active.additional_symptoms = Set(encode_symptoms(Some(symptoms))?);
        }
        if let Some(medications) = updates.medications {
            active.medications = Set(encode_medications(Some(medications))?);
        }
        if let Some(notes) = updates.notes {
            active.notes = Set(Some(notes));
        }
        if let Some(voice_note_url) = updates.voice_note_url {
            active.voice_note_url = Set(Some(voice_note_url));
        }

        let updated: LogModel = active
            .update(&*self.db)
            .await
            .map_err(|e| SymptomLogRepositoryError::DatabaseError(e.to_string()))?;

        Ok(updated.to_repository_result())
    }

    async fn delete_log(
        &self,
        id: Uuid,
        owner: UserId,
    ) -> Result<bool, SymptomLogRepositoryError> {
        let result = SymptomLogs::delete_many()
            .filter(Column::Id.eq(id))
            .filter(Column::UserId.eq(owner.value()))
            .exec(&*self.db)
            .await
            .map_err(|e| SymptomLogRepositoryError::DatabaseError(e.to_string()))?;

        Ok(result.rows_affected > 0)
    }
}
