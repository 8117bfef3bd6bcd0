use async_trait::async_trait;
use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter, QueryOrder, Set,
};
use std::sync::Arc;
use uuid::Uuid;

use crate::modules::auth::application::domain::entities::UserId;
use crate::modules::timeline::application::ports::outgoing::{
    CreateTimelineEntryData, TimelineEntryResult, TimelineRepository, TimelineRepositoryError,
    UpdateTimelineEntryData,
};

use super::sea_orm_entity::{
    ActiveModel as EntryActiveModel, Column, Entity as MedicalTimeline, Model as EntryModel,
};

#[derive(Debug, Clone)]
pub struct TimelineRepositoryPostgres {
    db: Arc<DatabaseConnection>,
}

impl TimelineRepositoryPostgres {
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }
}

fn encode_attachments(
    attachments: Option<Vec<String>>,
) -> Result<Option<sea_orm::JsonValue>, TimelineRepositoryError> {
    attachments
        .map(|a| serde_json::to_value(a))
        .transpose()
        .map_err(|e| TimelineRepositoryError::DatabaseError(e.to_string()))
}

#[async_trait]
impl TimelineRepository for TimelineRepositoryPostgres {
    async fn create_entry(
        &self,
        data: CreateTimelineEntryData,
    ) -> Result<TimelineEntryResult, TimelineRepositoryError> {
        let active = EntryActiveModel {
            id: Set(Uuid::new_v4()),
            user_id: Set(data.owner.into()),
            title: Set(data.title),
            description: Set(data.description),
            entry_type: Set(data.entry_type),
            date: Set(data.date.into()),
            doctor_name: Set(data.doctor_name),
            location: Set(data.location),
            attachments: Set(encode_attachments(data.attachments)?),
            created_at: Set(Utc::now().into()),
        };

        let inserted: EntryModel = active
            .insert(&*self.db)
            .await
            .map_err(|e| TimelineRepositoryError::DatabaseError(e.to_string()))?;

        Ok(inserted.to_repository_result())
    }

    async fn list_entries(
        &self,
        owner: UserId,
    ) -> Result<Vec<TimelineEntryResult>, TimelineRepositoryError> {
        let models = MedicalTimeline::find()
            .filter(Column::UserId.eq(owner.value()))
            .order_by_desc(Column::Date)
            .all(&*self.db)
            .await
            .map_err(|e| TimelineRepositoryError::DatabaseError(e.to_string()))?;

        Ok(models.iter().map(EntryModel::to_repository_result).collect())
    }

    async fn update_entry(
        &self,
        id: Uuid,
        owner: UserId,
        updates: UpdateTimelineEntryData,
    ) -> Result<TimelineEntryResult, TimelineRepositoryError> {
        let found = MedicalTimeline::find_by_id(id)
            .filter(Column::UserId.eq(owner.value()))
            .one(&*self.db)
            .await
            .map_err(|e| TimelineRepositoryError::DatabaseError(e.to_string()))?
            .ok_or(TimelineRepositoryError::EntryNotFound)?;

        if updates.is_empty() {
            return Ok(found.to_repository_result());
        }

        let mut active: EntryActiveModel = found.into();

        if let Some(title) = updates.title {
            active.title = Set(title);
        }
        if let Some(description) = updates.description {
            active.description = Set(Some(description));
        }
        if let Some(entry_type) = updates.entry_type {
            active.entry_type = Set(entry_type);
        }
        if let Some(date) = updates.date {
            active.date = Set(date.into());
        }
        if let Some(doctor_name) = updates.doctor_name {
            active.doctor_name = Set(Some(doctor_name));
        }
        if let Some(location) = updates.location {
            active.location = Set(Some(location));
        }
        if let Some(attachments) = updates.attachments {
            active.attachments = Set(encode_attachments(Some(attachments))?);
        }

        let updated: EntryModel = active
            .update(&*self.db)
            .await
            .map_err(|e| TimelineRepositoryError::DatabaseError(e.to_string()))?;

        Ok(updated.to_repository_result())
    }

    async fn delete_entry(
        &self,
        id: Uuid,
        owner: UserId,
    ) -> Result<bool, TimelineRepositoryError> {
        let result = MedicalTimeline::delete_many()
            .filter(Column::Id.eq(id))
            .filter(Column::UserId.eq(owner.value()))
            .exec(&*self.db)
            .await
            .map_err(|e| TimelineRepositoryError::DatabaseError(e.to_string()))?;

        Ok(result.rows_affected > 0)
    }
}
