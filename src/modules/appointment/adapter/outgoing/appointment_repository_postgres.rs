use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter, QueryOrder, Set,
};
use std::sync::Arc;
use uuid::Uuid;

use crate::modules::appointment::application::ports::outgoing::{
    AppointmentRepository, AppointmentRepositoryError, AppointmentResult, CreateAppointmentData,
    UpdateAppointmentData,
};
use crate::modules::auth::application::domain::entities::UserId;

use super::sea_orm_entity::{
    ActiveModel as AppointmentActiveModel, Column, Entity as Appointments,
    Model as AppointmentModel,
};

#[derive(Debug, Clone)]
pub struct AppointmentRepositoryPostgres {
    db: Arc<DatabaseConnection>,
}

impl AppointmentRepositoryPostgres {
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }
}

#[async_trait]
impl AppointmentRepository for AppointmentRepositoryPostgres {
    async fn create_appointment(
        &self,
        data: CreateAppointmentData,
    ) -> Result<AppointmentResult, AppointmentRepositoryError> {
        let active = AppointmentActiveModel {
            id: Set(Uuid::new_v4()),
            user_id: Set(data.owner.into()),
            title: Set(data.title),
            doctor_name: Set(data.doctor_name),
            date: Set(data.date.into()),
            location: Set(data.location),
            prep_notes: Set(data.prep_notes),
            completed: Set(false),
            reminder_sent: Set(false),
        };

        let inserted: AppointmentModel = active
            .insert(&*self.db)
            .await
            .map_err(|e| AppointmentRepositoryError::DatabaseError(e.to_string()))?;

        Ok(inserted.to_repository_result())
    }

    async fn list_appointments(
        &self,
        owner: UserId,
    ) -> Result<Vec<AppointmentResult>, AppointmentRepositoryError> {
        let models = Appointments::find()
            .filter(Column::UserId.eq(owner.value()))
            .order_by_desc(Column::Date)
            .all(&*self.db)
            .await
            .map_err(|e| AppointmentRepositoryError::DatabaseError(e.to_string()))?;

        Ok(models
            .iter()
            .map(AppointmentModel::to_repository_result)
            .collect())
    }

    async fn find_upcoming(
        &self,
        owner: UserId,
        after: DateTime<Utc>,
    ) -> Result<Vec<AppointmentResult>, AppointmentRepositoryError> {
        let models = Appointments::find()
            .filter(Column::UserId.eq(owner.value()))
            .filter(Column::Date.gt(after))
            .filter(Column::Completed.eq(false))
            .order_by_asc(Column::Date)
            .all(&*self.db)
            .await
            .map_err(|e| AppointmentRepositoryError::DatabaseError(e.to_string()))?;

        Ok(models
            .iter()
            .map(AppointmentModel::to_repository_result)
            .collect())
    }

    async fn update_appointment(
        &self,
        id: Uuid,
        owner: UserId,
        updates: UpdateAppointmentData,
    ) -> Result<AppointmentResult, AppointmentRepositoryError> {
        let found = Appointments::find_by_id(id)
            .filter(Column::UserId.eq(owner.value()))
            .one(&*self.db)
            .await
            .map_err(|e| AppointmentRepositoryError::DatabaseError(e.to_string()))?
            .ok_or(AppointmentRepositoryError::AppointmentNotFound)?;

        if updates.is_empty() {
            return Ok(found.to_repository_result());
        }

        let mut active: AppointmentActiveModel = found.into();

        if let Some(title) = updates.title {
            active.title = Set(title);
        }
        if let Some(doctor_name) = updates.doctor_name {
            active.doctor_name = Set(Some(doctor_name));
        }
        if let Some(date) = updates.date {
            active.date = Set(date.into());
        }
        if let Some(location) = updates.location {
            active.location = Set(Some(location));
        }
        if let Some(prep_notes) = updates.prep_notes {
            active.prep_notes = Set(Some(prep_notes));
        }
        if let Some(completed) = updates.completed {
            active.completed = Set(completed);
        }
        if let Some(reminder_sent) = updates.reminder_sent {
            active.reminder_sent = Set(reminder_sent);
        }

        let updated: AppointmentModel = active
            .update(&*self.db)
            .await
            .map_err(|e| AppointmentRepositoryError::DatabaseError(e.to_string()))?;

        Ok(updated.to_repository_result())
    }

    async fn delete_appointment(
        &self,
        id: Uuid,
        owner: UserId,
    ) -> Result<bool, AppointmentRepositoryError> {
        let result = Appointments::delete_many()
            .filter(Column::Id.eq(id))
            .filter(Column::UserId.eq(owner.value()))
            .exec(&*self.db)
            .await
            .map_err(|e| AppointmentRepositoryError::DatabaseError(e.to_string()))?;

        Ok(result.rows_affected > 0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use sea_orm::{DatabaseBackend, MockDatabase, MockExecResult};

    fn appointment_model(owner: UserId, completed: bool) -> AppointmentModel {
        AppointmentModel {
            id: Uuid::new_v4(),
            user_id: owner.value(),
            title: "Cardiology follow-up".to_string(),
            doctor_name: Some("Dr. Osei".to_string()),
            date: Utc::now().fixed_offset(),
            location: None,
            prep_notes: None,
            completed,
            reminder_sent: false,
        }
    }

    #[tokio::test]
    async fn test_create_appointment_defaults_flags() {
        let owner = UserId::from(Uuid::new_v4());
        let inserted = appointment_model(owner, false);

        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results(vec![vec![inserted.clone()]])
            .into_connection();

        let repo = AppointmentRepositoryPostgres::new(Arc::new(db));

        let appointment = repo
            .create_appointment(CreateAppointmentData {
                owner,
                title: "Cardiology follow-up".to_string(),
                doctor_name: Some("Dr. Osei".to_string()),
                date: Utc::now(),
                location: None,
                prep_notes: None,
            })
            .await
            .unwrap();

        assert_eq!(appointment.id, inserted.id);
        assert!(!appointment.completed);
        assert!(!appointment.reminder_sent);
    }

    #[tokio::test]
    async fn test_update_appointment_not_found() {
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results(vec![Vec::<AppointmentModel>::new()])
            .into_connection();

        let repo = AppointmentRepositoryPostgres::new(Arc::new(db));

        let result = repo
            .update_appointment(
                Uuid::new_v4(),
                UserId::from(Uuid::new_v4()),
                UpdateAppointmentData::default(),
            )
            .await;

        assert!(matches!(
            result,
            Err(AppointmentRepositoryError::AppointmentNotFound)
        ));
    }

    #[tokio::test]
    async fn test_delete_appointment_reports_affected_rows() {
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_exec_results(vec![MockExecResult {
                last_insert_id: 0,
                rows_affected: 1,
            }])
            .into_connection();

        let repo = AppointmentRepositoryPostgres::new(Arc::new(db));

        let deleted = repo
            .delete_appointment(Uuid::new_v4(), UserId::from(Uuid::new_v4()))
            .await
            .unwrap();

        assert!(deleted);
    }
}
