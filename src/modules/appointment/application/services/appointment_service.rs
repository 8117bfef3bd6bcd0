use async_trait::async_trait;
use chrono::Utc;
use uuid::Uuid;

use crate::modules::appointment::application::ports::{
    incoming::use_cases::{
        AmendAppointmentCommand, DeleteAppointmentError, DeleteAppointmentUseCase,
        ListAppointmentsError, ListAppointmentsUseCase, ScheduleAppointmentCommand,
        ScheduleAppointmentError, ScheduleAppointmentUseCase, UpcomingAppointmentsUseCase,
        UpdateAppointmentError, UpdateAppointmentUseCase,
    },
    outgoing::{
        AppointmentRepository, AppointmentRepositoryError, AppointmentResult,
        CreateAppointmentData,
    },
};
use crate::modules::auth::application::domain::entities::UserId;

#[derive(Debug, Clone)]
pub struct AppointmentService<R>
where
    R: AppointmentRepository + Send + Sync,
{
    repository: R,
}

impl<R> AppointmentService<R>
where
    R: AppointmentRepository + Send + Sync,
{
    pub fn new(repository: R) -> Self {
        Self { repository }
    }
}

#[async_trait]
impl<R> ScheduleAppointmentUseCase for AppointmentService<R>
where
    R: AppointmentRepository + Send + Sync,
{
    async fn execute(
        &self,
        command: ScheduleAppointmentCommand,
    ) -> Result<AppointmentResult, ScheduleAppointmentError> {
        self.repository
            .create_appointment(CreateAppointmentData {
                owner: command.owner(),
                title: command.title().to_string(),
                doctor_name: command.doctor_name().cloned(),
                date: command.date(),
                location: command.location().cloned(),
                prep_notes: command.prep_notes().cloned(),
            })
            .await
            .map_err(|e| ScheduleAppointmentError::RepositoryError(e.to_string()))
    }
}

#[async_trait]
impl<R> ListAppointmentsUseCase for AppointmentService<R>
where
    R: AppointmentRepository + Send + Sync,
{
    async fn execute(
        &self,
        owner: UserId,
    ) -> Result<Vec<AppointmentResult>, ListAppointmentsError> {
        self.repository
            .list_appointments(owner)
            .await
            .map_err(|e| ListAppointmentsError::QueryFailed(e.to_string()))
    }
}

#[async_trait]
impl<R> UpcomingAppointmentsUseCase for AppointmentService<R>
where
    R: AppointmentRepository + Send + Sync,
{
    async fn execute(
        &self,
        owner: UserId,
    ) -> Result<Vec<AppointmentResult>, ListAppointmentsError> {
        self.repository
            .find_upcoming(owner, Utc::now())
            .await
            .map_err(|e| ListAppointmentsError::QueryFailed(e.to_string()))
    }
}

#[async_trait]
impl<R> UpdateAppointmentUseCase for AppointmentService<R>
where
    R: AppointmentRepository + Send + Sync,
{
    async fn execute(
        &self,
        command: AmendAppointmentCommand,
    ) -> Result<AppointmentResult, UpdateAppointmentError> {
        let id = command.id();
        let owner = command.owner();

        self.repository
            .update_appointment(id, owner, command.into_changes())
            .await
            .map_err(|e| match e {
                AppointmentRepositoryError::AppointmentNotFound => {
                    UpdateAppointmentError::AppointmentNotFound
                }
                other => UpdateAppointmentError::RepositoryError(other.to_string()),
            })
    }
}

#[async_trait]
impl<R> DeleteAppointmentUseCase for AppointmentService<R>
where
    R: AppointmentRepository + Send + Sync,
{
    async fn execute(&self, id: Uuid, owner: UserId) -> Result<(), DeleteAppointmentError> {
        let deleted = self
            .repository
            .delete_appointment(id, owner)
            .await
            .map_err(|e| DeleteAppointmentError::RepositoryError(e.to_string()))?;

        if !deleted {
            return Err(DeleteAppointmentError::AppointmentNotFound);
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{DateTime, Duration};
    use std::sync::Mutex;

    use crate::modules::appointment::application::ports::outgoing::UpdateAppointmentData;

    #[derive(Default)]
    struct MockRepo {
        upcoming_result: Option<Result<Vec<AppointmentResult>, AppointmentRepositoryError>>,
        update_result: Option<Result<AppointmentResult, AppointmentRepositoryError>>,
        delete_result: Option<Result<bool, AppointmentRepositoryError>>,
        seen_after: Mutex<Option<DateTime<Utc>>>,
    }

    #[async_trait]
    impl AppointmentRepository for MockRepo {
        async fn create_appointment(
            &self,
            _data: CreateAppointmentData,
        ) -> Result<AppointmentResult, AppointmentRepositoryError> {
            unimplemented!()
        }

        async fn list_appointments(
            &self,
            _owner: UserId,
        ) -> Result<Vec<AppointmentResult>, AppointmentRepositoryError> {
            unimplemented!()
        }

        async fn find_upcoming(
            &self,
            _owner: UserId,
            after: DateTime<Utc>,
        ) -> Result<Vec<AppointmentResult>, AppointmentRepositoryError> {
            *self.seen_after.lock().unwrap() = Some(after);
            self.upcoming_result.clone().unwrap()
        }

        async fn update_appointment(
            &self,
            _id: Uuid,
            _owner: UserId,
            _updates: UpdateAppointmentData,
        ) -> Result<AppointmentResult, AppointmentRepositoryError> {
            self.update_result.clone().unwrap()
        }

        async fn delete_appointment(
            &self,
            _id: Uuid,
            _owner: UserId,
        ) -> Result<bool, AppointmentRepositoryError> {
            self.delete_result.clone().unwrap()
        }
    }

    #[tokio::test]
    async fn upcoming_queries_from_now() {
        let owner = UserId::from(Uuid::new_v4());

        let service = AppointmentService::new(MockRepo {
            upcoming_result: Some(Ok(vec![])),
            ..Default::default()
        });

        let before = Utc::now() - Duration::seconds(1);
        UpcomingAppointmentsUseCase::execute(&service, owner)
            .await
            .unwrap();
        let after = Utc::now() + Duration::seconds(1);

        let seen = service.repository.seen_after.lock().unwrap().unwrap();
        assert!(seen > before && seen < after, "cutoff should be now-ish");
    }

    #[tokio::test]
    async fn update_missing_appointment_maps_to_not_found() {
        let owner = UserId::from(Uuid::new_v4());

        let service = AppointmentService::new(MockRepo {
            update_result: Some(Err(AppointmentRepositoryError::AppointmentNotFound)),
            ..Default::default()
        });

        let command = AmendAppointmentCommand::new(
            Uuid::new_v4(),
            owner,
            UpdateAppointmentData::default(),
        )
        .unwrap();

        let result = UpdateAppointmentUseCase::execute(&service, command).await;

        assert!(matches!(
            result,
            Err(UpdateAppointmentError::AppointmentNotFound)
        ));
    }

    #[tokio::test]
    async fn delete_without_matching_row_maps_to_not_found() {
        let owner = UserId::from(Uuid::new_v4());

        let service = AppointmentService::new(MockRepo {
            delete_result: Some(Ok(false)),
            ..Default::default()
        });

        let result = DeleteAppointmentUseCase::execute(&service, Uuid::new_v4(), owner).await;

        assert!(matches!(
            result,
            Err(DeleteAppointmentError::AppointmentNotFound)
        ));
    }
}
