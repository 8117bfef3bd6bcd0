use async_trait::async_trait;
use chrono::{DateTime, Utc};
use std::sync::Arc;
use uuid::Uuid;

use crate::modules::appointment::application::ports::outgoing::{
    AppointmentResult, UpdateAppointmentData,
};
use crate::modules::auth::application::domain::entities::UserId;

const MAX_TITLE_LEN: usize = 200;

#[derive(Debug, thiserror::Error)]
pub enum AppointmentCommandError {
    #[error("Title cannot be empty")]
    EmptyTitle,

    #[error("Title must not exceed 200 characters")]
    TitleTooLong,
}

fn validate_title(title: &str) -> Result<(), AppointmentCommandError> {
    if title.is_empty() {
        return Err(AppointmentCommandError::EmptyTitle);
    }
    if title.len() > MAX_TITLE_LEN {
        return Err(AppointmentCommandError::TitleTooLong);
    }
    Ok(())
}

//
// ──────────────────────────────────────────────────────────
// Commands
// ──────────────────────────────────────────────────────────
//

#[derive(Debug, Clone)]
pub struct ScheduleAppointmentCommand {
    owner: UserId,
    title: String,
    doctor_name: Option<String>,
    date: DateTime<Utc>,
    location: Option<String>,
    prep_notes: Option<String>,
}

impl ScheduleAppointmentCommand {
    pub fn new(
        owner: UserId,
        title: String,
        doctor_name: Option<String>,
        date: DateTime<Utc>,
        location: Option<String>,
        prep_notes: Option<String>,
    ) -> Result<Self, AppointmentCommandError> {
        let title = title.trim().to_string();
        validate_title(&title)?;

        Ok(Self {
            owner,
            title,
            doctor_name,
            date,
            location,
            prep_notes,
        })
    }

    pub fn owner(&self) -> UserId {
        self.owner
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn doctor_name(&self) -> Option<&String> {
        self.doctor_name.as_ref()
    }

    pub fn date(&self) -> DateTime<Utc> {
        self.date
    }

    pub fn location(&self) -> Option<&String> {
        self.location.as_ref()
    }

    pub fn prep_notes(&self) -> Option<&String> {
        self.prep_notes.as_ref()
    }
}

#[derive(Debug, Clone)]
pub struct AmendAppointmentCommand {
    id: Uuid,
    owner: UserId,
    changes: UpdateAppointmentData,
}

impl AmendAppointmentCommand {
    pub fn new(
        id: Uuid,
        owner: UserId,
        changes: UpdateAppointmentData,
    ) -> Result<Self, AppointmentCommandError> {
        if let Some(ref title) = changes.title {
            validate_title(title.trim())?;
        }

        Ok(Self { id, owner, changes })
    }

    pub fn id(&self) -> Uuid {
        self.id
    }

    pub fn owner(&self) -> UserId {
        self.owner
    }

    pub fn into_changes(self) -> UpdateAppointmentData {
        self.changes
    }
}

//
// ──────────────────────────────────────────────────────────
// Use case errors and ports
// ──────────────────────────────────────────────────────────
//

#[derive(Debug, Clone, thiserror::Error)]
pub enum ScheduleAppointmentError {
    #[error("Repository error: {0}")]
    RepositoryError(String),
}

#[derive(Debug, Clone, thiserror::Error)]
pub enum ListAppointmentsError {
    #[error("Query failed: {0}")]
    QueryFailed(String),
}

#[derive(Debug, Clone, thiserror::Error)]
pub enum UpdateAppointmentError {
    #[error("Appointment not found")]
    AppointmentNotFound,

    #[error("Repository error: {0}")]
    RepositoryError(String),
}

#[derive(Debug, Clone, thiserror::Error)]
pub enum DeleteAppointmentError {
    #[error("Appointment not found")]
    AppointmentNotFound,

    #[error("Repository error: {0}")]
    RepositoryError(String),
}

#[async_trait]
pub trait ScheduleAppointmentUseCase: Send + Sync {
    async fn execute(
        &self,
        command: ScheduleAppointmentCommand,
    ) -> Result<AppointmentResult, ScheduleAppointmentError>;
}

#[async_trait]
pub trait ListAppointmentsUseCase: Send + Sync {
    async fn execute(&self, owner: UserId)
        -> Result<Vec<AppointmentResult>, ListAppointmentsError>;
}

/// The dashboard's "what's next" view: future, not-yet-completed
/// appointments, soonest first.
#[async_trait]
pub trait UpcomingAppointmentsUseCase: Send + Sync {
    async fn execute(&self, owner: UserId)
        -> Result<Vec<AppointmentResult>, ListAppointmentsError>;
}

#[async_trait]
pub trait UpdateAppointmentUseCase: Send + Sync {
    async fn execute(
        &self,
        command: AmendAppointmentCommand,
    ) -> Result<AppointmentResult, UpdateAppointmentError>;
}

#[async_trait]
pub trait DeleteAppointmentUseCase: Send + Sync {
    async fn execute(&self, id: Uuid, owner: UserId) -> Result<(), DeleteAppointmentError>;
}

#[derive(Clone)]
pub struct AppointmentUseCases {
    pub schedule: Arc<dyn ScheduleAppointmentUseCase>,
    pub list: Arc<dyn ListAppointmentsUseCase>,
    pub upcoming: Arc<dyn UpcomingAppointmentsUseCase>,
    pub update: Arc<dyn UpdateAppointmentUseCase>,
    pub delete: Arc<dyn DeleteAppointmentUseCase>,
}
