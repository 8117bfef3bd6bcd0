use async_trait::async_trait;
use chrono::{DateTime, Utc};
use serde::Serialize;
use uuid::Uuid;

use crate::modules::auth::application::domain::entities::UserId;

#[derive(Debug, Clone)]
pub struct CreateAppointmentData {
    pub owner: UserId,
    pub title: String,
    pub doctor_name: Option<String>,
    pub date: DateTime<Utc>,
    pub location: Option<String>,
    pub prep_notes: Option<String>,
}

#[derive(Debug, Clone, Default)]
pub struct UpdateAppointmentData {
    pub title: Option<String>,
    pub doctor_name: Option<String>,
    pub date: Option<DateTime<Utc>>,
    pub location: Option<String>,
    pub prep_notes: Option<String>,
    pub completed: Option<bool>,
    pub reminder_sent: Option<bool>,
}

impl UpdateAppointmentData {
    /// An update with no fields set is a no-op.
    pub fn is_empty(&self) -> bool {
        self.title.is_none()
            && self.doctor_name.is_none()
            && self.date.is_none()
            && self.location.is_none()
            && self.prep_notes.is_none()
            && self.completed.is_none()
            && self.reminder_sent.is_none()
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct AppointmentResult {
    pub id: Uuid,
    pub owner: UserId,
    pub title: String,
    pub doctor_name: Option<String>,
    pub date: DateTime<Utc>,
    pub location: Option<String>,
    pub prep_notes: Option<String>,
    pub completed: bool,
    pub reminder_sent: bool,
}

#[derive(Debug, Clone, thiserror::Error)]
pub enum AppointmentRepositoryError {
    #[error("Appointment not found")]
    AppointmentNotFound,

    #[error("Database error: {0}")]
    DatabaseError(String),
}

#[async_trait]
pub trait AppointmentRepository: Send + Sync {
    async fn create_appointment(
        &self,
        data: CreateAppointmentData,
    ) -> Result<AppointmentResult, AppointmentRepositoryError>;

    /// All appointments for the owner, newest first.
    async fn list_appointments(
        &self,
        owner: UserId,
    ) -> Result<Vec<AppointmentResult>, AppointmentRepositoryError>;

    /// Appointments strictly after `after` that are not completed, soonest
    /// first.
    async fn find_upcoming(
        &self,
        owner: UserId,
        after: DateTime<Utc>,
    ) -> Result<Vec<AppointmentResult>, AppointmentRepositoryError>;

    async fn update_appointment(
        &self,
        id: Uuid,
        owner: UserId,
        updates: UpdateAppointmentData,
    ) -> Result<AppointmentResult, AppointmentRepositoryError>;

    async fn delete_appointment(
        &self,
        id: Uuid,
        owner: UserId,
    ) -> Result<bool, AppointmentRepositoryError>;
}
