use actix_web::{put, web, Responder};
use chrono::{DateTime, Utc};
use serde::Deserialize;
use uuid::Uuid;

use crate::{
    modules::appointment::application::ports::{
        incoming::use_cases::{
            AmendAppointmentCommand, AppointmentCommandError, UpdateAppointmentError,
        },
        outgoing::UpdateAppointmentData,
    },
    modules::auth::{
        adapter::incoming::web::extractors::auth::AuthenticatedUser,
        application::domain::entities::UserId,
    },
    shared::api::ApiResponse,
    AppState,
};

#[derive(Debug, Deserialize)]
struct UpdateAppointmentRequest {
    pub title: Option<String>,
    pub doctor_name: Option<String>,
    pub date: Option<DateTime<Utc>>,
    pub location: Option<String>,
    pub prep_notes: Option<String>,
    pub completed: Option<bool>,
    pub reminder_sent: Option<bool>,
}

#[put("/api/appointments/{id}")]
pub async fn update_appointment_handler(
    user: AuthenticatedUser,
    data: web::Data<AppState>,
    path: web::Path<Uuid>,
    payload: web::Json<UpdateAppointmentRequest>,
) -> impl Responder {
    let owner = UserId::from(user.user_id);
    let id = path.into_inner();
    let payload = payload.into_inner();

    let changes = UpdateAppointmentData {
        title: payload.title,
        doctor_name: payload.doctor_name,
        date: payload.date,
        location: payload.location,
        prep_notes: payload.prep_notes,
        completed: payload.completed,
        reminder_sent: payload.reminder_sent,
    };

    let command = match AmendAppointmentCommand::new(id, owner, changes) {
        Ok(cmd) => cmd,
        Err(err) => return map_command_error(err),
    };

    match data.appointments.update.execute(command).await {
        Ok(appointment) => ApiResponse::success(appointment),
        Err(UpdateAppointmentError::AppointmentNotFound) => {
            ApiResponse::not_found("APPOINTMENT_NOT_FOUND", "Appointment not found")
        }
        Err(UpdateAppointmentError::RepositoryError(_)) => ApiResponse::internal_error(),
    }
}

fn map_command_error(err: AppointmentCommandError) -> actix_web::HttpResponse {
    let code = match err {
        AppointmentCommandError::EmptyTitle => "EMPTY_TITLE",
        AppointmentCommandError::TitleTooLong => "TITLE_TOO_LONG",
    };

    ApiResponse::bad_request(code, &err.to_string())
}
