use actix_web::{post, web, Responder};
use chrono::{DateTime, Utc};
use serde::Deserialize;

use crate::{
    modules::appointment::application::ports::incoming::use_cases::{
        AppointmentCommandError, ScheduleAppointmentCommand, ScheduleAppointmentError,
    },
    modules::auth::{
        adapter::incoming::web::extractors::auth::AuthenticatedUser,
        application::domain::entities::UserId,
    },
    shared::api::ApiResponse,
    AppState,
};

#[derive(Debug, Deserialize)]
struct CreateAppointmentRequest {
    pub title: String,
    pub doctor_name: Option<String>,
    pub date: DateTime<Utc>,
    pub location: Option<String>,
    pub prep_notes: Option<String>,
}

#[post("/api/appointments")]
pub async fn create_appointment_handler(
    user: AuthenticatedUser,
    data: web::Data<AppState>,
    payload: web::Json<CreateAppointmentRequest>,
) -> impl Responder {
    let owner = UserId::from(user.user_id);
    let payload = payload.into_inner();

    let command = match ScheduleAppointmentCommand::new(
        owner,
        payload.title,
        payload.doctor_name,
        payload.date,
        payload.location,
        payload.prep_notes,
    ) {
        Ok(cmd) => cmd,
        Err(err) => return map_command_error(err),
    };

    match data.appointments.schedule.execute(command).await {
        Ok(appointment) => ApiResponse::created(appointment),
        Err(ScheduleAppointmentError::RepositoryError(_)) => ApiResponse::internal_error(),
    }
}

fn map_command_error(err: AppointmentCommandError) -> actix_web::HttpResponse {
    let code = match err {
        AppointmentCommandError::EmptyTitle => "EMPTY_TITLE",
        AppointmentCommandError::TitleTooLong => "TITLE_TOO_LONG",
    };

    ApiResponse::bad_request(code, &err.to_string())
}
