use actix_web::{delete, web, Responder};
use uuid::Uuid;

use crate::{
    modules::appointment::application::ports::incoming::use_cases::DeleteAppointmentError,
    modules::auth::{
        adapter::incoming::web::extractors::auth::AuthenticatedUser,
        application::domain::entities::UserId,
    },
    shared::api::ApiResponse,
    AppState,
};

#[delete("/api/appointments/{id}")]
pub async fn delete_appointment_handler(
    user: AuthenticatedUser,
    data: web::Data<AppState>,
    path: web::Path<Uuid>,
) -> impl Responder {
    let owner = UserId::from(user.user_id);
    let id = path.into_inner();

    match data.appointments.delete.execute(id, owner).await {
        Ok(()) => ApiResponse::no_content(),
        Err(DeleteAppointmentError::AppointmentNotFound) => {
            ApiResponse::not_found("APPOINTMENT_NOT_FOUND", "Appointment not found")
        }
        Err(DeleteAppointmentError::RepositoryError(_)) => ApiResponse::internal_error(),
    }
}
