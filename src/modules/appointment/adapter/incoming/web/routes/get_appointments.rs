use actix_web::{get, web, Responder};

use crate::{
    modules::appointment::application::ports::incoming::use_cases::ListAppointmentsError,
    modules::auth::{
        adapter::incoming::web::extractors::auth::AuthenticatedUser,
        application::domain::entities::UserId,
    },
    shared::api::ApiResponse,
    AppState,
};

#[get("/api/appointments")]
pub async fn get_appointments_handler(
    user: AuthenticatedUser,
    data: web::Data<AppState>,
) -> impl Responder {
    let owner = UserId::from(user.user_id);

    match data.appointments.list.execute(owner).await {
        Ok(appointments) => ApiResponse::success(appointments),
        Err(ListAppointmentsError::QueryFailed(_)) => ApiResponse::internal_error(),
    }
}
