use actix_web::{get, web, Responder};

use crate::{
    modules::auth::{
        adapter::incoming::web::extractors::auth::AuthenticatedUser,
        application::domain::entities::UserId,
    },
    modules::timeline::application::ports::incoming::use_cases::GetTimelineError,
    shared::api::ApiResponse,
    AppState,
};

#[get("/api/medical-timeline")]
pub async fn get_timeline_handler(
    user: AuthenticatedUser,
    data: web::Data<AppState>,
) -> impl Responder {
    let owner = UserId::from(user.user_id);

    match data.timeline.list.execute(owner).await {
        Ok(entries) => ApiResponse::success(entries),
        Err(GetTimelineError::QueryFailed(_)) => ApiResponse::internal_error(),
    }
}
