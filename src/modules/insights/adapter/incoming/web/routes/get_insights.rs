use actix_web::{get, web, Responder};

use crate::{
    modules::auth::{
        adapter::incoming::web::extractors::auth::AuthenticatedUser,
        application::domain::entities::UserId,
    },
    modules::insights::application::ports::incoming::use_cases::GetInsightsError,
    shared::api::ApiResponse,
    AppState,
};

#[get("/api/insights")]
pub async fn get_insights_handler(
    user: AuthenticatedUser,
    data: web::Data<AppState>,
) -> impl Responder {
    let owner = UserId::from(user.user_id);

    match data.get_insights_use_case.execute(owner).await {
        Ok(summary) => ApiResponse::success(summary),
        Err(GetInsightsError::QueryFailed(_)) => ApiResponse::internal_error(),
    }
}
