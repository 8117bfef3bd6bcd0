use actix_web::{get, web, Responder};

use crate::{
    modules::auth::{
        adapter::incoming::web::extractors::auth::AuthenticatedUser,
        application::domain::entities::UserId,
        application::ports::incoming::use_cases::FetchUserError,
    },
    shared::api::ApiResponse,
    AppState,
};

#[get("/api/auth/user")]
pub async fn fetch_user_handler(user: AuthenticatedUser, data: web::Data<AppState>) -> impl Responder {
    let owner = UserId::from(user.user_id);

    match data.fetch_user_use_case.execute(owner).await {
        Ok(profile) => ApiResponse::success(profile),
        Err(FetchUserError::UserNotFound) => {
            ApiResponse::not_found("USER_NOT_FOUND", "User not found")
        }
        Err(FetchUserError::QueryFailed(_)) => ApiResponse::internal_error(),
    }
}
