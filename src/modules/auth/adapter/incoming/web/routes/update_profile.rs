use actix_web::{put, web, Responder};
use serde::Deserialize;

use crate::{
    modules::auth::{
        adapter::incoming::web::extractors::auth::AuthenticatedUser,
        application::domain::entities::UserId,
        application::ports::incoming::use_cases::{
            UpdateProfileCommand, UpdateProfileCommandError, UpdateProfileError,
        },
    },
    shared::api::ApiResponse,
    AppState,
};

#[derive(Debug, Deserialize)]
struct UpdateProfileRequest {
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub email: Option<String>,
    pub faith_mode_enabled: Option<bool>,
    pub anonymous_mode: Option<bool>,
}

#[put("/api/auth/profile")]
pub async fn update_profile_handler(
    user: AuthenticatedUser,
    data: web::Data<AppState>,
    payload: web::Json<UpdateProfileRequest>,
) -> impl Responder {
    let owner = UserId::from(user.user_id);
    let payload = payload.into_inner();

    let command = match UpdateProfileCommand::new(
        owner,
        payload.first_name,
        payload.last_name,
        payload.email,
        payload.faith_mode_enabled,
        payload.anonymous_mode,
    ) {
        Ok(cmd) => cmd,
        Err(UpdateProfileCommandError::InvalidEmail) => {
            return ApiResponse::bad_request("INVALID_EMAIL", "Email address is not valid")
        }
    };

    match data.update_profile_use_case.execute(command).await {
        Ok(profile) => ApiResponse::success(profile),
        Err(UpdateProfileError::UserNotFound) => {
            ApiResponse::not_found("USER_NOT_FOUND", "User not found")
        }
        Err(UpdateProfileError::RepositoryError(_)) => ApiResponse::internal_error(),
    }
}
