use actix_web::{post, web, Responder};
use serde::Deserialize;
use tracing::{info, warn};

use crate::{
    modules::auth::application::ports::incoming::use_cases::{LoginError, LoginUserCommand},
    shared::api::ApiResponse,
    AppState,
};

#[derive(Debug, Deserialize)]
struct LoginRequest {
    pub username: String,
    pub password: String,
}

#[post("/api/auth/login")]
pub async fn login_user_handler(
    data: web::Data<AppState>,
    payload: web::Json<LoginRequest>,
) -> impl Responder {
    let payload = payload.into_inner();

    info!(username = %payload.username, "Login attempt");

    let command = match LoginUserCommand::new(payload.username, payload.password) {
        Ok(cmd) => cmd,
        Err(err) => return ApiResponse::bad_request("VALIDATION_ERROR", &err.to_string()),
    };

    match data.login_user_use_case.execute(command).await {
        Ok(session) => ApiResponse::success(session),
        Err(LoginError::InvalidCredentials) => {
            warn!("Login rejected: invalid credentials");
            ApiResponse::unauthorized("INVALID_CREDENTIALS", "Invalid username or password")
        }
        Err(_) => ApiResponse::internal_error(),
    }
}
