use actix_web::{post, web, Responder};
use serde::Deserialize;
use tracing::info;

use crate::{
    modules::auth::application::ports::incoming::use_cases::{
        RegisterCommandError, RegisterUserCommand, RegisterUserError,
    },
    shared::api::ApiResponse,
    AppState,
};

//
// ──────────────────────────────────────────────────────────
// Request DTO
// ──────────────────────────────────────────────────────────
//

#[derive(Debug, Deserialize)]
struct RegisterUserRequest {
    pub username: String,
    pub password: String,
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub email: Option<String>,
}

//
// ──────────────────────────────────────────────────────────
// Route
// ──────────────────────────────────────────────────────────
//

#[post("/api/auth/register")]
pub async fn register_user_handler(
    data: web::Data<AppState>,
    payload: web::Json<RegisterUserRequest>,
) -> impl Responder {
    let payload = payload.into_inner();

    info!(username = %payload.username, "Registration attempt");

    let command = match RegisterUserCommand::new(
        payload.username,
        payload.password,
        payload.first_name,
        payload.last_name,
        payload.email,
    ) {
        Ok(cmd) => cmd,
        Err(err) => return map_command_error(err),
    };

    match data.register_user_use_case.execute(command).await {
        Ok(session) => ApiResponse::created(session),
        Err(err) => map_register_error(err),
    }
}

//
// ──────────────────────────────────────────────────────────
// Error Mapping
// ──────────────────────────────────────────────────────────
//

fn map_command_error(err: RegisterCommandError) -> actix_web::HttpResponse {
    match err {
        RegisterCommandError::UsernameInvalid => {
            ApiResponse::bad_request("USERNAME_INVALID", &err.to_string())
        }
        RegisterCommandError::PasswordTooShort => {
            ApiResponse::bad_request("PASSWORD_TOO_SHORT", &err.to_string())
        }
        RegisterCommandError::InvalidEmail => {
            ApiResponse::bad_request("INVALID_EMAIL", &err.to_string())
        }
    }
}

fn map_register_error(err: RegisterUserError) -> actix_web::HttpResponse {
    match err {
        RegisterUserError::UsernameTaken => {
            ApiResponse::conflict("USERNAME_TAKEN", "Username already taken")
        }
        RegisterUserError::HashingFailed
        | RegisterUserError::TokenFailed
        | RegisterUserError::RepositoryError(_) => ApiResponse::internal_error(),
    }
}
