use actix_web::{post, web, Responder};
use chrono::{DateTime, Utc};
use serde::Deserialize;

use crate::{
    modules::auth::{
        adapter::incoming::web::extractors::auth::AuthenticatedUser,
        application::domain::entities::UserId,
    },
    modules::report::application::ports::incoming::use_cases::{
        BuildReportCommand, BuildReportCommandError, GenerateReportError,
    },
    shared::api::ApiResponse,
    AppState,
};

#[derive(Debug, Deserialize)]
struct GenerateReportRequest {
    pub start_date: DateTime<Utc>,
    pub end_date: DateTime<Utc>,
}

#[post("/api/generate-report")]
pub async fn generate_report_handler(
    user: AuthenticatedUser,
    data: web::Data<AppState>,
    payload: web::Json<GenerateReportRequest>,
) -> impl Responder {
    let owner = UserId::from(user.user_id);
    let payload = payload.into_inner();

    let command = match BuildReportCommand::new(owner, payload.start_date, payload.end_date) {
        Ok(cmd) => cmd,
        Err(BuildReportCommandError::InvalidPeriod) => {
            return ApiResponse::bad_request(
                "INVALID_PERIOD",
                "Report period end must not precede its start",
            )
        }
    };

    match data.generate_report_use_case.execute(command).await {
        Ok(report) => ApiResponse::success(report),
        Err(GenerateReportError::UserNotFound) => {
            ApiResponse::not_found("USER_NOT_FOUND", "User not found")
        }
        Err(GenerateReportError::QueryFailed(_)) => ApiResponse::internal_error(),
    }
}
