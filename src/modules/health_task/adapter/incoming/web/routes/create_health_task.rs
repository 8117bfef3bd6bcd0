use actix_web::{post, web, Responder};
use chrono::{DateTime, Utc};
use serde::Deserialize;

use crate::{
    modules::auth::{
        adapter::incoming::web::extractors::auth::AuthenticatedUser,
        application::domain::entities::UserId,
    },
    modules::health_task::application::ports::incoming::use_cases::{
        AddHealthTaskCommand, AddHealthTaskError, HealthTaskCommandError,
    },
    shared::api::ApiResponse,
    AppState,
};

#[derive(Debug, Deserialize)]
struct CreateHealthTaskRequest {
    pub title: String,
    pub description: Option<String>,
    pub due_date: Option<DateTime<Utc>>,
    pub snoozed_until: Option<DateTime<Utc>>,
    pub priority: Option<String>,
    pub category: Option<String>,
}

#[post("/api/health-tasks")]
pub async fn create_health_task_handler(
    user: AuthenticatedUser,
    data: web::Data<AppState>,
    payload: web::Json<CreateHealthTaskRequest>,
) -> impl Responder {
    let owner = UserId::from(user.user_id);
    let payload = payload.into_inner();

    let command = match AddHealthTaskCommand::new(
        owner,
        payload.title,
        payload.description,
        payload.due_date,
        payload.snoozed_until,
        payload.priority,
        payload.category,
    ) {
        Ok(cmd) => cmd,
        Err(err) => return map_command_error(err),
    };

    match data.health_tasks.add.execute(command).await {
        Ok(task) => ApiResponse::created(task),
        Err(AddHealthTaskError::RepositoryError(_)) => ApiResponse::internal_error(),
    }
}

fn map_command_error(err: HealthTaskCommandError) -> actix_web::HttpResponse {
    let code = match err {
        HealthTaskCommandError::EmptyTitle => "EMPTY_TITLE",
        HealthTaskCommandError::TitleTooLong => "TITLE_TOO_LONG",
        HealthTaskCommandError::UnknownPriority(_) => "UNKNOWN_PRIORITY",
    };

    ApiResponse::bad_request(code, &err.to_string())
}
