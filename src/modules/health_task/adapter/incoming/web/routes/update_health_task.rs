use actix_web::{put, web, Responder};
use chrono::{DateTime, Utc};
use serde::Deserialize;
use uuid::Uuid;

use crate::{
    modules::auth::{
        adapter::incoming::web::extractors::auth::AuthenticatedUser,
        application::domain::entities::UserId,
    },
    modules::health_task::application::ports::{
        incoming::use_cases::{
            AmendHealthTaskCommand, HealthTaskCommandError, UpdateHealthTaskError,
        },
        outgoing::UpdateHealthTaskData,
    },
    shared::api::ApiResponse,
    AppState,
};

#[derive(Debug, Deserialize)]
struct UpdateHealthTaskRequest {
    pub title: Option<String>,
    pub description: Option<String>,
    pub due_date: Option<DateTime<Utc>>,
    pub completed: Option<bool>,
    pub snoozed_until: Option<DateTime<Utc>>,
    pub priority: Option<String>,
    pub category: Option<String>,
}

#[put("/api/health-tasks/{id}")]
pub async fn update_health_task_handler(
    user: AuthenticatedUser,
    data: web::Data<AppState>,
    path: web::Path<Uuid>,
    payload: web::Json<UpdateHealthTaskRequest>,
) -> impl Responder {
    let owner = UserId::from(user.user_id);
    let id = path.into_inner();
    let payload = payload.into_inner();

    let changes = UpdateHealthTaskData {
        title: payload.title,
        description: payload.description,
        due_date: payload.due_date,
        completed: payload.completed,
        snoozed_until: payload.snoozed_until,
        priority: payload.priority,
        category: payload.category,
    };

    let command = match AmendHealthTaskCommand::new(id, owner, changes) {
        Ok(cmd) => cmd,
        Err(err) => return map_command_error(err),
    };

    match data.health_tasks.update.execute(command).await {
        Ok(task) => ApiResponse::success(task),
        Err(UpdateHealthTaskError::TaskNotFound) => {
            ApiResponse::not_found("TASK_NOT_FOUND", "Health task not found")
        }
        Err(UpdateHealthTaskError::RepositoryError(_)) => ApiResponse::internal_error(),
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
