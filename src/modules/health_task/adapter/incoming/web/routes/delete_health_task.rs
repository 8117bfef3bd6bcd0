use actix_web::{delete, web, Responder};
use uuid::Uuid;

use crate::{
    modules::auth::{
        adapter::incoming::web::extractors::auth::AuthenticatedUser,
        application::domain::entities::UserId,
    },
    modules::health_task::application::ports::incoming::use_cases::DeleteHealthTaskError,
    shared::api::ApiResponse,
    AppState,
};

#[delete("/api/health-tasks/{id}")]
pub async fn delete_health_task_handler(
    user: AuthenticatedUser,
    data: web::Data<AppState>,
    path: web::Path<Uuid>,
) -> impl Responder {
    let owner = UserId::from(user.user_id);
    let id = path.into_inner();

    match data.health_tasks.delete.execute(id, owner).await {
        Ok(()) => ApiResponse::no_content(),
        Err(DeleteHealthTaskError::TaskNotFound) => {
            ApiResponse::not_found("TASK_NOT_FOUND", "Health task not found")
        }
        Err(DeleteHealthTaskError::RepositoryError(_)) => ApiResponse::internal_error(),
    }
}
