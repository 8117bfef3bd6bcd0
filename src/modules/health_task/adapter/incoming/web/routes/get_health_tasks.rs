use actix_web::{get, web, Responder};

use crate::{
    modules::auth::{
        adapter::incoming::web::extractors::auth::AuthenticatedUser,
        application::domain::entities::UserId,
    },
    modules::health_task::application::ports::incoming::use_cases::ListHealthTasksError,
    shared::api::ApiResponse,
    AppState,
};

#[get("/api/health-tasks")]
pub async fn get_health_tasks_handler(
    user: AuthenticatedUser,
    data: web::Data<AppState>,
) -> impl Responder {
    let owner = UserId::from(user.user_id);

    match data.health_tasks.list.execute(owner).await {
        Ok(tasks) => ApiResponse::success(tasks),
        Err(ListHealthTasksError::QueryFailed(_)) => ApiResponse::internal_error(),
    }
}
