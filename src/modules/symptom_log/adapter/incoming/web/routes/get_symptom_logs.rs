use actix_web::{get, web, Responder};
use serde::Deserialize;

use crate::{
    modules::auth::{
        adapter::incoming::web::extractors::auth::AuthenticatedUser,
        application::domain::entities::UserId,
    },
    modules::symptom_log::application::ports::incoming::use_cases::ListSymptomLogsError,
    shared::api::ApiResponse,
    AppState,
};

#[derive(Debug, Deserialize)]
struct ListQuery {
    pub limit: Option<u64>,
}

#[get("/api/symptom-logs")]
pub async fn get_symptom_logs_handler(
    user: AuthenticatedUser,
    data: web::Data<AppState>,
    query: web::Query<ListQuery>,
) -> impl Responder {
    let owner = UserId::from(user.user_id);

    match data.symptom_logs.list.execute(owner, query.limit).await {
        Ok(logs) => ApiResponse::success(logs),
        Err(ListSymptomLogsError::QueryFailed(_)) => ApiResponse::internal_error(),
    }
}
