use actix_web::{delete, web, Responder};
use uuid::Uuid;

use crate::{
    modules::auth::{
        adapter::incoming::web::extractors::auth::AuthenticatedUser,
        application::domain::entities::UserId,
    },
    modules::timeline::application::ports::incoming::use_cases::DeleteTimelineEntryError,
    shared::api::ApiResponse,
    AppState,
};

#[delete("/api/medical-timeline/{id}")]
pub async fn delete_timeline_entry_handler(
    user: AuthenticatedUser,
    data: web::Data<AppState>,
    path: web::Path<Uuid>,
) -> impl Responder {
    let owner = UserId::from(user.user_id);
    let id = path.into_inner();

    match data.timeline.delete.execute(id, owner).await {
        Ok(()) => ApiResponse::no_content(),
        Err(DeleteTimelineEntryError::EntryNotFound) => {
            ApiResponse::not_found("ENTRY_NOT_FOUND", "Timeline entry not found")
        }
        Err(DeleteTimelineEntryError::RepositoryError(_)) => ApiResponse::internal_error(),
    }
}
