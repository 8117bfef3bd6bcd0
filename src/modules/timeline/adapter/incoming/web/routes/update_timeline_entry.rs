use actix_web::{put, web, Responder};
use chrono::{DateTime, Utc};
use serde::Deserialize;
use uuid::Uuid;

use crate::{
    modules::auth::{
        adapter::incoming::web::extractors::auth::AuthenticatedUser,
        application::domain::entities::UserId,
    },
    modules::timeline::application::ports::{
        incoming::use_cases::{
            AmendTimelineEntryCommand, TimelineCommandError, UpdateTimelineEntryError,
        },
        outgoing::UpdateTimelineEntryData,
    },
    shared::api::ApiResponse,
    AppState,
};

#[derive(Debug, Deserialize)]
struct UpdateTimelineEntryRequest {
    pub title: Option<String>,
    pub description: Option<String>,
    pub entry_type: Option<String>,
    pub date: Option<DateTime<Utc>>,
    pub doctor_name: Option<String>,
    pub location: Option<String>,
    pub attachments: Option<Vec<String>>,
}

#[put("/api/medical-timeline/{id}")]
pub async fn update_timeline_entry_handler(
    user: AuthenticatedUser,
    data: web::Data<AppState>,
    path: web::Path<Uuid>,
    payload: web::Json<UpdateTimelineEntryRequest>,
) -> impl Responder {
    let owner = UserId::from(user.user_id);
    let id = path.into_inner();
    let payload = payload.into_inner();

    let changes = UpdateTimelineEntryData {
        title: payload.title,
        description: payload.description,
        entry_type: payload.entry_type,
        date: payload.date,
        doctor_name: payload.doctor_name,
        location: payload.location,
        attachments: payload.attachments,
    };

    let command = match AmendTimelineEntryCommand::new(id, owner, changes) {
        Ok(cmd) => cmd,
        Err(err) => return map_command_error(err),
    };

    match data.timeline.update.execute(command).await {
        Ok(entry) => ApiResponse::success(entry),
        Err(UpdateTimelineEntryError::EntryNotFound) => {
            ApiResponse::not_found("ENTRY_NOT_FOUND", "Timeline entry not found")
        }
        Err(UpdateTimelineEntryError::RepositoryError(_)) => ApiResponse::internal_error(),
    }
}

fn map_command_error(err: TimelineCommandError) -> actix_web::HttpResponse {
    let code = match err {
        TimelineCommandError::EmptyTitle => "EMPTY_TITLE",
        TimelineCommandError::TitleTooLong => "TITLE_TOO_LONG",
        TimelineCommandError::UnknownEntryType(_) => "UNKNOWN_ENTRY_TYPE",
    };

    ApiResponse::bad_request(code, &err.to_string())
}
