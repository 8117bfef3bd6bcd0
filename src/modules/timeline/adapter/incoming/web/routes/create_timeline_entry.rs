use actix_web::{post, web, Responder};
use chrono::{DateTime, Utc};
use serde::Deserialize;

use crate::{
    modules::auth::{
        adapter::incoming::web::extractors::auth::AuthenticatedUser,
        application::domain::entities::UserId,
    },
    modules::timeline::application::ports::incoming::use_cases::{
        RecordTimelineEntryCommand, RecordTimelineEntryError, TimelineCommandError,
    },
    shared::api::ApiResponse,
    AppState,
};

#[derive(Debug, Deserialize)]
struct CreateTimelineEntryRequest {
    pub title: String,
    pub description: Option<String>,
    pub entry_type: String,
    pub date: DateTime<Utc>,
    pub doctor_name: Option<String>,
    pub location: Option<String>,
    pub attachments: Option<Vec<String>>,
}

#[post("/api/medical-timeline")]
pub async fn create_timeline_entry_handler(
    user: AuthenticatedUser,
    data: web::Data<AppState>,
    payload: web::Json<CreateTimelineEntryRequest>,
) -> impl Responder {
    let owner = UserId::from(user.user_id);
    let payload = payload.into_inner();

    let command = match RecordTimelineEntryCommand::new(
        owner,
        payload.title,
        payload.description,
        payload.entry_type,
        payload.date,
        payload.doctor_name,
        payload.location,
        payload.attachments,
    ) {
        Ok(cmd) => cmd,
        Err(err) => return map_command_error(err),
    };

    match data.timeline.record.execute(command).await {
        Ok(entry) => ApiResponse::created(entry),
        Err(RecordTimelineEntryError::RepositoryError(_)) => ApiResponse::internal_error(),
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
