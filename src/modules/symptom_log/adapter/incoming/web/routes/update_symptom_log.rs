use actix_web::{put, web, Responder};
use chrono::{DateTime, Utc};
use serde::Deserialize;
use uuid::Uuid;

use crate::{
    modules::auth::{
        adapter::incoming::web::extractors::auth::AuthenticatedUser,
        application::domain::entities::UserId,
    },
    modules::symptom_log::application::ports::{
        incoming::use_cases::{
            AmendSymptomLogCommand, SymptomLogCommandError, SymptomLogDraft, UpdateSymptomLogError,
        },
        outgoing::MedicationEntry,
    },
    shared::api::ApiResponse,
    AppState,
};

#[derive(Debug, Deserialize)]
struct UpdateSymptomLogRequest {
    pub date: Option<DateTime<Utc>>,
    pub pain_level: Option<i32>,
    pub fatigue_level: Option<i32>,
    pub energy_level: Option<i32>,
    pub mood: Option<String>,
    pub additional_symptoms: Option<Vec<String>>,
    pub medications: Option<Vec<MedicationEntry>>,
    pub notes: Option<String>,
    pub voice_note_url: Option<String>,
}

#[put("/api/symptom-logs/{id}")]
pub async fn update_symptom_log_handler(
    user: AuthenticatedUser,
    data: web::Data<AppState>,
    path: web::Path<Uuid>,
    payload: web::Json<UpdateSymptomLogRequest>,
) -> impl Responder {
    let owner = UserId::from(user.user_id);
    let id = path.into_inner();
    let payload = payload.into_inner();

    let draft = SymptomLogDraft {
        date: payload.date,
        pain_level: payload.pain_level,
        fatigue_level: payload.fatigue_level,
        energy_level: payload.energy_level,
        mood: payload.mood,
        additional_symptoms: payload.additional_symptoms,
        medications: payload.medications,
        notes: payload.notes,
        voice_note_url: payload.voice_note_url,
    };

    let command = match AmendSymptomLogCommand::new(id, owner, draft) {
        Ok(cmd) => cmd,
        Err(err) => return map_command_error(err),
    };

    match data.symptom_logs.update.execute(command).await {
        Ok(log) => ApiResponse::success(log),
        Err(UpdateSymptomLogError::LogNotFound) => {
            ApiResponse::not_found("LOG_NOT_FOUND", "Symptom log not found")
        }
        Err(UpdateSymptomLogError::RepositoryError(_)) => ApiResponse::internal_error(),
    }
}

fn map_command_error(err: SymptomLogCommandError) -> actix_web::HttpResponse {
    let code = match err {
        SymptomLogCommandError::PainLevelOutOfRange => "PAIN_LEVEL_OUT_OF_RANGE",
        SymptomLogCommandError::FatigueLevelOutOfRange => "FATIGUE_LEVEL_OUT_OF_RANGE",
        SymptomLogCommandError::EnergyLevelOutOfRange => "ENERGY_LEVEL_OUT_OF_RANGE",
        SymptomLogCommandError::UnknownMood(_) => "UNKNOWN_MOOD",
    };

    ApiResponse::bad_request(code, &err.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::{http::StatusCode, test, App};
    use async_trait::async_trait;
    use std::sync::Arc;

    use crate::modules::auth::application::ports::outgoing::token_provider::TokenProvider;
    use crate::modules::symptom_log::application::ports::{
        incoming::use_cases::UpdateSymptomLogUseCase, outgoing::SymptomLogResult,
    };
    use crate::tests::support::app_state_builder::TestAppStateBuilder;
    use crate::tests::support::stubs::StubTokenProvider;

    struct MockUpdateLogUseCase {
        result: Result<SymptomLogResult, UpdateSymptomLogError>,
    }

    #[async_trait]
    impl UpdateSymptomLogUseCase for MockUpdateLogUseCase {
        async fn execute(
            &self,
            _command: AmendSymptomLogCommand,
        ) -> Result<SymptomLogResult, UpdateSymptomLogError> {
            self.result.clone()
        }
    }

    #[actix_web::test]
    async fn update_missing_log_returns_not_found() {
        let user_id = Uuid::new_v4();

        let state = TestAppStateBuilder::default()
            .with_update_symptom_log(MockUpdateLogUseCase {
                result: Err(UpdateSymptomLogError::LogNotFound),
            })
            .build();

        let token_provider: Arc<dyn TokenProvider + Send + Sync> =
            Arc::new(StubTokenProvider::accepting(user_id));

        let app = test::init_service(
            App::new()
                .app_data(state)
                .app_data(web::Data::new(token_provider))
                .service(update_symptom_log_handler),
        )
        .await;

        let req = test::TestRequest::put()
            .uri(&format!("/api/symptom-logs/{}", Uuid::new_v4()))
            .insert_header(("Authorization", "Bearer test-token"))
            .set_json(serde_json::json!({ "pain_level": 4 }))
            .to_request();

        let resp = test::call_service(&app, req).await;

        assert_eq!(resp.status(), StatusCode::NOT_FOUND);

        let body = test::read_body(resp).await;
        let json: serde_json::Value = serde_json::from_slice(&body).unwrap();
        assert_eq!(json["error"]["code"], "LOG_NOT_FOUND");
    }
}
