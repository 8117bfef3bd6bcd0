use actix_web::{post, web, Responder};
use chrono::{DateTime, Utc};
use serde::Deserialize;

use crate::{
    modules::auth::{
        adapter::incoming::web::extractors::auth::AuthenticatedUser,
        application::domain::entities::UserId,
    },
    modules::symptom_log::application::ports::{
        incoming::use_cases::{
            CreateSymptomLogError, LogSymptomsCommand, SymptomLogCommandError, SymptomLogDraft,
        },
        outgoing::MedicationEntry,
    },
    shared::api::ApiResponse,
    AppState,
};

//
// ──────────────────────────────────────────────────────────
// Request DTO
// ──────────────────────────────────────────────────────────
//

#[derive(Debug, Deserialize)]
struct CreateSymptomLogRequest {
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

impl From<CreateSymptomLogRequest> for SymptomLogDraft {
    fn from(req: CreateSymptomLogRequest) -> Self {
        SymptomLogDraft {
            date: req.date,
            pain_level: req.pain_level,
            fatigue_level: req.fatigue_level,
            energy_level: req.energy_level,
            mood: req.mood,
            additional_symptoms: req.additional_symptoms,
            medications: req.medications,
            notes: req.notes,
            voice_note_url: req.voice_note_url,
        }
    }
}

//
// ──────────────────────────────────────────────────────────
// Route
// ──────────────────────────────────────────────────────────
//

#[post("/api/symptom-logs")]
pub async fn create_symptom_log_handler(
    user: AuthenticatedUser,
    data: web::Data<AppState>,
    payload: web::Json<CreateSymptomLogRequest>,
) -> impl Responder {
    let owner = UserId::from(user.user_id);

    let command = match LogSymptomsCommand::new(owner, payload.into_inner().into()) {
        Ok(cmd) => cmd,
        Err(err) => return map_command_error(err),
    };

    match data.symptom_logs.create.execute(command).await {
        Ok(log) => ApiResponse::created(log),
        Err(CreateSymptomLogError::RepositoryError(_)) => ApiResponse::internal_error(),
    }
}

//
// ──────────────────────────────────────────────────────────
// Error Mapping
// ──────────────────────────────────────────────────────────
//

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
    use uuid::Uuid;

    use crate::modules::auth::application::ports::outgoing::token_provider::TokenProvider;
    use crate::modules::symptom_log::application::ports::{
        incoming::use_cases::CreateSymptomLogUseCase, outgoing::SymptomLogResult,
    };
    use crate::tests::support::app_state_builder::TestAppStateBuilder;
    use crate::tests::support::stubs::StubTokenProvider;

    struct MockCreateLogUseCase {
        result: Result<SymptomLogResult, CreateSymptomLogError>,
    }

    #[async_trait]
    impl CreateSymptomLogUseCase for MockCreateLogUseCase {
        async fn execute(
            &self,
            _command: LogSymptomsCommand,
        ) -> Result<SymptomLogResult, CreateSymptomLogError> {
            self.result.clone()
        }
    }

    fn sample_log(owner: UserId) -> SymptomLogResult {
        SymptomLogResult {
            id: Uuid::new_v4(),
            owner,
            date: Utc::now(),
            pain_level: Some(7),
            fatigue_level: Some(3),
            energy_level: Some(4),
            mood: Some("good".to_string()),
            additional_symptoms: None,
            medications: None,
            notes: None,
            voice_note_url: None,
        }
    }

    async fn read_json(resp: actix_web::dev::ServiceResponse) -> serde_json::Value {
        let body = test::read_body(resp).await;
        serde_json::from_slice(&body).unwrap()
    }

    fn bearer() -> (&'static str, &'static str) {
        ("Authorization", "Bearer test-token")
    }

    #[actix_web::test]
    async fn create_log_success_returns_created_record() {
        let user_id = Uuid::new_v4();
        let owner = UserId::from(user_id);

        let state = TestAppStateBuilder::default()
            .with_create_symptom_log(MockCreateLogUseCase {
                result: Ok(sample_log(owner)),
            })
            .build();

        let token_provider: Arc<dyn TokenProvider + Send + Sync> =
            Arc::new(StubTokenProvider::accepting(user_id));

        let app = test::init_service(
            App::new()
                .app_data(state)
                .app_data(web::Data::new(token_provider))
                .service(create_symptom_log_handler),
        )
        .await;

        let req = test::TestRequest::post()
            .uri("/api/symptom-logs")
            .insert_header(bearer())
            .set_json(serde_json::json!({
                "pain_level": 7,
                "fatigue_level": 3,
                "energy_level": 4,
                "mood": "good"
            }))
            .to_request();

        let resp = test::call_service(&app, req).await;

        assert_eq!(resp.status(), StatusCode::CREATED);

        let json = read_json(resp).await;
        assert_eq!(json["success"], true);
        assert_eq!(json["data"]["pain_level"], 7);
        assert_eq!(json["data"]["fatigue_level"], 3);
        assert_eq!(json["data"]["energy_level"], 4);
        assert_eq!(json["data"]["mood"], "good");
        assert!(json["data"]["id"].is_string());
        assert!(json["data"]["date"].is_string());
    }

    #[actix_web::test]
    async fn create_log_out_of_range_pain_returns_bad_request() {
        let user_id = Uuid::new_v4();

        let state = TestAppStateBuilder::default().build();

        let token_provider: Arc<dyn TokenProvider + Send + Sync> =
            Arc::new(StubTokenProvider::accepting(user_id));

        let app = test::init_service(
            App::new()
                .app_data(state)
                .app_data(web::Data::new(token_provider))
                .service(create_symptom_log_handler),
        )
        .await;

        let req = test::TestRequest::post()
            .uri("/api/symptom-logs")
            .insert_header(bearer())
            .set_json(serde_json::json!({ "pain_level": 11 }))
            .to_request();

        let resp = test::call_service(&app, req).await;

        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);

        let json = read_json(resp).await;
        assert_eq!(json["success"], false);
        assert_eq!(json["error"]["code"], "PAIN_LEVEL_OUT_OF_RANGE");
    }

    #[actix_web::test]
    async fn create_log_without_token_returns_unauthorized() {
        let state = TestAppStateBuilder::default().build();

        let token_provider: Arc<dyn TokenProvider + Send + Sync> =
            Arc::new(StubTokenProvider::rejecting());

        let app = test::init_service(
            App::new()
                .app_data(state)
                .app_data(web::Data::new(token_provider))
                .service(create_symptom_log_handler),
        )
        .await;

        let req = test::TestRequest::post()
            .uri("/api/symptom-logs")
            .set_json(serde_json::json!({ "pain_level": 5 }))
            .to_request();

        let resp = test::call_service(&app, req).await;

        assert_eq!(resp.status(), StatusCode::UNAUTHORIZED);
    }
}
