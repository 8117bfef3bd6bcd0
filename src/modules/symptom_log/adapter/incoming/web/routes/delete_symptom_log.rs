use actix_web::{delete, web, Responder};
use uuid::Uuid;

use crate::{
    modules::auth::{
        adapter::incoming::web::extractors::auth::AuthenticatedUser,
        application::domain::entities::UserId,
    },
    modules::symptom_log::application::ports::incoming::use_cases::DeleteSymptomLogError,
    shared::api::ApiResponse,
    AppState,
};

#[delete("/api/symptom-logs/{id}")]
pub async fn delete_symptom_log_handler(
    user: AuthenticatedUser,
    data: web::Data<AppState>,
    path: web::Path<Uuid>,
) -> impl Responder {
    let owner = UserId::from(user.user_id);
    let id = path.into_inner();

    match data.symptom_logs.delete.execute(id, owner).await {
        Ok(()) => ApiResponse::no_content(),
        Err(DeleteSymptomLogError::LogNotFound) => {
            ApiResponse::not_found("LOG_NOT_FOUND", "Symptom log not found")
        }
        Err(DeleteSymptomLogError::RepositoryError(_)) => ApiResponse::internal_error(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::{http::StatusCode, test, App};
    use async_trait::async_trait;
    use std::sync::Arc;

    use crate::modules::auth::application::ports::outgoing::token_provider::TokenProvider;
    use crate::modules::symptom_log::application::ports::incoming::use_cases::DeleteSymptomLogUseCase;
    use crate::tests::support::app_state_builder::TestAppStateBuilder;
    use crate::tests::support::stubs::StubTokenProvider;

    struct MockDeleteLogUseCase {
        result: Result<(), DeleteSymptomLogError>,
    }

    #[async_trait]
    impl DeleteSymptomLogUseCase for MockDeleteLogUseCase {
        async fn execute(&self, _id: Uuid, _owner: UserId) -> Result<(), DeleteSymptomLogError> {
            self.result.clone()
        }
    }

    async fn call_delete(result: Result<(), DeleteSymptomLogError>) -> StatusCode {
        let user_id = Uuid::new_v4();

        let state = TestAppStateBuilder::default()
            .with_delete_symptom_log(MockDeleteLogUseCase { result })
            .build();

        let token_provider: Arc<dyn TokenProvider + Send + Sync> =
            Arc::new(StubTokenProvider::accepting(user_id));

        let app = test::init_service(
            App::new()
                .app_data(state)
                .app_data(web::Data::new(token_provider))
                .service(delete_symptom_log_handler),
        )
        .await;

        let req = test::TestRequest::delete()
            .uri(&format!("/api/symptom-logs/{}", Uuid::new_v4()))
            .insert_header(("Authorization", "Bearer test-token"))
            .to_request();

        test::call_service(&app, req).await.status()
    }

    #[actix_web::test]
    async fn delete_success_returns_no_content() {
        assert_eq!(call_delete(Ok(())).await, StatusCode::NO_CONTENT);
    }

    #[actix_web::test]
    async fn delete_missing_returns_not_found() {
        assert_eq!(
            call_delete(Err(DeleteSymptomLogError::LogNotFound)).await,
            StatusCode::NOT_FOUND
        );
    }
}
