use actix_web::{get, web, Responder};

use crate::{
    modules::auth::{
        adapter::incoming::web::extractors::auth::AuthenticatedUser,
        application::domain::entities::UserId,
    },
    modules::expense::application::ports::incoming::use_cases::ListExpensesError,
    shared::api::ApiResponse,
    AppState,
};

#[get("/api/expenses")]
pub async fn get_expenses_handler(
    user: AuthenticatedUser,
    data: web::Data<AppState>,
) -> impl Responder {
    let owner = UserId::from(user.user_id);

    match data.expenses.list.execute(owner).await {
        Ok(expenses) => ApiResponse::success(expenses),
        Err(ListExpensesError::QueryFailed(_)) => ApiResponse::internal_error(),
    }
}
