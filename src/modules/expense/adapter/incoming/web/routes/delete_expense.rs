use actix_web::{delete, web, Responder};
use uuid::Uuid;

use crate::{
    modules::auth::{
        adapter::incoming::web::extractors::auth::AuthenticatedUser,
        application::domain::entities::UserId,
    },
    modules::expense::application::ports::incoming::use_cases::DeleteExpenseError,
    shared::api::ApiResponse,
    AppState,
};

#[delete("/api/expenses/{id}")]
pub async fn delete_expense_handler(
    user: AuthenticatedUser,
    data: web::Data<AppState>,
    path: web::Path<Uuid>,
) -> impl Responder {
    let owner = UserId::from(user.user_id);
    let id = path.into_inner();

    match data.expenses.delete.execute(id, owner).await {
        Ok(()) => ApiResponse::no_content(),
        Err(DeleteExpenseError::ExpenseNotFound) => {
            ApiResponse::not_found("EXPENSE_NOT_FOUND", "Expense not found")
        }
        Err(DeleteExpenseError::RepositoryError(_)) => ApiResponse::internal_error(),
    }
}
