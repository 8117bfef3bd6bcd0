use actix_web::{put, web, Responder};
use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::Deserialize;
use uuid::Uuid;

use crate::{
    modules::auth::{
        adapter::incoming::web::extractors::auth::AuthenticatedUser,
        application::domain::entities::UserId,
    },
    modules::expense::application::ports::{
        incoming::use_cases::{AmendExpenseCommand, ExpenseCommandError, UpdateExpenseError},
        outgoing::UpdateExpenseData,
    },
    shared::api::ApiResponse,
    AppState,
};

#[derive(Debug, Deserialize)]
struct UpdateExpenseRequest {
    pub description: Option<String>,
    pub amount: Option<Decimal>,
    pub date: Option<DateTime<Utc>>,
    pub category: Option<String>,
    pub receipt_url: Option<String>,
    pub reimbursed: Option<bool>,
    pub insurance_claim: Option<String>,
}

#[put("/api/expenses/{id}")]
pub async fn update_expense_handler(
    user: AuthenticatedUser,
    data: web::Data<AppState>,
    path: web::Path<Uuid>,
    payload: web::Json<UpdateExpenseRequest>,
) -> impl Responder {
    let owner = UserId::from(user.user_id);
    let id = path.into_inner();
    let payload = payload.into_inner();

    let changes = UpdateExpenseData {
        description: payload.description,
        amount: payload.amount,
        date: payload.date,
        category: payload.category,
        receipt_url: payload.receipt_url,
        reimbursed: payload.reimbursed,
        insurance_claim: payload.insurance_claim,
    };

    let command = match AmendExpenseCommand::new(id, owner, changes) {
        Ok(cmd) => cmd,
        Err(err) => return map_command_error(err),
    };

    match data.expenses.update.execute(command).await {
        Ok(expense) => ApiResponse::success(expense),
        Err(UpdateExpenseError::ExpenseNotFound) => {
            ApiResponse::not_found("EXPENSE_NOT_FOUND", "Expense not found")
        }
        Err(UpdateExpenseError::RepositoryError(_)) => ApiResponse::internal_error(),
    }
}

fn map_command_error(err: ExpenseCommandError) -> actix_web::HttpResponse {
    let code = match err {
        ExpenseCommandError::EmptyDescription => "EMPTY_DESCRIPTION",
        ExpenseCommandError::NegativeAmount => "NEGATIVE_AMOUNT",
    };

    ApiResponse::bad_request(code, &err.to_string())
}
