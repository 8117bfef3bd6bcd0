use actix_web::{post, web, Responder};
use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::Deserialize;

use crate::{
    modules::auth::{
        adapter::incoming::web::extractors::auth::AuthenticatedUser,
        application::domain::entities::UserId,
    },
    modules::expense::application::ports::incoming::use_cases::{
        ExpenseCommandError, RecordExpenseCommand, RecordExpenseError,
    },
    shared::api::ApiResponse,
    AppState,
};

#[derive(Debug, Deserialize)]
struct CreateExpenseRequest {
    pub description: String,
    pub amount: Decimal,
    pub date: Option<DateTime<Utc>>,
    pub category: Option<String>,
    pub receipt_url: Option<String>,
    pub reimbursed: Option<bool>,
    pub insurance_claim: Option<String>,
}

#[post("/api/expenses")]
pub async fn create_expense_handler(
    user: AuthenticatedUser,
    data: web::Data<AppState>,
    payload: web::Json<CreateExpenseRequest>,
) -> impl Responder {
    let owner = UserId::from(user.user_id);
    let payload = payload.into_inner();

    let command = match RecordExpenseCommand::new(
        owner,
        payload.description,
        payload.amount,
        payload.date,
        payload.category,
        payload.receipt_url,
        payload.reimbursed,
        payload.insurance_claim,
    ) {
        Ok(cmd) => cmd,
        Err(err) => return map_command_error(err),
    };

    match data.expenses.record.execute(command).await {
        Ok(expense) => ApiResponse::created(expense),
        Err(RecordExpenseError::RepositoryError(_)) => ApiResponse::internal_error(),
    }
}

fn map_command_error(err: ExpenseCommandError) -> actix_web::HttpResponse {
    let code = match err {
        ExpenseCommandError::EmptyDescription => "EMPTY_DESCRIPTION",
        ExpenseCommandError::NegativeAmount => "NEGATIVE_AMOUNT",
    };

    ApiResponse::bad_request(code, &err.to_string())
}
