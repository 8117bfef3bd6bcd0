use async_trait::async_trait;
use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::Serialize;
use uuid::Uuid;

use crate::modules::auth::application::domain::entities::UserId;

#[derive(Debug, Clone)]
pub struct CreateExpenseData {
    pub owner: UserId,
    pub description: String,
    pub amount: Decimal,
    pub date: Option<DateTime<Utc>>,
    pub category: Option<String>,
    pub receipt_url: Option<String>,
    pub reimbursed: bool,
    pub insurance_claim: Option<String>,
}

#[derive(Debug, Clone, Default)]
pub struct UpdateExpenseData {
    pub description: Option<String>,
    pub amount: Option<Decimal>,
    pub date: Option<DateTime<Utc>>,
    pub category: Option<String>,
    pub receipt_url: Option<String>,
    pub reimbursed: Option<bool>,
    pub insurance_claim: Option<String>,
}

impl UpdateExpenseData {
    /// An update with no fields set is a no-op.
    pub fn is_empty(&self) -> bool {
        self.description.is_none()
            && self.amount.is_none()
            && self.date.is_none()
            && self.category.is_none()
            && self.receipt_url.is_none()
            && self.reimbursed.is_none()
            && self.insurance_claim.is_none()
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct ExpenseResult {
    pub id: Uuid,
    pub owner: UserId,
    pub description: String,
    pub amount: Decimal,
    pub date: DateTime<Utc>,
    pub category: Option<String>,
    pub receipt_url: Option<String>,
    pub reimbursed: bool,
    pub insurance_claim: Option<String>,
}

#[derive(Debug, Clone, thiserror::Error)]
pub enum ExpenseRepositoryError {
    #[error("Expense not found")]
    ExpenseNotFound,

    #[error("Database error: {0}")]
    DatabaseError(String),
}

#[async_trait]
pub trait ExpenseRepository: Send + Sync {
    async fn create_expense(
        &self,
        data: CreateExpenseData,
    ) -> Result<ExpenseResult, ExpenseRepositoryError>;

    /// Newest first.
    async fn list_expenses(
        &self,
        owner: UserId,
    ) -> Result<Vec<ExpenseResult>, ExpenseRepositoryError>;

    async fn update_expense(
        &self,
        id: Uuid,
        owner: UserId,
        updates: UpdateExpenseData,
    ) -> Result<ExpenseResult, ExpenseRepositoryError>;

    async fn delete_expense(&self, id: Uuid, owner: UserId)
        -> Result<bool, ExpenseRepositoryError>;
}
