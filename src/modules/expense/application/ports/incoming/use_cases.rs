use async_trait::async_trait;
use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use std::sync::Arc;
use uuid::Uuid;

use crate::modules::auth::application::domain::entities::UserId;
use crate::modules::expense::application::ports::outgoing::{ExpenseResult, UpdateExpenseData};

#[derive(Debug, thiserror::Error)]
pub enum ExpenseCommandError {
    #[error("Description cannot be empty")]
    EmptyDescription,

    #[error("Amount cannot be negative")]
    NegativeAmount,
}

//
// ──────────────────────────────────────────────────────────
// Commands
// ──────────────────────────────────────────────────────────
//

#[derive(Debug, Clone)]
pub struct RecordExpenseCommand {
    owner: UserId,
    description: String,
    amount: Decimal,
    date: Option<DateTime<Utc>>,
    category: Option<String>,
    receipt_url: Option<String>,
    reimbursed: bool,
    insurance_claim: Option<String>,
}

impl RecordExpenseCommand {
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        owner: UserId,
        description: String,
        amount: Decimal,
        date: Option<DateTime<Utc>>,
        category: Option<String>,
        receipt_url: Option<String>,
        reimbursed: Option<bool>,
        insurance_claim: Option<String>,
    ) -> Result<Self, ExpenseCommandError> {
        let description = description.trim().to_string();

        if description.is_empty() {
            return Err(ExpenseCommandError::EmptyDescription);
        }

        if amount.is_sign_negative() {
            return Err(ExpenseCommandError::NegativeAmount);
        }

        Ok(Self {
            owner,
            description,
            amount,
            date,
            category,
            receipt_url,
            reimbursed: reimbursed.unwrap_or(false),
            insurance_claim,
        })
    }

    pub fn owner(&self) -> UserId {
        self.owner
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    pub fn amount(&self) -> Decimal {
        self.amount
    }

    pub fn date(&self) -> Option<DateTime<Utc>> {
        self.date
    }

    pub fn category(&self) -> Option<&String> {
        self.category.as_ref()
    }

    pub fn receipt_url(&self) -> Option<&String> {
        self.receipt_url.as_ref()
    }

    pub fn reimbursed(&self) -> bool {
        self.reimbursed
    }

    pub fn insurance_claim(&self) -> Option<&String> {
        self.insurance_claim.as_ref()
    }
}

#[derive(Debug, Clone)]
pub struct AmendExpenseCommand {
    id: Uuid,
    owner: UserId,
    changes: UpdateExpenseData,
}

impl AmendExpenseCommand {
    pub fn new(
        id: Uuid,
        owner: UserId,
        changes: UpdateExpenseData,
    ) -> Result<Self, ExpenseCommandError> {
        if let Some(ref description) = changes.description {
            if description.trim().is_empty() {
                return Err(ExpenseCommandError::EmptyDescription);
            }
        }
        if let Some(amount) = changes.amount {
            if amount.is_sign_negative() {
                return Err(ExpenseCommandError::NegativeAmount);
            }
        }

        Ok(Self { id, owner, changes })
    }

    pub fn id(&self) -> Uuid {
        self.id
    }

    pub fn owner(&self) -> UserId {
        self.owner
    }

    pub fn into_changes(self) -> UpdateExpenseData {
        self.changes
    }
}

//
// ──────────────────────────────────────────────────────────
// Use case errors and ports
// ──────────────────────────────────────────────────────────
//

#[derive(Debug, Clone, thiserror::Error)]
pub enum RecordExpenseError {
    #[error("Repository error: {0}")]
    RepositoryError(String),
}

#[derive(Debug, Clone, thiserror::Error)]
pub enum ListExpensesError {
    #[error("Query failed: {0}")]
    QueryFailed(String),
}

#[derive(Debug, Clone, thiserror::Error)]
pub enum UpdateExpenseError {
    #[error("Expense not found")]
    ExpenseNotFound,

    #[error("Repository error: {0}")]
    RepositoryError(String),
}

#[derive(Debug, Clone, thiserror::Error)]
pub enum DeleteExpenseError {
    #[error("Expense not found")]
    ExpenseNotFound,

    #[error("Repository error: {0}")]
    RepositoryError(String),
}

#[async_trait]
pub trait RecordExpenseUseCase: Send + Sync {
    async fn execute(
        &self,
        command: RecordExpenseCommand,
    ) -> Result<ExpenseResult, RecordExpenseError>;
}

#[async_trait]
pub trait ListExpensesUseCase: Send + Sync {
    async fn execute(&self, owner: UserId) -> Result<Vec<ExpenseResult>, ListExpensesError>;
}

#[async_trait]
pub trait UpdateExpenseUseCase: Send + Sync {
    async fn execute(
        &self,
        command: AmendExpenseCommand,
    ) -> Result<ExpenseResult, UpdateExpenseError>;
}

#[async_trait]
pub trait DeleteExpenseUseCase: Send + Sync {
    async fn execute(&self, id: Uuid, owner: UserId) -> Result<(), DeleteExpenseError>;
}

#[derive(Clone)]
pub struct ExpenseUseCases {
    pub record: Arc<dyn RecordExpenseUseCase>,
    pub list: Arc<dyn ListExpensesUseCase>,
    pub update: Arc<dyn UpdateExpenseUseCase>,
    pub delete: Arc<dyn DeleteExpenseUseCase>,
}
