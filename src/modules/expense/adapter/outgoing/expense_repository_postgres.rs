use async_trait::async_trait;
use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter, QueryOrder, Set,
};
use std::sync::Arc;
use uuid::Uuid;

use crate::modules::auth::application::domain::entities::UserId;
use crate::modules::expense::application::ports::outgoing::{
    CreateExpenseData, ExpenseRepository, ExpenseRepositoryError, ExpenseResult, UpdateExpenseData,
};

use super::sea_orm_entity::{
    ActiveModel as ExpenseActiveModel, Column, Entity as Expenses, Model as ExpenseModel,
};

#[derive(Debug, Clone)]
pub struct ExpenseRepositoryPostgres {
    db: Arc<DatabaseConnection>,
}

impl ExpenseRepositoryPostgres {
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }
}

#[async_trait]
impl ExpenseRepository for ExpenseRepositoryPostgres {
    async fn create_expense(
        &self,
        data: CreateExpenseData,
    ) -> Result<ExpenseResult, ExpenseRepositoryError> {
        let active = ExpenseActiveModel {
            id: Set(Uuid::new_v4()),
            user_id: Set(data.owner.into()),
            description: Set(data.description),
            amount: Set(data.amount),
            date: Set(data.date.unwrap_or_else(Utc::now).into()),
            category: Set(data.category),
            receipt_url: Set(data.receipt_url),
            reimbursed: Set(data.reimbursed),
            insurance_claim: Set(data.insurance_claim),
        };

        let inserted: ExpenseModel = active
            .insert(&*self.db)
            .await
            .map_err(|e| ExpenseRepositoryError::DatabaseError(e.to_string()))?;

        Ok(inserted.to_repository_result())
    }

    async fn list_expenses(
        &self,
        owner: UserId,
    ) -> Result<Vec<ExpenseResult>, ExpenseRepositoryError> {
        let models = Expenses::find()
            .filter(Column::UserId.eq(owner.value()))
            .order_by_desc(Column::Date)
            .all(&*self.db)
            .await
            .map_err(|e| ExpenseRepositoryError::DatabaseError(e.to_string()))?;

        Ok(models
            .iter()
            .map(ExpenseModel::to_repository_result)
            .collect())
    }

    async fn update_expense(
        &self,
        id: Uuid,
        owner: UserId,
        updates: UpdateExpenseData,
    ) -> Result<ExpenseResult, ExpenseRepositoryError> {
        let found = Expenses::find_by_id(id)
            .filter(Column::UserId.eq(owner.value()))
            .one(&*self.db)
            .await
            .map_err(|e| ExpenseRepositoryError::DatabaseError(e.to_string()))?
            .ok_or(ExpenseRepositoryError::ExpenseNotFound)?;

        if updates.is_empty() {
            return Ok(found.to_repository_result());
        }

        let mut active: ExpenseActiveModel = found.into();

        if let Some(description) = updates.description {
            active.description = Set(description);
        }
        if let Some(amount) = updates.amount {
            active.amount = Set(amount);
        }
        if let Some(date) = updates.date {
            active.date = Set(date.into());
        }
        if let Some(category) = updates.category {
            active.category = Set(Some(category));
        }
        if let Some(receipt_url) = updates.receipt_url {
            active.receipt_url = Set(Some(receipt_url));
        }
        if let Some(reimbursed) = updates.reimbursed {
            active.reimbursed = Set(reimbursed);
        }
        if let Some(insurance_claim) = updates.insurance_claim {
            active.insurance_claim = Set(Some(insurance_claim));
        }

        let updated: ExpenseModel = active
            .update(&*self.db)
            .await
            .map_err(|e| ExpenseRepositoryError::DatabaseError(e.to_string()))?;

        Ok(updated.to_repository_result())
    }

    async fn delete_expense(
        &self,
        id: Uuid,
        owner: UserId,
    ) -> Result<bool, ExpenseRepositoryError> {
        let result = Expenses::delete_many()
            .filter(Column::Id.eq(id))
            .filter(Column::UserId.eq(owner.value()))
            .exec(&*self.db)
            .await
            .map_err(|e| ExpenseRepositoryError::DatabaseError(e.to_string()))?;

        Ok(result.rows_affected > 0)
    }
}
