use async_trait::async_trait;
use uuid::Uuid;

use crate::modules::auth::application::domain::entities::UserId;
use crate::modules::expense::application::ports::{
    incoming::use_cases::{
        AmendExpenseCommand, DeleteExpenseError, DeleteExpenseUseCase, ListExpensesError,
        ListExpensesUseCase, RecordExpenseCommand, RecordExpenseError, RecordExpenseUseCase,
        UpdateExpenseError, UpdateExpenseUseCase,
    },
    outgoing::{CreateExpenseData, ExpenseRepository, ExpenseRepositoryError, ExpenseResult},
};

#[derive(Debug, Clone)]
pub struct ExpenseService<R>
where
    R: ExpenseRepository + Send + Sync,
{
    repository: R,
}

impl<R> ExpenseService<R>
where
    R: ExpenseRepository + Send + Sync,
{
    pub fn new(repository: R) -> Self {
        Self { repository }
    }
}

#[async_trait]
impl<R> RecordExpenseUseCase for ExpenseService<R>
where
    R: ExpenseRepository + Send + Sync,
{
    async fn execute(
        &self,
        command: RecordExpenseCommand,
    ) -> Result<ExpenseResult, RecordExpenseError> {
        self.repository
            .create_expense(CreateExpenseData {
                owner: command.owner(),
                description: command.description().to_string(),
                amount: command.amount(),
                date: command.date(),
                category: command.category().cloned(),
                receipt_url: command.receipt_url().cloned(),
                reimbursed: command.reimbursed(),
                insurance_claim: command.insurance_claim().cloned(),
            })
            .await
            .map_err(|e| RecordExpenseError::RepositoryError(e.to_string()))
    }
}

#[async_trait]
impl<R> ListExpensesUseCase for ExpenseService<R>
where
    R: ExpenseRepository + Send + Sync,
{
    async fn execute(&self, owner: UserId) -> Result<Vec<ExpenseResult>, ListExpensesError> {
        self.repository
            .list_expenses(owner)
            .await
            .map_err(|e| ListExpensesError::QueryFailed(e.to_string()))
    }
}

#[async_trait]
impl<R> UpdateExpenseUseCase for ExpenseService<R>
where
    R: ExpenseRepository + Send + Sync,
{
    async fn execute(
        &self,
        command: AmendExpenseCommand,
    ) -> Result<ExpenseResult, UpdateExpenseError> {
        let id = command.id();
        let owner = command.owner();

        self.repository
            .update_expense(id, owner, command.into_changes())
            .await
            .map_err(|e| match e {
                ExpenseRepositoryError::ExpenseNotFound => UpdateExpenseError::ExpenseNotFound,
                other => UpdateExpenseError::RepositoryError(other.to_string()),
            })
    }
}

#[async_trait]
impl<R> DeleteExpenseUseCase for ExpenseService<R>
where
    R: ExpenseRepository + Send + Sync,
{
    async fn execute(&self, id: Uuid, owner: UserId) -> Result<(), DeleteExpenseError> {
        let deleted = self
            .repository
            .delete_expense(id, owner)
            .await
            .map_err(|e| DeleteExpenseError::RepositoryError(e.to_string()))?;

        if !deleted {
            return Err(DeleteExpenseError::ExpenseNotFound);
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;
    use rust_decimal::Decimal;

    use crate::modules::expense::application::ports::outgoing::UpdateExpenseData;

    #[derive(Default)]
    struct MockRepo {
        create_result: Option<Result<ExpenseResult, ExpenseRepositoryError>>,
        update_result: Option<Result<ExpenseResult, ExpenseRepositoryError>>,
        delete_result: Option<Result<bool, ExpenseRepositoryError>>,
    }

    #[async_trait]
    impl ExpenseRepository for MockRepo {
        async fn create_expense(
            &self,
            _data: CreateExpenseData,
        ) -> Result<ExpenseResult, ExpenseRepositoryError> {
            self.create_result.clone().unwrap()
        }

        async fn list_expenses(
            &self,
            _owner: UserId,
        ) -> Result<Vec<ExpenseResult>, ExpenseRepositoryError> {
            unimplemented!()
        }

        async fn update_expense(
            &self,
            _id: Uuid,
            _owner: UserId,
            _updates: UpdateExpenseData,
        ) -> Result<ExpenseResult, ExpenseRepositoryError> {
            self.update_result.clone().unwrap()
        }

        async fn delete_expense(
            &self,
            _id: Uuid,
            _owner: UserId,
        ) -> Result<bool, ExpenseRepositoryError> {
            self.delete_result.clone().unwrap()
        }
    }

    fn sample_expense(owner: UserId) -> ExpenseResult {
        ExpenseResult {
            id: Uuid::new_v4(),
            owner,
            description: "Copay".to_string(),
            amount: "25.00".parse::<Decimal>().unwrap(),
            date: Utc::now(),
            category: Some("appointment".to_string()),
            receipt_url: None,
            reimbursed: false,
            insurance_claim: None,
        }
    }

    #[tokio::test]
    async fn record_expense_returns_persisted_record() {
        let owner = UserId::from(Uuid::new_v4());
        let expected = sample_expense(owner);

        let service = ExpenseService::new(MockRepo {
            create_result: Some(Ok(expected.clone())),
            ..Default::default()
        });

        let command = RecordExpenseCommand::new(
            owner,
            "Copay".to_string(),
            "25.00".parse().unwrap(),
            None,
            Some("appointment".to_string()),
            None,
            None,
            None,
        )
        .unwrap();

        let expense = RecordExpenseUseCase::execute(&service, command).await.unwrap();

        assert_eq!(expense.id, expected.id);
        assert_eq!(expense.amount, "25.00".parse::<Decimal>().unwrap());
    }

    #[tokio::test]
    async fn update_missing_expense_maps_to_not_found() {
        let owner = UserId::from(Uuid::new_v4());

        let service = ExpenseService::new(MockRepo {
            update_result: Some(Err(ExpenseRepositoryError::ExpenseNotFound)),
            ..Default::default()
        });

        let command =
            AmendExpenseCommand::new(Uuid::new_v4(), owner, UpdateExpenseData::default()).unwrap();

        let result = UpdateExpenseUseCase::execute(&service, command).await;

        assert!(matches!(result, Err(UpdateExpenseError::ExpenseNotFound)));
    }

    #[tokio::test]
    async fn delete_without_matching_row_maps_to_not_found() {
        let owner = UserId::from(Uuid::new_v4());

        let service = ExpenseService::new(MockRepo {
            delete_result: Some(Ok(false)),
            ..Default::default()
        });

        let result = DeleteExpenseUseCase::execute(&service, Uuid::new_v4(), owner).await;

        assert!(matches!(result, Err(DeleteExpenseError::ExpenseNotFound)));
    }
}
