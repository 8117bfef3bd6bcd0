use async_trait::async_trait;
use uuid::Uuid;

use crate::modules::auth::application::domain::entities::UserId;
use crate::modules::health_task::application::ports::{
    incoming::use_cases::{
        AddHealthTaskCommand, AddHealthTaskError, AddHealthTaskUseCase, AmendHealthTaskCommand,
        DeleteHealthTaskError, DeleteHealthTaskUseCase, ListHealthTasksError,
        ListHealthTasksUseCase, UpdateHealthTaskError, UpdateHealthTaskUseCase,
    },
    outgoing::{
        CreateHealthTaskData, HealthTaskRepository, HealthTaskRepositoryError, HealthTaskResult,
    },
};

#[derive(Debug, Clone)]
pub struct HealthTaskService<R>
where
    R: HealthTaskRepository + Send + Sync,
{
    repository: R,
}

impl<R> HealthTaskService<R>
where
    R: HealthTaskRepository + Send + Sync,
{
    pub fn new(repository: R) -> Self {
        Self { repository }
    }
}

#[async_trait]
impl<R> AddHealthTaskUseCase for HealthTaskService<R>
where
    R: HealthTaskRepository + Send + Sync,
{
    async fn execute(
        &self,
        command: AddHealthTaskCommand,
    ) -> Result<HealthTaskResult, AddHealthTaskError> {
        self.repository
            .create_task(CreateHealthTaskData {
                owner: command.owner(),
                title: command.title().to_string(),
                description: command.description().cloned(),
                due_date: command.due_date(),
                snoozed_until: command.snoozed_until(),
                priority: command.priority().to_string(),
                category: command.category().cloned(),
            })
            .await
            .map_err(|e| AddHealthTaskError::RepositoryError(e.to_string()))
    }
}

#[async_trait]
impl<R> ListHealthTasksUseCase for HealthTaskService<R>
where
    R: HealthTaskRepository + Send + Sync,
{
    async fn execute(&self, owner: UserId) -> Result<Vec<HealthTaskResult>, ListHealthTasksError> {
        self.repository
            .list_tasks(owner)
            .await
            .map_err(|e| ListHealthTasksError::QueryFailed(e.to_string()))
    }
}

#[async_trait]
impl<R> UpdateHealthTaskUseCase for HealthTaskService<R>
where
    R: HealthTaskRepository + Send + Sync,
{
    async fn execute(
        &self,
        command: AmendHealthTaskCommand,
    ) -> Result<HealthTaskResult, UpdateHealthTaskError> {
        let id = command.id();
        let owner = command.owner();

        self.repository
            .update_task(id, owner, command.into_changes())
            .await
            .map_err(|e| match e {
                HealthTaskRepositoryError::TaskNotFound => UpdateHealthTaskError::TaskNotFound,
                other => UpdateHealthTaskError::RepositoryError(other.to_string()),
            })
    }
}

#[async_trait]
impl<R> DeleteHealthTaskUseCase for HealthTaskService<R>
where
    R: HealthTaskRepository + Send + Sync,
{
    async fn execute(&self, id: Uuid, owner: UserId) -> Result<(), DeleteHealthTaskError> {
        let deleted = self
            .repository
            .delete_task(id, owner)
            .await
            .map_err(|e| DeleteHealthTaskError::RepositoryError(e.to_string()))?;

        if !deleted {
            return Err(DeleteHealthTaskError::TaskNotFound);
        }

        Ok(())
    }
}
