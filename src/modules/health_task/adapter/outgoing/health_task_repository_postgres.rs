use async_trait::async_trait;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter, QueryOrder, Set,
};
use std::sync::Arc;
use uuid::Uuid;

use crate::modules::auth::application::domain::entities::UserId;
use crate::modules::health_task::application::ports::outgoing::{
    CreateHealthTaskData, HealthTaskRepository, HealthTaskRepositoryError, HealthTaskResult,
    UpdateHealthTaskData,
};

use super::sea_orm_entity::{
    ActiveModel as TaskActiveModel, Column, Entity as HealthTasks, Model as TaskModel,
};

#[derive(Debug, Clone)]
pub struct HealthTaskRepositoryPostgres {
    db: Arc<DatabaseConnection>,
}

impl HealthTaskRepositoryPostgres {
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }
}

#[async_trait]
impl HealthTaskRepository for HealthTaskRepositoryPostgres {
    async fn create_task(
        &self,
        data: CreateHealthTaskData,
    ) -> Result<HealthTaskResult, HealthTaskRepositoryError> {
        let active = TaskActiveModel {
            id: Set(Uuid::new_v4()),
            user_id: Set(data.owner.into()),
            title: Set(data.title),
            description: Set(data.description),
            due_date: Set(data.due_date.map(Into::into)),
            completed: Set(false),
            snoozed_until: Set(data.snoozed_until.map(Into::into)),
            priority: Set(data.priority),
            category: Set(data.category),
        };

        let inserted: TaskModel = active
            .insert(&*self.db)
            .await
            .map_err(|e| HealthTaskRepositoryError::DatabaseError(e.to_string()))?;

        Ok(inserted.to_repository_result())
    }

    async fn list_tasks(
        &self,
        owner: UserId,
    ) -> Result<Vec<HealthTaskResult>, HealthTaskRepositoryError> {
        let models = HealthTasks::find()
            .filter(Column::UserId.eq(owner.value()))
            .order_by_asc(Column::DueDate)
            .all(&*self.db)
            .await
            .map_err(|e| HealthTaskRepositoryError::DatabaseError(e.to_string()))?;

        Ok(models.iter().map(TaskModel::to_repository_result).collect())
    }

    async fn update_task(
        &self,
        id: Uuid,
        owner: UserId,
        updates: UpdateHealthTaskData,
    ) -> Result<HealthTaskResult, HealthTaskRepositoryError> {
        let found = HealthTasks::find_by_id(id)
            .filter(Column::UserId.eq(owner.value()))
            .one(&*self.db)
            .await
            .map_err(|e| HealthTaskRepositoryError::DatabaseError(e.to_string()))?
            .ok_or(HealthTaskRepositoryError::TaskNotFound)?;

        if updates.is_empty() {
            return Ok(found.to_repository_result());
        }

        let mut active: TaskActiveModel = found.into();

        if let Some(title) = updates.title {
            active.title = Set(title);
        }
        if let Some(description) = updates.description {
            active.description = Set(Some(description));
        }
        if let Some(due_date) = updates.due_date {
            active.due_date = Set(Some(due_date.into()));
        }
        if let Some(completed) = updates.completed {
            active.completed = Set(completed);
        }
        if let Some(snoozed_until) = updates.snoozed_until {
            active.snoozed_until = Set(Some(snoozed_until.into()));
        }
        if let Some(priority) = updates.priority {
            active.priority = Set(priority);
        }
        if let Some(category) = updates.category {
            active.category = Set(Some(category));
        }

        let updated: TaskModel = active
            .update(&*self.db)
            .await
            .map_err(|e| HealthTaskRepositoryError::DatabaseError(e.to_string()))?;

        Ok(updated.to_repository_result())
    }

    async fn delete_task(
        &self,
        id: Uuid,
        owner: UserId,
    ) -> Result<bool, HealthTaskRepositoryError> {
        let result = HealthTasks::delete_many()
            .filter(Column::Id.eq(id))
            .filter(Column::UserId.eq(owner.value()))
            .exec(&*self.db)
            .await
            .map_err(|e| HealthTaskRepositoryError::DatabaseError(e.to_string()))?;

        Ok(result.rows_affected > 0)
    }
}
