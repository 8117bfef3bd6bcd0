use sea_orm::entity::prelude::*;
use uuid::Uuid;

use crate::modules::auth::application::domain::entities::UserId;
use crate::modules::health_task::application::ports::outgoing::HealthTaskResult;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "health_tasks")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: Uuid,

    pub user_id: Uuid,

    pub title: String,

    pub description: Option<String>,

    pub due_date: Option<DateTimeWithTimeZone>,

    pub completed: bool,

    pub snoozed_until: Option<DateTimeWithTimeZone>,

    pub priority: String,

    pub category: Option<String>,
}

impl Model {
    pub fn to_repository_result(&self) -> HealthTaskResult {
        HealthTaskResult {
            id: self.id,
            owner: UserId::from(self.user_id),
            title: self.title.clone(),
            description: self.description.clone(),
            due_date: self.due_date.map(Into::into),
            completed: self.completed,
            snoozed_until: self.snoozed_until.map(Into::into),
            priority: self.priority.clone(),
            category: self.category.clone(),
        }
    }
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "crate::modules::auth::adapter::outgoing::sea_orm_entity::Entity",
        from = "Column::UserId",
        to = "crate::modules::auth::adapter::outgoing::sea_orm_entity::Column::Id"
    )]
    User,
}

impl ActiveModelBehavior for ActiveModel {}
