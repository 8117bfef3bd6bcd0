use sea_orm::entity::prelude::*;
use uuid::Uuid;

use crate::modules::auth::application::domain::entities::UserId;
use crate::modules::timeline::application::ports::outgoing::TimelineEntryResult;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "medical_timeline")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: Uuid,

    pub user_id: Uuid,

    pub title: String,

    pub description: Option<String>,

    pub entry_type: String,

    pub date: DateTimeWithTimeZone,

    pub doctor_name: Option<String>,

    pub location: Option<String>,

    pub attachments: Option<Json>,

    pub created_at: DateTimeWithTimeZone,
}

impl Model {
    pub fn to_repository_result(&self) -> TimelineEntryResult {
        TimelineEntryResult {
            id: self.id,
            owner: UserId::from(self.user_id),
            title: self.title.clone(),
            description: self.description.clone(),
            entry_type: self.entry_type.clone(),
            date: self.date.into(),
            doctor_name: self.doctor_name.clone(),
            location: self.location.clone(),
            attachments: self
                .attachments
                .clone()
                .and_then(|v| serde_json::from_value::<Vec<String>>(v).ok()),
            created_at: self.created_at.into(),
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
