use sea_orm::entity::prelude::*;
use uuid::Uuid;

use crate::modules::appointment::application::ports::outgoing::AppointmentResult;
use crate::modules::auth::application::domain::entities::UserId;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "appointments")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: Uuid,

    pub user_id: Uuid,

    pub title: String,

    pub doctor_name: Option<String>,

    pub date: DateTimeWithTimeZone,

    pub location: Option<String>,

    pub prep_notes: Option<String>,

    pub completed: bool,

    pub reminder_sent: bool,
}

impl Model {
    pub fn to_repository_result(&self) -> AppointmentResult {
        AppointmentResult {
            id: self.id,
            owner: UserId::from(self.user_id),
            title: self.title.clone(),
            doctor_name: self.doctor_name.clone(),
            date: self.date.into(),
            location: self.location.clone(),
            prep_notes: self.prep_notes.clone(),
            completed: self.completed,
            reminder_sent: self.reminder_sent,
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
