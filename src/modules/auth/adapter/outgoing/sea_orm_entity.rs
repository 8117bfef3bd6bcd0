use sea_orm::entity::prelude::*;
use uuid::Uuid;

use crate::modules::auth::application::domain::entities::User;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "users")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: Uuid,

    pub username: String,

    pub password_hash: String,

    pub first_name: Option<String>,

    pub last_name: Option<String>,

    pub email: Option<String>,

    pub faith_mode_enabled: bool,

    pub anonymous_mode: bool,

    pub created_at: DateTimeWithTimeZone,
}

impl Model {
    pub fn to_domain(&self) -> User {
        User {
            id: self.id,
            username: self.username.clone(),
            password_hash: self.password_hash.clone(),
            first_name: self.first_name.clone(),
            last_name: self.last_name.clone(),
            email: self.email.clone(),
            faith_mode_enabled: self.faith_mode_enabled,
            anonymous_mode: self.anonymous_mode,
            created_at: self.created_at.into(),
        }
    }
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}
