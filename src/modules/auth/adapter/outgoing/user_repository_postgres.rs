use async_trait::async_trait;
use chrono::Utc;
use sea_orm::{ActiveModelTrait, DatabaseConnection, DbErr, EntityTrait, Set, SqlErr};
use std::sync::Arc;
use uuid::Uuid;

use crate::modules::auth::application::domain::entities::User;
use crate::modules::auth::application::ports::outgoing::{
    NewUser, ProfileChanges, UserRepository, UserRepositoryError,
};

use super::sea_orm_entity::{ActiveModel as UserActiveModel, Entity as Users, Model as UserModel};

#[derive(Debug, Clone)]
pub struct UserRepositoryPostgres {
    db: Arc<DatabaseConnection>,
}

impl UserRepositoryPostgres {
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }
}

fn is_unique_violation(err: &DbErr) -> bool {
    matches!(err.sql_err(), Some(SqlErr::UniqueConstraintViolation(_)))
}

#[async_trait]
impl UserRepository for UserRepositoryPostgres {
    async fn create_user(&self, user: NewUser) -> Result<User, UserRepositoryError> {
        let active = UserActiveModel {
            id: Set(Uuid::new_v4()),
            username: Set(user.username),
            password_hash: Set(user.password_hash),
            first_name: Set(user.first_name),
            last_name: Set(user.last_name),
            email: Set(user.email),
            faith_mode_enabled: Set(false),
            anonymous_mode: Set(false),
            created_at: Set(Utc::now().into()),
        };

        let inserted: UserModel = active.insert(&*self.db).await.map_err(|e| {
            if is_unique_violation(&e) {
                UserRepositoryError::UserAlreadyExists
            } else {
                UserRepositoryError::DatabaseError(e.to_string())
            }
        })?;

        Ok(inserted.to_domain())
    }

    async fn update_profile(
        &self,
        user_id: Uuid,
        changes: ProfileChanges,
    ) -> Result<User, UserRepositoryError> {
        let found = Users::find_by_id(user_id)
            .one(&*self.db)
            .await
            .map_err(|e| UserRepositoryError::DatabaseError(e.to_string()))?
            .ok_or(UserRepositoryError::UserNotFound)?;

        if changes.is_empty() {
            return Ok(found.to_domain());
        }

        let mut active: UserActiveModel = found.into();

        if let Some(first_name) = changes.first_name {
            active.first_name = Set(Some(first_name));
        }
        if let Some(last_name) = changes.last_name {
            active.last_name = Set(Some(last_name));
        }
        if let Some(email) = changes.email {
            active.email = Set(Some(email));
        }
        if let Some(faith_mode_enabled) = changes.faith_mode_enabled {
            active.faith_mode_enabled = Set(faith_mode_enabled);
        }
        if let Some(anonymous_mode) = changes.anonymous_mode {
            active.anonymous_mode = Set(anonymous_mode);
        }

        let updated: UserModel = active
            .update(&*self.db)
            .await
            .map_err(|e| UserRepositoryError::DatabaseError(e.to_string()))?;

        Ok(updated.to_domain())
    }
}
