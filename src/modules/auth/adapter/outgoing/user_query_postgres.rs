use async_trait::async_trait;
use sea_orm::{ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter};
use std::sync::Arc;
use uuid::Uuid;

use crate::modules::auth::application::domain::entities::User;
use crate::modules::auth::application::ports::outgoing::{UserQuery, UserQueryError};

use super::sea_orm_entity::{Column, Entity as Users};

#[derive(Debug, Clone)]
pub struct UserQueryPostgres {
    db: Arc<DatabaseConnection>,
}

impl UserQueryPostgres {
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }
}

#[async_trait]
impl UserQuery for UserQueryPostgres {
    async fn find_by_id(&self, user_id: Uuid) -> Result<Option<User>, UserQueryError> {
        let found = Users::find_by_id(user_id)
            .one(&*self.db)
            .await
            .map_err(|e| UserQueryError::DatabaseError(e.to_string()))?;

        Ok(found.map(|m| m.to_domain()))
    }

    async fn find_by_username(&self, username: &str) -> Result<Option<User>, UserQueryError> {
        let found = Users::find()
            .filter(Column::Username.eq(username))
            .one(&*self.db)
            .await
            .map_err(|e| UserQueryError::DatabaseError(e.to_string()))?;

        Ok(found.map(|m| m.to_domain()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::modules::auth::adapter::outgoing::sea_orm_entity::Model as UserModel;
    use chrono::Utc;
    use sea_orm::{DatabaseBackend, MockDatabase};

    #[tokio::test]
    async fn test_find_by_username_maps_model() {
        let id = Uuid::new_v4();
        let model = UserModel {
            id,
            username: "jdoe".to_string(),
            password_hash: "hash".to_string(),
            first_name: Some("Jane".to_string()),
            last_name: None,
            email: None,
            faith_mode_enabled: true,
            anonymous_mode: false,
            created_at: Utc::now().fixed_offset(),
        };

        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results(vec![vec![model]])
            .into_connection();

        let query = UserQueryPostgres::new(Arc::new(db));

        let user = query.find_by_username("jdoe").await.unwrap().unwrap();

        assert_eq!(user.id, id);
        assert!(user.faith_mode_enabled);
    }

    #[tokio::test]
    async fn test_find_by_id_missing_returns_none() {
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results(vec![Vec::<UserModel>::new()])
            .into_connection();

        let query = UserQueryPostgres::new(Arc::new(db));

        let user = query.find_by_id(Uuid::new_v4()).await.unwrap();

        assert!(user.is_none());
    }
}
