use async_trait::async_trait;
use uuid::Uuid;

use crate::modules::auth::application::domain::entities::User;

/// Insertable shape for a new account. The id and creation timestamp are
/// generated by the store.
#[derive(Debug, Clone)]
pub struct NewUser {
    pub username: String,
    pub password_hash: String,
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub email: Option<String>,
}

/// Partial profile update: `Some` sets the field, `None` leaves it unchanged.
#[derive(Debug, Clone, Default)]
pub struct ProfileChanges {
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub email: Option<String>,
    pub faith_mode_enabled: Option<bool>,
    pub anonymous_mode: Option<bool>,
}

impl ProfileChanges {
    /// An update with no fields set is a no-op.
    pub fn is_empty(&self) -> bool {
        self.first_name.is_none()
            && self.last_name.is_none()
            && self.email.is_none()
            && self.faith_mode_enabled.is_none()
            && self.anonymous_mode.is_none()
    }
}

#[derive(Debug, Clone, thiserror::Error)]
pub enum UserRepositoryError {
    #[error("User already exists")]
    UserAlreadyExists,

    #[error("User not found")]
    UserNotFound,

    #[error("Database error: {0}")]
    DatabaseError(String),
}

#[async_trait]
pub trait UserRepository: Send + Sync {
    async fn create_user(&self, user: NewUser) -> Result<User, UserRepositoryError>;

    async fn update_profile(
        &self,
        user_id: Uuid,
        changes: ProfileChanges,
    ) -> Result<User, UserRepositoryError>;
}
