use async_trait::async_trait;
use std::sync::Arc;

use crate::modules::auth::application::domain::entities::UserId;
use crate::modules::auth::application::ports::{
    incoming::use_cases::{
        FetchUserError, FetchUserUseCase, UpdateProfileCommand, UpdateProfileError,
        UpdateProfileUseCase, UserProfile,
    },
    outgoing::{ProfileChanges, UserQuery, UserRepository, UserRepositoryError},
};

/// Read + update of the authenticated user's own profile. Both operations are
/// keyed by the gate-resolved id, never an id from the payload.
pub struct UserProfileService {
    user_query: Arc<dyn UserQuery>,
    user_repository: Arc<dyn UserRepository>,
}

impl UserProfileService {
    pub fn new(user_query: Arc<dyn UserQuery>, user_repository: Arc<dyn UserRepository>) -> Self {
        Self {
            user_query,
            user_repository,
        }
    }
}

#[async_trait]
impl FetchUserUseCase for UserProfileService {
    async fn execute(&self, owner: UserId) -> Result<UserProfile, FetchUserError> {
        let user = self
            .user_query
            .find_by_id(owner.value())
            .await
            .map_err(|e| FetchUserError::QueryFailed(e.to_string()))?;

        user.map(UserProfile::from)
            .ok_or(FetchUserError::UserNotFound)
    }
}

#[async_trait]
impl UpdateProfileUseCase for UserProfileService {
    async fn execute(&self, command: UpdateProfileCommand) -> Result<UserProfile, UpdateProfileError> {
        let changes = ProfileChanges {
            first_name: command.first_name().cloned(),
            last_name: command.last_name().cloned(),
            email: command.email().cloned(),
            faith_mode_enabled: command.faith_mode_enabled(),
            anonymous_mode: command.anonymous_mode(),
        };

        self.user_repository
            .update_profile(command.owner().value(), changes)
            .await
            .map(UserProfile::from)
            .map_err(|e| match e {
                UserRepositoryError::UserNotFound => UpdateProfileError::UserNotFound,
                other => UpdateProfileError::RepositoryError(other.to_string()),
            })
    }
}
