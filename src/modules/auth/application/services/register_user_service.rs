use async_trait::async_trait;
use std::sync::Arc;
use tracing::{info, warn};

use crate::modules::auth::application::ports::{
    incoming::use_cases::{AuthSession, RegisterUserCommand, RegisterUserError, RegisterUserUseCase},
    outgoing::{NewUser, PasswordHasher, TokenProvider, UserQuery, UserRepository, UserRepositoryError},
};

pub struct RegisterUserService {
    user_query: Arc<dyn UserQuery>,
    user_repository: Arc<dyn UserRepository>,
    password_hasher: Arc<dyn PasswordHasher>,
    token_provider: Arc<dyn TokenProvider>,
}

impl RegisterUserService {
    pub fn new(
        user_query: Arc<dyn UserQuery>,
        user_repository: Arc<dyn UserRepository>,
        password_hasher: Arc<dyn PasswordHasher>,
        token_provider: Arc<dyn TokenProvider>,
    ) -> Self {
        Self {
            user_query,
            user_repository,
            password_hasher,
            token_provider,
        }
    }
}

#[async_trait]
impl RegisterUserUseCase for RegisterUserService {
    async fn execute(&self, command: RegisterUserCommand) -> Result<AuthSession, RegisterUserError> {
        let existing = self
            .user_query
            .find_by_username(command.username())
            .await
            .map_err(|e| RegisterUserError::RepositoryError(e.to_string()))?;

        if existing.is_some() {
            warn!(username = %command.username(), "Registration rejected: username taken");
            return Err(RegisterUserError::UsernameTaken);
        }

        let password_hash = self
            .password_hasher
            .hash_password(command.password())
            .await
            .map_err(|_| RegisterUserError::HashingFailed)?;

        let user = self
            .user_repository
            .create_user(NewUser {
                username: command.username().to_string(),
                password_hash,
                first_name: command.first_name().cloned(),
                last_name: command.last_name().cloned(),
                email: command.email().cloned(),
            })
            .await
            .map_err(|e| match e {
                // Unique-constraint race between the lookup and the insert
                UserRepositoryError::UserAlreadyExists => RegisterUserError::UsernameTaken,
                other => RegisterUserError::RepositoryError(other.to_string()),
            })?;

        let access_token = self
            .token_provider
            .generate_access_token(user.id)
            .map_err(|_| RegisterUserError::TokenFailed)?;

        info!(user_id = %user.id, "User registered");

        Ok(AuthSession {
            user: user.into(),
            access_token,
        })
    }
}
