use async_trait::async_trait;
use std::sync::Arc;
use tracing::{info, warn};

use crate::modules::auth::application::ports::{
    incoming::use_cases::{AuthSession, LoginError, LoginUserCommand, LoginUserUseCase},
    outgoing::{PasswordHasher, TokenProvider, UserQuery},
};

pub struct LoginUserService {
    user_query: Arc<dyn UserQuery>,
    password_hasher: Arc<dyn PasswordHasher>,
    token_provider: Arc<dyn TokenProvider>,
}

impl LoginUserService {
    pub fn new(
        user_query: Arc<dyn UserQuery>,
        password_hasher: Arc<dyn PasswordHasher>,
        token_provider: Arc<dyn TokenProvider>,
    ) -> Self {
        Self {
            user_query,
            password_hasher,
            token_provider,
        }
    }
}

#[async_trait]
impl LoginUserUseCase for LoginUserService {
    async fn execute(&self, command: LoginUserCommand) -> Result<AuthSession, LoginError> {
        let user = self
            .user_query
            .find_by_username(command.username())
            .await
            .map_err(|e| LoginError::RepositoryError(e.to_string()))?;

        // Unknown account and wrong password collapse to one error
        let user = match user {
            Some(user) => user,
            None => {
                warn!(username = %command.username(), "Login failed: unknown username");
                return Err(LoginError::InvalidCredentials);
            }
        };

        let matches = self
            .password_hasher
            .verify_password(command.password(), &user.password_hash)
            .await
            .map_err(|_| LoginError::InvalidCredentials)?;

        if !matches {
            warn!(user_id = %user.id, "Login failed: wrong password");
            return Err(LoginError::InvalidCredentials);
        }

        let access_token = self
            .token_provider
            .generate_access_token(user.id)
            .map_err(|_| LoginError::TokenFailed)?;

        info!(user_id = %user.id, "User logged in");

        Ok(AuthSession {
            user: user.into(),
            access_token,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;
    use uuid::Uuid;

    use crate::modules::auth::application::domain::entities::User;
    use crate::modules::auth::application::ports::outgoing::{
        HashError, TokenClaims, TokenError, UserQueryError,
    };

    fn sample_user() -> User {
        User {
            id: Uuid::new_v4(),
            username: "jdoe".to_string(),
            password_hash: "argon2-hash".to_string(),
            first_name: None,
            last_name: None,
            email: None,
            faith_mode_enabled: false,
            anonymous_mode: false,
            created_at: Utc::now(),
        }
    }

    struct MockUserQuery {
        user: Option<User>,
    }

    #[async_trait]
    impl UserQuery for MockUserQuery {
        async fn find_by_id(&self, _user_id: Uuid) -> Result<Option<User>, UserQueryError> {
            unimplemented!()
        }

        async fn find_by_username(&self, _username: &str) -> Result<Option<User>, UserQueryError> {
            Ok(self.user.clone())
        }
    }

    struct MockHasher {
        matches: bool,
    }

    #[async_trait]
    impl PasswordHasher for MockHasher {
        async fn hash_password(&self, _password: &str) -> Result<String, HashError> {
            unimplemented!()
        }

        async fn verify_password(&self, _password: &str, _hash: &str) -> Result<bool, HashError> {
            Ok(self.matches)
        }
    }

    struct MockTokenProvider;

    impl TokenProvider for MockTokenProvider {
        fn generate_access_token(&self, _user_id: Uuid) -> Result<String, TokenError> {
            Ok("token".to_string())
        }

        fn verify_token(&self, _token: &str) -> Result<TokenClaims, TokenError> {
            unimplemented!()
        }
    }

    fn service(user: Option<User>, matches: bool) -> LoginUserService {
        LoginUserService::new(
            Arc::new(MockUserQuery { user }),
            Arc::new(MockHasher { matches }),
            Arc::new(MockTokenProvider),
        )
    }

    fn command() -> LoginUserCommand {
        LoginUserCommand::new("jdoe".to_string(), "password1".to_string()).unwrap()
    }

    #[tokio::test]
    async fn login_success_returns_session() {
        let user = sample_user();
        let service = service(Some(user.clone()), true);

        let session = service.execute(command()).await.unwrap();

        assert_eq!(session.user.id, user.id);
        assert_eq!(session.access_token, "token");
    }

    #[tokio::test]
    async fn login_unknown_user_is_invalid_credentials() {
        let service = service(None, true);

        let result = service.execute(command()).await;

        assert!(matches!(result, Err(LoginError::InvalidCredentials)));
    }

    #[tokio::test]
    async fn login_wrong_password_is_invalid_credentials() {
        let service = service(Some(sample_user()), false);

        let result = service.execute(command()).await;

        assert!(matches!(result, Err(LoginError::InvalidCredentials)));
    }
}
