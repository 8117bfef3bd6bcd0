use async_trait::async_trait;
use chrono::{DateTime, Utc};
use email_address::EmailAddress;
use serde::Serialize;
use uuid::Uuid;

use crate::modules::auth::application::domain::entities::{User, UserId};

//
// ──────────────────────────────────────────────────────────
// Shared result DTOs
// ──────────────────────────────────────────────────────────
//

/// Public view of an account: everything except the password hash.
#[derive(Debug, Clone, Serialize)]
pub struct UserProfile {
    pub id: Uuid,
    pub username: String,
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub email: Option<String>,
    pub faith_mode_enabled: bool,
    pub anonymous_mode: bool,
    pub created_at: DateTime<Utc>,
}

impl From<User> for UserProfile {
    fn from(user: User) -> Self {
        Self {
            id: user.id,
            username: user.username,
            first_name: user.first_name,
            last_name: user.last_name,
            email: user.email,
            faith_mode_enabled: user.faith_mode_enabled,
            anonymous_mode: user.anonymous_mode,
            created_at: user.created_at,
        }
    }
}

/// Result of a successful register or login: the profile plus a fresh
/// access token.
#[derive(Debug, Clone, Serialize)]
pub struct AuthSession {
    pub user: UserProfile,
    pub access_token: String,
}

fn email_is_valid(email: &str) -> bool {
    email.parse::<EmailAddress>().is_ok()
}

//
// ──────────────────────────────────────────────────────────
// Register
// ──────────────────────────────────────────────────────────
//

#[derive(Debug, Clone)]
pub struct RegisterUserCommand {
    username: String,
    password: String,
    first_name: Option<String>,
    last_name: Option<String>,
    email: Option<String>,
}

#[derive(Debug, thiserror::Error)]
pub enum RegisterCommandError {
    #[error("Username must be between 3 and 50 characters")]
    UsernameInvalid,

    #[error("Password must be at least 8 characters")]
    PasswordTooShort,

    #[error("Email address is not valid")]
    InvalidEmail,
}

impl RegisterUserCommand {
    pub fn new(
        username: String,
        password: String,
        first_name: Option<String>,
        last_name: Option<String>,
        email: Option<String>,
    ) -> Result<Self, RegisterCommandError> {
        let username = username.trim();

        if username.len() < 3 || username.len() > 50 {
            return Err(RegisterCommandError::UsernameInvalid);
        }

        if password.len() < 8 {
            return Err(RegisterCommandError::PasswordTooShort);
        }

        if let Some(ref email) = email {
            if !email_is_valid(email) {
                return Err(RegisterCommandError::InvalidEmail);
            }
        }

        Ok(Self {
            username: username.to_string(),
            password,
            first_name,
            last_name,
            email,
        })
    }

    pub fn username(&self) -> &str {
        &self.username
    }

    pub fn password(&self) -> &str {
        &self.password
    }

    pub fn first_name(&self) -> Option<&String> {
        self.first_name.as_ref()
    }

    pub fn last_name(&self) -> Option<&String> {
        self.last_name.as_ref()
    }

    pub fn email(&self) -> Option<&String> {
        self.email.as_ref()
    }
}

#[derive(Debug, Clone, thiserror::Error)]
pub enum RegisterUserError {
    #[error("Username already taken")]
    UsernameTaken,

    #[error("Password hashing failed")]
    HashingFailed,

    #[error("Token generation failed")]
    TokenFailed,

    #[error("Repository error: {0}")]
    RepositoryError(String),
}

#[async_trait]
pub trait RegisterUserUseCase: Send + Sync {
    async fn execute(&self, command: RegisterUserCommand) -> Result<AuthSession, RegisterUserError>;
}

//
// ──────────────────────────────────────────────────────────
// Login
// ──────────────────────────────────────────────────────────
//

#[derive(Debug, Clone)]
pub struct LoginUserCommand {
    username: String,
    password: String,
}

#[derive(Debug, thiserror::Error)]
pub enum LoginCommandError {
    #[error("Username and password are required")]
    EmptyCredentials,
}

impl LoginUserCommand {
    pub fn new(username: String, password: String) -> Result<Self, LoginCommandError> {
        let username = username.trim();

        if username.is_empty() || password.is_empty() {
            return Err(LoginCommandError::EmptyCredentials);
        }

        Ok(Self {
            username: username.to_string(),
            password,
        })
    }

    pub fn username(&self) -> &str {
        &self.username
    }

    pub fn password(&self) -> &str {
        &self.password
    }
}

#[derive(Debug, Clone, thiserror::Error)]
pub enum LoginError {
    #[error("Invalid username or password")]
    InvalidCredentials,

    #[error("Token generation failed")]
    TokenFailed,

    #[error("Repository error: {0}")]
    RepositoryError(String),
}

#[async_trait]
pub trait LoginUserUseCase: Send + Sync {
    async fn execute(&self, command: LoginUserCommand) -> Result<AuthSession, LoginError>;
}

//
// ──────────────────────────────────────────────────────────
// Fetch current user
// ──────────────────────────────────────────────────────────
//

#[derive(Debug, Clone, thiserror::Error)]
pub enum FetchUserError {
    #[error("User not found")]
    UserNotFound,

    #[error("Query failed: {0}")]
    QueryFailed(String),
}

#[async_trait]
pub trait FetchUserUseCase: Send + Sync {
    async fn execute(&self, owner: UserId) -> Result<UserProfile, FetchUserError>;
}

//
// ──────────────────────────────────────────────────────────
// Update profile / settings
// ──────────────────────────────────────────────────────────
//

#[derive(Debug, Clone)]
pub struct UpdateProfileCommand {
    owner: UserId,
    first_name: Option<String>,
    last_name: Option<String>,
    email: Option<String>,
    faith_mode_enabled: Option<bool>,
    anonymous_mode: Option<bool>,
}

#[derive(Debug, thiserror::Error)]
pub enum UpdateProfileCommandError {
    #[error("Email address is not valid")]
    InvalidEmail,
}

impl UpdateProfileCommand {
    pub fn new(
        owner: UserId,
        first_name: Option<String>,
        last_name: Option<String>,
        email: Option<String>,
        faith_mode_enabled: Option<bool>,
        anonymous_mode: Option<bool>,
    ) -> Result<Self, UpdateProfileCommandError> {
        if let Some(ref email) = email {
            if !email_is_valid(email) {
                return Err(UpdateProfileCommandError::InvalidEmail);
            }
        }

        Ok(Self {
            owner,
            first_name,
            last_name,
            email,
            faith_mode_enabled,
            anonymous_mode,
        })
    }

    pub fn owner(&self) -> UserId {
        self.owner
    }

    pub fn first_name(&self) -> Option<&String> {
        self.first_name.as_ref()
    }

    pub fn last_name(&self) -> Option<&String> {
        self.last_name.as_ref()
    }

    pub fn email(&self) -> Option<&String> {
        self.email.as_ref()
    }

    pub fn faith_mode_enabled(&self) -> Option<bool> {
        self.faith_mode_enabled
    }

    pub fn anonymous_mode(&self) -> Option<bool> {
        self.anonymous_mode
    }
}

#[derive(Debug, Clone, thiserror::Error)]
pub enum UpdateProfileError {
    #[error("User not found")]
    UserNotFound,

    #[error("Repository error: {0}")]
    RepositoryError(String),
}

#[async_trait]
pub trait UpdateProfileUseCase: Send + Sync {
    async fn execute(&self, command: UpdateProfileCommand) -> Result<UserProfile, UpdateProfileError>;
}
