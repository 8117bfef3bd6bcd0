use chrono::{DateTime, Utc};
use std::fmt;
use uuid::Uuid;

/// Identity of the acting user, resolved by the authorization gate.
///
/// Every store operation is parameterized by this value; child records are
/// only ever read or mutated through queries scoped to it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, serde::Serialize)]
pub struct UserId(Uuid);

impl UserId {
    pub fn value(&self) -> Uuid {
        self.0
    }
}

impl From<Uuid> for UserId {
    fn from(id: Uuid) -> Self {
        Self(id)
    }
}

impl From<UserId> for Uuid {
    fn from(id: UserId) -> Self {
        id.0
    }
}

impl fmt::Display for UserId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

#[derive(Debug, Clone)]
pub struct User {
    pub id: Uuid,
    pub username: String,
    pub password_hash: String,
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub email: Option<String>,
    pub faith_mode_enabled: bool,
    pub anonymous_mode: bool,
    pub created_at: DateTime<Utc>,
}

impl User {
    /// Display name used in report headers: first name, falling back to the
    /// username.
    pub fn display_name(&self) -> &str {
        match self.first_name.as_deref() {
            Some(name) if !name.is_empty() => name,
            _ => &self.username,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_user(first_name: Option<&str>) -> User {
        User {
            id: Uuid::new_v4(),
            username: "jdoe".to_string(),
            password_hash: "hash".to_string(),
            first_name: first_name.map(|s| s.to_string()),
            last_name: None,
            email: None,
            faith_mode_enabled: false,
            anonymous_mode: false,
            created_at: Utc::now(),
        }
    }

    #[test]
    fn display_name_prefers_first_name() {
        let user = sample_user(Some("Jane"));
        assert_eq!(user.display_name(), "Jane");
    }

    #[test]
    fn display_name_falls_back_to_username() {
        assert_eq!(sample_user(None).display_name(), "jdoe");
        assert_eq!(sample_user(Some("")).display_name(), "jdoe");
    }
}
