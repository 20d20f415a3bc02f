use async_graphql::Enum;
use serde::{Deserialize, Serialize};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Deserialize, Serialize, Enum)]
#[serde(rename_all = "lowercase")]
pub enum UserRole {
    Admin,
    User,
}

/// A stored account. The password is only ever held as an Argon2 hash.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize, Serialize)]
pub struct User {
    pub username: String,
    pub name: String,
    pub role: UserRole,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub password_hash: Option<String>,
}

impl User {
    pub fn new(username: &str, name: &str, role: UserRole) -> Self {
        User {
            username: username.to_string(),
            name: name.to_string(),
            role,
            password_hash: None,
        }
    }

    pub fn with_password_hash(mut self, hash: String) -> Self {
        self.password_hash = Some(hash);
        self
    }

    pub fn is_admin(&self) -> bool {
        self.role == UserRole::Admin
    }
}
