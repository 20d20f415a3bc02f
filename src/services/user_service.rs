use std::sync::Arc;
use validator::Validate;

use crate::{
    auth::{hash_password, verify_password},
    errors::{AppError, AppResult},
    models::{
        domain::{User, UserRole},
        dto::{request::SaveUserRequest, response::UserDto},
    },
    repositories::ReferenceRepository,
};

/// Built-in credential pairs accepted while demo login is enabled.
const DEMO_ACCOUNTS: [(&str, &str, &str, UserRole); 2] = [
    ("admin", "admin123", "Administrator (Local)", UserRole::Admin),
    ("guru", "guru123", "Guru Pengguna (Local)", UserRole::User),
];

const INVALID_CREDENTIALS: &str = "Invalid username or password";

pub struct UserService {
    repository: Arc<dyn ReferenceRepository<User>>,
    demo_login_enabled: bool,
}

impl UserService {
    pub fn new(repository: Arc<dyn ReferenceRepository<User>>, demo_login_enabled: bool) -> Self {
        Self {
            repository,
            demo_login_enabled,
        }
    }

    /// Demo pairs first (when enabled), then the stored account and its
    /// Argon2 hash. Accounts without a hash cannot log in.
    pub async fn authenticate(&self, username: &str, password: &str) -> AppResult<User> {
        let username = username.trim();

        if self.demo_login_enabled {
            if let Some((name, _, display, role)) = DEMO_ACCOUNTS
                .iter()
                .find(|(u, p, _, _)| *u == username && *p == password)
            {
                log::info!("Demo login for '{}'", name);
                return Ok(User::new(name, display, *role));
            }
        }

        let user = self
            .repository
            .find(username)
            .await?
            .ok_or_else(|| AppError::Unauthorized(INVALID_CREDENTIALS.to_string()))?;

        match user.password_hash.as_deref() {
            Some(hash) if verify_password(password, hash) => Ok(user),
            Some(_) => Err(AppError::Unauthorized(INVALID_CREDENTIALS.to_string())),
            None => {
                log::warn!("Login refused for '{}': no password set", username);
                Err(AppError::Unauthorized(INVALID_CREDENTIALS.to_string()))
            }
        }
    }

    pub async fn list_users(&self) -> AppResult<Vec<UserDto>> {
        let mut users = self.repository.list().await?;
        users.sort_by(|a, b| a.username.cmp(&b.username));
        Ok(users.into_iter().map(UserDto::from).collect())
    }

    pub async fn create_user(&self, request: SaveUserRequest) -> AppResult<UserDto> {
        request.validate()?;

        if self.repository.find(&request.username).await?.is_some() {
            return Err(AppError::AlreadyExists(format!(
                "User '{}' already exists",
                request.username
            )));
        }

        let password = request.password.as_deref().ok_or_else(|| {
            AppError::ValidationError("Password is required for a new user".to_string())
        })?;

        let user = User::new(&request.username, &request.name, request.role)
            .with_password_hash(hash_password(password)?);

        Ok(self.repository.create(user).await?.into())
    }

    pub async fn update_user(&self, username: &str, request: SaveUserRequest) -> AppResult<UserDto> {
        request.validate()?;

        let existing = self
            .repository
            .find(username)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("User '{}' not found", username)))?;

        let password_hash = match request.password.as_deref() {
            Some(password) => Some(hash_password(password)?),
            None => existing.password_hash,
        };

        let user = User {
            username: existing.username,
            name: request.name,
            role: request.role,
            password_hash,
        };

        Ok(self.repository.update(username, user).await?.into())
    }

    pub async fn delete_user(&self, username: &str) -> AppResult<()> {
        self.repository.delete(username).await
    }
}
