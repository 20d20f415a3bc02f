use async_graphql::SimpleObject;
use serde::Serialize;

use crate::models::domain::{GradeLevel, Semester, User, UserRole};

/// Account as shown to clients; never carries the password hash.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, SimpleObject)]
pub struct UserDto {
    pub username: String,
    pub name: String,
    pub role: UserRole,
}

impl From<User> for UserDto {
    fn from(user: User) -> Self {
        UserDto {
            username: user.username,
            name: user.name,
            role: user.role,
        }
    }
}

#[derive(Debug, Serialize)]
pub struct AuthResponse {
    pub access_token: String,
    pub token_type: String,
    pub expires_in: i64,
    pub user: UserDto,
}

#[derive(Debug, Serialize, SimpleObject)]
pub struct CurriculumResponse {
    pub grade: GradeLevel,
    pub semester: Semester,
    /// Empty when the table has no entry for the pair.
    pub context: String,
}

#[derive(Debug, Serialize)]
pub struct GradeOption {
    pub value: GradeLevel,
    pub label: String,
}

impl From<GradeLevel> for GradeOption {
    fn from(grade: GradeLevel) -> Self {
        GradeOption {
            value: grade,
            label: grade.to_string(),
        }
    }
}

#[derive(Debug, Serialize)]
pub struct DeleteResponse {
    pub message: String,
}
