use async_graphql::InputObject;
use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::models::domain::{GeneratorConfig, GradeLevel, SchoolLevel, Semester, UserRole};

fn default_mcq_count() -> u32 {
    25
}

fn default_essay_count() -> u32 {
    5
}

#[derive(Debug, Clone, Deserialize, Serialize, Validate, InputObject)]
#[serde(rename_all = "camelCase")]
pub struct GenerateExamRequest {
    #[validate(length(min = 1, max = 200))]
    pub subject: String,

    #[validate(length(max = 500))]
    pub topic: Option<String>,

    pub grade: GradeLevel,
    pub semester: Semester,
    pub school_level: SchoolLevel,

    #[validate(length(min = 1, max = 200, message = "School name is required"))]
    pub school_name: String,

    #[serde(default)]
    #[graphql(default)]
    pub logo_url: String,

    #[serde(default)]
    #[graphql(default)]
    pub headmaster_name: String,

    #[serde(default, alias = "headmasterNIP")]
    #[graphql(default)]
    pub headmaster_nip: String,

    #[serde(default)]
    #[graphql(default)]
    pub teacher_name: String,

    #[serde(default, alias = "teacherNIP")]
    #[graphql(default)]
    pub teacher_nip: String,

    #[validate(range(min = 5, max = 50))]
    #[serde(default = "default_mcq_count")]
    #[graphql(default = 25)]
    pub mcq_count: u32,

    #[validate(range(max = 10))]
    #[serde(default = "default_essay_count")]
    #[graphql(default = 5)]
    pub essay_count: u32,
}

impl GenerateExamRequest {
    /// Converts to a generator configuration with the grade fitted to the
    /// school level.
    pub fn into_config(self) -> GeneratorConfig {
        GeneratorConfig {
            subject: self.subject.trim().to_string(),
            topic: self.topic,
            grade: self.grade,
            semester: self.semester,
            school_level: self.school_level,
            school_name: self.school_name,
            logo_url: self.logo_url,
            headmaster_name: self.headmaster_name,
            headmaster_nip: self.headmaster_nip,
            teacher_name: self.teacher_name,
            teacher_nip: self.teacher_nip,
            mcq_count: self.mcq_count,
            essay_count: self.essay_count,
        }
        .with_corrected_grade()
    }
}

#[derive(Debug, Clone, Deserialize, Validate, InputObject)]
pub struct LoginRequest {
    #[validate(length(min = 1, max = 50))]
    pub username: String,

    #[validate(length(min = 1, max = 200))]
    pub password: String,
}

#[derive(Debug, Clone, Deserialize, Serialize, Validate, InputObject)]
pub struct SaveSchoolRequest {
    #[validate(length(min = 1, max = 200))]
    pub name: String,

    pub level: SchoolLevel,

    #[serde(default)]
    #[graphql(default)]
    pub logo_url: String,

    #[validate(length(max = 200))]
    #[serde(default)]
    #[graphql(default)]
    pub headmaster_name: String,

    #[validate(length(max = 50))]
    #[serde(default)]
    #[graphql(default)]
    pub headmaster_nip: String,

    pub address: Option<String>,
}

#[derive(Debug, Clone, Deserialize, Serialize, Validate, InputObject)]
pub struct SaveSubjectRequest {
    #[validate(length(min = 1, max = 200))]
    pub name: String,

    #[validate(length(min = 1, message = "At least one school level is required"))]
    pub levels: Vec<SchoolLevel>,
}

#[derive(Debug, Clone, Deserialize, Serialize, Validate, InputObject)]
pub struct SaveUserRequest {
    #[validate(length(min = 3, max = 50))]
    pub username: String,

    #[validate(length(min = 1, max = 100))]
    pub name: String,

    pub role: UserRole,

    /// Omitted on update to keep the current password.
    #[validate(length(min = 6, max = 200))]
    pub password: Option<String>,
}

/// Query for `GET /api/curriculum`.
#[derive(Debug, Deserialize)]
pub struct CurriculumQuery {
    pub grade: GradeLevel,
    pub semester: Semester,
}

#[derive(Debug, Deserialize)]
pub struct LevelQuery {
    pub level: Option<SchoolLevel>,
}

/// Query for `POST /api/exams/export`.
#[derive(Debug, Deserialize)]
pub struct ExportQuery {
    #[serde(default = "default_export_format")]
    pub format: String,
    #[serde(default = "default_include_key")]
    pub include_key: bool,
}

fn default_export_format() -> String {
    "word".to_string()
}

fn default_include_key() -> bool {
    true
}
