use std::sync::Arc;
use validator::Validate;

use crate::{
    errors::{AppError, AppResult},
    models::{
        domain::{SchoolLevel, Subject},
        dto::request::SaveSubjectRequest,
    },
    repositories::ReferenceRepository,
};

pub struct SubjectService {
    repository: Arc<dyn ReferenceRepository<Subject>>,
}

impl SubjectService {
    pub fn new(repository: Arc<dyn ReferenceRepository<Subject>>) -> Self {
        Self { repository }
    }

    /// Sorted by name, optionally only the subjects taught at `level`.
    pub async fn list_subjects(&self, level: Option<SchoolLevel>) -> AppResult<Vec<Subject>> {
        let mut subjects: Vec<Subject> = self
            .repository
            .list()
            .await?
            .into_iter()
            .filter(|s| level.map_or(true, |l| s.applies_to(l)))
            .collect();
        subjects.sort_by(|a, b| a.name.cmp(&b.name));
        Ok(subjects)
    }

    pub async fn get_subject(&self, id: &str) -> AppResult<Subject> {
        self.repository
            .find(id)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("Subject with id '{}' not found", id)))
    }

    pub async fn create_subject(&self, request: SaveSubjectRequest) -> AppResult<Subject> {
        request.validate()?;
        self.repository.create(Subject::from_request(request)).await
    }

    pub async fn update_subject(&self, id: &str, request: SaveSubjectRequest) -> AppResult<Subject> {
        request.validate()?;
        let existing = self.get_subject(id).await?;
        let subject = Subject {
            id: existing.id,
            name: request.name,
            levels: request.levels,
        };
        self.repository.update(id, subject).await
    }

    pub async fn delete_subject(&self, id: &str) -> AppResult<()> {
        self.get_subject(id).await?;
        self.repository.delete(id).await
    }
}
