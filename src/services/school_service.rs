use std::sync::Arc;
use validator::Validate;

use crate::{
    errors::{AppError, AppResult},
    models::{domain::SchoolProfile, dto::request::SaveSchoolRequest},
    repositories::ReferenceRepository,
};

pub struct SchoolService {
    repository: Arc<dyn ReferenceRepository<SchoolProfile>>,
}

impl SchoolService {
    pub fn new(repository: Arc<dyn ReferenceRepository<SchoolProfile>>) -> Self {
        Self { repository }
    }

    /// Newest first; seed schools without a creation time come last.
    pub async fn list_schools(&self) -> AppResult<Vec<SchoolProfile>> {
        let mut schools = self.repository.list().await?;
        schools.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        Ok(schools)
    }

    pub async fn get_school(&self, id: &str) -> AppResult<SchoolProfile> {
        self.repository
            .find(id)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("School with id '{}' not found", id)))
    }

    pub async fn create_school(&self, request: SaveSchoolRequest) -> AppResult<SchoolProfile> {
        request.validate()?;
        let school = SchoolProfile::from_request(request);
        self.repository.create(school).await
    }

    pub async fn update_school(
        &self,
        id: &str,
        request: SaveSchoolRequest,
    ) -> AppResult<SchoolProfile> {
        request.validate()?;
        let existing = self.get_school(id).await?;
        self.repository.update(id, existing.apply(request)).await
    }

    pub async fn delete_school(&self, id: &str) -> AppResult<()> {
        self.get_school(id).await?;
        self.repository.delete(id).await
    }
}
