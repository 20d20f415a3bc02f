use async_trait::async_trait;
use std::sync::Arc;

use crate::{
    errors::{AppError, AppResult},
    repositories::{Record, ReferenceRepository},
};

/// Remote-first reads with local fallback, writes applied to both.
///
/// Remote failures never reach the caller: reads fall back to the local
/// store and write failures are logged. The local store always receives
/// the write and its result is what the caller sees. The two backends are
/// not reconciled.
pub struct ResilientRepository<T: Record> {
    remote: Option<Arc<dyn ReferenceRepository<T>>>,
    local: Arc<dyn ReferenceRepository<T>>,
}

impl<T: Record> ResilientRepository<T> {
    pub fn new(
        remote: Option<Arc<dyn ReferenceRepository<T>>>,
        local: Arc<dyn ReferenceRepository<T>>,
    ) -> Self {
        Self { remote, local }
    }

    pub fn local_only(local: Arc<dyn ReferenceRepository<T>>) -> Self {
        Self::new(None, local)
    }

    pub fn has_remote(&self) -> bool {
        self.remote.is_some()
    }
}

#[async_trait]
impl<T: Record> ReferenceRepository<T> for ResilientRepository<T> {
    async fn list(&self) -> AppResult<Vec<T>> {
        if let Some(remote) = &self.remote {
            match remote.list().await {
                Ok(records) if !records.is_empty() => return Ok(records),
                Ok(_) => log::debug!("Remote {} list is empty, using local store", T::ENTITY),
                Err(e) => log::warn!(
                    "Remote {} list failed, using local store: {}",
                    T::ENTITY,
                    e
                ),
            }
        }
        self.local.list().await
    }

    async fn find(&self, key: &str) -> AppResult<Option<T>> {
        if let Some(remote) = &self.remote {
            match remote.find(key).await {
                Ok(Some(record)) => return Ok(Some(record)),
                Ok(None) => {}
                Err(e) => log::warn!(
                    "Remote {} lookup of '{}' failed, using local store: {}",
                    T::ENTITY,
                    key,
                    e
                ),
            }
        }
        self.local.find(key).await
    }

    async fn create(&self, record: T) -> AppResult<T> {
        if let Some(remote) = &self.remote {
            if let Err(e) = remote.create(record.clone()).await {
                log::error!(
                    "Remote create of {} '{}' failed: {}",
                    T::ENTITY,
                    record.key(),
                    e
                );
            }
        }
        self.local.create(record).await
    }

    async fn update(&self, key: &str, record: T) -> AppResult<T> {
        if let Some(remote) = &self.remote {
            if let Err(e) = remote.update(key, record.clone()).await {
                log::error!("Remote update of {} '{}' failed: {}", T::ENTITY, key, e);
            }
        }
        self.local.update(key, record).await
    }

    async fn delete(&self, key: &str) -> AppResult<()> {
        let mut remote_deleted = false;
        if let Some(remote) = &self.remote {
            match remote.delete(key).await {
                Ok(()) => remote_deleted = true,
                // written while the remote was down, so it only exists locally
                Err(AppError::NotFound(_)) => {
                    log::debug!("Remote has no {} '{}', deleting locally", T::ENTITY, key)
                }
                Err(e) => log::error!("Remote delete of {} '{}' failed: {}", T::ENTITY, key, e),
            }
        }

        match self.local.delete(key).await {
            // the record only ever existed remotely
            Err(AppError::NotFound(_)) if remote_deleted => Ok(()),
            other => other,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        models::domain::{SchoolLevel, Subject},
        repositories::{LocalReferenceRepository, LocalStore},
    };
    use tempfile::TempDir;

    struct UnreachableRemote;

    #[async_trait]
    impl ReferenceRepository<Subject> for UnreachableRemote {
        async fn list(&self) -> AppResult<Vec<Subject>> {
            Err(AppError::DatabaseError("connection refused".to_string()))
        }
        async fn find(&self, _key: &str) -> AppResult<Option<Subject>> {
            Err(AppError::DatabaseError("connection refused".to_string()))
        }
        async fn create(&self, _record: Subject) -> AppResult<Subject> {
            Err(AppError::DatabaseError("connection refused".to_string()))
        }
        async fn update(&self, _key: &str, _record: Subject) -> AppResult<Subject> {
            Err(AppError::DatabaseError("connection refused".to_string()))
        }
        async fn delete(&self, _key: &str) -> AppResult<()> {
            Err(AppError::DatabaseError("connection refused".to_string()))
        }
    }

    fn unreachable() -> Option<Arc<dyn ReferenceRepository<Subject>>> {
        Some(Arc::new(UnreachableRemote))
    }

    fn local(dir: &TempDir) -> Arc<LocalReferenceRepository<Subject>> {
        Arc::new(LocalReferenceRepository::new(Arc::new(LocalStore::new(
            dir.path(),
        ))))
    }

    #[tokio::test]
    async fn test_unreachable_remote_falls_back_to_local() {
        let dir = TempDir::new().unwrap();
        let repo = ResilientRepository::new(unreachable(), local(&dir));

        let subjects = repo.list().await.unwrap();
        assert!(!subjects.is_empty());
        assert!(repo.find("sub_1").await.unwrap().is_some());
    }

    #[tokio::test]
    async fn test_writes_succeed_locally_when_remote_fails() {
        let dir = TempDir::new().unwrap();
        let local = local(&dir);
        let repo = ResilientRepository::new(unreachable(), local.clone());
        let subject = Subject::new("s-1", "Bahasa Sunda", &[SchoolLevel::Smp]);

        repo.create(subject.clone()).await.unwrap();
        assert_eq!(local.find("s-1").await.unwrap(), Some(subject));

        repo.delete("s-1").await.unwrap();
        assert_eq!(local.find("s-1").await.unwrap(), None);
    }

    #[tokio::test]
    async fn test_local_only() {
        let dir = TempDir::new().unwrap();
        let repo = ResilientRepository::local_only(local(&dir));

        assert!(!repo.has_remote());
        assert!(repo.find("sub_smk_2").await.unwrap().is_some());
    }
}
