pub mod local_repository;
pub mod mongo_repository;
pub mod records;
pub mod resilient_repository;

use async_trait::async_trait;
use serde::{de::DeserializeOwned, Serialize};

use crate::errors::AppResult;

pub use local_repository::{LocalReferenceRepository, LocalStore};
pub use mongo_repository::MongoReferenceRepository;
pub use resilient_repository::ResilientRepository;

/// A reference-data record persisted by both backends.
pub trait Record: Clone + Serialize + DeserializeOwned + Send + Sync + Unpin + 'static {
    /// Name used in log and error messages.
    const ENTITY: &'static str;
    /// Remote collection name.
    const COLLECTION: &'static str;
    /// Local store key, one file per key.
    const LOCAL_KEY: &'static str;
    /// Field holding [`Record::key`] in stored documents.
    const KEY_FIELD: &'static str;

    fn key(&self) -> &str;

    /// Records returned while the local collection has never been written.
    fn seed() -> Vec<Self>;
}

#[async_trait]
pub trait ReferenceRepository<T: Record>: Send + Sync {
    async fn list(&self) -> AppResult<Vec<T>>;
    async fn find(&self, key: &str) -> AppResult<Option<T>>;
    async fn create(&self, record: T) -> AppResult<T>;
    /// Replaces the record stored under `key`, inserting it when absent.
    async fn update(&self, key: &str, record: T) -> AppResult<T>;
    async fn delete(&self, key: &str) -> AppResult<()>;
}
