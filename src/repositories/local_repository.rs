use async_trait::async_trait;
use std::{
    io::ErrorKind,
    marker::PhantomData,
    path::{Path, PathBuf},
    sync::Arc,
};
use tokio::{fs, sync::Mutex};

use crate::{
    errors::{AppError, AppResult},
    repositories::{Record, ReferenceRepository},
};

/// Directory of JSON documents, one file per key.
///
/// Every read-modify-write runs under a single in-process lock and files
/// are replaced atomically through a temp file and rename.
pub struct LocalStore {
    dir: PathBuf,
    lock: Mutex<()>,
}

impl LocalStore {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self {
            dir: dir.into(),
            lock: Mutex::new(()),
        }
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    fn path_for(&self, key: &str) -> PathBuf {
        self.dir.join(format!("{}.json", key))
    }

    /// Stored records, or the seed when the key has never been written.
    async fn read_records<T: Record>(&self) -> AppResult<Vec<T>> {
        match fs::read(self.path_for(T::LOCAL_KEY)).await {
            Ok(bytes) => Ok(serde_json::from_slice(&bytes)?),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(T::seed()),
            Err(e) => Err(e.into()),
        }
    }

    async fn write_records<T: Record>(&self, records: &[T]) -> AppResult<()> {
        fs::create_dir_all(&self.dir).await?;

        let path = self.path_for(T::LOCAL_KEY);
        let tmp = self.dir.join(format!("{}.json.tmp", T::LOCAL_KEY));
        let bytes = serde_json::to_vec_pretty(records)?;

        fs::write(&tmp, bytes).await?;
        fs::rename(&tmp, &path).await?;
        Ok(())
    }

    pub async fn load<T: Record>(&self) -> AppResult<Vec<T>> {
        let _guard = self.lock.lock().await;
        self.read_records().await
    }

    /// Applies `f` to the stored records and persists them if it succeeds.
    pub async fn modify<T, R, F>(&self, f: F) -> AppResult<R>
    where
        T: Record,
        F: FnOnce(&mut Vec<T>) -> AppResult<R> + Send,
        R: Send,
    {
        let _guard = self.lock.lock().await;
        let mut records = self.read_records::<T>().await?;
        let result = f(&mut records)?;
        self.write_records(&records).await?;
        Ok(result)
    }
}

pub struct LocalReferenceRepository<T: Record> {
    store: Arc<LocalStore>,
    _record: PhantomData<fn() -> T>,
}

impl<T: Record> LocalReferenceRepository<T> {
    pub fn new(store: Arc<LocalStore>) -> Self {
        Self {
            store,
            _record: PhantomData,
        }
    }
}

#[async_trait]
impl<T: Record> ReferenceRepository<T> for LocalReferenceRepository<T> {
    async fn list(&self) -> AppResult<Vec<T>> {
        self.store.load::<T>().await
    }

    async fn find(&self, key: &str) -> AppResult<Option<T>> {
        let records = self.store.load::<T>().await?;
        Ok(records.into_iter().find(|r| r.key() == key))
    }

    async fn create(&self, record: T) -> AppResult<T> {
        self.store
            .modify(move |records: &mut Vec<T>| {
                if records.iter().any(|r| r.key() == record.key()) {
                    return Err(AppError::AlreadyExists(format!(
                        "{} '{}' already exists",
                        T::ENTITY,
                        record.key()
                    )));
                }
                records.push(record.clone());
                Ok(record)
            })
            .await
    }

    async fn update(&self, key: &str, record: T) -> AppResult<T> {
        self.store
            .modify(move |records: &mut Vec<T>| {
                match records.iter_mut().find(|r| r.key() == key) {
                    Some(existing) => *existing = record.clone(),
                    None => records.push(record.clone()),
                }
                Ok(record)
            })
            .await
    }

    async fn delete(&self, key: &str) -> AppResult<()> {
        self.store
            .modify(move |records: &mut Vec<T>| {
                let before = records.len();
                records.retain(|r| r.key() != key);
                if records.len() == before {
                    return Err(AppError::NotFound(format!(
                        "{} '{}' not found",
                        T::ENTITY,
                        key
                    )));
                }
                Ok(())
            })
            .await
    }
}
