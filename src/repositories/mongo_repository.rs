use async_trait::async_trait;
use futures::TryStreamExt;
use mongodb::{
    bson::{doc, Document},
    options::{IndexOptions, ReplaceOptions},
    Collection, IndexModel,
};

use crate::{
    db::Database,
    errors::{AppError, AppResult},
    repositories::{Record, ReferenceRepository},
};

pub struct MongoReferenceRepository<T: Record> {
    collection: Collection<T>,
}

impl<T: Record> MongoReferenceRepository<T> {
    pub fn new(db: &Database) -> Self {
        let collection = db.get_collection(T::COLLECTION);
        Self { collection }
    }

    fn key_filter(key: &str) -> Document {
        let mut filter = Document::new();
        filter.insert(T::KEY_FIELD, key);
        filter
    }

    pub async fn ensure_indexes(&self) -> AppResult<()> {
        let options = IndexOptions::builder().unique(true).build();
        let mut keys = Document::new();
        keys.insert(T::KEY_FIELD, 1);
        let model = IndexModel::builder().keys(keys).options(options).build();

        self.collection.create_index(model).await?;
        log::info!(
            "Created unique index on {}.{}",
            T::COLLECTION,
            T::KEY_FIELD
        );

        Ok(())
    }
}

#[async_trait]
impl<T: Record> ReferenceRepository<T> for MongoReferenceRepository<T> {
    async fn list(&self) -> AppResult<Vec<T>> {
        let cursor = self.collection.find(doc! {}).await?;
        let records: Vec<T> = cursor.try_collect().await?;
        Ok(records)
    }

    async fn find(&self, key: &str) -> AppResult<Option<T>> {
        let record = self.collection.find_one(Self::key_filter(key)).await?;
        Ok(record)
    }

    async fn create(&self, record: T) -> AppResult<T> {
        self.collection.insert_one(&record).await?;
        Ok(record)
    }

    async fn update(&self, key: &str, record: T) -> AppResult<T> {
        let options = ReplaceOptions::builder().upsert(true).build();

        self.collection
            .replace_one(Self::key_filter(key), &record)
            .with_options(options)
            .await?;

        Ok(record)
    }

    async fn delete(&self, key: &str) -> AppResult<()> {
        let result = self.collection.delete_one(Self::key_filter(key)).await?;

        if result.deleted_count == 0 {
            return Err(AppError::NotFound(format!(
                "{} '{}' not found",
                T::ENTITY,
                key
            )));
        }

        Ok(())
    }
}
