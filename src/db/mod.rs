use mongodb::{
    bson::doc,
    options::{ClientOptions, ServerApi, ServerApiVersion},
    Client, Collection,
};
use std::time::Duration;

use crate::errors::AppResult;

#[derive(Clone)]
pub struct Database {
    client: Client,
    db_name: String,
}

impl Database {
    /// Builds the client and pings once. Only a malformed connection string
    /// is an error: an unreachable server is logged and every later call
    /// reaches for it again.
    pub async fn connect(conn_string: &str, db_name: &str) -> AppResult<Self> {
        let mut client_options = ClientOptions::parse(conn_string).await?;

        let server_api = ServerApi::builder().version(ServerApiVersion::V1).build();
        client_options.server_api = Some(server_api);
        client_options.max_pool_size = Some(10);
        client_options.min_pool_size = Some(2);
        client_options
            .connect_timeout
            .get_or_insert(Duration::from_secs(5));
        client_options
            .server_selection_timeout
            .get_or_insert(Duration::from_secs(5));

        let client = Client::with_options(client_options)?;
        let database = Self {
            client,
            db_name: db_name.to_string(),
        };

        match database.health_check().await {
            Ok(()) => log::info!("Connected to MongoDB database '{}'", db_name),
            Err(e) => log::warn!(
                "MongoDB database '{}' not reachable yet, falling back to local store per call: {}",
                db_name,
                e
            ),
        }

        Ok(database)
    }

    pub fn get_collection<T>(&self, collection_name: &str) -> Collection<T>
    where
        T: Send + Sync,
    {
        self.client
            .database(&self.db_name)
            .collection(collection_name)
    }

    pub async fn health_check(&self) -> AppResult<()> {
        self.client
            .database("admin")
            .run_command(doc! { "ping": 1 })
            .await?;
        Ok(())
    }

    pub fn db_name(&self) -> &str {
        &self.db_name
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_database_is_send_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<Database>();
    }

    #[tokio::test]
    async fn test_invalid_connection_string_is_rejected() {
        let result = Database::connect("not-a-mongo-uri", "soal-test").await;
        assert!(result.is_err());
    }

    #[tokio::test]
    async fn test_unreachable_server_still_yields_handle() {
        let db = Database::connect(
            "mongodb://127.0.0.1:1/?serverSelectionTimeoutMS=300&connectTimeoutMS=300",
            "soal-test",
        )
        .await
        .unwrap();

        assert_eq!(db.db_name(), "soal-test");
        assert!(db.health_check().await.is_err());
    }
}
