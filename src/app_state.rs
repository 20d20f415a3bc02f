use std::sync::Arc;

use crate::{
    auth::JwtService,
    config::Config,
    constants::curriculum::CurriculumTable,
    db::Database,
    errors::AppResult,
    models::domain::{SchoolProfile, Subject, User},
    repositories::{
        LocalReferenceRepository, LocalStore, MongoReferenceRepository, Record,
        ReferenceRepository, ResilientRepository,
    },
    services::{
        exam_service::ExamService,
        export_service::ExportService,
        model_service::{ChatCompletionsGenerator, TextGenerator},
        prompt_builder::PromptBuilder,
        school_service::SchoolService,
        subject_service::SubjectService,
        user_service::UserService,
    },
};

#[derive(Clone)]
pub struct AppState {
    pub config: Arc<Config>,
    pub jwt_service: Arc<JwtService>,
    pub exam_service: Arc<ExamService>,
    pub export_service: Arc<ExportService>,
    pub school_service: Arc<SchoolService>,
    pub subject_service: Arc<SubjectService>,
    pub user_service: Arc<UserService>,
    database: Option<Database>,
}

impl AppState {
    /// Wires the services. A configured MongoDB is kept even when it does not
    /// answer at start-up; the repositories fall back to local data per call.
    pub async fn new(config: Config) -> AppResult<Self> {
        let database = match &config.mongo_conn_string {
            Some(uri) => Some(Database::connect(uri, &config.mongo_db_name).await?),
            None => {
                log::info!("MONGO_CONN_STRING not set, using local store only");
                None
            }
        };

        let generator = Arc::new(ChatCompletionsGenerator::from_config(&config));
        Ok(Self::build(config, generator, database).await)
    }

    /// Local-only state with a caller-supplied generator.
    pub async fn with_generator(config: Config, generator: Arc<dyn TextGenerator>) -> Self {
        Self::build(config, generator, None).await
    }

    async fn build(
        config: Config,
        generator: Arc<dyn TextGenerator>,
        database: Option<Database>,
    ) -> Self {
        let store = Arc::new(LocalStore::new(config.local_data_dir.clone()));
        log::info!("Local store at {}", store.dir().display());

        let schools = resilient::<SchoolProfile>(&store, database.as_ref()).await;
        let subjects = resilient::<Subject>(&store, database.as_ref()).await;
        let users = resilient::<User>(&store, database.as_ref()).await;

        let exam_service = ExamService::new(PromptBuilder::new(CurriculumTable::standard()), generator);

        Self {
            jwt_service: Arc::new(JwtService::new(
                &config.jwt_secret,
                config.jwt_expiration_hours,
            )),
            exam_service: Arc::new(exam_service),
            export_service: Arc::new(ExportService::new()),
            school_service: Arc::new(SchoolService::new(schools)),
            subject_service: Arc::new(SubjectService::new(subjects)),
            user_service: Arc::new(UserService::new(users, config.demo_login_enabled)),
            config: Arc::new(config),
            database,
        }
    }

    pub fn has_remote_store(&self) -> bool {
        self.database.is_some()
    }

    /// Pings the remote store when one is configured.
    pub async fn remote_store_ready(&self) -> bool {
        match &self.database {
            Some(db) => db.health_check().await.is_ok(),
            None => true,
        }
    }
}

async fn resilient<T: Record>(
    store: &Arc<LocalStore>,
    database: Option<&Database>,
) -> Arc<dyn ReferenceRepository<T>> {
    let local: Arc<dyn ReferenceRepository<T>> = Arc::new(LocalReferenceRepository::new(store.clone()));

    let remote = match database {
        Some(db) => {
            let repository = MongoReferenceRepository::<T>::new(db);
            if let Err(e) = repository.ensure_indexes().await {
                log::warn!("Could not create index on {}: {}", T::COLLECTION, e);
            }
            let remote: Arc<dyn ReferenceRepository<T>> = Arc::new(repository);
            Some(remote)
        }
        None => None,
    };

    Arc::new(ResilientRepository::new(remote, local))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::services::model_service::MockTextGenerator;
    use tempfile::TempDir;

    #[test]
    fn test_app_state_is_cloneable() {
        fn assert_clone<T: Clone>() {}
        assert_clone::<AppState>();
    }

    #[tokio::test]
    async fn test_state_without_mongo_uses_local_store() {
        let dir = TempDir::new().unwrap();
        let mut config = Config::test_config();
        config.local_data_dir = dir.path().to_path_buf();

        let state = AppState::with_generator(config, Arc::new(MockTextGenerator::new())).await;

        assert!(!state.has_remote_store());
        assert!(state.remote_store_ready().await);
        assert_eq!(state.school_service.list_schools().await.unwrap().len(), 3);
    }

    fn unreachable_mongo_config(dir: &TempDir) -> Config {
        let mut config = Config::test_config();
        config.local_data_dir = dir.path().to_path_buf();
        config.mongo_conn_string = Some(
            "mongodb://127.0.0.1:1/?serverSelectionTimeoutMS=300&connectTimeoutMS=300".to_string(),
        );
        config
    }

    #[tokio::test]
    async fn test_unreachable_mongo_keeps_remote_configured() {
        let dir = TempDir::new().unwrap();
        let state = AppState::new(unreachable_mongo_config(&dir)).await.unwrap();

        assert!(state.has_remote_store());
        assert!(!state.remote_store_ready().await);
        // reads fall back to the local seed
        assert_eq!(state.school_service.list_schools().await.unwrap().len(), 3);
    }

    #[tokio::test]
    async fn test_malformed_mongo_uri_is_fatal() {
        let dir = TempDir::new().unwrap();
        let mut config = Config::test_config();
        config.local_data_dir = dir.path().to_path_buf();
        config.mongo_conn_string = Some("not-a-mongo-uri".to_string());

        assert!(AppState::new(config).await.is_err());
    }
}
