use secrecy::SecretString;
use std::{env, path::PathBuf};

const DEFAULT_JWT_SECRET: &str = "dev_secret_key_change_in_production";
const DEFAULT_GENERATION_API_BASE: &str =
    "https://generativelanguage.googleapis.com/v1beta/openai";

#[derive(Clone, Debug)]
pub struct Config {
    pub app_env: String,
    pub web_server_host: String,
    pub web_server_port: u16,
    pub mongo_conn_string: Option<String>,
    pub mongo_db_name: String,
    pub local_data_dir: PathBuf,
    pub generation_api_key: Option<SecretString>,
    pub generation_api_base: String,
    pub generation_model: String,
    pub jwt_secret: SecretString,
    pub jwt_expiration_hours: i64,
    pub demo_login_enabled: bool,
    pub cors_allowed_origin: String,
}

impl Config {
    pub fn from_env() -> Self {
        Self {
            app_env: env::var("APP_ENV").unwrap_or_else(|_| "development".to_string()),
            web_server_host: env::var("WEB_SERVER_HOST")
                .unwrap_or_else(|_| "localhost".to_string()),
            web_server_port: env::var("WEB_SERVER_PORT")
                .ok()
                .and_then(|p| p.parse().ok())
                .unwrap_or(8080),
            mongo_conn_string: non_empty_var("MONGO_CONN_STRING"),
            mongo_db_name: env::var("MONGO_DB_NAME").unwrap_or_else(|_| "soal-local".to_string()),
            local_data_dir: env::var("LOCAL_DATA_DIR")
                .map(PathBuf::from)
                .unwrap_or_else(|_| PathBuf::from("./data")),
            generation_api_key: non_empty_var("GENERATION_API_KEY")
                .or_else(|| non_empty_var("API_KEY"))
                .map(SecretString::from),
            generation_api_base: env::var("GENERATION_API_BASE")
                .unwrap_or_else(|_| DEFAULT_GENERATION_API_BASE.to_string()),
            generation_model: env::var("GENERATION_MODEL")
                .unwrap_or_else(|_| "gemini-2.5-flash".to_string()),
            jwt_secret: SecretString::from(
                env::var("JWT_SECRET").unwrap_or_else(|_| DEFAULT_JWT_SECRET.to_string()),
            ),
            jwt_expiration_hours: env::var("JWT_EXPIRATION_HOURS")
                .ok()
                .and_then(|h| h.parse().ok())
                .unwrap_or(24),
            demo_login_enabled: env::var("DEMO_LOGIN_ENABLED")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(true),
            cors_allowed_origin: env::var("CORS_ALLOWED_ORIGIN")
                .unwrap_or_else(|_| "http://localhost:5173".to_string()),
        }
    }

    pub fn is_production(&self) -> bool {
        self.app_env.eq_ignore_ascii_case("production")
    }

    /// Validate that production-critical configuration is set
    /// Panics if required secrets are using default values
    pub fn validate_for_production(&self) {
        use secrecy::ExposeSecret;

        let jwt_secret = self.jwt_secret.expose_secret();

        if jwt_secret == DEFAULT_JWT_SECRET {
            panic!(
                "FATAL: JWT_SECRET is using default value! Set JWT_SECRET environment variable to a secure random string."
            );
        }

        if jwt_secret.len() < 32 {
            panic!(
                "FATAL: JWT_SECRET is too short ({}). Must be at least 32 characters for security.",
                jwt_secret.len()
            );
        }

        if self.demo_login_enabled {
            panic!("FATAL: DEMO_LOGIN_ENABLED must be false in production.");
        }

        if self.generation_api_key.is_none() {
            panic!(
                "FATAL: GENERATION_API_KEY is not set! Exam generation cannot work without it."
            );
        }
    }

    #[cfg(test)]
    pub fn test_config() -> Self {
        Self {
            app_env: "test".to_string(),
            web_server_host: "127.0.0.1".to_string(),
            web_server_port: 8080,
            mongo_conn_string: None,
            mongo_db_name: "soal-test".to_string(),
            local_data_dir: env::temp_dir().join("soal-test"),
            generation_api_key: Some(SecretString::from("test_api_key".to_string())),
            generation_api_base: "http://127.0.0.1:9/v1".to_string(),
            generation_model: "test-model".to_string(),
            jwt_secret: SecretString::from("test_jwt_secret_key".to_string()),
            jwt_expiration_hours: 1,
            demo_login_enabled: true,
            cors_allowed_origin: "http://localhost:5173".to_string(),
        }
    }
}

fn non_empty_var(name: &str) -> Option<String> {
    env::var(name).ok().filter(|v| !v.trim().is_empty())
}
