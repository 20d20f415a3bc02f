#[cfg(test)]
pub mod fixtures {
    use crate::{
        auth::Claims,
        models::{
            domain::{SchoolLevel, User, UserRole},
            dto::request::{SaveSchoolRequest, SaveSubjectRequest},
        },
    };

    pub fn admin() -> User {
        User::new("admin", "Administrator", UserRole::Admin)
    }

    pub fn teacher() -> User {
        User::new("guru", "Guru Mapel", UserRole::User)
    }

    pub fn claims_for(user: &User) -> Claims {
        Claims::new(user, 1)
    }

    pub fn school_request(name: &str) -> SaveSchoolRequest {
        SaveSchoolRequest {
            name: name.to_string(),
            level: SchoolLevel::Smk,
            logo_url: String::new(),
            headmaster_name: "Ir. Bambang Sutrisno".to_string(),
            headmaster_nip: "19680312 199203 1 002".to_string(),
            address: None,
        }
    }

    pub fn subject_request(name: &str, levels: &[SchoolLevel]) -> SaveSubjectRequest {
        SaveSubjectRequest {
            name: name.to_string(),
            levels: levels.to_vec(),
        }
    }
}

#[cfg(test)]
pub mod test_helpers {
    use std::sync::Arc;

    use actix_web::http::StatusCode;
    use tempfile::TempDir;

    use crate::{app_state::AppState, config::Config, services::model_service::TextGenerator};

    /// Local-only state whose store lives in `dir`.
    pub async fn test_state(dir: &TempDir, generator: Arc<dyn TextGenerator>) -> AppState {
        let mut config = Config::test_config();
        config.local_data_dir = dir.path().to_path_buf();
        AppState::with_generator(config, generator).await
    }

    /// Asserts that a status code represents an error (4xx or 5xx)
    pub fn assert_error_status(status: StatusCode) {
        assert!(
            status.is_client_error() || status.is_server_error(),
            "Expected error status, got: {}",
            status
        );
    }

    /// Asserts that a status code represents success (2xx)
    pub fn assert_success_status(status: StatusCode) {
        assert!(
            status.is_success(),
            "Expected success status, got: {}",
            status
        );
    }
}

#[cfg(test)]
mod tests {
    use super::fixtures::*;

    #[test]
    fn test_fixture_roles() {
        assert!(admin().is_admin());
        assert!(!teacher().is_admin());
        assert_eq!(claims_for(&teacher()).username(), "guru");
    }

    #[test]
    fn test_school_request_fixture_is_valid() {
        use validator::Validate;
        assert!(school_request("SMKN 1 DEPOK").validate().is_ok());
    }
}
