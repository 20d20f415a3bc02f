use actix_web::{http::StatusCode, HttpResponse, ResponseError};
use async_graphql::ErrorExtensions;
use serde::Serialize;
use thiserror::Error;

/// User-facing message for every failed generation request.
pub const GENERATION_FAILED_MESSAGE: &str =
    "Gagal menyusun dokumen. Silahkan coba lagi beberapa saat lagi.";

/// Failure kinds of a single generation request. None of them is retried.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GenerationError {
    #[error("no credential configured for the generation provider")]
    ProviderUnavailable,

    #[error("generation provider returned no text")]
    EmptyResponse,

    #[error("generation response is malformed: {reason} (excerpt: {excerpt})")]
    MalformedResponse { reason: String, excerpt: String },

    #[error("generation provider error: {0}")]
    ProviderError(String),
}

impl GenerationError {
    pub fn kind(&self) -> &'static str {
        match self {
            GenerationError::ProviderUnavailable => "PROVIDER_UNAVAILABLE",
            GenerationError::EmptyResponse => "EMPTY_RESPONSE",
            GenerationError::MalformedResponse { .. } => "MALFORMED_RESPONSE",
            GenerationError::ProviderError(_) => "PROVIDER_ERROR",
        }
    }
}

#[derive(Debug, Clone, Error)]
pub enum AppError {
    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Already exists: {0}")]
    AlreadyExists(String),

    #[error("Validation error: {0}")]
    ValidationError(String),

    #[error("Database error: {0}")]
    DatabaseError(String),

    #[error("Storage error: {0}")]
    StorageError(String),

    #[error("Unauthorized: {0}")]
    Unauthorized(String),

    #[error("Forbidden: {0}")]
    Forbidden(String),

    #[error("Generation failed: {0}")]
    GenerationFailed(GenerationError),

    #[error("Internal server error: {0}")]
    InternalError(String),
}

impl AppError {
    fn error_code(&self) -> &'static str {
        match self {
            AppError::NotFound(_) => "NOT_FOUND",
            AppError::AlreadyExists(_) => "ALREADY_EXISTS",
            AppError::ValidationError(_) => "VALIDATION_ERROR",
            AppError::DatabaseError(_) => "DATABASE_ERROR",
            AppError::StorageError(_) => "STORAGE_ERROR",
            AppError::Unauthorized(_) => "UNAUTHORIZED",
            AppError::Forbidden(_) => "FORBIDDEN",
            AppError::GenerationFailed(_) => "GENERATION_FAILED",
            AppError::InternalError(_) => "INTERNAL_ERROR",
        }
    }

    /// Message shown to the client. Generation details stay in the log.
    fn public_message(&self) -> String {
        match self {
            AppError::GenerationFailed(_) => GENERATION_FAILED_MESSAGE.to_string(),
            other => other.to_string(),
        }
    }
}

#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: String,
    pub code: u16,
}

impl ResponseError for AppError {
    fn status_code(&self) -> StatusCode {
        match self {
            AppError::NotFound(_) => StatusCode::NOT_FOUND,
            AppError::AlreadyExists(_) => StatusCode::CONFLICT,
            AppError::ValidationError(_) => StatusCode::BAD_REQUEST,
            AppError::DatabaseError(_) => StatusCode::INTERNAL_SERVER_ERROR,
            AppError::StorageError(_) => StatusCode::INTERNAL_SERVER_ERROR,
            AppError::Unauthorized(_) => StatusCode::UNAUTHORIZED,
            AppError::Forbidden(_) => StatusCode::FORBIDDEN,
            AppError::GenerationFailed(GenerationError::ProviderUnavailable) => {
                StatusCode::SERVICE_UNAVAILABLE
            }
            AppError::GenerationFailed(_) => StatusCode::BAD_GATEWAY,
            AppError::InternalError(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn error_response(&self) -> HttpResponse {
        HttpResponse::build(self.status_code()).json(ErrorResponse {
            error: self.public_message(),
            code: self.status_code().as_u16(),
        })
    }
}

impl From<GenerationError> for AppError {
    fn from(err: GenerationError) -> Self {
        AppError::GenerationFailed(err)
    }
}
impl From<mongodb::error::Error> for AppError {
    fn from(err: mongodb::error::Error) -> Self {
        AppError::DatabaseError(err.to_string())
    }
}
impl From<std::io::Error> for AppError {
    fn from(err: std::io::Error) -> Self {
        AppError::StorageError(err.to_string())
    }
}
impl From<serde_json::Error> for AppError {
    fn from(err: serde_json::Error) -> Self {
        AppError::StorageError(format!("JSON error: {}", err))
    }
}
impl From<validator::ValidationErrors> for AppError {
    fn from(err: validator::ValidationErrors) -> Self {
        AppError::ValidationError(err.to_string())
    }
}
impl From<async_graphql::Error> for AppError {
    fn from(err: async_graphql::Error) -> Self {
        AppError::InternalError(err.message)
    }
}
impl ErrorExtensions for AppError {
    fn extend(&self) -> async_graphql::Error {
        async_graphql::Error::new(self.public_message()).extend_with(|_err, e| {
            e.set("code", self.error_code());
            if let AppError::GenerationFailed(kind) = self {
                e.set("kind", kind.kind());
            }
        })
    }
}

pub type AppResult<T> = Result<T, AppError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_status_codes() {
        assert_eq!(
            AppError::NotFound("test".into()).status_code(),
            StatusCode::NOT_FOUND
        );
        assert_eq!(
            AppError::AlreadyExists("test".into()).status_code(),
            StatusCode::CONFLICT
        );
        assert_eq!(
            AppError::ValidationError("test".into()).status_code(),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(
            AppError::Forbidden("test".into()).status_code(),
            StatusCode::FORBIDDEN
        );
    }

    #[test]
    fn test_generation_status_codes() {
        assert_eq!(
            AppError::from(GenerationError::ProviderUnavailable).status_code(),
            StatusCode::SERVICE_UNAVAILABLE
        );
        assert_eq!(
            AppError::from(GenerationError::EmptyResponse).status_code(),
            StatusCode::BAD_GATEWAY
        );
        assert_eq!(
            AppError::from(GenerationError::ProviderError("timeout".into())).status_code(),
            StatusCode::BAD_GATEWAY
        );
    }

    #[test]
    fn test_error_messages() {
        let err = AppError::NotFound("school".into());
        assert_eq!(err.to_string(), "Not found: school");
    }

    #[test]
    fn test_generation_failure_hides_diagnostics_from_client() {
        let err = AppError::from(GenerationError::MalformedResponse {
            reason: "missing field `essay`".into(),
            excerpt: "{\"title\":\"X\"}".into(),
        });

        assert_eq!(err.public_message(), GENERATION_FAILED_MESSAGE);
        assert!(err.to_string().contains("missing field `essay`"));
    }
}
