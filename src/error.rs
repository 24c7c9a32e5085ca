//! Error types for forumhub.

use thiserror::Error;

/// Common error type for forumhub.
#[derive(Error, Debug)]
pub enum AppError {
    /// Database error.
    ///
    /// This is a generic database error that wraps errors from the
    /// underlying store. Database errors from sqlx are automatically
    /// converted.
    #[error("database error: {0}")]
    Database(String),

    /// I/O error (file store reads/writes).
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// No credential was presented at all.
    #[error("authentication required")]
    Unauthenticated,

    /// A credential was presented but did not verify (bad token,
    /// expired token, or wrong password).
    #[error("invalid credential: {0}")]
    InvalidCredential(String),

    /// Authenticated but lacking the required privilege.
    #[error("permission denied: {0}")]
    Forbidden(String),

    /// Validation error for user input.
    #[error("validation error: {0}")]
    Validation(String),

    /// Resource already exists (e.g. duplicate forum name).
    #[error("conflict: {0}")]
    Conflict(String),

    /// Resource not found.
    #[error("{0} not found")]
    NotFound(String),

    /// Configuration error.
    #[error("configuration error: {0}")]
    Config(String),
}

// Conversion from sqlx errors
impl From<sqlx::Error> for AppError {
    fn from(e: sqlx::Error) -> Self {
        AppError::Database(e.to_string())
    }
}

/// Result type alias for forumhub operations.
pub type Result<T> = std::result::Result<T, AppError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unauthenticated_display() {
        let err = AppError::Unauthenticated;
        assert_eq!(err.to_string(), "authentication required");
    }

    #[test]
    fn test_invalid_credential_display() {
        let err = AppError::InvalidCredential("token expired".to_string());
        assert_eq!(err.to_string(), "invalid credential: token expired");
    }

    #[test]
    fn test_forbidden_display() {
        let err = AppError::Forbidden("admin access required".to_string());
        assert_eq!(err.to_string(), "permission denied: admin access required");
    }

    #[test]
    fn test_validation_display() {
        let err = AppError::Validation("forum name is required".to_string());
        assert_eq!(err.to_string(), "validation error: forum name is required");
    }

    #[test]
    fn test_not_found_display() {
        let err = AppError::NotFound("forum post".to_string());
        assert_eq!(err.to_string(), "forum post not found");
    }

    #[test]
    fn test_io_error_conversion() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "file not found");
        let err: AppError = io_err.into();
        assert!(matches!(err, AppError::Io(_)));
        assert!(err.to_string().contains("file not found"));
    }

    #[test]
    fn test_result_alias() {
        fn sample_ok() -> Result<i32> {
            Ok(42)
        }

        fn sample_err() -> Result<i32> {
            Err(AppError::Unauthenticated)
        }

        assert_eq!(sample_ok().unwrap(), 42);
        assert!(sample_err().is_err());
    }
}
