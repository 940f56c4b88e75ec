//! Typed errors and HTTP mapping.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};
use thiserror::Error;

/// Header line that precedes the itemized schema violations in a 400 body.
pub const VALIDATION_HEADER: &str = "The document is not valid. see errors :\n";

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("invalid value for {key}: '{value}'")]
    InvalidValue { key: &'static str, value: String },
    #[error("unknown store kind: '{0}' (expected 'postgres' or 'memory')")]
    UnknownStore(String),
}

#[derive(Error, Debug)]
pub enum AppError {
    #[error(transparent)]
    Config(#[from] ConfigError),
    #[error("validation: {}", .0.join("; "))]
    Validation(Vec<String>),
    #[error("malformed JSON: {0}")]
    MalformedInput(String),
    #[error("not found: {0}")]
    NotFound(String),
    #[error("database: {0}")]
    Db(#[from] sqlx::Error),
    #[error("persistence: {0}")]
    Persistence(String),
}

impl AppError {
    pub fn status(&self) -> StatusCode {
        match self {
            AppError::Validation(_) | AppError::MalformedInput(_) => StatusCode::BAD_REQUEST,
            AppError::NotFound(_) => StatusCode::NOT_FOUND,
            AppError::Config(_) | AppError::Db(_) | AppError::Persistence(_) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        }
    }

    /// Text written to the client. Server-side failures stay opaque.
    pub fn body(&self) -> String {
        match self {
            AppError::Validation(messages) => {
                let mut out = String::from(VALIDATION_HEADER);
                for m in messages {
                    out.push_str("- ");
                    out.push_str(m);
                    out.push('\n');
                }
                out
            }
            AppError::MalformedInput(_) | AppError::NotFound(_) => self.to_string(),
            AppError::Config(_) | AppError::Db(_) | AppError::Persistence(_) => {
                "internal server error".to_string()
            }
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status();
        if status.is_server_error() {
            tracing::error!(error = %self, "request failed");
        } else {
            tracing::debug!(error = %self, status = status.as_u16(), "request rejected");
        }
        (status, self.body()).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn validation_body_lists_every_message() {
        let err = AppError::Validation(vec![
            "(root): age is required".into(),
            "firstName: String length must be greater than or equal to 1".into(),
        ]);
        assert_eq!(err.status(), StatusCode::BAD_REQUEST);
        assert_eq!(
            err.body(),
            "The document is not valid. see errors :\n\
             - (root): age is required\n\
             - firstName: String length must be greater than or equal to 1\n"
        );
    }

    #[test]
    fn store_errors_do_not_leak_details() {
        let err = AppError::Persistence("connection refused to 10.0.0.3".into());
        assert_eq!(err.status(), StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(err.body(), "internal server error");

        let err = AppError::Db(sqlx::Error::PoolTimedOut);
        assert_eq!(err.status(), StatusCode::INTERNAL_SERVER_ERROR);
        assert!(!err.body().contains("pool"));
    }

    #[test]
    fn not_found_is_a_client_error() {
        let err = AppError::NotFound("person 7".into());
        assert_eq!(err.status(), StatusCode::NOT_FOUND);
        assert_eq!(err.body(), "not found: person 7");
    }
}
