//! Error handling middleware - HTML error pages built from RFC 7807 problem details.

use actix_web::http::header::ContentType;
use actix_web::{HttpResponse, ResponseError, http::StatusCode};
use askama::Template;
use inkpot_shared::ErrorResponse;
use std::fmt;

use inkpot_core::DomainError;

use crate::views::ErrorTemplate;

/// Application-level error type that converts to an error page.
#[derive(Debug)]
pub enum AppError {
    NotFound(String),
    BadRequest(String),
    Internal(String),
}

impl fmt::Display for AppError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AppError::NotFound(msg) => write!(f, "Not found: {}", msg),
            AppError::BadRequest(msg) => write!(f, "Bad request: {}", msg),
            AppError::Internal(msg) => write!(f, "Internal error: {}", msg),
        }
    }
}

impl AppError {
    fn problem(&self) -> ErrorResponse {
        match self {
            AppError::NotFound(detail) => ErrorResponse::not_found(detail),
            AppError::BadRequest(detail) => {
                ErrorResponse::new(400, "Bad Request").with_detail(detail)
            }
            AppError::Internal(detail) => {
                // Log internal errors
                tracing::error!("Internal error: {}", detail);
                ErrorResponse::internal_error()
            }
        }
    }
}

impl ResponseError for AppError {
    fn status_code(&self) -> StatusCode {
        match self {
            AppError::NotFound(_) => StatusCode::NOT_FOUND,
            AppError::BadRequest(_) => StatusCode::BAD_REQUEST,
            AppError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn error_response(&self) -> HttpResponse {
        error_page(self.status_code(), &self.problem())
    }
}

/// Render `problem` as an HTML page, falling back to plain text.
pub fn error_page(status: StatusCode, problem: &ErrorResponse) -> HttpResponse {
    match ErrorTemplate::from(problem).render() {
        Ok(html) => HttpResponse::build(status)
            .content_type(ContentType::html())
            .body(html),
        Err(e) => {
            tracing::error!("Error page rendering failed: {}", e);
            HttpResponse::build(status)
                .content_type(ContentType::plaintext())
                .body(problem.title.clone())
        }
    }
}

// Conversion from domain errors
impl From<DomainError> for AppError {
    fn from(err: DomainError) -> Self {
        match err {
            DomainError::NotFound { entity_type, id } => {
                AppError::NotFound(format!("{} with id {} not found", entity_type, id))
            }
            DomainError::Validation(errors) => AppError::BadRequest(errors.to_string()),
            DomainError::Duplicate { title } => {
                AppError::BadRequest(format!("A post titled {:?} already exists", title))
            }
            DomainError::Storage(msg) => {
                tracing::error!("Storage error: {}", msg);
                AppError::Internal("Database error".to_string())
            }
        }
    }
}

/// Result type alias for handlers.
pub type AppResult<T> = Result<T, AppError>;

#[cfg(test)]
mod tests {
    use actix_web::body::to_bytes;

    use super::*;

    #[actix_web::test]
    async fn test_not_found_renders_html_page() {
        let err: AppError = DomainError::NotFound {
            entity_type: "Post",
            id: 3,
        }
        .into();
        assert_eq!(err.status_code(), StatusCode::NOT_FOUND);

        let body = to_bytes(err.error_response().into_body()).await.unwrap();
        let html = String::from_utf8(body.to_vec()).unwrap();
        assert!(html.contains("404 Not Found"));
        assert!(html.contains("Post with id 3 not found"));
    }

    #[actix_web::test]
    async fn test_storage_error_hides_details() {
        let err: AppError = DomainError::Storage("connection refused".to_string()).into();
        assert_eq!(err.status_code(), StatusCode::INTERNAL_SERVER_ERROR);

        let body = to_bytes(err.error_response().into_body()).await.unwrap();
        let html = String::from_utf8(body.to_vec()).unwrap();
        assert!(!html.contains("connection refused"));
    }
}
