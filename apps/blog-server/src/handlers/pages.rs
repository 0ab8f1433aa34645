//! Static pages and the fallback for unknown routes.

use actix_web::{HttpRequest, HttpResponse, http::StatusCode};
use inkpot_shared::ErrorResponse;

use crate::middleware::error::{AppResult, error_page};
use crate::observability::RequestId;
use crate::views::{self, AboutTemplate, ContactTemplate};

/// GET /about
pub async fn about() -> AppResult<HttpResponse> {
    views::render(StatusCode::OK, &AboutTemplate)
}

/// GET /contact
pub async fn contact() -> AppResult<HttpResponse> {
    views::render(StatusCode::OK, &ContactTemplate)
}

/// Any route not matched above.
pub async fn not_found(req: HttpRequest, request_id: RequestId) -> HttpResponse {
    tracing::debug!(path = %req.path(), "No route matched");

    let problem = ErrorResponse::not_found(format!("Nothing lives at {}", req.path()))
        .with_request_id(request_id.as_str());
    error_page(StatusCode::NOT_FOUND, &problem)
}
