use axum::{routing::get, Router};
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use crate::http::routes::todos::ApiDoc;
use crate::http::types::ApiError;

pub const OPENAPI_JSON: &str = "/api-docs/openapi.json";

/// Wraps the todo routes with the health probe, API docs and a JSON 404 fallback.
pub fn app(router: Router) -> Router {
    Router::new()
        .route("/health", get(|| async { "ok" }))
        .merge(SwaggerUi::new("/swagger-ui").url(OPENAPI_JSON, ApiDoc::openapi()))
        .merge(router)
        .fallback(|| async { ApiError::NotFound("no such route".into()) })
}
