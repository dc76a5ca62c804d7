use axum::{routing::get, Json, Router};
use tower_http::{
    cors::CorsLayer,
    trace::{DefaultMakeSpan, DefaultOnFailure, DefaultOnRequest, DefaultOnResponse, TraceLayer},
};
use tracing::Level;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use common::types::{Health, RootInfo};

use crate::{openapi::ApiDoc, state::ServerState};

pub mod cheques;

#[utoipa::path(get, path = "/", tag = "health", responses((status = 200, description = "API is running", body = crate::openapi::RootInfoDoc)))]
pub async fn root() -> Json<RootInfo> {
    Json(RootInfo {
        message: "Cheque App API",
        status: "running",
        version: env!("CARGO_PKG_VERSION"),
    })
}

#[utoipa::path(get, path = "/health", tag = "health", responses((status = 200, description = "OK", body = crate::openapi::HealthResponse)))]
pub async fn health() -> Json<Health> {
    Json(Health { status: "ok" })
}

/// Build the full application router: root/health, the cheque resource and API docs.
pub fn build_router(state: ServerState, cors: CorsLayer) -> Router {
    let api = Router::new()
        .route(
            "/api/cheques",
            get(cheques::list).post(cheques::create).delete(cheques::clear),
        )
        .route("/api/cheques/:id", get(cheques::get).delete(cheques::delete));

    Router::new()
        .route("/", get(root))
        .route("/health", get(health))
        .merge(api)
        .merge(SwaggerUi::new("/docs").url("/openapi.json", ApiDoc::openapi()))
        .with_state(state)
        .layer(cors)
        .layer(
            TraceLayer::new_for_http()
                .make_span_with(DefaultMakeSpan::new().level(Level::INFO).include_headers(false))
                .on_request(DefaultOnRequest::new().level(Level::INFO))
                .on_response(DefaultOnResponse::new().level(Level::INFO).include_headers(false))
                // 5xx are logged at ERROR
                .on_failure(DefaultOnFailure::new().level(Level::ERROR)),
        )
}
