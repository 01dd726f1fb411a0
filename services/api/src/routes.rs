use crate::infra::AppState;
use axum::http::{header, StatusCode};
use axum::response::IntoResponse;
use axum::routing::get;
use axum::{Extension, Json, Router};
use rental_search::workflows::engagement::engagement_router;
use rental_search::workflows::search::{search_router, QueryParser, SearchState};
use serde_json::json;
use std::sync::atomic::Ordering;
use std::sync::Arc;

/// Search and engagement APIs plus the operational endpoints.
pub(crate) fn with_search_routes<P>(state: SearchState<P>) -> Router
where
    P: QueryParser + ?Sized + 'static,
{
    let session = Arc::clone(&state.session);

    search_router(state)
        .merge(engagement_router(session))
        .route("/health", get(healthcheck))
        .route("/ready", get(readiness_endpoint))
        .route("/metrics", get(metrics_endpoint))
}

pub(crate) async fn healthcheck() -> Json<serde_json::Value> {
    Json(json!({ "status": "ok" }))
}

pub(crate) async fn readiness_endpoint(Extension(state): Extension<AppState>) -> impl IntoResponse {
    let ready = state.readiness.load(Ordering::Relaxed);
    let (status, label) = if ready {
        (StatusCode::OK, "ready")
    } else {
        (StatusCode::SERVICE_UNAVAILABLE, "initializing")
    };

    (status, Json(json!({ "status": label })))
}

pub(crate) async fn metrics_endpoint(Extension(state): Extension<AppState>) -> impl IntoResponse {
    (
        StatusCode::OK,
        [(header::CONTENT_TYPE, "text/plain; version=0.0.4")],
        state.metrics.render(),
    )
}
