use std::sync::Arc;

use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::{get, post},
    Json, Router,
};
use serde::Serialize;
use serde_json::json;

use crate::workflows::catalog::ListingId;

use super::bucket::{EngagementAction, EngagementBucket};
use super::session::EngagementSession;
use super::tracker::Transition;

/// Engagement state exposed to a presentation layer.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct EngagementView {
    pub listing_id: ListingId,
    pub bucket: Option<EngagementBucket>,
    pub label: Option<&'static str>,
    pub changed: bool,
    pub actions: Vec<EngagementAction>,
}

impl EngagementView {
    fn from_transition(transition: Transition) -> Self {
        let mut view = Self::current(transition.listing_id.clone(), transition.to);
        view.changed = transition.changed();
        view
    }

    fn current(listing_id: ListingId, bucket: Option<EngagementBucket>) -> Self {
        let actions = match bucket {
            Some(bucket) => bucket.available_actions().to_vec(),
            None => vec![EngagementAction::Contact],
        };

        Self {
            listing_id,
            bucket,
            label: bucket.map(EngagementBucket::label),
            changed: false,
            actions,
        }
    }
}

/// Router builder exposing the tracker operations and the dashboard.
pub fn engagement_router(session: Arc<EngagementSession>) -> Router {
    Router::new()
        .route("/api/engagements", get(dashboard_handler))
        .route(
            "/api/engagements/:listing_id",
            get(status_handler).delete(remove_handler),
        )
        .route(
            "/api/engagements/:listing_id/:action",
            post(transition_handler),
        )
        .with_state(session)
}

pub(crate) async fn dashboard_handler(State(session): State<Arc<EngagementSession>>) -> Response {
    (StatusCode::OK, Json(session.dashboard())).into_response()
}

pub(crate) async fn status_handler(
    State(session): State<Arc<EngagementSession>>,
    Path(listing_id): Path<String>,
) -> Response {
    let id = ListingId(listing_id);
    let bucket = session.bucket_of(&id);
    (StatusCode::OK, Json(EngagementView::current(id, bucket))).into_response()
}

pub(crate) async fn transition_handler(
    State(session): State<Arc<EngagementSession>>,
    Path((listing_id, action)): Path<(String, String)>,
) -> Response {
    let action = match action.parse::<EngagementAction>() {
        Ok(EngagementAction::Remove) | Err(_) => {
            let payload = json!({
                "error": format!("unsupported engagement action '{action}'"),
            });
            return (StatusCode::NOT_FOUND, Json(payload)).into_response();
        }
        Ok(action) => action,
    };

    let transition = session.apply(action, &ListingId(listing_id));
    (
        StatusCode::OK,
        Json(EngagementView::from_transition(transition)),
    )
        .into_response()
}

pub(crate) async fn remove_handler(
    State(session): State<Arc<EngagementSession>>,
    Path(listing_id): Path<String>,
) -> StatusCode {
    session.remove(&ListingId(listing_id));
    StatusCode::NO_CONTENT
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::workflows::catalog::Catalog;
    use axum::body::Body;
    use axum::http::Request;
    use serde_json::Value;
    use tower::ServiceExt;

    fn session() -> Arc<EngagementSession> {
        Arc::new(EngagementSession::new(Arc::new(Catalog::seed())))
    }

    async fn read_json_body(response: Response) -> Value {
        let body = axum::body::to_bytes(response.into_body(), 64 * 1024)
            .await
            .expect("read body");
        serde_json::from_slice(&body).expect("json payload")
    }

    #[tokio::test]
    async fn post_action_moves_listing_between_buckets() {
        let session = session();
        let app = engagement_router(session.clone());

        let response = app
            .clone()
            .oneshot(
                Request::post("/api/engagements/5/contact")
                    .body(Body::empty())
                    .expect("request"),
            )
            .await
            .expect("response");
        assert_eq!(response.status(), StatusCode::OK);

        let response = app
            .oneshot(
                Request::post("/api/engagements/5/schedule")
                    .body(Body::empty())
                    .expect("request"),
            )
            .await
            .expect("response");
        let body = read_json_body(response).await;
        assert_eq!(body["listingId"], "5");
        assert_eq!(body["bucket"], "scheduled");
        assert_eq!(body["label"], "Tour Scheduled");
        assert_eq!(body["changed"], true);
        assert_eq!(body["actions"], serde_json::json!(["apply"]));

        assert_eq!(
            session.bucket_of(&ListingId::from("5")),
            Some(EngagementBucket::Scheduled)
        );
        assert_eq!(session.counts().in_contact, 0);
    }

    #[tokio::test]
    async fn unknown_action_is_not_found() {
        let response = engagement_router(session())
            .oneshot(
                Request::post("/api/engagements/5/archive")
                    .body(Body::empty())
                    .expect("request"),
            )
            .await
            .expect("response");
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn delete_is_idempotent_and_status_reports_untracked() {
        let session = session();
        session.mark_applied(&ListingId::from("2"));
        let app = engagement_router(session.clone());

        for _ in 0..2 {
            let response = app
                .clone()
                .oneshot(
                    Request::delete("/api/engagements/2")
                        .body(Body::empty())
                        .expect("request"),
                )
                .await
                .expect("response");
            assert_eq!(response.status(), StatusCode::NO_CONTENT);
        }

        let response = app
            .oneshot(
                Request::get("/api/engagements/2")
                    .body(Body::empty())
                    .expect("request"),
            )
            .await
            .expect("response");
        let body = read_json_body(response).await;
        assert!(body["bucket"].is_null());
        assert_eq!(body["actions"], serde_json::json!(["contact"]));
    }

    #[tokio::test]
    async fn dashboard_lists_counts() {
        let session = session();
        session.mark_in_contact(&ListingId::from("1"));
        session.mark_applied(&ListingId::from("6"));

        let response = engagement_router(session)
            .oneshot(
                Request::get("/api/engagements")
                    .body(Body::empty())
                    .expect("request"),
            )
            .await
            .expect("response");
        let body = read_json_body(response).await;
        assert_eq!(body["counts"]["inContact"], 1);
        assert!(body["counts"].get("in_contact").is_none());
        assert_eq!(body["counts"]["applied"], 1);
        assert_eq!(body["buckets"][0]["bucket"], "applied");
        assert_eq!(body["buckets"][0]["listings"][0]["id"], "6");
    }
}
