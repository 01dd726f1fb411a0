use std::sync::Arc;

use axum::{
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::{get, post},
    Json, Router,
};
use serde::{Deserialize, Serialize};
use serde_json::json;

use crate::workflows::catalog::Listing;
use crate::workflows::engagement::EngagementSession;

use super::criteria::FilterCriteria;
use super::parser::{QueryParseError, QueryParser};
use super::service::SearchService;

/// Router state: the search service plus the session whose result set it updates.
pub struct SearchState<P: ?Sized> {
    pub service: Arc<SearchService<P>>,
    pub session: Arc<EngagementSession>,
}

impl<P: ?Sized> Clone for SearchState<P> {
    fn clone(&self) -> Self {
        Self {
            service: Arc::clone(&self.service),
            session: Arc::clone(&self.session),
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct SearchRequest {
    pub query: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct SearchResponse {
    pub success: bool,
    pub count: usize,
    pub properties: Vec<Listing>,
    pub criteria: FilterCriteria,
    pub degraded: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

#[derive(Debug, Clone, Serialize)]
pub struct ListingsResponse {
    pub count: usize,
    pub properties: Vec<Listing>,
}

impl From<Vec<Listing>> for ListingsResponse {
    fn from(properties: Vec<Listing>) -> Self {
        Self {
            count: properties.len(),
            properties,
        }
    }
}

/// Router builder exposing free-text search, parse-only, and structured filtering.
pub fn search_router<P>(state: SearchState<P>) -> Router
where
    P: QueryParser + ?Sized + 'static,
{
    Router::new()
        .route("/api/search", post(search_handler::<P>))
        .route("/api/parse-search", post(parse_handler::<P>))
        .route("/api/filter", post(filter_handler::<P>))
        .route("/api/results", get(results_handler::<P>))
        .with_state(state)
}

pub(crate) async fn search_handler<P>(
    State(state): State<SearchState<P>>,
    Json(request): Json<SearchRequest>,
) -> Json<SearchResponse>
where
    P: QueryParser + ?Sized + 'static,
{
    let outcome = state.service.search(&request.query);
    state.session.record_results(&outcome.listings);

    Json(SearchResponse {
        success: true,
        count: outcome.count(),
        properties: outcome.listings,
        criteria: outcome.criteria,
        degraded: outcome.degraded,
        message: outcome.message,
    })
}

pub(crate) async fn parse_handler<P>(
    State(state): State<SearchState<P>>,
    Json(request): Json<SearchRequest>,
) -> Response
where
    P: QueryParser + ?Sized + 'static,
{
    match state.service.parse(&request.query) {
        Ok(filters) => (StatusCode::OK, Json(json!({ "filters": filters }))).into_response(),
        Err(QueryParseError::Empty) => {
            let payload = json!({ "error": QueryParseError::Empty.to_string() });
            (StatusCode::BAD_REQUEST, Json(payload)).into_response()
        }
        Err(err) => {
            let payload = json!({ "error": err.to_string() });
            (StatusCode::UNPROCESSABLE_ENTITY, Json(payload)).into_response()
        }
    }
}

pub(crate) async fn filter_handler<P>(
    State(state): State<SearchState<P>>,
    Json(criteria): Json<FilterCriteria>,
) -> Json<ListingsResponse>
where
    P: QueryParser + ?Sized + 'static,
{
    let listings = state.service.filter(&criteria);
    state.session.record_results(&listings);
    Json(ListingsResponse::from(listings))
}

pub(crate) async fn results_handler<P>(State(state): State<SearchState<P>>) -> Json<ListingsResponse>
where
    P: QueryParser + ?Sized + 'static,
{
    Json(ListingsResponse::from(state.session.results()))
}
