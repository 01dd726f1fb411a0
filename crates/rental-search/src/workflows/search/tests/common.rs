use std::sync::Arc;

use axum::response::Response;
use serde_json::Value;

use crate::workflows::catalog::{Catalog, Listing};
use crate::workflows::engagement::EngagementSession;
use crate::workflows::search::criteria::FilterCriteria;
use crate::workflows::search::parser::CannedQueryParser;
use crate::workflows::search::router::SearchState;
use crate::workflows::search::service::SearchService;

pub(super) fn catalog() -> Arc<Catalog> {
    Arc::new(Catalog::seed())
}

pub(super) fn ids<'a, I>(listings: I) -> Vec<String>
where
    I: IntoIterator<Item = &'a Listing>,
{
    listings
        .into_iter()
        .map(|listing| listing.id.to_string())
        .collect()
}

pub(super) fn two_bed_under_4500() -> FilterCriteria {
    FilterCriteria {
        bedrooms: Some(2),
        max_price: Some(4500),
        ..FilterCriteria::default()
    }
}

pub(super) fn canned_parser() -> CannedQueryParser {
    CannedQueryParser::new()
        .with_reply("2 bedroom under $4500", two_bed_under_4500())
        .with_reply(
            "pet friendly in oakland",
            FilterCriteria {
                city: Some("oakland".to_string()),
                pet_friendly: Some(true),
                ..FilterCriteria::default()
            },
        )
        .with_failure("anything nice", "completion backend timed out")
}

pub(super) fn build_state() -> SearchState<CannedQueryParser> {
    let catalog = catalog();
    SearchState {
        service: Arc::new(SearchService::new(
            Arc::clone(&catalog),
            Arc::new(canned_parser()),
        )),
        session: Arc::new(EngagementSession::new(catalog)),
    }
}

pub(super) async fn read_json_body(response: Response) -> Value {
    let body = axum::body::to_bytes(response.into_body(), 64 * 1024)
        .await
        .expect("read body");
    serde_json::from_slice(&body).expect("json payload")
}
