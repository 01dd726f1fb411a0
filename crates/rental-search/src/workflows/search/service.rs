use std::sync::Arc;

use serde::Serialize;

use crate::workflows::catalog::{Catalog, Listing};

use super::criteria::FilterCriteria;
use super::engine::FilterEngine;
use super::parser::{QueryParseError, QueryParser};

/// Result of one free-text search.
#[derive(Debug, Clone, Serialize)]
pub struct SearchOutcome {
    pub query: String,
    pub criteria: FilterCriteria,
    pub listings: Vec<Listing>,
    /// Set when the parser failed and the whole catalog was returned instead.
    pub degraded: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

impl SearchOutcome {
    pub fn count(&self) -> usize {
        self.listings.len()
    }
}

/// Composes a query parser with the filter engine over a shared catalog.
pub struct SearchService<P: ?Sized> {
    catalog: Arc<Catalog>,
    parser: Arc<P>,
}

impl<P> SearchService<P>
where
    P: QueryParser + ?Sized,
{
    pub fn new(catalog: Arc<Catalog>, parser: Arc<P>) -> Self {
        Self { catalog, parser }
    }

    pub fn catalog(&self) -> &Arc<Catalog> {
        &self.catalog
    }

    pub fn parse(&self, query: &str) -> Result<FilterCriteria, QueryParseError> {
        self.parser.parse(query)
    }

    /// Matching listings in catalog order.
    pub fn filter(&self, criteria: &FilterCriteria) -> Vec<Listing> {
        FilterEngine::new(criteria)
            .apply(self.catalog.iter())
            .into_iter()
            .cloned()
            .collect()
    }

    /// Parses and filters. A parser failure does not fail the search: the
    /// criteria fall back to unconstrained and every listing is returned.
    pub fn search(&self, query: &str) -> SearchOutcome {
        let (criteria, degraded, message) = match self.parser.parse(query) {
            Ok(criteria) => (criteria, false, None),
            Err(err) => {
                tracing::warn!(error = %err, query, "query parsing failed; showing all listings");
                (
                    FilterCriteria::unconstrained(),
                    true,
                    Some(format!("could not interpret query ({err}); showing all listings")),
                )
            }
        };

        let listings = self.filter(&criteria);
        tracing::info!(
            query,
            constraints = ?criteria.describe(),
            matched = listings.len(),
            catalog = self.catalog.len(),
            degraded,
            "search completed"
        );

        SearchOutcome {
            query: query.to_string(),
            criteria,
            listings,
            degraded,
            message,
        }
    }
}
