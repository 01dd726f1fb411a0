use metrics_exporter_prometheus::PrometheusHandle;
use rental_search::workflows::catalog::{Catalog, CatalogError, CatalogImporter};
use rental_search::workflows::engagement::EngagementSession;
use rental_search::workflows::search::{KeywordQueryParser, SearchService, SearchState};
use std::path::Path;
use std::sync::atomic::AtomicBool;
use std::sync::Arc;

#[derive(Clone)]
pub(crate) struct AppState {
    pub(crate) readiness: Arc<AtomicBool>,
    pub(crate) metrics: Arc<PrometheusHandle>,
}

/// Loads the catalog at `path`, or the built-in seed listings when none is configured.
pub(crate) fn load_catalog(path: Option<&Path>) -> Result<Arc<Catalog>, CatalogError> {
    let catalog = match path {
        Some(path) => {
            let catalog = CatalogImporter::from_path(path)?;
            tracing::info!(path = %path.display(), listings = catalog.len(), "catalog imported");
            catalog
        }
        None => {
            let catalog = Catalog::seed();
            tracing::info!(listings = catalog.len(), "using built-in seed catalog");
            catalog
        }
    };

    Ok(Arc::new(catalog))
}

/// Search service backed by the offline keyword parser, tuned to the catalog's places.
pub(crate) fn keyword_search_service(
    catalog: Arc<Catalog>,
) -> Arc<SearchService<KeywordQueryParser>> {
    let parser = Arc::new(KeywordQueryParser::from_catalog(&catalog));
    Arc::new(SearchService::new(catalog, parser))
}

pub(crate) fn search_state(catalog: Arc<Catalog>) -> SearchState<KeywordQueryParser> {
    SearchState {
        service: keyword_search_service(Arc::clone(&catalog)),
        session: Arc::new(EngagementSession::new(catalog)),
    }
}
