use metrics_exporter_prometheus::PrometheusHandle;
use std::sync::atomic::AtomicBool;
use std::sync::Arc;
use tracing::info;
use vetclaim_ai::caselaw::CaseLawIndex;
use vetclaim_ai::claims::{ClaimAnalyzer, ClaimsState, ConditionCatalog};
use vetclaim_ai::config::CatalogConfig;
use vetclaim_ai::error::AppError;

#[derive(Clone)]
pub(crate) struct AppState {
    pub(crate) readiness: Arc<AtomicBool>,
    pub(crate) metrics: Arc<PrometheusHandle>,
}

/// Catalog from `APP_CATALOG_PATH` when configured, otherwise the built-in tables.
pub(crate) fn load_catalog(config: &CatalogConfig) -> Result<Arc<ConditionCatalog>, AppError> {
    let catalog = match &config.path {
        Some(path) => {
            info!(path = %path.display(), "loading condition catalog from file");
            ConditionCatalog::from_path(path)?
        }
        None => ConditionCatalog::standard(),
    };
    Ok(Arc::new(catalog))
}

pub(crate) fn build_analyzer(config: &CatalogConfig) -> Result<ClaimAnalyzer, AppError> {
    Ok(ClaimAnalyzer::new(load_catalog(config)?))
}

pub(crate) fn build_claims_state(config: &CatalogConfig) -> Result<ClaimsState, AppError> {
    Ok(ClaimsState::new(
        Arc::new(build_analyzer(config)?),
        Arc::new(CaseLawIndex::standard()),
    ))
}
